use criterion::{criterion_group, criterion_main, Criterion, black_box};

use voxel_layout::core::rng_from_seed;
use voxel_layout::layout::{extract_boxes, CaveLayout, WallsLayout};
use voxel_layout::voxel::VoxelGrid;
use voxel_layout::{LayoutConfig, LayoutGenerator};

fn bench_extract_walls(c: &mut Criterion) {
    let mut rng = rng_from_seed(1);
    let mut layout = WallsLayout::new(4, LayoutConfig::default());
    layout.init(&mut rng);
    let mut grid = VoxelGrid::new();
    layout.generate(&mut grid, &mut rng);

    c.bench_function("extract_boxes_walls", |b| {
        b.iter(|| extract_boxes(black_box(&grid)));
    });
}

fn bench_extract_cave(c: &mut Criterion) {
    let mut rng = rng_from_seed(1);
    let mut layout = CaveLayout::new(4, LayoutConfig::default());
    layout.init(&mut rng);
    let mut grid = VoxelGrid::new();
    layout.generate(&mut grid, &mut rng);

    c.bench_function("extract_boxes_cave", |b| {
        b.iter(|| extract_boxes(black_box(&grid)));
    });
}

fn bench_cave_generate(c: &mut Criterion) {
    c.bench_function("cave_generate", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            let mut rng = rng_from_seed(seed);
            let mut layout = CaveLayout::new(4, LayoutConfig::default());
            layout.init(&mut rng);
            let mut grid = VoxelGrid::new();
            layout.generate(&mut grid, &mut rng);
            grid
        });
    });
}

criterion_group!(benches, bench_extract_walls, bench_extract_cave, bench_cave_generate);
criterion_main!(benches);
