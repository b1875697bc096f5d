use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use space_scenes::animation;
use space_scenes::renderer::build_instances;
use space_scenes::scenes::{build_galaxy, SceneList};
use space_scenes::SceneKind;

/// Benchmark: all three scenes, galaxy star field included
fn bench_scene_list_build(c: &mut Criterion) {
    c.bench_function("scene_list_build", |b| {
        b.iter(|| SceneList::build(&mut ChaCha8Rng::seed_from_u64(black_box(1))))
    });
}

fn bench_galaxy_build(c: &mut Criterion) {
    c.bench_function("galaxy_build", |b| {
        b.iter(|| build_galaxy(&mut ChaCha8Rng::seed_from_u64(black_box(1))))
    });
}

/// Benchmark: one animation step per scene kind
fn bench_animation_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("animation_step");
    let mut scenes = SceneList::build(&mut ChaCha8Rng::seed_from_u64(1));

    for kind in SceneKind::ALL {
        let mut t = 1_700_000_000.0;
        group.bench_function(kind.name(), |b| {
            b.iter(|| {
                t += 1.0 / 60.0;
                animation::step(&mut scenes, black_box(kind), t);
            })
        });
    }

    group.finish();
}

/// Benchmark: per-frame instance data for the station hierarchy
fn bench_build_instances(c: &mut Criterion) {
    let scenes = SceneList::build(&mut ChaCha8Rng::seed_from_u64(1));
    let station = scenes.get(SceneKind::SpaceStation);

    c.bench_function("build_instances_station", |b| {
        b.iter(|| build_instances(black_box(station)))
    });
}

criterion_group!(
    benches,
    bench_scene_list_build,
    bench_galaxy_build,
    bench_animation_step,
    bench_build_instances
);
criterion_main!(benches);
