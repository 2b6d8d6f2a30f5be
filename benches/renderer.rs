use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use galaxy_cards::config::LayoutConfig;
use galaxy_cards::ir::{GalaxyArm, Profile, parse_profile};
use galaxy_cards::layout::{CardKind, compute_layout};
use galaxy_cards::render::render_svg;
use galaxy_cards::theme::Theme;
use std::hint::black_box;

fn dense_profile(arms: usize, items_per_arm: usize) -> Profile {
    let galaxy_arms = (0..arms)
        .map(|a| GalaxyArm {
            name: format!("Arm {a}"),
            color: String::new(),
            items: (0..items_per_arm).map(|i| format!("Skill {a}.{i}")).collect(),
        })
        .collect();
    Profile {
        galaxy_arms,
        ..Profile::default()
    }
}

fn fixture(name: &str) -> &'static str {
    match name {
        "profile_medium" => include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/benches/fixtures/profile_medium.json5"
        )),
        _ => panic!("unknown fixture"),
    }
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let input = fixture("profile_medium");
    group.bench_with_input(BenchmarkId::from_parameter("profile_medium"), input, |b, data| {
        b.iter(|| {
            let profile = parse_profile(black_box(data)).expect("parse failed");
            black_box(profile.total_items());
        });
    });
    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let theme = Theme::cosmic();
    let config = LayoutConfig::default();
    let profile = parse_profile(fixture("profile_medium")).expect("parse failed");
    for kind in CardKind::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(kind.file_stem()),
            &profile,
            |b, profile| {
                b.iter(|| {
                    let layout =
                        compute_layout(kind, black_box(profile), &theme, &config).expect("layout failed");
                    black_box(layout.height);
                });
            },
        );
    }
    group.finish();
}

fn bench_dense_constellation(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_dense_constellation");
    let theme = Theme::cosmic();
    let config = LayoutConfig::default();
    for (arms, items) in [(4usize, 25usize), (8, 100), (12, 400)] {
        let name = format!("arms_{arms}_items_{items}");
        let profile = dense_profile(arms, items);
        group.bench_with_input(BenchmarkId::from_parameter(name), &profile, |b, profile| {
            b.iter(|| {
                let layout = compute_layout(
                    CardKind::SkillConstellation,
                    black_box(profile),
                    &theme,
                    &config,
                )
                .expect("layout failed");
                black_box(layout.width);
            });
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let theme = Theme::cosmic();
    let config = LayoutConfig::default();
    let profile = parse_profile(fixture("profile_medium")).expect("parse failed");
    for kind in CardKind::ALL {
        let layout = compute_layout(kind, &profile, &theme, &config).expect("layout failed");
        group.bench_with_input(
            BenchmarkId::from_parameter(kind.file_stem()),
            &layout,
            |b, layout| {
                b.iter(|| {
                    let svg = render_svg(black_box(layout), &theme, &config);
                    black_box(svg.len());
                });
            },
        );
    }
    group.finish();
}

fn bench_end_to_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("end_to_end");
    let theme = Theme::cosmic();
    let config = LayoutConfig::default();
    let input = fixture("profile_medium");
    group.bench_with_input(BenchmarkId::from_parameter("profile_medium"), input, |b, data| {
        b.iter(|| {
            let profile = parse_profile(black_box(data)).expect("parse failed");
            for kind in CardKind::ALL {
                let layout =
                    compute_layout(kind, &profile, &theme, &config).expect("layout failed");
                let svg = render_svg(&layout, &theme, &config);
                black_box(svg.len());
            }
        });
    });
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_parse, bench_layout, bench_dense_constellation, bench_render, bench_end_to_end
);
criterion_main!(benches);
