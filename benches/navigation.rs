// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for navigation operations.
//!
//! Measures the performance of:
//! - Transition selection over every screen pair
//! - A navigate/back round trip through the overflow screen
//! - Easing and frame computation for one animation step

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use storefront::navigation::animation::{ease, enter_frame};
use storefront::navigation::{select_transition, Navigator, Screen, ALL_SCREENS, PRIMARY_ORDER};

/// Benchmark selection for all 36 ordered pairs.
fn bench_select_transition(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");

    group.bench_function("select_transition_all_pairs", |b| {
        b.iter(|| {
            for &from in &ALL_SCREENS {
                for &to in &ALL_SCREENS {
                    black_box(select_transition(
                        black_box(from),
                        black_box(to),
                        &PRIMARY_ORDER,
                    ));
                }
            }
        });
    });

    group.finish();
}

/// Benchmark a drill-in and drill-out cycle on a live navigator.
fn bench_navigate_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");

    group.bench_function("navigate_back_cycle", |b| {
        let mut navigator = Navigator::new();
        navigator.navigate(Screen::More);
        b.iter(|| {
            black_box(navigator.navigate(black_box(Screen::Themes)));
            black_box(navigator.back());
        });
    });

    group.finish();
}

/// Benchmark the per-frame math of a transition.
fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");
    let transform = select_transition(Screen::More, Screen::Repositories, &PRIMARY_ORDER);

    group.bench_function("enter_frame", |b| {
        b.iter(|| black_box(enter_frame(&transform, ease(black_box(0.37)))));
    });

    group.finish();
}

criterion_group!(benches, bench_select_transition, bench_navigate_back, bench_frame);
criterion_main!(benches);
