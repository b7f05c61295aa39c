// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_slider::{
    ControlInsets, SliderConfig, SliderState, SliderValue, ThumbCapture, closest_index,
    finger_state, round_to_step,
};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX)
    }
}

fn positions(count: usize, width: f64, seed: u64) -> Vec<Point> {
    let mut rng = Lcg::new(seed);
    (0..count)
        .map(|_| Point::new(rng.next_unit() * width, 5.0))
        .collect()
}

fn thumbs(count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| 1000.0 * i as f64 / count as f64)
        .collect()
}

fn bench_slider(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_slider");
    group.sample_size(50);

    let raws = positions(1_024, 1000.0, 0x511D_0000_0000_0001);
    group.bench_function("round_to_step(n=1024)", |b| {
        b.iter(|| {
            for p in &raws {
                black_box(round_to_step(black_box(p.x), 0.25, -3.0));
            }
        });
    });

    for &count in &[2_usize, 8, 64] {
        let sorted = thumbs(count);
        group.bench_function(format!("closest_index(thumbs={count})"), |b| {
            b.iter(|| {
                for p in &raws {
                    black_box(closest_index(&sorted, p.x, 1000.0).ok());
                }
            });
        });

        let config = SliderConfig::new(0.0, 1000.0).with_min_steps_between_values(2);
        let geometry = config.geometry(
            Rect::new(0.0, 0.0, 1000.0, 10.0),
            ControlInsets::new(4.0, 4.0),
        );
        group.bench_function(format!("finger_state(thumbs={count})"), |b| {
            b.iter(|| {
                for p in &raws {
                    let finger = finger_state(
                        Some(*p),
                        Some(&geometry),
                        &config,
                        &sorted,
                        true,
                        0.0,
                        ThumbCapture::Closest,
                    );
                    black_box(finger.ok());
                }
            });
        });
    }

    let config = SliderConfig::new(0.0, 1000.0).with_step(5.0);
    let geometry = config.geometry(Rect::new(0.0, 0.0, 1000.0, 10.0), ControlInsets::default());
    let path = positions(256, 1000.0, 0x511D_0000_0000_0002);
    group.bench_function("drag_session(moves=256)", |b| {
        b.iter_batched(
            || {
                let mut slider =
                    SliderState::uncontrolled(config, SliderValue::from([200.0, 800.0]))
                        .expect("valid slider config");
                slider.set_geometry(Some(geometry));
                slider
            },
            |mut slider| {
                let mut changes = 0_usize;
                let _ = slider.pointer_down(path[0], None, &mut ());
                for p in &path[1..] {
                    if let Ok(true) = slider.pointer_move(*p, &mut ()) {
                        changes += 1;
                    }
                }
                slider.pointer_up(&mut ());
                black_box((slider, changes));
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_slider);
criterion_main!(benches);
