#![allow(dead_code)]

use criterion::PlotConfiguration;
use rand::distributions::{Distribution, Uniform};
use rand::prelude::ThreadRng;

pub const SIZES: [usize; 8] = [
    1 << 6,
    1 << 10,
    1 << 12,
    1 << 14,
    1 << 16,
    1 << 18,
    1 << 20,
    1 << 22,
];

pub fn fill_random_words(rng: &mut ThreadRng, len: usize) -> Vec<u32> {
    let sample = Uniform::new_inclusive(0, u32::MAX);

    let mut vec = Vec::with_capacity(len);
    for _ in 0..len {
        vec.push(sample.sample(rng));
    }

    vec
}

pub fn fill_random_bytes(rng: &mut ThreadRng, len: usize) -> Vec<u8> {
    let sample = Uniform::new_inclusive(0, u8::MAX);

    let mut vec = Vec::with_capacity(len);
    for _ in 0..len {
        vec.push(sample.sample(rng));
    }

    vec
}

pub fn plot_config() -> PlotConfiguration {
    PlotConfiguration::default().summary_scale(criterion::AxisScale::Logarithmic)
}
