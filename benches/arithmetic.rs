//! Benchmarks for arithmetic operations

extern crate criterion;
extern crate bcnum;
extern crate oorandom;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bcnum::Number;

criterion_main!(arithmetic);

criterion_group!(
    name = arithmetic;
    config = Criterion::default().sample_size(300);
    targets = bench_arithmetic, bench_sqrt,
);

/// Pseudo-random decimal operands with up to `digits` digits and a
/// fractional tail, from a fixed seed so runs are comparable.
fn make_numbers(count: usize, digits: u32, seed: u64) -> Vec<Number> {
    let mut rng = oorandom::Rand64::new(seed.into());
    (0..count)
        .map(|_| {
            let mut text = String::new();
            for _ in 0..digits {
                text.push((b'0' + (rng.rand_range(0..10) as u8)) as char);
            }
            text.push('.');
            for _ in 0..digits / 2 {
                text.push((b'0' + (rng.rand_range(0..10) as u8)) as char);
            }
            Number::parse(&text, u64::from(digits))
        })
        .collect()
}

fn bench_arithmetic(c: &mut Criterion) {
    let nums = make_numbers(100, 40, 0x5eed);
    let pairs: Vec<(&Number, &Number)> = nums
        .iter()
        .zip(nums.iter().rev())
        .collect();

    c.bench_function("addition", |b| {
        let mut iter = pairs.iter().cycle();
        b.iter(|| {
            let &(x, y) = iter.next().unwrap();
            black_box(x.add(y, 20));
        });
    });

    c.bench_function("multiplication", |b| {
        let mut iter = pairs.iter().cycle();
        b.iter(|| {
            let &(x, y) = iter.next().unwrap();
            black_box(x.mul(y, 20));
        });
    });

    c.bench_function("division", |b| {
        let mut iter = pairs.iter().cycle();
        b.iter(|| {
            let &(x, y) = iter.next().unwrap();
            if !y.is_zero() {
                black_box(x.div(y, 20).unwrap());
            }
        });
    });
}

fn bench_sqrt(c: &mut Criterion) {
    let nums = make_numbers(100, 40, 0xcafe);

    c.bench_function("sqrt", |b| {
        let mut iter = nums.iter().cycle();
        b.iter(|| {
            let mut n = iter.next().unwrap().clone();
            n.sqrt(30).unwrap();
            black_box(n);
        });
    });
}
