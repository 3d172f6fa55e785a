use criterion::{Criterion, black_box, criterion_group, criterion_main};
use seqcalc::Engine;

fn test_factorial() {
    black_box(Engine::default().factorial(2000).ok());
}

fn test_euler() {
    black_box(Engine::default().euler(i32::MAX).ok());
}

fn test_fibonacci() {
    black_box(Engine::default().fibonacci(40).ok());
}

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("test_factorial", |b| b.iter(test_factorial));
    c.bench_function("test_euler", |b| b.iter(test_euler));
    c.bench_function("test_fibonacci", |b| b.iter(test_fibonacci));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
