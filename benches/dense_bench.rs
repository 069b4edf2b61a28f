use criterion::{black_box, criterion_group, criterion_main, Criterion};
use matrices::{DenseMatrix, Float};

fn full_grid(nrows: usize, ncols: usize, v: Float) -> Vec<Vec<Float>> {
    vec![vec![v; ncols]; nrows]
}

pub fn add(c: &mut Criterion) {
    let n = 25;
    let this = black_box(DenseMatrix::from_grid(n, n, &full_grid(n, n, 1.23123)).unwrap());
    let other = black_box(DenseMatrix::from_grid(n, n, &full_grid(n, n, 1.23123)).unwrap());

    c.bench_function("dense_add", |b| b.iter(|| this.add(&other)));
}

pub fn sub(c: &mut Criterion) {
    let n = 25;
    let this = black_box(DenseMatrix::from_grid(n, n, &full_grid(n, n, 1.23123)).unwrap());
    let other = black_box(DenseMatrix::from_grid(n, n, &full_grid(n, n, 1.23123)).unwrap());

    c.bench_function("dense_sub", |b| b.iter(|| this.sub(&other)));
}

pub fn scale(c: &mut Criterion) {
    let n = 25;
    let this = black_box(DenseMatrix::from_grid(n, n, &full_grid(n, n, 1.23123)).unwrap());

    c.bench_function("dense_scale", |b| b.iter(|| this.scale(black_box(22.0))));
}

pub fn matmul(c: &mut Criterion) {
    let n = 30;
    let this = black_box(DenseMatrix::from_grid(n, n, &full_grid(n, n, 1.23123)).unwrap());
    let other = black_box(DenseMatrix::from_grid(n, n, &full_grid(n, n, 1.23123)).unwrap());

    c.bench_function("dense_matmul", |b| b.iter(|| this.matmul(&other)));
}

criterion_group!(benches, add, sub, scale, matmul);
criterion_main!(benches);
