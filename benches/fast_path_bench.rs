use criterion::{black_box, criterion_group, criterion_main, Criterion};
use matrices::{DiagonalMatrix, Float, LowerTriangularMatrix, Matrix};

fn packed_triangle(n: usize, v: Float) -> Vec<Float> {
    vec![v; n * (n + 1) / 2]
}

pub fn lower_add_fast(c: &mut Criterion) {
    let n = 25;
    let a = black_box(Matrix::LowerTriangular(LowerTriangularMatrix::from_compact(
        n,
        packed_triangle(n, 1.23123),
    )));
    let b = black_box(Matrix::LowerTriangular(LowerTriangularMatrix::from_compact(
        n,
        packed_triangle(n, 1.23123),
    )));

    c.bench_function("lower_add_fast", |bench| bench.iter(|| a.add(&b)));
}

pub fn lower_add_promoted(c: &mut Criterion) {
    let n = 25;
    let a = black_box(Matrix::LowerTriangular(LowerTriangularMatrix::from_compact(
        n,
        packed_triangle(n, 1.23123),
    )));
    // a dense operand with the same values forces the promotion path
    let b = black_box(Matrix::Dense(
        LowerTriangularMatrix::from_compact(n, packed_triangle(n, 1.23123)).to_dense(),
    ));

    c.bench_function("lower_add_promoted", |bench| bench.iter(|| a.add(&b)));
}

pub fn diag_matmul_fast(c: &mut Criterion) {
    let n = 100;
    let a = black_box(Matrix::Diagonal(DiagonalMatrix::from_compact(vec![1.23123; n])));
    let b = black_box(Matrix::Diagonal(DiagonalMatrix::from_compact(vec![1.23123; n])));

    c.bench_function("diag_matmul_fast", |bench| bench.iter(|| a.matmul(&b)));
}

pub fn diag_matmul_promoted(c: &mut Criterion) {
    let n = 100;
    let a = black_box(Matrix::Diagonal(DiagonalMatrix::from_compact(vec![1.23123; n])));
    let b = black_box(Matrix::Dense(
        DiagonalMatrix::from_compact(vec![1.23123; n]).to_dense(),
    ));

    c.bench_function("diag_matmul_promoted", |bench| bench.iter(|| a.matmul(&b)));
}

criterion_group!(
    benches,
    lower_add_fast,
    lower_add_promoted,
    diag_matmul_fast,
    diag_matmul_promoted,
);
criterion_main!(benches);
