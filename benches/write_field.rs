use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ndarray::Array4;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;

use vtk_file_io::{FileIoConfig, GridTopology, OutputFormat, VtkFileIo};

fn field3d_collect(n: usize) -> f32 {
    let array: Array4<f32> = ndarray::Array::random((3, n, n, n), Uniform::new(0., 10.));

    let container = vtk_file_io::Field3D::new(array.view());
    container.iter_points().sum()
}

fn write_field(n: usize, compress: bool) -> usize {
    let array: Array4<f32> = ndarray::Array::random((3, n, n, n), Uniform::new(0., 10.));
    let line: Vec<f64> = (0..n).map(|x| x as f64).collect();

    let config = FileIoConfig::new("bench", GridTopology::Cartesian).compress(compress);
    let mut io = VtkFileIo::new(config);
    io.set_mesh_lines([&line, &line, &line], [n, n, n], 1.0)
        .unwrap();
    io.add_vector_field("velocity", &array).unwrap();

    let mut writer: Vec<u8> = Vec::new();
    io.write_to(&mut writer, OutputFormat::Xml).unwrap();
    writer.len()
}

fn field3d_bench(c: &mut Criterion) {
    c.bench_function("field3d_collect 100", |b| {
        b.iter(|| field3d_collect(black_box(100)))
    });
}

fn write_field_bench(c: &mut Criterion) {
    c.bench_function("write binary 100", |b| {
        b.iter(|| write_field(black_box(100), false))
    });

    c.bench_function("write compressed 100", |b| {
        b.iter(|| write_field(black_box(100), true))
    });
}

criterion_group!(benches, field3d_bench, write_field_bench);
criterion_main!(benches);
