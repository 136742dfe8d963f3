use criterion::{black_box, criterion_group, criterion_main, Criterion};
use bsplump::lump::{decode_lump, DecodeOptions};
use bsplump::{BrushSide, MapType};

fn lump_of(records: usize, stride: usize) -> Vec<u8> {
    (0..records * stride).map(|i| (i % 251) as u8).collect()
}

fn bench_brush_sides(c: &mut Criterion) {
    let source     = lump_of(65_536, 8);
    let raven      = lump_of(65_536, 12);
    let sequential = DecodeOptions { parallel_threshold: usize::MAX, ..DecodeOptions::default() };
    let parallel   = DecodeOptions { parallel_threshold: 0, ..DecodeOptions::default() };

    c.bench_function("source20_64k_sequential", |b| {
        b.iter(|| decode_lump::<BrushSide>(black_box(&source), MapType::Source20, &sequential))
    });
    c.bench_function("source20_64k_parallel", |b| {
        b.iter(|| decode_lump::<BrushSide>(black_box(&source), MapType::Source20, &parallel))
    });
    c.bench_function("raven_64k_sequential", |b| {
        b.iter(|| decode_lump::<BrushSide>(black_box(&raven), MapType::Raven, &sequential))
    });
}

fn bench_single_record(c: &mut Criterion) {
    let record = [0x00, 0x00, 0x80, 0x3F, 0x04, 0x00, 0x00, 0x00];
    c.bench_function("cod_single_side", |b| {
        b.iter(|| BrushSide::from_bytes(black_box(&record), MapType::CoD, 0))
    });
}

criterion_group!(benches, bench_brush_sides, bench_single_record);
criterion_main!(benches);
