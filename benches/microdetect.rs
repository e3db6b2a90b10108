use criterion::{criterion_group, criterion_main, Criterion};
use microdetect::catalog::{
    BRIGHT_FIBRIL, CORONA, CROSS, LINES_SAMPLE, MIXED_SAMPLE, SPIKED_CORONA, SPIKED_CORONA_SAMPLE,
};
use microdetect::{
    AnalyzerConfig, Catalog, DiagnosticAnalyzer, LinearRecognizer, PatternRecognizer, Sample,
};
use std::hint::black_box;
use std::sync::Arc;

fn make_sample(width: usize, height: usize) -> Sample {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let value = ((x * 13) ^ (y * 7) ^ (x * y)) & 0x0F;
            data.push(value as u8);
        }
    }
    Sample::from_raw("synthetic", data, width, height).unwrap()
}

fn bench_pattern(c: &mut Criterion) {
    let catalog = Catalog::predefined().unwrap();
    let mixed = catalog.sample(MIXED_SAMPLE).unwrap();
    let spiked_sample = catalog.sample(SPIKED_CORONA_SAMPLE).unwrap();
    let large = make_sample(256, 256);

    let cross = PatternRecognizer::new(Arc::clone(catalog.pattern(CROSS).unwrap()));
    let corona = PatternRecognizer::new(Arc::clone(catalog.pattern(CORONA).unwrap()));
    let spiked = PatternRecognizer::new(Arc::clone(catalog.pattern(SPIKED_CORONA).unwrap()));

    c.bench_function("pattern_cross_mixed", |b| {
        b.iter(|| black_box(cross.detect(mixed).unwrap()));
    });
    c.bench_function("pattern_corona_256", |b| {
        b.iter(|| black_box(corona.detect(&large).unwrap()));
    });
    c.bench_function("pattern_spiked_corona", |b| {
        b.iter(|| black_box(spiked.detect(spiked_sample).unwrap()));
    });
}

fn bench_linear(c: &mut Criterion) {
    let catalog = Catalog::predefined().unwrap();
    let lines = catalog.sample(LINES_SAMPLE).unwrap();
    let large = make_sample(256, 256);
    let bright = LinearRecognizer::new(Arc::clone(catalog.fibril(BRIGHT_FIBRIL).unwrap()));

    c.bench_function("linear_bright_lines", |b| {
        b.iter(|| black_box(bright.detect(lines).unwrap()));
    });
    c.bench_function("linear_bright_256", |b| {
        b.iter(|| black_box(bright.detect(&large).unwrap()));
    });
}

fn bench_analyzer(c: &mut Criterion) {
    let catalog = Catalog::predefined().unwrap();
    let study = catalog.study("bench").unwrap();

    let mut analyzer = DiagnosticAnalyzer::new();
    for recognizer in catalog.recognizers() {
        analyzer.add_recognizer(recognizer);
    }

    c.bench_function("analyze_catalog_study", |b| {
        b.iter(|| black_box(analyzer.analyze(&study).unwrap()));
    });

    if cfg!(feature = "rayon") {
        let parallel = analyzer
            .clone()
            .with_config(AnalyzerConfig { parallel: true });
        c.bench_function("analyze_catalog_study_parallel", |b| {
            b.iter(|| black_box(parallel.analyze(&study).unwrap()));
        });
    }
}

criterion_group!(benches, bench_pattern, bench_linear, bench_analyzer);
criterion_main!(benches);
