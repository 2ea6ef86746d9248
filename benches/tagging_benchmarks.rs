//! Benchmarks for segmentation, tagging and batch processing.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use proverb_tagger::pipeline::ProverbPipeline;
use proverb_tagger::text::{PosTagger, ProverbSegmenter};
use proverb_tagger::RawDocument;

const COLLECTION: &str = include_str!("../tests/fixtures/Enciclopedia 7-17.txt");

fn bench_segment(c: &mut Criterion) {
    let segmenter = ProverbSegmenter::new();
    c.bench_function("segment_collection", |b| {
        b.iter(|| segmenter.segment(black_box(COLLECTION)))
    });
}

fn bench_tag(c: &mut Criterion) {
    let proverbs = ProverbSegmenter::new().segment(COLLECTION);
    let tagger = PosTagger::new();
    c.bench_function("tag_collection", |b| {
        b.iter(|| {
            proverbs
                .iter()
                .map(|p| tagger.tag(black_box(p)).len())
                .sum::<usize>()
        })
    });
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("process_batch");
    let pipeline = ProverbPipeline::new();

    for size in [1, 8, 64].iter() {
        let docs: Vec<RawDocument> = (0..*size)
            .map(|i| RawDocument::new(i + 1, format!("colectie_Page_{:03}_ocred.pdf", i), COLLECTION))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| pipeline.process_batch(black_box(&docs)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_segment, bench_tag, bench_batch);
criterion_main!(benches);
