use criterion::{criterion_group, criterion_main, Criterion};
use phraseforge::corpus::{generate_phrases, normalize, tokenize};
use phraseforge::frequency::PhraseCounter;
use phraseforge::trainer::train_text;
use std::hint::black_box;

fn sample_corpus() -> String {
    let sentence = "It is a capital mistake to theorize before one has data. \
                    Insensibly one begins to twist facts to suit theories, \
                    instead of theories to suit facts. ";
    sentence.repeat(500)
}

fn bench_counting(c: &mut Criterion) {
    let corpus = sample_corpus();
    let cleaned = normalize(&corpus);
    let tokens = tokenize(&cleaned);
    let phrases = generate_phrases(&tokens);

    c.bench_function("phrase_counter", |b| {
        b.iter(|| {
            let counter = PhraseCounter::from_phrases(black_box(&phrases).iter().cloned());
            black_box(counter.most_common(5000))
        })
    });

    c.bench_function("train_text", |b| {
        b.iter(|| black_box(train_text(black_box(&corpus))))
    });
}

criterion_group!(benches, bench_counting);
criterion_main!(benches);
