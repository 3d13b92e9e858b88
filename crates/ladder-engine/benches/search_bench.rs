//! Ladder search benchmarks over a synthetic dictionary.

use criterion::{criterion_group, criterion_main, Criterion};
use ladder_core::Word;
use ladder_engine::{is_one_edit, LadderSearch, WordSet};

/// Every 3-letter word over the first `alphabet` lowercase letters.
fn synthetic_words(alphabet: u8) -> Vec<String> {
    let letters: Vec<char> = (b'a'..b'a' + alphabet).map(char::from).collect();
    let mut words = Vec::with_capacity(letters.len().pow(3));
    for &a in &letters {
        for &b in &letters {
            for &c in &letters {
                words.push([a, b, c].iter().collect());
            }
        }
    }
    words
}

fn adjacency_benchmark(c: &mut Criterion) {
    c.bench_function("is_one_edit_hit", |b| {
        b.iter(|| is_one_edit(std::hint::black_box("stone"), std::hint::black_box("store")))
    });
    c.bench_function("is_one_edit_early_exit", |b| {
        b.iter(|| is_one_edit(std::hint::black_box("stone"), std::hint::black_box("plank")))
    });
}

fn search_benchmark(c: &mut Criterion) {
    let words = synthetic_words(12);
    let mut dictionary = WordSet::load(words.iter().map(String::as_str)).unwrap();
    let start = Word::new("aaa");
    let goal = Word::new("lll");

    c.bench_function("ladder_search_1728_words", |b| {
        b.iter(|| {
            let mut engine = LadderSearch::new(&mut dictionary);
            std::hint::black_box(engine.search(&start, &goal).unwrap())
        })
    });
}

criterion_group!(benches, adjacency_benchmark, search_benchmark);
criterion_main!(benches);
