//! Search benchmarks.
//!
//! Measures query latency for the filter-as-you-type path. Every keystroke
//! issues one query, so these numbers are what a user feels.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `query/keystrokes` | Successive prefixes of one word, as typed, on a 50k-node store |
//! | `query/fallback` | Queries longer than the n-gram cap (linear scan) |
//! | `scaling` | One short query as the store grows from 1k to 50k nodes |
//!
//! # Key performance targets (aspirational, not enforced in CI yet)
//!
//! - Short query on a 50k-node store: < 1 ms. Posting lists are stored
//!   ranked, so an indexed query is one FST lookup plus cloning the hit ids;
//!   `query/keystrokes/s` (the widest hit list) is the case to watch.
//! - `query/fallback` is linear in the store and is not held to that target.
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench search_bench
//! open target/criterion/report/index.html
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use doctree::config::IndexConfig;
use doctree::{ForestEntry, SearchIndex, TreeBuilder};
use std::hint::black_box;

const STEMS: &[&str] = &[
    "Spike", "Lfp", "Filter", "Record", "Audio", "Signal", "Channel", "Event", "Data", "Editor",
    "Display", "Thread", "Button", "Canvas", "Processor", "Node",
];

/// `roots` top-level classes, each with `per_root` children, labels built from
/// `STEMS` so every stem appears throughout the store.
fn forest(roots: usize, per_root: usize) -> Vec<ForestEntry> {
    (0..roots)
        .map(|r| {
            let children = (0..per_root)
                .map(|c| {
                    let i = r * per_root + c;
                    let label = format!(
                        "{}{}{}",
                        STEMS[i % STEMS.len()],
                        STEMS[(i / STEMS.len()) % STEMS.len()],
                        i
                    );
                    ForestEntry::leaf(label.clone(), format!("class{label}.html"))
                })
                .collect();
            let label = format!("{}Base{r}", STEMS[r % STEMS.len()]);
            ForestEntry::leaf(label, "").with_children(children)
        })
        .collect()
}

fn index_of(nodes: usize, max_ngram_len: usize) -> SearchIndex {
    let per_root = 49;
    let store = TreeBuilder::from_entries(&forest(nodes / (per_root + 1), per_root)).unwrap();
    SearchIndex::build(&store, &IndexConfig { max_ngram_len }).unwrap()
}

// ---------------------------------------------------------------------------
// Typing
// ---------------------------------------------------------------------------

fn keystroke_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("query/keystrokes");
    let index = index_of(50_000, 32);

    for prefix in ["s", "sp", "spi", "spik", "spike", "spikedisp"] {
        group.bench_with_input(BenchmarkId::from_parameter(prefix), &prefix, |b, q| {
            b.iter(|| black_box(index.search(black_box(q))))
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Fallback scan
// ---------------------------------------------------------------------------

fn fallback_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("query/fallback");
    let capped = index_of(50_000, 8);

    group.bench_function("long_query_50k", |b| {
        b.iter(|| black_box(capped.search(black_box("processordisplay"))))
    });
    group.finish();
}

// ---------------------------------------------------------------------------
// Scaling
// ---------------------------------------------------------------------------

fn scaling_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for nodes in [1_000usize, 10_000, 50_000] {
        let index = index_of(nodes, 32);
        group.throughput(Throughput::Elements(nodes as u64));
        group.bench_with_input(BenchmarkId::new("editor", nodes), &index, |b, index| {
            b.iter(|| black_box(index.search(black_box("editor"))))
        });
    }
    group.finish();
}

criterion_group!(benches, keystroke_bench, fallback_bench, scaling_bench);
criterion_main!(benches);
