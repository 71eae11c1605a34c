use suggesting::node::TrieAtom;
use suggesting::trie::{Trie, TrieString};

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use rand::{distributions::Alphanumeric, thread_rng, Rng};

static POPULATION_SIZE: usize = 10000;

fn random_word(max: usize) -> Vec<char> {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(thread_rng().gen_range(1..=max))
        .map(char::from)
        .collect()
}

fn make_words(max: usize) -> Vec<Vec<char>> {
    (0..POPULATION_SIZE).map(|_| random_word(max)).collect()
}

fn make_trie(words: &[Vec<char>]) -> TrieString {
    let mut trie = Trie::new();
    for w in words {
        insert_trie(&mut trie, w.iter().copied());
    }
    trie
}

fn trie_insert(c: &mut Criterion) {
    let words = make_words(16);
    c.bench_function("trie insert", |b| b.iter(|| make_trie(&words)));
}

fn trie_insert_delete(c: &mut Criterion) {
    let words = make_words(16);
    c.bench_function("trie delete", |b| {
        b.iter_batched(
            || make_trie(&words),
            |mut trie| {
                for w in &words {
                    let _ = trie.delete(w.iter().copied());
                }
            },
            BatchSize::LargeInput,
        )
    });
}

fn search(c: &mut Criterion) {
    static BASE_SIZE: usize = 16;

    let mut group = c.benchmark_group("search");
    for size in [BASE_SIZE, 4 * BASE_SIZE, 16 * BASE_SIZE, 64 * BASE_SIZE].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        let words = make_words(*size);
        let trie = make_trie(&words);
        group.bench_with_input(
            BenchmarkId::new("random search (char)", size),
            size,
            |b, &size| {
                b.iter_batched(
                    || random_word(size),
                    |input| search_trie(&trie, input),
                    BatchSize::SmallInput,
                )
            },
        );
        group.bench_with_input(
            BenchmarkId::new("always search (char)", size),
            size,
            |b, _| {
                b.iter_batched(
                    || words[thread_rng().gen_range(0..POPULATION_SIZE)].clone(),
                    |input| search_trie(&trie, input),
                    BatchSize::SmallInput,
                )
            },
        );
    }
    group.finish();
}

fn autocomplete(c: &mut Criterion) {
    let words = make_words(16);
    let trie = make_trie(&words);
    c.bench_function("autocomplete: char prefixes (len: 1..=4)", |b| {
        b.iter_batched(
            || random_word(4),
            |prefix| trie.autocomplete(prefix),
            BatchSize::SmallInput,
        )
    });
}

fn render(c: &mut Criterion) {
    let words = make_words(16);
    let trie = make_trie(&words);
    c.bench_function("render", |b| b.iter(|| trie.to_string()));
}

criterion_group!(
    benches,
    trie_insert,
    trie_insert_delete,
    search,
    autocomplete,
    render
);
criterion_main!(benches);

fn insert_trie<S: IntoIterator<Item = A>, A: TrieAtom>(trie: &mut Trie<A>, input: S) {
    let _ = trie.insert(input);
}

fn search_trie<S: IntoIterator<Item = A>, A: TrieAtom>(trie: &Trie<A>, input: S) -> bool {
    trie.search(input)
}
