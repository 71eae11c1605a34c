use itertools::Itertools;
use suggesting::trie::TrieString;
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=suggesting=trace shows every operation
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut trie = TrieString::new();
    for word in [
        "a", "b", "at", "al", "alt", "alte", "alter", "ate", "ar", "art", "are", "aren", "arent",
        "by", "bye", "bo", "bol", "bold",
    ] {
        if let Err(e) = trie.insert(word.chars()) {
            eprintln!("could not insert {word:?}: {e}");
        }
    }

    if let Err(e) = trie.delete("alt".chars()) {
        eprintln!("could not delete \"alt\": {e}");
    }

    println!("{trie}");
    println!();

    for prefix in ["a", "ar", "bo", "x"] {
        match trie.autocomplete(prefix.chars()) {
            Some(next) => println!("{prefix:>4} -> [{}]", next.iter().join(", ")),
            None => println!("{prefix:>4} -> not present"),
        }
    }
    println!("search(\"al\") = {}", trie.search("al".chars()));
    println!("search(\"bol\") = {}", trie.search("bol".chars()));
}
