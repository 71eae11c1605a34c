use suggesting::trie::Trie;
use unicode_segmentation::UnicodeSegmentation;

fn main() {
    // Create our trie
    let mut trie = Trie::new();

    // Insert some graphemes
    let s = "a̐éö̲\r\n";
    let input = s.graphemes(true);
    trie.insert(input.clone()).expect("inserting graphemes");
    assert!(trie.search(input.clone()));

    // Every grapheme cluster is a single atom
    let first: Vec<&str> = input.clone().take(1).collect();
    let next = trie.autocomplete(first).expect("prefix is present");
    assert_eq!(next.len(), 1);
    println!("{trie}");
}
