//! Prefix trie over characters with completion enumeration.

use indexmap::IndexMap;

/// Children are kept in insertion order so completion enumeration is
/// deterministic across runs.
#[derive(Debug, Default)]
struct TrieNode {
    children: IndexMap<char, TrieNode>,
    terminal: bool,
}

impl TrieNode {
    fn collect(&self, buf: &mut String, out: &mut Vec<String>) {
        if self.terminal {
            out.push(buf.clone());
        }
        for (&ch, child) in &self.children {
            buf.push(ch);
            child.collect(buf, out);
            buf.pop();
        }
    }
}

/// A prefix trie over strings.
///
/// # Examples
///
/// ```
/// use textmatch::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert("car");
/// trie.insert("cart");
/// trie.insert("dog");
///
/// assert!(trie.contains("car"));
/// assert!(!trie.contains("ca"));
/// assert_eq!(trie.completions("ca").unwrap(), ["car", "cart"]);
/// assert!(trie.completions("x").is_none());
/// ```
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    size: usize,
}

impl Trie {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Trie::default()
    }

    /// Number of nodes in the trie (one per distinct prefix character).
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the trie holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Inserts a word. Prefixes of an inserted word are not themselves
    /// contained unless inserted separately.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for ch in word.chars() {
            let existed = node.children.contains_key(&ch);
            node = node.children.entry(ch).or_default();
            if !existed {
                self.size += 1;
            }
        }
        node.terminal = true;
    }

    /// Whether `word` was inserted as a complete word.
    pub fn contains(&self, word: &str) -> bool {
        match self.walk(word) {
            Some(node) => node.terminal,
            None => false,
        }
    }

    /// All inserted words starting with `prefix`, in insertion order, the
    /// prefix itself first when it is a word. `None` when no inserted word
    /// starts with `prefix`.
    pub fn completions(&self, prefix: &str) -> Option<Vec<String>> {
        let node = self.walk(prefix)?;
        let mut buf = prefix.to_string();
        let mut out = Vec::new();
        node.collect(&mut buf, &mut out);
        Some(out)
    }

    fn walk(&self, path: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in path.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }
}
