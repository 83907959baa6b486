//! Prefix tree over normalized words.
//!
//! Nodes live in a single arena (`Vec<TrieNode>`) and refer to their children
//! by index, so the tree is one allocation plus one small map per node. The
//! root is always index 0 and stands for the empty prefix.
//!
//! ```
//! use pagesearch::trie::PrefixTree;
//!
//! let mut tree = PrefixTree::new();
//! tree.insert("cat");
//! tree.insert("car");
//! let mut found = tree.search_prefix("ca");
//! found.sort();
//! assert_eq!(found, vec!["car", "cat"]);
//! ```

use ahash::AHashMap;

/// Index of a node in the tree arena
pub type NodeId = u32;

const ROOT: NodeId = 0;

/// One character position of some inserted word
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    children: AHashMap<char, NodeId>,
    is_end: bool,
}

impl TrieNode {
    /// Whether a complete word ends at this node
    pub fn is_end(&self) -> bool {
        self.is_end
    }

    /// Outgoing character edges
    pub fn children(&self) -> impl Iterator<Item = (char, NodeId)> + '_ {
        self.children.iter().map(|(&ch, &id)| (ch, id))
    }
}

/// Trie of whole words.
///
/// Callers are expected to normalize words with
/// [`normalize_word`](crate::utils::normalize_word) before inserting or
/// querying; the tree itself compares characters exactly.
#[derive(Debug, Clone)]
pub struct PrefixTree {
    nodes: Vec<TrieNode>,
    words: usize,
}

impl Default for PrefixTree {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            words: 0,
        }
    }

    /// Insert a word, creating any missing edges and marking the last node.
    /// Inserting a word that is already present changes nothing.
    pub fn insert(&mut self, word: &str) {
        let mut current = ROOT;
        for ch in word.chars() {
            current = match self.nodes[current as usize].children.get(&ch) {
                Some(&next) => next,
                None => {
                    let next = self.nodes.len() as NodeId;
                    self.nodes.push(TrieNode::default());
                    self.nodes[current as usize].children.insert(ch, next);
                    next
                }
            };
        }

        let node = &mut self.nodes[current as usize];
        if !node.is_end {
            node.is_end = true;
            self.words += 1;
        }
    }

    /// Walk `prefix` from the root, returning the node it ends on
    fn find(&self, prefix: &str) -> Option<NodeId> {
        prefix.chars().try_fold(ROOT, |node, ch| {
            self.nodes[node as usize].children.get(&ch).copied()
        })
    }

    /// Every stored word that starts with `prefix`.
    ///
    /// Returns an empty vector when no stored word has this prefix. Order
    /// follows child iteration and is not stable across trees.
    pub fn search_prefix(&self, prefix: &str) -> Vec<String> {
        let Some(start) = self.find(prefix) else {
            return Vec::new();
        };

        let mut results = Vec::new();
        let mut buffer = String::with_capacity(prefix.len() + 16);
        buffer.push_str(prefix);

        // Each entry is (node, buffer length of its parent, edge char).
        // Explicit stack keeps long words from growing the call stack.
        let mut stack: Vec<(NodeId, usize, Option<char>)> = vec![(start, buffer.len(), None)];

        while let Some((id, parent_len, edge)) = stack.pop() {
            buffer.truncate(parent_len);
            if let Some(ch) = edge {
                buffer.push(ch);
            }

            let node = &self.nodes[id as usize];
            if node.is_end {
                results.push(buffer.clone());
            }
            for (&ch, &child) in &node.children {
                stack.push((child, buffer.len(), Some(ch)));
            }
        }

        results
    }

    /// Whether `word` was inserted as a complete word
    pub fn contains(&self, word: &str) -> bool {
        self.find(word)
            .is_some_and(|id| self.nodes[id as usize].is_end)
    }

    /// Whether any stored word starts with `prefix`
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.find(prefix).is_some()
    }

    /// Number of distinct complete words
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of nodes including the root
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Node lookup by id, for callers that walk the tree themselves
    pub fn node(&self, id: NodeId) -> Option<&TrieNode> {
        self.nodes.get(id as usize)
    }

    /// The root node (empty prefix)
    pub fn root(&self) -> &TrieNode {
        &self.nodes[ROOT as usize]
    }
}

impl<S: AsRef<str>> Extend<S> for PrefixTree {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixTree {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tree = PrefixTree::new();
        tree.extend(iter);
        tree
    }
}
