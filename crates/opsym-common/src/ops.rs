use rustc_hash::FxHashMap;

/// The ISO C++ alternative operator spellings and their symbolic forms.
///
/// This is the closed set of tokens the rewriter recognizes; `<ciso646>`
/// existed to provide these names as macros in C.
pub const SPELLINGS: &[(&str, &str)] = &[
    ("and", "&&"),
    ("and_eq", "&="),
    ("bitand", "&"),
    ("bitor", "|"),
    ("compl", "~"),
    ("not", "!"),
    ("not_eq", "!="),
    ("or", "||"),
    ("or_eq", "|="),
    ("xor", "^"),
    ("xor_eq", "^="),
];

/// Immutable mapping from alternative operator spellings to symbols.
///
/// Built once at process start and borrowed by the scanner for the whole
/// run. Lookup is by exact string equality against a complete identifier
/// word, so a spelling that is a prefix of a longer identifier never
/// matches.
#[derive(Debug, Clone)]
pub struct OperatorTable {
    map: FxHashMap<&'static str, &'static str>,
}

impl OperatorTable {
    /// Build the table from the fixed spelling list.
    pub fn new() -> Self {
        Self {
            map: SPELLINGS.iter().copied().collect(),
        }
    }

    /// The symbol for `word`, or `None` if it is not an alternative spelling.
    pub fn replacement(&self, word: &str) -> Option<&'static str> {
        self.map.get(word).copied()
    }

    /// Number of spellings in the table.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the table is empty (never true for [`OperatorTable::new`]).
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for OperatorTable {
    fn default() -> Self {
        Self::new()
    }
}
