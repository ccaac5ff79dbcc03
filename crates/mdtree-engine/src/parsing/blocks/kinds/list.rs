/// Unordered list block type: every line is an item marked `* ` or `- `.
pub struct UnorderedList;

impl UnorderedList {
    /// Accepted item markers; a single list may mix them.
    pub const MARKERS: [&'static str; 2] = ["* ", "- "];

    pub fn matches(block: &str) -> bool {
        !block.is_empty()
            && block
                .lines()
                .all(|line| Self::MARKERS.iter().any(|m| line.starts_with(m)))
    }

    /// Returns the item text after its marker.
    pub fn strip_line(line: &str) -> &str {
        Self::MARKERS
            .iter()
            .find_map(|m| line.strip_prefix(m))
            .unwrap_or(line)
    }

    pub fn items(block: &str) -> impl Iterator<Item = &str> {
        block.lines().map(Self::strip_line)
    }
}

/// Ordered list block type: line `n` (1-based) is an item marked `<n>. `.
pub struct OrderedList;

impl OrderedList {
    /// Prefix that must open the first line for ordered-list detection to run.
    pub const FIRST: &'static str = "1. ";

    /// The expected prefix of the item on 1-based line `n`.
    pub fn ordinal_prefix(n: usize) -> String {
        format!("{n}. ")
    }

    /// True if the block looks like the start of an ordered list.
    pub fn starts(block: &str) -> bool {
        block.starts_with(Self::FIRST)
    }

    /// True if every line carries the prefix matching its position.
    pub fn is_sequential(block: &str) -> bool {
        block
            .lines()
            .enumerate()
            .all(|(i, line)| line.starts_with(&Self::ordinal_prefix(i + 1)))
    }

    /// Returns the item text after the ordinal prefix for line `n`.
    pub fn strip_line(line: &str, n: usize) -> &str {
        line.strip_prefix(&Self::ordinal_prefix(n)).unwrap_or(line)
    }

    pub fn items(block: &str) -> impl Iterator<Item = &str> {
        block
            .lines()
            .enumerate()
            .map(|(i, line)| Self::strip_line(line, i + 1))
    }
}
