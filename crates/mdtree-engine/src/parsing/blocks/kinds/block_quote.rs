use crate::options::QuoteJoin;

/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// classifier or builder code.
pub struct BlockQuote;

impl BlockQuote {
    /// The per-line blockquote prefix, including its mandatory space.
    pub const PREFIX: &'static str = "> ";

    /// True if every line of a non-empty block carries the prefix.
    pub fn matches(block: &str) -> bool {
        !block.is_empty() && block.lines().all(|line| line.starts_with(Self::PREFIX))
    }

    /// Strips the prefix from one line, leaving unprefixed lines untouched.
    pub fn strip_line(line: &str) -> &str {
        line.strip_prefix(Self::PREFIX).unwrap_or(line)
    }

    /// Returns the quote text with every prefix stripped, lines rejoined by `join`.
    pub fn content(block: &str, join: QuoteJoin) -> String {
        block
            .lines()
            .map(Self::strip_line)
            .collect::<Vec<_>>()
            .join(join.separator())
    }
}
