/// The pieces of a fenced code block once its fences are removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FencedCode<'a> {
    /// One-word language tag from the opening fence line, e.g. `rust`.
    pub info: Option<&'a str>,
    /// Verbatim code between the fences.
    pub body: &'a str,
}

/// Fenced code block type with owned delimiter constant.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// True if the block both starts and ends with a fence.
    ///
    /// The two checks may overlap, so a bare ```` ``` ```` qualifies.
    pub fn matches(block: &str) -> bool {
        block.starts_with(Self::BACKTICKS) && block.ends_with(Self::BACKTICKS)
    }

    /// Removes both fences along with the line break that ends an empty
    /// opening fence line and the one before the closing fence.
    ///
    /// Everything else is kept, including text on the opening fence line.
    pub fn strip_fences(block: &str) -> &str {
        let fence = Self::BACKTICKS.len();
        if block.len() < fence * 2 {
            return "";
        }
        let inner = block.get(fence..block.len() - fence).unwrap_or("");
        let inner = inner
            .strip_prefix("\r\n")
            .or_else(|| inner.strip_prefix('\n'))
            .unwrap_or(inner);
        inner
            .strip_suffix("\r\n")
            .or_else(|| inner.strip_suffix('\n'))
            .unwrap_or(inner)
    }

    /// Splits a language tag off the first line of `body`.
    ///
    /// The first line only counts as a tag when it is a single word and more
    /// lines follow; anything else is code.
    pub fn info_string(body: &str) -> Option<(&str, &str)> {
        let (first, rest) = body.split_once('\n')?;
        let word = first.trim();
        if word.is_empty() || word.contains(char::is_whitespace) {
            return None;
        }
        Some((word, rest))
    }

    /// Strips the fences, then separates a language tag when `detect_info` is set.
    pub fn split(block: &str, detect_info: bool) -> FencedCode<'_> {
        let body = Self::strip_fences(block);
        match Self::info_string(body).filter(|_| detect_info) {
            Some((info, rest)) => FencedCode {
                info: Some(info),
                body: rest,
            },
            None => FencedCode { info: None, body },
        }
    }
}
