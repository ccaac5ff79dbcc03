use std::sync::OnceLock;

use regex::Regex;

/// Link and image syntax: `[label](target)` and `![label](target)`.
///
/// Labels exclude `[`/`]` and targets exclude `(`/`)`.
pub struct Reference;

impl Reference {
    /// Marks an image when it directly precedes the `[`.
    pub const IMAGE_BANG: char = '!';

    const LINK_PATTERN: &'static str = r"\[([^\[\]]*)\]\(([^\(\)]*)\)";
    const IMAGE_PATTERN: &'static str = r"!\[([^\[\]]*)\]\(([^\(\)]*)\)";

    /// Matches `[label](target)` anywhere, including inside image syntax.
    ///
    /// Callers reject matches preceded by [`Self::IMAGE_BANG`].
    pub fn link_regex() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| Regex::new(Self::LINK_PATTERN).expect("Invalid link regex"))
    }

    pub fn image_regex() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX.get_or_init(|| Regex::new(Self::IMAGE_PATTERN).expect("Invalid image regex"))
    }
}
