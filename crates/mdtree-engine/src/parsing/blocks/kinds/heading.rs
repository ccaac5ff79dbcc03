/// ATX heading block type with owned delimiter constants.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: char = '#';
    /// Deepest heading level; a longer `#` run is not a heading.
    pub const MAX_LEVEL: u8 = 6;

    /// Returns the heading level if `block` opens with a `#` run followed by a space.
    ///
    /// The run is measured up to the first space anywhere in the block, so
    /// `#x # y` and `#\nfoo bar` are not headings.
    pub fn level(block: &str) -> Option<u8> {
        if !block.starts_with(Self::MARKER) {
            return None;
        }
        let space = block.find(' ')?;
        let run = &block[..space];
        if run.len() > Self::MAX_LEVEL as usize || !run.chars().all(|c| c == Self::MARKER) {
            return None;
        }
        u8::try_from(run.len()).ok()
    }

    /// Returns the heading text after the `#` run and its space.
    pub fn strip(block: &str, level: u8) -> &str {
        block.get(level as usize + 1..).unwrap_or("")
    }
}
