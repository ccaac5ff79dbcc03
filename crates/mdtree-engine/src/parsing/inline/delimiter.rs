use super::{kinds::DelimitedStyle, types::InlineSpan};

/// Splits every [`InlineSpan::Text`] on the style's delimiter.
///
/// Pieces at odd positions become `style` spans, the rest stay text, and
/// empty pieces are dropped. Styled spans pass through untouched.
///
/// Pairing is only meaningful for an even number of delimiters in a span;
/// an odd count still alternates, so the trailing run is styled as if closed.
pub fn split_delimiter(spans: Vec<InlineSpan>, style: DelimitedStyle) -> Vec<InlineSpan> {
    let delimiter = style.delimiter();
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let text = match span {
            InlineSpan::Text(text) => text,
            styled => {
                out.push(styled);
                continue;
            }
        };

        for (i, piece) in text.split(delimiter).enumerate() {
            if piece.is_empty() {
                continue;
            }
            if i % 2 == 1 {
                out.push(style.span(piece.to_string()));
            } else {
                out.push(InlineSpan::Text(piece.to_string()));
            }
        }
    }

    out
}
