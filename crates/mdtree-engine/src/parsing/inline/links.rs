use std::ops::Range;

use regex::Regex;

use super::{kinds::Reference, types::InlineSpan};

/// Byte ranges of one `[label](target)` occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Found {
    full: Range<usize>,
    label: Range<usize>,
    target: Range<usize>,
}

fn find_all(regex: &Regex, text: &str, reject_after_bang: bool) -> Vec<Found> {
    let mut out = vec![];
    let mut at = 0;

    while let Some(caps) = regex.captures_at(text, at) {
        let (Some(full), Some(label), Some(target)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            break;
        };
        if reject_after_bang && text[..full.start()].ends_with(Reference::IMAGE_BANG) {
            // image syntax; resume just past the `[` so a later link can still match
            at = full.start() + 1;
            continue;
        }
        out.push(Found {
            full: full.range(),
            label: label.range(),
            target: target.range(),
        });
        at = full.end();
    }

    out
}

fn find_images(text: &str) -> Vec<Found> {
    find_all(Reference::image_regex(), text, false)
}

fn find_links(text: &str) -> Vec<Found> {
    find_all(Reference::link_regex(), text, true)
}

fn pairs(text: &str, found: Vec<Found>) -> Vec<(&str, &str)> {
    found
        .into_iter()
        .map(|f| (&text[f.label], &text[f.target]))
        .collect()
}

/// Returns `(alt, src)` for every `![alt](src)` in document order.
pub fn extract_images(text: &str) -> Vec<(&str, &str)> {
    pairs(text, find_images(text))
}

/// Returns `(label, href)` for every `[label](href)` not preceded by `!`.
pub fn extract_links(text: &str) -> Vec<(&str, &str)> {
    pairs(text, find_links(text))
}

/// Replaces every match in each text span with the span built by `make`,
/// keeping the text between matches. Non-text spans pass through.
fn split_with<F, M>(spans: Vec<InlineSpan>, find: F, make: M) -> Vec<InlineSpan>
where
    F: Fn(&str) -> Vec<Found>,
    M: Fn(&str, &str) -> InlineSpan,
{
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let text = match span {
            InlineSpan::Text(text) => text,
            styled => {
                out.push(styled);
                continue;
            }
        };

        let found = find(&text);
        if found.is_empty() {
            out.push(InlineSpan::Text(text));
            continue;
        }

        let mut last = 0;
        for f in found {
            if f.full.start > last {
                out.push(InlineSpan::text(&text[last..f.full.start]));
            }
            out.push(make(&text[f.label], &text[f.target]));
            last = f.full.end;
        }
        if last < text.len() {
            out.push(InlineSpan::text(&text[last..]));
        }
    }

    out
}

/// Extracts `![alt](src)` from text spans into [`InlineSpan::Image`].
pub fn split_images(spans: Vec<InlineSpan>) -> Vec<InlineSpan> {
    let make = |alt: &str, src: &str| InlineSpan::image(alt, src);
    split_with(spans, find_images, make)
}

/// Extracts `[label](href)` from text spans into [`InlineSpan::Link`].
pub fn split_links(spans: Vec<InlineSpan>) -> Vec<InlineSpan> {
    let make = |label: &str, href: &str| InlineSpan::link(label, href);
    split_with(spans, find_links, make)
}
