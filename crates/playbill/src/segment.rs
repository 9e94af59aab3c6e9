//! Template segmentation: literal runs and `{...}` conditional groups.

/// One contiguous piece of a template.
///
/// `Bracketed` keeps its braces, so joining the [`text`](Segment::text)
/// of every segment reproduces the template byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text outside any brace group.
    Literal(String),
    /// A brace-delimited group, braces included, dropped entirely when a
    /// code inside has no backing key.
    Bracketed(String),
}

impl Segment {
    /// The raw text of this segment, braces included for `Bracketed`.
    pub fn text(&self) -> &str {
        match self {
            Segment::Literal(text) | Segment::Bracketed(text) => text,
        }
    }

    /// The renderable text: a bracketed segment without its braces.
    pub fn inner(&self) -> &str {
        match self {
            Segment::Literal(text) => text,
            Segment::Bracketed(text) => text
                .strip_prefix('{')
                .and_then(|t| t.strip_suffix('}'))
                .unwrap_or(text),
        }
    }

    /// True for brace-delimited segments.
    pub fn is_bracketed(&self) -> bool {
        matches!(self, Segment::Bracketed(_))
    }
}

/// Splits a template into literal and bracketed segments.
///
/// Scans left to right: text up to the next `{` becomes a literal, then
/// everything through the next `}` becomes one bracketed segment. An
/// unmatched `{` is not an error; the unterminated tail stays one
/// literal. Empty literals may appear between adjacent groups; they
/// render to nothing.
///
/// # Example
///
/// ```rust
/// use playbill::{split, Segment};
///
/// assert_eq!(
///     split("%A{ - %T}"),
///     vec![
///         Segment::Literal("%A".into()),
///         Segment::Bracketed("{ - %T}".into()),
///     ],
/// );
/// ```
pub fn split(template: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut rest = template;

    while !rest.is_empty() {
        let open = match rest.find('{') {
            Some(open) => open,
            None => {
                segments.push(Segment::Literal(rest.to_string()));
                break;
            }
        };
        segments.push(Segment::Literal(rest[..open].to_string()));
        match rest[open + 1..].find('}') {
            Some(close) => {
                let end = open + 1 + close + 1;
                segments.push(Segment::Bracketed(rest[open..end].to_string()));
                rest = &rest[end..];
            }
            None => {
                segments.push(Segment::Literal(rest[open..].to_string()));
                break;
            }
        }
    }

    segments
}
