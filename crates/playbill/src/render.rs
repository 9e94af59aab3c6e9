//! Template rendering: code substitution, conditional suppression and
//! final assembly.

use crate::code::lookup;
use crate::segment::{split, Segment};
use crate::song::Metadata;
use crate::util::escape_html;

/// Renders `template` against `item` in one shot.
///
/// The template is split into segments, `%X` codes are substituted
/// segment by segment, conditional groups with missing keys drop out,
/// and when `escape` is set the joined result is escaped exactly once,
/// globally rather than per segment.
///
/// Rendering is total: any template against any item yields a string,
/// possibly empty.
///
/// # Example
///
/// ```rust
/// use playbill::{render, Song};
///
/// let song = Song::new().with("artist", "Neko Case").with("title", "Hold On");
///
/// assert_eq!(render("%A - %T", &song, false), "Neko Case - Hold On");
/// assert_eq!(render("%A{ - %B}", &song, false), "Neko Case");
/// ```
pub fn render<M: Metadata>(template: &str, item: &M, escape: bool) -> String {
    render_segments(&split(template), item, escape)
}

/// Renders pre-split segments against `item`.
pub(crate) fn render_segments<M: Metadata>(segments: &[Segment], item: &M, escape: bool) -> String {
    let mut text = String::new();
    for segment in segments {
        if let Some(rendered) = substitute(segment.inner(), item, segment.is_bracketed()) {
            text.push_str(&rendered);
        }
    }
    if escape {
        escape_html(&text)
    } else {
        text
    }
}

/// Substitutes every `%X` occurrence in `text`.
///
/// Returns `None` when `conditional` is set and a scanned code's key is
/// absent from the item; the caller drops the whole segment. Unknown
/// `%x` pairs and a trailing `%` pass through untouched, and replacement
/// values are never re-scanned.
fn substitute<M: Metadata>(text: &str, item: &M, conditional: bool) -> Option<String> {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            result.push(ch);
            continue;
        }
        match chars.peek().copied().and_then(lookup) {
            Some(code) => {
                if conditional && !code.is_available(item) {
                    return None;
                }
                result.push_str(&code.render(item));
                chars.next();
            }
            None => result.push('%'),
        }
    }

    Some(result)
}
