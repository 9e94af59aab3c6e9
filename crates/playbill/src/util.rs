//! Utility functions for duration display, HTML escaping and virtual-path
//! splitting.

use quick_xml::escape::partial_escape;

/// Formats a whole number of seconds as a clock-style duration.
///
/// Durations under an hour render as `m:ss` with unpadded minutes; an
/// hour or more renders as `h:mm:ss` with unpadded hours.
///
/// # Example
///
/// ```rust
/// use playbill::format_duration;
///
/// assert_eq!(format_duration(61), "1:01");
/// assert_eq!(format_duration(3661), "1:01:01");
/// ```
pub fn format_duration(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

/// Escapes `&`, `<` and `>` for embedding in HTML or Pango markup.
///
/// Quotes stay as they are: rendered strings land in text content, never
/// in attributes.
///
/// # Example
///
/// ```rust
/// use playbill::escape_html;
///
/// assert_eq!(escape_html("Mogwai <3 & friends"), "Mogwai &lt;3 &amp; friends");
/// ```
pub fn escape_html(text: &str) -> String {
    partial_escape(text).into_owned()
}

/// Returns the directory portion of a slash-separated virtual path.
///
/// Song paths come from the daemon's database (or are URLs), so this
/// works on the string alone and never touches the filesystem.
///
/// # Example
///
/// ```rust
/// use playbill::dirname;
///
/// assert_eq!(dirname("albums/ok_computer/airbag.flac"), "albums/ok_computer");
/// assert_eq!(dirname("airbag.flac"), "");
/// assert_eq!(dirname("/airbag.flac"), "/");
/// ```
pub fn dirname(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => {
            let head = &path[..=idx];
            if head.bytes().all(|b| b == b'/') {
                head
            } else {
                head.trim_end_matches('/')
            }
        }
        None => "",
    }
}

/// Returns the final component of a slash-separated virtual path.
///
/// # Example
///
/// ```rust
/// use playbill::basename;
///
/// assert_eq!(basename("albums/ok_computer/airbag.flac"), "airbag.flac");
/// assert_eq!(basename("airbag.flac"), "airbag.flac");
/// ```
pub fn basename(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}
