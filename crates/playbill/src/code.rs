//! The format-code catalog: what each `%X` means and how it renders.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::song::Metadata;
use crate::util::{basename, dirname, escape_html, format_duration};

/// How a format code turns item metadata into display text.
///
/// A closed set: every entry of [`FORMAT_CODES`] renders through exactly
/// one of these, dispatched in [`FormatCode::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKind {
    /// Key lookup with default fallback.
    Plain,
    /// Plain, zero-padded on the left to `width`.
    Numeric { width: usize },
    /// Plain, then one path component extracted.
    Path(PathPart),
    /// Track title, with a default computed from the `file` value at
    /// render time.
    Title,
    /// Plain, then all-digit values formatted as a duration.
    Length,
    /// Playback position read from the composite `status:time` value.
    Elapsed,
}

/// Which component a [`CodeKind::Path`] code extracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPart {
    Dirname,
    Basename,
}

/// One entry of the format-code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatCode {
    /// The letter following `%` in templates.
    pub code: char,
    /// Human-readable name, for format-string pickers.
    pub description: &'static str,
    /// Column header text; `None` for codes that never head a column.
    pub column: Option<&'static str>,
    /// The item key this code reads.
    pub key: Option<&'static str>,
    /// Fallback when the key is missing or its value is empty.
    pub default: &'static str,
    /// Rendering behavior.
    pub kind: CodeKind,
}

impl FormatCode {
    const fn plain(
        code: char,
        description: &'static str,
        column: &'static str,
        key: &'static str,
        default: &'static str,
    ) -> Self {
        FormatCode {
            code,
            description,
            column: Some(column),
            key: Some(key),
            default,
            kind: CodeKind::Plain,
        }
    }

    const fn numeric(
        code: char,
        description: &'static str,
        column: &'static str,
        key: &'static str,
        default: &'static str,
        width: usize,
    ) -> Self {
        FormatCode {
            code,
            description,
            column: Some(column),
            key: Some(key),
            default,
            kind: CodeKind::Numeric { width },
        }
    }

    const fn path(
        code: char,
        description: &'static str,
        column: &'static str,
        key: &'static str,
        part: PathPart,
    ) -> Self {
        FormatCode {
            code,
            description,
            column: Some(column),
            key: Some(key),
            default: "Unknown",
            kind: CodeKind::Path(part),
        }
    }

    // The static default is never read for titles; render() derives one
    // from the file value per call.
    const fn title(
        code: char,
        description: &'static str,
        column: &'static str,
        key: &'static str,
    ) -> Self {
        FormatCode {
            code,
            description,
            column: Some(column),
            key: Some(key),
            default: "",
            kind: CodeKind::Title,
        }
    }

    const fn length(
        code: char,
        description: &'static str,
        column: &'static str,
        key: &'static str,
        default: &'static str,
    ) -> Self {
        FormatCode {
            code,
            description,
            column: Some(column),
            key: Some(key),
            default,
            kind: CodeKind::Length,
        }
    }

    const fn elapsed(
        code: char,
        description: &'static str,
        key: &'static str,
        default: &'static str,
    ) -> Self {
        FormatCode {
            code,
            description,
            column: None,
            key: Some(key),
            default,
            kind: CodeKind::Elapsed,
        }
    }

    /// Renders this code's display text for `item`.
    ///
    /// Total over any item: missing and empty values fall back to the
    /// code's default (or a computed one, for titles), so rendering never
    /// fails.
    pub fn render<M: Metadata>(&self, item: &M) -> String {
        match self.kind {
            CodeKind::Plain => self.plain_value(item),
            CodeKind::Numeric { width } => {
                let value = self.plain_value(item);
                format!("{:0>width$}", value)
            }
            CodeKind::Path(part) => {
                let value = self.plain_value(item);
                match part {
                    PathPart::Dirname => dirname(&value).to_string(),
                    PathPart::Basename => basename(&value).to_string(),
                }
            }
            CodeKind::Title => {
                let path = item.get("file").unwrap_or("");
                let fallback = if path.starts_with("http://") || path.starts_with("ftp://") {
                    path
                } else {
                    basename(path)
                };
                let fallback = escape_html(fallback);
                match self.key.and_then(|key| item.get(key)) {
                    Some(value) if !value.is_empty() => value.to_string(),
                    _ => fallback,
                }
            }
            CodeKind::Length => {
                let value = self.plain_value(item);
                if let Some(secs) = parse_seconds(&value) {
                    return format_duration(secs);
                }
                value
            }
            CodeKind::Elapsed => {
                let raw = match self.key.and_then(|key| item.get(key)) {
                    Some(value) => value,
                    // Deliberate passthrough: without a playback position
                    // the token survives verbatim.
                    None => return "%E".to_string(),
                };
                let elapsed = raw.split(':').next().unwrap_or(raw);
                match parse_seconds(elapsed) {
                    Some(secs) => format_duration(secs),
                    None => self.default.to_string(),
                }
            }
        }
    }

    /// True when this code's key is present in `item`; keyless codes are
    /// always available. Conditional segments drop out entirely when a
    /// code in them is unavailable.
    pub fn is_available<M: Metadata>(&self, item: &M) -> bool {
        match self.key {
            Some(key) => item.contains(key),
            None => true,
        }
    }

    fn plain_value<M: Metadata>(&self, item: &M) -> String {
        match self.key.and_then(|key| item.get(key)) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => self.default.to_string(),
        }
    }
}

/// Accepts only all-ASCII-digit strings that fit a `u64`.
fn parse_seconds(value: &str) -> Option<u64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Every recognized format code, in display order.
pub static FORMAT_CODES: [FormatCode; 12] = [
    FormatCode::plain('A', "Artist name", "Artist", "artist", "Unknown"),
    FormatCode::plain('B', "Album name", "Album", "album", "Unknown"),
    FormatCode::title('T', "Track name", "Track", "title"),
    FormatCode::numeric('N', "Track number", "#", "track", "00", 2),
    FormatCode::numeric('D', "Disc number", "#", "disc", "0", 2),
    FormatCode::plain('Y', "Year", "Year", "date", "?"),
    FormatCode::plain('G', "Genre", "Genre", "genre", "Unknown"),
    FormatCode::path('P', "File path", "Path", "file", PathPart::Dirname),
    FormatCode::path('F', "File name", "File", "file", PathPart::Basename),
    FormatCode::plain('S', "Stream name", "Stream", "name", "Unknown"),
    FormatCode::length('L', "Song length", "Len", "time", "?"),
    FormatCode::elapsed('E', "Elapsed time (title only)", "status:time", "?"),
];

static CODE_INDEX: Lazy<HashMap<char, &'static FormatCode>> =
    Lazy::new(|| FORMAT_CODES.iter().map(|code| (code.code, code)).collect());

/// Looks up a format-code definition by its letter.
pub fn lookup(code: char) -> Option<&'static FormatCode> {
    CODE_INDEX.get(&code).copied()
}

/// True when `code` is a recognized format-code letter.
pub fn is_code(code: char) -> bool {
    CODE_INDEX.contains_key(&code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::song::Song;

    fn by_code(code: char) -> &'static FormatCode {
        lookup(code).unwrap()
    }

    #[test]
    fn table_has_unique_codes() {
        let mut seen = std::collections::HashSet::new();
        for code in &FORMAT_CODES {
            assert!(seen.insert(code.code), "duplicate code {}", code.code);
        }
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn lookup_finds_every_code_and_nothing_else() {
        for code in &FORMAT_CODES {
            assert_eq!(lookup(code.code).map(|c| c.code), Some(code.code));
            assert!(is_code(code.code));
        }
        assert!(lookup('Z').is_none());
        assert!(lookup('a').is_none());
        assert!(!is_code('%'));
    }

    #[test]
    fn plain_prefers_value_over_default() {
        let song = Song::new().with("artist", "Arvo Pärt");
        assert_eq!(by_code('A').render(&song), "Arvo Pärt");
    }

    #[test]
    fn plain_falls_back_when_missing_or_empty() {
        let song = Song::new().with("genre", "");
        assert_eq!(by_code('A').render(&song), "Unknown");
        assert_eq!(by_code('G').render(&song), "Unknown");
        assert_eq!(by_code('Y').render(&song), "?");
    }

    #[test]
    fn numeric_pads_to_width() {
        assert_eq!(by_code('N').render(&Song::new().with("track", "7")), "07");
        assert_eq!(by_code('N').render(&Song::new().with("track", "12")), "12");
        assert_eq!(by_code('N').render(&Song::new()), "00");
        assert_eq!(by_code('D').render(&Song::new().with("disc", "3")), "03");
        assert_eq!(by_code('D').render(&Song::new()), "00");
    }

    #[test]
    fn numeric_leaves_wide_values_alone() {
        assert_eq!(by_code('N').render(&Song::new().with("track", "4/12")), "4/12");
        assert_eq!(by_code('N').render(&Song::new().with("track", "103")), "103");
    }

    #[test]
    fn path_codes_split_the_file_value() {
        let song = Song::new().with("file", "albums/ok_computer/airbag.flac");
        assert_eq!(by_code('P').render(&song), "albums/ok_computer");
        assert_eq!(by_code('F').render(&song), "airbag.flac");
    }

    #[test]
    fn path_codes_on_missing_file() {
        // The plain fallback kicks in first, then the path split.
        assert_eq!(by_code('P').render(&Song::new()), "");
        assert_eq!(by_code('F').render(&Song::new()), "Unknown");
    }

    #[test]
    fn title_prefers_the_tag() {
        let song = Song::new()
            .with("title", "Airbag")
            .with("file", "albums/ok_computer/01.flac");
        assert_eq!(by_code('T').render(&song), "Airbag");
    }

    #[test]
    fn title_falls_back_to_file_basename() {
        let song = Song::new().with("file", "albums/ok_computer/01.flac");
        assert_eq!(by_code('T').render(&song), "01.flac");
    }

    #[test]
    fn title_keeps_stream_urls_whole() {
        let http = Song::new().with("file", "http://radio.example/stream");
        assert_eq!(by_code('T').render(&http), "http://radio.example/stream");
        let ftp = Song::new().with("file", "ftp://host/songs/a.ogg");
        assert_eq!(by_code('T').render(&ftp), "ftp://host/songs/a.ogg");
        // https is not in the recognized prefix set.
        let https = Song::new().with("file", "https://radio.example/stream");
        assert_eq!(by_code('T').render(&https), "stream");
    }

    #[test]
    fn title_escapes_its_computed_fallback() {
        let song = Song::new().with("file", "mix/<odd> & loud.mp3");
        assert_eq!(by_code('T').render(&song), "&lt;odd&gt; &amp; loud.mp3");
        // A real title tag is left for the global escape pass.
        let tagged = Song::new().with("title", "Loud & Odd").with("file", "mix/x.mp3");
        assert_eq!(by_code('T').render(&tagged), "Loud & Odd");
    }

    #[test]
    fn title_without_file_renders_empty() {
        assert_eq!(by_code('T').render(&Song::new()), "");
    }

    #[test]
    fn length_formats_second_counts() {
        assert_eq!(by_code('L').render(&Song::new().with("time", "223")), "3:43");
        assert_eq!(by_code('L').render(&Song::new().with("time", "3661")), "1:01:01");
    }

    #[test]
    fn length_passes_non_numeric_values_and_defaults() {
        assert_eq!(by_code('L').render(&Song::new().with("time", "live")), "live");
        assert_eq!(by_code('L').render(&Song::new()), "?");
    }

    #[test]
    fn elapsed_is_literal_without_a_position() {
        assert_eq!(by_code('E').render(&Song::new()), "%E");
    }

    #[test]
    fn elapsed_converts_the_leading_seconds() {
        let song = Song::new().with("status:time", "90:223");
        assert_eq!(by_code('E').render(&song), "1:30");
        let uncoloned = Song::new().with("status:time", "45");
        assert_eq!(by_code('E').render(&uncoloned), "0:45");
    }

    #[test]
    fn elapsed_falls_back_on_unusable_positions() {
        assert_eq!(by_code('E').render(&Song::new().with("status:time", "")), "?");
        assert_eq!(by_code('E').render(&Song::new().with("status:time", "abc:5")), "?");
    }

    #[test]
    fn availability_follows_key_presence() {
        let song = Song::new().with("disc", "");
        assert!(by_code('D').is_available(&song));
        assert!(!by_code('N').is_available(&song));
        assert!(!by_code('E').is_available(&song));
    }

    #[test]
    fn parse_seconds_is_strict() {
        assert_eq!(parse_seconds("223"), Some(223));
        assert_eq!(parse_seconds("007"), Some(7));
        assert_eq!(parse_seconds(""), None);
        assert_eq!(parse_seconds("+5"), None);
        assert_eq!(parse_seconds("12.5"), None);
        assert_eq!(parse_seconds("12a"), None);
    }
}
