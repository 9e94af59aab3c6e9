//! Format-string settings a front-end keeps, one template per display
//! surface.

use serde::{Deserialize, Serialize};

/// The template strings a front-end feeds into the engine.
///
/// Every field defaults individually, so a partial config deserializes
/// cleanly on top of the stock values. Persistence is the host's
/// business; this type only shapes the data.
///
/// # Example
///
/// ```rust
/// use playbill::DisplayFormats;
///
/// let formats: DisplayFormats = serde_json::from_str(r#"{"library": "%F"}"#).unwrap();
/// assert_eq!(formats.library, "%F");
/// assert_eq!(formats.playlist, "%A - %T");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayFormats {
    /// Playlist rows; may be a `|`-separated multi-column template.
    pub playlist: String,
    /// Library browser rows.
    pub library: String,
    /// Window title; the one surface with a playback position for `%E`.
    pub window_title: String,
    /// First now-playing line.
    pub now_playing_line1: String,
    /// Second now-playing line.
    pub now_playing_line2: String,
}

impl Default for DisplayFormats {
    fn default() -> Self {
        DisplayFormats {
            playlist: "%A - %T".to_string(),
            library: "%A - %T".to_string(),
            window_title: "%A - %T".to_string(),
            now_playing_line1: "%T".to_string(),
            now_playing_line2: "by %A from %B".to_string(),
        }
    }
}
