//! Playbill - Format-code templates for song display strings.
//!
//! A template is plain text with `%X` codes and optional `{...}` groups.
//! Rendering substitutes each code with a value from a song's metadata,
//! falling back to a per-code default when the tag is absent. A braced
//! group is conditional: if any code inside it refers to a tag the song
//! does not carry, the whole group renders as nothing, separators and
//! all.
//!
//! - [`render`] expands one template against one item.
//! - [`CachingFormatter`] pre-splits a template and memoizes results
//!   per item for hot paths like playlist redraws.
//! - [`ColumnFormatter`] splits a `|`-separated template into columns
//!   and derives a header label for each.
//! - [`Song`] is a ready-made tag map; anything implementing
//!   [`Metadata`] works in its place.
//!
//! # Quick Start
//!
//! ```rust
//! use playbill::{render, Song};
//!
//! let song = Song::new()
//!     .with("artist", "Townes Van Zandt")
//!     .with("title", "Pancho and Lefty")
//!     .with("track", "3")
//!     .with("time", "223");
//!
//! let line = render("%N. %A - %T{ (%L)}", &song, false);
//! assert_eq!(line, "03. Townes Van Zandt - Pancho and Lefty (3:43)");
//!
//! // No disc tag, so the braced group vanishes.
//! assert_eq!(render("%T{ [disc %D]}", &song, false), "Pancho and Lefty");
//! ```
//!
//! # Format codes
//!
//! | Code | Meaning | Item key |
//! |------|---------|----------|
//! | `%A` | Artist name | `artist` |
//! | `%B` | Album name | `album` |
//! | `%T` | Track name | `title` |
//! | `%N` | Track number, zero-padded | `track` |
//! | `%D` | Disc number, zero-padded | `disc` |
//! | `%Y` | Year | `date` |
//! | `%G` | Genre | `genre` |
//! | `%P` | File path (directory part) | `file` |
//! | `%F` | File name | `file` |
//! | `%S` | Stream name | `name` |
//! | `%L` | Song length as `M:SS` | `time` |
//! | `%E` | Elapsed time (title only) | `status:time` |
//!
//! A `%` followed by anything else is kept verbatim, as are braces that
//! never close. Malformed templates degrade, they do not error.

mod cache;
mod code;
mod columns;
mod config;
mod render;
mod segment;
mod song;
mod util;

// Re-export public API
pub use cache::CachingFormatter;
pub use code::{is_code, lookup, CodeKind, FormatCode, PathPart, FORMAT_CODES};
pub use columns::{Column, ColumnFormatter};
pub use config::DisplayFormats;
pub use render::render;
pub use segment::{split, Segment};
pub use song::{Metadata, Song};
pub use util::{basename, dirname, escape_html, format_duration};
