//! Worked example: the display surfaces of a music player front-end,
//! all driven by playbill templates.
//!
//! Renders a playlist table with derived column headers, the
//! now-playing pane, and a window title that picks up the elapsed
//! position when one is available.

use std::sync::Arc;

use playbill::{render, ColumnFormatter, DisplayFormats, Song};

const PLAYLIST_JSON: &str = r#"[
  {"artist": "Townes Van Zandt", "album": "The Late Great", "title": "Pancho and Lefty",
   "track": "3", "date": "1972", "file": "music/tvz/late-great/03.flac", "time": "223"},
  {"artist": "Gillian Welch", "album": "Time (The Revelator)", "title": "Revelator",
   "track": "1", "date": "2001", "file": "music/welch/revelator/01.flac", "time": "385"},
  {"artist": "Songs: Ohia", "album": "The Lioness", "title": "Being in Love",
   "track": "2", "file": "music/ohia/lioness/02.flac", "time": "344"},
  {"file": "incoming/unsorted/live-take-4.ogg", "time": "611"}
]"#;

const TABLE_FORMAT: &str = "%N|%A - %T|%B|%L";
const TITLE_FORMAT: &str = "%A - %T{ (%E/%L)}";

fn pad(text: &str, width: usize) -> String {
    let deficit = width.saturating_sub(text.chars().count());
    format!("{}{}", text, " ".repeat(deficit))
}

fn main() -> anyhow::Result<()> {
    let songs: Vec<Song> = serde_json::from_str(PLAYLIST_JSON)?;
    let songs: Vec<Arc<Song>> = songs.into_iter().map(Arc::new).collect();

    let columns: ColumnFormatter<Song> = ColumnFormatter::new(TABLE_FORMAT);
    let rows: Vec<Vec<String>> = songs
        .iter()
        .map(|song| columns.iter().map(|column| column.format(song)).collect())
        .collect();

    let mut widths: Vec<usize> = columns
        .labels()
        .iter()
        .map(|label| label.chars().count())
        .collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<String>| cells.join("  ");
    println!(
        "{}",
        line(columns
            .labels()
            .iter()
            .zip(&widths)
            .map(|(label, width)| pad(label, *width))
            .collect())
    );
    println!(
        "{}",
        line(widths.iter().map(|width| "-".repeat(*width)).collect())
    );
    for row in &rows {
        println!(
            "{}",
            line(row
                .iter()
                .zip(&widths)
                .map(|(cell, width)| pad(cell, *width))
                .collect())
        );
    }

    // Pretend the first song is playing, 95 seconds in.
    let mut playing = (*songs[0]).clone();
    playing.insert("status:time", "95:223");

    let formats = DisplayFormats::default();
    println!();
    println!("Now playing: {}", render(&formats.now_playing_line1, &playing, false));
    println!("             {}", render(&formats.now_playing_line2, &playing, false));
    println!();
    println!("Window title: {}", render(TITLE_FORMAT, &playing, false));

    Ok(())
}
