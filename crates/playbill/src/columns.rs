//! Pipe-delimited multi-column templates and their header labels.

use std::sync::Arc;

use crate::cache::CachingFormatter;
use crate::code::lookup;
use crate::song::Metadata;

/// One column of a multi-column format: a derived header label plus a
/// caching formatter for the column's sub-template.
pub struct Column<T> {
    label: String,
    formatter: CachingFormatter<T>,
}

impl<T: Metadata> Column<T> {
    /// Header text derived from the sub-template's codes.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Renders this column's cell for `item`, cached per item.
    pub fn format(&self, item: &Arc<T>) -> String {
        self.formatter.format(item)
    }
}

/// Splits `"%N|%T|%L"`-style composite templates into columns.
///
/// The `|` split is blind: it happens before any brace handling. Every
/// column escapes its output; cells land in markup-aware list widgets.
///
/// # Example
///
/// ```rust
/// use playbill::{ColumnFormatter, Song};
///
/// let columns: ColumnFormatter<Song> = ColumnFormatter::new("%N|%A - %T");
/// assert_eq!(columns.labels(), ["#", "Artist - Track"]);
/// assert_eq!(columns.len(), 2);
/// ```
pub struct ColumnFormatter<T> {
    columns: Vec<Column<T>>,
}

impl<T: Metadata> ColumnFormatter<T> {
    /// Builds one column per `|`-separated sub-template.
    pub fn new(template: &str) -> Self {
        let columns = template
            .split('|')
            .map(|sub| Column {
                label: column_label(sub),
                formatter: CachingFormatter::new(sub, true),
            })
            .collect();
        ColumnFormatter { columns }
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Always false in practice: even an empty template yields one column.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The columns in template order.
    pub fn iter(&self) -> std::slice::Iter<'_, Column<T>> {
        self.columns.iter()
    }

    /// Header labels in template order.
    pub fn labels(&self) -> Vec<&str> {
        self.columns.iter().map(|column| column.label()).collect()
    }
}

impl<'a, T> IntoIterator for &'a ColumnFormatter<T> {
    type Item = &'a Column<T>;
    type IntoIter = std::slice::Iter<'a, Column<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

/// Derives a header label for one sub-template: codes become their column
/// text, braces drop out, and a `#` literal abutting a numeric code's own
/// `#` label collapses to a single `#`.
fn column_label(template: &str) -> String {
    let mut label = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '%' => match chars.peek().copied().and_then(lookup) {
                Some(code) => {
                    if let Some(column) = code.column {
                        label.push_str(column);
                    }
                    chars.next();
                }
                None => label.push('%'),
            },
            '{' | '}' => {}
            _ => label.push(ch),
        }
    }

    label.replace("##", "#")
}
