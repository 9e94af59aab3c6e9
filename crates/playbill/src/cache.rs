//! Per-item render caching.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::{Arc, Weak};

use crate::render::render_segments;
use crate::segment::{split, Segment};
use crate::song::Metadata;

/// A renderer bound to one template and escape flag, memoizing results
/// per item instance.
///
/// Keys are item identities (the `Arc` allocation), never item contents:
/// re-rendering the same `Arc` is a map hit, while an equal song behind
/// a different `Arc` renders afresh. Entries hold the item weakly, so
/// the cache never extends an item's lifetime; stale entries are swept
/// on the next miss. Edits behind the same `Arc` are invisible here;
/// hand the formatter a fresh item when a song's metadata changes.
///
/// Interior mutability is a `RefCell`, so the type is not `Sync`; put a
/// lock around it (or keep one formatter per thread) in multi-threaded
/// hosts.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use playbill::{CachingFormatter, Song};
///
/// let formatter = CachingFormatter::new("%N. %A - %T", false);
/// let song = Arc::new(Song::new().with("artist", "Ween").with("title", "Baby Bitch"));
///
/// let first = formatter.format(&song);
/// assert_eq!(first, "00. Ween - Baby Bitch");
/// assert_eq!(formatter.format(&song), first);
/// ```
pub struct CachingFormatter<T> {
    segments: Vec<Segment>,
    escape: bool,
    cache: RefCell<HashMap<usize, (Weak<T>, String)>>,
}

impl<T: Metadata> CachingFormatter<T> {
    /// Builds a formatter for `template`; the split happens once, here.
    pub fn new(template: &str, escape: bool) -> Self {
        CachingFormatter {
            segments: split(template),
            escape,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Returns the rendered text for `item`, computing it on first sight.
    pub fn format(&self, item: &Arc<T>) -> String {
        let key = Arc::as_ptr(item) as usize;

        if let Some((weak, cached)) = self.cache.borrow().get(&key) {
            // An address can be reused after its item dies; the entry
            // counts only if it still refers to this exact item.
            if weak.upgrade().map_or(false, |live| Arc::ptr_eq(&live, item)) {
                return cached.clone();
            }
        }

        let rendered = render_segments(&self.segments, item.as_ref(), self.escape);
        let mut cache = self.cache.borrow_mut();
        cache.retain(|_, (weak, _)| weak.strong_count() > 0);
        cache.insert(key, (Arc::downgrade(item), rendered.clone()));
        rendered
    }

    /// True when this formatter escapes its output.
    pub fn escapes(&self) -> bool {
        self.escape
    }
}
