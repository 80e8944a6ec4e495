//! Immersive gallery session: a wrap-around index over a snapshot of the
//! filtered view.
//!
//! The snapshot is taken when the gallery opens and is not live-updated
//! while it stays open, even if the underlying filter would change. A
//! session always holds at least one item - `open` refuses to create one
//! otherwise - so the wrap-around arithmetic never divides by zero.

use crate::artwork::Artwork;

#[derive(Clone, Debug, PartialEq)]
pub struct GallerySession {
    items: Vec<Artwork>,
    index: usize,
}

impl GallerySession {
    /// Open a session positioned at the artwork with `selected_id`.
    ///
    /// Returns `None` when the id is not in `items` (the overlay must not
    /// open in that case), which also covers an empty snapshot.
    pub fn open(items: Vec<Artwork>, selected_id: &str) -> Option<Self> {
        let index = items.iter().position(|a| a.id == selected_id)?;
        Some(Self { items, index })
    }

    pub fn current(&self) -> &Artwork {
        &self.items[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Advance forward, wrapping past the end. A single-item session wraps
    /// to itself.
    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.items.len();
    }

    /// Step backward, wrapping past the start.
    pub fn prev(&mut self) {
        self.index = (self.index + self.items.len() - 1) % self.items.len();
    }
}
