// SPDX-License-Identifier: MPL-2.0
//! Selection state for the gallery: main-preview index and lightbox index.
//!
//! This component is the single source of truth for which media item is shown
//! in the main preview and whether the fullscreen lightbox is open, shared
//! between the gallery widget and the application's keyboard subscription.

/// Wraps an arbitrary signed index into `[0, len)` using floor modulo.
///
/// Total for every `index` (negative, zero, or far past the end) as long as
/// `len > 0`. Callers must not invoke it on an empty list.
#[must_use]
pub fn wrap_index(index: i64, len: usize) -> usize {
    debug_assert!(len > 0, "wrap_index called with an empty list");
    let n = len as i64;
    (((index % n) + n) % n) as usize
}

/// Tracks the active (main preview) index and the lightbox index.
///
/// The two indices are independent: navigating the lightbox never moves the
/// main preview, and selecting a thumbnail never moves an open lightbox.
/// All lightbox mutations normalize through [`wrap_index`], so an open
/// lightbox always points at a valid item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    /// Index shown in the main preview; `None` iff the media list is empty.
    active: Option<usize>,
    /// Index shown fullscreen; `None` means the lightbox is closed.
    lightbox: Option<usize>,
    /// Number of items in the media list the indices refer to.
    len: usize,
}

impl SelectionState {
    /// Creates selection state for a list of `len` items.
    ///
    /// The first item becomes active when the list is non-empty; the
    /// lightbox starts closed.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            active: if len > 0 { Some(0) } else { None },
            lightbox: None,
            len,
        }
    }

    /// Returns the main preview index, if any item exists.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Returns the lightbox index while the lightbox is open.
    #[must_use]
    pub fn lightbox_index(&self) -> Option<usize> {
        self.lightbox
    }

    /// Checks if the lightbox overlay is open.
    #[must_use]
    pub fn is_lightbox_open(&self) -> bool {
        self.lightbox.is_some()
    }

    /// Returns the number of items the indices refer to.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks if the underlying media list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Makes `index` the main preview item.
    ///
    /// Thumbnails are the only caller and are rendered one per item, so an
    /// out-of-range index is ignored rather than wrapped.
    pub fn select_active(&mut self, index: usize) {
        if index < self.len {
            self.active = Some(index);
        }
    }

    /// Opens the lightbox at `index`, normalized by wraparound.
    ///
    /// No-op for an empty list: with no preview or thumbnails rendered there
    /// is nothing that could have triggered the open.
    pub fn open_lightbox(&mut self, index: i64) {
        if self.len > 0 {
            self.lightbox = Some(wrap_index(index, self.len));
        }
    }

    /// Closes the lightbox overlay.
    pub fn close_lightbox(&mut self) {
        self.lightbox = None;
    }

    /// Steps the open lightbox by `delta`, wrapping at both ends.
    ///
    /// No-op while the lightbox is closed.
    pub fn advance_lightbox(&mut self, delta: i64) {
        if let Some(current) = self.lightbox {
            self.lightbox = Some(wrap_index(current as i64 + delta, self.len));
        }
    }

    /// Re-synchronizes the selection with a replaced media list of `len`
    /// items, clamping stale indices.
    ///
    /// An empty list resets both indices to their sentinels. Otherwise the
    /// active index clamps to the last item (or falls back to the first when
    /// previously unset) and an open lightbox clamps in place.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.active = None;
            self.lightbox = None;
        } else {
            self.active = Some(self.active.map_or(0, |a| a.min(len - 1)));
            self.lightbox = self.lightbox.map(|l| l.min(len - 1));
        }
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(0)
    }
}
