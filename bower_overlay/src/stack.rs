// Copyright 2025 the Bower Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered registry of open overlays and Escape-key arbitration.

use alloc::vec::Vec;

use crate::{Key, KeyPress};

/// An explicit, ordered registry of open overlays.
///
/// Push on open, remove on close; the last entry is topmost. The stack is
/// plain data passed by reference into whatever owns the document key
/// listener — deliberately not ambient global state, so lifecycle is
/// testable and teardown explicit.
///
/// Escape arbitration: with several overlays open at once, one Escape press
/// closes exactly the topmost overlay. Lower overlays keep their state and
/// the next press closes the next one. Two overlays closing on one press
/// was judged an accident of leaked listeners, not a behavior to keep.
#[derive(Clone, Debug, Default)]
pub struct OverlayStack<K> {
    open: Vec<K>,
}

impl<K: Copy + Eq> OverlayStack<K> {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { open: Vec::new() }
    }

    /// Registers an overlay as open, making it topmost.
    ///
    /// Re-pushing an already open overlay raises it to the top instead of
    /// duplicating it, so re-opened overlays win Escape arbitration without
    /// a remove/push pair at call sites.
    pub fn push(&mut self, overlay: K) {
        self.open.retain(|k| *k != overlay);
        self.open.push(overlay);
    }

    /// Removes an overlay from the registry; a no-op when absent.
    pub fn remove(&mut self, overlay: K) {
        self.open.retain(|k| *k != overlay);
    }

    /// The topmost (most recently opened) overlay, if any.
    #[must_use]
    pub fn top(&self) -> Option<K> {
        self.open.last().copied()
    }

    /// Whether the overlay is currently registered as open.
    #[must_use]
    pub fn contains(&self, overlay: K) -> bool {
        self.open.contains(&overlay)
    }

    /// Number of open overlays.
    #[must_use]
    pub fn len(&self) -> usize {
        self.open.len()
    }

    /// Whether no overlay is open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Decides which overlay, if any, a key press should close.
    ///
    /// Only an Escape press with its default intact qualifies, and only the
    /// topmost overlay responds. The caller removes the returned overlay
    /// from the stack when it actually closes.
    #[must_use]
    pub fn dismiss_on_key(&self, key: &KeyPress) -> Option<K> {
        if key.default_prevented || key.key != Key::Escape {
            return None;
        }
        self.top()
    }
}
