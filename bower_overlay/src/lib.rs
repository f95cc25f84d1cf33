// Copyright 2025 the Bower Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bower Overlay: composable dismissal primitives for anchored popups.
//!
//! Every overlay (tooltip, popover, menu, picker) composes the same three
//! independent listeners to decide when it should be told to close:
//!
//! - [`OutsidePress`]: a document-level press watcher that fires when a
//!   press lands outside every watched element. The listener arms one tick
//!   after enabling so the very press that opened the overlay cannot
//!   dismiss it while still bubbling.
//! - [`OverlayStack`] + [`OverlayStack::dismiss_on_key`]: an explicit
//!   ordered registry of open overlays that arbitrates Escape presses.
//!   Exactly the topmost overlay responds to one press; lower overlays wait
//!   for the next. Keys whose default was already prevented by a more
//!   specific handler are ignored.
//! - [`trap::compute_next`]: Tab/Shift+Tab navigation inside a container,
//!   wrapping at both ends, over a focusable set recomputed fresh on every
//!   keypress.
//!
//! None of these touch a real event system. They are deterministic state
//! machines generic over a node key `K` (a DOM handle, a box-tree `NodeId`,
//! or an application id); the host installs the actual listeners and feeds
//! presses as root→target paths and keys as [`KeyPress`] values. Each
//! primitive only ever owns its own state, so tearing one overlay down can
//! never disturb another's listeners.
//!
//! ## Minimal example
//!
//! ```rust
//! use bower_overlay::{Dismissal, OutsidePress};
//!
//! let mut watcher: OutsidePress<u32> = OutsidePress::new();
//!
//! // Opening the overlay: install the document listener one tick from now.
//! assert!(watcher.enable([1_u32, 2_u32]));
//! // The opening click is still bubbling; it must not dismiss.
//! assert_eq!(watcher.on_press(&[0, 5]), None);
//!
//! watcher.arm();
//! // A press inside the floating panel (key 2) is not "outside".
//! assert_eq!(watcher.on_press(&[0, 2, 7]), None);
//! // A press anywhere else is.
//! assert_eq!(watcher.on_press(&[0, 5]), Some(Dismissal::OutsidePress));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod outside;
mod stack;
pub mod trap;

pub use outside::{OutsidePress, WatchState};
pub use stack::OverlayStack;

/// An intent to close an open overlay, tagged by what produced it.
///
/// Carries no payload beyond the kind; each event is consumed exactly once
/// by the overlay it was produced for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Dismissal {
    /// A press landed outside every element of the overlay.
    OutsidePress,
    /// The Escape key was pressed while this overlay was topmost.
    EscapeKey,
}

/// The key identity the dismissal primitives care about.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// The Escape key.
    Escape,
    /// The Tab key.
    Tab,
    /// Any other key; never handled here.
    Other,
}

/// A document-level key press as seen by the dismissal primitives.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// Which key was pressed.
    pub key: Key,
    /// Whether Shift was held (distinguishes Tab from Shift+Tab).
    pub shift: bool,
    /// Whether a more specific handler already prevented the default
    /// action; such presses are ignored.
    pub default_prevented: bool,
}

impl KeyPress {
    /// A plain press of `key` with no modifiers and default intact.
    #[must_use]
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            shift: false,
            default_prevented: false,
        }
    }

    /// The same press with Shift held.
    #[must_use]
    pub const fn shifted(mut self) -> Self {
        self.shift = true;
        self
    }

    /// The same press with its default already prevented.
    #[must_use]
    pub const fn prevented(mut self) -> Self {
        self.default_prevented = true;
        self
    }
}
