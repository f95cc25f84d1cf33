// Copyright 2025 the Bower Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus-trap Tab navigation inside an overlay container.
//!
//! While a modal-ish overlay is open, Tab must cycle through the focusable
//! descendants of its container instead of escaping to the rest of the
//! page. [`compute_next`] answers one keypress at a time: the host collects
//! the container's focusable descendants *fresh on every call* (content can
//! change while the overlay is open — the set is never cached here), passes
//! the currently focused node, and moves focus to the returned target when
//! the outcome says to handle the key.

use crate::{Key, KeyPress};

/// Decision for one key press inside a focus trap.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TrapOutcome<K> {
    /// Whether the trap claims this key press. When `true` the host should
    /// prevent the default focus move and apply [`TrapOutcome::next`];
    /// when `false` the key is not the trap's business.
    pub handled: bool,
    /// The node to focus next, when the trap is handling the press and the
    /// target differs from a lone focusable already holding focus.
    pub next: Option<K>,
}

impl<K> TrapOutcome<K> {
    const PASS: Self = Self {
        handled: false,
        next: None,
    };
}

/// Computes the next focus target for a Tab/Shift+Tab press inside a
/// container.
///
/// - `focusables` is the container's focusable descendants in document
///   order, recomputed by the caller for this very press.
/// - `active` is the currently focused node, if it is one of them.
///
/// Navigation wraps: Tab from the last focusable lands on the first, and
/// Shift+Tab from the first lands on the last. When focus is currently
/// outside the set (or nothing is focused), Tab enters at the first
/// focusable and Shift+Tab at the last. Any key other than Tab, and any
/// press over an empty focusable set, is not handled.
#[must_use]
pub fn compute_next<K: Copy + Eq>(
    focusables: &[K],
    active: Option<K>,
    key: &KeyPress,
) -> TrapOutcome<K> {
    if key.key != Key::Tab || focusables.is_empty() {
        return TrapOutcome::PASS;
    }

    let position = active.and_then(|node| focusables.iter().position(|k| *k == node));
    let last = focusables.len() - 1;

    let target = match (position, key.shift) {
        // Forward from a known position, wrapping last→first.
        (Some(i), false) => {
            if i == last {
                focusables[0]
            } else {
                focusables[i + 1]
            }
        }
        // Backward, wrapping first→last.
        (Some(i), true) => {
            if i == 0 {
                focusables[last]
            } else {
                focusables[i - 1]
            }
        }
        // Focus is outside the trap: enter at the boundary for the
        // direction of travel.
        (None, false) => focusables[0],
        (None, true) => focusables[last],
    };

    TrapOutcome {
        handled: true,
        // A single focusable that already holds focus stays put; the key is
        // still claimed so the default focus move is suppressed.
        next: (active != Some(target)).then_some(target),
    }
}
