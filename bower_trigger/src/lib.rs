// Copyright 2025 the Bower Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bower Trigger: gesture-to-visibility mapping for overlay triggers.
//!
//! An overlay opens and closes in response to an input gesture on its
//! reference element. Which gesture does what is a fixed, exhaustive
//! mapping over four trigger modes:
//!
//! | trigger  | bindings                                   |
//! |----------|--------------------------------------------|
//! | `Click`  | press → toggle                             |
//! | `Hover`  | pointer enter → show, pointer leave → hide |
//! | `Focus`  | focus gained → show, focus lost → hide     |
//! | `Manual` | none; the caller drives visibility         |
//!
//! [`TriggerMap`] carries the mode plus a `disabled` flag. Disabling
//! short-circuits every handler to a no-op instead of removing the
//! bindings: [`TriggerMap::bindings`] keeps answering the same table, so a
//! host that installed handlers once does not re-bind when the overlay is
//! re-enabled — the very next gesture works again.
//!
//! The mapping is deliberately a closed enum match, not open-ended
//! polymorphism; the four modes are fixed and exhaustive.
//!
//! ```rust
//! use bower_trigger::{Gesture, Trigger, TriggerMap, VisibilityIntent};
//!
//! let mut map = TriggerMap::new(Trigger::Hover);
//! assert_eq!(
//!     map.intent_for(Gesture::PointerEnter),
//!     Some(VisibilityIntent::Show)
//! );
//!
//! map.set_disabled(true);
//! assert_eq!(map.intent_for(Gesture::PointerEnter), None);
//! // The binding itself is still installed while disabled.
//! assert!(!map.bindings().is_empty());
//! ```
//!
//! This crate is `no_std` and allocation-free.

#![no_std]

/// The input gesture mode that opens and closes an overlay.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Trigger {
    /// A press on the reference toggles visibility.
    #[default]
    Click,
    /// Pointer enter shows, pointer leave hides.
    Hover,
    /// Focus gained shows, focus lost hides.
    Focus,
    /// No implicit handlers; the caller owns visibility entirely.
    Manual,
}

/// A gesture observed on the reference element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Gesture {
    /// Press (click/tap) on the reference.
    Press,
    /// Pointer entered the reference.
    PointerEnter,
    /// Pointer left the reference.
    PointerLeave,
    /// The reference gained keyboard focus.
    FocusGained,
    /// The reference lost keyboard focus.
    FocusLost,
}

/// What a gesture asks the caller-owned visibility state to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VisibilityIntent {
    /// Make the overlay visible.
    Show,
    /// Hide the overlay.
    Hide,
    /// Flip visibility.
    Toggle,
}

/// The handler bindings for one trigger mode, with a disable gate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TriggerMap {
    trigger: Trigger,
    disabled: bool,
}

impl TriggerMap {
    /// Creates an enabled map for the given trigger mode.
    #[must_use]
    pub const fn new(trigger: Trigger) -> Self {
        Self {
            trigger,
            disabled: false,
        }
    }

    /// The trigger mode this map serves.
    #[must_use]
    pub const fn trigger(&self) -> Trigger {
        self.trigger
    }

    /// Whether handlers currently short-circuit to no-ops.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Sets the disable gate. Bindings stay installed either way.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// The static gesture table for this trigger mode.
    ///
    /// Present even while disabled — hosts bind these once and keep them;
    /// only [`TriggerMap::intent_for`] consults the disable gate.
    #[must_use]
    pub const fn bindings(&self) -> &'static [(Gesture, VisibilityIntent)] {
        match self.trigger {
            Trigger::Click => &[(Gesture::Press, VisibilityIntent::Toggle)],
            Trigger::Hover => &[
                (Gesture::PointerEnter, VisibilityIntent::Show),
                (Gesture::PointerLeave, VisibilityIntent::Hide),
            ],
            Trigger::Focus => &[
                (Gesture::FocusGained, VisibilityIntent::Show),
                (Gesture::FocusLost, VisibilityIntent::Hide),
            ],
            Trigger::Manual => &[],
        }
    }

    /// Resolves a gesture to a visibility intent.
    ///
    /// `None` when the gesture is unbound for this trigger mode or the map
    /// is disabled.
    #[must_use]
    pub fn intent_for(&self, gesture: Gesture) -> Option<VisibilityIntent> {
        if self.disabled {
            return None;
        }
        self.bindings()
            .iter()
            .find(|(bound, _)| *bound == gesture)
            .map(|(_, intent)| *intent)
    }
}

impl Default for TriggerMap {
    fn default() -> Self {
        Self::new(Trigger::Click)
    }
}
