// Copyright 2025 the Bower Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outside-press watcher with one-tick arming.

use smallvec::SmallVec;

use crate::Dismissal;

/// Lifecycle of an [`OutsidePress`] watcher.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WatchState {
    /// Disabled: no document listener exists at all.
    Idle,
    /// Enabled, waiting for the arming tick; presses are ignored so the
    /// press that opened the overlay cannot dismiss it while bubbling.
    Arming,
    /// Live: presses outside the watched refs dismiss.
    Armed,
}

/// Watches document-level presses and reports the ones that land outside
/// every watched element.
///
/// The watcher itself is a state machine; the host owns the real listener:
///
/// - [`OutsidePress::enable`] returning `true` means "install the document
///   press listener and schedule a one-tick deferral that calls
///   [`OutsidePress::arm`]".
/// - [`OutsidePress::disable`] returning `true` means "remove that listener
///   and cancel the arming tick if it has not fired".
///
/// A disabled watcher never has a listener installed, and presses fed to a
/// watcher that is not yet armed are ignored.
#[derive(Clone, Debug)]
pub struct OutsidePress<K> {
    refs: SmallVec<[K; 2]>,
    state: WatchState,
}

impl<K: PartialEq> OutsidePress<K> {
    /// Creates an idle watcher.
    #[must_use]
    pub fn new() -> Self {
        Self {
            refs: SmallVec::new(),
            state: WatchState::Idle,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> WatchState {
        self.state
    }

    /// Begins watching the given elements (typically the reference and the
    /// floating panel).
    ///
    /// Returns `true` when the host must install the document listener and
    /// schedule the arming tick. Enabling an already enabled watcher only
    /// replaces the watched refs and returns `false`.
    pub fn enable(&mut self, refs: impl IntoIterator<Item = K>) -> bool {
        self.refs.clear();
        self.refs.extend(refs);
        match self.state {
            WatchState::Idle => {
                self.state = WatchState::Arming;
                true
            }
            WatchState::Arming | WatchState::Armed => false,
        }
    }

    /// Makes the watcher live; call from the deferred tick.
    ///
    /// A no-op unless the watcher is currently arming, so a stale tick that
    /// fires after [`OutsidePress::disable`] cannot resurrect the watcher.
    pub fn arm(&mut self) {
        if self.state == WatchState::Arming {
            self.state = WatchState::Armed;
        }
    }

    /// Stops watching.
    ///
    /// Returns `true` when the host must remove the document listener (and
    /// cancel a pending arming tick). Synchronous: after this returns, no
    /// press can produce a dismissal.
    pub fn disable(&mut self) -> bool {
        let had_listener = self.state != WatchState::Idle;
        self.state = WatchState::Idle;
        self.refs.clear();
        had_listener
    }

    /// Feeds one document-level press, described by the root→target path of
    /// the pressed node.
    ///
    /// Returns [`Dismissal::OutsidePress`] when the watcher is armed and no
    /// watched element appears anywhere on the path.
    pub fn on_press(&self, path: &[K]) -> Option<Dismissal> {
        if self.state != WatchState::Armed {
            return None;
        }
        let inside = path.iter().any(|node| self.refs.contains(node));
        if inside {
            None
        } else {
            Some(Dismissal::OutsidePress)
        }
    }
}

impl<K: PartialEq> Default for OutsidePress<K> {
    fn default() -> Self {
        Self::new()
    }
}
