// Copyright 2025 the Bower Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bower Tracker: frame-coalesced position tracking for visible panels.
//!
//! While a floating panel is visible, its position must follow the reference
//! element through scrolls, resizes, and layout mutations. This crate owns
//! the control flow of that loop without touching any platform API:
//!
//! - The host installs the actual listeners (window scroll/resize, scroll
//!   ancestors, mutation observation) and owns a frame scheduler.
//! - Each listener forwards a [`TrackEvent`] to [`Tracker::notify`], which
//!   tells the host whether a frame callback must be scheduled. Events
//!   arriving while a frame is already pending coalesce into it, so rapid
//!   scrolling costs at most one recomputation per frame.
//! - When the frame fires, [`Tracker::on_frame`] re-measures both elements
//!   and the boundary through an [`AnchorSource`] and resolves a fresh
//!   [`PositionResult`].
//!
//! [`Tracker::start`] is idempotent and requests the initial placement
//! frame. [`Tracker::stop`] deactivates synchronously: it reports whether a
//! scheduled frame must be cancelled, and a frame that fires anyway is
//! ignored, so no update can be observed after `stop` returns. An inactive
//! tracker ignores every event; there is no idle polling while the panel is
//! hidden.
//!
//! A single pending frame also gives the ordering guarantee hosts rely on:
//! coalesced updates drop superseded intermediate positions but can never
//! reorder the final one.
//!
//! ## Minimal example
//!
//! ```rust
//! use bower_anchor::PlacementRequest;
//! use bower_tracker::{AnchorSource, FrameRequest, TrackEvent, Tracker};
//! use kurbo::{Rect, Size};
//!
//! struct Fixed;
//! impl AnchorSource for Fixed {
//!     fn reference_rect(&self) -> Option<Rect> {
//!         Some(Rect::new(100.0, 100.0, 150.0, 150.0))
//!     }
//!     fn floating_size(&self) -> Option<Size> {
//!         Some(Size::new(80.0, 30.0))
//!     }
//!     fn boundary_rect(&self) -> Rect {
//!         Rect::new(0.0, 0.0, 1000.0, 1000.0)
//!     }
//! }
//!
//! let mut tracker = Tracker::new(PlacementRequest::default());
//! assert_eq!(tracker.start(), FrameRequest::Schedule);
//!
//! // Two scrolls in the same frame coalesce into one recomputation.
//! assert_eq!(tracker.notify(TrackEvent::Scroll), FrameRequest::AlreadyPending);
//! let position = tracker.on_frame(&Fixed).unwrap();
//! assert_eq!((position.x, position.y), (85.0, 62.0));
//! ```
//!
//! Vanished elements (a reference removed from the document between the
//! triggering event and the frame) make `on_frame` return `None`: the single
//! update is dropped silently and the loop waits for the next event. A popup
//! engine must never take its host page down.
//!
//! This crate is `no_std`.

#![no_std]

use bower_anchor::{PlacementRequest, PositionResult, resolve};
use kurbo::{Rect, Size};

/// Measurement source for one tracked overlay, supplied by the host.
///
/// Every method is called fresh on every frame; implementations must not
/// cache rects across frames. `None` from either element accessor means the
/// node is gone (detached mid-update) and the frame is dropped silently.
pub trait AnchorSource {
    /// Current viewport-space rectangle of the reference element, if it is
    /// still attached.
    fn reference_rect(&self) -> Option<Rect>;
    /// Current size of the floating panel, if it is still attached.
    fn floating_size(&self) -> Option<Size>;
    /// Current clipping boundary: the viewport rect, or the visible client
    /// rect of a designated scroll container. Never memoized.
    fn boundary_rect(&self) -> Rect;
}

bitflags::bitflags! {
    /// Accumulated reasons the pending frame was requested.
    ///
    /// Coalescing folds every event between two frames into one set; hosts
    /// can read it via [`Tracker::pending_reasons`] for instrumentation.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct WakeReasons: u8 {
        /// Initial placement requested by [`Tracker::start`].
        const INITIAL  = 0b0000_0001;
        /// A scroll on the window or a scrollable ancestor.
        const SCROLL   = 0b0000_0010;
        /// A window resize.
        const RESIZE   = 0b0000_0100;
        /// A size/position mutation of the reference element.
        const MUTATION = 0b0000_1000;
    }
}

/// An event that may have moved the reference on screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TrackEvent {
    /// Scroll on the window or any scrollable ancestor of the reference.
    Scroll,
    /// Window resize.
    Resize,
    /// Size or position mutation of the reference element.
    Mutation,
}

impl TrackEvent {
    /// The wake-reason bit this event contributes to the pending frame.
    #[must_use]
    pub const fn reason(self) -> WakeReasons {
        match self {
            Self::Scroll => WakeReasons::SCROLL,
            Self::Resize => WakeReasons::RESIZE,
            Self::Mutation => WakeReasons::MUTATION,
        }
    }
}

/// What the host scheduler must do after feeding the tracker.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FrameRequest {
    /// Schedule one frame callback that will call [`Tracker::on_frame`].
    Schedule,
    /// A frame is already pending; the event coalesced into it.
    AlreadyPending,
    /// The tracker is inactive (or already active on `start`); do nothing.
    Ignored,
}

/// Event-driven controller that re-resolves a panel position at most once
/// per frame while active.
///
/// One tracker per overlay binding; it holds no element handles and no
/// cached geometry, only the placement request and the coalescing state.
#[derive(Clone, Debug)]
pub struct Tracker {
    request: PlacementRequest,
    active: bool,
    pending: WakeReasons,
}

impl Tracker {
    /// Creates an inactive tracker for the given placement request.
    #[must_use]
    pub fn new(request: PlacementRequest) -> Self {
        Self {
            request,
            active: false,
            pending: WakeReasons::empty(),
        }
    }

    /// Whether the tracker is currently active (panel visible).
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Whether a frame callback is expected to fire.
    #[must_use]
    pub const fn frame_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// The accumulated wake reasons of the pending frame.
    #[must_use]
    pub const fn pending_reasons(&self) -> WakeReasons {
        self.pending
    }

    /// The placement request used for each resolution.
    #[must_use]
    pub const fn request(&self) -> &PlacementRequest {
        &self.request
    }

    /// Replaces the placement request.
    ///
    /// Returns [`FrameRequest::Schedule`] when the panel is visible and must
    /// be repositioned under the new request.
    pub fn set_request(&mut self, request: PlacementRequest) -> FrameRequest {
        self.request = request;
        if !self.active {
            return FrameRequest::Ignored;
        }
        self.wake(WakeReasons::MUTATION)
    }

    /// Activates the tracker and requests the initial placement frame.
    ///
    /// Idempotent: starting an already active tracker is a no-op and returns
    /// [`FrameRequest::Ignored`].
    pub fn start(&mut self) -> FrameRequest {
        if self.active {
            return FrameRequest::Ignored;
        }
        self.active = true;
        self.wake(WakeReasons::INITIAL)
    }

    /// Deactivates the tracker synchronously.
    ///
    /// Returns `true` when a frame callback was pending and the host must
    /// cancel it. Either way, a frame that fires after `stop` returns is
    /// ignored by [`Tracker::on_frame`]; no update escapes a stopped
    /// tracker.
    pub fn stop(&mut self) -> bool {
        self.active = false;
        let had_pending = !self.pending.is_empty();
        self.pending = WakeReasons::empty();
        had_pending
    }

    /// Records an event that may have moved the reference.
    ///
    /// Returns what the host scheduler must do. Events on an inactive
    /// tracker are ignored outright; the loop must not run while the panel
    /// is hidden.
    pub fn notify(&mut self, event: TrackEvent) -> FrameRequest {
        if !self.active {
            return FrameRequest::Ignored;
        }
        self.wake(event.reason())
    }

    /// Runs one coalesced recomputation; call from the scheduled frame.
    ///
    /// Returns `None` without side effects when the tracker was stopped
    /// before the frame fired, when the frame is stale (nothing pending), or
    /// when either element has vanished since the triggering event. In the
    /// vanished case the pending state is still consumed, so the next event
    /// schedules a fresh frame.
    pub fn on_frame<S: AnchorSource>(&mut self, source: &S) -> Option<PositionResult> {
        if !self.active || self.pending.is_empty() {
            return None;
        }
        self.pending = WakeReasons::empty();

        let reference = source.reference_rect()?;
        let floating = source.floating_size()?;
        // The boundary is re-derived every frame; a scrolled container moves
        // the effective clip.
        let boundary = source.boundary_rect();
        Some(resolve(reference, floating, boundary, &self.request))
    }

    fn wake(&mut self, reason: WakeReasons) -> FrameRequest {
        let already = !self.pending.is_empty();
        self.pending |= reason;
        if already {
            FrameRequest::AlreadyPending
        } else {
            FrameRequest::Schedule
        }
    }
}
