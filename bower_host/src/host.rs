// Copyright 2025 the Bower Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The platform trait a UI framework implements to host the engine.

use kurbo::{Rect, Size};
use smallvec::SmallVec;

/// Where overflow checks clip: the viewport, or a designated scrollable
/// container.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Boundary<E> {
    /// The window viewport rectangle.
    Viewport,
    /// The visible client rectangle of a scroll container.
    Container(E),
}

impl<E> Default for Boundary<E> {
    fn default() -> Self {
        Self::Viewport
    }
}

/// The event classes a binding asks the platform to listen for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Scroll events.
    Scroll,
    /// Window resize.
    Resize,
    /// Size/position mutation of an element.
    Mutation,
    /// Pointer press (click/tap).
    Press,
    /// Key press.
    Key,
}

/// What a listener attaches to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ListenTarget<E> {
    /// The window object.
    Window,
    /// The document root.
    Document,
    /// A specific element.
    Element(E),
}

/// Platform services a host framework provides to the engine.
///
/// Measurement methods are called fresh on every resolution and must not
/// memoize; `None` means the element is no longer attached, which the
/// engine treats as "drop this one update silently", never as an error.
///
/// Listener and scheduling methods hand out host-owned ids. The engine
/// stores and returns them verbatim; it never forges or reuses one, so a
/// binding can only ever tear down what it installed itself.
pub trait HostPlatform {
    /// Handle to a live element (a DOM node, a box-tree id, …).
    type Element: Copy + Eq;
    /// Id of an installed listener.
    type ListenerId: Copy + Eq;
    /// Id of a requested frame callback.
    type FrameId: Copy + Eq;
    /// Id of a scheduled one-tick deferral.
    type TickId: Copy + Eq;

    /// Viewport-space rectangle of an element, if still attached.
    fn element_rect(&self, element: Self::Element) -> Option<Rect>;

    /// Current outer size of an element, if still attached.
    fn element_size(&self, element: Self::Element) -> Option<Size>;

    /// The window viewport rectangle, `(0, 0, innerWidth, innerHeight)`.
    fn viewport_rect(&self) -> Rect;

    /// Visible client rectangle of a scroll container, if still attached.
    fn client_rect(&self, container: Self::Element) -> Option<Rect>;

    /// Every scrollable ancestor of `element`, up to the document root.
    fn scroll_parents(&self, element: Self::Element) -> SmallVec<[Self::Element; 4]>;

    /// Installs a listener; the caller owns the returned id.
    fn listen(&mut self, target: ListenTarget<Self::Element>, kind: ListenerKind)
    -> Self::ListenerId;

    /// Removes a previously installed listener.
    fn unlisten(&mut self, listener: Self::ListenerId);

    /// Schedules a frame callback (animation frame or equivalent).
    fn request_frame(&mut self) -> Self::FrameId;

    /// Cancels a scheduled frame callback that has not fired.
    fn cancel_frame(&mut self, frame: Self::FrameId);

    /// Schedules a one-tick deferral (microtask/next-tick or equivalent).
    fn defer_tick(&mut self) -> Self::TickId;

    /// Cancels a scheduled deferral that has not fired.
    fn cancel_tick(&mut self, tick: Self::TickId);
}

/// Resolves a [`Boundary`] to its current clipping rectangle.
///
/// Called fresh on every resolution — scrolling moves a container's
/// effective boundary, so the result is never memoized. A container that
/// has vanished falls back to the viewport rather than failing.
pub fn boundary_rect<P: HostPlatform>(platform: &P, boundary: &Boundary<P::Element>) -> Rect {
    match boundary {
        Boundary::Viewport => platform.viewport_rect(),
        Boundary::Container(container) => platform
            .client_rect(*container)
            .unwrap_or_else(|| platform.viewport_rect()),
    }
}
