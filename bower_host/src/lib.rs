// Copyright 2025 the Bower Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bower Host: the platform seam and overlay binding lifecycle.
//!
//! The other Bower crates are pure state machines; this crate defines the
//! one trait a UI framework implements to drive them, and the object that
//! ties them together for a single overlay.
//!
//! - [`HostPlatform`]: measurement (element rects, viewport, scroll-container
//!   client rects, scrollable ancestors), listener install/remove, frame
//!   scheduling, and one-tick deferral. A DOM binding maps these onto
//!   `getBoundingClientRect`, `addEventListener`, `requestAnimationFrame`,
//!   and a microtask; a retained-scene toolkit maps them onto its own
//!   equivalents. Nothing else in the engine touches a platform API.
//! - [`OverlayBinding`]: the live association between one reference element,
//!   one floating element, and an enabled flag. It composes the tracker,
//!   the dismissal watchers, and the trigger map, and it owns every
//!   listener/frame/tick handle it acquires.
//!
//! The binding is a scoped acquisition: [`OverlayBinding::enable`] installs
//! all listeners and requests the initial placement frame in one synchronous
//! step when the panel becomes visible, and [`OverlayBinding::disable`]
//! releases every one of them — listeners removed, pending frame and arming
//! tick cancelled — before it returns. Hosts call `disable` on hide *or*
//! unmount, whichever comes first. Leaving a listener behind is not a leak
//! to shrug at: a dangling document listener mis-dismisses other overlays,
//! so teardown is a correctness property.
//!
//! Event flow, one direction: the platform's listeners feed binding entry
//! points ([`OverlayBinding::on_track_event`], [`OverlayBinding::on_frame`],
//! [`OverlayBinding::on_arm_tick`], [`OverlayBinding::on_press`],
//! [`OverlayBinding::on_key`]); the binding answers with a fresh
//! [`bower_anchor::PositionResult`] to apply or a
//! [`bower_overlay::Dismissal`] intent. Visibility state itself stays with
//! the caller — the engine only says where the panel goes and when it
//! should be told to close.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod binding;
mod host;

pub use binding::{OverlayBinding, OverlayConfig};
pub use host::{Boundary, HostPlatform, ListenTarget, ListenerKind, boundary_rect};
