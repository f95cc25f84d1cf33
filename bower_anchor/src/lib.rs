// Copyright 2025 the Bower Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bower Anchor: pure anchored-placement resolution for floating panels.
//!
//! This crate answers one question: given the rectangle of a reference
//! (anchor) element, the size of a floating panel, and a clipping boundary,
//! where should the panel go?
//!
//! - [`Placement`] names the 12 canonical positions: a [`Side`] of the
//!   reference paired with a cross-axis [`Align`]ment.
//! - [`resolve`] computes the panel's top-left corner, flipping to the
//!   mirrored side when the requested side lacks room and clamping the
//!   cross-axis coordinate into the boundary.
//!
//! The function is pure and referentially transparent: identical inputs
//! always produce identical outputs, so hosts can test placement logic with
//! nothing but rect construction. Measuring elements, deciding *when* to
//! recompute, and applying the coordinates are the host's job (see the
//! `bower_tracker` and `bower_host` crates).
//!
//! ## Minimal example
//!
//! A panel above its reference, centered over the reference span:
//!
//! ```rust
//! use bower_anchor::{Placement, PlacementRequest, resolve};
//! use kurbo::{Rect, Size};
//!
//! let reference = Rect::new(100.0, 100.0, 150.0, 150.0);
//! let floating = Size::new(80.0, 30.0);
//! let viewport = Rect::new(0.0, 0.0, 1000.0, 1000.0);
//!
//! let result = resolve(reference, floating, viewport, &PlacementRequest::default());
//! assert_eq!((result.x, result.y), (85.0, 62.0));
//! assert_eq!(result.placement, Placement::Top);
//! ```
//!
//! ## Flip and clamp
//!
//! When the requested side does not have enough room inside the boundary and
//! the mirrored side has strictly more, the side flips while the alignment
//! suffix is preserved (`top-start` becomes `bottom-start`, never
//! `bottom-end`). Ties keep the requested side so symmetric layouts cannot
//! oscillate between sides across recomputations. After the side is final,
//! the cross-axis coordinate is clamped so the panel stays inside the
//! boundary; a panel larger than the boundary itself is aligned to the
//! boundary's leading edge and allowed to overflow rather than rejected.
//!
//! Coordinates are viewport-relative and geometry is expressed with
//! [`kurbo::Rect`] and [`kurbo::Size`], matching the rest of the Bower
//! crates. Inputs are assumed to be finite (no NaNs).
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point
//!   math.
//!
//! This crate is `no_std`.

#![no_std]

mod placement;
mod resolve;

pub use placement::{Align, Axis, Placement, Side};
pub use resolve::{PlacementRequest, PositionResult, resolve};
