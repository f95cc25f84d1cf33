// Copyright 2025 the Bower Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement resolution: main-axis coordinate, flip check, cross-axis clamp.

use kurbo::{Rect, Size};

use crate::{Align, Axis, Placement, Side};

/// Caller-supplied configuration for one placement resolution.
///
/// The clipping boundary is passed to [`resolve`] separately because it must
/// be re-derived fresh on every resolution (scrolling moves the effective
/// boundary of a scroll container), while the request itself is immutable
/// for the lifetime of an overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacementRequest {
    /// Requested placement. The resolved side may be mirrored when the
    /// requested side lacks room; the alignment is never changed.
    pub placement: Placement,
    /// Gap in pixels between the reference edge and the panel on the main axis.
    pub offset: f64,
}

impl Default for PlacementRequest {
    fn default() -> Self {
        Self {
            placement: Placement::Top,
            offset: 8.0,
        }
    }
}

/// A resolved floating-panel position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PositionResult {
    /// Left edge of the panel, in the same coordinate space as the inputs.
    pub x: f64,
    /// Top edge of the panel.
    pub y: f64,
    /// The placement actually used. The side reflects any flip; the
    /// alignment always matches the request. Always one of the 12 canonical
    /// values.
    pub placement: Placement,
}

/// Computes where a floating panel of size `floating` should be placed
/// relative to `reference`, constrained by `boundary`.
///
/// The algorithm, in order:
///
/// 1. Compute the main-axis coordinate for the requested side, offset by
///    `request.offset`.
/// 2. Compute the cross-axis coordinate from the alignment.
/// 3. Flip to the mirrored side when the requested side has less room inside
///    `boundary` than the panel needs *and* the mirrored side has strictly
///    more. Equal room keeps the requested side, so symmetric layouts are
///    stable across recomputations.
/// 4. Clamp the cross-axis coordinate so the panel stays inside `boundary`.
///    A panel wider (or taller) than the boundary itself is aligned to the
///    boundary's leading edge and overflows; this function never fails.
///
/// Pure: no measurement, no interior state, identical inputs yield
/// identical outputs.
#[must_use]
pub fn resolve(
    reference: Rect,
    floating: Size,
    boundary: Rect,
    request: &PlacementRequest,
) -> PositionResult {
    let align = request.placement.align();
    let side = choose_side(
        request.placement.side(),
        reference,
        floating,
        boundary,
        request.offset,
    );

    let main = main_coord(side, reference, floating, request.offset);
    let cross = cross_coord(side.axis(), align, reference, floating);

    let (x, y) = match side.axis() {
        Axis::Vertical => (
            clamp_cross(cross, floating.width, boundary.x0, boundary.x1),
            main,
        ),
        Axis::Horizontal => (
            main,
            clamp_cross(cross, floating.height, boundary.y0, boundary.y1),
        ),
    };

    PositionResult {
        x,
        y,
        placement: Placement::from_parts(side, align),
    }
}

/// Room available for the panel on `side`, between the reference edge and
/// the boundary edge, after subtracting the offset gap.
fn room(side: Side, reference: Rect, boundary: Rect, offset: f64) -> f64 {
    match side {
        Side::Top => reference.y0 - boundary.y0 - offset,
        Side::Bottom => boundary.y1 - reference.y1 - offset,
        Side::Left => reference.x0 - boundary.x0 - offset,
        Side::Right => boundary.x1 - reference.x1 - offset,
    }
}

fn choose_side(
    requested: Side,
    reference: Rect,
    floating: Size,
    boundary: Rect,
    offset: f64,
) -> Side {
    let needed = match requested.axis() {
        Axis::Vertical => floating.height,
        Axis::Horizontal => floating.width,
    };
    let here = room(requested, reference, boundary, offset);
    if here >= needed {
        return requested;
    }
    // Flip only when the mirror is strictly better; a tie keeps the
    // requested side so the result cannot oscillate under symmetric layouts.
    let mirrored = requested.opposite();
    if room(mirrored, reference, boundary, offset) > here {
        mirrored
    } else {
        requested
    }
}

fn main_coord(side: Side, reference: Rect, floating: Size, offset: f64) -> f64 {
    match side {
        Side::Top => reference.y0 - floating.height - offset,
        Side::Bottom => reference.y1 + offset,
        Side::Left => reference.x0 - floating.width - offset,
        Side::Right => reference.x1 + offset,
    }
}

fn cross_coord(axis: Axis, align: Align, reference: Rect, floating: Size) -> f64 {
    let (lead, trail, extent) = match axis {
        Axis::Vertical => (reference.x0, reference.x1, floating.width),
        Axis::Horizontal => (reference.y0, reference.y1, floating.height),
    };
    match align {
        Align::Start => lead,
        Align::End => trail - extent,
        Align::Center => lead + ((trail - lead) - extent) / 2.0,
    }
}

/// Clamps a cross-axis coordinate so `[value, value + extent]` stays within
/// `[lead, trail]`. An extent larger than the boundary span aligns to the
/// leading edge and overflows.
fn clamp_cross(value: f64, extent: f64, lead: f64, trail: f64) -> f64 {
    if extent <= trail - lead {
        value.clamp(lead, trail - extent)
    } else {
        lead
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1000.0, 1000.0);

    fn request(placement: Placement, offset: f64) -> PlacementRequest {
        PlacementRequest { placement, offset }
    }

    #[test]
    fn top_centered_with_ample_room() {
        // Reference 50x50 at (100, 100), panel 80x30, offset 8.
        let reference = Rect::new(100.0, 100.0, 150.0, 150.0);
        let result = resolve(
            reference,
            Size::new(80.0, 30.0),
            VIEWPORT,
            &request(Placement::Top, 8.0),
        );
        assert_eq!(result.x, 85.0);
        assert_eq!(result.y, 62.0);
        assert_eq!(result.placement, Placement::Top);
    }

    #[test]
    fn top_flips_to_bottom_when_short_on_room() {
        // Only 10px above the reference; the panel needs 30.
        let reference = Rect::new(100.0, 10.0, 150.0, 60.0);
        let result = resolve(
            reference,
            Size::new(80.0, 30.0),
            VIEWPORT,
            &request(Placement::Top, 8.0),
        );
        assert_eq!(result.x, 85.0);
        assert_eq!(result.y, 68.0);
        assert_eq!(result.placement, Placement::Bottom);
    }

    #[test]
    fn ample_room_preserves_every_placement() {
        // Reference in the middle of a large boundary: nothing flips.
        let reference = Rect::new(475.0, 475.0, 525.0, 525.0);
        for placement in Placement::ALL {
            let result = resolve(
                reference,
                Size::new(80.0, 30.0),
                VIEWPORT,
                &request(placement, 8.0),
            );
            assert_eq!(result.placement, placement);
        }
    }

    #[test]
    fn flip_keeps_alignment_suffix() {
        let reference = Rect::new(100.0, 10.0, 150.0, 60.0);
        let result = resolve(
            reference,
            Size::new(80.0, 30.0),
            VIEWPORT,
            &request(Placement::TopStart, 8.0),
        );
        assert_eq!(result.placement, Placement::BottomStart);
        // Start alignment: leading edges line up.
        assert_eq!(result.x, reference.x0);
    }

    #[test]
    fn left_and_right_main_axis() {
        let reference = Rect::new(100.0, 100.0, 150.0, 150.0);
        let left = resolve(
            reference,
            Size::new(80.0, 30.0),
            VIEWPORT,
            &request(Placement::Left, 8.0),
        );
        assert_eq!((left.x, left.y), (12.0, 110.0));
        assert_eq!(left.placement, Placement::Left);

        let right = resolve(
            reference,
            Size::new(80.0, 30.0),
            VIEWPORT,
            &request(Placement::Right, 8.0),
        );
        assert_eq!((right.x, right.y), (158.0, 110.0));
        assert_eq!(right.placement, Placement::Right);
    }

    #[test]
    fn left_flips_to_right_near_the_edge() {
        let reference = Rect::new(5.0, 100.0, 55.0, 150.0);
        let result = resolve(
            reference,
            Size::new(80.0, 30.0),
            VIEWPORT,
            &request(Placement::LeftEnd, 8.0),
        );
        assert_eq!(result.placement, Placement::RightEnd);
        assert_eq!(result.x, 63.0);
        // End alignment: trailing edges line up.
        assert_eq!(result.y, reference.y1 - 30.0);
    }

    #[test]
    fn tied_room_keeps_the_requested_side() {
        // Reference centered in a small boundary: 40px of room on both
        // sides, panel needs 45. Neither side fits, both tie; the requested
        // side must win so the placement cannot oscillate.
        let boundary = Rect::new(0.0, 0.0, 100.0, 100.0);
        let reference = Rect::new(40.0, 40.0, 60.0, 60.0);
        let result = resolve(
            reference,
            Size::new(10.0, 45.0),
            boundary,
            &request(Placement::Top, 0.0),
        );
        assert_eq!(result.placement, Placement::Top);
    }

    #[test]
    fn cross_axis_clamps_to_leading_boundary_edge() {
        // Centering would push the panel past the left boundary edge.
        let reference = Rect::new(2.0, 100.0, 12.0, 110.0);
        let result = resolve(
            reference,
            Size::new(40.0, 20.0),
            VIEWPORT,
            &request(Placement::Bottom, 8.0),
        );
        assert_eq!(result.x, 0.0);
        assert_eq!(result.y, 118.0);
        assert_eq!(result.placement, Placement::Bottom);
    }

    #[test]
    fn cross_axis_clamps_to_trailing_boundary_edge() {
        let reference = Rect::new(985.0, 100.0, 995.0, 110.0);
        let result = resolve(
            reference,
            Size::new(40.0, 20.0),
            VIEWPORT,
            &request(Placement::Bottom, 8.0),
        );
        assert_eq!(result.x, 960.0);
    }

    #[test]
    fn contained_result_stays_inside_boundary() {
        // Whenever the panel fits on the cross axis, the resolved extent
        // must lie inside the boundary for every placement.
        let reference = Rect::new(30.0, 30.0, 80.0, 80.0);
        let floating = Size::new(60.0, 40.0);
        let boundary = Rect::new(10.0, 10.0, 400.0, 300.0);
        for placement in Placement::ALL {
            let result = resolve(reference, floating, boundary, &request(placement, 8.0));
            match result.placement.side().axis() {
                Axis::Vertical => {
                    assert!(result.x >= boundary.x0);
                    assert!(result.x + floating.width <= boundary.x1);
                }
                Axis::Horizontal => {
                    assert!(result.y >= boundary.y0);
                    assert!(result.y + floating.height <= boundary.y1);
                }
            }
        }
    }

    #[test]
    fn oversized_panel_aligns_to_leading_edge() {
        // Panel wider than the whole boundary: left-align and overflow.
        let reference = Rect::new(400.0, 400.0, 450.0, 450.0);
        let boundary = Rect::new(0.0, 0.0, 1000.0, 1000.0);
        let result = resolve(
            reference,
            Size::new(2000.0, 30.0),
            boundary,
            &request(Placement::Top, 8.0),
        );
        assert_eq!(result.x, 0.0);
        assert_eq!(result.placement, Placement::Top);
    }

    #[test]
    fn resolve_is_idempotent() {
        let reference = Rect::new(100.0, 10.0, 150.0, 60.0);
        let req = request(Placement::TopEnd, 8.0);
        let first = resolve(reference, Size::new(80.0, 30.0), VIEWPORT, &req);
        let second = resolve(reference, Size::new(80.0, 30.0), VIEWPORT, &req);
        assert_eq!(first, second);
    }

    #[test]
    fn boundary_origin_is_respected() {
        // A scroll-container boundary does not start at the viewport origin.
        let boundary = Rect::new(200.0, 200.0, 600.0, 600.0);
        let reference = Rect::new(205.0, 300.0, 215.0, 310.0);
        let result = resolve(
            reference,
            Size::new(100.0, 20.0),
            boundary,
            &request(Placement::Bottom, 8.0),
        );
        assert_eq!(result.x, boundary.x0);
    }
}
