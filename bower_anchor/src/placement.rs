// Copyright 2025 the Bower Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement vocabulary: sides, alignments, and the 12 canonical placements.

/// Axis along which a side's main-axis coordinate runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The main axis is horizontal (left/right sides).
    Horizontal,
    /// The main axis is vertical (top/bottom sides).
    Vertical,
}

/// The side of the reference element a floating panel attaches to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Above the reference.
    Top,
    /// Below the reference.
    Bottom,
    /// To the left of the reference.
    Left,
    /// To the right of the reference.
    Right,
}

impl Side {
    /// Returns the mirrored side (top↔bottom, left↔right).
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the axis along which this side's main coordinate runs.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }
}

/// Cross-axis alignment of the floating panel against the reference span.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Align {
    /// Center the panel over the reference span (no suffix).
    Center,
    /// Align the panel's leading edge with the reference's leading edge.
    Start,
    /// Align the panel's trailing edge with the reference's trailing edge.
    End,
}

/// One of the 12 canonical placements: a [`Side`] paired with an [`Align`].
///
/// The unsuffixed variants (`Top`, `Bottom`, `Left`, `Right`) center the
/// panel over the reference span on the cross axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Above, centered.
    Top,
    /// Above, leading edges aligned.
    TopStart,
    /// Above, trailing edges aligned.
    TopEnd,
    /// Below, centered.
    Bottom,
    /// Below, leading edges aligned.
    BottomStart,
    /// Below, trailing edges aligned.
    BottomEnd,
    /// Left, centered.
    Left,
    /// Left, leading edges aligned.
    LeftStart,
    /// Left, trailing edges aligned.
    LeftEnd,
    /// Right, centered.
    Right,
    /// Right, leading edges aligned.
    RightStart,
    /// Right, trailing edges aligned.
    RightEnd,
}

impl Placement {
    /// All 12 canonical placements, in declaration order.
    pub const ALL: [Self; 12] = [
        Self::Top,
        Self::TopStart,
        Self::TopEnd,
        Self::Bottom,
        Self::BottomStart,
        Self::BottomEnd,
        Self::Left,
        Self::LeftStart,
        Self::LeftEnd,
        Self::Right,
        Self::RightStart,
        Self::RightEnd,
    ];

    /// Returns the side component of this placement.
    #[must_use]
    pub const fn side(self) -> Side {
        match self {
            Self::Top | Self::TopStart | Self::TopEnd => Side::Top,
            Self::Bottom | Self::BottomStart | Self::BottomEnd => Side::Bottom,
            Self::Left | Self::LeftStart | Self::LeftEnd => Side::Left,
            Self::Right | Self::RightStart | Self::RightEnd => Side::Right,
        }
    }

    /// Returns the alignment component of this placement.
    #[must_use]
    pub const fn align(self) -> Align {
        match self {
            Self::Top | Self::Bottom | Self::Left | Self::Right => Align::Center,
            Self::TopStart | Self::BottomStart | Self::LeftStart | Self::RightStart => Align::Start,
            Self::TopEnd | Self::BottomEnd | Self::LeftEnd | Self::RightEnd => Align::End,
        }
    }

    /// Recombines a side and an alignment into a canonical placement.
    #[must_use]
    pub const fn from_parts(side: Side, align: Align) -> Self {
        match (side, align) {
            (Side::Top, Align::Center) => Self::Top,
            (Side::Top, Align::Start) => Self::TopStart,
            (Side::Top, Align::End) => Self::TopEnd,
            (Side::Bottom, Align::Center) => Self::Bottom,
            (Side::Bottom, Align::Start) => Self::BottomStart,
            (Side::Bottom, Align::End) => Self::BottomEnd,
            (Side::Left, Align::Center) => Self::Left,
            (Side::Left, Align::Start) => Self::LeftStart,
            (Side::Left, Align::End) => Self::LeftEnd,
            (Side::Right, Align::Center) => Self::Right,
            (Side::Right, Align::Start) => Self::RightStart,
            (Side::Right, Align::End) => Self::RightEnd,
        }
    }

    /// Returns the placement with the side mirrored and the alignment kept.
    ///
    /// This is the placement a flip produces: `TopStart.flipped()` is
    /// `BottomStart`, never `BottomEnd`.
    #[must_use]
    pub const fn flipped(self) -> Self {
        Self::from_parts(self.side().opposite(), self.align())
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::Top
    }
}
