//! Protocols for drawing glyph outlines
//!
//! Two flavours of pen are defined here. A segment [`Pen`] receives one call
//! per path segment, with control points folded into the segment. A
//! [`PointPen`] receives every point of a contour individually, along with
//! its [point type][PointType], name, identifier and any extra attributes,
//! which makes it the right tool when those need to survive a transformation.
//!
//! The shapes follow the fontTools pen protocols:
//! <https://fonttools.readthedocs.io/en/latest/pens/basePen.html>

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod pen;
mod point_pen;

#[cfg(all(test, feature = "serde"))]
mod serde_test;

pub use pen::{Pen, PenCommand};
pub use point_pen::{
    Attributes, ContourPoint, InvalidPointType, PointPen, PointPenCommand, PointType,
};

pub use kurbo::{Affine, Point};
