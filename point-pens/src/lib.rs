//! Point pens for simplifying and rebuilding glyph outlines.
//!
//! The centerpiece is [`ThresholdPointPen`], which removes on-curve points
//! that sit closer than a given distance to the previous on-curve point while
//! keeping point names, identifiers, attributes and components intact. The
//! remaining pens are the plumbing around it: [`RecordingPointPen`] to
//! capture and replay a drawing, [`PrintPointPen`] to look at one, and a
//! small [`Glyph`] that can be drawn and redrawn, which is what
//! [`threshold_glyph`] does.
//!
//! Pens are based on <https://github.com/typesupply/fontPens> and
//! <https://github.com/fonttools/fonttools/tree/main/Lib/fontTools/pens>

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod error;
mod glyph;
mod print;
mod recording;
mod threshold;

pub use error::OutlineError;
pub use glyph::{threshold_glyph, Component, Contour, Glyph, GlyphPointPen};
pub use print::PrintPointPen;
pub use recording::RecordingPointPen;
pub use threshold::{ThresholdPen, ThresholdPointPen, DEFAULT_THRESHOLD};

pub use pen_types;
