//! Errors that occur while drawing into a glyph

use core::fmt;

/// A call sequence that does not describe a valid outline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutlineError {
    /// `add_point` or `end_path` was called outside of a contour.
    PathNotStarted,
    /// `begin_path` was called inside a contour, or drawing finished with a
    /// contour still open.
    UnfinishedPath,
    /// A move point that is not the first point of its contour.
    UnexpectedMove { contour: usize, point: usize },
}

impl fmt::Display for OutlineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutlineError::PathNotStarted => {
                f.write_str("must call begin_path() before add_point() or end_path()")
            }
            OutlineError::UnfinishedPath => {
                f.write_str("unfinished contour, end_path() must be called first")
            }
            OutlineError::UnexpectedMove { contour, point } => write!(
                f,
                "move point at index {point} of contour {contour}, only the first point may be a move"
            ),
        }
    }
}

impl std::error::Error for OutlineError {}
