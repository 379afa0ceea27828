//! Pens that drop on-curve points sitting too close to their predecessor.
//!
//! Based on fontPens' `ThresholdPen` and `ThresholdPointPen`.

use kurbo::{Affine, Point};
use pen_types::{ContourPoint, Pen, PointPen, PointType};

/// The distance used by [`ThresholdPointPen::with_default_threshold`].
pub const DEFAULT_THRESHOLD: f64 = 10.0;

#[derive(Copy, Clone, Debug, PartialEq)]
enum State {
    /// No on-curve point has been kept since the contour started.
    AwaitingAnchor,
    /// The last on-curve point that made it to the inner pen.
    Anchored(Point),
}

/// A point pen that removes on-curve points closer than `threshold` to the
/// last on-curve point it kept.
///
/// Off-curve points are held back until the on-curve point they lead up to
/// is decided: they are forwarded right before it when it is kept and
/// thrown away with it otherwise. Because a dropped point never becomes the
/// reference, a run of close points collapses onto the last kept one.
///
/// The first on-curve point of every contour is always kept, as is every
/// `move` point. Components are forwarded untouched.
///
/// Trailing off-curve points of a contour (those after its last on-curve
/// point) are never forwarded.
pub struct ThresholdPointPen<'a, P> {
    inner: &'a mut P,
    threshold: f64,
    state: State,
    pending_offcurves: Vec<ContourPoint>,
}

impl<'a, P: PointPen> ThresholdPointPen<'a, P> {
    pub fn new(inner: &'a mut P, threshold: f64) -> Self {
        Self {
            inner,
            threshold,
            state: State::AwaitingAnchor,
            pending_offcurves: Vec::new(),
        }
    }

    /// Creates a new pen that uses [`DEFAULT_THRESHOLD`].
    pub fn with_default_threshold(inner: &'a mut P) -> Self {
        Self::new(inner, DEFAULT_THRESHOLD)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    fn discard_pending(&mut self) {
        if !self.pending_offcurves.is_empty() {
            log::trace!(
                "discarding {} orphaned off-curve points",
                self.pending_offcurves.len()
            );
            self.pending_offcurves.clear();
        }
    }

    fn keep(&mut self, point: ContourPoint) {
        for offcurve in self.pending_offcurves.drain(..) {
            self.inner.add_point(offcurve);
        }
        self.state = State::Anchored(point.pt);
        self.inner.add_point(point);
    }
}

impl<P: PointPen> PointPen for ThresholdPointPen<'_, P> {
    fn begin_path(&mut self, identifier: Option<&str>) {
        self.inner.begin_path(identifier);
        self.state = State::AwaitingAnchor;
        self.pending_offcurves.clear();
    }

    fn end_path(&mut self) {
        self.inner.end_path();
    }

    fn add_point(&mut self, point: ContourPoint) {
        match (point.typ, self.state) {
            (PointType::OffCurve, _) => self.pending_offcurves.push(point),
            (PointType::Move, _) | (_, State::AwaitingAnchor) => {
                self.discard_pending();
                self.keep(point);
            }
            (PointType::Line | PointType::Curve | PointType::QCurve, State::Anchored(last)) => {
                let distance = point.pt.distance(last);
                if distance >= self.threshold {
                    self.keep(point);
                } else {
                    log::trace!(
                        "dropping {} point at ({}, {}), {distance} from ({}, {})",
                        point.typ,
                        point.pt.x,
                        point.pt.y,
                        last.x,
                        last.y,
                    );
                    self.pending_offcurves.clear();
                }
            }
        }
    }

    fn add_component(&mut self, base: &str, transform: Affine, identifier: Option<&str>) {
        self.inner.add_component(base, transform, identifier);
    }
}

/// A segment pen that removes segments ending closer than `threshold` to
/// the end of the last segment it kept.
///
/// The whole segment goes, control points included. Moves and closes are
/// always forwarded.
pub struct ThresholdPen<'a, T: Pen> {
    inner_pen: &'a mut T,
    threshold: f32,
    last_end: Option<(f32, f32)>,
}

impl<'a, T: Pen> ThresholdPen<'a, T> {
    pub fn new(inner_pen: &'a mut T, threshold: f32) -> ThresholdPen<'a, T> {
        ThresholdPen {
            inner_pen,
            threshold,
            last_end: None,
        }
    }

    /// Returns `true` and records the new end point if a segment ending at
    /// (x, y) should be kept.
    fn accept(&mut self, x: f32, y: f32) -> bool {
        let keep = match self.last_end {
            Some((last_x, last_y)) => (x - last_x).hypot(y - last_y) >= self.threshold,
            None => true,
        };
        if keep {
            self.last_end = Some((x, y));
        } else {
            log::trace!("dropping segment ending at ({x}, {y})");
        }
        keep
    }
}

impl<T: Pen> Pen for ThresholdPen<'_, T> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.last_end = Some((x, y));
        self.inner_pen.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        if self.accept(x, y) {
            self.inner_pen.line_to(x, y);
        }
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        if self.accept(x, y) {
            self.inner_pen.quad_to(cx0, cy0, x, y);
        }
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        if self.accept(x, y) {
            self.inner_pen.curve_to(cx0, cy0, cx1, cy1, x, y);
        }
    }

    fn close(&mut self) {
        self.inner_pen.close();
    }
}
