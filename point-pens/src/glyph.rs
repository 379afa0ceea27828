//! A minimal in-memory glyph that can be drawn and redrawn with point pens.

use kurbo::Affine;
use pen_types::{ContourPoint, PointPen, PointType};

use crate::{error::OutlineError, RecordingPointPen, ThresholdPointPen};

/// A glyph's outline: contours and references to other glyphs.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Glyph {
    pub name: String,
    /// Advance width. Redrawing the outline, as [`threshold_glyph`] does,
    /// leaves it alone.
    pub width: f64,
    pub contours: Vec<Contour>,
    pub components: Vec<Component>,
}

/// A single closed or open path.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contour {
    pub identifier: Option<String>,
    pub points: Vec<ContourPoint>,
}

/// A reference to another glyph.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Component {
    pub base: String,
    pub transform: Affine,
    pub identifier: Option<String>,
}

impl Contour {
    pub fn new(points: Vec<ContourPoint>) -> Self {
        Self {
            identifier: None,
            points,
        }
    }

    /// A contour is open when it starts with a move point.
    pub fn is_closed(&self) -> bool {
        self.points
            .first()
            .is_none_or(|point| point.typ != PointType::Move)
    }

    pub fn draw_points(&self, pen: &mut impl PointPen) {
        pen.begin_path(self.identifier.as_deref());
        for point in &self.points {
            pen.add_point(point.clone());
        }
        pen.end_path();
    }
}

impl Glyph {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Total number of points across all contours.
    pub fn point_count(&self) -> usize {
        self.contours.iter().map(|c| c.points.len()).sum()
    }

    /// Draw all contours, then all components, into `pen`.
    pub fn draw_points(&self, pen: &mut impl PointPen) {
        for contour in &self.contours {
            contour.draw_points(pen);
        }
        for component in &self.components {
            pen.add_component(
                &component.base,
                component.transform,
                component.identifier.as_deref(),
            );
        }
    }

    /// Removes all contours and components.
    pub fn clear(&mut self) {
        self.contours.clear();
        self.components.clear();
    }

    /// Returns a pen that appends to this glyph's outline.
    ///
    /// Call [`GlyphPointPen::finish`] when done to find out whether the
    /// calls described a valid outline.
    pub fn point_pen(&mut self) -> GlyphPointPen<'_> {
        GlyphPointPen {
            glyph: self,
            current: None,
            error: None,
        }
    }
}

/// A point pen that builds contours and components into a [`Glyph`].
///
/// Pen calls cannot fail, so the first invalid call is remembered and
/// everything after it is ignored. Empty contours are skipped.
pub struct GlyphPointPen<'a> {
    glyph: &'a mut Glyph,
    current: Option<Contour>,
    error: Option<OutlineError>,
}

impl GlyphPointPen<'_> {
    /// Finish drawing, reporting the first invalid call if there was one.
    ///
    /// Requires an explicit call to afford the client the opportunity to receive errors.
    pub fn finish(self) -> Result<(), OutlineError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        if self.current.is_some() {
            return Err(OutlineError::UnfinishedPath);
        }
        Ok(())
    }

    fn fail(&mut self, error: OutlineError) {
        log::debug!("glyph '{}': {error}", self.glyph.name);
        self.error = Some(error);
    }
}

impl PointPen for GlyphPointPen<'_> {
    fn begin_path(&mut self, identifier: Option<&str>) {
        if self.error.is_some() {
            return;
        }
        if self.current.is_some() {
            return self.fail(OutlineError::UnfinishedPath);
        }
        self.current = Some(Contour {
            identifier: identifier.map(str::to_owned),
            points: Vec::new(),
        });
    }

    fn end_path(&mut self) {
        if self.error.is_some() {
            return;
        }
        match self.current.take() {
            Some(contour) if contour.points.is_empty() => {
                log::debug!("glyph '{}': skipping empty contour", self.glyph.name);
            }
            Some(contour) => self.glyph.contours.push(contour),
            None => self.fail(OutlineError::PathNotStarted),
        }
    }

    fn add_point(&mut self, point: ContourPoint) {
        if self.error.is_some() {
            return;
        }
        let Some(contour) = self.current.as_mut() else {
            return self.fail(OutlineError::PathNotStarted);
        };
        if point.typ == PointType::Move && !contour.points.is_empty() {
            let error = OutlineError::UnexpectedMove {
                contour: self.glyph.contours.len(),
                point: contour.points.len(),
            };
            return self.fail(error);
        }
        contour.points.push(point);
    }

    fn add_component(&mut self, base: &str, transform: Affine, identifier: Option<&str>) {
        if self.error.is_some() {
            return;
        }
        self.glyph.components.push(Component {
            base: base.to_owned(),
            transform,
            identifier: identifier.map(str::to_owned),
        });
    }
}

/// Removes on-curve points closer than `threshold` to their predecessor from
/// `glyph`, in place.
///
/// Components are kept as they are. On error `glyph` is left untouched.
pub fn threshold_glyph(glyph: &mut Glyph, threshold: f64) -> Result<(), OutlineError> {
    let before = glyph.point_count();
    let mut recording = RecordingPointPen::new();
    let mut filter = ThresholdPointPen::new(&mut recording, threshold);
    glyph.draw_points(&mut filter);

    let mut rebuilt = Glyph::new(glyph.name.clone());
    let mut pen = rebuilt.point_pen();
    recording.replay(&mut pen);
    pen.finish()?;
    glyph.contours = rebuilt.contours;
    glyph.components = rebuilt.components;
    log::debug!(
        "glyph '{}': {before} points reduced to {} with threshold {threshold}",
        glyph.name,
        glyph.point_count()
    );
    Ok(())
}
