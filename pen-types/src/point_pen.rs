//! The point pen protocol.

use core::fmt;
use core::str::FromStr;

use indexmap::IndexMap;
use kurbo::{Affine, Point};

/// Extra per-point data that pens carry along without looking at it.
pub type Attributes = IndexMap<String, String>;

/// Interface for accepting the points of an outline one at a time.
///
/// Calls arrive in the order `begin_path`, zero or more `add_point`,
/// `end_path`, repeated once per contour. Components may be added between
/// contours.
///
/// AbstractPointPen in Python terms.
/// <https://github.com/fonttools/fonttools/blob/78e10d8b42095b709cd4125e592d914d3ed1558e/Lib/fontTools/pens/pointPen.py#L40>
pub trait PointPen {
    /// Start a new contour.
    fn begin_path(&mut self, identifier: Option<&str>);

    /// Finish the current contour.
    fn end_path(&mut self);

    /// Add a point to the current contour.
    fn add_point(&mut self, point: ContourPoint);

    /// Add a reference to another glyph, placed with `transform`.
    fn add_component(&mut self, base: &str, transform: Affine, identifier: Option<&str>);
}

impl<P: PointPen + ?Sized> PointPen for &mut P {
    fn begin_path(&mut self, identifier: Option<&str>) {
        (**self).begin_path(identifier)
    }

    fn end_path(&mut self) {
        (**self).end_path()
    }

    fn add_point(&mut self, point: ContourPoint) {
        (**self).add_point(point)
    }

    fn add_component(&mut self, base: &str, transform: Affine, identifier: Option<&str>) {
        (**self).add_component(base, transform, identifier)
    }
}

/// The role of a point within its contour.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PointType {
    /// The first point of an open contour.
    Move,
    /// The end of a straight segment.
    Line,
    /// A control point, only meaningful next to an on-curve point.
    #[default]
    OffCurve,
    /// The end of a cubic segment.
    Curve,
    /// The end of a quadratic segment.
    QCurve,
}

impl PointType {
    /// Returns `true` for every type except [`PointType::OffCurve`].
    pub fn is_on_curve(self) -> bool {
        self != PointType::OffCurve
    }

    /// The name of this type in the fontTools and UFO vocabulary.
    pub fn as_str(self) -> &'static str {
        match self {
            PointType::Move => "move",
            PointType::Line => "line",
            PointType::OffCurve => "offcurve",
            PointType::Curve => "curve",
            PointType::QCurve => "qcurve",
        }
    }
}

impl fmt::Display for PointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error returned when parsing an unknown point type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidPointType(pub String);

impl fmt::Display for InvalidPointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown point type '{}'", self.0)
    }
}

impl std::error::Error for InvalidPointType {}

impl FromStr for PointType {
    type Err = InvalidPointType;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        match src {
            "move" => Ok(PointType::Move),
            "line" => Ok(PointType::Line),
            "offcurve" => Ok(PointType::OffCurve),
            "curve" => Ok(PointType::Curve),
            "qcurve" => Ok(PointType::QCurve),
            other => Err(InvalidPointType(other.to_owned())),
        }
    }
}

/// A single point of a contour, with everything a point pen passes along.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContourPoint {
    pub pt: Point,
    pub typ: PointType,
    /// Advisory; pens forward it untouched.
    pub smooth: bool,
    pub name: Option<String>,
    pub identifier: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "IndexMap::is_empty"))]
    pub attributes: Attributes,
}

impl ContourPoint {
    /// Creates a new point at (x, y) with no name, identifier or attributes.
    pub fn new(x: f64, y: f64, typ: PointType) -> Self {
        Self {
            pt: Point::new(x, y),
            typ,
            ..Default::default()
        }
    }

    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn is_on_curve(&self) -> bool {
        self.typ.is_on_curve()
    }
}

/// A single recorded [`PointPen`] call.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointPenCommand {
    BeginPath {
        identifier: Option<String>,
    },
    EndPath,
    AddPoint(ContourPoint),
    AddComponent {
        base: String,
        transform: Affine,
        identifier: Option<String>,
    },
}

impl PointPenCommand {
    /// Issue this command on `pen`.
    pub fn apply_to(&self, pen: &mut impl PointPen) {
        match self {
            PointPenCommand::BeginPath { identifier } => pen.begin_path(identifier.as_deref()),
            PointPenCommand::EndPath => pen.end_path(),
            PointPenCommand::AddPoint(point) => pen.add_point(point.clone()),
            PointPenCommand::AddComponent {
                base,
                transform,
                identifier,
            } => pen.add_component(base, *transform, identifier.as_deref()),
        }
    }
}
