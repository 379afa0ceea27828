//! A point pen that writes out the calls it receives.

use core::fmt::{self, Write};

use kurbo::{Affine, Point};
use pen_types::{ContourPoint, PointPen, PointType};

/// Point pen that renders each call as a line of fontTools style Python.
///
/// Handy for eyeballing what a chain of pens produced:
///
/// ```text
/// pen.beginPath()
/// pen.addPoint((100, 100), segmentType='line')
/// pen.addPoint((634, 800))
/// pen.endPath()
/// pen.addComponent('a', (1, 0, 0, 1, 0, 0))
/// ```
#[derive(Clone, Default, Debug)]
pub struct PrintPointPen(String);

impl PrintPointPen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the content of the internal string.
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

fn write_point(out: &mut String, pt: Point) {
    let _ = write!(out, "({}, {})", pt.x, pt.y);
}

/// Writes `value` as a single quoted Python string literal.
fn write_quoted(out: &mut String, value: &str) {
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out.push('\'');
}

fn write_identifier(out: &mut String, identifier: Option<&str>) {
    if let Some(identifier) = identifier {
        out.push_str(", identifier=");
        write_quoted(out, identifier);
    }
}

impl PointPen for PrintPointPen {
    fn begin_path(&mut self, identifier: Option<&str>) {
        self.0.push_str("pen.beginPath(");
        if let Some(identifier) = identifier {
            self.0.push_str("identifier=");
            write_quoted(&mut self.0, identifier);
        }
        self.0.push_str(")\n");
    }

    fn end_path(&mut self) {
        self.0.push_str("pen.endPath()\n");
    }

    fn add_point(&mut self, point: ContourPoint) {
        self.0.push_str("pen.addPoint(");
        write_point(&mut self.0, point.pt);
        if point.typ != PointType::OffCurve {
            let _ = write!(self.0, ", segmentType='{}'", point.typ);
        }
        if point.smooth {
            self.0.push_str(", smooth=True");
        }
        if let Some(name) = &point.name {
            self.0.push_str(", name=");
            write_quoted(&mut self.0, name);
        }
        write_identifier(&mut self.0, point.identifier.as_deref());
        for (key, value) in &point.attributes {
            let _ = write!(self.0, ", {key}=");
            write_quoted(&mut self.0, value);
        }
        self.0.push_str(")\n");
    }

    fn add_component(&mut self, base: &str, transform: Affine, identifier: Option<&str>) {
        let [xx, yx, xy, yy, dx, dy] = transform.as_coeffs();
        self.0.push_str("pen.addComponent(");
        write_quoted(&mut self.0, base);
        let _ = write!(self.0, ", ({xx}, {yx}, {xy}, {yy}, {dx}, {dy})");
        write_identifier(&mut self.0, identifier);
        self.0.push_str(")\n");
    }
}

impl core::ops::Deref for PrintPointPen {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl AsRef<str> for PrintPointPen {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

impl From<PrintPointPen> for String {
    fn from(value: PrintPointPen) -> Self {
        value.0
    }
}

impl fmt::Display for PrintPointPen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
