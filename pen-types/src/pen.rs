/// Interface for accepting a sequence of path commands.
///
/// This is a general abstraction to unify ouput for processes that decode and/or
/// transform outlines.
///
/// AbstractPen in Python terms.
/// <https://github.com/fonttools/fonttools/blob/78e10d8b42095b709cd4125e592d914d3ed1558e/Lib/fontTools/pens/basePen.py#L54>
pub trait Pen {
    /// Emit a command to begin a new subpath at (x, y).
    fn move_to(&mut self, x: f32, y: f32);

    /// Emit a line segment from the current point to (x, y).
    fn line_to(&mut self, x: f32, y: f32);

    /// Emit a quadratic bezier segment from the current point with a control
    /// point at (cx0, cy0) and ending at (x, y).
    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32);

    /// Emit a cubic bezier segment from the current point with control
    /// points at (cx0, cy0) and (cx1, cy1) and ending at (x, y).
    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32);

    /// Emit a command to close the current subpath.
    fn close(&mut self);
}

impl<P: Pen + ?Sized> Pen for &mut P {
    fn move_to(&mut self, x: f32, y: f32) {
        (**self).move_to(x, y)
    }

    fn line_to(&mut self, x: f32, y: f32) {
        (**self).line_to(x, y)
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        (**self).quad_to(cx0, cy0, x, y)
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        (**self).curve_to(cx0, cy0, cx1, cy1, x, y)
    }

    fn close(&mut self) {
        (**self).close()
    }
}

/// A single recorded [`Pen`] call.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PenCommand {
    MoveTo {
        x: f32,
        y: f32,
    },
    LineTo {
        x: f32,
        y: f32,
    },
    QuadTo {
        cx0: f32,
        cy0: f32,
        x: f32,
        y: f32,
    },
    CurveTo {
        cx0: f32,
        cy0: f32,
        cx1: f32,
        cy1: f32,
        x: f32,
        y: f32,
    },
    Close,
}

impl PenCommand {
    /// The point this command leaves the pen at, if it has one.
    pub fn end_point(&self) -> Option<(f32, f32)> {
        match *self {
            PenCommand::MoveTo { x, y }
            | PenCommand::LineTo { x, y }
            | PenCommand::QuadTo { x, y, .. }
            | PenCommand::CurveTo { x, y, .. } => Some((x, y)),
            PenCommand::Close => None,
        }
    }

    /// Issue this command on `pen`.
    pub fn apply_to(&self, pen: &mut impl Pen) {
        match *self {
            PenCommand::MoveTo { x, y } => pen.move_to(x, y),
            PenCommand::LineTo { x, y } => pen.line_to(x, y),
            PenCommand::QuadTo { cx0, cy0, x, y } => pen.quad_to(cx0, cy0, x, y),
            PenCommand::CurveTo {
                cx0,
                cy0,
                cx1,
                cy1,
                x,
                y,
            } => pen.curve_to(cx0, cy0, cx1, cy1, x, y),
            PenCommand::Close => pen.close(),
        }
    }
}

impl Pen for Vec<PenCommand> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.push(PenCommand::MoveTo { x, y })
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.push(PenCommand::LineTo { x, y })
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.push(PenCommand::QuadTo { cx0, cy0, x, y })
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.push(PenCommand::CurveTo {
            cx0,
            cy0,
            cx1,
            cy1,
            x,
            y,
        })
    }

    fn close(&mut self) {
        self.push(PenCommand::Close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn end_points() {
        assert_eq!(PenCommand::MoveTo { x: 1.0, y: 2.0 }.end_point(), Some((1.0, 2.0)));
        assert_eq!(
            PenCommand::CurveTo {
                cx0: 0.0,
                cy0: 0.0,
                cx1: 5.0,
                cy1: 5.0,
                x: 10.0,
                y: -3.5
            }
            .end_point(),
            Some((10.0, -3.5))
        );
        assert_eq!(PenCommand::Close.end_point(), None);
    }

    fn draw_triangle(mut pen: impl Pen) {
        pen.move_to(1.0, 1.0);
        pen.quad_to(2.0, 3.0, 4.0, 1.0);
        pen.close();
    }

    #[test]
    fn replay_through_borrowed_pen() {
        let mut recording: Vec<PenCommand> = Vec::new();
        draw_triangle(&mut recording);
        let mut copy: Vec<PenCommand> = Vec::new();
        recording.iter().for_each(|cmd| cmd.apply_to(&mut copy));
        assert_eq!(recording, copy);
        assert_eq!(copy.len(), 3);
    }
}
