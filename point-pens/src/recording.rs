//! A point pen that remembers what it was given.

use kurbo::Affine;
use pen_types::{ContourPoint, PointPen, PointPenCommand};

/// Records every call so that it can be played back on another pen later.
///
/// RecordingPointPen in Python terms.
/// <https://github.com/fonttools/fonttools/blob/78e10d8b42095b709cd4125e592d914d3ed1558e/Lib/fontTools/pens/recordingPen.py#L176>
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingPointPen {
    commands: Vec<PointPenCommand>,
}

impl RecordingPointPen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PointPenCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<PointPenCommand> {
        self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Issue every recorded call, in order, on `pen`.
    pub fn replay(&self, pen: &mut impl PointPen) {
        for command in &self.commands {
            command.apply_to(pen);
        }
    }
}

impl PointPen for RecordingPointPen {
    fn begin_path(&mut self, identifier: Option<&str>) {
        self.commands.push(PointPenCommand::BeginPath {
            identifier: identifier.map(str::to_owned),
        });
    }

    fn end_path(&mut self) {
        self.commands.push(PointPenCommand::EndPath);
    }

    fn add_point(&mut self, point: ContourPoint) {
        self.commands.push(PointPenCommand::AddPoint(point));
    }

    fn add_component(&mut self, base: &str, transform: Affine, identifier: Option<&str>) {
        self.commands.push(PointPenCommand::AddComponent {
            base: base.to_owned(),
            transform,
            identifier: identifier.map(str::to_owned),
        });
    }
}

impl From<Vec<PointPenCommand>> for RecordingPointPen {
    fn from(commands: Vec<PointPenCommand>) -> Self {
        Self { commands }
    }
}
