use egui::Pos2;

/// Canvas edits requested by the gesture layer, in screen coordinates.
///
/// The editor maps positions to buffer space and applies them to a working
/// copy of the current snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Flood fill the region under `at`
    Fill { at: Pos2 },
    /// Start a brush or eraser stroke at `at`
    BeginStroke { at: Pos2 },
    /// Continue the current stroke to `to`
    ExtendStroke { to: Pos2 },
    /// Finish the current stroke and commit it to history
    EndStroke,
}

impl Command {
    /// The screen position this command acts on, if any
    pub fn position(&self) -> Option<Pos2> {
        match self {
            Command::Fill { at } | Command::BeginStroke { at } => Some(*at),
            Command::ExtendStroke { to } => Some(*to),
            Command::EndStroke => None,
        }
    }
}
