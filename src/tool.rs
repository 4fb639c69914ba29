use serde::{Deserialize, Serialize};

/// What a single-finger press on the canvas does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tool {
    /// Tap to flood fill a region
    #[default]
    Fill,
    /// Drag to move the canvas
    Pan,
    /// Freehand stroke in the selected color
    Brush,
    /// Freehand stroke in white
    Eraser,
}

impl Tool {
    pub const ALL: [Self; 4] = [Self::Fill, Self::Pan, Self::Brush, Self::Eraser];

    pub fn name(self) -> &'static str {
        match self {
            Self::Fill => "Fill",
            Self::Pan => "Pan",
            Self::Brush => "Brush",
            Self::Eraser => "Eraser",
        }
    }

    /// Brush and eraser drag out strokes; fill acts once per press.
    pub fn draws_strokes(self) -> bool {
        matches!(self, Self::Brush | Self::Eraser)
    }
}
