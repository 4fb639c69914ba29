use egui::{Pos2, Vec2};

use super::{TouchEvent, TouchPhase};
use crate::command::Command;
use crate::tool::Tool;
use crate::viewport::ViewportTransform;

/// Where the controller is in an interaction
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    /// One finger dragging the canvas. `offset` is touch position minus pan at touch-down.
    Panning { offset: Vec2 },
    /// Two fingers pinching. `distance` is the spacing at the last processed event.
    Zooming { distance: f32, center: Pos2 },
    /// One finger acting on the artwork with the fill, brush or eraser tool
    Drawing { stroke: bool },
}

impl GestureState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Panning { .. } => "Panning",
            Self::Zooming { .. } => "Zooming",
            Self::Drawing { .. } => "Drawing",
        }
    }
}

/// Turns touch streams into viewport changes and canvas commands.
///
/// Two simultaneous touches always mean zoom; with one touch the active tool
/// decides between panning and drawing.
#[derive(Debug, Default)]
pub struct GestureController {
    state: GestureState,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    /// True while panning or zooming; the shell disables its easing while this holds.
    pub fn is_interacting(&self) -> bool {
        matches!(
            self.state,
            GestureState::Panning { .. } | GestureState::Zooming { .. }
        )
    }

    /// The pinch midpoint, while zooming
    pub fn pinch_center(&self) -> Option<Pos2> {
        match self.state {
            GestureState::Zooming { center, .. } => Some(center),
            _ => None,
        }
    }

    /// Drops any in-progress gesture. Returns `EndStroke` if a stroke was open.
    pub fn reset(&mut self) -> Option<Command> {
        let end = self.end_stroke_command();
        self.transition(GestureState::Idle);
        end
    }

    fn transition(&mut self, new: GestureState) {
        if std::mem::discriminant(&self.state) != std::mem::discriminant(&new) {
            log::debug!("Gesture {} -> {}", self.state.name(), new.name());
        }
        self.state = new;
    }

    fn end_stroke_command(&self) -> Option<Command> {
        match self.state {
            GestureState::Drawing { stroke: true } => Some(Command::EndStroke),
            _ => None,
        }
    }

    /// Feed one event. Viewport changes are applied directly; edits are returned.
    pub fn handle(
        &mut self,
        event: &TouchEvent,
        tool: Tool,
        viewport: &mut ViewportTransform,
    ) -> Option<Command> {
        if event.is_release() {
            return self.reset();
        }

        match event.touches.as_slice() {
            [] => None,
            [touch] => self.handle_single(event.phase, *touch, tool, viewport),
            [first, second, ..] => self.handle_pinch(event.phase, *first, *second, viewport),
        }
    }

    fn handle_single(
        &mut self,
        phase: TouchPhase,
        touch: Pos2,
        tool: Tool,
        viewport: &mut ViewportTransform,
    ) -> Option<Command> {
        match (self.state, phase) {
            (GestureState::Idle, TouchPhase::Down) => match tool {
                Tool::Pan => {
                    let offset = touch.to_vec2() - viewport.target_pan();
                    self.transition(GestureState::Panning { offset });
                    None
                }
                Tool::Fill => {
                    self.transition(GestureState::Drawing { stroke: false });
                    Some(Command::Fill { at: touch })
                }
                Tool::Brush | Tool::Eraser => {
                    self.transition(GestureState::Drawing { stroke: true });
                    Some(Command::BeginStroke { at: touch })
                }
            },
            (GestureState::Panning { offset }, TouchPhase::Move) => {
                viewport.request_pan(touch.to_vec2() - offset);
                None
            }
            (GestureState::Drawing { stroke: true }, TouchPhase::Move) => {
                Some(Command::ExtendStroke { to: touch })
            }
            // A lifted pinch finger leaves one touch behind; it stays inert until release.
            _ => None,
        }
    }

    fn handle_pinch(
        &mut self,
        phase: TouchPhase,
        first: Pos2,
        second: Pos2,
        viewport: &mut ViewportTransform,
    ) -> Option<Command> {
        let distance = first.distance(second);
        let center = first.lerp(second, 0.5);

        match self.state {
            GestureState::Zooming {
                distance: previous, ..
            } if phase == TouchPhase::Move => {
                if previous > f32::EPSILON {
                    viewport.apply_pinch(distance / previous);
                }
                self.transition(GestureState::Zooming { distance, center });
                None
            }
            GestureState::Zooming { .. } => {
                // A finger was added or removed: re-anchor on the new pair
                self.transition(GestureState::Zooming { distance, center });
                None
            }
            _ => {
                let end = self.end_stroke_command();
                self.transition(GestureState::Zooming { distance, center });
                end
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Pos2 {
        Pos2::new(x, y)
    }

    #[test]
    fn test_fill_tap_emits_single_fill() {
        let mut gestures = GestureController::new();
        let mut viewport = ViewportTransform::default();

        let cmd = gestures.handle(&TouchEvent::down([p(5.0, 6.0)]), Tool::Fill, &mut viewport);
        assert_eq!(cmd, Some(Command::Fill { at: p(5.0, 6.0) }));
        assert_eq!(gestures.state(), GestureState::Drawing { stroke: false });

        // dragging under the fill tool does nothing
        assert_eq!(
            gestures.handle(&TouchEvent::moved([p(9.0, 9.0)]), Tool::Fill, &mut viewport),
            None
        );
        assert_eq!(
            gestures.handle(&TouchEvent::up(Vec::new()), Tool::Fill, &mut viewport),
            None
        );
        assert_eq!(gestures.state(), GestureState::Idle);
    }

    #[test]
    fn test_second_finger_ends_stroke() {
        let mut gestures = GestureController::new();
        let mut viewport = ViewportTransform::default();

        gestures.handle(&TouchEvent::down([p(0.0, 0.0)]), Tool::Brush, &mut viewport);
        let cmd = gestures.handle(
            &TouchEvent::down([p(0.0, 0.0), p(10.0, 0.0)]),
            Tool::Brush,
            &mut viewport,
        );
        assert_eq!(cmd, Some(Command::EndStroke));
        assert_eq!(gestures.pinch_center(), Some(p(5.0, 0.0)));
        assert!(gestures.is_interacting());
    }

    #[test]
    fn test_coincident_pinch_start_does_not_divide_by_zero() {
        let mut gestures = GestureController::new();
        let mut viewport = ViewportTransform::default();
        gestures.handle(&TouchEvent::down([p(1.0, 1.0), p(1.0, 1.0)]), Tool::Fill, &mut viewport);
        gestures.handle(&TouchEvent::moved([p(1.0, 1.0), p(50.0, 1.0)]), Tool::Fill, &mut viewport);
        assert_eq!(viewport.scale(), 1.7);
    }
}
