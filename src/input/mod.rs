use egui::{Context, LayerId, PointerButton, Pos2, Rect, TouchId};

mod gestures;
pub use gestures::{GestureController, GestureState};

/// Phase of a touch (or mouse) interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// One input event in screen space.
///
/// `touches` lists every contact that is still active after the event, so an
/// `Up` that lifts the last finger carries an empty list.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub touches: Vec<Pos2>,
}

impl TouchEvent {
    pub fn new(phase: TouchPhase, touches: impl Into<Vec<Pos2>>) -> Self {
        Self {
            phase,
            touches: touches.into(),
        }
    }

    pub fn down(touches: impl Into<Vec<Pos2>>) -> Self {
        Self::new(TouchPhase::Down, touches)
    }

    pub fn moved(touches: impl Into<Vec<Pos2>>) -> Self {
        Self::new(TouchPhase::Move, touches)
    }

    pub fn up(touches: impl Into<Vec<Pos2>>) -> Self {
        Self::new(TouchPhase::Up, touches)
    }

    pub fn cancel() -> Self {
        Self::new(TouchPhase::Cancel, Vec::new())
    }

    /// Returns true if no contact remains after this event
    pub fn is_release(&self) -> bool {
        self.phase == TouchPhase::Cancel || (self.phase == TouchPhase::Up && self.touches.is_empty())
    }
}

/// Converts raw egui touch and mouse input over the canvas into `TouchEvent`s
#[derive(Debug, Default)]
pub struct InputHandler {
    /// Active touches in the order they went down
    touches: Vec<(TouchId, Pos2)>,
    mouse_down: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while at least one finger is on the canvas
    pub fn has_touches(&self) -> bool {
        !self.touches.is_empty()
    }

    fn positions(&self) -> Vec<Pos2> {
        self.touches.iter().map(|(_, pos)| *pos).collect()
    }

    /// Process this frame's raw input.
    ///
    /// A contact only starts on the canvas if it lands inside `canvas_area` and
    /// no window or popup above `canvas_layer` covers that point. Later moves and
    /// releases of an accepted contact are always forwarded.
    pub fn process_input(
        &mut self,
        ctx: &Context,
        canvas_area: Rect,
        canvas_layer: LayerId,
    ) -> Vec<TouchEvent> {
        let raw_events = ctx.input(|input| input.events.clone());
        let starts_on_canvas = |pos: Pos2| {
            canvas_area.contains(pos)
                && ctx
                    .layer_id_at(pos)
                    .is_none_or(|layer| layer == canvas_layer)
        };

        // Touch screens also emit simulated pointer events for the first finger
        let has_touch = !self.touches.is_empty()
            || raw_events
                .iter()
                .any(|e| matches!(e, egui::Event::Touch { .. }));

        let mut events = Vec::new();
        for event in &raw_events {
            match event {
                egui::Event::Touch { id, phase, pos, .. } => {
                    let on_canvas = *phase == egui::TouchPhase::Start && starts_on_canvas(*pos);
                    if let Some(e) = self.on_touch(*id, *phase, *pos, on_canvas) {
                        events.push(e);
                    }
                }
                egui::Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed,
                    ..
                } if !has_touch => {
                    if *pressed && !self.mouse_down && starts_on_canvas(*pos) {
                        self.mouse_down = true;
                        events.push(TouchEvent::down([*pos]));
                    } else if !*pressed && self.mouse_down {
                        self.mouse_down = false;
                        events.push(TouchEvent::up(Vec::new()));
                    }
                }
                egui::Event::PointerMoved(pos) if !has_touch && self.mouse_down => {
                    events.push(TouchEvent::moved([*pos]));
                }
                egui::Event::PointerGone if self.mouse_down => {
                    self.mouse_down = false;
                    events.push(TouchEvent::cancel());
                }
                _ => {}
            }
        }

        events
    }

    fn on_touch(
        &mut self,
        id: TouchId,
        phase: egui::TouchPhase,
        pos: Pos2,
        starts_on_canvas: bool,
    ) -> Option<TouchEvent> {
        let index = self.touches.iter().position(|(t, _)| *t == id);
        match phase {
            egui::TouchPhase::Start => {
                // Extra fingers join an active gesture wherever they land
                if index.is_some() || (self.touches.is_empty() && !starts_on_canvas) {
                    return None;
                }
                self.touches.push((id, pos));
                Some(TouchEvent::down(self.positions()))
            }
            egui::TouchPhase::Move => {
                let index = index?;
                if self.touches[index].1 == pos {
                    return None;
                }
                self.touches[index].1 = pos;
                Some(TouchEvent::moved(self.positions()))
            }
            egui::TouchPhase::End => {
                self.touches.remove(index?);
                Some(TouchEvent::up(self.positions()))
            }
            egui::TouchPhase::Cancel => {
                index?;
                self.touches.clear();
                Some(TouchEvent::cancel())
            }
        }
    }
}
