// Interaction gate: hover pause/resume and front-only click routing.
// Decides what an input means; the engine applies the decision.

use crate::order::Order;

/// Pointer input arriving from the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Enter,
    Leave,
    /// Click on the card at this index into the original cards array.
    Click { card: usize },
}

/// What the engine should do with a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateAction {
    Pause,
    Resume,
    Dispatch { card: usize },
    Ignore,
}

#[derive(Debug, Clone, Copy)]
pub struct InteractionGate {
    pause_on_hover: bool,
}

impl InteractionGate {
    pub fn new(pause_on_hover: bool) -> Self {
        InteractionGate { pause_on_hover }
    }

    /// Whether hover listeners should be attached at all.
    pub fn wants_hover(&self) -> bool {
        self.pause_on_hover
    }

    pub fn route(&self, event: PointerEvent, order: &Order) -> GateAction {
        match event {
            PointerEvent::Enter if self.pause_on_hover => GateAction::Pause,
            PointerEvent::Leave if self.pause_on_hover => GateAction::Resume,
            PointerEvent::Enter | PointerEvent::Leave => GateAction::Ignore,
            PointerEvent::Click { card } if order.is_front(card) => GateAction::Dispatch { card },
            PointerEvent::Click { .. } => GateAction::Ignore,
        }
    }
}
