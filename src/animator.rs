// Transition animator: one drop -> promote -> return cycle per rotation.
// The rotated order is computed up front but only handed out once the timeline completes.

use crate::easing::{TransitionProfile, DROP_DISTANCE, PROMOTE_STAGGER};
use crate::options::CarouselConfig;
use crate::order::Order;
use crate::slot::slot_for;
use crate::timeline::{Motion, Progress, Timeline};
use crate::types::CardTransform;

/// An in-flight rotation cycle.
#[derive(Debug, Clone)]
pub struct Transition {
    timeline: Timeline,
    front: usize,
    rotated: Order,
}

impl Transition {
    /// Build the cycle for `order`. Returns `None` with fewer than two cards.
    pub fn build(order: &Order, config: &CarouselConfig) -> Option<Self> {
        if order.len() < 2 {
            return None;
        }
        let profile = TransitionProfile::for_profile(config.easing_profile);
        let total = order.len();
        let front = order.front()?;
        let rest = &order.as_slice()[1..];

        let mut timeline = Timeline::new();
        timeline.tween(
            front,
            0.0,
            profile.dur_drop,
            profile.ease,
            Motion::OffsetY(DROP_DISTANCE),
        );

        let promote_at = profile.promote_at();
        for (i, &card) in rest.iter().enumerate() {
            let slot = slot_for(i, total, config);
            timeline.set_z_index(card, promote_at, slot.stack_index);
            timeline.tween(
                card,
                promote_at + i as f64 * PROMOTE_STAGGER,
                profile.dur_move,
                profile.ease,
                Motion::ToSlot(slot),
            );
        }

        let back = slot_for(total - 1, total, config);
        let return_at = profile.return_at();
        timeline.set_z_index(front, return_at, back.stack_index);
        timeline.tween(
            front,
            return_at,
            profile.dur_return,
            profile.ease,
            Motion::ToSlot(back),
        );

        Some(Transition {
            timeline,
            front,
            rotated: order.rotated(),
        })
    }

    /// Advance by `dt` seconds. Returns the committed order once the cycle is over.
    pub fn advance(&mut self, dt: f64, transforms: &mut [CardTransform]) -> Option<Order> {
        match self.timeline.advance(dt, transforms) {
            Progress::Running => None,
            Progress::Complete => Some(self.rotated.clone()),
        }
    }

    pub fn pause(&mut self) {
        self.timeline.pause();
    }

    pub fn play(&mut self) {
        self.timeline.play();
    }

    pub fn is_paused(&self) -> bool {
        self.timeline.is_paused()
    }

    /// Card being dropped and returned to the back.
    pub fn front(&self) -> usize {
        self.front
    }

    /// Seconds from start to commit.
    pub fn duration(&self) -> f64 {
        self.timeline.duration()
    }

    pub fn elapsed(&self) -> f64 {
        self.timeline.playhead()
    }

    /// Which phase the timeline is in at its current playhead.
    pub fn phase(&self, config: &CarouselConfig) -> Phase {
        let profile = TransitionProfile::for_profile(config.easing_profile);
        let t = self.timeline.playhead();
        if t < profile.promote_at() {
            Phase::Drop
        } else if t < profile.return_at() {
            Phase::Promote
        } else {
            Phase::Return
        }
    }
}

/// Visible phase of a rotation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Drop,
    Promote,
    Return,
}
