// Slot layout: where a card sits in the fanned stack for a given position.

use crate::options::CarouselConfig;
use crate::types::{CardTransform, Slot};

/// Compute the slot for the card at `position` (0 = front) in a stack of `total`.
///
/// `position` must be in `0..total`; it is not checked here.
pub fn compute_slot(position: usize, spacing_x: f64, spacing_y: f64, total: usize) -> Slot {
    let p = position as f64;
    Slot {
        offset_x: p * spacing_x,
        offset_y: -p * spacing_y,
        depth: -p * spacing_x * 1.5,
        stack_index: total as i32 - position as i32,
    }
}

/// Slot for a stack position using the configured spacing.
pub fn slot_for(position: usize, total: usize, config: &CarouselConfig) -> Slot {
    compute_slot(position, config.card_spacing_x, config.card_spacing_y, total)
}

/// Resting transforms for every card, indexed by card (not by position).
pub fn layout(order: &[usize], config: &CarouselConfig) -> Vec<CardTransform> {
    let total = order.len();
    let mut transforms = vec![CardTransform::default(); total];
    for (position, &card) in order.iter().enumerate() {
        let slot = slot_for(position, total, config);
        transforms[card] = CardTransform::at_slot(&slot, config.skew_degrees);
    }
    transforms
}
