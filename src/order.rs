// Card order: a permutation of card indices, front card first.

use serde::Serialize;

/// Permutation of `0..len`. `order[0]` is the front (topmost, clickable) card.
///
/// Only ever built as the identity or by rotating an existing order, so the
/// permutation property holds by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Order(Vec<usize>);

impl Order {
    pub fn identity(len: usize) -> Self {
        Order((0..len).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn front(&self) -> Option<usize> {
        self.0.first().copied()
    }

    pub fn is_front(&self, card: usize) -> bool {
        self.front() == Some(card)
    }

    /// Stack position of `card`, if it is part of this order.
    pub fn position_of(&self, card: usize) -> Option<usize> {
        self.0.iter().position(|&c| c == card)
    }

    /// `[...rest, front]`: the order after one completed cycle.
    pub fn rotated(&self) -> Self {
        let mut next = self.0.clone();
        if !next.is_empty() {
            next.rotate_left(1);
        }
        Order(next)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn three_cards_rotate_once() {
        let order = Order::identity(3);
        assert_eq!(order.as_slice(), &[0, 1, 2]);
        assert_eq!(order.rotated().as_slice(), &[1, 2, 0]);
        assert_eq!(order.rotated().front(), Some(1));
    }

    #[test]
    fn empty_and_single() {
        assert_eq!(Order::identity(0).rotated(), Order::identity(0));
        assert_eq!(Order::identity(1).rotated(), Order::identity(1));
        assert_eq!(Order::identity(0).front(), None);
    }

    #[test]
    fn position_lookup() {
        let order = Order::identity(4).rotated();
        assert_eq!(order.position_of(0), Some(3));
        assert_eq!(order.position_of(1), Some(0));
        assert_eq!(order.position_of(9), None);
        assert!(order.is_front(1));
    }

    proptest! {
        #[test]
        fn rotation_keeps_permutation(n in 0usize..40, cycles in 0usize..100) {
            let mut order = Order::identity(n);
            for _ in 0..cycles {
                order = order.rotated();
            }
            let mut sorted = order.clone().into_vec();
            sorted.sort_unstable();
            prop_assert_eq!(sorted, (0..n).collect::<Vec<_>>());
        }

        #[test]
        fn rotation_moves_front_to_back(n in 1usize..40, cycles in 0usize..50) {
            let mut order = Order::identity(n);
            for _ in 0..cycles {
                order = order.rotated();
            }
            let old = order.as_slice().to_vec();
            let next = order.rotated();
            let mut expected = old[1..].to_vec();
            expected.push(old[0]);
            prop_assert_eq!(next.as_slice(), expected.as_slice());
        }
    }
}
