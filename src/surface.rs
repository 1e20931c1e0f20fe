// Rendering surfaces. The engine computes transforms; a surface puts them on screen.

use crate::options::CarouselConfig;
use crate::order::Order;
use crate::types::{Card, CardFrame, CardTransform, Frame, SchedulerState};

/// Everything a surface needs to draw the current state.
pub struct RenderView<'a> {
    pub cards: &'a [Card],
    pub transforms: &'a [CardTransform],
    pub order: &'a Order,
    pub config: &'a CarouselConfig,
    pub state: SchedulerState,
    pub animating: bool,
}

impl RenderView<'_> {
    /// Per-card frame entries, in the original cards order.
    pub fn card_frames(&self) -> Vec<CardFrame> {
        self.cards
            .iter()
            .zip(self.transforms)
            .enumerate()
            .map(|(index, (card, transform))| CardFrame {
                id: card.id.clone(),
                transform: *transform,
                width: self.config.card_width,
                height: self.config.card_height,
                is_front: self.order.is_front(index),
            })
            .collect()
    }

    pub fn frame(&self) -> Frame {
        Frame {
            cards: self.card_frames(),
            order: self.order.as_slice().to_vec(),
            state: self.state,
            animating: self.animating,
        }
    }
}

/// A place cards are drawn.
pub trait Surface {
    /// Checked once at mount. `false` renders the static layout only.
    fn animation_available(&self) -> bool {
        true
    }

    fn render(&mut self, view: &RenderView<'_>);

    /// Release whatever the surface holds for the current cards.
    fn clear(&mut self) {}
}

/// Component-style surface: keeps the latest frame for the host framework to apply.
#[derive(Debug, Default)]
pub struct FrameBuffer {
    latest: Option<Frame>,
    renders: u64,
}

impl FrameBuffer {
    pub fn new() -> Self {
        FrameBuffer::default()
    }

    pub fn latest(&self) -> Option<&Frame> {
        self.latest.as_ref()
    }

    /// Number of frames produced so far.
    pub fn renders(&self) -> u64 {
        self.renders
    }
}

impl Surface for FrameBuffer {
    fn render(&mut self, view: &RenderView<'_>) {
        self.latest = Some(view.frame());
        self.renders += 1;
    }

    fn clear(&mut self) {
        self.latest = None;
    }
}
