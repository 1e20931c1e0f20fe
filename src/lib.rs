// cardswap_core: Pac Log card-swap carousel engine (Rust/WASM).
// One engine, two surfaces: a frame buffer for framework components and a DOM adapter
// for plain pages. JS only forwards clock ticks and pointer events.

mod animator;
mod console;
mod dom;
mod easing;
mod engine;
mod error;
mod gate;
mod options;
mod order;
mod raf;
mod scheduler;
mod slot;
mod surface;
mod timeline;
mod types;

use log::error;
use wasm_bindgen::prelude::*;

pub use animator::{Phase, Transition};
pub use dom::{DomCardSwap, DomSurface, CARD_ID_ATTR};
pub use easing::{Ease, TransitionProfile, DROP_DISTANCE, PROMOTE_STAGGER};
pub use engine::{CardClickHandler, CardSwap};
pub use error::CarouselError;
pub use gate::{GateAction, InteractionGate, PointerEvent};
pub use options::{CarouselConfig, CarouselOptions, EasingProfile};
pub use order::Order;
pub use scheduler::RotationScheduler;
pub use slot::{compute_slot, layout, slot_for};
pub use surface::{FrameBuffer, RenderView, Surface};
pub use timeline::{Motion, Progress, Timeline};
pub use types::*;

/// Initialize panic hook and console logging for the browser.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    console::install(log::LevelFilter::Info);
}

/// Wrap a JS `onCardClick` function. The card is passed as a plain object.
pub(crate) fn js_click_handler(callback: js_sys::Function) -> CardClickHandler {
    Box::new(move |card: &Card| {
        let arg = serde_json::to_string(card)
            .map_err(|e| JsValue::from_str(&e.to_string()))
            .and_then(|json| js_sys::JSON::parse(&json));
        let result = arg.and_then(|arg| callback.call1(&JsValue::NULL, &arg));
        if let Err(err) = result {
            error!("onCardClick failed for card {}: {:?}", card.id, err);
        }
    })
}

/// Component-style widget exposed to JavaScript.
/// The host framework renders the returned frame JSON itself.
#[wasm_bindgen]
pub struct CardSwapWidget {
    inner: CardSwap<FrameBuffer>,
}

#[wasm_bindgen]
impl CardSwapWidget {
    #[wasm_bindgen(constructor)]
    pub fn new(
        cards_json: &str,
        options_json: &str,
        on_card_click: Option<js_sys::Function>,
    ) -> Result<CardSwapWidget, JsValue> {
        let cards: Vec<Card> = serde_json::from_str(cards_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid cards: {}", e)))?;
        let options = CarouselOptions::from_json(options_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e)))?;

        Ok(CardSwapWidget {
            inner: CardSwap::new(
                cards,
                options,
                FrameBuffer::new(),
                on_card_click.map(js_click_handler),
            ),
        })
    }

    /// Lay out the cards and start scheduling. Returns the first frame as JSON.
    pub fn mount(&mut self, now_ms: f64) -> Result<String, JsValue> {
        self.inner
            .mount(Timestamp::from_millis_f64(now_ms))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.frame_json()
    }

    /// Advance to `now_ms` (a `performance.now()` reading) and return the frame as JSON.
    pub fn tick(&mut self, now_ms: f64) -> Result<String, JsValue> {
        self.inner.tick(Timestamp::from_millis_f64(now_ms));
        self.frame_json()
    }

    pub fn pointer_enter(&mut self, now_ms: f64) {
        self.inner.pointer_enter(Timestamp::from_millis_f64(now_ms));
    }

    pub fn pointer_leave(&mut self, now_ms: f64) {
        self.inner.pointer_leave(Timestamp::from_millis_f64(now_ms));
    }

    /// Click by index into the cards array. `true` if `onCardClick` was called.
    pub fn click(&mut self, index: usize) -> bool {
        self.inner.click(index)
    }

    /// Click by card id. `true` if `onCardClick` was called.
    pub fn click_card(&mut self, id: &str) -> bool {
        self.inner.click_card(id)
    }

    /// Re-supply cards. The order resets and scheduling restarts.
    pub fn replace_cards(&mut self, cards_json: &str, now_ms: f64) -> Result<String, JsValue> {
        let cards: Vec<Card> = serde_json::from_str(cards_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid cards: {}", e)))?;
        self.inner
            .replace_cards(cards, Timestamp::from_millis_f64(now_ms))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.frame_json()
    }

    pub fn order(&self) -> Vec<u32> {
        self.inner.order().as_slice().iter().map(|&i| i as u32).collect()
    }

    pub fn state(&self) -> String {
        format!("{:?}", self.inner.state())
    }

    pub fn is_animating(&self) -> bool {
        self.inner.is_animating()
    }

    /// Stop the timer and drop any running transition. Idempotent.
    pub fn destroy(&mut self) {
        self.inner.destroy();
    }
}

impl CardSwapWidget {
    fn frame_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner.surface().latest())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARDS: &str = r#"[
        {"id":"CWB","name":"Curitiba","status":"Ativo"},
        {"id":"GYN","name":"Goiânia","status":"Ativo"},
        {"id":"REC","name":"Recife","status":"Ativo"}
    ]"#;

    #[test]
    fn widget_creation_works() {
        let widget = CardSwapWidget::new(CARDS, r#"{"easing":"linear","delay":1000}"#, None);
        assert!(widget.is_ok());
    }

    #[test]
    fn widget_mounts_and_rotates() {
        let mut widget = CardSwapWidget::new(CARDS, r#"{"easing":"linear","delay":1000}"#, None)
            .ok()
            .unwrap();
        let first: Frame = serde_json::from_str(&widget.mount(0.0).ok().unwrap()).unwrap();
        assert_eq!(first.order, vec![0, 1, 2]);
        assert_eq!(first.state, SchedulerState::Running);
        assert_eq!(widget.state(), "Running");

        let mut now = 0.0;
        let mut last = String::new();
        while now < 2600.0 {
            now += 16.0;
            last = widget.tick(now).ok().unwrap();
        }
        assert_eq!(widget.order(), vec![1, 2, 0]);
        let frame: Frame = serde_json::from_str(&last).unwrap();
        assert!(frame.cards[1].is_front);
        assert!(!frame.animating);

        widget.destroy();
        widget.destroy();
        assert_eq!(widget.state(), "Idle");
        assert_eq!(widget.tick(now + 5000.0).ok().unwrap(), "null");
    }

    #[test]
    fn widget_replaces_cards() {
        let mut widget = CardSwapWidget::new(CARDS, "", None).ok().unwrap();
        widget.mount(0.0).ok().unwrap();
        let frame: Frame =
            serde_json::from_str(&widget.replace_cards(r#"[{"id":7}]"#, 10.0).ok().unwrap())
                .unwrap();
        assert_eq!(frame.cards.len(), 1);
        assert_eq!(frame.cards[0].id.as_str(), "7");
        assert_eq!(widget.state(), "Idle");
    }
}
