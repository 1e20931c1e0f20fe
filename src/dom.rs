// Imperative DOM adapter: finds the cards in existing markup, writes transforms
// straight into element styles and owns the hover/click listeners.

use std::cell::RefCell;
use std::rc::Rc;

use log::{error, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, HtmlElement};

use crate::engine::CardSwap;
use crate::error::CarouselError;
use crate::options::CarouselOptions;
use crate::js_click_handler;
use crate::raf::FrameLoop;
use crate::surface::{RenderView, Surface};
use crate::types::{Card, RenderMode, Timestamp};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = "now")]
    fn performance_now() -> f64;
}

/// Attribute that marks a card element and carries its id.
pub const CARD_ID_ATTR: &str = "data-card-id";

/// Surface backed by the card elements under a root container.
pub struct DomSurface {
    elements: Vec<HtmlElement>,
    animated: bool,
}

impl DomSurface {
    /// Collect `[data-card-id]` elements under `container` and the cards they describe.
    pub fn attach(container: &Element) -> Result<(Self, Vec<Card>), CarouselError> {
        let selector = format!("[{CARD_ID_ATTR}]");
        let nodes = container
            .query_selector_all(&selector)
            .map_err(|e| CarouselError::Dom(format!("{e:?}")))?;

        let mut elements = Vec::with_capacity(nodes.length() as usize);
        let mut cards = Vec::with_capacity(nodes.length() as usize);
        for index in 0..nodes.length() {
            let Some(element) = nodes
                .get(index)
                .and_then(|node| node.dyn_into::<HtmlElement>().ok())
            else {
                continue;
            };
            let id = element
                .get_attribute(CARD_ID_ATTR)
                .ok_or(CarouselError::MissingCardId {
                    index: index as usize,
                })?;
            let mut card = Card::new(id);
            if let Some(text) = element.text_content() {
                card = card.with_field("text", text.trim());
            }
            elements.push(element);
            cards.push(card);
        }

        // Timelines are paced by requestAnimationFrame; without it we only lay out.
        let animated = web_sys::window()
            .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("requestAnimationFrame")))
            .and_then(Result::ok)
            .unwrap_or(false);

        Ok((DomSurface { elements, animated }, cards))
    }

    pub fn elements(&self) -> &[HtmlElement] {
        &self.elements
    }
}

impl Surface for DomSurface {
    fn animation_available(&self) -> bool {
        self.animated
    }

    fn render(&mut self, view: &RenderView<'_>) {
        for (element, frame) in self.elements.iter().zip(view.card_frames()) {
            let t = frame.transform;
            let transform = format!(
                "translate(-50%, -50%) translate3d({}px, {}px, {}px) skewY({}deg)",
                t.x, t.y, t.z, t.skew_y
            );
            let style = element.style();
            let result = style
                .set_property("position", "absolute")
                .and_then(|()| style.set_property("transform", &transform))
                .and_then(|()| style.set_property("z-index", &t.z_index.to_string()))
                .and_then(|()| style.set_property("width", &format!("{}px", frame.width)))
                .and_then(|()| style.set_property("height", &format!("{}px", frame.height)))
                .and_then(|()| {
                    style.set_property("cursor", if frame.is_front { "pointer" } else { "default" })
                })
                .and_then(|()| {
                    element.set_attribute("data-front", if frame.is_front { "true" } else { "false" })
                });
            if let Err(err) = result {
                warn!("failed to style card {}: {:?}", frame.id, err);
            }
        }
    }

    fn clear(&mut self) {
        for element in &self.elements {
            let style = element.style();
            for property in ["position", "transform", "z-index", "width", "height", "cursor"] {
                let _ = style.remove_property(property);
            }
            let _ = element.remove_attribute("data-front");
        }
    }
}

struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut()>,
}

type SharedEngine = Rc<RefCell<CardSwap<DomSurface>>>;

/// Card swap bound to live DOM. It runs its own requestAnimationFrame loop.
/// Hover listeners go on the container, click listeners on every card;
/// `destroy` removes all of them and cancels the loop.
#[wasm_bindgen]
pub struct DomCardSwap {
    engine: SharedEngine,
    listeners: Vec<Listener>,
    frames: Option<FrameLoop>,
}

#[wasm_bindgen]
impl DomCardSwap {
    /// Attach to the container matching `selector` and start rotating.
    ///
    /// Returns `undefined` (after logging why) when the container is missing
    /// or the options are malformed, so the page keeps working without it.
    #[wasm_bindgen]
    pub fn mount(
        selector: &str,
        options_json: &str,
        on_card_click: Option<js_sys::Function>,
    ) -> Option<DomCardSwap> {
        match Self::try_mount(selector, options_json, on_card_click) {
            Ok(swap) => Some(swap),
            Err(err) => {
                error!("card swap not mounted: {err}");
                None
            }
        }
    }

    /// Advance to `now_ms` right away. The frame loop does this every frame.
    #[wasm_bindgen]
    pub fn tick(&self, now_ms: f64) {
        with_engine(&self.engine, |engine| engine.tick(Timestamp::from_millis_f64(now_ms)));
    }

    #[wasm_bindgen]
    pub fn order(&self) -> Vec<u32> {
        match self.engine.try_borrow() {
            Ok(engine) => engine.order().as_slice().iter().map(|&i| i as u32).collect(),
            Err(_) => {
                warn!("card swap busy, order unavailable");
                Vec::new()
            }
        }
    }

    /// Scheduler state: `Idle`, `Running` or `Paused`.
    #[wasm_bindgen]
    pub fn state(&self) -> String {
        match self.engine.try_borrow() {
            Ok(engine) => format!("{:?}", engine.state()),
            Err(_) => {
                warn!("card swap busy, state unavailable");
                String::new()
            }
        }
    }

    #[wasm_bindgen]
    pub fn is_destroyed(&self) -> bool {
        self.engine.try_borrow().map_or(false, |e| e.is_destroyed())
    }

    /// `true` while the requestAnimationFrame loop is scheduled.
    #[wasm_bindgen]
    pub fn is_running(&self) -> bool {
        self.frames.as_ref().map_or(false, FrameLoop::is_running)
    }

    /// Cancel the frame loop, remove listeners and stop the engine.
    /// Safe to call repeatedly, including from `onCardClick`.
    #[wasm_bindgen]
    pub fn destroy(&mut self) {
        if let Some(frames) = self.frames.take() {
            frames.stop();
        }
        self.detach_listeners();
        with_engine(&self.engine, |engine| engine.destroy());
    }
}

impl DomCardSwap {
    fn try_mount(
        selector: &str,
        options_json: &str,
        on_card_click: Option<js_sys::Function>,
    ) -> Result<DomCardSwap, CarouselError> {
        let missing = || CarouselError::MissingContainer {
            selector: selector.to_string(),
        };
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(missing)?;
        let container = document
            .query_selector(selector)
            .ok()
            .flatten()
            .ok_or_else(missing)?;

        let options = CarouselOptions::from_json(options_json)?;
        let (surface, cards) = DomSurface::attach(&container)?;
        if cards.is_empty() {
            warn!("no [{CARD_ID_ATTR}] cards under {selector}");
        }

        // onCardClick stays with the listeners so it runs outside the engine borrow.
        let mut engine = CardSwap::new(cards, options, surface, None);
        engine.mount(Timestamp::from_millis_f64(performance_now()))?;
        let pause_on_hover = engine.config().pause_on_hover;
        let animated = engine.render_mode() == RenderMode::Animated;
        let elements = engine.surface().elements().to_vec();
        let engine = Rc::new(RefCell::new(engine));

        let mut swap = DomCardSwap {
            engine,
            listeners: Vec::new(),
            frames: None,
        };
        if pause_on_hover {
            let target: EventTarget = container.clone().into();
            let engine = Rc::clone(&swap.engine);
            swap.listen(target.clone(), "mouseenter", move || {
                with_engine(&engine, |engine| {
                    engine.pointer_enter(Timestamp::from_millis_f64(performance_now()))
                });
            })?;
            let engine = Rc::clone(&swap.engine);
            swap.listen(target, "mouseleave", move || {
                with_engine(&engine, |engine| {
                    engine.pointer_leave(Timestamp::from_millis_f64(performance_now()))
                });
            })?;
        }
        for (index, element) in elements.into_iter().enumerate() {
            let engine = Rc::clone(&swap.engine);
            let mut on_click = on_card_click.clone().map(js_click_handler);
            swap.listen(element.into(), "click", move || {
                let clicked = match engine.try_borrow() {
                    Ok(engine) => engine.resolve_click(index).cloned(),
                    Err(_) => {
                        warn!("card swap busy, click dropped");
                        None
                    }
                };
                if let (Some(card), Some(handler)) = (clicked, on_click.as_mut()) {
                    handler(&card);
                }
            })?;
        }

        if animated {
            let engine = Rc::clone(&swap.engine);
            let frames = FrameLoop::new(move |now| with_engine(&engine, |engine| engine.tick(now)));
            frames.start();
            swap.frames = Some(frames);
        }
        Ok(swap)
    }

    fn listen(
        &mut self,
        target: EventTarget,
        kind: &'static str,
        action: impl FnMut() + 'static,
    ) -> Result<(), CarouselError> {
        let closure = Closure::wrap(Box::new(action) as Box<dyn FnMut()>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(|e| CarouselError::Dom(format!("{kind} listener: {e:?}")))?;
        self.listeners.push(Listener {
            target,
            kind,
            closure,
        });
        Ok(())
    }

    fn detach_listeners(&mut self) {
        for listener in self.listeners.drain(..) {
            let _ = listener.target.remove_event_listener_with_callback(
                listener.kind,
                listener.closure.as_ref().unchecked_ref(),
            );
        }
    }
}

impl Drop for DomCardSwap {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn with_engine(engine: &SharedEngine, f: impl FnOnce(&mut CardSwap<DomSurface>)) {
    match engine.try_borrow_mut() {
        Ok(mut engine) => f(&mut engine),
        Err(_) => warn!("card swap busy, event dropped"),
    }
}
