// Card rotation engine: composes slot layout, animator, scheduler and gate.
// Host-driven: every state change happens inside a call from the host's event loop.

use log::{debug, info, warn};

use crate::animator::{Phase, Transition};
use crate::error::CarouselError;
use crate::gate::{GateAction, InteractionGate, PointerEvent};
use crate::options::{CarouselConfig, CarouselOptions};
use crate::order::Order;
use crate::scheduler::RotationScheduler;
use crate::slot::{layout, slot_for};
use crate::surface::{RenderView, Surface};
use crate::types::{Card, CardTransform, RenderMode, SchedulerState, Slot, Timestamp};

/// Callback invoked with the front card when it is clicked.
pub type CardClickHandler = Box<dyn FnMut(&Card)>;

/// The carousel engine. One instance owns its own order, timer and timeline.
pub struct CardSwap<S: Surface> {
    cards: Vec<Card>,
    config: CarouselConfig,
    order: Order,
    transforms: Vec<CardTransform>,
    scheduler: RotationScheduler,
    gate: InteractionGate,
    transition: Option<Transition>,
    surface: S,
    on_card_click: Option<CardClickHandler>,
    mode: RenderMode,
    last_tick: Option<Timestamp>,
    mounted: bool,
    destroyed: bool,
    commits: u64,
}

impl<S: Surface> CardSwap<S> {
    pub fn new(
        cards: Vec<Card>,
        options: CarouselOptions,
        surface: S,
        on_card_click: Option<CardClickHandler>,
    ) -> Self {
        let config = options.resolve();
        let order = Order::identity(cards.len());
        let transforms = layout(order.as_slice(), &config);
        CardSwap {
            scheduler: RotationScheduler::new(config.rotation_interval_ms),
            gate: InteractionGate::new(config.pause_on_hover),
            cards,
            config,
            order,
            transforms,
            transition: None,
            surface,
            on_card_click,
            mode: RenderMode::Animated,
            last_tick: None,
            mounted: false,
            destroyed: false,
            commits: 0,
        }
    }

    /// Lay the cards out and start rotating if there is anything to rotate.
    /// Mounting twice is a no-op.
    pub fn mount(&mut self, now: Timestamp) -> Result<(), CarouselError> {
        if self.destroyed {
            return Err(CarouselError::Destroyed);
        }
        if self.mounted {
            return Ok(());
        }
        self.mounted = true;
        self.last_tick = Some(now);

        if !self.surface.animation_available() {
            let err = CarouselError::AnimationUnavailable("surface cannot animate".to_string());
            warn!("{err}; rendering {} cards statically", self.cards.len());
            self.mode = RenderMode::Static;
        }

        self.start_rotation(now);
        self.render();
        info!(
            "card swap mounted with {} cards ({:?}, {:?})",
            self.cards.len(),
            self.mode,
            self.config.easing_profile
        );
        Ok(())
    }

    /// Advance the engine to `now`: play the transition, commit it, fire the timer.
    pub fn tick(&mut self, now: Timestamp) {
        if self.destroyed || !self.mounted {
            return;
        }
        let dt = self.last_tick.map_or(0.0, |last| now.secs_since(last));
        self.last_tick = Some(now);

        let mut dirty = false;
        if let Some(transition) = self.transition.as_mut() {
            dirty = true;
            if let Some(rotated) = transition.advance(dt, &mut self.transforms) {
                self.commit(rotated, now);
            }
        }

        if self.scheduler.poll(now) {
            if self.transition.is_some() {
                debug!("rotation tick skipped, transition in flight");
            } else {
                dirty |= self.begin_rotation();
            }
        }

        if dirty {
            self.render();
        }
    }

    pub fn pointer_enter(&mut self, now: Timestamp) {
        self.pointer(PointerEvent::Enter, now);
    }

    pub fn pointer_leave(&mut self, now: Timestamp) {
        self.pointer(PointerEvent::Leave, now);
    }

    /// Route a pointer event through the interaction gate.
    /// Returns `true` when a click reached the callback.
    pub fn pointer(&mut self, event: PointerEvent, now: Timestamp) -> bool {
        if self.destroyed {
            return false;
        }
        match self.gate.route(event, &self.order) {
            GateAction::Pause => {
                self.pause();
                false
            }
            GateAction::Resume => {
                self.resume(now);
                false
            }
            GateAction::Dispatch { card } => self.dispatch_click(card),
            GateAction::Ignore => false,
        }
    }

    /// Click on the card at `index` in the original cards array.
    pub fn click(&mut self, index: usize) -> bool {
        self.pointer(PointerEvent::Click { card: index }, self.last_tick.unwrap_or_default())
    }

    /// The card a click at `index` would select, without calling `onCardClick`.
    /// Hosts that must run the callback outside their own borrow use this.
    pub fn resolve_click(&self, index: usize) -> Option<&Card> {
        if self.destroyed {
            return None;
        }
        match self.gate.route(PointerEvent::Click { card: index }, &self.order) {
            GateAction::Dispatch { card } => self.cards.get(card),
            _ => None,
        }
    }

    /// Click addressed by card id, as the DOM carries it.
    pub fn click_card(&mut self, id: &str) -> bool {
        match self.cards.iter().position(|c| c.id.as_str() == id) {
            Some(index) => self.click(index),
            None => {
                debug!("click on unknown card id {id}");
                false
            }
        }
    }

    /// Stop the timer and freeze any in-flight transition.
    pub fn pause(&mut self) {
        if self.destroyed {
            return;
        }
        self.scheduler.pause();
        if let Some(transition) = self.transition.as_mut() {
            transition.pause();
        }
    }

    /// Unfreeze the transition and restart the timer. Safe in any phase and state.
    /// Time spent paused never reaches the timeline, ticked or not.
    pub fn resume(&mut self, now: Timestamp) {
        if self.destroyed {
            return;
        }
        self.last_tick = Some(now);
        if let Some(transition) = self.transition.as_mut() {
            transition.play();
        }
        self.scheduler.resume(now);
    }

    /// Swap in a new card set: drop the running cycle, reset the order, lay out again.
    pub fn replace_cards(&mut self, cards: Vec<Card>, now: Timestamp) -> Result<(), CarouselError> {
        if self.destroyed {
            return Err(CarouselError::Destroyed);
        }
        self.scheduler.stop();
        self.transition = None;
        self.cards = cards;
        self.order = Order::identity(self.cards.len());
        self.transforms = layout(self.order.as_slice(), &self.config);
        debug!("cards replaced, {} cards", self.cards.len());

        if self.mounted {
            self.surface.clear();
            self.last_tick = Some(now);
            self.start_rotation(now);
            self.render();
        }
        Ok(())
    }

    /// Tear down timer, timeline and callback. Safe to call any number of times.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.scheduler.stop();
        if let Some(transition) = self.transition.take() {
            debug!(
                "dropping in-flight transition at {:.3}s without commit",
                transition.elapsed()
            );
        }
        self.on_card_click = None;
        self.surface.clear();
        info!("card swap destroyed after {} rotations", self.commits);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn front(&self) -> Option<&Card> {
        self.order.front().and_then(|i| self.cards.get(i))
    }

    pub fn state(&self) -> SchedulerState {
        self.scheduler.state()
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn render_mode(&self) -> RenderMode {
        self.mode
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Phase of the in-flight transition, if any.
    pub fn phase(&self) -> Option<Phase> {
        self.transition.as_ref().map(|t| t.phase(&self.config))
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Completed rotations since mount.
    pub fn commits(&self) -> u64 {
        self.commits
    }

    /// Current per-card transforms, indexed by card.
    pub fn transforms(&self) -> &[CardTransform] {
        &self.transforms
    }

    /// Slots for the committed order, indexed by stack position.
    pub fn slots(&self) -> Vec<Slot> {
        let total = self.order.len();
        (0..total).map(|p| slot_for(p, total, &self.config)).collect()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn start_rotation(&mut self, now: Timestamp) {
        if self.mode == RenderMode::Static || self.cards.len() < 2 {
            debug!("rotation not started ({} cards, {:?})", self.cards.len(), self.mode);
            return;
        }
        self.scheduler.start(now);
        if self.config.swap_on_start {
            self.begin_rotation();
        }
    }

    fn begin_rotation(&mut self) -> bool {
        if self.transition.is_some() {
            return false;
        }
        match Transition::build(&self.order, &self.config) {
            Some(transition) => {
                debug!("rotation started, card {} drops", transition.front());
                self.transition = Some(transition);
                true
            }
            None => false,
        }
    }

    fn commit(&mut self, rotated: Order, now: Timestamp) {
        self.order = rotated;
        self.transition = None;
        self.commits += 1;
        self.scheduler.restart(now);
        debug!("rotation committed, order {:?}", self.order.as_slice());
    }

    fn dispatch_click(&mut self, card: usize) -> bool {
        let (Some(handler), Some(clicked)) = (self.on_card_click.as_mut(), self.cards.get(card))
        else {
            return false;
        };
        handler(clicked);
        true
    }

    fn render(&mut self) {
        let view = RenderView {
            cards: &self.cards,
            transforms: &self.transforms,
            order: &self.order,
            config: &self.config,
            state: self.scheduler.state(),
            animating: self.transition.is_some(),
        };
        self.surface.render(&view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::EasingProfile;
    use crate::surface::FrameBuffer;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn cards(ids: &[&str]) -> Vec<Card> {
        ids.iter().map(|id| Card::new(*id)).collect()
    }

    fn ms(ms: u64) -> Timestamp {
        Timestamp::from_micros(ms * 1000)
    }

    fn linear() -> CarouselOptions {
        CarouselOptions {
            easing_profile: EasingProfile::Linear,
            rotation_interval_ms: 1000.0,
            ..CarouselOptions::default()
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<String>>>, CardClickHandler) {
        let clicks = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&clicks);
        let handler: CardClickHandler =
            Box::new(move |card: &Card| sink.borrow_mut().push(card.id.to_string()));
        (clicks, handler)
    }

    /// Drive the engine at 60fps from `from` to `to` (ms).
    fn run(engine: &mut CardSwap<FrameBuffer>, from: u64, to: u64) {
        let mut t = from;
        while t < to {
            t = (t + 16).min(to);
            engine.tick(ms(t));
        }
    }

    struct NoAnimation(FrameBuffer);

    impl Surface for NoAnimation {
        fn animation_available(&self) -> bool {
            false
        }

        fn render(&mut self, view: &RenderView<'_>) {
            self.0.render(view);
        }
    }

    #[test]
    fn three_cards_rotate_once() {
        let mut engine = CardSwap::new(cards(&["A", "B", "C"]), linear(), FrameBuffer::new(), None);
        engine.mount(ms(0)).unwrap();
        assert_eq!(engine.order().as_slice(), &[0, 1, 2]);
        assert_eq!(engine.state(), SchedulerState::Running);

        // Timer fires at 1000ms, transition lasts 1.4s + stagger.
        run(&mut engine, 0, 1000);
        assert!(engine.is_animating());
        assert_eq!(engine.order().as_slice(), &[0, 1, 2]);

        run(&mut engine, 1000, 2600);
        assert!(!engine.is_animating());
        assert_eq!(engine.order().as_slice(), &[1, 2, 0]);
        assert_eq!(engine.front().unwrap().id.as_str(), "B");
        assert_eq!(engine.commits(), 1);
        assert_eq!(engine.transforms(), layout(&[1, 2, 0], engine.config()).as_slice());
    }

    #[test]
    fn commit_restarts_timer() {
        let mut engine = CardSwap::new(cards(&["A", "B"]), linear(), FrameBuffer::new(), None);
        engine.mount(ms(0)).unwrap();
        engine.tick(ms(1000));
        assert!(engine.is_animating());
        engine.tick(ms(2500));
        assert_eq!(engine.commits(), 1);
        // Next firing is one interval after the commit, not after the previous firing.
        engine.tick(ms(3400));
        assert!(!engine.is_animating());
        engine.tick(ms(3500));
        assert!(engine.is_animating());
    }

    #[test]
    fn below_two_cards_never_runs() {
        for ids in [&[][..], &["A"][..]] {
            let mut engine = CardSwap::new(cards(ids), linear(), FrameBuffer::new(), None);
            engine.mount(ms(0)).unwrap();
            run(&mut engine, 0, 10_000);
            assert_eq!(engine.state(), SchedulerState::Idle);
            assert!(!engine.is_animating());
            assert_eq!(engine.commits(), 0);
        }
    }

    #[test]
    fn single_card_is_still_clickable() {
        let (clicks, handler) = recorder();
        let mut engine = CardSwap::new(cards(&["A"]), linear(), FrameBuffer::new(), Some(handler));
        engine.mount(ms(0)).unwrap();
        assert!(engine.click(0));
        assert_eq!(*clicks.borrow(), vec!["A".to_string()]);
    }

    #[test]
    fn only_front_card_click_dispatches() {
        let (clicks, handler) = recorder();
        let mut engine =
            CardSwap::new(cards(&["A", "B", "C"]), linear(), FrameBuffer::new(), Some(handler));
        engine.mount(ms(0)).unwrap();

        assert!(!engine.click(1));
        assert!(!engine.click(2));
        assert!(engine.click(0));
        assert!(!engine.click_card("C"));
        assert!(!engine.click_card("missing"));

        run(&mut engine, 0, 2600);
        assert!(engine.click_card("B"));
        assert!(!engine.click_card("A"));
        assert_eq!(*clicks.borrow(), vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn ticks_during_transition_are_skipped() {
        let options = CarouselOptions {
            easing_profile: EasingProfile::Elastic,
            rotation_interval_ms: 100.0,
            ..CarouselOptions::default()
        };
        let mut engine = CardSwap::new(cards(&["A", "B", "C"]), options, FrameBuffer::new(), None);
        engine.mount(ms(0)).unwrap();

        // The timer fires many times during the 2.35s elastic transition.
        run(&mut engine, 0, 1500);
        assert!(engine.is_animating());
        assert_eq!(engine.commits(), 0);

        run(&mut engine, 1500, 2600);
        assert_eq!(engine.commits(), 1);
        assert_eq!(engine.order().as_slice(), &[1, 2, 0]);
    }

    #[test]
    fn hover_pauses_mid_flight_and_resume_commits() {
        let mut engine = CardSwap::new(cards(&["A", "B", "C"]), linear(), FrameBuffer::new(), None);
        engine.mount(ms(0)).unwrap();
        run(&mut engine, 0, 1300);
        assert!(engine.is_animating());

        engine.pointer_enter(ms(1300));
        assert_eq!(engine.state(), SchedulerState::Paused);
        let frozen = engine.transforms().to_vec();
        run(&mut engine, 1300, 9000);
        assert_eq!(engine.transforms(), frozen.as_slice());
        assert_eq!(engine.order().as_slice(), &[0, 1, 2]);

        engine.pointer_leave(ms(9000));
        assert_eq!(engine.state(), SchedulerState::Running);
        run(&mut engine, 9000, 10_500);
        assert_eq!(engine.commits(), 1);
        assert_eq!(engine.order().as_slice(), &[1, 2, 0]);
    }

    #[test]
    fn resume_without_ticks_while_paused_continues_from_pause_point() {
        let mut engine = CardSwap::new(cards(&["A", "B", "C"]), linear(), FrameBuffer::new(), None);
        engine.mount(ms(0)).unwrap();
        engine.tick(ms(1000));
        engine.tick(ms(1100));
        assert!(engine.is_animating());

        // The host stops ticking while hovered.
        engine.pointer_enter(ms(1100));
        engine.pointer_leave(ms(9100));
        engine.tick(ms(9116));
        assert!(engine.is_animating());
        assert_eq!(engine.commits(), 0);
        assert_eq!(engine.phase(), Some(Phase::Drop));

        run(&mut engine, 9116, 10_600);
        assert_eq!(engine.commits(), 1);
        assert_eq!(engine.order().as_slice(), &[1, 2, 0]);
    }

    #[test]
    fn resolve_click_selects_front_without_dispatch() {
        let (clicks, handler) = recorder();
        let mut engine =
            CardSwap::new(cards(&["A", "B"]), linear(), FrameBuffer::new(), Some(handler));
        engine.mount(ms(0)).unwrap();
        assert_eq!(engine.resolve_click(0).map(|c| c.id.as_str()), Some("A"));
        assert!(engine.resolve_click(1).is_none());
        assert!(clicks.borrow().is_empty());

        engine.destroy();
        assert!(engine.resolve_click(0).is_none());
    }

    #[test]
    fn resume_during_return_phase() {
        let mut engine = CardSwap::new(cards(&["A", "B", "C"]), linear(), FrameBuffer::new(), None);
        engine.mount(ms(0)).unwrap();
        engine.tick(ms(1000));
        engine.tick(ms(1700));
        assert_eq!(engine.phase(), Some(Phase::Return));

        engine.pointer_enter(ms(1700));
        engine.pointer_leave(ms(1700));
        engine.pointer_leave(ms(1700));
        engine.pointer_enter(ms(1750));
        engine.pointer_leave(ms(1800));
        assert_eq!(engine.state(), SchedulerState::Running);

        run(&mut engine, 1800, 3000);
        assert_eq!(engine.commits(), 1);
        assert_eq!(engine.order().as_slice(), &[1, 2, 0]);
        assert_eq!(engine.transforms(), layout(&[1, 2, 0], engine.config()).as_slice());
    }

    #[test]
    fn hover_ignored_when_disabled() {
        let options = CarouselOptions {
            pause_on_hover: false,
            ..linear()
        };
        let mut engine = CardSwap::new(cards(&["A", "B"]), options, FrameBuffer::new(), None);
        engine.mount(ms(0)).unwrap();
        engine.pointer_enter(ms(10));
        assert_eq!(engine.state(), SchedulerState::Running);
    }

    #[test]
    fn destroy_is_idempotent_and_discards_transition() {
        let (clicks, handler) = recorder();
        let mut engine =
            CardSwap::new(cards(&["A", "B", "C"]), linear(), FrameBuffer::new(), Some(handler));
        engine.mount(ms(0)).unwrap();
        run(&mut engine, 0, 1500);
        assert!(engine.is_animating());

        engine.destroy();
        engine.destroy();
        assert!(engine.is_destroyed());
        assert_eq!(engine.state(), SchedulerState::Idle);
        assert!(!engine.is_animating());
        assert!(engine.surface().latest().is_none());

        run(&mut engine, 1500, 20_000);
        engine.pointer_leave(ms(20_000));
        assert_eq!(engine.state(), SchedulerState::Idle);
        assert_eq!(engine.order().as_slice(), &[0, 1, 2]);
        assert!(!engine.click(0));
        assert!(clicks.borrow().is_empty());
        assert!(matches!(engine.mount(ms(0)), Err(CarouselError::Destroyed)));
    }

    #[test]
    fn static_when_animation_unavailable() {
        let mut engine = CardSwap::new(
            cards(&["A", "B", "C"]),
            linear(),
            NoAnimation(FrameBuffer::new()),
            None,
        );
        engine.mount(ms(0)).unwrap();
        assert_eq!(engine.render_mode(), RenderMode::Static);
        assert_eq!(engine.state(), SchedulerState::Idle);
        assert_eq!(engine.surface().0.renders(), 1);
        for t in (0..10_000).step_by(100) {
            engine.tick(ms(t));
        }
        assert_eq!(engine.commits(), 0);
    }

    #[test]
    fn linear_and_elastic_agree_on_order() {
        let mut results = Vec::new();
        for profile in [EasingProfile::Linear, EasingProfile::Elastic] {
            let options = CarouselOptions {
                easing_profile: profile,
                rotation_interval_ms: 1000.0,
                ..CarouselOptions::default()
            };
            let mut engine = CardSwap::new(cards(&["A", "B", "C"]), options, FrameBuffer::new(), None);
            engine.mount(ms(0)).unwrap();
            run(&mut engine, 0, 3500);
            assert_eq!(engine.commits(), 1);
            results.push(engine.order().clone());
        }
        assert_eq!(results[0], results[1]);
    }

    #[test]
    fn swap_on_start_begins_immediately() {
        let options = CarouselOptions {
            swap_on_start: true,
            ..linear()
        };
        let mut engine = CardSwap::new(cards(&["A", "B"]), options, FrameBuffer::new(), None);
        engine.mount(ms(0)).unwrap();
        assert!(engine.is_animating());
    }

    #[test]
    fn replace_cards_resets_order() {
        let mut engine = CardSwap::new(cards(&["A", "B", "C"]), linear(), FrameBuffer::new(), None);
        engine.mount(ms(0)).unwrap();
        run(&mut engine, 0, 2600);
        assert_eq!(engine.order().as_slice(), &[1, 2, 0]);
        run(&mut engine, 2600, 3700);
        assert!(engine.is_animating());

        engine.replace_cards(cards(&["X", "Y"]), ms(3700)).unwrap();
        assert!(!engine.is_animating());
        assert_eq!(engine.order().as_slice(), &[0, 1]);
        assert_eq!(engine.state(), SchedulerState::Running);
        assert_eq!(engine.surface().latest().unwrap().cards.len(), 2);

        engine.replace_cards(cards(&["solo"]), ms(3800)).unwrap();
        assert_eq!(engine.state(), SchedulerState::Idle);
    }

    #[test]
    fn instances_do_not_share_state() {
        let mut a = CardSwap::new(cards(&["A", "B"]), linear(), FrameBuffer::new(), None);
        let mut b = CardSwap::new(cards(&["A", "B"]), linear(), FrameBuffer::new(), None);
        a.mount(ms(0)).unwrap();
        b.mount(ms(0)).unwrap();
        run(&mut a, 0, 2600);
        a.pointer_enter(ms(2600));
        assert_eq!(a.commits(), 1);
        assert_eq!(b.commits(), 0);
        assert_eq!(b.state(), SchedulerState::Running);
        assert_eq!(b.order().as_slice(), &[0, 1]);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Advance(u64),
            Enter,
            Leave,
            Click(usize),
        }

        fn op_strategy() -> impl Strategy<Value = Op> {
            prop_oneof![
                4 => (1u64..800).prop_map(Op::Advance),
                1 => Just(Op::Enter),
                1 => Just(Op::Leave),
                1 => (0usize..8).prop_map(Op::Click),
            ]
        }

        proptest! {
            #[test]
            fn order_stays_a_rotation_of_identity(
                n in 0usize..6,
                ops in proptest::collection::vec(op_strategy(), 0..120),
            ) {
                let ids: Vec<String> = (0..n).map(|i| format!("c{i}")).collect();
                let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
                let (clicks, handler) = recorder();
                let mut engine = CardSwap::new(cards(&ids), linear(), FrameBuffer::new(), Some(handler));
                engine.mount(ms(0)).unwrap();

                let mut now = 0;
                let mut expected = Order::identity(n);
                let mut commits = 0;
                let mut expected_clicks = 0;
                for op in ops {
                    match op {
                        Op::Advance(step) => {
                            now += step;
                            engine.tick(ms(now));
                        }
                        Op::Enter => engine.pointer_enter(ms(now)),
                        Op::Leave => engine.pointer_leave(ms(now)),
                        Op::Click(card) => {
                            if engine.click(card) {
                                prop_assert_eq!(Some(card), engine.order().front());
                                expected_clicks += 1;
                            }
                        }
                    }
                    // Each commit is exactly one left rotation of the previous order.
                    while commits < engine.commits() {
                        expected = expected.rotated();
                        commits += 1;
                    }
                    prop_assert_eq!(engine.order(), &expected);
                    if !engine.is_animating() {
                        let resting = layout(engine.order().as_slice(), engine.config());
                        prop_assert_eq!(engine.transforms(), resting.as_slice());
                    }
                }
                prop_assert_eq!(clicks.borrow().len(), expected_clicks);
                if n < 2 {
                    prop_assert_eq!(engine.commits(), 0);
                }
            }
        }
    }

    #[test]
    fn frame_reflects_mount() {
        let mut engine = CardSwap::new(cards(&["A", "B", "C"]), linear(), FrameBuffer::new(), None);
        engine.mount(ms(0)).unwrap();
        let frame = engine.surface().latest().unwrap();
        assert_eq!(frame.state, SchedulerState::Running);
        assert_eq!(frame.cards.len(), 3);
        assert!(frame.cards[0].is_front);
        assert_eq!(frame.cards[2].transform.z_index, 1);
        assert_eq!(engine.slots()[0].stack_index, 3);
    }
}
