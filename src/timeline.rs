// Single-use animation timeline: positioned tweens and z-index sets over card transforms.
// Tweens capture their start values the first time the playhead reaches them and
// render in insertion order, so a later tween wins on a shared property.

use crate::easing::Ease;
use crate::types::{CardTransform, Slot};

/// What a tween does to its card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Move vertically by a relative amount.
    OffsetY(f64),
    /// Move to a slot's x/y/depth. Stacking index is set separately.
    ToSlot(Slot),
}

#[derive(Debug, Clone)]
struct Tween {
    card: usize,
    start: f64,
    duration: f64,
    ease: Ease,
    motion: Motion,
    from: Option<CardTransform>,
    done: bool,
}

impl Tween {
    fn end(&self) -> f64 {
        self.start + self.duration
    }

    fn render(&mut self, playhead: f64, transforms: &mut [CardTransform]) {
        if self.done || playhead < self.start {
            return;
        }
        let Some(current) = transforms.get_mut(self.card) else {
            self.done = true;
            return;
        };
        let from = *self.from.get_or_insert(*current);

        let progress = if self.duration > 0.0 {
            (playhead - self.start) / self.duration
        } else {
            1.0
        };
        let finished = progress >= 1.0;
        let eased = self.ease.apply(progress);

        match self.motion {
            Motion::OffsetY(dy) => {
                current.y = lerp(from.y, from.y + dy, eased, finished);
            }
            Motion::ToSlot(slot) => {
                current.x = lerp(from.x, slot.offset_x, eased, finished);
                current.y = lerp(from.y, slot.offset_y, eased, finished);
                current.z = lerp(from.z, slot.depth, eased, finished);
            }
        }
        self.done = finished;
    }
}

#[derive(Debug, Clone)]
struct ZIndexSet {
    card: usize,
    at: f64,
    z_index: i32,
    fired: bool,
}

#[derive(Debug, Clone)]
enum Step {
    Tween(Tween),
    ZIndex(ZIndexSet),
}

/// Whether a timeline still has work to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Running,
    Complete,
}

/// A one-shot timeline. Time is in seconds from the timeline's start.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    steps: Vec<Step>,
    playhead: f64,
    duration: f64,
    paused: bool,
}

impl Timeline {
    pub fn new() -> Self {
        Timeline::default()
    }

    /// Add a tween on `card` starting at `start`.
    pub fn tween(&mut self, card: usize, start: f64, duration: f64, ease: Ease, motion: Motion) {
        let tween = Tween {
            card,
            start: start.max(0.0),
            duration: duration.max(0.0),
            ease,
            motion,
            from: None,
            done: false,
        };
        self.duration = self.duration.max(tween.end());
        self.steps.push(Step::Tween(tween));
    }

    /// Set `card`'s stacking index when the playhead reaches `at`.
    pub fn set_z_index(&mut self, card: usize, at: f64, z_index: i32) {
        let at = at.max(0.0);
        self.duration = self.duration.max(at);
        self.steps.push(Step::ZIndex(ZIndexSet {
            card,
            at,
            z_index,
            fired: false,
        }));
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn playhead(&self) -> f64 {
        self.playhead
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Freeze the playhead. Transforms keep their current values.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Continue from where the playhead was frozen.
    pub fn play(&mut self) {
        self.paused = false;
    }

    /// Move the playhead forward by `dt` seconds and render into `transforms`.
    pub fn advance(&mut self, dt: f64, transforms: &mut [CardTransform]) -> Progress {
        if !self.paused && dt.is_finite() && dt > 0.0 {
            self.playhead = (self.playhead + dt).min(self.duration);
        }
        let playhead = self.playhead;

        for step in &mut self.steps {
            match step {
                Step::Tween(tween) => tween.render(playhead, transforms),
                Step::ZIndex(set) => {
                    if !set.fired && playhead >= set.at {
                        if let Some(t) = transforms.get_mut(set.card) {
                            t.z_index = set.z_index;
                        }
                        set.fired = true;
                    }
                }
            }
        }

        if self.is_finished() {
            Progress::Complete
        } else {
            Progress::Running
        }
    }

    fn is_finished(&self) -> bool {
        self.playhead >= self.duration
            && self.steps.iter().all(|step| match step {
                Step::Tween(t) => t.done,
                Step::ZIndex(s) => s.fired,
            })
    }
}

fn lerp(a: f64, b: f64, t: f64, finished: bool) -> f64 {
    if finished {
        b
    } else {
        a + (b - a) * t
    }
}
