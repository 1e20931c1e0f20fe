// Easing curves and per-profile transition timings.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::options::EasingProfile;

/// Easing curve applied to a tween's normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Ease {
    Linear,
    /// Quadratic ease-in-out.
    Power1InOut,
    /// Decaying sine overshoot that settles on 1.
    ElasticOut { amplitude: f64, period: f64 },
}

impl Ease {
    /// Map progress `t` in `[0, 1]` to eased progress. Exact at both ends.
    pub fn apply(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match *self {
            Ease::Linear => t,
            Ease::Power1InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
            Ease::ElasticOut { amplitude, period } => elastic_out(t, amplitude, period),
        }
    }
}

fn elastic_out(t: f64, amplitude: f64, period: f64) -> f64 {
    // Amplitudes below 1 stretch the period instead of shrinking the swing.
    let a = amplitude.max(1.0);
    let stretched = period / amplitude.min(1.0);
    let phase = stretched / TAU * (1.0 / a).asin();
    let angular = TAU / stretched;
    a * 2f64.powf(-10.0 * t) * ((t - phase) * angular).sin() + 1.0
}

/// Timings for one rotation cycle. Durations are in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionProfile {
    pub ease: Ease,
    pub dur_drop: f64,
    pub dur_move: f64,
    pub dur_return: f64,
    /// Fraction of the drop phase that the promote phase overlaps.
    pub promote_overlap: f64,
    /// Fraction of `dur_move` after promote at which the return starts.
    pub return_delay: f64,
}

/// Delay between consecutive promoted cards, in seconds.
pub const PROMOTE_STAGGER: f64 = 0.15;

/// How far the front card falls during the drop phase.
pub const DROP_DISTANCE: f64 = 500.0;

impl TransitionProfile {
    pub fn for_profile(profile: EasingProfile) -> Self {
        match profile {
            EasingProfile::Elastic => TransitionProfile {
                ease: Ease::ElasticOut {
                    amplitude: 0.6,
                    period: 0.9,
                },
                dur_drop: 2.0,
                dur_move: 2.0,
                dur_return: 2.0,
                promote_overlap: 0.9,
                return_delay: 0.05,
            },
            EasingProfile::Linear => TransitionProfile {
                ease: Ease::Power1InOut,
                dur_drop: 0.8,
                dur_move: 0.8,
                dur_return: 0.8,
                promote_overlap: 0.45,
                return_delay: 0.2,
            },
        }
    }

    /// Timeline position of the promote label.
    pub fn promote_at(&self) -> f64 {
        (self.dur_drop - self.dur_drop * self.promote_overlap).max(0.0)
    }

    /// Timeline position of the return label.
    pub fn return_at(&self) -> f64 {
        self.promote_at() + self.dur_move * self.return_delay
    }
}
