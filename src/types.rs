// Strong typing over strings. Newtypes for timestamps and card ids.
// Cards are caller-owned; the engine only rearranges and positions them.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Timestamp in microseconds on the host clock. Newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Timestamp(u64);

impl Timestamp {
    pub fn from_micros(us: u64) -> Self {
        Timestamp(us)
    }

    /// From a `performance.now()` style reading. Negative and non-finite values map to zero.
    pub fn from_millis_f64(ms: f64) -> Self {
        if ms.is_finite() && ms > 0.0 {
            Timestamp((ms * 1000.0) as u64)
        } else {
            Timestamp(0)
        }
    }

    pub fn as_micros(&self) -> u64 {
        self.0
    }

    pub fn as_millis(&self) -> f64 {
        self.0 as f64 / 1000.0
    }

    pub fn as_secs(&self) -> f64 {
        self.0 as f64 / 1_000_000.0
    }

    pub fn plus_millis(&self, ms: u64) -> Self {
        Timestamp(self.0.saturating_add(ms.saturating_mul(1000)))
    }

    /// Seconds elapsed since `earlier`, zero if the clock went backwards.
    pub fn secs_since(&self, earlier: Timestamp) -> f64 {
        self.0.saturating_sub(earlier.0) as f64 / 1_000_000.0
    }
}

/// Stable card identifier. Accepts JSON strings and integers.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    pub fn new(id: impl Into<String>) -> Self {
        CardId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CardId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => CardId(s),
            RawId::Number(n) => CardId(n.to_string()),
        })
    }
}

/// A caller-supplied card: stable id plus an opaque display payload
/// (name, status, phone, operations...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    #[serde(flatten)]
    pub payload: BTreeMap<String, serde_json::Value>,
}

impl Card {
    pub fn new(id: impl Into<String>) -> Self {
        Card {
            id: CardId::new(id),
            payload: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.payload.insert(key.to_string(), value.into());
        self
    }
}

/// Computed stack position of one card. Derived, never stored as truth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub offset_x: f64,
    pub offset_y: f64,
    pub depth: f64,
    pub stack_index: i32,
}

/// What a surface draws for one card at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct CardTransform {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub z_index: i32,
    pub skew_y: f64,
}

impl CardTransform {
    pub fn at_slot(slot: &Slot, skew_y: f64) -> Self {
        CardTransform {
            x: slot.offset_x,
            y: slot.offset_y,
            z: slot.depth,
            z_index: slot.stack_index,
            skew_y,
        }
    }
}

/// Rotation scheduler state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchedulerState {
    Idle,
    Running,
    Paused,
}

/// Whether the engine animates or only lays cards out once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderMode {
    Animated,
    Static,
}

/// One card's entry in a rendered frame (component adapter output).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardFrame {
    pub id: CardId,
    pub transform: CardTransform,
    pub width: f64,
    pub height: f64,
    pub is_front: bool,
}

/// Snapshot handed to the host framework after each tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    pub cards: Vec<CardFrame>,
    pub order: Vec<usize>,
    pub state: SchedulerState,
    pub animating: bool,
}
