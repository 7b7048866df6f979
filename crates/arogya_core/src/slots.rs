//! Per-turn slot state exchanged with the dialogue engine.
//!
//! Slots are collected across turns by the external dialogue engine; this
//! core only validates them on assignment and consumes them once. Updates
//! flow back as explicit instructions, so the core never holds slot state
//! between calls.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// A slot value as handed over by the dialogue engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotValue {
    Number(f64),
    Text(String),
}

impl SlotValue {
    /// Raw text form, used by validators that strip unit suffixes.
    pub fn as_text(&self) -> String {
        match self {
            SlotValue::Number(n) => n.to_string(),
            SlotValue::Text(s) => s.clone(),
        }
    }
}

impl From<f64> for SlotValue {
    fn from(n: f64) -> Self {
        SlotValue::Number(n)
    }
}

impl From<&str> for SlotValue {
    fn from(s: &str) -> Self {
        SlotValue::Text(s.to_string())
    }
}

impl From<String> for SlotValue {
    fn from(s: String) -> Self {
        SlotValue::Text(s)
    }
}

/// Slot name to current value, as tracked by the dialogue engine.
pub type SlotMap = BTreeMap<String, SlotValue>;

/// Slot-update instruction returned to the dialogue engine for persisting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SlotEvent {
    Set { name: String, value: SlotValue },
    Clear { name: String },
}

impl SlotEvent {
    pub fn set(name: &str, value: impl Into<SlotValue>) -> Self {
        SlotEvent::Set {
            name: name.to_string(),
            value: value.into(),
        }
    }

    pub fn clear(name: &str) -> Self {
        SlotEvent::Clear {
            name: name.to_string(),
        }
    }
}

/// Clear instructions for a whole slot group. Multi-step flows emit these
/// unconditionally on every terminal path so a session can never get stuck
/// with partially filled state.
pub fn clear_all(names: &[&str]) -> Vec<SlotEvent> {
    names.iter().map(|n| SlotEvent::clear(n)).collect()
}

/// Validation failure for a single slot. Recovered locally: the prompt is
/// shown and the field re-collected, never surfaced as a system error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{prompt}")]
pub struct SlotError {
    pub prompt: String,
}

impl SlotError {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_all_covers_every_name() {
        let events = clear_all(&["weight", "height", "age", "gender"]);
        assert_eq!(events.len(), 4);
        assert!(events.iter().all(|e| matches!(e, SlotEvent::Clear { .. })));
    }

    #[test]
    fn slot_events_serialize_tagged() {
        let set = SlotEvent::set("weight", 70.0);
        let json = serde_json::to_string(&set).unwrap();
        assert!(json.contains("\"op\":\"set\""));

        let clear = SlotEvent::clear("weight");
        let json = serde_json::to_string(&clear).unwrap();
        assert!(json.contains("\"op\":\"clear\""));
    }

    #[test]
    fn number_round_trips_as_text() {
        assert_eq!(SlotValue::Number(70.5).as_text(), "70.5");
        assert_eq!(SlotValue::Text("70kg".into()).as_text(), "70kg");
    }
}
