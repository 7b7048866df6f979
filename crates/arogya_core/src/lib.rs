//! Arogya core - response selection for a public-health information assistant.
//!
//! The dialogue engine (external) classifies intent and collects slots; this
//! crate turns an intent plus raw text and slot values into rendered advisory
//! messages and slot-update instructions. Knowledge tables are immutable after
//! startup, external lookups are single-attempt with bounded timeouts, and
//! slot state is passed in and returned, never retained here.

pub mod advice;
pub mod bmi;
pub mod checkup;
pub mod dispatch;
pub mod gateway;
pub mod knowledge;
pub mod normalize;
pub mod slots;
pub mod topics;
pub mod triage;
pub mod vaccination;

/// National health helpline, quoted in most rendered messages.
pub const HELPLINE: &str = "1075";

/// Ambulance / medical emergency numbers.
pub const EMERGENCY_NUMBERS: &str = "102/108";
