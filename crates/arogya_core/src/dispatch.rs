//! Intent-to-response dispatcher: the inbound contract with the dialogue
//! engine.
//!
//! A request carries an intent name, the raw utterance, and the current slot
//! values; the response carries rendered messages plus slot-update
//! instructions for the engine to persist. Each dispatch is handled to
//! completion, including any network call, before the next is considered.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::bmi::{self, BmiInput};
use crate::checkup;
use crate::gateway::{GatewayError, HealthGateway};
use crate::knowledge::{self, KnowledgeBase};
use crate::normalize::normalize;
use crate::slots::{clear_all, SlotError, SlotEvent, SlotMap, SlotValue};
use crate::topics::{self, TopicClass};
use crate::triage;
use crate::{advice, vaccination};

/// Slot names of the BMI form, cleared together after every outcome.
pub const BMI_SLOTS: [&str; 4] = ["weight", "height", "age", "gender"];

/// Disease-question phrasings that redirect a symptom check to the
/// question-answering path.
const QUESTION_PHRASES: [&str; 4] = ["what is", "tell me about", "info about", "information on"];

/// Intents this core responds to, as classified by the dialogue engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    AnswerHealthQuestion,
    SymptomCheck,
    RespondSymptom,
    CalculateBmi,
    VaccinationSchedule,
    FetchStats,
    VaccinationData,
    MedicationInfo,
    SuggestRemedy,
    PreventiveHealthcare,
    OutbreakAlerts,
    HealthCheckup,
}

impl Intent {
    /// Parse the wire name of an intent.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "answer_health_question" => Some(Self::AnswerHealthQuestion),
            "symptom_check" => Some(Self::SymptomCheck),
            "respond_symptom" => Some(Self::RespondSymptom),
            "calculate_bmi" => Some(Self::CalculateBmi),
            "vaccination_schedule" => Some(Self::VaccinationSchedule),
            "fetch_stats" => Some(Self::FetchStats),
            "vaccination_data" => Some(Self::VaccinationData),
            "medication_info" => Some(Self::MedicationInfo),
            "suggest_remedy" => Some(Self::SuggestRemedy),
            "preventive_healthcare" => Some(Self::PreventiveHealthcare),
            "outbreak_alerts" => Some(Self::OutbreakAlerts),
            "health_checkup" => Some(Self::HealthCheckup),
            _ => None,
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::AnswerHealthQuestion => "answer_health_question",
            Self::SymptomCheck => "symptom_check",
            Self::RespondSymptom => "respond_symptom",
            Self::CalculateBmi => "calculate_bmi",
            Self::VaccinationSchedule => "vaccination_schedule",
            Self::FetchStats => "fetch_stats",
            Self::VaccinationData => "vaccination_data",
            Self::MedicationInfo => "medication_info",
            Self::SuggestRemedy => "suggest_remedy",
            Self::PreventiveHealthcare => "preventive_healthcare",
            Self::OutbreakAlerts => "outbreak_alerts",
            Self::HealthCheckup => "health_checkup",
        };
        write!(f, "{}", s)
    }
}

/// Inbound turn from the dialogue engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchRequest {
    pub intent: Intent,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub slots: SlotMap,
}

impl DispatchRequest {
    pub fn new(intent: Intent, text: &str) -> Self {
        Self {
            intent,
            text: text.to_string(),
            slots: SlotMap::new(),
        }
    }

    pub fn with_slot(mut self, name: &str, value: impl Into<SlotValue>) -> Self {
        self.slots.insert(name.to_string(), value.into());
        self
    }

    fn slot_text(&self, name: &str) -> Option<String> {
        self.slots.get(name).map(|v| v.as_text())
    }
}

/// Outbound turn: rendered messages plus slot-update instructions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DispatchResponse {
    pub messages: Vec<String>,
    pub events: Vec<SlotEvent>,
}

impl DispatchResponse {
    fn message(text: impl Into<String>) -> Self {
        Self {
            messages: vec![text.into()],
            events: Vec::new(),
        }
    }

    fn with_events(mut self, events: Vec<SlotEvent>) -> Self {
        self.events = events;
        self
    }
}

/// The response-selection core. Holds only immutable configuration; safe to
/// share across sessions.
pub struct Dispatcher {
    knowledge: KnowledgeBase,
    gateway: HealthGateway,
}

impl Dispatcher {
    pub fn new(knowledge: KnowledgeBase, gateway: HealthGateway) -> Self {
        Self { knowledge, gateway }
    }

    /// Embedded knowledge base and default endpoints.
    pub fn with_defaults() -> Result<Self, GatewayError> {
        Ok(Self::new(
            KnowledgeBase::embedded().clone(),
            HealthGateway::with_defaults()?,
        ))
    }

    /// Route one turn to its handler.
    pub fn dispatch(&self, request: &DispatchRequest) -> DispatchResponse {
        debug!(intent = %request.intent, "dispatching");
        match request.intent {
            Intent::AnswerHealthQuestion => self.answer_health_question(&request.text),
            Intent::SymptomCheck => self.symptom_check(&request.text),
            Intent::RespondSymptom => {
                DispatchResponse::message(advice::symptom_advice(&request.text))
            }
            Intent::CalculateBmi => self.calculate_bmi(request),
            Intent::VaccinationSchedule => {
                DispatchResponse::message(vaccination::schedule_for(&request.text))
            }
            Intent::FetchStats => self.fetch_stats(&request.text),
            Intent::VaccinationData => self.vaccination_data(),
            Intent::MedicationInfo => {
                DispatchResponse::message(advice::medication_info(&request.text))
            }
            Intent::SuggestRemedy => self.suggest_remedy(request),
            Intent::PreventiveHealthcare => {
                DispatchResponse::message(advice::preventive_advice(&request.text))
            }
            Intent::OutbreakAlerts => self.outbreak_alerts(request),
            Intent::HealthCheckup => self.health_checkup(request),
        }
    }

    /// Route by wire name; unknown intents get a defined can't-help reply.
    pub fn dispatch_named(&self, intent: &str, text: &str, slots: SlotMap) -> DispatchResponse {
        match Intent::from_name(intent) {
            Some(parsed) => self.dispatch(&DispatchRequest {
                intent: parsed,
                text: text.to_string(),
                slots,
            }),
            None => {
                warn!(intent, "unknown intent");
                DispatchResponse::message(format!(
                    "I can't help with that yet. Try asking a health question, a symptom \
                     check, or a BMI calculation.\n📞 Helpline: {}",
                    crate::HELPLINE,
                ))
            }
        }
    }

    /// Question-answering priority: quick topics, then gateway, then
    /// knowledge base, then the generic fallback.
    fn answer_health_question(&self, text: &str) -> DispatchResponse {
        match topics::classify(text) {
            TopicClass::Quick(name) => {
                if let Some(answer) = knowledge::quick_answer(name) {
                    return DispatchResponse::message(answer);
                }
            }
            TopicClass::Covid => match self.gateway.fetch_covid_stats() {
                Ok(stats) => return DispatchResponse::message(stats),
                Err(e) => debug!(error = %e, "covid stats unavailable, trying knowledge base"),
            },
            TopicClass::General => {}
        }

        let Some(key) = normalize(text) else {
            // Too short to name a topic: skip external lookup entirely.
            return DispatchResponse::message(knowledge::fallback_message());
        };

        if topics::classify(&key) == TopicClass::General {
            match self.gateway.fetch_topic_summary(&key) {
                Ok(summary) => return DispatchResponse::message(summary),
                Err(e) => debug!(topic = %key, error = %e, "gateway unavailable, falling back"),
            }
        }

        match self.knowledge.lookup(&key) {
            Some(entry) => DispatchResponse::message(entry),
            None => DispatchResponse::message(knowledge::fallback_message()),
        }
    }

    /// Symptom triage; disease-question phrasings are redirected to the
    /// question-answering path instead.
    fn symptom_check(&self, text: &str) -> DispatchResponse {
        let lowered = text.to_lowercase();
        if QUESTION_PHRASES.iter().any(|p| lowered.contains(p)) {
            return self.answer_health_question(text);
        }

        let detected = triage::extract_symptoms(text);
        let hypotheses = triage::triage(&detected);
        DispatchResponse::message(triage::render_report(&detected, &hypotheses))
    }

    /// BMI computation over collected slots. Every terminal outcome clears
    /// all four slots; a single invalid field clears only itself for
    /// re-collection.
    fn calculate_bmi(&self, request: &DispatchRequest) -> DispatchResponse {
        let raw = |name: &str| request.slot_text(name);

        let (Some(weight_raw), Some(height_raw), Some(age_raw), Some(gender_raw)) =
            (raw("weight"), raw("height"), raw("age"), raw("gender"))
        else {
            warn!("BMI requested with missing slots");
            return DispatchResponse::message("⚠ Missing information. Please try again.")
                .with_events(clear_all(&BMI_SLOTS));
        };

        let weight_kg = match bmi::validate_weight(&weight_raw) {
            Ok(w) => w,
            Err(e) => {
                return DispatchResponse::message(e.prompt)
                    .with_events(vec![SlotEvent::clear("weight")]);
            }
        };
        let height_cm = match bmi::validate_height(&height_raw) {
            Ok(h) => h,
            Err(e) => {
                return DispatchResponse::message(e.prompt)
                    .with_events(vec![SlotEvent::clear("height")]);
            }
        };
        let age_years = match bmi::validate_age(&age_raw) {
            Ok(a) => a,
            Err(e) => {
                return DispatchResponse::message(e.prompt)
                    .with_events(vec![SlotEvent::clear("age")]);
            }
        };
        let gender = match bmi::validate_gender(&gender_raw) {
            Ok(g) => g,
            Err(e) => {
                return DispatchResponse::message(e.prompt)
                    .with_events(vec![SlotEvent::clear("gender")]);
            }
        };

        let input = BmiInput {
            weight_kg,
            height_cm,
            age_years,
            gender,
        };
        let report = bmi::compute(&input);

        DispatchResponse::message(bmi::render_summary(&input, &report))
            .with_events(clear_all(&BMI_SLOTS))
    }

    fn fetch_stats(&self, text: &str) -> DispatchResponse {
        let lowered = text.to_lowercase();
        let global = lowered.contains("global") || lowered.contains("world");
        let result = if global {
            self.gateway.fetch_global_stats()
        } else {
            // Per-country stats double as the government-data answer, so the
            // national helplines, portals, and schemes ride along.
            self.gateway.fetch_covid_stats().map(with_government_resources)
        };

        match result {
            Ok(stats) => DispatchResponse::message(stats),
            Err(e) => {
                warn!(error = %e, "statistics endpoint unavailable");
                DispatchResponse::message(format!(
                    "Unable to fetch data. Please try:\n\
                     📞 National Health Helpline: {}\n\
                     🌐 Visit: mohfw.gov.in",
                    crate::HELPLINE,
                ))
            }
        }
    }

    fn vaccination_data(&self) -> DispatchResponse {
        match self.gateway.fetch_vaccination_coverage() {
            Ok(data) => DispatchResponse::message(data),
            Err(e) => {
                warn!(error = %e, "vaccination coverage unavailable");
                DispatchResponse::message("For vaccination data, visit: cowin.gov.in")
            }
        }
    }

    fn suggest_remedy(&self, request: &DispatchRequest) -> DispatchResponse {
        let slot = request.slot_text("symptom_name");
        match advice::suggest_remedy(slot.as_deref(), &request.text) {
            Some(text) => DispatchResponse::message(text),
            None => DispatchResponse::message("Please tell me your symptom first."),
        }
    }

    fn outbreak_alerts(&self, request: &DispatchRequest) -> DispatchResponse {
        let region = request
            .slot_text("location")
            .unwrap_or_else(|| "India".to_string());
        DispatchResponse::message(advice::outbreak_alerts(&region))
    }

    /// Check-up submission. Same slot-hygiene contract as BMI.
    fn health_checkup(&self, request: &DispatchRequest) -> DispatchResponse {
        let raw = |name: &str| request.slot_text(name);

        let (Some(temp_raw), Some(mood_raw), Some(pain_raw), Some(symptom_raw)) = (
            raw("temperature"),
            raw("mood_level"),
            raw("pain_score"),
            raw("symptom_name"),
        ) else {
            warn!("check-up submitted with missing slots");
            return DispatchResponse::message("⚠ Missing information. Please try again.")
                .with_events(clear_all(&checkup::CHECKUP_SLOTS));
        };

        let temperature = match checkup::validate_temperature(&temp_raw) {
            Ok(t) => t,
            Err(e) => {
                return DispatchResponse::message(e.prompt)
                    .with_events(vec![SlotEvent::clear("temperature")]);
            }
        };
        let mood = match checkup::validate_mood(&mood_raw) {
            Ok(m) => m,
            Err(e) => {
                return DispatchResponse::message(e.prompt)
                    .with_events(vec![SlotEvent::clear("mood_level")]);
            }
        };
        let pain = match checkup::validate_pain_score(&pain_raw) {
            Ok(p) => p,
            Err(e) => {
                return DispatchResponse::message(e.prompt)
                    .with_events(vec![SlotEvent::clear("pain_score")]);
            }
        };
        let symptom = match checkup::validate_symptom_name(&symptom_raw) {
            Ok(s) => s,
            Err(e) => {
                return DispatchResponse::message(e.prompt)
                    .with_events(vec![SlotEvent::clear("symptom_name")]);
            }
        };

        DispatchResponse::message(checkup::render_summary(temperature, &mood, pain, &symptom))
            .with_events(clear_all(&checkup::CHECKUP_SLOTS))
    }
}

/// Per-country statistics answer with the national resources block appended.
fn with_government_resources(stats: String) -> String {
    format!("{stats}\n\n{}", advice::GOVERNMENT_RESOURCES)
}

/// Validate one form field on assignment, as a form-filling dialogue engine
/// does between turns. Valid input comes back parsed as a `Set` event;
/// invalid input yields the corrective prompt plus a `Clear` so the field is
/// re-collected. Slot names are unique across the BMI and check-up forms.
pub fn validate_slot(name: &str, raw: &str) -> DispatchResponse {
    let outcome: Result<SlotValue, SlotError> = match name {
        "weight" => bmi::validate_weight(raw).map(SlotValue::Number),
        "height" => bmi::validate_height(raw).map(SlotValue::Number),
        "age" => bmi::validate_age(raw).map(SlotValue::Number),
        "gender" => bmi::validate_gender(raw).map(|g| SlotValue::Text(g.to_string())),
        "temperature" => checkup::validate_temperature(raw).map(SlotValue::Number),
        "mood_level" => checkup::validate_mood(raw).map(SlotValue::Text),
        "pain_score" => checkup::validate_pain_score(raw).map(|p| SlotValue::Number(p.into())),
        "symptom_name" => checkup::validate_symptom_name(raw).map(SlotValue::Text),
        _ => {
            warn!(slot = name, "validation requested for unknown slot");
            return DispatchResponse::default();
        }
    };

    match outcome {
        Ok(value) => DispatchResponse::default().with_events(vec![SlotEvent::set(name, value)]),
        Err(e) => {
            DispatchResponse::message(e.prompt).with_events(vec![SlotEvent::clear(name)])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_slot_assignment_sets_parsed_value() {
        let response = validate_slot("weight", "70kg");
        assert!(response.messages.is_empty());
        assert_eq!(
            response.events,
            vec![SlotEvent::set("weight", SlotValue::Number(70.0))]
        );

        let response = validate_slot("gender", "I am a woman");
        assert_eq!(
            response.events,
            vec![SlotEvent::set("gender", SlotValue::Text("Female".to_string()))]
        );
    }

    #[test]
    fn invalid_slot_assignment_prompts_and_clears() {
        let response = validate_slot("pain_score", "agony");
        assert_eq!(response.messages.len(), 1);
        assert_eq!(response.events, vec![SlotEvent::clear("pain_score")]);
    }

    #[test]
    fn unknown_slot_name_is_a_no_op() {
        let response = validate_slot("favorite_color", "blue");
        assert!(response.messages.is_empty());
        assert!(response.events.is_empty());
    }

    #[test]
    fn country_stats_carry_government_resources() {
        let text = with_government_resources("📊 stats body".to_string());
        assert!(text.starts_with("📊 stats body"));
        assert!(text.contains("Women Helpline: 1091"));
        assert!(text.contains("Child Helpline: 1098"));
        assert!(text.contains("pmjay.gov.in"));
    }

    #[test]
    fn intent_names_round_trip() {
        for intent in [
            Intent::AnswerHealthQuestion,
            Intent::SymptomCheck,
            Intent::RespondSymptom,
            Intent::CalculateBmi,
            Intent::VaccinationSchedule,
            Intent::FetchStats,
            Intent::VaccinationData,
            Intent::MedicationInfo,
            Intent::SuggestRemedy,
            Intent::PreventiveHealthcare,
            Intent::OutbreakAlerts,
            Intent::HealthCheckup,
        ] {
            assert_eq!(Intent::from_name(&intent.to_string()), Some(intent));
        }
        assert_eq!(Intent::from_name("set_language"), None);
    }
}
