//! Command handlers for arogyactl.
//!
//! Each handler builds one dispatch request, runs it, prints the rendered
//! messages, and reports slot events at debug level.

use anyhow::{Context, Result};
use tracing::debug;

use arogya_core::dispatch::{DispatchRequest, DispatchResponse, Dispatcher, Intent};
use arogya_core::slots::SlotValue;

fn dispatcher() -> Result<Dispatcher> {
    Dispatcher::with_defaults().context("failed to initialize the assistant core")
}

fn print_response(response: &DispatchResponse) -> Result<()> {
    for message in &response.messages {
        println!("{}", message);
    }
    if !response.events.is_empty() {
        let rendered = serde_json::to_string(&response.events)?;
        debug!(events = %rendered, "slot events");
    }
    Ok(())
}

fn run(request: DispatchRequest) -> Result<()> {
    let response = dispatcher()?.dispatch(&request);
    print_response(&response)
}

pub fn ask(query: &str) -> Result<()> {
    run(DispatchRequest::new(Intent::AnswerHealthQuestion, query))
}

pub fn symptoms(text: &str) -> Result<()> {
    run(DispatchRequest::new(Intent::SymptomCheck, text))
}

pub fn bmi(weight: &str, height: &str, age: &str, gender: &str) -> Result<()> {
    let request = DispatchRequest::new(Intent::CalculateBmi, "")
        .with_slot("weight", SlotValue::from(weight))
        .with_slot("height", SlotValue::from(height))
        .with_slot("age", SlotValue::from(age))
        .with_slot("gender", SlotValue::from(gender));
    run(request)
}

pub fn vaccines(audience: &str) -> Result<()> {
    run(DispatchRequest::new(Intent::VaccinationSchedule, audience))
}

pub fn stats(global: bool) -> Result<()> {
    let text = if global { "global" } else { "" };
    run(DispatchRequest::new(Intent::FetchStats, text))
}

pub fn coverage() -> Result<()> {
    run(DispatchRequest::new(Intent::VaccinationData, ""))
}

pub fn checkup(temperature: &str, mood: &str, pain: &str, symptom: &str) -> Result<()> {
    let request = DispatchRequest::new(Intent::HealthCheckup, "")
        .with_slot("temperature", SlotValue::from(temperature))
        .with_slot("mood_level", SlotValue::from(mood))
        .with_slot("pain_score", SlotValue::from(pain))
        .with_slot("symptom_name", SlotValue::from(symptom));
    run(request)
}

pub fn advice(symptom: &str) -> Result<()> {
    run(DispatchRequest::new(Intent::RespondSymptom, symptom))
}

pub fn remedy(symptom: &str) -> Result<()> {
    run(DispatchRequest::new(Intent::SuggestRemedy, symptom))
}

pub fn medication(name: &str) -> Result<()> {
    run(DispatchRequest::new(Intent::MedicationInfo, name))
}

pub fn prevention(topic: &str) -> Result<()> {
    run(DispatchRequest::new(Intent::PreventiveHealthcare, topic))
}

pub fn alerts(location: &str) -> Result<()> {
    let request = DispatchRequest::new(Intent::OutbreakAlerts, "")
        .with_slot("location", SlotValue::from(location));
    run(request)
}
