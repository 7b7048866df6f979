//! Health check-up form: per-field validation and the submission summary.
//!
//! Same recovery contract as the BMI pipeline - a bad field yields a
//! corrective prompt and is re-collected, and all four slots are cleared
//! after the summary regardless of content.

use crate::slots::SlotError;

/// Accepted body temperature range in °F.
const TEMPERATURE_RANGE_F: (f64, f64) = (95.0, 107.0);
/// Reported when the user answers "normal".
const NORMAL_TEMPERATURE_F: f64 = 98.6;

const NORMAL_SYNONYMS: [&str; 4] = ["normal", "fine", "ok", "good"];
const NO_PAIN_SYNONYMS: [&str; 4] = ["no", "none", "zero", "no pain"];
const MOOD_VOCABULARY: [&str; 9] = [
    "happy", "neutral", "sad", "anxious", "stressed", "good", "bad", "ok", "fine",
];

/// Slot names of the check-up form, cleared together after submission.
pub const CHECKUP_SLOTS: [&str; 4] = ["temperature", "mood_level", "pain_score", "symptom_name"];

/// Validate a temperature reading; "normal" and friends map to 98.6°F.
pub fn validate_temperature(raw: &str) -> Result<f64, SlotError> {
    let lowered = raw.trim().to_lowercase();

    if NORMAL_SYNONYMS.contains(&lowered.as_str()) {
        return Ok(NORMAL_TEMPERATURE_F);
    }

    let temp: f64 = lowered.parse().map_err(|_| {
        SlotError::new("Please provide valid temperature (e.g., 98.6 or 'normal').")
    })?;

    if (TEMPERATURE_RANGE_F.0..=TEMPERATURE_RANGE_F.1).contains(&temp) {
        Ok(temp)
    } else {
        Err(SlotError::new("Temperature should be between 95°F and 107°F."))
    }
}

/// Validate a mood description against the fixed vocabulary.
pub fn validate_mood(raw: &str) -> Result<String, SlotError> {
    let lowered = raw.trim().to_lowercase();

    if MOOD_VOCABULARY.iter().any(|mood| lowered.contains(mood)) {
        Ok(raw.trim().to_string())
    } else {
        Err(SlotError::new(
            "Please describe your mood (happy, sad, anxious, neutral).",
        ))
    }
}

/// Validate a 0-10 pain score; "no pain" synonyms map to 0.
pub fn validate_pain_score(raw: &str) -> Result<u8, SlotError> {
    let lowered = raw.trim().to_lowercase();

    if NO_PAIN_SYNONYMS.contains(&lowered.as_str()) {
        return Ok(0);
    }

    let score: i64 = lowered
        .parse()
        .map_err(|_| SlotError::new("Please provide number 0-10."))?;

    if (0..=10).contains(&score) {
        Ok(score as u8)
    } else {
        Err(SlotError::new("Pain score should be 0-10."))
    }
}

/// Validate a free-text symptom description.
pub fn validate_symptom_name(raw: &str) -> Result<String, SlotError> {
    let trimmed = raw.trim();
    if trimmed.chars().count() > 2 {
        Ok(trimmed.to_string())
    } else {
        Err(SlotError::new(
            "Please describe symptoms (headache, fever, cough).",
        ))
    }
}

/// Render the check-up summary with rule-based recommendations.
pub fn render_summary(temperature: f64, mood: &str, pain: u8, symptom: &str) -> String {
    let mut recommendations: Vec<&str> = Vec::new();

    // High fever first so it is not shadowed by the milder rule.
    if temperature >= 103.0 {
        recommendations.push("🚨 HIGH FEVER! Seek immediate medical attention!");
    } else if temperature > 100.4 {
        recommendations.push("🔥 Fever detected. Rest, hydrate, consult doctor if persists.");
    }

    if pain >= 7 {
        recommendations.push("⚠️ High pain level. Seek medical attention.");
    } else if pain >= 4 {
        recommendations.push("💊 Moderate pain. Rest and consider pain relief.");
    }

    let mood_lowered = mood.to_lowercase();
    if ["sad", "anxious", "stressed"].iter().any(|m| mood_lowered.contains(m)) {
        recommendations.push("🧠 Mental health matters. Consider relaxation or counseling.");
    }

    if recommendations.is_empty() {
        recommendations.push("✅ Health seems stable. Maintain healthy habits!");
    }

    let advice = recommendations
        .iter()
        .map(|r| format!("• {r}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "📊 **Health Check-up Summary:**\n\n\
         🌡️ Temperature: {temperature}°F\n\
         😊 Mood: {mood}\n\
         💢 Pain: {pain}/10\n\
         🩺 Symptoms: {symptom}\n\n\
         **Recommendations:**\n{advice}\n\n\
         ⚠️ For serious concerns, visit nearest PHC or call 104/{}",
        crate::HELPLINE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn normal_synonyms_map_to_baseline() {
        assert_relative_eq!(validate_temperature("normal").unwrap(), 98.6);
        assert_relative_eq!(validate_temperature("OK").unwrap(), 98.6);
    }

    #[test]
    fn temperature_range_checked() {
        assert_relative_eq!(validate_temperature("101.3").unwrap(), 101.3);
        assert!(validate_temperature("94").is_err());
        assert!(validate_temperature("108").is_err());
        assert!(validate_temperature("hot").is_err());
    }

    #[test]
    fn pain_synonyms_and_range() {
        assert_eq!(validate_pain_score("no pain").unwrap(), 0);
        assert_eq!(validate_pain_score("7").unwrap(), 7);
        assert!(validate_pain_score("11").is_err());
        assert!(validate_pain_score("agony").is_err());
    }

    #[test]
    fn mood_vocabulary_enforced() {
        assert_eq!(validate_mood("quite anxious").unwrap(), "quite anxious");
        assert!(validate_mood("purple").is_err());
    }

    #[test]
    fn symptom_name_needs_three_chars() {
        assert!(validate_symptom_name("headache").is_ok());
        assert!(validate_symptom_name("ow").is_err());
    }

    #[test]
    fn high_fever_not_shadowed() {
        let summary = render_summary(104.0, "fine", 0, "fever");
        assert!(summary.contains("HIGH FEVER"));
        assert!(!summary.contains("Fever detected"));
    }

    #[test]
    fn stable_when_nothing_fires() {
        let summary = render_summary(98.6, "happy", 1, "none");
        assert!(summary.contains("Health seems stable"));
    }

    #[test]
    fn mood_and_pain_rules_combine() {
        let summary = render_summary(98.6, "stressed", 8, "back pain");
        assert!(summary.contains("High pain level"));
        assert!(summary.contains("Mental health matters"));
    }
}
