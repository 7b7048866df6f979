//! Symptom extractor and triage heuristic.
//!
//! Extraction is a case-insensitive substring scan over a fixed surface-form
//! table; several symptoms may be detected in one utterance. Triage compares
//! the detected set against condition rules by intersection cardinality, so a
//! user need not report every symptom in a rule. Heuristic only - every
//! rendered report carries the not-a-diagnosis disclaimer.

use std::collections::BTreeSet;

use tracing::debug;

/// Surface phrasings for one canonical symptom.
struct SymptomKeywords {
    canonical: &'static str,
    surface: &'static [&'static str],
}

static SYMPTOM_KEYWORDS: &[SymptomKeywords] = &[
    SymptomKeywords { canonical: "fever", surface: &["fever", "temperature", "feverish"] },
    SymptomKeywords { canonical: "cough", surface: &["cough", "coughing"] },
    SymptomKeywords { canonical: "headache", surface: &["headache", "head pain", "migraine"] },
    SymptomKeywords { canonical: "body ache", surface: &["body ache", "body pain", "muscle pain"] },
    SymptomKeywords { canonical: "fatigue", surface: &["tired", "fatigue", "weakness", "weak"] },
    SymptomKeywords { canonical: "sore throat", surface: &["sore throat", "throat pain"] },
    SymptomKeywords { canonical: "nausea", surface: &["nausea", "vomiting", "vomit"] },
    SymptomKeywords {
        canonical: "breathlessness",
        surface: &["breathless", "breathing problem", "shortness of breath"],
    },
    SymptomKeywords { canonical: "chest pain", surface: &["chest pain"] },
    SymptomKeywords {
        canonical: "stomach pain",
        surface: &["stomach pain", "stomach ache", "abdominal pain"],
    },
    SymptomKeywords { canonical: "diarrhea", surface: &["diarrhea", "loose motion"] },
    SymptomKeywords { canonical: "rash", surface: &["rash", "skin rash"] },
    SymptomKeywords { canonical: "leg pain", surface: &["leg pain", "leg hurt"] },
    SymptomKeywords { canonical: "joint pain", surface: &["joint pain", "knee pain"] },
];

/// Symptoms that escalate straight to the emergency directive.
pub const EMERGENCY_SYMPTOMS: [&str; 2] = ["breathlessness", "chest pain"];

const EMERGENCY_DIRECTIVE: &str =
    "🔴 **EMERGENCY** - Seek immediate medical attention! Call 108";

const GENERIC_HYPOTHESIS: &str =
    "🟢 **General illness** - Monitor symptoms and consult doctor if worsens";

/// A triage heuristic: required symptom set, minimum overlap, hypothesis text.
pub struct ConditionRule {
    pub name: &'static str,
    pub required: &'static [&'static str],
    pub threshold: usize,
    pub hypothesis: &'static str,
}

/// Non-emergency rules in declaration (output) order.
static CONDITION_RULES: &[ConditionRule] = &[
    ConditionRule {
        name: "Flu/Influenza",
        required: &["fever", "cough", "body ache", "fatigue"],
        threshold: 2,
        hypothesis: "🟡 **Flu/Influenza** - Rest, hydrate, monitor temperature",
    },
    ConditionRule {
        name: "Possible COVID-19",
        required: &["fever", "cough", "breathlessness", "fatigue"],
        threshold: 2,
        hypothesis: "🟠 **Possible COVID-19** - Get tested immediately! Isolate yourself.",
    },
    ConditionRule {
        name: "Common Cold",
        required: &["sore throat", "cough", "headache"],
        threshold: 2,
        hypothesis: "🟢 **Common Cold** - Rest, warm fluids, steam inhalation",
    },
    ConditionRule {
        name: "Possible Dengue",
        required: &["fever", "headache", "body ache", "rash"],
        threshold: 3,
        hypothesis: "🔴 **Possible Dengue** - See doctor immediately! Get tested.",
    },
    ConditionRule {
        name: "Gastroenteritis",
        required: &["stomach pain", "nausea", "diarrhea"],
        threshold: 2,
        hypothesis: "🟡 **Gastroenteritis** - Stay hydrated (ORS), avoid solid food temporarily",
    },
];

/// Detect every canonical symptom mentioned in the text.
pub fn extract_symptoms(text: &str) -> BTreeSet<&'static str> {
    let lowered = text.to_lowercase();
    let detected: BTreeSet<&'static str> = SYMPTOM_KEYWORDS
        .iter()
        .filter(|entry| entry.surface.iter().any(|kw| lowered.contains(kw)))
        .map(|entry| entry.canonical)
        .collect();
    debug!(?detected, "symptom extraction");
    detected
}

/// Map a detected symptom set to ordered condition hypotheses.
///
/// Emergency directive first when breathlessness or chest pain is present,
/// then matched rules in declaration order; a single generic hypothesis when
/// nothing fires.
pub fn triage(detected: &BTreeSet<&str>) -> Vec<String> {
    let mut hypotheses: Vec<String> = CONDITION_RULES
        .iter()
        .filter(|rule| {
            let overlap = rule.required.iter().filter(|s| detected.contains(*s)).count();
            overlap >= rule.threshold
        })
        .map(|rule| rule.hypothesis.to_string())
        .collect();

    if EMERGENCY_SYMPTOMS.iter().any(|s| detected.contains(s)) {
        hypotheses.insert(0, EMERGENCY_DIRECTIVE.to_string());
    }

    if hypotheses.is_empty() {
        hypotheses.push(GENERIC_HYPOTHESIS.to_string());
    }

    hypotheses
}

/// Render the full triage report with disclaimer and helplines.
pub fn render_report(detected: &BTreeSet<&str>, hypotheses: &[String]) -> String {
    let symptom_list = if detected.is_empty() {
        "none clearly recognized".to_string()
    } else {
        detected.iter().copied().collect::<Vec<_>>().join(", ")
    };

    format!(
        "🩺 **Symptom Analysis:**\n\n\
         Symptoms detected: {symptom_list}\n\n\
         **Possible Conditions:**\n{}\n\n\
         ⚠️ **Disclaimer:** This is NOT a diagnosis. Consult a doctor.\n\
         📞 Helpline: {} | Emergency: {}",
        hypotheses.join("\n\n"),
        crate::HELPLINE,
        crate::EMERGENCY_NUMBERS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(symptoms: &[&'static str]) -> BTreeSet<&'static str> {
        symptoms.iter().copied().collect()
    }

    #[test]
    fn extracts_multiple_symptoms() {
        let detected = extract_symptoms("I have a fever, bad cough and my body aches");
        assert!(detected.contains("fever"));
        assert!(detected.contains("cough"));
        assert!(detected.contains("body ache"));
    }

    #[test]
    fn surface_forms_map_to_canonical() {
        assert!(extract_symptoms("I feel feverish").contains("fever"));
        assert!(extract_symptoms("shortness of breath").contains("breathlessness"));
        assert!(extract_symptoms("loose motion since morning").contains("diarrhea"));
    }

    #[test]
    fn flu_fires_dengue_does_not() {
        // {fever, cough, body ache}: flu overlap 3 >= 2, dengue overlap 2 < 3.
        let hypotheses = triage(&set(&["fever", "cough", "body ache"]));
        assert!(hypotheses.iter().any(|h| h.contains("Flu/Influenza")));
        assert!(!hypotheses.iter().any(|h| h.contains("Dengue")));
    }

    #[test]
    fn dengue_fires_at_threshold() {
        let hypotheses = triage(&set(&["fever", "headache", "rash"]));
        assert!(hypotheses.iter().any(|h| h.contains("Dengue")));
    }

    #[test]
    fn emergency_always_first() {
        for symptoms in [
            set(&["breathlessness"]),
            set(&["chest pain"]),
            set(&["fever", "cough", "breathlessness"]),
        ] {
            let hypotheses = triage(&symptoms);
            assert!(hypotheses[0].contains("EMERGENCY"), "symptoms: {symptoms:?}");
        }
    }

    #[test]
    fn no_match_yields_generic() {
        let hypotheses = triage(&set(&["rash"]));
        assert_eq!(hypotheses.len(), 1);
        assert!(hypotheses[0].contains("General illness"));
    }

    #[test]
    fn matched_rules_keep_declaration_order() {
        // fever+cough+fatigue fires flu then covid; order must be stable.
        let hypotheses = triage(&set(&["fever", "cough", "fatigue"]));
        let flu = hypotheses.iter().position(|h| h.contains("Flu")).unwrap();
        let covid = hypotheses.iter().position(|h| h.contains("COVID")).unwrap();
        assert!(flu < covid);
    }

    #[test]
    fn report_carries_disclaimer() {
        let detected = set(&["fever"]);
        let report = render_report(&detected, &triage(&detected));
        assert!(report.contains("NOT a diagnosis"));
        assert!(report.contains("1075"));
    }
}
