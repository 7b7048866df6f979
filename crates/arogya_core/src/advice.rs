//! Keyword-keyed static responders: medications, remedies, preventive care,
//! and outbreak alerts. Tables are declaration-ordered so the first match
//! wins deterministically.

/// Over-the-counter medication notes. Deliberately tiny; anything else gets
/// the consult-a-doctor fallback.
const MEDICATIONS: [(&str, &str); 2] = [
    (
        "paracetamol",
        "💊 **Paracetamol:**\n\
         • Use: Pain relief, fever reduction\n\
         • Dosage: 500-1000mg every 4-6 hours\n\
         • Warning: Don't exceed 4000mg/day\n\
         • Take with food if stomach upset",
    ),
    (
        "ibuprofen",
        "💊 **Ibuprofen:**\n\
         • Use: Pain, fever, inflammation\n\
         • Dosage: 200-400mg every 4-6 hours\n\
         • Warning: Take with food, avoid if ulcers",
    ),
];

/// Home-remedy notes keyed by canonical symptom.
const REMEDIES: [(&str, &str); 3] = [
    ("fever", "Rest, drink fluids, take paracetamol. See doctor if > 102°F or lasts > 3 days."),
    ("cough", "Warm water with honey, steam inhalation, stay hydrated. See doctor if lasts > 2 weeks."),
    ("headache", "Rest in dark room, drink water, cold compress. Persistent headaches need doctor visit."),
];

const REMEDY_DEFAULT: &str = "Rest, stay hydrated, consult doctor if symptoms worsen.";

/// Surface phrasings for the single-symptom responder. Ordered so specific
/// body parts ("knee pain") are checked before broader ones ("leg pain",
/// "body pain"); first match wins.
static SYMPTOM_SURFACE: &[(&str, &[&str])] = &[
    ("knee pain", &["knee pain", "knees hurt", "knee hurting", "pain in knee", "my knee", "knee ache"]),
    ("leg pain", &["leg pain", "legs hurt", "leg hurting", "pain in leg", "my leg", "leg ache"]),
    ("joint pain", &["joint pain", "joints hurt", "joint ache"]),
    ("migraine", &["migraine"]),
    ("headache", &["headache", "head pain", "head ache"]),
    ("chest pain", &["chest pain", "chest ache"]),
    ("back pain", &["back pain", "back ache"]),
    ("stomach pain", &["stomach pain", "stomach ache", "belly pain"]),
    ("body pain", &["body pain", "body ache", "muscle pain"]),
    ("fever", &["fever", "temperature", "feverish"]),
    ("cough", &["cough", "coughing"]),
    ("cold", &["cold", "runny nose", "sneezing"]),
    ("sore throat", &["sore throat", "throat pain"]),
    ("diarrhea", &["diarrhea", "loose motion"]),
    ("vomiting", &["vomit", "vomiting", "nausea"]),
    ("breathlessness", &["breathless", "breathing problem"]),
];

/// Dedicated advisories for the symptoms that need more than the generic
/// rest-and-monitor text. Chest pain and breathlessness get direct emergency
/// instructions here, independent of the triage path.
const SYMPTOM_ADVICE: [(&str, &str); 8] = [
    (
        "knee pain",
        "🦵 **Knee Pain Relief:**\n\n\
         **Immediate Care:**\n\
         • R.I.C.E: Rest, Ice, Compression, Elevation\n\
         • Avoid putting weight on knee\n\
         • Apply ice pack (15-20 min, 3-4 times/day)\n\
         • Elevate leg when sitting/lying\n\n\
         **URGENT - See Doctor If:**\n\
         • Can't bear weight on knee\n\
         • Severe swelling or knee looks deformed\n\
         • Knee gives way or locks\n\
         • Popping sound with severe pain\n\
         • Fever with knee pain (infection)\n\n\
         🏥 Free orthopedic consultation at Government hospitals\n\
         📞 Helpline: 1075\n\
         🚨 Emergency: 102/108",
    ),
    (
        "leg pain",
        "🦵 **Leg Pain Relief:**\n\n\
         **Immediate Relief:**\n\
         • Rest and elevate legs above heart level\n\
         • Apply ice (first 48 hours) or heat (after 48 hours)\n\
         • Gentle massage\n\
         • Stay hydrated\n\n\
         **URGENT - See Doctor IMMEDIATELY If:**\n\
         • Sudden severe pain with swelling, warmth, redness\n\
         • After long flight or bed rest (possible DVT blood clot!)\n\
         • Leg feels numb or cold\n\
         • Can't put weight on leg\n\n\
         🚨 DVT (Deep Vein Thrombosis) is SERIOUS - Call 108!\n\n\
         🏥 Free consultation at PHC\n\
         📞 Helpline: 1075",
    ),
    (
        "fever",
        "🌡️ **Fever Management:**\n\
         Rest, drink fluids, take paracetamol.\n\
         See doctor if > 102°F or lasts > 3 days.\n\
         📞 Emergency: 102/108",
    ),
    (
        "headache",
        "🤕 **Headache Relief:**\n\
         Rest in dark room, drink water, cold compress.\n\
         See doctor if severe or persistent.\n\
         📞 Helpline: 1075",
    ),
    (
        "cough",
        "🤧 **Cough Relief:**\n\
         Warm water with honey, steam inhalation, stay hydrated.\n\
         See doctor if lasts > 2 weeks or blood in sputum.\n\
         📞 Helpline: 1075",
    ),
    (
        "stomach pain",
        "🤢 **Stomach Pain:**\n\
         Rest, avoid solid food temporarily, drink clear liquids.\n\
         URGENT if: severe pain, vomiting blood, black stools.\n\
         📞 Emergency: 102/108",
    ),
    (
        "chest pain",
        "🚨 **CHEST PAIN - EMERGENCY:**\n\
         Could be heart attack!\n\
         Call 108 IMMEDIATELY!\n\
         Don't drive yourself - wait for ambulance.\n\
         🚨 Every second counts!",
    ),
    (
        "breathlessness",
        "🚨 **BREATHLESSNESS - EMERGENCY:**\n\
         Difficulty breathing is serious!\n\
         Call 108 IMMEDIATELY!\n\
         Sit upright, stay calm.\n\
         🚨 Don't delay!",
    ),
];

/// Block of national health resources appended to government data responses.
pub const GOVERNMENT_RESOURCES: &str = "📱 **Government Health Resources:**\n\n\
    **Emergency Numbers:**\n\
    • National Health Helpline: 1075\n\
    • Ambulance: 102 / 108\n\
    • Women Helpline: 1091\n\
    • Child Helpline: 1098\n\n\
    **Useful Portals:**\n\
    • Ayushman Bharat: pmjay.gov.in\n\
    • CoWIN: cowin.gov.in\n\
    • Aarogya Setu App\n\
    • e-Sanjeevani Telemedicine\n\n\
    **Government Schemes:**\n\
    • Ayushman Bharat - PM-JAY\n\
    • Pradhan Mantri Surakshit Matritva Abhiyan\n\
    • Mission Indradhanush\n\
    • National Health Mission\n\n\
    📍 Find nearest Government Hospital/PHC:\n\
    Visit: nhp.gov.in";

fn title_words(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Advice for one symptom mentioned in free text.
///
/// Unlike the triage engine this never combines symptoms: the first surface
/// form that matches picks one advisory. Symptoms without a dedicated entry
/// get the generic rest-and-monitor text under their own heading.
pub fn symptom_advice(text: &str) -> String {
    let lowered = text.to_lowercase();
    let symptom = SYMPTOM_SURFACE
        .iter()
        .find(|(_, surface)| surface.iter().any(|kw| lowered.contains(kw)))
        .map(|(canonical, _)| *canonical)
        .unwrap_or("general");

    if let Some((_, advice)) = SYMPTOM_ADVICE.iter().find(|(name, _)| *name == symptom) {
        return (*advice).to_string();
    }

    format!(
        "🩺 **Health Concern: {}**\n\n\
         **General Advice:**\n\
         • Rest and monitor symptoms\n\
         • Stay hydrated\n\
         • Maintain hygiene\n\n\
         **Free Healthcare:**\n\
         • Visit nearest PHC\n\
         • Helpline: {}\n\
         • Emergency: {}",
        title_words(symptom),
        crate::HELPLINE,
        crate::EMERGENCY_NUMBERS,
    )
}

/// Medication information for a named drug, or the never-self-medicate
/// fallback.
pub fn medication_info(text: &str) -> String {
    let lowered = text.to_lowercase();

    for (name, info) in MEDICATIONS {
        if lowered.contains(name) {
            return format!("{info}\n\n⚠️ Always consult doctor before taking any medication!");
        }
    }

    format!(
        "💊 **Medication Information:**\n\n\
         For prescription medications, please consult:\n\
         • Your doctor\n\
         • Nearest PHC\n\
         • Call {}\n\n\
         ⚠️ Never self-medicate!",
        crate::HELPLINE,
    )
}

/// Remedy for a symptom slot, falling back to keyword detection in the text.
pub fn suggest_remedy(symptom_slot: Option<&str>, text: &str) -> Option<String> {
    let lowered = text.to_lowercase();
    let symptom = symptom_slot
        .map(|s| s.to_lowercase())
        .or_else(|| {
            REMEDIES
                .iter()
                .find(|(name, _)| lowered.contains(name))
                .map(|(name, _)| name.to_string())
        })?;

    let remedy = REMEDIES
        .iter()
        .find(|(name, _)| *name == symptom)
        .map(|(_, r)| *r)
        .unwrap_or(REMEDY_DEFAULT);

    Some(format!(
        "💊 **Remedy for {symptom}:**\n\n{remedy}\n\n\
         ⚠️ Consult doctor for persistent symptoms\n\
         📞 Helpline: {}",
        crate::HELPLINE,
    ))
}

/// Prevention advice for a disease mentioned in the text.
pub fn preventive_advice(text: &str) -> &'static str {
    let lowered = text.to_lowercase();

    if lowered.contains("diabetes") {
        return "🍎 **Prevent Diabetes:**\n\n\
                **Diet:**\n\
                • Reduce sugar and refined carbs\n\
                • Eat whole grains, vegetables, fruits\n\
                • Control portion sizes\n\n\
                **Lifestyle:**\n\
                • Exercise 30 minutes daily\n\
                • Maintain healthy weight\n\
                • Don't smoke\n\n\
                **Screening:**\n\
                • Blood sugar test after age 45\n\
                • Free screening at PHCs\n\n\
                📞 Helpline: 1075";
    }

    if lowered.contains("hypertension") || lowered.contains("blood pressure") {
        return "❤️ **Prevent High Blood Pressure:**\n\n\
                **Diet:**\n\
                • Reduce salt intake (< 5g/day)\n\
                • Eat potassium-rich foods\n\
                • DASH diet\n\n\
                **Lifestyle:**\n\
                • Regular exercise\n\
                • Maintain healthy weight\n\
                • Manage stress\n\
                • Don't smoke\n\n\
                **Monitoring:**\n\
                • Check BP regularly\n\
                • Free screening at Government hospitals\n\n\
                📞 Helpline: 1075";
    }

    "🏥 **General Preventive Healthcare:**\n\n\
     **Healthy Lifestyle:**\n\
     • Balanced diet\n\
     • Regular exercise (30 min/day)\n\
     • Adequate sleep (7-8 hours)\n\
     • No smoking/tobacco\n\
     • Limited alcohol\n\n\
     **Regular Check-ups:**\n\
     • Annual health screening\n\
     • Blood pressure monitoring\n\
     • Blood sugar testing\n\
     • Vaccinations\n\n\
     📞 National Health Helpline: 1075\n\
     🌐 Visit: mohfw.gov.in"
}

const NATIONAL_ALERTS: [&str; 4] = [
    "😷 COVID-19: Follow COVID-appropriate behavior",
    "🦟 Dengue & Chikungunya: Monsoon season alert",
    "🤒 Seasonal Flu: Get vaccinated annually",
    "🌊 Waterborne diseases: Boil water before drinking",
];

fn regional_alerts(region: &str) -> &'static [&'static str] {
    match region {
        "Maharashtra" => &[
            "🦟 Dengue: High alert during monsoon. Use mosquito nets.",
            "🦟 Malaria: Risk in rural areas. Take prophylaxis.",
            "🌊 Waterborne diseases: Ensure clean drinking water.",
            "🌡️ Heat stroke: Risk during summer. Stay hydrated.",
        ],
        "Odisha" => &[
            "🦟 Dengue: High alert during monsoon. Use mosquito nets.",
            "🦟 Malaria: Endemic in tribal areas. Take prophylaxis.",
            "🌊 Diarrheal diseases: Ensure clean drinking water.",
            "🌡️ Heat stroke: Risk during summer. Stay hydrated.",
        ],
        _ => &NATIONAL_ALERTS,
    }
}

/// Numbered outbreak alerts for a region, national list when unknown.
pub fn outbreak_alerts(region: &str) -> String {
    let alerts = regional_alerts(region);

    let mut body = String::new();
    for (i, alert) in alerts.iter().enumerate() {
        body.push_str(&format!("{}. {}\n", i + 1, alert));
    }

    format!(
        "🚨 **Health Alerts for {region}:**\n\n\
         {body}\n\
         **Prevention Tips:**\n\
         • Maintain hygiene\n\
         • Use mosquito repellent\n\
         • Drink clean water\n\
         • Get timely vaccinations\n\
         • Visit doctor if symptoms appear\n\n\
         📞 Report outbreaks: 104 (State Health Helpline)"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_medication_found() {
        let text = medication_info("can I take paracetamol for fever");
        assert!(text.contains("500-1000mg"));
        assert!(text.contains("Always consult doctor"));
    }

    #[test]
    fn unknown_medication_falls_back() {
        assert!(medication_info("aspirin dosage").contains("Never self-medicate"));
    }

    #[test]
    fn remedy_prefers_slot_over_text() {
        let text = suggest_remedy(Some("cough"), "I have fever").unwrap();
        assert!(text.contains("Remedy for cough"));
    }

    #[test]
    fn remedy_falls_back_to_keywords() {
        let text = suggest_remedy(None, "splitting headache").unwrap();
        assert!(text.contains("dark room"));
    }

    #[test]
    fn remedy_needs_some_symptom() {
        assert!(suggest_remedy(None, "I feel odd").is_none());
    }

    #[test]
    fn unlisted_slot_symptom_gets_default() {
        let text = suggest_remedy(Some("rash"), "").unwrap();
        assert!(text.contains(REMEDY_DEFAULT));
    }

    #[test]
    fn preventive_advice_branches() {
        assert!(preventive_advice("how to prevent diabetes").contains("Blood sugar test"));
        assert!(preventive_advice("avoid high blood pressure").contains("DASH"));
        assert!(preventive_advice("stay healthy").contains("General Preventive"));
    }

    #[test]
    fn symptom_advice_picks_specific_entry() {
        assert!(symptom_advice("my knees hurt when climbing stairs").contains("R.I.C.E"));
        assert!(symptom_advice("leg ache after the flight").contains("DVT"));
        assert!(symptom_advice("stomach ache since lunch").contains("clear liquids"));
    }

    #[test]
    fn chest_pain_and_breathlessness_get_emergency_advice() {
        let chest = symptom_advice("sharp chest pain");
        assert!(chest.contains("EMERGENCY"));
        assert!(chest.contains("Call 108"));

        let breath = symptom_advice("breathing problem at night");
        assert!(breath.contains("EMERGENCY"));
    }

    #[test]
    fn knee_checked_before_leg() {
        // "pain in knee" also contains no leg keyword, but "my leg and my
        // knee" must resolve to the knee entry declared first.
        assert!(symptom_advice("my knee and my leg").contains("Knee Pain Relief"));
    }

    #[test]
    fn undedicated_symptom_gets_general_advice_with_heading() {
        let text = symptom_advice("sneezing a lot");
        assert!(text.contains("Health Concern: Cold"));
        assert!(text.contains("Rest and monitor"));

        let unknown = symptom_advice("I feel off today");
        assert!(unknown.contains("Health Concern: General"));
    }

    #[test]
    fn government_resources_list_helplines_and_portals() {
        assert!(GOVERNMENT_RESOURCES.contains("1091"));
        assert!(GOVERNMENT_RESOURCES.contains("1098"));
        assert!(GOVERNMENT_RESOURCES.contains("pmjay.gov.in"));
        assert!(GOVERNMENT_RESOURCES.contains("e-Sanjeevani"));
    }

    #[test]
    fn outbreak_alerts_regional_and_national() {
        assert!(outbreak_alerts("Odisha").contains("tribal areas"));
        let national = outbreak_alerts("Kerala");
        assert!(national.contains("Health Alerts for Kerala"));
        assert!(national.contains("Seasonal Flu"));
    }
}
