//! Vaccination schedules, selected by audience keywords.

const CHILD_SCHEDULE: &str = "💉 **Infant/Child Vaccination Schedule (Government of India):**\n\n\
**At Birth:**\n\
• BCG (Tuberculosis)\n\
• Hepatitis B (Birth dose)\n\
• OPV 0 (Polio)\n\n\
**6 Weeks:**\n\
• OPV 1, Pentavalent 1, PCV 1, Rotavirus 1\n\n\
**10 Weeks:**\n\
• OPV 2, Pentavalent 2, PCV 2, Rotavirus 2\n\n\
**14 Weeks:**\n\
• OPV 3, Pentavalent 3, PCV 3, Rotavirus 3, IPV 1\n\n\
**9-12 Months:**\n\
• Measles & Rubella (MR 1), PCV Booster, JE 1\n\n\
**16-24 Months:**\n\
• MR 2, JE 2, DPT Booster 1, OPV Booster\n\n\
**5-6 Years:**\n\
• DPT Booster 2\n\n\
**10 Years:**\n\
• Tetanus & adult Diphtheria (Td)\n\n\
**16 Years:**\n\
• Td\n\n\
📍 Visit nearest Government Health Center for FREE vaccination\n\
🏥 Call 1075 (National Immunization Helpline)";

const ADULT_SCHEDULE: &str = "💉 **Adult Vaccination Schedule:**\n\n\
**Annually:**\n\
• Flu vaccine (Seasonal Influenza)\n\n\
**Every 10 Years:**\n\
• Tetanus-Diphtheria (Td) booster\n\n\
**Age 50+:**\n\
• Pneumococcal vaccine\n\n\
**Age 60+:**\n\
• Pneumococcal booster\n\
• Zoster vaccine (Shingles)\n\n\
**For Women:**\n\
• HPV vaccine (up to age 26)\n\
• Td during each pregnancy\n\n\
**COVID-19:**\n\
• As per government guidelines\n\
• Booster doses as recommended\n\n\
📍 Available at Government hospitals and Primary Health Centers\n\
💰 Many vaccines available FREE under government schemes";

const COVID_SCHEDULE: &str = "💉 **COVID-19 Vaccination:**\n\n\
**Eligibility:** All adults 18+\n\n\
**Schedule:**\n\
• Dose 1: First dose\n\
• Dose 2: 12-16 weeks after Dose 1\n\
• Precaution Dose: 9 months after Dose 2\n\n\
**Vaccines Available:**\n\
• Covaxin\n\
• Covishield\n\
• Corbevax\n\
• Others as approved\n\n\
📱 Register on: CoWIN Portal or Aarogya Setu App\n\
📍 Visit nearest vaccination center\n\
🆓 FREE for all citizens\n\n\
⚠️ Get vaccinated to protect yourself and others!";

const AUDIENCE_PROMPT: &str = "💉 **Vaccination Information:**\n\n\
Which age group are you asking about?\n\
• Infant/Child vaccination\n\
• Adult vaccination\n\
• COVID-19 vaccination\n\n\
Reply with the category for detailed schedule.\n\n\
📞 For queries, call National Immunization Helpline: 1075";

const CHILD_KEYWORDS: [&str; 4] = ["infant", "baby", "newborn", "child"];
const ADULT_KEYWORDS: [&str; 4] = ["adult", "grown", "elder", "senior"];

/// Pick the schedule matching the audience mentioned in the text, or prompt
/// for the age group when none is.
pub fn schedule_for(text: &str) -> &'static str {
    let lowered = text.to_lowercase();

    if CHILD_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        CHILD_SCHEDULE
    } else if ADULT_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        ADULT_SCHEDULE
    } else if lowered.contains("covid") {
        COVID_SCHEDULE
    } else {
        AUDIENCE_PROMPT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audience_keywords_select_schedule() {
        assert!(schedule_for("vaccines for my baby").contains("At Birth"));
        assert!(schedule_for("adult vaccination").contains("Every 10 Years"));
        assert!(schedule_for("covid vaccine schedule").contains("CoWIN"));
    }

    #[test]
    fn child_checked_before_covid() {
        // "covid vaccine for my child" is about the child schedule.
        assert!(schedule_for("covid vaccine for my child").contains("At Birth"));
    }

    #[test]
    fn unknown_audience_prompts() {
        assert!(schedule_for("vaccination").contains("Which age group"));
    }
}
