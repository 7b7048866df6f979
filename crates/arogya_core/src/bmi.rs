//! BMI pipeline: slot validation, computation, and the rendered summary.
//!
//! Validators accept raw text that may carry unit suffixes ("70kg",
//! "170 cm"), strip known tokens, parse, and range-check. Failures return a
//! corrective prompt for re-collection, never a fatal error. Computation runs
//! only once all four slots are valid; the caller clears them afterwards on
//! every path.

use std::fmt;

use crate::slots::SlotError;

/// Accepted weight range in kilograms, bounds inclusive.
const WEIGHT_RANGE_KG: (f64, f64) = (20.0, 300.0);
/// Accepted height range in centimeters, bounds inclusive.
const HEIGHT_RANGE_CM: (f64, f64) = (50.0, 250.0);
/// Heights in this band are taken as meters and converted to centimeters.
const METERS_BAND: (f64, f64) = (1.0, 2.5);
/// Accepted age range in years, bounds inclusive.
const AGE_RANGE_YEARS: (f64, f64) = (2.0, 120.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        };
        write!(f, "{}", s)
    }
}

/// Strip known unit tokens case-insensitively and trim.
fn strip_units(raw: &str, units: &[&str]) -> String {
    let mut value = raw.trim().to_lowercase();
    for unit in units {
        value = value.replace(unit, "");
    }
    value.trim().to_string()
}

/// Validate a weight in kilograms.
pub fn validate_weight(raw: &str) -> Result<f64, SlotError> {
    // Longer tokens first so "kgs" is not left as a dangling "s".
    let value = strip_units(raw, &["kilos", "kgs", "kg"]);

    let weight: f64 = value
        .parse()
        .map_err(|_| SlotError::new("⚠ Please enter weight as a number (e.g., 70 or 70.5)"))?;

    if (WEIGHT_RANGE_KG.0..=WEIGHT_RANGE_KG.1).contains(&weight) {
        Ok(weight)
    } else {
        Err(SlotError::new("⚠ Please enter a valid weight between 20-300 kg."))
    }
}

/// Validate a height, returning centimeters.
///
/// A parsed value in [1.0, 2.5] is reinterpreted as meters and converted
/// before the range check, so "1.7" and "170" both pass.
pub fn validate_height(raw: &str) -> Result<f64, SlotError> {
    let lowered = raw.trim().to_lowercase();

    if lowered.contains("feet") || lowered.contains("foot") || lowered.contains("ft") {
        return Err(SlotError::new(
            "Please enter height in centimeters (cm).\nExample: 170 cm",
        ));
    }

    let value = strip_units(&lowered, &["centimeters", "centimeter", "cm"]);

    let mut height: f64 = value.parse().map_err(|_| {
        SlotError::new("⚠ Please enter height as a number in centimeters (e.g., 170)")
    })?;

    if (METERS_BAND.0..=METERS_BAND.1).contains(&height) {
        height *= 100.0;
    }

    if (HEIGHT_RANGE_CM.0..=HEIGHT_RANGE_CM.1).contains(&height) {
        Ok(height)
    } else {
        Err(SlotError::new("⚠ Please enter a valid height between 50-250 cm."))
    }
}

/// Validate an age in years.
pub fn validate_age(raw: &str) -> Result<f64, SlotError> {
    let value = strip_units(raw, &["years", "year", "yrs", "yr"]);

    let age: f64 = value
        .parse()
        .map_err(|_| SlotError::new("⚠ Please enter age as a number (e.g., 25)"))?;

    if (AGE_RANGE_YEARS.0..=AGE_RANGE_YEARS.1).contains(&age) {
        Ok(age)
    } else {
        Err(SlotError::new("⚠ Please enter a valid age between 2-120 years."))
    }
}

/// Map free-text gender synonyms to one canonical value.
pub fn validate_gender(raw: &str) -> Result<Gender, SlotError> {
    let lowered = raw.trim().to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();

    // Single-letter synonyms must match a whole token; longer ones may appear
    // anywhere in the text.
    let matches = |synonyms: &[&str]| {
        synonyms.iter().any(|s| {
            if s.len() == 1 {
                tokens.contains(s)
            } else {
                lowered.contains(s)
            }
        })
    };

    // Female first: "female" contains "male" as a substring.
    if matches(&["female", "woman", "girl", "f"]) {
        Ok(Gender::Female)
    } else if matches(&["male", "man", "boy", "m"]) {
        Ok(Gender::Male)
    } else if matches(&["other", "transgender", "trans", "o"]) {
        Ok(Gender::Other)
    } else {
        Err(SlotError::new("⚠ Please specify: Male, Female, or Other"))
    }
}

/// Validated BMI inputs, all four fields present.
#[derive(Debug, Clone, Copy)]
pub struct BmiInput {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: f64,
    pub gender: Gender,
}

/// Computed BMI result.
#[derive(Debug, Clone)]
pub struct BmiReport {
    pub bmi: f64,
    pub category: &'static str,
    pub risk: &'static str,
    pub ideal_min_kg: f64,
    pub ideal_max_kg: f64,
    pub recommendation: String,
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Ideal weight range for a height, one-decimal rounded.
pub fn ideal_weight_range(height_m: f64) -> (f64, f64) {
    let min = 18.5 * height_m * height_m;
    let max = 24.9 * height_m * height_m;
    (round1(min), round1(max))
}

/// Category and risk tier. Under-18 uses a 5-tier scale; 18-and-over
/// subdivides obesity into classes I-III.
fn category_for(bmi: f64, age: f64) -> (&'static str, &'static str) {
    if age < 18.0 {
        return if bmi < 16.0 {
            ("Severely Underweight", "High - Malnutrition Risk")
        } else if bmi < 18.5 {
            ("Underweight", "Moderate - Nutritional Deficiency")
        } else if bmi < 25.0 {
            ("Normal (Healthy)", "Low - Good Health")
        } else if bmi < 30.0 {
            ("Overweight", "Moderate - Health Issues Possible")
        } else {
            ("Obese", "High - Serious Health Risks")
        };
    }

    if bmi < 16.0 {
        ("Severely Underweight", "High - Severe Malnutrition")
    } else if bmi < 18.5 {
        ("Underweight", "Moderate - Nutritional Deficiency")
    } else if bmi < 25.0 {
        ("Normal (Healthy Weight)", "Low - Optimal Health")
    } else if bmi < 30.0 {
        ("Overweight (Pre-Obese)", "Moderate - Increased Risk")
    } else if bmi < 35.0 {
        ("Obese Class I", "High - Significant Risk")
    } else if bmi < 40.0 {
        ("Obese Class II", "Very High - Severe Risk")
    } else {
        ("Obese Class III (Morbidly Obese)", "Extremely High - Critical")
    }
}

fn recommendation_for(bmi: f64, weight_kg: f64, height_m: f64) -> String {
    let (ideal_min, ideal_max) = ideal_weight_range(height_m);

    if bmi < 18.5 {
        let to_gain = round1(ideal_min - weight_kg);
        format!(
            "🎯 **Goal: Gain ~{to_gain} kg**\n\n\
             Diet: Increase calories, eat nutritious foods\n\
             Exercise: Strength training\n\
             📞 Free nutrition counseling at PHC"
        )
    } else if bmi < 25.0 {
        "✅ **Your weight is HEALTHY!**\n\n\
         Maintain by:\n\
         - Balanced diet\n\
         - Regular exercise (30 min/day)\n\
         - Stay hydrated\n\
         - Adequate sleep\n\n\
         Keep up the good work! 💪"
            .to_string()
    } else {
        let to_lose = round1(weight_kg - ideal_max);
        format!(
            "🎯 **Goal: Lose ~{to_lose} kg**\n\n\
             Diet: Reduce 500 calories/day\n\
             - Avoid fried, sugary foods\n\
             - Increase vegetables, protein\n\n\
             Exercise: 45-60 min daily walk\n\
             Weekly Target: Lose 0.5-1 kg\n\n\
             📞 Free weight management at wellness centers"
        )
    }
}

/// Compute BMI, category, risk tier, ideal range, and guidance.
pub fn compute(input: &BmiInput) -> BmiReport {
    let height_m = input.height_cm / 100.0;
    let bmi = input.weight_kg / (height_m * height_m);
    let (category, risk) = category_for(bmi, input.age_years);
    let (ideal_min_kg, ideal_max_kg) = ideal_weight_range(height_m);

    BmiReport {
        bmi: round1(bmi),
        category,
        risk,
        ideal_min_kg,
        ideal_max_kg,
        recommendation: recommendation_for(bmi, input.weight_kg, height_m),
    }
}

/// Render the user-facing summary for a computed report.
pub fn render_summary(input: &BmiInput, report: &BmiReport) -> String {
    let height_m = input.height_cm / 100.0;
    format!(
        "📊 **BMI Calculation Results**\n\n\
         👤 Your Details:\n\
         - Gender: {}\n\
         - Age: {} years\n\
         - Weight: {} kg\n\
         - Height: {} cm ({:.2} m)\n\n\
         📈 Your BMI: {}\n\n\
         Category: {}\n\
         ⚠ Health Risk: {}\n\n\
         💪 Ideal Weight Range:\n\
         {} - {} kg (for your height)\n\n\
         {}\n\n\
         📞 Free Healthcare:\n\
         🏥 Free BMI screening at all PHCs\n\
         💊 Free diet counseling at wellness centers\n\
         📞 National Health Helpline: {}\n\n\
         ⚠ Note: BMI is a screening tool. Consult doctor for complete health assessment.",
        input.gender,
        input.age_years as i64,
        input.weight_kg,
        input.height_cm,
        height_m,
        report.bmi,
        report.category,
        report.risk,
        report.ideal_min_kg,
        report.ideal_max_kg,
        report.recommendation,
        crate::HELPLINE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn weight_strips_units_and_checks_range() {
        assert_relative_eq!(validate_weight("70kg").unwrap(), 70.0);
        assert_relative_eq!(validate_weight(" 70.5 KGS ").unwrap(), 70.5);
        assert!(validate_weight("19.9").is_err());
        assert!(validate_weight("seventy").is_err());
    }

    #[test]
    fn weight_upper_bound_inclusive_at_300() {
        assert_relative_eq!(validate_weight("300").unwrap(), 300.0);
        assert!(validate_weight("300.1").is_err());
    }

    #[test]
    fn height_meters_band_converts() {
        assert_relative_eq!(validate_height("1.7").unwrap(), 170.0);
        assert_relative_eq!(validate_height("170").unwrap(), 170.0);
        assert_relative_eq!(validate_height("170cm").unwrap(), 170.0);
        assert_relative_eq!(validate_height("2.5").unwrap(), 250.0);
    }

    #[test]
    fn height_rejects_feet_with_prompt() {
        let err = validate_height("5 feet").unwrap_err();
        assert!(err.prompt.contains("centimeters"));
        assert!(validate_height("5ft 6in").is_err());
    }

    #[test]
    fn height_range_checked_after_conversion() {
        assert!(validate_height("0.9").is_err());
        assert!(validate_height("251").is_err());
        assert_relative_eq!(validate_height("50").unwrap(), 50.0);
    }

    #[test]
    fn age_strips_units_and_checks_range() {
        assert_relative_eq!(validate_age("25 years").unwrap(), 25.0);
        assert_relative_eq!(validate_age("3").unwrap(), 3.0);
        assert!(validate_age("1").is_err());
        assert!(validate_age("121").is_err());
    }

    #[test]
    fn gender_synonyms_map_canonically() {
        assert_eq!(validate_gender("female").unwrap(), Gender::Female);
        assert_eq!(validate_gender("I am a woman").unwrap(), Gender::Female);
        assert_eq!(validate_gender("M").unwrap(), Gender::Male);
        assert_eq!(validate_gender("boy").unwrap(), Gender::Male);
        assert_eq!(validate_gender("transgender").unwrap(), Gender::Other);
        assert!(validate_gender("unknown").is_err());
    }

    #[test]
    fn reference_computation() {
        // 70 kg at 170 cm: BMI 24.2, Normal, ideal [53.5, 72.0].
        let input = BmiInput {
            weight_kg: 70.0,
            height_cm: 170.0,
            age_years: 25.0,
            gender: Gender::Male,
        };
        let report = compute(&input);
        assert_relative_eq!(report.bmi, 24.2);
        assert_eq!(report.category, "Normal (Healthy Weight)");
        assert_relative_eq!(report.ideal_min_kg, 53.5);
        assert_relative_eq!(report.ideal_max_kg, 72.0);
    }

    #[test]
    fn age_bands_use_different_scales() {
        let adult = BmiInput {
            weight_kg: 95.0,
            height_cm: 170.0,
            age_years: 40.0,
            gender: Gender::Female,
        };
        // BMI ~32.9: Class I for adults.
        assert_eq!(compute(&adult).category, "Obese Class I");

        let teen = BmiInput { age_years: 15.0, ..adult };
        // Same BMI: plain "Obese" on the 5-tier under-18 scale.
        assert_eq!(compute(&teen).category, "Obese");
    }

    #[test]
    fn recommendation_branches() {
        let under = BmiInput {
            weight_kg: 45.0,
            height_cm: 175.0,
            age_years: 30.0,
            gender: Gender::Male,
        };
        assert!(compute(&under).recommendation.contains("Gain"));

        let normal = BmiInput { weight_kg: 70.0, height_cm: 170.0, ..under };
        assert!(compute(&normal).recommendation.contains("HEALTHY"));

        let over = BmiInput { weight_kg: 95.0, height_cm: 170.0, ..under };
        assert!(compute(&over).recommendation.contains("Lose"));
    }

    #[test]
    fn summary_mentions_screening_disclaimer() {
        let input = BmiInput {
            weight_kg: 70.0,
            height_cm: 170.0,
            age_years: 25.0,
            gender: Gender::Other,
        };
        let report = compute(&input);
        let summary = render_summary(&input, &report);
        assert!(summary.contains("screening tool"));
        assert!(summary.contains("24.2"));
    }
}
