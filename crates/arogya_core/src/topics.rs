//! Canonical topic classifier.
//!
//! One classification per turn: every path that used to re-detect "covid" or
//! quick topics in free text consumes this result instead of keeping its own
//! keyword table.

/// What kind of lookup a health question needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicClass {
    /// COVID-related: the live statistics endpoint applies.
    Covid,
    /// One of the latency-free quick topics, answered without any network call.
    Quick(&'static str),
    /// Everything else: summary endpoint, then knowledge base.
    General,
}

const COVID_KEYWORDS: [&str; 2] = ["covid", "coronavirus"];

/// Topics answered straight from the quick table, bypassing the gateway.
pub const QUICK_TOPICS: [&str; 4] = ["water", "sleep", "exercise", "diet"];

/// Classify a lowercased utterance or topic key.
pub fn classify(text: &str) -> TopicClass {
    let lowered = text.to_lowercase();

    if COVID_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        return TopicClass::Covid;
    }

    for topic in QUICK_TOPICS {
        if lowered.contains(topic) {
            return TopicClass::Quick(topic);
        }
    }

    TopicClass::General
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covid_detected_anywhere() {
        assert_eq!(classify("covid cases today"), TopicClass::Covid);
        assert_eq!(classify("is CORONAVIRUS dangerous"), TopicClass::Covid);
    }

    #[test]
    fn quick_topics_bypass_network() {
        assert_eq!(classify("how much water should I drink"), TopicClass::Quick("water"));
        assert_eq!(classify("sleep"), TopicClass::Quick("sleep"));
    }

    #[test]
    fn everything_else_is_general() {
        assert_eq!(classify("dengue"), TopicClass::General);
        assert_eq!(classify("hepatitis b"), TopicClass::General);
    }
}
