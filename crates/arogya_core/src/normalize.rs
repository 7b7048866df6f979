//! Query normalizer - strips conversational scaffolding from free text.
//!
//! Turns "tell me about dengue symptoms" into the topic key "dengue" used by
//! the knowledge base and the external gateway. Pure and idempotent: filler
//! is stripped to a fixpoint, so normalizing an already-normalized key is a
//! no-op.

use once_cell::sync::Lazy;
use regex::Regex;

/// Keys shorter than this carry no usable topic.
const MIN_KEY_CHARS: usize = 3;

static LEADING_FILLER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(what is|tell me about|tell about|info about|information on|i have|about|info on)(\s+|$)")
        .expect("leading filler pattern is valid")
});

static TRAILING_FILLER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\s+|^)(info|information|symptoms|symptom|disease)$")
        .expect("trailing filler pattern is valid")
});

/// Normalize a raw utterance into a topic-lookup key.
///
/// Returns `None` when the residue is too short to name a topic; the caller
/// must then skip external lookup entirely.
pub fn normalize(raw: &str) -> Option<String> {
    let mut key = raw.trim().to_lowercase();

    // Strip filler to a fixpoint: "tell me about about flu" needs two passes.
    loop {
        let stripped = TRAILING_FILLER
            .replace(LEADING_FILLER.replace(&key, "").as_ref(), "")
            .into_owned();
        if stripped == key {
            break;
        }
        key = stripped;
    }

    let key = key.split_whitespace().collect::<Vec<_>>().join(" ");

    if key.chars().count() < MIN_KEY_CHARS {
        None
    } else {
        Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_leading_filler() {
        assert_eq!(normalize("What is dengue"), Some("dengue".to_string()));
        assert_eq!(normalize("tell me about malaria"), Some("malaria".to_string()));
        assert_eq!(normalize("i have typhoid"), Some("typhoid".to_string()));
    }

    #[test]
    fn strips_trailing_filler() {
        assert_eq!(normalize("dengue symptoms"), Some("dengue".to_string()));
        assert_eq!(normalize("hepatitis b info"), Some("hepatitis b".to_string()));
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(
            normalize("  tell me about   heart   disease "),
            Some("heart".to_string())
        );
    }

    #[test]
    fn rejects_short_residue() {
        assert_eq!(normalize("tb"), None);
        assert_eq!(normalize("what is"), None);
        assert_eq!(normalize(""), None);
    }

    #[test]
    fn idempotent() {
        for raw in [
            "What is dengue fever",
            "tell me about about diabetes",
            "info about hepatitis a symptoms",
            "flu",
        ] {
            if let Some(once) = normalize(raw) {
                assert_eq!(normalize(&once), Some(once.clone()), "input: {raw}");
            }
        }
    }
}
