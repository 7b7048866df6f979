//! Static knowledge base: normalized topic keys to pre-authored advisory text.
//!
//! Entries are an ordered sequence, not a map. Several keys are
//! near-duplicates ("hepatitis a" vs "hepatitis"), and partial matching must
//! hit the more specific entry first, so declaration order in the TOML asset
//! is the tie-break. Loaded once, immutable afterwards, safe to share across
//! sessions.

use once_cell::sync::Lazy;
use serde::Deserialize;
use tracing::debug;

const KNOWLEDGE_TOML: &str = include_str!("../assets/knowledge.toml");

static EMBEDDED: Lazy<KnowledgeBase> = Lazy::new(|| {
    KnowledgeBase::from_toml(KNOWLEDGE_TOML).expect("embedded knowledge asset is well-formed")
});

/// One pre-authored topic entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TopicEntry {
    pub key: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
struct KnowledgeFile {
    topic: Vec<TopicEntry>,
}

/// Ordered, immutable knowledge base.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<TopicEntry>,
}

impl KnowledgeBase {
    /// The knowledge base compiled into the binary.
    pub fn embedded() -> &'static KnowledgeBase {
        &EMBEDDED
    }

    /// Parse a knowledge base from TOML, preserving declaration order.
    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        let file: KnowledgeFile = toml::from_str(raw)?;
        Ok(Self { entries: file.topic })
    }

    /// Look up advisory text for a normalized topic key.
    ///
    /// Exact key equality wins over partial matching; among partial matches
    /// (key contained in an entry key, or an entry key contained in the key)
    /// the first entry in declaration order wins.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        if let Some(entry) = self.entries.iter().find(|e| e.key == key) {
            debug!(topic = %entry.key, "knowledge base exact match");
            return Some(&entry.text);
        }

        let hit = self
            .entries
            .iter()
            .find(|e| key.contains(e.key.as_str()) || e.key.contains(key))?;
        debug!(topic = %hit.key, query = %key, "knowledge base partial match");
        Some(&hit.text)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }
}

/// Answer for a quick topic, bypassing any network lookup.
pub fn quick_answer(topic: &str) -> Option<&'static str> {
    match topic {
        "water" => Some(
            "💧 **Water Intake:** Adults should drink 8-10 glasses (2-3 liters) daily. \
             More if exercising or hot weather. 📞 1075",
        ),
        "sleep" => Some(
            "😴 **Sleep:** Adults need 7-9 hours. Tips: fixed schedule, dark room, \
             no screens before bed. 📞 1075",
        ),
        "exercise" => Some(
            "🏃 **Exercise:** 30 minutes moderate activity daily, 5 days/week. \
             Walking, jogging, yoga, cycling. 📞 1075",
        ),
        "diet" => Some(
            "🥗 **Healthy Diet:** Eat variety: fruits, vegetables, whole grains, lean \
             proteins. Limit sugar, salt, processed foods. 📞 1075",
        ),
        _ => None,
    }
}

/// Terminal fallback when no source has an answer. A defined outcome, not an
/// error state.
pub fn fallback_message() -> &'static str {
    "I don't have specific information about that condition.\n\n\
     **I can help with:**\n\
     • Common conditions (typhoid, cholera, malaria, dengue, jaundice)\n\
     • Chronic diseases (diabetes, hypertension, asthma, PCOD)\n\
     • Symptoms (fever, cough, pain)\n\
     • Preventive care\n\n\
     **For specific medical advice:**\n\
     📞 National Health Helpline: 1075\n\
     🏥 Visit nearest PHC/Government hospital"
}
