//! Deterministic text understanding: field extractors and intent
//! classifiers. Pattern and keyword matching only — no statistical
//! inference.

pub mod extract;
pub mod intent;

pub use extract::{extract_field, format_phone_with_country, is_valid_phone};
pub use intent::{Intent, Mood, classify, greeting_mood, is_affirmative, is_negative, is_off_topic};
