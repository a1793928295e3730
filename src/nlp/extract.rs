//! Field extractors — raw (often speech-transcribed) text in, normalized
//! value out, or `None` when the input can't be read as that field.
//!
//! The extractors are intentionally pattern-based: ordered substitution
//! tables and keyword stripping, no statistical inference. Known bias: names
//! are Latin-letter only and phones digits-only; widening that is a product
//! decision, not handled here.

use std::sync::LazyLock;

use regex::Regex;

use crate::dialog::record::Field;

/// Run the extractor for `field` over `text`.
pub fn extract_field(field: Field, text: &str) -> Option<String> {
    match field {
        Field::Name => extract_name(text),
        Field::Company => extract_company(text),
        Field::Email => extract_email(text),
        Field::Phone => extract_phone(text),
        Field::Country => extract_country(text),
    }
}

// ── Name ────────────────────────────────────────────────────────────────

/// Meta-phrases that mean the user echoed the bot's question back.
const NAME_SKIP_PHRASES: &[&str] = &[
    "what's your name",
    "your name is",
    "what is your name",
    "tell me your name",
    "can you tell me",
    "please tell me",
];

static NAME_FILLER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(my name is|i am|i'm|call me)\b").unwrap());

pub fn extract_name(text: &str) -> Option<String> {
    let lower = text.to_lowercase();
    if NAME_SKIP_PHRASES.iter().any(|p| lower.contains(p)) {
        return None;
    }

    let stripped = NAME_FILLER.replace_all(text.trim(), "");
    let name = stripped.trim();
    if name.len() < 2 || name.len() > 50 {
        return None;
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
    {
        return None;
    }
    Some(title_case(name))
}

// ── Company ─────────────────────────────────────────────────────────────

// Longer phrases come before the bare "company" alternative.
static COMPANY_FILLER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(i work at|my company is|company is|i'm from|i work for|company)\b").unwrap()
});

pub fn extract_company(text: &str) -> Option<String> {
    if text.trim().len() < 2 {
        return None;
    }
    let stripped = COMPANY_FILLER.replace_all(text.trim(), "");
    let company = stripped.trim();
    if company.len() < 2 || company.len() > 100 {
        return None;
    }
    Some(title_case(company))
}

// ── Email ───────────────────────────────────────────────────────────────

/// Spoken-form substitutions, applied in order against lowercased text.
/// Order matters: multi-word domain joins and "at the rate" must run before
/// the generic " at "/" dot " rules or those corrupt them halfway.
const EMAIL_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("gmail dot com", "gmail.com"),
    ("yahoo dot com", "yahoo.com"),
    ("hotmail dot com", "hotmail.com"),
    ("outlook dot com", "outlook.com"),
    ("dot com", ".com"),
    ("dot org", ".org"),
    ("dot net", ".net"),
    ("dot in", ".in"),
    (" at the rate ", "@"),
    (" at ", "@"),
    (" @ ", "@"),
    (" add ", "@"),
    (" dot ", "."),
    (" period ", "."),
    (" point ", "."),
    (" full stop ", "."),
    (" underscore ", "_"),
    (" dash ", "-"),
    (" hyphen ", "-"),
    (" g mail ", "gmail"),
    (" jemail ", "gmail"),
    (" ya who ", "yahoo"),
    (" yahu ", "yahoo"),
    (" hot mail ", "hotmail"),
    (" out look ", "outlook"),
];

static AT_SPACING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*@\s*").unwrap());
static DOT_SPACING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\.\s*").unwrap());

static EMAIL_STRICT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9][a-z0-9._-]*@[a-z0-9][a-z0-9.-]*\.[a-z]{2,}$").unwrap()
});
static EMAIL_LOOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z0-9][a-z0-9._-]*@[a-z0-9][a-z0-9.-]*\.[a-z]{2,}").unwrap());

pub fn extract_email(text: &str) -> Option<String> {
    if text.trim().len() < 5 {
        return None;
    }

    let mut text = text.to_lowercase().trim().to_string();
    for (spoken, actual) in EMAIL_SUBSTITUTIONS {
        text = text.replace(spoken, actual);
    }

    let text = AT_SPACING.replace_all(&text, "@");
    let text = DOT_SPACING.replace_all(&text, ".");
    let candidate: String = text.chars().filter(|c| !c.is_whitespace()).collect();

    if EMAIL_STRICT.is_match(&candidate) {
        return Some(candidate);
    }
    // Loose fallback: accept the first email-shaped token buried in noise.
    // Searches the space-preserved text so surrounding words stay out of
    // the domain.
    EMAIL_LOOSE.find(&text).map(|m| m.as_str().to_string())
}

// ── Phone ───────────────────────────────────────────────────────────────

static PLUS_PHRASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(plus|country\s+code)\s+").unwrap());
static REPEAT_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(double|triple)\s+(zero|one|two|three|four|five|six|seven|eight|nine|oh|o)\b")
        .unwrap()
});
static NUMBER_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(zero|one|two|three|four|five|six|seven|eight|nine|oh|o)\b").unwrap()
});

fn digit_for(word: &str) -> &'static str {
    match word {
        "zero" | "oh" | "o" => "0",
        "one" => "1",
        "two" => "2",
        "three" => "3",
        "four" => "4",
        "five" => "5",
        "six" => "6",
        "seven" => "7",
        "eight" => "8",
        "nine" => "9",
        _ => "",
    }
}

pub fn extract_phone(text: &str) -> Option<String> {
    if text.trim().len() < 3 {
        return None;
    }

    let text = text.to_lowercase();
    let text = PLUS_PHRASE.replace_all(&text, "+");
    let text = REPEAT_WORD.replace_all(&text, |caps: &regex::Captures<'_>| {
        let digit = digit_for(&caps[2]);
        match &caps[1] {
            "double" => digit.repeat(2),
            _ => digit.repeat(3),
        }
    });
    let text = NUMBER_WORD.replace_all(&text, |caps: &regex::Captures<'_>| {
        digit_for(&caps[1]).to_string()
    });

    // Keep digits and at most one leading "+".
    let mut phone = String::new();
    for c in text.chars() {
        if c.is_ascii_digit() {
            phone.push(c);
        } else if c == '+' && phone.is_empty() {
            phone.push(c);
        }
    }

    if is_valid_phone(&phone) { Some(phone) } else { None }
}

/// Standalone phone validation: digits only (optional "+" prefix),
/// 8–15 digits inclusive.
pub fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    (8..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}

// ── Country ─────────────────────────────────────────────────────────────

// "i am from" must precede the bare "from" alternative.
static COUNTRY_FILLER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(i am from|i'm from|country is|my country|from)\b").unwrap()
});

pub fn extract_country(text: &str) -> Option<String> {
    if text.trim().len() < 2 {
        return None;
    }
    let stripped = COUNTRY_FILLER.replace_all(text.trim(), "");
    let country = stripped.trim();
    if country.len() < 2 || country.len() > 50 {
        return None;
    }
    Some(title_case(country))
}

/// Country-name → calling-code table, keyed by common name variants.
const COUNTRY_CODES: &[(&str, &str)] = &[
    ("usa", "+1"),
    ("united states", "+1"),
    ("america", "+1"),
    ("us", "+1"),
    ("india", "+91"),
    ("uk", "+44"),
    ("united kingdom", "+44"),
    ("britain", "+44"),
    ("canada", "+1"),
    ("australia", "+61"),
    ("germany", "+49"),
    ("france", "+33"),
    ("japan", "+81"),
    ("china", "+86"),
    ("brazil", "+55"),
    ("russia", "+7"),
    ("italy", "+39"),
    ("spain", "+34"),
    ("netherlands", "+31"),
    ("sweden", "+46"),
    ("norway", "+47"),
    ("denmark", "+45"),
    ("finland", "+358"),
    ("poland", "+48"),
    ("turkey", "+90"),
    ("south africa", "+27"),
    ("egypt", "+20"),
    ("nigeria", "+234"),
    ("kenya", "+254"),
    ("ghana", "+233"),
    ("uae", "+971"),
    ("saudi arabia", "+966"),
    ("singapore", "+65"),
    ("malaysia", "+60"),
    ("thailand", "+66"),
    ("philippines", "+63"),
    ("indonesia", "+62"),
    ("vietnam", "+84"),
    ("south korea", "+82"),
    ("taiwan", "+886"),
];

/// Look up the calling code for a country name (case-insensitive).
pub fn country_calling_code(country: &str) -> Option<&'static str> {
    let key = country.trim().to_lowercase();
    COUNTRY_CODES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, code)| *code)
}

/// Prefix the calling code for `country` onto `phone`. A phone already
/// carrying an explicit "+" code, or a country not in the table, passes
/// through unchanged.
pub fn format_phone_with_country(phone: &str, country: &str) -> String {
    if phone.is_empty() || country.is_empty() || phone.starts_with('+') {
        return phone.to_string();
    }
    match country_calling_code(country) {
        Some(code) => format!("{code}{phone}"),
        None => phone.to_string(),
    }
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_strips_self_reference_and_title_cases() {
        assert_eq!(extract_name("my name is john smith"), Some("John Smith".into()));
        assert_eq!(extract_name("I'm alice"), Some("Alice".into()));
        assert_eq!(extract_name("call me BOB"), Some("Bob".into()));
    }

    #[test]
    fn name_rejects_echoed_question_and_junk() {
        assert_eq!(extract_name("what's your name"), None);
        assert_eq!(extract_name("please tell me your name"), None);
        assert_eq!(extract_name("x"), None);
        assert_eq!(extract_name("john123"), None);
        assert_eq!(extract_name(&"a".repeat(51)), None);
    }

    #[test]
    fn company_strips_fillers() {
        assert_eq!(extract_company("i work at Initech"), Some("Initech".into()));
        assert_eq!(
            extract_company("my company is acme widgets"),
            Some("Acme Widgets".into())
        );
        assert_eq!(extract_company("q"), None);
    }

    #[test]
    fn email_spoken_form_round_trip() {
        assert_eq!(
            extract_email("John DOT Smith AT gmail DOT com"),
            Some("john.smith@gmail.com".into())
        );
        assert_eq!(
            extract_email("jane at the rate outlook dot com"),
            Some("jane@outlook.com".into())
        );
        assert_eq!(
            extract_email("bob underscore jones at yahoo dot com"),
            Some("bob_jones@yahoo.com".into())
        );
    }

    #[test]
    fn email_loose_fallback_finds_embedded_address() {
        assert_eq!(
            extract_email("sure it's ada@engines.dev thanks"),
            Some("ada@engines.dev".into())
        );
    }

    #[test]
    fn email_rejects_non_addresses() {
        assert_eq!(extract_email("hello there"), None);
        assert_eq!(extract_email("a@b"), None);
        assert_eq!(extract_email("hi"), None);
    }

    #[test]
    fn phone_number_words_and_doubling() {
        let phone = extract_phone("double nine eight seven six five four three two one").unwrap();
        assert!(phone.len() >= 8 && phone.len() <= 15);
        assert!(phone.starts_with("99"));
        assert_eq!(phone, "9987654321");

        assert_eq!(
            extract_phone("triple five one two three four five"),
            Some("55512345".into())
        );
    }

    #[test]
    fn phone_plus_and_country_code_phrases() {
        assert_eq!(
            extract_phone("plus nine one nine eight seven six five four three two one"),
            Some("+91987654321".into())
        );
        assert_eq!(extract_phone("my number is 98765 43210"), Some("9876543210".into()));
    }

    #[test]
    fn phone_length_bounds() {
        assert_eq!(extract_phone("one two three"), None); // 3 digits
        assert_eq!(extract_phone(&"9".repeat(16)), None);
        assert!(extract_phone(&"9".repeat(15)).is_some());
    }

    #[test]
    fn phone_validation_standalone() {
        assert!(is_valid_phone("98765432"));
        assert!(is_valid_phone("+919876543210"));
        assert!(!is_valid_phone("1234567"));
        assert!(!is_valid_phone("98-76-54-32"));
        assert!(!is_valid_phone("+"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn country_strips_fillers() {
        assert_eq!(extract_country("i am from india"), Some("India".into()));
        assert_eq!(extract_country("I'm from the UK"), Some("The Uk".into()));
        assert_eq!(extract_country("z"), None);
    }

    #[test]
    fn calling_code_lookup_variants() {
        assert_eq!(country_calling_code("India"), Some("+91"));
        assert_eq!(country_calling_code("usa"), Some("+1"));
        assert_eq!(country_calling_code("UNITED STATES"), Some("+1"));
        assert_eq!(country_calling_code("atlantis"), None);
    }

    #[test]
    fn phone_formatting_with_country() {
        assert_eq!(format_phone_with_country("9876543210", "India"), "+919876543210");
        assert_eq!(format_phone_with_country("9876543210", "Atlantis"), "9876543210");
        assert_eq!(format_phone_with_country("+19876543210", "India"), "+19876543210");
        assert_eq!(format_phone_with_country("", "India"), "");
    }
}
