//! Bot response text for every branch of the conversation.

use rand::seq::SliceRandom;

use super::record::{Field, VisitorRecord};

/// Redirects used when the visitor digresses during the greeting. One is
/// picked at random; any choice keeps the conversation moving.
const OFF_TOPIC_REDIRECTS: [&str; 3] = [
    "That's interesting! But let's focus on getting your details for the event. How are you today?",
    "I appreciate your question! However, I'm here to help collect your information for our event. How are you feeling today?",
    "Great question! Let's get back to our registration process. How are you doing?",
];

pub fn off_topic_redirect() -> &'static str {
    OFF_TOPIC_REDIRECTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(OFF_TOPIC_REDIRECTS[0])
}

pub fn how_are_you() -> &'static str {
    "Hello! How are you doing today?"
}

pub fn greeting_negative_mood() -> &'static str {
    "I'm sorry to hear that. I hope our event can brighten your day! Let's get you registered. What's your name?"
}

pub fn greeting_positive_mood() -> &'static str {
    "Wonderful! Let's get started. What's your name?"
}

/// "I heard <value>, is that correct?" for a freshly extracted value.
pub fn heard_value(field: Field, value: &str) -> String {
    match field {
        Field::Name => format!("I heard your name as {value}. Is that correct?"),
        Field::Company => format!("I heard your company as {value}. Is that correct?"),
        Field::Email => format!("I heard your email as {value}. Is that correct?"),
        Field::Phone => format!("I heard your phone number as {value}. Is that correct?"),
        Field::Country => format!("I heard {value}. Is that correct?"),
    }
}

/// Repeat of the yes/no question when the answer was neither.
pub fn confirm_reprompt(field: Field) -> String {
    match field {
        Field::Name => "I didn't understand. Is your name correct? Please say yes or no.".into(),
        Field::Company => "Is your company name correct? Please say yes or no.".into(),
        Field::Email => "Is your email address correct? Please say yes or no.".into(),
        Field::Phone => "Is your phone number correct? Please say yes or no.".into(),
        Field::Country => "Is your country correct? Please say yes or no.".into(),
    }
}

/// Re-entry prompt after the visitor rejected the heard value.
pub fn correction_prompt(field: Field) -> String {
    match field {
        Field::Name => {
            "No problem! Please tell me your correct name, or if you prefer, you can type it manually.".into()
        }
        Field::Company => {
            "Let me get that right. Which company do you work for? You can speak it or type it manually.".into()
        }
        Field::Email => {
            "Let me get your email right. Please speak it clearly like 'john at gmail dot com', or type it manually.".into()
        }
        Field::Phone => "No problem! Please provide your correct phone number.".into(),
        Field::Country => "Which country are you from?".into(),
    }
}

/// Prompt when extraction could not make sense of the input.
pub fn extraction_retry(field: Field) -> String {
    match field {
        Field::Name => {
            "I couldn't catch your name clearly. Could you please speak your name slowly, or type it manually?".into()
        }
        Field::Company => "Could you please tell me your company name clearly, or type it manually?".into(),
        Field::Email => {
            "I couldn't catch your email clearly. Please speak it like 'john at gmail dot com', or type it manually.".into()
        }
        Field::Phone => {
            "Please speak your phone number digit by digit, like 'nine eight seven six five four three two one'.".into()
        }
        Field::Country => "Could you please tell me your country name clearly?".into(),
    }
}

/// Prompt asking for `next` after the previous field was confirmed.
pub fn advance_prompt(next: Field, record: &VisitorRecord) -> String {
    match next {
        Field::Name => "Let's get started. What's your name?".into(),
        Field::Company => format!("Excellent! Which company do you work for, {}?", record.name),
        Field::Email => "Perfect! Now, what's your email address?".into(),
        Field::Phone => "Excellent! Now, what's your phone number?".into(),
        Field::Country => {
            "Great! Which country are you from? This helps me format your number correctly.".into()
        }
    }
}

/// The full restate-and-confirm summary before submission.
pub fn summary(record: &VisitorRecord) -> String {
    format!(
        "Perfect! Let me confirm your details: Name: {}, Company: {}, Email: {}, Phone: {}, Country: {}. Should I submit this information?",
        record.name, record.company, record.email, record.phone, record.country
    )
}

pub fn submit_reprompt() -> &'static str {
    "Should I submit your information? Please say yes to submit or no to start over."
}

pub fn thank_you() -> &'static str {
    "Fantastic! Your information has been successfully submitted. Thank you for visiting us at the event. We'll be in touch soon!"
}

pub fn restart() -> &'static str {
    "No problem! Let's start fresh. What's your name?"
}

/// Acknowledgement after a trusted manual entry, asking for the next field.
pub fn manual_next(next: Field) -> String {
    format!("Thank you! Now, what's your {next}?")
}

pub fn manual_invalid(field: Field) -> String {
    format!("Please enter a valid {field}.")
}

pub fn apology() -> &'static str {
    "I apologize, there was an error. Could you please repeat that?"
}

pub fn save_failed() -> &'static str {
    "I'm sorry, I couldn't save your information just now. Should I try submitting it again?"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_restates_all_five_values() {
        let record = VisitorRecord {
            name: "Ada Lovelace".into(),
            company: "Analytical Engines".into(),
            email: "ada@engines.dev".into(),
            phone: "+441234567890".into(),
            country: "Uk".into(),
        };
        let text = summary(&record);
        for value in [
            "Ada Lovelace",
            "Analytical Engines",
            "ada@engines.dev",
            "+441234567890",
            "Uk",
        ] {
            assert!(text.contains(value), "summary missing {value}: {text}");
        }
    }

    #[test]
    fn redirect_is_always_one_of_the_fixed_set() {
        for _ in 0..20 {
            assert!(OFF_TOPIC_REDIRECTS.contains(&off_topic_redirect()));
        }
    }
}
