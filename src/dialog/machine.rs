//! The dialogue state machine — pure turn advancement.
//!
//! Every handler is a pure function of `(user_input, record,
//! awaiting_confirmation)`; storage and synthesis live behind the
//! [`DialogService`](super::service::DialogService) seam. `advance` is total:
//! the match over [`ConversationState`] is exhaustive and no input text can
//! make it fail.

use crate::nlp::{extract, intent};

use super::prompts;
use super::record::{Field, VisitorRecord};
use super::state::ConversationState;
use super::turn::{TurnInput, TurnOutput};

/// Result of a pure turn advance.
#[derive(Debug, Clone)]
pub struct Advance {
    pub output: TurnOutput,
    /// Set only by an affirmative at final confirmation: the caller must
    /// hand `output.updated_record` to the record sink, exactly once.
    pub submit: bool,
}

impl Advance {
    fn stay(output: TurnOutput) -> Self {
        Self {
            output,
            submit: false,
        }
    }
}

/// Advance the conversation by one turn.
pub fn advance(input: &TurnInput) -> Advance {
    match input.state {
        ConversationState::Greeting => greet(input),
        ConversationState::CollectingName => collect(input, Field::Name),
        ConversationState::CollectingCompany => collect(input, Field::Company),
        ConversationState::CollectingEmail => collect(input, Field::Email),
        ConversationState::CollectingPhone => collect(input, Field::Phone),
        ConversationState::CollectingCountry => collect(input, Field::Country),
        ConversationState::FinalConfirmation => final_confirmation(input),
        // A finished session starts over like a fresh greeting.
        ConversationState::Finished => greet(input),
    }
}

fn greet(input: &TurnInput) -> Advance {
    let record = input.record.clone();

    if intent::is_off_topic(&input.user_input) {
        return Advance::stay(TurnOutput::new(
            prompts::off_topic_redirect().to_string(),
            ConversationState::Greeting,
            record,
            None,
            false,
        ));
    }

    let (response, state, next_field) = match intent::greeting_mood(&input.user_input) {
        intent::Mood::Negative => (
            prompts::greeting_negative_mood(),
            ConversationState::CollectingName,
            Some(Field::Name),
        ),
        intent::Mood::Positive => (
            prompts::greeting_positive_mood(),
            ConversationState::CollectingName,
            Some(Field::Name),
        ),
        intent::Mood::Neutral => (prompts::how_are_you(), ConversationState::Greeting, None),
    };

    Advance::stay(TurnOutput::new(
        response.to_string(),
        state,
        record,
        next_field,
        false,
    ))
}

/// Uniform collecting-state handler: confirm-or-extract for one field.
fn collect(input: &TurnInput, field: Field) -> Advance {
    let state = ConversationState::collecting(field);
    let mut record = input.record.clone();

    if input.awaiting_confirmation {
        return match intent::classify(&input.user_input) {
            intent::Intent::Affirmative => confirm_advance(record, field),
            intent::Intent::Negative => {
                record.clear(field);
                Advance::stay(
                    TurnOutput::new(prompts::correction_prompt(field), state, record, Some(field), false)
                        .with_manual_entry(field),
                )
            }
            intent::Intent::Neither => Advance::stay(TurnOutput::new(
                prompts::confirm_reprompt(field),
                state,
                record,
                Some(field),
                true,
            )),
        };
    }

    match extract::extract_field(field, &input.user_input) {
        Some(value) => {
            let response = prompts::heard_value(field, &value);
            record.set(field, value);
            Advance::stay(TurnOutput::new(response, state, record, Some(field), true))
        }
        None => Advance::stay(
            TurnOutput::new(prompts::extraction_retry(field), state, record, Some(field), false)
                .with_manual_entry(field),
        ),
    }
}

/// Move on after a confirmed value: the next collecting state, or — after
/// country — reformat the phone with the calling code and present the full
/// summary for final confirmation.
fn confirm_advance(mut record: VisitorRecord, field: Field) -> Advance {
    match field.next() {
        Some(next) => Advance::stay(TurnOutput::new(
            prompts::advance_prompt(next, &record),
            ConversationState::collecting(next),
            record,
            Some(next),
            false,
        )),
        None => {
            let formatted = extract::format_phone_with_country(&record.phone, &record.country);
            record.phone = formatted;
            Advance::stay(TurnOutput::new(
                prompts::summary(&record),
                ConversationState::FinalConfirmation,
                record,
                None,
                false,
            ))
        }
    }
}

fn final_confirmation(input: &TurnInput) -> Advance {
    let record = input.record.clone();
    match intent::classify(&input.user_input) {
        intent::Intent::Affirmative => Advance {
            output: TurnOutput::new(
                prompts::thank_you().to_string(),
                ConversationState::Finished,
                record,
                None,
                false,
            ),
            submit: true,
        },
        intent::Intent::Negative => Advance::stay(TurnOutput::new(
            prompts::restart().to_string(),
            ConversationState::CollectingName,
            VisitorRecord::default(),
            Some(Field::Name),
            false,
        )),
        intent::Intent::Neither => Advance::stay(TurnOutput::new(
            prompts::submit_reprompt().to_string(),
            ConversationState::FinalConfirmation,
            record,
            None,
            false,
        )),
    }
}

/// Trusted direct-entry path: store `value` verbatim (trimmed) and advance
/// without confirmation. A blank value stays on the same field.
pub fn manual_correct(field: Field, value: &str, record: &VisitorRecord) -> TurnOutput {
    let value = value.trim();
    let mut record = record.clone();

    if value.is_empty() {
        return TurnOutput::new(
            prompts::manual_invalid(field),
            ConversationState::collecting(field),
            record,
            Some(field),
            false,
        );
    }

    record.set(field, value.to_string());
    match field.next() {
        Some(next) => TurnOutput::new(
            prompts::manual_next(next),
            ConversationState::collecting(next),
            record,
            Some(next),
            false,
        ),
        None => {
            let response = prompts::summary(&record);
            TurnOutput::new(response, ConversationState::FinalConfirmation, record, None, false)
        }
    }
}
