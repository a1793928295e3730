//! Conversation state machine states.

use serde::{Deserialize, Deserializer, Serialize};

use super::record::Field;

/// The states of the registration conversation.
///
/// Progresses linearly: Greeting → CollectingName → CollectingCompany →
/// CollectingEmail → CollectingPhone → CollectingCountry →
/// FinalConfirmation → Finished. The only backward moves are corrections
/// (a rejected value re-enters the same collecting state) and a full
/// restart from FinalConfirmation back to CollectingName.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    Greeting,
    CollectingName,
    CollectingCompany,
    CollectingEmail,
    CollectingPhone,
    CollectingCountry,
    FinalConfirmation,
    Finished,
}

impl ConversationState {
    /// The collecting state for a given field.
    pub fn collecting(field: Field) -> Self {
        match field {
            Field::Name => Self::CollectingName,
            Field::Company => Self::CollectingCompany,
            Field::Email => Self::CollectingEmail,
            Field::Phone => Self::CollectingPhone,
            Field::Country => Self::CollectingCountry,
        }
    }

    /// The field being collected in this state, if any.
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::CollectingName => Some(Field::Name),
            Self::CollectingCompany => Some(Field::Company),
            Self::CollectingEmail => Some(Field::Email),
            Self::CollectingPhone => Some(Field::Phone),
            Self::CollectingCountry => Some(Field::Country),
            _ => None,
        }
    }

    /// Whether this state is terminal (the record has been handed off).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::CollectingName => "collecting_name",
            Self::CollectingCompany => "collecting_company",
            Self::CollectingEmail => "collecting_email",
            Self::CollectingPhone => "collecting_phone",
            Self::CollectingCountry => "collecting_country",
            Self::FinalConfirmation => "final_confirmation",
            Self::Finished => "finished",
        }
    }

    /// Parse a wire state name. Anything unrecognized falls back to
    /// `Greeting` so a malformed request still produces a valid turn.
    pub fn from_wire(s: &str) -> Self {
        match s {
            "collecting_name" => Self::CollectingName,
            "collecting_company" => Self::CollectingCompany,
            "collecting_email" => Self::CollectingEmail,
            "collecting_phone" => Self::CollectingPhone,
            "collecting_country" => Self::CollectingCountry,
            "final_confirmation" => Self::FinalConfirmation,
            "finished" => Self::Finished,
            _ => Self::Greeting,
        }
    }
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::Greeting
    }
}

impl std::fmt::Display for ConversationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Manual impl so unknown state names deserialize to Greeting instead of
// failing the whole request.
impl<'de> Deserialize<'de> for ConversationState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collecting_round_trips_field() {
        for field in Field::ORDER {
            let state = ConversationState::collecting(field);
            assert_eq!(state.field(), Some(field));
        }
    }

    #[test]
    fn non_collecting_states_have_no_field() {
        assert_eq!(ConversationState::Greeting.field(), None);
        assert_eq!(ConversationState::FinalConfirmation.field(), None);
        assert_eq!(ConversationState::Finished.field(), None);
    }

    #[test]
    fn unknown_wire_state_falls_back_to_greeting() {
        assert_eq!(
            ConversationState::from_wire("collect_shoe_size"),
            ConversationState::Greeting
        );
        assert_eq!(ConversationState::from_wire(""), ConversationState::Greeting);

        let parsed: ConversationState = serde_json::from_str("\"bogus\"").unwrap();
        assert_eq!(parsed, ConversationState::Greeting);
    }

    #[test]
    fn display_matches_serde() {
        let states = [
            ConversationState::Greeting,
            ConversationState::CollectingName,
            ConversationState::CollectingCompany,
            ConversationState::CollectingEmail,
            ConversationState::CollectingPhone,
            ConversationState::CollectingCountry,
            ConversationState::FinalConfirmation,
            ConversationState::Finished,
        ];
        for state in states {
            let json = serde_json::to_string(&state).unwrap();
            assert_eq!(json, format!("\"{state}\""));
            assert_eq!(ConversationState::from_wire(state.as_str()), state);
        }
    }
}
