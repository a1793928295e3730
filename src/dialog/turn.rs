//! Turn input/output — the wire shape of one conversation step.

use serde::{Deserialize, Serialize};

use super::record::{Field, VisitorRecord};
use super::state::ConversationState;

/// One turn's worth of input.
///
/// Every field defaults when absent so a sparse or partially malformed
/// request still yields a valid turn (`state` additionally falls back to
/// `greeting` on unknown names). The aliases accept the legacy key names.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TurnInput {
    pub user_input: String,
    #[serde(alias = "conversation_state")]
    pub state: ConversationState,
    #[serde(alias = "user_data")]
    pub record: VisitorRecord,
    pub awaiting_confirmation: bool,
}

impl TurnInput {
    pub fn new(user_input: &str, state: ConversationState, record: VisitorRecord) -> Self {
        Self {
            user_input: user_input.to_string(),
            state,
            record,
            awaiting_confirmation: false,
        }
    }

    pub fn confirming(user_input: &str, state: ConversationState, record: VisitorRecord) -> Self {
        Self {
            awaiting_confirmation: true,
            ..Self::new(user_input, state, record)
        }
    }
}

/// One turn's worth of output, handed back to the transport layer.
#[derive(Debug, Clone, Serialize)]
pub struct TurnOutput {
    pub bot_response: String,
    pub new_state: ConversationState,
    pub updated_record: VisitorRecord,
    pub next_field: Option<Field>,
    pub awaiting_confirmation: bool,
    pub show_manual_input: bool,
    pub manual_field: Option<Field>,
}

impl TurnOutput {
    /// A plain turn output with the manual-entry flags off.
    pub fn new(
        bot_response: String,
        new_state: ConversationState,
        updated_record: VisitorRecord,
        next_field: Option<Field>,
        awaiting_confirmation: bool,
    ) -> Self {
        Self {
            bot_response,
            new_state,
            updated_record,
            next_field,
            awaiting_confirmation,
            show_manual_input: false,
            manual_field: None,
        }
    }

    /// Flag that the transport should offer typed entry for `field`.
    pub fn with_manual_entry(mut self, field: Field) -> Self {
        self.show_manual_input = true;
        self.manual_field = Some(field);
        self
    }
}
