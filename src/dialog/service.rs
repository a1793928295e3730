//! DialogService — wires the pure state machine to the record sink.

use std::sync::Arc;

use crate::sink::RecordSink;

use super::machine;
use super::prompts;
use super::record::{Field, VisitorRecord};
use super::state::ConversationState;
use super::turn::{TurnInput, TurnOutput};

/// Runs turns and performs the single side effect the conversation has:
/// handing a completed record to the sink when final confirmation succeeds.
///
/// Holds no session state; the transport carries the record between turns.
pub struct DialogService {
    sink: Arc<dyn RecordSink>,
    surface_sink_failures: bool,
}

impl DialogService {
    pub fn new(sink: Arc<dyn RecordSink>, surface_sink_failures: bool) -> Self {
        Self {
            sink,
            surface_sink_failures,
        }
    }

    /// Process one conversation turn.
    ///
    /// A sink failure is logged but by default does not change the
    /// user-facing response (historical fire-and-forget behavior). With
    /// `surface_sink_failures` on, the turn instead reports the failure and
    /// stays at final confirmation so the visitor can retry.
    pub async fn process_turn(&self, input: &TurnInput) -> TurnOutput {
        let machine::Advance { mut output, submit } = machine::advance(input);

        if submit {
            match self.sink.save(&output.updated_record).await {
                Ok(()) => {
                    tracing::info!(
                        name = %output.updated_record.name,
                        company = %output.updated_record.company,
                        "visitor record saved"
                    );
                }
                Err(e) => {
                    tracing::error!(
                        name = %output.updated_record.name,
                        company = %output.updated_record.company,
                        "failed to save visitor record: {e}"
                    );
                    if self.surface_sink_failures {
                        output.bot_response = prompts::save_failed().to_string();
                        output.new_state = ConversationState::FinalConfirmation;
                    }
                }
            }
        }

        output
    }

    /// Trusted manual-entry path; never touches the sink.
    pub fn manual_correct(
        &self,
        field: Field,
        value: &str,
        record: &VisitorRecord,
    ) -> TurnOutput {
        machine::manual_correct(field, value, record)
    }
}
