//! Dialogue core — the slot-filling conversation state machine.
//!
//! The machine walks a visitor through name, company, email, phone, and
//! country, confirming each extracted value before moving on. It is pure and
//! stateless between calls: the transport layer round-trips the record and
//! state with the client every turn.

pub mod machine;
pub mod prompts;
pub mod record;
pub mod service;
pub mod state;
pub mod turn;

pub use machine::{Advance, advance, manual_correct};
pub use record::{Field, VisitorRecord};
pub use service::DialogService;
pub use state::ConversationState;
pub use turn::{TurnInput, TurnOutput};
