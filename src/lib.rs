//! Visitor Desk — slot-filling registration dialogue service.
//!
//! Walks an event visitor through name, company, email, phone, and country
//! collection over free-text (or speech-transcribed) input, confirming each
//! value before moving on, and appends the finished record to a durable sink.

pub mod config;
pub mod dialog;
pub mod error;
pub mod nlp;
pub mod server;
pub mod sink;
pub mod speech;
