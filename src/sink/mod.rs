//! Record sink — durable append-only store for completed visitor records.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::dialog::record::VisitorRecord;
use crate::error::SinkError;

/// Where finished records go. Called exactly once per completed
/// conversation, when final confirmation receives a "yes".
#[async_trait]
pub trait RecordSink: Send + Sync {
    async fn save(&self, record: &VisitorRecord) -> Result<(), SinkError>;
}

const HEADER: &str = "name,company,email,phone,country,timestamp,event";

/// CSV-backed sink. Each save stamps the record with a UTC timestamp and the
/// configured event label and appends one row.
///
/// Writes are read-then-append and serialized by an internal lock, so
/// concurrent sessions finishing at the same time cannot lose rows. An
/// existing file that is unreadable or carries a foreign header is replaced
/// by a fresh store containing just the new record — a corrupt store never
/// fails the visitor's turn.
pub struct CsvSink {
    path: PathBuf,
    event_label: String,
    write_lock: Mutex<()>,
}

impl CsvSink {
    pub fn new(path: PathBuf, event_label: String) -> Self {
        Self {
            path,
            event_label,
            write_lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl RecordSink for CsvSink {
    async fn save(&self, record: &VisitorRecord) -> Result<(), SinkError> {
        let _guard = self.write_lock.lock().await;

        let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let row = [
            record.name.as_str(),
            record.company.as_str(),
            record.email.as_str(),
            record.phone.as_str(),
            record.country.as_str(),
            timestamp.as_str(),
            self.event_label.as_str(),
        ]
        .iter()
        .map(|field| csv_escape(field))
        .collect::<Vec<_>>()
        .join(",");

        let mut content = match tokio::fs::read_to_string(&self.path).await {
            Ok(existing) if existing.lines().next() == Some(HEADER) => existing,
            Ok(_) => {
                tracing::warn!(path = %self.path.display(), "visitor store has an unexpected format, starting fresh");
                format!("{HEADER}\n")
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => format!("{HEADER}\n"),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "visitor store unreadable ({e}), starting fresh");
                format!("{HEADER}\n")
            }
        };

        if !content.ends_with('\n') {
            content.push('\n');
        }
        content.push_str(&row);
        content.push('\n');

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}

fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
