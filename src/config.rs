//! Configuration types.

use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

/// Service configuration.
///
/// Loaded from `VISITOR_DESK_*` environment variables with sensible
/// defaults, so the binary runs out of the box.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address.
    pub host: IpAddr,
    /// Bind port.
    pub port: u16,
    /// Path of the CSV visitor store.
    pub sink_path: PathBuf,
    /// Event label stamped on every saved record.
    pub event_label: String,
    /// Default voice id for speech synthesis.
    pub default_voice: String,
    /// Base URL of the text-to-speech service. `None` means synthesis is
    /// reported as unavailable rather than attempted.
    pub tts_endpoint: Option<String>,
    /// When true, a failed sink write replaces the user-facing success
    /// message and the conversation stays at final confirmation. When false
    /// the failure is only logged (the historical behavior).
    pub surface_sink_failures: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 5000,
            sink_path: PathBuf::from("./data/visitors.csv"),
            event_label: "Community Day".to_string(),
            default_voice: "Matthew".to_string(),
            tts_endpoint: None,
            surface_sink_failures: false,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the environment, falling back to defaults
    /// for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("VISITOR_DESK_HOST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.host),
            port: std::env::var("VISITOR_DESK_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            sink_path: std::env::var("VISITOR_DESK_SINK_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.sink_path),
            event_label: std::env::var("VISITOR_DESK_EVENT")
                .unwrap_or(defaults.event_label),
            default_voice: std::env::var("VISITOR_DESK_VOICE")
                .unwrap_or(defaults.default_voice),
            tts_endpoint: std::env::var("VISITOR_DESK_TTS_ENDPOINT").ok(),
            surface_sink_failures: std::env::var("VISITOR_DESK_SURFACE_SINK_FAILURES")
                .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
                .unwrap_or(defaults.surface_sink_failures),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.event_label, "Community Day");
        assert!(config.tts_endpoint.is_none());
        assert!(!config.surface_sink_failures);
    }
}
