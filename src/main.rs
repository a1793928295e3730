use std::sync::Arc;

use visitor_desk::config::ServerConfig;
use visitor_desk::dialog::DialogService;
use visitor_desk::server::{self, AppState};
use visitor_desk::sink::CsvSink;
use visitor_desk::speech::{HttpSynthesizer, SpeechSynthesizer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ServerConfig::from_env();

    eprintln!("📋 Visitor Desk v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Event: {}", config.event_label);
    eprintln!("   Store: {}", config.sink_path.display());
    eprintln!(
        "   TTS: {}",
        config.tts_endpoint.as_deref().unwrap_or("(not configured)")
    );

    let sink = Arc::new(CsvSink::new(
        config.sink_path.clone(),
        config.event_label.clone(),
    ));
    let synthesizer: Arc<dyn SpeechSynthesizer> =
        Arc::new(HttpSynthesizer::new(config.tts_endpoint.clone()));
    let service = Arc::new(DialogService::new(sink, config.surface_sink_failures));

    let app = server::app(AppState {
        service,
        synthesizer,
        default_voice: config.default_voice.clone(),
    });

    let listener = tokio::net::TcpListener::bind((config.host, config.port)).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
