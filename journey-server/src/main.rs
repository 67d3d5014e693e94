use journey_server::config::Config;
use journey_server::explain::{Explainer, OllamaClient};
use journey_server::logging;
use journey_server::tfl::TflClient;
use journey_server::web::{AppState, create_router};
use tracing::{info, warn};

#[tokio::main]
async fn main() {
    logging::init();

    let config = Config::from_env().expect("Invalid configuration");

    // Create TfL client
    let tfl = TflClient::new(config.tfl.clone()).expect("Failed to create TfL client");
    if tfl.has_credentials() {
        info!("TfL API: credentials configured");
    } else {
        warn!("TfL API: TFL_APP_ID/TFL_APP_KEY not set, using public access (rate limited)");
    }

    // Create optional Ollama client
    let ollama = config
        .ollama
        .clone()
        .map(OllamaClient::new)
        .transpose()
        .expect("Failed to create Ollama client");

    match &ollama {
        Some(client) if client.available().await => {
            info!(host = client.host(), model = client.model(), "Ollama: connected");
        }
        Some(client) => {
            warn!(
                host = client.host(),
                model = client.model(),
                "Ollama: not connected, explanations will use the basic summary"
            );
        }
        None => info!("Ollama: disabled"),
    }

    // Build app state
    let state = AppState::new(tfl, config.planner, Explainer::new(ollama));

    // Create router
    let app = create_router(state);

    // Bind and serve
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind listen address");
    info!(addr = %config.bind_addr, "London Journey Planner listening");

    axum::serve(listener, app).await.expect("Server error");
}
