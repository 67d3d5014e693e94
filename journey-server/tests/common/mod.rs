use journey_server::explain::{Explainer, OllamaClient};
use journey_server::planner::PlannerConfig;
use journey_server::tfl::{TflClient, TflConfig};
use journey_server::web::{AppState, create_router};
use serde_json::{Value, json};

/// Start the server on an ephemeral port, pointed at `tfl_base`.
///
/// Returns the server's base URL.
pub async fn spawn_app(tfl_base: &str, ollama: Option<OllamaClient>) -> String {
    let tfl = TflClient::new(TflConfig::new().with_base_url(tfl_base)).unwrap();
    let state = AppState::new(tfl, PlannerConfig::default(), Explainer::new(ollama));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, create_router(state)).await.unwrap();
    });

    format!("http://{addr}")
}

/// A StopPoint search body with one match per `(icsId, name)`.
pub fn search_body(matches: &[(&str, &str)]) -> Value {
    let matches: Vec<Value> = matches
        .iter()
        .map(|(ics, name)| json!({"icsId": ics, "id": format!("HUB{ics}"), "name": name}))
        .collect();
    json!({"query": "q", "total": matches.len(), "matches": matches})
}

/// Paddington → Oxford Circus: one 15 minute journey with two legs.
pub fn journey_body() -> Value {
    json!({
        "journeys": [{
            "startDateTime": "2024-03-15T10:00:00",
            "arrivalDateTime": "2024-03-15T10:15:00",
            "duration": 15,
            "legs": [
                {
                    "duration": 3,
                    "mode": {"id": "walking", "name": "walking"},
                    "departurePoint": {"commonName": "Paddington"},
                    "arrivalPoint": {"commonName": "Paddington Underground Station"}
                },
                {
                    "duration": 12,
                    "mode": {"id": "tube", "name": "tube"},
                    "departurePoint": {"commonName": "Paddington Underground Station"},
                    "arrivalPoint": {"commonName": "Oxford Circus Underground Station"}
                }
            ]
        }]
    })
}
