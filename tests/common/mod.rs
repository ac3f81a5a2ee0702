// Shared test helpers: a throwaway HTTP server standing in for the remote
// endpoints, and a `Config` pointing at it.

#![allow(dead_code)]

use spellcaster_cli::config::Config;
use std::io::Read;
use std::path::Path;
use std::thread::{self, JoinHandle};
use tiny_http::{Header, Response, Server};

/// What the mock server saw for one request.
#[derive(Debug)]
pub struct Captured {
    pub method: String,
    pub url: String,
    pub authorization: Option<String>,
    pub body: String,
}

/// Serve `responses` in order, one per incoming request, then stop.
/// Joining the handle returns the captured requests.
pub fn serve(responses: Vec<(u16, String)>) -> (String, JoinHandle<Vec<Captured>>) {
    let server = Server::http("127.0.0.1:0").expect("bind mock server");
    let port = server
        .server_addr()
        .to_ip()
        .expect("mock server listens on TCP")
        .port();

    let handle = thread::spawn(move || {
        let mut captured = Vec::new();
        for (status, body) in responses {
            let mut request = server.recv().expect("receive request");
            let mut text = String::new();
            request
                .as_reader()
                .read_to_string(&mut text)
                .expect("read request body");
            let authorization = request
                .headers()
                .iter()
                .find(|h| h.field.equiv("Authorization"))
                .map(|h| h.value.as_str().to_string());
            captured.push(Captured {
                method: request.method().to_string(),
                url: request.url().to_string(),
                authorization,
                body: text,
            });

            let content_type =
                Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap();
            request
                .respond(
                    Response::from_string(body)
                        .with_status_code(status)
                        .with_header(content_type),
                )
                .expect("send response");
        }
        captured
    });

    (format!("http://127.0.0.1:{}", port), handle)
}

/// Configuration pointing both endpoints at `base_url` and writing reports
/// into `report_dir`.
pub fn config_for(base_url: &str, report_dir: &Path) -> Config {
    let completion_url = format!("{}/v1/chat/completions", base_url);
    let weather_url = format!("{}/data/2.5/weather", base_url);
    let report_dir = report_dir.display().to_string();
    Config::from_lookup(move |key| match key {
        "OPENAI_API_KEY" => Some("sk-test".to_string()),
        "METEO_API_KEY" => Some("meteo-test".to_string()),
        "SPELLCASTER_COMPLETION_URL" => Some(completion_url.clone()),
        "SPELLCASTER_WEATHER_URL" => Some(weather_url.clone()),
        "SPELLCASTER_REPORT_DIR" => Some(report_dir.clone()),
        _ => None,
    })
}

pub fn completion_body(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-1",
        "choices": [{ "index": 0, "message": { "role": "assistant", "content": content } }]
    })
    .to_string()
}

pub fn weather_body(description: &str, temp: f64) -> String {
    serde_json::json!({
        "weather": [{ "id": 501, "main": "Rain", "description": description }],
        "main": { "temp": temp, "humidity": 80 },
        "name": "Paris"
    })
    .to_string()
}
