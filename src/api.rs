// API client module: a small blocking HTTP client for the two remote
// services the menu talks to, the chat-completion endpoint and the
// current-weather endpoint.

use crate::config::Config;
use crate::error::{AssistantError, WeatherError};
use crate::prompts::SYSTEM_PROMPT;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Printed in place of a completion whenever the round trip fails.
pub const COMPLETION_FAILED: &str = "Erreur lors de la requête à l'API.";

/// Shown when the weather response has no usable description.
pub const DESCRIPTION_UNAVAILABLE: &str = "Non disponible";

/// Holds one reqwest blocking client plus the endpoints and credentials
/// taken from `Config`. The client is reused for every action.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    openai_api_key: String,
    meteo_api_key: String,
    model: String,
    completion_url: String,
    weather_url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Body of a chat-completion request. Each request is self-contained: no
/// history is carried between calls.
#[derive(Serialize, Debug)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Deserialize, Debug)]
pub struct CompletionResponse {
    pub choices: Vec<CompletionChoice>,
}

#[derive(Deserialize, Debug)]
pub struct CompletionChoice {
    pub message: ChatMessage,
}

/// The values kept from one current-weather response.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherObservation {
    pub city: String,
    pub description: String,
    pub temperature: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(ApiClient {
            client,
            openai_api_key: config.openai_api_key.clone(),
            meteo_api_key: config.meteo_api_key.clone(),
            model: config.model.clone(),
            completion_url: config.completion_url.clone(),
            weather_url: config.weather_url.clone(),
        })
    }

    /// Authorization header for the completion endpoint. A key that is not a
    /// valid header value is left out and the remote side rejects the call.
    fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        match HeaderValue::from_str(&format!("Bearer {}", self.openai_api_key)) {
            Ok(val) => {
                headers.insert(AUTHORIZATION, val);
            }
            Err(_) => log::warn!("OPENAI_API_KEY is not a valid header value, sending without it"),
        }
        headers
    }

    fn completion_request(&self, prompt: &str) -> CompletionRequest {
        CompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".into(),
                    content: SYSTEM_PROMPT.into(),
                },
                ChatMessage {
                    role: "user".into(),
                    content: prompt.into(),
                },
            ],
        }
    }

    /// Send `prompt` as a single-turn chat request and return the content of
    /// the first choice.
    pub fn try_complete(&self, prompt: &str) -> Result<String, AssistantError> {
        let body = self.completion_request(prompt);
        log::debug!("POST {} (model {})", self.completion_url, body.model);

        let res = self
            .client
            .post(&self.completion_url)
            .headers(self.auth_headers())
            .json(&body)
            .send()?;
        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().unwrap_or_default();
            return Err(AssistantError::Status { status, body });
        }

        let text = res.text()?;
        let parsed: CompletionResponse = serde_json::from_str(&text)?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(AssistantError::NoChoices)
    }

    /// Like `try_complete`, but any failure collapses into
    /// `COMPLETION_FAILED` after being logged.
    pub fn complete(&self, prompt: &str) -> String {
        match self.try_complete(prompt) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("Completion request failed: {}", e);
                COMPLETION_FAILED.to_string()
            }
        }
    }

    /// Query the current weather for `city` in metric units with French
    /// descriptions.
    pub fn current_weather(&self, city: &str) -> Result<WeatherObservation, WeatherError> {
        log::debug!("GET {} for {:?}", self.weather_url, city);

        let res = self
            .client
            .get(&self.weather_url)
            .query(&[
                ("q", city),
                ("appid", self.meteo_api_key.as_str()),
                ("units", "metric"),
                ("lang", "fr"),
            ])
            .send()?;
        let status = res.status();
        if status == StatusCode::NOT_FOUND {
            return Err(WeatherError::CityNotFound);
        }
        if !status.is_success() {
            let body = res.text().unwrap_or_default();
            return Err(WeatherError::Status { status, body });
        }

        let text = res.text()?;
        let data: Value = serde_json::from_str(&text)?;
        parse_observation(city, &data)
    }
}

/// Pull description and temperature out of a current-weather document.
/// The temperature is kept exactly as the API formatted it.
pub fn parse_observation(city: &str, data: &Value) -> Result<WeatherObservation, WeatherError> {
    let first = data
        .get("weather")
        .and_then(Value::as_array)
        .and_then(|entries| entries.first())
        .ok_or(WeatherError::CityNotFound)?;

    let description = first
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or(DESCRIPTION_UNAVAILABLE)
        .to_string();

    let temperature = match data.get("main").and_then(|main| main.get("temp")) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => return Err(WeatherError::MissingField("main.temp")),
        Some(other) => other.to_string(),
    };

    Ok(WeatherObservation {
        city: city.to_string(),
        description,
        temperature,
    })
}
