//! Study-tip provider client and the detail-view prefetch task.
//!
//! The provider is strictly best-effort: every failure mode (unconfigured,
//! network error, non-2xx, malformed body, timeout) degrades to the fixed
//! fallback copy from `campusease_core::tips`, and nothing ever blocks a
//! booking or a navigation decision on it.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use campusease_core::room::Room;
use campusease_core::tips::{tip_or_fallback, TipError, TipSource, FALLBACK_TIP};

use crate::config::TipConfig;
use crate::state::AppState;

/// HTTP-backed tip source calling a configured text-generation endpoint.
pub struct HttpTipProvider {
    client: reqwest::Client,
    url: String,
    api_key: Option<String>,
}

/// Expected response body from the text-generation endpoint.
#[derive(Debug, Deserialize)]
struct TipResponse {
    #[serde(default)]
    text: String,
}

impl HttpTipProvider {
    pub fn new(url: String, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
            api_key,
        }
    }
}

#[async_trait]
impl TipSource for HttpTipProvider {
    async fn tip(&self, building: &str) -> Result<String, TipError> {
        let prompt = format!(
            "Provide one short, encouraging study tip for a college student \
             studying in the {building}. Keep it under 15 words."
        );

        let mut request = self
            .client
            .post(&self.url)
            .json(&serde_json::json!({ "prompt": prompt }));
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| TipError::Unavailable(e.to_string()))?
            .error_for_status()
            .map_err(|e| TipError::Unavailable(e.to_string()))?;

        let body: TipResponse = response
            .json()
            .await
            .map_err(|e| TipError::Unavailable(e.to_string()))?;

        Ok(body.text)
    }
}

/// Tip source used when no endpoint is configured: always "fails", so
/// callers serve the fallback copy without leaving the process.
pub struct UnconfiguredTipSource;

#[async_trait]
impl TipSource for UnconfiguredTipSource {
    async fn tip(&self, _building: &str) -> Result<String, TipError> {
        Err(TipError::Unavailable("no tip provider configured".into()))
    }
}

/// Build the tip source the configuration calls for.
pub fn tip_source_from_config(config: &TipConfig) -> Arc<dyn TipSource> {
    match &config.api_url {
        Some(url) => Arc::new(HttpTipProvider::new(url.clone(), config.api_key.clone())),
        None => Arc::new(UnconfiguredTipSource),
    }
}

/// Fetch a tip under a deadline, absorbing a timeout into the fallback.
pub async fn fetch_tip(source: &dyn TipSource, building: &str, timeout: Duration) -> String {
    match tokio::time::timeout(timeout, tip_or_fallback(source, building)).await {
        Ok(text) => text,
        Err(_) => FALLBACK_TIP.to_string(),
    }
}

/// Fire-and-forget tip prefetch for a freshly opened room detail view.
///
/// Opening a different detail view cancels the in-flight task; a result
/// arriving after cancellation is discarded, never applied.
pub async fn spawn_prefetch(state: &AppState, session: Uuid, room: &Room) {
    let Some(cancel) = state
        .sessions
        .begin_tip_prefetch(session, room.id.clone())
        .await
    else {
        return;
    };

    let sessions = Arc::clone(&state.sessions);
    let tips = Arc::clone(&state.tips);
    let timeout = Duration::from_secs(state.config.tip.timeout_secs);
    let room_id = room.id.clone();
    let building = room.building.clone();

    tokio::spawn(async move {
        tokio::select! {
            () = cancel.cancelled() => {
                tracing::debug!(room_id, "tip prefetch abandoned");
            }
            text = fetch_tip(tips.as_ref(), &building, timeout) => {
                sessions.store_tip(session, &room_id, &cancel, text).await;
            }
        }
    });
}
