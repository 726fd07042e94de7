//! Study-tip source contract.
//!
//! The tip provider is an opaque, best-effort text source. The core never
//! surfaces its failures: an error or an empty reply degrades to fixed
//! fallback copy, and callers must never block a booking or a navigation
//! decision on it.

use async_trait::async_trait;

/// Served when the provider fails or times out.
pub const FALLBACK_TIP: &str = "Focus on one task at a time for maximum productivity.";

/// Served when the provider replies successfully but with empty text.
pub const EMPTY_REPLY_TIP: &str = "Keep up the great work!";

#[derive(Debug, thiserror::Error)]
pub enum TipError {
    #[error("tip provider unavailable: {0}")]
    Unavailable(String),
}

/// A provider of one short, encouraging study tip for a building.
#[async_trait]
pub trait TipSource: Send + Sync {
    async fn tip(&self, building: &str) -> Result<String, TipError>;
}

/// Fetch a tip, absorbing every failure mode into fallback copy.
pub async fn tip_or_fallback(source: &dyn TipSource, building: &str) -> String {
    match source.tip(building).await {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => EMPTY_REPLY_TIP.to_string(),
        Err(_) => FALLBACK_TIP.to_string(),
    }
}
