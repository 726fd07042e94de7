//! Handler for the route access policy endpoint.
//!
//! The mobile-web client asks this endpoint before rendering a screen;
//! the decision logic itself is the pure table in
//! `campusease_core::routing`. Anonymous requests are answered with a
//! fresh-session context so even a client without a token gets the
//! correct onboarding/sign-in redirects.

use axum::extract::{Query, State};
use axum::Json;
use campusease_core::routing::{self, NavContext, RouteDecision};
use serde::{Deserialize, Serialize};

use crate::middleware::auth::MaybeSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /navigation/decision`.
#[derive(Debug, Deserialize)]
pub struct DecisionParams {
    /// The client path being navigated to, e.g. `/detail/3`.
    pub route: String,
}

/// Policy verdict returned to the client.
#[derive(Debug, Serialize)]
pub struct NavigationDecision {
    pub decision: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<&'static str>,
}

/// GET /api/v1/navigation/decision?route=<path>
pub async fn decision(
    MaybeSession(session): MaybeSession,
    State(state): State<AppState>,
    Query(params): Query<DecisionParams>,
) -> Json<DataResponse<NavigationDecision>> {
    // A missing or unknown token behaves like a brand-new client.
    let fresh = NavContext {
        onboarding_complete: false,
        role: None,
    };
    let ctx = match session {
        Some(user) => state
            .sessions
            .with_state(user.token, |s| s.nav_context())
            .await
            .unwrap_or(fresh),
        None => fresh,
    };

    let data = match routing::decide(ctx, &params.route) {
        RouteDecision::Allow => NavigationDecision {
            decision: "allow",
            to: None,
        },
        RouteDecision::Redirect(target) => NavigationDecision {
            decision: "redirect",
            to: Some(target.path()),
        },
    };

    Json(DataResponse { data })
}
