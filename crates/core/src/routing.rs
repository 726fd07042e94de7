//! Route access policy.
//!
//! A pure decision table mapping (session context, requested path) to
//! either *allow* or *redirect(target)*. The client consults this before
//! rendering any screen; nothing here touches session state, so the same
//! inputs always produce the same decision.

use crate::identity::Role;

/// The client route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    // Public (reachable without an identity)
    Onboarding,
    SignIn,
    SignUp,
    ForgotPassword,
    // Student-only
    Home,
    Filter,
    Results,
    RoomDetail,
    Confirmation,
    Reservations,
    StudentProfile,
    // Assigner-only
    AssignerDashboard,
    AllocationDetail,
    AssignerProfile,
}

/// Who a route is designated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    Public,
    Student,
    Assigner,
}

impl Route {
    /// Parse a client path. Dynamic segments (`/detail/3`) must carry a
    /// non-empty id. Returns `None` for anything outside the table.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.trim_end_matches('/');
        let path = if path.is_empty() { "/" } else { path };
        match path {
            "/onboarding" => Some(Route::Onboarding),
            "/signin" => Some(Route::SignIn),
            "/signup" => Some(Route::SignUp),
            "/forgot-password" => Some(Route::ForgotPassword),
            "/" => Some(Route::Home),
            "/filter" => Some(Route::Filter),
            "/results" => Some(Route::Results),
            "/confirmation" => Some(Route::Confirmation),
            "/reservations" => Some(Route::Reservations),
            "/profile" => Some(Route::StudentProfile),
            "/assigner-dashboard" => Some(Route::AssignerDashboard),
            "/assigner-profile" => Some(Route::AssignerProfile),
            _ => {
                if let Some(id) = path.strip_prefix("/detail/") {
                    return (!id.is_empty() && !id.contains('/')).then_some(Route::RoomDetail);
                }
                if let Some(id) = path.strip_prefix("/allocation/") {
                    return (!id.is_empty() && !id.contains('/'))
                        .then_some(Route::AllocationDetail);
                }
                None
            }
        }
    }

    pub fn audience(self) -> Audience {
        match self {
            Route::Onboarding | Route::SignIn | Route::SignUp | Route::ForgotPassword => {
                Audience::Public
            }
            Route::Home
            | Route::Filter
            | Route::Results
            | Route::RoomDetail
            | Route::Confirmation
            | Route::Reservations
            | Route::StudentProfile => Audience::Student,
            Route::AssignerDashboard | Route::AllocationDetail | Route::AssignerProfile => {
                Audience::Assigner
            }
        }
    }

    /// Canonical client path. Dynamic routes yield their base segment;
    /// the policy never uses them as redirect targets.
    pub fn path(self) -> &'static str {
        match self {
            Route::Onboarding => "/onboarding",
            Route::SignIn => "/signin",
            Route::SignUp => "/signup",
            Route::ForgotPassword => "/forgot-password",
            Route::Home => "/",
            Route::Filter => "/filter",
            Route::Results => "/results",
            Route::RoomDetail => "/detail",
            Route::Confirmation => "/confirmation",
            Route::Reservations => "/reservations",
            Route::StudentProfile => "/profile",
            Route::AssignerDashboard => "/assigner-dashboard",
            Route::AllocationDetail => "/allocation",
            Route::AssignerProfile => "/assigner-profile",
        }
    }
}

/// The landing route a role falls back to.
pub fn default_landing(role: Option<Role>) -> Route {
    match role {
        Some(Role::Assigner) => Route::AssignerDashboard,
        Some(Role::Student) | None => Route::Home,
    }
}

/// What the policy needs to know about the session.
#[derive(Debug, Clone, Copy)]
pub struct NavContext {
    /// First-run introduction finished for this session.
    pub onboarding_complete: bool,
    /// Role of the signed-in identity, if any.
    pub role: Option<Role>,
}

/// Policy verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(Route),
}

/// Evaluate the policy for a requested client path.
///
/// Rules, in priority order:
/// 1. Onboarding gate: until the introduction completes, everything but
///    the onboarding route redirects there.
/// 2. Anonymous sessions may only reach the public routes; everything
///    else redirects to sign-in.
/// 3. A student requesting an assigner-only route is sent home -- except
///    the assigner profile, which swaps to the student profile.
/// 4. An assigner requesting a student-only route is sent to the
///    dashboard -- except the student profile, which swaps to the
///    assigner profile. The two profile exceptions are intentionally
///    asymmetric in target, mirror images in shape.
/// 5. Unmatched paths redirect to the role's default landing route.
pub fn decide(ctx: NavContext, path: &str) -> RouteDecision {
    let route = Route::parse(path);

    // Rule 1: onboarding gate, ahead of everything.
    if !ctx.onboarding_complete && route != Some(Route::Onboarding) {
        return RouteDecision::Redirect(Route::Onboarding);
    }

    // Rule 2: anonymous sessions.
    let Some(role) = ctx.role else {
        return match route {
            Some(r) if r.audience() == Audience::Public => RouteDecision::Allow,
            _ => RouteDecision::Redirect(Route::SignIn),
        };
    };

    // Rule 5: unmatched paths.
    let Some(route) = route else {
        return RouteDecision::Redirect(default_landing(Some(role)));
    };

    // Rules 3 & 4: role partitioning with the profile swap.
    match (role, route.audience()) {
        (_, Audience::Public) => RouteDecision::Allow,
        (Role::Student, Audience::Student) | (Role::Assigner, Audience::Assigner) => {
            RouteDecision::Allow
        }
        (Role::Student, Audience::Assigner) => {
            if route == Route::AssignerProfile {
                RouteDecision::Redirect(Route::StudentProfile)
            } else {
                RouteDecision::Redirect(Route::Home)
            }
        }
        (Role::Assigner, Audience::Student) => {
            if route == Route::StudentProfile {
                RouteDecision::Redirect(Route::AssignerProfile)
            } else {
                RouteDecision::Redirect(Route::AssignerDashboard)
            }
        }
    }
}
