//! Route gating policy.
//!
//! Boundary contract around authentication and onboarding: unauthenticated
//! visitors are kept off protected pages, signed-in users who have not
//! finished onboarding are sent to the wizard, and signed-in users are kept
//! off the auth pages. Pure decision logic; performing the redirect belongs
//! to the web layer.

use serde::Serialize;

use crate::identity::UserRecord;

/// Pages that require a session.
pub const PROTECTED_ROUTES: &[&str] = &["/forum", "/kursus"];

/// Sign-in and registration pages.
pub const AUTH_ROUTES: &[&str] = &["/masuk", "/daftar"];

/// Job listings, where signed-in users land.
pub const LANDING_ROUTE: &str = "/lowongan";

pub const SIGN_IN_ROUTE: &str = "/masuk";
pub const ONBOARDING_ROUTE: &str = "/onboarding";

/// Route prefixes the policy applies to; everything else passes through
/// untouched (the onboarding page itself is deliberately not matched).
const MATCHED_ROUTES: &[&str] = &["/lowongan", "/forum", "/kursus", "/masuk", "/daftar"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteDecision {
    Allow,
    Redirect(&'static str),
}

/// Decide what to do with a request for `path` given the current session.
///
/// Rules in order: onboarded users at `/` go to the job listing;
/// unauthenticated requests for protected pages go to sign-in; signed-in
/// users on auth pages go to the job listing; signed-in users who are not
/// onboarded go to the wizard. The wizard's `Done` transition flips the
/// onboarded flag before any redirect, so a finished user is never bounced
/// back here.
pub fn decide(user: Option<&UserRecord>, path: &str) -> RouteDecision {
    let matched = path == "/" || MATCHED_ROUTES.iter().any(|route| path.starts_with(route));
    if !matched {
        return RouteDecision::Allow;
    }

    if let Some(user) = user {
        if path == "/" && user.onboarded {
            return RouteDecision::Redirect(LANDING_ROUTE);
        }
        if AUTH_ROUTES.iter().any(|route| path.starts_with(route)) {
            return RouteDecision::Redirect(LANDING_ROUTE);
        }
        if !user.onboarded {
            return RouteDecision::Redirect(ONBOARDING_ROUTE);
        }
        return RouteDecision::Allow;
    }

    if PROTECTED_ROUTES.iter().any(|route| path.starts_with(route)) {
        return RouteDecision::Redirect(SIGN_IN_ROUTE);
    }

    RouteDecision::Allow
}
