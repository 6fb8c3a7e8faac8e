//! Session gating and navigation decisions.
//!
//! The gate never blocks rendering: a page's content may paint briefly
//! before the redirect lands. That pre-check flicker is a deliberate product
//! choice carried over from the original flow, not a defect.

use crate::notify::{NotificationSink, Severity};
use zipplans_api_client::{Gateway, Method};

/// Pages the client can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    Plans,
    ZipCodes,
    Prices,
}

/// Whether a page requires a valid session or requires the lack of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageScope {
    Public,
    Private,
}

/// Two-state gate (`unchecked` / `checked`) run once per page activation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionGate {
    checked: bool,
}

impl SessionGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn checked(&self) -> bool {
        self.checked
    }

    /// Validates the session against the gateway, at most once. Returns the
    /// redirect the shell should perform, if any: private pages bounce to
    /// the landing page without a session, the landing page bounces to the
    /// plans page with one.
    pub async fn check(&mut self, gateway: &dyn Gateway, scope: PageScope) -> Option<Route> {
        if self.checked {
            return None;
        }
        self.checked = true;

        let response = gateway.send(Method::Get, "/auth", None).await;
        let session_valid = response.is(200);

        match scope {
            PageScope::Private if !session_valid => Some(Route::Landing),
            PageScope::Public if session_valid => Some(Route::Plans),
            _ => None,
        }
    }
}

/// Ends the session and redirects to the landing page. The server result is
/// not inspected; the session cookie is gone either way.
pub async fn log_out(gateway: &dyn Gateway, notifier: &dyn NotificationSink) -> Route {
    gateway.send(Method::Get, "/google/logout", None).await;
    notifier.notify("Logged out", "Logged out successfully", Severity::Success);
    Route::Landing
}

/// External entry point for the OAuth login redirect; the browser navigates
/// here directly rather than through the gateway.
#[must_use]
pub fn login_url(base_url: &str) -> String {
    format!("{}/google", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_url_joins_the_oauth_path() {
        assert_eq!(
            login_url("https://api.zipplans.com/"),
            "https://api.zipplans.com/google"
        );
    }
}
