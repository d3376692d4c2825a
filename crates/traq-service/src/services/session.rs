//! Session service
//!
//! Login and session gating: the surrounding UI shows the main screen only
//! while a session state reports logged in.

use tracing::{info, instrument, warn};

use traq_core::entities::User;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Snapshot of the authentication state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    /// The authenticated user, if any
    pub current_user: Option<User>,
}

impl SessionState {
    /// Check if a user is authenticated
    #[inline]
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }
}

/// Session service
pub struct SessionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SessionService<'a> {
    /// Create a new SessionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Probe for an existing session (e.g. a persisted cookie)
    #[instrument(skip(self))]
    pub async fn restore(&self) -> ServiceResult<SessionState> {
        let current_user = self.ctx.session_provider().current_user().await?;

        if current_user.is_none() {
            info!("No existing session");
        }

        Ok(SessionState { current_user })
    }

    /// Authenticate and return the resulting session state
    #[instrument(skip(self, password))]
    pub async fn login(&self, name: &str, password: &str) -> ServiceResult<SessionState> {
        if name.trim().is_empty() || password.is_empty() {
            return Err(ServiceError::validation("name and password are required"));
        }

        self.ctx.session_provider().login(name, password).await?;
        let state = self.restore().await?;

        if state.is_logged_in() {
            info!(user = name, "Logged in");
        } else {
            warn!(user = name, "Login accepted but no session established");
        }

        Ok(state)
    }

    /// Fetch the full user snapshot shared by message rendering
    ///
    /// Suspended users are included so authors of old messages still
    /// resolve.
    #[instrument(skip(self))]
    pub async fn users_snapshot(&self) -> ServiceResult<Vec<User>> {
        let users = self.ctx.user_provider().fetch_users(true).await?;
        Ok(users)
    }
}
