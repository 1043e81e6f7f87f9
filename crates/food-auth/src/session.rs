//! Session state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AuthError, Identity, LoginForm};

/// Session identifier, used to correlate log lines for one running session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a new random session ID.
    pub fn generate() -> Self {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
        use rand::Rng;

        let bytes: [u8; 12] = rand::thread_rng().gen();
        Self(format!("sess_{}", URL_SAFE_NO_PAD.encode(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who the session belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(tag = "state", content = "identity", rename_all = "snake_case")]
pub enum SessionState {
    /// Nobody has logged in.
    #[default]
    Anonymous,
    /// Logged in with the given identity.
    Authenticated(Identity),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, SessionState::Anonymous)
    }

    /// Identity if authenticated.
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            SessionState::Authenticated(identity) => Some(identity),
            SessionState::Anonymous => None,
        }
    }
}

/// Holder of the single identity of a running session.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    id: SessionId,
    state: SessionState,
    created_at: DateTime<Utc>,
    last_activity_at: DateTime<Utc>,
}

impl Session {
    /// Start an anonymous session.
    pub fn anonymous() -> Self {
        Self::with_id(SessionId::generate())
    }

    /// Start an anonymous session with a known ID.
    pub fn with_id(id: SessionId) -> Self {
        let now = Utc::now();
        Self {
            id,
            state: SessionState::Anonymous,
            created_at: now,
            last_activity_at: now,
        }
    }

    /// Log in with an email.
    ///
    /// `None` and `""` are rejected; anything else is accepted. Logging in
    /// again replaces the current identity.
    pub fn login(&mut self, email: Option<&str>) -> Result<Identity, AuthError> {
        let identity = Identity::new(email.unwrap_or_default())?;
        self.state = SessionState::Authenticated(identity.clone());
        self.touch();
        Ok(identity)
    }

    /// Log in from a submitted form. The password is ignored.
    pub fn login_form(&mut self, form: &LoginForm) -> Result<Identity, AuthError> {
        self.login(form.email.as_deref())
    }

    /// Return to anonymous, yielding the identity that was logged in.
    pub fn logout(&mut self) -> Option<Identity> {
        let previous = std::mem::take(&mut self.state);
        self.touch();
        match previous {
            SessionState::Authenticated(identity) => Some(identity),
            SessionState::Anonymous => None,
        }
    }

    /// Current state.
    pub fn current(&self) -> &SessionState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.state.identity()
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_activity_at(&self) -> DateTime<Utc> {
        self.last_activity_at
    }

    fn touch(&mut self) {
        self.last_activity_at = Utc::now();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::anonymous()
    }
}
