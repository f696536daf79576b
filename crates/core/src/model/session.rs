/// Unnamespaced key holding the signed-in user's email.
pub const CURRENT_USER_KEY: &str = "currentUserEmail";
/// Unnamespaced key holding the signed-in user's display name.
pub const USER_NAME_KEY: &str = "userName";
/// Per-user key suffix of the stamp record.
pub const STAMPS_KEY: &str = "collectedStamps";
/// Per-user key suffix of the loyalty points value.
pub const POINTS_KEY: &str = "userPoints";
/// Display name that marks a demonstration account.
pub const DEMO_DISPLAY_NAME: &str = "Demo User";

/// Who is looking at the screen.
///
/// Built once per reload from the session keys and passed explicitly to
/// readers and writers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    user_email: Option<String>,
    display_name: Option<String>,
}

impl SessionContext {
    /// Blank values are treated as missing.
    #[must_use]
    pub fn new(user_email: Option<String>, display_name: Option<String>) -> Self {
        Self {
            user_email: user_email.filter(|email| !email.is_empty()),
            display_name: display_name.filter(|name| !name.is_empty()),
        }
    }

    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn user_email(&self) -> Option<&str> {
        self.user_email.as_deref()
    }

    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Demo accounts never show progress.
    #[must_use]
    pub fn is_restricted(&self) -> bool {
        self.display_name.as_deref() == Some(DEMO_DISPLAY_NAME)
    }

    /// `"<email>_<key>"`, or the bare key when nobody is signed in.
    #[must_use]
    pub fn namespaced_key(&self, key: &str) -> String {
        match self.user_email.as_deref() {
            Some(email) => format!("{email}_{key}"),
            None => key.to_string(),
        }
    }

    #[must_use]
    pub fn stamps_key(&self) -> String {
        self.namespaced_key(STAMPS_KEY)
    }

    #[must_use]
    pub fn points_key(&self) -> String {
        self.namespaced_key(POINTS_KEY)
    }
}
