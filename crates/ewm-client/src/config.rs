//! Client Configuration
//!
//! The console is shipped as a static bundle, so settings are baked in at
//! build time through environment variables.

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_ACTING_USER_ID: i64 = 1;

/// Where the backend lives and on whose behalf user-scoped calls are made
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Backend origin without trailing slash
    pub base_url: String,
    /// Default initiator for newly created events
    pub acting_user_id: i64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            acting_user_id: DEFAULT_ACTING_USER_ID,
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, acting_user_id: i64) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            acting_user_id,
        }
    }

    /// Read `EWM_API_BASE_URL` and `EWM_ACTING_USER_ID` captured at compile time
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("EWM_API_BASE_URL"), option_env!("EWM_ACTING_USER_ID"))
    }

    /// Build from raw optional values, falling back to defaults for anything
    /// missing or malformed
    pub fn from_values(base_url: Option<&str>, acting_user_id: Option<&str>) -> Self {
        let base_url = match base_url.map(str::trim) {
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => url,
            Some("") | None => DEFAULT_BASE_URL,
            Some(other) => {
                tracing::warn!(value = other, "ignoring EWM_API_BASE_URL without http(s) scheme");
                DEFAULT_BASE_URL
            }
        };

        let acting_user_id = match acting_user_id.map(str::trim) {
            Some("") | None => DEFAULT_ACTING_USER_ID,
            Some(raw) => match raw.parse::<i64>() {
                Ok(id) if id > 0 => id,
                _ => {
                    tracing::warn!(value = raw, "ignoring invalid EWM_ACTING_USER_ID");
                    DEFAULT_ACTING_USER_ID
                }
            },
        };

        Self::new(base_url, acting_user_id)
    }

    /// Absolute URL for an API path such as `/admin/users`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
