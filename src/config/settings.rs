use std::env;
use std::fmt;

use crate::errors::{AdapterError, Result};

pub const ENV_JIRA_URL: &str = "JIRA_URL";
pub const ENV_JIRA_USER: &str = "JIRA_USER";
pub const ENV_JIRA_API_TOKEN: &str = "JIRA_API_TOKEN";
pub const ENV_JIRA_PROJECT_KEY: &str = "JIRA_PROJECT_KEY";

/// Tracker connection settings, read once at process start and never mutated.
#[derive(Clone)]
pub struct Credentials {
    pub base_url: String,
    pub user: String,
    pub api_token: String,
    pub project_key: String,
}

impl Credentials {
    pub fn new(base_url: String, user: String, api_token: String, project_key: String) -> Self {
        Self {
            base_url,
            user,
            api_token,
            project_key,
        }
    }

    /// Loads all four settings from the environment. A missing or empty
    /// variable is an error: sending unauthenticated or mis-keyed requests
    /// is worse than refusing to start.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            base_url: require(ENV_JIRA_URL)?,
            user: require(ENV_JIRA_USER)?,
            api_token: require(ENV_JIRA_API_TOKEN)?,
            project_key: require(ENV_JIRA_PROJECT_KEY)?,
        })
    }
}

fn require(name: &'static str) -> Result<String> {
    env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or(AdapterError::MissingConfig(name))
}

// The API token must never reach the log stream, so Debug is written by hand.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("base_url", &self.base_url)
            .field("user", &self.user)
            .field("api_token", &"<redacted>")
            .field("project_key", &self.project_key)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clear_all() {
        for name in [
            ENV_JIRA_URL,
            ENV_JIRA_USER,
            ENV_JIRA_API_TOKEN,
            ENV_JIRA_PROJECT_KEY,
        ] {
            env::remove_var(name);
        }
    }

    // Environment mutation is process-global, so every from_env case lives in
    // one test to keep the harness from racing.
    #[test]
    fn from_env_requires_every_variable() {
        clear_all();
        assert!(matches!(
            Credentials::from_env(),
            Err(AdapterError::MissingConfig(ENV_JIRA_URL))
        ));

        env::set_var(ENV_JIRA_URL, "https://jira.example.com");
        env::set_var(ENV_JIRA_USER, "bot@example.com");
        env::set_var(ENV_JIRA_API_TOKEN, "secret-token");
        env::set_var(ENV_JIRA_PROJECT_KEY, "PROJ");

        let credentials = Credentials::from_env().unwrap();
        assert_eq!(credentials.base_url, "https://jira.example.com");
        assert_eq!(credentials.project_key, "PROJ");

        // An empty value is as bad as a missing one.
        env::set_var(ENV_JIRA_API_TOKEN, "");
        assert!(matches!(
            Credentials::from_env(),
            Err(AdapterError::MissingConfig(ENV_JIRA_API_TOKEN))
        ));

        clear_all();
    }

    #[test]
    fn debug_output_redacts_the_token() {
        let credentials = Credentials::new(
            "https://jira.example.com".to_string(),
            "bot@example.com".to_string(),
            "super-secret".to_string(),
            "PROJ".to_string(),
        );

        let rendered = format!("{:?}", credentials);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
