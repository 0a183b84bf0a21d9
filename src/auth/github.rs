use super::provider::IdentityProvider;
use super::types::{User, GITHUB_PROVIDER};
use crate::error::FilmError;

use reqwest::header::{ACCEPT, USER_AGENT};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_GITHUB_API: &str = "https://api.github.com";
pub const DEFAULT_SIGN_IN_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct GithubUser {
    id: u64,
    login: String,
    name: Option<String>,
    email: Option<String>,
}

impl From<GithubUser> for User {
    fn from(account: GithubUser) -> Self {
        User {
            uid: account.id.to_string(),
            display_name: account.name.or(Some(account.login)),
            email: account.email,
            providers: vec![GITHUB_PROVIDER.to_string()],
        }
    }
}

/// Signs in with a GitHub access token by resolving the account it belongs to.
pub struct GithubIdentityProvider {
    http: reqwest::Client,
    api_base: String,
    token: String,
}

impl GithubIdentityProvider {
    pub fn new(token: &str) -> Result<Self, FilmError> {
        Self::with_timeout(token, DEFAULT_SIGN_IN_TIMEOUT)
    }

    pub fn with_timeout(token: &str, timeout: Duration) -> Result<Self, FilmError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            api_base: DEFAULT_GITHUB_API.to_string(),
            token: token.to_string(),
        })
    }

    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }
}

impl IdentityProvider for GithubIdentityProvider {
    async fn sign_in(&self) -> Result<User, FilmError> {
        let response = self
            .http
            .get(format!("{}/user", self.api_base))
            .bearer_auth(&self.token)
            .header(USER_AGENT, "film-finder")
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FilmError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        let account: GithubUser = serde_json::from_slice(&bytes)?;

        Ok(account.into())
    }

    /// Tokens are issued outside this application, so there is nothing to revoke.
    async fn sign_out(&self) -> Result<(), FilmError> {
        Ok(())
    }
}
