use serde::{Deserialize, Serialize};

pub const GITHUB_PROVIDER: &str = "github.com";

/// An authenticated user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub uid: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    /// Identifiers of the linked provider identities, e.g. `github.com`.
    #[serde(default)]
    pub providers: Vec<String>,
}

impl User {
    pub fn is_linked_to(&self, provider_id: &str) -> bool {
        self.providers.iter().any(|p| p == provider_id)
    }

    pub fn display_name_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(fallback)
    }
}
