use super::provider::IdentityProvider;
use super::types::User;
use crate::error::FilmError;

use std::sync::Arc;
use tokio::sync::watch;

/// Shared authentication state.
///
/// Cloning is cheap and every clone observes the same user. The state lives as
/// long as at least one clone does.
#[derive(Clone)]
pub struct AuthSession {
    current: Arc<watch::Sender<Option<User>>>,
    required_provider: Option<Arc<str>>,
}

impl AuthSession {
    /// A session that accepts users from any provider.
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);

        Self {
            current: Arc::new(sender),
            required_provider: None,
        }
    }

    /// A session that only accepts users linked to `provider_id`.
    pub fn requiring_provider(provider_id: &str) -> Self {
        Self {
            required_provider: Some(Arc::from(provider_id)),
            ..Self::new()
        }
    }

    pub fn current_user(&self) -> Option<User> {
        self.current.borrow().clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.current.borrow().is_some()
    }

    pub async fn sign_in<P: IdentityProvider>(&self, provider: &P) -> Result<User, FilmError> {
        let user = provider.sign_in().await.map_err(|e| {
            tracing::error!("Error signing in: {}", e);
            e
        })?;

        if let Some(required) = self.required_provider.as_deref() {
            if !user.is_linked_to(required) {
                tracing::warn!("Rejecting user {}: no {} identity", user.uid, required);
                self.current.send_replace(None);
                return Err(FilmError::ProviderNotLinked(required.to_string()));
            }
        }

        tracing::info!("Signed in as: {}", user.display_name_or(&user.uid));
        self.current.send_replace(Some(user.clone()));

        Ok(user)
    }

    pub async fn sign_out<P: IdentityProvider>(&self, provider: &P) -> Result<(), FilmError> {
        provider.sign_out().await.map_err(|e| {
            tracing::error!("Error signing out: {}", e);
            e
        })?;

        self.current.send_replace(None);
        tracing::info!("Signed out successfully");

        Ok(())
    }

    /// Starts observing the session. The subscription sees the current user
    /// immediately and every change after that.
    pub fn subscribe(&self) -> AuthSubscription {
        AuthSubscription {
            receiver: self.current.subscribe(),
        }
    }

    pub(crate) fn subscriber_count(&self) -> usize {
        self.current.receiver_count()
    }
}

impl Default for AuthSession {
    fn default() -> Self {
        Self::new()
    }
}

pub struct AuthSubscription {
    receiver: watch::Receiver<Option<User>>,
}

impl AuthSubscription {
    pub fn current(&self) -> Option<User> {
        self.receiver.borrow().clone()
    }

    /// Waits for the next sign-in or sign-out.
    ///
    /// Returns `None` once every clone of the session is gone.
    pub async fn changed(&mut self) -> Option<Option<User>> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }

    pub fn unsubscribe(self) {}
}
