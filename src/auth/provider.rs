use super::types::User;
use crate::error::FilmError;

use std::future::Future;

/// A federated identity provider.
pub trait IdentityProvider: Send + Sync {
    fn sign_in(&self) -> impl Future<Output = Result<User, FilmError>> + Send;

    fn sign_out(&self) -> impl Future<Output = Result<(), FilmError>> + Send;
}
