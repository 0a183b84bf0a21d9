//! Authentication Module
//!
//! Federated sign-in and the shared record of who is signed in.
//!
//! ## Overview
//! Token issuance and verification belong to the identity provider. This module
//! keeps the result: an `AuthSession` is the single source of truth for the
//! current user, cloned into every component that needs it. Components that
//! react to sign-in/sign-out hold an `AuthSubscription` for as long as they
//! live and drop it on teardown.
//!
//! ## Submodules
//! - **`types`**: `User` and provider identifiers.
//! - **`provider`**: the `IdentityProvider` contract.
//! - **`github`**: GitHub token sign-in.
//! - **`session`**: `AuthSession` and `AuthSubscription`.

pub mod github;
pub mod provider;
pub mod session;
pub mod types;
