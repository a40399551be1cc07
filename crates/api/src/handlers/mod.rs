//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the [`Store`](roomreel_store::Store) capability in
//! `AppState` and map errors via [`AppError`](crate::error::AppError).

pub mod challenges;
pub mod rewards;
pub mod submissions;
