//! Request extractors.

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor whose rejection is an [`AppError`].
///
/// Axum's stock `Json` rejects malformed or mismatched bodies with a
/// plain-text response; routing the rejection through `AppError` keeps
/// every schema failure on the same structured JSON error shape as
/// field-level validation.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
