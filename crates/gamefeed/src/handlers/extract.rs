//! Request body extraction.
//!
//! Game clients post either JSON or urlencoded forms depending on the
//! platform, so write endpoints accept both.

use axum::{
    extract::{FromRequest, Request},
    http::header,
    Form, Json,
};
use serde::de::DeserializeOwned;

use gamefeed_core::validation::ValidationError;

use super::AppError;

/// A request body decoded from JSON or `application/x-www-form-urlencoded`.
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| ValidationError::MalformedBody(e.body_text()))?;
            Ok(Self(value))
        } else {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| ValidationError::MalformedBody(e.body_text()))?;
            Ok(Self(value))
        }
    }
}
