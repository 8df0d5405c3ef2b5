//! Validating JSON body extractor.

use adsmith_core::error::describe_validation_errors;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// A JSON body that has been deserialized and passed [`Validate`].
///
/// Malformed JSON, a wrong content type, or a failed rule all reject with
/// [`AppError::BadRequest`], so handlers never see an invalid body.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| AppError::BadRequest(describe_validation_errors(&errors)))?;

        Ok(ValidatedJson(value))
    }
}
