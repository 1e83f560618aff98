use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::web::{WebError, dto::Validate};

/// JSON body that has already passed [`Validate`]. Rejects with 400 on
/// malformed JSON and on field errors, before any handler code runs.
pub struct Valid<T: Validate>(pub T::Output);

impl<S, T> FromRequest<S> for Valid<T>
where
    S: Send + Sync,
    T: Validate + DeserializeOwned + Send,
    T::Output: Send,
{
    type Rejection = WebError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(raw) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| WebError::resource_malformed(T::resource_type(), e.body_text()))?;

        raw.validate()
            .map(Valid)
            .map_err(|errors| WebError::resource_bad_request(T::resource_type(), errors))
    }
}
