use axum::extract::{FromRequest, Request};
use axum::http::header;
use axum::{Form, Json};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::AppError;

/// Request body accepted as JSON or as a url-encoded form.
///
/// Any other content type, a missing body, or a JSON body that is not an
/// object yields `T::default()`, so a blank `PUT` is a no-op update and a blank
/// `POST` fails title validation in the store.
#[derive(Debug)]
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mime = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(|v| v.trim().to_ascii_lowercase())
            .unwrap_or_default();

        match mime.as_str() {
            "application/json" => {
                let Json(value) = Json::<Value>::from_request(req, state).await?;
                match value {
                    Value::Object(map) => Ok(Self(serde_json::from_value(Value::Object(map))?)),
                    other => {
                        debug!("ignoring non-object JSON body: {}", other);
                        Ok(Self(T::default()))
                    }
                }
            }
            "application/x-www-form-urlencoded" => {
                let Form(body) = Form::<T>::from_request(req, state).await?;
                Ok(Self(body))
            }
            _ => Ok(Self(T::default())),
        }
    }
}
