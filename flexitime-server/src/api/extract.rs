//! Request extractors

use std::collections::HashMap;

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::{HeaderMap, header},
};
use serde_json::{Map, Value};

use crate::utils::AppError;

/// Request body as a JSON value, read from a JSON or URL-encoded form body
///
/// Form fields arrive as strings. A JSON body must be an object or an array;
/// scalars are rejected like unparsable JSON, with [`AppError::Invalid`]
/// (400, empty body), before handler logic runs. So are missing or foreign
/// content types and unreadable bodies.
#[derive(Debug)]
pub struct Payload(pub Value);

impl<S: Send + Sync> FromRequest<S> for Payload {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(req.headers()) {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state).await?;
            let object: Map<String, Value> = fields
                .into_iter()
                .map(|(key, value)| (key, Value::String(value)))
                .collect();
            return Ok(Self(Value::Object(object)));
        }

        let Json(value) = Json::<Value>::from_request(req, state).await?;
        match value {
            Value::Object(_) | Value::Array(_) => Ok(Self(value)),
            other => Err(AppError::invalid(format!(
                "Body must be a JSON object or array, got {other}"
            ))),
        }
    }
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| {
            value
                .to_ascii_lowercase()
                .starts_with("application/x-www-form-urlencoded")
        })
}
