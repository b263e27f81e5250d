//! Extractors whose rejections use the JSON error envelope instead of axum's plain-text bodies.

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::{header, request::Parts, HeaderValue},
    Form, Json,
};
use serde::{de::DeserializeOwned, Deserialize};

use crate::errors::ApiError;

pub const NON_NUMERIC_ID: &str = "id must be a number";

/// `Json<T>` that reports malformed or incomplete bodies as 400.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        Ok(ApiJson(value))
    }
}

/// Numeric `{id}` path segment.
pub struct IdPath(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::BadRequest(NON_NUMERIC_ID.into()))?;
        Ok(IdPath(id))
    }
}

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Media types are case-insensitive; parameters such as `charset` are ignored.
fn is_form_urlencoded(content_type: &str) -> bool {
    let media_type = content_type.split(';').next().unwrap_or_default().trim();
    media_type.eq_ignore_ascii_case(FORM_URLENCODED)
}

#[derive(Debug, Default, Deserialize)]
struct IdsForm {
    #[serde(default)]
    ids: Option<String>,
}

/// Raw `ids` parameter of a bulk delete.
///
/// Read from an `application/x-www-form-urlencoded` body, falling back to the
/// query string. Absent everywhere yields an empty string, which the id-list
/// parser rejects as blank.
pub struct IdsParam(pub String);

#[async_trait]
impl<S> FromRequest<S> for IdsParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(mut req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let from_query = Query::<IdsForm>::try_from_uri(req.uri())
            .ok()
            .and_then(|Query(q)| q.ids);

        let is_form = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(is_form_urlencoded);

        if is_form {
            // `Form` matches the header case-sensitively
            req.headers_mut()
                .insert(header::CONTENT_TYPE, HeaderValue::from_static(FORM_URLENCODED));
            let Form(form) = Form::<IdsForm>::from_request(req, state)
                .await
                .map_err(|e| ApiError::BadRequest(e.body_text()))?;
            if let Some(ids) = form.ids {
                return Ok(IdsParam(ids));
            }
        }
        Ok(IdsParam(from_query.unwrap_or_default()))
    }
}
