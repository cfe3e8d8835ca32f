use super::error::Error;
use axum::{extract::OriginalUri, http::Method};

pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> Error {
    Error::method_not_allowed(format!("{} not allowed for {}", method, uri))
}

pub async fn not_found(OriginalUri(uri): OriginalUri) -> Error {
    Error::not_found(format!("Path not found: {}", uri))
}
