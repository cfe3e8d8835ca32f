use super::{service::service, types::request};
use crate::{
    types::Context,
    utils::{error::Error, pipeline::Body},
};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use axum_extra::extract::WithRejection;
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    Path(id): Path<String>,
    WithRejection(body, _): WithRejection<Body, Error>,
) -> impl IntoResponse {
    service(ctx, request::Payload { id, body }).await
}
