use super::{service::service, types::request};
use crate::{
    types::Context,
    utils::{error::Error, pipeline::Body},
};
use axum::{
    extract::State,
    response::IntoResponse,
};
use axum_extra::extract::WithRejection;
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    WithRejection(body, _): WithRejection<Body, Error>,
) -> impl IntoResponse {
    service(ctx, request::Payload { body }).await
}
