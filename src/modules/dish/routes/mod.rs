pub mod create;
pub mod get;
pub mod list;
pub mod update;

use super::repository::Dish;
use crate::{
    types::Context,
    utils::{fallback::method_not_allowed, pipeline::Pipeline},
};
use axum::routing::{get, Router};
use std::sync::Arc;

/// The dish operations, each composed once when the context is built.
pub struct Pipelines {
    pub list: Pipeline<Dish, list::types::response::Success>,
    pub create: Pipeline<Dish, create::types::response::Success>,
    pub read: Pipeline<Dish, get::types::response::Success>,
    pub update: Pipeline<Dish, update::types::response::Success>,
}

impl Pipelines {
    pub fn new() -> Self {
        Self {
            list: list::service::pipeline(),
            create: create::service::pipeline(),
            read: get::service::pipeline(),
            update: update::service::pipeline(),
        }
    }
}

impl Default for Pipelines {
    fn default() -> Self {
        Self::new()
    }
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route(
            "/",
            get(list::handler::handler)
                .post(create::handler::handler)
                .fallback(method_not_allowed),
        )
        .route(
            "/:dishId",
            get(get::handler::handler)
                .put(update::handler::handler)
                .fallback(method_not_allowed),
        )
}
