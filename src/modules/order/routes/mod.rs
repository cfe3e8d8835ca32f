pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use super::repository::Order;
use crate::{
    types::Context,
    utils::{fallback::method_not_allowed, pipeline::Pipeline},
};
use axum::routing::{get, Router};
use std::sync::Arc;

pub struct Pipelines {
    pub list: Pipeline<Order, list::types::response::Success>,
    pub create: Pipeline<Order, create::types::response::Success>,
    pub read: Pipeline<Order, get::types::response::Success>,
    pub update: Pipeline<Order, update::types::response::Success>,
    pub delete: Pipeline<Order, delete::types::response::Success>,
}

impl Pipelines {
    pub fn new() -> Self {
        Self {
            list: list::service::pipeline(),
            create: create::service::pipeline(),
            read: get::service::pipeline(),
            update: update::service::pipeline(),
            delete: delete::service::pipeline(),
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
            "/:orderId",
            get(get::handler::handler)
                .put(update::handler::handler)
                .delete(delete::handler::handler)
                .fallback(method_not_allowed),
        )
}
