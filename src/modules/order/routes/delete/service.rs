use super::types::{request, response};
use crate::{
    modules::order::{
        guards,
        repository::{self, Order},
    },
    types::Context,
    utils::{
        error::Error,
        guards::record_exists,
        pipeline::{self, Exchange, Pipeline},
    },
};
use std::sync::Arc;

fn destroy(exchange: &mut Exchange<'_, Order>) -> Result<response::Success, Error> {
    let id = exchange.located()?.id.clone();

    repository::delete_by_id(exchange.records, &id)
        .ok_or_else(|| Error::internal(format!("Order vanished before delete: {}", id)))?;

    tracing::info!("Deleted order {}", id);

    Ok(response::Success::OrderDeleted)
}

pub fn pipeline() -> Pipeline<Order, response::Success> {
    pipeline::builder::<Order>()
        .guard(record_exists::<Order>)
        .guard(guards::can_order_be_deleted)
        .then(destroy)
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut records = ctx.order.store.lock().await;
    let mut exchange = Exchange::new(&mut *records, ctx.ids.as_ref()).with_route_id(payload.id);

    ctx.order.pipelines.delete.run(&mut exchange)
}
