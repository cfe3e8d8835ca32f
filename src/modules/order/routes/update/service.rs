use super::types::{request, response};
use crate::{
    modules::order::{
        guards,
        repository::{self, Order, UpdateOrderPayload},
    },
    types::Context,
    utils::{
        error::Error,
        guards::{body_data_has, id_matches_route, record_exists},
        pipeline::{self, Exchange, Pipeline},
    },
};
use std::sync::Arc;

fn update(exchange: &mut Exchange<'_, Order>) -> Result<response::Success, Error> {
    let payload = exchange.body.parse::<Order, UpdateOrderPayload>()?;
    let status = payload.status;
    let order = repository::update(exchange.located_mut()?, payload);

    tracing::info!("Updated order {} to status {}", order.id, status);

    Ok(response::Success::OrderUpdated(order))
}

pub fn pipeline() -> Pipeline<Order, response::Success> {
    pipeline::builder::<Order>()
        .guard(record_exists::<Order>)
        .guard(body_data_has("deliverTo"))
        .guard(body_data_has("mobileNumber"))
        .guard(body_data_has("dishes"))
        .guard(guards::dishes_property_is_valid)
        .guard(guards::quantity_property_is_valid)
        .guard(guards::status_property_is_valid)
        .guard(id_matches_route::<Order>)
        .then(update)
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut records = ctx.order.store.lock().await;
    let mut exchange = Exchange::new(&mut *records, ctx.ids.as_ref())
        .with_route_id(payload.id)
        .with_body(payload.body);

    ctx.order.pipelines.update.run(&mut exchange)
}
