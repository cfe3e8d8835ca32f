use super::types::{request, response};
use crate::{
    modules::order::{
        guards,
        repository::{self, CreateOrderPayload, Order},
    },
    types::Context,
    utils::{
        error::Error,
        guards::body_data_has,
        pipeline::{self, Exchange, Pipeline},
    },
};
use std::sync::Arc;

fn create(exchange: &mut Exchange<'_, Order>) -> Result<response::Success, Error> {
    let payload = exchange.body.parse::<Order, CreateOrderPayload>()?;
    let id = exchange.ids.next_id();
    let order = repository::create(exchange.records, id, payload);

    tracing::info!("Created order {}", order.id);

    Ok(response::Success::OrderCreated(order))
}

pub fn pipeline() -> Pipeline<Order, response::Success> {
    pipeline::builder::<Order>()
        .guard(body_data_has("deliverTo"))
        .guard(body_data_has("mobileNumber"))
        .guard(body_data_has("dishes"))
        .guard(guards::dishes_property_is_valid)
        .guard(guards::quantity_property_is_valid)
        .then(create)
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut records = ctx.order.store.lock().await;
    let mut exchange = Exchange::new(&mut *records, ctx.ids.as_ref()).with_body(payload.body);

    ctx.order.pipelines.create.run(&mut exchange)
}
