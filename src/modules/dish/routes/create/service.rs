use super::types::{request, response};
use crate::{
    modules::dish::{
        guards,
        repository::{self, CreateDishPayload, Dish},
    },
    types::Context,
    utils::{
        error::Error,
        guards::body_data_has,
        pipeline::{self, Exchange, Pipeline},
    },
};
use std::sync::Arc;

fn create(exchange: &mut Exchange<'_, Dish>) -> Result<response::Success, Error> {
    let payload = exchange.body.parse::<Dish, CreateDishPayload>()?;
    let id = exchange.ids.next_id();
    let dish = repository::create(exchange.records, id, payload);

    tracing::info!("Created dish {}", dish.id);

    Ok(response::Success::DishCreated(dish))
}

pub fn pipeline() -> Pipeline<Dish, response::Success> {
    pipeline::builder::<Dish>()
        .guard(body_data_has("name"))
        .guard(body_data_has("description"))
        .guard(body_data_has("price"))
        .guard(body_data_has("image_url"))
        .guard(guards::price_property_is_valid)
        .then(create)
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut records = ctx.dish.store.lock().await;
    let mut exchange = Exchange::new(&mut *records, ctx.ids.as_ref()).with_body(payload.body);

    ctx.dish.pipelines.create.run(&mut exchange)
}
