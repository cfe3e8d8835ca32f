use super::types::{request, response};
use crate::{
    modules::dish::{
        guards,
        repository::{self, Dish, UpdateDishPayload},
    },
    types::Context,
    utils::{
        error::Error,
        guards::{body_data_has, id_matches_route, record_exists},
        pipeline::{self, Exchange, Pipeline},
    },
};
use std::sync::Arc;

fn update(exchange: &mut Exchange<'_, Dish>) -> Result<response::Success, Error> {
    let payload = exchange.body.parse::<Dish, UpdateDishPayload>()?;
    let dish = repository::update(exchange.located_mut()?, payload);

    tracing::info!("Updated dish {}", dish.id);

    Ok(response::Success::DishUpdated(dish))
}

pub fn pipeline() -> Pipeline<Dish, response::Success> {
    pipeline::builder::<Dish>()
        .guard(record_exists::<Dish>)
        .guard(body_data_has("name"))
        .guard(body_data_has("description"))
        .guard(body_data_has("price"))
        .guard(body_data_has("image_url"))
        .guard(guards::price_property_is_valid)
        .guard(id_matches_route::<Dish>)
        .then(update)
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut records = ctx.dish.store.lock().await;
    let mut exchange = Exchange::new(&mut *records, ctx.ids.as_ref())
        .with_route_id(payload.id)
        .with_body(payload.body);

    ctx.dish.pipelines.update.run(&mut exchange)
}
