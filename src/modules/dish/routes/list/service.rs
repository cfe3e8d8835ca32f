use super::types::{request, response};
use crate::{
    modules::dish::repository::{self, Dish},
    types::Context,
    utils::{
        error::Error,
        pipeline::{self, Exchange, Pipeline},
    },
};
use std::sync::Arc;

fn list(exchange: &mut Exchange<'_, Dish>) -> Result<response::Success, Error> {
    Ok(response::Success::Dishes(repository::find_many(
        exchange.records.as_slice(),
        exchange.route_id.as_deref(),
    )))
}

pub fn pipeline() -> Pipeline<Dish, response::Success> {
    pipeline::builder::<Dish>().then(list)
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut records = ctx.dish.store.lock().await;
    let mut exchange = Exchange::new(&mut *records, ctx.ids.as_ref());
    exchange.route_id = payload.id;

    ctx.dish.pipelines.list.run(&mut exchange)
}
