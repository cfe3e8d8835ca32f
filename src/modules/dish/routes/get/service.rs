use super::types::{request, response};
use crate::{
    modules::dish::repository::Dish,
    types::Context,
    utils::{
        error::Error,
        guards::record_exists,
        pipeline::{self, Exchange, Pipeline},
    },
};
use std::sync::Arc;

fn read(exchange: &mut Exchange<'_, Dish>) -> Result<response::Success, Error> {
    exchange.located().cloned().map(response::Success::Dish)
}

pub fn pipeline() -> Pipeline<Dish, response::Success> {
    pipeline::builder::<Dish>()
        .guard(record_exists::<Dish>)
        .then(read)
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut records = ctx.dish.store.lock().await;
    let mut exchange = Exchange::new(&mut *records, ctx.ids.as_ref()).with_route_id(payload.id);

    ctx.dish.pipelines.read.run(&mut exchange)
}
