use super::types::{request, response};
use crate::{
    modules::order::repository::Order,
    types::Context,
    utils::{
        error::Error,
        guards::record_exists,
        pipeline::{self, Exchange, Pipeline},
    },
};
use std::sync::Arc;

fn read(exchange: &mut Exchange<'_, Order>) -> Result<response::Success, Error> {
    exchange.located().cloned().map(response::Success::Order)
}

pub fn pipeline() -> Pipeline<Order, response::Success> {
    pipeline::builder::<Order>()
        .guard(record_exists::<Order>)
        .then(read)
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut records = ctx.order.store.lock().await;
    let mut exchange = Exchange::new(&mut *records, ctx.ids.as_ref()).with_route_id(payload.id);

    ctx.order.pipelines.read.run(&mut exchange)
}
