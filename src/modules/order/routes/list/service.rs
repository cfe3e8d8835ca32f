use super::types::{request, response};
use crate::{
    modules::order::repository::{self, Order},
    types::Context,
    utils::{
        error::Error,
        pipeline::{self, Exchange, Pipeline},
    },
};
use std::sync::Arc;

fn list(exchange: &mut Exchange<'_, Order>) -> Result<response::Success, Error> {
    Ok(response::Success::Orders(repository::find_many(
        exchange.records.as_slice(),
        exchange.route_id.as_deref(),
    )))
}

pub fn pipeline() -> Pipeline<Order, response::Success> {
    pipeline::builder::<Order>().then(list)
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut records = ctx.order.store.lock().await;
    let mut exchange = Exchange::new(&mut *records, ctx.ids.as_ref());
    exchange.route_id = payload.id;

    ctx.order.pipelines.list.run(&mut exchange)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        modules::order::repository::OrderStatus,
        types::{AppContext, AppEnvironment},
        utils::{id::UlidGenerator, seed::Seed},
    };

    fn order(id: &str) -> Order {
        Order {
            id: id.to_string(),
            deliver_to: String::from("Rute 6 Balboa, Panama"),
            mobile_number: String::from("(507) 555-0101"),
            status: Some(OrderStatus::Pending),
            dishes: vec![],
        }
    }

    fn context() -> Arc<Context> {
        let app = AppContext {
            host: String::from("127.0.0.1"),
            environment: AppEnvironment::Development,
            port: 0,
            url: String::from("http://127.0.0.1"),
        };
        let seed = Seed {
            dishes: vec![],
            orders: vec![order("a"), order("b")],
        };

        Arc::new(Context::new(app, seed, Arc::new(UlidGenerator)))
    }

    async fn listed_ids(id: Option<&str>) -> Vec<String> {
        let payload = request::Payload {
            id: id.map(String::from),
        };

        match service(context(), payload).await {
            Ok(response::Success::Orders(records)) => {
                records.into_iter().map(|record| record.id).collect()
            }
            Err(err) => panic!("list failed: {err}"),
        }
    }

    #[tokio::test]
    async fn lists_everything_without_a_route_id() {
        assert_eq!(listed_ids(None).await, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn route_id_narrows_the_list() {
        assert_eq!(listed_ids(Some("b")).await, vec!["b"]);
        assert!(listed_ids(Some("c")).await.is_empty());
    }
}
