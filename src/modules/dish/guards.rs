use super::repository::Dish;
use crate::utils::{error::Error, pipeline::Exchange};
use serde_json::Value;

/// The price must be a JSON number above zero. Fractional prices are accepted.
pub fn price_property_is_valid(exchange: &mut Exchange<'_, Dish>) -> Result<(), Error> {
    match exchange.body.field("price") {
        Some(Value::Number(price)) if price.as_f64().is_some_and(|price| price > 0.0) => Ok(()),
        _ => Err(Error::bad_request(
            "Dish must have a price that is an integer greater than 0",
        )),
    }
}
