use super::repository::{Order, OrderStatus};
use crate::utils::{
    error::Error,
    guards::display_value,
    pipeline::Exchange,
};
use serde_json::Value;

pub fn dishes_property_is_valid(exchange: &mut Exchange<'_, Order>) -> Result<(), Error> {
    match exchange.body.field("dishes") {
        Some(Value::Array(dishes)) if !dishes.is_empty() => Ok(()),
        _ => Err(Error::bad_request("Order must include at least one dish")),
    }
}

/// Every line item needs a numeric quantity above zero. Stops at the first offender.
pub fn quantity_property_is_valid(exchange: &mut Exchange<'_, Order>) -> Result<(), Error> {
    let dishes = match exchange.body.field("dishes") {
        Some(Value::Array(dishes)) => dishes,
        _ => return Ok(()),
    };

    for dish in dishes {
        let is_valid = match dish.get("quantity") {
            Some(Value::Number(quantity)) => quantity.as_f64().is_some_and(|quantity| quantity > 0.0),
            _ => false,
        };

        if !is_valid {
            return Err(Error::bad_request(format!(
                "dish {} must have a quantity that is an integer greater than 0",
                display_value(dish.get("id"))
            )));
        }
    }

    Ok(())
}

/// A `delivered` status is refused outright; anything else must be one of the statuses
/// an update may assign.
pub fn status_property_is_valid(exchange: &mut Exchange<'_, Order>) -> Result<(), Error> {
    let status = exchange
        .body
        .field("status")
        .and_then(Value::as_str)
        .map(str::parse::<OrderStatus>);

    match status {
        Some(Ok(OrderStatus::Delivered)) => {
            Err(Error::bad_request("A delivered order cannot be changed"))
        }
        Some(Ok(status)) if status.is_assignable() => Ok(()),
        _ => Err(Error::bad_request(
            "Order must have a status of pending, preparing, out-for-delivery, delivered",
        )),
    }
}

pub fn can_order_be_deleted(exchange: &mut Exchange<'_, Order>) -> Result<(), Error> {
    if exchange.located()?.is_pending() {
        return Ok(());
    }

    Err(Error::bad_request(
        "An order cannot be deleted unless it is pending.",
    ))
}
