//! Guards shared by every resource.

use super::{
    error::Error,
    pipeline::Exchange,
    store::{position_by_id, Record},
};
use serde_json::Value;

/// Loose truthiness of a JSON value: `null`, `false`, `0` and `""` are falsy, every other
/// value (including empty arrays and objects) is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map(|n| n != 0.0).unwrap_or(true),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Renders a field value for an error message: strings bare, absent values as
/// `undefined`, anything else as JSON.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None => String::from("undefined"),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// Passes when `data[field]` is present and truthy.
pub fn body_data_has<R: Record>(
    field: &'static str,
) -> impl Fn(&mut Exchange<'_, R>) -> Result<(), Error> + Send + Sync + 'static {
    move |exchange: &mut Exchange<'_, R>| match exchange.body.field(field) {
        Some(value) if is_truthy(value) => Ok(()),
        _ => Err(Error::bad_request(format!(
            "{} must include a {}",
            R::RESOURCE,
            field
        ))),
    }
}

/// Looks up the route id and remembers the matching record for later steps.
pub fn record_exists<R: Record>(exchange: &mut Exchange<'_, R>) -> Result<(), Error> {
    let route_id = exchange.route_id.clone().unwrap_or_default();

    match position_by_id(exchange.records.as_slice(), &route_id) {
        Some(index) => {
            exchange.locate(index);
            Ok(())
        }
        None => Err(Error::not_found(format!(
            "{} does not exist: {}",
            R::RESOURCE,
            route_id
        ))),
    }
}

/// Rejects a truthy body id that differs from the route id. An absent id is accepted.
pub fn id_matches_route<R: Record>(exchange: &mut Exchange<'_, R>) -> Result<(), Error> {
    let route_id = exchange.route_id.as_deref().unwrap_or_default();

    match exchange.body.field("id") {
        Some(id) if is_truthy(id) && id.as_str() != Some(route_id) => {
            Err(Error::bad_request(format!(
                "{} id does not match route id. {}: {}, Route: {}",
                R::RESOURCE,
                R::RESOURCE,
                display_value(Some(id)),
                route_id
            )))
        }
        _ => Ok(()),
    }
}
