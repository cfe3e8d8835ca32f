use crate::utils::store::Record;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::{fmt, str::FromStr};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderStatus {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "preparing")]
    Preparing,
    #[serde(rename = "out-for-delivery")]
    OutForDelivery,
    #[serde(rename = "delivered")]
    Delivered,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }

    /// Statuses an update may move an order into.
    pub fn is_assignable(&self) -> bool {
        !matches!(self, OrderStatus::Delivered)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "preparing" => Ok(OrderStatus::Preparing),
            "out-for-delivery" => Ok(OrderStatus::OutForDelivery),
            "delivered" => Ok(OrderStatus::Delivered),
            _ => Err(format!("'{}' is not a valid OrderStatus", s)),
        }
    }
}

/// A dish carried by value inside an order, with how many of it were ordered.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrderDish {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub quantity: Number,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    pub dishes: Vec<OrderDish>,
}

impl Record for Order {
    const RESOURCE: &'static str = "Order";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Order {
    pub fn is_pending(&self) -> bool {
        self.status == Some(OrderStatus::Pending)
    }
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderPayload {
    pub deliver_to: String,
    pub mobile_number: String,
    pub dishes: Vec<OrderDish>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderPayload {
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<OrderDish>,
}

/// Appends a new order. Orders start without a status.
pub fn create(records: &mut Vec<Order>, id: String, payload: CreateOrderPayload) -> Order {
    let order = Order {
        id,
        deliver_to: payload.deliver_to,
        mobile_number: payload.mobile_number,
        status: None,
        dishes: payload.dishes,
    };

    records.push(order.clone());
    order
}

pub fn find_many(records: &[Order], id: Option<&str>) -> Vec<Order> {
    records
        .iter()
        .filter(|order| id.map_or(true, |id| order.id == id))
        .cloned()
        .collect()
}

/// Overwrites every mutable field. The id never changes.
pub fn update(order: &mut Order, payload: UpdateOrderPayload) -> Order {
    order.deliver_to = payload.deliver_to;
    order.mobile_number = payload.mobile_number;
    order.status = Some(payload.status);
    order.dishes = payload.dishes;

    order.clone()
}

pub fn delete_by_id(records: &mut Vec<Order>, id: &str) -> Option<Order> {
    records
        .iter()
        .position(|order| order.id == id)
        .map(|index| records.remove(index))
}
