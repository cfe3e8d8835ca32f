use crate::utils::store::Record;
use serde::{Deserialize, Serialize};
use serde_json::Number;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Number,
    pub image_url: String,
}

impl Record for Dish {
    const RESOURCE: &'static str = "Dish";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Dish {
    /// Every stored dish has all of its text fields populated and a positive price.
    pub fn is_well_formed(&self) -> bool {
        !self.id.is_empty()
            && !self.name.is_empty()
            && !self.description.is_empty()
            && !self.image_url.is_empty()
            && self.price.as_f64().is_some_and(|price| price > 0.0)
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct CreateDishPayload {
    pub name: String,
    pub description: String,
    pub price: Number,
    pub image_url: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct UpdateDishPayload {
    pub name: String,
    pub description: String,
    pub price: Number,
    pub image_url: String,
}

pub fn create(records: &mut Vec<Dish>, id: String, payload: CreateDishPayload) -> Dish {
    let dish = Dish {
        id,
        name: payload.name,
        description: payload.description,
        price: payload.price,
        image_url: payload.image_url,
    };

    records.push(dish.clone());
    dish
}

/// Every dish, or only the one whose id equals `id` when it is given.
pub fn find_many(records: &[Dish], id: Option<&str>) -> Vec<Dish> {
    records
        .iter()
        .filter(|dish| id.map_or(true, |id| dish.id == id))
        .cloned()
        .collect()
}

/// Overwrites every mutable field. The id never changes.
pub fn update(dish: &mut Dish, payload: UpdateDishPayload) -> Dish {
    dish.name = payload.name;
    dish.description = payload.description;
    dish.price = payload.price;
    dish.image_url = payload.image_url;

    dish.clone()
}
