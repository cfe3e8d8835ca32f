//! Records the stores start with.
//!
//! A seed file is a JSON object with optional `dishes` and `orders` arrays in the same
//! shape the API returns them.

use super::store::Record;
use crate::modules::{dish::repository::Dish, order::repository::Order};
use serde::Deserialize;
use std::{collections::HashSet, io, path::Path};

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("seed file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("seed contains {resource} id {id} more than once")]
    DuplicateId { resource: &'static str, id: String },
    #[error("seed dish {0} is missing a field or has a price that is not above 0")]
    MalformedDish(String),
}

#[derive(Deserialize, Default, Debug, Clone)]
pub struct Seed {
    #[serde(default)]
    pub dishes: Vec<Dish>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl Seed {
    pub async fn load(path: &Path) -> Result<Self, SeedError> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| SeedError::Read {
                path: path.display().to_string(),
                source,
            })?;

        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, SeedError> {
        let seed = serde_json::from_str::<Seed>(text)?;
        seed.validate()?;
        Ok(seed)
    }

    fn validate(&self) -> Result<(), SeedError> {
        ensure_unique(&self.dishes)?;
        ensure_unique(&self.orders)?;

        match self.dishes.iter().find(|dish| !dish.is_well_formed()) {
            Some(dish) => Err(SeedError::MalformedDish(dish.id.clone())),
            None => Ok(()),
        }
    }
}

fn ensure_unique<R: Record>(records: &[R]) -> Result<(), SeedError> {
    let mut seen = HashSet::new();

    for record in records {
        if !seen.insert(record.id()) {
            return Err(SeedError::DuplicateId {
                resource: R::RESOURCE,
                id: record.id().to_string(),
            });
        }
    }

    Ok(())
}
