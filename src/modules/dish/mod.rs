pub mod guards;
pub mod repository;
pub mod routes;

pub use routes::get_router;

use crate::utils::store::Store;
use repository::Dish;

pub struct Resource {
    pub store: Store<Dish>,
    pub pipelines: routes::Pipelines,
}

impl Resource {
    pub fn new(dishes: Vec<Dish>) -> Self {
        Self {
            store: Store::new(dishes),
            pipelines: routes::Pipelines::new(),
        }
    }
}
