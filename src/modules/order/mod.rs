pub mod guards;
pub mod repository;
pub mod routes;

pub use routes::get_router;

use crate::utils::store::Store;
use repository::Order;

pub struct Resource {
    pub store: Store<Order>,
    pub pipelines: routes::Pipelines,
}

impl Resource {
    pub fn new(orders: Vec<Order>) -> Self {
        Self {
            store: Store::new(orders),
            pipelines: routes::Pipelines::new(),
        }
    }
}
