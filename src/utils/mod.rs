pub mod error;
pub mod fallback;
pub mod guards;
pub mod id;
pub mod pipeline;
pub mod seed;
pub mod store;
