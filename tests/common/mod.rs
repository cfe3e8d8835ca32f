#![allow(dead_code)]

use axum::Router;
use axum_test::{TestServer, TestServerConfig};
use grubdash_backend_rs::{
    app::App,
    types::{AppContext, AppEnvironment, Context},
    utils::{id::IdGenerator, seed::Seed},
};
use serde_json::{json, Value};
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

/// Hands out "1", "2", "3", ... so responses are predictable.
#[derive(Default)]
pub struct SequentialIds(AtomicU64);

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        (self.0.fetch_add(1, Ordering::SeqCst) + 1).to_string()
    }
}

pub fn context(seed: Seed) -> Arc<Context> {
    Arc::new(Context::new(
        AppContext {
            host: String::from("127.0.0.1"),
            environment: AppEnvironment::Development,
            port: 0,
            url: String::from("http://127.0.0.1"),
        },
        seed,
        Arc::new(SequentialIds::default()),
    ))
}

pub fn router_with(seed: Seed) -> Router {
    App::new(context(seed)).router()
}

pub fn server_with(seed: Seed) -> TestServer {
    TestServerConfig::builder()
        .http_transport()
        .build_server(router_with(seed))
        .unwrap()
}

pub fn server() -> TestServer {
    server_with(seed())
}

pub fn seed() -> Seed {
    serde_json::from_value::<Seed>(json!({
        "dishes": [
            {
                "id": "d-1",
                "name": "Dolcelatte and chickpea spaghetti",
                "description": "Spaghetti topped with a blend of dolcelatte and fresh chickpeas",
                "price": 19,
                "image_url": "https://images.pexels.com/photos/1279330/pexels-photo-1279330.jpeg"
            },
            {
                "id": "d-2",
                "name": "Falafel and tahini bagel",
                "description": "A warm bagel filled with falafel and tahini",
                "price": 6,
                "image_url": "https://images.pexels.com/photos/4560606/pexels-photo-4560606.jpeg"
            }
        ],
        "orders": [
            {
                "id": "o-pending",
                "deliverTo": "1600 Pennsylvania Avenue NW, Washington, DC 20500",
                "mobileNumber": "(202) 456-1111",
                "status": "pending",
                "dishes": [{ "id": "d-1", "quantity": 2 }]
            },
            {
                "id": "o-preparing",
                "deliverTo": "308 Negra Arroyo Lane, Albuquerque, NM",
                "mobileNumber": "(505) 143-3369",
                "status": "preparing",
                "dishes": [{ "id": "d-2", "quantity": 1 }]
            }
        ]
    }))
    .unwrap()
}

pub fn dish_body() -> Value {
    json!({
        "data": {
            "name": "Broccoli and beetroot stir fry",
            "description": "Crunchy stir fry featuring fresh broccoli and beetroot",
            "price": 15,
            "image_url": "https://images.pexels.com/photos/4144234/pexels-photo-4144234.jpeg"
        }
    })
}

pub fn order_body() -> Value {
    json!({
        "data": {
            "deliverTo": "Rute 6 Balboa, Panama",
            "mobileNumber": "(507) 555-0101",
            "dishes": [
                {
                    "id": "d-1",
                    "name": "Dolcelatte and chickpea spaghetti",
                    "description": "Spaghetti topped with a blend of dolcelatte and fresh chickpeas",
                    "price": 19,
                    "image_url": "https://images.pexels.com/photos/1279330/pexels-photo-1279330.jpeg",
                    "quantity": 2
                }
            ]
        }
    })
}

/// Replaces one field inside `data`, or removes it when `value` is `None`.
pub fn with_field(mut body: Value, field: &str, value: Option<Value>) -> Value {
    let data = body["data"].as_object_mut().unwrap();
    match value {
        Some(value) => {
            data.insert(field.to_string(), value);
        }
        None => {
            data.remove(field);
        }
    }
    body
}
