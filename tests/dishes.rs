mod common;

use axum::http::StatusCode;
use common::{dish_body, server, with_field};
use serde_json::{json, Value};

#[tokio::test]
async fn list_returns_every_dish_in_insertion_order() {
    let server = server();

    let response = server.get("/dishes").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body = response.json::<Value>();
    let ids = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|dish| dish["id"].as_str().unwrap().to_string())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["d-1", "d-2"]);
}

#[tokio::test]
async fn create_assigns_a_fresh_id_and_makes_the_dish_readable() {
    let server = server();

    let response = server.post("/dishes").json(&dish_body()).await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let created = response.json::<Value>()["data"].clone();
    assert_eq!(created["id"], "1");
    assert_eq!(created["name"], "Broccoli and beetroot stir fry");
    assert_eq!(created["price"], 15);

    let second = server.post("/dishes").json(&dish_body()).await.json::<Value>();
    assert_ne!(second["data"]["id"], created["id"]);

    let read = server.get("/dishes/1").await;
    assert_eq!(read.status_code(), StatusCode::OK);
    assert_eq!(read.json::<Value>()["data"], created);

    let listed = server.get("/dishes").await.json::<Value>();
    assert_eq!(listed["data"].as_array().unwrap().len(), 4);
    assert_eq!(listed["data"][2], created);
}

#[tokio::test]
async fn create_drops_unknown_fields() {
    let server = server();
    let body = with_field(dish_body(), "calories", Some(json!(420)));

    let created = server.post("/dishes").json(&body).await.json::<Value>();
    assert!(created["data"].get("calories").is_none());
}

#[tokio::test]
async fn create_requires_each_field() {
    let server = server();

    for field in ["name", "description", "price", "image_url"] {
        for value in [None, Some(json!(""))] {
            let body = with_field(dish_body(), field, value);
            let response = server.post("/dishes").json(&body).await;

            assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
            assert_eq!(
                response.json::<Value>()["error"],
                format!("Dish must include a {field}")
            );
        }
    }

    let listed = server.get("/dishes").await.json::<Value>();
    assert_eq!(listed["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn create_validates_price() {
    let server = server();

    for price in [json!(-1), json!("5")] {
        let body = with_field(dish_body(), "price", Some(price));
        let response = server.post("/dishes").json(&body).await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>()["error"],
            "Dish must have a price that is an integer greater than 0"
        );
    }

    let zero = with_field(dish_body(), "price", Some(json!(0)));
    let response = server.post("/dishes").json(&zero).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "Dish must include a price");
}

#[tokio::test]
async fn create_accepts_fractional_prices() {
    let server = server();
    let body = with_field(dish_body(), "price", Some(json!(4.5)));

    let response = server.post("/dishes").json(&body).await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["data"]["price"], 4.5);
}

#[tokio::test]
async fn read_unknown_dish_is_not_found() {
    let server = server();

    let response = server.get("/dishes/nope").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>()["error"],
        "Dish does not exist: nope"
    );
}

#[tokio::test]
async fn update_overwrites_fields_and_keeps_the_id() {
    let server = server();
    let body = json!({
        "data": {
            "id": "d-1",
            "name": "Spaghetti, renamed",
            "description": "Same spaghetti, new description",
            "price": 21,
            "image_url": "https://example.com/spaghetti.png"
        }
    });

    let response = server.put("/dishes/d-1").json(&body).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let expected = json!({
        "id": "d-1",
        "name": "Spaghetti, renamed",
        "description": "Same spaghetti, new description",
        "price": 21,
        "image_url": "https://example.com/spaghetti.png"
    });
    assert_eq!(response.json::<Value>()["data"], expected);

    let read = server.get("/dishes/d-1").await.json::<Value>();
    assert_eq!(read["data"], expected);
}

#[tokio::test]
async fn update_without_body_id_is_accepted() {
    let server = server();

    let response = server.put("/dishes/d-2").json(&dish_body()).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["data"]["id"], "d-2");
}

#[tokio::test]
async fn update_rejects_mismatched_body_id() {
    let server = server();
    let body = with_field(dish_body(), "id", Some(json!("d-2")));

    let response = server.put("/dishes/d-1").json(&body).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"],
        "Dish id does not match route id. Dish: d-2, Route: d-1"
    );

    let read = server.get("/dishes/d-1").await.json::<Value>();
    assert_eq!(read["data"]["name"], "Dolcelatte and chickpea spaghetti");
}

#[tokio::test]
async fn update_checks_existence_before_the_body() {
    let server = server();

    let response = server.put("/dishes/missing").json(&json!({})).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>()["error"],
        "Dish does not exist: missing"
    );
}

#[tokio::test]
async fn update_validates_like_create() {
    let server = server();
    let body = with_field(dish_body(), "price", Some(json!("21")));

    let response = server.put("/dishes/d-1").json(&body).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"],
        "Dish must have a price that is an integer greater than 0"
    );
}

#[tokio::test]
async fn create_with_wrongly_typed_field_is_a_bad_request() {
    let server = server();
    let body = with_field(dish_body(), "name", Some(json!(42)));

    let response = server.post("/dishes").json(&body).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["error"]
        .as_str()
        .unwrap()
        .starts_with("Dish data is invalid"));
}

#[tokio::test]
async fn dishes_cannot_be_deleted() {
    let server = server();

    let response = server.delete("/dishes/d-1").await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        response.json::<Value>()["error"],
        "DELETE not allowed for /dishes/d-1"
    );
}

#[tokio::test]
async fn create_without_a_body_fails_on_the_first_field() {
    let server = server();

    let response = server.post("/dishes").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"],
        "Dish must include a name"
    );
}

#[tokio::test]
async fn create_with_a_non_json_body_fails_on_the_first_field() {
    let server = server();

    let response = server.post("/dishes").text("name=Soup").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"],
        "Dish must include a name"
    );
}

#[tokio::test]
async fn update_without_a_body_checks_existence_first() {
    let server = server();

    let response = server.put("/dishes/missing").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>()["error"],
        "Dish does not exist: missing"
    );

    let response = server.put("/dishes/d-1").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"],
        "Dish must include a name"
    );
}
