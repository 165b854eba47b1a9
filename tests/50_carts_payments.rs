mod common;

use anyhow::Result;
use reqwest::StatusCode;

fn cart_item(email: &str, name: &str, price: f64) -> serde_json::Value {
    serde_json::json!({
        "email": email,
        "menu_item_id": uuid::Uuid::new_v4(),
        "name": name,
        "img": null,
        "price": price
    })
}

#[tokio::test]
async fn cart_endpoints_require_a_token() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/carts", server.base_url))
        .json(&cart_item("alice@example.com", "Pasta", 12.5))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client.get(format!("{}/carts", server.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn cart_listing_is_owner_scoped() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let alice = common::issue_token(&client, &server.base_url, "alice@example.com").await?;
    for (name, price) in [("Pasta", 12.5), ("Tiramisu", 6.0)] {
        let res = client
            .post(format!("{}/carts", server.base_url))
            .bearer_auth(&alice)
            .json(&cart_item("alice@example.com", name, price))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    // Own cart lists both items
    let res = client
        .get(format!("{}/carts?email=alice@example.com", server.base_url))
        .bearer_auth(&alice)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await?;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(2));

    // Someone else's cart is off limits
    let bob = common::issue_token(&client, &server.base_url, "bob@example.com").await?;
    let res = client
        .get(format!("{}/carts?email=alice@example.com", server.base_url))
        .bearer_auth(&bob)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    // With no email given the caller's own cart is used
    let res = client
        .get(format!("{}/carts", server.base_url))
        .bearer_auth(&bob)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await?;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(0));
    Ok(())
}

#[tokio::test]
async fn cart_item_removal() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let alice = common::issue_token(&client, &server.base_url, "alice@example.com").await?;
    let res = client
        .post(format!("{}/carts", server.base_url))
        .bearer_auth(&alice)
        .json(&cart_item("alice@example.com", "Pasta", 12.5))
        .send()
        .await?;
    let body: serde_json::Value = res.json().await?;
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let res = client
        .delete(format!("{}/carts/not-an-id", server.base_url))
        .bearer_auth(&alice)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = client
        .delete(format!("{}/carts/{}", server.base_url, id))
        .bearer_auth(&alice)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    // Removing it again is a zero-effect 404
    let res = client
        .delete(format!("{}/carts/{}", server.base_url, id))
        .bearer_auth(&alice)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn payment_intent_converts_price_to_minor_units() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let alice = common::issue_token(&client, &server.base_url, "alice@example.com").await?;
    let res = client
        .post(format!("{}/create-payment-intent", server.base_url))
        .bearer_auth(&alice)
        .json(&serde_json::json!({ "price": 25.5 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await?;
    assert_eq!(body["data"]["clientSecret"], "pi_mock_secret_2550");
    Ok(())
}

#[tokio::test]
async fn payment_intent_rejects_invalid_prices() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let alice = common::issue_token(&client, &server.base_url, "alice@example.com").await?;
    for price in [serde_json::json!(0.0), serde_json::json!(-3.5)] {
        let res = client
            .post(format!("{}/create-payment-intent", server.base_url))
            .bearer_auth(&alice)
            .json(&serde_json::json!({ "price": price }))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
    Ok(())
}

#[tokio::test]
async fn recording_a_payment_clears_the_paid_cart_items() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let alice = common::issue_token(&client, &server.base_url, "alice@example.com").await?;
    let mut cart_ids = Vec::new();
    for (name, price) in [("Pasta", 12.5), ("Tiramisu", 6.0)] {
        let res = client
            .post(format!("{}/carts", server.base_url))
            .bearer_auth(&alice)
            .json(&cart_item("alice@example.com", name, price))
            .send()
            .await?;
        let body: serde_json::Value = res.json().await?;
        cart_ids.push(body["data"]["id"].as_str().unwrap().to_string());
    }

    let res = client
        .post(format!("{}/payments", server.base_url))
        .bearer_auth(&alice)
        .json(&serde_json::json!({
            "email": "alice@example.com",
            "price": 18.5,
            "transaction_id": "pi_test_123",
            "cart_ids": cart_ids,
            "menu_ids": [uuid::Uuid::new_v4(), uuid::Uuid::new_v4()]
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: serde_json::Value = res.json().await?;
    assert_eq!(body["data"]["carts_removed"], 2);
    assert!(body["data"]["payment_id"].is_string());

    // The paid-for items are gone from the cart
    let res = client
        .get(format!("{}/carts", server.base_url))
        .bearer_auth(&alice)
        .send()
        .await?;
    let body: serde_json::Value = res.json().await?;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(0));

    // History shows the payment with its defaulted status
    let res = client
        .get(format!("{}/payments/alice@example.com", server.base_url))
        .bearer_auth(&alice)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await?;
    let payments = body["data"].as_array().unwrap();
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0]["status"], "paid");
    assert_eq!(payments[0]["transaction_id"], "pi_test_123");
    Ok(())
}

#[tokio::test]
async fn payment_history_is_owner_scoped() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let bob = common::issue_token(&client, &server.base_url, "bob@example.com").await?;
    let res = client
        .get(format!("{}/payments/alice@example.com", server.base_url))
        .bearer_auth(&bob)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    Ok(())
}
