mod common;

use anyhow::Result;
use reqwest::StatusCode;

#[tokio::test]
async fn jwt_endpoint_issues_tokens() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let token = common::issue_token(&client, &server.base_url, "alice@example.com").await?;
    assert!(!token.is_empty());
    // Three dot-separated segments
    assert_eq!(token.split('.').count(), 3);
    Ok(())
}

#[tokio::test]
async fn admin_endpoint_rejects_missing_and_invalid_tokens_identically() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();
    let url = format!("{}/users", server.base_url);

    let missing = client.get(&url).send().await?;
    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);
    let missing_body = missing.text().await?;

    let invalid = client
        .get(&url)
        .bearer_auth("not.a.token")
        .send()
        .await?;
    assert_eq!(invalid.status(), StatusCode::UNAUTHORIZED);
    let invalid_body = invalid.text().await?;

    // Same outcome regardless of which authentication check failed
    assert_eq!(missing_body, invalid_body);
    Ok(())
}

#[tokio::test]
async fn admin_endpoint_rejects_authenticated_non_admins() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    // A valid token for an email with no user record at all
    let ghost = common::issue_token(&client, &server.base_url, "ghost@example.com").await?;
    let res = client
        .get(format!("{}/users", server.base_url))
        .bearer_auth(&ghost)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    // A valid token for a registered regular user
    client
        .post(format!("{}/users", server.base_url))
        .json(&serde_json::json!({ "email": "bob@example.com" }))
        .send()
        .await?;
    let bob = common::issue_token(&client, &server.base_url, "bob@example.com").await?;
    let res = client
        .get(format!("{}/users", server.base_url))
        .bearer_auth(&bob)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    Ok(())
}

#[tokio::test]
async fn admin_endpoint_admits_admins() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    common::seed_admin(&server, "boss@example.com").await?;
    let token = common::issue_token(&client, &server.base_url, "boss@example.com").await?;

    let res = client
        .get(format!("{}/users", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await?;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
    Ok(())
}

#[tokio::test]
async fn role_lookup_enforces_ownership_even_for_admins() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    common::seed_admin(&server, "boss@example.com").await?;
    let admin = common::issue_token(&client, &server.base_url, "boss@example.com").await?;

    // Admin asking about someone else's email is still forbidden
    let res = client
        .get(format!("{}/users/bob@example.com", server.base_url))
        .bearer_auth(&admin)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    // Own email answers with the admin flag
    let res = client
        .get(format!("{}/users/boss@example.com", server.base_url))
        .bearer_auth(&admin)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await?;
    assert_eq!(body["data"]["admin"], true);

    // A regular caller's own email reads as non-admin
    let bob = common::issue_token(&client, &server.base_url, "bob@example.com").await?;
    let res = client
        .get(format!("{}/users/bob@example.com", server.base_url))
        .bearer_auth(&bob)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await?;
    assert_eq!(body["data"]["admin"], false);
    Ok(())
}
