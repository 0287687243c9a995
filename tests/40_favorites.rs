mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

use common::TestServer;

#[tokio::test]
async fn requires_bearer_token() -> Result<()> {
    let server = TestServer::start().await?;
    let products = server.seed_products().await?;

    let res = server.client.get(server.url("/favorites")).send().await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = res.json().await?;
    assert!(body["error"].is_string());

    let res = server
        .client
        .post(server.url("/favorites"))
        .bearer_auth("not-a-token")
        .json(&json!({ "product_id": products[0].id }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM favorites")
        .fetch_one(server.db.pool())
        .await?;
    assert_eq!(count, 0);
    Ok(())
}

#[tokio::test]
async fn add_twice_keeps_one_row_with_latest_notes() -> Result<()> {
    let server = TestServer::start().await?;
    let products = server.seed_products().await?;
    let (user_id, token) = server.user_with_token("testuser").await?;

    for notes in ["first", "second"] {
        let res = server
            .client
            .post(server.url("/favorites"))
            .bearer_auth(&token)
            .json(&json!({ "product_id": products[0].id, "notes": notes }))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = res.json().await?;
        assert_eq!(body["message"], "Favorite added successfully");
    }

    assert_eq!(server.db.favorites().count_for_user(user_id).await?, 1);

    let res = server.client.get(server.url("/favorites")).bearer_auth(&token).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["notes"], "second");
    assert_eq!(body[0]["title"], "Smartphone");
    Ok(())
}

#[tokio::test]
async fn repeat_add_without_notes_clears_them() -> Result<()> {
    let server = TestServer::start().await?;
    let products = server.seed_products().await?;
    let (_, token) = server.user_with_token("testuser").await?;

    for payload in [
        json!({ "product_id": products[1].id, "notes": "gift" }),
        json!({ "product_id": products[1].id }),
    ] {
        let res = server
            .client
            .post(server.url("/favorites"))
            .bearer_auth(&token)
            .json(&payload)
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let res = server.client.get(server.url("/favorites")).bearer_auth(&token).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["title"], "Laptop");
    assert!(body[0]["notes"].is_null());
    Ok(())
}

#[tokio::test]
async fn lists_most_recent_first() -> Result<()> {
    let server = TestServer::start().await?;
    let products = server.seed_products().await?;
    let (_, token) = server.user_with_token("testuser").await?;

    for product in [&products[2], &products[0], &products[1]] {
        let res = server
            .client
            .post(server.url("/favorites"))
            .bearer_auth(&token)
            .json(&json!({ "product_id": product.id }))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let body: Value = server
        .client
        .get(server.url("/favorites"))
        .bearer_auth(&token)
        .send()
        .await?
        .json()
        .await?;
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![products[1].id, products[0].id, products[2].id]);
    assert!(body[0]["notes"].is_null());
    Ok(())
}

#[tokio::test]
async fn empty_list_for_new_user() -> Result<()> {
    let server = TestServer::start().await?;
    let (_, token) = server.user_with_token("testuser").await?;

    let res = server.client.get(server.url("/favorites")).bearer_auth(&token).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body, json!([]));
    Ok(())
}

#[tokio::test]
async fn unknown_product_is_rejected_without_a_row() -> Result<()> {
    let server = TestServer::start().await?;
    server.seed_products().await?;
    let (user_id, token) = server.user_with_token("testuser").await?;

    let res = server
        .client
        .post(server.url("/favorites"))
        .bearer_auth(&token)
        .json(&json!({ "product_id": 9999, "notes": "ghost" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "Product not found");

    assert_eq!(server.db.favorites().count_for_user(user_id).await?, 0);
    Ok(())
}

#[tokio::test]
async fn missing_product_id_is_bad_request() -> Result<()> {
    let server = TestServer::start().await?;
    let (_, token) = server.user_with_token("testuser").await?;

    for payload in [json!({ "notes": "no id" }), json!({ "product_id": 0 })] {
        let res = server
            .client
            .post(server.url("/favorites"))
            .bearer_auth(&token)
            .json(&payload)
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "payload {}", payload);
    }
    Ok(())
}

#[tokio::test]
async fn remove_favorite() -> Result<()> {
    let server = TestServer::start().await?;
    let products = server.seed_products().await?;
    let (user_id, token) = server.user_with_token("testuser").await?;

    server.db.favorites().upsert(user_id, products[0].id, None).await?;

    let path = format!("/favorites/{}", products[0].id);
    let res = server.client.delete(server.url(&path)).bearer_auth(&token).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["message"], "Favorite removed successfully");

    let res = server.client.delete(server.url(&path)).bearer_auth(&token).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn users_only_see_their_own_favorites() -> Result<()> {
    let server = TestServer::start().await?;
    let products = server.seed_products().await?;
    let (alice_id, _) = server.user_with_token("alice").await?;
    let (_, bob_token) = server.user_with_token("bob").await?;

    server.db.favorites().upsert(alice_id, products[0].id, Some("mine")).await?;

    let body: Value = server
        .client
        .get(server.url("/favorites"))
        .bearer_auth(&bob_token)
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(body, json!([]));
    Ok(())
}
