//! API integration tests
//!
//! Each test starts its own server over a fresh in-memory store.

use anyhow::Result;
use chrono::{Duration, Utc};
use forum_core::{InteractionType, Snowflake, TargetType, UserRole};
use integration_tests::*;
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn create_post(server: &TestServer, token: &str, title: &str) -> Result<String> {
    let response = server
        .post_auth("/api/v1/posts", token, &create_post_body(title, "general"))
        .await?;
    let data = assert_data(response, StatusCode::CREATED).await?;
    Ok(data["id"].as_str().unwrap_or_default().to_string())
}

async fn create_reply(server: &TestServer, token: &str, post_id: &str, parent: Option<&str>) -> Result<reqwest::Response> {
    server
        .post_auth(
            "/api/v1/replies",
            token,
            &create_reply_body(post_id, parent, "A thoughtful reply"),
        )
        .await
}

async fn get_post(server: &TestServer, token: Option<&str>, post_id: &str) -> Result<Value> {
    let path = format!("/api/v1/posts/{post_id}");
    let response = match token {
        Some(token) => server.get_auth(&path, token).await?,
        None => server.get(&path).await?,
    };
    assert_data(response, StatusCode::OK).await
}

fn id_of(raw: &str) -> Snowflake {
    Snowflake::parse(raw).unwrap()
}

// ============================================================================
// Health & routing
// ============================================================================

#[tokio::test]
async fn test_health_endpoints() -> Result<()> {
    let server = TestServer::start().await?;

    let body: Value = assert_json(server.get("/health").await?, StatusCode::OK).await?;
    assert_eq!(body["status"], "healthy");

    let body: Value = assert_json(server.get("/health/ready").await?, StatusCode::OK).await?;
    assert_eq!(body["checks"]["database"], "healthy");

    server.store.set_unreachable(true);
    let body: Value = assert_json(
        server.get("/health/ready").await?,
        StatusCode::SERVICE_UNAVAILABLE,
    )
    .await?;
    assert_eq!(body["status"], "not_ready");

    Ok(())
}

#[tokio::test]
async fn test_unknown_route_returns_envelope() -> Result<()> {
    let server = TestServer::start().await?;

    let code = assert_error(server.get("/api/v1/nope").await?, StatusCode::NOT_FOUND).await?;
    assert_eq!(code, "ROUTE_NOT_FOUND");

    Ok(())
}

#[tokio::test]
async fn test_malformed_inputs_are_bad_requests() -> Result<()> {
    let server = TestServer::start().await?;
    let token = server.login(&subscriber())?;

    let code = assert_error(server.get("/api/v1/posts/not-an-id").await?, StatusCode::BAD_REQUEST).await?;
    assert_eq!(code, "INVALID_PATH_PARAMETER");

    let code = assert_error(server.get("/api/v1/posts?sort=hot").await?, StatusCode::BAD_REQUEST).await?;
    assert_eq!(code, "VALIDATION_ERROR");

    let response = server
        .post_auth("/api/v1/posts", &token, &json!({ "title": "ab", "content": "x", "category": "general" }))
        .await?;
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await?;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["details"]["title"].is_array());

    let response = server
        .post_auth("/api/v1/posts", &token, &json!({ "title": 42 }))
        .await?;
    let code = assert_error(response, StatusCode::BAD_REQUEST).await?;
    assert_eq!(code, "INVALID_BODY");

    Ok(())
}

// ============================================================================
// Authentication
// ============================================================================

#[tokio::test]
async fn test_writes_require_credentials() -> Result<()> {
    let server = TestServer::start().await?;

    let response = server
        .post("/api/v1/posts", &create_post_body("No token", "general"))
        .await?;
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await?;
    assert_eq!(code, "MISSING_AUTHORIZATION");

    let response = server
        .post_auth("/api/v1/posts", "garbage", &create_post_body("Bad token", "general"))
        .await?;
    assert_error(response, StatusCode::UNAUTHORIZED).await?;

    // Valid token for a user the identity store does not know
    let ghost = subscriber();
    let token = server.login(&ghost)?;
    let other_server = TestServer::start().await?;
    let response = other_server
        .post_auth("/api/v1/posts", &token, &create_post_body("Ghost", "general"))
        .await?;
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await?;
    assert_eq!(code, "UNKNOWN_USER");

    Ok(())
}

#[tokio::test]
async fn test_invalid_token_on_read_is_anonymous() -> Result<()> {
    let server = TestServer::start().await?;
    let token = server.login(&subscriber())?;
    let post_id = create_post(&server, &token, "Readable").await?;

    let post = get_post(&server, Some("garbage"), &post_id).await?;
    assert_eq!(post["views_count"], 0);

    Ok(())
}

// ============================================================================
// Posts
// ============================================================================

#[tokio::test]
async fn test_create_post_normalizes_and_resolves_category() -> Result<()> {
    let server = TestServer::start().await?;
    let author = subscriber();
    let token = server.login(&author)?;

    let response = server
        .post_auth("/api/v1/posts", &token, &create_post_body("  Hello forum  ", "General"))
        .await?;
    let data = assert_data(response, StatusCode::CREATED).await?;

    assert_eq!(data["title"], "Hello forum");
    assert_eq!(data["tags"], json!(["rust", "forum"]));
    assert_eq!(data["category"]["name"], "general");
    assert_eq!(data["category"]["color"], "#3b82f6");
    assert_eq!(data["author"]["id"], author.id.to_string());
    assert_eq!(data["replies_count"], 0);

    Ok(())
}

#[tokio::test]
async fn test_create_post_in_unknown_category_rejected() -> Result<()> {
    let server = TestServer::start().await?;
    let token = server.login(&subscriber())?;

    let response = server
        .post_auth("/api/v1/posts", &token, &create_post_body("Lost post", "gardening"))
        .await?;
    assert_error(response, StatusCode::BAD_REQUEST).await?;

    Ok(())
}

#[tokio::test]
async fn test_banned_user_cannot_post_but_can_read() -> Result<()> {
    let server = TestServer::start().await?;
    let author_token = server.login(&subscriber())?;
    let post_id = create_post(&server, &author_token, "Existing post").await?;

    let mut banned_user = subscriber();
    banned_user.is_banned = true;
    banned_user.banned_until = Some(Utc::now() + Duration::days(1));
    let token = server.login(&banned_user)?;

    let response = server
        .post_auth("/api/v1/posts", &token, &create_post_body("Blocked", "general"))
        .await?;
    let code = assert_error(response, StatusCode::FORBIDDEN).await?;
    assert_eq!(code, "USER_BANNED");

    let list = assert_data(server.get_auth("/api/v1/posts", &token).await?, StatusCode::OK).await?;
    assert_eq!(list["items"].as_array().map(Vec::len), Some(1));
    get_post(&server, Some(&token), &post_id).await?;

    Ok(())
}

#[tokio::test]
async fn test_expired_ban_no_longer_blocks() -> Result<()> {
    let server = TestServer::start().await?;
    let token = server.login(&expired_ban())?;

    create_post(&server, &token, "Back again").await?;

    Ok(())
}

#[tokio::test]
async fn test_page_past_end_is_empty() -> Result<()> {
    let server = TestServer::start().await?;
    let token = server.login(&subscriber())?;
    for i in 0..5 {
        create_post(&server, &token, &format!("Post number {i}")).await?;
    }

    let data = assert_data(
        server.get("/api/v1/posts?page=2&limit=20").await?,
        StatusCode::OK,
    )
    .await?;

    assert_eq!(data["items"], json!([]));
    assert_eq!(data["pagination"]["total"], 5);
    assert_eq!(data["pagination"]["total_pages"], 1);
    assert_eq!(data["pagination"]["page"], 2);

    Ok(())
}

#[tokio::test]
async fn test_pinned_posts_lead_every_sort() -> Result<()> {
    let server = TestServer::start().await?;
    let author_token = server.login(&subscriber())?;
    let fan_token = server.login(&subscriber())?;
    let mod_token = server.login(&moderator())?;

    let pinned = create_post(&server, &author_token, "Pinned but quiet").await?;
    let popular = create_post(&server, &author_token, "Popular and viewed").await?;
    create_post(&server, &author_token, "Newest of all").await?;

    // Give the unpinned post likes and views
    server
        .post_auth("/api/v1/interactions", &fan_token, &interaction_body("post", &popular, "like"))
        .await?;
    get_post(&server, Some(&fan_token), &popular).await?;

    let response = server
        .patch_auth(
            &format!("/api/v1/posts/{pinned}/flags"),
            &mod_token,
            &json!({ "is_pinned": true }),
        )
        .await?;
    assert_data(response, StatusCode::OK).await?;

    for sort in ["recent", "popular", "trending"] {
        let data = assert_data(
            server.get(&format!("/api/v1/posts?sort={sort}")).await?,
            StatusCode::OK,
        )
        .await?;
        assert_eq!(data["items"][0]["id"], pinned.as_str(), "sort={sort}");
        assert_eq!(data["items"][0]["is_pinned"], true);
    }

    let data = assert_data(server.get("/api/v1/posts?sort=popular").await?, StatusCode::OK).await?;
    assert_eq!(data["items"][1]["id"], popular.as_str());

    Ok(())
}

#[tokio::test]
async fn test_listing_filters() -> Result<()> {
    let server = TestServer::start().await?;
    let token = server.login(&subscriber())?;
    let mod_token = server.login(&moderator())?;

    create_post(&server, &token, "Deliverability basics").await?;
    let featured = create_post(&server, &token, "Subject lines that work").await?;
    let response = server
        .post_auth(
            "/api/v1/posts",
            &token,
            &json!({ "title": "Editing drafts", "content": "Cut words", "category": "writing" }),
        )
        .await?;
    assert_data(response, StatusCode::CREATED).await?;

    server
        .patch_auth(
            &format!("/api/v1/posts/{featured}/flags"),
            &mod_token,
            &json!({ "is_featured": true }),
        )
        .await?;

    let data = assert_data(server.get("/api/v1/posts?category=writing").await?, StatusCode::OK).await?;
    assert_eq!(data["pagination"]["total"], 1);

    let data = assert_data(server.get("/api/v1/posts?category=all").await?, StatusCode::OK).await?;
    assert_eq!(data["pagination"]["total"], 3);

    let data = assert_data(server.get("/api/v1/posts?search=SUBJECT").await?, StatusCode::OK).await?;
    assert_eq!(data["items"][0]["id"], featured.as_str());
    assert_eq!(data["pagination"]["total"], 1);

    let data = assert_data(server.get("/api/v1/posts?featured=true").await?, StatusCode::OK).await?;
    assert_eq!(data["pagination"]["total"], 1);

    Ok(())
}

#[tokio::test]
async fn test_locked_post_edit_is_staff_only_and_not_logged() -> Result<()> {
    let server = TestServer::start().await?;
    let author_token = server.login(&subscriber())?;
    let mod_token = server.login(&moderator())?;
    let post_id = create_post(&server, &author_token, "Soon locked").await?;
    let path = format!("/api/v1/posts/{post_id}");

    let response = server
        .patch_auth(&format!("{path}/flags"), &mod_token, &json!({ "is_locked": true }))
        .await?;
    let data = assert_data(response, StatusCode::OK).await?;
    assert_eq!(data["is_locked"], true);

    let response = server
        .put_auth(&path, &author_token, &json!({ "title": "Author edit" }))
        .await?;
    let code = assert_error(response, StatusCode::FORBIDDEN).await?;
    assert_eq!(code, "CONTENT_LOCKED");

    let response = server
        .put_auth(&path, &mod_token, &json!({ "title": "Moderator edit" }))
        .await?;
    let data = assert_data(response, StatusCode::OK).await?;
    assert_eq!(data["title"], "Moderator edit");

    assert!(server.store.moderation_entries().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_flags_require_unbanned_staff() -> Result<()> {
    let server = TestServer::start().await?;
    let author_token = server.login(&subscriber())?;
    let banned_mod_token = server.login(&banned(UserRole::Moderator))?;
    let post_id = create_post(&server, &author_token, "Flag target").await?;
    let path = format!("/api/v1/posts/{post_id}/flags");

    let code = assert_error(
        server.patch_auth(&path, &author_token, &json!({ "is_pinned": true })).await?,
        StatusCode::FORBIDDEN,
    )
    .await?;
    assert_eq!(code, "STAFF_ONLY");

    let code = assert_error(
        server.patch_auth(&path, &banned_mod_token, &json!({ "is_pinned": true })).await?,
        StatusCode::FORBIDDEN,
    )
    .await?;
    assert_eq!(code, "USER_BANNED");

    Ok(())
}

#[tokio::test]
async fn test_other_users_cannot_edit_or_delete() -> Result<()> {
    let server = TestServer::start().await?;
    let author_token = server.login(&subscriber())?;
    let other_token = server.login(&subscriber())?;
    let post_id = create_post(&server, &author_token, "Mine").await?;
    let path = format!("/api/v1/posts/{post_id}");

    let code = assert_error(
        server.put_auth(&path, &other_token, &json!({ "title": "Yours now" })).await?,
        StatusCode::FORBIDDEN,
    )
    .await?;
    assert_eq!(code, "NOT_CONTENT_AUTHOR");

    let code = assert_error(server.delete_auth(&path, &other_token).await?, StatusCode::FORBIDDEN).await?;
    assert_eq!(code, "NOT_CONTENT_AUTHOR");

    Ok(())
}

#[tokio::test]
async fn test_moderated_delete_is_logged() -> Result<()> {
    let server = TestServer::start().await?;
    let author_token = server.login(&subscriber())?;
    let moderator = moderator();
    let mod_token = server.login(&moderator)?;

    let own = create_post(&server, &author_token, "Deleted by author").await?;
    let moderated = create_post(&server, &author_token, "Deleted by moderator").await?;

    let response = server.delete_auth(&format!("/api/v1/posts/{own}"), &author_token).await?;
    assert_data(response, StatusCode::OK).await?;
    assert!(server.store.moderation_entries().is_empty());

    let response = server.delete_auth(&format!("/api/v1/posts/{moderated}"), &mod_token).await?;
    assert_data(response, StatusCode::OK).await?;

    let code = assert_error(
        server.get(&format!("/api/v1/posts/{moderated}")).await?,
        StatusCode::NOT_FOUND,
    )
    .await?;
    assert_eq!(code, "UNKNOWN_POST");
    assert!(server.store.stored_post(id_of(&moderated)).is_some_and(|p| p.is_deleted));

    let code = assert_error(
        server.get_auth("/api/v1/moderation/actions", &author_token).await?,
        StatusCode::FORBIDDEN,
    )
    .await?;
    assert_eq!(code, "STAFF_ONLY");

    let data = assert_data(
        server.get_auth("/api/v1/moderation/actions", &mod_token).await?,
        StatusCode::OK,
    )
    .await?;
    assert_eq!(data["pagination"]["total"], 1);
    let entry = &data["items"][0];
    assert_eq!(entry["action_type"], "delete_post");
    assert_eq!(entry["target_type"], "post");
    assert_eq!(entry["target_id"], moderated.as_str());
    assert_eq!(entry["moderator_id"], moderator.id.to_string());

    Ok(())
}

// ============================================================================
// Replies
// ============================================================================

#[tokio::test]
async fn test_reply_depth_capped_at_three() -> Result<()> {
    let server = TestServer::start().await?;
    let token = server.login(&subscriber())?;
    let post_id = create_post(&server, &token, "Deep thread").await?;

    let mut parent: Option<String> = None;
    for expected_depth in 0..=3 {
        let response = create_reply(&server, &token, &post_id, parent.as_deref()).await?;
        let data = assert_data(response, StatusCode::CREATED).await?;
        assert_eq!(data["depth"], expected_depth);
        parent = data["id"].as_str().map(String::from);
    }

    let response = create_reply(&server, &token, &post_id, parent.as_deref()).await?;
    let code = assert_error(response, StatusCode::BAD_REQUEST).await?;
    assert_eq!(code, "REPLY_TOO_DEEP");

    let post = get_post(&server, None, &post_id).await?;
    assert_eq!(post["replies_count"], 4);

    let roots = post["replies"].as_array().cloned().unwrap_or_default();
    assert_eq!(roots.len(), 1);
    let mut node = &roots[0];
    for depth in 0..=3 {
        assert_eq!(node["depth"], depth);
        if depth < 3 {
            assert_eq!(node["replies"].as_array().map(Vec::len), Some(1));
            node = &node["replies"][0];
        }
    }
    assert_eq!(node["replies"], json!([]));

    Ok(())
}

#[tokio::test]
async fn test_reply_count_survives_deletion() -> Result<()> {
    let server = TestServer::start().await?;
    let token = server.login(&subscriber())?;
    let post_id = create_post(&server, &token, "Counting replies").await?;

    let mut reply_ids = Vec::new();
    for _ in 0..3 {
        let data = assert_data(create_reply(&server, &token, &post_id, None).await?, StatusCode::CREATED).await?;
        reply_ids.push(data["id"].as_str().unwrap_or_default().to_string());
    }

    let response = server
        .delete_auth(&format!("/api/v1/replies/{}", reply_ids[0]), &token)
        .await?;
    assert_data(response, StatusCode::OK).await?;

    let post = get_post(&server, None, &post_id).await?;
    assert_eq!(post["replies_count"], 3);
    assert_eq!(post["replies"].as_array().map(Vec::len), Some(2));

    let thread = assert_data(
        server.get(&format!("/api/v1/posts/{post_id}/replies")).await?,
        StatusCode::OK,
    )
    .await?;
    assert_eq!(thread.as_array().map(Vec::len), Some(2));

    Ok(())
}

#[tokio::test]
async fn test_reply_guards() -> Result<()> {
    let server = TestServer::start().await?;
    let token = server.login(&subscriber())?;
    let mod_token = server.login(&moderator())?;
    let first = create_post(&server, &token, "First post").await?;
    let second = create_post(&server, &token, "Second post").await?;

    let data = assert_data(create_reply(&server, &token, &first, None).await?, StatusCode::CREATED).await?;
    let first_reply = data["id"].as_str().unwrap_or_default().to_string();

    // Parent on a different post
    let code = assert_error(
        create_reply(&server, &token, &second, Some(&first_reply)).await?,
        StatusCode::BAD_REQUEST,
    )
    .await?;
    assert_eq!(code, "PARENT_REPLY_MISMATCH");

    // Unknown parent
    let code = assert_error(
        create_reply(&server, &token, &first, Some("999")).await?,
        StatusCode::NOT_FOUND,
    )
    .await?;
    assert_eq!(code, "UNKNOWN_REPLY");

    // Locked post: subscribers blocked, staff allowed
    server
        .patch_auth(&format!("/api/v1/posts/{first}/flags"), &mod_token, &json!({ "is_locked": true }))
        .await?;
    let code = assert_error(create_reply(&server, &token, &first, None).await?, StatusCode::FORBIDDEN).await?;
    assert_eq!(code, "CONTENT_LOCKED");
    assert_data(create_reply(&server, &mod_token, &first, None).await?, StatusCode::CREATED).await?;

    // Deleted post
    server.delete_auth(&format!("/api/v1/posts/{second}"), &token).await?;
    let code = assert_error(create_reply(&server, &token, &second, None).await?, StatusCode::NOT_FOUND).await?;
    assert_eq!(code, "UNKNOWN_POST");

    Ok(())
}

#[tokio::test]
async fn test_reply_edit_marks_edited() -> Result<()> {
    let server = TestServer::start().await?;
    let token = server.login(&subscriber())?;
    let other_token = server.login(&subscriber())?;
    let post_id = create_post(&server, &token, "Edit me").await?;
    let data = assert_data(create_reply(&server, &token, &post_id, None).await?, StatusCode::CREATED).await?;
    let path = format!("/api/v1/replies/{}", data["id"].as_str().unwrap_or_default());
    assert_eq!(data["is_edited"], false);

    let code = assert_error(
        server.put_auth(&path, &other_token, &json!({ "content": "hijack" })).await?,
        StatusCode::FORBIDDEN,
    )
    .await?;
    assert_eq!(code, "NOT_CONTENT_AUTHOR");

    let data = assert_data(
        server.put_auth(&path, &token, &json!({ "content": "Revised reply" })).await?,
        StatusCode::OK,
    )
    .await?;
    assert_eq!(data["content"], "Revised reply");
    assert_eq!(data["is_edited"], true);
    assert!(data["edited_at"].is_string());

    Ok(())
}

// ============================================================================
// Interactions
// ============================================================================

#[tokio::test]
async fn test_repeated_like_is_idempotent() -> Result<()> {
    let server = TestServer::start().await?;
    let token = server.login(&subscriber())?;
    let post_id = create_post(&server, &token, "Like me twice").await?;
    let body = interaction_body("post", &post_id, "like");

    let first = assert_data(server.post_auth("/api/v1/interactions", &token, &body).await?, StatusCode::OK).await?;
    assert_eq!(first["is_new_interaction"], true);
    assert_eq!(first["counts"]["likes"], 1);

    let second = assert_data(server.post_auth("/api/v1/interactions", &token, &body).await?, StatusCode::OK).await?;
    assert_eq!(second["is_new_interaction"], false);
    assert_eq!(second["counts"]["likes"], 1);

    assert_eq!(server.store.ledger_rows(TargetType::Post, id_of(&post_id)).len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_dislike_replaces_like() -> Result<()> {
    let server = TestServer::start().await?;
    let token = server.login(&subscriber())?;
    let post_id = create_post(&server, &token, "Changed my mind").await?;

    server
        .post_auth("/api/v1/interactions", &token, &interaction_body("post", &post_id, "like"))
        .await?;
    let data = assert_data(
        server
            .post_auth("/api/v1/interactions", &token, &interaction_body("post", &post_id, "dislike"))
            .await?,
        StatusCode::OK,
    )
    .await?;
    assert_eq!(data["counts"]["likes"], 0);
    assert_eq!(data["counts"]["dislikes"], 1);

    let kinds: Vec<InteractionType> = server
        .store
        .ledger_rows(TargetType::Post, id_of(&post_id))
        .into_iter()
        .map(|i| i.interaction_type)
        .collect();
    assert_eq!(kinds, vec![InteractionType::Dislike]);

    let post = get_post(&server, None, &post_id).await?;
    assert_eq!(post["likes_count"], 0);
    assert_eq!(post["dislikes_count"], 1);

    Ok(())
}

#[tokio::test]
async fn test_remove_missing_interaction_is_ok() -> Result<()> {
    let server = TestServer::start().await?;
    let token = server.login(&subscriber())?;
    let post_id = create_post(&server, &token, "Nothing to remove").await?;

    let response = server
        .delete_json_auth("/api/v1/interactions", &token, &interaction_body("post", &post_id, "bookmark"))
        .await?;
    let data = assert_data(response, StatusCode::OK).await?;
    assert_eq!(data["was_removed"], false);

    server
        .post_auth("/api/v1/interactions", &token, &interaction_body("post", &post_id, "bookmark"))
        .await?;
    let response = server
        .delete_json_auth("/api/v1/interactions", &token, &interaction_body("post", &post_id, "bookmark"))
        .await?;
    let data = assert_data(response, StatusCode::OK).await?;
    assert_eq!(data["was_removed"], true);

    Ok(())
}

#[tokio::test]
async fn test_deleted_targets_refuse_new_interactions() -> Result<()> {
    let server = TestServer::start().await?;
    let token = server.login(&subscriber())?;
    let post_id = create_post(&server, &token, "Soon gone").await?;
    let reply = assert_data(create_reply(&server, &token, &post_id, None).await?, StatusCode::CREATED).await?;
    let reply_id = reply["id"].as_str().unwrap_or_default().to_string();

    let saved = [("post", post_id.as_str(), "bookmark"), ("reply", reply_id.as_str(), "like")];
    for (target_type, id, kind) in saved {
        let response = server
            .post_auth("/api/v1/interactions", &token, &interaction_body(target_type, id, kind))
            .await?;
        assert_data(response, StatusCode::OK).await?;
    }

    let response = server.delete_auth(&format!("/api/v1/replies/{reply_id}"), &token).await?;
    assert_data(response, StatusCode::OK).await?;
    let response = server.delete_auth(&format!("/api/v1/posts/{post_id}"), &token).await?;
    assert_data(response, StatusCode::OK).await?;

    for (target_type, id) in [("post", post_id.as_str()), ("reply", reply_id.as_str())] {
        let response = server
            .post_auth("/api/v1/interactions", &token, &interaction_body(target_type, id, "dislike"))
            .await?;
        let code = assert_error(response, StatusCode::NOT_FOUND).await?;
        assert_eq!(code, "UNKNOWN_TARGET", "{target_type}");
    }

    // Interactions saved before the delete can still be withdrawn
    for (target_type, id, kind) in saved {
        let response = server
            .delete_json_auth("/api/v1/interactions", &token, &interaction_body(target_type, id, kind))
            .await?;
        let data = assert_data(response, StatusCode::OK).await?;
        assert_eq!(data["was_removed"], true, "{target_type}");
    }
    assert!(server.store.ledger_rows(TargetType::Post, id_of(&post_id)).is_empty());
    assert!(server.store.ledger_rows(TargetType::Reply, id_of(&reply_id)).is_empty());

    Ok(())
}

#[tokio::test]
async fn test_interaction_validation() -> Result<()> {
    let server = TestServer::start().await?;
    let token = server.login(&subscriber())?;
    let post_id = create_post(&server, &token, "Validate me").await?;

    let cases = [
        (interaction_body("post", &post_id, "view"), StatusCode::BAD_REQUEST, "INVALID_INTERACTION_TYPE"),
        (interaction_body("post", &post_id, "love"), StatusCode::BAD_REQUEST, "INVALID_INTERACTION_TYPE"),
        (interaction_body("comment", &post_id, "like"), StatusCode::BAD_REQUEST, "INVALID_TARGET_TYPE"),
        (interaction_body("post", "12345", "like"), StatusCode::NOT_FOUND, "UNKNOWN_TARGET"),
        (interaction_body("reply", &post_id, "like"), StatusCode::NOT_FOUND, "UNKNOWN_TARGET"),
    ];

    for (body, status, expected) in cases {
        let code = assert_error(server.post_auth("/api/v1/interactions", &token, &body).await?, status).await?;
        assert_eq!(code, expected, "body: {body}");
    }

    Ok(())
}

#[tokio::test]
async fn test_reply_interactions_have_no_views() -> Result<()> {
    let server = TestServer::start().await?;
    let token = server.login(&subscriber())?;
    let post_id = create_post(&server, &token, "Reply likes").await?;
    let reply = assert_data(create_reply(&server, &token, &post_id, None).await?, StatusCode::CREATED).await?;
    let reply_id = reply["id"].as_str().unwrap_or_default();

    let data = assert_data(
        server
            .post_auth("/api/v1/interactions", &token, &interaction_body("reply", reply_id, "like"))
            .await?,
        StatusCode::OK,
    )
    .await?;
    assert_eq!(data["counts"]["likes"], 1);
    assert!(data["counts"].get("views").is_none());

    let post = get_post(&server, None, &post_id).await?;
    assert_eq!(post["replies"][0]["likes_count"], 1);

    Ok(())
}

#[tokio::test]
async fn test_list_user_interactions() -> Result<()> {
    let server = TestServer::start().await?;
    let token = server.login(&subscriber())?;
    let liked = create_post(&server, &token, "Liked and saved").await?;
    let untouched = create_post(&server, &token, "Untouched").await?;

    for kind in ["bookmark", "like"] {
        server
            .post_auth("/api/v1/interactions", &token, &interaction_body("post", &liked, kind))
            .await?;
    }

    let data = assert_data(
        server
            .get_auth(
                &format!("/api/v1/interactions?target_type=post&target_ids={liked},{untouched}"),
                &token,
            )
            .await?,
        StatusCode::OK,
    )
    .await?;

    assert_eq!(data[liked.as_str()], json!(["like", "bookmark"]));
    assert!(data.get(untouched.as_str()).is_none());

    Ok(())
}

#[tokio::test]
async fn test_views_recorded_once_per_signed_in_user() -> Result<()> {
    let server = TestServer::start().await?;
    let author_token = server.login(&subscriber())?;
    let reader_token = server.login(&subscriber())?;
    let post_id = create_post(&server, &author_token, "Read me").await?;

    let post = get_post(&server, None, &post_id).await?;
    assert_eq!(post["views_count"], 0);

    let post = get_post(&server, Some(&reader_token), &post_id).await?;
    assert_eq!(post["views_count"], 1);
    let post = get_post(&server, Some(&reader_token), &post_id).await?;
    assert_eq!(post["views_count"], 1);

    let post = get_post(&server, Some(&author_token), &post_id).await?;
    assert_eq!(post["views_count"], 2);

    Ok(())
}

// ============================================================================
// Categories
// ============================================================================

#[tokio::test]
async fn test_list_categories_with_stats() -> Result<()> {
    let server = TestServer::start().await?;
    let token = server.login(&subscriber())?;
    create_post(&server, &token, "Counted once").await?;
    create_post(&server, &token, "Counted twice").await?;

    let data = assert_data(server.get("/api/v1/categories").await?, StatusCode::OK).await?;
    let names: Vec<&str> = data
        .as_array()
        .map(|c| c.iter().filter_map(|c| c["name"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(
        names,
        vec!["general", "announcements", "newsletter-tips", "writing", "feedback", "showcase", "help"]
    );
    assert!(data[0].get("stats").is_none());

    let data = assert_data(server.get("/api/v1/categories?include_stats=true").await?, StatusCode::OK).await?;
    assert_eq!(data[0]["stats"]["post_count"], 2);
    assert_eq!(data[1]["stats"]["post_count"], 0);

    Ok(())
}

#[tokio::test]
async fn test_unseeded_catalog_rejects_posts() -> Result<()> {
    let server = TestServer::start_with_config(test_config(&[("FORUM_SEED_CATEGORIES", "false")])?).await?;
    let token = server.login(&subscriber())?;

    let data = assert_data(server.get("/api/v1/categories").await?, StatusCode::OK).await?;
    assert_eq!(data, json!([]));

    let response = server
        .post_auth("/api/v1/posts", &token, &create_post_body("Nowhere to go", "general"))
        .await?;
    assert_error(response, StatusCode::BAD_REQUEST).await?;

    Ok(())
}
