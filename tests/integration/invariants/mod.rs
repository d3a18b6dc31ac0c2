//! Cross-endpoint invariants
//!
//! - A user appears at most once in a post's likes, whatever the call order
//! - Concurrent edits never lose an acknowledged like
//! - Registration never creates a second account for one email

use std::collections::HashSet;

use axum::http::{Method, StatusCode};
use tokio_test::{assert_err, assert_ok};

use crate::common::{assertions, TestApp, UserFixture};

const TEXT: &str = "A post to hammer with likes";

async fn like(app: &TestApp, user: &UserFixture, id: &str, unlike: bool) -> StatusCode {
    let action = if unlike { "unlike" } else { "like" };
    app.send(
        Method::POST,
        &format!("/api/posts/{}/{}", action, id),
        None,
        Some(&user.token),
    )
    .await
    .0
}

#[tokio::test]
async fn test_like_sequence_holds_each_user_once() {
    let app = assert_ok!(TestApp::new());
    let users = vec![
        app.user("Ada").await,
        app.user("Bob").await,
        app.user("Eve").await,
    ];
    let id = app.post(&users[0], TEXT).await["id"]
        .as_str()
        .unwrap()
        .to_string();

    // (user index, unlike?)
    let script = [
        (0, false),
        (0, false),
        (1, false),
        (0, true),
        (0, true),
        (2, false),
        (1, false),
        (0, false),
        (2, true),
        (1, true),
        (1, false),
    ];

    let mut expected = HashSet::new();
    for (idx, unlike) in script {
        let user = &users[idx];
        let status = like(&app, user, &id, unlike).await;
        let changed = if unlike {
            expected.remove(&user.id.to_string())
        } else {
            expected.insert(user.id.to_string())
        };
        let want = if changed { StatusCode::OK } else { StatusCode::CONFLICT };
        assert_eq!(status, want, "step {:?}", (idx, unlike));

        let (_, post) = app
            .send(Method::GET, &format!("/api/posts/{}", id), None, None)
            .await;
        let likers = assertions::like_users(&post);
        let unique: HashSet<String> = likers.iter().cloned().collect();
        assert_eq!(unique.len(), likers.len());
        assert_eq!(unique, expected);
    }
}

#[tokio::test]
async fn test_concurrent_likes_are_never_lost() {
    let app = TestApp::new().unwrap();
    let author = app.user("Author").await;
    let mut fans = Vec::new();
    for name in ["Ann", "Ben", "Cat", "Dan"] {
        fans.push(app.user(name).await);
    }
    let id = app.post(&author, TEXT).await["id"]
        .as_str()
        .unwrap()
        .to_string();

    let (a, b, c, d) = tokio::join!(
        like(&app, &fans[0], &id, false),
        like(&app, &fans[1], &id, false),
        like(&app, &fans[2], &id, false),
        like(&app, &fans[3], &id, false),
    );

    let acknowledged: HashSet<String> = [a, b, c, d]
        .iter()
        .zip(&fans)
        .filter(|(status, _)| {
            assert!(
                **status == StatusCode::OK || **status == StatusCode::CONFLICT,
                "unexpected status {}",
                status
            );
            **status == StatusCode::OK
        })
        .map(|(_, fan)| fan.id.to_string())
        .collect();

    assert!(!acknowledged.is_empty(), "no like was accepted");

    let (_, post) = app
        .send(Method::GET, &format!("/api/posts/{}", id), None, None)
        .await;
    let stored: HashSet<String> = assertions::like_users(&post).into_iter().collect();
    assert_eq!(stored, acknowledged);
}

#[tokio::test]
async fn test_one_account_per_email() {
    let app = TestApp::new().unwrap();

    let (first, second) = tokio::join!(
        app.register("Ada", "ada@example.com"),
        app.register("Ada", "ADA@example.com"),
    );
    let statuses = [first.0, second.0];
    assert_eq!(
        statuses.iter().filter(|s| **s == StatusCode::CREATED).count(),
        1
    );
    assert_eq!(
        statuses.iter().filter(|s| **s == StatusCode::BAD_REQUEST).count(),
        1
    );
}

#[test]
fn test_postgres_provider_without_database_is_rejected() {
    let config = postboard_common::Config::from_lookup(|key| match key {
        "JWT_SECRET" => Some("secret".to_string()),
        _ => None,
    });
    assert_err!(config);
}
