//! Post endpoint integration tests
//!
//! Tests the post endpoints:
//! - GET /api/posts, GET /api/posts/{id}
//! - POST /api/posts, DELETE /api/posts/{id}
//! - POST /api/posts/like/{id}, POST /api/posts/unlike/{id}
//! - POST /api/posts/comment/{id}, DELETE /api/posts/comment/{id}/{comment_id}

use axum::http::{Method, StatusCode};
use serde_json::json;
use uuid::Uuid;

use crate::common::{assertions, TestApp};

const TEXT: &str = "An opinion worth at least ten characters";

mod test_crud {
    use super::*;

    #[tokio::test]
    async fn test_list_starts_empty() {
        let app = TestApp::new().unwrap();
        let (status, body) = app.send(Method::GET, "/api/posts", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let app = TestApp::new().unwrap();
        let ada = app.user("Ada").await;

        let created = app.post(&ada, TEXT).await;
        assert_eq!(created["user"], ada.id.to_string());
        assert_eq!(created["name"], "Ada");
        assert!(created["avatar"]
            .as_str()
            .unwrap()
            .starts_with("https://www.gravatar.com/avatar/"));
        assertions::assert_timestamp_recent(&created["date"]);

        let uri = format!("/api/posts/{}", created["id"].as_str().unwrap());
        let (status, fetched) = app.send(Method::GET, &uri, None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_with_explicit_name_and_avatar() {
        let app = TestApp::new().unwrap();
        let ada = app.user("Ada").await;

        let (status, body) = app
            .send(
                Method::POST,
                "/api/posts",
                Some(json!({ "text": TEXT, "name": "Countess", "avatar": "https://img/a.png" })),
                Some(&ada.token),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["name"], "Countess");
        assert_eq!(body["avatar"], "https://img/a.png");
    }

    #[tokio::test]
    async fn test_create_rejects_bad_text() {
        let app = TestApp::new().unwrap();
        let ada = app.user("Ada").await;

        for text in ["too short".to_string(), "y".repeat(301)] {
            let (status, body) = app
                .send(
                    Method::POST,
                    "/api/posts",
                    Some(json!({ "text": text })),
                    Some(&ada.token),
                )
                .await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assertions::assert_field_error(
                &body,
                "text",
                "Post must be between 10 and 300 characters",
            );
        }

        let (_, listed) = app.send(Method::GET, "/api/posts", None, None).await;
        assert_eq!(listed, json!([]));
    }

    #[tokio::test]
    async fn test_get_missing_post() {
        let app = TestApp::new().unwrap();
        let (status, body) = app
            .send(Method::GET, &format!("/api/posts/{}", Uuid::new_v4()), None, None)
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assertions::assert_error(&body, "NOT_FOUND");
        assert_eq!(body["error"]["message"], "No post found with that ID");
    }

    #[tokio::test]
    async fn test_delete_as_non_owner_then_owner() {
        let app = TestApp::new().unwrap();
        let ada = app.user("Ada").await;
        let bob = app.user("Bob").await;
        let created = app.post(&ada, TEXT).await;
        let uri = format!("/api/posts/{}", created["id"].as_str().unwrap());

        let (status, body) = app.send(Method::DELETE, &uri, None, Some(&bob.token)).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assertions::assert_error(&body, "AUTHORIZATION_ERROR");

        let (status, unchanged) = app.send(Method::GET, &uri, None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(unchanged, created);

        let (status, body) = app.send(Method::DELETE, &uri, None, Some(&ada.token)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true }));

        let (status, _) = app.send(Method::GET, &uri, None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

mod test_likes {
    use super::*;

    #[tokio::test]
    async fn test_like_twice_conflicts_without_mutation() {
        let app = TestApp::new().unwrap();
        let ada = app.user("Ada").await;
        let bob = app.user("Bob").await;
        let id = app.post(&ada, TEXT).await["id"].as_str().unwrap().to_string();
        let uri = format!("/api/posts/like/{}", id);

        let (status, liked) = app.send(Method::POST, &uri, None, Some(&bob.token)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(assertions::like_users(&liked), vec![bob.id.to_string()]);

        let (status, body) = app.send(Method::POST, &uri, None, Some(&bob.token)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assertions::assert_error(&body, "CONFLICT");
        assert_eq!(body["error"]["message"], "User already liked this post");

        let (_, stored) = app
            .send(Method::GET, &format!("/api/posts/{}", id), None, None)
            .await;
        assert_eq!(stored["likes"], liked["likes"]);
    }

    #[tokio::test]
    async fn test_likes_are_most_recent_first() {
        let app = TestApp::new().unwrap();
        let ada = app.user("Ada").await;
        let bob = app.user("Bob").await;
        let id = app.post(&ada, TEXT).await["id"].as_str().unwrap().to_string();
        let uri = format!("/api/posts/like/{}", id);

        app.send(Method::POST, &uri, None, Some(&ada.token)).await;
        let (_, body) = app.send(Method::POST, &uri, None, Some(&bob.token)).await;

        assert_eq!(
            assertions::like_users(&body),
            vec![bob.id.to_string(), ada.id.to_string()]
        );
    }

    #[tokio::test]
    async fn test_unlike_not_liked() {
        let app = TestApp::new().unwrap();
        let ada = app.user("Ada").await;
        let bob = app.user("Bob").await;
        let id = app.post(&ada, TEXT).await["id"].as_str().unwrap().to_string();

        app.send(
            Method::POST,
            &format!("/api/posts/like/{}", id),
            None,
            Some(&ada.token),
        )
        .await;

        let (status, body) = app
            .send(
                Method::POST,
                &format!("/api/posts/unlike/{}", id),
                None,
                Some(&bob.token),
            )
            .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["message"], "You have not yet liked this post");

        let (_, stored) = app
            .send(Method::GET, &format!("/api/posts/{}", id), None, None)
            .await;
        assert_eq!(assertions::like_users(&stored), vec![ada.id.to_string()]);
    }

    #[tokio::test]
    async fn test_like_requires_auth() {
        let app = TestApp::new().unwrap();
        let ada = app.user("Ada").await;
        let id = app.post(&ada, TEXT).await["id"].as_str().unwrap().to_string();

        let (status, _) = app
            .send(Method::POST, &format!("/api/posts/like/{}", id), None, None)
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}

mod test_comments {
    use super::*;

    #[tokio::test]
    async fn test_comment_round_trip_restores_sequence() {
        let app = TestApp::new().unwrap();
        let ada = app.user("Ada").await;
        let bob = app.user("Bob").await;
        let id = app.post(&ada, TEXT).await["id"].as_str().unwrap().to_string();
        let comment_uri = format!("/api/posts/comment/{}", id);

        let (_, first) = app
            .send(
                Method::POST,
                &comment_uri,
                Some(json!({ "text": "First comment here" })),
                Some(&ada.token),
            )
            .await;
        let before = first["comments"].clone();

        let (status, second) = app
            .send(
                Method::POST,
                &comment_uri,
                Some(json!({ "text": "Second comment here" })),
                Some(&bob.token),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        let newest = &second["comments"][0];
        assert_eq!(newest["text"], "Second comment here");
        assert_eq!(newest["user"], bob.id.to_string());
        assert_eq!(newest["name"], "Bob");
        assertions::assert_timestamp_recent(&newest["date"]);

        let (status, after) = app
            .send(
                Method::DELETE,
                &format!("{}/{}", comment_uri, newest["id"].as_str().unwrap()),
                None,
                Some(&bob.token),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(after["comments"], before);
    }

    #[tokio::test]
    async fn test_uncomment_missing_comment_or_post() {
        let app = TestApp::new().unwrap();
        let ada = app.user("Ada").await;
        let id = app.post(&ada, TEXT).await["id"].as_str().unwrap().to_string();

        let (status, body) = app
            .send(
                Method::DELETE,
                &format!("/api/posts/comment/{}/{}", id, Uuid::new_v4()),
                None,
                Some(&ada.token),
            )
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["message"], "Comment does not exist");

        let (status, body) = app
            .send(
                Method::DELETE,
                &format!("/api/posts/comment/{}/{}", Uuid::new_v4(), Uuid::new_v4()),
                None,
                Some(&ada.token),
            )
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["message"], "No post found with that ID");
    }

    #[tokio::test]
    async fn test_uncomment_by_stranger_forbidden() {
        let app = TestApp::new().unwrap();
        let ada = app.user("Ada").await;
        let bob = app.user("Bob").await;
        let eve = app.user("Eve").await;
        let id = app.post(&ada, TEXT).await["id"].as_str().unwrap().to_string();

        let (_, commented) = app
            .send(
                Method::POST,
                &format!("/api/posts/comment/{}", id),
                Some(json!({ "text": "Bob was here, hello" })),
                Some(&bob.token),
            )
            .await;
        let comment_id = commented["comments"][0]["id"].as_str().unwrap();

        let (status, body) = app
            .send(
                Method::DELETE,
                &format!("/api/posts/comment/{}/{}", id, comment_id),
                None,
                Some(&eve.token),
            )
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assertions::assert_error(&body, "AUTHORIZATION_ERROR");
    }
}
