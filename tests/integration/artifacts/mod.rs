//! Artifact endpoint integration tests

use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::common::{anon_request, authed_request, parse_body, TestApp};

mod test_create_artifact {
    use super::*;

    #[tokio::test]
    async fn test_create_returns_201_with_id_for_every_kind() {
        let app = TestApp::new();
        for kind in ["model", "dataset", "code"] {
            let body = app.create_artifact(kind, &format!("{kind}-1"), "1.0").await;
            assert_eq!(body["kind"], kind);
            assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
            assert!(body.get("digest").is_some());
            assert!(body.get("created_at").is_some());
        }
    }

    #[tokio::test]
    async fn test_create_then_get_round_trips() {
        let app = TestApp::new();
        let created = app.create_artifact("model", "bert", "1.0").await;
        let id = created["id"].as_str().unwrap();

        let resp = app
            .send(anon_request(Method::GET, &format!("/artifacts/{id}"), None))
            .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let fetched = parse_body(resp).await;
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_invalid_kind_is_400_and_mutates_nothing() {
        let app = TestApp::new();
        let resp = app
            .send(authed_request(
                Method::POST,
                "/artifacts",
                Some(json!({
                    "kind": "banana",
                    "name": "b",
                    "version": "1.0",
                    "content": "abc",
                })),
            ))
            .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = parse_body(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let resp = app.send(anon_request(Method::GET, "/artifacts", None)).await;
        let listed = parse_body(resp).await;
        assert_eq!(listed.as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_create_empty_content_is_400() {
        let app = TestApp::new();
        let resp = app
            .send(authed_request(
                Method::POST,
                "/artifacts",
                Some(json!({
                    "kind": "model",
                    "name": "m",
                    "version": "1.0",
                    "content": "",
                })),
            ))
            .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_without_token_is_403() {
        let app = TestApp::new();
        let resp = app
            .send(anon_request(
                Method::POST,
                "/artifacts",
                Some(json!({
                    "kind": "model",
                    "name": "m",
                    "version": "1.0",
                    "content": "abc",
                })),
            ))
            .await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_concurrent_creates_yield_distinct_ids() {
        let app = TestApp::new();
        let n = 16;

        let mut handles = Vec::new();
        for i in 0..n {
            let app = app.clone();
            handles.push(tokio::spawn(async move {
                let body = app
                    .create_artifact("model", &format!("m{i}"), "1.0")
                    .await;
                body["id"].as_str().unwrap().to_string()
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), n);

        let resp = app.send(anon_request(Method::GET, "/artifacts", None)).await;
        let listed = parse_body(resp).await;
        assert_eq!(listed.as_array().unwrap().len(), n);
    }
}

mod test_fetch_and_search {
    use super::*;

    #[tokio::test]
    async fn test_get_unknown_id_is_404() {
        let app = TestApp::new();
        let resp = app
            .send(anon_request(Method::GET, "/artifacts/nonexistent", None))
            .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = parse_body(resp).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let app = TestApp::new();
        let a = app.create_artifact("model", "first", "1").await;
        let b = app.create_artifact("dataset", "second", "1").await;
        let c = app.create_artifact("code", "third", "1").await;

        let resp = app.send(anon_request(Method::GET, "/artifacts", None)).await;
        let listed = parse_body(resp).await;
        let ids: Vec<&str> = listed
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec![a["id"].as_str().unwrap(), b["id"].as_str().unwrap(), c["id"].as_str().unwrap()]);
    }

    #[tokio::test]
    async fn test_list_pagination() {
        let app = TestApp::new();
        for i in 0..5 {
            app.create_artifact("model", &format!("m{i}"), "1").await;
        }

        let resp = app
            .send(anon_request(Method::GET, "/artifacts?offset=1&limit=2", None))
            .await;
        let page = parse_body(resp).await;
        let names: Vec<&str> = page
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["m1", "m2"]);
    }

    #[tokio::test]
    async fn test_find_by_name_exact() {
        let app = TestApp::new();
        app.create_artifact("model", "bert", "1").await;
        app.create_artifact("dataset", "bert", "2").await;
        app.create_artifact("model", "bert-large", "1").await;

        let resp = app
            .send(anon_request(Method::GET, "/artifacts/by-name/bert", None))
            .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let found = parse_body(resp).await;
        assert_eq!(found.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_search_by_regex() {
        let app = TestApp::new();
        app.create_artifact("model", "bert", "1").await;
        app.create_artifact("model", "bert-large", "1").await;
        app.create_artifact("code", "tokenizer", "1").await;

        let resp = app
            .send(anon_request(
                Method::POST,
                "/artifacts/by-regex",
                Some(json!({"regex": "^bert"})),
            ))
            .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let found = parse_body(resp).await;
        assert_eq!(found.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_search_invalid_regex_is_400() {
        let app = TestApp::new();
        let resp = app
            .send(anon_request(
                Method::POST,
                "/artifacts/by-regex",
                Some(json!({"regex": "["})),
            ))
            .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
