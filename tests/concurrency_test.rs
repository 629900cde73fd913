#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::collections::HashSet;

use axum::http::{Method, StatusCode};
use common::{create, send, test_app};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_posts_get_unique_ids() {
    let app = test_app();

    let handles: Vec<_> = (0..64)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move { create(&app, &format!("item {i}"), i).await })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.expect("task panicked"));
    }
    assert_eq!(ids.len(), 64);

    let list = send(&app, Method::GET, "/items", None).await;
    assert_eq!(list.status, StatusCode::OK);
    assert_eq!(list.json().as_array().map(Vec::len), Some(64));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_deletes_and_posts_keep_store_consistent() {
    let app = test_app();
    for i in 0..32 {
        create(&app, "seed", i).await;
    }

    let mut handles = Vec::new();
    for i in 1..=32 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            send(&app, Method::DELETE, &format!("/items/item-{i}"), None)
                .await
                .status
        }));
    }
    for _ in 0..32 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            send(
                &app,
                Method::POST,
                "/items",
                Some(r#"{"Name":"fresh","Quantity":1}"#),
            )
            .await
            .status
        }));
    }
    for handle in handles {
        let status = handle.await.expect("task panicked");
        assert!(status == StatusCode::NO_CONTENT || status == StatusCode::OK);
    }

    let items = send(&app, Method::GET, "/items", None).await.json();
    let items = items.as_array().expect("list is an array");
    assert_eq!(items.len(), 32);
    assert!(items.iter().all(|item| item["Name"] == "fresh"));
}
