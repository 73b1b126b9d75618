mod common;

use std::collections::HashSet;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;
use tokio::task::JoinSet;

use common::TestApp;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_each_get_their_own_row() -> Result<()> {
    let app = TestApp::spawn().await?;

    let mut tasks = JoinSet::new();
    for n in 0..32 {
        let app = app.clone();
        tasks.spawn(async move {
            let name = format!("item-{}", n);
            let res = app
                .create(json!({
                    "color": "red",
                    "size": "medium",
                    "name": name,
                    "cost": n,
                    "retired": 0
                }))
                .await?;
            anyhow::Ok((name, n, res))
        });
    }

    let mut ids = HashSet::new();
    while let Some(joined) = tasks.join_next().await {
        let (name, cost, res) = joined??;
        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.body["data"]["name"], name.as_str());
        assert_eq!(res.body["data"]["cost"], cost);

        let id = res.body["data"]["id"].as_i64().unwrap();
        assert!(ids.insert(id), "id {} handed out twice", id);
    }

    assert_eq!(ids.len(), 32);
    assert_eq!(app.count().await?, 34);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_updates_and_reads_stay_consistent() -> Result<()> {
    let app = TestApp::spawn().await?;

    let mut tasks = JoinSet::new();
    for n in 0..16 {
        let app = app.clone();
        tasks.spawn(async move {
            let update = app.update(json!({ "id": 1, "cost": n })).await?;
            let read = app.find_one(2).await?;
            anyhow::Ok((update, read))
        });
    }

    while let Some(joined) = tasks.join_next().await {
        let (update, read) = joined??;
        assert_eq!(update.status, StatusCode::OK);
        assert_eq!(update.body["data"]["name"], "whoa");
        assert_eq!(read.status, StatusCode::OK);
        assert_eq!(read.body["data"]["cost"], 1);
    }
    Ok(())
}
