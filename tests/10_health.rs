mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::Value;

use common::TestServer;

#[tokio::test]
async fn health_reports_unreachable_database() -> Result<()> {
    let server = TestServer::start(None).await?;

    let res = reqwest::get(server.url("/health")).await?;
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["error"], "database unavailable");
    Ok(())
}

#[tokio::test]
async fn root_lists_endpoints() -> Result<()> {
    let server = TestServer::start(None).await?;

    let res = reqwest::get(server.url("/")).await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<Value>().await?;
    assert_eq!(body["name"], "Country Admin API");
    assert!(body["endpoints"]["country_delete"].is_string());
    Ok(())
}

#[tokio::test]
async fn unknown_route_is_json_404() -> Result<()> {
    let server = TestServer::start(None).await?;

    let res = reqwest::get(server.url("/api/countries")).await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await?, serde_json::json!({ "error": "not found" }));
    Ok(())
}
