//! Admin server integration tests.

use axum::http::StatusCode;
use serde_json::{json, Value};

mod common;

const ROUTES: &str = "\
route add web example.com/ http://10.0.0.1:8080/
route add api /api http://10.0.0.2:9000/ weight 0.5 tags \"blue\"
";

#[tokio::test]
async fn test_health() {
    let (addr, shutdown) = common::start_admin(common::static_config("")).await;

    let res = common::client().get(format!("http://{addr}/health")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "OK\n");

    shutdown.trigger();
}

#[tokio::test]
async fn test_api_routes() {
    let (addr, shutdown) = common::start_admin(common::static_config(ROUTES)).await;

    let routes: Value = common::client()
        .get(format!("http://{addr}/api/routes"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(
        routes,
        json!([
            { "service": "web", "src": "example.com/", "dst": "http://10.0.0.1:8080/" },
            { "service": "api", "src": "/api", "dst": "http://10.0.0.2:9000/", "weight": 0.5, "tags": ["blue"] },
        ])
    );

    shutdown.trigger();
}

#[tokio::test]
async fn test_api_config() {
    let mut config = common::static_config("");
    config.proxy.client_ip_header = "Client-IP".into();
    config.proxy.local_ip = "5.6.7.8".into();
    let (addr, shutdown) = common::start_admin(config).await;

    let body: Value = common::client()
        .get(format!("http://{addr}/api/config"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["proxy"]["client_ip_header"], "Client-IP");
    assert_eq!(body["proxy"]["local_ip"], "5.6.7.8");
    assert_eq!(body["registry"]["backend"], "static");

    shutdown.trigger();
}

#[tokio::test]
async fn test_api_version() {
    let (addr, shutdown) = common::start_admin(common::static_config("")).await;

    let body: Value = common::client()
        .get(format!("http://{addr}/api/version"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));

    shutdown.trigger();
}

#[tokio::test]
async fn test_root_redirects_to_routes_page() {
    let mut config = common::static_config(ROUTES);
    config.ui.title = "edge".into();
    let (addr, shutdown) = common::start_admin(config).await;
    let client = common::client();

    let res = client.get(format!("http://{addr}/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers()["location"], "/routes");

    let page = client
        .get(format!("http://{addr}/routes"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains("<h1>edge</h1>"));
    assert!(page.contains("http://10.0.0.2:9000/"));

    shutdown.trigger();
}

#[tokio::test]
async fn test_graceful_shutdown() {
    let (addr, shutdown) = common::start_admin(common::static_config("")).await;

    assert_eq!(shutdown.trigger(), 1);
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;

    assert!(common::client().get(format!("http://{addr}/health")).send().await.is_err());
}
