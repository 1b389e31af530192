use convoca_web::{ServerConfig, WebServer};
use std::io::Write;
use warp::hyper::{self, Client as HyperClient};

#[tokio::test]
async fn server_serves_teams_over_http_and_shuts_down() {
    let mut data = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        data,
        r#"[{{"id": "conv-123", "teamName": "Quinta FC", "scheduledAt": "2025-03-06T21:00:00Z",
             "roster": [{{"id": "a", "name": "Ana"}}, {{"id": "b", "name": "Bia"}}]}}]"#
    )
    .expect("write fixture");

    let config = ServerConfig::for_tests().with_data_file(data.path());
    let server = WebServer::new(config).expect("construct server");
    let handle = server.start().await.expect("start server");
    let address = handle.address();
    assert_ne!(address.port(), 0, "ephemeral port should be assigned");

    let client = HyperClient::new();
    let uri: hyper::Uri = format!("http://{address}/api/convocations/conv-123/teams")
        .parse()
        .expect("parse uri");
    let response = client.get(uri).await.expect("request teams");
    assert_eq!(response.status(), hyper::StatusCode::OK);

    let body = hyper::body::to_bytes(response.into_body())
        .await
        .expect("read body");
    let json: serde_json::Value = serde_json::from_slice(&body).expect("parse json");
    let total = json["teams"]["shirts"].as_array().unwrap().len()
        + json["teams"]["coletes"].as_array().unwrap().len();
    assert_eq!(total, 2);

    handle.shutdown().await.expect("shutdown");
}

#[tokio::test]
async fn server_fails_fast_on_bad_data_file() {
    let config = ServerConfig::for_tests().with_data_file("/nonexistent/convocations.json");
    assert!(WebServer::new(config).is_err());
}
