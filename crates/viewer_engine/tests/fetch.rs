use std::time::Duration;

use viewer_engine::{FailureKind, FetchSettings, HttpClient, ReqwestClient};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn client_returns_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("action", "parse"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"parse":{"pageid":1,"text":{"*":"<p>x</p>"}}}"#,
            "application/json; charset=utf-8",
        ))
        .mount(&server)
        .await;

    let client = ReqwestClient::new(FetchSettings::default());
    let url = format!("{}/w/api.php?action=parse&format=json&page=X", server.uri());

    let output = client.get(&url).await.expect("fetch ok");
    assert_eq!(output.metadata.original_url, url);
    assert_eq!(output.metadata.redirect_count, 0);
    assert!(output
        .metadata
        .content_type
        .unwrap()
        .starts_with("application/json"));
    assert_eq!(output.bytes, br#"{"parse":{"pageid":1,"text":{"*":"<p>x</p>"}}}"#);
}

#[tokio::test]
async fn client_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = ReqwestClient::new(FetchSettings::default());
    let url = format!("{}/missing", server.uri());

    let err = client.get(&url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn client_rejects_html_content() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html></html>", "text/html"))
        .mount(&server)
        .await;

    let client = ReqwestClient::new(FetchSettings::default());
    let url = format!("{}/page", server.uri());

    let err = client.get(&url).await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::UnsupportedContentType {
            content_type: "text/html".to_string()
        }
    );
}

#[tokio::test]
async fn client_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_raw("{}", "application/json"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let client = ReqwestClient::new(settings);
    let url = format!("{}/slow", server.uri());

    let err = client.get(&url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn client_rejects_too_large_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/large"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/json")
                .set_body_string("[0,1,2,3,4]"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: 10,
        ..FetchSettings::default()
    };
    let client = ReqwestClient::new(settings);
    let url = format!("{}/large", server.uri());

    let err = client.get(&url).await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(11)
        }
    );
}

#[tokio::test]
async fn client_rejects_invalid_url() {
    let client = ReqwestClient::new(FetchSettings::default());
    let err = client.get("not a url").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
