#![cfg(feature = "async")]
#![allow(clippy::result_large_err)]

mod common;

use std::time::Duration;

use awsrest::{Client, Error, ErrorKind};
use common::{CannedResponse, TestServer};

const DOMAIN_NOT_FOUND: &str = r#"<ErrorResponse xmlns="http://cloudsearch.amazonaws.com/doc/2013-01-01/">
  <Error>
    <Type>Sender</Type>
    <Code>ResourceNotFound</Code>
    <Message>Domain not found: movies</Message>
  </Error>
  <RequestId>2f1c-query</RequestId>
</ErrorResponse>"#;

#[tokio::test]
async fn rest_json_error_uses_error_type_header() -> Result<(), Error> {
    let server = TestServer::always(
        CannedResponse::json(404, r#"{"message":"Workspace ws-9 not found"}"#)
            .header("x-amzn-ErrorType", "ResourceNotFoundException:http://internal.amazon.com/"),
    );
    let client = common::async_client(&server)?;

    let err = client
        .amp()
        .describe_workspace()
        .set("workspaceId", "ws-9")
        .send()
        .await
        .expect_err("404 must fail");

    assert_eq!(err.kind(), ErrorKind::Service);
    assert_eq!(err.status(), Some(http::StatusCode::NOT_FOUND));
    assert_eq!(err.code(), Some("ResourceNotFoundException"));
    assert_eq!(err.request_id(), Some("req-test"));
    assert!(!err.is_retryable());
    Ok(())
}

#[tokio::test]
async fn aws_json_error_uses_type_field() -> Result<(), Error> {
    let server = TestServer::always(CannedResponse::json(
        400,
        r#"{"__type":"com.amazonaws.memorydb#ClusterNotFoundFault","message":"Cluster sessions not found"}"#,
    ));
    let client = common::async_client(&server)?;

    let err = client
        .memorydb()
        .describe_clusters()
        .set("ClusterName", "sessions")
        .send()
        .await
        .expect_err("400 must fail");

    assert_eq!(err.code(), Some("ClusterNotFoundFault"));
    assert!(err.to_string().contains("Cluster sessions not found"));
    Ok(())
}

#[tokio::test]
async fn query_error_is_read_from_xml() -> Result<(), Error> {
    let server = TestServer::always(CannedResponse::xml(409, DOMAIN_NOT_FOUND));
    let client = common::async_client(&server)?;

    let err = client
        .cloudsearch()
        .describe_domains()
        .set("DomainNames", serde_json::json!(["movies"]))
        .send()
        .await
        .expect_err("409 must fail");

    assert_eq!(err.kind(), ErrorKind::Service);
    assert_eq!(err.code(), Some("ResourceNotFound"));
    assert_eq!(err.request_id(), Some("2f1c-query"));

    let requests = server.requests();
    assert_eq!(
        requests[0].header("content-type"),
        Some("application/x-www-form-urlencoded; charset=utf-8")
    );
    Ok(())
}

#[tokio::test]
async fn throttling_is_classified_by_status_and_code() -> Result<(), Error> {
    let server = TestServer::sequence(vec![
        CannedResponse::json(429, "{}").header("Retry-After", "7"),
        CannedResponse::json(400, r#"{"__type":"ThrottlingException","message":"Rate exceeded"}"#),
    ]);
    let client = common::async_client(&server)?;

    let by_status = client
        .ssm_contacts()
        .list_contacts()
        .send()
        .await
        .expect_err("429 must fail");
    match by_status {
        Error::RateLimited { retry_after, .. } => {
            assert_eq!(retry_after, Some(Duration::from_secs(7)));
        }
        other => panic!("expected rate limited error, got {other:?}"),
    }

    let by_code = client
        .ssm_contacts()
        .list_contacts()
        .send()
        .await
        .expect_err("throttled response must fail");
    assert_eq!(by_code.kind(), ErrorKind::Throttling);
    assert_eq!(by_code.code(), Some("ThrottlingException"));
    assert!(by_code.is_retryable());
    Ok(())
}

#[tokio::test]
async fn server_errors_are_retried() -> Result<(), Error> {
    let server = TestServer::sequence(vec![
        CannedResponse::json(503, "{}"),
        CannedResponse::json(200, r#"{"workspaces":[]}"#),
    ]);
    let client = Client::builder()
        .region("us-east-1")
        .auth(common::test_auth()?)
        .endpoint_url(server.url())
        .max_attempts(3)
        .base_retry_delay(Duration::from_millis(1))
        .max_retry_delay(Duration::from_millis(5))
        .build()?;

    let out = client.amp().list_workspaces().send().await?;
    assert_eq!(out.json_value()?["workspaces"], serde_json::json!([]));
    assert_eq!(server.hits(), 2);
    Ok(())
}

#[tokio::test]
async fn long_retry_after_is_returned_instead_of_waited() -> Result<(), Error> {
    let server = TestServer::sequence(vec![
        CannedResponse::json(429, "{}").header("Retry-After", "86400"),
        CannedResponse::json(200, r#"{"workspaces":[]}"#),
    ]);
    let client = Client::builder()
        .region("us-east-1")
        .auth(common::test_auth()?)
        .endpoint_url(server.url())
        .max_attempts(3)
        .max_retry_delay(Duration::from_secs(1))
        .timeout(Duration::from_secs(5))
        .build()?;

    let started = std::time::Instant::now();
    let err = client
        .amp()
        .list_workspaces()
        .send()
        .await
        .expect_err("429 must fail");
    assert!(started.elapsed() < Duration::from_secs(5));
    assert_eq!(server.hits(), 1);
    match err {
        Error::RateLimited { retry_after, .. } => {
            assert_eq!(retry_after, Some(Duration::from_secs(86400)));
        }
        other => panic!("expected rate limited error, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn connection_failure_is_transport_error() -> Result<(), Error> {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("address").port()
    };
    let client = Client::builder()
        .region("us-east-1")
        .auth(common::test_auth()?)
        .endpoint_url(format!("http://127.0.0.1:{port}"))
        .max_attempts(1)
        .build()?;

    let err = client
        .amp()
        .list_workspaces()
        .send()
        .await
        .expect_err("closed port must fail");
    assert_eq!(err.kind(), ErrorKind::Transport);
    Ok(())
}

#[tokio::test]
async fn malformed_success_body_fails_on_decode() -> Result<(), Error> {
    let server = TestServer::always(CannedResponse::json(200, "<html>proxy</html>"));
    let client = common::async_client(&server)?;

    let out = client.amp().list_workspaces().send().await?;
    let err = out.json_value().expect_err("HTML is not JSON");
    assert_eq!(err.kind(), ErrorKind::Decode);
    assert_eq!(out.text(), "<html>proxy</html>");
    Ok(())
}

#[cfg(feature = "blocking")]
#[test]
fn blocking_client_classifies_the_same_way() -> Result<(), Error> {
    let server = TestServer::always(CannedResponse::xml(409, DOMAIN_NOT_FOUND));
    let client = common::blocking_client(&server)?;

    let err = client
        .cloudsearch()
        .describe_domains()
        .send()
        .expect_err("409 must fail");
    assert_eq!(err.code(), Some("ResourceNotFound"));
    assert_eq!(err.request_id(), Some("2f1c-query"));
    Ok(())
}
