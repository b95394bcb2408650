#![cfg(any(feature = "async", feature = "blocking"))]
#![allow(clippy::result_large_err)]

mod common;

use awsrest::{Result, types::OperationOutput};
use common::{CannedResponse, TestServer};

const JOB_BODY: &str = r#"{"jobArn":"arn:aws:batch:us-east-1:123456789012:job/j-1","jobName":"nightly","jobId":"j-1"}"#;

/// Comparable rendering of an outcome.
fn summary(outcome: &Result<OperationOutput>) -> String {
    match outcome {
        Ok(out) => format!("ok {} {:?} {}", out.status, out.request_id, out.text()),
        Err(err) => format!("err {} {:?} {:?} {err}", err.kind(), err.code(), err.status()),
    }
}

fn success_server() -> TestServer {
    TestServer::always(CannedResponse::json(200, JOB_BODY))
}

fn failure_server() -> TestServer {
    TestServer::always(
        CannedResponse::json(400, r#"{"message":"job queue is disabled"}"#)
            .header("x-amzn-ErrorType", "ClientException"),
    )
}

#[cfg(feature = "async")]
mod async_styles {
    use std::{sync::mpsc, time::Duration};

    use awsrest::{Client, Error, ErrorKind, api::OperationRequest};

    use super::*;

    fn submit(client: &Client) -> OperationRequest {
        client
            .batch()
            .submit_job()
            .set("jobName", "nightly")
            .set("jobQueue", "default")
            .set("jobDefinition", "report:3")
    }

    async fn callback_outcome(request: OperationRequest) -> Result<OperationOutput> {
        let (tx, rx) = mpsc::channel();
        request.send_with(move |outcome| {
            let _ = tx.send(outcome);
        });
        tokio::task::spawn_blocking(move || rx.recv_timeout(Duration::from_secs(10)))
            .await
            .expect("waiter must not panic")
            .expect("callback must run")
    }

    async fn all_styles(server: &TestServer) -> std::result::Result<[String; 3], Error> {
        let client = common::async_client(server)?;
        let sync = summary(&submit(&client).send().await);
        let spawned = summary(&submit(&client).spawn().await);
        let callback = summary(&callback_outcome(submit(&client)).await);
        Ok([sync, spawned, callback])
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn success_is_identical_across_styles() -> std::result::Result<(), Error> {
        let server = success_server();
        let [sync, spawned, callback] = all_styles(&server).await?;

        assert!(sync.starts_with("ok 200"), "{sync}");
        assert!(sync.contains("req-test"));
        assert_eq!(sync, spawned);
        assert_eq!(sync, callback);
        assert_eq!(server.hits(), 3);

        let requests = server.requests();
        for request in &requests {
            assert_eq!(request.method, "POST");
            assert_eq!(request.path(), "/v1/submitjob");
            assert_eq!(request.json()["jobDefinition"], "report:3");
        }
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn failure_is_identical_across_styles() -> std::result::Result<(), Error> {
        let server = failure_server();
        let [sync, spawned, callback] = all_styles(&server).await?;

        assert!(sync.contains("ClientException"), "{sync}");
        assert!(sync.contains(&ErrorKind::Service.to_string()));
        assert_eq!(sync, spawned);
        assert_eq!(sync, callback);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn missing_parameter_is_identical_across_styles() -> std::result::Result<(), Error> {
        let server = success_server();
        let client = common::async_client(&server)?;
        let incomplete = || client.batch().submit_job().set("jobName", "nightly");

        let sync = summary(&incomplete().send().await);
        let spawned = summary(&incomplete().spawn().await);
        let callback = summary(&callback_outcome(incomplete()).await);

        assert!(sync.contains("MISSING_PARAMETER"), "{sync}");
        assert!(sync.contains("[jobQueue]"), "{sync}");
        assert_eq!(sync, spawned);
        assert_eq!(sync, callback);
        assert_eq!(server.hits(), 0);
        Ok(())
    }

    #[test]
    fn without_runtime_styles_report_executor_error() -> std::result::Result<(), Error> {
        let server = success_server();
        let client = common::async_client(&server)?;

        let (tx, rx) = mpsc::channel();
        submit(&client).send_with(move |outcome| {
            let _ = tx.send(outcome);
        });
        let err = rx
            .recv_timeout(Duration::from_secs(1))
            .expect("handler must run inline")
            .expect_err("must fail without runtime");
        assert_eq!(err.kind(), ErrorKind::Executor);

        let handle = submit(&client).spawn();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime");
        let err = runtime.block_on(handle).expect_err("must fail without runtime");
        assert_eq!(err.kind(), ErrorKind::Executor);
        assert_eq!(server.hits(), 0);
        Ok(())
    }
}

#[cfg(feature = "blocking")]
mod blocking_styles {
    use std::{sync::mpsc, time::Duration};

    use awsrest::{
        BlockingClient, Error, ErrorKind,
        api::BlockingOperationRequest,
        executor::{Executor, PooledExecutor, Task},
    };

    use super::*;

    fn submit(client: &BlockingClient) -> BlockingOperationRequest {
        client
            .batch()
            .submit_job()
            .set("jobName", "nightly")
            .set("jobQueue", "default")
            .set("jobDefinition", "report:3")
    }

    fn callback_outcome(request: BlockingOperationRequest) -> Result<OperationOutput> {
        let (tx, rx) = mpsc::channel();
        request.send_async(move |outcome| {
            let _ = tx.send(outcome);
        });
        rx.recv_timeout(Duration::from_secs(10))
            .expect("callback must run")
    }

    fn all_styles(client: &BlockingClient) -> [String; 3] {
        let sync = summary(&submit(client).send());
        let callable = summary(&submit(client).send_callable().wait());
        let callback = summary(&callback_outcome(submit(client)));
        [sync, callable, callback]
    }

    #[test]
    fn success_is_identical_across_styles() -> std::result::Result<(), Error> {
        let server = success_server();
        let client = common::blocking_client(&server)?;
        let [sync, callable, callback] = all_styles(&client);

        assert!(sync.starts_with("ok 200"), "{sync}");
        assert_eq!(sync, callable);
        assert_eq!(sync, callback);
        assert_eq!(server.hits(), 3);
        Ok(())
    }

    #[test]
    fn failure_is_identical_across_styles() -> std::result::Result<(), Error> {
        let server = failure_server();
        let client = common::blocking_client(&server)?;
        let [sync, callable, callback] = all_styles(&client);

        assert!(sync.contains("ClientException"), "{sync}");
        assert_eq!(sync, callable);
        assert_eq!(sync, callback);
        Ok(())
    }

    #[test]
    fn missing_parameter_is_identical_across_styles() -> std::result::Result<(), Error> {
        let server = success_server();
        let client = common::blocking_client(&server)?;
        let incomplete = || client.batch().submit_job().set("jobName", "nightly");

        let sync = summary(&incomplete().send());
        let callable = summary(&incomplete().send_callable().wait());
        let callback = summary(&callback_outcome(incomplete()));

        assert!(sync.contains("MISSING_PARAMETER"), "{sync}");
        assert!(sync.contains("[jobQueue]"), "{sync}");
        assert_eq!(sync, callable);
        assert_eq!(sync, callback);
        assert_eq!(server.hits(), 0);
        Ok(())
    }

    #[test]
    fn pooled_executor_runs_calls() -> std::result::Result<(), Error> {
        let server = success_server();
        let client = BlockingClient::builder()
            .region("us-east-1")
            .auth(common::test_auth()?)
            .endpoint_url(server.url())
            .executor(PooledExecutor::new(2)?)
            .build()?;

        let callables: Vec<_> = (0..4).map(|_| submit(&client).send_callable()).collect();
        for callable in callables {
            let out = callable.wait()?;
            assert_eq!(out.json_value()?["jobId"], "j-1");
        }
        assert_eq!(server.hits(), 4);
        Ok(())
    }

    struct Closed;

    impl Executor for Closed {
        fn submit(&self, _task: Task) -> awsrest::Result<()> {
            Err(Error::executor("executor is closed"))
        }
    }

    #[test]
    fn rejected_submission_reaches_caller() -> std::result::Result<(), Error> {
        let server = success_server();
        let client = BlockingClient::builder()
            .region("us-east-1")
            .auth(common::test_auth()?)
            .endpoint_url(server.url())
            .executor(Closed)
            .build()?;

        let callable = submit(&client).send_callable();
        let err = callable
            .wait_timeout(Duration::from_secs(1))
            .expect("outcome must be ready")
            .expect_err("must be rejected");
        assert_eq!(err.kind(), ErrorKind::Executor);

        let err = callback_outcome(submit(&client)).expect_err("must be rejected");
        assert_eq!(err.kind(), ErrorKind::Executor);

        assert_eq!(submit(&client).send()?.status, http::StatusCode::OK);
        assert_eq!(server.hits(), 1);
        Ok(())
    }
}
