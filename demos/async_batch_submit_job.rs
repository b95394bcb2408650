#[cfg(feature = "async")]
use std::env;

#[cfg(feature = "async")]
use awsrest::Client;

#[cfg(feature = "async")]
#[allow(clippy::result_large_err)]
#[tokio::main]
async fn main() -> Result<(), awsrest::Error> {
    let (queue, definition) = match (env::var("BATCH_JOB_QUEUE"), env::var("BATCH_JOB_DEFINITION")) {
        (Ok(queue), Ok(definition)) => (queue, definition),
        _ => {
            eprintln!("Set BATCH_JOB_QUEUE and BATCH_JOB_DEFINITION to run this example.");
            return Ok(());
        }
    };

    // Region, credentials and endpoint overrides all come from AWS_* variables.
    let client = match Client::from_env().and_then(|builder| builder.build()) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("Set AWS_REGION and AWS_ACCESS_KEY_ID/AWS_SECRET_ACCESS_KEY: {err}");
            return Ok(());
        }
    };

    let submitted = client
        .batch()
        .submit_job()
        .set("jobName", "awsrest-demo")
        .set("jobQueue", queue.as_str())
        .set("jobDefinition", definition.as_str())
        .set("parameters", serde_json::json!({ "mode": "demo" }))
        .send()
        .await?;
    let job = submitted.json_value()?;
    println!("submitted {} ({})", job["jobName"], job["jobId"]);

    let described = client
        .batch()
        .describe_jobs()
        .set("jobs", serde_json::json!([job["jobId"]]))
        .spawn()
        .await?;
    println!("{}", described.text());

    Ok(())
}

#[cfg(not(feature = "async"))]
fn main() {
    eprintln!(
        "This example requires the `async` feature. Try:\n  cargo run --example async_batch_submit_job"
    );
}
