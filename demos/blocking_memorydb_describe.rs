#[cfg(feature = "blocking")]
use std::env;

#[cfg(feature = "blocking")]
use awsrest::{Auth, BlockingClient};

#[cfg(feature = "blocking")]
#[allow(clippy::result_large_err)]
fn main() -> Result<(), awsrest::Error> {
    let region = env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string());
    let auth = match Auth::from_env() {
        Ok(v) => v,
        Err(err) => {
            eprintln!("Set AWS_ACCESS_KEY_ID/AWS_SECRET_ACCESS_KEY: {err}");
            return Ok(());
        }
    };

    let client = BlockingClient::builder()
        .region(region)
        .auth(auth)
        .build()?;

    let mut request = client.memorydb().describe_clusters().page_size(20);
    if let Ok(name) = env::var("MEMORYDB_CLUSTER") {
        request = request.set("ClusterName", name);
    }

    for page in request.pager()? {
        let page = page?.json_value()?;
        for cluster in page["Clusters"].as_array().into_iter().flatten() {
            println!("{}\t{}", cluster["Name"], cluster["Status"]);
        }
    }

    Ok(())
}

#[cfg(not(feature = "blocking"))]
fn main() {
    eprintln!("This example requires the `blocking` feature.");
    eprintln!(
        "Try: cargo run --example blocking_memorydb_describe --no-default-features --features blocking,rustls"
    );
}
