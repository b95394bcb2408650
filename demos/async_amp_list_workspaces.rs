#[cfg(feature = "async")]
use std::env;

#[cfg(feature = "async")]
use awsrest::{Auth, Client};

#[cfg(feature = "async")]
#[allow(clippy::result_large_err)]
#[tokio::main]
async fn main() -> Result<(), awsrest::Error> {
    let region = env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string());
    let auth = match Auth::from_env() {
        Ok(v) => v,
        Err(err) => {
            eprintln!("Set AWS_ACCESS_KEY_ID/AWS_SECRET_ACCESS_KEY: {err}");
            return Ok(());
        }
    };

    let client = Client::builder()
        .region(region)
        .auth(auth)
        .use_fips(env::var("AMP_USE_FIPS").is_ok())
        .build()?;

    let mut pager = client.amp().list_workspaces().page_size(25).pager()?;
    while let Some(page) = pager.next_page().await? {
        let page = page.json_value()?;
        for workspace in page["workspaces"].as_array().into_iter().flatten() {
            println!("{}\t{}", workspace["workspaceId"], workspace["alias"]);
        }
    }

    Ok(())
}

#[cfg(not(feature = "async"))]
fn main() {
    eprintln!(
        "This example requires the `async` feature. Try:\n  cargo run --example async_amp_list_workspaces"
    );
}
