#[cfg(feature = "blocking")]
use std::{env, sync::mpsc, time::Duration};

#[cfg(feature = "blocking")]
use awsrest::{Auth, BlockingClient, executor::PooledExecutor};

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
        .executor(PooledExecutor::new(4)?)
        .build()?;

    // Callable: submit now, collect later.
    let contacts = client.ssm_contacts().list_contacts().send_callable();
    let presets = client.mediaconvert().list_presets().send_callable();

    // Callback: the handler runs on an executor thread.
    let (tx, rx) = mpsc::channel();
    client
        .iotevents()
        .list_detector_models()
        .send_async(move |outcome| {
            let _ = tx.send(outcome.map(|out| out.text()));
        });

    match contacts.wait_timeout(Duration::from_secs(30)) {
        Some(outcome) => println!("contacts: {}", outcome?.text()),
        None => eprintln!("contacts: still running"),
    }
    println!("presets: {}", presets.wait()?.text());

    match rx.recv_timeout(Duration::from_secs(30)) {
        Ok(outcome) => println!("detector models: {}", outcome?),
        Err(_) => eprintln!("detector models: no answer"),
    }

    Ok(())
}

#[cfg(not(feature = "blocking"))]
fn main() {
    eprintln!("This example requires the `blocking` feature.");
    eprintln!(
        "Try: cargo run --example blocking_callable_and_callback --no-default-features --features blocking,rustls"
    );
}
