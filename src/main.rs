use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jira_event_adapter::{Credentials, InboundEvent, JiraClient};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Refuse to serve at all with incomplete credentials.
    let credentials = Credentials::from_env()?;
    let client = JiraClient::new(credentials);
    let client = &client;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<InboundEvent>| async move {
        handler(client, event).await
    }))
    .await
}

async fn handler(client: &JiraClient, event: LambdaEvent<InboundEvent>) -> Result<Value, Error> {
    let response = client.create_issue(&event.payload).await?;
    Ok(serde_json::to_value(response)?)
}
