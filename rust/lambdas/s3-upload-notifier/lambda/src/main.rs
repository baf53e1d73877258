use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use notifier_lib::NotificationResponse;
use serde_json::Value;

async fn function_handler(event: LambdaEvent<Value>) -> Result<NotificationResponse, Error> {
    let (payload, _context) = event.into_parts();
    Ok(lambda::process_event(payload, None).await?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();

    run(service_fn(function_handler)).await
}
