use std::time::{SystemTime, UNIX_EPOCH};

use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

use prompt_api::{
    config::Config,
    lambda::{handle_api_gateway_event, invocation_budget, ApiGatewayResponse},
    state::AppState,
};

async fn handle_request(
    state: AppState,
    event: LambdaEvent<Value>,
) -> Result<ApiGatewayResponse, Error> {
    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default();
    let timeout = invocation_budget(event.context.deadline, now_ms, state.storage_timeout);

    tracing::debug!(
        request_id = %event.context.request_id,
        budget_ms = timeout.as_millis() as u64,
        "Handling proxy event"
    );

    Ok(handle_api_gateway_event(state.repository.as_ref(), event.payload, timeout).await)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prompt_api=info".into()),
        )
        .with_current_span(false)
        .without_time()
        .init();

    // Storage client is built once per execution environment
    let config = Config::from_env()?;
    let state = AppState::new(&config).await?;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        handle_request(state.clone(), event)
    }))
    .await
}
