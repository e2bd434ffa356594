//! System health monitoring and status check handlers.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use jiff::Timestamp;
use roster_postgres::PgClient;

use crate::extract::Json;
use crate::handler::Result;
use crate::handler::response::{ErrorResponse, MonitorStatusResponse};
use crate::service::ServiceState;

/// Tracing target for monitor operations.
const TRACING_TARGET: &str = "roster_server::handler::monitors";

/// Reports overall service health based on database reachability.
#[tracing::instrument(skip_all)]
async fn health_status(
    State(pg_client): State<PgClient>,
) -> Result<(StatusCode, Json<MonitorStatusResponse>)> {
    let is_healthy = match pg_client.ping().await {
        Ok(()) => true,
        Err(error) => {
            tracing::warn!(
                target: TRACING_TARGET,
                error = %error,
                transient = error.is_transient(),
                "Database ping failed"
            );
            false
        }
    };

    let response = MonitorStatusResponse {
        updated_at: Timestamp::now(),
        is_healthy,
        pool: is_healthy.then(|| pg_client.pool_status().into()),
    };

    let status_code = if is_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    tracing::debug!(
        target: TRACING_TARGET,
        is_healthy,
        status_code = status_code.as_u16(),
        "Health status response prepared"
    );

    Ok((status_code, Json(response)))
}

fn health_status_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get system health status")
        .description("Returns the service health, including database reachability.")
        .response::<200, Json<MonitorStatusResponse>>()
        .response::<503, Json<MonitorStatusResponse>>()
        .response::<500, Json<ErrorResponse>>()
}

/// Returns routes for health monitoring.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/health", get_with(health_status, health_status_docs))
        .with_path_items(|item| item.tag("Health"))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::handler::response::MonitorStatusResponse;
    use crate::handler::test::create_test_server;

    #[tokio::test]
    async fn unreachable_database_reports_unavailable() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/health").await;
        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

        let status = response.json::<MonitorStatusResponse>();
        assert!(!status.is_healthy);
        assert!(status.pool.is_none());
        Ok(())
    }
}
