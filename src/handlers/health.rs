use axum::{
    extract::{rejection::QueryRejection, Path, Query},
    response::Json,
};
use serde_json::{json, Value};
use std::net::{IpAddr, Ipv4Addr};
use tracing::{instrument, warn};

use crate::models::Health;

/// Raw query pairs. Parsed as a list so a repeated key cannot fail the request.
type HealthQuery = Result<Query<Vec<(String, String)>>, QueryRejection>;

/// Health check endpoint handler
#[instrument(name = "health_check", skip_all)]
pub async fn health_check(query: HealthQuery) -> Json<Health> {
    Json(Health::ok(resolve_ip_address(), echo_param(query), None))
}

/// Health check endpoint handler that also echoes the trailing path segment
#[instrument(name = "health_check_with_path", skip_all)]
pub async fn health_check_with_path(
    Path(path_echo): Path<String>,
    query: HealthQuery,
) -> Json<Health> {
    Json(Health::ok(resolve_ip_address(), echo_param(query), Some(path_echo)))
}

/// Last `echo` value in the query string; unreadable queries count as absent
fn echo_param(query: HealthQuery) -> Option<String> {
    match query {
        Ok(Query(pairs)) => pairs
            .into_iter()
            .filter(|(key, _)| key == "echo")
            .map(|(_, value)| value)
            .last(),
        Err(rejection) => {
            warn!("Ignoring unreadable health query: {}", rejection);
            None
        }
    }
}

/// Informational landing message
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the City/Restaurant API. See /health for service status and /metrics for Prometheus metrics."
    }))
}

/// Address of the interface used for outbound traffic. Falls back to the
/// loopback address so the health endpoint itself never fails.
fn resolve_ip_address() -> String {
    match local_ip_address::local_ip() {
        Ok(ip) => ip.to_string(),
        Err(e) => {
            warn!(error = %e, "Failed to detect local IP address");
            IpAddr::V4(Ipv4Addr::LOCALHOST).to_string()
        }
    }
}
