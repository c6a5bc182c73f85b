//! Liveness, readiness and service banner endpoints.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

/// Identity of the running service, shared by the probe handlers.
#[derive(Debug, Clone, Copy)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
}

impl ServiceInfo {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            version: "1.0.0",
        }
    }
}

#[derive(Serialize)]
pub struct ProbeResponse {
    pub status: &'static str,
    pub service: &'static str,
}

#[derive(Serialize)]
pub struct BannerResponse {
    pub service: &'static str,
    pub version: &'static str,
}

/// GET /health: the process is up.
pub async fn check(State(info): State<ServiceInfo>) -> Json<ProbeResponse> {
    Json(ProbeResponse {
        status: "healthy",
        service: info.name,
    })
}

/// GET /ready: the process accepts traffic.
pub async fn ready(State(info): State<ServiceInfo>) -> Json<ProbeResponse> {
    Json(ProbeResponse {
        status: "ready",
        service: info.name,
    })
}

/// GET /: service name and version.
pub async fn root(State(info): State<ServiceInfo>) -> Json<BannerResponse> {
    Json(BannerResponse {
        service: info.name,
        version: info.version,
    })
}
