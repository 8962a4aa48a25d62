use super::dashboard_actor::DashboardHandle;
use crate::common::ApplicationResult;
use async_trait::async_trait;

/// Port for anything that feeds telemetry frames into the dashboard.
///
/// A source reports its own lifecycle through the handle: `TransportOpened`
/// once connected, `Inbound` per frame, `TransportError`/`TransportClosed`
/// when it ends. `run` returns when the source is exhausted.
#[async_trait]
pub trait TelemetrySource: Send + Sync {
    async fn run(&self, dashboard: DashboardHandle) -> ApplicationResult<()>;
}
