use super::canvas::DisplayList;
use super::view::DashboardView;
use crate::common::DomainResult;

/// One complete dashboard state, borrowed from the service for publishing.
pub struct DashboardFrame<'a> {
    pub view: &'a DashboardView,
    pub trajectory: &'a DisplayList,
    pub joystick: &'a DisplayList,
}

/// Port for whatever shows the dashboard to an operator (HTML page, test capture, ...).
pub trait DashboardPublisher: Send + Sync {
    fn publish(&self, frame: &DashboardFrame<'_>) -> DomainResult<()>;
}
