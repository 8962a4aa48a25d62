use super::dashboard_service::DashboardService;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardCommand {
    Inbound(String),
    TransportOpened,
    TransportClosed,
    TransportError(String),
    Clear,
    Shutdown,
}

/// Sending side of the dashboard actor. Cheap to clone; one per producer
/// (transport, console, ...).
#[derive(Clone)]
pub struct DashboardHandle {
    sender: mpsc::Sender<DashboardCommand>,
}

impl DashboardHandle {
    pub fn new(sender: mpsc::Sender<DashboardCommand>) -> Self {
        Self { sender }
    }

    pub async fn send(&self, command: DashboardCommand) -> Result<(), String> {
        self.sender
            .send(command)
            .await
            .map_err(|e| format!("Failed to send dashboard command: {}", e))
    }

    /// Send from outside the runtime, e.g. a dedicated input thread.
    pub fn blocking_send(&self, command: DashboardCommand) -> Result<(), String> {
        self.sender
            .blocking_send(command)
            .map_err(|e| format!("Failed to send dashboard command: {}", e))
    }

    pub async fn inbound(&self, frame: String) -> Result<(), String> {
        self.send(DashboardCommand::Inbound(frame)).await
    }

    pub async fn clear(&self) -> Result<(), String> {
        self.send(DashboardCommand::Clear).await
    }

    pub async fn shutdown(&self) -> Result<(), String> {
        self.send(DashboardCommand::Shutdown).await
    }

    /// Resolves once the actor has stopped and dropped its receiver.
    pub async fn closed(&self) {
        self.sender.closed().await
    }
}

/// Run `service` on its own task. Commands are applied strictly one after
/// another in arrival order; the task hands the service back when it stops
/// (on `Shutdown` or once every handle is dropped).
pub fn spawn_dashboard(service: DashboardService, capacity: usize) -> (DashboardHandle, JoinHandle<DashboardService>) {
    let (sender, receiver) = mpsc::channel(capacity);
    let task = tokio::spawn(run_dashboard(service, receiver));
    (DashboardHandle::new(sender), task)
}

async fn run_dashboard(mut service: DashboardService, mut receiver: mpsc::Receiver<DashboardCommand>) -> DashboardService {
    while let Some(command) = receiver.recv().await {
        let result = match command {
            DashboardCommand::Inbound(frame) => service.handle_message(&frame).map(|_| ()),
            DashboardCommand::TransportOpened => service.transport_opened(),
            DashboardCommand::TransportClosed => service.transport_closed(),
            DashboardCommand::TransportError(reason) => {
                service.transport_failed(&reason);
                Ok(())
            }
            DashboardCommand::Clear => service.clear(),
            DashboardCommand::Shutdown => {
                info!("Dashboard actor shutting down");
                break;
            }
        };
        if let Err(e) = result {
            error!("Dashboard command failed: {}", e);
        }
    }
    service
}
