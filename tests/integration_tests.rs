use async_trait::async_trait;
use gryphon_dashboard::adapters::outbound::{init_noop_logger, InMemoryKeyValueStore, HtmlFilePublisher};
use gryphon_dashboard::application::{
    spawn_dashboard, DashboardCommand, DashboardHandle, DashboardService, TelemetrySource,
};
use gryphon_dashboard::common::ApplicationResult;
use gryphon_dashboard::domains::path_tracking::{Position, RobotId};
use gryphon_dashboard::Config;
use std::sync::Arc;
use tempfile::tempdir;

/// Replays a fixed list of frames, then reports the feed as closed.
struct ScriptedSource {
    frames: Vec<String>,
}

#[async_trait]
impl TelemetrySource for ScriptedSource {
    async fn run(&self, dashboard: DashboardHandle) -> ApplicationResult<()> {
        let to_err = gryphon_dashboard::common::ApplicationError::Transport;
        dashboard.send(DashboardCommand::TransportOpened).await.map_err(to_err)?;
        for frame in &self.frames {
            dashboard.inbound(frame.clone()).await.map_err(to_err)?;
        }
        dashboard.send(DashboardCommand::TransportClosed).await.map_err(to_err)
    }
}

fn pose(id: u32, x: f64, y: f64) -> String {
    format!(
        r#"{{"robot":{{"id":{}}},"current_pose":{{"pose":{{"position":{{"x":{},"y":{},"z":0}}}}}},"robot_info":{{}}}}"#,
        id, x, y
    )
}

fn build_service(output: &std::path::Path) -> DashboardService {
    let mut config = Config::default();
    config.render.output = output.to_path_buf();
    DashboardService::new(
        &config,
        Arc::new(InMemoryKeyValueStore::new()),
        Arc::new(HtmlFilePublisher::new(output, 0)),
        init_noop_logger(),
    )
}

#[tokio::test]
async fn test_actor_applies_commands_in_arrival_order() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("dashboard.html");
    let (dashboard, task) = spawn_dashboard(build_service(&output), 4);

    dashboard.inbound(pose(66, 1.0, 1.0)).await.unwrap();
    dashboard.clear().await.unwrap();
    dashboard.inbound(pose(66, 2.0, 2.0)).await.unwrap();
    dashboard.inbound(pose(66, 3.0, 3.0)).await.unwrap();
    dashboard.shutdown().await.unwrap();

    let service = task.await.unwrap();
    let path = service.paths().get(&RobotId::from(66)).unwrap();
    assert_eq!(path.positions(), &[Position::new(2.0, 2.0), Position::new(3.0, 3.0)]);
    assert!(output.exists());
}

#[tokio::test]
async fn test_actor_stops_when_every_handle_is_dropped() {
    let dir = tempdir().unwrap();
    let (dashboard, task) = spawn_dashboard(build_service(&dir.path().join("page.html")), 4);

    dashboard.inbound(pose(67, 5.0, 5.0)).await.unwrap();
    drop(dashboard);

    let service = task.await.unwrap();
    assert_eq!(service.paths().len(), 1);
}

#[tokio::test]
async fn test_scripted_source_drives_dashboard() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("dashboard.html");
    let (dashboard, task) = spawn_dashboard(build_service(&output), 16);

    let source = ScriptedSource {
        frames: vec![
            pose(66, 1.0, 2.0),
            "garbage".to_string(),
            pose(67, -1.0, 4.0),
            r#"{"joystick":{"connect":true,"mode":0,"estop":false,"angular":0.6,"velocity":0}}"#.to_string(),
        ],
    };
    source.run(dashboard.clone()).await.unwrap();
    dashboard.shutdown().await.unwrap();

    let service = task.await.unwrap();
    assert_eq!(service.paths().len(), 2);
    assert_eq!(service.view().connection.text, "webSocket Disconnected");
    assert!(service.view().messages.notice().is_some());
    assert!(service.view().joystick.is_some());

    let page = std::fs::read_to_string(&output).unwrap();
    assert!(page.contains("webSocket Disconnected"));
    assert!(page.contains("id=\"pathCanvas\""));
    assert!(page.contains("robot-group-67"));
}

#[tokio::test]
async fn test_handle_reports_stopped_dashboard() {
    let dir = tempdir().unwrap();
    let (dashboard, task) = spawn_dashboard(build_service(&dir.path().join("page.html")), 4);

    dashboard.shutdown().await.unwrap();
    task.await.unwrap();

    dashboard.closed().await;
    assert!(dashboard.clear().await.is_err());
}
