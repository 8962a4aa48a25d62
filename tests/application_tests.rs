use gryphon_dashboard::adapters::outbound::{init_noop_logger, FileKeyValueStore, InMemoryKeyValueStore};
use gryphon_dashboard::application::{DashboardService, MessageOutcome};
use gryphon_dashboard::common::DomainResult;
use gryphon_dashboard::domains::dashboard::{
    DashboardFrame, DashboardPublisher, DashboardView, DrawCommand, PARSE_FAILURE_NOTICE,
};
use gryphon_dashboard::domains::joystick::{AUTO_BACKGROUND, DISCONNECTED_BACKGROUND, ESTOP_BACKGROUND, MANUAL_BACKGROUND};
use gryphon_dashboard::domains::path_tracking::{KeyValueStore, Position, RobotId};
use gryphon_dashboard::Config;
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

#[derive(Default)]
struct CapturePublisher {
    frames: Mutex<Vec<DashboardView>>,
}

impl CapturePublisher {
    fn count(&self) -> usize {
        self.frames.lock().unwrap().len()
    }

    fn last(&self) -> DashboardView {
        self.frames.lock().unwrap().last().cloned().unwrap()
    }
}

impl DashboardPublisher for CapturePublisher {
    fn publish(&self, frame: &DashboardFrame<'_>) -> DomainResult<()> {
        self.frames.lock().unwrap().push(frame.view.clone());
        Ok(())
    }
}

fn pose(id: u32, x: f64, y: f64) -> String {
    format!(
        r#"{{"robot":{{"id":{}}},"current_pose":{{"pose":{{"position":{{"x":{},"y":{},"z":0}}}}}},"robot_info":{{"linear_velocity":0.5,"angular_velocity":0.1,"linear_acceleration":"auto"}}}}"#,
        id, x, y
    )
}

fn joystick(connect: bool, estop: bool, mode: u32) -> String {
    format!(
        r#"{{"joystick":{{"name":"pad","connect":{},"mode":{},"estop":{},"angular":0.3,"velocity":0.75,"timeout":1,"set_robot_id":66,"broker_ip":"10.0.0.2"}}}}"#,
        connect, mode, estop
    )
}

fn service_with(storage: Arc<dyn KeyValueStore>) -> (DashboardService, Arc<CapturePublisher>) {
    let publisher = Arc::new(CapturePublisher::default());
    let service = DashboardService::new(&Config::default(), storage, publisher.clone(), init_noop_logger());
    (service, publisher)
}

#[test]
fn test_pose_samples_build_robot_path() {
    let storage = Arc::new(InMemoryKeyValueStore::new());
    let (mut service, publisher) = service_with(storage.clone());

    assert_eq!(
        service.handle_message(&pose(66, 1.0, 2.0)).unwrap(),
        MessageOutcome::Pose { robot_id: RobotId::from(66), recorded: true }
    );
    service.handle_message(&pose(66, 3.0, 4.0)).unwrap();
    assert_eq!(
        service.handle_message(&pose(66, 0.0, 0.0)).unwrap(),
        MessageOutcome::Pose { robot_id: RobotId::from(66), recorded: false }
    );

    let path = service.paths().get(&RobotId::from(66)).unwrap();
    assert_eq!(path.positions(), &[Position::new(1.0, 2.0), Position::new(3.0, 4.0)]);
    assert_eq!(service.trajectory_canvas().segment_count(), 1);
    assert_eq!(service.trajectory_canvas().arc_count(), 1);

    let stored = storage.get("robotPaths").unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&stored).unwrap();
    assert_eq!(json["66"][1]["x"], 3.0);

    assert_eq!(publisher.count(), 3);
    let view = publisher.last();
    assert_eq!(view.messages.readouts().len(), 1);
    assert_eq!(view.messages.readout("66").unwrap().x, "0");
}

#[test]
fn test_whole_float_robot_id_joins_integer_path() {
    let (mut service, _) = service_with(Arc::new(InMemoryKeyValueStore::new()));
    service.handle_message(&pose(66, 1.0, 2.0)).unwrap();
    let float_id = r#"{"robot":{"id":66.0},"current_pose":{"pose":{"position":{"x":3.0,"y":4.0,"z":0}}},"robot_info":{}}"#;

    assert_eq!(
        service.handle_message(float_id).unwrap(),
        MessageOutcome::Pose { robot_id: RobotId::from(66), recorded: true }
    );

    let keys: Vec<&str> = service.paths().keys().map(RobotId::as_str).collect();
    assert_eq!(keys, vec!["66"]);
    assert_eq!(service.paths().get(&RobotId::from(66)).unwrap().len(), 2);

    let strokes: Vec<&str> = service
        .trajectory_canvas()
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::StrokeStyle(color) => Some(color.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(strokes, vec!["#FF0000"]);

    let readouts = service.view().messages.readouts();
    assert_eq!(readouts.len(), 1);
    assert_eq!(readouts[0].x, "3");
}

#[test]
fn test_missing_robot_info_shows_placeholders() {
    let (mut service, _) = service_with(Arc::new(InMemoryKeyValueStore::new()));
    let frame = r#"{"robot":{"id":67},"current_pose":{"pose":{"position":{"x":5,"y":6,"z":0}}},"robot_info":{}}"#;

    service.handle_message(frame).unwrap();

    let readout = service.view().messages.readout("67").unwrap();
    assert_eq!(readout.angular_velocity, "N/A");
    assert_eq!(readout.linear_velocity, "N/A");
    assert_eq!(readout.linear_acceleration, "None");
    assert!(readout.to_string().contains("AVel: N/A"));
}

#[test]
fn test_malformed_frame_is_rejected_and_noticed() {
    let (mut service, publisher) = service_with(Arc::new(InMemoryKeyValueStore::new()));
    service.handle_message(&pose(66, 1.0, 2.0)).unwrap();

    assert_eq!(service.handle_message("{not json").unwrap(), MessageOutcome::Rejected);

    let view = publisher.last();
    assert_eq!(view.messages.notice(), Some(PARSE_FAILURE_NOTICE));
    assert!(view.messages.readouts().is_empty());
    assert_eq!(service.paths().len(), 1);
}

#[test]
fn test_unrecognized_frame_is_ignored_without_publishing() {
    let (mut service, publisher) = service_with(Arc::new(InMemoryKeyValueStore::new()));

    assert_eq!(service.handle_message(r#"{"status":"ok"}"#).unwrap(), MessageOutcome::Ignored);
    assert_eq!(publisher.count(), 0);
}

#[test]
fn test_clear_forgets_paths_and_storage() {
    let storage = Arc::new(InMemoryKeyValueStore::new());
    let (mut service, publisher) = service_with(storage.clone());
    service.handle_message(&pose(66, 1.0, 2.0)).unwrap();
    service.handle_message(&pose(67, -3.0, 4.0)).unwrap();

    service.clear().unwrap();

    assert!(service.paths().is_empty());
    assert!(service.trajectory_canvas().is_blank());
    assert_eq!(storage.get("robotPaths").unwrap(), None);
    assert!(publisher.last().messages.readouts().is_empty());

    service.handle_message(&pose(66, 7.0, 8.0)).unwrap();
    assert_eq!(service.paths().get(&RobotId::from(66)).unwrap().len(), 1);
}

#[test]
fn test_paths_survive_restart() {
    let dir = tempdir().unwrap();
    {
        let storage = Arc::new(FileKeyValueStore::new(dir.path()));
        let (mut service, _) = service_with(storage);
        service.handle_message(&pose(66, 1.0, 2.0)).unwrap();
        service.handle_message(&pose(66, 3.0, 4.0)).unwrap();
        service.handle_message(&pose(68, 9.0, 9.0)).unwrap();
    }

    let storage = Arc::new(FileKeyValueStore::new(dir.path()));
    let (service, _) = service_with(storage);

    assert_eq!(service.paths().len(), 2);
    assert_eq!(service.paths().get(&RobotId::from(66)).unwrap().len(), 2);
    assert_eq!(service.trajectory_canvas().segment_count(), 1);
    assert_eq!(service.trajectory_canvas().arc_count(), 2);
}

#[test]
fn test_joystick_panel_follows_control_state() {
    let (mut service, _) = service_with(Arc::new(InMemoryKeyValueStore::new()));
    let background = |service: &DashboardService| service.view().joystick.as_ref().unwrap().background();

    assert_eq!(service.handle_message(&joystick(true, false, 0)).unwrap(), MessageOutcome::Joystick);
    assert_eq!(background(&service), AUTO_BACKGROUND);

    service.handle_message(&joystick(true, false, 1)).unwrap();
    assert_eq!(background(&service), MANUAL_BACKGROUND);

    service.handle_message(&joystick(true, true, 1)).unwrap();
    assert_eq!(background(&service), ESTOP_BACKGROUND);

    service.handle_message(&joystick(false, false, 0)).unwrap();
    assert_eq!(background(&service), DISCONNECTED_BACKGROUND);

    assert_eq!(service.joystick_canvas().arc_count(), 2);
    assert!(service.paths().is_empty());
}

#[test]
fn test_transport_lifecycle_updates_connection_indicator() {
    let (mut service, publisher) = service_with(Arc::new(InMemoryKeyValueStore::new()));
    assert_eq!(service.view().connection.text, "webSocket Connecting");

    service.transport_opened().unwrap();
    assert_eq!(publisher.last().connection.color, "green");

    service.transport_failed("connection reset");
    service.transport_closed().unwrap();
    assert_eq!(publisher.last().connection.color, "red");
    assert_eq!(publisher.count(), 2);
}
