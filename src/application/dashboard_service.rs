use crate::common::{ApplicationError, ApplicationResult};
use crate::config::Config;
use crate::domains::dashboard::{
    Canvas, ConnectionIndicator, DashboardFrame, DashboardPublisher, DashboardView, DisplayList, RobotReadout,
    PARSE_FAILURE_NOTICE,
};
use crate::domains::joystick::{JoystickIndicator, JoystickReadout};
use crate::domains::logger::DomainLogger;
use crate::domains::path_tracking::{
    position_filter, CanvasTransform, ColorAssignment, KeyValueStore, PathMap, PathRenderer, PathStore,
    PositionFilter, RobotId,
};
use crate::domains::telemetry::{JoystickUpdate, PoseUpdate, TelemetryMessage};
use std::sync::Arc;
use tracing::debug;

/// What happened to one inbound frame.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageOutcome {
    /// Pose frame; `recorded` is false when the sample was filtered out or
    /// had no numeric position.
    Pose { robot_id: RobotId, recorded: bool },
    Joystick,
    Ignored,
    Rejected,
}

/// Owns the whole dashboard state and applies inbound events to it.
/// Every method runs to completion and republishes the dashboard.
pub struct DashboardService {
    store: PathStore,
    filter: Box<dyn PositionFilter>,
    renderer: PathRenderer,
    indicator: JoystickIndicator,
    trajectory: DisplayList,
    joystick: DisplayList,
    view: DashboardView,
    publisher: Arc<dyn DashboardPublisher>,
    logger: Arc<dyn DomainLogger>,
}

impl DashboardService {
    /// Restore the stored paths and paint the first frame.
    pub fn new(
        config: &Config,
        storage: Arc<dyn KeyValueStore>,
        publisher: Arc<dyn DashboardPublisher>,
        logger: Arc<dyn DomainLogger>,
    ) -> Self {
        let render = &config.render;
        let (width, height) = (f64::from(render.trajectory_width), f64::from(render.trajectory_height));
        let joystick_size = f64::from(render.joystick_size);

        let store = PathStore::restore(storage, config.storage.paths_key.clone());
        if !store.is_empty() {
            logger.info(&format!("Restored paths for {} robot(s)", store.paths().len()));
        }

        let mut service = Self {
            store,
            filter: position_filter(config.path_store.skip_zero_positions),
            renderer: PathRenderer::new(
                CanvasTransform::for_canvas(width, height),
                ColorAssignment::new(&render.robot_colors, render.default_color.clone()),
            ),
            indicator: JoystickIndicator::new(joystick_size),
            trajectory: DisplayList::new(width, height),
            joystick: DisplayList::new(joystick_size, joystick_size),
            view: DashboardView::default(),
            publisher,
            logger,
        };
        service.renderer.render(service.store.paths(), &mut service.trajectory);
        service.indicator.draw(None, &mut service.joystick);
        service
    }

    /// Apply one raw transport frame. Malformed frames never fail the call:
    /// they are logged and surfaced in the message panel.
    pub fn handle_message(&mut self, text: &str) -> ApplicationResult<MessageOutcome> {
        let outcome = match TelemetryMessage::parse(text) {
            Ok(TelemetryMessage::Pose(update)) => self.apply_pose(&update),
            Ok(TelemetryMessage::Joystick(update)) => {
                self.apply_joystick(&update);
                MessageOutcome::Joystick
            }
            Ok(TelemetryMessage::Unrecognized) => {
                debug!("Ignoring frame of unknown shape ({} bytes)", text.len());
                return Ok(MessageOutcome::Ignored);
            }
            Err(e) => {
                self.logger.error(&format!("Error parsing telemetry frame: {}", e));
                self.view.messages.show_notice(PARSE_FAILURE_NOTICE);
                MessageOutcome::Rejected
            }
        };
        self.publish()?;
        Ok(outcome)
    }

    fn apply_pose(&mut self, update: &PoseUpdate) -> MessageOutcome {
        let robot_id = update.robot();
        self.view.messages.upsert(RobotReadout::from_update(update));

        let recorded = match update.position() {
            Some((x, y)) if self.filter.accepts(x, y) => {
                if let Err(e) = self.store.record_position(robot_id.clone(), x, y) {
                    self.logger.error(&format!("Failed to persist paths: {}", e));
                }
                self.renderer.render(self.store.paths(), &mut self.trajectory);
                true
            }
            Some(_) => false,
            None => {
                debug!("Robot {} sent a pose without numeric x/y", robot_id);
                false
            }
        };
        MessageOutcome::Pose { robot_id, recorded }
    }

    fn apply_joystick(&mut self, update: &JoystickUpdate) {
        self.view.joystick = Some(JoystickReadout::from_update(update));
        self.indicator.draw(update.axes(), &mut self.joystick);
    }

    pub fn transport_opened(&mut self) -> ApplicationResult<()> {
        self.logger.info("Connected to webSocket server");
        self.view.connection = ConnectionIndicator::connected();
        self.publish()
    }

    pub fn transport_closed(&mut self) -> ApplicationResult<()> {
        self.logger.info("webSocket connection closed");
        self.view.connection = ConnectionIndicator::disconnected();
        self.publish()
    }

    /// Errors are reported only; the close that follows updates the indicator.
    pub fn transport_failed(&mut self, reason: &str) {
        self.logger.error(&format!("Transport error: {}", reason));
    }

    /// Operator clear: forget all paths, blank the trajectory canvas and the
    /// message panel.
    pub fn clear(&mut self) -> ApplicationResult<()> {
        self.logger.info("Clearing robot paths...");
        let cleared = self.store.clear();
        self.trajectory.clear();
        self.view.messages.clear();
        self.publish()?;
        cleared.map_err(ApplicationError::from)
    }

    pub fn publish(&self) -> ApplicationResult<()> {
        let frame = DashboardFrame {
            view: &self.view,
            trajectory: &self.trajectory,
            joystick: &self.joystick,
        };
        self.publisher
            .publish(&frame)
            .map_err(|e| ApplicationError::Publish(e.to_string()))
    }

    pub fn paths(&self) -> &PathMap {
        self.store.paths()
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    pub fn trajectory_canvas(&self) -> &DisplayList {
        &self.trajectory
    }

    pub fn joystick_canvas(&self) -> &DisplayList {
        &self.joystick
    }
}
