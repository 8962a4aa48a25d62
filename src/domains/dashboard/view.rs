use crate::domains::joystick::JoystickReadout;
use crate::domains::telemetry::PoseUpdate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const PARSE_FAILURE_NOTICE: &str = "Failed to parse message";

/// Text block shown for one robot in the message panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotReadout {
    pub robot_id: String,
    pub x: String,
    pub y: String,
    pub z: String,
    pub linear_velocity: String,
    pub angular_velocity: String,
    pub linear_acceleration: String,
}

impl RobotReadout {
    pub fn from_update(update: &PoseUpdate) -> Self {
        Self {
            robot_id: update.robot_id.to_string(),
            x: update.x.to_string(),
            y: update.y.to_string(),
            z: update.z.to_string(),
            linear_velocity: update.linear_velocity.to_string(),
            angular_velocity: update.angular_velocity.to_string(),
            linear_acceleration: update.linear_acceleration.to_string(),
        }
    }
}

impl fmt::Display for RobotReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Robot ID: {}", self.robot_id)?;
        writeln!(f, "Current Pose:")?;
        writeln!(f, "  x: {}", self.x)?;
        writeln!(f, "  y: {}", self.y)?;
        writeln!(f, "  z: {}", self.z)?;
        writeln!(f, "Robot Info:")?;
        writeln!(f, "  LVel: {}", self.linear_velocity)?;
        writeln!(f, "  AVel: {}", self.angular_velocity)?;
        write!(f, "  mode: {}", self.linear_acceleration)
    }
}

/// Scrollable per-robot panel. Blocks keep the order in which robots first
/// reported; a later report replaces the robot's block in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessagePanel {
    notice: Option<String>,
    readouts: Vec<RobotReadout>,
}

impl MessagePanel {
    pub fn upsert(&mut self, readout: RobotReadout) {
        match self.readouts.iter_mut().find(|r| r.robot_id == readout.robot_id) {
            Some(existing) => *existing = readout,
            None => self.readouts.push(readout),
        }
    }

    /// Replace the whole panel content with a notice.
    pub fn show_notice(&mut self, notice: impl Into<String>) {
        self.readouts.clear();
        self.notice = Some(notice.into());
    }

    pub fn clear(&mut self) {
        self.readouts.clear();
        self.notice = None;
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn readouts(&self) -> &[RobotReadout] {
        &self.readouts
    }

    pub fn readout(&self, robot_id: &str) -> Option<&RobotReadout> {
        self.readouts.iter().find(|r| r.robot_id == robot_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionIndicator {
    pub text: String,
    pub color: String,
}

impl ConnectionIndicator {
    pub fn connecting() -> Self {
        Self {
            text: "webSocket Connecting".to_string(),
            color: "gray".to_string(),
        }
    }

    pub fn connected() -> Self {
        Self {
            text: "webSocket Connected".to_string(),
            color: "green".to_string(),
        }
    }

    pub fn disconnected() -> Self {
        Self {
            text: "webSocket Disconnected".to_string(),
            color: "red".to_string(),
        }
    }
}

impl Default for ConnectionIndicator {
    fn default() -> Self {
        Self::connecting()
    }
}

/// Text-side state of the dashboard: everything except the two canvases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub messages: MessagePanel,
    pub joystick: Option<JoystickReadout>,
    pub connection: ConnectionIndicator,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readout(id: &str, x: &str) -> RobotReadout {
        RobotReadout {
            robot_id: id.to_string(),
            x: x.to_string(),
            y: "1".to_string(),
            z: "0".to_string(),
            linear_velocity: "0.1".to_string(),
            angular_velocity: "N/A".to_string(),
            linear_acceleration: "None".to_string(),
        }
    }

    #[test]
    fn test_upsert_keeps_first_seen_order() {
        let mut panel = MessagePanel::default();
        panel.upsert(readout("67", "1"));
        panel.upsert(readout("66", "1"));
        panel.upsert(readout("67", "2"));

        let ids: Vec<&str> = panel.readouts().iter().map(|r| r.robot_id.as_str()).collect();
        assert_eq!(ids, vec!["67", "66"]);
        assert_eq!(panel.readout("67").unwrap().x, "2");
    }

    #[test]
    fn test_notice_replaces_blocks_until_clear() {
        let mut panel = MessagePanel::default();
        panel.upsert(readout("66", "1"));
        panel.show_notice(PARSE_FAILURE_NOTICE);
        assert!(panel.readouts().is_empty());
        assert_eq!(panel.notice(), Some(PARSE_FAILURE_NOTICE));

        panel.upsert(readout("66", "3"));
        assert_eq!(panel.readouts().len(), 1);
        assert_eq!(panel.notice(), Some(PARSE_FAILURE_NOTICE));

        panel.clear();
        assert_eq!(panel, MessagePanel::default());
    }

    #[test]
    fn test_readout_text_block() {
        let text = readout("66", "1.5").to_string();
        assert!(text.starts_with("Robot ID: 66\nCurrent Pose:\n  x: 1.5\n"));
        assert!(text.ends_with("  AVel: N/A\n  mode: None"));
    }
}
