use crate::common::{DomainError, DomainResult};
use crate::domains::path_tracking::RobotId;
use serde_json::{Number, Value};
use std::fmt;

pub const NOT_AVAILABLE: &str = "N/A";
pub const UNKNOWN_ROBOT: &str = "Unknown";
pub const NO_ACCELERATION: &str = "None";

/// A field read from a telemetry frame. Absent or `null` fields become
/// `Missing` and display as their placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Reading {
    Value(Value),
    Missing(&'static str),
}

impl Reading {
    pub fn from_field(field: Option<&Value>, placeholder: &'static str) -> Self {
        match field {
            Some(Value::Null) | None => Reading::Missing(placeholder),
            Some(value) => Reading::Value(value.clone()),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Reading::Value(value) => value.as_f64(),
            Reading::Missing(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Reading::Value(value) => value.as_bool(),
            Reading::Missing(_) => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Reading::Missing(_))
    }
}

/// Render a JSON number the way the feed's producers print it: whole
/// floats lose their fraction (`66.0` -> `66`) and `-0` prints as `0`.
pub fn format_number(number: &Number) -> String {
    match number.as_f64() {
        Some(v) if number.is_f64() && v == 0.0 => "0".to_string(),
        Some(v) if number.is_f64() && v.is_finite() => v.to_string(),
        _ => number.to_string(),
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reading::Value(Value::String(s)) => f.write_str(s),
            Reading::Value(Value::Number(n)) => f.write_str(&format_number(n)),
            Reading::Value(value) => write!(f, "{}", value),
            Reading::Missing(placeholder) => f.write_str(placeholder),
        }
    }
}

/// Pose and motion report of one robot.
#[derive(Debug, Clone, PartialEq)]
pub struct PoseUpdate {
    pub robot_id: Reading,
    pub x: Reading,
    pub y: Reading,
    pub z: Reading,
    pub linear_velocity: Reading,
    pub angular_velocity: Reading,
    pub linear_acceleration: Reading,
}

impl PoseUpdate {
    fn from_message(message: &Value) -> Self {
        let position = message
            .get("current_pose")
            .and_then(|p| p.get("pose"))
            .and_then(|p| p.get("position"));
        let info = message.get("robot_info");
        let coord = |name: &str| Reading::from_field(position.and_then(|p| p.get(name)), NOT_AVAILABLE);
        let info_field = |name: &str, placeholder: &'static str| Reading::from_field(info.and_then(|i| i.get(name)), placeholder);

        Self {
            robot_id: Reading::from_field(message.get("robot").and_then(|r| r.get("id")), UNKNOWN_ROBOT),
            x: coord("x"),
            y: coord("y"),
            z: coord("z"),
            linear_velocity: info_field("linear_velocity", NOT_AVAILABLE),
            angular_velocity: info_field("angular_velocity", NOT_AVAILABLE),
            linear_acceleration: info_field("linear_acceleration", NO_ACCELERATION),
        }
    }

    pub fn robot(&self) -> RobotId {
        RobotId::new(self.robot_id.to_string())
    }

    /// Planar position, only when both coordinates are numeric.
    pub fn position(&self) -> Option<(f64, f64)> {
        Some((self.x.as_f64()?, self.y.as_f64()?))
    }
}

/// Operator joystick / teleoperation bridge state.
#[derive(Debug, Clone, PartialEq)]
pub struct JoystickUpdate {
    pub name: Reading,
    pub connect: Reading,
    pub mode: Reading,
    pub estop: Reading,
    pub angular: Reading,
    pub velocity: Reading,
    /// Milliseconds, as sent.
    pub timeout: Reading,
    pub robot_id: Reading,
    pub broker_address: Reading,
}

impl JoystickUpdate {
    fn from_joystick(joystick: &Value) -> Self {
        let field = |name: &str| Reading::from_field(joystick.get(name), NOT_AVAILABLE);
        Self {
            name: field("name"),
            connect: field("connect"),
            mode: field("mode"),
            estop: field("estop"),
            angular: field("angular"),
            velocity: field("velocity"),
            timeout: field("timeout"),
            robot_id: field("set_robot_id"),
            broker_address: field("broker_ip"),
        }
    }

    /// `(angular, velocity)` when both axes are numeric.
    pub fn axes(&self) -> Option<(f64, f64)> {
        Some((self.angular.as_f64()?, self.velocity.as_f64()?))
    }

    pub fn timeout_seconds(&self) -> Option<f64> {
        self.timeout.as_f64().map(|ms| ms / 1000.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TelemetryMessage {
    Pose(PoseUpdate),
    Joystick(JoystickUpdate),
    Unrecognized,
}

impl TelemetryMessage {
    /// Classify one inbound text frame. Only invalid JSON is an error;
    /// frames of an unknown shape come back as `Unrecognized`.
    pub fn parse(text: &str) -> DomainResult<Self> {
        let message: Value = serde_json::from_str(text).map_err(|e| DomainError::MalformedMessage {
            reason: e.to_string(),
        })?;

        let is_pose = ["robot", "current_pose", "robot_info"]
            .iter()
            .all(|key| is_truthy(message.get(*key)));

        if is_pose {
            Ok(TelemetryMessage::Pose(PoseUpdate::from_message(&message)))
        } else if is_truthy(message.get("joystick")) {
            Ok(TelemetryMessage::Joystick(JoystickUpdate::from_joystick(&message["joystick"])))
        } else {
            Ok(TelemetryMessage::Unrecognized)
        }
    }
}

/// Loose presence test used for frame classification: absent, `null`,
/// `false`, `0` and `""` do not count.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map_or(true, |v| v != 0.0 && !v.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}
