use crate::domains::telemetry::JoystickUpdate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DISCONNECTED_BACKGROUND: &str = "red";
pub const ESTOP_BACKGROUND: &str = "orange";
pub const AUTO_BACKGROUND: &str = "#38e0ab";
pub const MANUAL_BACKGROUND: &str = "#84599c65";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlMode {
    Auto,
    Manual,
}

impl fmt::Display for ControlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlMode::Auto => f.write_str("Auto"),
            ControlMode::Manual => f.write_str("Manual"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoystickStatus {
    Disconnected,
    EstopPressed(ControlMode),
    Active(ControlMode),
}

impl JoystickStatus {
    /// Only a literal `true` counts for `connect` and `estop`; mode `0` is
    /// automatic, anything else (including a missing mode) is manual.
    pub fn classify(connect: Option<bool>, estop: Option<bool>, mode: Option<f64>) -> Self {
        if connect != Some(true) {
            return JoystickStatus::Disconnected;
        }
        let control = if mode == Some(0.0) {
            ControlMode::Auto
        } else {
            ControlMode::Manual
        };
        if estop == Some(true) {
            JoystickStatus::EstopPressed(control)
        } else {
            JoystickStatus::Active(control)
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            JoystickStatus::Disconnected => DISCONNECTED_BACKGROUND,
            JoystickStatus::EstopPressed(_) => ESTOP_BACKGROUND,
            JoystickStatus::Active(ControlMode::Auto) => AUTO_BACKGROUND,
            JoystickStatus::Active(ControlMode::Manual) => MANUAL_BACKGROUND,
        }
    }

    pub fn connection_label(&self) -> &'static str {
        match self {
            JoystickStatus::Disconnected => "Disconnected",
            _ => "Connected",
        }
    }

    pub fn estop_label(&self) -> &'static str {
        match self {
            JoystickStatus::EstopPressed(_) => "Pressed",
            _ => "Released",
        }
    }

    pub fn mode(&self) -> ControlMode {
        match self {
            JoystickStatus::Disconnected => ControlMode::Auto,
            JoystickStatus::EstopPressed(mode) | JoystickStatus::Active(mode) => *mode,
        }
    }
}

/// Everything the joystick status panel shows for one control-state frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoystickReadout {
    pub status: JoystickStatus,
    pub name: String,
    pub robot_id: String,
    pub broker_address: String,
    pub timeout: String,
    pub axes: String,
}

impl JoystickReadout {
    pub fn from_update(update: &JoystickUpdate) -> Self {
        let status = JoystickStatus::classify(
            update.connect.as_bool(),
            update.estop.as_bool(),
            update.mode.as_f64(),
        );
        let axis = |reading: &crate::domains::telemetry::Reading| match reading.as_f64() {
            Some(v) => format!("{:.2}", v),
            None => reading.to_string(),
        };

        Self {
            status,
            name: update.name.to_string(),
            robot_id: update.robot_id.to_string(),
            broker_address: update.broker_address.to_string(),
            timeout: update
                .timeout_seconds()
                .map(|s| s.to_string())
                .unwrap_or_else(|| update.timeout.to_string()),
            axes: format!("{}, {}", axis(&update.velocity), axis(&update.angular)),
        }
    }

    pub fn background(&self) -> &'static str {
        self.status.background()
    }

    /// Panel text, one entry per line as `(label, value)`.
    pub fn lines(&self) -> Vec<Vec<(&'static str, String)>> {
        vec![
            vec![(
                "Joystick Status:",
                format!("{} ({})", self.status.connection_label(), self.name),
            )],
            vec![
                ("Control robot ID:", format!("{},", self.robot_id)),
                ("Broker IP:", self.broker_address.clone()),
            ],
            vec![
                ("Mode:", format!("{} ({}),", self.status.mode(), self.timeout)),
                ("Estop:", self.status.estop_label().to_string()),
            ],
            vec![("Axes:", self.axes.clone())],
        ]
    }
}

impl fmt::Display for JoystickReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .lines()
            .into_iter()
            .map(|line| {
                line.into_iter()
                    .map(|(label, value)| format!("{} {}", label, value))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        f.write_str(&rendered.join("\n"))
    }
}
