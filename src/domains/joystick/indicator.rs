use crate::domains::dashboard::Canvas;
use std::f64::consts::PI;

pub const MAX_ANGULAR_VELOCITY: f64 = 0.6;
pub const MAX_LINEAR_VELOCITY: f64 = 1.5;

const BOUNDARY_COLOR: &str = "#ccc";
const CROSSHAIR_COLOR: &str = "#ddd";
const DOT_COLOR: &str = "#39aa3d";
const DOT_RADIUS: f64 = 5.0;
const BOUNDARY_INSET: f64 = 15.0;
const TRAVEL_INSET: f64 = 20.0;
const CROSSHAIR_INSET: f64 = 10.0;

/// Square joystick view: a boundary circle, a crosshair and a dot placed by
/// the commanded `(angular, velocity)` pair.
#[derive(Debug, Clone, Copy)]
pub struct JoystickIndicator {
    size: f64,
}

impl JoystickIndicator {
    pub fn new(size: f64) -> Self {
        Self { size }
    }

    fn center(&self) -> f64 {
        self.size / 2.0
    }

    /// Angular maps to the horizontal axis, forward velocity points up.
    /// Values beyond the maxima land outside the boundary.
    pub fn dot_position(&self, angular: f64, velocity: f64) -> (f64, f64) {
        let c = self.center();
        let travel = c - TRAVEL_INSET;
        (
            c + (angular / MAX_ANGULAR_VELOCITY) * travel,
            c - (velocity / MAX_LINEAR_VELOCITY) * travel,
        )
    }

    /// Redraw the indicator. Without axes only the background is drawn.
    pub fn draw(&self, axes: Option<(f64, f64)>, canvas: &mut dyn Canvas) {
        let c = self.center();
        canvas.clear();

        canvas.begin_path();
        canvas.arc(c, c, c - BOUNDARY_INSET, 0.0, 2.0 * PI);
        canvas.set_stroke_style(BOUNDARY_COLOR);
        canvas.set_line_width(2.0);
        canvas.stroke();

        canvas.begin_path();
        canvas.move_to(c, CROSSHAIR_INSET);
        canvas.line_to(c, self.size - CROSSHAIR_INSET);
        canvas.move_to(CROSSHAIR_INSET, c);
        canvas.line_to(self.size - CROSSHAIR_INSET, c);
        canvas.set_stroke_style(CROSSHAIR_COLOR);
        canvas.stroke();

        if let Some((angular, velocity)) = axes {
            let (x, y) = self.dot_position(angular, velocity);
            canvas.begin_path();
            canvas.arc(x, y, DOT_RADIUS, 0.0, 2.0 * PI);
            canvas.set_fill_style(DOT_COLOR);
            canvas.fill();
        }
    }
}
