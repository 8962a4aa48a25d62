use super::aggregate::{PathMap, Position, RobotId};
use crate::domains::dashboard::Canvas;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::f64::consts::PI;

pub const DEFAULT_PATH_COLOR: &str = "#000000";
pub const PATH_LINE_WIDTH: f64 = 2.0;
pub const MARKER_RADIUS: f64 = 5.0;

static KNOWN_ROBOT_COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([("66", "#FF0000"), ("67", "#0000FF"), ("68", "#00FF00")])
});

/// Robot id to display color, with a fallback for unknown robots.
#[derive(Debug, Clone)]
pub struct ColorAssignment {
    colors: HashMap<String, String>,
    fallback: String,
}

impl ColorAssignment {
    /// Built-in fleet colors, extended or overridden by `overrides`.
    pub fn new(overrides: &HashMap<String, String>, fallback: impl Into<String>) -> Self {
        let mut colors: HashMap<String, String> = KNOWN_ROBOT_COLORS
            .iter()
            .map(|(id, color)| (id.to_string(), color.to_string()))
            .collect();
        colors.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self {
            colors,
            fallback: fallback.into(),
        }
    }

    pub fn color_for(&self, robot_id: &RobotId) -> &str {
        self.colors
            .get(robot_id.as_str())
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }
}

impl Default for ColorAssignment {
    fn default() -> Self {
        Self::new(&HashMap::new(), DEFAULT_PATH_COLOR)
    }
}

/// Robot frame to canvas pixels. The x axis is mirrored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    pub scale_x: f64,
    pub scale_y: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl CanvasTransform {
    /// Unit scale, origin at the horizontal centre and one eighth from the top.
    pub fn for_canvas(width: f64, height: f64) -> Self {
        Self {
            scale_x: 1.0,
            scale_y: 1.0,
            offset_x: width / 2.0,
            offset_y: height / 8.0,
        }
    }

    pub fn project(&self, position: &Position) -> (f64, f64) {
        (
            -position.x * self.scale_x + self.offset_x,
            position.y * self.scale_y + self.offset_y,
        )
    }
}

pub struct PathRenderer {
    transform: CanvasTransform,
    colors: ColorAssignment,
}

impl PathRenderer {
    pub fn new(transform: CanvasTransform, colors: ColorAssignment) -> Self {
        Self { transform, colors }
    }


    /// Repaint `canvas` from scratch: one polyline per robot plus a marker
    /// on its latest position.
    pub fn render(&self, paths: &PathMap, canvas: &mut dyn Canvas) {
        canvas.clear();

        for (robot_id, path) in paths {
            let Some(last) = path.last() else {
                continue;
            };
            let color = self.colors.color_for(robot_id);

            canvas.begin_path();
            for (i, position) in path.positions().iter().enumerate() {
                let (x, y) = self.transform.project(position);
                if i == 0 {
                    canvas.move_to(x, y);
                } else {
                    canvas.line_to(x, y);
                }
            }
            canvas.set_stroke_style(color);
            canvas.set_line_width(PATH_LINE_WIDTH);
            canvas.stroke();

            let (x, y) = self.transform.project(last);
            canvas.begin_path();
            canvas.arc(x, y, MARKER_RADIUS, 0.0, 2.0 * PI);
            canvas.set_fill_style(color);
            canvas.fill();
        }
    }
}
