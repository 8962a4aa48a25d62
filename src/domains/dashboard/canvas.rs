use serde::{Deserialize, Serialize};

/// 2D drawing surface with immediate-mode path semantics: `begin_path`
/// starts a new path, `move_to`/`line_to`/`arc` extend it, `stroke`/`fill`
/// paint it with the current style.
pub trait Canvas {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    /// Clockwise arc around `(cx, cy)` from `start` to `end` radians.
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64);
    fn set_stroke_style(&mut self, color: &str);
    fn set_fill_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn stroke(&mut self);
    fn fill(&mut self);

    fn clear(&mut self) {
        let (w, h) = (self.width(), self.height());
        self.clear_rect(0.0, 0.0, w, h);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    ClearRect { x: f64, y: f64, width: f64, height: f64 },
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Arc { cx: f64, cy: f64, radius: f64, start: f64, end: f64 },
    StrokeStyle(String),
    FillStyle(String),
    LineWidth(f64),
    Stroke,
    Fill,
}

/// Canvas that keeps the commands issued since the last full clear.
///
/// A `clear_rect` covering the whole surface discards everything recorded
/// before it, so the list always describes exactly what is visible.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayList {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_blank(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of straight segments drawn (`line_to` calls).
    pub fn segment_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::LineTo { .. }))
            .count()
    }

    /// Number of arcs (markers, boundaries, dots) drawn.
    pub fn arc_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Arc { .. }))
            .count()
    }

    fn covers_surface(&self, x: f64, y: f64, width: f64, height: f64) -> bool {
        x <= 0.0 && y <= 0.0 && x + width >= self.width && y + height >= self.height
    }
}

impl Canvas for DisplayList {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        if self.covers_surface(x, y, width, height) {
            self.commands.clear();
        } else {
            self.commands.push(DrawCommand::ClearRect { x, y, width, height });
        }
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo { x, y });
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64) {
        self.commands.push(DrawCommand::Arc {
            cx,
            cy,
            radius,
            start,
            end,
        });
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.commands.push(DrawCommand::StrokeStyle(color.to_string()));
    }

    fn set_fill_style(&mut self, color: &str) {
        self.commands.push(DrawCommand::FillStyle(color.to_string()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::LineWidth(width));
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_clear_discards_history() {
        let mut canvas = DisplayList::new(100.0, 100.0);
        canvas.begin_path();
        canvas.move_to(1.0, 1.0);
        canvas.line_to(2.0, 2.0);
        canvas.stroke();
        assert_eq!(canvas.segment_count(), 1);

        canvas.clear();
        assert!(canvas.is_blank());
    }

    #[test]
    fn test_partial_clear_is_recorded() {
        let mut canvas = DisplayList::new(100.0, 100.0);
        canvas.clear_rect(10.0, 10.0, 20.0, 20.0);
        assert_eq!(
            canvas.commands(),
            &[DrawCommand::ClearRect { x: 10.0, y: 10.0, width: 20.0, height: 20.0 }]
        );
    }
}
