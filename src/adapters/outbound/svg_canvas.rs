use crate::domains::dashboard::{Canvas, DisplayList, DrawCommand};
use std::f64::consts::PI;
use std::fmt::Write;

/// Replays a display list into an inline `<svg>` element.
pub fn display_list_to_svg(canvas: &DisplayList, element_id: &str) -> String {
    let mut svg = String::with_capacity(1024 + canvas.commands().len() * 32);
    let _ = write!(
        svg,
        r#"<svg id="{id}" xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        id = element_id,
        w = num(canvas.width()),
        h = num(canvas.height()),
    );

    let mut state = PaintState::default();
    for command in canvas.commands() {
        state.apply(command, &mut svg);
    }

    svg.push_str("</svg>");
    svg
}

struct PaintState {
    stroke: String,
    fill: String,
    line_width: f64,
    path: String,
    current: Option<(f64, f64)>,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            stroke: "#000000".to_string(),
            fill: "#000000".to_string(),
            line_width: 1.0,
            path: String::new(),
            current: None,
        }
    }
}

impl PaintState {
    fn apply(&mut self, command: &DrawCommand, svg: &mut String) {
        match command {
            DrawCommand::ClearRect { x, y, width, height } => {
                let _ = write!(
                    svg,
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="white"/>"#,
                    num(*x),
                    num(*y),
                    num(*width),
                    num(*height)
                );
            }
            DrawCommand::BeginPath => {
                self.path.clear();
                self.current = None;
            }
            DrawCommand::MoveTo { x, y } => self.move_to(*x, *y),
            DrawCommand::LineTo { x, y } => {
                if self.current.is_some() {
                    let _ = write!(self.path, "L{} {} ", num(*x), num(*y));
                    self.current = Some((*x, *y));
                } else {
                    self.move_to(*x, *y);
                }
            }
            DrawCommand::Arc { cx, cy, radius, start, end } => self.arc(*cx, *cy, *radius, *start, *end),
            DrawCommand::StrokeStyle(color) => self.stroke = color.clone(),
            DrawCommand::FillStyle(color) => self.fill = color.clone(),
            DrawCommand::LineWidth(width) => self.line_width = *width,
            DrawCommand::Stroke => {
                if !self.path.is_empty() {
                    let _ = write!(
                        svg,
                        r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linejoin="round"/>"#,
                        self.path.trim_end(),
                        escape_attr(&self.stroke),
                        num(self.line_width)
                    );
                }
            }
            DrawCommand::Fill => {
                if !self.path.is_empty() {
                    let _ = write!(
                        svg,
                        r#"<path d="{}" fill="{}"/>"#,
                        self.path.trim_end(),
                        escape_attr(&self.fill)
                    );
                }
            }
        }
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let _ = write!(self.path, "M{} {} ", num(x), num(y));
        self.current = Some((x, y));
    }

    fn arc(&mut self, cx: f64, cy: f64, r: f64, start: f64, end: f64) {
        let point = |angle: f64| (cx + r * angle.cos(), cy + r * angle.sin());
        let (sx, sy) = point(start);
        if self.current.is_some() {
            let _ = write!(self.path, "L{} {} ", num(sx), num(sy));
        } else {
            let _ = write!(self.path, "M{} {} ", num(sx), num(sy));
        }

        let sweep = end - start;
        if sweep >= 2.0 * PI {
            // A single SVG arc cannot close on itself; go via the opposite point.
            let (ox, oy) = point(start + PI);
            let _ = write!(
                self.path,
                "A{r} {r} 0 1 1 {} {} A{r} {r} 0 1 1 {} {} ",
                num(ox),
                num(oy),
                num(sx),
                num(sy),
                r = num(r)
            );
            self.current = Some((sx, sy));
        } else {
            let (ex, ey) = point(end);
            let large_arc = if sweep > PI { 1 } else { 0 };
            let _ = write!(
                self.path,
                "A{r} {r} 0 {} 1 {} {} ",
                large_arc,
                num(ex),
                num(ey),
                r = num(r)
            );
            self.current = Some((ex, ey));
        }
    }
}

/// Three decimals at most, trailing zeros trimmed.
fn num(value: f64) -> String {
    let s = format!("{:.3}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
