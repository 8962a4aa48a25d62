use super::svg_canvas::display_list_to_svg;
use crate::common::{DomainError, DomainResult};
use crate::domains::dashboard::{DashboardFrame, DashboardPublisher, DashboardView, RobotReadout};
use crate::domains::joystick::JoystickReadout;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

/// Publishes the dashboard as a static HTML page with inline SVG canvases.
/// The page is replaced atomically so a browser never reads a partial file.
pub struct HtmlFilePublisher {
    output: PathBuf,
    refresh_seconds: u32,
}

impl HtmlFilePublisher {
    pub fn new<P: Into<PathBuf>>(output: P, refresh_seconds: u32) -> Self {
        Self {
            output: output.into(),
            refresh_seconds,
        }
    }

    pub fn render_page(&self, frame: &DashboardFrame<'_>) -> String {
        let mut html = String::with_capacity(16 * 1024);
        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        if self.refresh_seconds > 0 {
            let _ = writeln!(html, "<meta http-equiv=\"refresh\" content=\"{}\">", self.refresh_seconds);
        }
        html.push_str("<title>Robot Telemetry Dashboard</title>\n");
        html.push_str(STYLE);
        html.push_str("</head>\n<body>\n");

        render_connection(&mut html, frame.view);
        html.push_str("<div class=\"row\">\n");
        render_joystick(&mut html, frame.view.joystick.as_ref());
        html.push_str(&display_list_to_svg(frame.joystick, "joystickCanvas"));
        html.push_str("\n</div>\n");
        html.push_str(&display_list_to_svg(frame.trajectory, "pathCanvas"));
        html.push('\n');
        render_messages(&mut html, frame.view);

        html.push_str("</body>\n</html>\n");
        html
    }
}

impl DashboardPublisher for HtmlFilePublisher {
    fn publish(&self, frame: &DashboardFrame<'_>) -> DomainResult<()> {
        let page = self.render_page(frame);
        let io_error = |e: std::io::Error| {
            DomainError::InfrastructureError(format!(
                "Failed to write dashboard {}: {}",
                self.output.display(),
                e
            ))
        };

        if let Some(parent) = self.output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let tmp = self.output.with_extension("html.tmp");
        fs::write(&tmp, page).map_err(io_error)?;
        fs::rename(&tmp, &self.output).map_err(io_error)?;
        Ok(())
    }
}

const STYLE: &str = "<style>\n\
body { font-family: sans-serif; margin: 16px; }\n\
.row { display: flex; gap: 12px; align-items: center; margin-bottom: 12px; }\n\
#joystickState { padding: 8px; border-radius: 4px; min-width: 320px; }\n\
#pathCanvas { border: 1px solid #ccc; }\n\
#messages { max-height: 300px; overflow-y: auto; margin-top: 12px; }\n\
.message-item { border-bottom: 1px solid #eee; padding: 6px 0; }\n\
</style>\n";

fn render_connection(html: &mut String, view: &DashboardView) {
    let _ = writeln!(
        html,
        "<div id=\"webConnectionStatus\" style=\"color: {}\">{}</div>",
        escape(&view.connection.color),
        escape(&view.connection.text)
    );
}

fn render_joystick(html: &mut String, readout: Option<&JoystickReadout>) {
    let Some(readout) = readout else {
        html.push_str("<div id=\"joystickState\"><b>Joystick Status:</b> N/A</div>\n");
        return;
    };

    let _ = write!(
        html,
        "<div id=\"joystickState\" style=\"background-color: {}\">",
        escape(readout.background())
    );
    let lines: Vec<String> = readout
        .lines()
        .into_iter()
        .map(|line| {
            line.into_iter()
                .map(|(label, value)| format!("<b>{}</b> {}", escape(label), escape(&value)))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    html.push_str(&lines.join("<br>"));
    html.push_str("</div>\n");
}

fn render_messages(html: &mut String, view: &DashboardView) {
    html.push_str("<div id=\"messages\">\n");
    if let Some(notice) = view.messages.notice() {
        let _ = writeln!(html, "{}", escape(notice));
    }
    for readout in view.messages.readouts() {
        render_readout(html, readout);
    }
    html.push_str("</div>\n");
}

fn render_readout(html: &mut String, r: &RobotReadout) {
    let _ = writeln!(
        html,
        "<div id=\"robot-group-{id}\" class=\"message-item\">\
<b>Robot ID:</b> {id} <br>\
<b>Current Pose:</b> <br>\
&nbsp;&nbsp;x: {x}<br>\
&nbsp;&nbsp;y: {y}<br>\
&nbsp;&nbsp;z: {z}<br>\
<b>Robot Info:</b> <br>\
&nbsp;&nbsp;LVel: {lvel}<br>\
&nbsp;&nbsp;AVel: {avel}<br>\
&nbsp;&nbsp;mode: {mode}</div>",
        id = escape(&r.robot_id),
        x = escape(&r.x),
        y = escape(&r.y),
        z = escape(&r.z),
        lvel = escape(&r.linear_velocity),
        avel = escape(&r.angular_velocity),
        mode = escape(&r.linear_acceleration),
    );
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
