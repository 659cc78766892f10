//! Rendering — panel state into ratatui widgets.
//!
//! The screen is split into a status block (the four display fields), the
//! threshold input field, the diagnostic log, and a one-line key legend.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use lumo_domain::status::StatusSnapshot;

use crate::app::Panel;

/// Placeholder shown while no sensor reading is available.
pub const NO_DATA: &str = "n/a";

const LABEL_STYLE: Style = Style::new().fg(Color::DarkGray);
const ON_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const OFF_STYLE: Style = Style::new().fg(Color::DarkGray);
const EDITING_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const LOG_STYLE: Style = Style::new().fg(Color::Red);

/// Format a numeric field to two decimal places.
#[must_use]
pub fn format_threshold(value: f64) -> String {
    format!("{value:.2}")
}

/// Format the sensor reading, substituting the placeholder when absent.
#[must_use]
pub fn format_sensor(value: Option<f64>) -> String {
    value.map_or_else(|| NO_DATA.to_string(), |v| format!("{v:.2}"))
}

/// Draw the whole panel.
pub fn render(frame: &mut Frame, panel: &Panel) {
    let [status_area, input_area, log_area, footer_area] = Layout::vertical([
        Constraint::Length(6),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_status(frame, status_area, panel.snapshot());
    render_input(frame, input_area, panel.threshold_input(), panel.is_editing());
    render_log(frame, log_area, panel);
    render_footer(frame, footer_area);
}

fn render_status(frame: &mut Frame, area: Rect, snapshot: Option<&StatusSnapshot>) {
    let block = Block::new().borders(Borders::ALL).title("Status");
    let lines = match snapshot {
        Some(snapshot) => vec![
            field(
                "Power",
                if snapshot.is_on { "ON" } else { "OFF" },
                if snapshot.is_on { ON_STYLE } else { OFF_STYLE },
            ),
            field(
                "Mode",
                if snapshot.auto { "auto" } else { "manual" },
                Style::new(),
            ),
            field(
                "Sensor",
                &format_sensor(snapshot.sensor_value),
                Style::new(),
            ),
            field(
                "Threshold",
                &format_threshold(snapshot.darkness_threshold),
                Style::new(),
            ),
        ],
        None => vec![Line::styled("waiting for first status", LABEL_STYLE)],
    };
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn field(label: &str, value: &str, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:>10}  "), LABEL_STYLE),
        Span::styled(value.to_string(), style),
    ])
}

fn render_input(frame: &mut Frame, area: Rect, buffer: &str, editing: bool) {
    let block = Block::new()
        .borders(Borders::ALL)
        .title("Darkness threshold");
    let style = if editing { EDITING_STYLE } else { Style::new() };
    frame.render_widget(
        Paragraph::new(buffer.to_string()).style(style).block(block),
        area,
    );
}

fn render_log(frame: &mut Frame, area: Rect, panel: &Panel) {
    let block = Block::new().borders(Borders::ALL).title("Log");
    // Keep the newest entries visible in the available height.
    let visible = usize::from(area.height.saturating_sub(2));
    let entries: Vec<&str> = panel.log_entries().collect();
    let skip = entries.len().saturating_sub(visible);
    let items: Vec<ListItem> = entries
        .into_iter()
        .skip(skip)
        .map(|entry| ListItem::new(Line::styled(entry.to_string(), LOG_STYLE)))
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new("a auto | o on | f off | t threshold | r refresh | q quit")
            .style(LABEL_STYLE)
            .centered(),
        area,
    );
}
