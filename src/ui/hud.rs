use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::game::Snapshot;
use crate::renderer::Theme;

const SEPARATOR: &str = " │ ";

/// One HUD field: full label, compact label and value text.
struct Field {
    label: &'static str,
    short: &'static str,
    value: String,
}

/// Renders the single status row under the board.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot, theme: &Theme) {
    let fields = hud_fields(snapshot);
    let compact = line_width(&fields, false) > usize::from(area.width);

    frame.render_widget(
        Paragraph::new(info_line(&fields, compact, theme)).alignment(Alignment::Center),
        area,
    );
}

fn hud_fields(snapshot: &Snapshot) -> Vec<Field> {
    vec![
        Field {
            label: "Length",
            short: "L",
            value: format!("{}/{}", snapshot.length, snapshot.win_length),
        },
        Field {
            label: "Score",
            short: "S",
            value: snapshot.score.to_string(),
        },
        Field {
            label: "Speed",
            short: "V",
            value: format!("{}/s", snapshot.ticks_per_second),
        },
        Field {
            label: "Grid",
            short: "G",
            value: format!("{}x{}", snapshot.grid.width, snapshot.grid.height),
        },
    ]
}

fn info_line(fields: &[Field], compact: bool, theme: &Theme) -> Line<'static> {
    let label_style = Style::default().fg(theme.hud_label);
    let value_style = Style::default().fg(theme.hud_value);

    let mut spans = Vec::with_capacity(fields.len() * 3);
    for (index, field) in fields.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(SEPARATOR, label_style));
        }
        let label = if compact { field.short } else { field.label };
        spans.push(Span::styled(format!("{label}: "), label_style));
        spans.push(Span::styled(field.value.clone(), value_style));
    }

    Line::from(spans)
}

fn line_width(fields: &[Field], compact: bool) -> usize {
    let separators = fields.len().saturating_sub(1) * SEPARATOR.width();
    let content: usize = fields
        .iter()
        .map(|field| {
            let label = if compact { field.short } else { field.label };
            label.width() + 2 + field.value.width()
        })
        .sum();

    separators + content
}
