use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::game::Snapshot;
use crate::renderer::Theme;

/// Draws the pause screen as a centered popup.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let popup = centered_popup(area, 60, 40);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("PAUSED").style(title_style(theme)),
        Line::from(""),
        Line::from("[P]/[Space] Resume"),
        Line::from("[+]/[-] Speed"),
        Line::from("[Q]/[Esc] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" pause ")),
        popup,
    );
}

/// Draws the terminal victory screen.
pub fn render_victory_menu(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot, theme: &Theme) {
    let popup = centered_popup(area, 70, 50);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("YOU WIN").style(title_style(theme)),
        Line::from(""),
        Line::from(format!("Length: {}", snapshot.length)),
        Line::from(format!("Score: {}", snapshot.score)),
        Line::from(format!("Ticks: {}", snapshot.tick_count)),
        Line::from(""),
        Line::from("[Enter]/[Q] Exit"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" victory ")),
        popup,
    );
}

/// Flashes a one-line notice for the tick on which the snake bit itself.
pub fn render_collision_banner(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let [_, row, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, banner, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(26),
        Constraint::Fill(1),
    ])
    .areas(row);

    frame.render_widget(Clear, banner);
    frame.render_widget(
        Paragraph::new(Line::from("Ouch! Starting over"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.alert).add_modifier(Modifier::BOLD))
            .block(Block::bordered()),
        banner,
    );
}

fn title_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.menu_title)
        .add_modifier(Modifier::BOLD)
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
