use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::config::GridSize;
use crate::game::{GameStatus, Snapshot};
use crate::grid::Position;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_collision_banner, render_pause_menu, render_victory_menu};

/// Terminal columns used per logical cell, so cells look roughly square.
pub const CELL_WIDTH: u16 = 2;

pub const GLYPH_SNAKE_HEAD: &str = "██";
pub const GLYPH_SNAKE_BODY: &str = "▓▓";
pub const GLYPH_SNAKE_TAIL: &str = "▒▒";
pub const GLYPH_FOOD: &str = "<>";

/// Colors applied to all visual elements.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub food: Color,
    pub border: Color,
    pub hud_label: Color,
    pub hud_value: Color,
    pub menu_title: Color,
    pub alert: Color,
}

/// Green snake on dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    snake_head: Color::LightGreen,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    food: Color::Red,
    border: Color::Cyan,
    hud_label: Color::DarkGray,
    hud_value: Color::White,
    menu_title: Color::Green,
    alert: Color::LightRed,
};

/// Drawing state built once at startup and handed to every frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    pub theme: Theme,
}

impl RenderContext {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Returns the terminal size needed to show `grid` with border and HUD.
    #[must_use]
    pub fn required_size(grid: GridSize) -> (u16, u16) {
        (
            grid.width.saturating_mul(CELL_WIDTH).saturating_add(2),
            grid.height.saturating_add(3),
        )
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new(THEME_CLASSIC)
    }
}

/// Renders the full game frame from a snapshot.
///
/// Every frame is redrawn from `snapshot.segments`; ratatui's buffer diff
/// keeps the terminal writes down to the changed cells.
pub fn render(frame: &mut Frame<'_>, context: &RenderContext, snapshot: &Snapshot, paused: bool) {
    let area = frame.area();
    let (min_width, min_height) = RenderContext::required_size(snapshot.grid);
    if area.width < min_width || area.height < min_height {
        render_too_small(frame, area, min_width, min_height, &context.theme);
        return;
    }

    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
    let board = centered_board(play_area, snapshot.grid);

    let block = Block::bordered()
        .title(" torus-snake ")
        .border_style(Style::new().fg(context.theme.border));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    render_food(frame, inner, snapshot, &context.theme);
    render_snake(frame, inner, snapshot, &context.theme);
    render_hud(frame, hud_area, snapshot, &context.theme);

    match snapshot.status {
        GameStatus::Victory => render_victory_menu(frame, board, snapshot, &context.theme),
        GameStatus::Collided => render_collision_banner(frame, board, &context.theme),
        GameStatus::Playing if paused => render_pause_menu(frame, board, &context.theme),
        GameStatus::Playing => {}
    }
}

fn centered_board(area: Rect, grid: GridSize) -> Rect {
    let width = grid.width.saturating_mul(CELL_WIDTH).saturating_add(2);
    let height = grid.height.saturating_add(2);

    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot, theme: &Theme) {
    let Some((x, y)) = logical_to_terminal(inner, snapshot.food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot, theme: &Theme) {
    let last_index = snapshot.segments.len().saturating_sub(1);
    let buffer = frame.buffer_mut();

    // Tail first so the head wins if they ever share a cell.
    for (index, segment) in snapshot.segments.iter().enumerate().rev() {
        let Some((x, y)) = logical_to_terminal(inner, *segment) else {
            continue;
        };

        let (glyph, style) = if index == 0 {
            (
                GLYPH_SNAKE_HEAD,
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            )
        } else if index == last_index {
            (GLYPH_SNAKE_TAIL, Style::new().fg(theme.snake_tail))
        } else {
            (GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body))
        };

        buffer.set_string(x, y, glyph, style);
    }
}

fn render_too_small(frame: &mut Frame<'_>, area: Rect, width: u16, height: u16, theme: &Theme) {
    let lines = vec![
        Line::from("Terminal too small"),
        Line::from(format!("need {width}x{height}, have {}x{}", area.width, area.height)),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.alert)),
        area,
    );
}

/// Maps a grid cell to the top-left terminal column/row inside `inner`.
fn logical_to_terminal(inner: Rect, position: Position) -> Option<(u16, u16)> {
    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;

    use crate::config::GameConfig;
    use crate::game::GameState;
    use crate::grid::Position;

    use super::{logical_to_terminal, render, RenderContext};

    fn draw(snapshot: &crate::game::Snapshot, width: u16, height: u16) -> ratatui::buffer::Buffer {
        let mut terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test terminal should build");
        terminal
            .draw(|frame| render(frame, &RenderContext::default(), snapshot, false))
            .expect("draw should succeed");
        terminal.backend().buffer().clone()
    }

    #[test]
    fn cells_map_to_double_width_columns() {
        let inner = Rect::new(1, 1, 20, 5);

        assert_eq!(logical_to_terminal(inner, Position::new(0, 0)), Some((1, 1)));
        assert_eq!(logical_to_terminal(inner, Position::new(3, 2)), Some((7, 3)));
        assert_eq!(logical_to_terminal(inner, Position::new(10, 0)), None);
        assert_eq!(logical_to_terminal(inner, Position::new(-1, 0)), None);
    }

    #[test]
    fn head_is_drawn_at_its_cell() {
        let state = GameState::new_with_seed(GameConfig::with_grid(6, 4), 1);
        let snapshot = state.snapshot();
        let (width, height) = RenderContext::required_size(snapshot.grid);

        let buffer = draw(&snapshot, width, height);

        // Board border at (0, 0); head at cell (3, 2).
        assert_eq!(buffer[(7u16, 3u16)].symbol(), "█");
    }

    #[test]
    fn small_terminal_shows_notice() {
        let state = GameState::new_with_seed(GameConfig::default(), 2);

        let buffer = draw(&state.snapshot(), 20, 5);
        let first_row: String = (0..20u16).map(|x| buffer[(x, 0u16)].symbol()).collect();

        assert!(first_row.contains("Terminal too small"));
    }
}
