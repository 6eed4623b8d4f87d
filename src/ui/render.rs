use crate::ui::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

pub const TITLE: &str = "Jump - Target Launcher";
pub const INSTRUCTIONS: &str = "Use ↑ ↓ to select, Enter to connect, Esc or q to quit";

/// Left indent of the target list
const LIST_INDENT: u16 = 2;

pub fn render(frame: &mut Frame, app: &App) {
    // Spacer + Title + Instructions + List + Footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, app, chunks[1], chunks[2]);
    render_target_list(frame, app, chunks[3]);
    render_footer(frame, app, chunks[4]);
}

fn render_header(frame: &mut Frame, app: &App, title_area: Rect, instructions_area: Rect) {
    let title = Paragraph::new(Line::from(TITLE))
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    let instructions = Paragraph::new(Line::from(INSTRUCTIONS))
        .style(Style::default().fg(app.theme.instructions))
        .alignment(Alignment::Center);
    frame.render_widget(instructions, instructions_area);
}

fn render_target_list(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(LIST_INDENT), Constraint::Min(0)])
        .split(area);

    let items: Vec<ListItem> = app
        .registry
        .targets()
        .iter()
        .map(|target| ListItem::new(target.name.as_str()).style(app.theme.item_style()))
        .collect();

    let list = List::new(items).highlight_style(app.theme.selected_style());

    // ListState scrolls the viewport so the cursor row is always visible
    let mut state = ListState::default().with_selected(Some(app.registry.cursor()));
    frame.render_stateful_widget(list, columns[1], &mut state);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let Some(status) = &app.last_status else {
        return;
    };

    let color = if status.is_error {
        app.theme.error
    } else {
        app.theme.success
    };

    let footer = Paragraph::new(status.text.as_str()).style(Style::default().fg(color));
    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::{Direction as Move, Target, TargetRegistry};
    use crate::ui::app::StatusLine;
    use crate::ui::theme::Theme;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn create_app(count: usize) -> App {
        let targets = (0..count)
            .map(|i| Target::new(format!("target-{i}"), format!("echo {i}")))
            .collect();
        App::new(
            TargetRegistry::new(targets).expect("registry"),
            Theme::default_theme(),
        )
    }

    fn draw(app: &App, width: u16, height: u16) -> Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal.draw(|f| render(f, app)).expect("draw");
        terminal.backend().buffer().clone()
    }

    fn row(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_header_is_centered() {
        let app = create_app(2);
        let buffer = draw(&app, 60, 10);

        let title_row = row(&buffer, 1);
        assert_eq!(title_row.trim(), TITLE);
        let left_pad = title_row.len() - title_row.trim_start().len();
        assert_eq!(left_pad, (60 - TITLE.len()) / 2);

        assert_eq!(row(&buffer, 2).trim(), INSTRUCTIONS);
    }

    #[test]
    fn test_targets_listed_in_order() {
        let app = create_app(3);
        let buffer = draw(&app, 40, 10);

        assert!(row(&buffer, 3).starts_with("  target-0"));
        assert!(row(&buffer, 4).starts_with("  target-1"));
        assert!(row(&buffer, 5).starts_with("  target-2"));
    }

    #[test]
    fn test_cursor_row_uses_selected_colors() {
        let mut app = create_app(3);
        app.registry.move_cursor(Move::Down);
        let buffer = draw(&app, 40, 10);
        let theme = Theme::default_theme();

        let selected = &buffer[(LIST_INDENT, 4)];
        assert_eq!(selected.fg, theme.selected_fg);
        assert_eq!(selected.bg, theme.selected_bg);

        for y in [3, 5] {
            let other = &buffer[(LIST_INDENT, y)];
            assert_eq!(other.fg, theme.item_fg);
            assert_eq!(other.bg, theme.item_bg);
        }
    }

    #[test]
    fn test_list_scrolls_to_cursor() {
        let mut app = create_app(20);
        for _ in 0..19 {
            app.registry.move_cursor(Move::Down);
        }
        // 8 rows: 3 header rows, 4 list rows, 1 footer row
        let buffer = draw(&app, 40, 8);

        assert!(row(&buffer, 6).starts_with("  target-19"));
        assert_eq!(buffer[(LIST_INDENT, 6)].bg, Theme::default_theme().selected_bg);
    }

    #[test]
    fn test_narrow_terminal_clips_without_panic() {
        let mut app = create_app(2);
        app.last_status = Some(StatusLine {
            text: "a status message much wider than the terminal".to_string(),
            is_error: true,
        });

        let buffer = draw(&app, 10, 6);
        assert_eq!(buffer.area.width, 10);

        let tiny = draw(&app, 1, 1);
        assert_eq!(tiny.area.width, 1);
    }

    #[test]
    fn test_footer_shows_last_status() {
        let mut app = create_app(1);
        app.last_status = Some(StatusLine {
            text: "Session \"target-0\" ended.".to_string(),
            is_error: false,
        });
        let buffer = draw(&app, 40, 8);

        assert!(row(&buffer, 7).starts_with("Session \"target-0\" ended."));
        assert_eq!(buffer[(0, 7)].fg, Theme::default_theme().success);
    }
}
