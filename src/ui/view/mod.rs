//! 视图层模块
//!
//! 包含主渲染入口和各个区域的渲染

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use super::actions::Control;
use super::state::App;
use crate::models::Side;
use components::{render_app_frame, render_button, render_dialog_framework, rope_line};
use layouts::centered_rect;

const BUTTON_WIDTH: u16 = 20;

/// 渲染 UI，同时记录按钮区域
pub fn render(frame: &mut Frame, app: &mut App) {
    let inner = render_app_frame(frame, frame.area());
    let banner_height = if app.game.is_game_over() { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // 标题
            Constraint::Length(4),             // 比分
            Constraint::Length(banner_height), // 获胜横幅
            Constraint::Length(5),             // 绳子
            Constraint::Length(3),             // 拉绳按钮
            Constraint::Length(3),             // 回合按钮
            Constraint::Length(2),             // 说明
            Constraint::Min(3),                // 历史
            Constraint::Length(3),             // 状态栏
        ])
        .split(inner);

    app.hitboxes.clear();

    render_title(frame, chunks[0]);
    render_scores(frame, app, chunks[1]);
    if app.game.is_game_over() {
        render_banner(frame, app, chunks[2]);
    }
    render_rope(frame, app, chunks[3]);
    render_button_row(frame, app, chunks[4], &[Control::PullLeft, Control::PullRight]);
    let round_controls: Vec<Control> = app
        .visible_controls()
        .into_iter()
        .filter(|c| matches!(c, Control::NewRound | Control::ResetScores))
        .collect();
    render_button_row(frame, app, chunks[5], &round_controls);
    render_instructions(frame, chunks[6]);
    render_history(frame, app, chunks[7]);
    render_status(frame, app, chunks[8]);

    if app.show_help {
        render_help_dialog(frame);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("🪢 Tug of War 🪢")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn side_color(side: Side) -> Color {
    match side {
        Side::Left => Color::Blue,
        Side::Right => Color::Red,
    }
}

fn render_scores(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().title("Score").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    for (side, column, alignment) in [
        (Side::Left, columns[0], Alignment::Left),
        (Side::Right, columns[1], Alignment::Right),
    ] {
        let style = Style::default()
            .fg(side_color(side))
            .add_modifier(Modifier::BOLD);
        let text = vec![
            Line::from(Span::styled(app.team_name(side).to_string(), style)),
            Line::from(Span::styled(app.game.score(side).to_string(), style)),
        ];
        frame.render_widget(Paragraph::new(text).alignment(alignment), column);
    }
}

fn render_banner(frame: &mut Frame, app: &App, area: Rect) {
    let Some(winner) = app.game.winner() else {
        return;
    };
    let banner = Paragraph::new(format!("🎉 {} Wins! 🎉", app.team_name(winner)))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(banner, area);
}

fn render_rope(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!("Rope ({:+})", app.game.position()))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(rope_line(app.game.marker_position(), rows[1].width)),
        rows[1],
    );

    let labels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[2]);
    let label_style = Style::default().fg(Color::Gray);
    for (text, column, alignment) in [
        ("Left Goal", labels[0], Alignment::Left),
        ("Center", labels[1], Alignment::Center),
        ("Right Goal", labels[2], Alignment::Right),
    ] {
        frame.render_widget(
            Paragraph::new(text).style(label_style).alignment(alignment),
            column,
        );
    }
}

fn button_label(control: Control) -> &'static str {
    match control {
        Control::PullLeft => "⬅ Pull Left!",
        Control::PullRight => "Pull Right! ➡",
        Control::NewRound => "New Round",
        Control::ResetScores => "Reset Scores",
    }
}

fn button_color(control: Control) -> Color {
    match control {
        Control::PullLeft => side_color(Side::Left),
        Control::PullRight => side_color(Side::Right),
        Control::NewRound => Color::Green,
        Control::ResetScores => Color::White,
    }
}

fn render_button_row(frame: &mut Frame, app: &mut App, area: Rect, controls: &[Control]) {
    let cells = Layout::horizontal(controls.iter().map(|_| Constraint::Length(BUTTON_WIDTH)))
        .flex(Flex::Center)
        .spacing(2)
        .split(area);

    for (control, cell) in controls.iter().zip(cells.iter()) {
        render_button(
            frame,
            *cell,
            button_label(*control),
            app.focus == *control,
            app.is_enabled(*control),
            button_color(*control),
        );
        app.hitboxes.push((*cell, *control));
    }
}

fn render_instructions(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from("Click the buttons or use arrow keys to pull the rope! First to the goal wins!"),
        Line::from(Span::styled(
            "← Left Arrow = Pull Left | Right Arrow = Pull Right →",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_history(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .game
        .history()
        .iter()
        .rev()
        .take(app.config.history_len)
        .map(|record| {
            let content = format!(
                "#{:<3} {:<16} {:>3} pulls  {}",
                record.number,
                app.team_name(record.winner),
                record.pulls,
                record.finished_at.format("%H:%M:%S")
            );
            ListItem::new(Line::from(Span::styled(
                content,
                Style::default().fg(side_color(record.winner)),
            )))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!("Recent Rounds ({} played)", app.game.rounds_played()))
            .borders(Borders::ALL),
    );
    frame.render_widget(list, area);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.game.is_game_over() {
        "[n] New Round  [r] Reset Scores  [Tab] Focus  [?] Help  [q] Quit"
    } else {
        "[←/→] Pull  [r] Reset Scores  [Tab] Focus  [?] Help  [q] Quit"
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn render_help_dialog(frame: &mut Frame) {
    let area = centered_rect(60, 50, frame.area());
    let inner = render_dialog_framework(frame, area, "Help");

    let lines = vec![
        Line::from("← / h        Pull left"),
        Line::from("→ / l        Pull right"),
        Line::from("n            New round (after a win)"),
        Line::from("r            Reset scores"),
        Line::from("Tab / S-Tab  Move button focus"),
        Line::from("Enter/Space  Press focused button"),
        Line::from("Mouse        Click a button"),
        Line::from("q / Esc      Quit"),
        Line::from("Esc / ?      Close this help"),
        Line::from(""),
        Line::from("Reach the goal line (40 from center) to win the round."),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut screen = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                screen.push_str(buffer[(x, y)].symbol());
            }
            screen.push('\n');
        }
        screen
    }

    fn win_left(app: &mut App) {
        for _ in 0..20 {
            app.dispatch(crate::ui::actions::Action::Pull(Side::Left));
        }
    }

    #[test]
    fn banner_and_new_round_only_after_win() {
        let mut app = App::new(Config::default());
        let screen = draw(&mut app);
        assert!(!screen.contains("Wins!"));
        assert!(!screen.contains("New Round"));
        assert!(screen.contains("Reset Scores"));
        assert!(!app.hitboxes.iter().any(|(_, c)| *c == Control::NewRound));

        win_left(&mut app);
        let screen = draw(&mut app);
        assert!(screen.contains("Left Team Wins!"));
        assert!(screen.contains("New Round"));
        assert!(app.hitboxes.iter().any(|(_, c)| *c == Control::NewRound));
    }

    #[test]
    fn clicking_rendered_buttons() {
        let mut app = App::new(Config::default());
        draw(&mut app);

        let (area, _) = *app
            .hitboxes
            .iter()
            .find(|(_, c)| *c == Control::PullRight)
            .unwrap();
        let action = app.control_at(area.x + area.width / 2, area.y + 1).unwrap();
        assert_eq!(action, Control::PullRight);
        app.dispatch(crate::ui::actions::Action::Press(action));
        assert_eq!(app.game.position(), 2);
    }

    #[test]
    fn scores_and_team_names_are_shown() {
        let mut config = Config::default();
        config.left_team = "Blue".to_string();
        config.right_team = "Red".to_string();
        let mut app = App::new(config);
        win_left(&mut app);

        let screen = draw(&mut app);
        assert!(screen.contains("Blue Wins!"));
        assert!(screen.contains("Red"));
        assert!(screen.contains("Recent Rounds (1 played)"));
        assert!(screen.contains("20 pulls"));
    }

    #[test]
    fn help_overlay() {
        let mut app = App::new(Config::default());
        app.show_help = true;
        let screen = draw(&mut app);
        assert!(screen.contains("Press focused button"));
    }
}
