//! 通用 UI 组件
//!
//! 外层框架、按钮、弹窗等通用组件

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::models::{MAX_OFFSET, ROPE_LENGTH, WINNING_POSITION};

/// [组件] 包裹游戏的外层框架，原样渲染其内容
pub fn render_app_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// [组件] 弹窗基础框架
pub fn render_dialog_framework(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// [组件] 按钮：聚焦时反色，禁用时变灰
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    is_focused: bool,
    is_enabled: bool,
    active_color: Color,
) {
    let style = if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_focused {
        Style::default()
            .fg(active_color)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default()
            .fg(active_color)
            .add_modifier(Modifier::BOLD)
    };

    let button = Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(button, area);
}

/// 绳标所在的列
pub fn marker_column(marker: f64, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let span = f64::from(width - 1);
    ((marker / ROPE_LENGTH) * span).round().clamp(0.0, span) as u16
}

/// [组件] 绳子：中线、双方球门线和绳标
pub fn rope_line(marker: f64, width: u16) -> Line<'static> {
    let to_column = |offset: i32| {
        let percent = f64::from(offset + MAX_OFFSET) / f64::from(2 * MAX_OFFSET) * ROPE_LENGTH;
        marker_column(percent, width)
    };
    let center = to_column(0);
    let left_goal = to_column(-WINNING_POSITION);
    let right_goal = to_column(WINNING_POSITION);
    let marker = marker_column(marker, width);

    let rope_style = Style::default().fg(Color::Yellow);
    let spans: Vec<Span> = (0..width)
        .map(|col| {
            if col == marker {
                Span::styled(
                    "●",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )
            } else if col == center {
                Span::styled("┼", Style::default().fg(Color::Gray))
            } else if col == left_goal {
                Span::styled("┃", Style::default().fg(Color::Blue))
            } else if col == right_goal {
                Span::styled("┃", Style::default().fg(Color::Red))
            } else {
                Span::styled("═", rope_style)
            }
        })
        .collect();
    Line::from(spans)
}
