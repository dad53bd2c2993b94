//! 输入事件映射 (Input -> Action)
//!
//! 将按键和鼠标事件转换为 Action

use std::io;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::actions::Action;
use super::state::App;
use crate::models::{Phase, Side};

/// 根据当前阶段和按键获取对应的 Action
pub fn get_action(phase: Phase, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        // 回合结束后方向键照样映射，由游戏状态忽略
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Pull(Side::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Pull(Side::Right)),
        KeyCode::Char('n') if phase == Phase::RoundOver => Some(Action::NewRound),
        KeyCode::Char('r') => Some(Action::ResetScores),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::BackTab => Some(Action::FocusPrev),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PressFocused),
        _ => None,
    }
}

/// 帮助弹窗打开时的按键，其余按键被弹窗拦截
pub fn get_help_action(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc | KeyCode::Char('?') => Some(Action::ToggleHelp),
        _ => None,
    }
}

/// 鼠标左键按下时命中的按钮，帮助弹窗打开时点击只关闭弹窗
pub fn get_mouse_action(app: &App, mouse: MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if app.show_help => Some(Action::ToggleHelp),
        MouseEventKind::Down(MouseButton::Left) => app
            .control_at(mouse.column, mouse.row)
            .map(Action::Press),
        _ => None,
    }
}

/// 处理终端事件，返回 true 表示退出
pub fn handle_event(app: &mut App, event: Event) -> io::Result<bool> {
    let action = match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if app.show_help {
                get_help_action(key)
            } else {
                get_action(app.game.phase(), key)
            }
        }
        Event::Mouse(mouse) => get_mouse_action(app, mouse),
        _ => None,
    };

    if let Some(action) = action {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}
