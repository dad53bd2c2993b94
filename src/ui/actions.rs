//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

use crate::models::Side;

/// 界面上的按钮
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    PullLeft,
    PullRight,
    NewRound,
    ResetScores,
}

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Pull(Side),
    NewRound,
    ResetScores,

    // 按钮焦点
    FocusNext,
    FocusPrev,
    Press(Control), // 鼠标点击
    PressFocused,   // Enter / Space

    ToggleHelp,
}
