//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use ratatui::layout::{Position, Rect};

use super::actions::Control;
use crate::config::Config;
use crate::models::{MatchState, Side};

/// 应用状态
pub struct App {
    pub game: MatchState,
    pub config: Config,
    pub focus: Control,
    pub show_help: bool,
    pub message: Option<String>,
    /// 上一帧渲染出的按钮区域，用于鼠标命中
    pub hitboxes: Vec<(Rect, Control)>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: Config) -> Self {
        Self {
            game: MatchState::new(),
            config,
            focus: Control::PullLeft,
            show_help: false,
            message: None,
            hitboxes: Vec::new(),
        }
    }

    pub fn team_name(&self, side: Side) -> &str {
        match side {
            Side::Left => &self.config.left_team,
            Side::Right => &self.config.right_team,
        }
    }

    /// 当前显示的按钮，按界面顺序
    pub fn visible_controls(&self) -> Vec<Control> {
        let mut controls = vec![Control::PullLeft, Control::PullRight];
        if self.game.is_game_over() {
            controls.push(Control::NewRound);
        }
        controls.push(Control::ResetScores);
        controls
    }

    pub fn is_enabled(&self, control: Control) -> bool {
        match control {
            Control::PullLeft | Control::PullRight => !self.game.is_game_over(),
            Control::NewRound => self.game.is_game_over(),
            Control::ResetScores => true,
        }
    }

    /// 可获得焦点的按钮
    pub fn focusable_controls(&self) -> Vec<Control> {
        self.visible_controls()
            .into_iter()
            .filter(|c| self.is_enabled(*c))
            .collect()
    }

    /// 鼠标命中的按钮
    pub fn control_at(&self, column: u16, row: u16) -> Option<Control> {
        let point = Position::new(column, row);
        self.hitboxes
            .iter()
            .find(|(area, _)| area.contains(point))
            .map(|(_, control)| *control)
    }
}
