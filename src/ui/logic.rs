//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和各按钮的处理方法

use tracing::{debug, info};

use super::actions::{Action, Control};
use super::state::App;
use crate::models::{PullOutcome, Side};

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::Pull(side) => self.pull(side),
            Action::NewRound => self.new_round(),
            Action::ResetScores => self.reset_scores(),

            Action::FocusNext => self.move_focus(1),
            Action::FocusPrev => self.move_focus(-1),
            Action::Press(control) => self.press(control),
            Action::PressFocused => self.press(self.focus),

            Action::ToggleHelp => self.show_help = !self.show_help,
        }
        false
    }

    // ============ 游戏操作 ============

    pub fn pull(&mut self, side: Side) {
        let outcome = match side {
            Side::Left => self.game.pull_left(),
            Side::Right => self.game.pull_right(),
        };
        match outcome {
            PullOutcome::Ignored => {
                debug!(?side, "pull ignored, round is over");
            }
            PullOutcome::Moved => {
                debug!(?side, position = self.game.position(), "pulled");
            }
            PullOutcome::RoundWon(winner) => {
                info!(
                    ?winner,
                    pulls = self.game.pulls(),
                    left = self.game.left_score(),
                    right = self.game.right_score(),
                    "round over"
                );
                self.message = Some(format!("{} wins the round!", self.team_name(winner)));
                self.focus = Control::NewRound;
            }
        }
    }

    /// 新回合按钮只在回合结束时出现
    pub fn new_round(&mut self) {
        if !self.game.is_game_over() {
            return;
        }
        self.game.new_round();
        info!(round = self.game.rounds_played() + 1, "new round");
        self.message = Some("New round started".to_string());
        self.ensure_focus();
    }

    pub fn reset_scores(&mut self) {
        self.game.reset_scores();
        info!("scores reset");
        self.message = Some("Scores reset".to_string());
        self.ensure_focus();
    }

    // ============ 按钮相关 ============

    /// 按下按钮，禁用的拉绳按钮仍交给游戏状态判定
    pub fn press(&mut self, control: Control) {
        match control {
            Control::PullLeft => self.pull(Side::Left),
            Control::PullRight => self.pull(Side::Right),
            Control::NewRound => self.new_round(),
            Control::ResetScores => self.reset_scores(),
        }
    }

    fn move_focus(&mut self, step: isize) {
        let controls = self.focusable_controls();
        if controls.is_empty() {
            return;
        }
        let len = controls.len() as isize;
        let current = controls
            .iter()
            .position(|c| *c == self.focus)
            .map(|i| i as isize)
            .unwrap_or(if step > 0 { -1 } else { 0 });
        let next = (current + step).rem_euclid(len) as usize;
        self.focus = controls[next];
    }

    /// 焦点落在不可用按钮上时移到第一个可用按钮
    fn ensure_focus(&mut self) {
        let controls = self.focusable_controls();
        if !controls.contains(&self.focus) {
            if let Some(first) = controls.first() {
                self.focus = *first;
            }
        }
    }
}
