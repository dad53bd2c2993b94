use chrono::{DateTime, Local};

/// 每次拉绳移动的距离
pub const PULL_STEP: i32 = 2;
/// 绳标偏离中心的最大距离
pub const MAX_OFFSET: i32 = 50;
/// 到达即获胜的偏移量
pub const WINNING_POSITION: i32 = 40;
/// 绳子的显示长度（百分比刻度）
pub const ROPE_LENGTH: f64 = 100.0;
/// 保留的回合记录上限
pub const HISTORY_CAP: usize = 100;

/// 拔河双方
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// 回合阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Playing,
    RoundOver,
}

/// 一次拉绳的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullOutcome {
    /// 回合已结束，拉绳被忽略
    Ignored,
    Moved,
    RoundWon(Side),
}

/// 已结束回合的记录
#[derive(Debug, Clone, PartialEq)]
pub struct RoundRecord {
    pub number: u32,
    pub winner: Side,
    pub pulls: u32,
    pub finished_at: DateTime<Local>,
}

/// 比赛状态
///
/// 位置变化与胜负判定在同一次调用中完成，调用方看不到中间状态。
#[derive(Debug, Clone, Default)]
pub struct MatchState {
    position: i32,
    left_score: u32,
    right_score: u32,
    phase: Phase,
    winner: Option<Side>,
    pulls: u32,
    rounds: u32,
    history: Vec<RoundRecord>,
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pull_left(&mut self) -> PullOutcome {
        self.pull(Side::Left)
    }

    pub fn pull_right(&mut self) -> PullOutcome {
        self.pull(Side::Right)
    }

    /// 向某一方拉绳，回合结束时为空操作
    pub fn pull(&mut self, side: Side) -> PullOutcome {
        if self.is_game_over() {
            return PullOutcome::Ignored;
        }

        self.position = match side {
            Side::Left => (self.position - PULL_STEP).max(-MAX_OFFSET),
            Side::Right => (self.position + PULL_STEP).min(MAX_OFFSET),
        };
        self.pulls += 1;

        self.evaluate_round();
        match self.winner {
            Some(winner) => PullOutcome::RoundWon(winner),
            None => PullOutcome::Moved,
        }
    }

    /// 判定胜负，每回合至多计分一次
    pub fn evaluate_round(&mut self) {
        if self.is_game_over() {
            return;
        }

        let winner = if self.position <= -WINNING_POSITION {
            Side::Left
        } else if self.position >= WINNING_POSITION {
            Side::Right
        } else {
            return;
        };

        match winner {
            Side::Left => self.left_score += 1,
            Side::Right => self.right_score += 1,
        }
        self.phase = Phase::RoundOver;
        self.winner = Some(winner);
        self.rounds += 1;
        self.history.push(RoundRecord {
            number: self.rounds,
            winner,
            pulls: self.pulls,
            finished_at: Local::now(),
        });
        if self.history.len() > HISTORY_CAP {
            let excess = self.history.len() - HISTORY_CAP;
            self.history.drain(..excess);
        }
    }

    /// 开始新回合，保留比分
    pub fn new_round(&mut self) {
        self.position = 0;
        self.phase = Phase::Playing;
        self.winner = None;
        self.pulls = 0;
    }

    /// 清空比分和历史，并开始新回合
    pub fn reset_scores(&mut self) {
        self.left_score = 0;
        self.right_score = 0;
        self.rounds = 0;
        self.history.clear();
        self.new_round();
    }

    /// 绳标在绳子上的位置，范围 [0, ROPE_LENGTH]
    pub fn marker_position(&self) -> f64 {
        (f64::from(self.position) + f64::from(MAX_OFFSET)) / f64::from(2 * MAX_OFFSET)
            * ROPE_LENGTH
    }

    pub fn position(&self) -> i32 {
        self.position
    }

    pub fn left_score(&self) -> u32 {
        self.left_score
    }

    pub fn right_score(&self) -> u32 {
        self.right_score
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left_score,
            Side::Right => self.right_score,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::RoundOver
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn pulls(&self) -> u32 {
        self.pulls
    }

    /// 最近的回合记录，最多 HISTORY_CAP 条
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    pub fn rounds_played(&self) -> usize {
        self.rounds as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn scenario_a() -> MatchState {
        let mut state = MatchState::new();
        for _ in 0..20 {
            state.pull_left();
        }
        state
    }

    #[test]
    fn initial_state() {
        let state = MatchState::new();
        assert_eq!(state.position(), 0);
        assert_eq!(state.left_score(), 0);
        assert_eq!(state.right_score(), 0);
        assert_eq!(state.phase(), Phase::Playing);
        assert_eq!(state.winner(), None);
        assert!(state.history().is_empty());
    }

    #[test]
    fn pull_moves_by_step() {
        let mut state = MatchState::new();
        assert_eq!(state.pull_right(), PullOutcome::Moved);
        assert_eq!(state.position(), 2);
        state.pull_left();
        state.pull_left();
        assert_eq!(state.position(), -2);
        assert_eq!(state.pulls(), 3);
    }

    #[test]
    fn left_win_at_threshold() {
        let state = scenario_a();
        assert_eq!(state.position(), -40);
        assert!(state.is_game_over());
        assert_eq!(state.winner(), Some(Side::Left));
        assert_eq!(state.left_score(), 1);
        assert_eq!(state.right_score(), 0);
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.history()[0].pulls, 20);
        assert_eq!(state.history()[0].number, 1);
    }

    #[test]
    fn winning_pull_reports_winner() {
        let mut state = MatchState::new();
        for _ in 0..19 {
            assert_eq!(state.pull_right(), PullOutcome::Moved);
        }
        assert_eq!(state.pull_right(), PullOutcome::RoundWon(Side::Right));
        assert_eq!(state.right_score(), 1);
    }

    #[test]
    fn pulls_ignored_after_round_over() {
        let mut state = scenario_a();
        assert_eq!(state.pull_right(), PullOutcome::Ignored);
        assert_eq!(state.pull_left(), PullOutcome::Ignored);
        assert_eq!(state.position(), -40);
        assert!(state.is_game_over());
        assert_eq!(state.left_score(), 1);
        assert_eq!(state.right_score(), 0);
    }

    #[test]
    fn evaluate_round_does_not_double_count() {
        let mut state = scenario_a();
        state.evaluate_round();
        state.evaluate_round();
        assert_eq!(state.left_score(), 1);
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn new_round_keeps_scores() {
        let mut state = scenario_a();
        state.new_round();
        assert_eq!(state.position(), 0);
        assert!(!state.is_game_over());
        assert_eq!(state.winner(), None);
        assert_eq!(state.left_score(), 1);
        assert_eq!(state.right_score(), 0);
        assert_eq!(state.pulls(), 0);
        assert_eq!(state.rounds_played(), 1);
    }

    #[test]
    fn reset_scores_clears_everything() {
        let mut state = scenario_a();
        state.reset_scores();
        assert_eq!(state.left_score(), 0);
        assert_eq!(state.right_score(), 0);
        assert_eq!(state.position(), 0);
        assert!(!state.is_game_over());
        assert_eq!(state.winner(), None);
        assert!(state.history().is_empty());
    }

    #[test]
    fn thirty_right_pulls_stop_at_threshold() {
        let mut state = MatchState::new();
        for i in 1..=30 {
            state.pull_right();
            if i < 20 {
                assert!(!state.is_game_over());
            }
        }
        assert_eq!(state.position(), 40);
        assert_eq!(state.winner(), Some(Side::Right));
        assert_eq!(state.right_score(), 1);
        assert_eq!(state.pulls(), 20);
    }

    #[test]
    fn rounds_accumulate_scores() {
        let mut state = scenario_a();
        state.new_round();
        for _ in 0..20 {
            state.pull_right();
        }
        state.new_round();
        for _ in 0..20 {
            state.pull_left();
        }
        assert_eq!(state.left_score(), 2);
        assert_eq!(state.right_score(), 1);
        let winners: Vec<Side> = state.history().iter().map(|r| r.winner).collect();
        assert_eq!(winners, vec![Side::Left, Side::Right, Side::Left]);
        assert_eq!(state.history()[2].number, 3);
    }

    #[test]
    fn history_is_capped() {
        let mut state = MatchState::new();
        for _ in 0..HISTORY_CAP + 5 {
            for _ in 0..20 {
                state.pull_right();
            }
            state.new_round();
        }
        assert_eq!(state.history().len(), HISTORY_CAP);
        assert_eq!(state.rounds_played(), HISTORY_CAP + 5);
        assert_eq!(state.right_score() as usize, HISTORY_CAP + 5);
        assert_eq!(state.history()[0].number, 6);
        assert_eq!(state.history()[HISTORY_CAP - 1].number as usize, HISTORY_CAP + 5);

        state.reset_scores();
        assert_eq!(state.rounds_played(), 0);
        for _ in 0..20 {
            state.pull_left();
        }
        assert_eq!(state.history()[0].number, 1);
    }

    #[test]
    fn marker_position_is_linear() {
        let mut state = MatchState::new();
        assert_eq!(state.marker_position(), 50.0);

        state.position = -MAX_OFFSET;
        assert_eq!(state.marker_position(), 0.0);
        state.position = MAX_OFFSET;
        assert_eq!(state.marker_position(), ROPE_LENGTH);
        state.position = -40;
        assert_eq!(state.marker_position(), 10.0);
    }

    proptest! {
        #[test]
        fn pulls_keep_invariants(moves in proptest::collection::vec((any::<bool>(), 0u8..5), 0..300)) {
            let mut state = MatchState::new();
            for (left, kind) in moves {
                match kind {
                    0 => state.new_round(),
                    4 => state.reset_scores(),
                    1 if left => { state.pull_left(); }
                    1 => { state.pull_right(); }
                    _ => { state.pull(if left { Side::Left } else { Side::Right }); }
                }

                prop_assert!((-MAX_OFFSET..=MAX_OFFSET).contains(&state.position()));
                if state.is_game_over() {
                    prop_assert!(state.position().abs() >= WINNING_POSITION);
                    prop_assert!(state.winner().is_some());
                } else {
                    prop_assert!(state.position().abs() < WINNING_POSITION);
                    prop_assert_eq!(state.winner(), None);
                }

                let left_wins = state.history().iter().filter(|r| r.winner == Side::Left).count();
                let right_wins = state.history().len() - left_wins;
                prop_assert_eq!(state.left_score() as usize, left_wins);
                prop_assert_eq!(state.right_score() as usize, right_wins);
                prop_assert_eq!(state.rounds_played(), state.history().len());

                let marker = state.marker_position();
                prop_assert!((0.0..=ROPE_LENGTH).contains(&marker));
            }
        }
    }
}
