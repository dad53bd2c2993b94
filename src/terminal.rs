use std::io::{self, Stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::{debug, warn};

/// 终端会话：创建时进入原始模式、备用屏幕并捕获鼠标，Drop 时恢复
///
/// 输入监听只在会话存活期间有效，无论主循环如何退出都会释放。
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        debug!("terminal session acquired");
        Ok(Self { terminal })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let restored = disable_raw_mode()
            .and_then(|_| {
                execute!(
                    self.terminal.backend_mut(),
                    LeaveAlternateScreen,
                    DisableMouseCapture
                )
            })
            .and_then(|_| self.terminal.show_cursor());
        match restored {
            Ok(()) => debug!("terminal session released"),
            Err(e) => warn!(error = %e, "failed to restore terminal"),
        }
    }
}
