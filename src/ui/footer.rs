use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::route::Route;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, route: Route, area: Rect) -> Paragraph<'static> {
        let hints = match route {
            Route::Login => " Enter: Send Code │ Ctrl+R: Create Account │ Ctrl+Q: Quit",
            Route::Register => {
                " Tab/↓ ↑: Move │ Enter: Send Code │ Ctrl+L: Sign In │ Ctrl+Q: Quit"
            }
            Route::OtpVerify => " Enter: Verify │ R: Resend │ Esc: Back │ Ctrl+Q: Quit",
            Route::Dashboard => " Ctrl+L: Logout │ Ctrl+Q: Quit",
        };
        let version = format!("v{} ", VERSION);

        // Pad by char count, not byte count (the hints contain Unicode).
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
