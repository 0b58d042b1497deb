use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::session::Session;
use crate::ui::theme::{BRAND_ACCENT, GLOBAL_BORDER, HEADER_TEXT, STATUS_OK, TEXT_DIM};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, session: &Session) -> Paragraph<'static> {
        let mut spans = vec![
            Span::styled(
                " SmartVAS",
                Style::default().fg(BRAND_ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" │ ", Style::default().fg(TEXT_DIM)),
            Span::styled(
                "Your Gateway to Value-Added Services",
                Style::default().fg(HEADER_TEXT),
            ),
        ];

        if let Some(phone) = session.phone_number.as_deref().filter(|p| !p.is_empty()) {
            spans.push(Span::styled(" │ ", Style::default().fg(TEXT_DIM)));
            spans.push(Span::styled(
                format!("signed in: {}", phone),
                Style::default().fg(STATUS_OK),
            ));
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
