use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::session::Session;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_card, layout_regions};
use crate::ui::login::LoginState;
use crate::ui::otp::OtpState;
use crate::ui::register::{RegisterField, RegisterState};
use crate::ui::route::Route;
use crate::ui::theme::{
    BRAND_ACCENT, FIELD_FOCUS, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK, TEXT_DIM,
};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();

    if app.in_splash() {
        draw_splash(frame, area);
        return;
    }

    let (header, body, footer) = layout_regions(area);
    let session = app.session();

    frame.render_widget(Header::new().widget(&session), header);

    match app.route() {
        Route::Login => draw_login(frame, body, app.login()),
        Route::Register => draw_register(frame, body, app.register()),
        Route::OtpVerify => draw_otp(frame, body, app.otp()),
        Route::Dashboard => draw_dashboard(frame, body, &session),
    }

    frame.render_widget(Footer::new().widget(app.route(), footer), footer);
}

fn draw_splash(frame: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "VAS",
            Style::default().fg(BRAND_ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Value Added Services",
            Style::default().fg(HEADER_TEXT),
        )),
        Line::default(),
        Line::from(Span::styled("Loading...", Style::default().fg(TEXT_DIM))),
    ];
    let card = centered_card(30, lines.len() as u16 + 2, area);
    render_card(frame, card, None, lines);
}

fn draw_login(frame: &mut Frame<'_>, body: Rect, state: &LoginState) {
    let mut lines = vec![
        title_line("Welcome Back"),
        Line::default(),
        label_line("Mobile Number"),
        field_line(&state.phone, true),
        hint_line("Enter your 10-digit mobile number"),
        Line::default(),
    ];
    push_status(&mut lines, &state.error, &None);
    if state.submitting {
        lines.push(Line::from(Span::styled(
            "Sending Verification Code...",
            Style::default().fg(TEXT_DIM),
        )));
    }
    let card = centered_card(52, lines.len() as u16 + 2, body);
    render_card(frame, card, Some("SmartVAS"), lines);
}

fn draw_register(frame: &mut Frame<'_>, body: Rect, state: &RegisterState) {
    let mut lines = vec![title_line("Create Account"), Line::default()];

    for field in RegisterField::ALL {
        let value = state.draft.field(field);
        let shown = if field.is_secret() {
            "•".repeat(value.chars().count())
        } else {
            value.to_string()
        };
        lines.push(label_line(field.label()));
        lines.push(field_line(&shown, state.focused == field));
    }

    lines.push(Line::default());
    push_status(&mut lines, &state.error, &state.success);
    if state.submitting {
        lines.push(Line::from(Span::styled(
            "Creating Account...",
            Style::default().fg(TEXT_DIM),
        )));
    }
    let card = centered_card(52, lines.len() as u16 + 2, body);
    render_card(frame, card, Some("SmartVAS"), lines);
}

fn draw_otp(frame: &mut Frame<'_>, body: Rect, state: &OtpState) {
    let tail = state
        .phone
        .as_deref()
        .map(|phone| {
            let digits: Vec<char> = phone.chars().collect();
            digits[digits.len().saturating_sub(4)..]
                .iter()
                .collect::<String>()
        })
        .unwrap_or_else(String::new);

    let mut lines = vec![
        title_line("Verify Your Account"),
        Line::default(),
        hint_line("We've sent a 4-digit verification code to your phone"),
        hint_line(&format!("ending with {}", tail)),
        Line::default(),
        otp_slots_line(state),
        Line::default(),
    ];
    push_status(&mut lines, &state.error, &state.notice);
    if state.submitting {
        lines.push(Line::from(Span::styled(
            "Verifying...",
            Style::default().fg(TEXT_DIM),
        )));
    }
    if state.resend_ready() {
        lines.push(Line::from(Span::styled(
            "Press R to resend the OTP",
            Style::default().fg(HEADER_TEXT),
        )));
    } else {
        lines.push(hint_line(&format!(
            "Resend OTP in {} seconds",
            state.cooldown
        )));
    }
    let card = centered_card(58, lines.len() as u16 + 2, body);
    render_card(frame, card, Some("SmartVAS"), lines);
}

fn draw_dashboard(frame: &mut Frame<'_>, body: Rect, session: &Session) {
    let phone = session.phone_number.clone().unwrap_or_default();
    let lines = vec![
        title_line("Welcome to SmartVAS!"),
        Line::default(),
        Line::from(Span::styled(
            "Your account has been successfully verified",
            Style::default().fg(STATUS_OK),
        )),
        Line::from(vec![
            Span::styled("Phone number: ", Style::default().fg(TEXT_DIM)),
            Span::styled(phone, Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD)),
        ]),
    ];
    let card = centered_card(52, lines.len() as u16 + 2, body);
    render_card(frame, card, Some("SmartVAS"), lines);
}

fn render_card(frame: &mut Frame<'_>, card: Rect, title: Option<&str>, lines: Vec<Line<'static>>) {
    frame.render_widget(Clear, card);
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    if let Some(title) = title {
        block = block.title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(BRAND_ACCENT).add_modifier(Modifier::BOLD),
        ));
    }
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Left).block(block),
        card,
    );
}

fn title_line(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    ))
}

fn label_line(text: &str) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), Style::default().fg(TEXT_DIM)))
}

fn hint_line(text: &str) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), Style::default().fg(TEXT_DIM)))
}

fn field_line(value: &str, focused: bool) -> Line<'static> {
    let shown = value.to_string();
    let style = if focused {
        Style::default().fg(HEADER_TEXT).bg(FIELD_FOCUS)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    let marker = if focused { "▸ " } else { "  " };
    Line::from(vec![
        Span::styled(marker, Style::default().fg(BRAND_ACCENT)),
        Span::styled(format!("{}▏", shown), style),
    ])
}

fn otp_slots_line(state: &OtpState) -> Line<'static> {
    let mut spans = Vec::with_capacity(state.slots.len() * 2);
    for (index, slot) in state.slots.iter().enumerate() {
        let digit = slot.map(|c| c.to_string()).unwrap_or_else(|| " ".to_string());
        let style = if index == state.focused {
            Style::default().fg(HEADER_TEXT).bg(FIELD_FOCUS).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        spans.push(Span::styled(format!("[{}]", digit), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn push_status(lines: &mut Vec<Line<'static>>, error: &Option<String>, success: &Option<String>) {
    if let Some(error) = error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(STATUS_ERROR),
        )));
    }
    if let Some(success) = success {
        lines.push(Line::from(Span::styled(
            success.clone(),
            Style::default().fg(STATUS_OK),
        )));
    }
}
