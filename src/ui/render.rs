//! Top-level frame layout.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{App, Focus, NoticeLevel};
use crate::models::ActivityType;
use crate::theme::{
    ACCENT, ACCENT_DIM, AMBER_NOTICE, BG_HIGHLIGHT, BORDER_SUBTLE, RED_ERROR, ROUNDED_BORDERS,
    TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};

use super::cards::{render_entry_card, render_suggestion};
use super::filters::render_filter_panel;

const ENTRY_CARD_HEIGHT: u16 = 3;

/// Render one frame of the whole UI from the application state.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title line
            Constraint::Length(3), // Activity type selector
            Constraint::Length(7), // Suggestion panel
            Constraint::Min(3),    // Saved list
            Constraint::Length(1), // Notice banner
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    render_title(main_layout[0], app, frame);
    render_type_row(main_layout[1], app, frame);

    let suggestion_highlighted =
        app.focus == Focus::List && app.suggestion.is_some() && app.cursor == 0;
    render_suggestion(main_layout[2], app, suggestion_highlighted, frame);

    render_saved_list(main_layout[3], app, frame);
    render_notice(main_layout[4], app, frame);
    render_footer(main_layout[5], app, frame);

    // The filter overlay sits on top of everything else.
    if app.focus == Focus::Filters {
        render_filter_panel(main_layout[3].union(main_layout[2]), &app.form, frame);
    }
}

fn render_title(area: Rect, app: &App, frame: &mut Frame) {
    let title = Line::from(vec![
        Span::styled(
            " unbored ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(TEXT_MUTED),
        ),
        Span::styled(
            format!("  {} saved", app.entries.len()),
            Style::default().fg(TEXT_SECONDARY),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn render_type_row(area: Rect, app: &App, frame: &mut Frame) {
    let focused = app.focus == Focus::Types;
    let border_color = if focused { ACCENT } else { BORDER_SUBTLE };
    let block = Block::default()
        .title(" Activity type ")
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(border_color));

    let mut spans = Vec::new();
    for (i, label) in std::iter::once("Any")
        .chain(ActivityType::ALL.iter().map(|t| t.label()))
        .enumerate()
    {
        let style = if i == app.type_index {
            let fg = if focused { ACCENT } else { ACCENT_DIM };
            Style::default().fg(fg).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_MUTED)
        };
        spans.push(Span::styled(format!(" {} ", label), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_saved_list(area: Rect, app: &App, frame: &mut Frame) {
    let block = Block::default()
        .title(" To-do list ")
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.entries.is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            "Nothing saved yet. Fetch a suggestion and press enter to keep it.",
            Style::default().fg(TEXT_MUTED),
        )));
        frame.render_widget(hint, inner);
        return;
    }

    // Scroll so the row under the cursor stays visible.
    let visible = (inner.height / ENTRY_CARD_HEIGHT).max(1) as usize;
    let offset = usize::from(app.suggestion.is_some());
    let selected_entry = if app.focus == Focus::List && app.cursor >= offset {
        Some(app.cursor - offset)
    } else {
        None
    };
    let first = match selected_entry {
        Some(sel) if sel + 1 > visible => sel + 1 - visible,
        _ => 0,
    };

    for (slot, index) in (first..app.entries.len()).enumerate().take(visible) {
        let card_area = Rect {
            x: inner.x,
            y: inner.y + (slot as u16) * ENTRY_CARD_HEIGHT,
            width: inner.width,
            height: ENTRY_CARD_HEIGHT,
        };
        render_entry_card(
            card_area,
            &app.entries[index],
            selected_entry == Some(index),
            frame,
        );
    }
}

fn render_notice(area: Rect, app: &App, frame: &mut Frame) {
    let Some(notice) = &app.notice else {
        return;
    };
    let fg = match notice.level {
        NoticeLevel::Info => AMBER_NOTICE,
        NoticeLevel::Error => RED_ERROR,
    };
    let banner = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", notice.text),
        Style::default().fg(fg).bg(BG_HIGHLIGHT).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(banner, area);
}

fn render_footer(area: Rect, app: &App, frame: &mut Frame) {
    let hints = match app.focus {
        Focus::Types => " enter: suggest | ←/→: type | f: filters | tab: list | q: quit ",
        Focus::List => " enter: save/unsave | x: done | d: drop | J/K: reorder | o: link | q: quit ",
        Focus::Filters => " ↑/↓: field | type a number | del: clear | esc: done ",
    };
    let bar = Paragraph::new(hints).style(Style::default().fg(TEXT_PRIMARY).bg(BORDER_SUBTLE));
    frame.render_widget(bar, area);
}
