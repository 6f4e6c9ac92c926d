//! Suggestion and saved-entry card rendering.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::{App, FetchState};
use crate::models::{Activity, Entry};
use crate::theme::{
    ACCENT, AMBER_NOTICE, BG_HIGHLIGHT, BG_PANEL, BORDER_SUBTLE, GREEN_DONE, RED_ERROR,
    ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::utils::truncate_chars;

use super::helpers::wrap_text;

/// The empty-state message, shown when a filter combination matches
/// nothing.
pub const EMPTY_STATE_MESSAGE: &str =
    "Unable to find any activities that satisfy the current filters.";

/// One prose line summarizing a suggestion's numeric fields.
fn describe(activity: &Activity) -> String {
    let participants = if activity.participants > 1 {
        format!("requires {} participants ", activity.participants)
    } else {
        String::new()
    };
    format!(
        "It's considered to have an accessibility score of {} \
         (0 being the most accessible; 1 being the least), is a {} type \
         of activity, {}and has a price score of {} (0 being free).",
        activity.accessibility,
        activity.kind.query_value(),
        participants,
        activity.price,
    )
}

/// Render the suggestion panel: the fetched activity, the waiting
/// indicator, the empty state, or an inline failure message.
pub fn render_suggestion(area: Rect, app: &App, highlighted: bool, frame: &mut Frame) {
    let border_color = if highlighted { ACCENT } else { BORDER_SUBTLE };
    let block = Block::default()
        .title(" Suggestion ")
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(BG_PANEL));

    let inner_width = block.inner(area).width as usize;
    let lines: Vec<Line> = match (&app.fetch_state, &app.suggestion) {
        (FetchState::Fetching, _) => vec![Line::from(Span::styled(
            "Asking the Bored API for something to do...",
            Style::default().fg(AMBER_NOTICE),
        ))],
        (FetchState::NoMatch, _) => vec![Line::from(Span::styled(
            EMPTY_STATE_MESSAGE,
            Style::default().fg(AMBER_NOTICE),
        ))],
        (FetchState::Failed(msg), _) => vec![Line::from(Span::styled(
            format!("Could not reach the API: {}", msg),
            Style::default().fg(RED_ERROR),
        ))],
        (FetchState::Idle, Some(activity)) => suggestion_lines(activity, app, inner_width),
        (FetchState::Idle, None) => vec![Line::from(Span::styled(
            "Pick a type above and press enter for a suggestion.",
            Style::default().fg(TEXT_MUTED),
        ))],
    };

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn suggestion_lines<'a>(activity: &'a Activity, app: &App, width: usize) -> Vec<Line<'a>> {
    let mut lines = vec![Line::from(Span::styled(
        activity.activity.clone(),
        Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
    ))];

    for wrapped in wrap_text(&describe(activity), width.max(1)) {
        lines.push(Line::from(Span::styled(
            wrapped,
            Style::default().fg(TEXT_SECONDARY),
        )));
    }

    let mut status = Vec::new();
    if app.suggestion_selected() {
        status.push(Span::styled(
            "saved ",
            Style::default().fg(GREEN_DONE).add_modifier(Modifier::BOLD),
        ));
        status.push(Span::styled("(enter removes it)", Style::default().fg(TEXT_MUTED)));
    } else {
        status.push(Span::styled("enter saves it", Style::default().fg(TEXT_MUTED)));
    }
    if activity.has_link() {
        status.push(Span::styled("  o opens the link", Style::default().fg(TEXT_MUTED)));
    }
    lines.push(Line::from(status));

    lines
}

/// Render one saved entry as a three-line card.
pub fn render_entry_card(area: Rect, entry: &Entry, selected: bool, frame: &mut Frame) {
    let border_color = if selected { ACCENT } else { BORDER_SUBTLE };
    let bg_color = if selected { BG_HIGHLIGHT } else { BG_PANEL };

    let card_block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(bg_color));

    let (indicator, indicator_color) = if entry.done {
        ("●", GREEN_DONE)
    } else {
        ("○", TEXT_MUTED)
    };

    let mut text_style = Style::default().fg(TEXT_PRIMARY);
    if entry.done {
        text_style = text_style.fg(TEXT_MUTED).add_modifier(Modifier::CROSSED_OUT);
    }

    let inner_width = area.width.saturating_sub(4) as usize;
    let link_marker = if entry.activity.has_link() { "  [link]" } else { "" };
    let text_width = inner_width.saturating_sub(2 + link_marker.len());
    let description = truncate_chars(&entry.activity.activity, text_width.max(4));

    let mut spans = vec![
        Span::styled(format!("{} ", indicator), Style::default().fg(indicator_color)),
        Span::styled(description, text_style),
    ];
    if !link_marker.is_empty() {
        spans.push(Span::styled(link_marker, Style::default().fg(TEXT_MUTED)));
    }

    let paragraph = Paragraph::new(vec![Line::from(spans)]).block(card_block);
    frame.render_widget(paragraph, area);
}
