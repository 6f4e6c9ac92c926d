//! Filter form overlay rendering.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::filters::FilterForm;
use crate::theme::{
    ACCENT, BG_PANEL, BORDER_SUBTLE, ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};

const PANEL_WIDTH: u16 = 42;

/// Render the filter form as a right-hand overlay, the way a pop-over
/// sidebar would sit over the list.
pub fn render_filter_panel(area: Rect, form: &FilterForm, frame: &mut Frame) {
    let width = PANEL_WIDTH.min(area.width);
    let height = (form.fields.len() as u16 + 3).min(area.height);
    let panel = Rect {
        x: area.right().saturating_sub(width),
        y: area.y + 1,
        width,
        height,
    };

    frame.render_widget(Clear, panel);

    let block = Block::default()
        .title(" Filters ")
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(ACCENT))
        .style(Style::default().bg(BG_PANEL));

    let label_width = form
        .fields
        .iter()
        .map(|f| f.label.len())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(form.fields.len() + 1);
    for (i, field) in form.fields.iter().enumerate() {
        let active = i == form.active;
        let marker = if active { "▸ " } else { "  " };
        let label_style = if active {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_SECONDARY)
        };

        let mut spans = vec![
            Span::styled(marker, Style::default().fg(ACCENT)),
            Span::styled(format!("{:<label_width$}  ", field.label), label_style),
        ];
        if field.buffer.is_empty() {
            spans.push(Span::styled(field.hint, Style::default().fg(TEXT_MUTED)));
        } else {
            spans.push(Span::styled(
                field.buffer.clone(),
                Style::default().fg(TEXT_PRIMARY),
            ));
        }
        if active {
            spans.push(Span::styled("▏", Style::default().fg(ACCENT)));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(Span::styled(
        "  empty fields are left unfiltered",
        Style::default().fg(BORDER_SUBTLE),
    )));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, panel);
}
