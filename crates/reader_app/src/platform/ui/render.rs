use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap};
use ratatui::Frame;
use reader_core::{ReaderViewModel, TextBody, MISSING_CONTENT_NOTICE};

use crate::platform::input::{LocalUi, MenuField};

use super::layout;

pub(crate) fn draw(frame: &mut Frame, view: &ReaderViewModel, local: &LocalUi) {
    let (header, progress, main, footer) = layout::shell(frame.area());

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                view.doc_title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  ·  "),
            Span::raw(view.page_badge.clone()),
        ])),
        header,
    );

    frame.render_widget(
        Gauge::default()
            .ratio((view.progress_percent / 100.0).clamp(0.0, 1.0))
            .label(format!("{:.0}%", view.progress_percent))
            .gauge_style(Style::default().fg(Color::Blue)),
        progress,
    );

    if view.image.visible {
        draw_image_panel(frame, view, main);
    } else {
        draw_text_panel(frame, view, local, main);
    }

    draw_footer(frame, view, local, footer);

    if view.menu.open {
        draw_menu(frame, view, local);
    }
}

/// Terminal stand-in for the scan panel: the asset reference, the active
/// zoom class and the zoom button row.
fn draw_image_panel(frame: &mut Frame, view: &ReaderViewModel, area: Rect) {
    let panel = &view.image;

    let mut zoom_row: Vec<Span> = vec![Span::raw("Zoom ")];
    for button in &panel.zoom_buttons {
        let style = if button.active {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        zoom_row.push(Span::styled(format!("[{}]", button.label), style));
        zoom_row.push(Span::raw(" "));
    }

    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            panel.alt_text.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::raw(format!("Scan asset: {}", panel.image_path)),
        Line::raw(format!("Display class: {}", panel.zoom_class)),
        Line::raw(""),
        Line::from(zoom_row),
        Line::raw(""),
        Line::from(Span::styled(
            "+ / - to zoom, v for the transcription, f to open the scan",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", view.page_title)),
        ),
        area,
    );
}

/// The transcription panel renders the record content verbatim; pages
/// without content get the switch-view notice instead.
fn draw_text_panel(frame: &mut Frame, view: &ReaderViewModel, local: &LocalUi, area: Rect) {
    let body = match &view.text.body {
        TextBody::Content(html) => html.clone(),
        TextBody::Placeholder { page } => {
            format!("Page {page}\n\n{MISSING_CONTENT_NOTICE}")
        }
    };

    frame.render_widget(
        Paragraph::new(body)
            .wrap(Wrap { trim: false })
            .scroll((local.text_scroll, 0))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", view.page_title)),
            ),
        area,
    );
}

fn draw_footer(frame: &mut Frame, view: &ReaderViewModel, local: &LocalUi, area: Rect) {
    let nav_style = |enabled: bool| {
        if enabled {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };

    let mut spans = vec![
        Span::styled("← prev", nav_style(view.prev_enabled)),
        Span::raw("  "),
        Span::styled("→ next", nav_style(view.next_enabled)),
        Span::raw("  ·  v view  ·  m menu  ·  q quit"),
    ];
    if let Some(status) = &local.status {
        spans.push(Span::raw("  ·  "));
        spans.push(Span::styled(
            status.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_menu(frame: &mut Frame, view: &ReaderViewModel, local: &LocalUi) {
    let area = layout::centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let menu = &local.menu;
    let focus_marker = |field: MenuField| if menu.focus == field { "▸" } else { " " };

    let option_line = |label: &str, active: bool| {
        if active {
            Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{label} ✓"),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ])
        } else {
            Line::raw(format!("  {label}"))
        }
    };

    let mut lines = vec![
        Line::from(Span::styled(
            view.page_title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        option_line("Image view", view.menu.image_active),
        option_line("Text view", view.menu.text_active),
        Line::raw(""),
        Line::raw(format!(
            "{} Search: {}_",
            focus_marker(MenuField::Search),
            view.search.query
        )),
        Line::raw(format!(
            "{} Go to page: {}_  (of {})",
            focus_marker(MenuField::PageInput),
            menu.page_buffer,
            view.total_pages
        )),
        Line::raw(""),
    ];

    if view.search.no_results {
        lines.push(Line::from(Span::styled(
            "  No results",
            Style::default().fg(Color::DarkGray),
        )));
    }
    let last = view.search.results.len().saturating_sub(1);
    for (idx, hit) in view.search.results.iter().enumerate() {
        let style = if idx == menu.selected.min(last) && menu.focus == MenuField::Search {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!("  Page {} · {}", hit.page, hit.title),
            style,
        )));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "Tab switches fields · Enter jumps · Esc closes",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Menu ")),
        area,
    );
}
