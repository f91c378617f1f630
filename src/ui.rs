//! UI rendering helpers for the terminal user interface.
//!
//! This module lays out the queue list above the transport readout and draws
//! both with `ratatui`. Only the visible window of queue rows is built.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::{App, Focus};
use crate::engine::PlaybackEngine;
use crate::library::QueryDispatch;
use crate::queue::row::format_row;

/// Rows taken by the transport pane, borders included.
const TRANSPORT_HEIGHT: u16 = 4;
const FOOTER_HEIGHT: u16 = 3;

/// Screen regions; `*_inner` are the content areas inside the borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub list: Rect,
    pub list_inner: Rect,
    pub transport: Rect,
    pub transport_inner: Rect,
    pub footer: Rect,
}

pub fn layout(area: Rect, transport_visible: bool) -> Regions {
    let transport_height = if transport_visible { TRANSPORT_HEIGHT } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(transport_height),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    Regions {
        list: chunks[0],
        list_inner: pane(" queue ", false).inner(chunks[0]),
        transport: chunks[1],
        transport_inner: pane(" now playing ", false).inner(chunks[1]),
        footer: chunks[2],
    }
}

fn pane(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
        .padding(Padding {
            left: 1,
            right: 1,
            top: 0,
            bottom: 0,
        })
}

/// Render the controls help text, incorporating scrub seconds.
fn controls_text(scrub_seconds: u64) -> String {
    let scrub = format!("scrub -/+{scrub_seconds}s");
    let entries = [
        ("j/k", "up/down"),
        ("enter", "play"),
        ("alt+j/k", "move"),
        ("del", "remove"),
        ("space", "pause"),
        ("h/l", "prev/next"),
        ("H/L", scrub.as_str()),
        ("-/+", "volume"),
        ("s", "shuffle"),
        ("tab", "focus"),
        ("q", "quit"),
    ];
    entries
        .iter()
        .map(|(k, v)| format!("[{k}] {v}"))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Render the entire UI into the provided `frame`.
pub fn draw<E: PlaybackEngine, D: QueryDispatch>(
    frame: &mut Frame,
    app: &App<E, D>,
    scrub_seconds: u64,
) {
    let readout = app.readout();
    let regions = layout(frame.area(), readout.is_visible());

    draw_queue(frame, app, &regions);

    if readout.is_visible() {
        let focused = app.focus() == Focus::Transport;
        let transport = Paragraph::new(readout.lines().to_vec())
            .block(pane(" now playing ", focused));
        frame.render_widget(transport, regions.transport);
    }

    let footer = Paragraph::new(controls_text(scrub_seconds))
        .block(pane(" controls ", false))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, regions.footer);
}

fn draw_queue<E: PlaybackEngine, D: QueryDispatch>(
    frame: &mut Frame,
    app: &App<E, D>,
    regions: &Regions,
) {
    let view = app.queue();
    let focused = app.focus() == Focus::Queue;
    let block = pane(" queue ", focused);

    if !view.is_visible() {
        frame.render_widget(block, regions.list);
        return;
    }

    let list = view.list();
    let selection = list.selection();
    let width = regions.list_inner.width as usize;
    let rows = regions.list_inner.height as usize;

    let start = selection.first_visible.min(list.len());
    let end = (start + rows).min(list.len());
    let lines: Vec<Line> = list.tracks()[start..end]
        .iter()
        .enumerate()
        .map(|(offset, track)| {
            let index = start + offset;
            let mut style = Style::default();
            if list.playing() == Some(index) {
                style = style.add_modifier(Modifier::BOLD);
            }
            if index == selection.selected {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Line::styled(format_row(track, width), style)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), regions.list);
}
