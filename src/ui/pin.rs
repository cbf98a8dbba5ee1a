//! PIN lock screen
//!
//! Four dots and a 3x4 keypad drawing. Input comes from the number keys.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::pin::{PinGate, PIN_LEN};
use crate::ui::{centered_rect, Theme};

const KEYPAD: [[&str; 3]; 4] = [
    ["1", "2", "3"],
    ["4", "5", "6"],
    ["7", "8", "9"],
    [" ", "0", "⌫"],
];

pub fn render(frame: &mut Frame, area: Rect, gate: &PinGate) {
    let popup = centered_rect(area, 32, 16);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if gate.rejected {
            Theme::error()
        } else {
            Theme::border_focused()
        })
        .title(Span::styled(" LOCKED ", Theme::title()))
        .style(Style::default().bg(Theme::SURFACE));

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("Enter PIN", Theme::text())),
        Line::from(""),
        dots(gate),
        Line::from(""),
    ];

    for row in KEYPAD {
        let mut spans = Vec::new();
        for (i, key) in row.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(format!("  {}  ", key), Theme::keypad()));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let hint = if gate.rejected {
        Span::styled("Wrong PIN", Theme::error())
    } else {
        Span::styled("0-9 enter  ⌫ delete  q quit", Theme::keybind_desc())
    };
    lines.push(Line::from(hint));

    let para = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(para, popup);
}

/// "● ● ○ ○" for two entered digits
fn dots(gate: &PinGate) -> Line<'static> {
    let mut spans = Vec::with_capacity(PIN_LEN * 2);
    for i in 0..PIN_LEN {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        if i < gate.entered() {
            spans.push(Span::styled("●", Theme::pin_filled()));
        } else {
            spans.push(Span::styled("○", Theme::pin_empty()));
        }
    }
    Line::from(spans)
}
