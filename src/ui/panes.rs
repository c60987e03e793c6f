//! Rendering logic for each TUI pane

use crate::generator::Family;
use crate::parser::ast::call_kind;
use crate::step::{Highlight, HighlightKind, Step};
use crate::ui::theme::{highlight_color, DEFAULT_THEME};

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rustc_hash::FxHashMap;

/// Simple syntax highlighting for mini-language source
fn highlight_source_code(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    // Simple tokenizer
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        // Handle comments
        if c == '/' && i + 1 < chars.len() && chars[i + 1] == '/' {
            if !current_word.is_empty() {
                spans.push(Span::raw(current_word.clone()));
                current_word.clear();
            }
            spans.push(Span::styled(
                line[i..].to_string(),
                Style::default().fg(DEFAULT_THEME.comment),
            ));
            break;
        }

        // Handle non-alphanumeric (delimiters)
        if !c.is_alphanumeric() && c != '_' && c != '$' {
            if !current_word.is_empty() {
                let is_call = c == '(';
                let style = word_style(&current_word, is_call);
                spans.push(Span::styled(current_word.clone(), style));
                current_word.clear();
            }

            let style = match c {
                '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary),
                '=' | '-' | ';' | ',' => Style::default().fg(DEFAULT_THEME.fg),
                _ => Style::default(),
            };

            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    if !current_word.is_empty() {
        let style = word_style(&current_word, false);
        spans.push(Span::styled(current_word, style));
    }

    Line::from(spans)
}

fn word_style(word: &str, is_call: bool) -> Style {
    match word {
        "let" | "const" | "var" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        _ => {
            if word.chars().all(|c| c.is_ascii_digit()) {
                Style::default().fg(DEFAULT_THEME.number)
            } else if is_call && call_kind(word).is_some() {
                Style::default().fg(DEFAULT_THEME.function)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            }
        }
    }
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let border_color = if focused {
        DEFAULT_THEME.border_focused
    } else {
        DEFAULT_THEME.border_normal
    };

    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
}

/// Render the source script pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source: &str,
    scroll: usize,
    focused: bool,
) {
    let block = pane_block("Script", focused);
    let inner_height = area.height.saturating_sub(2) as usize;

    let lines: Vec<Line<'_>> = source
        .lines()
        .skip(scroll)
        .take(inner_height)
        .map(highlight_source_code)
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the structure pane: the current step's array cells or list nodes,
/// colored by highlight role.
pub fn render_structure_pane(frame: &mut Frame, area: Rect, step: Option<&Step>, family: Family) {
    let block = pane_block(family.label(), false);

    let Some(step) = step else {
        let empty = Paragraph::new("Nothing to visualize")
            .style(Style::default().fg(DEFAULT_THEME.comment))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    };

    // Per-index role lookup for cell coloring
    let roles: FxHashMap<usize, HighlightKind> = step
        .highlights
        .iter()
        .map(|h: &Highlight| (h.index, h.kind))
        .collect();

    let is_list = family == Family::LinkedList;
    let mut value_spans: Vec<Span<'_>> = vec![Span::raw(" ")];
    let mut index_spans: Vec<Span<'_>> = vec![Span::raw(" ")];

    for (i, value) in step.values.iter().enumerate() {
        let cell = if is_list {
            format!("({})", value)
        } else {
            format!("[ {} ]", value)
        };
        let width = cell.chars().count();

        let style = match roles.get(&i) {
            Some(kind) => Style::default()
                .fg(highlight_color(*kind))
                .add_modifier(Modifier::BOLD),
            None => Style::default().fg(DEFAULT_THEME.cell_border),
        };

        value_spans.push(Span::styled(cell, style));
        index_spans.push(Span::styled(
            format!("{:^width$}", i),
            Style::default().fg(DEFAULT_THEME.comment),
        ));

        if i + 1 < step.values.len() {
            // List nodes are joined by their derived link arrows
            let joint = if step.links.iter().any(|l| l.from == i && l.to == i + 1) {
                "──▶"
            } else {
                " "
            };
            value_spans.push(Span::styled(
                joint,
                Style::default().fg(DEFAULT_THEME.comment),
            ));
            index_spans.push(Span::raw(" ".repeat(joint.chars().count())));
        }
    }

    let structure_line = if step.values.is_empty() {
        Line::from(Span::styled(
            " (empty)",
            Style::default().fg(DEFAULT_THEME.comment),
        ))
    } else {
        Line::from(value_spans)
    };

    let lines = vec![
        Line::default(),
        structure_line,
        Line::from(index_spans),
        Line::default(),
        Line::from(Span::styled(
            format!(" {}", step.description),
            Style::default().fg(DEFAULT_THEME.fg),
        )),
        Line::from(Span::styled(
            format!(" [{}]", step.tag.label()),
            Style::default().fg(DEFAULT_THEME.comment),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the step log pane, keeping the current step visible.
pub fn render_steps_pane(
    frame: &mut Frame,
    area: Rect,
    steps: &[Step],
    position: usize,
    focused: bool,
) {
    let block = pane_block("Steps", focused);
    let inner_height = area.height.saturating_sub(2) as usize;

    // Keep the cursor roughly centered
    let start = position.saturating_sub(inner_height.saturating_sub(1) / 2);

    let lines: Vec<Line<'_>> = steps
        .iter()
        .enumerate()
        .skip(start)
        .take(inner_height)
        .map(|(i, step)| {
            let marker = if i == position { "▶" } else { " " };
            let mut style = Style::default().fg(DEFAULT_THEME.fg);
            if i == position {
                style = style.bg(DEFAULT_THEME.current_line_bg);
            }

            Line::from(vec![
                Span::styled(format!("{} {:>3} ", marker, i), style),
                Span::styled(
                    format!("{:<19} ", step.tag.label()),
                    style.fg(DEFAULT_THEME.primary),
                ),
                Span::styled(step.description.clone(), style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the one-line status bar
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    position: usize,
    total: usize,
    family: Family,
    status: &str,
) {
    let step_display = if total == 0 {
        "0/0".to_string()
    } else {
        format!("{}/{}", position + 1, total)
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" Step {} │ {} │ ", step_display, family.label()),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
        Span::styled(status.to_string(), Style::default().fg(DEFAULT_THEME.accent)),
        Span::styled(
            " │ space play · ←/→ step · r rewind · tab focus · q quit",
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
