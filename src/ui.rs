//! The UI renders the application state into a sectioned contact list.
//!
//! The list shows a header row at the start of each section, with the fast-scroll rail
//! alongside it. Rail letters with no section are dimmed, and the current section is bold.

use crate::app_state::{AppState, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Renders the contact list, rail, and help or command bar.
pub fn draw(f: &mut Frame, app: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(5)])
        .split(rows[0]);

    draw_list(f, app, columns[0]);
    draw_rail(f, app, columns[1]);
    draw_status(f, app, rows[1]);
}

fn draw_list(f: &mut Frame, app: &AppState, area: Rect) {
    let mut items: Vec<ListItem> = Vec::new();
    let mut selected_row = None;
    let mut sections = app.index.descriptors().iter().peekable();

    for position in 0..app.model.len() {
        if let Some(section) = sections.next_if(|d| d.start_index == position) {
            items.push(ListItem::new(Line::from(Span::styled(
                section.label.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))));
        }

        let Some(contact) = app.model.get(position) else {
            break;
        };
        if position == app.selected {
            selected_row = Some(items.len());
        }

        let mut spans = vec![Span::raw(format!("  {}", contact.display_label()))];
        if let Some(number) = contact.phone_numbers.first() {
            spans.push(Span::styled(
                format!("  {number}"),
                Style::default().fg(Color::DarkGray),
            ));
        }
        items.push(ListItem::new(Line::from(spans)));
    }

    let title = match app.current_section() {
        Some(section) => format!("Contacts ({}) - {}", app.model.len(), section.label),
        None => format!("Contacts ({})", app.model.len()),
    };

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default().with_selected(selected_row);
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_rail(f: &mut Frame, app: &AppState, area: Rect) {
    let current = app.current_section().map(|d| d.label.as_str());

    let lines: Vec<Line> = app
        .rail()
        .into_iter()
        .map(|(label, present)| {
            let style = if current == Some(label.as_str()) {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if present {
                Style::default()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(Span::styled(format!(" {label}"), style))
        })
        .collect();

    let rail = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    f.render_widget(rail, area);
}

fn draw_status(f: &mut Frame, app: &AppState, area: Rect) {
    let (text, title) = if app.current_view == View::Command {
        (format!(":{}", app.command_buffer), "Command")
    } else if let Some(ref msg) = app.message {
        (msg.clone(), "")
    } else {
        (
            "A-Z/#: Jump | *: Favorites | ↑/↓: Move | PgUp/PgDn: Section | :s <property> | Esc: Quit"
                .to_string(),
            "",
        )
    };

    let status = Paragraph::new(text).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(status, area);
}
