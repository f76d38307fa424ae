//! Table rendering.
//!
//! Every frame rebuilds the whole table from the store plus edit state.
//! Values are rendered as plain text spans, never interpreted as markup.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use evtab_core::Event;

use crate::client::EventsApi;

use super::app::{App, Field, RowForm, Status};

pub fn draw(f: &mut Frame, app: &App<impl EventsApi>) {
    let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(f.area());

    draw_table(f, chunks[0], app);
    draw_status(f, chunks[1], app);
}

fn draw_table(f: &mut Frame, area: Rect, app: &App<impl EventsApi>) {
    let header =
        Row::new(["Event", "Start", "End", ""]).style(Style::default().add_modifier(Modifier::BOLD));

    let mut rows: Vec<Row> = Vec::new();
    for (i, event) in app.store.all().iter().enumerate() {
        let selected = i == app.selected;
        let row = match app.forms.get(&event.id) {
            Some(form) if app.edit_states.contains(&event.id) => edit_row(form, "✎", selected),
            _ => display_row(event, selected),
        };
        rows.push(row);
    }
    if let Some(form) = &app.new_row {
        rows.push(edit_row(form, "+", app.selected == app.store.len()));
    }

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(45),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(3),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(" events "));

    f.render_widget(table, area);
}

fn display_row(event: &Event, selected: bool) -> Row<'_> {
    let row = Row::new([
        Cell::from(event.event_name.as_str()),
        Cell::from(event.start_date.to_string()),
        Cell::from(event.end_date.to_string()),
        Cell::from(""),
    ]);
    style_selected(row, selected)
}

fn edit_row<'a>(form: &'a RowForm, marker: &'a str, selected: bool) -> Row<'a> {
    let row = Row::new([
        input_cell(&form.name, form.field == Field::Name),
        input_cell(&form.start, form.field == Field::Start),
        input_cell(&form.end, form.field == Field::End),
        Cell::from(Span::styled(marker, Style::default().fg(Color::Yellow))),
    ]);
    style_selected(row, selected)
}

/// One input buffer; the focused field gets a cursor mark.
fn input_cell(value: &str, focused: bool) -> Cell<'_> {
    if focused {
        Cell::from(Line::from(vec![
            Span::raw(value),
            Span::styled("▏", Style::default().fg(Color::Yellow)),
        ]))
        .style(Style::default().add_modifier(Modifier::UNDERLINED))
    } else {
        Cell::from(value).style(Style::default().fg(Color::Yellow))
    }
}

fn style_selected(row: Row<'_>, selected: bool) -> Row<'_> {
    if selected {
        row.style(Style::default().bg(Color::DarkGray))
    } else {
        row
    }
}

fn draw_status(f: &mut Frame, area: Rect, app: &App<impl EventsApi>) {
    let line = match &app.status {
        Some(Status { message, is_error }) => {
            let style = if *is_error {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Green)
            };
            Line::from(Span::styled(message.as_str(), style))
        }
        None if app.selected_is_editing() => Line::from(Span::styled(
            "tab next field · enter save · esc cancel",
            Style::default().fg(Color::DarkGray),
        )),
        None => Line::from(Span::styled(
            "enter edit · a add · d delete · r refresh · q quit",
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(Paragraph::new(line), area);
}
