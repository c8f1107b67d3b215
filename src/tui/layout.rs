use std::collections::BTreeSet;

use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

use crate::config::ColorConfig;
use crate::domain::Advisory;

pub const LIST_PROMPT: &str = "Your selection (enter the number or 'q' to quit): ";
pub const DETAIL_PROMPT: &str = "Press Enter to go back... ";

const LIST_HELP: &str = "Up/Down:Scroll  PgUp/PgDn:Page  Enter:Submit  Esc:Clear  Ctrl+C:Quit";
const DETAIL_HELP: &str = "Enter:Back  Ctrl+C:Quit";

const BANNER: [&str; 5] = [
    r"  ____ __     __ _____  _____  _____  _____  ____  ",
    r" / ___|\ \   / /| ____||  ___|| ____|| ____||  _ \ ",
    r"| |     \ \ / / |  _|  | |_   |  _|  |  _|  | | | |",
    r"| |___   \ V /  | |___ |  _|  | |___ | |___ | |_| |",
    r" \____|   \_/   |_____||_|    |_____||_____||____/ ",
];

/// Text typed so far and the last inline message.
pub struct Prompt<'a> {
    pub input: &'a str,
    pub status: Option<&'a str>,
}

/// Draw the list screen and return how many table rows fit.
pub fn render_list(
    frame: &mut Frame,
    advisories: &[Advisory],
    viewed: &BTreeSet<usize>,
    table_state: &mut TableState,
    prompt: &Prompt,
    colors: &ColorConfig,
) -> usize {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BANNER.len() as u16 + 1), // Banner
            Constraint::Min(4),                          // Advisories
            Constraint::Length(1),                       // Status bar
            Constraint::Length(1),                       // Prompt
        ])
        .split(frame.area());

    render_banner(frame, chunks[0], colors);
    render_advisory_table(frame, advisories, viewed, table_state, chunks[1], colors);
    render_status_bar(frame, prompt.status, LIST_HELP, chunks[2], colors);
    render_prompt(frame, LIST_PROMPT, prompt.input, chunks[3]);

    // borders and header row
    chunks[1].height.saturating_sub(3) as usize
}

pub fn render_detail(frame: &mut Frame, advisory: &Advisory, prompt: &Prompt, colors: &ColorConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Summary table
            Constraint::Min(3),    // Description
            Constraint::Length(1), // Published
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Prompt
        ])
        .split(frame.area());

    render_summary_table(frame, advisory, chunks[0], colors);

    let description = Paragraph::new(advisory.description.as_str())
        .style(Style::default().fg(colors.description))
        .block(
            Block::default()
                .title(" Description ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.row)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(description, chunks[1]);

    let published = Line::from(vec![
        Span::styled("Published: ", header_style(colors)),
        Span::raw(advisory.published.as_str()),
    ]);
    frame.render_widget(Paragraph::new(published), chunks[2]);

    render_status_bar(frame, prompt.status, DETAIL_HELP, chunks[3], colors);
    render_prompt(frame, DETAIL_PROMPT, prompt.input, chunks[4]);
}

fn header_style(colors: &ColorConfig) -> Style {
    Style::default()
        .fg(colors.header)
        .add_modifier(Modifier::BOLD)
}

fn render_banner(frame: &mut Frame, area: Rect, colors: &ColorConfig) {
    let mut lines: Vec<Line> = BANNER
        .iter()
        .map(|line| Line::from(Span::styled(*line, Style::default().fg(colors.row))))
        .collect();
    lines.push(Line::from(Span::styled(
        "Latest security advisories",
        Style::default().add_modifier(Modifier::DIM),
    )));

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_advisory_table(
    frame: &mut Frame,
    advisories: &[Advisory],
    viewed: &BTreeSet<usize>,
    table_state: &mut TableState,
    area: Rect,
    colors: &ColorConfig,
) {
    let header = Row::new(["No.", "Date", "Title", "CVE URL"]).style(header_style(colors));

    let rows = advisories.iter().enumerate().map(|(i, advisory)| {
        let style = if viewed.contains(&i) {
            Style::default().fg(colors.viewed_row)
        } else {
            Style::default().fg(colors.row)
        };

        Row::new([
            (i + 1).to_string(),
            advisory.published_short.clone(),
            advisory.title.clone(),
            advisory.link.clone(),
        ])
        .style(style)
    });

    let widths = [
        Constraint::Length(4),
        Constraint::Length(6),
        Constraint::Fill(3),
        Constraint::Fill(2),
    ];

    let block = Block::default()
        .title(format!(" Select a CVE to view details ({}) ", advisories.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.row));

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(2);
    frame.render_stateful_widget(table, area, table_state);
}

fn render_summary_table(frame: &mut Frame, advisory: &Advisory, area: Rect, colors: &ColorConfig) {
    let header = Row::new(["Date", "CVE ID", "URL"]).style(header_style(colors));
    let row = Row::new([
        Span::styled(advisory.published_short.as_str(), Style::default().fg(colors.row)),
        Span::styled(advisory.cve_id.as_str(), Style::default().fg(colors.row)),
        Span::styled(advisory.link.as_str(), Style::default().fg(colors.link)),
    ]);

    let block = Block::default()
        .title(format!(" CVE Details for {} ", advisory.cve_id))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.row));

    let table = Table::new(
        [row],
        [
            Constraint::Length(6),
            Constraint::Length(16),
            Constraint::Fill(1),
        ],
    )
    .header(header)
    .block(block)
    .column_spacing(2);
    frame.render_widget(table, area);
}

fn render_status_bar(
    frame: &mut Frame,
    status: Option<&str>,
    help: &str,
    area: Rect,
    colors: &ColorConfig,
) {
    let paragraph = match status {
        Some(message) => Paragraph::new(message).style(
            Style::default()
                .fg(colors.error)
                .bg(colors.status_bg)
                .add_modifier(Modifier::BOLD),
        ),
        None => Paragraph::new(help).style(Style::default().fg(colors.status_fg).bg(colors.status_bg)),
    };

    frame.render_widget(paragraph, area);
}

fn render_prompt(frame: &mut Frame, label: &str, input: &str, area: Rect) {
    let line = Line::from(vec![
        Span::styled(label, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(input),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    let column = (label.chars().count() + input.chars().count()) as u16;
    let x = area.x + column.min(area.width.saturating_sub(1));
    frame.set_cursor_position(Position::new(x, area.y));
}
