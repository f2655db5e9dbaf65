use std::{io, time::Duration};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, BorderType, Paragraph, Gauge, Padding},
};
use inbound_core::{find_week, DashboardSnapshot};

use crate::report::{fmt_opt_volume, fmt_rate, fmt_volume};

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    actual: Color,
    target: Color,
    ai: Color,
    pace: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
    actual: Color::Green,
    target: Color::Blue,
    ai: Color::Magenta,
    pace: Color::Yellow,
};

pub struct DashboardApp {
    pub snapshot: DashboardSnapshot,
    pub selected_week: usize,
}

impl DashboardApp {
    pub fn new(snapshot: DashboardSnapshot) -> Self {
        // Off-week days (Sundays) land on the week that just ended.
        let selected_week = snapshot
            .current_week
            .or_else(|| {
                let previous = snapshot.today.pred_opt()?;
                find_week(&snapshot.weeks, previous).map(|w| w.index)
            })
            .unwrap_or_else(|| snapshot.weekly.len().saturating_sub(1));
        Self {
            snapshot,
            selected_week,
        }
    }

    pub fn next_week(&mut self) {
        if self.selected_week + 1 < self.snapshot.weekly.len() {
            self.selected_week += 1;
        }
    }

    pub fn previous_week(&mut self) {
        if self.selected_week > 0 {
            self.selected_week -= 1;
        }
    }
}

pub fn run(snapshot: DashboardSnapshot) -> Result<()> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = DashboardApp::new(snapshot);

    // Main loop
    let res = loop {
        if let Err(e) = terminal.draw(|f| ui(f, &app)) {
            break Err(e.into());
        }

        match event::poll(Duration::from_millis(100)) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(e) => break Err(e.into()),
        }
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break Ok(()),
                KeyCode::Left | KeyCode::Char('h') => app.previous_week(),
                KeyCode::Right | KeyCode::Char('l') => app.next_week(),
                _ => {}
            },
            Ok(_) => {}
            Err(e) => break Err(e.into()),
        }
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn ui(frame: &mut Frame, app: &DashboardApp) {
    let size = frame.area();
    let snapshot = &app.snapshot;

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Chart + side panel
            Constraint::Length(1), // Footer
        ])
        .split(size);

    // --- Header ---
    let header_block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(THEME.muted));

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(24),
            Constraint::Min(1),
            Constraint::Length(34),
        ])
        .split(main_layout[0]);

    let app_title = Paragraph::new(Span::styled(
        format!("INBOUND {}", snapshot.month),
        Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD),
    ))
    .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(app_title, header_layout[0]);

    let week_label = snapshot
        .weeks
        .get(app.selected_week)
        .map(|w| format!(" {} ", w.label()))
        .unwrap_or_default();
    let last = snapshot.weekly.len().saturating_sub(1);
    let arrow = |enabled: bool| Style::default().fg(if enabled { THEME.text } else { THEME.muted });
    let nav_text = Line::from(vec![
        Span::styled(" < ", arrow(app.selected_week > 0)),
        Span::styled(
            week_label,
            Style::default().fg(THEME.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" > ", arrow(app.selected_week < last)),
    ]);
    let nav = Paragraph::new(nav_text)
        .alignment(Alignment::Right)
        .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(nav, header_layout[2]);
    frame.render_widget(header_block, main_layout[0]);

    // --- Main Content Split ---
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65),
            Constraint::Length(1),
            Constraint::Percentage(35),
        ])
        .split(main_layout[1]);

    draw_chart(frame, app, content_chunks[0]);
    draw_info_panel(frame, app, content_chunks[2]);

    // --- Footer ---
    let help = Line::from(vec![
        Span::styled(format!("TODAY: {}  ", snapshot.today), Style::default().fg(THEME.muted)),
        Span::styled("WEEK: ", Style::default().fg(THEME.muted)),
        Span::styled("←/→ ", Style::default().fg(THEME.text)),
        Span::raw("  "),
        Span::styled("QUIT: ", Style::default().fg(THEME.muted)),
        Span::styled("q", Style::default().fg(THEME.text)),
    ]);
    let footer = Paragraph::new(help)
        .alignment(Alignment::Center)
        .style(Style::default().fg(THEME.muted));
    frame.render_widget(footer, main_layout[2]);
}

fn draw_chart(frame: &mut Frame, app: &DashboardApp, area: Rect) {
    let mut bar_items = Vec::new();

    for row in &app.snapshot.weekly {
        let selected = row.index == app.selected_week;
        let label = format!("W{}", row.index + 1);
        let dim = |c: Color| if selected { c } else { THEME.muted };

        bar_items.push(
            Bar::default()
                .value(row.target_sum.max(0.0) as u64)
                .style(Style::default().fg(dim(THEME.target)))
                .text_value(String::new()),
        );
        bar_items.push(
            Bar::default()
                .label(label)
                .value(row.actual_sum.max(0.0) as u64)
                .style(Style::default().fg(dim(THEME.actual)))
                .text_value(fmt_rate(row.rate_confirmed)),
        );
        // Spacer
        bar_items.push(Bar::default().value(0).text_value(String::new()));
    }

    let chart_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted))
        .title(" Target vs confirmed actual (weeks) ");

    let chart = BarChart::default()
        .block(chart_block)
        .bar_width(6)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bar_items));

    frame.render_widget(chart, area);
}

fn draw_info_panel(frame: &mut Frame, app: &DashboardApp, area: Rect) {
    let snapshot = &app.snapshot;
    let rates = &snapshot.rates;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Landings
            Constraint::Length(6), // Selected week
            Constraint::Min(3),    // MTD gauge
        ])
        .split(area);

    let metric = |name: &str, value: String, color: Color| {
        Line::from(vec![
            Span::styled(format!("{:<12}", name), Style::default().fg(THEME.muted)),
            Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        ])
    };

    // 1. Landings, side by side rather than merged
    let landing_text = vec![
        metric("Target", fmt_volume(rates.m_target), THEME.target),
        metric(
            "Landing AI",
            format!(
                "{} ({})",
                fmt_volume(rates.landing_ai),
                fmt_rate(rates.month_rate_proj)
            ),
            THEME.ai,
        ),
        metric(
            "Landing pace",
            format!(
                "{} ({})",
                fmt_volume(snapshot.pace_landing.landing_pace),
                fmt_rate(snapshot.pace_rate_proj())
            ),
            THEME.pace,
        ),
        metric("AI - pace", format!("{:+.0}", snapshot.landing_gap()), THEME.text),
        metric("Pace", fmt_opt_volume(snapshot.pace), THEME.pace),
        metric("Today AI", fmt_opt_volume(snapshot.short.today_ai), THEME.ai),
        metric(
            "Week AI",
            format!(
                "{} / {}",
                fmt_opt_volume(snapshot.short.week_ai),
                fmt_volume(snapshot.short.week_target)
            ),
            THEME.ai,
        ),
    ];
    let landing_block = Paragraph::new(landing_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(THEME.muted))
            .title(" Month-end "),
    );
    frame.render_widget(landing_block, chunks[0]);

    // 2. Selected week
    let week_text = match snapshot.weekly.get(app.selected_week) {
        Some(row) => vec![
            metric("Target", fmt_volume(row.target_sum), THEME.target),
            metric("Actual", fmt_volume(row.actual_sum), THEME.actual),
            metric("Rate", fmt_rate(row.rate_confirmed), THEME.text),
            metric(
                "",
                if snapshot.current_week == Some(row.index) {
                    "current week".to_string()
                } else {
                    String::new()
                },
                THEME.primary,
            ),
        ],
        None => vec![Line::from("No weeks")],
    };
    let week_block = Paragraph::new(week_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(THEME.muted))
            .title(" Confirmed "),
    );
    frame.render_widget(week_block, chunks[1]);

    // 3. MTD gauge; an unknown rate is shown as such, never as 0%
    let (ratio, label) = match rates.mtd_rate {
        Some(r) => (r.clamp(0.0, 1.0), format!("{} of MTD target", fmt_rate(Some(r)))),
        None => (0.0, "no MTD target yet".to_string()),
    };
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" MTD ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(THEME.muted)),
        )
        .gauge_style(Style::default().fg(if rates.mtd_rate.unwrap_or(0.0) >= 1.0 {
            THEME.actual
        } else {
            THEME.pace
        }))
        .ratio(ratio)
        .label(label);
    frame.render_widget(gauge, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use inbound_core::{
        build_weeks, build_weekly_confirmed, MonthRates, PaceLanding, ShortHorizon, YearMonth,
    };

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn snapshot(month: YearMonth, today: NaiveDate) -> DashboardSnapshot {
        let weeks = build_weeks(month);
        let current_week = find_week(&weeks, today).map(|w| w.index);
        let weekly = build_weekly_confirmed(&[], &weeks, today);
        DashboardSnapshot {
            month,
            today,
            weeks,
            current_week,
            rates: MonthRates::default(),
            point_count: 0,
            pace_window: 7,
            pace: None,
            pace_landing: PaceLanding::default(),
            weekly,
            short: ShortHorizon::default(),
        }
    }

    fn september() -> YearMonth {
        YearMonth::new(2025, 9).unwrap()
    }

    #[test]
    fn test_starts_on_current_week_and_clamps() {
        let mut app = DashboardApp::new(snapshot(september(), date("2025-09-17")));
        assert_eq!(app.selected_week, 2);

        for _ in 0..10 {
            app.next_week();
        }
        assert_eq!(app.selected_week, 4);
        for _ in 0..10 {
            app.previous_week();
        }
        assert_eq!(app.selected_week, 0);
    }

    #[test]
    fn test_sunday_starts_on_the_week_just_ended() {
        let app = DashboardApp::new(snapshot(september(), date("2025-09-21")));
        assert_eq!(app.snapshot.current_week, None);
        assert_eq!(app.selected_week, 2);

        let app = DashboardApp::new(snapshot(september(), date("2025-09-07")));
        assert_eq!(app.selected_week, 0);
    }

    #[test]
    fn test_date_outside_month_starts_on_last_week() {
        let app = DashboardApp::new(snapshot(september(), date("2025-11-05")));
        assert_eq!(app.snapshot.current_week, None);
        assert_eq!(app.selected_week, 4);

        let app = DashboardApp::new(snapshot(september(), date("2025-10-06")));
        assert_eq!(app.selected_week, 4);
    }
}
