use inbound_core::{DashboardSnapshot, Week, YearMonth};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

pub const UNKNOWN: &str = "—";

pub fn fmt_rate(rate: Option<f64>) -> String {
    rate.map(|r| format!("{:.1}%", r * 100.0))
        .unwrap_or_else(|| UNKNOWN.to_string())
}

pub fn fmt_volume(value: f64) -> String {
    format!("{:.0}", value)
}

pub fn fmt_opt_volume(value: Option<f64>) -> String {
    value.map(fmt_volume).unwrap_or_else(|| UNKNOWN.to_string())
}

#[derive(Tabled)]
struct WeeklyRow {
    #[tabled(rename = "")]
    marker: String,
    #[tabled(rename = "Week")]
    week: String,
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Actual")]
    actual: String,
    #[tabled(rename = "Rate")]
    rate: String,
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Metric")]
    metric: String,
    #[tabled(rename = "Value")]
    value: String,
}

pub fn show_snapshot(snapshot: &DashboardSnapshot) {
    println!(
        "\n\x1b[1;36mInbound {}\x1b[0m (as of {})",
        snapshot.month,
        snapshot.today.format("%Y-%m-%d (%a)")
    );

    let rates = &snapshot.rates;
    let pace_label = format!("Pace ({}d biz avg)", snapshot.pace_window);
    let summary = vec![
        summary_row("MTD actual", fmt_volume(rates.m_actual)),
        summary_row("MTD target", fmt_volume(rates.mtd_target)),
        summary_row("MTD rate", fmt_rate(rates.mtd_rate)),
        summary_row("Month target", fmt_volume(rates.m_target)),
        summary_row("Landing (AI)", fmt_volume(rates.landing_ai)),
        summary_row("Month rate (AI)", fmt_rate(rates.month_rate_proj)),
        summary_row(pace_label, fmt_opt_volume(snapshot.pace)),
        summary_row(
            "Landing (pace)",
            format!(
                "{} ({} biz + {} holiday left)",
                fmt_volume(snapshot.pace_landing.landing_pace),
                snapshot.pace_landing.future_biz,
                snapshot.pace_landing.future_holi
            ),
        ),
        summary_row("Month rate (pace)", fmt_rate(snapshot.pace_rate_proj())),
        summary_row("AI - pace", format!("{:+.0}", snapshot.landing_gap())),
        summary_row("Today (AI)", fmt_opt_volume(snapshot.short.today_ai)),
        summary_row(
            "This week (AI)",
            format!(
                "{} / {}",
                fmt_opt_volume(snapshot.short.week_ai),
                fmt_volume(snapshot.short.week_target)
            ),
        ),
    ];

    let mut table = Table::new(summary);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    println!("{}", table);

    let rows: Vec<WeeklyRow> = snapshot
        .weekly
        .iter()
        .map(|row| WeeklyRow {
            marker: if snapshot.current_week == Some(row.index) {
                "▶".to_string()
            } else {
                String::new()
            },
            week: format!("W{}", row.index + 1),
            period: format!("{} ~ {}", row.start.format("%m/%d"), row.end.format("%m/%d")),
            target: fmt_volume(row.target_sum),
            actual: fmt_volume(row.actual_sum),
            rate: fmt_rate(row.rate_confirmed),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    println!("\nConfirmed by week\n{}", table);
}

pub fn show_weeks(month: YearMonth, weeks: &[Week]) {
    println!("\n\x1b[1;36mWeeks of {}\x1b[0m (Mon–Sat)", month);
    for week in weeks {
        let days: Vec<String> = week
            .days
            .iter()
            .map(|d| {
                if month.contains(*d) {
                    d.format("%d").to_string()
                } else {
                    format!("({})", d.format("%d"))
                }
            })
            .collect();
        println!("  {:<18} {}", week.label(), days.join(" "));
    }
}

fn summary_row(metric: impl Into<String>, value: String) -> SummaryRow {
    SummaryRow { metric: metric.into(), value }
}
