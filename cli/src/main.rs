mod dashboard;
mod report;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use clap::Parser;
use inbound_core::{
    build_weeks, local_today, parse_args, parse_patch, parse_reference_date, parse_year_month,
    DashboardUseCase, FileSeriesRepository, SeriesService, Settings, YearMonth,
};

#[derive(Parser)]
#[command(name = "inbound")]
#[command(about = "Inbound volume forecast and pace dashboard", long_about = None)]
struct Cli {
    /// Data directory (defaults to $INBOUND_HOME, then ~/.inbound)
    #[arg(long, global = true, env = "INBOUND_HOME")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Args)]
struct Period {
    /// Month to show (YYYY-MM); defaults to the month of --today
    #[arg(long)]
    month: Option<String>,
    /// Reference date: today, yesterday, eom, +Nd/-Nd or YYYY-MM-DD
    #[arg(long)]
    today: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Month rates, both landings and confirmed weekly rates
    Show {
        #[command(flatten)]
        period: Period,
        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the Mon–Sat weeks of a month
    Weeks {
        #[arg(long)]
        month: Option<String>,
    },
    /// Record values for a day (usage: record 2025-09-20 actual:104 target:110 business:false)
    Record {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Fill a month with a deterministic demo series
    Demo {
        #[command(flatten)]
        period: Period,
        /// Daily target on business days
        #[arg(long, default_value_t = 110.0)]
        target: f64,
    },
    /// Open the terminal dashboard
    Dash {
        #[command(flatten)]
        period: Period,
    },
}

impl Period {
    fn resolve(&self) -> Result<(YearMonth, NaiveDate)> {
        let today = match &self.today {
            Some(s) => parse_reference_date(s, local_today())?,
            None => local_today(),
        };
        let month = match &self.month {
            Some(s) => parse_year_month(s)?,
            None => YearMonth::of(today)?,
        };
        Ok((month, today))
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let settings = Settings::load(cli.data_dir)?;
    let repo = FileSeriesRepository::new(settings.series_dir()?)?;
    let service = SeriesService::new(repo);

    let command = cli.command.unwrap_or(Commands::Show {
        period: Period { month: None, today: None },
        json: false,
    });

    match command {
        Commands::Show { period, json } => {
            let (month, today) = period.resolve()?;
            let snapshot = DashboardUseCase::new(&service, &settings).snapshot(month, today)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                if snapshot.point_count == 0 {
                    println!("No series data for {}. Try `inbound demo --month {}`.", month, month);
                }
                report::show_snapshot(&snapshot);
            }
        }
        Commands::Weeks { month } => {
            let month = match month {
                Some(s) => parse_year_month(&s)?,
                None => YearMonth::of(local_today())?,
            };
            report::show_weeks(month, &build_weeks(month));
        }
        Commands::Record { args } => {
            let parsed = parse_args(&args);
            if parsed.name.is_empty() {
                return Err(anyhow!("A date is required, e.g. record today actual:104"));
            }
            let date = parse_reference_date(&parsed.name, local_today())?;
            let patch = parse_patch(&parsed.metadata)?;
            if patch.is_empty() {
                return Err(anyhow!(
                    "Nothing to record; use predicted:, actual:, target: or business:"
                ));
            }
            let point = service.record(date, &patch)?;
            println!("Recorded {}", point.date);
            println!("  Predicted: {}", report::fmt_volume(point.predicted));
            println!("  Actual:    {}", report::fmt_opt_volume(point.actual));
            println!("  Target:    {}", report::fmt_opt_volume(point.target));
            println!("  Business:  {}", point.is_business_day());
        }
        Commands::Demo { period, target } => {
            if !target.is_finite() || target < 0.0 {
                return Err(anyhow!("--target must be a non-negative number"));
            }
            let (month, today) = period.resolve()?;
            let written = service.seed_demo(month, today, target)?;
            log::info!("seeded {} with {} points", month, written);
            println!("Seeded {} days for {} (actuals through {})", written, month, today);
        }
        Commands::Dash { period } => {
            let (month, today) = period.resolve()?;
            let snapshot = DashboardUseCase::new(&service, &settings).snapshot(month, today)?;
            dashboard::run(snapshot)?;
        }
    }
    Ok(())
}
