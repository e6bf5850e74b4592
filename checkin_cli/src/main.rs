use checkin_core::*;
use chrono::NaiveDate;
use clap::Parser;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gymcheck")]
#[command(about = "Gym check-in terminal", long_about = None)]
struct Cli {
    /// Override data directory
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Roster file (default: <data-dir>/paying_customers.txt)
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Workout log file (default: <data-dir>/workout_sheet.txt)
    #[arg(long)]
    workout_log: Option<PathBuf>,

    /// Exit with an error if the roster is missing or malformed
    #[arg(long)]
    require_roster: bool,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, value_parser = parse_today)]
    today: Option<NaiveDate>,
}

fn parse_today(s: &str) -> std::result::Result<NaiveDate, String> {
    parse_date(s).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    // Initialize logging
    checkin_core::logging::init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(data_dir) = cli.data_dir {
        config.data.data_dir = data_dir;
    }
    let roster_path = cli.roster.unwrap_or_else(|| config.data.roster_path());
    let log_path = cli
        .workout_log
        .unwrap_or_else(|| config.data.workout_log_path());
    let require_roster = cli.require_roster || config.roster.require_roster;
    let today = cli
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let roster = match load_roster(&roster_path) {
        Ok(roster) => roster,
        Err(e) if !require_roster => {
            tracing::warn!("Continuing with an empty roster: {}", e);
            eprintln!("{}", e);
            Vec::new()
        }
        Err(e) => return Err(e),
    };

    let mut session = Session::new(roster, today, WorkoutSheet::new(log_path));
    tracing::info!(
        "Check-in session for {} with {} members, logging to {:?}",
        format_date(session.today()),
        session.roster().len(),
        session.sink().path()
    );

    let mut source = PromptSource::stdin();
    session.run(&mut source, &mut io::stdout())
}
