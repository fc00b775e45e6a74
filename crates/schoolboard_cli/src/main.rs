//! SchoolBoard command line.
//!
//! # Responsibility
//! - Seed a board and print role dashboards, exports and report documents.
//! - Keep output deterministic for a given `--today` so runs can be diffed.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveTime};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;
use schoolboard_core::board::DashboardSummary;
use schoolboard_core::export::DateRange;
use schoolboard_core::summary::format_percent;
use schoolboard_core::{
    init_logging, CurrentUser, RecordKind, ReportConfig, ReportKind, Role, SchoolBoard, Settings,
};

#[derive(Debug, Parser)]
#[command(name = "schoolboard")]
#[command(about = "School dashboard summaries and exports over seeded data")]
struct Cli {
    /// Settings JSON; defaults apply when omitted.
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Absolute directory for rolling log files; logging is off when omitted.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
    /// Board date as YYYY-MM-DD; defaults to the local date.
    #[arg(long, global = true)]
    today: Option<NaiveDate>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Prints core linkage information.
    Ping,
    /// Prints the dashboard of one role.
    Summary(SummaryArgs),
    /// Writes every record of one kind as CSV.
    Export(ExportArgs),
    /// Writes a report request document as JSON.
    Report(ReportArgs),
}

#[derive(Debug, Args)]
struct SummaryArgs {
    #[arg(long)]
    role: Role,
    /// Signed-in user name; picks a seeded person for the role when omitted.
    #[arg(long)]
    name: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExportTarget {
    Students,
    Teachers,
    Grades,
    Attendance,
    Alerts,
}

impl ExportTarget {
    fn kind(self) -> RecordKind {
        match self {
            Self::Students => RecordKind::Student,
            Self::Teachers => RecordKind::Teacher,
            Self::Grades => RecordKind::Grade,
            Self::Attendance => RecordKind::Attendance,
            Self::Alerts => RecordKind::Alert,
        }
    }
}

#[derive(Debug, Args)]
struct ExportArgs {
    #[arg(value_enum)]
    target: ExportTarget,
    /// Output directory; prints to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct ReportArgs {
    kind: ReportKind,
    #[arg(long, default_value = "quarter")]
    range: DateRange,
    #[arg(long, default_value = "")]
    grade: String,
    #[arg(long, default_value = "")]
    subject: String,
    /// Output directory; prints to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        init_logging(&cli.log_level, log_dir).context("failed to start logging")?;
    }

    let settings = match &cli.settings {
        Some(path) => Settings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());

    match cli.command {
        Commands::Ping => {
            println!("schoolboard_core ping={}", schoolboard_core::ping());
            println!("schoolboard_core version={}", schoolboard_core::core_version());
            Ok(())
        }
        Commands::Summary(args) => summary_command(args, settings, today),
        Commands::Export(args) => export_command(&args, settings, today),
        Commands::Report(args) => report_command(args, today),
    }
}

fn default_user_name(role: Role) -> &'static str {
    match role {
        Role::Student => "John Doe",
        Role::Teacher => "Mary Smith",
        Role::Parent => "Robert Doe",
        Role::Admin => "Administrator",
    }
}

fn summary_command(args: SummaryArgs, settings: Settings, today: NaiveDate) -> Result<()> {
    let name = args
        .name
        .unwrap_or_else(|| default_user_name(args.role).to_string());
    let board = SchoolBoard::seeded(CurrentUser::new(name, args.role), settings, today)?;

    println!("school={}", board.settings().general.school_name);
    println!("user={} role={}", board.user().name, board.user().role);
    let screens: Vec<&str> = board.navigation().iter().map(|item| item.label).collect();
    println!("navigation={}", screens.join(" | "));

    match board.dashboard() {
        DashboardSummary::Student(home) => {
            println!("average={} band={}", format_percent(home.average_percent), home.band);
            println!("attendance_rate={}%", home.attendance_rate);
            println!("subjects={}", home.subjects_enrolled);
            for grade in &home.recent_grades {
                println!(
                    "grade date={} subject={} score={}",
                    grade.date,
                    grade.subject,
                    format_percent(grade.percentage())
                );
            }
        }
        DashboardSummary::Teacher(home) => {
            println!("classes={}", home.classes.join(","));
            println!("students_in_classes={}", home.students_in_classes);
            println!("class_average={}", format_percent(home.class_average));
            for (class, rate) in &home.class_attendance {
                println!("attendance class={class} rate={rate}%");
            }
            println!(
                "alerts unresolved={} critical={}",
                home.alerts.unresolved, home.alerts.critical_unresolved
            );
        }
        DashboardSummary::Parent(home) => {
            println!("children={}", home.children.len());
            for child in &home.children {
                println!(
                    "child code={} class={} average={} attendance={}% open_alerts={}",
                    child.student_code,
                    child.class_label,
                    format_percent(child.average_percent),
                    child.attendance_rate,
                    child.open_alerts
                );
            }
        }
        DashboardSummary::Admin(home) => {
            println!("students={}", home.total_students);
            println!("active_teachers={}", home.active_teachers);
            println!(
                "average={} passing={} honor_roll={}",
                format_percent(home.grades.average_percent),
                home.grades.passing,
                home.grades.honor_roll
            );
            let tally = home.attendance_today;
            println!(
                "attendance present={} absent={} late={} excused={}",
                tally.present, tally.absent, tally.late, tally.excused
            );
            println!(
                "alerts total={} unresolved={} critical={}",
                home.alerts.total, home.alerts.unresolved, home.alerts.critical_unresolved
            );
        }
    }
    Ok(())
}

fn export_command(args: &ExportArgs, settings: Settings, today: NaiveDate) -> Result<()> {
    let board = SchoolBoard::seeded(
        CurrentUser::new(default_user_name(Role::Admin), Role::Admin),
        settings,
        today,
    )?;
    let (file_name, body) = board.export(args.target.kind())?;
    emit(args.out.as_ref(), &file_name, &body)
}

fn report_command(args: ReportArgs, today: NaiveDate) -> Result<()> {
    let out = args.out.clone();
    let config = report_config(args, today);
    let body = config.to_json_pretty()?;
    emit(out.as_ref(), &config.file_name(), &body)
}

/// Report request stamped at midnight UTC of the board date.
fn report_config(args: ReportArgs, today: NaiveDate) -> ReportConfig {
    ReportConfig::stamped(args.kind, today.and_time(NaiveTime::MIN).and_utc())
        .covering(args.range)
        .for_grade(args.grade)
        .for_subject(args.subject)
}

fn emit(out: Option<&PathBuf>, file_name: &str, body: &str) -> Result<()> {
    match out {
        Some(dir) => {
            let path = dir.join(file_name);
            std::fs::write(&path, body)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("event=cli_write module=cli status=ok file={file_name}");
            println!("{}", path.display());
        }
        None => print!("{body}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{report_config, Cli, Commands};
    use clap::Parser;

    #[test]
    fn report_is_stamped_with_board_date() {
        let cli = Cli::parse_from([
            "schoolboard",
            "--today",
            "2024-01-15",
            "report",
            "attendance",
            "--range",
            "semester",
            "--grade",
            "7",
        ]);
        let today = cli.today.unwrap();
        let Commands::Report(args) = cli.command else {
            panic!("expected the report command");
        };

        let config = report_config(args, today);
        assert_eq!(config.file_name(), "attendance-report-2024-01-15.json");
        let json = config.to_json_pretty().unwrap();
        assert!(json.contains("\"generatedAt\": \"2024-01-15T00:00:00Z\""));
        assert!(json.contains("\"dateRange\": \"semester\""));
        assert!(json.contains("\"grade\": \"7\""));
    }
}
