use std::path::PathBuf;

use chrono::Local;
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};

use perfeval::error::Result;
use perfeval::input::{FormSubmission, load_history};
use perfeval::logging::{DEFAULT_FILTER, init_tracing};
use perfeval::pipeline::Evaluator;
use perfeval::report::json::write_json;
use perfeval::report::text::render_report_text;
use perfeval::report::{EvaluationResponse, system_info};

#[derive(Debug, Parser)]
#[command(name = "perfeval", version, about = "Rule-based employee performance evaluation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate one form submission and print the JSON report
    Evaluate(EvaluateArgs),
    /// Print the static capability record
    SystemInfo {
        #[arg(long)]
        compact: bool,
    },
}

#[derive(Debug, Args)]
struct EvaluateArgs {
    /// JSON form submission; flags below override its fields
    #[arg(long)]
    input: Option<PathBuf>,
    #[arg(long)]
    quality_of_work: Option<i64>,
    #[arg(long)]
    productivity: Option<i64>,
    #[arg(long)]
    teamwork: Option<i64>,
    #[arg(long)]
    communication: Option<i64>,
    #[arg(long)]
    initiative: Option<i64>,
    #[arg(long)]
    tenure_months: Option<u32>,
    #[arg(long)]
    employee_name: Option<String>,
    #[arg(long)]
    employee_id: Option<String>,
    #[arg(long)]
    department: Option<String>,
    #[arg(long)]
    position: Option<String>,
    #[arg(long)]
    period: Option<String>,
    #[arg(long)]
    reviewer_name: Option<String>,
    /// JSON array of previous score sets
    #[arg(long)]
    history: Option<PathBuf>,
    /// Write the JSON report here instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
    /// Also write a plain-text report
    #[arg(long)]
    text: Option<PathBuf>,
    #[arg(long)]
    compact: bool,
}

fn main() {
    init_tracing(DEFAULT_FILTER);
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Evaluate(args) => run_evaluate(args),
        Command::SystemInfo { compact } => write_json(&system_info(), None, !compact),
    }
}

fn run_evaluate(args: EvaluateArgs) -> Result<()> {
    let form = build_form(&args)?;
    let now = Local::now().naive_local();
    let request = form.into_request(now).inspect_err(|e| warn!("rejected submission: {e}"))?;

    let history = match &args.history {
        Some(path) => Some(load_history(path)?),
        None => None,
    };

    let report = Evaluator::default().evaluate_at(
        &request.scores,
        request.tenure_months,
        history.as_deref(),
        now,
    );
    let response = EvaluationResponse {
        report,
        employee: request.employee,
    };

    write_json(&response, args.out.as_deref(), !args.compact)?;
    if let Some(path) = &args.text {
        std::fs::write(path, render_report_text(&response))?;
        info!("text report written to {}", path.display());
    }
    Ok(())
}

fn build_form(args: &EvaluateArgs) -> Result<FormSubmission> {
    let mut form = match &args.input {
        Some(path) => FormSubmission::from_path(path)?,
        None => FormSubmission::default(),
    };
    apply_overrides(&mut form, args);
    Ok(form)
}

fn apply_overrides(form: &mut FormSubmission, args: &EvaluateArgs) {
    let scores = &mut form.scores;
    if let Some(v) = args.quality_of_work {
        scores.quality_of_work = v;
    }
    if let Some(v) = args.productivity {
        scores.productivity = v;
    }
    if let Some(v) = args.teamwork {
        scores.teamwork = v;
    }
    if let Some(v) = args.communication {
        scores.communication = v;
    }
    if let Some(v) = args.initiative {
        scores.initiative = v;
    }
    if let Some(v) = args.tenure_months {
        form.tenure_months = v;
    }
    let text_fields = [
        (&args.employee_name, &mut form.employee_name),
        (&args.employee_id, &mut form.employee_id),
        (&args.department, &mut form.department),
        (&args.position, &mut form.position),
        (&args.period, &mut form.period),
        (&args.reviewer_name, &mut form.reviewer_name),
    ];
    for (arg, field) in text_fields {
        if let Some(v) = arg {
            *field = v.clone();
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
