use super::*;
use clap::CommandFactory;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

fn evaluate_args(cli: Cli) -> EvaluateArgs {
    match cli.command {
        Command::Evaluate(args) => args,
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_cli_definition() {
    Cli::command().debug_assert();
}

#[test]
fn test_flags_fill_form() {
    let args = evaluate_args(parse(&[
        "perfeval",
        "evaluate",
        "--quality-of-work",
        "9",
        "--initiative",
        "2",
        "--tenure-months",
        "18",
        "--department",
        "Engineering",
    ]));
    let form = build_form(&args).unwrap();
    assert_eq!(form.scores.quality_of_work, 9);
    assert_eq!(form.scores.initiative, 2);
    assert_eq!(form.scores.teamwork, 5);
    assert_eq!(form.tenure_months, 18);
    assert_eq!(form.department, "Engineering");
    assert_eq!(form.position, "Staff");
}

#[test]
fn test_flags_override_input_file() {
    let path = std::env::temp_dir().join(format!("perfeval_form_{}.json", std::process::id()));
    std::fs::write(&path, r#"{"teamwork": 8, "productivity": 7, "employee_name": "Dana"}"#)
        .unwrap();
    let args = evaluate_args(parse(&[
        "perfeval",
        "evaluate",
        "--input",
        path.to_str().unwrap(),
        "--teamwork",
        "3",
    ]));
    let form = build_form(&args).unwrap();
    assert_eq!(form.scores.teamwork, 3);
    assert_eq!(form.scores.productivity, 7);
    assert_eq!(form.employee_name, "Dana");
}

#[test]
fn test_system_info_command() {
    let cli = parse(&["perfeval", "system-info", "--compact"]);
    assert!(matches!(cli.command, Command::SystemInfo { compact: true }));
}

#[test]
fn test_out_of_range_flag_fails_evaluation() {
    let args = evaluate_args(parse(&["perfeval", "evaluate", "--communication", "0"]));
    let err = run_evaluate(args).unwrap_err();
    assert_eq!(err.to_string(), "communication must be between 1 and 10");
}
