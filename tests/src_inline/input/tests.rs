use super::*;
use crate::error::EvalError;
use crate::model::skills::Skill;
use chrono::{NaiveDate, NaiveDateTime};

fn fixed_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

#[test]
fn test_form_defaults() {
    let form = FormSubmission::from_json_str(
        r#"{"quality_of_work": 9, "employee_name": "Dana Ortiz"}"#,
    )
    .unwrap();
    assert_eq!(form.scores.quality_of_work, 9);
    assert_eq!(form.scores.productivity, 5);
    assert_eq!(form.tenure_months, 12);
    assert_eq!(form.employee_name, "Dana Ortiz");
    assert_eq!(form.department, "General");
    assert_eq!(form.position, "Staff");
    assert_eq!(form.period, "Q1 2024");
    assert_eq!(form.reviewer_name, "AI Evaluation System");
    assert_eq!(form.employee_id, "");

    let empty = FormSubmission::from_json_str("{}").unwrap();
    assert_eq!(empty, FormSubmission::default());
}

#[test]
fn test_into_request_stamps_employee() {
    let form = FormSubmission::from_json_str(r#"{"tenure_months": 30, "employee_id": "E-7"}"#)
        .unwrap();
    let req = form.into_request(fixed_time()).unwrap();
    assert_eq!(req.tenure_months, 30);
    assert_eq!(req.scores.get(Skill::Initiative), 5);
    assert_eq!(req.employee.tenure_months, 30);
    assert_eq!(req.employee.employee_id, "E-7");
    assert_eq!(req.employee.evaluation_id, "EVAL-20240301-093000");
    assert_eq!(req.employee.evaluation_date, "March 01, 2024 09:30:00");
}

#[test]
fn test_out_of_range_rejected() {
    let form = FormSubmission::from_json_str(r#"{"teamwork": 11}"#).unwrap();
    let err = form.into_request(fixed_time()).unwrap_err();
    assert!(matches!(
        err,
        EvalError::OutOfRangeScore {
            skill: Skill::Teamwork,
            value: 11
        }
    ));
    assert_eq!(err.to_string(), "teamwork must be between 1 and 10");
}

#[test]
fn test_negative_tenure_is_a_parse_error() {
    let err = FormSubmission::from_json_str(r#"{"tenure_months": -3}"#).unwrap_err();
    assert!(matches!(err, EvalError::Json(_)));
}

#[test]
fn test_history_parsing() {
    let history = parse_history(
        r#"[{"quality_of_work": 6, "productivity": 6, "teamwork": 6, "communication": 6, "initiative": 6},
            {"quality_of_work": 7}]"#,
    )
    .unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[1].get(Skill::QualityOfWork), 7);
    assert_eq!(history[1].get(Skill::Teamwork), 5);

    assert!(parse_history(r#"[{"initiative": 0}]"#).is_err());
}

#[test]
fn test_missing_file_is_io_error() {
    let path = std::env::temp_dir().join("perfeval_missing_history_file.json");
    let err = load_history(&path).unwrap_err();
    assert!(matches!(err, EvalError::Io(_)));
}
