use crate::report::{EvaluationResponse, format_iso_timestamp, format_score};

pub fn render_report_text(resp: &EvaluationResponse) -> String {
    let report = &resp.report;
    let employee = &resp.employee;
    let mut out = String::new();

    out.push_str("Performance Evaluation Report\n");
    out.push_str("=============================\n\n");

    out.push_str(&format!("Employee: {}", employee.name));
    if !employee.employee_id.is_empty() {
        out.push_str(&format!(" ({})", employee.employee_id));
    }
    out.push('\n');
    out.push_str(&format!(
        "Department: {}\nPosition: {}\nPeriod: {}\nReviewer: {}\nTenure: {} months\n",
        employee.department,
        employee.position,
        employee.period,
        employee.reviewer_name,
        employee.tenure_months
    ));
    out.push_str(&format!(
        "Evaluation: {} ({})\n\n",
        employee.evaluation_id, employee.evaluation_date
    ));

    out.push_str("1. Overall performance\n");
    let level = &report.patterns.performance_level;
    out.push_str(&format!(
        "Overall score: {}\nLevel: {} ({})\nPercentile: {}\n",
        format_score(report.basic.overall_score),
        level.level.name(),
        level.description,
        level.percentile
    ));
    out.push_str(&format!(
        "Simple average: {}\nConsistency (std): {}\n\n",
        format_score(report.basic.simple_average),
        format_score(report.basic.score_consistency)
    ));

    out.push_str("2. Skill scores\n");
    for (skill, value) in report.basic.detailed_scores.iter() {
        out.push_str(&format!(
            "{:<16} {:>2}  (weight {})\n",
            skill.title(),
            value,
            format_score(skill.weight())
        ));
    }
    out.push('\n');

    out.push_str("3. Strengths\n");
    out.push_str(&format!(
        "Dominant traits: {}\n\n",
        report.patterns.dominant_traits.join(", ")
    ));

    out.push_str("4. Skill gaps\n");
    if report.gaps.critical_skill_gaps.is_empty() {
        out.push_str("No critical gaps.\n");
    }
    for gap in &report.gaps.critical_skill_gaps {
        out.push_str(&format!(
            "- {} ({}, {:?}, impact {}): {}\n",
            gap.skill,
            gap.current_score,
            gap.gap_severity,
            format_score(gap.business_impact),
            gap.recommended_action
        ));
    }
    out.push('\n');

    out.push_str("5. Improvement priorities\n");
    for (i, p) in report.gaps.improvement_priority.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} (priority {:.3}, {:?}, target: {}, urgency {:?})\n",
            i + 1,
            p.skill.title(),
            p.priority_score,
            p.current_level,
            p.target_level.label(),
            p.improvement_urgency
        ));
    }
    out.push('\n');

    out.push_str("6. Tenure benchmark\n");
    let bench = &report.benchmarking.tenure_benchmark;
    out.push_str(&format!(
        "Group {}: benchmark {}, actual {}, deviation {:+.2}\n\n",
        bench.tenure_group,
        format_score(bench.benchmark_score),
        format_score(bench.actual_score),
        bench.deviation
    ));

    out.push_str("7. Outlook\n");
    let growth = &report.predictive.growth_potential;
    out.push_str(&format!(
        "Growth potential: {} ({})\n{}\n",
        growth.level, growth.timeline, growth.recommendation
    ));
    out.push_str(&format!(
        "Predicted next score: {}\nGrowth rate: {}\n\n",
        format_score(report.predictive.predicted_next_score),
        report.growth.growth_rate
    ));

    out.push_str("8. Confidence\n");
    let conf = &report.analysis_confidence;
    out.push_str(&format!(
        "{} ({}): {}\n",
        format_score(conf.score),
        conf.level,
        conf.reason
    ));
    out.push_str(&format!(
        "Model {} at {}\n",
        report.ai_model_version,
        format_iso_timestamp(&report.evaluation_timestamp)
    ));

    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
