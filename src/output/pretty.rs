//! Human-readable colored text formatter.
//!
//! Renders one block per command, shaped by the report's aggregation mode,
//! followed by a batch summary line when more than one command was checked.

use crate::aggregate::AggregatedReport;
use crate::evaluate::CommandReport;
use crate::rule::RuleOutcome;
use colored::Colorize;

/// Formats a batch of [`CommandReport`]s as ANSI-colored text.
pub fn format(reports: &[CommandReport]) -> String {
    let mut out = String::new();

    for report in reports {
        match report {
            CommandReport::Unresolved { name, error } => {
                out.push_str(&format!(
                    "  [{}] {name:<28} {error}\n",
                    "ERROR".red().bold()
                ));
            }
            CommandReport::Evaluated(report) => format_report(&mut out, report),
        }
    }

    if reports.len() > 1 {
        let (passed, failed): (usize, usize) = reports.iter().fold((0, 0), |(p, f), r| {
            if r.passed() {
                (p + 1, f)
            } else {
                (p, f + 1)
            }
        });
        out.push_str(&format!("{}\n", "─".repeat(54).dimmed()));
        out.push_str(&format!(
            "  Total: {} commands  {}  {}\n",
            reports.len(),
            format!("{passed} passed").green().bold(),
            format!("{failed} failed").red().bold(),
        ));
    }

    out
}

fn verdict(passed: bool) -> String {
    if passed {
        "PASS".green().bold().to_string()
    } else {
        "FAIL".red().bold().to_string()
    }
}

fn format_report(out: &mut String, report: &AggregatedReport) {
    match report {
        AggregatedReport::Boolean { command, passed } => {
            out.push_str(&format!("  [{}] {command}\n", verdict(*passed)));
        }

        AggregatedReport::Summary {
            command,
            passed,
            failed,
            skipped,
        } => {
            out.push_str(&format!(
                "  [{}] {command:<28} {passed} passed, {failed} failed, {skipped} skipped\n",
                verdict(*failed == 0),
            ));
        }

        AggregatedReport::FailedDetail { command, failures } => match failures {
            None => {
                out.push_str(&format!("  [{}] {command}\n", verdict(true)));
            }
            Some(failures) => {
                out.push_str(&format!("  [{}] {command}\n", verdict(false)));
                for failure in failures {
                    out.push_str(&format!(
                        "         {id:<38} {reason}\n",
                        id = failure.id.dimmed(),
                        reason = failure.reason,
                    ));
                    if !failure.details.is_empty() {
                        out.push_str(&format!(
                            "         {}\n",
                            format!("> {}", failure.details.join(", ")).dimmed()
                        ));
                    }
                }
            }
        },

        AggregatedReport::FullDetail {
            command,
            timestamp,
            passed,
            failed,
            skipped,
            outcomes,
        } => {
            out.push_str(&format!(
                "\n{}\n",
                format!("  Command: {command}  ").bold().on_blue().white()
            ));
            out.push_str(&format!("  Checked: {timestamp}\n\n"));

            for rule in outcomes {
                let status = match &rule.outcome {
                    RuleOutcome::Passed => "PASS".green().bold().to_string(),
                    RuleOutcome::Failed { .. } => "FAIL".red().bold().to_string(),
                    RuleOutcome::Skipped { .. } => "SKIP".dimmed().to_string(),
                };
                out.push_str(&format!(
                    "  [{status}] {id:<38} {severity}\n",
                    id = rule.id,
                    severity = rule.severity.to_string().dimmed(),
                ));
                match &rule.outcome {
                    RuleOutcome::Failed { details } => {
                        out.push_str(&format!("         {}\n", rule.rationale.dimmed()));
                        if !details.is_empty() {
                            out.push_str(&format!(
                                "         {}\n",
                                format!("> {}", details.join(", ")).dimmed()
                            ));
                        }
                    }
                    RuleOutcome::Skipped { reason } => {
                        out.push_str(&format!("         {}\n", reason.dimmed()));
                    }
                    RuleOutcome::Passed => {}
                }
            }

            out.push_str(&format!(
                "\nResult: {}  |  {passed} passed, {failed} failed, {skipped} skipped\n",
                verdict(*failed == 0),
            ));
        }
    }
}
