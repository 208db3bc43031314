//! Table formatter implementation.
//!
//! Responsibilities:
//! - Format resources as tab-separated tables.
//! - Normalize run states for display.
//!
//! Does NOT handle:
//! - Other output formats.

use anyhow::Result;
use std::fmt::Write as _;
use wandb_client::{MetricSeries, Project, Run};

use crate::formatters::{Formatter, MISSING_VALUE, VerifyOutput};

/// Table formatter.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_verify(&self, output: &VerifyOutput) -> Result<String> {
        let status = if output.valid { "valid" } else { "rejected" };
        Ok(format!(
            "API key {} is {} (entity: {})\n",
            output.key_preview, status, output.entity
        ))
    }

    fn format_projects(&self, projects: &[Project]) -> Result<String> {
        if projects.is_empty() {
            return Ok("No projects found.\n".to_string());
        }

        let mut output = String::from("NAME\tENTITY\tCREATED\tID\n");
        for project in projects {
            writeln!(
                output,
                "{}\t{}\t{}\t{}",
                project.name,
                project.entity,
                project.created_at.as_deref().unwrap_or(MISSING_VALUE),
                project.id
            )?;
        }
        Ok(output)
    }

    fn format_runs(&self, runs: &[Run]) -> Result<String> {
        if runs.is_empty() {
            return Ok("No runs found.\n".to_string());
        }

        let mut output = String::from("NAME\tSTATE\tCREATED\tID\n");
        for run in runs {
            writeln!(
                output,
                "{}\t{}\t{}\t{}",
                run.name,
                run.run_state(),
                run.created_at.as_deref().unwrap_or(MISSING_VALUE),
                run.id
            )?;
        }
        Ok(output)
    }

    fn format_metrics(&self, series: &[MetricSeries], points: bool) -> Result<String> {
        if series.is_empty() {
            return Ok("No metrics recorded.\n".to_string());
        }

        let mut output = String::new();
        if points {
            output.push_str("KEY\tSTEP\tVALUE\n");
            for s in series {
                for point in &s.points {
                    writeln!(output, "{}\t{}\t{}", s.name, point.step, point.value)?;
                }
            }
            return Ok(output);
        }

        output.push_str("KEY\tPOINTS\tLAST STEP\tLAST\tMIN\tMAX\n");
        for s in series {
            let (last_step, last) = match s.latest() {
                Some(p) => (p.step.to_string(), p.value.to_string()),
                None => (MISSING_VALUE.to_string(), MISSING_VALUE.to_string()),
            };
            writeln!(
                output,
                "{}\t{}\t{}\t{}\t{}\t{}",
                s.name,
                s.len(),
                last_step,
                last,
                fmt_opt(s.min()),
                fmt_opt(s.max())
            )?;
        }
        Ok(output)
    }
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING_VALUE.to_string(), |v| v.to_string())
}
