//! Koan reporter - display koan results

use colored::*;
use koans_core::{KoanRun, Outcome, Report};

/// Reporter with output configuration
pub struct KoanReporter {
    /// Show timings next to every status line
    verbose: bool,
    /// Disable colored output
    no_color: bool,
}

impl KoanReporter {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            no_color: false,
        }
    }

    /// Disable colored output for this reporter
    pub fn with_no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }

    fn style(&self, s: ColoredString) -> ColoredString {
        if self.no_color {
            s.clear()
        } else {
            s
        }
    }

    /// Status line for one koan
    pub fn render_run(&self, run: &KoanRun) -> String {
        let label = self.style(match &run.outcome {
            Outcome::Passed => run.outcome.label().green().bold(),
            Outcome::Failed(_) => run.outcome.label().red().bold(),
            Outcome::Errored(_) => run.outcome.label().yellow().bold(),
        });

        let mut line = match &run.outcome {
            Outcome::Passed => format!("{} {}", label, run.name),
            Outcome::Failed(failure) => format!("{} {}: {}", label, run.name, failure),
            Outcome::Errored(fault) => format!("{} {}: {}", label, run.name, fault),
        };

        if self.verbose {
            let timing = format!(" ({:.2?})", run.duration);
            line.push_str(&self.style(timing.dimmed()).to_string());
        }
        line
    }

    /// Print one koan as soon as it finishes
    pub fn print_run(&self, run: &KoanRun) {
        println!("{}", self.render_run(run));
    }

    /// Summary block printed after every koan has run
    pub fn render_summary(&self, report: &Report) -> Vec<String> {
        let status = self.style(if report.all_passed() {
            "PASSED".green().bold()
        } else {
            "FAILED".red().bold()
        });

        let mut lines = vec![
            "─".repeat(50),
            format!(
                "Koans: {} | {} total, {} passed, {} failed, {} errored",
                status,
                self.style(report.len().to_string().bold()),
                self.style(report.passed().to_string().green().bold()),
                self.count(report.failed(), Color::Red),
                self.count(report.errored(), Color::Yellow),
            ),
        ];

        if self.verbose {
            lines.push(format!("Time: {:.2?}", report.total_duration()));
        }

        if let Some(next) = report.first_unpassed() {
            lines.push(String::new());
            lines.push(format!("Meditate on {} next.", self.style(next.name.bold())));
        }
        lines
    }

    pub fn print_summary(&self, report: &Report) {
        println!();
        for line in self.render_summary(report) {
            println!("{}", line);
        }
    }

    fn count(&self, n: usize, color: Color) -> ColoredString {
        if n > 0 {
            self.style(n.to_string().color(color).bold())
        } else {
            n.to_string().normal()
        }
    }
}
