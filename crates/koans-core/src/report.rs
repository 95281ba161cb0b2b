//! Run outcomes and the ordered report of a run

use crate::error::{AssertionFailure, Fault};
use serde::{Serialize, Serializer};
use std::fmt;
use std::time::Duration;

/// Outcome of running one koan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Passed,
    /// An assertion did not hold
    Failed(AssertionFailure),
    /// The body faulted: returned a non-assertion error or panicked
    Errored(Fault),
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Passed)
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Errored(_))
    }

    /// Status label used in report lines
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Passed => "PASS",
            Outcome::Failed(_) => "FAIL",
            Outcome::Errored(_) => "ERROR",
        }
    }
}

/// A koan that has been run
#[derive(Debug, Clone, Serialize)]
pub struct KoanRun {
    pub name: String,
    #[serde(flatten)]
    pub outcome: Outcome,
    #[serde(rename = "duration_ms", serialize_with = "serialize_millis")]
    pub duration: Duration,
}

fn serialize_millis<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(duration.as_millis() as u64)
}

impl fmt::Display for KoanRun {
    /// `PASS <name>`, `FAIL <name>: expected <E>, got <A>` or `ERROR <name>: <fault>`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Passed => write!(f, "PASS {}", self.name),
            Outcome::Failed(failure) => write!(f, "FAIL {}: {}", self.name, failure),
            Outcome::Errored(fault) => write!(f, "ERROR {}: {}", self.name, fault),
        }
    }
}

/// Ordered results of one run; order is execution order
#[derive(Debug, Clone, Default)]
pub struct Report {
    runs: Vec<KoanRun>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, run: KoanRun) {
        self.runs.push(run);
    }

    pub fn runs(&self) -> &[KoanRun] {
        &self.runs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KoanRun> {
        self.runs.iter()
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn passed(&self) -> usize {
        self.runs.iter().filter(|r| r.outcome.is_pass()).count()
    }

    pub fn failed(&self) -> usize {
        self.runs.iter().filter(|r| r.outcome.is_fail()).count()
    }

    pub fn errored(&self) -> usize {
        self.runs.iter().filter(|r| r.outcome.is_error()).count()
    }

    pub fn all_passed(&self) -> bool {
        self.runs.iter().all(|r| r.outcome.is_pass())
    }

    /// Process exit code for this report: 0 when everything passed
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }

    /// The first koan that did not pass: where to continue meditating
    pub fn first_unpassed(&self) -> Option<&KoanRun> {
        self.runs.iter().find(|r| !r.outcome.is_pass())
    }

    pub fn total_duration(&self) -> Duration {
        self.runs.iter().map(|r| r.duration).sum()
    }

    /// Outcomes only, without timings
    pub fn outcomes(&self) -> Vec<(&str, &Outcome)> {
        self.runs
            .iter()
            .map(|r| (r.name.as_str(), &r.outcome))
            .collect()
    }

    /// One plain-text status line per koan
    pub fn status_lines(&self) -> Vec<String> {
        self.runs.iter().map(ToString::to_string).collect()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "koans": self.len(),
            "passed": self.passed(),
            "failed": self.failed(),
            "errored": self.errored(),
            "results": self.runs,
        })
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a KoanRun;
    type IntoIter = std::slice::Iter<'a, KoanRun>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
