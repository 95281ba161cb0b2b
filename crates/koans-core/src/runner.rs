//! Koan runner - execute registered koans in order

use crate::error::{Fault, KoanError};
use crate::koan::Koan;
use crate::report::{KoanRun, Outcome, Report};
use crate::suite::KoanSuite;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;
use tracing::{debug, info, info_span};

thread_local! {
    static IN_KOAN: Cell<bool> = const { Cell::new(false) };
}

/// Whether the current thread is inside a koan body.
///
/// Panic hooks use this to tell a koan panic, which the runner reports as
/// an error, from a panic anywhere else.
pub fn in_koan() -> bool {
    IN_KOAN.with(Cell::get)
}

/// Marks the thread as inside a koan until dropped, unwinding included
struct KoanScope {
    outer: bool,
}

impl KoanScope {
    fn enter() -> Self {
        Self {
            outer: IN_KOAN.with(|flag| flag.replace(true)),
        }
    }
}

impl Drop for KoanScope {
    fn drop(&mut self) {
        IN_KOAN.with(|flag| flag.set(self.outer));
    }
}

/// Sequential koan runner.
///
/// Koans run one at a time on the calling thread, in registration order.
/// A failure or fault ends that koan only; the run always continues to the
/// next one and the report always has one entry per koan.
#[derive(Debug, Clone, Copy, Default)]
pub struct KoanRunner;

impl KoanRunner {
    /// Create a new runner
    pub fn new() -> Self {
        Self
    }

    /// Run every koan in the suite
    pub fn run_all(&self, suite: &KoanSuite) -> Report {
        self.run_with_progress(suite, |_| {})
    }

    /// Run every koan, calling `on_run` after each one finishes
    pub fn run_with_progress<F>(&self, suite: &KoanSuite, mut on_run: F) -> Report
    where
        F: FnMut(&KoanRun),
    {
        let span = info_span!("run_all", koans = suite.len());
        let _guard = span.enter();

        let mut report = Report::new();
        for koan in suite {
            let run = self.run_koan(koan);
            on_run(&run);
            report.push(run);
        }

        info!(
            passed = report.passed(),
            failed = report.failed(),
            errored = report.errored(),
            "koan run finished"
        );
        report
    }

    /// Run a single koan, containing any failure, error or panic it raises
    pub fn run_koan(&self, koan: &Koan) -> KoanRun {
        debug!(koan = koan.name(), "running koan");
        let start = Instant::now();

        let outcome = match panic::catch_unwind(AssertUnwindSafe(|| {
            let _scope = KoanScope::enter();
            koan.invoke()
        })) {
            Ok(Ok(())) => Outcome::Passed,
            Ok(Err(KoanError::Assertion(failure))) => Outcome::Failed(failure),
            Ok(Err(KoanError::Fault(fault))) => Outcome::Errored(fault),
            Err(payload) => Outcome::Errored(Fault::from_panic(payload)),
        };

        let duration = start.elapsed();
        debug!(
            koan = koan.name(),
            outcome = outcome.label(),
            elapsed_us = duration.as_micros() as u64,
            "koan finished"
        );

        KoanRun {
            name: koan.name().to_string(),
            outcome,
            duration,
        }
    }
}
