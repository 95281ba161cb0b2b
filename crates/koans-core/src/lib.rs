//! Koans Core - registering and running koans
//!
//! A koan is a named, zero-argument body that performs equality assertions.
//! This library provides:
//! - The assertion primitive ([`assert_equal`], [`koan_assert_eq!`])
//! - Ordered registration with unique names ([`KoanSuite`])
//! - A sequential runner that contains failures, errors and panics per koan
//!   ([`KoanRunner`])
//! - The ordered [`Report`] of a run
//! - Static capability queries for iteration operations ([`Iterable`])
//! - Scoped, read-only fixture access ([`fixture`])
//!
//! # Example
//!
//! ```
//! use koans_core::{koan_assert_eq, KoanRunner, KoanSuite};
//!
//! let mut suite = KoanSuite::new();
//! suite
//!     .register("test_inject_sums", || {
//!         let sum = [1, 2, 3].iter().fold(0, |acc, n| acc + n);
//!         koan_assert_eq!(6, sum);
//!         Ok(())
//!     })
//!     .unwrap();
//!
//! let report = KoanRunner::new().run_all(&suite);
//! assert!(report.all_passed());
//! ```

/// Koans version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod assertion;
pub mod capability;
pub mod error;
pub mod fixture;
pub mod koan;
pub mod report;
pub mod runner;
pub mod suite;

pub use assertion::assert_equal;
pub use capability::{Capability, Iterable};
pub use error::{AssertionFailure, Fault, KoanError, KoanResult, SuiteError};
pub use fixture::FixtureDir;
pub use koan::Koan;
pub use koans_config::NameStyle;
pub use report::{KoanRun, Outcome, Report};
pub use runner::{in_koan, KoanRunner};
pub use suite::KoanSuite;
