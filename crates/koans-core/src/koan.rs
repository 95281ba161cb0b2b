//! A single registered koan

use crate::error::KoanResult;
use std::fmt;
use std::sync::Arc;

/// Body of a koan: no arguments, no shared mutable state
pub type KoanBody = Arc<dyn Fn() -> KoanResult + Send + Sync>;

/// A named koan. Immutable once registered.
#[derive(Clone)]
pub struct Koan {
    name: String,
    body: KoanBody,
}

impl Koan {
    pub(crate) fn new(name: String, body: KoanBody) -> Self {
        Self { name, body }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the body. Panics propagate; the runner is responsible for
    /// catching them.
    pub fn invoke(&self) -> KoanResult {
        (self.body)()
    }
}

impl fmt::Debug for Koan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Koan").field("name", &self.name).finish()
    }
}
