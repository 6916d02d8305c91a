//! Per-module failure isolation.
//!
//! A panic while rendering or deriving one module's view must not take
//! the other modules down. Each module runs its fallible presentation
//! work inside its own boundary; a caught panic marks the module
//! failed until it is reset, while the rest of the dashboard keeps
//! working.

use std::panic::{catch_unwind, AssertUnwindSafe};

#[derive(Debug, Clone, Default)]
pub struct ModuleBoundary {
    failure: Option<String>,
}

impl ModuleBoundary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `work`, converting a panic into a recorded failure. Returns
    /// `None` when the work panicked or the boundary is already failed.
    pub fn run<R>(&mut self, work: impl FnOnce() -> R) -> Option<R> {
        if self.failure.is_some() {
            return None;
        }
        match catch_unwind(AssertUnwindSafe(work)) {
            Ok(value) => Some(value),
            Err(panic) => {
                let reason = panic_reason(&panic);
                tracing::error!(reason = %reason, "module boundary caught panic");
                self.failure = Some(reason);
                None
            }
        }
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn is_failed(&self) -> bool {
        self.failure.is_some()
    }

    /// Clear the failure so the module renders again on the next pass.
    pub fn reset(&mut self) {
        self.failure = None;
    }
}

fn panic_reason(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
