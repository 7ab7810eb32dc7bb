//! Per-pass accumulation of failure messages.

use std::fmt::{self, Write};

use super::rules::{FieldViolation, ValidationOutcome, ViolationKind};

/// Collects the failures of one validation pass, in evaluation order.
///
/// Created fresh for every request and consumed by [`ErrorAggregator::finish`].
/// The header only gets rendered when at least one failure was recorded, so
/// valid requests never pay for formatting the subject.
pub struct ErrorAggregator<'a> {
    subject: &'a dyn fmt::Display,
    violations: Vec<FieldViolation>,
}

impl<'a> ErrorAggregator<'a> {
    pub fn new(subject: &'a dyn fmt::Display) -> Self {
        Self {
            subject,
            violations: Vec::new(),
        }
    }

    pub fn record(&mut self, field: &str, kind: ViolationKind, message: String) {
        self.violations.push(FieldViolation {
            field: field.to_string(),
            kind,
            message,
        });
    }

    pub fn finish(self) -> ValidationOutcome {
        if self.violations.is_empty() {
            return ValidationOutcome {
                valid: true,
                description: String::new(),
                violations: Vec::new(),
            };
        }

        let mut description = format!("Validation error for '{}' : \n", self.subject);
        for violation in &self.violations {
            // Writing into a String cannot fail.
            let _ = writeln!(description, "\t\t{}", violation.message);
        }

        ValidationOutcome {
            valid: false,
            description,
            violations: self.violations,
        }
    }
}
