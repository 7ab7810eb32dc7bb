//! Rule and result types.

use serde::{Deserialize, Serialize};

use crate::request::{Endpoint, RequestKind};

/// Maximum number of identifiers accepted by a bulk lookup.
pub const MAX_BULK_IDS: usize = 20;

pub const MISSING_TEMPLATE: &str = "{field} should be provided for {request}";
pub const NON_POSITIVE_TEMPLATE: &str = "{field} should be strictly positive for {request}";
pub const TOO_LARGE_TEMPLATE: &str = "cannot get more than {max} {field} at once for {request}";
pub const INVALID_ELEMENT_TEMPLATE: &str =
    "provided {field} values cannot be null or blank for {request}";

/// Category of a failed check. Every variant is a caller-correctable input
/// problem.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    MissingOrBlankField,
    NonPositiveNumber,
    CollectionTooLarge { max: usize },
    CollectionEmpty,
    CollectionElementInvalid,
}

/// A single field-level rule violation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub kind: ViolationKind,
    pub message: String,
}

/// Aggregated result of evaluating one request against its rule set.
///
/// `description` is empty exactly when `valid` is true.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub description: String,
    pub violations: Vec<FieldViolation>,
}

/// Empty or whitespace only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn is_missing(value: Option<&str>) -> bool {
    value.map_or(true, is_blank)
}

type Predicate<R> = Box<dyn Fn(&R) -> bool + Send + Sync>;

/// One field check. The predicate returns `true` when the field is invalid.
pub struct Rule<R> {
    pub field: &'static str,
    pub kind: ViolationKind,
    pub template: &'static str,
    predicate: Predicate<R>,
}

impl<R: 'static> Rule<R> {
    pub fn new(
        field: &'static str,
        kind: ViolationKind,
        template: &'static str,
        fails: impl Fn(&R) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            field,
            kind,
            template,
            predicate: Box::new(fails),
        }
    }

    /// Identifier that must be present and non-blank.
    pub fn required(field: &'static str, get: fn(&R) -> Option<&str>) -> Self {
        Self::new(
            field,
            ViolationKind::MissingOrBlankField,
            MISSING_TEMPLATE,
            move |r| is_missing(get(r)),
        )
    }

    /// Free-text field that must not be blank.
    pub fn provided(field: &'static str, get: fn(&R) -> &str) -> Self {
        Self::new(
            field,
            ViolationKind::MissingOrBlankField,
            MISSING_TEMPLATE,
            move |r| is_blank(get(r)),
        )
    }

    /// Number that must be strictly greater than zero.
    pub fn positive(field: &'static str, get: fn(&R) -> i32) -> Self {
        Self::new(
            field,
            ViolationKind::NonPositiveNumber,
            NON_POSITIVE_TEMPLATE,
            move |r| get(r) <= 0,
        )
    }

    /// Collection that must hold at least one element.
    pub fn non_empty(field: &'static str, len: fn(&R) -> usize) -> Self {
        Self::new(
            field,
            ViolationKind::CollectionEmpty,
            MISSING_TEMPLATE,
            move |r| len(r) == 0,
        )
    }

    /// Collection that may hold at most `max` elements.
    pub fn at_most(field: &'static str, max: usize, len: fn(&R) -> usize) -> Self {
        Self::new(
            field,
            ViolationKind::CollectionTooLarge { max },
            TOO_LARGE_TEMPLATE,
            move |r| len(r) > max,
        )
    }

    /// Identifier list whose elements must all be present and non-blank.
    pub fn each_present(field: &'static str, get: fn(&R) -> &[Option<String>]) -> Self {
        Self::new(
            field,
            ViolationKind::CollectionElementInvalid,
            INVALID_ELEMENT_TEMPLATE,
            move |r| get(r).iter().any(|id| is_missing(id.as_deref())),
        )
    }

    pub fn fails(&self, request: &R) -> bool {
        (self.predicate)(request)
    }

    /// Fill the template for a request label.
    pub fn message(&self, request_label: &str) -> String {
        let mut message = self
            .template
            .replace("{field}", self.field)
            .replace("{request}", request_label);
        if let ViolationKind::CollectionTooLarge { max } = self.kind {
            message = message.replace("{max}", &max.to_string());
        }
        message
    }
}

impl<R> std::fmt::Debug for Rule<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("field", &self.field)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Ordered rules for one request variant. Registration order is the order
/// failures are reported in.
#[derive(Debug)]
pub struct RuleSet<R> {
    rules: Vec<Rule<R>>,
}

impl<R: Endpoint> RuleSet<R> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn rule(mut self, rule: Rule<R>) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn required(self, field: &'static str, get: fn(&R) -> Option<&str>) -> Self {
        self.rule(Rule::required(field, get))
    }

    pub fn provided(self, field: &'static str, get: fn(&R) -> &str) -> Self {
        self.rule(Rule::provided(field, get))
    }

    pub fn positive(self, field: &'static str, get: fn(&R) -> i32) -> Self {
        self.rule(Rule::positive(field, get))
    }

    pub fn non_empty(self, field: &'static str, len: fn(&R) -> usize) -> Self {
        self.rule(Rule::non_empty(field, len))
    }

    pub fn at_most(self, field: &'static str, max: usize, len: fn(&R) -> usize) -> Self {
        self.rule(Rule::at_most(field, max, len))
    }

    pub fn each_present(self, field: &'static str, get: fn(&R) -> &[Option<String>]) -> Self {
        self.rule(Rule::each_present(field, get))
    }

    pub fn kind(&self) -> RequestKind {
        R::KIND
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> &[Rule<R>] {
        &self.rules
    }
}

impl<R: Endpoint> Default for RuleSet<R> {
    fn default() -> Self {
        Self::new()
    }
}
