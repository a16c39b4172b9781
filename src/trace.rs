//! Structured derivation traces.
//!
//! Every algorithm in this crate can narrate its intermediate decisions as
//! an ordered log of tagged records: a free-form label plus the numeric
//! state relevant at that step (decision parameter, outcode, parametric
//! interval). The presentation layer renders the log as explanatory text;
//! the log itself never couples to formatting.

use std::borrow::Cow;
use std::fmt;

/// One ordered log entry: a label and the named numeric state at that step.
///
/// A step has no identity beyond its position in the log.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceStep {
    /// Free-form step label, e.g. `"trivial accept"` or `"clip to TOP"`.
    pub label: Cow<'static, str>,
    /// Named numeric state recorded at this step, in recording order.
    pub values: Vec<(Cow<'static, str>, f64)>,
}

impl TraceStep {
    /// Start building a step with the given label.
    #[must_use]
    pub fn new(label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            label: label.into(),
            values: Vec::new(),
        }
    }

    /// Attach a named numeric value to the step.
    #[must_use]
    pub fn value(mut self, name: &'static str, v: impl Into<f64>) -> Self {
        self.values.push((Cow::Borrowed(name), v.into()));
        self
    }
}

impl fmt::Display for TraceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)?;
        for (i, (name, v)) in self.values.iter().enumerate() {
            let sep = if i == 0 { ": " } else { ", " };
            write!(f, "{sep}{name}={v}")?;
        }
        Ok(())
    }
}

/// An append-only, replayable log of [`TraceStep`]s.
///
/// A disabled trace shares the enabled code path but discards every record,
/// so algorithms carry exactly one implementation for traced and untraced
/// calls.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trace {
    enabled: bool,
    steps: Vec<TraceStep>,
}

impl Trace {
    /// Create an enabled trace.
    #[must_use]
    pub fn new() -> Self {
        Self {
            enabled: true,
            steps: Vec::new(),
        }
    }

    /// Create a trace that silently discards every step.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            steps: Vec::new(),
        }
    }

    /// Whether this trace records steps.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Append a step (no-op when disabled).
    pub fn push(&mut self, step: TraceStep) {
        if self.enabled {
            self.steps.push(step);
        }
    }

    /// Recorded steps in order.
    #[must_use]
    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    /// Number of recorded steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}
