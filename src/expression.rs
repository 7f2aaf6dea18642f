//! Compiled single-variable math expressions
//!
//! [`Expression`] wraps a `fasteval` program bound to one free variable.
//! Besides the `fasteval` built-ins (`sin`, `cos`, `log`, `abs`, `pi()`, `e()`, ...),
//! expressions may use `sqrt`, `exp`, `ln` and the bare constants `pi` and `e`.
//!
//! ```rust
//! # use chartfit::Expression;
//! let f = Expression::compile("sqrt(x) + ln(e)", "x").unwrap();
//! assert_eq!(f.eval(4.0).unwrap(), 3.0);
//! ```
use fasteval::{Compiler, Evaler};

use crate::error::{Error, Result};

/// Value the variable takes in the trial evaluation after compiling
const TRIAL_VALUE: f64 = 1.0;

/// Names resolved by the evaluation namespace, besides the variable
const KNOWN_NAMES: [&str; 5] = ["pi", "e", "sqrt", "exp", "ln"];

/// A math expression compiled for repeated evaluation
pub struct Expression {
    source: String,
    variable: String,
    slab: fasteval::Slab,
    instruction: fasteval::Instruction,
}
impl Expression {
    /// Parses and compiles `source`, with `variable` as its only free name.
    ///
    /// Every name in the program must be `variable` or one of the supported
    /// functions and constants, including names behind a short-circuiting
    /// `&&` or `||`. Calls with the wrong argument count are caught by
    /// evaluating the expression once.
    ///
    /// # Errors
    /// Returns [`Error::Parse`] if `source` is blank, is not valid syntax, or
    /// references an unknown name.
    ///
    /// # Example
    /// ```
    /// # use chartfit::{Expression, Error};
    /// assert!(Expression::compile("t^2 - 1", "t").is_ok());
    /// assert!(matches!(Expression::compile("y + 1", "x"), Err(Error::Parse { .. })));
    /// assert!(matches!(Expression::compile("sin(", "x"), Err(Error::Parse { .. })));
    /// ```
    pub fn compile(source: &str, variable: &str) -> Result<Self> {
        if source.trim().is_empty() {
            return Err(parse_error(source, "expression is empty"));
        }

        let mut slab = fasteval::Slab::new();
        let instruction = fasteval::Parser::new()
            .parse(source, &mut slab.ps)
            .map_err(|e| parse_error(source, &describe(&e)))?
            .from(&slab.ps)
            .compile(&slab.ps, &mut slab.cs);

        if let Some(name) = instruction
            .var_names(&slab)
            .into_iter()
            .find(|name| name != variable && !KNOWN_NAMES.contains(&name.as_str()))
        {
            return Err(parse_error(source, &format!("unknown name `{name}`")));
        }

        let expression = Self {
            source: source.to_string(),
            variable: variable.to_string(),
            slab,
            instruction,
        };

        expression.evaluate(TRIAL_VALUE)?;
        tracing::trace!(source, variable, "compiled expression");
        Ok(expression)
    }

    /// Evaluates the expression with its variable set to `value`.
    ///
    /// # Errors
    /// - [`Error::InvalidDomain`] if the result is NaN or infinite, such as
    ///   `sqrt(x)` at `x = -1` or `1/x` at `x = 0`.
    /// - [`Error::Parse`] if evaluation reaches a name that is not defined.
    pub fn eval(&self, value: f64) -> Result<f64> {
        let result = self.evaluate(value)?;
        if result.is_finite() {
            Ok(result)
        } else {
            Err(Error::InvalidDomain {
                function: self.source.clone(),
                value,
            })
        }
    }

    /// Evaluates without rejecting non-finite results
    pub(crate) fn evaluate(&self, value: f64) -> Result<f64> {
        let mut namespace = |name: &str, args: Vec<f64>| -> Option<f64> {
            match (name, args.as_slice()) {
                (name, []) if name == self.variable => Some(value),
                ("pi", []) => Some(std::f64::consts::PI),
                ("e", []) => Some(std::f64::consts::E),
                ("sqrt", [v]) => Some(v.sqrt()),
                ("exp", [v]) => Some(v.exp()),
                ("ln", [v]) => Some(v.ln()),
                _ => None,
            }
        };

        self.instruction
            .eval(&self.slab, &mut namespace)
            .map_err(|e| parse_error(&self.source, &describe(&e)))
    }

    /// The source text of the expression
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The name of the free variable
    #[must_use]
    pub fn variable(&self) -> &str {
        &self.variable
    }
}

impl std::fmt::Debug for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Expression")
            .field("source", &self.source)
            .field("variable", &self.variable)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

fn parse_error(source: &str, reason: &str) -> Error {
    Error::Parse {
        expression: source.to_string(),
        reason: reason.to_string(),
    }
}

fn describe(error: &fasteval::Error) -> String {
    match error {
        fasteval::Error::Undefined(name) => format!("unknown name `{name}`"),
        other => format!("{other:?}"),
    }
}
