//! The calculator state machine.
//!
//! Holds the operand being typed, an optional pending operation and the
//! running expression line. Every input handler mutates the state in place
//! and never fails; bad input is ignored.

use super::number::{format_number, parse_number};
use super::operator::Operator;

/// Operand text shown after a division by zero.
pub const ERROR_MARKER: &str = "Error";

/// Whether an operator is waiting for its right-hand operand.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Phase {
    /// Entering the first operand.
    #[default]
    Idle,
    /// `previous` is waiting for `operator` to be applied to the current operand.
    Pending { previous: String, operator: Operator },
}

/// Calculator state plus the input handlers that drive it.
#[derive(Clone, Debug, PartialEq)]
pub struct Calculator {
    current: String,
    phase: Phase,
    expression: String,
    just_calculated: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            current: "0".to_string(),
            phase: Phase::Idle,
            expression: String::new(),
            just_calculated: false,
        }
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn operator(&self) -> Option<Operator> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Pending { operator, .. } => Some(*operator),
        }
    }

    pub fn previous(&self) -> Option<&str> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Pending { previous, .. } => Some(previous),
        }
    }

    pub fn just_calculated(&self) -> bool {
        self.just_calculated
    }

    /// True when the current operand shows the division-by-zero marker.
    pub fn is_error(&self) -> bool {
        self.current == ERROR_MARKER
    }

    /// Enter a digit `0`-`9` or a decimal point.
    pub fn append_digit(&mut self, d: char) {
        if !(d.is_ascii_digit() || d == '.') {
            return;
        }

        if self.just_calculated {
            self.current = "0".to_string();
            self.expression.clear();
            self.just_calculated = false;
        }

        if d == '.' {
            if !self.current.contains('.') {
                self.current.push('.');
                self.expression.push('.');
            }
            return;
        }

        if self.current == "0" {
            self.current = d.to_string();
        } else {
            self.current.push(d);
        }
        self.expression.push(d);
    }

    /// Select an operator by symbol. Unknown symbols are ignored.
    pub fn set_operator(&mut self, symbol: char) {
        let Some(operator) = Operator::from_symbol(symbol) else {
            return;
        };

        // A minus before anything else starts a negative number.
        if operator == Operator::Subtract
            && self.current == "0"
            && self.phase == Phase::Idle
            && self.expression.is_empty()
        {
            self.current = "-".to_string();
            self.expression = "-".to_string();
            return;
        }

        // Chaining evaluates left to right; the result becomes the left operand.
        self.compute();

        let previous = std::mem::replace(&mut self.current, "0".to_string());
        self.phase = Phase::Pending { previous, operator };
        self.expression.push(' ');
        self.expression.push(operator.glyph());
        self.expression.push(' ');
        self.just_calculated = false;
    }

    /// Apply the pending operator, if any, leaving the result in `current`.
    pub fn compute(&mut self) {
        let Phase::Pending { previous, operator } = std::mem::take(&mut self.phase) else {
            return;
        };

        let a = parse_number(&previous);
        let b = parse_number(&self.current);
        self.current = match operator.apply(a, b) {
            Some(result) => format_number(result),
            None => ERROR_MARKER.to_string(),
        };
    }

    /// Evaluate the pending operation and finish the expression line.
    ///
    /// Returns the completed expression (e.g. `"5 + 3 = 8"`) when something
    /// was evaluated, so the caller can record it.
    pub fn press_equals(&mut self) -> Option<String> {
        if self.phase == Phase::Idle {
            return None;
        }

        self.expression.push_str(" =");
        self.compute();
        self.expression.push(' ');
        self.expression.push_str(&self.current);
        self.just_calculated = true;

        Some(self.expression.clone())
    }

    /// Reset everything to the startup state.
    pub fn all_clear(&mut self) {
        *self = Self::default();
    }

    /// Remove the last typed character. Ignored right after a result.
    pub fn backspace(&mut self) {
        if self.just_calculated {
            return;
        }

        if self.current.chars().count() > 1 {
            self.current.pop();
        } else {
            self.current = "0".to_string();
        }

        self.expression.pop();
        let trimmed_len = self.expression.trim_end().len();
        self.expression.truncate(trimmed_len);
    }

    /// Negate the current operand and rewrite it at the end of the expression.
    pub fn toggle_sign(&mut self) {
        if self.current == "0" {
            return;
        }

        self.current = format_number(-parse_number(&self.current));

        let trimmed = self.expression.trim();
        let mut parts: Vec<&str> = trimmed.split(' ').collect();
        if let Some(last) = parts.last_mut() {
            *last = &self.current;
        }
        self.expression = parts.join(" ");
    }

    /// Divide the current operand by 100. The expression only gains a `%`.
    pub fn percent(&mut self) {
        self.current = format_number(parse_number(&self.current) / 100.0);
        self.expression.push('%');
    }

    /// Start over with `expression` as the running line and a zero operand.
    pub fn reseed(&mut self, expression: &str) {
        self.all_clear();
        self.expression = expression.to_string();
    }
}
