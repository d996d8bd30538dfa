//! Binary operators and the symbols that select them.

use std::fmt;

/// One of the four arithmetic operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Normalize an input symbol to an operator.
    ///
    /// Several glyphs map to the same operator (`-` and `−`, `x`/`X`/`*`/`×`,
    /// `/`/`÷`/`:`). Anything else is not an operator.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            'x' | 'X' | '*' | '×' => Some(Self::Multiply),
            '/' | '÷' | ':' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Glyph shown in the running expression.
    pub fn glyph(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '−',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Apply the operator. Returns `None` for division by zero.
    pub fn apply(self, a: f64, b: f64) -> Option<f64> {
        match self {
            Self::Add => Some(a + b),
            Self::Subtract => Some(a - b),
            Self::Multiply => Some(a * b),
            Self::Divide if b == 0.0 => None,
            Self::Divide => Some(a / b),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_variants_normalize() {
        assert_eq!(Operator::from_symbol('+'), Some(Operator::Add));
        for sym in ['-', '−'] {
            assert_eq!(Operator::from_symbol(sym), Some(Operator::Subtract));
        }
        for sym in ['x', 'X', '*', '×'] {
            assert_eq!(Operator::from_symbol(sym), Some(Operator::Multiply));
        }
        for sym in ['/', '÷', ':'] {
            assert_eq!(Operator::from_symbol(sym), Some(Operator::Divide));
        }
    }

    #[test]
    fn test_unknown_symbols_rejected() {
        assert_eq!(Operator::from_symbol('^'), None);
        assert_eq!(Operator::from_symbol('='), None);
        assert_eq!(Operator::from_symbol('7'), None);
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(Operator::Divide.apply(5.0, 0.0), None);
        assert_eq!(Operator::Divide.apply(5.0, 2.0), Some(2.5));
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(Operator::Subtract.to_string(), "−");
        assert_eq!(Operator::Multiply.glyph(), '×');
    }
}
