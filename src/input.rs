//! Mapping buttons, keys and key scripts to calculator inputs.
//!
//! Buttons and keyboard keys overlap but are not identical: the keypad has
//! `AC`, `⌫` and `+/-`, while the keyboard has `Enter`, `Escape` and
//! `Backspace`. A key script mixes both so a whole calculation fits on one
//! line, e.g. `12+30<Enter>` or `5 × 3 +/- =`.

use crate::calculator::Operator;
use crate::error::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;

/// Operator keys accepted from the keyboard.
const OPERATOR_KEYS: &[&str] = &["+", "-", "*", "/", "x", "X", ":", "÷"];

lazy_static! {
    /// One token of a key script: a `<Name>` key, a multi-character button
    /// label, or a single non-space character.
    static ref SCRIPT_TOKEN: Regex = Regex::new(r"<[A-Za-z]+>|\+/-|AC|\S").unwrap();
}

/// A single calculator input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Digit(char),
    Decimal,
    /// Raw operator symbol; normalization happens in the engine.
    Operator(char),
    Equals,
    AllClear,
    Backspace,
    ToggleSign,
    Percent,
}

impl Input {
    /// Map a keypad button label.
    ///
    /// Unlisted single characters become operator inputs, which the engine
    /// ignores if they are not operators.
    pub fn from_button(label: &str) -> Option<Self> {
        let label = label.trim();
        match label {
            "." => Some(Self::Decimal),
            "AC" => Some(Self::AllClear),
            "⌫" => Some(Self::Backspace),
            "+/-" => Some(Self::ToggleSign),
            "%" => Some(Self::Percent),
            "=" => Some(Self::Equals),
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Some(Self::Digit(c)),
                    (Some(c), None) => Some(Self::Operator(c)),
                    _ => None,
                }
            }
        }
    }

    /// Map a keyboard key name.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "." => Some(Self::Decimal),
            "Enter" | "=" => Some(Self::Equals),
            "Escape" => Some(Self::AllClear),
            "Backspace" => Some(Self::Backspace),
            "%" => Some(Self::Percent),
            k if OPERATOR_KEYS.contains(&k) => k.chars().next().map(Self::Operator),
            k if k.len() == 1 && k.as_bytes()[0].is_ascii_digit() => {
                k.chars().next().map(Self::Digit)
            }
            _ => None,
        }
    }
}

/// Map a `<Name>` token body to a key name, accepting a few short aliases.
fn named_key(name: &str) -> Option<Input> {
    let key = match name {
        "Esc" => "Escape",
        "BS" => "Backspace",
        "Return" => "Enter",
        other => other,
    };
    Input::from_key(key)
}

/// Split a key script into inputs.
///
/// Fails on the first token that is neither a key nor a button. Unlike
/// [`Input::from_button`], a stray character that is not an operator is
/// rejected rather than passed through.
///
/// `+/-` always reads as the sign-toggle button, so `8+/-2` is `8`,
/// toggle, `2`. Separate the characters (`8 + / - 2`) to type them as
/// operators.
pub fn parse_script(script: &str) -> Result<Vec<Input>> {
    SCRIPT_TOKEN
        .find_iter(script)
        .map(|token| {
            let text = token.as_str();
            let input = match text.strip_prefix('<').and_then(|t| t.strip_suffix('>')) {
                Some(name) => named_key(name),
                None => Input::from_key(text)
                    .or_else(|| Input::from_button(text))
                    .filter(|input| match input {
                        Input::Operator(c) => Operator::from_symbol(*c).is_some(),
                        _ => true,
                    }),
            };
            input.ok_or_else(|| Error::UnknownKey(text.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons() {
        assert_eq!(Input::from_button("7"), Some(Input::Digit('7')));
        assert_eq!(Input::from_button(" AC "), Some(Input::AllClear));
        assert_eq!(Input::from_button("⌫"), Some(Input::Backspace));
        assert_eq!(Input::from_button("+/-"), Some(Input::ToggleSign));
        assert_eq!(Input::from_button("×"), Some(Input::Operator('×')));
        assert_eq!(Input::from_button("−"), Some(Input::Operator('−')));
        assert_eq!(Input::from_button("="), Some(Input::Equals));
        assert_eq!(Input::from_button("sin"), None);
        assert_eq!(Input::from_button(""), None);
    }

    #[test]
    fn test_keys() {
        assert_eq!(Input::from_key("0"), Some(Input::Digit('0')));
        assert_eq!(Input::from_key("Enter"), Some(Input::Equals));
        assert_eq!(Input::from_key("="), Some(Input::Equals));
        assert_eq!(Input::from_key("Escape"), Some(Input::AllClear));
        assert_eq!(Input::from_key("Backspace"), Some(Input::Backspace));
        assert_eq!(Input::from_key("X"), Some(Input::Operator('X')));
        assert_eq!(Input::from_key("÷"), Some(Input::Operator('÷')));
        assert_eq!(Input::from_key("%"), Some(Input::Percent));
    }

    #[test]
    fn test_keyboard_lacks_button_only_glyphs() {
        assert_eq!(Input::from_key("×"), None);
        assert_eq!(Input::from_key("−"), None);
        assert_eq!(Input::from_key("Tab"), None);
    }

    #[test]
    fn test_parse_script() {
        let inputs = parse_script("12+3.5<Enter>").unwrap();
        assert_eq!(
            inputs,
            vec![
                Input::Digit('1'),
                Input::Digit('2'),
                Input::Operator('+'),
                Input::Digit('3'),
                Input::Decimal,
                Input::Digit('5'),
                Input::Equals,
            ]
        );
    }

    #[test]
    fn test_parse_script_buttons_and_aliases() {
        let inputs = parse_script("AC 5 × 3 +/- <BS> <Esc> =").unwrap();
        assert_eq!(
            inputs,
            vec![
                Input::AllClear,
                Input::Digit('5'),
                Input::Operator('×'),
                Input::Digit('3'),
                Input::ToggleSign,
                Input::Backspace,
                Input::AllClear,
                Input::Equals,
            ]
        );
    }

    #[test]
    fn test_parse_script_unknown_key() {
        let err = parse_script("1 + <Tab>").unwrap_err();
        assert!(matches!(err, Error::UnknownKey(ref t) if t == "<Tab>"));
    }

    #[test]
    fn test_parse_script_rejects_stray_characters() {
        let err = parse_script("12 a").unwrap_err();
        assert!(matches!(err, Error::UnknownKey(ref t) if t == "a"));
    }

    #[test]
    fn test_parse_script_sign_toggle_wins_over_operators() {
        assert_eq!(
            parse_script("8+/-2").unwrap(),
            vec![Input::Digit('8'), Input::ToggleSign, Input::Digit('2')]
        );
        assert_eq!(
            parse_script("8 + / - 2").unwrap(),
            vec![
                Input::Digit('8'),
                Input::Operator('+'),
                Input::Operator('/'),
                Input::Operator('-'),
                Input::Digit('2'),
            ]
        );
    }

    #[test]
    fn test_parse_script_empty() {
        assert!(parse_script("   ").unwrap().is_empty());
    }
}
