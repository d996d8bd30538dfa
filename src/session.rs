//! The controller tying the engine to history, theme and storage.

use crate::calculator::Calculator;
use crate::config::Config;
use crate::error::Result;
use crate::history::{History, reuse_seed};
use crate::input::Input;
use crate::storage::Storage;
use crate::theme::Theme;

/// What the display shows after an input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub current: String,
    pub expression: String,
}

impl Frame {
    /// True when the operand is `Error` or a NaN carried over from one.
    pub fn is_error(&self) -> bool {
        self.current == crate::calculator::ERROR_MARKER || self.current == "NaN"
    }
}

/// One running calculator with its persisted surroundings.
pub struct Session<S: Storage> {
    calculator: Calculator,
    history: History,
    theme: Theme,
    storage: S,
}

impl<S: Storage> Session<S> {
    /// Restore history and theme from `storage`.
    pub fn new(storage: S, config: &Config) -> Self {
        let history = History::load(&storage, config.history_limit);
        let theme = Theme::load(&storage, config.default_theme);
        tracing::debug!(entries = history.len(), %theme, "session started");

        Self {
            calculator: Calculator::new(),
            history,
            theme,
            storage,
        }
    }

    /// Apply one input and return the frame to display.
    ///
    /// A completed equals is recorded in history and saved; a failed save
    /// is returned as an error after the calculation has already happened.
    pub fn dispatch(&mut self, input: Input) -> Result<Frame> {
        tracing::debug!(?input, "dispatch");

        match input {
            Input::Digit(d) => self.calculator.append_digit(d),
            Input::Decimal => self.calculator.append_digit('.'),
            Input::Operator(symbol) => self.calculator.set_operator(symbol),
            Input::Equals => {
                if let Some(entry) = self.calculator.press_equals() {
                    self.history.push(entry);
                    self.history.save(&mut self.storage)?;
                }
            }
            Input::AllClear => self.calculator.all_clear(),
            Input::Backspace => self.calculator.backspace(),
            Input::ToggleSign => self.calculator.toggle_sign(),
            Input::Percent => self.calculator.percent(),
        }

        Ok(self.frame())
    }

    /// Seed a new calculation from the history entry at `index`.
    pub fn reuse_history(&mut self, index: usize) -> Option<Frame> {
        let seed = reuse_seed(self.history.get(index)?).to_string();
        self.calculator.reseed(&seed);
        Some(self.frame())
    }

    pub fn clear_history(&mut self) -> Result<()> {
        self.history.clear();
        self.history.save(&mut self.storage)
    }

    /// Advance to the next theme and save it.
    pub fn cycle_theme(&mut self) -> Result<Theme> {
        self.theme = self.theme.next();
        self.theme.save(&mut self.storage)?;
        tracing::info!(theme = %self.theme, "theme changed");
        Ok(self.theme)
    }

    pub fn frame(&self) -> Frame {
        Frame {
            current: self.calculator.current().to_string(),
            expression: self.calculator.expression().to_string(),
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
