//! Game configuration and its validation.
//!
//! Everything here is checked before a grid is ever generated, so the engine
//! itself can assume a non-empty alphabet and positive dimensions.

use thiserror::Error;

use crate::types::{DEFAULT_LENGTH, DEFAULT_SPEED, DEFAULT_SYMBOLS, DEFAULT_WIDTH, MAX_SYMBOLS};

/// Rows of the terminal reserved for the score/speed/status header.
pub const HEADER_ROWS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("symbol alphabet is empty")]
    EmptyAlphabet,
    #[error("symbol {0:?} must be a single character")]
    NotSingleChar(String),
    #[error("symbol {0:?} is whitespace and would be invisible")]
    BlankSymbol(char),
    #[error("symbol {0:?} appears more than once")]
    DuplicateSymbol(char),
    #[error("at most {max} symbols are supported, got {got}")]
    TooManySymbols { got: usize, max: usize },
    #[error("initial speed must be positive")]
    ZeroSpeed,
    #[error("stack {0} must be positive")]
    ZeroDimension(&'static str),
    #[error("terminal is too small for a {length}x{width} stack")]
    TerminalTooSmall { length: usize, width: usize },
}

/// Validated game parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    speed: u32,
    symbols: Vec<char>,
    length: usize,
    width: usize,
    seed: u32,
}

impl GameConfig {
    /// Validate raw options.
    ///
    /// Symbols arrive as strings (one per CLI argument); each must be a single
    /// visible character and no two may be equal.
    pub fn new<S: AsRef<str>>(
        speed: u32,
        symbols: &[S],
        length: usize,
        width: usize,
        seed: u32,
    ) -> Result<Self, ConfigError> {
        if speed == 0 {
            return Err(ConfigError::ZeroSpeed);
        }
        if length == 0 {
            return Err(ConfigError::ZeroDimension("length"));
        }
        if width == 0 {
            return Err(ConfigError::ZeroDimension("width"));
        }
        if symbols.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        if symbols.len() > MAX_SYMBOLS {
            return Err(ConfigError::TooManySymbols {
                got: symbols.len(),
                max: MAX_SYMBOLS,
            });
        }

        let mut alphabet = Vec::with_capacity(symbols.len());
        for raw in symbols {
            let raw = raw.as_ref();
            let mut chars = raw.chars();
            let ch = match (chars.next(), chars.next()) {
                (Some(ch), None) => ch,
                _ => return Err(ConfigError::NotSingleChar(raw.to_string())),
            };
            if ch.is_whitespace() {
                return Err(ConfigError::BlankSymbol(ch));
            }
            if alphabet.contains(&ch) {
                return Err(ConfigError::DuplicateSymbol(ch));
            }
            alphabet.push(ch);
        }

        Ok(Self {
            speed,
            symbols: alphabet,
            length,
            width,
            seed,
        })
    }

    /// Shrink the stack to fit a terminal of `cols x rows`.
    ///
    /// The length runs across the screen and the width down it, below the
    /// header rows.
    pub fn clamp_to(mut self, cols: u16, rows: u16) -> Result<Self, ConfigError> {
        let max_length = cols as usize;
        let max_width = (rows as usize).saturating_sub(HEADER_ROWS);
        let length = self.length.min(max_length);
        let width = self.width.min(max_width);
        if length == 0 || width == 0 {
            return Err(ConfigError::TerminalTooSmall {
                length: self.length,
                width: self.width,
            });
        }
        if length != self.length || width != self.width {
            log::info!(
                "stack clamped from {}x{} to {}x{} for a {}x{} terminal",
                self.length,
                self.width,
                length,
                width,
                cols,
                rows
            );
        }
        self.length = length;
        self.width = width;
        Ok(self)
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Alphabet size as the engine sees it.
    pub fn symbol_count(&self) -> u8 {
        self.symbols.len() as u8
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            symbols: DEFAULT_SYMBOLS.to_vec(),
            length: DEFAULT_LENGTH,
            width: DEFAULT_WIDTH,
            seed: 1,
        }
    }
}
