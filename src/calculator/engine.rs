//! Input state machine driving the arithmetic primitives.
//!
//! The engine is a single accumulator: one fixed left operand, at most one
//! pending binary operator, and the display buffer being edited. Binary
//! operations chain strictly left to right.
//!
//! Any fallible operation that returns an error leaves the engine reset, so
//! callers never observe half-applied state.

use tracing::debug;

use super::format::format_number;
use super::ops::{BinaryOp, UnaryFn};
use super::primitives::{DomainError, Result, parse_operand};

const EMPTY_BUFFER: &str = "0";

/// Calculator engine state.
#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    buffer: String,
    first_operand: f64,
    pending: Option<BinaryOp>,
    awaiting_second_operand: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self {
            buffer: EMPTY_BUFFER.to_string(),
            first_operand: 0.0,
            pending: None,
            awaiting_second_operand: false,
        }
    }

    /// The number currently on the display.
    pub fn display(&self) -> &str {
        &self.buffer
    }

    /// `"<first operand> <operator>"` while an operator is pending, else empty.
    pub fn history(&self) -> String {
        match self.pending {
            Some(op) => format!("{} {}", format_number(self.first_operand), op),
            None => String::new(),
        }
    }

    pub fn pending_operator(&self) -> Option<BinaryOp> {
        self.pending
    }

    pub fn is_awaiting_second_operand(&self) -> bool {
        self.awaiting_second_operand
    }

    /// Return to the idle state with a cleared display.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Clear the display only. The pending operation survives.
    pub fn clear_entry(&mut self) {
        self.buffer = EMPTY_BUFFER.to_string();
    }

    /// Enter a single digit. Values above 9 are ignored.
    pub fn input_digit(&mut self, digit: u8) {
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            return;
        };

        if self.awaiting_second_operand {
            self.buffer = ch.to_string();
            self.awaiting_second_operand = false;
        } else if self.buffer == EMPTY_BUFFER {
            self.buffer = ch.to_string();
        } else {
            self.buffer.push(ch);
        }
    }

    pub fn input_decimal(&mut self) {
        if !self.buffer.contains('.') {
            self.buffer.push('.');
        }
        self.awaiting_second_operand = false;
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
        if self.buffer.is_empty() || self.buffer == "-" {
            self.buffer = EMPTY_BUFFER.to_string();
        }
    }

    /// Store `op` as the pending operator, evaluating any operation that
    /// already has both operands first.
    pub fn set_operator(&mut self, op: BinaryOp) -> Result<()> {
        self.guard(|engine| {
            if engine.pending.is_some() && !engine.awaiting_second_operand {
                engine.evaluate_pending()?;
            }
            engine.first_operand = parse_operand(&engine.buffer)?;
            engine.pending = Some(op);
            engine.awaiting_second_operand = true;
            debug!(first = engine.first_operand, op = %op, "operator pending");
            Ok(())
        })
    }

    /// Apply `func` to the displayed number right away.
    pub fn apply_unary(&mut self, func: UnaryFn) -> Result<()> {
        self.guard(|engine| {
            let value = parse_operand(&engine.buffer)?;
            let result = func.apply(value)?;
            debug!(value, result, func = %func, "unary function applied");
            engine.buffer = format_number(result);
            engine.awaiting_second_operand = true;
            Ok(())
        })
    }

    /// Evaluate the pending operation. Does nothing until a second operand
    /// has been entered.
    pub fn calculate(&mut self) -> Result<()> {
        self.guard(Self::evaluate_pending)
    }

    fn evaluate_pending(&mut self) -> Result<()> {
        let Some(op) = self.pending else {
            return Ok(());
        };
        if self.awaiting_second_operand {
            return Ok(());
        }

        let second = parse_operand(&self.buffer)?;
        let result = op.apply(self.first_operand, second)?;
        debug!(first = self.first_operand, second, result, op = %op, "evaluated");

        self.buffer = format_number(result);
        self.pending = None;
        self.awaiting_second_operand = true;
        Ok(())
    }

    /// Run `step`, resetting the engine if it fails.
    fn guard(&mut self, step: impl FnOnce(&mut Self) -> Result<()>) -> Result<()> {
        step(self).inspect_err(|err: &DomainError| {
            debug!(error = %err, "resetting engine after error");
            self.reset();
        })
    }
}
