//! Keypad-driven scientific calculator.
//!
//! The [`calculator`] module holds the arithmetic primitives and the input
//! engine; [`session`] is the boundary a front end talks to.

pub mod calculator;
pub mod cli;
pub mod config;
pub mod input;
pub mod session;
pub mod ui;
