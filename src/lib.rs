//! Classic bordered Snake for the terminal.
//!
//! The engine ([`game`], [`snake`], [`food`]) is independent of any terminal:
//! input arrives through [`input::InputSource`] and frames leave through
//! [`display::DisplaySink`], so whole sessions can run headless.

pub mod config;
pub mod display;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod runner;
pub mod snake;
pub mod terminal_runtime;
