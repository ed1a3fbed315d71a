//! Interpretation layer for Zhouyi readings.
//!
//! Turns a completed divination request into a fixed natural-language prompt
//! and hands it to an external chat-completions service through a narrow
//! capability interface. The deterministic core never touches the network;
//! only this crate does.

pub mod client;
pub mod error;
pub mod prompt;

pub use client::{DeepSeekClient, Interpreter};
pub use error::InterpretError;
pub use prompt::{SYSTEM_PROMPT, build_prompt};
