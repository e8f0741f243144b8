//! # Conect
//!
//! Board evaluation engine for a Connect Four style game: a fixed 7x6 grid,
//! four-in-a-row detection in every direction, and draw detection. Rendering
//! and input are left to the caller, which drives the engine after each move.
//!
//! ## Modules
//!
//! - [`game`] — Board state, win/draw queries, turn-taking controller
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
