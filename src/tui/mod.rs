//! TUI module for the interactive journey.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: pure data types (App, Screen, Action, Transition)
//! - `anim`: triangle-wave oscillators, owned by the App
//! - `update`: pure transitions and the per-tick step
//! - `view`: pure rendering to ratatui widgets
//! - `theme`: style constants and pillar colors
//! - `run`: effects (terminal lifecycle, threads, event loop)

pub mod anim;
pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
