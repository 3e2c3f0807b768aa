//! Presentational building blocks shared by the dashboard shell.

pub mod components;

pub use components::*;
