//! CuraQ terminal client (curaq-tui)
//!
//! TUI and CLI for reading and curating articles saved to CuraQ.
//!
//! Follows a Pure Core / Impure Shell split: `view_state` and `state` are
//! pure and tested without a terminal; `view`, `api` and `config` do the I/O.

pub mod api;
pub mod commands;
pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
pub mod view_state;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
