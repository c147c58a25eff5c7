//! Radio Control Logic
//!
//! Catalog lookup, the selection state machine and the session loop.
//! Implements the functional core around the DSP pipeline.

pub mod catalog;
pub mod state;
pub mod session;
