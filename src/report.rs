//! Audit report assembly.
//!
//! Glue between the models and the CLI binaries: fixed lists of named
//! technologies or adsorbents with literature/DFT constants, one model
//! evaluation per entry, rendered as text tables. The models stay black
//! boxes here; this module only formats their outputs.

pub mod retention;
pub mod separation;
