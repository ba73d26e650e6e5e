//! Rendering module
//!
//! Pure text output over the option schema. No I/O happens here; callers
//! decide where the rendered text goes.

pub mod help;

pub use help::render_help;
