//! matcalc-core: dense `f64` matrix arithmetic.
//!
//! Provides a single row-major [`Matrix`] type with elementwise addition,
//! naive multiplication, transpose, flat-array construction, arithmetic
//! mean, and a truncating textual renderer. The type is intentionally
//! small and dependency-light: one contiguous buffer, plain left-to-right
//! f64 summation, no sparse storage, no broadcasting, no decompositions.
pub mod display;
pub mod error;
pub mod matrix;

pub use display::DisplayOptions;
pub use error::{MatrixError, Result};
pub use matrix::Matrix;
