//! Design tokens for theming
//!
//! Tokens are the atomic values a theme is built from:
//! - The 11-stop primary ramp
//! - Accent triples for success, warning, error and info
//! - Semantic background, surface, text and border colors

mod accent;
mod ramp;
mod semantic;

pub use accent::*;
pub use ramp::*;
pub use semantic::*;
