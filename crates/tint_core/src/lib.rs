//! Tint Core
//!
//! Foundational primitives shared by the Tint crates:
//!
//! - **Colors**: RGBA values with hex parsing and CSS formatting
//! - **Blending**: linear mixing toward another color (e.g. black or white)
//!
//! # Example
//!
//! ```rust
//! use tint_core::Color;
//!
//! let white = Color::parse_hex("#ffffff").unwrap();
//! let shade = white.mix(Color::BLACK, 0.2);
//! assert_eq!(shade.to_css(), "#cccccc");
//! ```

pub mod color;
mod error;

pub use color::Color;
pub use error::ColorParseError;
