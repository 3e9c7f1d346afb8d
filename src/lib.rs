//! Bidirectional text masks.
//!
//! A template such as `"NNN.NNN.NNN-NN"` is parsed once into a
//! [`mask::PatternSpec`]. Its two pure transforms turn a canonical value into
//! a display string (`format`) and turn arbitrary user input back into the
//! canonical value (`normalize`):
//!
//! ```
//! use maskfmt::mask::PatternSpec;
//!
//! let cpf = PatternSpec::parse("NNN.NNN.NNN-NN").unwrap();
//! assert_eq!(cpf.format("12345678900").as_deref(), Some("123.456.789-00"));
//! assert_eq!(cpf.normalize("123.456.789-00").as_deref(), Some("12345678900"));
//! assert_eq!(cpf.format("123").as_deref(), Some("123"));
//! assert_eq!(cpf.format(""), None);
//! ```
//!
//! Named masks (built-in [`presets`] and masks from the user's
//! [`config`]) are resolved through the [`registry`].

pub mod cli;
pub mod config;
pub mod mask;
pub mod presets;
pub mod registry;
