//! TypeToken
//!
//! Runtime-reified generic type descriptors with structural equality,
//! hashing, rendering, and a text descriptor parser.
//!
//! Three construction paths produce interchangeable tokens: declaration-site
//! capture, programmatic factories, and descriptor parsing. Tokens for the
//! same type are equal and hash identically no matter how they were built.
//!
//! # Example
//!
//! ```
//! use typetoken::{GenericToken, ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let token = GenericToken::value_of("java.util.List<java.lang.String>")?;
//!     assert_eq!(token.to_string(), "java.util.List<java.lang.String>");
//!     assert_eq!(token.to_unqualified_string(), "List<String>");
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/typetoken")]
#![warn(rust_2018_idioms)]

// Public modules
pub mod error;
pub mod factory;
pub mod model;
pub mod parser;
pub mod resolve;
pub mod token;

// Re-exports
pub use error::{ShapeError, TokenError};
pub use model::{RawClass, TypeDesc};
pub use parser::{parse_descriptor, DescriptorParser, ParseError, DEFAULT_MAX_DEPTH};
pub use resolve::{default_registry, ClassRegistry, ClassResolver};
pub use token::{Capture, GenericToken};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = "typetoken";
