//! Descriptor parser module
//!
//! This module implements a recursive descent parser for textual type
//! descriptors such as `java.util.Map<java.lang.String,java.lang.Integer>`.
//! Name resolution is delegated to an injected [`ClassResolver`]; the parser
//! itself never consults the process default registry.

mod descriptor;
mod state;

use tracing::trace;

use crate::error::ShapeError;
use crate::model::TypeDesc;
use crate::resolve::ClassResolver;

use state::ParserState;

/// Default `<...>` nesting depth limit
///
/// No real-world descriptor nests anywhere near this; the guard exists for
/// adversarial input.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Parse a descriptor with the default depth limit
///
/// # Arguments
/// * `text` - Descriptor text, e.g. `java.util.List<java.lang.String>`
/// * `resolver` - Name resolver deciding which raw classes exist
///
/// # Returns
/// The parsed type description or the first parse error
pub fn parse_descriptor(
    text: &str,
    resolver: &dyn ClassResolver,
) -> Result<TypeDesc, ParseError> {
    DescriptorParser::new().parse(text, resolver)
}

/// Configured descriptor parser
///
/// Reusable across calls; `parse` keeps no state between inputs.
#[derive(Debug, Clone, Copy)]
pub struct DescriptorParser {
    /// `<...>` nesting depth limit
    max_depth: usize,
}

impl DescriptorParser {
    /// Create a parser with the default depth limit
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Create a parser with an explicit depth limit
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Parse a complete descriptor into a type description
    ///
    /// The whole input must be consumed; trailing characters are an error.
    pub fn parse(
        &self,
        text: &str,
        resolver: &dyn ClassResolver,
    ) -> Result<TypeDesc, ParseError> {
        trace!("parsing type descriptor: {:?}", text);
        let mut state = ParserState::new(text, resolver, self.max_depth);
        state.skip_ws();
        if state.at_end() {
            return Err(ParseError::EmptyInput);
        }
        let desc = state.parse_type()?;
        state.skip_ws();
        if !state.at_end() {
            return Err(ParseError::TrailingInput {
                rest: state.rest().to_string(),
            });
        }
        Ok(desc)
    }
}

impl Default for DescriptorParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse error types
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty type descriptor")]
    EmptyInput,

    #[error("unexpected end of input")]
    UnexpectedEnd,

    #[error("expected identifier at byte {at}, found {found:?}")]
    ExpectedIdentifier { at: usize, found: char },

    #[error("class not found: {name}")]
    UnresolvedName { name: String },

    #[error("empty type argument at byte {at}")]
    EmptyTypeArgument { at: usize },

    #[error("missing '>' to close type arguments of {raw}")]
    UnclosedTypeArguments { raw: String },

    #[error("unexpected character {found:?} at byte {at}")]
    UnexpectedChar { found: char, at: usize },

    #[error("trailing characters after type descriptor: {rest:?}")]
    TrailingInput { rest: String },

    #[error("type nesting exceeds {max} levels")]
    TooDeep { max: usize },

    #[error(transparent)]
    Shape(#[from] ShapeError),
}
