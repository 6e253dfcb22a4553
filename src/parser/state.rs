//! Descriptor cursor state

use crate::model::RawClass;
use crate::resolve::ClassResolver;

use super::ParseError;

/// Cursor over a descriptor string
///
/// Tracks the byte position and the `<...>` nesting depth. All lookahead is
/// single-character; the descriptor grammar never needs more.
pub(crate) struct ParserState<'a> {
    /// Input text
    text: &'a str,
    /// Current byte offset
    pos: usize,
    /// Current nesting depth
    depth: usize,
    /// Nesting depth limit
    max_depth: usize,
    /// Injected name resolver
    resolver: &'a dyn ClassResolver,
}

impl<'a> ParserState<'a> {
    /// Create a new cursor at the start of the input
    #[inline]
    pub(crate) fn new(
        text: &'a str,
        resolver: &'a dyn ClassResolver,
        max_depth: usize,
    ) -> Self {
        Self {
            text,
            pos: 0,
            depth: 0,
            max_depth,
            resolver,
        }
    }

    /// Get the current character without consuming it
    #[inline]
    pub(crate) fn current(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    /// Check the current character
    #[inline]
    pub(crate) fn at(&self, expected: char) -> bool {
        self.current() == Some(expected)
    }

    /// Check if at end of input
    #[inline]
    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Advance past the current character
    #[inline]
    pub(crate) fn bump(&mut self) {
        if let Some(c) = self.current() {
            self.pos += c.len_utf8();
        }
    }

    /// Consume the current character if it matches
    #[inline]
    pub(crate) fn skip(&mut self, expected: char) -> bool {
        if self.at(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Skip ASCII whitespace
    ///
    /// Whitespace is only legal around structural tokens; callers invoke
    /// this at exactly those points.
    #[inline]
    pub(crate) fn skip_ws(&mut self) {
        while matches!(self.current(), Some(c) if c.is_ascii_whitespace()) {
            self.bump();
        }
    }

    /// Current byte offset
    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Remaining unconsumed input
    #[inline]
    pub(crate) fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Slice of the input between two byte offsets
    #[inline]
    pub(crate) fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.text[start..end]
    }

    /// Resolve a qualified name through the injected resolver
    pub(crate) fn resolve_name(&self, name: &str) -> Result<RawClass, ParseError> {
        self.resolver
            .resolve(name)
            .ok_or_else(|| ParseError::UnresolvedName {
                name: name.to_string(),
            })
    }

    /// Enter one level of `<...>` nesting
    #[inline]
    pub(crate) fn enter_nesting(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(ParseError::TooDeep {
                max: self.max_depth,
            });
        }
        Ok(())
    }

    /// Leave one level of `<...>` nesting
    #[inline]
    pub(crate) fn exit_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

/// Identifier start per host class-name rules
#[inline]
pub(crate) fn is_ident_start(c: char) -> bool {
    unicode_ident::is_xid_start(c) || c == '_' || c == '$'
}

/// Identifier continuation per host class-name rules
#[inline]
pub(crate) fn is_ident_continue(c: char) -> bool {
    unicode_ident::is_xid_continue(c) || c == '$'
}
