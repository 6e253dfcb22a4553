//! Type descriptor parsing
//!
//! Recursive descent over the descriptor grammar:
//!
//! ```text
//! type          := qualifiedName ('<' argList '>')?
//! argList       := arg (',' arg)*
//! arg           := type | '?'
//! qualifiedName := identifier ('.' identifier)*
//! ```
//!
//! 解析器没有私有表示：产出的描述树与直接调用工厂构造的完全一致。

use crate::factory;
use crate::model::TypeDesc;

use super::state::{is_ident_continue, is_ident_start, ParserState};
use super::ParseError;

impl<'a> ParserState<'a> {
    /// Parse a complete type, including any argument list
    pub(crate) fn parse_type(&mut self) -> Result<TypeDesc, ParseError> {
        let name = self.parse_qualified_name()?;
        self.skip_ws();

        // 无实参：原始类
        if !self.skip('<') {
            return Ok(TypeDesc::Raw(self.resolve_name(&name)?));
        }

        self.enter_nesting()?;
        let args = self.parse_arg_list()?;
        self.skip_ws();
        if !self.skip('>') {
            return Err(match self.current() {
                None => ParseError::UnclosedTypeArguments { raw: name },
                Some(found) => ParseError::UnexpectedChar {
                    found,
                    at: self.pos(),
                },
            });
        }
        self.exit_nesting();

        let raw = self.resolve_name(&name)?;
        Ok(factory::parameterized_type(raw, args)?)
    }

    /// Parse a dotted qualified name
    ///
    /// Whitespace is legal around commas and angle brackets but not around
    /// `.`, matching host class-name syntax.
    fn parse_qualified_name(&mut self) -> Result<String, ParseError> {
        self.skip_ws();
        let mut name = String::from(self.parse_identifier()?);
        while self.skip('.') {
            name.push('.');
            name.push_str(self.parse_identifier()?);
        }
        Ok(name)
    }

    /// Parse a single identifier segment
    fn parse_identifier(&mut self) -> Result<&'a str, ParseError> {
        let start = self.pos();
        match self.current() {
            None => return Err(ParseError::UnexpectedEnd),
            Some(c) if is_ident_start(c) => self.bump(),
            Some(found) => {
                return Err(ParseError::ExpectedIdentifier { at: start, found });
            }
        }
        while matches!(self.current(), Some(c) if is_ident_continue(c)) {
            self.bump();
        }
        Ok(self.slice(start, self.pos()))
    }

    /// Parse a comma-separated argument list (at least one argument)
    ///
    /// Commas split arguments at the current nesting level only; nested
    /// argument lists are consumed by the recursive [`Self::parse_type`].
    fn parse_arg_list(&mut self) -> Result<Vec<TypeDesc>, ParseError> {
        let mut args = Vec::new();
        loop {
            args.push(self.parse_arg()?);
            self.skip_ws();
            if !self.skip(',') {
                break;
            }
        }
        Ok(args)
    }

    /// Parse one argument: a nested type or the unbounded wildcard
    fn parse_arg(&mut self) -> Result<TypeDesc, ParseError> {
        self.skip_ws();
        match self.current() {
            Some('?') => {
                self.bump();
                Ok(factory::unbounded_wildcard_type())
            }
            // 空实参：如 `List<>` 或 `Map<A,>`
            Some('>') | Some(',') => Err(ParseError::EmptyTypeArgument { at: self.pos() }),
            None => Err(ParseError::UnexpectedEnd),
            _ => self.parse_type(),
        }
    }
}
