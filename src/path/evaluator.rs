use super::error::EvalError;
use super::token::{next_token, Delimiter};
use crate::document::node::{JsonNumber, JsonValue};
use std::borrow::Cow;
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, EvalError>;

/// Most `[` that may be open at once in an expression.
///
/// Field steps between brackets descend the tree, whose own depth the parser
/// already bounds, so this caps the evaluator's recursion as a whole.
pub const MAX_BRACKET_DEPTH: usize = 32;

/// Where in a `[...]` construct the current step sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Field lookup. Integer literals are rejected.
    Path,
    /// First token of a bracket body. Integer literals become index values.
    Index,
    /// Right after `]`. The token must be empty; evaluation continues from the
    /// element that was just indexed.
    PostIndex,
}

/// Resolves path expressions against a parsed document.
///
/// The evaluator only borrows the tree. Results are either references into it
/// or, for integer literals inside brackets, a standalone synthetic number.
pub struct Evaluator<'a> {
    root: &'a JsonValue,
}

impl<'a> Evaluator<'a> {
    pub fn new(root: &'a JsonValue) -> Self {
        Evaluator { root }
    }

    pub fn root(&self) -> &'a JsonValue {
        self.root
    }

    /// Evaluates a complete expression starting at the document root.
    pub fn evaluate(&self, expression: &str) -> Result<Cow<'a, JsonValue>> {
        let mut rest = expression;
        let result = self.evaluate_expression(self.root, &mut rest)?;
        debug!(expression, result = result.type_name(), "evaluated expression");
        Ok(result)
    }

    /// Evaluates `expression` starting at `node`, consuming it as it goes.
    ///
    /// On success the expression has been consumed entirely.
    pub fn evaluate_expression(
        &self,
        node: &'a JsonValue,
        expression: &mut &str,
    ) -> Result<Cow<'a, JsonValue>> {
        self.resolve(node, expression, Mode::Path, 0)
    }

    /// One step: resolve the next token, then act on its delimiter.
    ///
    /// `depth` counts the brackets opened and not yet closed by the calls below
    /// this one on the stack.
    fn resolve(
        &self,
        node: &'a JsonValue,
        expression: &mut &str,
        mode: Mode,
        depth: usize,
    ) -> Result<Cow<'a, JsonValue>> {
        let token = next_token(expression);
        trace!(token = token.text, ?mode, depth, rest = *expression, "resolve");

        let current = match mode {
            Mode::PostIndex => {
                if !token.text.is_empty() {
                    return Err(EvalError::UnexpectedToken(token.text.to_string()));
                }
                Cow::Borrowed(node)
            }
            Mode::Path | Mode::Index => match token.text.parse::<i64>() {
                Ok(literal) if mode == Mode::Index => {
                    Cow::Owned(JsonValue::Number(JsonNumber::Integer(literal)))
                }
                Ok(literal) => return Err(EvalError::IntegerOutsideIndex(literal)),
                Err(_) => Cow::Borrowed(Self::lookup(node, token.text)?),
            },
        };

        match token.delimiter {
            Some(Delimiter::Dot) => match current {
                Cow::Borrowed(next) => self.resolve(next, expression, Mode::Path, depth),
                Cow::Owned(literal) => {
                    let mut peek = *expression;
                    Err(EvalError::NotAnObject {
                        key: next_token(&mut peek).text.to_string(),
                        found: literal.type_name(),
                    })
                }
            },
            Some(Delimiter::OpenBracket) => match current {
                Cow::Borrowed(array) => self.index(array, expression, depth),
                Cow::Owned(literal) => Err(EvalError::NotAnArray(literal.type_name())),
            },
            Some(Delimiter::CloseBracket) if depth == 0 => Err(EvalError::UnmatchedBracket),
            Some(Delimiter::CloseBracket) => Ok(current),
            None if depth > 0 => Err(EvalError::UnclosedBracket),
            None => Ok(current),
        }
    }

    fn lookup(node: &'a JsonValue, key: &str) -> Result<&'a JsonValue> {
        let JsonValue::Object(fields) = node else {
            return Err(EvalError::NotAnObject {
                key: key.to_string(),
                found: node.type_name(),
            });
        };
        fields
            .get(key)
            .ok_or_else(|| EvalError::KeyNotFound(key.to_string()))
    }

    /// Handles `[`: the bracket body is a fresh path from the document root.
    fn index(
        &self,
        array: &'a JsonValue,
        expression: &mut &str,
        depth: usize,
    ) -> Result<Cow<'a, JsonValue>> {
        let JsonValue::Array(elements) = array else {
            return Err(EvalError::NotAnArray(array.type_name()));
        };

        if depth >= MAX_BRACKET_DEPTH {
            return Err(EvalError::NestingTooDeep(MAX_BRACKET_DEPTH));
        }
        let index_value = self.resolve(self.root, expression, Mode::Index, depth + 1)?;
        let index = match index_value.as_ref() {
            JsonValue::Number(JsonNumber::Integer(i)) => *i,
            JsonValue::Number(JsonNumber::Float(f)) => return Err(EvalError::NonIntegerIndex(*f)),
            other => return Err(EvalError::IndexNotNumber(other.type_name())),
        };

        let element = usize::try_from(index)
            .ok()
            .and_then(|i| elements.get(i))
            .ok_or(EvalError::IndexOutOfRange {
                index,
                len: elements.len(),
            })?;

        self.resolve(element, expression, Mode::PostIndex, depth)
    }
}
