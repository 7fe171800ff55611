use log::trace;

use crate::{
    error::ParseError,
    interpreter::{function::Function, parser::core::ParseResult, token::Token},
    util::num::Number,
};

/// Identifies one resolved parenthesis span within a [`Grouping`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GroupId(usize);

/// One element of a token sequence after its parentheses were resolved.
///
/// Parentheses cannot appear here: every balanced span has been replaced by
/// a single [`Item::Group`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Item {
    /// A numeric literal.
    Number(Number),
    /// A function symbol.
    Function(Function),
    /// Stands in for a complete parenthesized sub-sequence.
    Group(GroupId),
}

/// A flat token sequence with its outermost parenthesis spans folded into
/// group references.
///
/// Only the outermost level is resolved. Each group keeps its inner tokens
/// untouched (nested parentheses included) so the parser can run the whole
/// pipeline on it recursively.
#[derive(Debug, Clone, PartialEq)]
pub struct Grouping<'a> {
    items:  Vec<Item>,
    groups: Vec<&'a [Token]>,
}

impl<'a> Grouping<'a> {
    /// Resolves the outermost parenthesis spans of `tokens`.
    ///
    /// A single left-to-right scan tracks the nesting depth. A `(` at depth
    /// zero opens a span; the `)` that brings the depth back to zero closes
    /// it and registers everything strictly between the two under a fresh
    /// [`GroupId`]. A negate before the `(` stays a separate item.
    ///
    /// # Errors
    /// [`ParseError::UnbalancedParentheses`] if the depth ever goes negative
    /// or is not zero at the end of input.
    ///
    /// # Example
    /// ```
    /// use calculon::{
    ///     Infix, Token,
    ///     interpreter::parser::grouping::{Grouping, Item},
    /// };
    ///
    /// let tokens = [Token::OpenParen,
    ///               Token::Number(1.0),
    ///               Token::CloseParen,
    ///               Infix::Add.into(),
    ///               Token::Number(2.0)];
    /// let grouping = Grouping::resolve(&tokens).unwrap();
    ///
    /// assert_eq!(grouping.items().len(), 3);
    /// let Item::Group(id) = grouping.items()[0] else { panic!("expected a group") };
    /// assert_eq!(grouping.group(id), Some(&tokens[1..2]));
    /// ```
    pub fn resolve(tokens: &'a [Token]) -> ParseResult<Self> {
        let mut items = Vec::with_capacity(tokens.len());
        let mut groups = Vec::new();
        let mut depth = 0usize;
        let mut start = 0usize;

        for (index, token) in tokens.iter().enumerate() {
            match token {
                Token::OpenParen => {
                    if depth == 0 {
                        start = index;
                    }
                    depth += 1;
                },
                Token::CloseParen => {
                    depth = depth.checked_sub(1)
                                 .ok_or(ParseError::UnbalancedParentheses)?;
                    if depth == 0 {
                        let id = GroupId(groups.len());
                        trace!("group {} spans tokens {}..{index}", id.0, start + 1);
                        groups.push(&tokens[start + 1..index]);
                        items.push(Item::Group(id));
                    }
                },
                Token::Number(value) if depth == 0 => items.push(Item::Number(*value)),
                Token::Function(function) if depth == 0 => items.push(Item::Function(*function)),
                Token::Number(_) | Token::Function(_) => {},
            }
        }

        if depth != 0 {
            return Err(ParseError::UnbalancedParentheses);
        }

        Ok(Self { items, groups })
    }

    /// Returns the resolved sequence.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the tokens enclosed by a group, without its delimiters.
    #[must_use]
    pub fn group(&self, id: GroupId) -> Option<&'a [Token]> {
        self.groups.get(id.0).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::function::{Infix, Prefix};

    fn n(value: Number) -> Token {
        Token::Number(value)
    }

    #[test]
    fn flat_sequence_has_no_groups() {
        let tokens = [n(1.0), Infix::Add.into(), n(2.0)];
        let grouping = Grouping::resolve(&tokens).unwrap();

        assert_eq!(grouping.group(GroupId(0)), None);
        assert_eq!(grouping.items(),
                   &[Item::Number(1.0), Item::Function(Infix::Add.into()), Item::Number(2.0)]);
    }

    #[test]
    fn only_outermost_spans_are_resolved() {
        // (12 – 23 ^ (23 – 32))
        let tokens = [Token::OpenParen,
                      n(12.0),
                      Infix::Subtract.into(),
                      n(23.0),
                      Infix::Exponent.into(),
                      Token::OpenParen,
                      n(23.0),
                      Infix::Subtract.into(),
                      n(32.0),
                      Token::CloseParen,
                      Token::CloseParen];
        let grouping = Grouping::resolve(&tokens).unwrap();

        assert_eq!(grouping.items(), &[Item::Group(GroupId(0))]);
        assert_eq!(grouping.group(GroupId(0)), Some(&tokens[1..10]));
    }

    #[test]
    fn sibling_groups_get_fresh_ids() {
        let tokens = [Token::OpenParen,
                      n(234.0),
                      Token::CloseParen,
                      Infix::Add.into(),
                      Token::OpenParen,
                      n(234.0),
                      Token::CloseParen];
        let grouping = Grouping::resolve(&tokens).unwrap();

        assert_eq!(grouping.items(),
                   &[Item::Group(GroupId(0)),
                     Item::Function(Infix::Add.into()),
                     Item::Group(GroupId(1))]);
        assert_eq!(grouping.group(GroupId(1)), Some(&tokens[5..6]));
    }

    #[test]
    fn negate_before_group_stays_separate() {
        let tokens = [Prefix::Negate.into(), Token::OpenParen, n(4.0), Token::CloseParen];
        let grouping = Grouping::resolve(&tokens).unwrap();

        assert_eq!(grouping.items(),
                   &[Item::Function(Prefix::Negate.into()), Item::Group(GroupId(0))]);
    }

    #[test]
    fn unbalanced_parentheses_are_rejected() {
        let open = [Token::OpenParen, n(5234.0), Infix::Subtract.into()];
        let close = [n(1.0), Token::CloseParen, Token::OpenParen];
        let early = [Token::CloseParen, n(1.0), Token::OpenParen];

        for tokens in [&open[..], &close[..], &early[..]] {
            assert_eq!(Grouping::resolve(tokens), Err(ParseError::UnbalancedParentheses));
        }
    }

    #[test]
    fn unknown_ids_resolve_to_nothing() {
        let grouping = Grouping::resolve(&[]).unwrap();
        assert_eq!(grouping.group(GroupId(3)), None);
    }
}
