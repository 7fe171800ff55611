use crate::{
    ast::ArithmeticExpression,
    error::ParseError,
    interpreter::{
        function::{Function, Rank},
        parser::{
            core::{ParseResult, parse_group},
            grouping::{Grouping, Item},
        },
    },
};

/// Builds an [`ArithmeticExpression`] from a resolved item sequence by
/// precedence climbing.
///
/// The generator borrows the [`Grouping`] the items came from so it can
/// expand group references. Nothing is shared between calls: the rank
/// ceiling travels as an argument.
pub struct Generator<'g, 'a> {
    grouping: &'g Grouping<'a>,
}

impl<'g, 'a> Generator<'g, 'a> {
    /// Creates a generator over the groups of `grouping`.
    #[must_use]
    pub const fn new(grouping: &'g Grouping<'a>) -> Self {
        Self { grouping }
    }

    /// Parses one expression from the front of `items`.
    ///
    /// Infix functions looser than `ceiling` are left unconsumed for the
    /// caller. The right operand of a greedy function is bounded by the
    /// function's own rank, so equal ranks nest to the right; any other
    /// infix function bounds it one rank tighter, so equal ranks nest to the
    /// left. Postfix functions wrap the current operand as soon as they are
    /// seen.
    ///
    /// Grammar (with `f` ranging over infix functions within the ceiling):
    /// ```text
    ///     expression := operand (postfix | f expression)*
    ///     operand    := number | group | prefix expression
    /// ```
    ///
    /// # Returns
    /// The parsed tree and the items left after it.
    ///
    /// # Errors
    /// - [`ParseError::MissingOperand`] if the items run out where an operand
    ///   is expected.
    /// - [`ParseError::UnexpectedToken`] for an item that is neither an
    ///   operand nor a function in its position.
    /// - Anything raised while expanding a group.
    pub fn generate<'i>(&self,
                        items: &'i [Item],
                        ceiling: Rank)
                        -> ParseResult<(ArithmeticExpression, &'i [Item])> {
        let (mut current, mut rest) = self.operand(items)?;

        while let Some((item, tail)) = rest.split_first() {
            match item {
                Item::Function(Function::Postfix(function)) => {
                    current = ArithmeticExpression::postfix(*function, current);
                    rest = tail;
                },
                Item::Function(Function::Infix(function)) => {
                    if function.rank() > ceiling {
                        break;
                    }

                    let bound = if function.is_greedy() {
                        function.rank()
                    } else {
                        function.rank().saturating_sub(1)
                    };
                    let (right, remaining) = self.generate(tail, bound)?;

                    current = ArithmeticExpression::infix(*function, current, right);
                    rest = remaining;
                },
                other => return Err(unexpected(*other)),
            }
        }

        Ok((current, rest))
    }

    /// Reads a single operand: a literal, an expanded group, or a prefix
    /// function applied to the expression bounded by its own rank.
    fn operand<'i>(&self, items: &'i [Item]) -> ParseResult<(ArithmeticExpression, &'i [Item])> {
        let (item, rest) = items.split_first()
                                .ok_or(ParseError::MissingOperand)?;

        match item {
            Item::Number(value) => Ok((ArithmeticExpression::Number(*value), rest)),
            Item::Group(id) => {
                let tokens = self.grouping
                                 .group(*id)
                                 .ok_or_else(|| unexpected(*item))?;
                Ok((parse_group(tokens)?, rest))
            },
            Item::Function(Function::Prefix(function)) => {
                let (operand, rest) = self.generate(rest, function.rank())?;
                Ok((ArithmeticExpression::prefix(*function, operand), rest))
            },
            Item::Function(_) => Err(unexpected(*item)),
        }
    }
}

/// Reports `item` as out of place, rendered with its display symbol.
pub(super) fn unexpected(item: Item) -> ParseError {
    let token = match item {
        Item::Number(value) => value.to_string(),
        Item::Function(function) => function.symbol().to_string(),
        Item::Group(_) => "(…)".to_string(),
    };
    ParseError::UnexpectedToken { token }
}
