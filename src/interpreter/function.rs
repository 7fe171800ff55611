/// Precedence level of a function. Lower ranks bind tighter.
pub type Rank = u8;

/// The loosest rank any function carries. A ceiling of `LOOSEST_RANK` lets the
/// generator consume every infix function.
pub const LOOSEST_RANK: Rank = 7;

/// The syntactic position of a function relative to its operands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Fixity {
    /// Applies to the value on its right.
    Prefix,
    /// Sits between a left and a right operand.
    Infix,
    /// Applies to the value on its left.
    Postfix,
}

/// A function applied to the value immediately to its right.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Prefix {
    /// Unary minus (`-x`).
    Negate,
    /// Principal square root (`√x`).
    SquareRoot,
    /// Reciprocal (`⅟x`, the `1/x` key).
    Inverse,
    /// Absolute value (`~x`).
    AbsoluteValue,
    /// Signed triangular number (`∑x`).
    Summation,
}

/// A binary function written between its operands.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Infix {
    /// Addition (`+`)
    Add,
    /// Subtraction (`–`)
    Subtract,
    /// Modulo with the sign of the divisor (`%`)
    Modulo,
    /// Multiplication (`x`)
    Multiply,
    /// Division (`÷`)
    Divide,
    /// Exponentiation (`^`)
    Exponent,
    /// `n *√ x` is the `n`-th root of `x`.
    Root,
}

/// A function applied to the value immediately to its left.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Postfix {
    /// Square (`x²`).
    Square,
    /// Factorial (`x!`).
    Factorial,
}

/// A named function symbol, grouped by the side its operands sit on.
///
/// Each function carries a rank and, for infix functions, a greedy flag. The
/// canonical table (lower binds first):
///
/// | rank | functions                  |
/// |------|----------------------------|
/// | 0    | abs, summation             |
/// | 1    | factorial                  |
/// | 2    | exponent                   |
/// | 3    | root                       |
/// | 4    | square root, inverse, square |
/// | 5    | negate, multiply, divide   |
/// | 6    | modulo                     |
/// | 7    | add, subtract              |
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Function {
    /// See [`Prefix`].
    Prefix(Prefix),
    /// See [`Infix`].
    Infix(Infix),
    /// See [`Postfix`].
    Postfix(Postfix),
}

impl Prefix {
    /// Every prefix function.
    pub const ALL: [Self; 5] =
        [Self::Negate, Self::SquareRoot, Self::Inverse, Self::AbsoluteValue, Self::Summation];

    /// Returns the precedence rank.
    #[must_use]
    pub const fn rank(self) -> Rank {
        match self {
            Self::AbsoluteValue | Self::Summation => 0,
            Self::SquareRoot | Self::Inverse => 4,
            Self::Negate => 5,
        }
    }

    /// Returns the canonical display symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Negate => "-",
            Self::SquareRoot => "√",
            Self::Inverse => "⅟",
            Self::AbsoluteValue => "~",
            Self::Summation => "∑",
        }
    }
}

impl Infix {
    /// Every infix function.
    pub const ALL: [Self; 7] = [Self::Add,
                                Self::Subtract,
                                Self::Modulo,
                                Self::Multiply,
                                Self::Divide,
                                Self::Exponent,
                                Self::Root];

    /// Returns the precedence rank.
    #[must_use]
    pub const fn rank(self) -> Rank {
        match self {
            Self::Exponent => 2,
            Self::Root => 3,
            Self::Multiply | Self::Divide => 5,
            Self::Modulo => 6,
            Self::Add | Self::Subtract => 7,
        }
    }

    /// Returns `true` for right-associative functions.
    ///
    /// `2^3^2` is `2^(3^2)` and `2*√2*√10000` is `2*√(2*√10000)`; every other
    /// infix function chains to the left.
    #[must_use]
    pub const fn is_greedy(self) -> bool {
        matches!(self, Self::Exponent | Self::Root)
    }

    /// Returns the canonical display symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "–",
            Self::Modulo => "%",
            Self::Multiply => "x",
            Self::Divide => "÷",
            Self::Exponent => "^",
            Self::Root => "*√",
        }
    }
}

impl Postfix {
    /// Every postfix function.
    pub const ALL: [Self; 2] = [Self::Square, Self::Factorial];

    /// Returns the precedence rank.
    #[must_use]
    pub const fn rank(self) -> Rank {
        match self {
            Self::Factorial => 1,
            Self::Square => 4,
        }
    }

    /// Returns the canonical display symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Square => "²",
            Self::Factorial => "!",
        }
    }
}

impl Function {
    /// Every function in the table, prefix functions first.
    pub const ALL: [Self; 14] = [Self::Prefix(Prefix::Negate),
                                 Self::Prefix(Prefix::SquareRoot),
                                 Self::Prefix(Prefix::Inverse),
                                 Self::Prefix(Prefix::AbsoluteValue),
                                 Self::Prefix(Prefix::Summation),
                                 Self::Infix(Infix::Add),
                                 Self::Infix(Infix::Subtract),
                                 Self::Infix(Infix::Modulo),
                                 Self::Infix(Infix::Multiply),
                                 Self::Infix(Infix::Divide),
                                 Self::Infix(Infix::Exponent),
                                 Self::Infix(Infix::Root),
                                 Self::Postfix(Postfix::Square),
                                 Self::Postfix(Postfix::Factorial)];

    /// Returns where the function's operands sit.
    #[must_use]
    pub const fn fixity(self) -> Fixity {
        match self {
            Self::Prefix(_) => Fixity::Prefix,
            Self::Infix(_) => Fixity::Infix,
            Self::Postfix(_) => Fixity::Postfix,
        }
    }

    /// Returns the precedence rank.
    #[must_use]
    pub const fn rank(self) -> Rank {
        match self {
            Self::Prefix(f) => f.rank(),
            Self::Infix(f) => f.rank(),
            Self::Postfix(f) => f.rank(),
        }
    }

    /// Returns `true` for right-associative functions. Only infix functions
    /// can be greedy.
    #[must_use]
    pub const fn is_greedy(self) -> bool {
        match self {
            Self::Infix(f) => f.is_greedy(),
            Self::Prefix(_) | Self::Postfix(_) => false,
        }
    }

    /// Returns the canonical display symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Prefix(f) => f.symbol(),
            Self::Infix(f) => f.symbol(),
            Self::Postfix(f) => f.symbol(),
        }
    }

    /// Looks a function up by symbol.
    ///
    /// Accepts every canonical symbol plus the ASCII aliases `*` and `/`.
    /// The plain hyphen is the canonical negate symbol; subtraction is the en
    /// dash, as on the keypad.
    ///
    /// # Example
    /// ```
    /// use calculon::interpreter::function::{Function, Infix, Prefix};
    ///
    /// assert_eq!(Function::from_symbol("-"), Some(Function::Prefix(Prefix::Negate)));
    /// assert_eq!(Function::from_symbol("–"), Some(Function::Infix(Infix::Subtract)));
    /// assert_eq!(Function::from_symbol("*"), Some(Function::Infix(Infix::Multiply)));
    /// assert_eq!(Function::from_symbol("?"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "*" => Some(Self::Infix(Infix::Multiply)),
            "/" => Some(Self::Infix(Infix::Divide)),
            _ => Self::ALL.into_iter().find(|f| f.symbol() == symbol),
        }
    }
}

impl From<Prefix> for Function {
    fn from(value: Prefix) -> Self {
        Self::Prefix(value)
    }
}

impl From<Infix> for Function {
    fn from(value: Infix) -> Self {
        Self::Infix(value)
    }
}

impl From<Postfix> for Function {
    fn from(value: Postfix) -> Self {
        Self::Postfix(value)
    }
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
