//! Syntax tree for parsed formulas and its point evaluation.
//!
//! [`Node`] is built once per [`Expression::parse`](super::Expression::parse)
//! and walked for every sample point. Named constants are folded into
//! [`Node::Number`] by the parser, so the tree only knows one variable.

use super::errors::ArithmeticError;


/// Named constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    E,
    Pi,
}
impl Constant {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "e"  => Some(Constant::E),
            "pi" => Some(Constant::Pi),
            _    => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Constant::E  => "e",
            Constant::Pi => "pi",
        }
    }

    pub const fn value(self) -> f64 {
        match self {
            Constant::E  => std::f64::consts::E,
            Constant::Pi => std::f64::consts::PI,
        }
    }
}


/// Unary functions callable as `name(arg)`. `log` and `ln` are both the natural log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Sqrt,
    Ln,
    Exp,
}
impl Function {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin"         => Some(Function::Sin),
            "cos"         => Some(Function::Cos),
            "tan"         => Some(Function::Tan),
            "sqrt"        => Some(Function::Sqrt),
            "log" | "ln"  => Some(Function::Ln),
            "exp"         => Some(Function::Exp),
            _             => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Function::Sin  => "sin",
            Function::Cos  => "cos",
            Function::Tan  => "tan",
            Function::Sqrt => "sqrt",
            Function::Ln   => "ln",
            Function::Exp  => "exp",
        }
    }

    /// Out-of-domain arguments (e.g. `sqrt(-1)`) yield NaN, not an error.
    #[inline]
    pub fn apply(self, v: f64) -> f64 {
        match self {
            Function::Sin  => v.sin(),
            Function::Cos  => v.cos(),
            Function::Tan  => v.tan(),
            Function::Sqrt => v.sqrt(),
            Function::Ln   => v.ln(),
            Function::Exp  => v.exp(),
        }
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}
impl BinaryOp {
    pub const fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
            BinaryOp::Pow => '^',
        }
    }

    /// # Errors
    /// └ [`ArithmeticError::DivisionByZero`] - `Div` with `rhs == 0`
    #[inline]
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, ArithmeticError> {
        match self {
            BinaryOp::Add => Ok(lhs + rhs),
            BinaryOp::Sub => Ok(lhs - rhs),
            BinaryOp::Mul => Ok(lhs * rhs),
            BinaryOp::Div => {
                if rhs == 0.0 {
                    return Err(ArithmeticError::DivisionByZero { numerator: lhs });
                }
                Ok(lhs / rhs)
            }
            BinaryOp::Pow => Ok(lhs.powf(rhs)),
        }
    }
}


/// Formula syntax tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Number(f64),
    Variable,
    Negate(Box<Node>),
    Binary { op: BinaryOp, lhs: Box<Node>, rhs: Box<Node> },
    Call   { func: Function, arg: Box<Node> },
}

impl Node {
    pub fn binary(op: BinaryOp, lhs: Node, rhs: Node) -> Self {
        Node::Binary { op, lhs: Box::new(lhs), rhs: Box::new(rhs) }
    }

    pub fn call(func: Function, arg: Node) -> Self {
        Node::Call { func, arg: Box::new(arg) }
    }

    pub fn negate(inner: Node) -> Self {
        Node::Negate(Box::new(inner))
    }

    /// Evaluates the tree with the variable bound to `x`.
    ///
    /// Operands are evaluated left before right, so the first failing
    /// sub-expression in reading order determines the error.
    pub fn eval(&self, x: f64) -> Result<f64, ArithmeticError> {
        match self {
            Node::Number(v)                => Ok(*v),
            Node::Variable                 => Ok(x),
            Node::Negate(inner)            => Ok(-inner.eval(x)?),
            Node::Call { func, arg }       => Ok(func.apply(arg.eval(x)?)),
            Node::Binary { op, lhs, rhs }  => {
                let l = lhs.eval(x)?;
                let r = rhs.eval(x)?;
                op.apply(l, r)
            }
        }
    }

    /// `true` if the tree does not reference the variable.
    pub fn is_constant(&self) -> bool {
        match self {
            Node::Number(_)               => true,
            Node::Variable                => false,
            Node::Negate(inner)           => inner.is_constant(),
            Node::Call { arg, .. }        => arg.is_constant(),
            Node::Binary { lhs, rhs, .. } => lhs.is_constant() && rhs.is_constant(),
        }
    }
}

/// Fully parenthesized rendering, e.g. `((x ^ 2) - 4)`.
impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Number(v)               => write!(f, "{v}"),
            Node::Variable                => write!(f, "x"),
            Node::Negate(inner)           => write!(f, "(-{inner})"),
            Node::Call { func, arg }      => write!(f, "{}({arg})", func.name()),
            Node::Binary { op, lhs, rhs } => write!(f, "({lhs} {} {rhs})", op.symbol()),
        }
    }
}
