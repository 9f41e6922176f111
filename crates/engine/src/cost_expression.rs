//! Sandboxed cost expression evaluation
//!
//! Accessory costs may be authored as a small arithmetic formula over the
//! weapon's own cost, e.g. `"ceil(cost_int * 0.25 / 5) * 5"`. The grammar
//! is deliberately tiny: numeric literals, `+ - * /`, unary minus,
//! parentheses, the single variable `cost_int`, and the whitelisted
//! functions `min`, `max`, `round`, `ceil`, `floor`. There is no general
//! evaluator underneath - a hand-written tokenizer and recursive-descent
//! parser are the whole sandbox.

use thiserror::Error;

/// Error evaluating a cost expression
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExpressionError {
    #[error("Unexpected character '{0}' in cost expression")]
    UnexpectedChar(char),

    #[error("Unexpected end of cost expression")]
    UnexpectedEnd,

    #[error("Unexpected token '{0}' in cost expression")]
    UnexpectedToken(String),

    /// A name outside the whitelist (`cost_int` and the five functions)
    #[error("Unknown name '{0}' in cost expression")]
    UnknownName(String),

    #[error("Function '{name}' expects {expected} argument(s), got {got}")]
    Arity {
        name: String,
        expected: &'static str,
        got: usize,
    },

    #[error("Division by zero in cost expression")]
    DivisionByZero,

    /// Parenthesis/call nesting past the sanity bound
    #[error("Cost expression nesting exceeds depth limit")]
    NestedTooDeep,

    #[error("Cost expression result is not a finite number")]
    NotFinite,
}

/// Evaluate a cost expression with `cost_int` bound to the weapon's cost.
///
/// The result is coerced to an integer by truncation toward zero. Any
/// failure - lexical, syntactic, unknown name, division by zero - comes
/// back as an [`ExpressionError`]; the accessory cost path in
/// [`crate::cost`] is the layer that catches it and falls back to the flat
/// cost.
pub fn evaluate(expression: &str, weapon_base_cost: i32) -> Result<i32, ExpressionError> {
    let tokens = tokenize(expression)?;
    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
        depth: 0,
        cost_int: f64::from(weapon_base_cost),
    };
    let value = parser.expression()?;
    if parser.pos != tokens.len() {
        return Err(ExpressionError::UnexpectedToken(parser.describe_current()));
    }
    if !value.is_finite() {
        return Err(ExpressionError::NotFinite);
    }
    Ok(value.trunc() as i32)
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
    Comma,
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Token::Number(n) => n.to_string(),
            Token::Ident(name) => name.clone(),
            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Star => "*".to_string(),
            Token::Slash => "/".to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
            Token::Comma => ",".to_string(),
        }
    }
}

fn tokenize(input: &str) -> Result<Vec<Token>, ExpressionError> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            ' ' | '\t' => {
                chars.next();
            }
            '+' => {
                chars.next();
                tokens.push(Token::Plus);
            }
            '-' => {
                chars.next();
                tokens.push(Token::Minus);
            }
            '*' => {
                chars.next();
                tokens.push(Token::Star);
            }
            '/' => {
                chars.next();
                tokens.push(Token::Slash);
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            ',' => {
                chars.next();
                tokens.push(Token::Comma);
            }
            '0'..='9' | '.' => {
                let mut literal = String::new();
                let mut seen_dot = false;
                while let Some(&d) = chars.peek() {
                    match d {
                        '0'..='9' => {
                            literal.push(d);
                            chars.next();
                        }
                        '.' if !seen_dot => {
                            seen_dot = true;
                            literal.push(d);
                            chars.next();
                        }
                        _ => break,
                    }
                }
                let number: f64 = literal
                    .parse()
                    .map_err(|_| ExpressionError::UnexpectedChar(c))?;
                tokens.push(Token::Number(number));
            }
            'a'..='z' | 'A'..='Z' | '_' => {
                let mut name = String::new();
                while let Some(&d) = chars.peek() {
                    if d.is_ascii_alphanumeric() || d == '_' {
                        name.push(d);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token::Ident(name));
            }
            other => return Err(ExpressionError::UnexpectedChar(other)),
        }
    }

    Ok(tokens)
}

/// Nesting bound for parentheses and call arguments. Authored expressions
/// are one-liners; anything deeper is hostile or broken input, and the
/// evaluator must degrade with an error rather than blow the stack.
const MAX_DEPTH: usize = 64;

/// Recursive-descent parser that evaluates as it goes.
struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
    cost_int: f64,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Result<&Token, ExpressionError> {
        let token = self.tokens.get(self.pos).ok_or(ExpressionError::UnexpectedEnd)?;
        self.pos += 1;
        Ok(token)
    }

    fn describe_current(&self) -> String {
        self.peek()
            .map(Token::describe)
            .unwrap_or_else(|| "end of expression".to_string())
    }

    // expression := term (('+' | '-') term)*
    //
    // Every grammar recursion (parentheses, call arguments) re-enters here,
    // so the depth guard in this one place bounds the whole parse.
    fn expression(&mut self) -> Result<f64, ExpressionError> {
        if self.depth >= MAX_DEPTH {
            return Err(ExpressionError::NestedTooDeep);
        }
        self.depth += 1;
        let result = self.additive();
        self.depth -= 1;
        result
    }

    fn additive(&mut self) -> Result<f64, ExpressionError> {
        let mut value = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.pos += 1;
                    value += self.term()?;
                }
                Some(Token::Minus) => {
                    self.pos += 1;
                    value -= self.term()?;
                }
                _ => return Ok(value),
            }
        }
    }

    // term := unary (('*' | '/') unary)*
    fn term(&mut self) -> Result<f64, ExpressionError> {
        let mut value = self.unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.pos += 1;
                    value *= self.unary()?;
                }
                Some(Token::Slash) => {
                    self.pos += 1;
                    let divisor = self.unary()?;
                    if divisor == 0.0 {
                        return Err(ExpressionError::DivisionByZero);
                    }
                    value /= divisor;
                }
                _ => return Ok(value),
            }
        }
    }

    // unary := '-'* primary
    //
    // Iterative on purpose: a run of minus signs must not consume stack.
    fn unary(&mut self) -> Result<f64, ExpressionError> {
        let mut negate = false;
        while matches!(self.peek(), Some(Token::Minus)) {
            self.pos += 1;
            negate = !negate;
        }
        let value = self.primary()?;
        Ok(if negate { -value } else { value })
    }

    // primary := number | '(' expression ')' | 'cost_int' | fn '(' args ')'
    fn primary(&mut self) -> Result<f64, ExpressionError> {
        let token = self.advance()?.clone();
        match token {
            Token::Number(n) => Ok(n),
            Token::LParen => {
                let value = self.expression()?;
                self.expect_rparen()?;
                Ok(value)
            }
            Token::Ident(name) => self.name(&name),
            other => Err(ExpressionError::UnexpectedToken(other.describe())),
        }
    }

    fn name(&mut self, name: &str) -> Result<f64, ExpressionError> {
        if name == "cost_int" {
            return Ok(self.cost_int);
        }

        if !matches!(name, "min" | "max" | "round" | "ceil" | "floor") {
            return Err(ExpressionError::UnknownName(name.to_string()));
        }

        // Whitelisted function call
        match self.advance()? {
            Token::LParen => {}
            other => return Err(ExpressionError::UnexpectedToken(other.describe())),
        }
        let args = self.arguments()?;

        match name {
            "min" | "max" => {
                if args.is_empty() {
                    return Err(ExpressionError::Arity {
                        name: name.to_string(),
                        expected: "at least 1",
                        got: 0,
                    });
                }
                let fold = if name == "min" { f64::min } else { f64::max };
                let mut iter = args.into_iter();
                let first = iter.next().unwrap_or_default();
                Ok(iter.fold(first, fold))
            }
            _ => {
                if args.len() != 1 {
                    return Err(ExpressionError::Arity {
                        name: name.to_string(),
                        expected: "exactly 1",
                        got: args.len(),
                    });
                }
                let arg = args[0];
                Ok(match name {
                    "round" => round_half_even(arg),
                    "ceil" => arg.ceil(),
                    _ => arg.floor(),
                })
            }
        }
    }

    // arguments := expression (',' expression)* ')'  (may be empty)
    fn arguments(&mut self) -> Result<Vec<f64>, ExpressionError> {
        let mut args = Vec::new();
        if matches!(self.peek(), Some(Token::RParen)) {
            self.pos += 1;
            return Ok(args);
        }
        loop {
            args.push(self.expression()?);
            match self.advance()? {
                Token::Comma => continue,
                Token::RParen => return Ok(args),
                other => return Err(ExpressionError::UnexpectedToken(other.describe())),
            }
        }
    }

    fn expect_rparen(&mut self) -> Result<(), ExpressionError> {
        match self.advance()? {
            Token::RParen => Ok(()),
            other => Err(ExpressionError::UnexpectedToken(other.describe())),
        }
    }
}

/// `round` rounds half to even, the way the content-authoring runtime does,
/// so `round(2.5)` prices the same on both sides of the admin UI.
fn round_half_even(x: f64) -> f64 {
    if (x - x.trunc()).abs() == 0.5 {
        let below = x.floor();
        if below % 2.0 == 0.0 {
            below
        } else {
            below + 1.0
        }
    } else {
        x.round()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_arithmetic() {
        assert_eq!(evaluate("10 + 5 * 2", 0).unwrap(), 20);
        assert_eq!(evaluate("(10 + 5) * 2", 0).unwrap(), 30);
    }

    #[test]
    fn test_cost_int_binding() {
        assert_eq!(evaluate("cost_int / 2", 50).unwrap(), 25);
    }

    #[test]
    fn test_quarter_rounded_to_five() {
        // 47 * 0.25 = 11.75; / 5 = 2.35; ceil = 3; * 5 = 15
        assert_eq!(evaluate("ceil(cost_int * 0.25 / 5) * 5", 47).unwrap(), 15);
    }

    #[test]
    fn test_truncation_toward_zero() {
        assert_eq!(evaluate("7 / 2", 0).unwrap(), 3);
        assert_eq!(evaluate("-7 / 2", 0).unwrap(), -3);
    }

    #[test]
    fn test_round_floor_ceil() {
        assert_eq!(evaluate("round(2.4)", 0).unwrap(), 2);
        assert_eq!(evaluate("round(2.6)", 0).unwrap(), 3);
        assert_eq!(evaluate("floor(2.9)", 0).unwrap(), 2);
        assert_eq!(evaluate("ceil(2.1)", 0).unwrap(), 3);
    }

    #[test]
    fn test_round_halves_to_even() {
        // Half-to-even, matching the authoring runtime: 2.5 -> 2, 3.5 -> 4.
        assert_eq!(evaluate("round(2.5)", 0).unwrap(), 2);
        assert_eq!(evaluate("round(3.5)", 0).unwrap(), 4);
        assert_eq!(evaluate("round(-2.5)", 0).unwrap(), -2);
        assert_eq!(evaluate("round(-3.5)", 0).unwrap(), -4);
    }

    #[test]
    fn test_nested_min_max() {
        assert_eq!(evaluate("max(5, min(10, cost_int))", 8).unwrap(), 8);
        assert_eq!(evaluate("max(5, min(10, cost_int))", 2).unwrap(), 5);
        assert_eq!(evaluate("max(5, min(10, cost_int))", 99).unwrap(), 10);
    }

    #[test]
    fn test_unary_minus() {
        assert_eq!(evaluate("-5 + cost_int", 20).unwrap(), 15);
        assert_eq!(evaluate("--5", 0).unwrap(), 5);
    }

    #[test]
    fn test_deep_nesting_errors_instead_of_overflowing() {
        // Parenthesis nesting past the bound must come back as an error the
        // accessory path can catch, never a stack overflow.
        let deep = format!("{}1{}", "(".repeat(50_000), ")".repeat(50_000));
        assert_eq!(evaluate(&deep, 0), Err(ExpressionError::NestedTooDeep));

        let calls = format!("{}1{}", "ceil(".repeat(50_000), ")".repeat(50_000));
        assert_eq!(evaluate(&calls, 0), Err(ExpressionError::NestedTooDeep));

        // A long minus run is fine: unary is iterative.
        let minuses = format!("{}5", "-".repeat(50_001));
        assert_eq!(evaluate(&minuses, 0).unwrap(), -5);

        // Reasonable nesting still evaluates.
        assert_eq!(evaluate("((((((((((1))))))))))", 0).unwrap(), 1);
    }

    #[test]
    fn test_unknown_name_rejected() {
        assert!(matches!(
            evaluate("__import__", 0),
            Err(ExpressionError::UnknownName(_))
        ));
        assert!(matches!(
            evaluate("pow(2, 10)", 0),
            Err(ExpressionError::UnknownName(_))
        ));
    }

    #[test]
    fn test_division_by_zero_rejected() {
        assert_eq!(evaluate("10 / 0", 0), Err(ExpressionError::DivisionByZero));
    }

    #[test]
    fn test_malformed_input_rejected() {
        assert!(evaluate("", 0).is_err());
        assert!(evaluate("1 +", 0).is_err());
        assert!(evaluate("min(1,", 0).is_err());
        assert!(evaluate("1 2", 0).is_err());
        assert!(matches!(
            evaluate("cost_int @ 2", 10),
            Err(ExpressionError::UnexpectedChar('@'))
        ));
    }

    #[test]
    fn test_arity_errors() {
        assert!(matches!(
            evaluate("round(1, 2)", 0),
            Err(ExpressionError::Arity { .. })
        ));
        assert!(matches!(
            evaluate("min()", 0),
            Err(ExpressionError::Arity { .. })
        ));
    }
}
