mod error;
mod fraction;

pub use error::{RuntimeError, RuntimeErrorKind};
pub use fraction::Fraction;
use fraction::FractionError;

use crate::ast::{BinaryOperator, UnaryOperator};
use compact_str::CompactString;
use std::fmt::Display;

/// A runtime value of the expression language.
///
/// Arithmetic results are normalized: a fraction whose denominator reduces to
/// one collapses to `Integer`, so `4 / 2` and `1/2 + 1/2` both come back as
/// integers.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Real(f64),
    Fraction(Fraction),
    Bool(bool),
    Str(CompactString),
    Null,
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{v}"),
            Value::Real(v) => write!(f, "{v:?}"),
            Value::Fraction(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Str(v) => write!(f, "{v}"),
            Value::Null => write!(f, "null"),
        }
    }
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Real(_) => "real",
            Value::Fraction(_) => "fraction",
            Value::Bool(_) => "boolean",
            Value::Str(_) => "string",
            Value::Null => "null",
        }
    }

    fn from_fraction(fraction: Fraction) -> Value {
        if fraction.is_integral() {
            Value::Integer(fraction.numerator())
        } else {
            Value::Fraction(fraction)
        }
    }

    fn as_real(&self) -> Option<f64> {
        match self {
            Value::Integer(v) => Some(*v as f64),
            Value::Real(v) => Some(*v),
            Value::Fraction(v) => Some(v.to_f64()),
            _ => None,
        }
    }
}

/// The two operands of a numeric operation after promotion: any `Real`
/// pushes both sides to `f64`, otherwise mixed integer/fraction pairs meet
/// at `Fraction` so the arithmetic stays exact.
enum NumericPair {
    Integers(i64, i64),
    Fractions(Fraction, Fraction),
    Reals(f64, f64),
}

fn numeric_pair(left: &Value, right: &Value) -> Option<NumericPair> {
    use Value::{Fraction as Frac, Integer, Real};
    match (left, right) {
        (Integer(a), Integer(b)) => Some(NumericPair::Integers(*a, *b)),
        (Frac(a), Frac(b)) => Some(NumericPair::Fractions(*a, *b)),
        (Frac(a), Integer(b)) => Some(NumericPair::Fractions(*a, Fraction::from_integer(*b))),
        (Integer(a), Frac(b)) => Some(NumericPair::Fractions(Fraction::from_integer(*a), *b)),
        (Real(a), _) => right.as_real().map(|b| NumericPair::Reals(*a, b)),
        (_, Real(b)) => left.as_real().map(|a| NumericPair::Reals(a, *b)),
        _ => None,
    }
}

fn map_fraction(result: Result<Fraction, FractionError>) -> Result<Value, RuntimeErrorKind> {
    match result {
        Ok(fraction) => Ok(Value::from_fraction(fraction)),
        Err(FractionError::ZeroDenominator) => Err(RuntimeErrorKind::DivisionByZero),
        Err(FractionError::Overflow) => Err(RuntimeErrorKind::Overflow),
    }
}

impl Value {
    pub fn apply_binary(
        operator: BinaryOperator,
        left: &Value,
        right: &Value,
    ) -> Result<Value, RuntimeErrorKind> {
        use BinaryOperator::*;
        match operator {
            Add | Subtract | Multiply | Divide | Quotient | Remainder | Modulo | Power => {
                match numeric_pair(left, right) {
                    Some(pair) => arithmetic(operator, pair),
                    None => Err(unsupported(operator, left, right)),
                }
            }
            Less | LessEqual | Greater | GreaterEqual | EqualEqual | NotEqual => {
                match numeric_pair(left, right) {
                    Some(pair) => comparison(operator, pair),
                    None => Err(unsupported(operator, left, right)),
                }
            }
            And | Or | Nand | Nor | Xor | Xnor => match (left, right) {
                (Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(connective(operator, *a, *b))),
                _ => Err(unsupported(operator, left, right)),
            },
        }
    }

    pub fn apply_unary(operator: UnaryOperator, operand: &Value) -> Result<Value, RuntimeErrorKind> {
        match operator {
            UnaryOperator::Negate => match operand {
                Value::Integer(v) => v
                    .checked_neg()
                    .map(Value::Integer)
                    .ok_or(RuntimeErrorKind::Overflow),
                Value::Real(v) => Ok(Value::Real(-v)),
                Value::Fraction(v) => map_fraction(v.checked_neg()),
                _ => Err(unsupported_unary(operator, operand)),
            },
            UnaryOperator::Not => match operand {
                Value::Bool(v) => Ok(Value::Bool(!v)),
                _ => Err(unsupported_unary(operator, operand)),
            },
            UnaryOperator::Sqrt => {
                let v = operand
                    .as_real()
                    .ok_or_else(|| unsupported_unary(operator, operand))?;
                if v < 0.0 {
                    Err(RuntimeErrorKind::MathDomain(
                        "square root of a negative number",
                    ))
                } else {
                    Ok(Value::Real(v.sqrt()))
                }
            }
            UnaryOperator::Ln | UnaryOperator::Lg | UnaryOperator::Log => {
                let v = operand
                    .as_real()
                    .ok_or_else(|| unsupported_unary(operator, operand))?;
                if v <= 0.0 {
                    Err(RuntimeErrorKind::MathDomain(
                        "logarithm of a non-positive number",
                    ))
                } else {
                    let result = match operator {
                        UnaryOperator::Ln => v.ln(),
                        UnaryOperator::Lg => v.log2(),
                        _ => v.log10(),
                    };
                    Ok(Value::Real(result))
                }
            }
        }
    }
}

fn unsupported(operator: BinaryOperator, left: &Value, right: &Value) -> RuntimeErrorKind {
    RuntimeErrorKind::UnsupportedOperands {
        operator,
        left: left.clone(),
        right: right.clone(),
    }
}

fn unsupported_unary(operator: UnaryOperator, operand: &Value) -> RuntimeErrorKind {
    RuntimeErrorKind::UnsupportedUnaryOperand {
        operator,
        operand: operand.clone(),
    }
}

fn arithmetic(operator: BinaryOperator, pair: NumericPair) -> Result<Value, RuntimeErrorKind> {
    match pair {
        NumericPair::Integers(a, b) => integer_arithmetic(operator, a, b),
        NumericPair::Fractions(a, b) => fraction_arithmetic(operator, a, b),
        NumericPair::Reals(a, b) => real_arithmetic(operator, a, b),
    }
}

fn integer_arithmetic(operator: BinaryOperator, a: i64, b: i64) -> Result<Value, RuntimeErrorKind> {
    match operator {
        BinaryOperator::Add => a
            .checked_add(b)
            .map(Value::Integer)
            .ok_or(RuntimeErrorKind::Overflow),
        BinaryOperator::Subtract => a
            .checked_sub(b)
            .map(Value::Integer)
            .ok_or(RuntimeErrorKind::Overflow),
        BinaryOperator::Multiply => a
            .checked_mul(b)
            .map(Value::Integer)
            .ok_or(RuntimeErrorKind::Overflow),
        // Exact division: an even pair stays an integer, everything else
        // becomes a reduced fraction.
        BinaryOperator::Divide => map_fraction(Fraction::new(a, b)),
        BinaryOperator::Quotient => {
            if b == 0 {
                Err(RuntimeErrorKind::DivisionByZero)
            } else {
                a.checked_div(b)
                    .map(Value::Integer)
                    .ok_or(RuntimeErrorKind::Overflow)
            }
        }
        BinaryOperator::Remainder => {
            if b == 0 {
                Err(RuntimeErrorKind::DivisionByZero)
            } else {
                a.checked_rem(b)
                    .map(Value::Integer)
                    .ok_or(RuntimeErrorKind::Overflow)
            }
        }
        BinaryOperator::Modulo => {
            if b == 0 {
                Err(RuntimeErrorKind::DivisionByZero)
            } else {
                a.checked_rem_euclid(b)
                    .map(Value::Integer)
                    .ok_or(RuntimeErrorKind::Overflow)
            }
        }
        BinaryOperator::Power => map_fraction(Fraction::from_integer(a).checked_pow(b)),
        _ => unreachable!("arithmetic is only called with arithmetic operators"),
    }
}

fn fraction_arithmetic(
    operator: BinaryOperator,
    a: Fraction,
    b: Fraction,
) -> Result<Value, RuntimeErrorKind> {
    match operator {
        BinaryOperator::Add => map_fraction(a.checked_add(&b)),
        BinaryOperator::Subtract => map_fraction(a.checked_sub(&b)),
        BinaryOperator::Multiply => map_fraction(a.checked_mul(&b)),
        BinaryOperator::Divide => map_fraction(a.checked_div(&b)),
        BinaryOperator::Quotient => match a.checked_quotient(&b) {
            Ok(q) => Ok(Value::Integer(q)),
            Err(e) => map_fraction(Err(e)),
        },
        BinaryOperator::Remainder | BinaryOperator::Modulo => fraction_remainder(operator, a, b),
        BinaryOperator::Power => {
            if b.is_integral() {
                map_fraction(a.checked_pow(b.numerator()))
            } else {
                real_arithmetic(operator, a.to_f64(), b.to_f64())
            }
        }
        _ => unreachable!("arithmetic is only called with arithmetic operators"),
    }
}

/// `rem` keeps the sign of the dividend; `mod` is Euclidean and never
/// negative. Both stay exact over fractions.
fn fraction_remainder(
    operator: BinaryOperator,
    a: Fraction,
    b: Fraction,
) -> Result<Value, RuntimeErrorKind> {
    let quotient = match a.checked_quotient(&b) {
        Ok(q) => Fraction::from_integer(q),
        Err(e) => return map_fraction(Err(e)),
    };
    let remainder = match quotient.checked_mul(&b).and_then(|qb| a.checked_sub(&qb)) {
        Ok(r) => r,
        Err(e) => return map_fraction(Err(e)),
    };
    if operator == BinaryOperator::Remainder || !remainder.is_negative() {
        return map_fraction(Ok(remainder));
    }
    let adjusted = match b.checked_abs().and_then(|m| remainder.checked_add(&m)) {
        Ok(r) => r,
        Err(e) => return map_fraction(Err(e)),
    };
    map_fraction(Ok(adjusted))
}

fn real_arithmetic(operator: BinaryOperator, a: f64, b: f64) -> Result<Value, RuntimeErrorKind> {
    let needs_divisor = matches!(
        operator,
        BinaryOperator::Divide
            | BinaryOperator::Quotient
            | BinaryOperator::Remainder
            | BinaryOperator::Modulo
    );
    if needs_divisor && b == 0.0 {
        return Err(RuntimeErrorKind::DivisionByZero);
    }
    let result = match operator {
        BinaryOperator::Add => a + b,
        BinaryOperator::Subtract => a - b,
        BinaryOperator::Multiply => a * b,
        BinaryOperator::Divide => a / b,
        BinaryOperator::Quotient => (a / b).trunc(),
        BinaryOperator::Remainder => a % b,
        BinaryOperator::Modulo => a.rem_euclid(b),
        BinaryOperator::Power => {
            let result = a.powf(b);
            if result.is_nan() {
                return Err(RuntimeErrorKind::MathDomain("invalid power operand"));
            }
            result
        }
        _ => unreachable!("arithmetic is only called with arithmetic operators"),
    };
    Ok(Value::Real(result))
}

fn comparison(operator: BinaryOperator, pair: NumericPair) -> Result<Value, RuntimeErrorKind> {
    let result = match pair {
        NumericPair::Integers(a, b) => compare(operator, &a, &b),
        // Never through floats: exactness is the whole point.
        NumericPair::Fractions(a, b) => compare(operator, &a, &b),
        NumericPair::Reals(a, b) => compare(operator, &a, &b),
    };
    Ok(Value::Bool(result))
}

fn compare<T: PartialOrd>(operator: BinaryOperator, a: &T, b: &T) -> bool {
    match operator {
        BinaryOperator::Less => a < b,
        BinaryOperator::LessEqual => a <= b,
        BinaryOperator::Greater => a > b,
        BinaryOperator::GreaterEqual => a >= b,
        BinaryOperator::EqualEqual => a == b,
        BinaryOperator::NotEqual => a != b,
        _ => unreachable!("comparison is only called with comparison operators"),
    }
}

fn connective(operator: BinaryOperator, a: bool, b: bool) -> bool {
    match operator {
        BinaryOperator::And => a && b,
        BinaryOperator::Or => a || b,
        BinaryOperator::Nand => !(a && b),
        BinaryOperator::Nor => !a && !b,
        BinaryOperator::Xor => a != b,
        BinaryOperator::Xnor => a == b,
        _ => unreachable!("connective is only called with boolean operators"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use BinaryOperator::*;

    fn int(v: i64) -> Value {
        Value::Integer(v)
    }

    #[test]
    fn integer_division_collapses_even_pairs() {
        assert_eq!(Value::apply_binary(Divide, &int(8), &int(2)), Ok(int(4)));
        assert_eq!(
            Value::apply_binary(Divide, &int(1), &int(2)),
            Ok(Value::Fraction(Fraction::new(1, 2).unwrap()))
        );
    }

    #[test]
    fn real_operand_promotes() {
        assert_eq!(
            Value::apply_binary(Add, &int(1), &Value::Real(0.5)),
            Ok(Value::Real(1.5))
        );
    }

    #[test]
    fn quotient_remainder_modulo() {
        assert_eq!(Value::apply_binary(Quotient, &int(-7), &int(2)), Ok(int(-3)));
        assert_eq!(Value::apply_binary(Remainder, &int(-7), &int(2)), Ok(int(-1)));
        assert_eq!(Value::apply_binary(Modulo, &int(-7), &int(2)), Ok(int(1)));
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert_eq!(
            Value::apply_binary(Divide, &int(5), &int(0)),
            Err(RuntimeErrorKind::DivisionByZero)
        );
        assert_eq!(
            Value::apply_binary(Divide, &Value::Real(5.0), &Value::Real(0.0)),
            Err(RuntimeErrorKind::DivisionByZero)
        );
    }

    #[test]
    fn negative_integer_power_is_a_fraction() {
        assert_eq!(
            Value::apply_binary(Power, &int(2), &int(-1)),
            Ok(Value::Fraction(Fraction::new(1, 2).unwrap()))
        );
    }

    #[test]
    fn mixed_integer_fraction_comparison_is_exact() {
        let third = Value::Fraction(Fraction::new(1, 3).unwrap());
        assert_eq!(
            Value::apply_binary(Less, &third, &int(1)),
            Ok(Value::Bool(true))
        );
    }

    #[test]
    fn connectives_require_booleans() {
        assert!(matches!(
            Value::apply_binary(And, &int(1), &Value::Bool(true)),
            Err(RuntimeErrorKind::UnsupportedOperands { .. })
        ));
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(
            Value::apply_binary(Add, &int(i64::MAX), &int(1)),
            Err(RuntimeErrorKind::Overflow)
        );
    }
}
