//! Diagnostic rendering of terms and substitutions.
//!
//! The format is fixed, and tooling compares against it byte for byte:
//!
//! | value | rendering |
//! |---|---|
//! | integer, char, bool, unit | decimal integer representation |
//! | float | `%.12g`, with a trailing `.` when it reads as an integer |
//! | function | `<fun>` |
//! | lazy / abstract / object | `<lazy>` / `<abstract>` / `<object>` |
//! | string | `str:contents`, or `<empty>` |
//! | float array | `[|1.; 2.5; |]` |
//! | variable | `<v3>` |
//! | compound | `C5((1)(<v2>))`, or `C5()` with no fields |

use std::fmt::{self, Write};

use crate::syntax::{Atomic, Term};
use crate::unify::Substitution;

/// Render a term.
pub fn show(term: &Term) -> String {
    Show(term).to_string()
}

/// Render a substitution as `var / term` pairs joined by `" , "`, most recent
/// binding first.
pub fn shows(subst: &Substitution<Term>) -> String {
    ShowSubst(subst).to_string()
}

pub(crate) struct Show<'a>(pub(crate) &'a Term);

impl fmt::Display for Show<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Term::Var(v) => write!(f, "{}", v),
            Term::Atom(atom) => write_atomic(f, atom),
            Term::Compound(tag, fields) => {
                write!(f, "C{}(", tag)?;
                for field in fields {
                    write!(f, "({})", Show(field))?;
                }
                f.write_char(')')
            }
        }
    }
}

fn write_atomic(f: &mut fmt::Formatter<'_>, atom: &Atomic) -> fmt::Result {
    match atom {
        Atomic::Int(n) => write!(f, "{}", n),
        Atomic::Char(c) => write!(f, "{}", u32::from(*c)),
        Atomic::Bool(b) => write!(f, "{}", u8::from(*b)),
        Atomic::Unit => f.write_char('0'),
        Atomic::Float(x) => f.write_str(&format_float(*x)),
        Atomic::Str(s) if s.is_empty() => f.write_str("<empty>"),
        Atomic::Str(s) => write!(f, "str:{}", s),
        Atomic::FloatArray(xs) => {
            f.write_str("[|")?;
            for x in xs {
                write!(f, "{}; ", format_float(*x))?;
            }
            f.write_str("|]")
        }
        Atomic::Int64(n) => write!(f, "{}", n),
        Atomic::Abstract(_) => f.write_str("<abstract>"),
        Atomic::Lazy(_) => f.write_str("<lazy>"),
        Atomic::Object(_) => f.write_str("<object>"),
        Atomic::Function(_) => f.write_str("<fun>"),
    }
}

pub(crate) struct ShowSubst<'a>(pub(crate) &'a Substitution<Term>);

impl fmt::Display for ShowSubst<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (var, term)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" , ")?;
            }
            write!(f, "{} / {}", var, Show(term))?;
        }
        Ok(())
    }
}

const FLOAT_PRECISION: usize = 12;

/// `%.12g`, then a `.` appended if the result is made of digits and sign only.
fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        let s = if x > 0.0 { "inf" } else { "-inf" };
        return s.to_string();
    }
    let mut s = format_general(x, FLOAT_PRECISION);
    if s.bytes().all(|b| b.is_ascii_digit() || b == b'-') {
        s.push('.');
    }
    s
}

fn format_general(x: f64, precision: usize) -> String {
    if x == 0.0 {
        let s = if x.is_sign_negative() { "-0" } else { "0" };
        return s.to_string();
    }
    let scientific = format!("{:.*e}", precision - 1, x);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };
    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, x)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
