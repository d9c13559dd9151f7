/// Parser for the canonical bracketed matrix text form, e.g. `[[1,2],[3,4]]`
use std::str::FromStr;

use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{char, multispace0},
    combinator::{all_consuming, map, opt},
    multi::separated_list0,
    number::complete::double,
    sequence::{delimited, pair, preceded, terminated},
    IResult,
};

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Parse the text produced by `Matrix`'s `Display` impl.
///
/// Whitespace between tokens is tolerated. The result is fully populated.
pub fn parse_matrix(input: &str) -> Result<Matrix> {
    let (_, rows) = all_consuming(terminated(parse_rows, multispace0))(input)
        .map_err(|e| MatrixError::Parse(format!("{:?}", e)))?;
    Matrix::from_rows(&rows)
}

fn parse_rows(input: &str) -> IResult<&str, Vec<Vec<f64>>> {
    bracketed(separated_list0(token(','), parse_row))(input)
}

fn parse_row(input: &str) -> IResult<&str, Vec<f64>> {
    bracketed(separated_list0(token(','), parse_value))(input)
}

fn parse_value(input: &str) -> IResult<&str, f64> {
    preceded(multispace0, alt((parse_infinity, double)))(input)
}

// `double` takes `inf` but not a signed `-inf`, which `Display` emits.
fn parse_infinity(input: &str) -> IResult<&str, f64> {
    map(
        pair(
            opt(alt((char('-'), char('+')))),
            alt((tag_no_case("infinity"), tag_no_case("inf"))),
        ),
        |(sign, _)| match sign {
            Some('-') => f64::NEG_INFINITY,
            _ => f64::INFINITY,
        },
    )(input)
}

fn bracketed<'a, O>(
    inner: impl FnMut(&'a str) -> IResult<&'a str, O>,
) -> impl FnMut(&'a str) -> IResult<&'a str, O> {
    delimited(token('['), inner, token(']'))
}

fn token<'a>(c: char) -> impl FnMut(&'a str) -> IResult<&'a str, char> {
    preceded(multispace0, char(c))
}

impl FromStr for Matrix {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self> {
        parse_matrix(s)
    }
}
