//! Token-level grammar for the rgb and hsl textual forms.
//!
//! The two forms share one shape: an optional case-insensitive keyword,
//! each parenthesis independently optional, and three integer components
//! separated by commas and/or whitespace. Saturation and lightness accept
//! an optional `%` suffix. The component combinators return raw `i64`
//! values; range checking happens in [`crate::parser`] so that an
//! out-of-range component is reported as such rather than as a syntax
//! error.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{char, digit1, multispace0, multispace1},
    combinator::{opt, recognize},
    sequence::{pair, terminated, tuple},
};

/// A signed decimal integer token.
fn integer(input: &str) -> IResult<&str, i64> {
    let (rest, raw) = recognize(pair(opt(char('-')), digit1))(input)?;
    match raw.parse::<i64>() {
        Ok(value) => Ok((rest, value)),
        Err(_) => Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Digit,
        ))),
    }
}

/// An integer with an optional `%` suffix.
fn percentage(input: &str) -> IResult<&str, i64> {
    terminated(integer, opt(char('%')))(input)
}

/// The separator between two components: a comma (optionally surrounded
/// by whitespace) or at least one whitespace character.
fn separator(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(tuple((multispace0, char(','), multispace0))),
        multispace1,
    ))(input)
}

/// The shared prefix: optional keyword, optional opening parenthesis.
fn prefix<'a>(keyword: &'static str, input: &'a str) -> IResult<&'a str, ()> {
    let (input, _) = opt(terminated(tag_no_case(keyword), multispace0))(input)?;
    let (input, _) = opt(terminated(char('('), multispace0))(input)?;
    Ok((input, ()))
}

/// The shared suffix: optional closing parenthesis.
fn suffix(input: &str) -> IResult<&str, ()> {
    let (input, _) = multispace0(input)?;
    let (input, _) = opt(char(')'))(input)?;
    Ok((input, ()))
}

/// `rgb(r, g, b)` or the bare `r g b` triple.
pub(crate) fn rgb_components(input: &str) -> IResult<&str, (i64, i64, i64)> {
    let (input, _) = prefix("rgb", input)?;
    let (input, r) = integer(input)?;
    let (input, _) = separator(input)?;
    let (input, g) = integer(input)?;
    let (input, _) = separator(input)?;
    let (input, b) = integer(input)?;
    let (input, _) = suffix(input)?;
    Ok((input, (r, g, b)))
}

/// `hsl(h, s%, l%)` or the bare `h s l` triple, `%` optional.
pub(crate) fn hsl_components(input: &str) -> IResult<&str, (i64, i64, i64)> {
    let (input, _) = prefix("hsl", input)?;
    let (input, h) = integer(input)?;
    let (input, _) = separator(input)?;
    let (input, s) = percentage(input)?;
    let (input, _) = separator(input)?;
    let (input, l) = percentage(input)?;
    let (input, _) = suffix(input)?;
    Ok((input, (h, s, l)))
}
