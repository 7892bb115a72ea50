use nom::branch::alt;
use nom::character::complete::{alpha0, char, none_of};
use nom::combinator::recognize;
use nom::multi::many0_count;
use nom::sequence::{delimited, pair};
use nom::IResult;

/// `/body/flags`, returning the raw body and the raw flags
pub fn pattern_literal(i: &str) -> IResult<&str, (&str, &str)> {
    pair(delimited(char('/'), body, char('/')), alpha0)(i)
}

pub fn body(i: &str) -> IResult<&str, &str> {
    recognize(pair(first_char, many0_count(body_char)))(i)
}

// `*` can't open a body: `/*` starts a comment, not a literal
pub fn first_char(i: &str) -> IResult<&str, &str> {
    alt((escape, class, recognize(none_of("*\\/[\n\r"))))(i)
}

pub fn body_char(i: &str) -> IResult<&str, &str> {
    alt((escape, class, recognize(none_of("\\/[\n\r"))))(i)
}

pub fn escape(i: &str) -> IResult<&str, &str> {
    recognize(pair(char('\\'), none_of("\n\r")))(i)
}

/// a character class, where `/` does not close the literal
pub fn class(i: &str) -> IResult<&str, &str> {
    recognize(delimited(
        char('['),
        many0_count(alt((escape, recognize(none_of("]\\\n\r"))))),
        char(']'),
    ))(i)
}
