use nom_locate::LocatedSpan;

use crate::error::{Error, ErrorKind};

pub type Span<'a> = LocatedSpan<&'a str>;

pub type IResult<'a, O> = nom::IResult<Span<'a>, O, ParseError<'a>>;

#[derive(Debug, PartialEq)]
pub struct ParseError<'a> {
    message: String,
    wherein: Span<'a>,
}

impl<'a> ParseError<'a> {
    pub fn new(message: String, wherein: Span<'a>) -> Self {
        Self { message, wherein }
    }

    pub fn partial(wherein: &'static str, expected: &'static str, input: Span<'a>) -> Self {
        Self::new(format!("{}: expected {}", wherein, expected), input)
    }

    pub fn offset(&self) -> usize {
        self.wherein.location_offset()
    }
}

impl<'a> nom::error::ParseError<Span<'a>> for ParseError<'a> {
    fn from_error_kind(input: Span<'a>, kind: nom::error::ErrorKind) -> Self {
        Self::new(format!("parse error {:?}", kind), input)
    }

    fn append(_input: Span<'a>, _kind: nom::error::ErrorKind, other: Self) -> Self {
        other
    }

    fn from_char(input: Span<'a>, c: char) -> Self {
        Self::new(format!("expected '{}'", c), input)
    }
}

impl<'a> From<nom::Err<ParseError<'a>>> for ParseError<'a> {
    fn from(err: nom::Err<ParseError<'a>>) -> Self {
        match err {
            nom::Err::Error(e) | nom::Err::Failure(e) => e,
            nom::Err::Incomplete(_) => unreachable!(),
        }
    }
}

impl<'a> From<ParseError<'a>> for Error {
    fn from(err: ParseError<'a>) -> Self {
        let unexpected = match *err.wherein.fragment() {
            "" => String::from("EOF"),
            rest => format!("\"{}\"", rest),
        };
        Error::new(
            ErrorKind::Parse,
            &format!(
                "{} at offset {} (unexpected {})",
                err.message,
                err.offset(),
                unexpected
            ),
        )
    }
}
