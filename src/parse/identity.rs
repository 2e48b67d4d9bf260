use nom::{
    branch::alt,
    bytes::complete::is_not,
    character::complete::{anychar, char as nom_char},
    combinator::{all_consuming, map, opt},
    multi::{many0, separated_list0},
    sequence::{delimited, preceded, separated_pair},
};

use super::common::{label_identifier, maybe_lpadded, maybe_padded, metric_identifier};
use super::result::{IResult, ParseError, Span};
use crate::error::Result;
use crate::model::{Identity, LabelName, LabelValue, Labels};

/// Parses a full exposition key such as `name{label="value",}` into its parts.
pub fn parse_identity(input: &str) -> Result<Identity> {
    let (_, identity) = all_consuming(identity)(Span::new(input)).map_err(ParseError::from)?;
    Ok(identity)
}

pub fn identity(input: Span) -> IResult<Identity> {
    let (rest, name) = metric_identifier(input)?;
    let (rest, pairs) = opt(label_set)(rest)?;

    let mut labels = Labels::new();
    for (label, value) in pairs.unwrap_or_default() {
        labels.insert(label, value);
    }

    Ok((rest, Identity::new(name, labels)))
}

// '{' '}' | '{' label_pair (',' label_pair)* [','] '}'
fn label_set(input: Span) -> IResult<Vec<(LabelName, LabelValue)>> {
    let (rest, _) = nom_char('{')(input)?;
    let (rest, pairs) = separated_list0(nom_char(','), maybe_padded(label_pair))(rest)?;

    // The JVM exporter terminates every pair with a comma.
    let rest = if pairs.is_empty() {
        rest
    } else {
        opt(maybe_lpadded(nom_char(',')))(rest)?.0
    };

    match maybe_lpadded(nom_char('}'))(rest) {
        Ok((rest, _)) => Ok((rest, pairs)),
        Err(_) => Err(nom::Err::Failure(ParseError::partial(
            "label set",
            "',' or '}' after label=\"value\"",
            rest,
        ))),
    }
}

fn label_pair(input: Span) -> IResult<(LabelName, LabelValue)> {
    separated_pair(label_identifier, maybe_padded(nom_char('=')), label_value)(input)
}

fn label_value(input: Span) -> IResult<LabelValue> {
    let (rest, chunks) = delimited(
        nom_char('"'),
        many0(alt((
            map(is_not("\\\""), |s: Span| s.fragment().to_string()),
            map(preceded(nom_char('\\'), anychar), |c: char| match c {
                'n' => String::from("\n"),
                c => c.to_string(),
            }),
        ))),
        nom_char('"'),
    )(input)?;
    Ok((rest, chunks.concat()))
}
