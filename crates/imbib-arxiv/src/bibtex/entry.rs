//! Single BibTeX entry model and parser

use nom::{
    bytes::complete::take_while1,
    character::complete::{char, multispace0},
    combinator::{all_consuming, map, opt},
    error::{Error as NomError, ErrorKind},
    multi::separated_list0,
    sequence::{delimited, preceded, separated_pair, terminated, tuple},
    IResult,
};

/// How a field value was delimited in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Braces,
    Quotes,
    Bare,
}

/// A single `name = value` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BibField {
    pub name: String,
    pub value: String,
    pub delimiter: Delimiter,
}

impl BibField {
    /// Value wrapped in its original delimiters
    pub fn delimited_value(&self) -> String {
        match self.delimiter {
            Delimiter::Braces => format!("{{{}}}", self.value),
            Delimiter::Quotes => format!("\"{}\"", self.value),
            Delimiter::Bare => self.value.clone(),
        }
    }
}

/// One parsed `@type{key, ...}` entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BibEntry {
    pub entry_type: String,
    pub cite_key: String,
    pub fields: Vec<BibField>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BibParseError {
    #[error("Invalid BibTeX syntax near {0:?}")]
    InvalidSyntax(String),
}

impl BibEntry {
    /// Parse exactly one entry; surrounding whitespace is allowed, nothing else.
    pub fn parse(input: &str) -> Result<Self, BibParseError> {
        match all_consuming(delimited(multispace0, entry, multispace0))(input) {
            Ok((_, entry)) => Ok(entry),
            Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
                let near: String = e.input.chars().take(24).collect();
                Err(BibParseError::InvalidSyntax(near))
            }
            Err(nom::Err::Incomplete(_)) => Err(BibParseError::InvalidSyntax(String::new())),
        }
    }

    /// Field value by name (case-insensitive)
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(name))
            .map(|f| f.value.as_str())
    }
}

fn entry(input: &str) -> IResult<&str, BibEntry> {
    let (input, (entry_type, cite_key, fields)) = tuple((
        preceded(char('@'), name),
        preceded(
            tuple((multispace0, char('{'), multispace0)),
            take_while1(|c: char| c != ',' && c != '}' && !c.is_whitespace()),
        ),
        delimited(
            tuple((multispace0, char(','))),
            separated_list0(char(','), field),
            tuple((opt(char(',')), multispace0, char('}'))),
        ),
    ))(input)?;

    Ok((
        input,
        BibEntry {
            entry_type: entry_type.to_string(),
            cite_key: cite_key.to_string(),
            fields,
        },
    ))
}

fn name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || "_-:.+/".contains(c))(input)
}

fn field(input: &str) -> IResult<&str, BibField> {
    map(
        terminated(
            separated_pair(
                preceded(multispace0, name),
                tuple((multispace0, char('='), multispace0)),
                value,
            ),
            multispace0,
        ),
        |(name, (value, delimiter))| BibField {
            name: name.to_string(),
            value: value.to_string(),
            delimiter,
        },
    )(input)
}

fn value(input: &str) -> IResult<&str, (&str, Delimiter)> {
    if input.starts_with('{') {
        map(braced, |v| (v, Delimiter::Braces))(input)
    } else if input.starts_with('"') {
        map(quoted, |v| (v, Delimiter::Quotes))(input)
    } else {
        map(take_while1(|c: char| c.is_alphanumeric()), |v| {
            (v, Delimiter::Bare)
        })(input)
    }
}

/// Content of a balanced `{...}` group; `\{` and `\}` do not count
fn braced(input: &str) -> IResult<&str, &str> {
    let (body, _) = char('{')(input)?;
    let mut depth = 1usize;
    let mut escaped = false;

    for (i, c) in body.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok((&body[i + 1..], &body[..i]));
                }
            }
            _ => {}
        }
    }

    Err(nom::Err::Error(NomError::new(input, ErrorKind::Char)))
}

/// Content of a `"..."` value; quotes inside braces do not terminate it
fn quoted(input: &str) -> IResult<&str, &str> {
    let (body, _) = char('"')(input)?;
    let mut depth = 0usize;

    for (i, c) in body.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            '"' if depth == 0 => return Ok((&body[i + 1..], &body[..i])),
            _ => {}
        }
    }

    Err(nom::Err::Error(NomError::new(input, ErrorKind::Char)))
}
