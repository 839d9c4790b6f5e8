use winnow::ascii::multispace0;
use winnow::combinator::{alt, opt};
use winnow::prelude::*;
use winnow::token::{literal, take_while};

// ---------------------------------------------------------------------------
// Marker arguments: `#[cwr(start = 3, len = 2, title = "Sender ID")]`
// ---------------------------------------------------------------------------

/// The recognized arguments of one `#[cwr(...)]` marker.
///
/// All keys are optional and order-independent. Keys the scanner does not
/// care about (`len`, `codes`, `test_data`, ...) are consumed and dropped.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MarkerArgs {
    pub start: Option<u32>,
    pub min_version: Option<String>,
    pub title: Option<String>,
}

/// Parse the argument list out of a joined marker string.
///
/// Tolerant by design: parsing stops quietly at the first fragment that is
/// not a `key = value` pair, keeping whatever was recognized so far. A
/// malformed or unterminated marker therefore yields defaults instead of an
/// error.
pub fn parse_marker_args(marker: &str) -> MarkerArgs {
    let mut args = MarkerArgs::default();

    let Some(open) = marker.find("cwr(") else {
        return args;
    };
    let mut rest = &marker[open + "cwr(".len()..];

    loop {
        if arg_sep(&mut rest).is_err() {
            break;
        }
        if rest.is_empty() || rest.starts_with(')') {
            break;
        }
        let Ok((key, value)) = arg_pair(&mut rest) else {
            break;
        };
        match (key, value) {
            ("start", ArgValue::Bare(v)) => {
                if let Ok(n) = v.parse::<u32>() {
                    args.start = Some(n);
                }
            }
            ("min_version", ArgValue::Bare(v)) => {
                if v.chars().all(|c| c.is_ascii_digit() || c == '.') {
                    args.min_version = Some(v.to_string());
                }
            }
            ("title", ArgValue::Quoted(v)) => {
                args.title = Some(v.to_string());
            }
            _ => {}
        }
    }

    args
}

#[derive(Debug, PartialEq, Eq)]
enum ArgValue<'a> {
    /// `"..."` with the quotes removed.
    Quoted(&'a str),
    /// Unquoted token (`3`, `2.1`) or a bracketed list taken whole.
    Bare(&'a str),
}

/// Skip whitespace and at most one argument separator comma.
fn arg_sep(input: &mut &str) -> ModalResult<()> {
    let _ = multispace0.parse_next(input)?;
    if opt(literal(",")).parse_next(input)?.is_some() {
        let _ = multispace0.parse_next(input)?;
    }
    Ok(())
}

fn arg_pair<'a>(input: &mut &'a str) -> ModalResult<(&'a str, ArgValue<'a>)> {
    let key = ident.parse_next(input)?;
    let _ = multispace0.parse_next(input)?;
    literal("=").parse_next(input)?;
    let _ = multispace0.parse_next(input)?;
    let value = arg_value.parse_next(input)?;
    Ok((key, value))
}

fn ident<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    take_while(1.., |c: char| c.is_alphanumeric() || c == '_').parse_next(input)
}

fn arg_value<'a>(input: &mut &'a str) -> ModalResult<ArgValue<'a>> {
    alt((
        quoted_string.map(ArgValue::Quoted),
        bracket_list.map(ArgValue::Bare),
        bare_token.map(ArgValue::Bare),
    ))
    .parse_next(input)
}

/// `"..."`; titles and test data never contain escaped quotes.
fn quoted_string<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    literal("\"").parse_next(input)?;
    let s = take_while(0.., |c: char| c != '"').parse_next(input)?;
    literal("\"").parse_next(input)?;
    Ok(s)
}

/// `[ ... ]` taken as one opaque token; the commas inside must not be
/// mistaken for argument separators.
fn bracket_list<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    literal("[").parse_next(input)?;
    let body = take_while(0.., |c: char| c != ']').parse_next(input)?;
    literal("]").parse_next(input)?;
    Ok(body)
}

/// Unquoted value: everything up to the next comma or closing paren.
fn bare_token<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    take_while(1.., |c: char| c != ',' && c != ')')
        .parse_next(input)
        .map(str::trim_end)
}

// ---------------------------------------------------------------------------
// Field declaration: `pub sender_id: String,`
// ---------------------------------------------------------------------------

/// Cheap pre-check used by the lookahead window: a declaration candidate
/// starts with `pub ` and carries a name/type separator.
pub fn is_field_decl(line: &str) -> bool {
    line.starts_with("pub ") && line.contains(':')
}

/// Parse a field declaration line into (name, raw type expression).
///
/// The type expression runs to the first `,`, `}`, or end of line; trailing
/// separators and whitespace are trimmed. Lines that pass [`is_field_decl`]
/// but are not actually field declarations (`pub struct Foo: ...` cannot
/// occur, but `pub fn x(a: u8)` could) fall out as `None`.
pub fn parse_field_decl(line: &str) -> Option<(String, String)> {
    let mut rest = line;
    field_decl(&mut rest).ok()
}

fn field_decl(input: &mut &str) -> ModalResult<(String, String)> {
    literal("pub").parse_next(input)?;
    let _ = take_while(1.., |c: char| c == ' ' || c == '\t').parse_next(input)?;
    let name = ident.parse_next(input)?;
    let _ = multispace0.parse_next(input)?;
    literal(":").parse_next(input)?;
    let _ = multispace0.parse_next(input)?;
    let raw_type =
        take_while(1.., |c: char| c != ',' && c != '}' && c != '\n').parse_next(input)?;
    Ok((name.to_string(), raw_type.trim().to_string()))
}

// ---------------------------------------------------------------------------
// Type normalization
// ---------------------------------------------------------------------------

/// Strip at most one outer `Option<...>` wrapper, then at most one outer
/// `Vec<...>` wrapper. Anything else passes through verbatim, so
/// `Option<Vec<u8>>` becomes `u8` while deeper nesting is left as-is.
pub fn normalize_type(raw: &str) -> String {
    let t = strip_wrapper(raw.trim(), "Option");
    let t = strip_wrapper(t, "Vec");
    t.trim().to_string()
}

fn strip_wrapper<'a>(ty: &'a str, name: &str) -> &'a str {
    ty.strip_prefix(name)
        .and_then(|r| r.strip_prefix('<'))
        .and_then(|r| r.strip_suffix('>'))
        .unwrap_or(ty)
}
