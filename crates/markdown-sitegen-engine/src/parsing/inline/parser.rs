use crate::parsing::ParseError;

use super::{
    cursor::Cursor,
    kinds::{Delimiter, Structure},
    types::InlineSpan,
};

/// A structural construct found in running text, with byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Found<'a> {
    /// Start of the full construct (the `!` or `[`).
    start: usize,
    /// End of the full construct (one past `)`).
    end: usize,
    text: &'a str,
    url: &'a str,
}

/// Tokenizes inline content into a sequence of [`InlineSpan`]s.
///
/// Images are extracted first, then links, then the bold, italic and code
/// delimiter passes run over whatever is still plain.
///
/// # Errors
/// [`ParseError::UnmatchedDelimiter`] if any plain run holds an odd number
/// of one delimiter. Nothing is returned in that case.
pub fn tokenize(text: &str) -> Result<Vec<InlineSpan>, ParseError> {
    if text.is_empty() {
        return Ok(vec![]);
    }
    let mut spans = vec![InlineSpan::plain(text)];
    spans = split_images(spans);
    spans = split_links(spans);
    for delimiter in Delimiter::ORDER {
        spans = split_delimiter(spans, delimiter)?;
    }
    Ok(spans)
}

/// Returns `(alt, url)` for every image in `text`, left to right.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    find_all(text, Structure::Image)
        .into_iter()
        .map(|f| (f.text.to_string(), f.url.to_string()))
        .collect()
}

/// Returns `(anchor, url)` for every link in `text`, left to right.
///
/// A `[` directly after `!` never starts a link.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    find_all(text, Structure::Link)
        .into_iter()
        .map(|f| (f.text.to_string(), f.url.to_string()))
        .collect()
}

/// Cuts images out of every plain span.
pub fn split_images(spans: Vec<InlineSpan>) -> Vec<InlineSpan> {
    split_structure(spans, Structure::Image)
}

/// Cuts links out of every plain span.
pub fn split_links(spans: Vec<InlineSpan>) -> Vec<InlineSpan> {
    split_structure(spans, Structure::Link)
}

/// Splits every plain span on `delimiter`, alternating plain and styled
/// segments starting with plain.
///
/// Empty segments are dropped but still count toward the alternation, so
/// `**a****b**` yields two bold spans.
///
/// # Errors
/// [`ParseError::UnmatchedDelimiter`] if a plain span holds an odd number
/// of delimiters.
pub fn split_delimiter(
    spans: Vec<InlineSpan>,
    delimiter: Delimiter,
) -> Result<Vec<InlineSpan>, ParseError> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        let text = match span {
            InlineSpan::Plain(text) => text,
            other => {
                out.push(other);
                continue;
            }
        };
        let parts: Vec<&str> = text.split(delimiter.token()).collect();
        if parts.len() % 2 == 0 {
            return Err(ParseError::UnmatchedDelimiter {
                delimiter: delimiter.token(),
                text: text.clone(),
            });
        }
        for (i, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(InlineSpan::plain(part));
            } else {
                out.push(delimiter.span(part));
            }
        }
    }
    Ok(out)
}

fn split_structure(spans: Vec<InlineSpan>, structure: Structure) -> Vec<InlineSpan> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        let text = match span {
            InlineSpan::Plain(text) => text,
            other => {
                out.push(other);
                continue;
            }
        };
        let mut rest_start = 0;
        for f in find_all(&text, structure) {
            if f.start > rest_start {
                out.push(InlineSpan::plain(&text[rest_start..f.start]));
            }
            out.push(match structure {
                Structure::Image => InlineSpan::Image {
                    alt: f.text.to_string(),
                    url: f.url.to_string(),
                },
                Structure::Link => InlineSpan::Link {
                    text: f.text.to_string(),
                    url: f.url.to_string(),
                },
            });
            rest_start = f.end;
        }
        if rest_start < text.len() {
            out.push(InlineSpan::plain(&text[rest_start..]));
        }
    }
    out
}

/// Scans `s` left to right for non-overlapping occurrences of `structure`.
fn find_all(s: &str, structure: Structure) -> Vec<Found<'_>> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    while !cur.eof() {
        if let Some(found) = try_parse_structure(&mut cur, structure) {
            out.push(found);
            continue;
        }
        cur.bump();
    }
    out
}

/// Attempts to parse `structure` at the current position.
///
/// Returns `None` if the opener is absent or the construct isn't closed.
/// On failure, cursor position is restored.
fn try_parse_structure<'a>(cur: &mut Cursor<'a>, structure: Structure) -> Option<Found<'a>> {
    if !cur.starts_with(structure.open()) {
        return None;
    }
    if structure == Structure::Link && cur.prev() == Some(Structure::BANG) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(structure.open().len());

    let parsed = scan_until(cur, Structure::TEXT_CLOSE, Structure::TEXT_OPEN).and_then(|text| {
        cur.bump(); // ]
        if cur.peek() != Some(Structure::URL_OPEN) {
            return None;
        }
        cur.bump(); // (
        let url = scan_until(cur, Structure::URL_CLOSE, Structure::URL_OPEN)?;
        cur.bump(); // )
        Some((text, url))
    });

    match parsed {
        Some((text, url)) => Some(Found {
            start,
            end: cur.pos(),
            text,
            url,
        }),
        None => {
            *cur = saved;
            None
        }
    }
}

/// Consumes bytes up to (not including) `close`, returning the slice.
///
/// Fails on end of input or on a nested `reject` (the matching opener).
fn scan_until<'a>(cur: &mut Cursor<'a>, close: u8, reject: u8) -> Option<&'a str> {
    let inner_start = cur.pos();
    loop {
        match cur.peek() {
            None => return None,
            Some(b) if b == reject => return None,
            Some(b) if b == close => return Some(cur.slice(inner_start, cur.pos())),
            Some(_) => {
                cur.bump();
            }
        }
    }
}
