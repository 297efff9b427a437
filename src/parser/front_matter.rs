//! The source format is a `---` fenced block of `key: value` lines followed
//! by the markdown body:
//!
//! ```text
//! ---
//! title: Klimaschutz
//! Ausschuss: WUT
//! ---
//! *In Anerkennung* der ...
//! ```

use super::ParseError;
use nom::bytes::complete::{tag, take_until};
use nom::character::complete::char;
use nom::combinator::rest;
use nom::sequence::{delimited, separated_pair};
use nom::{IResult, Parser};
use resolutio_types::{Resolution, ResolutionMetadata};
use std::borrow::Cow;

const FENCE_OPEN: &str = "---\n";
const FENCE_CLOSE: &str = "\n---\n";

fn front_matter_block(input: &str) -> IResult<&str, &str> {
    delimited(tag(FENCE_OPEN), take_until(FENCE_CLOSE), tag(FENCE_CLOSE)).parse(input)
}

/// `key: value`, split at the first colon. The value keeps any later colons.
fn metadata_entry(line: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(take_until(":"), char(':'), rest).parse(line)
}

/// Returns `(front_matter, body)`. Expects `\n` line endings.
pub fn split_front_matter(source: &str) -> Result<(&str, &str), ParseError> {
    let (body, block) =
        front_matter_block(source).map_err(|_| ParseError::MissingFrontMatter)?;
    Ok((block, body))
}

/// Reads the known keys out of a front-matter block.
///
/// Lines without a colon or with an empty key are skipped, as are keys the
/// metadata has no slot for. Missing keys stay empty.
pub fn parse_metadata(block: &str) -> ResolutionMetadata {
    let mut metadata = ResolutionMetadata::default();
    for line in block.split('\n') {
        let Ok((_, (key, value))) = metadata_entry(line) else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        if !metadata.set(key, value.trim()) {
            log::debug!("Ignoring unknown front matter key '{}'", key);
        }
    }
    metadata
}

pub fn parse_resolution(source: &str) -> Result<Resolution, ParseError> {
    let source: Cow<'_, str> = if source.contains("\r\n") {
        Cow::Owned(source.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(source)
    };
    let (block, body) = split_front_matter(&source)?;
    Ok(Resolution {
        metadata: parse_metadata(block),
        content: body.to_string(),
    })
}
