//! Inline emphasis tokenizer.
//!
//! Splits a line into styled segments. At every scan position the markers
//! are tried in a fixed order: `***x***`, `**x**`, `*x*`, `__x__`, `_x_`,
//! then a literal run free of `*` and `_`. Marker content may not contain the
//! marker character and must be non-empty. A position where nothing matches
//! is skipped; skipped characters are emitted verbatim as a `Normal` segment
//! in front of the next match, so unterminated markers survive as text.
//!
//! Nested or overlapping emphasis is not supported.

use resolutio_style::TextStyle;
use serde::Serialize;
use std::ops::Range;

/// A run of text with a single style.
///
/// `span` is the byte range of the source the segment was produced from,
/// markers included. The spans of one tokenization are contiguous and cover
/// the whole input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledSegment {
    pub content: String,
    pub style: TextStyle,
    #[serde(skip)]
    pub span: Range<usize>,
}

impl StyledSegment {
    pub fn new(content: impl Into<String>, style: TextStyle, span: Range<usize>) -> Self {
        Self {
            content: content.into(),
            style,
            span,
        }
    }

    /// A segment that is not tied to a tokenized source.
    pub fn plain(content: impl Into<String>) -> Self {
        let content = content.into();
        let span = 0..content.len();
        Self::new(content, TextStyle::Normal, span)
    }
}

/// One successful match at a scan position.
#[derive(Debug, PartialEq, Eq)]
enum Token {
    Emphasis { content: Range<usize>, style: TextStyle, end: usize },
    Literal { end: usize },
}

const ALTERNATIVES: [(&str, char, TextStyle); 5] = [
    ("***", '*', TextStyle::BoldItalic),
    ("**", '*', TextStyle::Bold),
    ("*", '*', TextStyle::Italic),
    ("__", '_', TextStyle::Bold),
    ("_", '_', TextStyle::Italic),
];

fn is_marker(c: char) -> bool {
    c == '*' || c == '_'
}

/// Tries the delimited form `delim content delim` at `pos`.
fn match_delimited(input: &str, pos: usize, delim: &str, marker: char) -> Option<(Range<usize>, usize)> {
    let rest = &input[pos..];
    if !rest.starts_with(delim) {
        return None;
    }
    let content_start = pos + delim.len();
    let close = content_start + input[content_start..].find(marker)?;
    if close == content_start || !input[close..].starts_with(delim) {
        return None;
    }
    Some((content_start..close, close + delim.len()))
}

fn match_at(input: &str, pos: usize) -> Option<Token> {
    for (delim, marker, style) in ALTERNATIVES {
        if let Some((content, end)) = match_delimited(input, pos, delim, marker) {
            return Some(Token::Emphasis { content, style, end });
        }
    }
    let literal_len = input[pos..]
        .find(is_marker)
        .unwrap_or(input.len() - pos);
    (literal_len > 0).then_some(Token::Literal { end: pos + literal_len })
}

/// Splits `input` into styled segments. Empty input yields no segments.
pub fn tokenize(input: &str) -> Vec<StyledSegment> {
    let mut segments = Vec::new();
    let mut last = 0;
    let mut pos = 0;

    while pos < input.len() {
        let Some(token) = match_at(input, pos) else {
            pos += input[pos..].chars().next().map_or(1, char::len_utf8);
            continue;
        };

        if pos > last {
            segments.push(StyledSegment::new(&input[last..pos], TextStyle::Normal, last..pos));
        }

        let end = match token {
            Token::Emphasis { content, style, end } => {
                segments.push(StyledSegment::new(&input[content], style, pos..end));
                end
            }
            Token::Literal { end } => {
                segments.push(StyledSegment::new(&input[pos..end], TextStyle::Normal, pos..end));
                end
            }
        };
        last = end;
        pos = end;
    }

    if last < input.len() {
        segments.push(StyledSegment::new(&input[last..], TextStyle::Normal, last..input.len()));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use TextStyle::*;

    fn styles(input: &str) -> Vec<TextStyle> {
        tokenize(input).iter().map(|s| s.style).collect()
    }

    fn contents(input: &str) -> Vec<String> {
        tokenize(input).into_iter().map(|s| s.content).collect()
    }

    #[test]
    fn test_precedence_order() {
        let input = "***a*** **b** *c* __d__ _e_";
        assert_eq!(
            styles(input),
            vec![BoldItalic, Normal, Bold, Normal, Italic, Normal, Bold, Normal, Italic]
        );
        assert_eq!(contents(input), vec!["a", " ", "b", " ", "c", " ", "d", " ", "e"]);
    }

    #[test]
    fn test_plain_text_is_single_segment() {
        let segs = tokenize("1. beschließt, aktiv befasst zu bleiben.");
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].style, Normal);
        assert_eq!(segs[0].content, "1. beschließt, aktiv befasst zu bleiben.");
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_unterminated_markers_stay_literal() {
        let segs = tokenize("**a");
        assert_eq!(contents("**a"), vec!["**", "a"]);
        assert!(segs.iter().all(|s| s.style == Normal));

        assert_eq!(contents("a * b"), vec!["a ", "*", " b"]);
        assert_eq!(contents("x_"), vec!["x", "_"]);
    }

    #[test]
    fn test_empty_marker_content_is_skipped_over() {
        // "**" cannot close an empty bold, so the scan moves on and the
        // first star becomes literal text.
        let segs = tokenize("***a**");
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0], StyledSegment::new("*", Normal, 0..1));
        assert_eq!(segs[1], StyledSegment::new("a", Bold, 1..6));
    }

    #[test]
    fn test_empty_emphasis_is_literal() {
        assert_eq!(tokenize("****"), vec![StyledSegment::new("****", Normal, 0..4)]);
    }

    #[test]
    fn test_underscore_content_may_contain_stars() {
        assert_eq!(tokenize("__a*b__"), vec![StyledSegment::new("a*b", Bold, 0..7)]);
    }

    #[test]
    fn test_snake_case_is_a_known_simplification() {
        assert_eq!(contents("snake_case_name"), vec!["snake", "case", "name"]);
        assert_eq!(styles("snake_case_name"), vec![Normal, Italic, Normal]);
    }

    #[test]
    fn test_spans_cover_input() {
        for input in [
            "***a*** **b** *c* __d__ _e_",
            "**unter Hinweis** auf seine früheren Resolutionen,",
            "*betonend*, dass Frieden **und",
            "a*b_c**d__e***",
            "ä_ö_ü ** ß",
            "",
        ] {
            let segs = tokenize(input);
            let mut expected = 0;
            for seg in &segs {
                assert_eq!(seg.span.start, expected, "gap before {:?} in {:?}", seg, input);
                expected = seg.span.end;
            }
            assert_eq!(expected, input.len());
            let rebuilt: String = segs.iter().map(|s| &input[s.span.clone()]).collect();
            assert_eq!(rebuilt, input);
        }
    }

    #[test]
    fn test_marker_free_text_round_trips_exactly() {
        let input = "Kapazitätsaufbau für Sicherheitskräfte (2017), 90 Tagen.";
        let rebuilt: String = contents(input).concat();
        assert_eq!(rebuilt, input);
    }

    #[test]
    fn test_multibyte_skip() {
        assert_eq!(contents("*ü"), vec!["*", "ü"]);
    }
}
