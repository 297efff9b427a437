//! Plain-text helpers for the block types that do not keep inline styling.

use resolutio_traits::Surface;

/// Greedy word split on single spaces, measured in the surface's active font.
///
/// A word that alone exceeds `max_width` gets a line of its own.
pub fn split_text_to_lines<S: Surface + ?Sized>(surface: &S, text: &str, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split(' ') {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if surface.active_text_width(&candidate) > max_width && !current.is_empty() {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current = candidate;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Splits `text` at the space closest to its character midpoint.
///
/// Candidates are the last space at or before the midpoint and the first
/// space after it; on equal distance the earlier one wins. Without any
/// space the whole text goes on the first line.
pub fn split_into_two_lines(text: &str) -> (String, String) {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return (String::new(), String::new());
    }
    let middle = chars.len() / 2;

    let before = chars[..=middle.min(chars.len() - 1)]
        .iter()
        .rposition(|&c| c == ' ');
    let after = chars
        .iter()
        .skip(middle + 1)
        .position(|&c| c == ' ')
        .map(|i| i + middle + 1);

    let break_point = match (before, after) {
        (None, None) => return (text.to_string(), String::new()),
        (Some(b), None) => b,
        (None, Some(a)) => a,
        (Some(b), Some(a)) => {
            if middle - b <= a - middle {
                b
            } else {
                a
            }
        }
    };

    let first: String = chars[..break_point].iter().collect();
    let second: String = chars[break_point + 1..].iter().collect();
    (first, second)
}

/// Removes `**x**` and then `*x*` emphasis markers, keeping their content.
pub fn strip_emphasis(text: &str) -> String {
    strip_delimited(&strip_delimited(text, "**"), "*")
}

fn strip_delimited(text: &str, delim: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find(delim) {
        let inner_start = open + delim.len();
        let Some(close) = rest[inner_start..].find(delim) else {
            break;
        };
        out.push_str(&rest[..open]);
        out.push_str(&rest[inner_start..inner_start + close]);
        rest = &rest[inner_start + close + delim.len()..];
    }
    out.push_str(rest);
    out
}
