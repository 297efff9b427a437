//! WinAnsiEncoding for the standard Type1 faces.

/// Code points WinAnsi places in 0x80..=0x9F.
const HIGH_CONTROL_RANGE: [(char, u8); 11] = [
    ('€', 0x80),
    ('‚', 0x82),
    ('„', 0x84),
    ('…', 0x85),
    ('‘', 0x91),
    ('’', 0x92),
    ('“', 0x93),
    ('”', 0x94),
    ('•', 0x95),
    ('–', 0x96),
    ('—', 0x97),
];

/// Encodes `text` for a WinAnsi font. Characters outside the encoding become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(encode_char).collect()
}

fn encode_char(ch: char) -> u8 {
    match ch as u32 {
        0x20..=0x7E | 0xA0..=0xFF => ch as u32 as u8,
        _ => HIGH_CONTROL_RANGE
            .iter()
            .find(|(c, _)| *c == ch)
            .map_or(b'?', |(_, byte)| *byte),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin1_passes_through() {
        assert_eq!(encode_win_ansi("Grüße"), vec![b'G', b'r', 0xFC, 0xDF, b'e']);
    }

    #[test]
    fn test_typographic_marks() {
        assert_eq!(encode_win_ansi("• – „x“"), vec![0x95, b' ', 0x96, b' ', 0x84, b'x', 0x93]);
    }

    #[test]
    fn test_unmappable_characters() {
        assert_eq!(encode_win_ansi("a→b\u{0085}"), b"a?b?".to_vec());
    }
}
