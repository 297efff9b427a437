//! Advance widths of the standard Helvetica faces, in 1/1000 em.
//!
//! The oblique faces share the widths of their upright counterparts.

use crate::utils::POINTS_PER_MM;
use resolutio_style::FontSpec;

/// Width used for characters without an entry.
pub const DEFAULT_WIDTH: u16 = 556;

/// Helvetica, ASCII 0x20..=0x7E.
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Helvetica-Bold, ASCII 0x20..=0x7E.
#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Width of one character in 1/1000 em.
pub fn char_width(ch: char, bold: bool) -> u16 {
    let code = ch as u32;
    if (0x20..=0x7E).contains(&code) {
        let index = (code - 0x20) as usize;
        return if bold { HELVETICA_BOLD[index] } else { HELVETICA[index] };
    }
    extended_width(ch, bold)
}

fn extended_width(ch: char, bold: bool) -> u16 {
    match ch {
        '\u{A0}' => 278,
        'ä' | 'à' | 'á' | 'â' | 'ã' | 'å' | 'è' | 'é' | 'ê' | 'ë' => 556,
        'ö' | 'ò' | 'ó' | 'ô' | 'õ' | 'ü' | 'ù' | 'ú' | 'û' | 'ñ' => {
            if bold {
                611
            } else {
                556
            }
        }
        'ì' | 'í' | 'î' | 'ï' => 278,
        'ç' => {
            if bold {
                556
            } else {
                500
            }
        }
        'Ä' | 'À' | 'Á' | 'Â' | 'Ã' | 'Å' => {
            if bold {
                722
            } else {
                667
            }
        }
        'Ö' | 'Ò' | 'Ó' | 'Ô' | 'Õ' => 778,
        'Ü' | 'Ù' | 'Ú' | 'Û' | 'Ç' => 722,
        'É' | 'È' | 'Ê' | 'Ë' => 667,
        'ß' => 611,
        '§' => 556,
        '°' => 400,
        '«' | '»' => 556,
        '©' | '®' => 737,
        '±' | '×' | '÷' => 584,
        '•' => 350,
        '–' | '€' => 556,
        '—' | '…' => 1000,
        '‘' | '’' | '‚' => {
            if bold {
                278
            } else {
                222
            }
        }
        '“' | '”' | '„' => {
            if bold {
                500
            } else {
                333
            }
        }
        _ => DEFAULT_WIDTH,
    }
}

/// Width of `text` set in `font`, in millimetres.
pub fn text_width_mm(text: &str, font: &FontSpec) -> f32 {
    let bold = font.style.is_bold();
    let units: u32 = text.chars().map(|c| u32::from(char_width(c, bold))).sum();
    units as f32 / 1000.0 * font.size / POINTS_PER_MM
}
