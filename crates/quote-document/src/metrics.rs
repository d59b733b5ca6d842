//! Text measurement for the standard Helvetica faces.
//!
//! Widths are the Adobe AFM advance widths (1/1000 em) for the printable
//! ASCII range. Oblique shares the regular widths. Accented Latin letters are
//! measured as their base letter; anything else falls back to the width of a
//! digit.

use crate::backend::FontStyle;

/// Points per millimetre.
pub const PT_PER_MM: f32 = 72.0 / 25.4;

const FALLBACK_WIDTH: u16 = 556;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    278, 278, 584, 584, 584, 556, 1015,
    // A-Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    278, 278, 278, 469, 556, 333,
    // a-z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // { | } ~
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

fn base_letter(ch: char) -> char {
    match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'È' | 'É' | 'Ê' | 'Ë' => 'E',
        'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
        'ç' => 'c',
        'Ç' => 'C',
        'ñ' => 'n',
        'Ñ' => 'N',
        '\u{a0}' => ' ',
        other => other,
    }
}

/// Advance width of `ch` in 1/1000 em.
pub fn char_width(ch: char, style: FontStyle) -> u16 {
    let table = match style {
        FontStyle::Bold => &HELVETICA_BOLD,
        FontStyle::Normal | FontStyle::Italic => &HELVETICA,
    };
    let code = base_letter(ch) as u32;
    if (32..=126).contains(&code) {
        table[(code - 32) as usize]
    } else {
        FALLBACK_WIDTH
    }
}

/// Width of `text` in millimetres at `size` points.
pub fn text_width(text: &str, style: FontStyle, size: f32) -> f32 {
    let units: u32 = text.chars().map(|ch| u32::from(char_width(ch, style))).sum();
    units as f32 / 1000.0 * size / PT_PER_MM
}

/// Greedy word wrap to `max_width` millimetres.
///
/// ## Rules
/// - Explicit newlines always break
/// - Words are separated by single spaces on output
/// - A word wider than the line on its own is split between characters
/// - Always returns at least one (possibly empty) line
pub fn split_text_to_size(text: &str, style: FontStyle, size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0.0_f32;
        let space = text_width(" ", style, size);
        let mut paragraph_lines = Vec::new();

        for word in paragraph.split_whitespace() {
            let word_width = text_width(word, style, size);

            if word_width > max_width {
                if !current.is_empty() {
                    paragraph_lines.push(std::mem::take(&mut current));
                }
                let mut pieces = break_word(word, style, size, max_width);
                // Keep the tail open so following words can join it.
                let tail = pieces.pop().unwrap_or_default();
                paragraph_lines.extend(pieces);
                current_width = text_width(&tail, style, size);
                current = tail;
                continue;
            }

            if current.is_empty() {
                current.push_str(word);
                current_width = word_width;
            } else if current_width + space + word_width <= max_width {
                current.push(' ');
                current.push_str(word);
                current_width += space + word_width;
            } else {
                paragraph_lines.push(std::mem::replace(&mut current, word.to_string()));
                current_width = word_width;
            }
        }

        if !current.is_empty() || paragraph_lines.is_empty() {
            paragraph_lines.push(current);
        }
        lines.extend(paragraph_lines);
    }

    lines
}

fn break_word(word: &str, style: FontStyle, size: f32, max_width: f32) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut width = 0.0_f32;

    for ch in word.chars() {
        let ch_width = u32::from(char_width(ch, style)) as f32 / 1000.0 * size / PT_PER_MM;
        if !piece.is_empty() && width + ch_width > max_width {
            pieces.push(std::mem::take(&mut piece));
            width = 0.0;
        }
        piece.push(ch);
        width += ch_width;
    }
    pieces.push(piece);
    pieces
}
