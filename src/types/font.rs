use crate::traits::FontType;

// AFM advance widths for the printable ASCII range, starting at the space character
const FIRST_CHAR: u32 = 32;

const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    278, 278, 584, 584, 584, 556, 1015,
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    278, 278, 278, 469, 556, 333,
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    334, 260, 334, 584,
];

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

// used for anything outside the table after folding accents away
const DEFAULT_WIDTH: u16 = 556;

/// Helvetica metrics. Oblique shares the upright widths.
#[derive(Debug, Clone, Copy)]
pub struct Font {
    normal: &'static [u16; 95],
    bold: &'static [u16; 95],
}

impl Font {
    fn lookup(table: &[u16; 95], ch: char) -> u16 {
        let ch = base_letter(ch);

        (ch as u32)
            .checked_sub(FIRST_CHAR)
            .and_then(|index| table.get(index as usize))
            .copied()
            .unwrap_or(DEFAULT_WIDTH)
    }
}

impl FontType for Font {
    fn new() -> Self {
        Font {
            normal: &HELVETICA,
            bold: &HELVETICA_BOLD,
        }
    }

    fn normal(&self, ch: &char, font_size: f32) -> f32 {
        Font::standardize(Font::lookup(self.normal, *ch) as f32, font_size)
    }

    fn bold(&self, ch: &char, font_size: f32) -> f32 {
        Font::standardize(Font::lookup(self.bold, *ch) as f32, font_size)
    }

    fn oblique(&self, ch: &char, font_size: f32) -> f32 {
        self.normal(ch, font_size)
    }

    fn standardize(width: f32, font_size: f32) -> f32 {
        width * font_size / 1000.0
    }
}

/// accented Latin-1 letters take the width of their unaccented letter
fn base_letter(ch: char) -> char {
    match ch {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'Á' | 'À' | 'Â' | 'Ä' | 'Ã' | 'Å' => 'A',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'Ó' | 'Ò' | 'Ô' | 'Ö' | 'Õ' => 'O',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ç' => 'c',
        'Ç' => 'C',
        _ => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Style;

    #[test]
    fn digits_share_one_width() {
        let font = Font::new();
        let widths: Vec<f32> = "0123456789".chars().map(|ch| font.normal(&ch, 10.0)).collect();

        assert!(widths.iter().all(|width| (*width - 5.56).abs() < 1e-4));
    }

    #[test]
    fn bold_is_wider_for_lowercase() {
        let font = Font::new();

        assert!(font.bold(&'b', 9.0) > font.normal(&'b', 9.0));
        assert_eq!(font.oblique(&'b', 9.0), font.normal(&'b', 9.0));
    }

    #[test]
    fn accented_letters_fold_to_base_width() {
        let font = Font::new();

        assert_eq!(font.normal(&'ó', 12.0), font.normal(&'o', 12.0));
        assert_eq!(font.bold(&'Ñ', 12.0), font.bold(&'N', 12.0));
    }

    #[test]
    fn text_width_sums_characters() {
        let font = Font::new();
        // "10.00" = 4 digits at 556 + period at 278
        let expected = (4.0 * 556.0 + 278.0) * 9.0 / 1000.0;

        assert!((font.text_width("10.00", &Style::Normal, 9.0) - expected).abs() < 1e-4);
    }

    #[test]
    fn unknown_characters_use_default_width() {
        let font = Font::new();

        assert!((font.normal(&'€', 10.0) - 5.56).abs() < 1e-4);
    }
}
