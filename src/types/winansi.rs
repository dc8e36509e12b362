/// Encodes `text` for the standard Type1 fonts, which are registered with WinAnsiEncoding.
///
/// Tabs and line breaks collapse to a space. Other control characters and characters WinAnsi
/// lacks become `?`.
pub fn encode(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch {
            '\t' | '\n' | '\r' => b' ',
            ch if ch.is_control() => b'?',
            ' '..='~' | '\u{a0}'..='\u{ff}' => ch as u8,
            ch => windows_1252(ch).unwrap_or(b'?'),
        })
        .collect()
}

// the 0x80..0x9f block, where WinAnsi departs from Latin-1
fn windows_1252(ch: char) -> Option<u8> {
    let byte = match ch {
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8a,
        '‹' => 0x8b,
        'Œ' => 0x8c,
        'Ž' => 0x8e,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9a,
        '›' => 0x9b,
        'œ' => 0x9c,
        'ž' => 0x9e,
        'Ÿ' => 0x9f,
        _ => return None,
    };

    Some(byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_passes_through() {
        assert_eq!(encode("Total: 10.00"), b"Total: 10.00".to_vec());
    }

    #[test]
    fn latin1_maps_to_single_bytes() {
        assert_eq!(encode("Dirección"), b"Direcci\xf3n".to_vec());
        assert_eq!(encode("Cédula"), b"C\xe9dula".to_vec());
    }

    #[test]
    fn windows_1252_block_is_used() {
        assert_eq!(encode("€5 – ok"), b"\x805 \x96 ok".to_vec());
    }

    #[test]
    fn unsupported_characters_become_question_marks() {
        assert_eq!(encode("日本"), b"??".to_vec());
    }

    #[test]
    fn line_breaks_collapse_to_spaces() {
        assert_eq!(encode("a\nb\tc\r"), b"a b c ".to_vec());
    }

    #[test]
    fn other_control_characters_become_question_marks() {
        assert_eq!(encode("bell\u{7}"), b"bell?".to_vec());
        assert_eq!(encode("c1\u{85}del\u{7f}"), b"c1?del?".to_vec());
    }
}
