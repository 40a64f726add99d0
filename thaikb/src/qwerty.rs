//! US QWERTY positions, used to turn typed Latin text into key events

/// Unshifted and shifted characters per evdev keycode
const ROWS: &[(u16, char, char)] = &[
    (41, '`', '~'),
    (2, '1', '!'),
    (3, '2', '@'),
    (4, '3', '#'),
    (5, '4', '$'),
    (6, '5', '%'),
    (7, '6', '^'),
    (8, '7', '&'),
    (9, '8', '*'),
    (10, '9', '('),
    (11, '0', ')'),
    (12, '-', '_'),
    (13, '=', '+'),
    (16, 'q', 'Q'),
    (17, 'w', 'W'),
    (18, 'e', 'E'),
    (19, 'r', 'R'),
    (20, 't', 'T'),
    (21, 'y', 'Y'),
    (22, 'u', 'U'),
    (23, 'i', 'I'),
    (24, 'o', 'O'),
    (25, 'p', 'P'),
    (26, '[', '{'),
    (27, ']', '}'),
    (43, '\\', '|'),
    (30, 'a', 'A'),
    (31, 's', 'S'),
    (32, 'd', 'D'),
    (33, 'f', 'F'),
    (34, 'g', 'G'),
    (35, 'h', 'H'),
    (36, 'j', 'J'),
    (37, 'k', 'K'),
    (38, 'l', 'L'),
    (39, ';', ':'),
    (40, '\'', '"'),
    (44, 'z', 'Z'),
    (45, 'x', 'X'),
    (46, 'c', 'C'),
    (47, 'v', 'V'),
    (48, 'b', 'B'),
    (49, 'n', 'N'),
    (50, 'm', 'M'),
    (51, ',', '<'),
    (52, '.', '>'),
    (53, '/', '?'),
    (57, ' ', ' '),
];

/// Position of a printable character: evdev keycode and whether Shift is held
pub fn key_for_char(ch: char) -> Option<(u16, bool)> {
    ROWS.iter().find_map(|&(keycode, plain, shifted)| {
        if ch == plain {
            Some((keycode, false))
        } else if ch == shifted {
            Some((keycode, true))
        } else {
            None
        }
    })
}

/// The unshifted character printed on a key
pub fn label_for_keycode(keycode: u16) -> Option<char> {
    ROWS.iter()
        .find(|&&(code, _, _)| code == keycode)
        .map(|&(_, plain, _)| plain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_for_char() {
        assert_eq!(key_for_char('a'), Some((30, false)));
        assert_eq!(key_for_char('A'), Some((30, true)));
        assert_eq!(key_for_char(' '), Some((57, false)));
        assert_eq!(key_for_char('ก'), None);
    }

    #[test]
    fn test_label_for_keycode() {
        assert_eq!(label_for_keycode(36), Some('j'));
        assert_eq!(label_for_keycode(1), None);
    }
}
