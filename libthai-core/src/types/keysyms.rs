use std::collections::HashMap;
use std::sync::OnceLock;

/// X11-compatible key symbol as delivered by the host
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeySym(pub u32);

impl KeySym {
    // Special values
    pub const NONE: Self = Self(0);

    // Control keys
    pub const BACKSPACE: Self = Self(0xff08);
    pub const TAB: Self = Self(0xff09);
    pub const LINEFEED: Self = Self(0xff0a);
    pub const CLEAR: Self = Self(0xff0b);
    pub const RETURN: Self = Self(0xff0d);
    pub const PAUSE: Self = Self(0xff13);
    pub const SCROLL_LOCK: Self = Self(0xff14);
    pub const SYS_REQ: Self = Self(0xff15);
    pub const ESCAPE: Self = Self(0xff1b);
    pub const DELETE: Self = Self(0xffff);

    // Cursor keys
    pub const HOME: Self = Self(0xff50);
    pub const LEFT: Self = Self(0xff51);
    pub const UP: Self = Self(0xff52);
    pub const RIGHT: Self = Self(0xff53);
    pub const DOWN: Self = Self(0xff54);
    pub const PAGE_UP: Self = Self(0xff55);
    pub const PAGE_DOWN: Self = Self(0xff56);
    pub const END: Self = Self(0xff57);
    pub const BEGIN: Self = Self(0xff58);

    // Misc function keys
    pub const SELECT: Self = Self(0xff60);
    pub const INSERT: Self = Self(0xff63);
    pub const MENU: Self = Self(0xff67);
    pub const BREAK: Self = Self(0xff6b);
    pub const MODE_SWITCH: Self = Self(0xff7e);
    pub const NUM_LOCK: Self = Self(0xff7f);

    // Keypad
    pub const KP_SPACE: Self = Self(0xff80);
    pub const KP_ENTER: Self = Self(0xff8d);
    pub const KP_DELETE: Self = Self(0xff9f);
    pub const KP_0: Self = Self(0xffb0);
    pub const KP_9: Self = Self(0xffb9);

    // Function keys
    pub const F1: Self = Self(0xffbe);
    pub const F12: Self = Self(0xffc9);
    pub const F35: Self = Self(0xffe0);

    // Modifiers
    pub const SHIFT_L: Self = Self(0xffe1);
    pub const SHIFT_R: Self = Self(0xffe2);
    pub const CONTROL_L: Self = Self(0xffe3);
    pub const CONTROL_R: Self = Self(0xffe4);
    pub const CAPS_LOCK: Self = Self(0xffe5);
    pub const SHIFT_LOCK: Self = Self(0xffe6);
    pub const META_L: Self = Self(0xffe7);
    pub const META_R: Self = Self(0xffe8);
    pub const ALT_L: Self = Self(0xffe9);
    pub const ALT_R: Self = Self(0xffea);
    pub const SUPER_L: Self = Self(0xffeb);
    pub const SUPER_R: Self = Self(0xffec);
    pub const HYPER_L: Self = Self(0xffed);
    pub const HYPER_R: Self = Self(0xffee);

    // ISO lock keys
    pub const ISO_LOCK: Self = Self(0xfe01);
    pub const ISO_LEVEL3_SHIFT: Self = Self(0xfe03);
    pub const ISO_LAST_GROUP_LOCK: Self = Self(0xfe0f);

    pub const SPACE: Self = Self(0x0020);

    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Latin-1 keysyms share their code with the character.
    pub fn from_latin1(ch: char) -> Self {
        let cp = ch as u32;
        if (0x20..=0x7e).contains(&cp) || (0xa0..=0xff).contains(&cp) {
            Self(cp)
        } else {
            Self::NONE
        }
    }

    fn in_range(self, low: Self, high: Self) -> bool {
        low.0 <= self.0 && self.0 <= high.0
    }

    pub fn is_modifier(self) -> bool {
        self.in_range(Self::SHIFT_L, Self::HYPER_R)
    }

    pub fn is_keypad_digit(self) -> bool {
        self.in_range(Self::KP_0, Self::KP_9)
    }

    /// Keypad digit value for `KP_0..KP_9`
    pub fn keypad_digit(self) -> Option<u8> {
        if self.is_keypad_digit() {
            Some((self.0 - Self::KP_0.0) as u8)
        } else {
            None
        }
    }

    /// Keys that leave the composition context untouched: modifiers and
    /// lock/group-switch keys.
    pub fn is_context_intact(self) -> bool {
        let function_page = (self.0 & 0xFF00) == 0xFF00
            && (self.is_modifier() || self == Self::MODE_SWITCH || self == Self::NUM_LOCK);
        let iso_page = (self.0 & 0xFE00) == 0xFE00
            && self.in_range(Self::ISO_LOCK, Self::ISO_LAST_GROUP_LOCK);
        function_page || iso_page
    }

    /// Keys whose normal effect invalidates whatever was composed before:
    /// editing, cursor movement, non-character keypad keys and function keys.
    pub fn is_context_lost(self) -> bool {
        if (self.0 & 0xFF00) != 0xFF00 {
            return false;
        }
        matches!(
            self,
            Self::BACKSPACE
                | Self::TAB
                | Self::LINEFEED
                | Self::CLEAR
                | Self::RETURN
                | Self::PAUSE
                | Self::SCROLL_LOCK
                | Self::SYS_REQ
                | Self::ESCAPE
                | Self::DELETE
        ) || self.in_range(Self::HOME, Self::BEGIN)
            || self.in_range(Self::KP_SPACE, Self::KP_DELETE)
            || self.in_range(Self::SELECT, Self::BREAK)
            || self.in_range(Self::F1, Self::F35)
    }
}

/// Builds the name → keysym table used when parsing key names
fn create_keysym_map() -> HashMap<&'static str, KeySym> {
    let mut map = HashMap::new();

    map.insert("None", KeySym::NONE);

    // Control keys
    map.insert("BackSpace", KeySym::BACKSPACE);
    map.insert("Tab", KeySym::TAB);
    map.insert("Linefeed", KeySym::LINEFEED);
    map.insert("Clear", KeySym::CLEAR);
    map.insert("Return", KeySym::RETURN);
    map.insert("Enter", KeySym::RETURN);
    map.insert("Pause", KeySym::PAUSE);
    map.insert("Scroll_Lock", KeySym::SCROLL_LOCK);
    map.insert("Sys_Req", KeySym::SYS_REQ);
    map.insert("Escape", KeySym::ESCAPE);
    map.insert("Esc", KeySym::ESCAPE);
    map.insert("Delete", KeySym::DELETE);
    map.insert("space", KeySym::SPACE);

    // Cursor keys
    map.insert("Home", KeySym::HOME);
    map.insert("Left", KeySym::LEFT);
    map.insert("Up", KeySym::UP);
    map.insert("Right", KeySym::RIGHT);
    map.insert("Down", KeySym::DOWN);
    map.insert("Page_Up", KeySym::PAGE_UP);
    map.insert("Prior", KeySym::PAGE_UP);
    map.insert("Page_Down", KeySym::PAGE_DOWN);
    map.insert("Next", KeySym::PAGE_DOWN);
    map.insert("End", KeySym::END);
    map.insert("Begin", KeySym::BEGIN);
    map.insert("Insert", KeySym::INSERT);
    map.insert("Menu", KeySym::MENU);

    // Function keys
    for (i, name) in [
        "F1", "F2", "F3", "F4", "F5", "F6", "F7", "F8", "F9", "F10", "F11", "F12",
    ]
    .iter()
    .enumerate()
    {
        map.insert(*name, KeySym(KeySym::F1.0 + i as u32));
    }

    // Keypad digits
    for (i, name) in [
        "KP_0", "KP_1", "KP_2", "KP_3", "KP_4", "KP_5", "KP_6", "KP_7", "KP_8", "KP_9",
    ]
    .iter()
    .enumerate()
    {
        map.insert(*name, KeySym(KeySym::KP_0.0 + i as u32));
    }
    map.insert("KP_Enter", KeySym::KP_ENTER);

    // Modifiers and locks
    map.insert("Shift_L", KeySym::SHIFT_L);
    map.insert("Shift_R", KeySym::SHIFT_R);
    map.insert("Control_L", KeySym::CONTROL_L);
    map.insert("Control_R", KeySym::CONTROL_R);
    map.insert("Caps_Lock", KeySym::CAPS_LOCK);
    map.insert("Alt_L", KeySym::ALT_L);
    map.insert("Alt_R", KeySym::ALT_R);
    map.insert("Super_L", KeySym::SUPER_L);
    map.insert("Super_R", KeySym::SUPER_R);
    map.insert("Mode_switch", KeySym::MODE_SWITCH);
    map.insert("Num_Lock", KeySym::NUM_LOCK);
    map.insert("ISO_Level3_Shift", KeySym::ISO_LEVEL3_SHIFT);

    map
}

static KEYSYM_MAP: OnceLock<HashMap<&'static str, KeySym>> = OnceLock::new();

/// Name → keysym table, built on first use
pub fn keysym_map() -> &'static HashMap<&'static str, KeySym> {
    KEYSYM_MAP.get_or_init(create_keysym_map)
}

/// Looks up a keysym by its X11 name
pub fn keysym_from_name(name: &str) -> Option<KeySym> {
    keysym_map().get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_lost_keys() {
        for sym in [
            KeySym::BACKSPACE,
            KeySym::DELETE,
            KeySym::RETURN,
            KeySym::ESCAPE,
            KeySym::LEFT,
            KeySym::F1,
            KeySym::F35,
            KeySym::KP_ENTER,
        ] {
            assert!(sym.is_context_lost(), "{:?}", sym);
            assert!(!sym.is_context_intact(), "{:?}", sym);
        }
        assert!(!KeySym::from_latin1('a').is_context_lost());
        assert!(!KeySym::KP_0.is_context_lost());
    }

    #[test]
    fn test_context_intact_keys() {
        for sym in [
            KeySym::SHIFT_L,
            KeySym::CONTROL_R,
            KeySym::CAPS_LOCK,
            KeySym::MODE_SWITCH,
            KeySym::NUM_LOCK,
            KeySym::ISO_LEVEL3_SHIFT,
        ] {
            assert!(sym.is_context_intact(), "{:?}", sym);
        }
        assert!(!KeySym::BACKSPACE.is_context_intact());
    }

    #[test]
    fn test_keysym_names() {
        assert_eq!(keysym_from_name("BackSpace"), Some(KeySym::BACKSPACE));
        assert_eq!(keysym_from_name("F12"), Some(KeySym::F12));
        assert_eq!(keysym_from_name("KP_7").and_then(KeySym::keypad_digit), Some(7));
        assert_eq!(keysym_from_name("NoSuchKey"), None);
        assert!(std::ptr::eq(keysym_map(), keysym_map()));
    }
}
