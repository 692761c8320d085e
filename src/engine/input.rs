use std::collections::HashSet;

/// Keys the scene can ask about, with their browser key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowUp,
    ArrowRight,
    ArrowDown,
}

impl Key {
    pub const ALL: [Key; 4] = [Key::ArrowLeft, Key::ArrowUp, Key::ArrowRight, Key::ArrowDown];

    pub fn code(&self) -> u32 {
        match self {
            Key::ArrowLeft => 37,
            Key::ArrowUp => 38,
            Key::ArrowRight => 39,
            Key::ArrowDown => 40,
        }
    }

    /// Look up a key by code; unknown codes yield `None`
    pub fn from_code(code: u32) -> Option<Key> {
        Self::ALL.into_iter().find(|key| key.code() == code)
    }
}

/// Read-only view of the keyboard, polled by entity behaviors during a tick
pub trait InputSource {
    fn is_key_pressed(&self, key: Key) -> bool;
}

/// Set of keys currently held down.
///
/// Written by the host between frames and read by the scene during a tick.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<Key>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Press by raw key code; unknown codes are ignored
    pub fn press_code(&mut self, code: u32) {
        if let Some(key) = Key::from_code(code) {
            self.press(key);
        }
    }

    pub fn release_all(&mut self) {
        self.held.clear();
    }
}

impl InputSource for KeyboardState {
    fn is_key_pressed(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}
