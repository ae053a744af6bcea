//! Keyboard chord normalization and binding lookup
//!
//! A chord is the normalized string form of a key press: modifiers in the
//! fixed order `ctrl+`, `shift+`, `alt+`, then the lower-cased key name
//! (`ctrl+shift+a`, `escape`, `2`). Dispatch returns the bound action token
//! to the caller instead of invoking a callback, so a handler can never
//! re-enter the dispatcher.

use std::collections::BTreeMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Maps normalized chords to action tokens. Last registration for a chord
/// wins; lookup is synchronous and has no side effects.
#[derive(Debug, Default)]
pub struct ShortcutDispatcher<A> {
    bindings: BTreeMap<String, A>,
}

impl<A: Copy> ShortcutDispatcher<A> {
    pub fn new() -> Self {
        Self {
            bindings: BTreeMap::new(),
        }
    }

    /// Bind a chord, overwriting any existing binding silently. The chord
    /// string is normalized, so `"shift+ctrl+a"` and `"ctrl+shift+a"`
    /// address the same binding.
    pub fn register(&mut self, chord: &str, action: A) {
        self.bindings.insert(normalize_chord(chord), action);
    }

    /// Remove a binding; silent no-op when the chord is unbound
    pub fn unregister(&mut self, chord: &str) {
        self.bindings.remove(&normalize_chord(chord));
    }

    /// Look up the action bound to this key event. `Some` means the caller
    /// should apply the action and suppress default handling.
    pub fn dispatch(&self, key: &KeyEvent) -> Option<A> {
        let chord = normalize_key(key)?;
        self.bindings.get(&chord).copied()
    }

    pub fn bound_chords(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }
}

/// Normalize a raw key event into chord form
pub fn normalize_key(key: &KeyEvent) -> Option<String> {
    let name = key_name(key.code)?;
    let mut chord = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        chord.push_str("ctrl+");
    }
    if key.modifiers.contains(KeyModifiers::SHIFT) {
        chord.push_str("shift+");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        chord.push_str("alt+");
    }
    chord.push_str(&name);
    Some(chord)
}

/// Reorder and lower-case the modifier tokens of a chord string
pub fn normalize_chord(chord: &str) -> String {
    let mut ctrl = false;
    let mut shift = false;
    let mut alt = false;
    let mut key = String::new();
    for part in chord.split('+') {
        match part.trim().to_lowercase().as_str() {
            "ctrl" | "control" => ctrl = true,
            "shift" => shift = true,
            "alt" => alt = true,
            other => key = other.to_string(),
        }
    }
    let mut normalized = String::new();
    if ctrl {
        normalized.push_str("ctrl+");
    }
    if shift {
        normalized.push_str("shift+");
    }
    if alt {
        normalized.push_str("alt+");
    }
    normalized.push_str(&key);
    normalized
}

fn key_name(code: KeyCode) -> Option<String> {
    match code {
        KeyCode::Char(ch) => Some(ch.to_lowercase().to_string()),
        KeyCode::Esc => Some("escape".to_string()),
        KeyCode::Enter => Some("enter".to_string()),
        KeyCode::Tab => Some("tab".to_string()),
        KeyCode::Backspace => Some("backspace".to_string()),
        KeyCode::Delete => Some("delete".to_string()),
        KeyCode::Up => Some("up".to_string()),
        KeyCode::Down => Some("down".to_string()),
        KeyCode::Left => Some("left".to_string()),
        KeyCode::Right => Some("right".to_string()),
        KeyCode::Home => Some("home".to_string()),
        KeyCode::End => Some("end".to_string()),
        KeyCode::PageUp => Some("pageup".to_string()),
        KeyCode::PageDown => Some("pagedown".to_string()),
        KeyCode::F(n) => Some(format!("f{n}")),
        _ => None,
    }
}
