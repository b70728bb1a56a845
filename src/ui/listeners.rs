//! Application-wide key listeners.
//!
//! Components that need a key while they are alive (the dialogs' Escape
//! handling) register here instead of inspecting every key themselves. The
//! input router asks the registry which listeners a key hits before it
//! routes the key anywhere else.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Debug, Default)]
pub struct KeyListeners {
    next_id: u64,
    entries: Vec<(ListenerId, KeyCode)>,
}

impl KeyListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, code: KeyCode) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.entries.push((id, code));
        id
    }

    /// Returns false if the listener was not registered.
    pub fn unregister(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub fn is_registered(&self, id: ListenerId) -> bool {
        self.entries.iter().any(|(entry, _)| *entry == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Listeners hit by `key`, in registration order. Only presses count.
    pub fn dispatch(&self, key: &KeyEvent) -> Vec<ListenerId> {
        if key.kind != KeyEventKind::Press {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|(_, code)| *code == key.code)
            .map(|(id, _)| *id)
            .collect()
    }
}
