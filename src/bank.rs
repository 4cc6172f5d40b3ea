//! Named storage for decoded sounds.

use arrayvec::ArrayString;
use bb_sound::SoundBuffer;
use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Key for referencing sounds held in a [`SoundBank`].
    pub struct SoundKey;
}

/// A sound and its resource name.
#[derive(Clone, Debug)]
pub struct BankEntry {
    /// Resource name (truncated to fit)
    pub name: ArrayString<26>,
    /// The decoded sound
    pub sound: SoundBuffer,
}

/// Keyed storage for decoded sounds, so game/scene code can hold small
/// copyable keys instead of buffers.
#[derive(Default)]
pub struct SoundBank {
    sounds: SlotMap<SoundKey, BankEntry>,
}

impl SoundBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a sound under a name; returns its key.
    pub fn insert(&mut self, name: &str, sound: SoundBuffer) -> SoundKey {
        let mut entry_name = ArrayString::new();
        let _ = entry_name.try_push_str(name);
        self.sounds.insert(BankEntry { name: entry_name, sound })
    }

    pub fn get(&self, key: SoundKey) -> Option<&BankEntry> {
        self.sounds.get(key)
    }

    pub fn get_mut(&mut self, key: SoundKey) -> Option<&mut BankEntry> {
        self.sounds.get_mut(key)
    }

    pub fn remove(&mut self, key: SoundKey) -> Option<BankEntry> {
        self.sounds.remove(key)
    }

    /// Look up the first sound stored under `name`.
    pub fn find(&self, name: &str) -> Option<SoundKey> {
        self.sounds
            .iter()
            .find(|(_, entry)| entry.name.as_str() == name)
            .map(|(key, _)| key)
    }

    pub fn len(&self) -> usize {
        self.sounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sounds.is_empty()
    }
}
