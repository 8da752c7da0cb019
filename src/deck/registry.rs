//! Keyed sound registry.
//!
//! Maintains a best-effort collection of named playable clips.

use std::collections::HashMap;
use std::path::Path;

use parking_lot::Mutex;

use super::clip::Clip;

/// A registry of named sound clips with an absorbing error policy.
///
/// Every operation returns normally no matter what goes wrong underneath.
/// A clip that fails to load (missing file, undecodable data, no audio
/// device) stays registered as unloaded, and all playback calls on it do
/// nothing. The owning application runs identically with or without
/// working audio; swallowed failures are still visible through tracing.
///
/// A key maps to `Some(clip)` when the load succeeded and `None` when it
/// did not, so the unloaded state survives until the entry is removed or
/// replaced by a later [`add`](SoundDeck::add).
pub struct SoundDeck {
    clips: Mutex<HashMap<String, Option<Clip>>>,
}

impl SoundDeck {
    /// Create an empty deck
    pub fn new() -> Self {
        Self {
            clips: Mutex::new(HashMap::new()),
        }
    }

    /// Register `key`, replacing any existing entry, and try to load the
    /// sound at `path`.
    ///
    /// A failed load leaves the entry present but unloaded; the failure is
    /// absorbed, never surfaced to the caller. Re-adding an existing key
    /// replaces its entry outright, so the loaded state reflects only the
    /// newest attempt.
    pub fn add<P: AsRef<Path>>(&self, key: &str, path: P) {
        let path = path.as_ref();
        let clip = match Clip::load(path) {
            Ok(clip) => {
                tracing::debug!("Loaded clip '{}' from {}", key, path.display());
                Some(clip)
            }
            Err(err) => {
                tracing::warn!(
                    "Clip '{}' failed to load from {}: {}",
                    key,
                    path.display(),
                    err
                );
                None
            }
        };

        self.clips.lock().insert(key.to_owned(), clip);
    }

    /// Start playback without blocking. No-op for unknown or unloaded keys.
    pub fn play(&self, key: &str) {
        let mut clips = self.clips.lock();
        if let Some(Some(clip)) = clips.get_mut(key) {
            if let Err(err) = clip.play() {
                tracing::warn!("Playback of '{}' failed: {}", key, err);
            }
        }
    }

    /// Play and block the calling thread until the clip has finished.
    ///
    /// The deck is locked for the duration of playback, so other callers
    /// wait until the clip ends. No-op for unknown or unloaded keys.
    pub fn play_sync(&self, key: &str) {
        let mut clips = self.clips.lock();
        if let Some(Some(clip)) = clips.get_mut(key) {
            if let Err(err) = clip.play_sync() {
                tracing::warn!("Playback of '{}' failed: {}", key, err);
            }
        }
    }

    /// Loop the clip until [`stop`](SoundDeck::stop) is called. No-op for
    /// unknown or unloaded keys.
    pub fn play_looping(&self, key: &str) {
        let mut clips = self.clips.lock();
        if let Some(Some(clip)) = clips.get_mut(key) {
            if let Err(err) = clip.play_looping() {
                tracing::warn!("Playback of '{}' failed: {}", key, err);
            }
        }
    }

    /// Halt playback if in progress. No-op for unknown or unloaded keys.
    pub fn stop(&self, key: &str) {
        let clips = self.clips.lock();
        if let Some(Some(clip)) = clips.get(key) {
            clip.stop();
        }
    }

    /// Stop all clips that are currently playing
    pub fn stop_all(&self) {
        let clips = self.clips.lock();
        for clip in clips.values().flatten() {
            clip.stop();
        }
        tracing::debug!("Stopped all clips");
    }

    /// Delete the entry for `key`. No-op if the key was never added.
    pub fn remove(&self, key: &str) {
        if self.clips.lock().remove(key).is_some() {
            tracing::debug!("Removed clip '{}'", key);
        }
    }

    /// Remove every entry
    pub fn clear(&self) {
        self.clips.lock().clear();
        tracing::debug!("Cleared the deck");
    }

    /// Whether `key` has an entry, loaded or not
    pub fn contains(&self, key: &str) -> bool {
        self.clips.lock().contains_key(key)
    }

    /// Whether the clip behind `key` loaded successfully.
    ///
    /// Returns `None` for keys that were never added (or were removed).
    pub fn is_loaded(&self, key: &str) -> Option<bool> {
        self.clips.lock().get(key).map(|clip| clip.is_some())
    }

    /// Check if the clip behind `key` is currently playing
    pub fn is_playing(&self, key: &str) -> bool {
        let clips = self.clips.lock();
        clips
            .get(key)
            .and_then(|clip| clip.as_ref())
            .map(|clip| clip.is_playing())
            .unwrap_or(false)
    }

    /// Set volume for a clip (0.0-1.0). No-op for unknown or unloaded keys.
    pub fn set_volume(&self, key: &str, volume: f32) {
        let clips = self.clips.lock();
        if let Some(Some(clip)) = clips.get(key) {
            clip.set_volume(volume);
        }
    }

    /// Number of registered entries, loaded or not
    pub fn len(&self) -> usize {
        self.clips.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.lock().is_empty()
    }
}

impl Default for SoundDeck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_creation() {
        let deck = SoundDeck::new();
        assert_eq!(deck.len(), 0);
        assert!(deck.is_empty());
    }

    #[test]
    fn test_deck_default() {
        let deck = SoundDeck::default();
        assert!(deck.is_empty());
    }

    #[test]
    fn test_unknown_key_queries() {
        let deck = SoundDeck::new();
        assert!(!deck.contains("missing"));
        assert_eq!(deck.is_loaded("missing"), None);
        assert!(!deck.is_playing("missing"));
    }

    // Note: Playback tests require audio files and hardware; see the
    // integration tests.
}
