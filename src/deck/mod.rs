//! Sound deck module
//!
//! Provides a keyed registry of playable sound clips:
//! - Preloaded, in-memory clips with their own output sink
//! - Asynchronous, blocking and looping playback per key
//! - An absorbing error policy so the owner runs fine without audio
//!
//! ## Architecture
//!
//! ```text
//! SoundDeck
//!   ├── "goal"     → Some(Clip)   loaded, playable
//!   ├── "whistle"  → Some(Clip)   loaded, playable
//!   └── "fanfare"  → None         load failed, all playback is a no-op
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sounddeck::SoundDeck;
//!
//! let deck = SoundDeck::new();
//!
//! // A failed load never errors; the key just stays unloaded.
//! deck.add("goal", "sounds/goal.mp3");
//! deck.add("whistle", "sounds/missing.wav");
//!
//! deck.play("goal");          // non-blocking
//! deck.play_sync("goal");     // blocks until the clip ends
//! deck.play_looping("goal");  // loops until stopped
//! deck.stop("goal");
//!
//! deck.play("whistle");       // silently does nothing
//! ```

mod clip;
mod registry;

// Re-export the public surface
pub use registry::SoundDeck;
