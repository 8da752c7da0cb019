//! Runtime support utilities: a fault-tolerant sound deck and a levelled
//! file logger.
//!
//! The two components are independent and follow deliberately opposite
//! error policies:
//!
//! - [`SoundDeck`] absorbs every failure. Sound is a non-essential
//!   enhancement, so a missing or broken audio file degrades to silence
//!   instead of an error.
//! - [`Logger`] surfaces every failure. A logger that hides its own I/O
//!   problems gives false assurance, so construction and write failures
//!   propagate to the caller.
//!
//! ```no_run
//! use sounddeck::{Logger, LoggingMode, SoundDeck};
//!
//! # fn main() -> Result<(), sounddeck::LoggerError> {
//! let deck = SoundDeck::new();
//! deck.add("goal", "sounds/goal.mp3");
//! deck.play("goal");
//!
//! let logger = Logger::new("app.log", LoggingMode::Info)?;
//! logger.info("application started")?;
//! logger.shutdown()?;
//! # Ok(())
//! # }
//! ```

pub mod deck;
pub mod error;
pub mod logger;

pub use deck::SoundDeck;
pub use error::LoggerError;
pub use logger::{Logger, LoggingMode};
