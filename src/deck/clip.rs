//! Playback of a single preloaded clip.

use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

/// One playable clip with a dedicated output stream and sink.
///
/// The whole file is read into memory at load time, so playback never
/// touches the disk again.
pub(crate) struct Clip {
    _stream: OutputStream,
    stream_handle: OutputStreamHandle,
    sink: Sink,
    audio_data: Arc<Vec<u8>>,
}

impl Clip {
    /// Load a clip from a file and verify it decodes.
    pub(crate) fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        if !path.exists() {
            return Err(format!("Sound file not found: {}", path.display()).into());
        }

        let audio_data = std::fs::read(path)?;

        let (stream, stream_handle) = OutputStream::try_default()?;
        let sink = Sink::try_new(&stream_handle)?;

        // Verify the audio can be decoded
        // Note: rodio's Decoder requires owned data with 'static lifetime
        let cursor = Cursor::new(audio_data.clone());
        let decoder = Decoder::new(cursor)?;
        let _sample_count = decoder.count();

        tracing::debug!(
            "Clip ready: {} ({} bytes)",
            path.display(),
            audio_data.len()
        );

        Ok(Self {
            _stream: stream,
            stream_handle,
            sink,
            audio_data: Arc::new(audio_data),
        })
    }

    fn decoder(&self) -> Result<Decoder<Cursor<Vec<u8>>>, Box<dyn std::error::Error>> {
        let cursor = Cursor::new((*self.audio_data).clone());
        Ok(Decoder::new(cursor)?)
    }

    /// Stop whatever is queued and start over from a clean sink.
    fn reset_sink(&mut self) {
        self.sink.stop();
        if let Ok(new_sink) = Sink::try_new(&self.stream_handle) {
            self.sink = new_sink;
        }
    }

    /// Start playback without blocking the caller.
    pub(crate) fn play(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let decoder = self.decoder()?;
        self.reset_sink();
        self.sink.append(decoder);
        self.sink.play();
        Ok(())
    }

    /// Play and block until the clip has finished.
    pub(crate) fn play_sync(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let decoder = self.decoder()?;
        self.reset_sink();
        self.sink.append(decoder);
        self.sink.play();
        self.sink.sleep_until_end();
        Ok(())
    }

    /// Play the clip in an endless loop until stopped.
    pub(crate) fn play_looping(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let decoder = self.decoder()?;
        self.reset_sink();
        self.sink.append(decoder.repeat_infinite());
        self.sink.play();
        Ok(())
    }

    /// Halt playback if in progress.
    pub(crate) fn stop(&self) {
        self.sink.stop();
    }

    /// Set playback volume (0.0-1.0)
    pub(crate) fn set_volume(&self, volume: f32) {
        self.sink.set_volume(volume.clamp(0.0, 1.0));
    }

    /// Check if the clip is currently playing
    pub(crate) fn is_playing(&self) -> bool {
        !self.sink.empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Note: These tests are limited because rodio requires actual audio
    // hardware; loading a real clip is covered by the integration tests.

    #[test]
    fn test_load_fails_with_missing_file() {
        let result = Clip::load(Path::new("nonexistent.wav"));
        assert!(result.is_err());
    }
}
