use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use rodio::source::{SineWave, Source};
use rodio::{Decoder, OutputStream, OutputStreamHandle};

/// Fire-and-forget sound effects.
///
/// The output stream must outlive every sound played on it, so it is held
/// here even though it is never touched after construction.
pub struct AudioPlayer {
    output: Option<(OutputStream, OutputStreamHandle)>,
    chest_sound: Option<Arc<[u8]>>,
}

impl AudioPlayer {
    pub fn new(chest_sound_path: &Path) -> Self {
        let output = match OutputStream::try_default() {
            Ok(pair) => Some(pair),
            Err(e) => {
                log::warn!("No audio output device ({e}); sound disabled");
                None
            }
        };

        let chest_sound = match std::fs::read(chest_sound_path) {
            Ok(bytes) => Some(Arc::from(bytes)),
            Err(e) => {
                log::warn!(
                    "Failed to read sound '{}': {}. Using a synthesized tone.",
                    chest_sound_path.display(),
                    e
                );
                None
            }
        };

        Self {
            output,
            chest_sound,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.output.is_some()
    }

    pub fn play_chest(&self) {
        let Some((_, handle)) = &self.output else {
            return;
        };

        let result = match &self.chest_sound {
            Some(bytes) => Decoder::new(Cursor::new(Arc::clone(bytes)))
                .map_err(|e| e.to_string())
                .and_then(|source| {
                    handle
                        .play_raw(source.convert_samples())
                        .map_err(|e| e.to_string())
                }),
            None => handle
                .play_raw(
                    SineWave::new(660.0)
                        .take_duration(Duration::from_millis(120))
                        .amplify(0.2),
                )
                .map_err(|e| e.to_string()),
        };

        if let Err(err) = result {
            log::warn!("Failed to play chest sound: {err}");
        }
    }
}
