use std::process::{Child, Command, Stdio};

use crate::app::infrastructure::error::{KioskError, Result};
use crate::app::services::narration::NarrationPort;

/// Narration through an external synthesizer (`espeak-ng` by default).
/// Each utterance is one child process; cancelling kills it.
pub struct CommandSpeech {
    program: String,
    child: Option<Child>,
}

impl CommandSpeech {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            child: None,
        }
    }

    /// espeak voices are lowercase language tags (`pt-br`).
    fn voice(lang: &str) -> String {
        lang.to_lowercase()
    }
}

impl NarrationPort for CommandSpeech {
    fn speak(&mut self, text: &str, lang: &str) -> Result<()> {
        let child = Command::new(&self.program)
            .args(["-v", &Self::voice(lang), "--", text])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| KioskError::NarrationUnavailable(format!("{}: {}", self.program, e)))?;
        self.child = Some(child);
        Ok(())
    }

    fn cancel(&mut self) {
        if let Some(mut child) = self.child.take() {
            if let Ok(None) = child.try_wait() {
                let _ = child.kill();
            }
            // Reap so finished utterances don't linger as zombies
            let _ = child.wait();
        }
    }
}

impl Drop for CommandSpeech {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voice_tag() {
        assert_eq!(CommandSpeech::voice("pt-BR"), "pt-br");
    }

    #[test]
    fn test_missing_program_is_unavailable() {
        let mut speech = CommandSpeech::new("inclusive-eats-no-such-synth");
        let err = speech.speak("Voz ativada", "pt-BR").unwrap_err();
        assert!(matches!(err, KioskError::NarrationUnavailable(_)));
        speech.cancel();
    }

    #[cfg(unix)]
    #[test]
    fn test_cancel_stops_running_child() {
        // Spawned by hand: `sleep` does not understand synthesizer flags
        let child = Command::new("sleep").arg("5").spawn().unwrap();
        let mut speech = CommandSpeech {
            program: "sleep".to_string(),
            child: Some(child),
        };
        speech.cancel();
        assert!(speech.child.is_none());
    }
}
