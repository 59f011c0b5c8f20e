use crate::app::infrastructure::error::Result;

/// Speech backend. `speak` starts an utterance and returns without waiting
/// for it to finish; `cancel` stops whatever is still playing.
pub trait NarrationPort {
    fn speak(&mut self, text: &str, lang: &str) -> Result<()>;
    fn cancel(&mut self);
}

/// Port used when no synthesizer is configured.
#[derive(Debug, Default)]
pub struct SilentNarration;

impl NarrationPort for SilentNarration {
    fn speak(&mut self, _text: &str, _lang: &str) -> Result<()> {
        Ok(())
    }

    fn cancel(&mut self) {}
}

/// Single-slot announcer: a new announcement cancels the previous one,
/// nothing is ever queued.
pub struct Narrator {
    enabled: bool,
    lang: String,
    port: Box<dyn NarrationPort>,
    speaking: Option<String>,
    reported_unavailable: bool,
}

impl Narrator {
    pub fn new(port: Box<dyn NarrationPort>, lang: impl Into<String>, enabled: bool) -> Self {
        Self {
            enabled,
            lang: lang.into(),
            port,
            speaking: None,
            reported_unavailable: false,
        }
    }

    /// No-op while voice is off: the previous utterance is not cancelled either.
    pub fn announce(&mut self, text: &str) {
        if !self.enabled {
            tracing::trace!(text, "Voice disabled, skipping announcement");
            return;
        }
        self.deliver(text);
    }

    /// Flip voice on or off and speak `confirmation` in both directions.
    pub fn set_enabled(&mut self, enabled: bool, confirmation: &str) {
        self.enabled = enabled;
        self.deliver(confirmation);
    }

    fn deliver(&mut self, text: &str) {
        if self.speaking.take().is_some() {
            self.port.cancel();
        }

        match self.port.speak(text, &self.lang) {
            Ok(()) => {
                tracing::debug!(text, lang = %self.lang, "Announcing");
                self.speaking = Some(text.to_string());
            }
            Err(e) if !self.reported_unavailable => {
                tracing::warn!("{}; continuing without speech", e);
                self.reported_unavailable = true;
            }
            Err(e) => tracing::debug!("{}", e),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Text of the last utterance that was started.
    pub fn current(&self) -> Option<&str> {
        self.speaking.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::infrastructure::error::KioskError;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Speak(String, String),
        Cancel,
    }

    #[derive(Clone, Default)]
    struct Recorder {
        calls: Rc<RefCell<Vec<Call>>>,
        fail: bool,
    }

    impl NarrationPort for Recorder {
        fn speak(&mut self, text: &str, lang: &str) -> Result<()> {
            if self.fail {
                return Err(KioskError::NarrationUnavailable("no synthesizer".to_string()));
            }
            self.calls.borrow_mut().push(Call::Speak(text.to_string(), lang.to_string()));
            Ok(())
        }

        fn cancel(&mut self) {
            self.calls.borrow_mut().push(Call::Cancel);
        }
    }

    fn narrator(enabled: bool) -> (Narrator, Rc<RefCell<Vec<Call>>>) {
        let recorder = Recorder::default();
        let calls = recorder.calls.clone();
        (Narrator::new(Box::new(recorder), "pt-BR", enabled), calls)
    }

    fn speak(text: &str) -> Call {
        Call::Speak(text.to_string(), "pt-BR".to_string())
    }

    #[test]
    fn test_new_announcement_cancels_previous() {
        let (mut n, calls) = narrator(true);
        n.announce("Bebidas selecionado");
        n.announce("Adicionado Suco Natural ao carrinho");
        assert_eq!(
            *calls.borrow(),
            vec![
                speak("Bebidas selecionado"),
                Call::Cancel,
                speak("Adicionado Suco Natural ao carrinho"),
            ]
        );
        assert_eq!(n.current(), Some("Adicionado Suco Natural ao carrinho"));
    }

    #[test]
    fn test_first_announcement_does_not_cancel() {
        let (mut n, calls) = narrator(true);
        n.announce("Tela de pagamento");
        assert_eq!(*calls.borrow(), vec![speak("Tela de pagamento")]);
    }

    #[test]
    fn test_disabled_announce_has_no_side_effects() {
        let (mut n, calls) = narrator(true);
        n.announce("Voltando ao menu");
        n.set_enabled(false, "Voz desativada");
        calls.borrow_mut().clear();

        n.announce("Pagamento cancelado");
        assert!(calls.borrow().is_empty());
        assert_eq!(n.current(), Some("Voz desativada"));
    }

    #[test]
    fn test_toggle_confirmation_spoken_both_ways() {
        let (mut n, calls) = narrator(true);
        n.set_enabled(false, "Voz desativada");
        assert!(!n.is_enabled());
        n.set_enabled(true, "Voz ativada");
        assert!(n.is_enabled());
        assert_eq!(
            *calls.borrow(),
            vec![speak("Voz desativada"), Call::Cancel, speak("Voz ativada")]
        );
    }

    #[test]
    fn test_unavailable_port_is_swallowed() {
        let recorder = Recorder {
            fail: true,
            ..Default::default()
        };
        let mut n = Narrator::new(Box::new(recorder), "pt-BR", true);
        n.announce("Hambúrgueres selecionado");
        n.announce("Bebidas selecionado");
        assert_eq!(n.current(), None);
        assert!(n.is_enabled());
    }

    #[test]
    fn test_silent_port() {
        let mut n = Narrator::new(Box::new(SilentNarration), "pt-BR", true);
        n.announce("Pedido iniciado");
        assert_eq!(n.current(), Some("Pedido iniciado"));
        assert_eq!(n.lang(), "pt-BR");
    }
}
