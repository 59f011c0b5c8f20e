use crate::app::infrastructure::error::{KioskError, Result};

/// Host side of the sign-language widget.
///
/// `load_widget` is fire-and-forget: the host reports completion later by
/// calling [`SignLanguageOverlay::widget_load_finished`].
pub trait OverlayPort {
    fn is_mounted(&self) -> bool;
    fn mount(&mut self);
    fn unmount(&mut self);
    fn load_widget(&mut self, script_url: &str);
    fn init_widget(&mut self, app_url: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    Absent,
    Loading,
    Ready,
}

pub struct SignLanguageOverlay {
    port: Box<dyn OverlayPort>,
    script_url: String,
    app_url: String,
    enabled: bool,
    widget: WidgetState,
}

impl SignLanguageOverlay {
    pub fn new(port: Box<dyn OverlayPort>, script_url: impl Into<String>, app_url: impl Into<String>) -> Self {
        Self {
            port,
            script_url: script_url.into(),
            app_url: app_url.into(),
            enabled: false,
            widget: WidgetState::Absent,
        }
    }

    /// Remount from scratch; reinitialize a widget that is already loaded
    /// instead of fetching it again.
    pub fn enable(&mut self) {
        if self.port.is_mounted() {
            self.port.unmount();
        }
        self.port.mount();
        self.enabled = true;

        match self.widget {
            WidgetState::Ready => self.port.init_widget(&self.app_url),
            WidgetState::Loading => tracing::debug!("Overlay widget still loading"),
            WidgetState::Absent => {
                tracing::info!(url = %self.script_url, "Loading sign-language widget");
                self.widget = WidgetState::Loading;
                self.port.load_widget(&self.script_url);
            }
        }
    }

    pub fn disable(&mut self) {
        if self.port.is_mounted() {
            self.port.unmount();
        }
        self.enabled = false;
    }

    /// Completion of a `load_widget` request. On failure the overlay is torn
    /// down and the error handed back so the caller can clear its flag.
    pub fn widget_load_finished(&mut self, result: Result<()>) -> Result<()> {
        match result {
            Ok(()) => {
                tracing::info!("Sign-language widget loaded");
                self.widget = WidgetState::Ready;
                if self.enabled {
                    self.port.init_widget(&self.app_url);
                }
                Ok(())
            }
            Err(e) => {
                tracing::error!("Sign-language widget unavailable: {}", e);
                self.widget = WidgetState::Absent;
                self.disable();
                Err(match e {
                    KioskError::OverlayLoadFailure(_) => e,
                    other => KioskError::OverlayLoadFailure(other.to_string()),
                })
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn widget_state(&self) -> WidgetState {
        self.widget
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Host {
        mounted: usize,
        loads: Vec<String>,
        inits: Vec<String>,
    }

    struct FakePort(Rc<RefCell<Host>>);

    impl OverlayPort for FakePort {
        fn is_mounted(&self) -> bool {
            self.0.borrow().mounted > 0
        }
        fn mount(&mut self) {
            self.0.borrow_mut().mounted += 1;
        }
        fn unmount(&mut self) {
            let mut host = self.0.borrow_mut();
            host.mounted = host.mounted.saturating_sub(1);
        }
        fn load_widget(&mut self, script_url: &str) {
            self.0.borrow_mut().loads.push(script_url.to_string());
        }
        fn init_widget(&mut self, app_url: &str) {
            self.0.borrow_mut().inits.push(app_url.to_string());
        }
    }

    fn overlay() -> (SignLanguageOverlay, Rc<RefCell<Host>>) {
        let host = Rc::new(RefCell::new(Host::default()));
        let overlay = SignLanguageOverlay::new(
            Box::new(FakePort(host.clone())),
            "https://vlibras.gov.br/app/vlibras-plugin.js",
            "https://vlibras.gov.br/app",
        );
        (overlay, host)
    }

    #[test]
    fn test_enable_loads_once_then_inits() {
        let (mut o, host) = overlay();
        o.enable();
        assert!(o.is_enabled());
        assert_eq!(o.widget_state(), WidgetState::Loading);
        assert_eq!(host.borrow().loads.len(), 1);
        assert!(host.borrow().inits.is_empty());

        o.widget_load_finished(Ok(())).unwrap();
        assert_eq!(o.widget_state(), WidgetState::Ready);
        assert_eq!(host.borrow().inits, vec!["https://vlibras.gov.br/app".to_string()]);
    }

    #[test]
    fn test_repeated_cycles_never_double_mount() {
        let (mut o, host) = overlay();
        o.enable();
        o.enable();
        assert_eq!(host.borrow().mounted, 1);
        o.widget_load_finished(Ok(())).unwrap();

        for _ in 0..5 {
            o.disable();
            o.disable();
            assert_eq!(host.borrow().mounted, 0);
            o.enable();
            assert_eq!(host.borrow().mounted, 1);
        }
        // Widget fetched once; later enables reinitialize it.
        assert_eq!(host.borrow().loads.len(), 1);
        assert_eq!(host.borrow().inits.len(), 6);
    }

    #[test]
    fn test_load_finishing_after_disable_does_not_init() {
        let (mut o, host) = overlay();
        o.enable();
        o.disable();
        o.widget_load_finished(Ok(())).unwrap();
        assert!(host.borrow().inits.is_empty());
        assert_eq!(host.borrow().mounted, 0);
    }

    #[test]
    fn test_load_failure_disables_overlay() {
        let (mut o, host) = overlay();
        o.enable();
        let err = o
            .widget_load_finished(Err(KioskError::OverlayLoadFailure("HTTP 404".to_string())))
            .unwrap_err();
        assert!(matches!(err, KioskError::OverlayLoadFailure(_)));
        assert!(!o.is_enabled());
        assert_eq!(o.widget_state(), WidgetState::Absent);
        assert_eq!(host.borrow().mounted, 0);

        // A later enable tries the fetch again.
        o.enable();
        assert_eq!(host.borrow().loads.len(), 2);
    }
}
