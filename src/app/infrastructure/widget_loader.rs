use std::thread;

use crate::app::infrastructure::error::{KioskError, Result};

const CHECK_TIMEOUT_SECS: u64 = 10;

/// Check that the sign-language widget script can be served before the overlay
/// window starts it. The body is validated and dropped; the window loads the
/// widget itself. Returns the script size in bytes. Blocking; run off the UI thread.
pub fn check_widget_reachable(url: &str) -> Result<usize> {
    let response = minreq::get(url)
        .with_header("User-Agent", concat!("inclusive-eats/", env!("CARGO_PKG_VERSION")))
        .with_timeout(CHECK_TIMEOUT_SECS)
        .send()
        .map_err(|e| KioskError::OverlayLoadFailure(format!("failed to reach {}: {}", url, e)))?;

    let body = response
        .as_str()
        .map_err(|e| KioskError::OverlayLoadFailure(format!("unreadable script: {}", e)))?;
    validate_script_reply(url, response.status_code, body)
}

fn validate_script_reply(url: &str, status: i32, body: &str) -> Result<usize> {
    if !(200..300).contains(&status) {
        return Err(KioskError::OverlayLoadFailure(format!(
            "{} returned HTTP {}",
            url, status
        )));
    }
    if body.trim().is_empty() {
        return Err(KioskError::OverlayLoadFailure(format!("{} returned an empty script", url)));
    }
    Ok(body.len())
}

/// Run [`check_widget_reachable`] in the background and hand the outcome to
/// `on_done` on the worker thread.
pub fn spawn_widget_check<F>(url: String, on_done: F)
where
    F: FnOnce(Result<()>) + Send + 'static,
{
    thread::spawn(move || {
        let result = check_widget_reachable(&url).map(|bytes| {
            tracing::debug!(bytes, url = %url, "Sign-language widget script is reachable");
        });
        on_done(result);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::time::Duration;

    const URL: &str = "https://vlibras.gov.br/app/vlibras-plugin.js";

    #[test]
    fn test_unreachable_host_is_load_failure() {
        let err = check_widget_reachable("http://127.0.0.1:9/vlibras-plugin.js").unwrap_err();
        assert!(matches!(err, KioskError::OverlayLoadFailure(_)));
    }

    #[test]
    fn test_script_reply_reports_size() {
        assert_eq!(validate_script_reply(URL, 200, "window.VLibras = {};").unwrap(), 20);
    }

    #[test]
    fn test_error_status_fails_check() {
        let err = validate_script_reply(URL, 404, "not found").unwrap_err();
        assert!(matches!(err, KioskError::OverlayLoadFailure(ref m) if m.contains("HTTP 404")));
    }

    #[test]
    fn test_blank_script_fails_check() {
        let err = validate_script_reply(URL, 200, "  \n").unwrap_err();
        assert!(matches!(err, KioskError::OverlayLoadFailure(ref m) if m.contains("empty script")));
    }

    #[test]
    fn test_spawned_check_reports_back() {
        let (tx, rx) = mpsc::channel();
        spawn_widget_check("http://127.0.0.1:9/vlibras-plugin.js".to_string(), move |result| {
            let _ = tx.send(result.is_err());
        });
        let failed = rx.recv_timeout(Duration::from_secs(CHECK_TIMEOUT_SECS + 5)).unwrap();
        assert!(failed);
    }
}
