//! The host-environment boundary for opening share intents.

/// Opens a URL in a new, unprivileged browsing context.
///
/// Fire-and-forget: no return value. A blocked or failed open is not
/// observable from page logic; the host environment either opens the
/// context or silently doesn't.
pub trait IntentOpener: Send + Sync {
    fn open_in_new_context(&self, url: &str);
}

/// Opens intents in the user's default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserOpener;

impl IntentOpener for BrowserOpener {
    fn open_in_new_context(&self, url: &str) {
        webbrowser::open(url).ok();
    }
}

/// Discards every open request. For headless hosts and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopOpener;

impl IntentOpener for NoopOpener {
    fn open_in_new_context(&self, _url: &str) {}
}
