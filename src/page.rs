//! Page initialization: binding share handlers and applying gauge styles.
//!
//! `init_page` is the explicit replacement for load-time script bootstrapping:
//! the host calls it once the document is ready, and again whenever controls
//! were added. Each share control gets a `ShareHandler` whose `activate` is
//! the click handler; each gauge control gets its style written in place.

use std::sync::Arc;

use crate::controls::Page;
use crate::gauge::GaugeReading;
use crate::opener::IntentOpener;
use crate::share::{build_share_url, ShareConfig, ShareRequest};
use crate::{GAUGE_CONTROL_CLASS, SHARE_CONTROL_CLASS};

/// The share capability bound to one share control.
pub struct ShareHandler {
    request: ShareRequest,
    config: ShareConfig,
    opener: Arc<dyn IntentOpener>,
}

impl ShareHandler {
    /// The record this handler was bound to.
    pub fn request(&self) -> &ShareRequest {
        &self.request
    }

    /// The URL an activation would open.
    pub fn share_url(&self) -> String {
        build_share_url(&self.config, &self.request)
    }

    /// Build the intent URL and ask the host to open it in a new context.
    ///
    /// Stateless: every activation rebuilds the URL from the bound record,
    /// so repeated activations open identical URLs.
    pub fn activate(&self) {
        self.opener.open_in_new_context(&self.share_url());
    }
}

/// What page initialization produced.
pub struct PageBindings {
    /// One handler per share control, in document order.
    pub share: Vec<ShareHandler>,
    /// How many gauge controls had their style applied.
    pub gauges_styled: usize,
}

/// Bind every current share control and style every current gauge control.
///
/// Re-invocable: a later call rebinds from the page's current state, so
/// controls added after the first call are picked up. Applying gauge styles
/// a second time writes the same values.
pub fn init_page(
    page: &mut Page,
    config: &ShareConfig,
    opener: Arc<dyn IntentOpener>,
) -> PageBindings {
    let share: Vec<ShareHandler> = page
        .select(SHARE_CONTROL_CLASS)
        .into_iter()
        .map(|control| ShareHandler {
            request: ShareRequest::from_data(&control.data),
            config: config.clone(),
            opener: opener.clone(),
        })
        .collect();

    let mut gauges_styled = 0;
    for control in page.select_mut(GAUGE_CONTROL_CLASS) {
        let style = GaugeReading::from_data(&control.data).style();
        control.set_style("width", style.width);
        control.set_style("background", style.background);
        gauges_styled += 1;
    }

    PageBindings {
        share,
        gauges_styled,
    }
}
