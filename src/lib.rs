//! Fireshare - share buttons and fire gauges for flame-score video pages.
//!
//! The library is organized into the following modules:
//!
//! - `share`: share request records and intent-URL construction
//! - `video`: video URL validation and video id extraction
//! - `gauge`: gauge readings and their data-to-presentation mapping
//! - `controls`: controls and pages modeled as plain data
//! - `opener`: the host boundary that opens a URL in a new browsing context
//! - `page`: binding share handlers and applying gauge styles

pub mod controls;
pub mod gauge;
pub mod opener;
pub mod page;
pub mod share;
pub mod video;

// ============================================================================
// Configuration
// ============================================================================

/// Class name marking a share control.
pub const SHARE_CONTROL_CLASS: &str = "share-btn";

/// Class name marking a gauge control.
pub const GAUGE_CONTROL_CLASS: &str = "fire-gauge";

/// Data key holding a share control's video title.
pub const DATA_TITLE: &str = "title";

/// Data key holding a share control's video id.
pub const DATA_VIDEO_ID: &str = "id";

/// Data key holding a gauge control's fill percentage.
pub const DATA_WIDTH: &str = "width";

/// Data key holding a gauge control's fill color.
pub const DATA_COLOR: &str = "color";

// Re-export commonly used types
pub use controls::{Control, DataSet, Page};

pub use gauge::{color_for_score, GaugeReading, GaugeStyle};

pub use opener::{BrowserOpener, IntentOpener, NoopOpener};

pub use page::{init_page, PageBindings, ShareHandler};

pub use share::{build_share_url, share_message, ShareConfig, ShareRequest};

pub use video::{
    extract_video_id, validate_video_url, video_id_from_url, watch_url, VideoUrlError,
};
