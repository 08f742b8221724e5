//! Process-wide fold settings
//!
//! Immutable builders are plain values with no handle back to an
//! application context, so the few knobs that affect their replay live in a
//! write-once cell. The embedding application installs them at startup
//! (`riverbed::init_with_config` does this); until then defaults apply.

use once_cell::sync::OnceCell;

use crate::constants::DEFAULT_CHAIN_DEPTH_WARNING;
use crate::{log_debug, log_warn};

static SETTINGS: OnceCell<FoldSettings> = OnceCell::new();

/// Settings read by immutable builder replays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoldSettings {
    /// Chain depth past which a replay logs a warning (0 disables the warning)
    pub chain_depth_warning: usize,
}

impl Default for FoldSettings {
    fn default() -> Self {
        Self {
            chain_depth_warning: DEFAULT_CHAIN_DEPTH_WARNING,
        }
    }
}

/// Install settings for the rest of the process.
///
/// Returns false, leaving the earlier settings in place, if settings were
/// already installed.
pub fn install(settings: FoldSettings) -> bool {
    match SETTINGS.set(settings) {
        Ok(()) => {
            log_debug!(chain_depth_warning = settings.chain_depth_warning, "fold settings installed");
            true
        }
        Err(rejected) => {
            log_warn!(?rejected, "fold settings already installed; ignoring");
            false
        }
    }
}

/// Settings currently in effect
pub fn current() -> FoldSettings {
    SETTINGS.get().copied().unwrap_or_default()
}
