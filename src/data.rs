// Per-run test data.
//
// Scenarios that create server-side records (playlists, shares) name them
// uniquely so concurrent runs against the same server never collide, and
// each scenario can find and delete exactly what it created.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// A name that is unique across processes (timestamp) and within this
/// process (sequence), keeping the given prefix readable in the UI.
pub fn unique_name(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or(0);
    let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{nanos}-{seq}")
}

/// Share expiration used by the edit scenario, in both the shape the
/// datetime input accepts and the date prefix the table renders.
pub struct ShareExpiry {
    pub input: &'static str,
    pub table_date: &'static str,
}

/// Far-future so the share stays valid for the rest of the run.
/// `table_date` assumes the en-US list rendering.
pub const SHARE_EXPIRY: ShareExpiry = ShareExpiry {
    input: "2030-12-31T20:00",
    table_date: "12/31/2030",
};

/// Comment text used when a playlist form's optional fields are exercised.
pub const PLAYLIST_COMMENT: &str = "created by the browser suite";
