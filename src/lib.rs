//! End-to-end browser tests for the Navidrome web UI.
//!
//! The library half of this crate is the scenario toolkit: a session
//! fixture ([`App`]) that logs in and drives the app's composite flows,
//! a catalogue of named UI controls ([`controls`]), bounded condition
//! polling ([`poll`]), waiters for downloads and popups ([`events`]),
//! and probes for the audio player ([`player`]). The scenarios
//! themselves live under `tests/`, one file per feature area.
//!
//! # Configuration
//!
//! Everything the suite needs arrives through `NAVIDROME_E2E_*`
//! variables, read once per scenario by [`Config::from_env`]:
//!
//! - `NAVIDROME_E2E_BROWSER`: `chromium`, `firefox` or `webkit`. The
//!   browser gate; when unset no browser launches and driven tests
//!   skip.
//! - `NAVIDROME_E2E_URL`: base URL of the server under test. The live
//!   gate; when unset the live scenarios skip.
//! - `NAVIDROME_E2E_USER` / `NAVIDROME_E2E_PASS`: credentials, default
//!   `admin` / `admin`.
//! - `NAVIDROME_E2E_HEADED`: `1`, `true` or `yes` shows the window.
//! - `NAVIDROME_E2E_SLOW_MO`: milliseconds of delay per driver action.
//! - `NAVIDROME_E2E_ALBUM`, `NAVIDROME_E2E_ARTIST`,
//!   `NAVIDROME_E2E_SONG`, `NAVIDROME_E2E_YEAR`,
//!   `NAVIDROME_E2E_RADIO_HOME`: facts about the seeded library that
//!   the scenarios assert against.
//! - `NAVIDROME_E2E_ALBUM_PAGES`, `NAVIDROME_E2E_ARTIST_PAGES`,
//!   `NAVIDROME_E2E_SONG_PAGES`: list page sizes as `initial,resized`.
//!
//! With neither gate set `cargo test` stays green and runs only the
//! hermetic parts.
//!
//! # Examples
//!
//! ```ignore
//! use navidrome_e2e::{App, Config, Section};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let app = App::launch(Config::from_env()?).await?;
//!     app.login().await?;
//!     app.open_section(Section::Albums).await?;
//!     app.close().await?;
//!     Ok(())
//! }
//! ```

use std::time::Duration;

pub mod config;
pub mod controls;
pub mod data;
pub mod error;
pub mod events;
pub mod fixture;
pub mod player;
pub mod poll;
pub mod texts;

pub use config::{BrowserKind, Config, Library, PageSizes};
pub use error::{Error, Result};
pub use events::{DownloadWaiter, PopupWaiter};
pub use fixture::{App, Section};

/// Gap between the two media-position samples of the playback liveness
/// check. Part of the check's contract: a stalled stream must stay
/// still for this long to be called stalled.
pub const PLAYBACK_SAMPLE_INTERVAL: Duration = Duration::from_millis(3000);

/// Default ceiling for condition polls.
pub const POLL_TIMEOUT: Duration = Duration::from_secs(10);

/// Delay between poll probes.
pub const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Default ceiling for awaited browser events (downloads, popups).
pub const EVENT_TIMEOUT: Duration = Duration::from_secs(10);
