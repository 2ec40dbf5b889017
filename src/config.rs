// Environment-driven configuration.
//
// Everything the suite needs from the outside world arrives through
// NAVIDROME_E2E_* variables. The two gates are NAVIDROME_E2E_BROWSER
// (without it no browser is launched) and NAVIDROME_E2E_URL (without it
// the live-server scenarios have nothing to point at); tests read those
// through `browser()` / `base_url()` and skip at runtime when unset, so
// `cargo test` stays green on a machine with neither.

use crate::error::{Error, Result};
use std::env;
use std::str::FromStr;
use url::Url;

/// Which browser engine drives the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserKind {
    Chromium,
    Firefox,
    Webkit,
}

impl BrowserKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserKind::Chromium => "chromium",
            BrowserKind::Firefox => "firefox",
            BrowserKind::Webkit => "webkit",
        }
    }
}

impl FromStr for BrowserKind {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "chromium" | "chrome" => Ok(BrowserKind::Chromium),
            "firefox" => Ok(BrowserKind::Firefox),
            "webkit" | "safari" => Ok(BrowserKind::Webkit),
            other => Err(Error::Config(format!(
                "unknown browser '{other}' (expected chromium, firefox or webkit)"
            ))),
        }
    }
}

/// Page sizes of a list view: the count served by default and the
/// alternative offered by the rows-per-page select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSizes {
    pub initial: usize,
    pub resized: usize,
}

/// Facts about the seeded music library that the live scenarios assert
/// against. Defaults match the reference seed; point the variables at
/// your own library's contents otherwise.
#[derive(Debug, Clone)]
pub struct Library {
    /// An album title present in the library (searchable, shareable).
    pub album: String,
    /// The artist of that album.
    pub artist: String,
    /// A song title present in the library.
    pub song: String,
    /// Home-page URL of the first configured internet radio.
    pub radio_home_url: String,
    /// A release year that matches exactly one album.
    pub year: String,
    pub albums: PageSizes,
    pub artists: PageSizes,
    pub songs: PageSizes,
}

impl Default for Library {
    fn default() -> Self {
        Library {
            album: "Synthetica".into(),
            artist: "Metric".into(),
            song: "Help I'm Alive".into(),
            radio_home_url: "https://www.radioparadise.com/".into(),
            year: "2012".into(),
            albums: PageSizes {
                initial: 36,
                resized: 48,
            },
            artists: PageSizes {
                initial: 25,
                resized: 50,
            },
            songs: PageSizes {
                initial: 15,
                resized: 50,
            },
        }
    }
}

/// Suite configuration, read once per scenario.
#[derive(Debug, Clone)]
pub struct Config {
    base_url: Option<Url>,
    browser: Option<BrowserKind>,
    pub username: String,
    pub password: String,
    pub headed: bool,
    pub slow_mo: Option<f64>,
    pub library: Library,
}

impl Config {
    /// Reads the NAVIDROME_E2E_* environment. Unset variables fall back
    /// to defaults; set-but-malformed ones are configuration errors.
    pub fn from_env() -> Result<Config> {
        let base_url = match var("NAVIDROME_E2E_URL") {
            Some(raw) => Some(
                Url::parse(&raw)
                    .map_err(|e| Error::Config(format!("NAVIDROME_E2E_URL: {e}")))?,
            ),
            None => None,
        };
        let browser = match var("NAVIDROME_E2E_BROWSER") {
            Some(raw) => Some(raw.parse::<BrowserKind>()?),
            None => None,
        };
        let slow_mo = match var("NAVIDROME_E2E_SLOW_MO") {
            Some(raw) => Some(
                raw.parse::<f64>()
                    .map_err(|e| Error::Config(format!("NAVIDROME_E2E_SLOW_MO: {e}")))?,
            ),
            None => None,
        };

        let defaults = Library::default();
        let library = Library {
            album: var("NAVIDROME_E2E_ALBUM").unwrap_or(defaults.album),
            artist: var("NAVIDROME_E2E_ARTIST").unwrap_or(defaults.artist),
            song: var("NAVIDROME_E2E_SONG").unwrap_or(defaults.song),
            radio_home_url: var("NAVIDROME_E2E_RADIO_HOME").unwrap_or(defaults.radio_home_url),
            year: var("NAVIDROME_E2E_YEAR").unwrap_or(defaults.year),
            albums: page_sizes("NAVIDROME_E2E_ALBUM_PAGES", defaults.albums)?,
            artists: page_sizes("NAVIDROME_E2E_ARTIST_PAGES", defaults.artists)?,
            songs: page_sizes("NAVIDROME_E2E_SONG_PAGES", defaults.songs)?,
        };

        Ok(Config {
            base_url,
            browser,
            username: var("NAVIDROME_E2E_USER").unwrap_or_else(|| "admin".into()),
            password: var("NAVIDROME_E2E_PASS").unwrap_or_else(|| "admin".into()),
            headed: var("NAVIDROME_E2E_HEADED").is_some_and(|raw| parse_flag(&raw)),
            slow_mo,
            library,
        })
    }

    /// The browser gate. `None` means browser-driven tests should skip.
    pub fn browser(&self) -> Option<BrowserKind> {
        self.browser
    }

    /// The live-server gate. `None` means live scenarios should skip.
    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// Points the session at an explicit URL (used by hermetic tests to
    /// target a local stub instead of a live server).
    pub fn with_base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    pub fn with_browser(mut self, kind: BrowserKind) -> Self {
        self.browser = Some(kind);
        self
    }
}

/// Set-and-nonempty environment lookup.
fn var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

/// Parses "initial,resized", e.g. `NAVIDROME_E2E_ALBUM_PAGES=36,48`.
fn parse_page_sizes(raw: &str) -> Option<PageSizes> {
    let (initial, resized) = raw.split_once(',')?;
    Some(PageSizes {
        initial: initial.trim().parse().ok()?,
        resized: resized.trim().parse().ok()?,
    })
}

fn page_sizes(name: &str, default: PageSizes) -> Result<PageSizes> {
    match var(name) {
        Some(raw) => parse_page_sizes(&raw).ok_or_else(|| {
            Error::Config(format!("{name}: expected two counts like '36,48', got '{raw}'"))
        }),
        None => Ok(default),
    }
}
