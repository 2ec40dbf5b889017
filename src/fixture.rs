// Copyright 2026 Paul Adamson
// Licensed under the Apache License, Version 2.0
//
// App - the per-scenario session fixture.

use crate::config::{BrowserKind, Config};
use crate::controls;
use crate::error::{Error, Result};
use crate::events::{DownloadWaiter, PopupWaiter};
use crate::player;
use crate::poll;
use crate::texts;
use playwright_rs::protocol::Download;
use playwright_rs::{
    Browser, BrowserContext, BrowserContextOptions, LaunchOptions, Locator, Page, Playwright,
    Viewport, expect,
};
use tracing::{debug, info};

/// Sidebar destinations, addressed by their visible labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Albums,
    Artists,
    Songs,
    Playlists,
    Radios,
    Shares,
    Favourites,
    RecentlyAdded,
    RecentlyPlayed,
}

impl Section {
    pub fn label(&self) -> &'static str {
        match self {
            Section::Albums => "Albums",
            Section::Artists => "Artists",
            Section::Songs => "Songs",
            Section::Playlists => "Playlists",
            Section::Radios => "Radios",
            Section::Shares => "Shares",
            Section::Favourites => "Favourites",
            Section::RecentlyAdded => "Recently Added",
            Section::RecentlyPlayed => "Recently Played",
        }
    }
}

/// One authenticated browser session against the app under test.
///
/// Owns the whole driver chain and exposes the composite actions the
/// scenarios share. Each scenario launches its own `App`; nothing is
/// shared between tests, so they can run concurrently against the same
/// server.
pub struct App {
    playwright: Playwright,
    browser: Browser,
    context: BrowserContext,
    page: Page,
    config: Config,
}

impl App {
    /// Launches the configured browser with a fresh context and page.
    /// Fails with a configuration error when no browser is configured;
    /// tests check [`Config::browser`] first and skip instead.
    pub async fn launch(config: Config) -> Result<App> {
        let kind = config
            .browser()
            .ok_or_else(|| Error::Config("NAVIDROME_E2E_BROWSER is not set".into()))?;

        let playwright = Playwright::launch().await?;
        let browser_type = match kind {
            BrowserKind::Chromium => playwright.chromium(),
            BrowserKind::Firefox => playwright.firefox(),
            BrowserKind::Webkit => playwright.webkit(),
        };

        let mut launch_options = LaunchOptions::new().headless(!config.headed);
        if let Some(ms) = config.slow_mo {
            launch_options = launch_options.slow_mo(ms);
        }
        let browser = browser_type.launch_with_options(launch_options).await?;

        let context_options = BrowserContextOptions::builder()
            .viewport(Viewport {
                width: 1280,
                height: 720,
            })
            .accept_downloads(true)
            .build();
        let context = browser.new_context_with_options(context_options).await?;
        let page = context.new_page().await?;

        info!(browser = kind.as_str(), "session ready");
        Ok(App {
            playwright,
            browser,
            context,
            page,
            config,
        })
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Shorthand for a locator on the session's page.
    pub async fn locate(&self, selector: &str) -> Locator {
        self.page.locator(selector).await
    }

    /// Opens the app, verifies the page identifies itself before any
    /// credentials are typed, signs in, and waits for the shell.
    pub async fn login(&self) -> Result<()> {
        let url = self
            .config
            .base_url()
            .ok_or_else(|| Error::Config("NAVIDROME_E2E_URL is not set".into()))?
            .clone();

        self.page.goto(url.as_str(), None).await?;
        let title = self.page.title().await?;
        if title != texts::APP_TITLE {
            return Err(Error::assertion("page title", texts::APP_TITLE, title));
        }

        self.locate(controls::login::USERNAME)
            .await
            .fill(&self.config.username, None)
            .await?;
        self.locate(controls::login::PASSWORD)
            .await
            .fill(&self.config.password, None)
            .await?;
        self.locate(controls::login::SIGN_IN)
            .await
            .click(None)
            .await?;

        expect(self.locate(controls::nav::SIDEBAR).await.first())
            .to_be_visible()
            .await?;
        info!(user = %self.config.username, "signed in");
        Ok(())
    }

    /// Navigates via the sidebar.
    pub async fn open_section(&self, section: Section) -> Result<()> {
        self.locate(&controls::nav::section_link(section.label()))
            .await
            .first()
            .click(None)
            .await?;
        debug!(section = section.label(), "opened section");
        Ok(())
    }

    /// Verifies that audio is actually progressing; see
    /// [`player::assert_advancing`] for the sampling rule.
    pub async fn assert_playing(&self) -> Result<()> {
        player::assert_advancing(&self.page).await
    }

    /// Verifies the player is muted (volume track collapsed to zero).
    pub async fn assert_volume_muted(&self) -> Result<()> {
        player::assert_muted(&self.page).await
    }

    /// Mutes by dragging the volume handle to the slider's left edge.
    pub async fn mute_via_volume_drag(&self) -> Result<()> {
        player::drag_volume_to_zero(&self.page).await
    }

    /// Completes the add-to-playlist dialog for `name`, creating the
    /// playlist if it does not exist, and waits for the confirmation
    /// notification. The dialog must already be open.
    pub async fn add_to_playlist(&self, name: &str) -> Result<()> {
        let field = self.locate(controls::dialogs::PLAYLIST_INPUT).await.first();
        field.fill(name, None).await?;
        field.press("Enter", None).await?;

        let option = self
            .locate(controls::dialogs::PLAYLIST_OPTION)
            .await
            .first();
        expect(option.clone()).to_be_visible().await?;
        option.click(None).await?;

        self.locate(controls::dialogs::ADD_CONFIRM)
            .await
            .click(None)
            .await?;
        expect(
            self.locate(&controls::notify::with_text(texts::ADDED_TO_PLAYLIST))
                .await
                .first(),
        )
        .to_be_visible()
        .await?;
        info!(playlist = name, "songs added");
        Ok(())
    }

    /// Completes the share dialog with `description` and waits for the
    /// link-copied notification. The dialog must already be open.
    pub async fn create_share(&self, description: &str) -> Result<()> {
        self.locate(controls::dialogs::SHARE_DESCRIPTION)
            .await
            .fill(description, None)
            .await?;
        self.locate(controls::dialogs::SHARE_CONFIRM)
            .await
            .click(None)
            .await?;
        expect(
            self.locate(&controls::notify::with_text(texts::URL_COPIED))
                .await
                .first(),
        )
        .to_be_visible()
        .await?;
        info!(description, "share created");
        Ok(())
    }

    /// Arms a download listener. Must be called before the triggering
    /// click, or the event is lost.
    pub async fn arm_download(&self) -> Result<DownloadWaiter> {
        DownloadWaiter::arm(&self.page).await
    }

    /// Arms a new-tab listener. Must be called before the triggering
    /// click.
    pub fn arm_popup(&self) -> PopupWaiter {
        PopupWaiter::arm(&self.context)
    }

    /// Arms a download listener, clicks `trigger`, and waits for the
    /// download to start.
    pub async fn download_via(&self, trigger: &str) -> Result<Download> {
        let waiter = self.arm_download().await?;
        self.locate(trigger).await.first().click(None).await?;
        let download = waiter.wait().await?;
        debug!(file = download.suggested_filename(), "download captured");
        Ok(download)
    }

    /// Album-sized downloads go through a size-confirmation dialog; this
    /// arms the listener first, then drives both clicks.
    pub async fn download_with_confirmation(&self) -> Result<Download> {
        let waiter = self.arm_download().await?;
        self.locate(controls::album_view::DOWNLOAD)
            .await
            .first()
            .click(None)
            .await?;
        self.locate(controls::dialogs::DOWNLOAD_CONFIRM)
            .await
            .click(None)
            .await?;
        let download = waiter.wait().await?;
        debug!(file = download.suggested_filename(), "download captured");
        Ok(download)
    }

    /// Removes the named playlist through the list view's bulk delete,
    /// then waits for the row to disappear. Scenario teardown.
    pub async fn delete_playlist(&self, name: &str) -> Result<()> {
        self.open_section(Section::Playlists).await?;
        let row = self.locate(&controls::playlists::row_named(name)).await;
        expect(row.clone().first()).to_be_visible().await?;
        row.first()
            .locator(controls::pagination::ROW_CHECKBOX)
            .first()
            .click(None)
            .await?;
        self.locate(controls::pagination::DELETE_SELECTED)
            .await
            .first()
            .click(None)
            .await?;
        poll::gone(&row, "deleted playlist row").await?;
        info!(playlist = name, "deleted");
        Ok(())
    }

    /// Removes the share with the given description. Scenario teardown.
    pub async fn delete_share(&self, description: &str) -> Result<()> {
        self.open_section(Section::Shares).await?;
        let row = self
            .locate(&controls::shares::row_described(description))
            .await;
        expect(row.clone().first()).to_be_visible().await?;
        row.first()
            .locator(controls::pagination::ROW_CHECKBOX)
            .first()
            .click(None)
            .await?;
        self.locate(controls::pagination::DELETE_SELECTED)
            .await
            .first()
            .click(None)
            .await?;
        poll::gone(&row, "deleted share row").await?;
        info!(description, "share deleted");
        Ok(())
    }

    /// Tears the session down: context, browser, then the driver itself.
    pub async fn close(self) -> Result<()> {
        self.context.close().await?;
        self.browser.close().await?;
        self.playwright.shutdown().await?;
        Ok(())
    }
}
