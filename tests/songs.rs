// Song-list scenarios: playback from the flat song table, navigation to
// the owning album and artist, search, the row context menu, ratings,
// favourites and pagination.
//
// Live-server tests; they skip unless NAVIDROME_E2E_URL and
// NAVIDROME_E2E_BROWSER are both set.

mod common;

use navidrome_e2e::{App, Section, controls, data, poll};
use playwright_rs::expect;

async fn open_songs(app: &App) -> navidrome_e2e::Result<()> {
    app.open_section(Section::Songs).await?;
    expect(app.locate(controls::songs::TABLE).await.first())
        .to_be_visible()
        .await?;
    Ok(())
}

/// Opens the context menu of the first song row and picks `item`.
async fn song_context_menu(app: &App, item: &str) -> navidrome_e2e::Result<()> {
    let row = app.locate(controls::songs::ROW).await.first();
    row.hover(None).await?;
    row.locator(controls::menu::ROW_KEBAB)
        .first()
        .click(None)
        .await?;
    app.locate(&controls::menu::item(item))
        .await
        .first()
        .click(None)
        .await?;
    Ok(())
}

#[tokio::test]
async fn test_play_first_song() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let Some(app) = common::signed_in().await? else {
        return Ok(());
    };
    open_songs(&app).await?;

    app.locate(controls::songs::ROW)
        .await
        .first()
        .click(None)
        .await?;
    app.assert_playing().await?;

    app.close().await?;
    Ok(())
}

#[tokio::test]
async fn test_shuffle_all_songs() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let Some(app) = common::signed_in().await? else {
        return Ok(());
    };
    open_songs(&app).await?;

    app.locate(controls::songs::SHUFFLE_ALL)
        .await
        .first()
        .click(None)
        .await?;
    app.assert_playing().await?;

    app.close().await?;
    Ok(())
}

#[tokio::test]
async fn test_open_album_from_song_row() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let Some(app) = common::signed_in().await? else {
        return Ok(());
    };
    open_songs(&app).await?;

    let link = app.locate(controls::songs::ALBUM_LINK).await.first();
    let album = poll::text_nonempty(&link, "album link in the song row").await?;
    link.click(None).await?;

    poll::count_is(
        &app.locate(&controls::nav::title_containing(&album)).await,
        1,
        "album name in the title bar",
    )
    .await?;

    app.close().await?;
    Ok(())
}

#[tokio::test]
async fn test_open_artist_from_song_row() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let Some(app) = common::signed_in().await? else {
        return Ok(());
    };
    open_songs(&app).await?;

    let link = app.locate(controls::songs::ARTIST_LINK).await.first();
    let artist = poll::text_nonempty(&link, "artist link in the song row").await?;
    link.click(None).await?;

    let header = app.locate(controls::artists::HEADER_NAME).await.first();
    poll::text_is(&header, &artist, "artist page heading").await?;

    app.close().await?;
    Ok(())
}

#[tokio::test]
async fn test_search_song() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let Some(app) = common::signed_in().await? else {
        return Ok(());
    };
    open_songs(&app).await?;
    let song = app.config().library.song.clone();

    let input = app.locate(controls::search::INPUT).await;
    input.fill(&song, None).await?;
    input.press("Enter", None).await?;

    let first = app.locate(controls::songs::TITLE_CELL).await.first();
    poll::text_is(&first, &song, "searched song").await?;

    app.close().await?;
    Ok(())
}

#[tokio::test]
async fn test_play_now_from_context_menu() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let Some(app) = common::signed_in().await? else {
        return Ok(());
    };
    open_songs(&app).await?;

    song_context_menu(&app, controls::menu::PLAY_NOW).await?;
    app.assert_playing().await?;

    app.close().await?;
    Ok(())
}

#[tokio::test]
async fn test_add_song_to_playlist_from_context_menu() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let Some(app) = common::signed_in().await? else {
        return Ok(());
    };
    open_songs(&app).await?;

    let name = data::unique_name("e2e-song");
    song_context_menu(&app, controls::menu::ADD_TO_PLAYLIST).await?;
    app.add_to_playlist(&name).await?;

    app.delete_playlist(&name).await?;
    app.close().await?;
    Ok(())
}

#[tokio::test]
async fn test_share_song_from_context_menu() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let Some(app) = common::signed_in().await? else {
        return Ok(());
    };
    open_songs(&app).await?;

    let description = data::unique_name("e2e-song-share");
    song_context_menu(&app, controls::menu::SHARE).await?;
    app.create_share(&description).await?;

    app.delete_share(&description).await?;
    app.close().await?;
    Ok(())
}

#[tokio::test]
async fn test_download_song_from_context_menu() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let Some(app) = common::signed_in().await? else {
        return Ok(());
    };
    open_songs(&app).await?;

    song_context_menu(&app, controls::menu::DOWNLOAD).await?;
    // The menu entry only opens the size-confirmation dialog; the dialog
    // button is the click that actually starts the download.
    let download = app
        .download_via(controls::dialogs::DOWNLOAD_CONFIRM)
        .await?;
    assert!(!download.suggested_filename().is_empty());

    // The row stays actionable afterwards.
    song_context_menu(&app, controls::menu::INFO).await?;
    expect(app.locate(controls::dialogs::INFO).await.first())
        .to_be_visible()
        .await?;

    app.close().await?;
    Ok(())
}

#[tokio::test]
async fn test_song_info_from_context_menu() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let Some(app) = common::signed_in().await? else {
        return Ok(());
    };
    open_songs(&app).await?;

    song_context_menu(&app, controls::menu::INFO).await?;
    expect(app.locate(controls::dialogs::INFO).await.first())
        .to_be_visible()
        .await?;

    app.close().await?;
    Ok(())
}

#[tokio::test]
async fn test_rate_song() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let Some(app) = common::signed_in().await? else {
        return Ok(());
    };
    open_songs(&app).await?;

    let row = app.locate(controls::songs::ROW).await.first();
    row.hover(None).await?;
    row.locator(&controls::rating::stars(5))
        .first()
        .click(None)
        .await?;
    expect(row.locator(controls::rating::FILLED).first())
        .to_be_visible()
        .await?;

    app.close().await?;
    Ok(())
}

#[tokio::test]
async fn test_add_song_to_favourites() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let Some(app) = common::signed_in().await? else {
        return Ok(());
    };
    open_songs(&app).await?;

    let row = app.locate(controls::songs::ROW).await.first();
    let song = poll::text_nonempty(&row.locator(controls::songs::TITLE_CELL), "song title").await?;
    row.hover(None).await?;
    row.locator(controls::favourite::ADD)
        .first()
        .click(None)
        .await?;

    app.locate(controls::search::ADD_FILTER)
        .await
        .first()
        .click(None)
        .await?;
    app.locate(controls::search::FAVOURITES_FILTER)
        .await
        .first()
        .click(None)
        .await?;
    poll::count_is(
        &app.locate(&controls::songs::row_named(&song)).await,
        1,
        "favourite song row",
    )
    .await?;

    // Teardown: un-favourite from the filtered row.
    let listed = app.locate(&controls::songs::row_named(&song)).await.first();
    listed.hover(None).await?;
    listed
        .locator(controls::favourite::REMOVE)
        .first()
        .click(None)
        .await?;

    app.close().await?;
    Ok(())
}

#[tokio::test]
async fn test_songs_page_size() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let Some(app) = common::signed_in().await? else {
        return Ok(());
    };
    open_songs(&app).await?;
    let sizes = app.config().library.songs;

    let rows = app.locate(controls::songs::ROW).await;
    poll::count_is(&rows, sizes.initial, "songs on the first page").await?;

    app.locate(controls::pagination::PER_PAGE)
        .await
        .first()
        .click(None)
        .await?;
    app.locate(&controls::pagination::per_page_option(sizes.resized))
        .await
        .first()
        .click(None)
        .await?;
    poll::count_is(&rows, sizes.resized, "songs after resizing the page").await?;

    app.close().await?;
    Ok(())
}
