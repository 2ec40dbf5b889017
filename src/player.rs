// In-page probes for the audio element and the volume slider.
//
// Playback state is read from the `<audio>` element directly rather than
// from the player's time display: the display only updates once a second
// and rounds, while `currentTime` moves monotonically and exposes stalls.

use crate::PLAYBACK_SAMPLE_INTERVAL;
use crate::controls;
use crate::error::{Error, Result};
use playwright_rs::Page;
use serde::Deserialize;
use tracing::debug;

const MEDIA_POSITION_JS: &str = r#"() => {
    const audio = document.querySelector('audio');
    return audio ? audio.currentTime : null;
}"#;

const ELEMENT_WIDTH_JS: &str = r#"(selector) => {
    const el = document.querySelector(selector);
    return el ? window.getComputedStyle(el).width : null;
}"#;

const BOUNDING_BOX_JS: &str = r#"(selector) => {
    const el = document.querySelector(selector);
    if (!el) return null;
    const r = el.getBoundingClientRect();
    return { x: r.x, y: r.y, width: r.width, height: r.height };
}"#;

#[derive(Debug, Deserialize)]
struct Rect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

/// Current playback position of the page's audio element, in seconds.
///
/// Precondition: playback has been started, so the element exists.
pub async fn media_position(page: &Page) -> Result<f64> {
    let position: Option<f64> = page.evaluate(MEDIA_POSITION_JS, None::<&()>).await?;
    position.ok_or_else(|| Error::precondition("no media element; playback was never started"))
}

/// Strict-increase rule for the liveness check. A paused or stalled
/// stream holds its position, so equality is a failure.
fn position_advanced(initial: f64, current: f64) -> bool {
    current > initial
}

/// Verifies that playback is live: samples the media position twice,
/// [`PLAYBACK_SAMPLE_INTERVAL`] apart, and requires a strict increase.
/// An initial interval is granted first so a just-clicked track has time
/// to buffer and start.
pub async fn assert_advancing(page: &Page) -> Result<()> {
    tokio::time::sleep(PLAYBACK_SAMPLE_INTERVAL).await;
    let initial = media_position(page).await?;
    tokio::time::sleep(PLAYBACK_SAMPLE_INTERVAL).await;
    let current = media_position(page).await?;
    debug!(initial, current, "media position sampled");

    if position_advanced(initial, current) {
        Ok(())
    } else {
        Err(Error::assertion(
            "media position advanced",
            format!("> {initial:.3}"),
            format!("{current:.3}"),
        ))
    }
}

/// Computed width of the filled volume track, e.g. "48px".
pub async fn volume_track_width(page: &Page) -> Result<String> {
    let selector = controls::player::VOLUME_TRACK;
    let width: Option<String> = page.evaluate(ELEMENT_WIDTH_JS, Some(&selector)).await?;
    width.ok_or_else(|| Error::precondition("volume slider track not found"))
}

/// Mute is observable as the filled track collapsing to exactly zero.
fn is_zero_width(width: &str) -> bool {
    width == "0px"
}

/// Verifies the player is muted via the volume track width.
pub async fn assert_muted(page: &Page) -> Result<()> {
    let width = volume_track_width(page).await?;
    if is_zero_width(&width) {
        Ok(())
    } else {
        Err(Error::assertion("volume track width", "0px", width))
    }
}

/// Mutes by dragging the volume handle from the slider's midpoint to its
/// left edge with real mouse events.
///
/// Precondition: the slider is laid out, so it has a bounding box.
pub async fn drag_volume_to_zero(page: &Page) -> Result<()> {
    let selector = controls::player::VOLUME_SLIDER;
    let rect: Option<Rect> = page.evaluate(BOUNDING_BOX_JS, Some(&selector)).await?;
    let rect = rect.ok_or_else(|| Error::precondition("volume slider bounding box not found"))?;

    let mid_x = (rect.x + rect.width / 2.0).round() as i32;
    let mid_y = (rect.y + rect.height / 2.0).round() as i32;
    let left_x = rect.x.round() as i32;
    debug!(mid_x, mid_y, left_x, "dragging volume to zero");

    let mouse = page.mouse();
    mouse.move_to(mid_x, mid_y, None).await?;
    mouse.down(None).await?;
    mouse.move_to(left_x, mid_y, None).await?;
    mouse.up(None).await?;
    Ok(())
}
