// Literal UI strings the deployed Navidrome build is expected to render.
// Pinned to the en locale; a server upgrade that rewords these shows up
// here, in one place, rather than across the scenarios.

/// Document title of the web app, checked before the login form is touched.
pub const APP_TITLE: &str = "Navidrome";

/// Elapsed-time display of the player before playback has started.
pub const START_TIME: &str = "00:00";

/// Tooltip on the play-mode button after one toggle away from the default
/// order mode.
pub const REPEAT_ALL: &str = "List loop";

/// Notification shown after the share dialog is confirmed and the link has
/// been placed on the clipboard.
pub const URL_COPIED: &str = "URL copied to clipboard";

/// Notification fragment shown after songs land in a playlist.
pub const ADDED_TO_PLAYLIST: &str = "added to playlist";

/// Generic react-admin success notification after a record is created.
pub const ELEMENT_CREATED: &str = "Element created";

/// Generic react-admin success notification after records are removed.
/// The server reuses this wording for playlists and shares alike.
pub const ELEMENT_DELETED: &str = "Element deleted";

/// Generic react-admin success notification after an edit is saved.
pub const ELEMENT_UPDATED: &str = "Element updated";
