// Named controls of the Navidrome web UI, grouped by screen.
//
// Every selector the suite touches lives here under a role name. Scenarios
// never embed raw CSS, and positional `.nth()` indexing is reserved for
// genuinely list-shaped targets (tiles, table rows) where the position IS
// the meaning. Controls that merely happened to be "the second match" in
// the DOM get an addressable selector instead.
//
// The UI is react-admin on Material-UI with a react-jinke music player, so
// the stable hooks are MUI structural classes, react-admin's `column-*`
// cell classes and form field names, and the player's own class names.

/// Login form.
pub mod login {
    pub const USERNAME: &str = "input[name=\"username\"]";
    pub const PASSWORD: &str = "input[name=\"password\"]";
    pub const SIGN_IN: &str = "button[type=\"submit\"]";
}

/// App shell: sidebar navigation and the page header.
pub mod nav {
    /// The sidebar drawer; visible only once login has completed.
    pub const SIDEBAR: &str = ".MuiDrawer-root";

    /// Page title in the app bar, set by react-admin per resource view.
    pub const PAGE_TITLE: &str = "#react-admin-title";

    /// A sidebar entry addressed by its visible label (exact match).
    pub fn section_link(label: &str) -> String {
        format!(".MuiDrawer-root >> text=\"{label}\"")
    }

    /// The app-bar title when it carries the given text, used to confirm
    /// arrival on a record's detail page.
    pub fn title_containing(text: &str) -> String {
        format!("#react-admin-title:has-text(\"{text}\")")
    }
}

/// Search and list filtering, shared by every list view.
pub mod search {
    pub const INPUT: &str = "input[name=\"q\"]";
    pub const ADD_FILTER: &str = "text=\"Add filter\"";
    pub const FAVOURITES_FILTER: &str = ".MuiMenu-list >> text=\"Favourites\"";
    pub const YEAR_FILTER: &str = ".MuiMenu-list >> text=\"Year\"";
    pub const YEAR_INPUT: &str = "input[name=\"year\"]";
}

/// The persistent audio player panel at the bottom of the shell.
pub mod player {
    pub const PANEL: &str = ".music-player-panel";

    /// Elapsed time of the current track.
    pub const CURRENT_TIME: &str = ".music-player-panel .current-time";

    /// Title of the track the player is holding.
    pub const TRACK_TITLE: &str = ".music-player-panel .audio-title";

    // The play/pause button is one element whose tooltip flips with state,
    // which makes the two states separately addressable.
    pub const PLAY: &str = ".music-player-panel .group.play-btn[title=\"Click to play\"]";
    pub const PAUSE: &str = ".music-player-panel .group.play-btn[title=\"Click to pause\"]";

    pub const NEXT: &str = ".music-player-panel .group.next-audio";
    pub const PREVIOUS: &str = ".music-player-panel .group.prev-audio";

    /// Speaker icon; a click toggles mute.
    pub const VOLUME_ICON: &str = ".music-player-panel .play-sounds";

    /// Drag surface of the volume slider.
    pub const VOLUME_SLIDER: &str = ".music-player-panel .sound-operation .rc-slider";

    /// Filled part of the volume slider. Its computed width collapses to
    /// zero when the player is muted, which is the observable the mute
    /// checks key on.
    pub const VOLUME_TRACK: &str = ".music-player-panel .sound-operation .rc-slider-track";

    /// Play-mode (order/loop/shuffle) toggle; current mode is its tooltip.
    pub const PLAY_MODE: &str = ".music-player-panel .group.loop-btn";

    pub const CLOSE_PANEL: &str = ".music-player-panel .hide-panel";
}

/// Album grid views (All albums, Favourites, Recently added/played).
pub mod albums {
    /// One album tile in the grid.
    pub const TILE: &str = ".MuiGridList-root .MuiGridListTile-root";

    /// Album title bar inside a tile.
    pub const TILE_NAME: &str = ".MuiGridListTile-root .MuiGridListTileBar-title";

    /// Per-tile play overlay, shown on hover.
    pub const TILE_PLAY: &str = ".MuiGridListTile-root button[aria-label=\"Play\"]";

    /// Per-tile context-menu (kebab) button, shown on hover.
    pub const TILE_MENU: &str = ".MuiGridListTile-root button[aria-label=\"More actions\"]";

    /// Per-tile favourite toggle, shown on hover.
    pub const TILE_FAVOURITE: &str =
        ".MuiGridListTile-root button[aria-label=\"Add to favorites\"]";

    /// The same toggle once the album is a favourite.
    pub const TILE_UNFAVOURITE: &str =
        ".MuiGridListTile-root button[aria-label=\"Remove from favorites\"]";

    /// Grid/table layout switch in the list toolbar.
    pub const LAYOUT_TOGGLE: &str = "button[aria-label=\"Toggle view\"]";
    pub const LAYOUT_TABLE: &str = ".MuiMenu-list >> text=\"Table\"";
    pub const LAYOUT_GRID: &str = ".MuiMenu-list >> text=\"Grid\"";
}

/// Album detail view: header actions plus the song table.
pub mod album_view {
    /// Header block with cover art, artist link and the album rating.
    pub const DETAILS: &str = "[class*=\"AlbumDetails\"]";

    pub const SONG_TABLE: &str = "[class*=\"SongDatagrid\"]";
    pub const SONG_ROW: &str = "[class*=\"SongDatagrid\"] tbody tr";
    pub const SONG_TITLE_CELL: &str = "td.column-title";

    // Toolbar actions above the song table. "Play" must match exactly:
    // "Play Next" sits beside it.
    pub const PLAY: &str = "button:text-is(\"Play\")";
    pub const SHUFFLE: &str = "button:has-text(\"Shuffle\")";
    pub const PLAY_NEXT: &str = "button:has-text(\"Play Next\")";
    pub const ADD_TO_PLAYLIST: &str = "button:has-text(\"Add to playlist\")";
    pub const SHARE: &str = "button:has-text(\"Share\")";
    pub const DOWNLOAD: &str = "button:has-text(\"Download\")";

    /// Artist link in the album header.
    pub const ARTIST_LINK: &str = "[class*=\"AlbumDetails\"] a[href*=\"/artist/\"]";

    /// Favourite toggle on a song row (hover to reveal).
    pub const SONG_FAVOURITE: &str =
        "[class*=\"SongDatagrid\"] button[aria-label=\"Add to favorites\"]";
}

/// Artist pages and the artists table.
pub mod artists {
    pub const TABLE: &str = ".MuiTable-root";
    pub const ROW: &str = ".MuiTable-root tbody tr";
    pub const NAME_CELL: &str = "td.column-name";

    /// Heading on an artist's detail page.
    pub const HEADER_NAME: &str = "h5";

    /// An artist row addressed by the artist's name.
    pub fn row_named(name: &str) -> String {
        format!(".MuiTable-root tbody tr:has-text(\"{name}\")")
    }
}

/// Songs table view.
pub mod songs {
    pub const TABLE: &str = ".MuiTable-root";
    pub const ROW: &str = ".MuiTable-root tbody tr";
    pub const TITLE_CELL: &str = "td.column-title";
    pub const ALBUM_CELL: &str = "td.column-album";
    pub const ARTIST_CELL: &str = "td.column-artist";

    /// Link inside the album cell of a song row.
    pub const ALBUM_LINK: &str = "td.column-album a";
    pub const ARTIST_LINK: &str = "td.column-artist a";

    /// Toolbar button that queues the whole library shuffled.
    pub const SHUFFLE_ALL: &str = "button:has-text(\"Shuffle all\")";

    /// A song row addressed by the song's title.
    pub fn row_named(title: &str) -> String {
        format!(".MuiTable-root tbody tr:has-text(\"{title}\")")
    }
}

/// Playlist list, create and edit forms.
pub mod playlists {
    pub const CREATE: &str = "a[href=\"#/playlist/create\"]";
    pub const NAME_INPUT: &str = "input[name=\"name\"]";
    pub const COMMENT_INPUT: &str = "input[name=\"comment\"]";
    pub const PUBLIC_TOGGLE: &str = "input[name=\"public\"]";
    pub const SAVE: &str = "button[aria-label=\"Save\"]";
    pub const EDIT: &str = "a[aria-label=\"Edit\"]";

    pub const ROW: &str = ".MuiTable-root tbody tr";
    pub const NAME_CELL: &str = "td.column-name";

    /// Song-count column of the playlist table.
    pub const SONG_COUNT_CELL: &str = "td.column-songCount";

    /// A playlist row addressed by the playlist's (unique) name.
    pub fn row_named(name: &str) -> String {
        format!(".MuiTable-root tbody tr:has-text(\"{name}\")")
    }
}

/// Radios table.
pub mod radios {
    pub const TABLE: &str = ".MuiTable-root";
    pub const ROW: &str = ".MuiTable-root tbody tr";
    pub const NAME_CELL: &str = "td.column-name";

    /// External home-page link of a radio row; opens in a new tab.
    pub const HOME_LINK: &str = "td.column-homePageUrl a";
}

/// Shares table and the public share page.
pub mod shares {
    pub const ROW: &str = ".MuiTable-root tbody tr";

    /// Share id cell; its link opens the public share page in a new tab.
    pub const ID_LINK: &str = "td.column-id a";
    pub const DESCRIPTION_CELL: &str = "td.column-description";
    pub const EXPIRES_CELL: &str = "td.column-expiresAt";
    pub const VISITS_CELL: &str = "td.column-visitCount";

    /// Boolean "downloadable" cell; react-admin marks the icon with a
    /// data-testid carrying the value.
    pub const DOWNLOAD_ALLOWED: &str = "td.column-downloadable svg[data-testid=\"true\"]";

    /// Fields on the share edit form.
    pub const DESCRIPTION_INPUT: &str = "input[name=\"description\"]";
    pub const EXPIRES_INPUT: &str = "input[name=\"expiresAt\"]";
    pub const DOWNLOADABLE_TOGGLE: &str = "input[name=\"downloadable\"]";
    pub const SAVE: &str = "button[aria-label=\"Save\"]";

    /// Play button on the public share page.
    pub const PAGE_PLAY: &str = ".group.play-btn";

    /// Download control on the public share page.
    pub const PAGE_DOWNLOAD: &str = ".audio-download";

    /// A share row addressed by its (unique) description.
    pub fn row_described(description: &str) -> String {
        format!(".MuiTable-root tbody tr:has-text(\"{description}\")")
    }
}

/// Modal dialogs: add-to-playlist, share, download confirmation, info.
pub mod dialogs {
    /// Playlist picker inside the add-to-playlist dialog. Typing a new name
    /// offers creation; typing an existing name offers that playlist.
    pub const PLAYLIST_INPUT: &str = ".MuiDialog-root input[type=\"text\"]";

    /// Suggestion offered under the playlist picker.
    pub const PLAYLIST_OPTION: &str = ".MuiAutocomplete-popper .MuiAutocomplete-option";

    /// Final confirmation of the add-to-playlist dialog.
    pub const ADD_CONFIRM: &str = ".MuiDialog-root button:has-text(\"Add\")";

    pub const SHARE_DESCRIPTION: &str = ".MuiDialog-root input[name=\"description\"]";

    /// Confirming button of the share dialog; copies the link.
    pub const SHARE_CONFIRM: &str = ".MuiDialog-root button:has-text(\"Share\")";

    /// Second step of a download: the size-confirmation dialog.
    pub const DOWNLOAD_CONFIRM: &str = ".MuiDialog-root button:has-text(\"Download\")";

    pub const INFO: &str = ".MuiDialog-root:has-text(\"Info\")";
}

/// Context menus (popovers). At most one is open at a time, so items are
/// addressed by label without positional indexing.
pub mod menu {
    /// Kebab button on a table row (hover to reveal); chain from the row.
    pub const ROW_KEBAB: &str = "button[aria-label=\"More actions\"]";

    /// A menu item in the currently open popover, by visible label.
    pub fn item(label: &str) -> String {
        format!(".MuiPopover-root .MuiMenuItem-root:has-text(\"{label}\")")
    }

    pub const PLAY: &str = "Play";
    /// Song rows label the immediate-play entry "Play Now".
    pub const PLAY_NOW: &str = "Play Now";
    pub const SHUFFLE: &str = "Shuffle";
    pub const ADD_TO_PLAYLIST: &str = "Add to playlist";
    pub const SHARE: &str = "Share";
    pub const DOWNLOAD: &str = "Download";
    pub const INFO: &str = "Get info";
}

/// Favourite (heart) toggles. The aria-label flips with state, so adding
/// and removing are separately addressable; scope by chaining from the
/// row or tile that hosts the toggle.
pub mod favourite {
    pub const ADD: &str = "button[aria-label=\"Add to favorites\"]";
    pub const REMOVE: &str = "button[aria-label=\"Remove from favorites\"]";
}

/// Star ratings. The widgets live inside whatever row or header hosts
/// them; scope by chaining from that host.
pub mod rating {
    /// The clickable label for an exact star value.
    pub fn stars(count: u8) -> String {
        format!(".MuiRating-root label[aria-label=\"{count} Stars\"]")
    }

    /// A filled star, present only once a rating is set.
    pub const FILLED: &str = ".MuiRating-iconFilled";
}

/// Toast notifications.
pub mod notify {
    pub const MESSAGE: &str = ".MuiSnackbarContent-message";

    /// A notification containing the given text.
    pub fn with_text(text: &str) -> String {
        format!(".MuiSnackbarContent-message:has-text(\"{text}\")")
    }
}

/// List pagination, shared by the table views.
pub mod pagination {
    /// The rows-per-page select.
    pub const PER_PAGE: &str = ".MuiTablePagination-input";

    /// One option of the rows-per-page select, by its value.
    pub fn per_page_option(size: usize) -> String {
        format!(".MuiMenu-list li[data-value=\"{size}\"]")
    }

    /// Bulk-action controls above a table with selected rows.
    pub const ROW_CHECKBOX: &str = "input[type=\"checkbox\"]";
    pub const DELETE_SELECTED: &str = "button:has-text(\"Delete\")";
}
