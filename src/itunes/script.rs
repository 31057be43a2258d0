//! AppleScript sources for the Music.app commands the adapter issues.
//!
//! Pure string builders, kept separate from process handling so they can be
//! tested without a Music.app around.

/// Escapes a value for embedding in an AppleScript string literal.
pub fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Script that resolves a playlist's persistent id by display name.
///
/// Fails with AppleScript error -1728 when no playlist has that name.
pub fn get_playlist_id(playlist_name: &str) -> String {
    format!(
        r#"tell application "Music"
get id of playlist "{name}"
end tell"#,
        name = escape(playlist_name)
    )
}

/// Script that creates a new user playlist with the given name.
pub fn create_playlist(playlist_name: &str) -> String {
    format!(
        r#"tell application "Music"
    make new user playlist with properties {{name:"{name}"}}
end tell"#,
        name = escape(playlist_name)
    )
}

/// Script that appends a local file to a playlist as a new item.
pub fn add_file_to_playlist(file_path: &str, playlist_name: &str) -> String {
    format!(
        r#"tell application "Music"
    set filePath to "{path}"
    set fileAlias to POSIX file filePath as alias
    add fileAlias to playlist "{name}"
end tell"#,
        path = escape(file_path),
        name = escape(playlist_name)
    )
}
