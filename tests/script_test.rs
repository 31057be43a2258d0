use tunesyncli::itunes::script::*;

#[test]
fn test_escape_plain_values() {
    assert_eq!(escape("Morning Mix"), "Morning Mix");
    assert_eq!(escape(""), "");
}

#[test]
fn test_escape_quotes_and_backslashes() {
    assert_eq!(escape(r#"My "Best" Songs"#), r#"My \"Best\" Songs"#);
    assert_eq!(escape(r"back\slash"), r"back\\slash");

    // Backslashes are escaped before quotes, not double-escaped
    assert_eq!(escape(r#"\""#), r#"\\\""#);
}

#[test]
fn test_get_playlist_id_script() {
    let script = get_playlist_id("Morning Mix");

    assert!(script.contains(r#"tell application "Music""#));
    assert!(script.contains(r#"get id of playlist "Morning Mix""#));
    assert!(script.contains("end tell"));
}

#[test]
fn test_create_playlist_script() {
    let script = create_playlist("Morning Mix");

    assert!(script.contains(r#"tell application "Music""#));
    assert!(script.contains(r#"make new user playlist with properties {name:"Morning Mix"}"#));
}

#[test]
fn test_add_file_to_playlist_script() {
    let script = add_file_to_playlist("/tmp/music/song.m4a", "Morning Mix");

    assert!(script.contains(r#"set filePath to "/tmp/music/song.m4a""#));
    assert!(script.contains("POSIX file filePath as alias"));
    assert!(script.contains(r#"add fileAlias to playlist "Morning Mix""#));
}

#[test]
fn test_scripts_escape_embedded_quotes() {
    let script = get_playlist_id(r#"The "Good" Stuff"#);
    assert!(script.contains(r#"get id of playlist "The \"Good\" Stuff""#));

    let script = create_playlist(r#"The "Good" Stuff"#);
    assert!(script.contains(r#"{name:"The \"Good\" Stuff"}"#));

    let script = add_file_to_playlist(r#"/tmp/it's "quoted".m4a"#, "Plain");
    assert!(script.contains(r#"set filePath to "/tmp/it's \"quoted\".m4a""#));
}
