use std::path::Path;

use trueshuffle::config::{CREDENTIALS_FILE, TOKEN_FILE, load_accounts, parse_account};

#[test]
fn test_parse_account_from_credentials() {
    let dir = Path::new("/tmp/credentials/zoey");
    let content = r#"{
        "id": "client-id",
        "secret": "client-secret",
        "playlist_ids": [
            "37i9dQZF1DXcBWIGoYBM5M",
            "spotify:playlist:5ABHKGoOzxkaa28ttQV9sE",
            "https://open.spotify.com/playlist/1h0CEZCm6IbFTbxThn6Xcs?si=abc"
        ]
    }"#;

    let account = parse_account(dir, content).unwrap();

    assert_eq!(account.alias, "zoey");
    assert_eq!(account.client_id, "client-id");
    assert_eq!(account.client_secret, "client-secret");
    assert_eq!(account.token_path, dir.join(TOKEN_FILE));

    let ids: Vec<&str> = account
        .managed_playlist_ids
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(
        ids,
        vec![
            "1h0CEZCm6IbFTbxThn6Xcs",
            "37i9dQZF1DXcBWIGoYBM5M",
            "5ABHKGoOzxkaa28ttQV9sE"
        ]
    );
}

#[test]
fn test_duplicate_playlists_collapse() {
    let dir = Path::new("/tmp/credentials/sam");
    let content = r#"{
        "id": "client-id",
        "secret": "",
        "playlist_ids": ["abc", "spotify:playlist:abc"]
    }"#;

    let account = parse_account(dir, content).unwrap();

    assert_eq!(account.managed_playlist_ids.len(), 1);
}

#[test]
fn test_parse_account_rejects_missing_fields() {
    let dir = Path::new("/tmp/credentials/zoey");
    assert!(parse_account(dir, r#"{"id": "x"}"#).is_err());
    assert!(parse_account(dir, "not json").is_err());
}

#[test]
fn test_parse_account_rejects_empty_client_id() {
    let dir = Path::new("/tmp/credentials/zoey");
    let content = r#"{"id": " ", "secret": "s", "playlist_ids": []}"#;
    assert!(parse_account(dir, content).is_err());
}

fn write_account(root: &Path, alias: &str, content: &str) {
    let dir = root.join(alias);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(CREDENTIALS_FILE), content).unwrap();
}

// Both cases share one test since they point the same environment variable at
// different directories.
#[tokio::test]
async fn test_load_accounts_from_credentials_dir() {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let root = std::env::temp_dir().join(format!(
        "trueshuffle-config-{}-{}",
        std::process::id(),
        nanos
    ));

    let valid = r#"{"id": "client", "secret": "secret", "playlist_ids": ["p1"]}"#;
    write_account(&root, "zoey", valid);
    write_account(&root, "broken", "{ not json");
    write_account(&root, "adam", valid);
    std::fs::write(root.join("README"), "not an account").unwrap();

    unsafe { std::env::set_var("TRUESHUFFLE_CREDENTIALS_DIR", &root) };
    let accounts = load_accounts().await.unwrap();

    let aliases: Vec<&str> = accounts.iter().map(|a| a.alias.as_str()).collect();
    assert_eq!(aliases, vec!["adam", "zoey"]);
    assert_eq!(accounts[0].token_path, root.join("adam").join(TOKEN_FILE));

    let empty = root.join("empty");
    std::fs::create_dir_all(&empty).unwrap();
    unsafe { std::env::set_var("TRUESHUFFLE_CREDENTIALS_DIR", &empty) };
    assert!(load_accounts().await.is_err());

    unsafe { std::env::set_var("TRUESHUFFLE_CREDENTIALS_DIR", root.join("missing")) };
    assert!(load_accounts().await.is_err());

    unsafe { std::env::remove_var("TRUESHUFFLE_CREDENTIALS_DIR") };
    std::fs::remove_dir_all(&root).unwrap();
}
