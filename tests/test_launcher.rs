mod common;

use launchdeck::domain::{
    Credential, FilePayload, PasswordForm, LaunchDraft, LaunchEntry, LaunchKind, MediaDraft, MediaEntry, MediaKind,
};
use launchdeck::storage::{
    files_key, games_key, JsonStorage, SessionStore, Storage, UserRecord, CURRENT_USER_KEY,
    USERS_KEY,
};
use launchdeck::{initialize, LaunchdeckError, LoginOutcome, PasswordScheme, RECORDS_FILE_NAME, SESSION_FILE_NAME};

fn steam() -> LaunchDraft {
    LaunchDraft::link("Steam", "steam://", LaunchKind::Link)
}

fn registry(dir: &std::path::Path) -> Vec<Credential> {
    SessionStore::open(dir.join(SESSION_FILE_NAME))
        .unwrap()
        .read_list_strict(USERS_KEY)
        .unwrap()
}

fn stored(dir: &std::path::Path, username: &str) -> Option<UserRecord> {
    JsonStorage::new(dir.join(RECORDS_FILE_NAME)).get(username).unwrap()
}

#[test]
fn first_login_registers_with_empty_record() {
    let (dir, mut launcher) = common::launcher();

    let (session, outcome) = launcher.login("alice", "pw1").unwrap();

    assert_eq!(outcome, LoginOutcome::Registered);
    assert_eq!(session.username(), "alice");
    assert!(session.games().is_empty());
    assert!(session.files().is_empty());
    assert_eq!(stored(dir.path(), "alice"), Some(UserRecord::new("alice")));
    assert_eq!(registry(dir.path()), vec![Credential::new("alice", "pw1")]);
}

#[test]
fn same_password_authenticates_again() {
    let (_dir, mut launcher) = common::launcher();

    let (first, _) = launcher.login("bob", "hunter2").unwrap();
    launcher.logout(first).unwrap();

    let (_, outcome) = launcher.login("bob", "hunter2").unwrap();
    assert_eq!(outcome, LoginOutcome::Authenticated);
}

#[test]
fn wrong_password_is_rejected_without_changes() {
    let (dir, mut launcher) = common::launcher();
    let (session, _) = launcher.login("alice", "pw1").unwrap();
    launcher.logout(session).unwrap();

    let session_file = dir.path().join(SESSION_FILE_NAME);
    let before = std::fs::read_to_string(&session_file).unwrap();

    let err = launcher.login("alice", "wrong").unwrap_err();

    assert!(matches!(err, LaunchdeckError::InvalidCredential));
    assert_eq!(std::fs::read_to_string(&session_file).unwrap(), before);
    assert_eq!(registry(dir.path()), vec![Credential::new("alice", "pw1")]);
}

#[test]
fn usernames_are_case_sensitive() {
    let (dir, mut launcher) = common::launcher();
    launcher.login("alice", "pw1").unwrap();

    let (_, outcome) = launcher.login("Alice", "other").unwrap();

    assert_eq!(outcome, LoginOutcome::Registered);
    assert_eq!(registry(dir.path()).len(), 2);
}

#[test]
fn blank_fields_fail_validation() {
    let (dir, mut launcher) = common::launcher();

    assert!(matches!(
        launcher.login("", "pw").unwrap_err(),
        LaunchdeckError::Validation(_)
    ));
    assert!(matches!(
        launcher.login("alice", "").unwrap_err(),
        LaunchdeckError::Validation(_)
    ));
    assert!(registry(dir.path()).is_empty());
}

#[test]
fn alice_keeps_steam_across_logout() {
    let (dir, mut launcher) = common::launcher();

    let (mut session, _) = launcher.login("alice", "pw1").unwrap();
    let entry = launcher.add_launch_entry(&mut session, steam()).unwrap();
    assert_eq!(session.games().len(), 1);
    assert_eq!(stored(dir.path(), "alice").unwrap().games, vec![entry.clone()]);

    launcher.logout(session).unwrap();
    drop(launcher);

    let mut launcher = common::reopen(dir.path());
    let (session, outcome) = launcher.login("alice", "pw1").unwrap();
    assert_eq!(outcome, LoginOutcome::Authenticated);
    assert_eq!(session.games(), &[entry]);
    assert_eq!(session.games()[0].url, "steam://");
    assert_eq!(session.games()[0].kind, LaunchKind::Link);

    assert!(matches!(
        launcher.login("alice", "wrong"),
        Err(LaunchdeckError::InvalidCredential)
    ));
    assert_eq!(stored(dir.path(), "alice").unwrap().games.len(), 1);
}

#[test]
fn deleting_unknown_id_is_a_no_op() {
    let (dir, mut launcher) = common::launcher();
    let (mut session, _) = launcher.login("alice", "pw1").unwrap();
    launcher.add_launch_entry(&mut session, steam()).unwrap();
    let before = session.clone();

    let removed = launcher.delete_entry(&mut session, "does-not-exist").unwrap();

    assert!(!removed);
    assert_eq!(session, before);
    assert_eq!(stored(dir.path(), "alice").unwrap().games, before.games());
}

#[test]
fn deleting_every_entry_leaves_empty_list_not_none() {
    let (dir, mut launcher) = common::launcher();
    let (mut session, _) = launcher.login("alice", "pw1").unwrap();

    let ids: Vec<String> = (0..5)
        .map(|i| {
            let draft = LaunchDraft::link(format!("game {i}"), format!("steam://rungameid/{i}"), LaunchKind::Link);
            launcher.add_launch_entry(&mut session, draft).unwrap().id
        })
        .collect();
    assert_eq!(session.games().len(), 5);

    for id in &ids {
        assert!(launcher.delete_entry(&mut session, id).unwrap());
    }

    assert!(session.games().is_empty());
    let record = stored(dir.path(), "alice").expect("record still exists");
    assert!(record.games.is_empty());
}

#[test]
fn rapid_inserts_get_distinct_ids() {
    let (_dir, mut launcher) = common::launcher();
    let (mut session, _) = launcher.login("alice", "pw1").unwrap();

    for _ in 0..20 {
        launcher.add_launch_entry(&mut session, steam()).unwrap();
    }

    let mut ids: Vec<&str> = session.games().iter().map(|g| g.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 20);
}

#[test]
fn delete_removes_media_entries_too() {
    let (_dir, mut launcher) = common::launcher();
    let (mut session, _) = launcher.login("alice", "pw1").unwrap();
    let game = launcher.add_launch_entry(&mut session, steam()).unwrap();
    let doc = launcher
        .add_media_entry(
            &mut session,
            MediaDraft::link("notes", "https://example.com/notes.pdf", MediaKind::Document, false),
        )
        .unwrap();

    assert!(launcher.delete_entry(&mut session, &doc.id).unwrap());

    assert!(session.files().is_empty());
    assert_eq!(session.games(), &[game]);
}

#[test]
fn filtering_media_keeps_order_of_matching_kind() {
    let (_dir, mut launcher) = common::launcher();
    let (mut session, _) = launcher.login("alice", "pw1").unwrap();

    let drafts = [
        ("cat", MediaKind::Image),
        ("manual", MediaKind::Document),
        ("dog", MediaKind::Image),
        ("trailer", MediaKind::Video),
        ("bird", MediaKind::Image),
    ];
    for (name, kind) in drafts {
        let url = format!("https://example.com/{name}");
        launcher
            .add_media_entry(&mut session, MediaDraft::link(name, url, kind, true))
            .unwrap();
    }

    let images: Vec<&str> = session
        .media_by_kind(MediaKind::Image)
        .into_iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(images, ["cat", "dog", "bird"]);

    let videos = session.media_by_kind(MediaKind::Video);
    assert_eq!(videos.len(), 1);
    assert!(videos[0].can_view_inline());

    let documents = session.media_by_kind(MediaKind::Document);
    assert!(!documents[0].viewable_inline);
}

#[test]
fn invalid_draft_leaves_session_untouched() {
    let (dir, mut launcher) = common::launcher();
    let (mut session, _) = launcher.login("alice", "pw1").unwrap();

    let err = launcher
        .add_launch_entry(&mut session, LaunchDraft::link("Steam", "  ", LaunchKind::Link))
        .unwrap_err();

    assert!(matches!(err, LaunchdeckError::Validation(_)));
    assert!(session.games().is_empty());
    assert!(stored(dir.path(), "alice").unwrap().games.is_empty());
}

#[test]
fn uploaded_image_becomes_inline_data_uri() {
    let (_dir, mut launcher) = common::launcher();
    let (mut session, _) = launcher.login("alice", "pw1").unwrap();

    let file = FilePayload::new("cat.png", "image/png", b"png".to_vec());
    let entry = launcher
        .add_media_entry(&mut session, MediaDraft::upload("", file))
        .unwrap();

    assert_eq!(entry.name, "cat.png");
    assert_eq!(entry.kind, MediaKind::Image);
    assert!(entry.viewable_inline);
    assert_eq!(entry.url, "data:image/png;base64,cG5n");
}

#[test]
fn logout_clears_marker_and_resume_restores_session() {
    let (dir, mut launcher) = common::launcher();
    let (mut session, _) = launcher.login("alice", "pw1").unwrap();
    launcher.add_launch_entry(&mut session, steam()).unwrap();
    drop(launcher);

    let mut launcher = common::reopen(dir.path());
    let resumed = launcher.resume().unwrap().expect("marker names alice");
    assert_eq!(resumed.username(), "alice");
    assert_eq!(resumed.games().len(), 1);

    launcher.logout(resumed).unwrap();
    assert!(launcher.resume().unwrap().is_none());
}

#[test]
fn resume_ignores_marker_for_unknown_user() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut kv = SessionStore::open(dir.path().join(SESSION_FILE_NAME)).unwrap();
    kv.write_scalar(CURRENT_USER_KEY, "ghost").unwrap();
    drop(kv);

    let mut launcher = common::reopen(dir.path());
    assert!(launcher.resume().unwrap().is_none());

    let kv = SessionStore::open(dir.path().join(SESSION_FILE_NAME)).unwrap();
    assert_eq!(kv.read_scalar(CURRENT_USER_KEY), None);
}

#[test]
fn sessions_for_different_users_do_not_interfere() {
    let (dir, mut launcher) = common::launcher();
    let (mut alice, _) = launcher.login("alice", "pw1").unwrap();
    let (mut bob, _) = launcher.login("bob", "pw2").unwrap();

    launcher.add_launch_entry(&mut alice, steam()).unwrap();
    launcher
        .add_launch_entry(&mut bob, LaunchDraft::link("Discord", "discord://", LaunchKind::Link))
        .unwrap();

    assert_eq!(alice.games()[0].name, "Steam");
    assert_eq!(bob.games()[0].name, "Discord");

    // bob logged in last, so alice's logout must leave his marker alone
    launcher.logout(alice).unwrap();
    let kv = SessionStore::open(dir.path().join(SESSION_FILE_NAME)).unwrap();
    assert_eq!(kv.read_scalar(CURRENT_USER_KEY).as_deref(), Some("bob"));

    assert_eq!(launcher.users().unwrap(), vec!["alice".to_string(), "bob".to_string()]);
    assert_eq!(stored(dir.path(), "bob").unwrap().games.len(), 1);
}

#[test]
fn sha256_scheme_stores_digest_and_verifies() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut launcher = initialize(&common::config_for(dir.path(), PasswordScheme::Sha256)).unwrap();

    launcher.login("alice", "pw1").unwrap();
    let stored = registry(dir.path());
    assert_eq!(stored[0].form, PasswordForm::Sha256);
    assert_eq!(stored[0].password.len(), 64);

    assert_eq!(launcher.login("alice", "pw1").unwrap().1, LoginOutcome::Authenticated);
    assert!(matches!(
        launcher.login("alice", "pw2"),
        Err(LaunchdeckError::InvalidCredential)
    ));
}

#[test]
fn flat_key_collections_are_imported_once() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut kv = SessionStore::open(dir.path().join(SESSION_FILE_NAME)).unwrap();
    kv.write_list(USERS_KEY, &[Credential::new("alice", "pw1")]).unwrap();
    kv.write_scalar(
        &games_key("alice"),
        r#"[{"id":"1700000000000","name":"Steam","url":"steam://","type":"link","isFile":false}]"#,
    )
    .unwrap();
    kv.write_scalar(
        &files_key("alice"),
        r#"[{"id":"1700000000001","name":"cat","url":"data:image/png;base64,AA==","type":"image","canViewInSite":true}]"#,
    )
    .unwrap();
    drop(kv);

    let mut launcher = common::reopen(dir.path());
    let (session, outcome) = launcher.login("alice", "pw1").unwrap();

    assert_eq!(outcome, LoginOutcome::Authenticated);
    assert_eq!(
        session.games(),
        &[LaunchEntry {
            id: "1700000000000".into(),
            name: "Steam".into(),
            url: "steam://".into(),
            kind: LaunchKind::Link,
            is_embedded_file: false,
        }]
    );
    assert_eq!(
        session.files(),
        &[MediaEntry {
            id: "1700000000001".into(),
            name: "cat".into(),
            url: "data:image/png;base64,AA==".into(),
            kind: MediaKind::Image,
            viewable_inline: true,
        }]
    );

    let kv = SessionStore::open(dir.path().join(SESSION_FILE_NAME)).unwrap();
    assert!(!kv.contains(&games_key("alice")));
    assert!(!kv.contains(&files_key("alice")));
    assert_eq!(stored(dir.path(), "alice").unwrap().games.len(), 1);
}

#[test]
fn plaintext_password_with_digest_prefix_logs_in_again() {
    let (dir, mut launcher) = common::launcher();

    let (session, outcome) = launcher.login("alice", "sha256:secret").unwrap();
    assert_eq!(outcome, LoginOutcome::Registered);
    launcher.logout(session).unwrap();

    let (_, outcome) = launcher.login("alice", "sha256:secret").unwrap();
    assert_eq!(outcome, LoginOutcome::Authenticated);
    assert!(matches!(
        launcher.login("alice", "secret"),
        Err(LaunchdeckError::InvalidCredential)
    ));
    assert_eq!(registry(dir.path()), vec![Credential::new("alice", "sha256:secret")]);
}

#[test]
fn switching_scheme_keeps_existing_users() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut launcher = common::reopen(dir.path());
    launcher.login("alice", "pw1").unwrap();
    drop(launcher);

    let mut launcher = initialize(&common::config_for(dir.path(), PasswordScheme::Sha256)).unwrap();
    assert_eq!(launcher.login("alice", "pw1").unwrap().1, LoginOutcome::Authenticated);
    launcher.login("bob", "pw2").unwrap();
    drop(launcher);

    let mut launcher = common::reopen(dir.path());
    assert_eq!(launcher.login("bob", "pw2").unwrap().1, LoginOutcome::Authenticated);
}

#[test]
fn corrupt_registry_fails_login_without_writing() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut kv = SessionStore::open(dir.path().join(SESSION_FILE_NAME)).unwrap();
    kv.write_scalar(
        USERS_KEY,
        r#"[{"username":"alice","password":"pw1"},{"username":"bob"}]"#,
    )
    .unwrap();
    kv.write_scalar(CURRENT_USER_KEY, "alice").unwrap();
    drop(kv);

    let session_file = dir.path().join(SESSION_FILE_NAME);
    let before = std::fs::read_to_string(&session_file).unwrap();
    let mut launcher = common::reopen(dir.path());

    assert!(matches!(
        launcher.login("carol", "pw3"),
        Err(LaunchdeckError::StorageUnavailable(_))
    ));
    assert!(matches!(
        launcher.login("alice", "anything-else"),
        Err(LaunchdeckError::StorageUnavailable(_))
    ));
    assert!(matches!(
        launcher.resume(),
        Err(LaunchdeckError::StorageUnavailable(_))
    ));

    assert_eq!(std::fs::read_to_string(&session_file).unwrap(), before);
    assert_eq!(stored(dir.path(), "carol"), None);
}
