use launchdeck::domain::{
    FilePayload, LaunchDraft, LaunchEntry, LaunchKind, MediaDraft, MediaEntry, MediaKind,
};
use launchdeck::LaunchdeckError;
use std::io::Write;

fn is_validation<T: std::fmt::Debug>(result: Result<T, LaunchdeckError>) -> bool {
    matches!(result, Err(LaunchdeckError::Validation(_)))
}

#[test]
fn launch_draft_requires_name_and_target() {
    assert!(is_validation(
        LaunchDraft::link("", "steam://", LaunchKind::Link).into_entry()
    ));
    assert!(is_validation(
        LaunchDraft::link("   ", "steam://", LaunchKind::Link).into_entry()
    ));
    assert!(is_validation(
        LaunchDraft::link("Steam", "", LaunchKind::Link).into_entry()
    ));
    assert!(is_validation(LaunchDraft::default().into_entry()));
}

#[test]
fn launch_draft_trims_fields() {
    let entry = LaunchDraft::link("  Steam ", " steam:// ", LaunchKind::Local)
        .into_entry()
        .unwrap();

    assert_eq!(entry.name, "Steam");
    assert_eq!(entry.url, "steam://");
    assert_eq!(entry.kind, LaunchKind::Local);
    assert!(!entry.is_embedded_file);
    assert!(uuid::Uuid::parse_str(&entry.id).is_ok());
}

#[test]
fn uploaded_launch_entry_embeds_the_file() {
    let file = FilePayload::new("game.exe", "application/x-msdownload", vec![0x4d, 0x5a]);
    let entry = LaunchDraft::upload("My Game", file, LaunchKind::Local)
        .into_entry()
        .unwrap();

    assert!(entry.is_embedded_file);
    assert_eq!(entry.url, "data:application/x-msdownload;base64,TVo=");
}

#[test]
fn uploaded_launch_entry_without_name_uses_file_name() {
    let file = FilePayload::new("game.exe", "application/x-msdownload", vec![1]);
    let entry = LaunchDraft::upload("  ", file, LaunchKind::Local)
        .into_entry()
        .unwrap();
    assert_eq!(entry.name, "game.exe");

    let nameless = FilePayload::new("", "application/x-msdownload", vec![1]);
    assert!(is_validation(
        LaunchDraft::upload("", nameless, LaunchKind::Local).into_entry()
    ));
}

#[test]
fn media_kind_follows_uploaded_media_type() {
    let video = FilePayload::new("clip.mp4", "video/mp4", vec![0]);
    let pdf = FilePayload::new("manual.pdf", "application/pdf", vec![0]);

    let video = MediaDraft::upload("clip", video).into_entry().unwrap();
    let pdf = MediaDraft::upload("", pdf).into_entry().unwrap();

    assert_eq!(video.kind, MediaKind::Video);
    assert!(video.viewable_inline);
    assert_eq!(pdf.kind, MediaKind::Document);
    assert_eq!(pdf.name, "manual.pdf");
    assert!(!pdf.viewable_inline);
}

#[test]
fn uploaded_media_defaults_can_be_overridden() {
    let mut image = MediaDraft::upload("cat", FilePayload::new("cat.png", "image/png", vec![0]));
    image.viewable_inline = false;
    let image = image.into_entry().unwrap();
    assert_eq!(image.kind, MediaKind::Image);
    assert!(!image.viewable_inline);

    let mut clip = MediaDraft::upload("clip", FilePayload::new("clip.bin", "", vec![0]));
    assert_eq!(clip.kind, MediaKind::Document);
    clip.kind = MediaKind::Video;
    clip.viewable_inline = true;
    let clip = clip.into_entry().unwrap();
    assert_eq!(clip.kind, MediaKind::Video);
    assert!(clip.viewable_inline);
    assert_eq!(clip.url, "data:application/octet-stream;base64,AA==");
}

#[test]
fn uploaded_document_cannot_be_made_inline() {
    let mut pdf = MediaDraft::upload("", FilePayload::new("manual.pdf", "application/pdf", vec![0]));
    pdf.viewable_inline = true;

    assert!(!pdf.into_entry().unwrap().viewable_inline);
}

#[test]
fn documents_never_store_the_inline_flag() {
    let entry = MediaDraft::link("notes", "https://example.com/notes.txt", MediaKind::Document, true)
        .into_entry()
        .unwrap();

    assert!(!entry.viewable_inline);
    assert!(!entry.can_view_inline());
}

#[test]
fn media_draft_requires_url_or_file() {
    assert!(is_validation(
        MediaDraft::link("cat", "", MediaKind::Image, true).into_entry()
    ));
    assert!(is_validation(
        MediaDraft::link("", "https://example.com/cat.png", MediaKind::Image, true).into_entry()
    ));
}

#[test]
fn empty_media_type_falls_back_to_octet_stream() {
    let file = FilePayload::new("blob", "", b"hi".to_vec());
    assert_eq!(file.to_data_uri(), "data:application/octet-stream;base64,aGk=");
    assert_eq!(file.media_kind(), MediaKind::Document);
}

#[test]
fn read_infers_media_type_from_extension() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("Screenshot.PNG");
    std::fs::File::create(&path)
        .unwrap()
        .write_all(b"\x89PNG")
        .unwrap();

    let payload = FilePayload::read(&path).unwrap();

    assert_eq!(payload.file_name, "Screenshot.PNG");
    assert_eq!(payload.media_type, "image/png");
    assert_eq!(payload.bytes, b"\x89PNG");
    assert_eq!(payload.media_kind(), MediaKind::Image);
}

#[test]
fn read_unknown_extension_is_a_document() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("save.dat");
    std::fs::write(&path, [1u8, 2, 3]).unwrap();

    let payload = FilePayload::read(&path).unwrap();

    assert_eq!(payload.media_type, "application/octet-stream");
    assert_eq!(payload.media_kind(), MediaKind::Document);
}

#[test]
fn read_missing_file_is_io_error() {
    let dir = tempfile::TempDir::new().unwrap();
    assert!(matches!(
        FilePayload::read(dir.path().join("missing.png")),
        Err(LaunchdeckError::Io(_))
    ));
}

#[test]
fn legacy_field_names_deserialize() {
    let game: LaunchEntry = serde_json::from_str(
        r#"{"id":"1","name":"Steam","url":"data:application/octet-stream;base64,AA==","type":"local","isFile":true}"#,
    )
    .unwrap();
    assert_eq!(game.kind, LaunchKind::Local);
    assert!(game.is_embedded_file);

    let file: MediaEntry = serde_json::from_str(
        r#"{"id":"2","name":"cat","url":"https://example.com/cat.png","type":"image","canViewInSite":true}"#,
    )
    .unwrap();
    assert_eq!(file.kind, MediaKind::Image);
    assert!(file.can_view_inline());
}

#[test]
fn kinds_parse_from_lowercase_names() {
    assert_eq!("link".parse::<LaunchKind>().unwrap(), LaunchKind::Link);
    assert_eq!("video".parse::<MediaKind>().unwrap(), MediaKind::Video);
    assert!("Video".parse::<MediaKind>().is_err());
    assert_eq!(MediaKind::Document.to_string(), "document");
}
