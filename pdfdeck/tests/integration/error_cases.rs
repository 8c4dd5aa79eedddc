//! Integration tests for error handling and edge cases.

use pdfdeck::collection::{Candidate, MediaType};
use pdfdeck::config::OverwriteMode;
use pdfdeck::error::DeckError;
use pdfdeck::io::collect_candidates;
use pdfdeck::view::MergeButton;
use pdfdeck::{Config, Deck};

use crate::common::{output_config, pdf_bytes, temp_dir, write_pdf};

#[tokio::test]
async fn test_merge_requires_two_documents() {
    let dir = temp_dir();
    let mut deck = Deck::new(output_config(dir.path()));

    let err = deck.merge_and_save().await.unwrap_err();
    assert!(matches!(err, DeckError::NotEnoughDocuments { count: 0 }));

    deck.ingest([Candidate::pdf("a.pdf", pdf_bytes("a", 1))]).await;
    let err = deck.merge_and_save().await.unwrap_err();
    assert!(matches!(err, DeckError::NotEnoughDocuments { count: 1 }));
    assert_eq!(err.exit_code(), 1);

    assert!(!dir.path().join("merged-pdfs.pdf").exists());
}

#[tokio::test]
async fn test_corrupt_document_aborts_whole_merge() {
    let dir = temp_dir();
    let good = write_pdf(dir.path(), "good.pdf", "g", 2);
    let broken = dir.path().join("broken.pdf");
    std::fs::write(&broken, b"this is not a real document").unwrap();

    let mut deck = Deck::new(output_config(dir.path()));
    deck.ingest([Candidate::from_path(good), Candidate::from_path(broken)])
        .await;

    let err = deck.merge_and_save().await.unwrap_err();

    match &err {
        DeckError::DecodeFailed { name, .. } => assert_eq!(name, "broken.pdf"),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(err.exit_code(), 3);
    assert!(!dir.path().join("merged-pdfs.pdf").exists());
    assert_eq!(deck.merge_button(), MergeButton::Failed);
    assert_eq!(deck.collection().count(), 2);
}

#[tokio::test]
async fn test_corrupt_document_still_gets_a_tile() {
    let mut deck = Deck::new(Config::default());
    deck.ingest([
        Candidate::pdf("a.pdf", pdf_bytes("a", 1)),
        Candidate::from_bytes("junk.pdf", MediaType::pdf(), vec![0u8; 32]),
    ])
    .await;

    assert_eq!(deck.grid().len(), 2);
    assert_eq!(deck.grid().placeholder_count(), 1);
    assert!(deck.grid().tiles[1].preview.is_placeholder());
}

#[tokio::test]
async fn test_missing_file_is_reported_by_name() {
    let dir = temp_dir();
    let a = write_pdf(dir.path(), "a.pdf", "a", 1);
    let candidates = collect_candidates([
        a.display().to_string(),
        dir.path().join("gone.pdf").display().to_string(),
    ])
    .unwrap();

    let mut deck = Deck::new(output_config(dir.path()));
    deck.ingest(candidates).await;
    assert_eq!(deck.collection().count(), 2);

    let err = deck.merge().await.unwrap_err();
    assert!(matches!(err, DeckError::DecodeFailed { ref name, .. } if name == "gone.pdf"));
}

#[tokio::test]
async fn test_non_pdf_only_ingestion_changes_nothing() {
    let mut deck = Deck::new(Config::default());
    let outcome = deck
        .ingest([
            Candidate::from_path("photo.JPG"),
            Candidate::from_bytes("data.bin", MediaType::new("application/octet-stream"), vec![1]),
        ])
        .await;

    assert!(!outcome.changed());
    assert_eq!(outcome.rejected.len(), 2);
    assert!(deck.collection().is_empty());
    assert!(deck.grid().empty_prompt_visible);
}

#[tokio::test]
async fn test_out_of_range_reorder_leaves_deck_unchanged() {
    let mut deck = Deck::new(Config::default());
    deck.ingest([
        Candidate::pdf("a.pdf", pdf_bytes("a", 1)),
        Candidate::pdf("b.pdf", pdf_bytes("b", 1)),
    ])
    .await;
    let before = deck.collection().ids();

    let err = deck.reorder(0, 2).await.unwrap_err();
    assert!(matches!(err, DeckError::InvalidPosition { position: 2, len: 2 }));
    assert_eq!(deck.collection().ids(), before);
}

#[tokio::test]
async fn test_existing_output_is_not_clobbered() {
    let dir = temp_dir();
    let target = dir.path().join("merged-pdfs.pdf");
    std::fs::write(&target, b"previous").unwrap();

    let config = Config {
        overwrite_mode: OverwriteMode::NoClobber,
        ..output_config(dir.path())
    };
    let mut deck = Deck::new(config);
    deck.ingest([
        Candidate::pdf("a.pdf", pdf_bytes("a", 1)),
        Candidate::pdf("b.pdf", pdf_bytes("b", 1)),
    ])
    .await;

    let err = deck.merge_and_save().await.unwrap_err();
    assert!(matches!(err, DeckError::OutputExists { .. }));
    assert_eq!(err.exit_code(), 4);
    assert_eq!(std::fs::read(&target).unwrap(), b"previous");
}

#[test]
fn test_invalid_config_rejected() {
    let config = Config {
        output_name: "merged.txt".into(),
        ..Config::default()
    };
    assert!(config.validate().is_err());
}
