//! Integration tests for ingesting and merging decks.

use pdfdeck::Deck;
use pdfdeck::collection::Candidate;
use pdfdeck::io::collect_candidates;
use pdfdeck::view::MergeButton;

use crate::common::{output_config, page_tags, page_tags_of, pdf_bytes, temp_dir, write_pdf};

#[tokio::test]
async fn test_merge_two_files_from_disk() {
    let dir = temp_dir();
    let a = write_pdf(dir.path(), "a.pdf", "a", 2);
    let b = write_pdf(dir.path(), "b.pdf", "b", 3);

    let mut deck = Deck::new(output_config(dir.path()));
    deck.ingest([Candidate::from_path(a), Candidate::from_path(b)])
        .await;

    let (stats, write) = deck.merge_and_save().await.unwrap();

    assert_eq!(stats.files_merged, 2);
    assert_eq!(stats.total_pages, 5);
    assert_eq!(write.output_path, dir.path().join("merged-pdfs.pdf"));
    assert_eq!(
        page_tags_of(&write.output_path),
        ["a.p1", "a.p2", "b.p1", "b.p2", "b.p3"]
    );
    assert_eq!(deck.merge_button(), MergeButton::Succeeded);
}

#[tokio::test]
async fn test_merge_after_moving_last_to_front() {
    let dir = temp_dir();
    let mut deck = Deck::new(output_config(dir.path()));
    deck.ingest(
        ["a", "b", "c"]
            .map(|tag| Candidate::pdf(format!("{tag}.pdf"), pdf_bytes(tag, 1))),
    )
    .await;

    assert!(deck.reorder(2, 0).await.unwrap());

    let labels: Vec<&str> = deck.grid().tiles.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["c.pdf", "a.pdf", "b.pdf"]);

    let merged = deck.merge().await.unwrap();
    assert_eq!(page_tags(&merged.bytes), ["c.p1", "a.p1", "b.p1"]);
}

#[tokio::test]
async fn test_glob_ingestion_in_sorted_order() {
    let dir = temp_dir();
    write_pdf(dir.path(), "02-body.pdf", "body", 2);
    write_pdf(dir.path(), "01-cover.pdf", "cover", 1);
    std::fs::write(dir.path().join("03-notes.txt"), b"not a pdf").unwrap();

    let pattern = format!("{}/*", dir.path().display());
    let candidates = collect_candidates([pattern]).unwrap();
    assert_eq!(candidates.len(), 3);

    let mut deck = Deck::new(output_config(dir.path()));
    let outcome = deck.ingest(candidates).await;

    assert_eq!(outcome.accepted.len(), 2);
    assert_eq!(outcome.rejected, ["03-notes.txt"]);

    let merged = deck.merge().await.unwrap();
    assert_eq!(page_tags(&merged.bytes), ["cover.p1", "body.p1", "body.p2"]);
}

#[tokio::test]
async fn test_incremental_ingestion_appends() {
    let mut deck = Deck::new(output_config(temp_dir().path()));

    deck.ingest([Candidate::pdf("a.pdf", pdf_bytes("a", 1))]).await;
    assert!(!deck.grid().merge_enabled);

    deck.files_drag_enter();
    assert!(deck.overlay().is_visible());
    deck.files_drop([Candidate::pdf("b.pdf", pdf_bytes("b", 1))])
        .await;

    assert!(deck.grid().merge_enabled);
    let merged = deck.merge().await.unwrap();
    assert_eq!(page_tags(&merged.bytes), ["a.p1", "b.p1"]);
}

#[tokio::test]
async fn test_previews_report_page_geometry() {
    let mut deck = Deck::new(output_config(temp_dir().path()));
    deck.ingest([Candidate::pdf("a4.pdf", pdf_bytes("a4", 3))])
        .await;

    let tile = &deck.grid().tiles[0];
    match &tile.preview {
        pdfdeck::view::TilePreview::Rendered(preview) => {
            // 595 x 842 points at scale 0.3
            assert_eq!((preview.width, preview.height), (179, 253));
            assert_eq!(preview.page_count, 3);
        }
        other => panic!("expected a rendered preview, got {other:?}"),
    }
}

#[tokio::test]
async fn test_grid_serializes_for_front_ends() {
    let mut deck = Deck::new(output_config(temp_dir().path()));
    deck.ingest([
        Candidate::pdf("a-very-long-document-name.pdf", pdf_bytes("a", 1)),
        Candidate::pdf("b.pdf", pdf_bytes("b", 1)),
    ])
    .await;

    let json = serde_json::to_value(deck.grid()).unwrap();
    assert_eq!(json["tiles"][0]["label"], "a-very-long-...");
    assert_eq!(json["tiles"][0]["title"], "a-very-long-document-name.pdf");
    assert_eq!(json["mergeEnabled"], true);
    assert_eq!(json["emptyPromptVisible"], false);
}
