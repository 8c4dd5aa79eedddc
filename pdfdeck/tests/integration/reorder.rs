//! Integration tests for reordering and removing through the deck.

use rstest::rstest;
use std::collections::HashSet;
use std::time::{Duration, Instant};

use pdfdeck::collection::{Candidate, EntryId};
use pdfdeck::interaction::{Intent, InteractionEvent, Point};
use pdfdeck::{Config, Deck};

use crate::common::pdf_bytes;

async fn deck_of(tags: &[&str]) -> Deck {
    let mut deck = Deck::new(Config::default());
    deck.ingest(
        tags.iter()
            .map(|tag| Candidate::pdf(format!("{tag}.pdf"), pdf_bytes(tag, 1))),
    )
    .await;
    deck
}

fn order(deck: &Deck) -> Vec<String> {
    deck.collection()
        .entries()
        .iter()
        .map(|e| e.name().trim_end_matches(".pdf").to_string())
        .collect()
}

fn single_column() -> Config {
    let mut config = Config::default();
    config.layout.columns = 1;
    config.layout.tile_height = 100.0;
    config.layout.row_gap = 0.0;
    config
}

async fn single_column_deck(count: usize) -> Deck {
    let mut deck = Deck::new(single_column());
    deck.ingest((0..count).map(|n| Candidate::pdf(format!("{n}.pdf"), pdf_bytes(&n.to_string(), 1))))
        .await;
    deck
}

#[tokio::test]
async fn test_reorders_keep_a_permutation() {
    let mut deck = deck_of(&["a", "b", "c", "d", "e"]).await;
    let ids: HashSet<EntryId> = deck.collection().ids().into_iter().collect();

    for (from, to) in [(0, 4), (3, 1), (2, 2), (4, 0), (1, 3)] {
        deck.reorder(from, to).await.unwrap();
        assert_eq!(deck.collection().count(), 5);
        assert_eq!(deck.grid().len(), 5);
    }

    let after: HashSet<EntryId> = deck.collection().ids().into_iter().collect();
    assert_eq!(ids, after);
}

#[tokio::test]
async fn test_grid_follows_every_reorder() {
    let mut deck = deck_of(&["a", "b", "c", "d"]).await;

    deck.reorder(0, 3).await.unwrap();
    deck.reorder(1, 0).await.unwrap();

    let tiles: Vec<EntryId> = deck.grid().tiles.iter().map(|t| t.id).collect();
    assert_eq!(tiles, deck.collection().ids());
    assert_eq!(order(&deck), ["c", "b", "d", "a"]);
}

#[tokio::test]
async fn test_duplicate_names_get_distinct_identities() {
    let mut deck = Deck::new(Config::default());
    deck.ingest([
        Candidate::pdf("same.pdf", pdf_bytes("x", 1)),
        Candidate::pdf("same.pdf", pdf_bytes("y", 1)),
    ])
    .await;

    let ids = deck.collection().ids();
    assert_ne!(ids[0], ids[1]);

    deck.remove(ids[0]).await;
    assert_eq!(deck.collection().ids(), [ids[1]]);
}

#[tokio::test]
async fn test_identities_not_reused_after_removal() {
    let mut deck = deck_of(&["a", "b"]).await;
    let first = deck.collection().ids();

    deck.remove(first[1]).await;
    deck.ingest([Candidate::pdf("c.pdf", pdf_bytes("c", 1))]).await;

    let newest = deck.collection().ids()[1];
    assert!(!first.contains(&newest));
}

#[tokio::test]
async fn test_removal_is_idempotent() {
    let mut deck = deck_of(&["a", "b", "c"]).await;
    let b = deck.collection().ids()[1];

    assert!(deck.remove(b).await);
    let generation = deck.grid().generation;
    assert!(!deck.remove(b).await);

    assert_eq!(order(&deck), ["a", "c"]);
    assert_eq!(deck.grid().generation, generation);
}

#[rstest]
#[case(3, 0, 10.0)]
#[case(0, 3, 1_000.0)]
#[case(1, 2, 260.0)]
#[case(2, 0, 49.0)]
#[tokio::test]
async fn test_pointer_and_touch_drags_agree(
    #[case] dragged: usize,
    #[case] expected_to: usize,
    #[case] y: f32,
) {
    let mut pointer = single_column_deck(4).await;
    let mut touch = single_column_deck(4).await;

    let id = pointer.collection().ids()[dragged];
    pointer.handle(InteractionEvent::DragStart { id }).await.unwrap();
    pointer.handle(InteractionEvent::DragOver { y }).await.unwrap();
    let by_pointer = pointer.handle(InteractionEvent::Drop).await.unwrap();

    let id = touch.collection().ids()[dragged];
    let start = Instant::now();
    let origin = Point::new(20.0, touch.grid().tiles[dragged].rect.midpoint());
    touch
        .handle(InteractionEvent::TouchStart { id, point: origin, at: start })
        .await
        .unwrap();
    touch
        .handle(InteractionEvent::TouchMove {
            point: Point::new(20.0, y),
            at: start + Duration::from_millis(120),
        })
        .await
        .unwrap();
    let by_touch = touch
        .handle(InteractionEvent::TouchEnd {
            at: start + Duration::from_millis(200),
        })
        .await
        .unwrap();

    let expected = Some(Intent::Reorder {
        from: dragged,
        to: expected_to,
    });
    assert_eq!(by_pointer, expected);
    assert_eq!(by_touch, expected);
    assert_eq!(order(&pointer), order(&touch));
}

#[tokio::test]
async fn test_drop_in_place_does_not_rebuild() {
    let mut deck = single_column_deck(3).await;
    let id = deck.collection().ids()[1];
    let generation = deck.grid().generation;

    deck.handle(InteractionEvent::DragStart { id }).await.unwrap();
    deck.handle(InteractionEvent::DragOver { y: 120.0 }).await.unwrap();
    let intent = deck.handle(InteractionEvent::Drop).await.unwrap();

    assert_eq!(intent, None);
    assert_eq!(deck.grid().generation, generation);
}

#[tokio::test]
async fn test_long_press_then_confirm_removes() {
    let mut deck = deck_of(&["a", "b", "c"]).await;
    let b = deck.collection().ids()[1];
    let start = Instant::now();

    deck.handle(InteractionEvent::TouchStart {
        id: b,
        point: Point::new(5.0, 5.0),
        at: start,
    })
    .await
    .unwrap();
    deck.handle(InteractionEvent::TouchMove {
        point: Point::new(8.0, 9.0),
        at: start + Duration::from_millis(400),
    })
    .await
    .unwrap();
    let asked = deck
        .handle(InteractionEvent::Tick {
            at: start + Duration::from_millis(820),
        })
        .await
        .unwrap();

    assert_eq!(asked, Some(Intent::ConfirmDelete(b)));
    assert_eq!(deck.collection().count(), 3);

    deck.confirm_delete(true).await.unwrap();
    assert_eq!(order(&deck), ["a", "c"]);
}

#[tokio::test]
async fn test_delete_zone_lifecycle() {
    let mut deck = deck_of(&["a", "b"]).await;
    let a = deck.collection().ids()[0];

    assert!(!deck.delete_zone().visible);
    deck.handle(InteractionEvent::DragStart { id: a }).await.unwrap();
    assert!(deck.delete_zone().visible);
    deck.handle(InteractionEvent::DeleteZoneEnter).await.unwrap();
    assert!(deck.delete_zone().highlighted);
    deck.handle(InteractionEvent::DeleteZoneLeave).await.unwrap();
    assert!(!deck.delete_zone().highlighted);
    deck.handle(InteractionEvent::DragEnd).await.unwrap();

    assert!(!deck.delete_zone().visible);
    assert_eq!(deck.collection().count(), 2);
}
