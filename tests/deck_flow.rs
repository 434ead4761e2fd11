//! End-to-end deck behaviour over the mock service.

use std::sync::Arc;

use paperdeck::config::{build_service, Config, ServiceConfig, ServiceMode};
use paperdeck::deck::{
    CardPhase, Deck, InstantDriver, TimedDriver, EXIT_DURATION, SWIPE_THRESHOLD,
};
use paperdeck::{PaperId, SwipeDirection, SwipeOutcome};

const VIEWPORT: f32 = 400.0;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn mock_config() -> Config {
    Config {
        service: ServiceConfig {
            mode: ServiceMode::Mock,
            ..Default::default()
        },
    }
}

#[tokio::test]
async fn browse_the_whole_deck() {
    init_tracing();
    let service = build_service(&mock_config());
    let mut deck = Deck::load(service, 10, VIEWPORT, Arc::new(InstantDriver))
        .await
        .unwrap();

    assert_eq!(deck.len(), 3);
    assert_eq!(
        deck.current_card().unwrap().title,
        "Attention Is All You Need"
    );

    // Like the first, dislike the second, button-swipe the third.
    deck.begin_drag();
    let first = deck.end_drag(SWIPE_THRESHOLD + 80.0, -12.0).await;
    assert_eq!(first, SwipeOutcome::Committed(SwipeDirection::Right));
    assert!(deck.current_card().unwrap().title.starts_with("BERT"));

    deck.begin_drag();
    let second = deck.end_drag(-(SWIPE_THRESHOLD + 80.0), 4.0).await;
    assert_eq!(second, SwipeOutcome::Committed(SwipeDirection::Left));

    let third = deck.swipe_current(SwipeDirection::Right).await;
    assert_eq!(third, SwipeOutcome::Committed(SwipeDirection::Right));

    assert!(deck.is_exhausted());
    assert!(deck.current_card().is_none());
    assert_eq!(deck.remaining(), 0);
}

#[tokio::test]
async fn cancelled_swipe_keeps_the_card() {
    let service = build_service(&mock_config());
    let mut deck = Deck::load(service, 10, VIEWPORT, Arc::new(InstantDriver))
        .await
        .unwrap();

    deck.begin_drag();
    deck.update_drag(80.0, 20.0);
    assert_eq!(deck.phase(), CardPhase::Dragging);

    let outcome = deck.end_drag(80.0, 20.0).await;

    assert_eq!(outcome, SwipeOutcome::Cancelled);
    assert_eq!(deck.cursor(), 0);
    assert!(deck.drag_offset().is_origin());
    assert_eq!(deck.phase(), CardPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn exit_animation_completes_before_advance() {
    let service = build_service(&mock_config());
    let mut deck = Deck::load(service, 10, VIEWPORT, Arc::new(TimedDriver::new()))
        .await
        .unwrap();

    let start = tokio::time::Instant::now();
    deck.begin_drag();
    let outcome = deck.end_drag(SWIPE_THRESHOLD + 1.0, 0.0).await;

    // The commit only resolves after the full exit animation has run.
    assert_eq!(outcome, SwipeOutcome::Committed(SwipeDirection::Right));
    assert!(start.elapsed() >= EXIT_DURATION);
    assert_eq!(deck.cursor(), 1);
    assert!(deck.drag_offset().is_origin());
}

#[tokio::test]
async fn search_reaches_the_mock_service() {
    let service = build_service(&mock_config());

    let result = service.search_papers("bert").await.unwrap();

    assert_eq!(result.total, 1);
    assert_eq!(result.papers[0].id, PaperId::Numeric(2));
    assert!(!result.has_more);
}

#[tokio::test]
async fn deck_load_respects_page_size() {
    let service = build_service(&mock_config());
    let deck = Deck::load(service, 2, VIEWPORT, Arc::new(InstantDriver))
        .await
        .unwrap();

    // Single forward fetch: only the first page ends up in the session.
    assert_eq!(deck.len(), 2);
}

#[tokio::test]
async fn empty_deck_is_exhausted_from_the_start() {
    use paperdeck::services::MockPaperService;

    let service = Arc::new(MockPaperService::with_papers(Vec::new()));
    let mut deck = Deck::load(service, 10, VIEWPORT, Arc::new(InstantDriver))
        .await
        .unwrap();

    assert!(deck.is_exhausted());
    assert!(deck.current_card().is_none());

    deck.begin_drag();
    assert_eq!(deck.end_drag(500.0, 0.0).await, SwipeOutcome::Cancelled);
    deck.like_current().await.unwrap();
    deck.share_current();
    assert_eq!(deck.cursor(), 0);
}
