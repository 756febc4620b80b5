//! One-shot menu import and the HTTP menu source.

use std::sync::Arc;

use little_lemon_app::remote::{HttpMenuSource, MenuSource, MenuSourceError};
use little_lemon_app::sync::sync_if_empty;
use little_lemon_app::{AppError, LittleLemon, SyncOutcome};
use little_lemon_core::{MenuItemId, Price};
use little_lemon_integration_tests::{FakeMenuSource, memory_state, sample_menu};
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MENU_JSON: &str = r#"{"menu":[
    {"id":1,"title":"Greek Salad","description":"Crispy lettuce, peppers, olives.","price":"10","image":"https://example.com/greekSalad.jpg","category":"starters"},
    {"id":2,"title":"Lemon Desert","description":"Lemon ricotta cake.","price":"10","image":"https://example.com/lemonDessert.jpg","category":"desserts"}
]}"#;

// =============================================================================
// Sync gating
// =============================================================================

#[tokio::test]
async fn test_launch_imports_into_empty_store() {
    let state = memory_state().await;
    let source = FakeMenuSource::shared();

    let mut app = LittleLemon::launch(state.clone(), source.clone())
        .await
        .unwrap();
    let outcome = app.wait_for_sync().await.unwrap();

    assert_eq!(outcome, Some(SyncOutcome::Imported(sample_menu().len())));
    assert_eq!(source.calls(), 1);
    assert_eq!(state.menu().fetch_all().await.unwrap(), sample_menu());
}

#[tokio::test]
async fn test_non_empty_store_never_fetches() {
    let state = memory_state().await;
    state.menu().insert_all(&sample_menu()[..2]).await.unwrap();
    let source = FakeMenuSource::shared();

    let mut app = LittleLemon::launch(state.clone(), source.clone())
        .await
        .unwrap();
    let outcome = app.wait_for_sync().await.unwrap();

    assert_eq!(outcome, Some(SyncOutcome::AlreadyPopulated));
    assert_eq!(source.calls(), 0);
    assert_eq!(state.menu().fetch_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_second_launch_in_process_does_not_sync_again() {
    let state = memory_state().await;
    let source = FakeMenuSource::shared();

    let mut first = LittleLemon::launch(state.clone(), source.clone())
        .await
        .unwrap();
    first.wait_for_sync().await.unwrap();

    let mut second = LittleLemon::launch(state.clone(), source.clone())
        .await
        .unwrap();
    assert_eq!(second.wait_for_sync().await.unwrap(), None);
    assert_eq!(source.calls(), 1);
}

#[tokio::test]
async fn test_observer_sees_imported_rows() {
    let state = memory_state().await;
    let mut rows = state.menu().get_all().await.unwrap();
    assert!(rows.borrow_and_update().is_empty());

    let mut app = LittleLemon::launch(state.clone(), FakeMenuSource::shared())
        .await
        .unwrap();
    app.wait_for_sync().await.unwrap();

    rows.changed().await.unwrap();
    assert_eq!(rows.borrow_and_update().len(), sample_menu().len());
}

#[tokio::test]
async fn test_session_rows_follow_the_import() {
    let mut app = LittleLemon::launch(memory_state().await, FakeMenuSource::shared())
        .await
        .unwrap();
    app.wait_for_sync().await.unwrap();

    // Subscribing after the import starts from the imported rows
    let rows = app.menu_items().await.unwrap();
    assert_eq!(*rows.borrow(), sample_menu());
}

// =============================================================================
// HTTP source
// =============================================================================

async fn menu_server(status: u16, body: &str, expected_calls: u64) -> (MockServer, Url) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/menu.json"))
        .respond_with(ResponseTemplate::new(status).set_body_raw(body, "text/plain"))
        .expect(expected_calls)
        .mount(&server)
        .await;

    let url = Url::parse(&format!("{}/menu.json", server.uri())).unwrap();
    (server, url)
}

#[tokio::test]
async fn test_http_source_decodes_text_plain_body() {
    let (_server, url) = menu_server(200, MENU_JSON, 1).await;
    let source = HttpMenuSource::new(url);

    let items = source.fetch_menu().await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, MenuItemId::new(1));
    assert_eq!(items[0].price, Price::from_cents(1000));
    assert_eq!(items[1].category, "desserts");
}

#[tokio::test]
async fn test_http_source_reports_status() {
    let (_server, url) = menu_server(404, "missing", 1).await;
    let source = HttpMenuSource::new(url);

    let err = source.fetch_menu().await.unwrap_err();
    assert!(matches!(err, MenuSourceError::Status { status: 404 }));
}

#[tokio::test]
async fn test_http_source_reports_bad_json() {
    let (_server, url) = menu_server(200, "{\"menu\": 42}", 1).await;
    let source = HttpMenuSource::new(url);

    let err = source.fetch_menu().await.unwrap_err();
    assert!(matches!(err, MenuSourceError::Parse(_)));
}

#[tokio::test]
async fn test_failed_fetch_leaves_store_empty() {
    let state = memory_state().await;
    let (_server, url) = menu_server(500, "", 1).await;
    let source: Arc<dyn MenuSource> = Arc::new(HttpMenuSource::new(url));

    let result = sync_if_empty(state.menu(), source.as_ref()).await;
    assert!(matches!(result, Err(AppError::MenuSource(_))));
    assert!(state.menu().is_empty().await.unwrap());
}

#[tokio::test]
async fn test_endpoint_is_fetched_once_across_launches() {
    let state = memory_state().await;
    // The mock server checks on drop that exactly one GET arrived
    let (_server, url) = menu_server(200, MENU_JSON, 1).await;
    let source: Arc<dyn MenuSource> = Arc::new(HttpMenuSource::new(url));

    let mut first = LittleLemon::launch(state.clone(), source.clone())
        .await
        .unwrap();
    assert_eq!(
        first.wait_for_sync().await.unwrap(),
        Some(SyncOutcome::Imported(2))
    );

    let mut second = LittleLemon::launch(state.clone(), source).await.unwrap();
    assert_eq!(second.wait_for_sync().await.unwrap(), None);
    assert_eq!(state.menu().fetch_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_populated_store_never_calls_endpoint() {
    let state = memory_state().await;
    state.menu().insert_all(&sample_menu()).await.unwrap();
    let (_server, url) = menu_server(200, MENU_JSON, 0).await;

    let outcome = sync_if_empty(state.menu(), &HttpMenuSource::new(url))
        .await
        .unwrap();
    assert_eq!(outcome, SyncOutcome::AlreadyPopulated);
}
