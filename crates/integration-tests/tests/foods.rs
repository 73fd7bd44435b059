//! Food catalog screen against the mock API, including the 김치 roundtrip.

#![allow(clippy::unwrap_used)]

use fridgemate_app::screens::FoodsScreen;
use fridgemate_app::{AcceptAll, DeclineAll};
use fridgemate_integration_tests::TestServer;

#[tokio::test]
async fn test_create_untyped_food_then_delete_it() {
    let server = TestServer::spawn().await;
    let mut screen = FoodsScreen::new(&server.client());

    screen.open_create();
    screen.form.name = "김치".to_owned();
    assert!(screen.submit().await);

    // The successful submit closed the form and reloaded the list.
    let visible = screen.visible_foods();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "김치");
    assert_eq!(visible[0].type_display(), "-");

    let id = visible[0].id;
    assert!(screen.delete(id, &AcceptAll).await);
    assert!(screen.visible_foods().is_empty());
}

#[tokio::test]
async fn test_declined_confirmation_sends_no_delete() {
    let server = TestServer::spawn().await;
    let id = server.seed_food("우유", Some("유제품"));

    let mut screen = FoodsScreen::new(&server.client());
    screen.reload().await;

    assert!(!screen.delete(id.into(), &DeclineAll).await);
    assert_eq!(server.calls("DELETE /api/foods/{id}"), 0);
    assert_eq!(screen.visible_foods().len(), 1);
}

#[tokio::test]
async fn test_type_filter_uses_catalog_types() {
    let server = TestServer::spawn().await;
    server.seed_food("김치", Some("반찬"));
    server.seed_food("우유", Some("유제품"));
    server.seed_food("깍두기", Some("반찬"));

    let mut screen = FoodsScreen::new(&server.client());
    screen.reload().await;

    assert_eq!(screen.available_types(), ["반찬", "유제품"]);
    screen.select_type("반찬");
    let names: Vec<&str> = screen.visible_foods().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["김치", "깍두기"]);
}

#[tokio::test]
async fn test_image_upload_lands_on_the_form() {
    let server = TestServer::spawn().await;
    let mut screen = FoodsScreen::new(&server.client());

    screen.open_create();
    screen.form.name = "김치".to_owned();
    assert!(screen.attach_image("kimchi.png", "image/png", vec![0x89, 0x50]).await);
    assert_eq!(screen.form.image_url.as_deref(), Some("/uploads/kimchi.png"));

    assert!(screen.submit().await);
    let visible = screen.visible_foods();
    assert_eq!(visible[0].image_url.as_deref(), Some("/uploads/kimchi.png"));
}

#[tokio::test]
async fn test_list_by_type_wrapper_hits_the_type_route() {
    let server = TestServer::spawn().await;
    server.seed_food("김치", Some("반찬"));
    server.seed_food("우유", Some("유제품"));

    let foods = server.client().foods().list_by_type("반찬").await.unwrap();
    assert_eq!(foods.len(), 1);
    assert_eq!(foods[0].name, "김치");
    assert_eq!(server.calls("GET /api/foods/type/{type}"), 1);
}

#[tokio::test]
async fn test_failed_load_shows_fixed_message() {
    let server = TestServer::spawn().await;
    server.fail_everything();

    let mut screen = FoodsScreen::new(&server.client());
    screen.reload().await;
    assert_eq!(screen.list().error(), Some("음식 목록을 불러오는데 실패했습니다."));
}

#[tokio::test]
async fn test_failed_submit_keeps_the_form_open() {
    let server = TestServer::spawn().await;
    let mut screen = FoodsScreen::new(&server.client());

    screen.open_create();
    screen.form.name = "김치".to_owned();
    server.fail_everything();

    assert!(!screen.submit().await);
    assert_eq!(screen.banner(), Some("음식 생성에 실패했습니다."));
    assert!(screen.mode().is_open());
    assert_eq!(screen.form.name, "김치");

    // The same action retried after recovery succeeds.
    server.heal();
    assert!(screen.submit().await);
    assert!(!screen.mode().is_open());
}

#[tokio::test]
async fn test_late_response_from_an_older_reload_is_discarded() {
    let server = TestServer::spawn().await;
    server.seed_food("김치", Some("반찬"));

    let client = server.client();
    let api = client.foods();
    let mut screen = FoodsScreen::new(&client);

    // An early reload whose response is held back while a newer one runs.
    let slow = screen.begin_load();
    let slow_response = api.list().await;

    server.seed_food("우유", Some("유제품"));
    let fast = screen.begin_load();
    let fast_response = api.list().await;
    screen.finish_load(fast, fast_response);
    assert_eq!(screen.visible_foods().len(), 2);

    // The older response arrives last and must not overwrite the newer one.
    screen.finish_load(slow, slow_response);
    let names: Vec<&str> = screen.visible_foods().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["김치", "우유"]);
}
