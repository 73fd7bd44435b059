//! Refrigerator screen against the mock API.

#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;

use fridgemate_app::screens::FridgeScreen;
use fridgemate_app::{AcceptAll, DeclineAll};
use fridgemate_core::UserId;
use fridgemate_core::views::Tab;
use fridgemate_integration_tests::TestServer;

#[tokio::test]
async fn test_list_is_scoped_to_the_user() {
    let server = TestServer::spawn().await;
    let me = server.seed_user("김철수", "kim@example.com", "pw");
    let other = server.seed_user("김영희", "lee@example.com", "pw");
    let kimchi = server.seed_food("김치", Some("반찬"));
    server.seed_entry(me, kimchi, 1.0, "개", "2024-06-01");
    server.seed_entry(other, kimchi, 3.0, "개", "2024-06-02");

    let mut screen = FridgeScreen::new(&server.client(), UserId::from(me));
    screen.reload().await;

    let entries = screen.visible_entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].food_name_display(), "김치");
    assert_eq!(server.calls("GET /api/userRefs/user/{userId}"), 1);
}

#[tokio::test]
async fn test_add_entry_roundtrips_both_date_spellings() {
    let server = TestServer::spawn().await;
    let me = server.seed_user("김철수", "kim@example.com", "pw");
    let kimchi = server.seed_food("김치", Some("반찬"));

    let mut screen = FridgeScreen::new(&server.client(), UserId::from(me));
    screen.open_create();
    screen.form.food_id = Some(kimchi.into());
    screen.form.quantity = "2".to_owned();
    screen.form.unit = Some("개".parse().unwrap());
    screen.form.exp_date = "2024-06-01".to_owned();

    // The client sends expDate; the mock, like the backend, answers with
    // exp_date. Both must land in the same field.
    assert!(screen.submit().await);
    let entries = screen.visible_entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(
        entries[0].exp_date,
        Some(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    );
    assert_eq!(entries[0].food_name_display(), "김치");
}

#[tokio::test]
async fn test_tabs_come_from_own_entries_not_the_catalog() {
    let server = TestServer::spawn().await;
    let me = server.seed_user("김철수", "kim@example.com", "pw");
    let kimchi = server.seed_food("김치", Some("반찬"));
    // In the catalog but not in the fridge; must not become a tab.
    server.seed_food("우유", Some("유제품"));
    server.seed_entry(me, kimchi, 1.0, "개", "2024-06-01");

    let mut screen = FridgeScreen::new(&server.client(), UserId::from(me));
    screen.reload().await;

    assert_eq!(screen.tabs(), [Tab::All, Tab::Type("반찬".to_owned())]);
}

#[tokio::test]
async fn test_update_entry_changes_quantity_and_date() {
    let server = TestServer::spawn().await;
    let me = server.seed_user("김철수", "kim@example.com", "pw");
    let kimchi = server.seed_food("김치", Some("반찬"));
    let entry_id = server.seed_entry(me, kimchi, 1.0, "개", "2024-06-01");

    let mut screen = FridgeScreen::new(&server.client(), UserId::from(me));
    screen.reload().await;
    let entry = screen.visible_entries()[0].clone();
    assert_eq!(i64::from(entry.id), entry_id);

    screen.open_edit(&entry);
    screen.form.quantity = "0.5".to_owned();
    screen.form.exp_date = "2024-06-10".to_owned();
    assert!(screen.submit().await);

    let updated = &screen.visible_entries()[0];
    assert_eq!(updated.quantity.unwrap().to_string(), "0.5");
    assert_eq!(
        updated.exp_date,
        Some(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap())
    );
}

#[tokio::test]
async fn test_declined_removal_sends_nothing() {
    let server = TestServer::spawn().await;
    let me = server.seed_user("김철수", "kim@example.com", "pw");
    let kimchi = server.seed_food("김치", Some("반찬"));
    let entry_id = server.seed_entry(me, kimchi, 1.0, "개", "2024-06-01");

    let mut screen = FridgeScreen::new(&server.client(), UserId::from(me));
    screen.reload().await;

    assert!(!screen.delete(entry_id.into(), &DeclineAll).await);
    assert_eq!(server.calls("DELETE /api/userRefs/{id}"), 0);

    assert!(screen.delete(entry_id.into(), &AcceptAll).await);
    assert!(screen.visible_entries().is_empty());
}

#[tokio::test]
async fn test_failed_load_shows_fixed_message() {
    let server = TestServer::spawn().await;
    server.fail_everything();

    let mut screen = FridgeScreen::new(&server.client(), UserId::from(1));
    screen.reload().await;
    assert_eq!(
        screen.entries().error(),
        Some("냉장고 목록을 불러오는데 실패했습니다.")
    );
}
