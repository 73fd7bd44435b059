//! Refrigerator commands for the signed-in user.

use chrono::Local;

use fridgemate_app::screens::FridgeScreen;
use fridgemate_app::{AcceptAll, ListState};
use fridgemate_core::views::Tab;
use fridgemate_core::{EntryId, FoodId};

use super::{CliError, Context, StdinConfirm, screen_failure};

/// List the refrigerator's contents with D-day expiry countdowns.
#[allow(clippy::print_stdout)]
pub async fn list(food_type: Option<&str>) -> Result<(), CliError> {
    let ctx = Context::from_env()?;
    let user_id = ctx.require_user()?;

    let mut screen = FridgeScreen::new(&ctx.api, user_id);
    screen.reload().await;

    if let ListState::Error(message) = screen.entries() {
        return Err(screen_failure(Some(message)));
    }
    if let Some(food_type) = food_type {
        screen.select_tab(Tab::Type(food_type.to_owned()));
    }

    let today = Local::now().date_naive();
    println!(
        "{:<6} {:<20} {:<12} {:<10} {:<8} 유통기한",
        "ID", "음식", "종류", "수량", "단위"
    );
    for entry in screen.visible_entries() {
        let quantity = entry.quantity.map(|q| q.to_string()).unwrap_or_else(|| "-".to_owned());
        let unit = entry.unit.map_or("-", |u| u.as_str());
        println!(
            "{:<6} {:<20} {:<12} {:<10} {:<8} {}",
            entry.id,
            entry.food_name_display(),
            entry.food_type_display(),
            quantity,
            unit,
            FridgeScreen::expiry_display(entry, today)
        );
    }
    Ok(())
}

/// Put a food into the refrigerator.
#[allow(clippy::print_stdout)]
pub async fn add(food_id: i64, quantity: &str, unit: &str, exp_date: &str) -> Result<(), CliError> {
    let ctx = Context::from_env()?;
    let user_id = ctx.require_user()?;

    let mut screen = FridgeScreen::new(&ctx.api, user_id);
    screen.open_create();
    screen.form.food_id = Some(FoodId::from(food_id));
    screen.form.quantity = quantity.to_owned();
    screen.form.unit = unit.parse().ok();
    screen.form.exp_date = exp_date.to_owned();

    if !screen.submit().await {
        return Err(screen_failure(screen.banner()));
    }
    println!("냉장고에 추가되었습니다.");
    Ok(())
}

/// Update an entry. Omitted options keep the current value.
#[allow(clippy::print_stdout)]
pub async fn update(
    id: i64,
    quantity: Option<&str>,
    unit: Option<&str>,
    exp_date: Option<&str>,
) -> Result<(), CliError> {
    let ctx = Context::from_env()?;
    let user_id = ctx.require_user()?;
    let entry = ctx.api.fridge().get(EntryId::from(id)).await?;

    let mut screen = FridgeScreen::new(&ctx.api, user_id);
    screen.open_edit(&entry);
    if let Some(quantity) = quantity {
        screen.form.quantity = quantity.to_owned();
    }
    if let Some(unit) = unit {
        screen.form.unit = unit.parse().ok();
    }
    if let Some(exp_date) = exp_date {
        screen.form.exp_date = exp_date.to_owned();
    }

    if !screen.submit().await {
        return Err(screen_failure(screen.banner()));
    }
    println!("냉장고가 수정되었습니다.");
    Ok(())
}

/// Take an entry out of the refrigerator after confirmation.
#[allow(clippy::print_stdout)]
pub async fn remove(id: i64, yes: bool) -> Result<(), CliError> {
    let ctx = Context::from_env()?;
    let user_id = ctx.require_user()?;
    let mut screen = FridgeScreen::new(&ctx.api, user_id);

    let deleted = if yes {
        screen.delete(EntryId::from(id), &AcceptAll).await
    } else {
        screen.delete(EntryId::from(id), &StdinConfirm).await
    };

    if deleted {
        println!("냉장고에서 삭제되었습니다.");
    } else if let Some(banner) = screen.banner() {
        return Err(screen_failure(Some(banner)));
    } else {
        println!("취소되었습니다.");
    }
    Ok(())
}
