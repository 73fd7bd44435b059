//! Food catalog commands.

use std::path::Path;

use fridgemate_app::screens::FoodsScreen;
use fridgemate_app::{AcceptAll, ListState};
use fridgemate_core::FoodId;

use super::{CliError, Context, StdinConfirm, screen_failure};

/// List foods, optionally narrowed to one type.
#[allow(clippy::print_stdout)]
pub async fn list(food_type: Option<&str>) -> Result<(), CliError> {
    let ctx = Context::from_env()?;
    let mut screen = FoodsScreen::new(&ctx.api);
    screen.reload().await;

    if let ListState::Error(message) = screen.list() {
        return Err(screen_failure(Some(message)));
    }
    if let Some(food_type) = food_type {
        screen.select_type(food_type);
    }

    println!("{:<6} {:<20} {:<12} 이미지", "ID", "이름", "종류");
    for food in screen.visible_foods() {
        println!(
            "{:<6} {:<20} {:<12} {}",
            food.id,
            food.name,
            food.type_display(),
            food.image_url.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}

/// Create a food, uploading and attaching an image first when one is given.
#[allow(clippy::print_stdout)]
pub async fn create(
    name: &str,
    food_type: Option<&str>,
    image: Option<&Path>,
) -> Result<(), CliError> {
    let ctx = Context::from_env()?;
    let mut screen = FoodsScreen::new(&ctx.api);
    screen.open_create();
    screen.form.name = name.to_owned();
    screen.form.food_type = food_type.unwrap_or_default().to_owned();

    if let Some(path) = image {
        attach(&mut screen, path).await?;
    }

    if !screen.submit().await {
        return Err(screen_failure(screen.banner()));
    }
    println!("음식이 생성되었습니다.");
    Ok(())
}

/// Update a food. Omitted options keep the current value.
#[allow(clippy::print_stdout)]
pub async fn update(
    id: i64,
    name: Option<&str>,
    food_type: Option<&str>,
    image: Option<&Path>,
) -> Result<(), CliError> {
    let ctx = Context::from_env()?;
    let food = ctx.api.foods().get(FoodId::from(id)).await?;

    let mut screen = FoodsScreen::new(&ctx.api);
    screen.open_edit(&food);
    if let Some(name) = name {
        screen.form.name = name.to_owned();
    }
    if let Some(food_type) = food_type {
        screen.form.food_type = food_type.to_owned();
    }
    if let Some(path) = image {
        attach(&mut screen, path).await?;
    }

    if !screen.submit().await {
        return Err(screen_failure(screen.banner()));
    }
    println!("음식이 수정되었습니다.");
    Ok(())
}

/// Delete a food after confirmation.
#[allow(clippy::print_stdout)]
pub async fn delete(id: i64, yes: bool) -> Result<(), CliError> {
    let ctx = Context::from_env()?;
    let mut screen = FoodsScreen::new(&ctx.api);

    let deleted = if yes {
        screen.delete(FoodId::from(id), &AcceptAll).await
    } else {
        screen.delete(FoodId::from(id), &StdinConfirm).await
    };

    if deleted {
        println!("음식이 삭제되었습니다.");
    } else if let Some(banner) = screen.banner() {
        return Err(screen_failure(Some(banner)));
    } else {
        println!("취소되었습니다.");
    }
    Ok(())
}

/// Read a local file and run it through the screen's upload path.
async fn attach(screen: &mut FoodsScreen, path: &Path) -> Result<(), CliError> {
    let bytes = std::fs::read(path).map_err(|source| CliError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    let file_name = path
        .file_name()
        .map_or_else(|| "upload".to_owned(), |n| n.to_string_lossy().into_owned());

    if !screen.attach_image(&file_name, content_type_of(path), bytes).await {
        return Err(screen_failure(screen.banner()));
    }
    Ok(())
}

/// Content type from the file extension. Unknown extensions come back as a
/// non-image type so the screen rejects them with its own message.
fn content_type_of(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .as_deref()
    {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_of_common_extensions() {
        assert_eq!(content_type_of(Path::new("a.JPG")), "image/jpeg");
        assert_eq!(content_type_of(Path::new("a.png")), "image/png");
        assert_eq!(content_type_of(Path::new("a.txt")), "application/octet-stream");
        assert_eq!(content_type_of(Path::new("noext")), "application/octet-stream");
    }
}
