//! Recipe browsing commands.

use fridgemate_app::ListState;
use fridgemate_app::screens::{RecipeDetailScreen, RecipeListScreen};
use fridgemate_core::{Recipe, RecipeSeq};

use super::{CliError, Context, screen_failure};

/// List one page of recipes. When signed in, recipes matching the user's
/// fridge contents sort first.
#[allow(clippy::print_stdout)]
pub async fn list(page: u32) -> Result<(), CliError> {
    let ctx = Context::from_env()?;
    let user_id = ctx.session.current_user().map(|u| u.id);

    let mut screen = RecipeListScreen::new(&ctx.api, user_id);
    screen.go_to_page(page).await;

    print_recipes(screen.list())?;
    println!("({}페이지)", screen.page());
    Ok(())
}

/// Search recipes by name.
#[allow(clippy::print_stdout)]
pub async fn search(name: &str) -> Result<(), CliError> {
    let ctx = Context::from_env()?;
    let user_id = ctx.session.current_user().map(|u| u.id);

    let mut screen = RecipeListScreen::new(&ctx.api, user_id);
    screen.query = name.to_owned();
    screen.search().await;

    print_recipes(screen.list())
}

/// Show one recipe with nutrition and instruction steps.
#[allow(clippy::print_stdout)]
pub async fn show(seq: i64) -> Result<(), CliError> {
    let ctx = Context::from_env()?;
    let mut screen = RecipeDetailScreen::new(&ctx.api, RecipeSeq::from(seq));
    screen.reload().await;

    let recipe = match screen.recipe() {
        ListState::Loaded(recipe) => recipe,
        state => return Err(screen_failure(state.error())),
    };

    println!("{} (#{})", recipe.name, recipe.rcp_seq);
    if let Some(category) = &recipe.category {
        println!("분류: {category}");
    }
    if let Some(method) = &recipe.method {
        println!("조리법: {method}");
    }
    if let Some(ingredients) = &recipe.ingredients {
        println!("재료: {ingredients}");
    }
    print_nutrition(recipe);
    if let Some(tip) = &recipe.sodium_tip {
        println!("저염 팁: {tip}");
    }

    println!();
    for step in screen.steps() {
        println!("{}. {}", step.step, step.text);
        if let Some(image) = &step.image {
            println!("   ({image})");
        }
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_recipes(state: &ListState<Vec<Recipe>>) -> Result<(), CliError> {
    match state {
        ListState::Loaded(recipes) => {
            println!("{:<10} {:<28} {:<10} 조리법", "번호", "이름", "분류");
            for recipe in recipes {
                println!(
                    "{:<10} {:<28} {:<10} {}",
                    recipe.rcp_seq,
                    recipe.name,
                    recipe.category.as_deref().unwrap_or("-"),
                    recipe.method.as_deref().unwrap_or("-")
                );
            }
            Ok(())
        }
        state => Err(screen_failure(state.error())),
    }
}

#[allow(clippy::print_stdout)]
fn print_nutrition(recipe: &Recipe) {
    let fields = [
        ("열량", recipe.energy.as_deref(), "kcal"),
        ("탄수화물", recipe.carbohydrate.as_deref(), "g"),
        ("단백질", recipe.protein.as_deref(), "g"),
        ("지방", recipe.fat.as_deref(), "g"),
        ("나트륨", recipe.sodium.as_deref(), "mg"),
    ];
    let present: Vec<String> = fields
        .iter()
        .filter_map(|(label, value, suffix)| {
            value.map(|v| format!("{label} {v}{suffix}"))
        })
        .collect();
    if !present.is_empty() {
        println!("영양: {}", present.join(", "));
    }
    if let Some(weight) = &recipe.serving_weight {
        println!("중량: {weight}");
    }
}
