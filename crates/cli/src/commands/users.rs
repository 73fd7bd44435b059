//! User management commands.

use fridgemate_app::screens::UsersScreen;
use fridgemate_app::{AcceptAll, ListState};
use fridgemate_core::UserId;

use super::{CliError, Context, StdinConfirm, screen_failure};

/// List all users.
#[allow(clippy::print_stdout)]
pub async fn list() -> Result<(), CliError> {
    let ctx = Context::from_env()?;
    let mut screen = UsersScreen::new(&ctx.api);
    screen.reload().await;

    match screen.list() {
        ListState::Loaded(users) => {
            println!("{:<6} {:<16} {:<28} {:<16}", "ID", "이름", "이메일", "전화번호");
            for user in users {
                println!(
                    "{:<6} {:<16} {:<28} {:<16}",
                    user.id,
                    user.name,
                    user.email,
                    user.phone_display()
                );
            }
        }
        state => return Err(screen_failure(state.error())),
    }
    Ok(())
}

/// Create a user.
#[allow(clippy::print_stdout)]
pub async fn create(
    name: &str,
    email: &str,
    password: &str,
    phone: Option<&str>,
) -> Result<(), CliError> {
    let ctx = Context::from_env()?;
    let mut screen = UsersScreen::new(&ctx.api);
    screen.open_create();
    screen.form.name = name.to_owned();
    screen.form.email = email.to_owned();
    screen.form.password = password.to_owned();
    screen.form.phone_number = phone.unwrap_or_default().to_owned();

    if !screen.submit().await {
        return Err(screen_failure(screen.banner()));
    }
    println!("유저가 생성되었습니다.");
    Ok(())
}

/// Update a user. Omitted options keep the current value; email cannot
/// change.
#[allow(clippy::print_stdout)]
pub async fn update(
    id: i64,
    name: Option<&str>,
    phone: Option<&str>,
    password: Option<&str>,
) -> Result<(), CliError> {
    let ctx = Context::from_env()?;
    let user = ctx.api.users().get(UserId::from(id)).await?;

    let mut screen = UsersScreen::new(&ctx.api);
    screen.open_edit(&user);
    if let Some(name) = name {
        screen.form.name = name.to_owned();
    }
    if let Some(phone) = phone {
        screen.form.phone_number = phone.to_owned();
    }
    if let Some(password) = password {
        screen.form.password = password.to_owned();
    }

    if !screen.submit().await {
        return Err(screen_failure(screen.banner()));
    }
    println!("유저가 수정되었습니다.");
    Ok(())
}

/// Delete a user after confirmation.
#[allow(clippy::print_stdout)]
pub async fn delete(id: i64, yes: bool) -> Result<(), CliError> {
    let ctx = Context::from_env()?;
    let mut screen = UsersScreen::new(&ctx.api);

    let deleted = if yes {
        screen.delete(UserId::from(id), &AcceptAll).await
    } else {
        screen.delete(UserId::from(id), &StdinConfirm).await
    };

    if deleted {
        println!("유저가 삭제되었습니다.");
    } else if let Some(banner) = screen.banner() {
        return Err(screen_failure(Some(banner)));
    } else {
        println!("취소되었습니다.");
    }
    Ok(())
}
