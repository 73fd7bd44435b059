//! Session commands: login, logout, whoami.

use fridgemate_app::screens::LoginScreen;

use super::{CliError, Context, screen_failure};

/// Sign in and persist the session for later invocations.
#[allow(clippy::print_stdout)]
pub async fn login(email: &str, password: &str) -> Result<(), CliError> {
    let mut ctx = Context::from_env()?;

    let mut screen = LoginScreen::new(&ctx.api);
    screen.email = email.to_owned();
    screen.password = password.to_owned();

    if !screen.submit(&mut ctx.session).await {
        return Err(screen_failure(screen.banner()));
    }

    let name = ctx.session.current_user().map_or("", |u| u.name.as_str());
    println!("{name}님, 환영합니다.");
    Ok(())
}

/// Clear the persisted session. Purely local; the server is not contacted.
#[allow(clippy::print_stdout)]
pub fn logout() -> Result<(), CliError> {
    let mut ctx = Context::from_env()?;
    ctx.session.sign_out()?;
    println!("로그아웃되었습니다.");
    Ok(())
}

/// Show the signed-in user.
#[allow(clippy::print_stdout)]
pub fn whoami() -> Result<(), CliError> {
    let ctx = Context::from_env()?;
    ctx.require_user()?;
    if let Some(user) = ctx.session.current_user() {
        println!("{} <{}> (id {})", user.name, user.email, user.id);
    }
    Ok(())
}
