//! Command implementations, one module per resource.

pub mod foods;
pub mod fridge;
pub mod recipes;
pub mod session;
pub mod users;

use std::io::{BufRead, Write};

use thiserror::Error;

use fridgemate_app::Confirm;
use fridgemate_client::{
    ApiClient, ClientConfig, ConfigError, FileStore, Session, SessionError,
};
use fridgemate_core::UserId;

/// Errors surfaced to the terminal.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Api(#[from] fridgemate_client::ApiError),

    /// A screen-level failure, carrying the banner the screen would show.
    #[error("{0}")]
    Command(String),

    #[error("Failed to read {path}: {source}")]
    ReadFile {
        path: String,
        source: std::io::Error,
    },
}

/// Everything a command needs: the API client and the persisted session.
pub struct Context {
    pub api: ApiClient,
    pub session: Session<FileStore>,
}

impl Context {
    /// Load configuration from the environment and restore the session.
    pub fn from_env() -> Result<Self, CliError> {
        let config = ClientConfig::from_env()?;
        let store = FileStore::open(&config.session_file)?;
        Ok(Self {
            api: ApiClient::new(&config),
            session: Session::load(store),
        })
    }

    /// The signed-in user's ID.
    pub fn require_user(&self) -> Result<UserId, CliError> {
        self.session
            .current_user()
            .map(|u| u.id)
            .ok_or_else(|| CliError::Command(fridgemate_app::screens::LOGIN_REQUIRED.to_owned()))
    }
}

/// Asks on stdin; anything but `y`/`yes` (case-insensitive) declines.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    #[allow(clippy::print_stderr)]
    fn confirm(&self, prompt: &str) -> bool {
        eprint!("{prompt} [y/N] ");
        let _ = std::io::stderr().flush();
        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

/// Turn a failed screen action into a [`CliError`] carrying its banner.
pub fn screen_failure(banner: Option<&str>) -> CliError {
    CliError::Command(banner.unwrap_or("명령이 실패했습니다.").to_owned())
}
