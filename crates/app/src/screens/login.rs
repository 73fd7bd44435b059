//! Login screen: one form, no list.

use secrecy::SecretString;
use tracing::instrument;

use fridgemate_client::{ApiClient, AuthApi, Session, SessionStore};

use super::REQUIRED_FIELDS;

/// Controller for the login form.
///
/// On success the identity lands in the [`Session`]; on failure the form
/// keeps its fields and shows the server's message as a banner.
#[derive(Debug)]
pub struct LoginScreen {
    api: AuthApi,
    pub email: String,
    pub password: String,
    banner: Option<String>,
}

impl LoginScreen {
    #[must_use]
    pub fn new(api: &ApiClient) -> Self {
        Self {
            api: api.auth(),
            email: String::new(),
            password: String::new(),
            banner: None,
        }
    }

    /// The inline failure banner, if any.
    #[must_use]
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// Submit the form. Returns `true` when the user is now signed in.
    ///
    /// The password never round-trips: it is wrapped in a secret for the one
    /// request and cleared from the form on success.
    #[instrument(skip_all, fields(email = %self.email))]
    pub async fn submit<S: SessionStore>(&mut self, session: &mut Session<S>) -> bool {
        if self.email.trim().is_empty() || self.password.is_empty() {
            self.banner = Some(REQUIRED_FIELDS.to_owned());
            return false;
        }

        let password = SecretString::from(self.password.clone());
        match self.api.login(self.email.trim(), &password).await {
            Ok(user) => match session.sign_in(user.into()) {
                Ok(()) => {
                    self.password.clear();
                    self.banner = None;
                    true
                }
                Err(error) => {
                    self.banner = Some(error.to_string());
                    false
                }
            },
            Err(error) => {
                self.banner = Some(error.to_string());
                false
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use fridgemate_client::{ClientConfig, MemoryStore};

    fn screen() -> LoginScreen {
        let client = ApiClient::new(&ClientConfig::with_base_url("http://127.0.0.1:9"));
        LoginScreen::new(&client)
    }

    #[tokio::test]
    async fn test_blank_fields_fail_before_any_request() {
        let mut screen = screen();
        let mut session = Session::load(MemoryStore::new());

        assert!(!screen.submit(&mut session).await);
        assert_eq!(screen.banner(), Some(REQUIRED_FIELDS));
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_failed_login_keeps_form_fields() {
        let mut screen = screen();
        screen.email = "kim@example.com".to_owned();
        screen.password = "secret".to_owned();
        let mut session = Session::load(MemoryStore::new());

        // Port 9 (discard) refuses the connection, so this surfaces a
        // transport failure rather than signing in.
        assert!(!screen.submit(&mut session).await);
        assert!(screen.banner().is_some());
        assert_eq!(screen.email, "kim@example.com");
        assert_eq!(screen.password, "secret");
        assert!(!session.is_authenticated());
    }
}
