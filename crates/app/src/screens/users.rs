//! User management screen.

use secrecy::SecretString;
use tracing::instrument;

use fridgemate_client::{ApiClient, UsersApi};
use fridgemate_core::{Email, NewUser, User, UserId, UserUpdate};

use super::REQUIRED_FIELDS;
use crate::confirm::{Confirm, DELETE_PROMPT};
use crate::state::{FormMode, ListState, LoadToken, TrackedList};

/// Form fields for creating or editing a user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
}

/// Controller for the user list and its create/edit form.
#[derive(Debug)]
pub struct UsersScreen {
    api: UsersApi,
    list: TrackedList<Vec<User>>,
    mode: FormMode<UserId>,
    pub form: UserForm,
    banner: Option<String>,
}

impl UsersScreen {
    #[must_use]
    pub fn new(api: &ApiClient) -> Self {
        Self {
            api: api.users(),
            list: TrackedList::new(),
            mode: FormMode::Closed,
            form: UserForm::default(),
            banner: None,
        }
    }

    #[must_use]
    pub const fn list(&self) -> &ListState<Vec<User>> {
        self.list.state()
    }

    #[must_use]
    pub const fn mode(&self) -> FormMode<UserId> {
        self.mode
    }

    #[must_use]
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// Email is immutable after creation, so the field locks while editing.
    #[must_use]
    pub const fn email_editable(&self) -> bool {
        !self.mode.is_editing()
    }

    pub fn begin_load(&mut self) -> LoadToken {
        self.list.begin()
    }

    pub fn finish_load(
        &mut self,
        token: LoadToken,
        result: Result<Vec<User>, fridgemate_client::ApiError>,
    ) {
        self.list.finish(token, result);
    }

    /// Fetch the list and apply the outcome.
    #[instrument(skip(self))]
    pub async fn reload(&mut self) {
        let token = self.begin_load();
        let result = self.api.list().await;
        self.finish_load(token, result);
    }

    pub fn open_create(&mut self) {
        self.mode = FormMode::Creating;
        self.form = UserForm::default();
        self.banner = None;
    }

    /// Open the edit form pre-populated from `user`. The password field
    /// stays blank; it is never reverse-populated.
    pub fn open_edit(&mut self, user: &User) {
        self.mode = FormMode::Editing(user.id);
        self.form = UserForm {
            name: user.name.clone(),
            email: user.email.to_string(),
            phone_number: user.phone_number.clone().unwrap_or_default(),
            password: String::new(),
        };
        self.banner = None;
    }

    pub fn close_form(&mut self) {
        self.mode = FormMode::Closed;
        self.form = UserForm::default();
        self.banner = None;
    }

    fn optional_phone(&self) -> Option<String> {
        let phone = self.form.phone_number.trim();
        (!phone.is_empty()).then(|| phone.to_owned())
    }

    /// Submit the open form. On success the form closes and the list
    /// reloads; on failure the form keeps its fields and shows a banner.
    #[instrument(skip(self))]
    pub async fn submit(&mut self) -> bool {
        let result = match self.mode {
            FormMode::Closed => return false,
            FormMode::Creating => {
                if self.form.name.trim().is_empty()
                    || self.form.email.trim().is_empty()
                    || self.form.password.is_empty()
                {
                    self.banner = Some(REQUIRED_FIELDS.to_owned());
                    return false;
                }
                let email = match Email::parse(self.form.email.trim()) {
                    Ok(email) => email,
                    Err(error) => {
                        self.banner = Some(error.to_string());
                        return false;
                    }
                };
                let user = NewUser {
                    name: self.form.name.trim().to_owned(),
                    email,
                    phone_number: self.optional_phone(),
                    password: SecretString::from(self.form.password.clone()),
                };
                self.api.create(&user).await.map(|_| ())
            }
            FormMode::Editing(id) => {
                if self.form.name.trim().is_empty() {
                    self.banner = Some(REQUIRED_FIELDS.to_owned());
                    return false;
                }
                let update = UserUpdate {
                    name: self.form.name.trim().to_owned(),
                    phone_number: self.optional_phone(),
                    password: (!self.form.password.is_empty())
                        .then(|| SecretString::from(self.form.password.clone())),
                };
                self.api.update(id, &update).await.map(|_| ())
            }
        };

        match result {
            Ok(()) => {
                self.close_form();
                self.reload().await;
                true
            }
            Err(error) => {
                self.banner = Some(error.to_string());
                false
            }
        }
    }

    /// Delete after a blocking confirmation. A declined prompt sends
    /// nothing. On success the list reloads; on failure it is left as is.
    #[instrument(skip(self, confirm))]
    pub async fn delete(&mut self, id: UserId, confirm: &impl Confirm) -> bool {
        if !confirm.confirm(DELETE_PROMPT) {
            return false;
        }
        match self.api.delete(id).await {
            Ok(_) => {
                self.reload().await;
                true
            }
            Err(error) => {
                self.banner = Some(error.to_string());
                false
            }
        }
    }
}
