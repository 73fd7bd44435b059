//! Food catalog screen: list with a type filter, create/edit form, and
//! image attachment.

use tracing::instrument;

use fridgemate_client::{ApiClient, FoodsApi};
use fridgemate_core::views::{food_types, foods_of_type};
use fridgemate_core::{Food, FoodId, NewFood};

use super::{IMAGE_TOO_LARGE, IMAGE_TYPE_ONLY, MAX_IMAGE_BYTES, REQUIRED_FIELDS};
use crate::confirm::{Confirm, DELETE_PROMPT};
use crate::state::{FormMode, ListState, LoadToken, TrackedList};

/// Form fields for creating or editing a food.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodForm {
    pub name: String,
    pub food_type: String,
    /// Reference path from a completed upload, if an image was attached.
    pub image_url: Option<String>,
}

/// Controller for the food catalog.
#[derive(Debug)]
pub struct FoodsScreen {
    api: FoodsApi,
    list: TrackedList<Vec<Food>>,
    /// Selected type filter; empty means no filter.
    pub selected_type: String,
    mode: FormMode<FoodId>,
    pub form: FoodForm,
    banner: Option<String>,
}

impl FoodsScreen {
    #[must_use]
    pub fn new(api: &ApiClient) -> Self {
        Self {
            api: api.foods(),
            list: TrackedList::new(),
            selected_type: String::new(),
            mode: FormMode::Closed,
            form: FoodForm::default(),
            banner: None,
        }
    }

    #[must_use]
    pub const fn list(&self) -> &ListState<Vec<Food>> {
        self.list.state()
    }

    #[must_use]
    pub const fn mode(&self) -> FormMode<FoodId> {
        self.mode
    }

    #[must_use]
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// The distinct types present in the loaded catalog, first-seen order.
    #[must_use]
    pub fn available_types(&self) -> Vec<String> {
        self.list.data().map(|foods| food_types(foods)).unwrap_or_default()
    }

    /// The loaded foods narrowed to the selected type; all of them when no
    /// type is selected.
    #[must_use]
    pub fn visible_foods(&self) -> Vec<&Food> {
        self.list
            .data()
            .map(|foods| foods_of_type(foods, &self.selected_type))
            .unwrap_or_default()
    }

    pub fn select_type(&mut self, food_type: &str) {
        self.selected_type = food_type.to_owned();
    }

    pub fn begin_load(&mut self) -> LoadToken {
        self.list.begin()
    }

    pub fn finish_load(
        &mut self,
        token: LoadToken,
        result: Result<Vec<Food>, fridgemate_client::ApiError>,
    ) {
        self.list.finish(token, result);
    }

    /// Fetch the whole catalog and apply the outcome.
    #[instrument(skip(self))]
    pub async fn reload(&mut self) {
        let token = self.begin_load();
        let result = self.api.list().await;
        self.finish_load(token, result);
    }

    pub fn open_create(&mut self) {
        self.mode = FormMode::Creating;
        self.form = FoodForm::default();
        self.banner = None;
    }

    /// Open the edit form pre-populated from `food`.
    pub fn open_edit(&mut self, food: &Food) {
        self.mode = FormMode::Editing(food.id);
        self.form = FoodForm {
            name: food.name.clone(),
            food_type: food.food_type.clone().unwrap_or_default(),
            image_url: food.image_url.clone(),
        };
        self.banner = None;
    }

    pub fn close_form(&mut self) {
        self.mode = FormMode::Closed;
        self.form = FoodForm::default();
        self.banner = None;
    }

    /// Upload a picked file and keep the returned reference on the form.
    ///
    /// Only image content types are accepted, and only up to the size
    /// limit; both checks run before any request is sent.
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn attach_image(
        &mut self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> bool {
        if !content_type.starts_with("image/") {
            self.banner = Some(IMAGE_TYPE_ONLY.to_owned());
            return false;
        }
        if bytes.len() > MAX_IMAGE_BYTES {
            self.banner = Some(IMAGE_TOO_LARGE.to_owned());
            return false;
        }
        match self.api.upload_image(file_name, content_type, bytes).await {
            Ok(uploaded) => {
                self.form.image_url = Some(uploaded.image_url);
                self.banner = None;
                true
            }
            Err(error) => {
                self.banner = Some(error.to_string());
                false
            }
        }
    }

    fn payload(&self) -> NewFood {
        let food_type = self.form.food_type.trim();
        NewFood {
            name: self.form.name.trim().to_owned(),
            food_type: (!food_type.is_empty()).then(|| food_type.to_owned()),
            image_url: self.form.image_url.clone(),
        }
    }

    /// Submit the open form. On success the form closes and the list
    /// reloads; on failure the form keeps its fields and shows a banner.
    #[instrument(skip(self))]
    pub async fn submit(&mut self) -> bool {
        let result = match self.mode {
            FormMode::Closed => return false,
            FormMode::Creating => {
                if self.form.name.trim().is_empty() {
                    self.banner = Some(REQUIRED_FIELDS.to_owned());
                    return false;
                }
                self.api.create(&self.payload()).await.map(|_| ())
            }
            FormMode::Editing(id) => {
                if self.form.name.trim().is_empty() {
                    self.banner = Some(REQUIRED_FIELDS.to_owned());
                    return false;
                }
                self.api.update(id, &self.payload()).await.map(|_| ())
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
    pub async fn delete(&mut self, id: FoodId, confirm: &impl Confirm) -> bool {
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

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use fridgemate_client::ClientConfig;

    fn screen() -> FoodsScreen {
        let client = ApiClient::new(&ClientConfig::with_base_url("http://127.0.0.1:9"));
        FoodsScreen::new(&client)
    }

    fn food(id: i64, name: &str, food_type: Option<&str>) -> Food {
        Food {
            id: FoodId::from(id),
            name: name.to_owned(),
            food_type: food_type.map(str::to_owned),
            image_url: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_type_filter_over_loaded_list() {
        let mut screen = screen();
        let token = screen.begin_load();
        screen.finish_load(
            token,
            Ok(vec![
                food(1, "김치", Some("반찬")),
                food(2, "우유", Some("유제품")),
                food(3, "깍두기", Some("반찬")),
            ]),
        );

        assert_eq!(screen.available_types(), ["반찬", "유제품"]);
        assert_eq!(screen.visible_foods().len(), 3);

        screen.select_type("반찬");
        let names: Vec<&str> = screen.visible_foods().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["김치", "깍두기"]);

        screen.select_type("음료");
        assert!(screen.visible_foods().is_empty());
    }

    #[test]
    fn test_edit_prepopulates_form() {
        let mut screen = screen();
        screen.open_edit(&food(5, "김치", Some("반찬")));
        assert_eq!(screen.mode(), FormMode::Editing(FoodId::from(5)));
        assert_eq!(screen.form.name, "김치");
        assert_eq!(screen.form.food_type, "반찬");
    }

    #[tokio::test]
    async fn test_non_image_upload_rejected_before_request() {
        let mut screen = screen();
        screen.open_create();

        assert!(!screen.attach_image("note.txt", "text/plain", vec![1, 2, 3]).await);
        assert_eq!(screen.banner(), Some(IMAGE_TYPE_ONLY));
    }

    #[tokio::test]
    async fn test_oversized_upload_rejected_before_request() {
        let mut screen = screen();
        screen.open_create();

        let bytes = vec![0_u8; MAX_IMAGE_BYTES + 1];
        assert!(!screen.attach_image("big.png", "image/png", bytes).await);
        assert_eq!(screen.banner(), Some(IMAGE_TOO_LARGE));
    }

    #[tokio::test]
    async fn test_blank_name_fails_validation() {
        let mut screen = screen();
        screen.open_create();
        assert!(!screen.submit().await);
        assert_eq!(screen.banner(), Some(REQUIRED_FIELDS));
        assert_eq!(screen.mode(), FormMode::Creating);
    }

    #[tokio::test]
    async fn test_submit_without_open_form_is_a_silent_no_op() {
        let mut screen = screen();
        assert!(!screen.submit().await);
        assert_eq!(screen.banner(), None);
        assert_eq!(screen.mode(), FormMode::Closed);
    }
}
