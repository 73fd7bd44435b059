//! One controller per screen.
//!
//! Controllers load in two phases so overlapping requests cannot leave stale
//! data on screen: `begin_load` claims a token and enters `Loading`, the
//! network call runs, `finish_load` applies the outcome only if the token is
//! still current. The `reload` helpers drive both phases for callers that do
//! not interleave loads themselves.

mod foods;
mod fridge;
mod login;
mod recipes;
mod users;

pub use foods::{FoodForm, FoodsScreen};
pub use fridge::{FridgeForm, FridgeScreen};
pub use login::LoginScreen;
pub use recipes::{PAGE_SIZE, RecipeDetailScreen, RecipeListScreen};
pub use users::{UserForm, UsersScreen};

/// Banner shown when a screen needs a signed-in user and there is none.
pub const LOGIN_REQUIRED: &str = "로그인이 필요합니다.";
/// Banner for a submit with required fields left blank.
pub const REQUIRED_FIELDS: &str = "필수 항목을 입력해주세요.";
/// Banner for a quantity that does not parse to a positive number.
pub const QUANTITY_INVALID: &str = "수량은 0보다 큰 숫자여야 합니다.";
/// Banner for a non-image file picked for upload.
pub const IMAGE_TYPE_ONLY: &str = "이미지 파일만 업로드할 수 있습니다.";
/// Banner for an image over the upload size limit.
pub const IMAGE_TOO_LARGE: &str = "파일 크기는 10MB 이하여야 합니다.";

/// Upload size limit, in bytes.
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;
