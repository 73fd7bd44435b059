//! Integration test harness for FridgeMate.
//!
//! Spawns an in-process mock of the FridgeMate REST API on an ephemeral
//! port, so the whole stack - client wrappers, session persistence, screen
//! controllers - runs end to end without an external server.
//!
//! The mock keeps its records as raw JSON, mirrors the backend's wire
//! spellings (`foodName`, `expDate` in, `exp_date` out), counts every
//! request per method and path, and can be switched to fail every request
//! so fixed failure messages can be asserted.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::Router;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use serde_json::{Value, json};

use fridgemate_client::{ApiClient, ClientConfig};

/// Everything the mock API remembers between requests.
#[derive(Debug, Default)]
pub struct MockState {
    users: Vec<Value>,
    foods: Vec<Value>,
    entries: Vec<Value>,
    recipes: Vec<Value>,
    next_id: i64,
    /// Requests seen, keyed `"METHOD /path/pattern"`.
    calls: HashMap<String, usize>,
    /// When set, every endpoint answers 500.
    fail_all: bool,
}

impl MockState {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn record(&mut self, key: &str) -> bool {
        *self.calls.entry(key.to_owned()).or_insert(0) += 1;
        self.fail_all
    }
}

type Shared = Arc<Mutex<MockState>>;

/// A running mock API plus a client pointed at it.
pub struct TestServer {
    base_url: String,
    state: Shared,
}

impl TestServer {
    /// Bind an ephemeral port and serve the mock API on it.
    ///
    /// # Panics
    ///
    /// Panics when the port cannot be bound; tests cannot proceed then.
    #[allow(clippy::unwrap_used)]
    pub async fn spawn() -> Self {
        let state: Shared = Arc::new(Mutex::new(MockState::default()));

        let router = Router::new()
            .route("/api/auth/login", post(login))
            .route("/api/users", get(list_users).post(create_user))
            .route(
                "/api/users/{id}",
                get(get_user).put(update_user).delete(delete_user),
            )
            .route("/api/foods", get(list_foods).post(create_food))
            .route("/api/foods/type/{food_type}", get(foods_by_type))
            .route("/api/foods/upload-image", post(upload_image))
            .route(
                "/api/foods/{id}",
                get(get_food).put(update_food).delete(delete_food),
            )
            .route("/api/userRefs", get(list_entries).post(create_entry))
            .route("/api/userRefs/user/{user_id}", get(entries_for_user))
            .route(
                "/api/userRefs/{id}",
                get(get_entry).put(update_entry).delete(delete_entry),
            )
            .route("/api/recipes", get(list_recipes))
            .route("/api/recipes/search", get(search_recipes))
            .route("/api/recipes/{seq}", get(get_recipe))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    /// An [`ApiClient`] pointed at this mock.
    #[must_use]
    pub fn client(&self) -> ApiClient {
        ApiClient::new(&ClientConfig::with_base_url(&self.base_url))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[allow(clippy::unwrap_used)]
    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap()
    }

    /// Seed a user with login credentials. Returns its ID.
    pub fn seed_user(&self, name: &str, email: &str, password: &str) -> i64 {
        let mut state = self.lock();
        let id = state.allocate_id();
        state.users.push(json!({
            "id": id,
            "name": name,
            "email": email,
            "password": password,
            "phone_number": null,
        }));
        id
    }

    /// Seed a catalog food. Returns its ID.
    pub fn seed_food(&self, name: &str, food_type: Option<&str>) -> i64 {
        let mut state = self.lock();
        let id = state.allocate_id();
        state.foods.push(json!({
            "id": id,
            "foodName": name,
            "foodType": food_type,
            "foodImageUrl": null,
        }));
        id
    }

    /// Seed a refrigerator entry with an embedded food snapshot. Returns
    /// its ID.
    pub fn seed_entry(
        &self,
        user_id: i64,
        food_id: i64,
        quantity: f64,
        unit: &str,
        exp_date: &str,
    ) -> i64 {
        let mut state = self.lock();
        let food = state
            .foods
            .iter()
            .find(|f| f["id"] == json!(food_id))
            .cloned()
            .unwrap_or(Value::Null);
        let id = state.allocate_id();
        state.entries.push(json!({
            "id": id,
            "userId": user_id,
            "food": food,
            "quantity": quantity,
            "unit": unit,
            "exp_date": exp_date,
        }));
        id
    }

    /// Seed a recipe from raw JSON fields.
    pub fn seed_recipe(&self, recipe: Value) {
        self.lock().recipes.push(recipe);
    }

    /// How many requests matched `"METHOD /path/pattern"`.
    #[must_use]
    pub fn calls(&self, key: &str) -> usize {
        self.lock().calls.get(key).copied().unwrap_or(0)
    }

    /// Make every endpoint answer 500 from now on.
    pub fn fail_everything(&self) {
        self.lock().fail_all = true;
    }

    /// Go back to normal behavior.
    pub fn heal(&self) {
        self.lock().fail_all = false;
    }
}

fn failure() -> Response {
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}

fn not_found() -> Response {
    StatusCode::NOT_FOUND.into_response()
}

fn strip_password(user: &Value) -> Value {
    let mut user = user.clone();
    if let Some(map) = user.as_object_mut() {
        map.remove("password");
    }
    user
}

#[allow(clippy::unwrap_used)]
fn locked(state: &Shared) -> MutexGuard<'_, MockState> {
    state.lock().unwrap()
}

async fn login(State(state): State<Shared>, body: axum::Json<Value>) -> Response {
    let mut state = locked(&state);
    if state.record("POST /api/auth/login") {
        return failure();
    }
    let matched = state.users.iter().find(|u| {
        u["email"] == body["email"] && u["password"] == body["password"]
    });
    matched.map_or_else(
        || {
            (
                StatusCode::UNAUTHORIZED,
                axum::Json(json!({
                    "success": false,
                    "message": "이메일 또는 비밀번호가 올바르지 않습니다.",
                })),
            )
                .into_response()
        },
        |user| {
            axum::Json(json!({"success": true, "user": strip_password(user)})).into_response()
        },
    )
}

async fn list_users(State(state): State<Shared>) -> Response {
    let mut state = locked(&state);
    if state.record("GET /api/users") {
        return failure();
    }
    let users: Vec<Value> = state.users.iter().map(strip_password).collect();
    axum::Json(users).into_response()
}

async fn get_user(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut state = locked(&state);
    if state.record("GET /api/users/{id}") {
        return failure();
    }
    state
        .users
        .iter()
        .find(|u| u["id"] == json!(id))
        .map_or_else(not_found, |u| axum::Json(strip_password(u)).into_response())
}

async fn create_user(State(state): State<Shared>, body: axum::Json<Value>) -> Response {
    let mut state = locked(&state);
    if state.record("POST /api/users") {
        return failure();
    }
    let id = state.allocate_id();
    let mut user = body.0;
    user["id"] = json!(id);
    state.users.push(user.clone());
    axum::Json(strip_password(&user)).into_response()
}

async fn update_user(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    body: axum::Json<Value>,
) -> Response {
    let mut state = locked(&state);
    if state.record("PUT /api/users/{id}") {
        return failure();
    }
    let Some(user) = state.users.iter_mut().find(|u| u["id"] == json!(id)) else {
        return not_found();
    };
    if let (Some(target), Some(patch)) = (user.as_object_mut(), body.0.as_object()) {
        for (key, value) in patch {
            target.insert(key.clone(), value.clone());
        }
    }
    let user = strip_password(user);
    axum::Json(user).into_response()
}

async fn delete_user(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut state = locked(&state);
    if state.record("DELETE /api/users/{id}") {
        return failure();
    }
    let before = state.users.len();
    state.users.retain(|u| u["id"] != json!(id));
    if state.users.len() == before {
        return not_found();
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn list_foods(State(state): State<Shared>) -> Response {
    let mut state = locked(&state);
    if state.record("GET /api/foods") {
        return failure();
    }
    axum::Json(state.foods.clone()).into_response()
}

async fn foods_by_type(State(state): State<Shared>, Path(food_type): Path<String>) -> Response {
    let mut state = locked(&state);
    if state.record("GET /api/foods/type/{type}") {
        return failure();
    }
    let foods: Vec<Value> = state
        .foods
        .iter()
        .filter(|f| f["foodType"] == json!(food_type))
        .cloned()
        .collect();
    axum::Json(foods).into_response()
}

async fn get_food(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut state = locked(&state);
    if state.record("GET /api/foods/{id}") {
        return failure();
    }
    state
        .foods
        .iter()
        .find(|f| f["id"] == json!(id))
        .map_or_else(not_found, |f| axum::Json(f.clone()).into_response())
}

async fn create_food(State(state): State<Shared>, body: axum::Json<Value>) -> Response {
    let mut state = locked(&state);
    if state.record("POST /api/foods") {
        return failure();
    }
    let id = state.allocate_id();
    let mut food = body.0;
    food["id"] = json!(id);
    state.foods.push(food.clone());
    axum::Json(food).into_response()
}

async fn update_food(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    body: axum::Json<Value>,
) -> Response {
    let mut state = locked(&state);
    if state.record("PUT /api/foods/{id}") {
        return failure();
    }
    let Some(food) = state.foods.iter_mut().find(|f| f["id"] == json!(id)) else {
        return not_found();
    };
    if let (Some(target), Some(patch)) = (food.as_object_mut(), body.0.as_object()) {
        for (key, value) in patch {
            target.insert(key.clone(), value.clone());
        }
    }
    axum::Json(food.clone()).into_response()
}

async fn delete_food(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut state = locked(&state);
    if state.record("DELETE /api/foods/{id}") {
        return failure();
    }
    let before = state.foods.len();
    state.foods.retain(|f| f["id"] != json!(id));
    if state.foods.len() == before {
        return not_found();
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn upload_image(State(state): State<Shared>, mut multipart: Multipart) -> Response {
    {
        let mut state = locked(&state);
        if state.record("POST /api/foods/upload-image") {
            return failure();
        }
    }
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some("file") {
            let file_name = field.file_name().unwrap_or("upload").to_owned();
            // Drain the body so the client sees a clean response.
            let _ = field.bytes().await;
            return axum::Json(json!({"imageUrl": format!("/uploads/{file_name}")}))
                .into_response();
        }
    }
    StatusCode::BAD_REQUEST.into_response()
}

async fn list_entries(State(state): State<Shared>) -> Response {
    let mut state = locked(&state);
    if state.record("GET /api/userRefs") {
        return failure();
    }
    axum::Json(state.entries.clone()).into_response()
}

async fn entries_for_user(State(state): State<Shared>, Path(user_id): Path<i64>) -> Response {
    let mut state = locked(&state);
    if state.record("GET /api/userRefs/user/{userId}") {
        return failure();
    }
    let entries: Vec<Value> = state
        .entries
        .iter()
        .filter(|e| e["userId"] == json!(user_id))
        .cloned()
        .collect();
    axum::Json(entries).into_response()
}

async fn get_entry(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut state = locked(&state);
    if state.record("GET /api/userRefs/{id}") {
        return failure();
    }
    state
        .entries
        .iter()
        .find(|e| e["id"] == json!(id))
        .map_or_else(not_found, |e| axum::Json(e.clone()).into_response())
}

/// Creates an entry from the `{userId, foodId, quantity, unit, expDate}`
/// payload, embedding the referenced food and writing the date back out
/// under the backend's `exp_date` spelling.
async fn create_entry(State(state): State<Shared>, body: axum::Json<Value>) -> Response {
    let mut state = locked(&state);
    if state.record("POST /api/userRefs") {
        return failure();
    }
    let food = state
        .foods
        .iter()
        .find(|f| f["id"] == body["foodId"])
        .cloned()
        .unwrap_or(Value::Null);
    let id = state.allocate_id();
    let entry = json!({
        "id": id,
        "userId": body["userId"],
        "food": food,
        "quantity": body["quantity"],
        "unit": body["unit"],
        "exp_date": body["expDate"],
    });
    state.entries.push(entry.clone());
    axum::Json(entry).into_response()
}

async fn update_entry(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    body: axum::Json<Value>,
) -> Response {
    let mut state = locked(&state);
    if state.record("PUT /api/userRefs/{id}") {
        return failure();
    }
    let Some(entry) = state.entries.iter_mut().find(|e| e["id"] == json!(id)) else {
        return not_found();
    };
    if let Some(target) = entry.as_object_mut() {
        for key in ["quantity", "unit"] {
            if let Some(value) = body.0.get(key) {
                target.insert(key.to_owned(), value.clone());
            }
        }
        if let Some(date) = body.0.get("expDate") {
            target.insert("exp_date".to_owned(), date.clone());
        }
    }
    axum::Json(entry.clone()).into_response()
}

async fn delete_entry(State(state): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut state = locked(&state);
    if state.record("DELETE /api/userRefs/{id}") {
        return failure();
    }
    let before = state.entries.len();
    state.entries.retain(|e| e["id"] != json!(id));
    if state.entries.len() == before {
        return not_found();
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn list_recipes(
    State(state): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let mut state = locked(&state);
    if state.record("GET /api/recipes") {
        return failure();
    }
    let page: usize = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    let size: usize = params.get("size").and_then(|s| s.parse().ok()).unwrap_or(20);
    let recipes: Vec<Value> = state
        .recipes
        .iter()
        .skip(page.saturating_sub(1) * size)
        .take(size)
        .cloned()
        .collect();
    axum::Json(recipes).into_response()
}

async fn search_recipes(
    State(state): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let mut state = locked(&state);
    if state.record("GET /api/recipes/search") {
        return failure();
    }
    let name = params.get("name").cloned().unwrap_or_default();
    let recipes: Vec<Value> = state
        .recipes
        .iter()
        .filter(|r| {
            r["rcpNm"]
                .as_str()
                .is_some_and(|n| n.contains(name.as_str()))
        })
        .cloned()
        .collect();
    axum::Json(recipes).into_response()
}

async fn get_recipe(State(state): State<Shared>, Path(seq): Path<i64>) -> Response {
    let mut state = locked(&state);
    if state.record("GET /api/recipes/{seq}") {
        return failure();
    }
    state
        .recipes
        .iter()
        .find(|r| r["rcpSeq"] == json!(seq))
        .map_or_else(not_found, |r| axum::Json(r.clone()).into_response())
}
