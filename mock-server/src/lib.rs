use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GistFile {
    pub content: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GistCommit {
    pub version: String,
    pub committed_at: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Gist {
    pub id: String,
    pub url: String,
    pub description: Option<String>,
    pub public: bool,
    pub files: HashMap<String, GistFile>,
    pub history: Vec<GistCommit>,
}

#[derive(Deserialize)]
pub struct CreateGist {
    pub description: Option<String>,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub files: HashMap<String, GistFile>,
}

/// Patch payload. A `null` file entry deletes that file, matching the real
/// service's update semantics.
#[derive(Deserialize)]
pub struct UpdateGist {
    pub description: Option<String>,
    #[serde(default)]
    pub files: HashMap<String, Option<GistFile>>,
}

pub type Db = Arc<RwLock<HashMap<String, Gist>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/gists", post(create_gist))
        .route(
            "/gists/{id}",
            get(get_gist).patch(update_gist).delete(delete_gist),
        )
        .route("/gists/{id}/commits", get(list_commits))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn authorized(headers: &HeaderMap) -> bool {
    headers.contains_key("authorization")
}

fn new_commit() -> GistCommit {
    // 40 hex chars, shaped like a real revision sha.
    let hex = format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple());
    GistCommit {
        version: hex[..40].to_string(),
        committed_at: "2024-01-01T00:00:00Z".to_string(),
    }
}

async fn create_gist(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<CreateGist>,
) -> Result<(StatusCode, Json<Gist>), StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    if input.files.is_empty() {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    let id = Uuid::new_v4().simple().to_string();
    let gist = Gist {
        url: format!("https://api.github.com/gists/{id}"),
        id: id.clone(),
        description: input.description,
        public: input.public,
        files: input.files,
        history: vec![new_commit()],
    };
    db.write().await.insert(id, gist.clone());
    Ok((StatusCode::CREATED, Json(gist)))
}

async fn get_gist(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Gist>, StatusCode> {
    let gists = db.read().await;
    gists.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_gist(
    State(db): State<Db>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(input): Json<UpdateGist>,
) -> Result<Json<Gist>, StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    let mut gists = db.write().await;
    let gist = gists.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(description) = input.description {
        gist.description = Some(description);
    }
    for (name, file) in input.files {
        match file {
            Some(file) => {
                gist.files.insert(name, file);
            }
            None => {
                gist.files.remove(&name);
            }
        }
    }
    gist.history.insert(0, new_commit());
    Ok(Json(gist.clone()))
}

async fn delete_gist(
    State(db): State<Db>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<StatusCode, StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    let mut gists = db.write().await;
    gists
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn list_commits(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Vec<GistCommit>>, StatusCode> {
    let gists = db.read().await;
    gists
        .get(&id)
        .map(|gist| Json(gist.history.clone()))
        .ok_or(StatusCode::NOT_FOUND)
}
