use contracts::domain::a001_category::aggregate::{Category, CategoryDto, CategoryId};
use gloo_net::http::{Request, Response};

use super::error::{ApiFailure, CategoryError};
use crate::shared::api_utils::{api_base, join_url};

const CATEGORY_PATH: &str = "/api/Category";

/// Write request produced by the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRequest {
    Create(CategoryDto),
    Update(CategoryId, CategoryDto),
}

/// `<base>/api/Category`
pub fn collection_url(base: &str) -> String {
    join_url(base, CATEGORY_PATH)
}

/// `<base>/api/Category/{id}`, id percent-encoded
pub fn item_url(base: &str, id: &CategoryId) -> String {
    format!("{}/{}", collection_url(base), urlencoding::encode(id.as_str()))
}

fn transport(e: gloo_net::Error) -> ApiFailure {
    ApiFailure::Transport(e.to_string())
}

fn ensure_ok(response: &Response) -> Result<(), ApiFailure> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiFailure::Status(response.status()))
    }
}

/// Fetch all categories
pub async fn fetch_categories() -> Result<Vec<Category>, CategoryError> {
    let url = collection_url(&api_base());
    log::debug!("GET {}", url);

    let load = async {
        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(transport)?;
        ensure_ok(&response)?;
        response
            .json::<Vec<Category>>()
            .await
            .map_err(|e| ApiFailure::Decode(e.to_string()))
    };

    load.await.map_err(CategoryError::Fetch)
}

/// Create a category
pub async fn create_category(dto: &CategoryDto) -> Result<(), CategoryError> {
    let url = collection_url(&api_base());
    log::debug!("POST {}", url);

    let send = async {
        let response = Request::post(&url)
            .header("Accept", "application/json")
            .json(dto)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        ensure_ok(&response)
    };

    send.await.map_err(CategoryError::Create)
}

/// Update a category
pub async fn update_category(id: &CategoryId, dto: &CategoryDto) -> Result<(), CategoryError> {
    let url = item_url(&api_base(), id);
    log::debug!("PUT {}", url);

    let send = async {
        let response = Request::put(&url)
            .header("Accept", "application/json")
            .json(dto)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        ensure_ok(&response)
    };

    send.await.map_err(CategoryError::Update)
}

/// Delete a category
pub async fn delete_category(id: &CategoryId) -> Result<(), CategoryError> {
    let url = item_url(&api_base(), id);
    log::debug!("DELETE {}", url);

    let send = async {
        let response = Request::delete(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(transport)?;
        ensure_ok(&response)
    };

    send.await.map_err(CategoryError::Delete)
}

/// Dispatch a form submission to create or update
pub async fn submit(request: &SubmitRequest) -> Result<(), CategoryError> {
    match request {
        SubmitRequest::Create(dto) => create_category(dto).await,
        SubmitRequest::Update(id, dto) => update_category(id, dto).await,
    }
}
