//! Remote Task API
//!
//! Fetch wrappers for the dummyjson demo todos endpoint. Every operation
//! returns `Result<_, String>`; a non-success HTTP status is an error so
//! callers can treat transport and server failures uniformly.

use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::{Task, TasksPage};

const API_BASE: &str = "https://dummyjson.com/todos";

/// Page size for the initial load
pub const PAGE_LIMIT: u32 = 20;

// ========================
// Request Bodies
// ========================

#[derive(Serialize)]
struct CreateTaskBody<'a> {
    todo: &'a str,
    completed: bool,
    #[serde(rename = "userId")]
    user_id: u32,
}

#[derive(Serialize)]
struct SetCompletedBody {
    completed: bool,
}

// ========================
// Fetch Plumbing
// ========================

fn json_request(method: &str, url: &str, body: Option<String>) -> Result<Request, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    let has_body = body.is_some();
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| "Failed to build request".to_string())?;
    if has_body {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|_| "Failed to set request header".to_string())?;
    }
    Ok(request)
}

async fn send(request: &Request) -> Result<Response, String> {
    let window = web_sys::window().ok_or("No window object")?;
    let response: Response = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(|_| "Network request failed".to_string())?
        .into();
    Ok(response)
}

async fn response_text(response: &Response) -> Result<String, String> {
    let promise = response
        .text()
        .map_err(|_| "Failed to read response".to_string())?;
    JsFuture::from(promise)
        .await
        .map_err(|_| "Failed to read response body".to_string())?
        .as_string()
        .ok_or_else(|| "Response body is not text".to_string())
}

// ========================
// Operations
// ========================

/// GET one page of tasks
pub async fn fetch_tasks(limit: u32) -> Result<TasksPage, String> {
    let request = json_request("GET", &format!("{API_BASE}?limit={limit}"), None)?;
    let response = send(&request).await?;
    if !response.ok() {
        return Err(format!("Failed to fetch tasks (HTTP {})", response.status()));
    }
    let text = response_text(&response).await?;
    serde_json::from_str(&text).map_err(|e| format!("Failed to parse task list: {e}"))
}

/// POST a new task. The server echoes a task back but does not persist it;
/// the caller substitutes a session-local id before storing.
pub async fn create_task(text: &str) -> Result<Task, String> {
    let body = serde_json::to_string(&CreateTaskBody {
        todo: text,
        completed: false,
        user_id: 1,
    })
    .map_err(|e| e.to_string())?;

    let request = json_request("POST", &format!("{API_BASE}/add"), Some(body))?;
    let response = send(&request).await?;
    if !response.ok() {
        return Err(format!("Failed to add task (HTTP {})", response.status()));
    }
    let text = response_text(&response).await?;
    serde_json::from_str(&text).map_err(|e| format!("Failed to parse created task: {e}"))
}

/// PUT the completion flag of an existing task
pub async fn set_task_completed(id: u64, completed: bool) -> Result<(), String> {
    let body = serde_json::to_string(&SetCompletedBody { completed }).map_err(|e| e.to_string())?;
    let request = json_request("PUT", &format!("{API_BASE}/{id}"), Some(body))?;
    let response = send(&request).await?;
    if !response.ok() {
        return Err(format!("Failed to update task (HTTP {})", response.status()));
    }
    Ok(())
}

/// DELETE a task by id
pub async fn delete_task(id: u64) -> Result<(), String> {
    let request = json_request("DELETE", &format!("{API_BASE}/{id}"), None)?;
    let response = send(&request).await?;
    if !response.ok() {
        return Err(format!("Failed to delete task (HTTP {})", response.status()));
    }
    Ok(())
}
