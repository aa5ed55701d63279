//! HTTP client for the portfolio backend.
//!
//! One function per endpoint, each returning `Result<T, String>`. Callers
//! decide how a failure renders, so nothing here logs or panics. A response
//! body that fails to parse is reported the same way a dead network is.

use std::sync::OnceLock;

use gloo_net::http::Request;

use crate::state::models::{
    Achievement, Certification, ContactMessage, PersonalInfo, Project, Skill,
};

/// Default backend address when no override is baked in.
pub const DEFAULT_API_BASE: &str = "http://localhost:8001";

static API_BASE: OnceLock<String> = OnceLock::new();

/// Backend base URL, resolved once per page load. An override can be baked
/// in at build time through the `PORTFOLIO_BACKEND_URL` environment
/// variable.
pub fn api_base() -> &'static str {
    API_BASE
        .get_or_init(|| normalize_base(option_env!("PORTFOLIO_BACKEND_URL").unwrap_or(DEFAULT_API_BASE)))
}

/// Strip trailing slashes so joined paths stay clean.
fn normalize_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Fetch the profile singleton.
pub async fn fetch_personal_info() -> Result<PersonalInfo, String> {
    let response = Request::get(&format!("{}/api/personal-info", api_base()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed with status {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the skill entries.
pub async fn fetch_skills() -> Result<Vec<Skill>, String> {
    let response = Request::get(&format!("{}/api/skills", api_base()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed with status {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the achievement entries.
pub async fn fetch_achievements() -> Result<Vec<Achievement>, String> {
    let response = Request::get(&format!("{}/api/achievements", api_base()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed with status {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the certification entries.
pub async fn fetch_certifications() -> Result<Vec<Certification>, String> {
    let response = Request::get(&format!("{}/api/certifications", api_base()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed with status {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the remotely managed projects.
pub async fn fetch_projects() -> Result<Vec<Project>, String> {
    let response = Request::get(&format!("{}/api/projects", api_base()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed with status {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Submit a contact message. Any OK-range status counts as success; the
/// response body is not inspected.
pub async fn submit_contact(message: &ContactMessage) -> Result<(), String> {
    let response = Request::post(&format!("{}/api/contact", api_base()))
        .json(message)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed with status {}", response.status()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_strips_trailing_slashes() {
        assert_eq!(normalize_base("http://localhost:8001/"), "http://localhost:8001");
        assert_eq!(normalize_base("https://api.example.com///"), "https://api.example.com");
        assert_eq!(normalize_base("http://localhost:8001"), "http://localhost:8001");
    }
}
