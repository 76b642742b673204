use dioxus::prelude::*;
use serde::Deserialize;

use crate::error::SiteError;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub profile_photo: String,
    pub resume_path: String,
    pub loading_delay_ms: u32,
    pub back_to_top_offset: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            profile_photo: "/picture.jpg".to_string(),
            resume_path: "/generalCV.pdf".to_string(),
            loading_delay_ms: 800,
            back_to_top_offset: 400.0,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        serde_json::from_str(raw).map_err(|err| SiteError::Config(format!("decode failed: {err}")))
    }
}

/// Resolves the site config once. Missing or broken config never blocks the
/// page; defaults are used instead.
pub fn use_site_config() -> Resource<SiteConfig> {
    use_resource(|| async move {
        match fetch_site_config().await {
            Ok(config) => config,
            Err(err) => {
                tracing::debug!("config: {err}, using defaults");
                SiteConfig::default()
            }
        }
    })
}

#[cfg(target_arch = "wasm32")]
async fn fetch_site_config() -> Result<SiteConfig, SiteError> {
    match fetch_config_from("/config.json").await {
        Ok(config) => Ok(config),
        Err(_) => fetch_config_from("/assets/config.json").await,
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_config_from(path: &str) -> Result<SiteConfig, SiteError> {
    let response = gloo_net::http::Request::get(path)
        .send()
        .await
        .map_err(|err| SiteError::Config(format!("fetch {path}: {err}")))?;
    if !response.ok() {
        return Err(SiteError::Config(format!(
            "fetch {path}: status {}",
            response.status()
        )));
    }
    response
        .json::<SiteConfig>()
        .await
        .map_err(|err| SiteError::Config(format!("decode {path}: {err}")))
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_site_config() -> Result<SiteConfig, SiteError> {
    from_env(|key| std::env::var(key).ok())
}

#[cfg(any(test, not(target_arch = "wasm32")))]
fn from_env(lookup: impl Fn(&str) -> Option<String>) -> Result<SiteConfig, SiteError> {
    let defaults = SiteConfig::default();
    let profile_photo = lookup("PORTFOLIO_PROFILE_PHOTO").unwrap_or(defaults.profile_photo);
    let resume_path = lookup("PORTFOLIO_RESUME_PATH").unwrap_or(defaults.resume_path);
    let loading_delay_ms = match lookup("PORTFOLIO_LOADING_DELAY_MS") {
        Some(raw) => raw.trim().parse().map_err(|_| {
            SiteError::Config(format!("PORTFOLIO_LOADING_DELAY_MS is not a number: {raw}"))
        })?,
        None => defaults.loading_delay_ms,
    };
    let back_to_top_offset = match lookup("PORTFOLIO_BACK_TO_TOP_OFFSET") {
        Some(raw) => raw.trim().parse().map_err(|_| {
            SiteError::Config(format!("PORTFOLIO_BACK_TO_TOP_OFFSET is not a number: {raw}"))
        })?,
        None => defaults.back_to_top_offset,
    };
    Ok(SiteConfig {
        profile_photo,
        resume_path,
        loading_delay_ms,
        back_to_top_offset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{"resume_path":"/cv.pdf"}"#).unwrap();
        assert_eq!(config.resume_path, "/cv.pdf");
        assert_eq!(config.loading_delay_ms, 800);
        assert_eq!(config.profile_photo, "/picture.jpg");
    }

    #[test]
    fn empty_config_file_is_all_defaults() {
        let config: SiteConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = SiteConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
    }

    #[test]
    fn env_overrides_apply() {
        let config = from_env(|key| match key {
            "PORTFOLIO_LOADING_DELAY_MS" => Some("250".to_string()),
            "PORTFOLIO_BACK_TO_TOP_OFFSET" => Some(" 600 ".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.loading_delay_ms, 250);
        assert_eq!(config.back_to_top_offset, 600.0);
        assert_eq!(config.resume_path, "/generalCV.pdf");
    }

    #[test]
    fn env_rejects_garbage_delay() {
        let err = from_env(|key| (key == "PORTFOLIO_LOADING_DELAY_MS").then(|| "soon".to_string()))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "config load failed: PORTFOLIO_LOADING_DELAY_MS is not a number: soon"
        );
    }
}
