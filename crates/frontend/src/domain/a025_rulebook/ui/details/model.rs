use crate::shared::api_utils::{ApiConfig, ApiError};
use contracts::domain::a025_rulebook::aggregate::{Rulebook, RulesetSummary};
use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use std::rc::Rc;

/// Loads one rulebook by id; the page uses [`http_fetcher`].
pub type RulebookFetcher =
    Rc<dyn Fn(ApiConfig, String) -> LocalBoxFuture<'static, Result<Rulebook, ApiError>>>;

pub fn rulebook_fetcher<F>(fetch: F) -> RulebookFetcher
where
    F: Fn(ApiConfig, String) -> LocalBoxFuture<'static, Result<Rulebook, ApiError>> + 'static,
{
    Rc::new(fetch)
}

pub fn http_fetcher() -> RulebookFetcher {
    rulebook_fetcher(|api, id| async move { fetch_by_id(&api, &id).await }.boxed_local())
}

pub fn rulebook_url(api: &ApiConfig, id: &str) -> String {
    api.url(&format!("/api/rulebooks/{}", urlencoding::encode(id)))
}

pub fn rulesets_url(api: &ApiConfig, id: &str) -> String {
    api.url(&format!("/api/rulebooks/{}/rulesets", urlencoding::encode(id)))
}

async fn get_json(url: &str) -> Result<serde_json::Value, ApiError> {
    let response = Request::get(url)
        .header("Content-Type", "application/json")
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Http {
            status: response.status(),
        });
    }

    response
        .json::<serde_json::Value>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch one rulebook. Any JSON body is accepted.
pub async fn fetch_by_id(api: &ApiConfig, id: &str) -> Result<Rulebook, ApiError> {
    let raw = get_json(&rulebook_url(api, id)).await?;
    Ok(Rulebook::from_raw(&raw))
}

pub async fn fetch_rulesets(api: &ApiConfig, id: &str) -> Result<Vec<RulesetSummary>, ApiError> {
    let raw = get_json(&rulesets_url(api, id)).await?;
    Ok(RulesetSummary::list_from_raw(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let api = ApiConfig::new("http://localhost:3000");
        assert_eq!(
            rulebook_url(&api, "42"),
            "http://localhost:3000/api/rulebooks/42"
        );
        assert_eq!(
            rulesets_url(&api, "42"),
            "http://localhost:3000/api/rulebooks/42/rulesets"
        );
    }

    #[test]
    fn test_id_is_encoded_in_request_path() {
        let api = ApiConfig::new("");
        assert_eq!(rulebook_url(&api, "a/b c"), "/api/rulebooks/a%2Fb%20c");
        assert_eq!(rulebook_url(&api, ""), "/api/rulebooks/");
    }
}
