use axum::extract::rejection::JsonRejection;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
    Extension, Json,
};
use serde::Deserialize;
use serde_json::json;

use extractor_service_cli::fetcher::Fetcher;
use extractor_service_cli::{AggregateResponse, ExtractionResult};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExtractPayload {
    pub blog_urls: String,
}

pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../templates/index.html"))
}

pub async fn extract(
    Extension(state): Extension<AppState>,
    payload: Result<Json<ExtractPayload>, JsonRejection>,
) -> impl IntoResponse {
    // 상태 코드는 항상 200. 성공 여부는 본문의 success 필드로만 구분한다.
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(e) => {
            return (
                StatusCode::OK,
                Json(json!({
                    "success": false,
                    "error": format!("처리 중 오류가 발생했습니다: {}", e),
                })),
            );
        }
    };

    let urls = parse_blog_urls(&payload.blog_urls);
    if urls.is_empty() {
        return (
            StatusCode::OK,
            Json(json!({
                "success": false,
                "error": "추출할 블로그 주소를 입력해주세요.",
            })),
        );
    }

    let response = run_batch(&state, urls).await;
    (StatusCode::OK, Json(json!(response)))
}

// 줄 단위로 나누고 빈 줄은 버린 뒤, 스킴이 없는 주소에 https:// 를 붙인다.
pub(crate) fn parse_blog_urls(blob: &str) -> Vec<String> {
    blob.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Fetcher::normalize_url)
        .collect()
}

// 주소마다 수집→추출을 순서대로 실행한다. 한 주소의 실패는 해당
// 결과에만 기록되고 나머지 주소 처리에는 영향을 주지 않는다.
pub(crate) async fn run_batch(state: &AppState, urls: Vec<String>) -> AggregateResponse {
    let mut results = Vec::with_capacity(urls.len());
    for blog_url in urls {
        let result = match state.fetcher.fetch(&blog_url).await {
            Ok(html) => {
                let posts = state.extractor.extract(&html, &blog_url);
                ExtractionResult::ok(blog_url, posts)
            }
            Err(e) => ExtractionResult::fail(blog_url, e.to_string()),
        };
        results.push(result);
    }

    let total_blogs = results.len();
    AggregateResponse {
        success: true,
        results,
        total_blogs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_dropped_and_schemes_added() {
        let urls = parse_blog_urls("  \n\nabc.tistory.com \nhttps://def.tistory.com\n");
        assert_eq!(
            urls,
            vec!["https://abc.tistory.com", "https://def.tistory.com"]
        );
    }

    #[test]
    fn whitespace_only_input_yields_no_urls() {
        assert!(parse_blog_urls(" \n\t\n").is_empty());
        assert!(parse_blog_urls("").is_empty());
    }

    #[tokio::test]
    async fn batch_is_total_and_keeps_input_order() {
        let state = AppState::new().unwrap();
        // 티스토리 도메인이 아니므로 네트워크 없이 즉시 실패하는 주소들
        let urls = vec![
            "https://example.com".to_string(),
            "https://example.org".to_string(),
        ];

        let response = run_batch(&state, urls).await;
        assert!(response.success);
        assert_eq!(response.total_blogs, 2);
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[0].blog_url, "https://example.com");
        assert_eq!(response.results[1].blog_url, "https://example.org");
    }

    #[tokio::test]
    async fn invalid_domain_is_reported_per_url() {
        let state = AppState::new().unwrap();
        let urls = vec!["https://example.com".to_string()];

        let response = run_batch(&state, urls).await;
        let result = &response.results[0];
        assert!(!result.success);
        assert_eq!(result.count, 0);
        assert!(result.error.as_deref().unwrap().contains("티스토리"));
    }
}
