use std::time::Duration;

use thiserror::Error;
use url::Url;

// 대상 플랫폼 도메인. 호스트에 이 문자열이 없으면 요청 자체를 보내지 않는다.
const TISTORY_DOMAIN: &str = "tistory.com";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("티스토리 블로그 주소가 아닙니다: {0}")]
    InvalidUrl(String),
    #[error("페이지를 가져오지 못했습니다: {0}")]
    Network(String),
}

#[derive(Clone, Debug)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            client: reqwest::Client::builder()
                .timeout(FETCH_TIMEOUT)
                .user_agent(USER_AGENT)
                .build()?,
        })
    }

    /// Prefixes `https://` when the address has no scheme.
    pub fn normalize_url(raw: &str) -> String {
        let trimmed = raw.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("https://{}", trimmed)
        }
    }

    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let parsed = Url::parse(url).map_err(|_| FetchError::InvalidUrl(url.to_string()))?;
        let host_ok = parsed
            .host_str()
            .map_or(false, |host| host.contains(TISTORY_DOMAIN));
        if !host_ok {
            return Err(FetchError::InvalidUrl(url.to_string()));
        }

        let res = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !res.status().is_success() {
            return Err(FetchError::Network(format!("HTTP {}", res.status())));
        }

        // 티스토리 스킨이 charset 을 잘못 선언하는 경우가 있어
        // 선언된 인코딩과 무관하게 항상 UTF-8 로 디코드한다.
        let body = res
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}
