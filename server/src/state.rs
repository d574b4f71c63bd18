use extractor_service_cli::{extractor::Extractor, fetcher::Fetcher};

// 앱 전역 상태: 시작할 때 한 번 만들어 Extension 으로 핸들러에 전달한다.
#[derive(Clone, Debug)]
pub struct AppState {
    pub fetcher: Fetcher,
    pub extractor: Extractor,
}

impl AppState {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(AppState {
            fetcher: Fetcher::new()?,
            extractor: Extractor::new(),
        })
    }
}
