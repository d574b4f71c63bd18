use clap::Parser;
use extractor_service_cli::{
    extractor::Extractor, fetcher::Fetcher, utils, AggregateResponse, ExtractionResult,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Blog addresses to scan (scheme optional)
    #[arg(required = true)]
    urls: Vec<String>,

    /// Output file for the JSON result
    #[arg(short, long, default_value = "result.json")]
    output: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let fetcher = Fetcher::new()?;
    let extractor = Extractor::new();

    // 블로그는 입력 순서대로 하나씩 처리한다. 하나가 실패해도 나머지는 계속.
    let mut results = Vec::new();
    for raw in &args.urls {
        let blog_url = Fetcher::normalize_url(raw);
        println!("🔍 수집 중: {}", blog_url);
        match fetcher.fetch(&blog_url).await {
            Ok(html) => {
                let posts = extractor.extract(&html, &blog_url);
                println!("✅ 인기글 {}건 발견", posts.len());
                results.push(ExtractionResult::ok(blog_url, posts));
            }
            Err(e) => {
                eprintln!("❌ {}: {}", blog_url, e);
                results.push(ExtractionResult::fail(blog_url, e.to_string()));
            }
        }
    }

    let total_blogs = results.len();
    let output = serde_json::json!({
        "extracted_at": chrono::Utc::now(),
        "response": AggregateResponse {
            success: true,
            results,
            total_blogs,
        },
    });
    utils::save_json(&output, &args.output)?;

    Ok(())
}
