pub mod extractor;
pub mod fetcher;
pub mod utils;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Post {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ExtractionResult {
    pub success: bool,
    pub blog_url: String,
    pub posts: Vec<Post>,
    pub count: usize,
    pub error: Option<String>,
}

impl ExtractionResult {
    pub fn ok(blog_url: String, posts: Vec<Post>) -> Self {
        let count = posts.len();
        Self {
            success: true,
            blog_url,
            posts,
            count,
            error: None,
        }
    }

    pub fn fail(blog_url: String, error: String) -> Self {
        Self {
            success: false,
            blog_url,
            posts: Vec::new(),
            count: 0,
            error: Some(error),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AggregateResponse {
    pub success: bool,
    pub results: Vec<ExtractionResult>,
    pub total_blogs: usize,
}
