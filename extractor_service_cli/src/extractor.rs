use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::Post;

lazy_static! {
    // 인기글 영역을 가리키는 class/id (예: "PopularPosts", "most-popular")
    static ref POPULAR_ATTR: Regex = Regex::new("(?i)popular").unwrap();
    // 글 번호가 들어간 경로 (예: /123456)
    static ref NUMERIC_PATH: Regex = Regex::new(r"/\d+").unwrap();
}

const DEFAULT_HEADING_MARKER: &str = r"인기\s*글";

// 문서 전체 스캔에서 살펴볼 최대 링크 수
const FALLBACK_SCAN_LIMIT: usize = 20;

// 문서 전체 스캔에서 "더보기", 페이지 번호 같은 짧은 링크를 걸러내는 기준
const FALLBACK_MIN_TITLE_LEN: usize = 5;

#[derive(Clone, Debug)]
pub struct Extractor {
    heading_marker: Regex,
}

impl Extractor {
    pub fn new() -> Self {
        Self {
            heading_marker: Regex::new(DEFAULT_HEADING_MARKER).unwrap(),
        }
    }

    /// Replaces the heading phrase used for section discovery. The default
    /// matches "인기" followed by optional whitespace and "글".
    pub fn with_heading_marker(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            heading_marker: Regex::new(pattern)?,
        })
    }

    /// Pulls popular-post links out of a blog homepage. Relative links are
    /// resolved against `base_url`. Always returns an (possibly empty) list.
    pub fn extract(&self, html: &str, base_url: &str) -> Vec<Post> {
        let document = Html::parse_document(html);
        let base = Url::parse(base_url).ok();

        let all = Selector::parse("*").unwrap();
        let headings = Selector::parse("h2, h3, h4, strong, b, span").unwrap();
        let anchors = Selector::parse("a[href]").unwrap();

        // 1) class/id 속성으로 인기글 영역 찾기
        let mut sections: Vec<ElementRef> = document
            .select(&all)
            .filter(|el| {
                let value = el.value();
                value
                    .attr("class")
                    .map_or(false, |c| POPULAR_ATTR.is_match(c))
                    || value.attr("id").map_or(false, |i| POPULAR_ATTR.is_match(i))
            })
            .collect();

        // 2) "인기 글" 류의 제목 요소 찾기. 제목 자체가 아니라
        //    가장 가까운 블록 컨테이너를 영역으로 삼는다.
        for el in document.select(&headings) {
            let text = el.text().collect::<String>();
            if self.heading_marker.is_match(&text) {
                if let Some(container) = nearest_container(el) {
                    sections.push(container);
                }
            }
        }

        let mut posts = Vec::new();
        let mut seen = HashSet::new();

        // 3) 찾은 영역 안의 링크 수집
        for section in &sections {
            for anchor in section.select(&anchors) {
                let Some(href) = anchor.value().attr("href") else {
                    continue;
                };
                let title = anchor_title(anchor);
                if href.trim().is_empty() || title.is_empty() {
                    continue;
                }
                let Some(post_url) = resolve(base.as_ref(), href) else {
                    continue;
                };
                if seen.contains(&post_url) || post_url.contains("/m/") {
                    continue;
                }
                if !is_post_permalink(&post_url) {
                    continue;
                }
                seen.insert(post_url.clone());
                posts.push(Post {
                    title,
                    url: post_url,
                });
            }
        }

        // 4) 영역에서 아무것도 못 찾았을 때만 문서 전체를 훑는다
        if posts.is_empty() {
            let numeric_anchors = document
                .select(&anchors)
                .filter(|a| {
                    a.value()
                        .attr("href")
                        .map_or(false, |h| NUMERIC_PATH.is_match(h))
                })
                .take(FALLBACK_SCAN_LIMIT);

            for anchor in numeric_anchors {
                let Some(href) = anchor.value().attr("href") else {
                    continue;
                };
                let title = anchor_title(anchor);
                if title.chars().count() <= FALLBACK_MIN_TITLE_LEN {
                    continue;
                }
                let Some(post_url) = resolve(base.as_ref(), href) else {
                    continue;
                };
                if seen.contains(&post_url) {
                    continue;
                }
                seen.insert(post_url.clone());
                posts.push(Post {
                    title,
                    url: post_url,
                });
            }
        }

        posts
    }
}

fn anchor_title(anchor: ElementRef) -> String {
    anchor.text().collect::<String>().trim().to_string()
}

// 글 고정 주소 휴리스틱: 숫자 경로(/123456) 또는 /entry/... 형식
fn is_post_permalink(url: &str) -> bool {
    NUMERIC_PATH.is_match(url) || url.contains("/entry")
}

fn nearest_container(el: ElementRef) -> Option<ElementRef> {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| matches!(ancestor.value().name(), "div" | "section" | "aside"))
}

fn resolve(base: Option<&Url>, href: &str) -> Option<String> {
    if href.starts_with("http://") || href.starts_with("https://") {
        return Some(href.to_string());
    }
    base.and_then(|b| b.join(href).ok()).map(|u| u.to_string())
}
