//! 종목 검색 결과 추출

use super::common::SEARCH_LIMIT;
use super::document::{element_text, Document};
use super::normalize::extract_code;
use crate::config::SelectorConfig;
use crate::models::SearchResult;

/// 검색 결과 링크를 문서 순서대로 읽어 최대 10개 반환
///
/// `code=` 가 없거나 이름이 빈 링크는 건너뛰며 개수에도 포함하지 않는다.
pub fn parse_search_results(html: &str, selectors: &SelectorConfig) -> Vec<SearchResult> {
    let doc = Document::parse_html(html);

    let results: Vec<SearchResult> = doc
        .select(&selectors.search_title_link)
        .into_iter()
        .filter_map(|link| {
            let code = link.value().attr("href").and_then(extract_code)?;
            let name = element_text(link);
            if name.is_empty() {
                return None;
            }
            Some(SearchResult { code, name })
        })
        .take(SEARCH_LIMIT)
        .collect();

    log::debug!("📊 검색 결과 {} 건", results.len());
    results
}
