//! 문서 질의
//!
//! 셀렉터로 노드를 찾고 N번째 노드의 텍스트/속성을 돌려준다.
//! 잘못된 셀렉터는 오류가 아니라 "일치 없음" 으로 취급한다.

use scraper::{ElementRef, Html, Selector};

/// 셀렉터 파싱 (실패 시 경고 후 None)
fn compile(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(selector) => Some(selector),
        Err(e) => {
            log::warn!("잘못된 셀렉터 '{}': {:?}", css, e);
            None
        }
    }
}

/// 요소의 텍스트 (앞뒤 공백 제거)
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// 요소 하위에서 셀렉터 일치 노드 (문서 순서)
pub fn select_within<'a>(element: ElementRef<'a>, css: &str) -> Vec<ElementRef<'a>> {
    match compile(css) {
        Some(selector) => element.select(&selector).collect(),
        None => Vec::new(),
    }
}

/// 파싱된 HTML/XML 문서
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse_html(text: &str) -> Self {
        Self {
            html: Html::parse_document(text),
        }
    }

    /// XML 피드 파싱
    ///
    /// HTML 파서로 읽으므로 `<item ... />` 같은 자기 종료 태그는 중첩되지만,
    /// 셀렉터 일치와 속성 값에는 영향이 없다.
    pub fn parse_xml(text: &str) -> Self {
        Self {
            html: Html::parse_fragment(text),
        }
    }

    /// 셀렉터와 일치하는 모든 노드 (문서 순서)
    pub fn select(&self, css: &str) -> Vec<ElementRef<'_>> {
        match compile(css) {
            Some(selector) => self.html.select(&selector).collect(),
            None => Vec::new(),
        }
    }

    /// N번째 일치 노드
    pub fn nth(&self, css: &str, n: usize) -> Option<ElementRef<'_>> {
        let selector = compile(css)?;
        self.html.select(&selector).nth(n)
    }

    /// N번째 일치 노드의 텍스트
    pub fn nth_text(&self, css: &str, n: usize) -> Option<String> {
        self.nth(css, n).map(element_text)
    }
}
