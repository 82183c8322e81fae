//! 순위 표 추출 (시가총액 / 거래량)
//!
//! 두 순위 페이지는 같은 표 구조를 쓰고 마지막 지표 열만 다르다.

use scraper::ElementRef;

use super::document::{element_text, select_within, Document};
use super::normalize::{extract_code, parse_int_or_default};
use crate::config::SelectorConfig;
use crate::models::{RankEntry, RankValue, RankingKind};

const RANK_CELL: usize = 0;
const NAME_CELL: usize = 1;
const PRICE_CELL: usize = 2;

impl RankingKind {
    /// 지표 열 위치
    fn value_cell(&self) -> usize {
        match self {
            Self::MarketCap => 6,
            Self::Volume => 5,
        }
    }

    fn wrap(&self, displayed: String) -> RankValue {
        match self {
            Self::MarketCap => RankValue::MarketCap(displayed),
            Self::Volume => RankValue::Volume(displayed),
        }
    }
}

/// 한 행 파싱. 셀이 2개 미만이거나 순위/이름/코드가 없으면 None
fn parse_row(
    row: ElementRef<'_>,
    selectors: &SelectorConfig,
    kind: RankingKind,
) -> Option<RankEntry> {
    let cells = select_within(row, &selectors.ranking_cell);
    if cells.len() < 2 {
        return None;
    }

    let rank = element_text(cells[RANK_CELL]).parse::<u32>().ok()?;
    let link = select_within(cells[NAME_CELL], &selectors.ranking_link)
        .into_iter()
        .next()?;
    let name = element_text(link);
    let code = link.value().attr("href").and_then(extract_code)?;
    if name.is_empty() {
        return None;
    }

    let cell_text = |idx: usize| cells.get(idx).map(|c| element_text(*c)).unwrap_or_default();

    Some(RankEntry {
        rank,
        code,
        name,
        price: parse_int_or_default(&cell_text(PRICE_CELL), 0),
        value: kind.wrap(cell_text(kind.value_cell())),
    })
}

/// 표의 행을 문서 순서대로 읽어 최대 `limit` 개 반환
///
/// 건너뛴 행은 개수에 포함되지 않는다. 앞 행보다 순위가 낮은 행은 버린다.
pub fn parse_ranking(
    html: &str,
    selectors: &SelectorConfig,
    kind: RankingKind,
    limit: usize,
) -> Vec<RankEntry> {
    let doc = Document::parse_html(html);
    let mut last_rank = 0;

    let entries: Vec<RankEntry> = doc
        .select(&selectors.ranking_row)
        .into_iter()
        .filter_map(|row| parse_row(row, selectors, kind))
        .filter(|entry| {
            if entry.rank < last_rank {
                log::debug!("순위 역전 행 건너뜀: {} ({})", entry.rank, entry.code);
                return false;
            }
            last_rank = entry.rank;
            true
        })
        .take(limit)
        .collect();

    log::debug!("📊 {:?} 순위 {} 건", kind, entries.len());
    entries
}
