//! 테스트용 네이버 금융 페이지 조각

pub const QUOTE_HTML: &str = r##"<!DOCTYPE html>
<html lang="ko"><head><meta charset="utf-8"><title>삼성전자 : 네이버 금융</title></head>
<body>
<div class="wrap_company">
    <h2><a href="#" onclick="return false;">삼성전자</a></h2>
    <div class="description"><span class="code">005930</span></div>
</div>
<div class="rate_info">
    <div class="today">
        <p class="no_today">
            <em class="no_up"><span class="blind">70,000</span></em>
        </p>
        <p class="no_exday">
            <em class="no_up"><span class="ico up">상승</span><span class="blind">1,200</span></em>
            <em class="no_up"><span class="blind">+1.74%</span></em>
        </p>
    </div>
    <table class="no_info">
        <tr>
            <td><span class="sptxt sp_txt3">시가</span><em><span class="blind">69,000</span></em></td>
            <td><span class="sptxt sp_txt4">고가</span><em><span class="blind">70,500</span></em></td>
        </tr>
        <tr>
            <td><span class="sptxt sp_txt5">저가</span><em><span class="blind">68,800</span></em></td>
            <td><span class="sptxt sp_txt9">거래량</span><em><span class="blind">12,345,678</span></em></td>
        </tr>
    </table>
</div>
</body></html>"##;

pub const SEARCH_HTML: &str = r#"<html><body>
<div class="section_search">
<table class="tbl_search">
    <tr><td class="tit"><a href="/item/main.naver?code=035720" class="tltle">카카오</a></td></tr>
    <tr><td class="tit"><a href="/item/news.naver?name=kakao" class="tltle">카카오 관련 뉴스</a></td></tr>
</table>
</div>
</body></html>"#;

/// 헤더/빈 행과 8개의 유효 행으로 된 순위 표
pub fn ranking_html() -> String {
    let rows = [
        ("005930", "삼성전자", "70,000", "12,345,678", "4,178,883"),
        ("000660", "SK하이닉스", "180,000", "2,345,678", "1,310,418"),
        ("373220", "LG에너지솔루션", "390,000", "234,567", "912,600"),
        ("207940", "삼성바이오로직스", "780,000", "34,567", "555,152"),
        ("005380", "현대차", "240,000", "456,789", "502,556"),
        ("068270", "셀트리온", "180,500", "567,890", "391,627"),
        ("000270", "기아", "98,000", "678,901", "389,628"),
        ("105560", "KB금융", "78,000", "789,012", "314,711"),
    ];

    let mut html = String::from(
        r#"<html><body><table class="type_2">
<thead><tr><th>N</th><th>종목명</th><th>현재가</th><th>전일비</th><th>등락률</th><th>거래량</th><th>시가총액</th></tr></thead>
<tbody>
<tr><td colspan="10" class="blank_08"></td></tr>
"#,
    );
    for (i, (code, name, price, volume, cap)) in rows.iter().enumerate() {
        html.push_str(&format!(
            r#"<tr>
<td class="no">{rank}</td>
<td><a href="/item/main.naver?code={code}" class="tltle">{name}</a></td>
<td class="number">{price}</td>
<td class="number"><span class="tah p11 red02">1,200</span></td>
<td class="number"><span class="tah p11 red01">+1.74%</span></td>
<td class="number">{volume}</td>
<td class="number">{cap}</td>
</tr>
"#,
            rank = i + 1,
        ));
        if i == 4 {
            html.push_str("<tr><td class=\"division_line\" colspan=\"10\"></td></tr>\n");
        }
    }
    html.push_str("</tbody></table></body></html>");
    html
}

pub const CHART_XML: &str = r#"<?xml version="1.0" encoding="EUC-KR" ?>
<protocol>
	<chartdata symbol="005930" name="삼성전자" count="3" timeframe="day" precision="0" origintime="19900103">
		<item data="20240101|100|110|90|105|500" />
		<item data="20240102|105|115|95|110|600" />
		<item data="20240103|110|120|100|115|700" />
	</chartdata>
</protocol>"#;
