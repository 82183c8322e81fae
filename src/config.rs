//! 설정 모듈
//!
//! JSON 파일에서 시스템 설정을 불러온다

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 서버 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 수신 주소
    #[serde(default = "default_host")]
    pub host: String,
    /// 수신 포트
    #[serde(default = "default_port")]
    pub port: u16,
    /// 작업 스레드 수 (0 이면 CPU 코어 수)
    #[serde(default)]
    pub workers: usize,
}

/// 네이버 금융 접속 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NaverConfig {
    /// 시세/검색/순위 페이지 루트
    #[serde(default = "default_finance_base_url")]
    pub finance_base_url: String,
    /// 차트 피드 루트
    #[serde(default = "default_chart_base_url")]
    pub chart_base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// 요청 타임아웃 (밀리초)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default)]
    pub selectors: SelectorConfig,
}

/// 추출에 쓰이는 셀렉터 표
///
/// 네이버 마크업이 바뀌면 코드 수정 없이 설정 파일에서 덮어쓸 수 있다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// 종목명
    pub company_name: String,
    /// 현재가
    pub current_price: String,
    /// 전일대비 (0: 변동폭, 1: 등락률)
    pub previous_close_delta: String,
    /// 당일 시세 (0: 시가, 1: 고가, 2: 저가, 3: 거래량)
    pub today_range: String,
    /// 검색 결과 링크
    pub search_title_link: String,
    /// 순위 표의 행
    pub ranking_row: String,
    pub ranking_cell: String,
    pub ranking_link: String,
    /// 차트 피드의 레코드 노드와 속성
    pub chart_item: String,
    pub chart_item_attr: String,
}

/// 로그 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// 로그 레벨: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// 애플리케이션 설정
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub naver: NaverConfig,
    #[serde(default)]
    pub log: LogConfig,
}

// 기본값 함수
fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }
fn default_finance_base_url() -> String { "https://finance.naver.com".to_string() }
fn default_chart_base_url() -> String { "https://fchart.stock.naver.com".to_string() }
fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string()
}
fn default_timeout_ms() -> u64 { 10_000 }
fn default_log_level() -> String { "info".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: 0,
        }
    }
}

impl Default for NaverConfig {
    fn default() -> Self {
        Self {
            finance_base_url: default_finance_base_url(),
            chart_base_url: default_chart_base_url(),
            user_agent: default_user_agent(),
            timeout_ms: default_timeout_ms(),
            selectors: SelectorConfig::default(),
        }
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            company_name: ".wrap_company h2 a".to_string(),
            current_price: ".no_today .blind".to_string(),
            previous_close_delta: ".no_exday .blind".to_string(),
            today_range: ".rate_info .no_info .blind".to_string(),
            search_title_link: ".tltle".to_string(),
            ranking_row: "table.type_2 tr".to_string(),
            ranking_cell: "td".to_string(),
            ranking_link: "a".to_string(),
            chart_item: "item".to_string(),
            chart_item_attr: "data".to_string(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// 설정 출처 (로드 실패한 파일 목록 포함)
#[derive(Debug)]
pub enum ConfigSource {
    File(String, Vec<String>),
    Default(Vec<String>),
}

impl ConfigSource {
    pub fn log(&self) {
        let failures = match self {
            Self::File(path, failures) => {
                log::info!("{} 에서 설정을 불러왔습니다", path);
                failures
            }
            Self::Default(failures) => {
                log::info!("기본 설정을 사용합니다");
                failures
            }
        };
        for failure in failures {
            log::warn!("설정 파일 로드 실패 {}", failure);
        }
    }
}

impl NaverConfig {
    /// 차트 요청에 붙는 Referer (포털 루트)
    pub fn referer(&self) -> String {
        format!("{}/", self.finance_base_url.trim_end_matches('/'))
    }
}

impl AppConfig {
    /// JSON 파일에서 설정 로드
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// 설정 로드: CONFIG_PATH, 기본 경로 순으로 시도하고 실패하면 기본값
    ///
    /// 로거 초기화 전에 호출되므로 결과 출처를 함께 돌려준다.
    pub fn load() -> (Self, ConfigSource) {
        let explicit = std::env::var("CONFIG_PATH").ok();
        let config_paths = explicit
            .iter()
            .map(String::as_str)
            .chain(["config.json", "config/config.json"]);

        let mut failures = Vec::new();
        for path in config_paths {
            if Path::new(path).exists() {
                match Self::from_file(path) {
                    Ok(config) => return (config, ConfigSource::File(path.to_string(), failures)),
                    Err(e) => failures.push(format!("{}: {}", path, e)),
                }
            }
        }

        (Self::default(), ConfigSource::Default(failures))
    }

    /// 서버 바인딩 주소
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
