//! 실행 설정 모듈
//!
//! CLI 등 외부에서 받은 값을 검증된 설정 객체로 묶습니다.

use std::path::PathBuf;

use crate::error::{CoraError, Result};

/// 기본 파일 구분자
pub const DEFAULT_SEPARATOR: &str = "\n---\n";

/// 기본 경로 접두사 (마크다운 헤딩)
pub const DEFAULT_PATH_PREFIX: &str = "## ";

/// 병합 실행 설정
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// 파일을 찾을 소스 폴더
    pub source: PathBuf,
    /// 생성될 출력 파일
    pub output: PathBuf,
    /// 제외 glob 패턴 (순서 유지)
    pub exclude: Vec<String>,
    /// 포함 glob 패턴 (비어 있으면 모든 파일 포함)
    pub include: Vec<String>,
    /// 파일 사이에 들어갈 구분자
    pub separator: String,
    /// 각 파일 경로 앞에 붙는 접두사
    pub path_prefix: String,
    /// 포함/제외 판단마다 디버그 로그 기록
    pub debug: bool,
    /// 최대 폴더 탐색 깊이 (None이면 무제한)
    pub max_depth: Option<usize>,
}

impl Config {
    /// 기본값으로 설정 생성
    pub fn new(source: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output: output.into(),
            exclude: Vec::new(),
            include: Vec::new(),
            separator: DEFAULT_SEPARATOR.to_string(),
            path_prefix: DEFAULT_PATH_PREFIX.to_string(),
            debug: false,
            max_depth: None,
        }
    }

    /// 제외 패턴 설정
    pub fn with_exclude(mut self, exclude: Vec<String>) -> Self {
        self.exclude = exclude;
        self
    }

    /// 포함 패턴 설정
    pub fn with_include(mut self, include: Vec<String>) -> Self {
        self.include = include;
        self
    }

    /// 구분자 설정
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// 경로 접두사 설정
    pub fn with_path_prefix(mut self, path_prefix: impl Into<String>) -> Self {
        self.path_prefix = path_prefix.into();
        self
    }

    /// 디버그 모드 설정
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// 최대 탐색 깊이 설정
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// 필수 값 확인 (파일 시스템은 건드리지 않음)
    pub fn validate(&self) -> Result<()> {
        if self.source.as_os_str().is_empty() {
            return Err(CoraError::MissingSource);
        }
        if self.output.as_os_str().is_empty() {
            return Err(CoraError::MissingOutput);
        }
        Ok(())
    }
}
