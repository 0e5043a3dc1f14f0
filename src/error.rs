//! 에러 타입 정의 모듈
//!
//! cora에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//! 모든 에러는 어떤 작업(단계)과 어떤 경로에서 실패했는지를 담고 있습니다.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// cora에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum CoraError {
    /// 소스 폴더가 지정되지 않음
    #[error("소스 폴더가 필요합니다")]
    MissingSource,

    /// 출력 파일이 지정되지 않음
    #[error("출력 파일이 필요합니다")]
    MissingOutput,

    /// 소스 폴더가 존재하지 않음
    #[error("소스 폴더를 찾을 수 없습니다: {path}")]
    SourceNotFound { path: PathBuf },

    /// 소스 경로가 폴더가 아님
    #[error("소스 경로가 폴더가 아닙니다: {path}")]
    NotADirectory { path: PathBuf },

    /// 유효하지 않은 glob 패턴
    #[error("유효하지 않은 패턴 ({pattern}): {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// 폴더 탐색 실패
    #[error("폴더 탐색 실패 ({path}): {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// 출력 폴더 생성 실패
    #[error("출력 폴더를 만들 수 없습니다 ({path}): {source}")]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 출력 파일 생성 실패
    #[error("출력 파일을 만들 수 없습니다 ({path}): {source}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 입력 파일 열기 실패
    #[error("파일을 열 수 없습니다 ({path}): {source}")]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 입력 파일 읽기 실패
    #[error("파일 읽기 실패 ({path}): {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 출력 쓰기 실패
    #[error("{phase} 쓰기 실패 ({path}): {source}")]
    Write {
        phase: WritePhase,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// 출력 쓰기 단계
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePhase {
    /// 파일 사이 구분자
    Separator,
    /// 경로 헤더 줄
    Header,
    /// 파일 내용
    Content,
    /// 파일 내용 뒤 줄바꿈
    TrailingNewline,
    /// 버퍼 플러시
    Flush,
}

impl std::fmt::Display for WritePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WritePhase::Separator => write!(f, "구분자"),
            WritePhase::Header => write!(f, "헤더"),
            WritePhase::Content => write!(f, "파일 내용"),
            WritePhase::TrailingNewline => write!(f, "줄바꿈"),
            WritePhase::Flush => write!(f, "버퍼 플러시"),
        }
    }
}

/// cora 결과 타입 별칭
pub type Result<T> = std::result::Result<T, CoraError>;
