//! cora - CONCATENATE FILES
//!
//! 폴더 내 파일들을 glob 패턴으로 걸러 하나의 출력 파일로 이어 붙이는 CLI 도구입니다.
//!
//! # 주요 기능
//!
//! - 🔍 **패턴 필터링**: 제외/포함 glob 패턴 (제외된 폴더는 하위 전체를 건너뜀)
//! - 📐 **결정적 순서**: 폴더별 이름순 전위 순회로 매번 같은 결과
//! - 🚿 **스트리밍 병합**: 고정 크기 버퍼로 대용량 파일도 메모리 부담 없이 처리
//! - 🏷️ **파일 헤더**: 각 파일 앞에 `접두사 + 경로` 헤더, 파일 사이 구분자
//! - 🧪 **드라이런 모드**: 실제 병합 없이 대상 파일 목록 확인
//! - 📈 **통계**: 파일 수, 입출력 용량, 처리 시간
//!
//! # 출력 형식
//!
//! ```text
//! [구분자 (첫 파일 제외)][접두사][경로]\n[파일 내용]\n
//! ```
//!
//! # 예제
//!
//! ```bash
//! # 기본 사용법
//! cora -s ./src -o context.md
//!
//! # 특정 폴더 제외, rs 파일만 포함
//! cora -s . -o context.md -e target -e .git -i "*.rs"
//! ```

pub mod cli;
pub mod concatenator;
pub mod config;
pub mod debug_log;
pub mod error;
pub mod pattern;
pub mod stats;
pub mod walker;

// Re-exports for convenient access
pub use cli::Args;
pub use concatenator::{ConcatSummary, Concatenator};
pub use config::Config;
pub use debug_log::{DebugSink, LogSink, NoopSink};
pub use error::{CoraError, Result};
pub use pattern::PatternMatcher;
pub use stats::{format_bytes, Statistics};
pub use walker::{Decision, Walker};
