//! 폴더 탐색 모듈
//!
//! 소스 폴더를 이름순 전위 순회하며 제외/포함 패턴으로 병합 대상 파일을 고릅니다.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::Config;
use crate::debug_log::{sink_for, DebugSink};
use crate::error::{CoraError, Result};
use crate::pattern::{relative_slash_path, PatternMatcher};

/// 탐색 중 만난 항목에 대한 판단
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// 제외 패턴 일치 (폴더면 하위 전체를 건너뜀)
    Excluded,
    /// 병합 대상 파일
    Included,
    /// 포함 패턴 불일치로 건너뛴 파일
    Skipped,
    /// 제외되지 않은 폴더 (계속 탐색)
    Descend,
}

/// 제외/포함 패턴을 적용하는 폴더 탐색기
pub struct Walker<'a> {
    root: PathBuf,
    exclude: PatternMatcher,
    include: PatternMatcher,
    max_depth: Option<usize>,
    debug: &'a dyn DebugSink,
}

impl<'a> Walker<'a> {
    /// 새 탐색기 생성
    ///
    /// 패턴은 여기서 한 번만 컴파일되며, 잘못된 패턴이 있으면 탐색 전에 실패합니다.
    pub fn new(root: impl Into<PathBuf>, exclude: &[String], include: &[String]) -> Result<Self> {
        Ok(Self {
            root: root.into(),
            exclude: PatternMatcher::new(exclude)?,
            include: PatternMatcher::new(include)?,
            max_depth: None,
            debug: sink_for(false),
        })
    }

    /// 설정에서 탐색기 생성
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(&config.source, &config.exclude, &config.include)?
            .with_max_depth(config.max_depth))
    }

    /// 디버그 로그 수신자 설정
    pub fn with_debug_sink(mut self, debug: &'a dyn DebugSink) -> Self {
        self.debug = debug;
        self
    }

    /// 최대 탐색 깊이 설정 (0이면 소스 폴더 자신만)
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// 상대 경로 하나에 대한 판단 (파일 시스템 접근 없음)
    ///
    /// 제외 패턴이 먼저 적용되고, 포함 패턴은 파일에만 적용됩니다.
    pub fn classify(&self, relative: &str, is_dir: bool) -> Decision {
        if self.exclude.matches(relative) {
            Decision::Excluded
        } else if is_dir {
            Decision::Descend
        } else if self.include.is_empty() || self.include.matches(relative) {
            Decision::Included
        } else {
            Decision::Skipped
        }
    }

    /// 폴더를 탐색하여 병합 대상 파일 목록 반환
    ///
    /// 폴더별 이름순 전위 순회 순서를 따르며, 첫 번째 파일 시스템 에러에서 중단합니다.
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        self.check_root()?;

        let mut walker = WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name();
        if let Some(max_depth) = self.max_depth {
            walker = walker.max_depth(max_depth);
        }

        let mut files = Vec::new();
        let mut entries = walker.into_iter();

        while let Some(entry) = entries.next() {
            let entry = entry.map_err(|e| CoraError::Walk {
                path: e.path().map(Path::to_path_buf).unwrap_or_else(|| self.root.clone()),
                source: e,
            })?;

            let path = entry.path();
            let is_dir = entry.file_type().is_dir();
            let relative = relative_slash_path(&self.root, path);

            match self.classify(&relative, is_dir) {
                Decision::Excluded => {
                    self.debug.record(&format!("제외: {}", path.display()));
                    if is_dir {
                        entries.skip_current_dir();
                    }
                }
                Decision::Included => {
                    self.debug.record(&format!("포함: {}", path.display()));
                    files.push(path.to_path_buf());
                }
                Decision::Skipped => {
                    self.debug
                        .record(&format!("건너뜀 (포함 패턴 불일치): {}", path.display()));
                }
                Decision::Descend => {}
            }
        }

        Ok(files)
    }

    /// 소스 폴더 존재 및 폴더 여부 확인
    fn check_root(&self) -> Result<()> {
        match std::fs::metadata(&self.root) {
            Ok(metadata) if !metadata.is_dir() => Err(CoraError::NotADirectory {
                path: self.root.clone(),
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(CoraError::SourceNotFound {
                path: self.root.clone(),
            }),
            // 그 밖의 에러는 탐색 중 walkdir 에러로 보고됨
            _ => Ok(()),
        }
    }
}
