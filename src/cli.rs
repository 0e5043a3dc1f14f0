//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, DEFAULT_PATH_PREFIX, DEFAULT_SEPARATOR};

/// cora CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "cora",
    author = "YourName <your@email.com>",
    version,
    about = "CONCATENATE FILES - 폴더 내 파일들을 하나의 파일로 이어 붙입니다",
    long_about = r#"
CONCATENATE FILES
=================

소스 폴더를 이름순으로 탐색하여 제외/포함 glob 패턴을 통과한 파일들을
하나의 출력 파일로 이어 붙입니다. 각 파일 앞에는 `접두사 + 경로` 헤더가,
파일 사이에는 구분자가 들어갑니다.

패턴 규칙:
  • '/'가 없는 패턴은 파일/폴더 이름과 비교 (예: "target", "*.rs")
  • '/'가 있는 패턴은 전체 상대 경로와 비교 (예: "src/*.rs")
  • 제외된 폴더는 하위 전체를 건너뜀
  • '**'는 재귀 와일드카드가 아님 ('*'와 동일)

예제:
  cora -s ./src -o context.md
  cora -s . -o out/context.md -e target -e .git -i "*.rs" -i "*.toml"
  cora -s . -o context.md --dry-run --debug
"#
)]
pub struct Args {
    /// 파일을 찾을 소스 폴더
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// 병합 결과를 쓸 출력 파일
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 제외할 glob 패턴 (반복 또는 쉼표로 구분)
    #[arg(short, long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// 포함할 glob 패턴 (반복 또는 쉼표로 구분, 없으면 모든 파일)
    #[arg(short, long, value_delimiter = ',')]
    pub include: Vec<String>,

    /// 파일 사이 구분자
    #[arg(short = 'p', long, default_value = DEFAULT_SEPARATOR)]
    pub separator: String,

    /// 각 파일 경로 앞에 붙일 접두사
    #[arg(short = 'x', long, default_value = DEFAULT_PATH_PREFIX)]
    pub path_prefix: String,

    /// 포함/제외 판단을 디버그 로그로 출력
    #[arg(short, long)]
    pub debug: bool,

    /// 최대 폴더 탐색 깊이
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// 실제 병합 없이 대상 파일 목록만 표시
    #[arg(long)]
    pub dry_run: bool,

    /// 배너, 진행률, 통계 출력 생략
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// 인자를 실행 설정으로 변환 (검증은 `Config::validate`)
    pub fn to_config(&self) -> Config {
        Config::new(
            self.source.clone().unwrap_or_default(),
            self.output.clone().unwrap_or_default(),
        )
        .with_exclude(self.exclude.clone())
        .with_include(self.include.clone())
        .with_separator(self.separator.clone())
        .with_path_prefix(self.path_prefix.clone())
        .with_debug(self.debug)
        .with_max_depth(self.max_depth)
    }
}
