//! 패턴 매칭 모듈
//!
//! glob 패턴을 사용한 상대 경로 필터링을 담당합니다.
//!
//! - `/`가 없는 패턴은 경로의 마지막 구성요소(파일/폴더 이름)와 비교합니다.
//! - `/`가 있는 패턴은 전체 상대 경로와 비교합니다.
//! - `*`, `?`는 `/`를 넘지 않습니다. `**`는 재귀 와일드카드가 아니라
//!   `*` 두 개로 취급되어 한 구성요소 안에서만 매칭됩니다.
//! - 부정 문자 클래스는 `[^...]`뿐입니다. `[!...]`의 `!`는 일반 문자입니다.
//! - `\`는 다음 문자를 이스케이프합니다 (`\*`는 별표 문자). Windows에서는
//!   `\`가 경로 구분자로 바뀌므로 이스케이프가 없습니다.

use glob::{MatchOptions, Pattern};
use std::iter::Peekable;
use std::path::{Component, Path};
use std::str::Chars;

use crate::error::{CoraError, Result};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// 컴파일된 단일 패턴
#[derive(Debug, Clone)]
struct CompiledPattern {
    pattern: Pattern,
    /// `/`를 포함하면 전체 경로와 비교
    full_path: bool,
}

impl CompiledPattern {
    fn matches(&self, relative: &str) -> bool {
        if self.full_path {
            self.pattern.matches_with(relative, MATCH_OPTIONS)
        } else {
            self.pattern.matches_with(base_name(relative), MATCH_OPTIONS)
        }
    }
}

/// 컴파일된 패턴 목록 매처
#[derive(Debug, Clone, Default)]
pub struct PatternMatcher {
    patterns: Vec<CompiledPattern>,
}

impl PatternMatcher {
    /// 새 패턴 매처 생성
    ///
    /// # Arguments
    /// * `patterns` - glob 패턴 목록 (비어 있으면 아무것도 매칭하지 않음)
    ///
    /// # Returns
    /// 컴파일된 `PatternMatcher` 또는 첫 번째 잘못된 패턴에 대한 에러
    ///
    /// # Examples
    /// ```
    /// use cora::pattern::PatternMatcher;
    ///
    /// let matcher = PatternMatcher::new(&["*.txt".to_string()]).unwrap();
    /// assert!(matcher.matches("docs/notes.txt"));
    /// assert!(!matcher.matches("docs/notes.md"));
    /// ```
    pub fn new(patterns: &[String]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|raw| {
                let invalid = |reason: String| CoraError::InvalidPattern {
                    pattern: raw.clone(),
                    reason,
                };
                let normalized = normalize(raw).map_err(invalid)?;
                let pattern = Pattern::new(&normalized).map_err(|e| invalid(e.to_string()))?;
                Ok(CompiledPattern {
                    pattern,
                    full_path: normalized.contains('/'),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// 상대 경로가 패턴 중 하나라도 일치하는지 확인
    ///
    /// # Arguments
    /// * `relative` - `/`로 구분된 소스 폴더 기준 상대 경로
    pub fn matches(&self, relative: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(relative))
    }

    /// 패턴이 하나도 없는지 확인
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// 소스 폴더 기준 상대 경로를 `/` 구분자로 반환
///
/// 소스 폴더 자신은 `"."`입니다.
pub fn relative_slash_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);

    let parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect();

    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}

/// 마지막 경로 구성요소
fn base_name(relative: &str) -> &str {
    relative.rsplit('/').next().unwrap_or(relative)
}

/// 문자 클래스 `[...]` 하나
struct CharClass {
    negated: bool,
    /// 단일 문자는 `(c, c)`
    ranges: Vec<(char, char)>,
}

/// `glob` 크레이트 문법에서 클래스 안의 특수 문자
const CLASS_SPECIAL: [char; 3] = ['!', '-', ']'];

/// 패턴을 `glob` 크레이트 문법으로 변환
///
/// - 클래스 밖의 연속된 `*`는 하나로 합침 (`**`의 재귀 의미 제거)
/// - `\x`는 문자 `x` 그대로 (`*`, `?`, `[`는 `[x]`로 감쌈)
/// - `[^...]`만 부정 클래스이며 `!`는 일반 문자
fn normalize(raw: &str) -> std::result::Result<String, String> {
    let raw = if cfg!(windows) {
        raw.replace('\\', "/")
    } else {
        raw.to_string()
    };

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    let mut prev_star = false;

    while let Some(c) = chars.next() {
        match c {
            '*' if prev_star => {}
            '*' | '?' => out.push(c),
            '\\' => {
                let escaped = chars.next().ok_or("패턴이 '\\'로 끝납니다")?;
                push_literal(&mut out, escaped);
            }
            '[' => {
                let class = parse_class(&mut chars)?;
                push_class(&mut out, &class);
            }
            _ => out.push(c),
        }
        prev_star = c == '*';
    }

    Ok(out)
}

fn push_literal(out: &mut String, c: char) {
    if matches!(c, '*' | '?' | '[') {
        out.push('[');
        out.push(c);
        out.push(']');
    } else {
        out.push(c);
    }
}

/// 여는 `[` 다음부터 닫는 `]`까지 읽음
fn parse_class(chars: &mut Peekable<Chars<'_>>) -> std::result::Result<CharClass, String> {
    let negated = chars.next_if_eq(&'^').is_some();
    let mut ranges = Vec::new();

    loop {
        if !ranges.is_empty() && chars.next_if_eq(&']').is_some() {
            break;
        }
        let lo = class_char(chars)?;
        let hi = if chars.next_if_eq(&'-').is_some() {
            class_char(chars)?
        } else {
            lo
        };
        ranges.push((lo, hi));
    }

    Ok(CharClass { negated, ranges })
}

fn class_char(chars: &mut Peekable<Chars<'_>>) -> std::result::Result<char, String> {
    match chars.next() {
        None => Err("닫히지 않은 '['".to_string()),
        Some('-') | Some(']') => Err("문자 클래스 안에 이스케이프되지 않은 '-' 또는 ']'".to_string()),
        Some('\\') => chars.next().ok_or_else(|| "닫히지 않은 '['".to_string()),
        Some(c) => Ok(c),
    }
}

/// 클래스를 `glob` 문법으로 기록
///
/// `]`는 맨 앞, `-`는 맨 뒤, `!`는 맨 앞이 아닌 곳에 둡니다.
fn push_class(out: &mut String, class: &CharClass) {
    let mut specials = Vec::new();
    let mut others = Vec::new();

    for &(lo, hi) in &class.ranges {
        // 빈 범위는 아무것도 매칭하지 않음
        if lo > hi {
            continue;
        }
        let (mut lo, mut hi) = (lo, hi);
        if CLASS_SPECIAL.contains(&lo) {
            specials.push(lo);
            lo = next_char(lo);
        }
        if lo <= hi && lo != hi && CLASS_SPECIAL.contains(&hi) {
            specials.push(hi);
            hi = prev_char(hi);
        }
        if lo <= hi {
            others.push((lo, hi));
        }
    }

    let has = |c: char| specials.contains(&c);

    if others.is_empty() && !has(']') && !has('-') {
        match (class.negated, has('!')) {
            (false, true) => out.push('!'),
            (true, true) => out.push_str("[!!]"),
            (false, false) => out.push_str("[!\u{0}-\u{10FFFF}]"),
            (true, false) => out.push('?'),
        }
        return;
    }

    out.push('[');
    if class.negated {
        out.push('!');
    }
    if has(']') {
        out.push(']');
    }
    if !class.negated && others.is_empty() && !has(']') && has('!') {
        // 비부정 클래스는 '!'로 시작할 수 없음
        out.push_str("-!");
    } else {
        for (lo, hi) in others {
            out.push(lo);
            if lo != hi {
                out.push('-');
                out.push(hi);
            }
        }
        if has('!') {
            out.push('!');
        }
        if has('-') {
            out.push('-');
        }
    }
    out.push(']');
}

fn next_char(c: char) -> char {
    char::from_u32(c as u32 + 1).unwrap_or(c)
}

fn prev_char(c: char) -> char {
    char::from_u32(c as u32 - 1).unwrap_or(c)
}
