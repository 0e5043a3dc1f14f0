//! 파일 병합 모듈
//!
//! 정렬된 파일 목록을 하나의 출력 파일로 스트리밍 병합합니다.
//!
//! 파일 하나당 출력 블록:
//!
//! ```text
//! [구분자 (첫 파일 제외)][접두사][경로]\n[파일 내용]\n
//! ```

use same_file::Handle;
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::debug_log::{sink_for, DebugSink};
use crate::error::{CoraError, Result, WritePhase};

/// 읽기/쓰기 버퍼 크기
pub const BUFFER_SIZE: usize = 64 * 1024; // 64KB

/// 병합 결과 요약
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcatSummary {
    /// 병합된 파일 수
    pub files: usize,
    /// 입력 파일에서 읽은 바이트
    pub bytes_read: u64,
    /// 출력 파일에 쓴 바이트 (헤더/구분자 포함)
    pub bytes_written: u64,
}

/// 스트리밍 파일 병합기
pub struct Concatenator<'a> {
    output: PathBuf,
    separator: Vec<u8>,
    path_prefix: Vec<u8>,
    debug: &'a dyn DebugSink,
}

impl<'a> Concatenator<'a> {
    /// 새 병합기 생성
    pub fn new(output: impl Into<PathBuf>, separator: &str, path_prefix: &str) -> Self {
        Self {
            output: output.into(),
            separator: separator.as_bytes().to_vec(),
            path_prefix: path_prefix.as_bytes().to_vec(),
            debug: sink_for(false),
        }
    }

    /// 설정에서 병합기 생성
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.output, &config.separator, &config.path_prefix)
    }

    /// 디버그 로그 수신자 설정
    pub fn with_debug_sink(mut self, debug: &'a dyn DebugSink) -> Self {
        self.debug = debug;
        self
    }

    /// 파일 목록을 출력 파일 하나로 병합
    ///
    /// # Arguments
    /// * `paths` - 병합할 파일 경로 (주어진 순서 그대로, 경로 문자열도 그대로 헤더에 기록)
    ///
    /// # Returns
    /// 병합 요약 또는 첫 번째 에러 (이미 쓴 출력은 되돌리지 않음)
    pub fn concatenate<I, P>(&self, paths: I) -> Result<ConcatSummary>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.concatenate_with_progress(paths, |_| {})
    }

    /// 입력 경로 하나를 처리할 때마다 `on_file`을 호출하며 병합
    ///
    /// 출력 파일 자신이 목록에 있으면 (이전 실행 결과가 소스 폴더 안에 있는 경우)
    /// 그 경로는 건너뜁니다.
    pub fn concatenate_with_progress<I, P, F>(&self, paths: I, mut on_file: F) -> Result<ConcatSummary>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
        F: FnMut(&Path),
    {
        let (mut writer, output_handle) = self.create_output()?;
        let mut buffer = vec![0u8; BUFFER_SIZE];
        let mut summary = ConcatSummary::default();

        for path in paths {
            let path = path.as_ref();

            if Handle::from_path(path).is_ok_and(|h| h == output_handle) {
                self.debug
                    .record(&format!("건너뜀 (출력 파일과 동일): {}", path.display()));
                on_file(path);
                continue;
            }

            if summary.files > 0 {
                self.write(&mut writer, &self.separator, WritePhase::Separator, path)?;
                summary.bytes_written += self.separator.len() as u64;
            }

            summary.bytes_written += self.write_header(&mut writer, path)?;

            let copied = self.append_content(&mut writer, path, &mut buffer)?;
            summary.bytes_read += copied;
            summary.bytes_written += copied;

            self.write(&mut writer, b"\n", WritePhase::TrailingNewline, path)?;
            summary.bytes_written += 1;
            summary.files += 1;

            self.debug.record(&format!("병합: {}", path.display()));
            on_file(path);
        }

        writer.flush().map_err(|e| CoraError::Write {
            phase: WritePhase::Flush,
            path: self.output.clone(),
            source: e,
        })?;

        Ok(summary)
    }

    /// 출력 폴더 및 파일 생성 (기존 파일은 비움)
    ///
    /// 입력과 비교할 출력 파일의 식별 핸들도 함께 반환합니다.
    fn create_output(&self) -> Result<(BufWriter<File>, Handle)> {
        if let Some(parent) = self.output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| CoraError::CreateOutputDir {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let create_error = |e| CoraError::CreateOutput {
            path: self.output.clone(),
            source: e,
        };
        let file = File::create(&self.output).map_err(create_error)?;
        let handle = file
            .try_clone()
            .and_then(Handle::from_file)
            .map_err(create_error)?;

        Ok((BufWriter::with_capacity(BUFFER_SIZE, file), handle))
    }

    /// `접두사 + 경로 + \n` 헤더 기록
    fn write_header(&self, writer: &mut BufWriter<File>, path: &Path) -> Result<u64> {
        let path_bytes = path.as_os_str().as_encoded_bytes();

        self.write(writer, &self.path_prefix, WritePhase::Header, path)?;
        self.write(writer, path_bytes, WritePhase::Header, path)?;
        self.write(writer, b"\n", WritePhase::Header, path)?;

        Ok((self.path_prefix.len() + path_bytes.len() + 1) as u64)
    }

    /// 파일 내용을 고정 크기 버퍼로 복사
    fn append_content(
        &self,
        writer: &mut BufWriter<File>,
        path: &Path,
        buffer: &mut [u8],
    ) -> Result<u64> {
        let mut input = File::open(path).map_err(|e| CoraError::OpenInput {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut copied = 0u64;
        loop {
            let n = match input.read(buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    return Err(CoraError::ReadInput {
                        path: path.to_path_buf(),
                        source: e,
                    })
                }
            };
            self.write(writer, &buffer[..n], WritePhase::Content, path)?;
            copied += n as u64;
        }

        Ok(copied)
    }

    fn write(
        &self,
        writer: &mut BufWriter<File>,
        bytes: &[u8],
        phase: WritePhase,
        path: &Path,
    ) -> Result<()> {
        writer.write_all(bytes).map_err(|e| CoraError::Write {
            phase,
            path: path.to_path_buf(),
            source: e,
        })
    }
}
