//! 통합 테스트 모듈
//!
//! 탐색부터 병합까지 cora의 전체 흐름을 테스트합니다.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// 테스트용 파일 생성 헬퍼 (중간 폴더 포함)
fn create_file(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

/// 기본 테스트 디렉토리 구조 생성
fn setup_test_directory() -> TempDir {
    let temp_dir = TempDir::new().unwrap();

    create_file(temp_dir.path(), "file1.txt", "test");
    create_file(temp_dir.path(), "file2.txt", "test");
    create_file(temp_dir.path(), "file3.txt", "test");
    create_file(temp_dir.path(), "ignoreme/ignoreme.txt", "test");

    temp_dir
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn base_names(files: &[PathBuf]) -> Vec<String> {
    files
        .iter()
        .map(|f| f.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

mod walker_tests {
    use super::*;
    use cora::Walker;

    fn walk(root: &Path, exclude: &[&str], include: &[&str]) -> Vec<String> {
        let walker = Walker::new(root, &strings(exclude), &strings(include)).unwrap();
        base_names(&walker.walk().unwrap())
    }

    #[test]
    fn test_no_patterns() {
        let temp_dir = setup_test_directory();
        assert_eq!(
            walk(temp_dir.path(), &[], &[]),
            vec!["file1.txt", "file2.txt", "file3.txt", "ignoreme.txt"]
        );
    }

    #[test]
    fn test_exclude_one_dir() {
        let temp_dir = setup_test_directory();
        assert_eq!(
            walk(temp_dir.path(), &["ignoreme"], &[]),
            vec!["file1.txt", "file2.txt", "file3.txt"]
        );
    }

    #[test]
    fn test_include_specific_files() {
        let temp_dir = setup_test_directory();
        assert_eq!(
            walk(temp_dir.path(), &[], &["file1.txt", "file3.txt"]),
            vec!["file1.txt", "file3.txt"]
        );
    }

    #[test]
    fn test_include_and_exclude() {
        let temp_dir = setup_test_directory();
        assert_eq!(
            walk(temp_dir.path(), &["ignoreme"], &["file*.txt"]),
            vec!["file1.txt", "file2.txt", "file3.txt"]
        );
    }

    #[test]
    fn test_exclude_wins_over_include() {
        let temp_dir = setup_test_directory();
        assert_eq!(
            walk(temp_dir.path(), &["file2.txt"], &["file*.txt"]),
            vec!["file1.txt", "file3.txt"]
        );
    }

    #[test]
    fn test_walk_is_deterministic() {
        let temp_dir = setup_test_directory();
        create_file(temp_dir.path(), "b/z.txt", "z");
        create_file(temp_dir.path(), "a/y.txt", "y");

        let walker = Walker::new(temp_dir.path(), &[], &[]).unwrap();
        let first = walker.walk().unwrap();
        let second = walker.walk().unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_base_name_vs_full_path_patterns() {
        let temp_dir = TempDir::new().unwrap();
        create_file(temp_dir.path(), "top.txt", "");
        create_file(temp_dir.path(), "a/mid.txt", "");
        create_file(temp_dir.path(), "a/b/low.txt", "");

        assert_eq!(
            walk(temp_dir.path(), &[], &["*.txt"]),
            vec!["low.txt", "mid.txt", "top.txt"]
        );
        assert_eq!(walk(temp_dir.path(), &[], &["a/*.txt"]), vec!["mid.txt"]);
        // '**'는 한 구성요소만 매칭
        assert_eq!(walk(temp_dir.path(), &[], &["**/*.txt"]), vec!["mid.txt"]);
    }
}

mod concatenator_tests {
    use super::*;
    use cora::Concatenator;

    #[test]
    fn test_layout() {
        let temp_dir = TempDir::new().unwrap();
        create_file(temp_dir.path(), "file1.txt", "Content of file 1");
        create_file(temp_dir.path(), "file2.txt", "Content of file 2");
        let output = temp_dir.path().join("output.txt");

        let inputs = vec![
            temp_dir.path().join("file1.txt"),
            temp_dir.path().join("file2.txt"),
        ];
        Concatenator::new(&output, "\n---\n", "File: ")
            .concatenate(&inputs)
            .unwrap();

        let expected = format!(
            "File: {}\nContent of file 1\n\n---\nFile: {}\nContent of file 2\n",
            inputs[0].display(),
            inputs[1].display()
        );
        assert_eq!(fs::read_to_string(&output).unwrap(), expected);
    }

    #[test]
    fn test_empty_list() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out").join("empty.md");

        Concatenator::new(&output, "\n---\n", "## ")
            .concatenate(Vec::<PathBuf>::new())
            .unwrap();

        assert_eq!(fs::metadata(&output).unwrap().len(), 0);
    }

    #[test]
    fn test_large_files_streaming() {
        let temp_dir = TempDir::new().unwrap();
        let content = vec![b'a'; 1024 * 1024];
        let inputs: Vec<PathBuf> = (0..100)
            .map(|i| {
                let path = temp_dir.path().join(format!("file{}.txt", i));
                fs::write(&path, &content).unwrap();
                path
            })
            .collect();
        let output = temp_dir.path().join("output.txt");
        let prefix = "File: ";
        let separator = "\n";

        let summary = Concatenator::new(&output, separator, prefix)
            .concatenate(&inputs)
            .unwrap();

        let expected: u64 = inputs
            .iter()
            .map(|p| (content.len() + prefix.len() + p.as_os_str().len() + 2) as u64)
            .sum::<u64>()
            + (inputs.len() as u64 - 1) * separator.len() as u64;

        assert_eq!(fs::metadata(&output).unwrap().len(), expected);
        assert_eq!(summary.bytes_written, expected);
        assert_eq!(summary.bytes_read, 100 * 1024 * 1024);
        assert_eq!(summary.files, 100);
    }
}

mod pipeline_tests {
    use super::*;
    use cora::{Concatenator, Config, CoraError, Walker};

    #[test]
    fn test_walk_then_concatenate() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("src");
        create_file(&source, "a.rs", "fn a() {}");
        create_file(&source, "b.md", "# b");
        create_file(&source, "target/c.rs", "fn c() {}");
        create_file(&source, "z/d.rs", "fn d() {}");
        let output = temp_dir.path().join("out").join("context.md");

        let config = Config::new(&source, &output)
            .with_exclude(strings(&["target"]))
            .with_include(strings(&["*.rs"]));
        config.validate().unwrap();

        let files = Walker::from_config(&config).unwrap().walk().unwrap();
        Concatenator::from_config(&config).concatenate(files).unwrap();

        let expected = format!(
            "## {}\nfn a() {{}}\n\n---\n## {}\nfn d() {{}}\n",
            source.join("a.rs").display(),
            source.join("z").join("d.rs").display()
        );
        assert_eq!(fs::read_to_string(&output).unwrap(), expected);
    }

    #[test]
    fn test_rerun_with_output_inside_source() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("src");
        let big = "b".repeat(200 * 1024);
        create_file(&source, "big.txt", &big);
        let output = source.join("out.md");
        let config = Config::new(&source, &output);

        // 두 번째 실행에서는 첫 실행의 out.md가 탐색 결과에 포함됨
        for _ in 0..2 {
            let files = Walker::from_config(&config).unwrap().walk().unwrap();
            Concatenator::from_config(&config).concatenate(files).unwrap();
        }

        let expected = format!("## {}\n{}\n", source.join("big.txt").display(), big);
        assert_eq!(fs::read_to_string(&output).unwrap(), expected);
    }

    #[test]
    fn test_invalid_pattern_is_reported_before_walking() {
        let config = Config::new("/nonexistent", "out.md").with_include(strings(&["[bad"]));
        assert!(matches!(
            Walker::from_config(&config),
            Err(CoraError::InvalidPattern { .. })
        ));
    }
}

mod error_tests {
    use cora::error::{CoraError, WritePhase};
    use std::path::PathBuf;

    #[test]
    fn test_error_display_contains_path() {
        let error = CoraError::OpenInput {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let msg = error.to_string();
        assert!(msg.contains("파일을 열 수 없습니다"));
        assert!(msg.contains("missing.txt"));
    }

    #[test]
    fn test_write_error_names_phase() {
        let error = CoraError::Write {
            phase: WritePhase::Separator,
            path: PathBuf::from("b.txt"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        };
        assert!(error.to_string().starts_with("구분자 쓰기 실패"));
    }
}

mod cli_tests {
    use clap::Parser;
    use cora::cli::Args;
    use cora::CoraError;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["cora", "-s", "src", "-o", "out.md"]);
        let config = args.to_config();

        assert_eq!(config.separator, "\n---\n");
        assert_eq!(config.path_prefix, "## ");
        assert!(config.exclude.is_empty());
        assert!(!config.debug);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_repeated_and_comma_separated_patterns() {
        let args = Args::parse_from([
            "cora", "-s", ".", "-o", "o.md", "-e", "target,.git", "-e", "node_modules", "-i",
            "*.rs",
        ]);
        let config = args.to_config();

        assert_eq!(config.exclude, vec!["target", ".git", "node_modules"]);
        assert_eq!(config.include, vec!["*.rs"]);
    }

    #[test]
    fn test_missing_source_is_config_error() {
        let args = Args::parse_from(["cora", "-o", "out.md"]);
        assert!(matches!(
            args.to_config().validate(),
            Err(CoraError::MissingSource)
        ));
    }

    #[test]
    fn test_missing_output_is_config_error() {
        let args = Args::parse_from(["cora", "-s", "src"]);
        assert!(matches!(
            args.to_config().validate(),
            Err(CoraError::MissingOutput)
        ));
    }
}
