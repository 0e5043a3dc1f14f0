//! cora - CONCATENATE FILES
//!
//! 메인 엔트리포인트

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

use cora::{
    cli::Args,
    concatenator::Concatenator,
    config::Config,
    debug_log::sink_for,
    stats::Statistics,
    walker::Walker,
};

fn main() -> Result<()> {
    let args = Args::parse();

    init_logger(args.debug);

    // 필수 인자 확인 (파일 시스템 접근 전)
    let config = args.to_config();
    config.validate()?;

    if !args.quiet {
        print_header(&config, args.dry_run);
    }

    // 대상 파일 수집
    let sink = sink_for(config.debug);
    let walker = Walker::from_config(&config)?.with_debug_sink(sink);
    let files = walker.walk().context("폴더 탐색 실패")?;

    if args.dry_run {
        print_dry_run(&files);
        return Ok(());
    }

    if !args.quiet {
        println!(
            "  {} 선택된 파일 수: {}",
            "📋".bright_white(),
            files.len().to_string().bright_green()
        );
    }

    let mut stats = Statistics::new(files.len());
    let pb = if args.quiet {
        ProgressBar::hidden()
    } else {
        create_progress_bar(files.len())
    };

    let concatenator = Concatenator::from_config(&config).with_debug_sink(sink);
    let summary = concatenator
        .concatenate_with_progress(files, |_| pb.inc(1))
        .context("파일 병합 실패")?;

    pb.finish_with_message("완료!");
    stats.record(&summary);

    if !args.quiet {
        stats.print_summary();
        println!("\n{} 저장 완료: {:?}\n", "✅".bright_green(), config.output);
    }

    Ok(())
}

/// 로거 초기화 (`--debug`이면 debug 레벨, 아니면 RUST_LOG 또는 warn)
fn init_logger(debug: bool) {
    let env = env_logger::Env::default().default_filter_or(if debug { "debug" } else { "warn" });
    let mut builder = env_logger::Builder::from_env(env);
    if debug {
        builder.filter_module("cora", log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

/// 헤더 출력
fn print_header(config: &Config, dry_run: bool) {
    println!("\n{}", "═".repeat(50).bright_blue());
    println!("{}", " 📚 CONCATENATE FILES".bright_white().bold());
    println!("{}", "═".repeat(50).bright_blue());
    println!("  {} 소스 폴더: {:?}", "📂".bright_cyan(), config.source);
    println!("  {} 출력 파일: {:?}", "📄".bright_green(), config.output);

    if !config.exclude.is_empty() {
        println!(
            "  {} 제외 패턴: {}",
            "🚫".bright_red(),
            config.exclude.join(", ")
        );
    }

    if !config.include.is_empty() {
        println!(
            "  {} 포함 패턴: {}",
            "🔍".bright_magenta(),
            config.include.join(", ")
        );
    }

    if let Some(depth) = config.max_depth {
        println!("  {} 최대 깊이: {}", "📏".bright_white(), depth);
    }

    if dry_run {
        println!(
            "  {} {}",
            "⚠️".bright_yellow(),
            "드라이런 모드 (실제 병합 없음)".yellow()
        );
    }

    println!("{}", "═".repeat(50).bright_blue());
    println!("\n{}", "📁 파일 검색 중...".bright_cyan());
}

/// 드라이런 출력
fn print_dry_run(files: &[PathBuf]) {
    println!("\n{}", "📋 병합 예정 파일 목록:".bright_cyan());
    for (i, path) in files.iter().enumerate() {
        println!("  {}. {}", i + 1, path.display());
    }
    println!(
        "\n{} 총 {} 개의 파일이 병합될 예정입니다.",
        "ℹ️".bright_blue(),
        files.len().to_string().bright_green()
    );
}

/// 진행률 바 생성
fn create_progress_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░");
    pb.set_style(style);
    pb
}
