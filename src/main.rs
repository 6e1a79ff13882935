//! kospeak - TTS용 한국어 텍스트 정규화 CLI
//!
//! 사용법: `kospeak [--no-symbols] [TEXT...]`
//! 텍스트를 주지 않으면 표준 입력을 한 줄씩 정규화합니다.

use kospeak::config::load_config;
use kospeak::NormalizerContext;
use std::io::{self, BufRead, Write};

fn print_usage() {
    println!("사용법: kospeak [--no-symbols] [TEXT...]");
    println!();
    println!("  --no-symbols   기호를 읽지 않고 그대로 둠");
    println!("  -h, --help     도움말");
    println!();
    println!("TEXT가 없으면 표준 입력을 한 줄씩 처리합니다.");
    println!("설정 파일: $KOSPEAK_CONFIG 또는 ~/.config/kospeak/config.json");
}

fn main() {
    // 로깅 초기화 (error/warn만 출력, RUST_LOG로 조정)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = load_config();
    let mut normalize_symbols = config.normalize_symbols;
    let mut words: Vec<String> = Vec::new();

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--no-symbols" => normalize_symbols = false,
            "-h" | "--help" => {
                print_usage();
                return;
            }
            _ => words.push(arg),
        }
    }

    // 컨텍스트는 시작 시 한 번만 생성
    let ctx = match NormalizerContext::from_config(&config) {
        Ok(ctx) => ctx,
        Err(e) => {
            log::error!("초기화 실패: {}", e);
            eprintln!("kospeak 초기화 실패: {}", e);
            std::process::exit(1);
        }
    };

    if !words.is_empty() {
        println!("{}", ctx.normalize(&words.join(" "), normalize_symbols));
        return;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("입력 읽기 실패: {}", e);
                std::process::exit(1);
            }
        };
        if writeln!(out, "{}", ctx.normalize(&line, normalize_symbols)).is_err() {
            // 파이프가 닫힘
            break;
        }
    }
}
