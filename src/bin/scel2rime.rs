use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::*;

use scel2rime::builder::{convert_batch, BatchConfig, BatchEntry};
use scel2rime::readers::ScelReader;
use scel2rime::utils::ProgressState;
use scel2rime::{Result, ScelError};

/// Convert Sogou cell dictionaries (.scel) into Rime dictionaries
#[derive(Parser, Debug)]
#[command(name = "scel2rime")]
#[command(version)]
#[command(about = "Convert Sogou cell dictionaries into Rime dictionaries", long_about = None)]
struct Cli {
    /// A .scel file, a directory of .scel files, or a JSON entry list
    input: PathBuf,

    /// Output directory for .txt and .dict.yaml files
    #[arg(short = 'o', long = "out", default_value = "out")]
    out: String,

    /// Directory holding the .scel files named by a JSON entry list
    #[arg(long = "scel-dir", default_value = "scel")]
    scel_dir: String,

    /// Rime namespace of the generated dictionaries
    #[arg(long = "namespace", default_value = "luna_pinyin")]
    namespace: String,

    /// Version stamp written to the manifest (default: today, YYYY.MM.DD)
    #[arg(long = "version-date")]
    version_date: Option<String>,

    /// Print metadata of a single .scel file and exit
    #[arg(long = "info")]
    info: bool,
}

fn print_progress(state: &mut ProgressState) -> bool {
    println!("[{}/{}] {}", state.current + 1, state.total, state.item);
    println!("{}", "-".repeat(80));
    false
}

fn file_stem(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .ok_or_else(|| ScelError::invalid_parameter(format!("Invalid file name: {}", path.display())))
}

fn build_config(cli: &Cli) -> Result<BatchConfig> {
    let input = &cli.input;
    let mut config = if input.is_dir() {
        BatchConfig::from_scel_dir(input)?
    } else if input.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
        BatchConfig {
            scel_dir: cli.scel_dir.clone(),
            entries: BatchConfig::load_entries(input)?,
            ..Default::default()
        }
    } else if input.is_file() {
        let name = file_stem(input)?;
        let scel_dir = input.parent().map(|p| p.to_string_lossy().into_owned()).unwrap_or_default();
        BatchConfig {
            scel_dir: if scel_dir.is_empty() { ".".to_string() } else { scel_dir },
            entries: vec![BatchEntry { name: name.clone(), dict_name: name, url: None }],
            ..Default::default()
        }
    } else {
        return Err(ScelError::invalid_parameter(format!("Input not found: {}", input.display())));
    };
    config.out_dir = cli.out.clone();
    config.namespace = cli.namespace.clone();
    config.version_date = cli.version_date.clone();
    Ok(config)
}

fn print_info(path: &Path) -> Result<()> {
    let dict = ScelReader::decode_file(path)?;
    println!("{}", serde_json::to_string_pretty(&dict.meta)?);
    println!("Format: {:?} (mask {:#04x})", dict.variant, dict.variant.mask());
    println!("Pinyin entries: {}", dict.pinyin_count);
    println!("Words: {}", dict.records.len());
    if let Some(reason) = &dict.stop_reason {
        println!("Stopped early: {}", reason);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if cli.info {
        return match print_info(&cli.input) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("{}: {}", cli.input.display(), e);
                ExitCode::FAILURE
            }
        };
    }

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    if config.entries.is_empty() {
        warn!("No dictionaries to convert in {}", cli.input.display());
        return ExitCode::SUCCESS;
    }

    let report = convert_batch(&config, Some(print_progress));
    info!(
        "Converted {} of {} dictionaries ({} partial, {} failed)",
        report.converted.len(),
        config.entries.len(),
        report.partial(),
        report.failures.len()
    );
    if report.converted.is_empty() && !report.failures.is_empty() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
