use anyhow::Result;
use clap::{Arg, Command};
use hugdl::hub::{DownloadConfig, ModelDownloader};
use std::process;

#[tokio::main]
async fn main() {
    env_logger::init();

    let matches = Command::new("hugdl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("🚀 hugdl - HuggingFace 모델 다운로더")
        .after_help(
            "Examples:\n  \
             hugdl --model Qwen/Qwen2.5-Coder-0.5B\n  \
             hugdl --model microsoft/DialoGPT-medium\n  \
             hugdl --model meta-llama/Llama-2-7b-chat-hf --output ./my-models",
        )
        .arg(
            Arg::new("model")
                .long("model")
                .short('m')
                .value_name("MODEL_ID")
                .help("HuggingFace 모델 ID (예: Qwen/Qwen2.5-Coder-0.5B)")
                .default_value("Qwen/Qwen2.5-Coder-0.5B"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("DIR")
                .help("다운로드 출력 디렉토리")
                .default_value("./models"),
        )
        .get_matches();

    let model_id = matches.get_one::<String>("model").unwrap();
    let output_dir = matches.get_one::<String>("output").unwrap();

    if let Err(e) = run(model_id, output_dir).await {
        eprintln!("❌ 오류: {}", e);
        process::exit(1);
    }
}

async fn run(model_id: &str, output_dir: &str) -> Result<()> {
    println!("🚀 hugdl - HuggingFace Model Downloader");
    println!("{}", "=".repeat(50));

    let config = DownloadConfig::new(model_id, output_dir);
    println!("📦 Model: {}", config.model_id);
    println!("📁 Output: {}", config.model_dir().display());
    println!("{}", "=".repeat(50));

    let downloader = ModelDownloader::new(config)?;
    let report = downloader.run().await?;

    println!("{}", "=".repeat(50));
    println!(
        "🎉 Download complete! {}/{} files downloaded successfully",
        report.succeeded, report.total
    );
    println!("📁 Files saved to: {}", report.model_dir.display());

    Ok(())
}
