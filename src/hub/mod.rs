/// 🤗 HuggingFace Hub 다운로드 모듈
pub mod config;
pub mod downloader;
pub mod error;
pub mod fetcher;
pub mod lister;

pub use config::*;
pub use downloader::*;
pub use error::*;
pub use fetcher::*;
pub use lister::*;
