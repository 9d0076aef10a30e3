//! hugdl - HuggingFace 모델 다운로더
//!
//! 모델 저장소의 파일 목록을 tree API로 조회하고,
//! 각 파일을 순차적으로 로컬 디렉토리에 다운로드하는 라이브러리

pub mod hub;

// 핵심 타입들 재수출
pub use hub::{
    DownloadConfig, DownloadReport, HubError, HubFetcher, HubLister, ModelDownloader, ModelFile,
};

#[cfg(test)]
mod tests;
