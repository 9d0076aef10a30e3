use crate::hub::{HubError, HubFetcher, ModelFile};
use crate::tests::mock_hub::{mock_config, start_mock_hub};

#[tokio::test]
async fn 파일을_받아서_디스크에_기록() {
    let body = "0123456789";
    let addr = start_mock_hub(
        None,
        vec![("config.json".to_string(), body.to_string())],
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let config = mock_config("org/model", dir.path(), addr);
    let fetcher = HubFetcher::new(config).unwrap();

    let file = ModelFile {
        name: "config.json".to_string(),
        path: "config.json".to_string(),
        size: 10,
    };
    let written = fetcher.fetch_file(&file, dir.path()).await.unwrap();

    assert_eq!(written, 10);
    let saved = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert_eq!(saved, body);
}

#[tokio::test]
async fn 하위_디렉토리_경로도_평탄하게_저장() {
    let addr = start_mock_hub(
        None,
        vec![("tokenizer/vocab.json".to_string(), "{}".to_string())],
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let config = mock_config("org/model", dir.path(), addr);
    let fetcher = HubFetcher::new(config).unwrap();

    let file = ModelFile {
        name: "vocab.json".to_string(),
        path: "tokenizer/vocab.json".to_string(),
        size: 2,
    };
    let written = fetcher.fetch_file(&file, dir.path()).await.unwrap();

    assert_eq!(written, 2);
    // tokenizer/ 하위 구조 없이 파일 이름만으로 저장된다
    assert!(dir.path().join("vocab.json").exists());
    assert!(!dir.path().join("tokenizer").exists());
}

#[tokio::test]
async fn 다운로드_404는_remote_오류() {
    let addr = start_mock_hub(None, vec![]).await;

    let dir = tempfile::tempdir().unwrap();
    let config = mock_config("org/model", dir.path(), addr);
    let fetcher = HubFetcher::new(config).unwrap();

    let file = ModelFile {
        name: "missing.bin".to_string(),
        path: "missing.bin".to_string(),
        size: 0,
    };
    let err = fetcher.fetch_file(&file, dir.path()).await.unwrap_err();

    match err {
        HubError::Remote { status, endpoint } => {
            assert_eq!(status, 404);
            assert!(endpoint.ends_with("/org/model/resolve/main/missing.bin"));
        }
        other => panic!("Remote 오류가 아님: {:?}", other),
    }
}
