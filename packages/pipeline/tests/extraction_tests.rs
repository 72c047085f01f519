mod common;

use common::{
    chat_response, graph_config, graph_ok, llm_config, sample_document, search_config, search_hits, SLUG,
};
use serde_json::json;
use topikhukum_pipeline::topics::AzureOpenAiClient;
use topikhukum_pipeline::{
    GraphClient, KeywordConfig, PipelineError, ProcessOptions, SearchClient, TopicExtractor, TopicRecord,
};
use wiremock::matchers::{body_partial_json, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COMPLETIONS_PATH: &str = "/openai/deployments/gpt-4o/chat/completions";

struct Services {
    search: MockServer,
    llm: MockServer,
    graph: MockServer,
}

impl Services {
    async fn start() -> Self {
        Self {
            search: MockServer::start().await,
            llm: MockServer::start().await,
            graph: MockServer::start().await,
        }
    }

    fn extractor(&self, keywords: KeywordConfig) -> TopicExtractor<AzureOpenAiClient> {
        let config = llm_config(&self.llm);
        let llm = AzureOpenAiClient::new(&config).expect("llm client");
        let search = SearchClient::new(search_config(&self.search)).expect("search client");
        let graph = GraphClient::new(&graph_config(&self.graph)).expect("graph client");
        TopicExtractor::new(search, llm, config, keywords).with_graph(graph)
    }

    async fn mount_document(&self, document: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path("/produk_hukum_new/_search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(search_hits(vec![document])))
            .mount(&self.search)
            .await;
    }

    async fn mount_topics(&self, answer: &str) {
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(chat_response(answer)))
            .mount(&self.llm)
            .await;
    }
}

#[tokio::test]
async fn test_extract_topics_builds_record() {
    let services = Services::start().await;
    services.mount_document(sample_document()).await;
    services.mount_topics("Perpajakan; Wajib Pajak.").await;

    let record = services
        .extractor(KeywordConfig::default())
        .extract_topics(SLUG)
        .await
        .expect("extraction should succeed");

    assert_eq!(
        record,
        TopicRecord {
            title: "Ketentuan Umum dan Tata Cara Perpajakan".into(),
            law_number: "Undang-Undang Nomor 6 Tahun 1983".into(),
            number: "6".into(),
            year: "1983".into(),
            status: "Tidak Berlaku".into(),
            keywords: vec![
                "bab i".into(),
                "ketentuan umum".into(),
                "bab ii".into(),
                "npwp".into(),
                "wp".into(),
                "npwp".into(),
            ],
            topics: vec!["perpajakan".into(), "wajib pajak".into()],
        }
    );
}

#[tokio::test]
async fn test_term_mode_uses_full_terms() {
    let services = Services::start().await;
    services.mount_document(sample_document()).await;
    services.mount_topics("perpajakan").await;

    let keywords = KeywordConfig::default().with_term_mode(topikhukum_extractor::TermMode::Term);
    let record = services
        .extractor(keywords)
        .extract_topics(SLUG)
        .await
        .expect("extraction should succeed");

    assert_eq!(
        &record.keywords[4..],
        &["wajib pajak", "nomor pokok wajib pajak", "pajak"]
    );
}

#[tokio::test]
async fn test_process_writes_all_sinks() {
    let services = Services::start().await;
    services.mount_document(sample_document()).await;
    services.mount_topics("Perpajakan; Wajib Pajak.").await;

    Mock::given(method("HEAD"))
        .and(path("/produk_hukum_topik"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&services.search)
        .await;
    Mock::given(method("PUT"))
        .and(path(format!("/produk_hukum_topik/_doc/{SLUG}")))
        .and(body_partial_json(json!({
            "Nomor": "Undang-Undang Nomor 6 Tahun 1983",
            "Topik": ["perpajakan", "wajib pajak"]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "result": "created" })))
        .expect(1)
        .mount(&services.search)
        .await;
    Mock::given(method("POST"))
        .and(path("/db/neo4j/tx/commit"))
        .and(body_string_contains("Peraturan:TidakBerlaku"))
        .respond_with(ResponseTemplate::new(200).set_body_json(graph_ok()))
        .expect(1)
        .mount(&services.graph)
        .await;

    let output = tempfile::TempDir::new().expect("temp dir");
    let options = ProcessOptions {
        index: true,
        graph: true,
        output_dir: Some(output.path().to_path_buf()),
    };

    services
        .extractor(KeywordConfig::default())
        .process(SLUG, &options)
        .await
        .expect("processing should succeed");

    let written = std::fs::read_to_string(output.path().join(format!("{SLUG}_topics.json")))
        .expect("output file");
    let saved: TopicRecord = serde_json::from_str(&written).expect("valid record");
    assert_eq!(saved.topics, vec!["perpajakan", "wajib pajak"]);
}

#[tokio::test]
async fn test_missing_considerant_fails() {
    let services = Services::start().await;
    let mut document = sample_document();
    document["Blocks"]
        .as_array_mut()
        .expect("blocks array")
        .remove(0);
    services.mount_document(document).await;

    let err = services
        .extractor(KeywordConfig::default())
        .extract_topics(SLUG)
        .await
        .expect_err("should be an error");
    assert!(matches!(err, PipelineError::MissingSection { .. }), "unexpected error: {err}");
}

#[tokio::test]
async fn test_batch_skips_failures() {
    let services = Services::start().await;

    Mock::given(method("POST"))
        .and(path("/produk_hukum_new/_search"))
        .and(body_partial_json(json!({ "query": { "match": { "Slug": "missing" } } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_hits(vec![])))
        .mount(&services.search)
        .await;
    services.mount_document(sample_document()).await;
    services.mount_topics("perpajakan").await;

    let options = ProcessOptions {
        index: false,
        graph: false,
        output_dir: None,
    };
    let summary = services
        .extractor(KeywordConfig::default())
        .process_batch(&["missing".to_string(), SLUG.to_string()], &options)
        .await;

    assert_eq!(summary.succeeded, vec![SLUG]);
    assert_eq!(summary.failed.len(), 1);
    assert_eq!(summary.failed[0].0, "missing");
    assert!(summary.failed[0].1.contains("document not found"));
    assert!(!summary.all_failed());
}
