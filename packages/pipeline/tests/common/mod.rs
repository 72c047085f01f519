#![allow(dead_code)]

use serde_json::{json, Value};
use url::Url;
use wiremock::MockServer;

use topikhukum_pipeline::config::{GraphConfig, SearchConfig};
use topikhukum_pipeline::topics::LlmConfig;

pub const SLUG: &str = "uu-no-6-tahun-1983";

pub fn server_url(server: &MockServer) -> Url {
    Url::parse(&server.uri()).expect("mock server uri")
}

pub fn search_config(server: &MockServer) -> SearchConfig {
    SearchConfig::new(server_url(server)).with_credentials("admin", "admin")
}

pub fn llm_config(server: &MockServer) -> LlmConfig {
    LlmConfig::builder(server_url(server), "test-key").build()
}

pub fn graph_config(server: &MockServer) -> GraphConfig {
    GraphConfig::new(server_url(server), "neo4j", "secret")
}

pub fn sample_document() -> Value {
    json!({
        "Slug": SLUG,
        "Judul": "Ketentuan Umum dan Tata Cara Perpajakan",
        "Nomor": "Undang-Undang Nomor 6 Tahun 1983",
        "No": 6,
        "Tahun": 1983,
        "Status": "Tidak Berlaku",
        "Bentuk": "Undang-Undang",
        "Blocks": [
            {
                "Type": "KONSIDERAN",
                "Ref": "menimbang",
                "Content": "bahwa pelaksanaan pemungutan pajak perlu diatur dengan undang-undang;"
            },
            {
                "Type": "CONTENT_PASAL",
                "Ref": "pasal-1",
                "Pasal": "pasal-1",
                "Context": "BAB I - KETENTUAN UMUM",
                "Content": "Dalam Undang-undang ini yang dimaksud dengan: \
                            1. Wajib Pajak yang selanjutnya disebut WP adalah orang pribadi atau badan. \
                            2. Nomor Pokok Wajib Pajak yang selanjutnya disingkat NPWP merupakan nomor identitas. \
                            3. Pajak adalah kontribusi wajib kepada negara."
            },
            {
                "Type": "CONTENT_PASAL",
                "Ref": "pasal-2",
                "Pasal": "pasal-2",
                "Context": "BAB II - NPWP",
                "Content": "Setiap Wajib Pajak wajib mendaftarkan diri."
            }
        ]
    })
}

pub fn search_hits(documents: Vec<Value>) -> Value {
    let hits: Vec<Value> = documents
        .into_iter()
        .map(|doc| json!({ "_index": "produk_hukum_new", "_source": doc }))
        .collect();
    json!({ "hits": { "total": { "value": hits.len() }, "hits": hits } })
}

pub fn chat_response(content: &str) -> Value {
    json!({
        "choices": [{ "index": 0, "message": { "role": "assistant", "content": content } }],
        "usage": { "prompt_tokens": 120, "completion_tokens": 20 }
    })
}

pub fn graph_ok() -> Value {
    json!({ "results": [], "errors": [] })
}
