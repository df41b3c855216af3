#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use linkhandler::application::services::{AuthService, LinkResolutionService};
use linkhandler::domain::entities::RecordSummary;
use linkhandler::domain::localization::IdentityLocalizer;
use linkhandler::domain::repositories::RecordRepository;
use linkhandler::domain::tabs::TabRegistry;
use linkhandler::error::AppError;
use linkhandler::state::AppState;

/// Plaintext token accepted by the test state.
pub const TEST_TOKEN: &str = "test-token";

/// Tab configuration shared by the handler tests.
pub const REGISTRY_JSON: &str = r#"{
    "tabs": [
        { "anchor_type": "page", "label": "Page", "allowed_tables": ["pages"] },
        {
            "anchor_type": "file",
            "label": "File",
            "allowed_tables": ["sys_file"],
            "enable_search_box": false
        },
        {
            "anchor_type": "news",
            "label": "News",
            "allowed_tables": ["tx_news_domain_model_news"]
        }
    ],
    "tables": {
        "pages": { "title_column": "title", "label": "Page" },
        "tx_news_domain_model_news": { "title_column": "header", "label": "News article" }
    }
}"#;

/// In-memory record repository for handler tests.
///
/// Mock generation is only compiled into the library's own unit tests, so
/// integration tests carry this hand-written stub instead.
pub struct StubRecordRepository {
    records: HashMap<(String, i64), RecordSummary>,
    healthy: bool,
}

impl StubRecordRepository {
    pub fn empty() -> Self {
        Self {
            records: HashMap::new(),
            healthy: true,
        }
    }

    pub fn with_records(records: Vec<RecordSummary>) -> Self {
        let records = records
            .into_iter()
            .map(|record| ((record.table.clone(), record.uid), record))
            .collect();

        Self {
            records,
            healthy: true,
        }
    }

    pub fn unhealthy() -> Self {
        Self {
            records: HashMap::new(),
            healthy: false,
        }
    }
}

#[async_trait]
impl RecordRepository for StubRecordRepository {
    async fn get_record(&self, table: &str, uid: i64) -> Result<Option<RecordSummary>, AppError> {
        Ok(self.records.get(&(table.to_string(), uid)).cloned())
    }

    async fn health_check(&self) -> bool {
        self.healthy
    }
}

/// Builds an [`AppState`] over the shared tab configuration and the given
/// record repository.
pub fn create_test_state(repository: Arc<dyn RecordRepository>) -> AppState {
    let tabs = Arc::new(TabRegistry::from_json(REGISTRY_JSON).unwrap());

    let link_service = Arc::new(LinkResolutionService::new(
        tabs.clone(),
        repository.clone(),
        Arc::new(IdentityLocalizer),
    ));
    let auth_service = Arc::new(AuthService::new(AuthService::hash_token(TEST_TOKEN)));

    AppState {
        link_service,
        auth_service,
        tabs,
        record_repository: repository,
    }
}

/// Sample records matching [`REGISTRY_JSON`].
pub fn sample_records() -> Vec<RecordSummary> {
    vec![
        RecordSummary::new("pages".to_string(), 17, Some("Welcome".to_string()), Some(1)),
        RecordSummary::new(
            "tx_news_domain_model_news".to_string(),
            42,
            Some("Release notes".to_string()),
            Some(5),
        ),
        RecordSummary::new("pages".to_string(), 23, None, Some(1)),
    ]
}
