//! Application state shared across handlers

use crate::config::Settings;
use crate::conversation::History;
use crate::llm::{ChatCompletionModel, LanguageModel};
use crate::network::HttpClient;
use crate::pipeline::Orchestrator;
use crate::sql::SqliteDatabase;
use crate::translate::{GoogleTranslator, Translator};
use std::sync::Arc;
use tracing::info;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Conversation shown to every visitor
    pub history: History,
    /// Question pipeline
    pub orchestrator: Arc<Orchestrator>,
    /// Template renderer
    pub templates: Arc<super::Templates>,
}

impl AppState {
    /// Create application state backed by the configured services
    pub fn new(settings: Settings, client: HttpClient) -> anyhow::Result<Self> {
        let translator = Arc::new(GoogleTranslator::new(client.clone(), &settings.translator));
        let llm = Arc::new(ChatCompletionModel::new(client, &settings.llm));
        let db = Arc::new(SqliteDatabase::open(&settings.database)?);
        info!(
            "Using {} translation and model {}",
            translator.name(),
            llm.name()
        );
        let orchestrator = Orchestrator::new(translator, llm, db, settings.database.top_k)
            .with_max_value_chars(settings.database.result_value_chars);

        Self::with_orchestrator(settings, orchestrator)
    }

    /// Create application state around an existing pipeline
    pub fn with_orchestrator(settings: Settings, orchestrator: Orchestrator) -> anyhow::Result<Self> {
        Ok(Self {
            settings: Arc::new(settings),
            history: History::new(),
            orchestrator: Arc::new(orchestrator),
            templates: Arc::new(super::Templates::new()?),
        })
    }

    /// Get instance name
    pub fn instance_name(&self) -> &str {
        &self.settings.general.instance_name
    }
}
