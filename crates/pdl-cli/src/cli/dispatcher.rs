use crate::cli::command_handlers::PersonHandler;
use crate::cli::main_types::{PersonArgs, QueryKind};
use crate::cli::prompt::Prompt;
use pdl_core::api::client::PdlClient;
use pdl_core::core::services::query_executor::QueryExecutor;
use pdl_core::error::{AppError, CliError};
use pdl_core::storage::config::Config;
use pdl_core::storage::output::ResultWriter;

pub struct Dispatcher {
    config: Config,
}

impl Dispatcher {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn create_executor(&self) -> Result<QueryExecutor<PdlClient>, AppError> {
        log::debug!("Creating PDL client for {}", self.config.base_url);
        let client =
            PdlClient::with_api_key(self.config.base_url.clone(), self.config.api_key.clone())?;
        Ok(QueryExecutor::new(
            client,
            ResultWriter::new(self.config.output_dir.clone()),
        ))
    }

    /// Resolves the intended query from args or a prompt.
    pub fn resolve_query(
        requested: Option<QueryKind>,
        prompt: &dyn Prompt,
    ) -> Result<QueryKind, AppError> {
        if let Some(query) = requested {
            return Ok(query);
        }

        let choices: Vec<&str> = QueryKind::ALL.iter().map(|q| q.as_str()).collect();
        let selected = prompt.select("Select a query to execute...", &choices)?;

        QueryKind::ALL.get(selected).copied().ok_or_else(|| {
            CliError::UnsupportedQuery {
                query: selected.to_string(),
            }
            .into()
        })
    }

    pub async fn dispatch(
        &self,
        requested: Option<QueryKind>,
        person: PersonArgs,
        prompt: &dyn Prompt,
    ) -> Result<(), AppError> {
        let query = Self::resolve_query(requested, prompt)?;
        log::info!("Executing \"{}\" query.", query.as_str());

        match query {
            QueryKind::Person => {
                let handler = PersonHandler::new();
                let executor = self.create_executor()?;
                handler.handle(person, &executor, prompt).await
            }
        }
    }
}
