use crate::cli::main_types::PersonArgs;
use crate::cli::prompt::Prompt;
use pdl_core::api::client::SearchBackend;
use pdl_core::core::network::SocialNetwork;
use pdl_core::core::person_query::PersonQuery;
use pdl_core::core::services::query_executor::QueryExecutor;
use pdl_core::error::AppError;

const NO_NETWORK: &str = "none";

#[derive(Default)]
pub struct PersonHandler;

impl PersonHandler {
    pub fn new() -> Self {
        Self
    }

    /// Executes a "person" query against PDL.
    ///
    /// Any number of networks can be given as flags. Without flags the user
    /// is prompted for at most one network and an optional email.
    pub async fn handle<B: SearchBackend>(
        &self,
        args: PersonArgs,
        executor: &QueryExecutor<B>,
        prompt: &dyn Prompt,
    ) -> Result<(), AppError> {
        let input = self.resolve_input(args, prompt)?;
        let query = self.build_query(&input)?;

        let records = executor.execute(&query).await?;

        let names: Vec<&str> = records
            .iter()
            .filter_map(|record| record.get("full_name").and_then(|v| v.as_str()))
            .collect();
        log::info!("Results ({}):\n{}", records.len(), names.join("\n"));
        log::info!("Query complete.");

        Ok(())
    }

    /// Flags win; prompts are only shown when no person flag was supplied.
    pub fn resolve_input(
        &self,
        args: PersonArgs,
        prompt: &dyn Prompt,
    ) -> Result<PersonArgs, AppError> {
        if args.has_input() {
            return Ok(args);
        }

        let mut input = args;

        let mut choices = vec![NO_NETWORK];
        choices.extend(SocialNetwork::ALL.iter().map(|network| network.as_str()));

        let selected = prompt.select("Select social network (optional):", &choices)?;
        if let Some(network) = selected
            .checked_sub(1)
            .and_then(|index| SocialNetwork::ALL.get(index))
        {
            let username = prompt.input("Enter username to query:")?;
            match network {
                SocialNetwork::Github => input.github = Some(username),
                SocialNetwork::Linkedin => input.linkedin = Some(username),
                SocialNetwork::Facebook => input.facebook = Some(username),
            }
        }

        let email = prompt.input("Enter email to query (optional):")?;
        if !email.is_empty() {
            input.email = Some(email);
        }

        Ok(input)
    }

    pub fn build_query(&self, input: &PersonArgs) -> Result<PersonQuery, AppError> {
        let mut query = PersonQuery::new();
        query.add_username("github", input.github.as_deref().unwrap_or_default())?;
        query.add_username("linkedin", input.linkedin.as_deref().unwrap_or_default())?;
        query.add_username("facebook", input.facebook.as_deref().unwrap_or_default())?;
        query.add_email(input.email.as_deref().unwrap_or_default())?;
        Ok(query)
    }
}
