use crate::api::client::SearchBackend;
use crate::api::models::{RawRecord, SearchRequest, SearchResponse};
use crate::core::network::SocialNetwork;
use crate::core::query::Query;
use crate::core::schema::{PersonRecord, narrow_person};
use crate::error::{ApiError, QueryError, SchemaError};
use crate::utils::text::snake_case;
use crate::utils::validation::normalize_email;
use async_trait::async_trait;

const FILE_EXTENSION: &str = "json";

/// Query PDL for a person by social username and/or email.
///
/// Predicates are ORed together, so any single match returns the person.
#[derive(Debug, Clone, Default)]
pub struct PersonQuery {
    predicates: Vec<String>,
    dimensions: Vec<String>,
}

impl PersonQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a username predicate for `network`. Empty usernames are skipped.
    pub fn add_username(&mut self, network: &str, username: &str) -> Result<(), QueryError> {
        if username.is_empty() {
            log::debug!("Skipping empty {} username", network);
            return Ok(());
        }

        let network: SocialNetwork = network.parse()?;
        self.predicates.push(equals(network.username_field(), username));
        self.dimensions.push(format!("{}:{}", network, username));
        Ok(())
    }

    /// Add personal and work email predicates. Empty emails are skipped.
    pub fn add_email(&mut self, email: &str) -> Result<(), QueryError> {
        if email.is_empty() {
            log::debug!("Skipping empty email");
            return Ok(());
        }

        let email = normalize_email(email)?;
        self.predicates.push(equals("personal_emails", &email));
        self.predicates.push(equals("work_email", &email));
        self.dimensions.push(format!("email:{}", email));
        Ok(())
    }

    pub fn predicates(&self) -> &[String] {
        &self.predicates
    }

    /// Identity tokens in the order they were added.
    pub fn dimensions(&self) -> &[String] {
        &self.dimensions
    }
}

// Single quotes are doubled so a value cannot close the literal early.
fn equals(field: &str, value: &str) -> String {
    format!("{} = '{}'", field, value.replace('\'', "''"))
}

#[async_trait]
impl Query for PersonQuery {
    type Record = PersonRecord;

    fn has_data(&self) -> bool {
        !self.predicates.is_empty()
    }

    fn build_query(&self) -> String {
        format!(
            "SELECT * FROM person WHERE ({})",
            self.predicates.join(" OR ")
        )
    }

    fn file_name(&self, suffix: &str) -> String {
        let tokens: Vec<&str> = self
            .dimensions
            .iter()
            .map(String::as_str)
            .filter(|token| !token.is_empty())
            .collect();
        let base = snake_case(&tokens.join(" "));

        if suffix.is_empty() {
            format!("{}.{}", base, FILE_EXTENSION)
        } else {
            format!("{}.{}.{}", base, suffix, FILE_EXTENSION)
        }
    }

    fn parse(&self, raw: &RawRecord) -> Result<PersonRecord, SchemaError> {
        narrow_person(raw)
    }

    async fn send(
        &self,
        backend: &dyn SearchBackend,
        search_query: &str,
    ) -> Result<SearchResponse, ApiError> {
        backend
            .search_person(&SearchRequest::sql(search_query))
            .await
    }
}
