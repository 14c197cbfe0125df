use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "pdl-cli")]
#[command(about = "Command line interface for querying People Data Labs person records")]
#[command(version)]
#[command(after_help = "Examples:
  pdl-cli                                          # Choose everything interactively
  pdl-cli --query person --github octocat          # Search by GitHub username
  pdl-cli --query person --linkedin jdoe --email jane@example.com

Any number of networks can be combined on the command line. Interactive
prompts only ask for one network and an optional email.

Environment Variables:
  PEOPLEDATALABS_KEY   PDL API key (required)
  LOG_LEVEL            trace, debug, info, warn, error or fatal (default: info)")]
pub struct Cli {
    /// Query to execute (prompted for when omitted)
    #[arg(long, value_enum)]
    pub query: Option<QueryKind>,

    #[command(flatten)]
    pub person: PersonArgs,

    /// Enable verbose output for debugging (same as LOG_LEVEL=debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// PDL API key
    #[arg(long, env = "PEOPLEDATALABS_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Log level threshold
    #[arg(long, env = "LOG_LEVEL")]
    pub log_level: Option<String>,

    /// PDL API base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Directory result files are written to (default: ./data)
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Custom configuration directory path
    #[arg(long)]
    pub config_dir: Option<String>,
}

/// Person identifiers; supplying any of them skips the prompts.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct PersonArgs {
    /// Email address to search
    #[arg(long, help_heading = "Person Query")]
    pub email: Option<String>,

    /// GitHub username to search
    #[arg(long, help_heading = "Person Query")]
    pub github: Option<String>,

    /// LinkedIn username to search
    #[arg(long, help_heading = "Person Query")]
    pub linkedin: Option<String>,

    /// Facebook username to search
    #[arg(long, help_heading = "Person Query")]
    pub facebook: Option<String>,
}

impl PersonArgs {
    pub fn has_input(&self) -> bool {
        [&self.email, &self.github, &self.linkedin, &self.facebook]
            .into_iter()
            .any(|value| value.as_deref().is_some_and(|v| !v.is_empty()))
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Person,
}

impl QueryKind {
    pub const ALL: [QueryKind; 1] = [QueryKind::Person];

    pub fn as_str(self) -> &'static str {
        match self {
            QueryKind::Person => "person",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_person_flags() {
        let cli = Cli::try_parse_from([
            "pdl-cli",
            "--query",
            "person",
            "--github",
            "octocat",
            "--email",
            "Person@Example.COM",
        ])
        .expect("arguments parse");

        assert_eq!(cli.query, Some(QueryKind::Person));
        assert_eq!(cli.person.github.as_deref(), Some("octocat"));
        assert_eq!(cli.person.email.as_deref(), Some("Person@Example.COM"));
        assert!(cli.person.has_input());
    }

    #[test]
    fn test_unknown_query_rejected() {
        assert!(Cli::try_parse_from(["pdl-cli", "--query", "company"]).is_err());
    }

    #[test]
    fn test_has_input_ignores_empty_values() {
        let args = PersonArgs {
            github: Some(String::new()),
            ..Default::default()
        };
        assert!(!args.has_input());
        assert!(!PersonArgs::default().has_input());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
