use crate::error::QueryError;
use std::fmt;
use std::str::FromStr;

/// Social networks a person can be searched by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialNetwork {
    Linkedin,
    Github,
    Facebook,
}

impl SocialNetwork {
    pub const ALL: [SocialNetwork; 3] = [
        SocialNetwork::Github,
        SocialNetwork::Linkedin,
        SocialNetwork::Facebook,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SocialNetwork::Linkedin => "linkedin",
            SocialNetwork::Github => "github",
            SocialNetwork::Facebook => "facebook",
        }
    }

    /// PDL column holding this network's username.
    pub fn username_field(self) -> &'static str {
        match self {
            SocialNetwork::Linkedin => "linkedin_username",
            SocialNetwork::Github => "github_username",
            SocialNetwork::Facebook => "facebook_username",
        }
    }
}

impl FromStr for SocialNetwork {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linkedin" => Ok(SocialNetwork::Linkedin),
            "github" => Ok(SocialNetwork::Github),
            "facebook" => Ok(SocialNetwork::Facebook),
            _ => Err(QueryError::InvalidNetwork {
                network: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SocialNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
