//! Narrowing of raw PDL person records
//!
//! The full PDL payload is much larger than what is needed for quick
//! inspection. [`narrow_person`] keeps a fixed subset of fields, renames them
//! to camelCase and drops every null.

use crate::api::models::RawRecord;
use crate::error::SchemaError;
use crate::utils::text::camel_case;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Narrowed person record. Every field is optional and absent fields are
/// omitted when serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_emails: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_personal_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_company_website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_last_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_start_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_continent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_street_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_geo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_last_updated: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_numbers: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emails: Option<Vec<EmailEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countries: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profiles: Option<Vec<ProfileEntry>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailEntry {
    pub address: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Narrow one raw record into a [`PersonRecord`].
///
/// Keys are camelCased and null values dropped before parsing. Unrecognized
/// fields are ignored; a recognized field of the wrong shape is a
/// [`SchemaError::Violation`] naming that field.
pub fn narrow_person(raw: &RawRecord) -> Result<PersonRecord, SchemaError> {
    let fields: Map<String, Value> = raw
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| (camel_case(key), value.clone()))
        .collect();
    let fields = Value::Object(fields);

    PersonRecord::deserialize(&fields).map_err(|error| locate_violation(&fields, error))
}

// Re-parse field by field so the error can name the offending one.
fn locate_violation(fields: &Value, error: serde_json::Error) -> SchemaError {
    if let Value::Object(map) = fields {
        for (key, value) in map {
            let single = Value::Object(Map::from_iter([(key.clone(), value.clone())]));
            if let Err(field_error) = PersonRecord::deserialize(&single) {
                return SchemaError::Violation {
                    path: format!("$.{}", key),
                    reason: field_error.to_string(),
                };
            }
        }
    }

    SchemaError::Violation {
        path: "$".to_string(),
        reason: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawRecord {
        value.as_object().cloned().expect("fixture must be an object")
    }

    #[test]
    fn test_null_fields_are_stripped() {
        let record = narrow_person(&raw(json!({
            "full_name": "Ada Lovelace",
            "work_email": null
        })))
        .expect("record should narrow");

        assert_eq!(record.full_name.as_deref(), Some("Ada Lovelace"));
        assert!(record.work_email.is_none());

        let serialized = serde_json::to_value(&record).unwrap();
        assert_eq!(serialized, json!({"fullName": "Ada Lovelace"}));
    }

    #[test]
    fn test_unrecognized_fields_are_dropped() {
        let record = narrow_person(&raw(json!({
            "id": "qEnOZ5Oh0poWnQ1luFBfVw_0000",
            "job_title_levels": ["senior"],
            "inferred_salary": "100,000-150,000",
            "github_username": "octocat"
        })))
        .expect("record should narrow");

        let serialized = serde_json::to_value(&record).unwrap();
        assert_eq!(
            serialized,
            json!({"id": "qEnOZ5Oh0poWnQ1luFBfVw_0000", "githubUsername": "octocat"})
        );
    }

    #[test]
    fn test_nested_emails_and_profiles() {
        let record = narrow_person(&raw(json!({
            "personal_emails": ["ada@example.com"],
            "emails": [
                {"address": "ada@example.com", "type": "personal"},
                {"address": "ada@engine.co.uk", "type": null}
            ],
            "profiles": [
                {"network": "github", "id": null, "url": "github.com/ada", "username": "ada"}
            ],
            "skills": ["mathematics", "poetry"]
        })))
        .expect("record should narrow");

        let emails = record.emails.as_ref().unwrap();
        assert_eq!(emails.len(), 2);
        assert_eq!(emails[0].kind.as_deref(), Some("personal"));
        assert!(emails[1].kind.is_none());

        let serialized = serde_json::to_value(&record).unwrap();
        assert_eq!(
            serialized["profiles"],
            json!([{"network": "github", "url": "github.com/ada", "username": "ada"}])
        );
        assert_eq!(serialized["personalEmails"], json!(["ada@example.com"]));
        assert_eq!(serialized["emails"][1], json!({"address": "ada@engine.co.uk"}));
    }

    #[test]
    fn test_empty_record_narrows_to_empty_object() {
        let record = narrow_person(&RawRecord::new()).expect("empty record is valid");
        assert_eq!(record, PersonRecord::default());
        assert_eq!(serde_json::to_value(&record).unwrap(), json!({}));
    }

    #[test]
    fn test_wrong_type_reports_field_path() {
        let err = narrow_person(&raw(json!({
            "full_name": "Ada Lovelace",
            "skills": "mathematics"
        })))
        .expect_err("skills must be an array");

        let SchemaError::Violation { path, reason } = err;
        assert_eq!(path, "$.skills");
        assert!(reason.contains("invalid type"), "reason was {reason}");
    }

    #[test]
    fn test_email_entry_without_address_is_a_violation() {
        let err = narrow_person(&raw(json!({
            "emails": [{"type": "personal"}]
        })))
        .expect_err("address is required on email entries");

        let SchemaError::Violation { path, reason } = err;
        assert_eq!(path, "$.emails");
        assert!(reason.contains("address"), "reason was {reason}");
    }
}
