//! Resume domain records, matching the persisted camelCase JSON shape.
//!
//! The print config lives on the resume as an untyped value and is only
//! validated at render time (`PrintConfig::from_value`), so a corrupt layout
//! record never blocks loading the resume itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One job-title/date-range entry within an experience.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: i64,
    pub job_title: String,
    pub location: String,
    pub start_date: DateTime<Utc>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

/// One work-experience entry (a company) with its ordered roles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: i64,
    pub company_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub roles: Vec<Role>,
}

/// A full resume record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub id: i64,
    pub full_name: String,
    pub job_title: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    pub email: String,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub twitter_url: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    pub introduction: String,
    /// Comma-separated; split with [`buzzword_list`].
    pub buzzwords: String,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    /// Persisted print layout, kept untyped until render time.
    #[serde(default)]
    pub print_config: Option<Value>,
    pub created_at: DateTime<Utc>,
}

/// Orders experiences by the earliest start date among their roles, most
/// recent first. Experiences with no roles sort last.
pub fn sort_experiences_by_earliest_start_date(experiences: &mut [Experience]) {
    experiences.sort_by(|a, b| earliest_start_date(&b.roles).cmp(&earliest_start_date(&a.roles)));
}

fn earliest_start_date(roles: &[Role]) -> Option<DateTime<Utc>> {
    roles.iter().map(|role| role.start_date).min()
}

/// Splits the comma-separated buzzwords field into trimmed entries.
pub fn buzzword_list(buzzwords: &str) -> Vec<String> {
    buzzwords.split(',').map(|word| word.trim().to_string()).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(year: i32, month: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).unwrap()
    }

    fn role(id: i64, start: DateTime<Utc>) -> Role {
        Role {
            id,
            job_title: "Engineer".to_string(),
            location: "Remote".to_string(),
            start_date: start,
            end_date: None,
            responsibilities: vec![],
        }
    }

    fn experience(id: i64, roles: Vec<Role>) -> Experience {
        Experience {
            id,
            company_name: format!("Company {id}"),
            description: None,
            logo_url: None,
            roles,
        }
    }

    #[test]
    fn test_sort_most_recent_earliest_date_first() {
        let mut experiences = vec![
            experience(1, vec![role(10, date(2015, 3)), role(11, date(2017, 6))]),
            experience(2, vec![role(20, date(2021, 1))]),
            experience(3, vec![role(30, date(2019, 9))]),
        ];
        sort_experiences_by_earliest_start_date(&mut experiences);

        let order: Vec<i64> = experiences.iter().map(|e| e.id).collect();
        assert_eq!(order, vec![2, 3, 1], "earliest role date decides, descending");
    }

    #[test]
    fn test_sort_uses_earliest_role_not_first_role() {
        // Experience 1's first role is recent but an older role drags its
        // earliest date back before experience 2's.
        let mut experiences = vec![
            experience(1, vec![role(10, date(2022, 1)), role(11, date(2010, 1))]),
            experience(2, vec![role(20, date(2018, 1))]),
        ];
        sort_experiences_by_earliest_start_date(&mut experiences);
        let order: Vec<i64> = experiences.iter().map(|e| e.id).collect();
        assert_eq!(order, vec![2, 1]);
    }

    #[test]
    fn test_sort_roleless_experience_goes_last() {
        let mut experiences = vec![
            experience(1, vec![]),
            experience(2, vec![role(20, date(2012, 5))]),
        ];
        sort_experiences_by_earliest_start_date(&mut experiences);
        let order: Vec<i64> = experiences.iter().map(|e| e.id).collect();
        assert_eq!(order, vec![2, 1]);
    }

    #[test]
    fn test_buzzword_list_splits_and_trims() {
        assert_eq!(
            buzzword_list("Rust, distributed systems ,observability"),
            vec!["Rust", "distributed systems", "observability"]
        );
    }

    #[test]
    fn test_role_deserializes_camel_case_with_optional_fields() {
        let json = r#"{
            "id": 7,
            "jobTitle": "Staff Engineer",
            "location": "Berlin",
            "startDate": "2021-03-01T00:00:00Z"
        }"#;
        let role: Role = serde_json::from_str(json).unwrap();
        assert_eq!(role.id, 7);
        assert_eq!(role.job_title, "Staff Engineer");
        assert!(role.end_date.is_none());
        assert!(role.responsibilities.is_empty());
    }

    #[test]
    fn test_resume_tolerates_malformed_print_config_value() {
        let json = r#"{
            "id": 1,
            "fullName": "Ada Lovelace",
            "jobTitle": "Engineer",
            "email": "ada@example.com",
            "introduction": "Hello",
            "buzzwords": "math, engines",
            "experiences": [],
            "printConfig": {"pages": "corrupted"},
            "createdAt": "2024-01-01T00:00:00Z"
        }"#;
        let resume: Resume = serde_json::from_str(json).unwrap();
        assert!(
            resume.print_config.is_some(),
            "corrupt layout stays untyped; validation happens at render time"
        );
    }
}
