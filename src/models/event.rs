use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Substituted when the trigger omits `summary`.
pub const DEFAULT_SUMMARY: &str = "Default Summary";
/// Substituted when the trigger omits `description`.
pub const DEFAULT_DESCRIPTION: &str = "Default Description";

const ISSUE_TYPE: &str = "Task";

/// The payload delivered by the external trigger. Both fields are optional;
/// anything else the trigger sends (including a `project` field) is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InboundEvent {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Request body for POST /rest/api/2/issue.
#[derive(Debug, Serialize)]
pub struct IssuePayload {
    pub fields: IssueFields,
}

#[derive(Debug, Serialize)]
pub struct IssueFields {
    pub project: ProjectRef,
    pub summary: String,
    pub description: String,
    pub issuetype: IssueTypeRef,
}

#[derive(Debug, Serialize)]
pub struct ProjectRef {
    pub key: String,
}

#[derive(Debug, Serialize)]
pub struct IssueTypeRef {
    pub name: String,
}

impl IssuePayload {
    /// Builds the issue body from an event. The project key always comes from
    /// configuration, never from the event itself.
    pub fn from_event(event: &InboundEvent, project_key: &str) -> Self {
        let summary = event
            .summary
            .clone()
            .unwrap_or_else(|| DEFAULT_SUMMARY.to_string());
        let description = event
            .description
            .clone()
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

        Self {
            fields: IssueFields {
                project: ProjectRef {
                    key: project_key.to_string(),
                },
                summary,
                description,
                issuetype: IssueTypeRef {
                    name: ISSUE_TYPE.to_string(),
                },
            },
        }
    }
}

/// What the caller gets back: the tracker's HTTP status plus its body, parsed
/// as JSON when possible and carried as a raw string otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdapterResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: Value,
}
