//! Wire DTOs shared with the REST backend.
//!
//! DESIGN
//! ======
//! Role and account status are closed enums so every guard decision is an
//! exhaustive match. An unrecognised role fails deserialization, which the
//! session store treats like any other malformed profile.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Permission class assigned to an account at registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Citizen,
    LawEnforcement,
    /// Satisfies every route requirement.
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Citizen, Role::LawEnforcement, Role::Admin];

    /// Wire name (`"law_enforcement"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Citizen => "citizen",
            Role::LawEnforcement => "law_enforcement",
            Role::Admin => "admin",
        }
    }

    /// Human-readable name (`"Law Enforcement"`).
    pub fn label(self) -> &'static str {
        match self {
            Role::Citizen => "Citizen",
            Role::LawEnforcement => "Law Enforcement",
            Role::Admin => "Admin",
        }
    }

    /// Parse loosely formatted input such as `" Law Enforcement "`.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase().replace(' ', "_");
        Self::ALL.into_iter().find(|role| role.as_str() == normalized)
    }
}

/// Account-level gate, independent of role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    Approved,
    Pending,
    Suspended,
    Rejected,
    /// Missing, null, or a value this client does not know.
    #[default]
    Unknown,
}

impl AccountStatus {
    fn from_wire(raw: &str) -> Self {
        match raw {
            "approved" => AccountStatus::Approved,
            "pending" => AccountStatus::Pending,
            "suspended" => AccountStatus::Suspended,
            "rejected" => AccountStatus::Rejected,
            _ => AccountStatus::Unknown,
        }
    }

    /// Whether an account in this status may use the app at all.
    pub fn may_use_app(self) -> bool {
        match self {
            AccountStatus::Approved | AccountStatus::Pending => true,
            AccountStatus::Suspended | AccountStatus::Rejected | AccountStatus::Unknown => false,
        }
    }
}

/// The authenticated user as returned by `/api/users/me/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Backend primary key.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
    pub role: Role,
    #[serde(default, deserialize_with = "deserialize_status")]
    pub status: AccountStatus,
    /// ISO 8601 registration timestamp, if the backend sent one.
    #[serde(default)]
    pub date_joined: Option<String>,
}

impl User {
    /// Username when set, otherwise the email address.
    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.email)
    }
}

/// Body of `POST /api/users/login/`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Access and refresh credentials returned by a successful login.
///
/// The backend also echoes a user summary; it is ignored in favor of the
/// full profile fetched afterwards.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TokenPair {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Body of `POST /api/users/create/`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegistrationRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
    pub rank: Option<String>,
    pub details: Option<String>,
}

/// Crime category accepted by the report endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportCategory {
    Theft,
    Assault,
    Fraud,
    Vandalism,
    #[default]
    Other,
}

impl ReportCategory {
    pub const ALL: [ReportCategory; 5] = [
        ReportCategory::Theft,
        ReportCategory::Assault,
        ReportCategory::Fraud,
        ReportCategory::Vandalism,
        ReportCategory::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReportCategory::Theft => "theft",
            ReportCategory::Assault => "assault",
            ReportCategory::Fraud => "fraud",
            ReportCategory::Vandalism => "vandalism",
            ReportCategory::Other => "other",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == raw)
    }
}

/// Review state of a report, as stored by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Pending,
    InProgress,
    Resolved,
    Rejected,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 4] = [
        ReportStatus::Pending,
        ReportStatus::InProgress,
        ReportStatus::Resolved,
        ReportStatus::Rejected,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReportStatus::Pending => "pending",
            ReportStatus::InProgress => "in_progress",
            ReportStatus::Resolved => "resolved",
            ReportStatus::Rejected => "rejected",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReportStatus::Pending => "Pending",
            ReportStatus::InProgress => "In Progress",
            ReportStatus::Resolved => "Resolved",
            ReportStatus::Rejected => "Rejected",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

/// One entry of `GET /api/reports/status-choices/`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StatusChoice {
    pub value: String,
    pub label: String,
}

/// Admin verdict on a pending law-enforcement account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountDecision {
    Approve,
    Reject,
}

impl AccountDecision {
    /// Status the account holds once the decision is applied.
    pub fn resulting_status(self) -> AccountStatus {
        match self {
            AccountDecision::Approve => AccountStatus::Approved,
            AccountDecision::Reject => AccountStatus::Rejected,
        }
    }
}

/// Body of `POST /api/reports/`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewReport {
    pub category: ReportCategory,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Django REST framework error envelope.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    /// Plain `JsonResponse` errors from the report and user views.
    #[serde(default)]
    pub error: Option<String>,
}

fn deserialize_status<'de, D>(deserializer: D) -> Result<AccountStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().map_or(AccountStatus::Unknown, AccountStatus::from_wire))
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => number
            .as_i64()
            .ok_or_else(|| D::Error::custom("expected integer id")),
        serde_json::Value::String(text) => text
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("invalid id {text:?}"))),
        _ => Err(D::Error::custom("expected number")),
    }
}
