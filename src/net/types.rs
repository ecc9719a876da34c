//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the REST payloads the platform API serves. The API
//! never sends a `role` field; the client attaches the role implied by the
//! endpoint pair it called before persisting the identity.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Which side of the platform an identity belongs to.
///
/// Determines which login/profile endpoints are used and which protected
/// routes the session may enter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Manager,
}

impl Role {
    /// Lowercase wire/path form (`"student"` / `"manager"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Manager => "manager",
        }
    }

    /// Capitalized display form for page chrome.
    pub fn label(self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Manager => "Manager",
        }
    }
}

/// An authenticated identity as held by the session store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier (opaque string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email address.
    pub email: String,
    /// Side of the platform this identity belongs to (attached client-side).
    pub role: Role,
}

/// Login payload for `POST /api/auth/login` and `POST /api/student/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration payload for the student/manager register endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Signup {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Successful login/registration response: a bearer token plus the identity
/// fields of the account it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    /// Opaque bearer credential for subsequent authenticated requests.
    pub token: String,
    pub id: String,
    pub name: String,
    pub email: String,
}

impl AuthResponse {
    /// Split into the identity (with `role` attached) and the token.
    pub fn into_parts(self, role: Role) -> (User, String) {
        let user = User {
            id: self.id,
            name: self.name,
            email: self.email,
            role,
        };
        (user, self.token)
    }
}

/// Identity record returned by the bearer-authenticated profile endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl Profile {
    /// Attach the role the profile was fetched for.
    pub fn into_user(self, role: Role) -> User {
        User {
            id: self.id,
            name: self.name,
            email: self.email,
            role,
        }
    }
}

/// An event as served by the public list/detail endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique event identifier (opaque string).
    pub id: String,
    /// Event title shown in lists and detail pages.
    pub title: String,
    /// Long description, Markdown-formatted.
    pub description: String,
    /// Venue or "Online".
    pub venue: String,
    /// ISO 8601 date the event starts.
    pub start_date: String,
    /// ISO 8601 date the event ends.
    pub end_date: String,
    /// ISO 8601 date registrations close, if the organizer set one.
    #[serde(default)]
    pub registration_deadline: Option<String>,
    /// Entry fee per team in whole currency units; zero means free.
    pub entry_fee: u32,
    /// Smallest team size accepted at registration.
    pub min_team_size: u32,
    /// Largest team size accepted at registration.
    pub max_team_size: u32,
}

/// Event fields a manager submits when creating or editing an event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub venue: String,
    pub start_date: String,
    pub end_date: String,
    pub registration_deadline: Option<String>,
    pub entry_fee: u32,
    pub min_team_size: u32,
    pub max_team_size: u32,
}

/// A single member row inside a team registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub email: String,
}

/// A registered team as served by the teams endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Unique team identifier (opaque string).
    pub id: String,
    /// Event this team registered for.
    pub event_id: String,
    /// Event title, echoed for list views that span events.
    #[serde(default)]
    pub event_title: Option<String>,
    /// Team name chosen at registration.
    pub name: String,
    /// Member roster.
    pub members: Vec<TeamMember>,
    /// Whether a manager has verified the team's payment.
    pub payment_verified: bool,
    /// Payment reference the team supplied, if any.
    #[serde(default)]
    pub transaction_id: Option<String>,
}

/// Payload a student submits to register a team for an event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TeamRegistration {
    pub name: String,
    pub members: Vec<TeamMember>,
    pub transaction_id: Option<String>,
}
