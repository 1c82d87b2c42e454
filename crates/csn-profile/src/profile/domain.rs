use serde::{Deserialize, Serialize};

/// Identifier wrapper for platform users.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Read-only snapshot of the stored attributes that feed completion scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileAggregate {
    pub profile_photo_present: bool,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    pub phone_verified: bool,
    pub email_verified: bool,
    pub interest_count: u32,
    pub has_social_links: bool,
    pub has_accepted_connection: bool,
}

/// Stored user row as persisted by the account and settings screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub profile_photo: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub phone_verified: bool,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

impl UserRecord {
    /// Blank record carrying only the identity, useful as a builder seed.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: UserId(id.into()),
            first_name: String::new(),
            last_name: String::new(),
            profile_photo: None,
            bio: None,
            company: None,
            position: None,
            city: None,
            phone_verified: false,
            email_verified: false,
            social_links: Vec::new(),
        }
    }

    pub fn has_profile_photo(&self) -> bool {
        self.profile_photo
            .as_deref()
            .map(|url| !url.trim().is_empty())
            .unwrap_or(false)
    }

    pub fn has_social_links(&self) -> bool {
        self.social_links
            .iter()
            .any(|link| !link.url.trim().is_empty())
    }
}

/// External profile link (LinkedIn, personal site, and so on).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

/// Audience for an interest tag. Scoring counts every visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterestVisibility {
    #[default]
    Public,
    Connections,
    Private,
}

/// Link between a user and an interest tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestAssociation {
    pub user_id: UserId,
    pub interest: String,
    #[serde(default)]
    pub visibility: InterestVisibility,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectionStatus {
    Pending,
    Accepted,
    Declined,
    Blocked,
}

/// Directed connection request between two users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionRecord {
    pub requester_id: UserId,
    pub addressee_id: UserId,
    pub status: ConnectionStatus,
}

impl ConnectionRecord {
    pub fn involves(&self, user_id: &UserId) -> bool {
        &self.requester_id == user_id || &self.addressee_id == user_id
    }

    pub fn is_accepted(&self) -> bool {
        self.status == ConnectionStatus::Accepted
    }
}
