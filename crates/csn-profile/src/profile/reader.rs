use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use super::domain::{ConnectionRecord, InterestAssociation, ProfileAggregate, UserId, UserRecord};

/// Storage abstraction feeding the completion engine.
pub trait ProfileRecordReader: Send + Sync {
    /// Load the scoring snapshot for `user_id`, or `RepositoryError::NotFound`.
    fn load_profile_aggregate(&self, user_id: &UserId)
        -> Result<ProfileAggregate, RepositoryError>;
}

/// Error enumeration for profile store failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("user {user_id} not found")]
    NotFound { user_id: UserId },
    #[error("profile store unavailable: {0}")]
    Unavailable(String),
}

impl<T> From<PoisonError<T>> for RepositoryError {
    fn from(_: PoisonError<T>) -> Self {
        Self::Unavailable("profile store lock poisoned".to_string())
    }
}

/// Seed document accepted by [`InMemoryProfileStore::from_reader`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileSeed {
    #[serde(default)]
    pub users: Vec<UserRecord>,
    #[serde(default)]
    pub interests: Vec<InterestAssociation>,
    #[serde(default)]
    pub connections: Vec<ConnectionRecord>,
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read profile seed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid profile seed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("user {0} appears more than once in the seed")]
    DuplicateUser(UserId),
    #[error("seed references unknown user {0}")]
    UnknownUser(UserId),
}

#[derive(Debug, Default)]
struct StoreState {
    users: HashMap<UserId, UserRecord>,
    interests: Vec<InterestAssociation>,
    connections: Vec<ConnectionRecord>,
}

/// Process-local profile store standing in for the relational schema.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    state: RwLock<StoreState>,
}

impl InMemoryProfileStore {
    pub fn from_seed(seed: ProfileSeed) -> Result<Self, SeedError> {
        let mut users = HashMap::with_capacity(seed.users.len());
        for user in seed.users {
            if users.contains_key(&user.id) {
                return Err(SeedError::DuplicateUser(user.id));
            }
            users.insert(user.id.clone(), user);
        }

        for interest in &seed.interests {
            if !users.contains_key(&interest.user_id) {
                return Err(SeedError::UnknownUser(interest.user_id.clone()));
            }
        }
        for connection in &seed.connections {
            for party in [&connection.requester_id, &connection.addressee_id] {
                if !users.contains_key(party) {
                    return Err(SeedError::UnknownUser(party.clone()));
                }
            }
        }

        Ok(Self {
            state: RwLock::new(StoreState {
                users,
                interests: seed.interests,
                connections: seed.connections,
            }),
        })
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SeedError> {
        let seed: ProfileSeed = serde_json::from_reader(reader)?;
        Self::from_seed(seed)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SeedError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Insert or replace a user row.
    pub fn upsert_user(&self, user: UserRecord) -> Result<(), RepositoryError> {
        let mut state = self.state.write()?;
        state.users.insert(user.id.clone(), user);
        Ok(())
    }

    pub fn add_interest(&self, interest: InterestAssociation) -> Result<(), RepositoryError> {
        let mut state = self.state.write()?;
        if !state.users.contains_key(&interest.user_id) {
            return Err(RepositoryError::NotFound {
                user_id: interest.user_id,
            });
        }
        state.interests.push(interest);
        Ok(())
    }

    pub fn add_connection(&self, connection: ConnectionRecord) -> Result<(), RepositoryError> {
        let mut state = self.state.write()?;
        for party in [&connection.requester_id, &connection.addressee_id] {
            if !state.users.contains_key(party) {
                return Err(RepositoryError::NotFound {
                    user_id: party.clone(),
                });
            }
        }
        state.connections.push(connection);
        Ok(())
    }

    pub fn user_ids(&self) -> Result<Vec<UserId>, RepositoryError> {
        let state = self.state.read()?;
        let mut ids: Vec<UserId> = state.users.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}

impl ProfileRecordReader for InMemoryProfileStore {
    fn load_profile_aggregate(
        &self,
        user_id: &UserId,
    ) -> Result<ProfileAggregate, RepositoryError> {
        let state = self.state.read()?;
        let user = state
            .users
            .get(user_id)
            .ok_or_else(|| RepositoryError::NotFound {
                user_id: user_id.clone(),
            })?;

        let interest_count = state
            .interests
            .iter()
            .filter(|association| &association.user_id == user_id)
            .count();

        // Either direction counts; stop at the first accepted match.
        let has_accepted_connection = state
            .connections
            .iter()
            .any(|connection| connection.is_accepted() && connection.involves(user_id));

        Ok(ProfileAggregate {
            profile_photo_present: user.has_profile_photo(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            bio: user.bio.clone(),
            company: user.company.clone(),
            position: user.position.clone(),
            city: user.city.clone(),
            phone_verified: user.phone_verified,
            email_verified: user.email_verified,
            interest_count: u32::try_from(interest_count).unwrap_or(u32::MAX),
            has_social_links: user.has_social_links(),
            has_accepted_connection,
        })
    }
}
