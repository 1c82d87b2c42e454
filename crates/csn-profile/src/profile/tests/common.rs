use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::profile::completion::CompletionEngine;
use crate::profile::domain::{
    ConnectionRecord, ConnectionStatus, InterestAssociation, InterestVisibility,
    ProfileAggregate, SocialLink, UserId, UserRecord,
};
use crate::profile::reader::{InMemoryProfileStore, ProfileRecordReader, RepositoryError};
use crate::profile::service::ProfileCompletionService;

pub(super) fn complete_aggregate() -> ProfileAggregate {
    ProfileAggregate {
        profile_photo_present: true,
        first_name: "Priya".to_string(),
        last_name: "Raman".to_string(),
        bio: Some("Supply-chain consultant for regional manufacturers.".to_string()),
        company: Some("Raman Advisory".to_string()),
        position: Some("Founder".to_string()),
        city: Some("Pune".to_string()),
        phone_verified: true,
        email_verified: true,
        interest_count: 5,
        has_social_links: true,
        has_accepted_connection: true,
    }
}

pub(super) fn empty_aggregate() -> ProfileAggregate {
    ProfileAggregate::default()
}

/// Photo, name and both verifications done; everything else outstanding.
pub(super) fn jane_doe_aggregate() -> ProfileAggregate {
    ProfileAggregate {
        profile_photo_present: true,
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        bio: None,
        company: Some("Acme".to_string()),
        position: None,
        city: Some("  ".to_string()),
        phone_verified: true,
        email_verified: true,
        interest_count: 1,
        has_social_links: false,
        has_accepted_connection: false,
    }
}

pub(super) fn engine() -> CompletionEngine {
    CompletionEngine::standard()
}

pub(super) fn jane_user() -> UserRecord {
    let mut user = UserRecord::new("u-jane");
    user.first_name = "Jane".to_string();
    user.last_name = "Doe".to_string();
    user.profile_photo = Some("https://cdn.csn.example/u-jane.png".to_string());
    user.company = Some("Acme".to_string());
    user.city = Some("  ".to_string());
    user.phone_verified = true;
    user.email_verified = true;
    user
}

pub(super) fn complete_user() -> UserRecord {
    let mut user = UserRecord::new("u-priya");
    user.first_name = "Priya".to_string();
    user.last_name = "Raman".to_string();
    user.profile_photo = Some("https://cdn.csn.example/u-priya.png".to_string());
    user.bio = Some("Supply-chain consultant for regional manufacturers.".to_string());
    user.company = Some("Raman Advisory".to_string());
    user.position = Some("Founder".to_string());
    user.city = Some("Pune".to_string());
    user.phone_verified = true;
    user.email_verified = true;
    user.social_links = vec![SocialLink {
        platform: "linkedin".to_string(),
        url: "https://www.linkedin.com/in/priya-raman".to_string(),
    }];
    user
}

pub(super) fn interest(user_id: &str, name: &str, visibility: InterestVisibility) -> InterestAssociation {
    InterestAssociation {
        user_id: UserId::from(user_id),
        interest: name.to_string(),
        visibility,
    }
}

pub(super) fn connection(requester: &str, addressee: &str, status: ConnectionStatus) -> ConnectionRecord {
    ConnectionRecord {
        requester_id: UserId::from(requester),
        addressee_id: UserId::from(addressee),
        status,
    }
}

/// Store holding `u-priya` (complete), `u-jane` (partial) and `u-new` (blank).
pub(super) fn seeded_store() -> InMemoryProfileStore {
    let store = InMemoryProfileStore::default();
    store.upsert_user(complete_user()).expect("insert priya");
    store.upsert_user(jane_user()).expect("insert jane");
    store.upsert_user(UserRecord::new("u-new")).expect("insert blank");

    for name in ["logistics", "manufacturing", "export"] {
        store
            .add_interest(interest("u-priya", name, InterestVisibility::Public))
            .expect("add interest");
    }
    store
        .add_interest(interest("u-jane", "retail", InterestVisibility::Public))
        .expect("add interest");
    store
        .add_connection(connection("u-jane", "u-priya", ConnectionStatus::Pending))
        .expect("add pending connection");
    store
        .add_connection(connection("u-new", "u-priya", ConnectionStatus::Accepted))
        .expect("add accepted connection");
    store
}

pub(super) fn build_service() -> (
    ProfileCompletionService<InMemoryProfileStore>,
    Arc<InMemoryProfileStore>,
) {
    let store = Arc::new(seeded_store());
    let service = ProfileCompletionService::new(store.clone(), Arc::new(engine()));
    (service, store)
}

/// Reader serving fixed snapshots and counting how often it is asked.
#[derive(Default)]
pub(super) struct FixedReader {
    pub(super) profiles: HashMap<UserId, ProfileAggregate>,
    pub(super) reads: AtomicUsize,
}

impl FixedReader {
    pub(super) fn with(user_id: &str, profile: ProfileAggregate) -> Self {
        let mut profiles = HashMap::new();
        profiles.insert(UserId::from(user_id), profile);
        Self {
            profiles,
            reads: AtomicUsize::new(0),
        }
    }

    pub(super) fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl ProfileRecordReader for FixedReader {
    fn load_profile_aggregate(
        &self,
        user_id: &UserId,
    ) -> Result<ProfileAggregate, RepositoryError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.profiles
            .get(user_id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound {
                user_id: user_id.clone(),
            })
    }
}

pub(super) struct UnavailableReader;

impl ProfileRecordReader for UnavailableReader {
    fn load_profile_aggregate(
        &self,
        _user_id: &UserId,
    ) -> Result<ProfileAggregate, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
