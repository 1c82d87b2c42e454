use csn_profile::profile::{
    ConnectionRecord, ConnectionStatus, InMemoryProfileStore, InterestAssociation,
    InterestVisibility, ProfileSeed, SeedError, SocialLink, UserId, UserRecord,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads the profile store from `seed_path`, or the bundled demo users when absent.
pub(crate) fn load_store(seed_path: Option<&Path>) -> Result<InMemoryProfileStore, SeedError> {
    match seed_path {
        Some(path) => InMemoryProfileStore::from_path(path),
        None => InMemoryProfileStore::from_seed(demo_seed()),
    }
}

/// Three demo members at different stages of onboarding.
pub(crate) fn demo_seed() -> ProfileSeed {
    let mut complete = UserRecord::new("u-demo-complete");
    complete.first_name = "Kavya".to_string();
    complete.last_name = "Menon".to_string();
    complete.profile_photo = Some("https://cdn.csn.example/u-demo-complete.png".to_string());
    complete.bio = Some("Helps D2C brands expand into tier-2 cities.".to_string());
    complete.company = Some("Northstar Retail".to_string());
    complete.position = Some("Growth Lead".to_string());
    complete.city = Some("Bengaluru".to_string());
    complete.phone_verified = true;
    complete.email_verified = true;
    complete.social_links = vec![SocialLink {
        platform: "linkedin".to_string(),
        url: "https://www.linkedin.com/in/kavya-menon".to_string(),
    }];

    let mut partial = UserRecord::new("u-demo-partial");
    partial.first_name = "Jane".to_string();
    partial.last_name = "Doe".to_string();
    partial.profile_photo = Some("https://cdn.csn.example/u-demo-partial.png".to_string());
    partial.company = Some("Acme".to_string());
    partial.phone_verified = true;
    partial.email_verified = true;

    let fresh = UserRecord::new("u-demo-new");

    let interests = ["retail", "marketplaces", "logistics"]
        .into_iter()
        .map(|name| interest("u-demo-complete", name))
        .chain(std::iter::once(interest("u-demo-partial", "retail")))
        .collect();

    let connections = vec![
        ConnectionRecord {
            requester_id: UserId::from("u-demo-partial"),
            addressee_id: UserId::from("u-demo-complete"),
            status: ConnectionStatus::Pending,
        },
        ConnectionRecord {
            requester_id: UserId::from("u-demo-complete"),
            addressee_id: UserId::from("u-demo-new"),
            status: ConnectionStatus::Accepted,
        },
    ];

    ProfileSeed {
        users: vec![complete, partial, fresh],
        interests,
        connections,
    }
}

fn interest(user_id: &str, name: &str) -> InterestAssociation {
    InterestAssociation {
        user_id: UserId::from(user_id),
        interest: name.to_string(),
        visibility: InterestVisibility::Public,
    }
}
