use serde::{Deserialize, Serialize};

use crate::models::ProfileQuery;

/// Role of the signed-in actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "user" => Some(Role::User),
            _ => None,
        }
    }
}

/// What an actor is allowed to see and do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    pub browse_profiles: bool,
    pub filter_by_subscription: bool,
    pub filter_by_status: bool,
    pub bulk_print: bool,
    pub block_profiles: bool,
    pub create_users: bool,
    pub express_interest: bool,
    pub manage_favorites: bool,
    pub send_messages: bool,
}

impl Capabilities {
    /// Clear the filters this actor may not apply
    pub fn restrict(&self, mut query: ProfileQuery) -> ProfileQuery {
        if !self.filter_by_subscription {
            query.filters.subscription = None;
        }
        if !self.filter_by_status {
            query.filters.status = None;
        }
        query
    }
}

/// Permission set for an actor; `None` is an anonymous visitor
pub fn capabilities(actor: Option<Role>) -> Capabilities {
    match actor {
        Some(Role::Admin) => Capabilities {
            browse_profiles: true,
            filter_by_subscription: true,
            filter_by_status: true,
            bulk_print: true,
            block_profiles: true,
            create_users: true,
            ..Default::default()
        },
        Some(Role::User) => Capabilities {
            browse_profiles: true,
            express_interest: true,
            manage_favorites: true,
            send_messages: true,
            ..Default::default()
        },
        None => Capabilities {
            browse_profiles: true,
            ..Default::default()
        },
    }
}
