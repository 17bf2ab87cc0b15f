use serde::{Deserialize, Serialize};

pub const GUEST_USER: &str = "guest";
pub const GUEST_PASSWORD_HASH: &str =
    "$argon2i$v=19$m=102400,t=2,p=8$S4lRqpWSck7JGWMMgTDGGA$MRa3VgoE5o1qZET5/yBRBA";

/// Access metadata stored under `am` in an account record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessMetadata {
    pub read_groups: Vec<String>,
    pub write_groups: Vec<String>,
    pub admin_access: bool,
}

/// Account record inserted once at provisioning time.
///
/// Field order is significant: it is the order the document is written in,
/// and MongoDB compares embedded documents field by field.
/// No `_id` is carried, the server assigns one on insert.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedDocument {
    pub user: String,
    pub am: AccessMetadata,
    pub password: String,
}

impl SeedDocument {
    /// The default `guest` account with read access to the `public` group.
    /// The password is a precomputed argon2i hash and is never derived here.
    pub fn guest() -> Self {
        Self {
            user: GUEST_USER.to_string(),
            am: AccessMetadata {
                read_groups: vec!["public".to_string()],
                write_groups: vec![],
                admin_access: false,
            },
            password: GUEST_PASSWORD_HASH.to_string(),
        }
    }
}

impl Default for SeedDocument {
    fn default() -> Self {
        Self::guest()
    }
}
