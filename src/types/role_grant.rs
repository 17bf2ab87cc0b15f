use serde::{Deserialize, Serialize};

pub const READ_WRITE_ROLE: &str = "readWrite";

/// A role granted on a single database, as MongoDB reports it in `usersInfo`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleGrant {
    pub role: String,
    pub db: String,
}

impl RoleGrant {
    pub fn read_write(db: impl Into<String>) -> Self {
        Self {
            role: READ_WRITE_ROLE.to_string(),
            db: db.into(),
        }
    }
}

impl std::fmt::Display for RoleGrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.role, self.db)
    }
}
