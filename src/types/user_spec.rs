use crate::types::RoleGrant;

/// A database user to be created by `createUser`.
#[derive(Clone, PartialEq, Eq)]
pub struct UserSpec {
    pub name: String,
    pub password: String,
    pub db: String,
    pub roles: Vec<RoleGrant>,
    /// SCRAM mechanism to restrict the credentials to. `None` lets the
    /// server create every mechanism it supports.
    pub mechanism: Option<String>,
}

impl UserSpec {
    /// A user holding exactly one role, `readWrite` on `db`.
    pub fn read_write(
        name: impl Into<String>,
        password: impl Into<String>,
        db: impl Into<String>,
    ) -> Self {
        let db = db.into();
        Self {
            name: name.into(),
            password: password.into(),
            roles: vec![RoleGrant::read_write(db.clone())],
            db,
            mechanism: None,
        }
    }

    pub fn with_mechanism(mut self, mechanism: Option<&str>) -> Self {
        self.mechanism = mechanism.map(str::to_string);
        self
    }
}

// Keeps the password out of logs and panic messages.
impl std::fmt::Debug for UserSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserSpec")
            .field("name", &self.name)
            .field("password", &"***")
            .field("db", &self.db)
            .field("roles", &self.roles)
            .field("mechanism", &self.mechanism)
            .finish()
    }
}
