use serde::{Deserialize, Serialize, Serializer};

pub const DEFAULT_COLLECTION: &str = "auth";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MongoConfig {
    /// Connection used to provision. Must be allowed to create users on `db`.
    #[serde(default = "default_uri")]
    pub uri: String,

    #[serde(default = "default_user")]
    pub user: String,

    #[serde(default = "default_password", serialize_with = "mask_secret")]
    pub password: String,

    #[serde(default = "default_db")]
    pub db: String,

    #[serde(default = "default_collection")]
    pub collection: String,

    /// Mechanism the provisioning connection authenticates with when the
    /// URI carries credentials but no `authMechanism`. `DEFAULT` leaves it
    /// to negotiation.
    #[serde(default = "default_auth_mechanism")]
    pub auth_mechanism: String,

    /// Restricts the created user's credentials to one SCRAM mechanism.
    #[serde(default)]
    pub user_mechanism: Option<String>,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            uri: default_uri(),
            user: default_user(),
            password: default_password(),
            db: default_db(),
            collection: default_collection(),
            auth_mechanism: default_auth_mechanism(),
            user_mechanism: None,
        }
    }
}

fn default_uri() -> String {
    "mongodb://localhost:27017".to_string()
}

fn default_user() -> String {
    "user".to_string()
}

fn default_password() -> String {
    "password".to_string()
}

fn default_db() -> String {
    "db".to_string()
}

fn default_collection() -> String {
    DEFAULT_COLLECTION.to_string()
}

fn default_auth_mechanism() -> String {
    "SCRAM-SHA-256".to_string()
}

fn mask_secret<S>(_: &str, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str("***")
}
