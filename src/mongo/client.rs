use std::str::FromStr;

use anyhow::{Context as _, Result, anyhow};
use mongodb::{
    Client, Database,
    bson::{self, Document, doc},
    options::{AuthMechanism, ClientOptions},
};
use serde::Deserialize;
use tracing::debug;

use crate::provision::ProvisionTarget;
use crate::types::{RoleGrant, SeedDocument, UserSpec};
use crate::utils::redact_uri;

#[derive(Debug, Deserialize)]
struct UsersInfoReply {
    #[serde(default)]
    users: Vec<UserInfo>,
}

#[derive(Debug, Deserialize)]
struct UserInfo {
    #[serde(default)]
    roles: Vec<RoleGrant>,
}

fn create_user_command(user: &UserSpec) -> Document {
    let roles: Vec<Document> = user
        .roles
        .iter()
        .map(|r| doc! { "role": r.role.as_str(), "db": r.db.as_str() })
        .collect();

    let mut cmd = doc! {
        "createUser": user.name.as_str(),
        "pwd": user.password.as_str(),
        "roles": roles,
    };
    if let Some(mechanism) = &user.mechanism {
        cmd.insert("mechanisms", vec![mechanism.as_str()]);
    }
    cmd
}

/// Fills in the mechanism for URI credentials that do not name one.
fn apply_auth_mechanism(options: &mut ClientOptions, mechanism: &str) -> Result<()> {
    let Some(credential) = options.credential.as_mut() else {
        return Ok(());
    };
    if credential.mechanism.is_some()
        || mechanism.is_empty()
        || mechanism.eq_ignore_ascii_case("DEFAULT")
    {
        return Ok(());
    }

    let mechanism = AuthMechanism::from_str(mechanism)
        .context(format!("Unsupported auth mechanism '{}'", mechanism))?;
    credential.mechanism = Some(mechanism);
    Ok(())
}

/// A MongoDB connection scoped to the database being provisioned.
pub struct MongoClient {
    client: Client,
    db: Database,
}

impl MongoClient {
    pub async fn connect(uri: &str, auth_mechanism: &str, database: &str) -> Result<Self> {
        let mut options = ClientOptions::parse(uri).await.context(format!(
            "Invalid MongoDB connection string '{}'",
            redact_uri(uri)
        ))?;
        apply_auth_mechanism(&mut options, auth_mechanism)?;

        let client = Client::with_options(options).context(format!(
            "Failed to connect to MongoDB at '{}'",
            redact_uri(uri)
        ))?;
        let db = client.database(database);
        Ok(Self { client, db })
    }

    /// Closes every pooled connection. Call on all paths once done.
    pub async fn close(self) {
        self.client.shutdown().await;
    }

    /// Drops the database together with the users defined on it, which
    /// `dropDatabase` alone leaves behind.
    pub async fn drop_database(&self) -> Result<()> {
        self.db
            .run_command(doc! { "dropAllUsersFromDatabase": 1 })
            .await
            .context(format!("Failed to drop users of '{}'", self.db.name()))?;
        self.db
            .drop()
            .await
            .context(format!("Failed to drop database '{}'", self.db.name()))
    }
}

impl ProvisionTarget for MongoClient {
    async fn ping(&self) -> Result<()> {
        self.db
            .run_command(doc! { "ping": 1 })
            .await
            .context("Failed to ping MongoDB")?;
        Ok(())
    }

    async fn create_user(&self, user: &UserSpec) -> Result<()> {
        debug!(?user, "createUser");
        self.db.run_command(create_user_command(user)).await?;
        Ok(())
    }

    async fn create_collection(&self, name: &str) -> Result<()> {
        debug!(collection = name, "createCollection");
        self.db.create_collection(name).await?;
        Ok(())
    }

    async fn insert_seed(&self, collection: &str, seed: &SeedDocument) -> Result<String> {
        let res = self
            .db
            .collection::<SeedDocument>(collection)
            .insert_one(seed)
            .await?;

        Ok(match res.inserted_id.as_object_id() {
            Some(oid) => oid.to_hex(),
            None => res.inserted_id.to_string(),
        })
    }

    async fn user_roles(&self, username: &str) -> Result<Option<Vec<RoleGrant>>> {
        let reply = self
            .db
            .run_command(doc! { "usersInfo": username })
            .await
            .context(format!("Failed to look up user '{}'", username))?;

        let reply: UsersInfoReply =
            bson::from_document(reply).context("Unexpected usersInfo reply")?;

        match reply.users.len() {
            0 => Ok(None),
            1 => Ok(reply.users.into_iter().next().map(|u| u.roles)),
            n => Err(anyhow!("usersInfo returned {} users for '{}'", n, username)),
        }
    }

    async fn collection_exists(&self, name: &str) -> Result<bool> {
        let names = self
            .db
            .list_collection_names()
            .filter(doc! { "name": name })
            .await
            .context("Failed to list collections")?;
        Ok(names.iter().any(|n| n == name))
    }

    async fn count_seed(&self, collection: &str, seed: &SeedDocument) -> Result<u64> {
        let filter = bson::to_document(seed).context("Failed to encode seed document")?;
        let count = self
            .db
            .collection::<Document>(collection)
            .count_documents(filter)
            .await
            .context(format!("Failed to count documents in '{}'", collection))?;
        Ok(count)
    }
}
