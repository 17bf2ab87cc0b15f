use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::{Result, anyhow, bail};
use mongoseed::{
    provision::ProvisionTarget,
    types::{RoleGrant, SeedDocument, UserSpec},
};

#[derive(Default)]
struct State {
    users: HashMap<String, UserSpec>,
    collections: HashMap<String, Vec<serde_json::Value>>,
    next_id: u64,
}

/// In-memory stand-in for a single MongoDB database. Reproduces the server
/// behaviour provisioning depends on: duplicate users and collections are
/// errors, empty credentials are rejected, inserts never deduplicate.
#[derive(Default)]
pub struct MemoryTarget {
    state: Mutex<State>,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drop_user(&self, name: &str) {
        self.state.lock().unwrap().users.remove(name);
    }

    pub fn user_count(&self) -> usize {
        self.state.lock().unwrap().users.len()
    }

    pub fn collection_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .state
            .lock()
            .unwrap()
            .collections
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }

    pub fn document_count(&self, collection: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .collections
            .get(collection)
            .map(|docs| docs.len())
            .unwrap_or(0)
    }
}

impl ProvisionTarget for MemoryTarget {
    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    async fn create_user(&self, user: &UserSpec) -> Result<()> {
        if user.name.is_empty() {
            bail!("BadValue: User document needs 'user' field to be non-empty");
        }
        if user.password.is_empty() {
            bail!("BadValue: Password cannot be empty");
        }
        if user.db.is_empty() || user.roles.iter().any(|r| r.db.is_empty()) {
            bail!("InvalidNamespace: Invalid database name: ''");
        }

        let mut state = self.state.lock().unwrap();
        if state.users.contains_key(&user.name) {
            bail!("Location51003: User \"{}@{}\" already exists", user.name, user.db);
        }
        state.users.insert(user.name.clone(), user.clone());
        Ok(())
    }

    async fn create_collection(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            bail!("InvalidNamespace: Invalid collection name: ''");
        }
        let mut state = self.state.lock().unwrap();
        if state.collections.contains_key(name) {
            bail!("NamespaceExists: Collection already exists. NS: {}", name);
        }
        state.collections.insert(name.to_string(), vec![]);
        Ok(())
    }

    async fn insert_seed(&self, collection: &str, seed: &SeedDocument) -> Result<String> {
        let doc = serde_json::to_value(seed)?;
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = format!("{:024x}", state.next_id);
        // Like MongoDB, inserting into a missing collection creates it.
        state
            .collections
            .entry(collection.to_string())
            .or_default()
            .push(doc);
        Ok(id)
    }

    async fn user_roles(&self, username: &str) -> Result<Option<Vec<RoleGrant>>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .users
            .get(username)
            .map(|u| u.roles.clone()))
    }

    async fn collection_exists(&self, name: &str) -> Result<bool> {
        Ok(self.state.lock().unwrap().collections.contains_key(name))
    }

    async fn count_seed(&self, collection: &str, seed: &SeedDocument) -> Result<u64> {
        let expected = serde_json::to_value(seed)?;
        let state = self.state.lock().unwrap();
        let docs = state
            .collections
            .get(collection)
            .ok_or_else(|| anyhow!("ns does not exist: {}", collection))?;
        Ok(docs.iter().filter(|d| **d == expected).count() as u64)
    }
}
