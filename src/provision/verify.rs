use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use crate::errors::VerificationError;
use crate::provision::{ProvisionPlan, ProvisionTarget};
use crate::types::RoleGrant;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Check {
    pub name: String,
    pub passed: bool,
    pub detail: String,
}

impl Check {
    fn new(name: &str, passed: bool, detail: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            passed,
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct VerificationReport {
    pub checks: Vec<Check>,
}

impl VerificationReport {
    pub fn is_ok(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    pub fn failed(&self) -> Vec<&Check> {
        self.checks.iter().filter(|c| !c.passed).collect()
    }

    pub fn into_result(self) -> Result<Self, VerificationError> {
        let failed = self.failed();
        if failed.is_empty() {
            return Ok(self);
        }
        Err(VerificationError::ChecksFailed {
            failed: failed.len(),
            total: self.checks.len(),
            names: failed
                .iter()
                .map(|c| c.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}

fn format_roles(roles: &[RoleGrant]) -> String {
    if roles.is_empty() {
        return "no roles".to_string();
    }
    roles
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Read-only acceptance checks for a provisioned database.
pub async fn verify<T: ProvisionTarget>(
    target: &T,
    plan: &ProvisionPlan,
) -> Result<VerificationReport> {
    let mut report = VerificationReport::default();
    let expected = RoleGrant::read_write(plan.database());

    let user_check = match target.user_roles(&plan.user.name).await? {
        None => Check::new(
            "user",
            false,
            format!("user '{}' not found", plan.user.name),
        ),
        Some(roles) => Check::new(
            "user",
            roles.len() == 1 && roles[0] == expected,
            format!("expected {}, found {}", expected, format_roles(&roles)),
        ),
    };
    debug!(?user_check, "Checked user");
    report.checks.push(user_check);

    let exists = target.collection_exists(&plan.collection).await?;
    report.checks.push(Check::new(
        "collection",
        exists,
        if exists {
            format!("'{}' exists", plan.collection)
        } else {
            format!("'{}' not found", plan.collection)
        },
    ));

    let count = if exists {
        target.count_seed(&plan.collection, &plan.seed).await?
    } else {
        0
    };
    report.checks.push(Check::new(
        "seed",
        count >= 1,
        format!("{} matching document(s)", count),
    ));

    Ok(report)
}
