use anyhow::{Context as _, Result};
use tera::Context;

use crate::provision::ProvisionPlan;
use crate::types::READ_WRITE_ROLE;
use crate::utils::get_script;

/// Renders the plan as mongo shell commands, for images that run init
/// scripts themselves instead of letting mongoseed connect.
pub fn render_init_script(plan: &ProvisionPlan) -> Result<String> {
    let seed = serde_json::to_string_pretty(&plan.seed).context("Failed to serialize seed")?;

    let mut ctx = Context::new();
    ctx.insert("user", &plan.user.name);
    ctx.insert("password", &plan.user.password);
    ctx.insert("db", &plan.user.db);
    ctx.insert("role", READ_WRITE_ROLE);
    ctx.insert("mechanism", &plan.user.mechanism);
    ctx.insert("collection", &plan.collection);
    ctx.insert("seed", &seed);

    get_script("init_mongo.js.jinja", &ctx).context("Failed to render init script")
}
