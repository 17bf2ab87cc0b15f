use anyhow::{Context as _, Result, anyhow};
use rust_embed::{EmbeddedFile, RustEmbed};
use tera::{Context, Tera};

#[derive(RustEmbed)]
#[folder = "src/assets/env/"]
struct EnvFiles;

#[derive(RustEmbed)]
#[folder = "src/assets/scripts/"]
struct Scripts;

fn render(file: Option<EmbeddedFile>, template_name: &str, context: &Context) -> Result<String> {
    let file = file.ok_or_else(|| anyhow!("Failed to find template: {}", template_name))?;

    let template_str =
        std::str::from_utf8(file.data.as_ref()).context("Failed to parse template as UTF-8")?;

    Tera::default()
        .render_str(template_str, context)
        .context(format!("Failed to render template '{}'", template_name))
}

/// `.env` contents holding every setting at its default.
pub fn get_env_file_with_defaults(template_name: &str) -> Result<String> {
    render(EnvFiles::get(template_name), template_name, &Context::new())
}

pub fn get_script(template_name: &str, context: &Context) -> Result<String> {
    render(Scripts::get(template_name), template_name, context)
}
