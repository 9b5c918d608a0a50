use anyhow::anyhow;
use handlebars::Handlebars;
use rust_embed::RustEmbed;
use serde_json::json;

#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Assets;

const INDEX_TEMPLATE: &str = "index.html";

/// Handlebars registry holding the embedded landing page template.
pub struct IndexPage {
    registry: Handlebars<'static>,
}

impl IndexPage {
    pub fn new() -> anyhow::Result<Self> {
        let template = Assets::get(INDEX_TEMPLATE)
            .ok_or_else(|| anyhow!("Missing embedded template: {INDEX_TEMPLATE}"))?;
        let template = std::str::from_utf8(&template.data)
            .map_err(|err| anyhow!("Template {INDEX_TEMPLATE} is not UTF-8: {err}"))?;

        let mut registry = Handlebars::new();
        registry
            .register_template_string(INDEX_TEMPLATE, template)
            .map_err(|e| anyhow!(e))?;
        Ok(Self { registry })
    }

    /// An empty `qr_base64` still produces a usable page, just without the code.
    pub fn render(&self, qr_base64: &str, domain_url: &str) -> anyhow::Result<String> {
        self.registry
            .render(
                INDEX_TEMPLATE,
                &json!({ "qr_code": qr_base64, "domain_url": domain_url }),
            )
            .map_err(|e| anyhow!(e))
    }
}

pub fn render_index(qr_base64: &str, domain_url: &str) -> anyhow::Result<String> {
    IndexPage::new()?.render(qr_base64, domain_url)
}
