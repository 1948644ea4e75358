//! Template generation for new entity files
//!
//! New entities are written through Tera templates rather than bare serde
//! output so the files carry a commented header for hand-editing. Whatever
//! the template emits must parse back into the entity type unchanged.

use rust_embed::Embed;
use tera::Tera;
use thiserror::Error;

use crate::entities::item::Item;
use crate::entities::workstream::Workstream;

#[derive(Embed)]
#[folder = "templates/"]
struct EmbeddedTemplates;

/// Errors that can occur during template generation
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Missing embedded template: {0}")]
    Missing(String),

    #[error("Embedded template is not valid UTF-8: {0}")]
    Encoding(String),

    #[error("Template rendering failed: {0}")]
    Render(#[from] tera::Error),
}

/// Renders entity YAML files from embedded templates
pub struct TemplateGenerator {
    tera: Tera,
}

impl TemplateGenerator {
    /// Load all embedded templates
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        for name in EmbeddedTemplates::iter() {
            let file = EmbeddedTemplates::get(&name)
                .ok_or_else(|| TemplateError::Missing(name.to_string()))?;
            let content = std::str::from_utf8(&file.data)
                .map_err(|_| TemplateError::Encoding(name.to_string()))?;
            tera.add_raw_template(&name, content)?;
        }
        Ok(Self { tera })
    }

    /// Render the YAML file for an item
    pub fn generate_item(&self, item: &Item) -> Result<String, TemplateError> {
        let mut ctx = tera::Context::new();
        ctx.insert("id", &item.id.to_string());
        ctx.insert("item_num", &item.item_num);
        ctx.insert("item_type", item.item_type.as_str());
        ctx.insert("title", &item.title);
        ctx.insert("description", &item.description);
        ctx.insert("workstream", &item.workstream.as_ref().map(|w| w.to_string()));
        ctx.insert("assigned_to", &item.assigned_to);
        ctx.insert("start_date", &item.start_date);
        ctx.insert("finish_date", &item.finish_date);
        ctx.insert("duration_days", &item.duration_days);
        ctx.insert("deadline", &item.deadline);
        ctx.insert("draft", &item.draft);
        ctx.insert("client_visible", &item.client_visible);
        ctx.insert("percent_complete", &item.percent_complete);
        ctx.insert("indicator", &item.indicator.map(|i| i.as_str()));
        ctx.insert("priority", &item.priority.map(|p| p.to_string()));
        ctx.insert("tags", &item.tags);
        ctx.insert("budget_amount", &item.budget_amount);
        ctx.insert("created", &item.created.to_rfc3339());
        ctx.insert("updated", &item.updated.map(|u| u.to_rfc3339()));
        ctx.insert("author", &item.author);

        Ok(self.tera.render("item.yaml.tera", &ctx)?)
    }

    /// Render the YAML file for a workstream
    pub fn generate_workstream(&self, ws: &Workstream) -> Result<String, TemplateError> {
        let mut ctx = tera::Context::new();
        ctx.insert("id", &ws.id.to_string());
        ctx.insert("name", &ws.name);
        ctx.insert("sort_order", &ws.sort_order);
        ctx.insert("created", &ws.created.to_rfc3339());
        ctx.insert("author", &ws.author);

        Ok(self.tera.render("workstream.yaml.tera", &ctx)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::indicator::Indicator;
    use crate::entities::item::ItemType;
    use chrono::NaiveDate;

    #[test]
    fn test_generated_item_parses_back() {
        let mut item = Item::new(
            ItemType::Risk,
            "Vendor slip".to_string(),
            "alice".to_string(),
        )
        .with_num(3);
        item.description = Some("Supplier may miss the Q3 window".to_string());
        item.start_date = NaiveDate::from_ymd_opt(2025, 6, 1);
        item.finish_date = NaiveDate::from_ymd_opt(2025, 7, 1);
        item.deadline = NaiveDate::from_ymd_opt(2025, 7, 15);
        item.percent_complete = 40;
        item.indicator = Some(Indicator::InProgress);
        item.tags = vec!["supplier".to_string(), "q3".to_string()];

        let generator = TemplateGenerator::new().unwrap();
        let yaml = generator.generate_item(&item).unwrap();
        let parsed: Item = serde_yml::from_str(&yaml).unwrap();

        assert_eq!(parsed.id, item.id);
        assert_eq!(parsed.item_num, 3);
        assert_eq!(parsed.item_type, ItemType::Risk);
        assert_eq!(parsed.title, item.title);
        assert_eq!(parsed.description, item.description);
        assert_eq!(parsed.start_date, item.start_date);
        assert_eq!(parsed.finish_date, item.finish_date);
        assert_eq!(parsed.deadline, item.deadline);
        assert_eq!(parsed.percent_complete, 40);
        assert_eq!(parsed.indicator, Some(Indicator::InProgress));
        assert_eq!(parsed.tags, item.tags);
        assert_eq!(parsed.author, "alice");
    }

    #[test]
    fn test_generated_minimal_item_parses_back() {
        let item = Item::new(
            ItemType::Decision,
            "Pick a database".to_string(),
            "bob".to_string(),
        )
        .with_num(1);

        let generator = TemplateGenerator::new().unwrap();
        let yaml = generator.generate_item(&item).unwrap();
        let parsed: Item = serde_yml::from_str(&yaml).unwrap();

        assert_eq!(parsed.item_type, ItemType::Decision);
        assert_eq!(parsed.indicator, None);
        assert!(!parsed.draft);
        assert!(parsed.client_visible);
    }

    #[test]
    fn test_generated_draft_item_keeps_draft_flag() {
        let mut item = Item::new(
            ItemType::Issue,
            "Half-formed thought".to_string(),
            "bob".to_string(),
        );
        item.draft = true;

        let generator = TemplateGenerator::new().unwrap();
        let yaml = generator.generate_item(&item).unwrap();
        let parsed: Item = serde_yml::from_str(&yaml).unwrap();
        assert!(parsed.draft);
    }

    #[test]
    fn test_generated_workstream_parses_back() {
        let ws = Workstream::new("Platform".to_string(), 1, "carol".to_string());

        let generator = TemplateGenerator::new().unwrap();
        let yaml = generator.generate_workstream(&ws).unwrap();
        let parsed: Workstream = serde_yml::from_str(&yaml).unwrap();

        assert_eq!(parsed.id, ws.id);
        assert_eq!(parsed.name, "Platform");
        assert_eq!(parsed.sort_order, 1);
    }
}
