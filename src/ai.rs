//! Generative-AI collaborator seam.
//!
//! The assistant is an opaque external service: model id and prompt in, text
//! or image bytes out. The core consumes only parsed results and treats a
//! malformed or absent response as "no change" - a flaky collaborator may
//! cost a feature for a moment but must never corrupt persisted state.

use crate::{
    entities::{Category, Product, Quotation},
    errors::Result,
};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashSet;
use tracing::debug;
use uuid::Uuid;

/// Text-in/text-or-image-out external collaborator.
#[async_trait]
pub trait Assistant: Send + Sync {
    /// Generates text for a prompt. Network and API failures surface as
    /// [`crate::errors::Error::Assistant`].
    async fn generate_text(&self, model: &str, prompt: &str) -> Result<String>;

    /// Synthesizes an image for a prompt.
    async fn generate_image(&self, model: &str, prompt: &str) -> Result<Vec<u8>>;
}

/// One accepted category suggestion for a catalog product.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategorySuggestion {
    /// The product the suggestion applies to.
    pub id: Uuid,
    /// Suggested category, already resolved against the closed enumeration.
    pub category: Category,
}

/// Builds the bulk-categorization prompt: candidate products plus the fixed
/// category enumeration, with the expected reply shape spelled out.
#[must_use]
pub fn category_prompt(products: &[Product]) -> String {
    let categories = Category::ALL
        .iter()
        .map(|c| c.label())
        .collect::<Vec<_>>()
        .join(", ");
    let mut prompt = format!(
        "You are categorizing an office furniture catalog. \
         The only valid categories are: {categories}.\n\
         For each product below, pick the best category.\n\
         Reply with only a JSON array of objects shaped like \
         {{\"id\": \"<id>\", \"suggestedCategory\": \"<category>\"}}.\n\nProducts:\n"
    );
    for product in products {
        prompt.push_str(&format!(
            "- id: {}, name: {}, description: {}\n",
            product.id,
            product.name,
            product.description.as_deref().unwrap_or("(none)")
        ));
    }
    prompt
}

#[derive(Deserialize)]
struct RawSuggestion {
    id: String,
    #[serde(rename = "suggestedCategory")]
    suggested_category: String,
}

/// Parses the assistant's categorization reply leniently.
///
/// Markdown code fences are stripped, the payload must be a JSON array, and
/// each entry is validated independently: an unparseable id, an unknown
/// category, or an id outside the candidate set drops that entry, never the
/// batch. Anything unparseable overall yields an empty list ("no change").
#[must_use]
pub fn parse_category_suggestions(raw: &str, candidates: &[Product]) -> Vec<CategorySuggestion> {
    let known: HashSet<Uuid> = candidates.iter().map(|p| p.id).collect();
    let Ok(entries) = serde_json::from_str::<Vec<RawSuggestion>>(strip_fences(raw)) else {
        debug!("assistant reply was not a JSON suggestion array, ignoring");
        return Vec::new();
    };
    entries
        .into_iter()
        .filter_map(|entry| {
            let id = Uuid::parse_str(entry.id.trim()).ok()?;
            if !known.contains(&id) {
                return None;
            }
            let category = Category::from_label(&entry.suggested_category)?;
            Some(CategorySuggestion { id, category })
        })
        .collect()
}

fn strip_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

/// Asks the assistant to categorize `products` and returns the accepted
/// suggestions. A malformed reply is an empty list, not an error; a transport
/// failure propagates so the caller can show a transient message.
pub async fn suggest_categories(
    assistant: &dyn Assistant,
    model: &str,
    products: &[Product],
) -> Result<Vec<CategorySuggestion>> {
    if products.is_empty() {
        return Ok(Vec::new());
    }
    let reply = assistant
        .generate_text(model, &category_prompt(products))
        .await?;
    Ok(parse_category_suggestions(&reply, products))
}

/// Asks the assistant to rewrite a product description. A blank reply means
/// "no change" (`None`).
pub async fn rewrite_description(
    assistant: &dyn Assistant,
    model: &str,
    product: &Product,
) -> Result<Option<String>> {
    let prompt = format!(
        "Rewrite this office-furniture product description to be concise and \
         persuasive, two sentences at most. Reply with only the description.\n\
         Product: {} ({})\nCurrent description: {}",
        product.name,
        product.category,
        product.description.as_deref().unwrap_or("(none)")
    );
    let reply = assistant.generate_text(model, &prompt).await?;
    let reply = reply.trim();
    if reply.is_empty() {
        Ok(None)
    } else {
        Ok(Some(reply.to_string()))
    }
}

/// Builds the prompt for synthesizing a product photo.
#[must_use]
pub fn image_prompt(product: &Product) -> String {
    format!(
        "Studio product photo of an office furniture item on a plain white \
         background: {} ({}). No people, no text.",
        product.name, product.category
    )
}

/// Builds the upsell-narrative prompt for a quotation.
#[must_use]
pub fn upsell_prompt(quote: &Quotation) -> String {
    let mut prompt = String::from(
        "Write one short, friendly paragraph suggesting complementary office \
         furniture for this quotation. Mention at most two suggestions.\nQuoted items:\n",
    );
    for item in &quote.items {
        prompt.push_str(&format!(
            "- {} x{} ({})\n",
            item.product.name, item.quantity, item.product.category
        ));
    }
    prompt
}
