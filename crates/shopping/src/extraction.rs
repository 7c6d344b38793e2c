use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::LazyLock;
use std::time::Duration;

/// Units recognised by the free-text fallback parser.
pub const UNITS: [&str; 7] = ["kg", "g", "lb", "ml", "l", "pcs", "unit"];

/// Wider unit vocabulary stripped from recipe lines that lead with a
/// quantity, e.g. "2 cups flour".
const LEADING_UNITS: &[&str] = &[
    "kg", "g", "lb", "lbs", "ml", "l", "pcs", "unit", "units", "cup", "cups", "tbsp", "tsp",
    "tablespoon", "tablespoons", "teaspoon", "teaspoons", "oz", "clove", "cloves", "pinch",
    "can", "cans", "slice", "slices", "of",
];

static RE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([a-z][a-z\s\-]*?)\s*(\d+(?:\.\d+)?)\s*(kg|g|lb|ml|l|pcs|unit)?$").unwrap()
});

/// One `(name, quantity, unit)` triple pulled out of free text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ParsedIngredient {
    pub name: String,
    #[serde(deserialize_with = "string_or_number")]
    pub quantity: String,
    #[serde(default)]
    pub unit: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(value) => value,
        Raw::Number(value) => value.to_string(),
    })
}

/// Regex fallback for free text like `"Flour 2 kg, Eggs 6\nMilk 1 l"`.
///
/// Clauses are split on commas and newlines. Clauses not shaped like
/// `name quantity [unit]` are dropped.
pub fn parse_free_text(text: &str) -> Vec<ParsedIngredient> {
    text.split([',', '\n'])
        .map(str::trim)
        .filter(|clause| !clause.is_empty())
        .filter_map(|clause| {
            let captures = RE_LINE.captures(clause)?;

            Some(ParsedIngredient {
                name: captures.get(1)?.as_str().trim().to_owned(),
                quantity: captures.get(2)?.as_str().to_owned(),
                unit: captures.get(3).map(|unit| unit.as_str().to_lowercase()),
            })
        })
        .collect()
}

/// Candidate ingredient name for a recipe line.
///
/// Lower-cased, first comma-delimited segment, everything from the first
/// digit onwards removed. Lines that start with a quantity ("2 cups flour")
/// keep the words after the leading quantity and unit instead.
pub fn candidate_name(line: &str) -> Option<String> {
    let segment = line.split(',').next()?.trim().to_lowercase();

    let head = match segment.find(|c: char| c.is_ascii_digit()) {
        Some(index) => segment[..index].trim(),
        None => segment.as_str(),
    };

    if !head.is_empty() {
        return Some(head.to_owned());
    }

    let rest = segment
        .split_whitespace()
        .skip_while(|token| {
            token.starts_with(|c: char| c.is_ascii_digit()) || LEADING_UNITS.contains(token)
        })
        .collect::<Vec<_>>()
        .join(" ");

    (!rest.is_empty()).then_some(rest)
}

/// First letter upper-cased, rest untouched.
pub fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Primary ingredient extraction capability, usually an AI service.
#[async_trait]
pub trait IngredientExtractor: Send + Sync {
    async fn extract(&self, text: &str) -> anyhow::Result<Vec<ParsedIngredient>>;
}

/// Used when no extraction service is configured.
pub struct NoExtractor;

#[async_trait]
impl IngredientExtractor for NoExtractor {
    async fn extract(&self, _text: &str) -> anyhow::Result<Vec<ParsedIngredient>> {
        anyhow::bail!("no extraction service configured")
    }
}

/// Posts `{"text": ...}` and expects `[{name, quantity, unit}]` back.
pub struct HttpExtractor {
    client: reqwest::Client,
    url: String,
}

impl HttpExtractor {
    pub fn new(url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl IngredientExtractor for HttpExtractor {
    async fn extract(&self, text: &str) -> anyhow::Result<Vec<ParsedIngredient>> {
        let ingredients = self
            .client
            .post(&self.url)
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<ParsedIngredient>>()
            .await?;

        Ok(ingredients)
    }
}

/// Try the extractor first; fall back to [`parse_free_text`] on failure or
/// an empty answer.
pub async fn extract_ingredients(
    extractor: &dyn IngredientExtractor,
    text: &str,
) -> Vec<ParsedIngredient> {
    match extractor.extract(text).await {
        Ok(ingredients) if !ingredients.is_empty() => ingredients,
        Ok(_) => {
            tracing::debug!("extraction service returned nothing, using text parser");
            parse_free_text(text)
        }
        Err(e) => {
            tracing::warn!(error = %e, "extraction service unavailable, using text parser");
            parse_free_text(text)
        }
    }
}
