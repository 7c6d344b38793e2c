use larder_shopping::CategorizationService;
use larder_shopping::extraction::parse_free_text;

/// One `name → Category` line per name.
pub fn categorize(names: &[String]) -> Vec<String> {
    names
        .iter()
        .map(|name| format!("{name} → {}", CategorizationService::categorize(name)))
        .collect()
}

/// One `name | quantity | unit` line per parsed clause.
pub fn parse(text: &str) -> Vec<String> {
    parse_free_text(text)
        .into_iter()
        .map(|ingredient| {
            format!(
                "{} | {} | {}",
                ingredient.name,
                ingredient.quantity,
                ingredient.unit.as_deref().unwrap_or("-")
            )
        })
        .collect()
}
