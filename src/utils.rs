/// Parse a text field as `f32`, keeping `fallback` for blank or invalid input.
pub fn parse_f32_input(value: &str, fallback: f32) -> f32 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return fallback;
    }
    trimmed
        .parse::<f32>()
        .ok()
        .filter(|parsed| parsed.is_finite())
        .unwrap_or(fallback)
}

pub fn parse_f64_input(value: &str, fallback: f64) -> f64 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return fallback;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
        .unwrap_or(fallback)
}

/// Display form of a local path or URL for an `img`/`audio` `src`.
pub fn media_src(url: &str) -> String {
    let url = url.trim();
    if url.contains("://") || url.starts_with("data:") {
        url.to_string()
    } else {
        format!("file://{}", url.replace('\\', "/"))
    }
}
