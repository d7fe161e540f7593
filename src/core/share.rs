//! Shareable links and URL-safe slugs.

/// Builds `<base>?goal=<code>[&mix=<slug>]`.
///
/// Any query string or fragment already present on `base_url` is dropped.
/// Values are form-urlencoded.
#[must_use]
pub fn build_share_link(base_url: &str, goal_code: &str, mix_slug: Option<&str>) -> String {
    let base = base_url.split(['?', '#']).next().unwrap_or(base_url);

    let mut params = vec![("goal", goal_code)];
    if let Some(slug) = mix_slug {
        params.push(("mix", slug));
    }
    let query = serde_urlencoded::to_string(&params).unwrap_or_default();

    format!("{base}?{query}")
}

/// Lower-cases `text`, folds common French accents, and joins the remaining
/// alphanumeric runs with `-`.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for ch in text.chars().flat_map(char::to_lowercase).map(fold_accent) {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }
    slug
}

const fn fold_accent(ch: char) -> char {
    match ch {
        'à' | 'á' | 'â' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'î' | 'ï' => 'i',
        'ó' | 'ô' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        'ÿ' => 'y',
        other => other,
    }
}
