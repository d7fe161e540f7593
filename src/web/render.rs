//! HTML rendering of the recommendation page.
//!
//! The page is small enough to be assembled by hand. Every piece of dynamic
//! text goes through [`escape_html`].

use crate::{
    core::{recommendation::MixRecommendation, share::build_share_link, warning::WarningLevel},
    entities::health_goal,
};

const TITLE: &str = "UTC–Uvira | Santé & Bien-être";

const DISCLAIMER: &str = "<strong>Informations éducatives et préventives, sans se substituer à un avis médical.</strong> \
Les conseils en santé naturelle sont nombreux sur les réseaux sociaux, mais souvent dispersés.";

const STYLE: &str = "body{font-family:sans-serif;max-width:46rem;margin:2rem auto;padding:0 1rem;color:#222}\
.disclaimer{background:#eef4fb;padding:.75rem;border-radius:.5rem}\
.notice{background:#f3f3f3;padding:.75rem;border-radius:.5rem}\
.mix{border:1px solid #ddd;border-radius:.5rem;padding:1rem;margin:1rem 0}\
.prep{color:#666;font-style:italic}\
.warning{padding:.4rem .6rem;border-radius:.3rem;margin:.3rem 0;list-style:none}\
.warning-alerte{background:#fde2e1}.warning-prudence{background:#fff4d6}.warning-info{background:#eef4fb}";

/// Everything the page template needs
#[derive(Debug)]
pub struct PageView<'a> {
    /// All goals, in display order
    pub goals: &'a [health_goal::Model],
    /// Goal currently shown, `None` only when there are no goals
    pub selected: Option<&'a health_goal::Model>,
    /// Recommendations for the selected goal
    pub recommendations: &'a [MixRecommendation],
    /// Base URL for shareable links
    pub base_url: &'a str,
    /// Mix slug received in the query string
    pub shared_mix: Option<&'a str>,
}

/// Escapes text for use in HTML content and double-quoted attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Renders the full page.
#[must_use]
pub fn render_page(view: &PageView<'_>) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html>\n<html lang=\"fr\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(TITLE)));
    html.push_str(&format!("<style>{STYLE}</style>\n</head>\n<body>\n<main>\n"));
    html.push_str(&format!("<h1>🥤 {}</h1>\n", escape_html(TITLE)));
    html.push_str(&format!("<p class=\"disclaimer\">ℹ️ {DISCLAIMER}</p>\n"));

    match view.selected {
        None => {
            html.push_str("<p class=\"notice\">Aucune donnée disponible pour le moment.</p>\n");
        }
        Some(goal) => {
            html.push_str(&render_goal_form(view.goals, goal));
            html.push_str(&format!(
                "<h2>Recommandations : {}</h2>\n",
                escape_html(&goal.name)
            ));

            if view.recommendations.is_empty() {
                html.push_str(
                    "<p class=\"notice\">Aucune recommandation disponible pour cet objectif pour le moment.</p>\n",
                );
            }
            for recommendation in view.recommendations {
                html.push_str(&render_mix(recommendation, view.base_url, &goal.code));
            }

            let link = build_share_link(view.base_url, &goal.code, view.shared_mix);
            html.push_str(&format!(
                "<p class=\"share-current\">Partager cette sélection : <a href=\"{0}\">{0}</a></p>\n",
                escape_html(&link)
            ));
        }
    }

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn render_goal_form(goals: &[health_goal::Model], selected: &health_goal::Model) -> String {
    let mut form = String::from(
        "<form method=\"get\" action=\"\">\n<label for=\"goal\">Indiquez votre objectif santé :</label>\n<select id=\"goal\" name=\"goal\">\n",
    );
    for goal in goals {
        let marker = if goal.code == selected.code { " selected" } else { "" };
        form.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>\n",
            escape_html(&goal.code),
            marker,
            escape_html(&goal.name)
        ));
    }
    form.push_str("</select>\n<button type=\"submit\">Voir</button>\n</form>\n");
    form
}

fn render_mix(mix: &MixRecommendation, base_url: &str, goal_code: &str) -> String {
    let mut card = format!(
        "<article class=\"mix\" id=\"{}\">\n<h3>{}</h3>\n<p class=\"prep\">{}</p>\n",
        escape_html(&mix.share_slug),
        escape_html(&mix.name),
        escape_html(&mix.prep_type)
    );

    if !mix.description.trim().is_empty() {
        let lines: Vec<String> = mix.description.lines().map(escape_html).collect();
        card.push_str(&format!("<p>{}</p>\n", lines.join("<br>")));
    }

    if !mix.ingredients.is_empty() {
        let names: Vec<String> = mix.ingredients.iter().map(|i| escape_html(i)).collect();
        card.push_str(&format!(
            "<h4>Ingrédients</h4>\n<p>{}</p>\n",
            names.join(", ")
        ));
    }

    if !mix.warnings.is_empty() {
        card.push_str("<ul class=\"warnings\">\n");
        for warning in &mix.warnings {
            let class = match warning.level {
                WarningLevel::Alerte => "alerte",
                WarningLevel::Prudence => "prudence",
                WarningLevel::Other(_) => "info",
            };
            card.push_str(&format!(
                "<li class=\"warning warning-{}\"><strong>{}</strong> {}</li>\n",
                class,
                escape_html(warning.level.as_str()),
                escape_html(&warning.message)
            ));
        }
        card.push_str("</ul>\n");
    }

    let link = build_share_link(base_url, goal_code, Some(&mix.share_slug));
    card.push_str(&format!(
        "<a class=\"share\" href=\"{}\">Lien à partager</a>\n</article>\n",
        escape_html(&link)
    ));
    card
}
