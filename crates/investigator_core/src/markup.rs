//! HTML for the result container.
//!
//! Every string that came from the user or the service is escaped before it
//! is interpolated.

use crate::{verdict_icon, InvestigationResult, Locale, SectionId, Sections, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub locale: Locale,
    pub collapsible: bool,
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn render_result(
    result: &InvestigationResult,
    sections: &Sections,
    options: &RenderOptions,
) -> String {
    let strings = options.locale.strings();

    let mut summary = format!("<p>{}</p>", escape_html(&result.event_summary));
    if let Some(real) = result.is_event_real {
        let line = if real {
            strings.event_real
        } else {
            strings.event_not_real
        };
        summary.push_str(&format!("<p class=\"event-reality\">{line}</p>"));
    }

    let key_points: String = result
        .key_points
        .iter()
        .map(|point| format!("<li class=\"key-point-item\">{}</li>", escape_html(point)))
        .collect();

    let sources: String = result
        .sources
        .iter()
        .map(|source| {
            format!(
                "<div class=\"source-item\"><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a><p>{}</p></div>",
                escape_html(&source.link),
                escape_html(&source.title),
                escape_html(&source.snippet)
            )
        })
        .collect();

    let body = [
        (SectionId::Summary, strings.summary_heading, summary),
        (
            SectionId::KeyPoints,
            strings.key_points_heading,
            format!("<ul class=\"key-points-list\">{key_points}</ul>"),
        ),
        (
            SectionId::Sources,
            strings.sources_heading,
            format!("<div class=\"sources-list\">{sources}</div>"),
        ),
    ]
    .into_iter()
    .map(|(section, heading, content)| {
        if options.collapsible {
            collapsible_section(section, heading, &content, sections.is_expanded(section))
        } else {
            flat_section(section, heading, &content)
        }
    })
    .collect::<String>();

    format!(
        "<div class=\"result-card {class}\"><div class=\"result-header\"><span class=\"verdict-icon\">{icon}</span><h2 class=\"verdict-title\">{label}: {verdict}</h2></div><div class=\"result-body\">{body}</div></div>",
        class = escape_html(&result.verdict.to_lowercase()),
        icon = verdict_icon(&result.verdict),
        label = strings.verdict_label,
        verdict = escape_html(&result.verdict),
    )
}

fn collapsible_section(section: SectionId, heading: &str, content: &str, expanded: bool) -> String {
    let target = section.content_id();
    let (glyph, content_class) = if expanded {
        ("▼", "collapsible-content")
    } else {
        ("►", "collapsible-content collapsed")
    };
    format!(
        "<section class=\"result-section\"><div class=\"collapsible-header\" tabindex=\"0\" role=\"button\" aria-expanded=\"{expanded}\" aria-controls=\"{target}\" data-target=\"{target}\"><h3>{heading}</h3><span class=\"collapse-icon\">{glyph}</span></div><div class=\"{content_class}\" id=\"{target}\">{content}</div></section>"
    )
}

fn flat_section(section: SectionId, heading: &str, content: &str) -> String {
    let class = match section {
        SectionId::Summary => "summary-section",
        SectionId::KeyPoints => "points-section",
        SectionId::Sources => "sources-section",
    };
    format!("<div class=\"result-section {class}\"><h4>{heading}</h4>{content}</div>")
}

pub fn render_error(detail: &str, locale: Locale) -> String {
    let strings = locale.strings();
    format!(
        "<div class=\"result-card error\"><div class=\"result-header\"><span class=\"verdict-icon\">❌</span><h2 class=\"verdict-title\">{title}</h2></div><div class=\"result-body\"><p>{body}</p><p class=\"error-details\">{label}: {detail}</p></div></div>",
        title = strings.error_title,
        body = strings.error_body,
        label = strings.details_label,
        detail = escape_html(detail),
    )
}

/// Standalone document wrapping the result container.
pub fn render_page(result_markup: &str, theme: Theme, locale: Locale) -> String {
    let strings = locale.strings();
    format!(
        "<!DOCTYPE html>\n<html lang=\"{lang}\" data-theme=\"{theme}\">\n<head>\n<meta charset=\"UTF-8\">\n<title>{title}</title>\n</head>\n<body>\n<main id=\"result-container\" aria-live=\"polite\">{result_markup}</main>\n</body>\n</html>\n",
        lang = strings.html_lang,
        title = strings.page_title,
    )
}
