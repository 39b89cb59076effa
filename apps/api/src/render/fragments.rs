//! Partials shared by the three layouts.

use std::fmt::Write as _;

use super::html::{escape, safe_href, safe_photo_src};
use super::icons::Icon;
use super::{PhotoModal, PortfolioView};
use crate::models::{Education, Experience, InterestIcon, ProfileRecord, Project, SkillCategory};
use crate::portfolio::RecordSource;

pub fn demo_banner(view: &PortfolioView<'_>) -> String {
    match view.source {
        RecordSource::Stored => String::new(),
        RecordSource::DemoFallback => format!(
            "<div class=\"banner\" role=\"status\">No portfolio is stored under <code>{}</code>. \
             You are viewing demo content. <a href=\"/\">Upload your resume</a></div>\n",
            escape(view.id)
        ),
    }
}

/// Email, phone and location, each only when present.
pub fn contact_list(record: &ProfileRecord) -> String {
    let mut items = String::new();
    if let Some(email) = &record.email {
        let _ = write!(
            items,
            "<li>{} <a href=\"mailto:{}\">{}</a></li>",
            Icon::Mail.html(),
            escape(email),
            escape(email)
        );
    }
    if let Some(phone) = &record.phone {
        let _ = write!(items, "<li>{} {}</li>", Icon::Phone.html(), escape(phone));
    }
    if let Some(location) = &record.location {
        let _ = write!(items, "<li>{} {}</li>", Icon::MapPin.html(), escape(location));
    }
    if items.is_empty() {
        return items;
    }
    format!("<ul class=\"contact\">{items}</ul>\n")
}

/// Photo or placeholder icon, with the edit button on stored records.
pub fn avatar(view: &PortfolioView<'_>) -> String {
    let record = view.record;
    let mut html = String::from("<div class=\"avatar\">");
    match record.photo.as_deref().and_then(safe_photo_src) {
        Some(src) => {
            let _ = write!(html, "<img src=\"{src}\" alt=\"{}\">", escape(&record.name));
        }
        None => {
            let _ = write!(html, "<div class=\"placeholder\">{}</div>", Icon::Camera.html());
        }
    }
    if view.editable() {
        let _ = write!(
            html,
            "<a class=\"edit\" href=\"{}\" title=\"Update Profile Photo\">{}</a>",
            escape(&view.edit_photo_url()),
            Icon::Camera.html()
        );
    }
    html.push_str("</div>\n");
    html
}

/// The photo overlay. Empty unless opened on an editable record.
pub fn photo_modal(view: &PortfolioView<'_>) -> String {
    if view.photo_modal != PhotoModal::Open || !view.editable() {
        return String::new();
    }
    format!(
        r#"<div class="modal" role="dialog" aria-modal="true">
<div class="dialog glass-strong">
<h3>Update Profile Photo</h3>
<form method="post" action="/portfolio/{id}/photo" enctype="multipart/form-data">
<input type="hidden" name="layout" value="{layout}">
<input type="hidden" name="section" value="{section}">
<input type="file" name="photo" accept="image/*" required>
<div class="actions">
<a class="btn btn-outline" href="{cancel}">Cancel</a>
<button class="btn" type="submit">Save</button>
</div>
</form>
</div>
</div>
"#,
        id = escape(view.id),
        layout = view.layout.slug(),
        section = view.section.as_str(),
        cancel = escape(&view.self_url()),
    )
}

pub fn tags<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    let mut html = String::new();
    for item in items {
        let _ = write!(html, "<span class=\"tag\">{}</span>", escape(item));
    }
    html
}

pub fn date_range(exp: &Experience) -> String {
    format!("{} - {}", escape(&exp.start_date), escape(&exp.end_date))
}

pub fn experience_card(exp: &Experience) -> String {
    format!(
        "<article class=\"glass card\"><div class=\"card-head\"><div><h3>{}</h3>\
         <p class=\"company\">{}</p></div><span class=\"muted\">{}</span></div>\
         <p class=\"muted\">{}</p></article>\n",
        escape(&exp.role),
        escape(&exp.company),
        date_range(exp),
        escape(&exp.description)
    )
}

/// "Live Demo" and "Code" links, each only when present and linkable.
pub fn project_links(project: &Project) -> String {
    let mut html = String::new();
    if let Some(href) = project.demo.as_deref().and_then(safe_href) {
        let _ = write!(
            html,
            "<a class=\"btn btn-outline\" href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\">{} Live Demo</a>",
            Icon::ExternalLink.html()
        );
    }
    if let Some(href) = project.github.as_deref().and_then(safe_href) {
        let _ = write!(
            html,
            "<a class=\"btn btn-outline\" href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\">{} Code</a>",
            Icon::Github.html()
        );
    }
    if html.is_empty() {
        return html;
    }
    format!("<div class=\"actions\">{html}</div>")
}

pub fn project_card(project: &Project) -> String {
    format!(
        "<article class=\"glass card project\"><h3>{}</h3><p class=\"muted\">{}</p>\
         <div class=\"tags\">{}</div>{}</article>\n",
        escape(&project.name),
        escape(&project.description),
        tags(project.technologies.iter().map(String::as_str)),
        project_links(project)
    )
}

/// Category heading with its icon. Unnamed categories get no heading.
pub fn skill_category(category: &SkillCategory) -> String {
    let heading = if category.name.is_empty() {
        String::new()
    } else {
        format!(
            "<h3>{} {}</h3>",
            Icon::Skill(category.icon).html(),
            escape(&category.name)
        )
    };
    format!(
        "<div class=\"glass card skills\">{heading}<div class=\"tags\">{}</div></div>\n",
        tags(category.skills.iter().map(String::as_str))
    )
}

/// Interests with their icons; `None` when the record has none.
pub fn interests(record: &ProfileRecord, heading: &str) -> Option<String> {
    if record.soft_skills.is_empty() {
        return None;
    }
    let mut items = String::new();
    for label in &record.soft_skills {
        let _ = write!(
            items,
            "<div class=\"glass card center interest\">{}<p>{}</p></div>",
            Icon::Interest(InterestIcon::for_label(label)).html(),
            escape(label)
        );
    }
    Some(format!(
        "<div class=\"interests\"><h3>{}</h3><div class=\"grid-3\">{items}</div></div>\n",
        escape(heading)
    ))
}

pub fn education_card(edu: &Education, icon: Icon) -> String {
    format!(
        "<article class=\"glass card\"><div class=\"card-head\"><div>{} <h3>{}</h3>\
         <p class=\"muted\">{}</p></div><span class=\"muted\">{}</span></div></article>\n",
        icon.html(),
        escape(&edu.degree),
        escape(&edu.institution),
        escape(&edu.year)
    )
}
