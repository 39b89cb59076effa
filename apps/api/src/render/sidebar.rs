// Sidebar layout: fixed profile column with navigation, one section shown at a time.

use std::fmt::Write as _;

use super::fragments;
use super::html::escape;
use super::icons::Icon;
use super::{PortfolioView, Section};
use crate::models::ProfileRecord;

/// Sections offered in the navigation. Education is dropped when empty.
fn available_sections(record: &ProfileRecord) -> impl Iterator<Item = Section> + '_ {
    Section::ALL
        .into_iter()
        .filter(move |s| *s != Section::Education || !record.education.is_empty())
}

fn active_section(view: &PortfolioView<'_>) -> Section {
    if available_sections(view.record).any(|s| s == view.section) {
        view.section
    } else {
        Section::About
    }
}

fn nav(view: &PortfolioView<'_>, active: Section) -> String {
    let mut html = String::from("<nav>");
    for section in available_sections(view.record) {
        let class = if section == active { " class=\"active\"" } else { "" };
        let _ = write!(
            html,
            "<a{class} href=\"{}\">{} <span>{}</span></a>",
            escape(&view.layout.url(view.id, section)),
            section.icon().html(),
            section.label()
        );
    }
    html.push_str("</nav>");
    html
}

fn section_body(record: &ProfileRecord, section: Section) -> String {
    let mut html = String::new();
    match section {
        Section::About => {
            let _ = write!(
                html,
                "<h2>About Me</h2><div class=\"glass\"><p>{}</p></div>",
                escape(&record.summary)
            );
            if let Some(interests) = fragments::interests(record, "Interests & Hobbies") {
                html.push_str(&interests);
            }
        }
        Section::Experience => {
            html.push_str("<h2>Experience</h2>");
            for exp in &record.experience {
                html.push_str(&fragments::experience_card(exp));
            }
        }
        Section::Projects => {
            html.push_str("<h2>Projects</h2>");
            for project in &record.projects {
                html.push_str(&fragments::project_card(project));
            }
        }
        Section::Skills => {
            html.push_str("<h2>Technical Skills</h2><div class=\"grid-2\">");
            for category in &record.skill_categories {
                html.push_str(&fragments::skill_category(category));
            }
            html.push_str("</div>");
        }
        Section::Education => {
            html.push_str("<h2>Education</h2>");
            for edu in &record.education {
                html.push_str(&fragments::education_card(edu, Icon::GraduationCap));
            }
        }
    }
    html
}

pub fn render(view: &PortfolioView<'_>) -> String {
    let record = view.record;
    let active = active_section(view);
    let mut body = String::new();

    let _ = write!(
        body,
        "<aside class=\"sidebar glass-strong\">{}<h1>{}</h1><p class=\"title\">{}</p>{}{}\
         <a class=\"btn\" href=\"/portfolio/{}/export\" download>{} Download CV</a></aside>\n",
        fragments::avatar(view),
        escape(&record.name),
        escape(&record.title),
        fragments::contact_list(record),
        nav(view, active),
        escape(view.id),
        Icon::Download.html()
    );

    let _ = write!(
        body,
        "<main>{}<section class=\"section\" id=\"{}\">{}</section></main>\n",
        fragments::demo_banner(view),
        active.as_str(),
        section_body(record, active)
    );

    body.push_str(&fragments::photo_modal(view));
    body
}
