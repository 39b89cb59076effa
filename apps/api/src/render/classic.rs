// Classic layout: header card followed by stacked sections.

use std::fmt::Write as _;

use super::fragments;
use super::html::escape;
use super::icons::Icon;
use super::PortfolioView;

pub fn render(view: &PortfolioView<'_>) -> String {
    let record = view.record;
    let mut body = String::from("<div class=\"container\">\n");
    body.push_str(&fragments::demo_banner(view));

    let _ = write!(
        body,
        "<header class=\"glass center section\" id=\"top\">{}<h1>{}</h1><p class=\"title\">{}</p>{}</header>\n",
        fragments::avatar(view),
        escape(&record.name),
        escape(&record.title),
        fragments::contact_list(record)
    );

    let _ = write!(
        body,
        "<section class=\"section\" id=\"about\"><h2>About Me</h2><div class=\"glass\"><p>{}</p></div></section>\n",
        escape(&record.summary)
    );

    body.push_str("<section class=\"section\" id=\"experience\"><h2>Experience</h2>\n");
    for exp in &record.experience {
        body.push_str(&fragments::experience_card(exp));
    }
    body.push_str("</section>\n");

    body.push_str("<section class=\"section\" id=\"projects\"><h2>Projects</h2><div class=\"grid-2\">\n");
    for project in &record.projects {
        body.push_str(&fragments::project_card(project));
    }
    body.push_str("</div></section>\n");

    body.push_str("<section class=\"section\" id=\"skills\"><h2>Skills</h2>\n");
    for category in &record.skill_categories {
        body.push_str(&fragments::skill_category(category));
    }
    if let Some(interests) = fragments::interests(record, "Interests") {
        body.push_str(&interests);
    }
    body.push_str("</section>\n");

    if !record.education.is_empty() {
        body.push_str("<section class=\"section\" id=\"education\"><h2>Education</h2>\n");
        for edu in &record.education {
            body.push_str(&fragments::education_card(edu, Icon::GraduationCap));
        }
        body.push_str("</section>\n");
    }

    body.push_str("</div>\n");
    body.push_str(&fragments::photo_modal(view));
    body
}
