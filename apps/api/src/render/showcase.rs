// Showcase layout: hero split, alternating career timeline, project showcase,
// skills matrix, "Beyond Code" interests and education.

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
        "<section class=\"hero glass-strong\"><div>{}</div><div><h1>{}</h1>\
         <p class=\"title\">{}</p>{}</div></section>\n",
        fragments::avatar(view),
        escape(&record.name),
        escape(&record.title),
        fragments::contact_list(record)
    );

    let _ = write!(
        body,
        "<section class=\"section glass\" id=\"about\"><h2>About Me</h2><p>{}</p></section>\n",
        escape(&record.summary)
    );

    body.push_str("<section class=\"section\" id=\"experience\"><h2 class=\"center\">Career Journey</h2><div class=\"timeline\">\n");
    for (i, exp) in record.experience.iter().enumerate() {
        let side = if i % 2 == 0 { "left" } else { "right" };
        let _ = write!(
            body,
            "<div class=\"entry {side}\">{}</div>\n",
            fragments::experience_card(exp)
        );
    }
    body.push_str("</div></section>\n");

    body.push_str("<section class=\"section\" id=\"projects\"><h2 class=\"center\">Featured Projects</h2>\n");
    for project in &record.projects {
        body.push_str(&fragments::project_card(project));
    }
    body.push_str("</section>\n");

    body.push_str("<section class=\"section\" id=\"skills\"><h2 class=\"center\">Technical Expertise</h2><div class=\"grid-3\">\n");
    for category in &record.skill_categories {
        body.push_str(&fragments::skill_category(category));
    }
    body.push_str("</div></section>\n");

    if let Some(interests) = fragments::interests(record, "Beyond Code") {
        let _ = write!(body, "<section class=\"section center\" id=\"interests\">{interests}</section>\n");
    }

    if !record.education.is_empty() {
        body.push_str("<section class=\"section\" id=\"education\"><h2 class=\"center\">Education</h2>\n");
        for edu in &record.education {
            body.push_str(&fragments::education_card(edu, Icon::Award));
        }
        body.push_str("</section>\n");
    }

    body.push_str("</div>\n");
    body.push_str(&fragments::photo_modal(view));
    body
}
