//! Portfolio rendering.
//!
//! Every layout is a pure function of a [`PortfolioView`]: same record in,
//! same HTML out. Nothing here touches the store or the request.

use std::fmt;
use std::str::FromStr;

use crate::models::ProfileRecord;
use crate::portfolio::RecordSource;

pub mod classic;
pub mod fragments;
pub mod html;
pub mod icons;
pub mod pages;
pub mod showcase;
pub mod sidebar;

use icons::Icon;

/// One of the interchangeable presentations of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Header plus stacked sections. Served at `/portfolio/:id`.
    Classic,
    /// Fixed profile sidebar, one section at a time. Served at `/design1/:id`.
    Sidebar,
    /// Hero split with a career timeline. Served at `/design2/:id`.
    Showcase,
}

impl Layout {
    pub const ALL: [Layout; 3] = [Layout::Classic, Layout::Sidebar, Layout::Showcase];

    pub fn slug(self) -> &'static str {
        match self {
            Layout::Classic => "classic",
            Layout::Sidebar => "sidebar",
            Layout::Showcase => "showcase",
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            Layout::Classic => "/portfolio",
            Layout::Sidebar => "/design1",
            Layout::Showcase => "/design2",
        }
    }

    pub fn path(self, id: &str) -> String {
        format!("{}/{}", self.prefix(), id)
    }

    /// Page URL including the state that survives a round trip (the sidebar's section).
    pub fn url(self, id: &str, section: Section) -> String {
        match self {
            Layout::Sidebar if section != Section::About => {
                format!("{}?section={}", self.path(id), section.as_str())
            }
            _ => self.path(id),
        }
    }

    /// Page URL with the photo modal open.
    pub fn edit_photo_url(self, id: &str, section: Section) -> String {
        let url = self.url(id, section);
        let sep = if url.contains('?') { '&' } else { '?' };
        format!("{url}{sep}photo=edit")
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layout::ALL
            .into_iter()
            .find(|l| l.slug() == s)
            .ok_or_else(|| format!("unknown layout '{s}'"))
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    About,
    Experience,
    Projects,
    Skills,
    Education,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Experience,
        Section::Projects,
        Section::Skills,
        Section::Education,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Education => "education",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Education => "Education",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Section::About => Icon::User,
            Section::Experience => Icon::Briefcase,
            Section::Projects => Icon::Skill(crate::models::SkillIcon::Code),
            Section::Skills => Icon::Skill(crate::models::SkillIcon::Server),
            Section::Education => Icon::GraduationCap,
        }
    }

    /// Missing or unknown values select `About`.
    pub fn from_query(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| format!("unknown section '{s}'"))
    }
}

/// Photo edit overlay: `Closed → Open` via the edit button, back on Cancel or Save.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PhotoModal {
    #[default]
    Closed,
    Open,
}

impl PhotoModal {
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("edit") => PhotoModal::Open,
            _ => PhotoModal::Closed,
        }
    }
}

/// Everything a layout needs to produce a page.
#[derive(Debug, Clone, Copy)]
pub struct PortfolioView<'a> {
    pub id: &'a str,
    pub record: &'a ProfileRecord,
    pub source: RecordSource,
    pub layout: Layout,
    pub section: Section,
    pub photo_modal: PhotoModal,
}

impl<'a> PortfolioView<'a> {
    pub fn new(id: &'a str, record: &'a ProfileRecord, source: RecordSource, layout: Layout) -> Self {
        Self {
            id,
            record,
            source,
            layout,
            section: Section::default(),
            photo_modal: PhotoModal::default(),
        }
    }

    pub fn with_section(self, section: Section) -> Self {
        Self { section, ..self }
    }

    pub fn with_photo_modal(self, photo_modal: PhotoModal) -> Self {
        Self {
            photo_modal,
            ..self
        }
    }

    /// Demo content is shown read-only.
    pub fn editable(&self) -> bool {
        self.source == RecordSource::Stored
    }

    pub fn self_url(&self) -> String {
        self.layout.url(self.id, self.section)
    }

    pub fn edit_photo_url(&self) -> String {
        self.layout.edit_photo_url(self.id, self.section)
    }
}

pub fn render_portfolio(view: &PortfolioView<'_>) -> String {
    let (class, body) = match view.layout {
        Layout::Classic => ("layout-classic", classic::render(view)),
        Layout::Sidebar => ("layout-sidebar", sidebar::render(view)),
        Layout::Showcase => ("layout-showcase", showcase::render(view)),
    };
    let title = format!("{} | {}", view.record.name, view.record.title);
    html::document(&title, class, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::demo_record;

    #[test]
    fn test_layout_paths() {
        assert_eq!(Layout::Classic.path("abc-1"), "/portfolio/abc-1");
        assert_eq!(Layout::Sidebar.path("abc-1"), "/design1/abc-1");
        assert_eq!(Layout::Showcase.path("abc-1"), "/design2/abc-1");
        assert_eq!("sidebar".parse::<Layout>(), Ok(Layout::Sidebar));
        assert!("grid".parse::<Layout>().is_err());
    }

    #[test]
    fn test_section_query_falls_back_to_about() {
        assert_eq!(Section::from_query(Some("skills")), Section::Skills);
        assert_eq!(Section::from_query(Some("hobbies")), Section::About);
        assert_eq!(Section::from_query(None), Section::About);
    }

    #[test]
    fn test_sidebar_url_keeps_section() {
        assert_eq!(Layout::Sidebar.url("x", Section::Skills), "/design1/x?section=skills");
        assert_eq!(Layout::Sidebar.url("x", Section::About), "/design1/x");
        assert_eq!(Layout::Classic.url("x", Section::Skills), "/portfolio/x");
    }

    #[test]
    fn test_edit_photo_url_appends_query() {
        let record = demo_record();
        let view = PortfolioView::new("x", &record, RecordSource::Stored, Layout::Sidebar)
            .with_section(Section::Projects);
        assert_eq!(view.edit_photo_url(), "/design1/x?section=projects&photo=edit");

        let view = PortfolioView::new("x", &record, RecordSource::Stored, Layout::Showcase);
        assert_eq!(view.edit_photo_url(), "/design2/x?photo=edit");
    }

    #[test]
    fn test_every_layout_renders_the_same_record() {
        let record = demo_record();
        for layout in Layout::ALL {
            let view = PortfolioView::new("demo", &record, RecordSource::Stored, layout);
            let html = render_portfolio(&view);
            assert!(html.contains("Alex Johnson"), "{layout} missing name");
            assert!(html.contains("Full Stack Developer"), "{layout} missing title");
            assert!(html.contains(&format!("layout-{layout}")));
        }
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let record = demo_record();
        let view = PortfolioView::new("demo", &record, RecordSource::Stored, Layout::Showcase);
        assert_eq!(render_portfolio(&view), render_portfolio(&view));
    }
}
