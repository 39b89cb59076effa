// Inline glyphs standing in for an icon font. Each icon renders as a span so
// the stylesheet can size it; the `aria-hidden` keeps screen readers on the label.

use crate::models::{InterestIcon, SkillIcon};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Mail,
    Phone,
    MapPin,
    Camera,
    ExternalLink,
    Github,
    Download,
    Award,
    User,
    Briefcase,
    GraduationCap,
    Alert,
    FileText,
    Skill(SkillIcon),
    Interest(InterestIcon),
}

impl Icon {
    fn glyph(self) -> &'static str {
        match self {
            Icon::Mail => "✉",
            Icon::Phone => "☎",
            Icon::MapPin => "📍",
            Icon::Camera => "📷",
            Icon::ExternalLink => "↗",
            Icon::Github => "⌥",
            Icon::Download => "⬇",
            Icon::Award => "🏆",
            Icon::User => "👤",
            Icon::Briefcase => "💼",
            Icon::GraduationCap => "🎓",
            Icon::Alert => "⚠",
            Icon::FileText => "📄",
            Icon::Skill(SkillIcon::Code) => "&lt;/&gt;",
            Icon::Skill(SkillIcon::Server) => "🖥",
            Icon::Skill(SkillIcon::Cloud) => "☁",
            Icon::Skill(SkillIcon::Database) => "🗄",
            Icon::Skill(SkillIcon::Design) => "🎨",
            Icon::Skill(SkillIcon::Tools) => "🔧",
            Icon::Interest(InterestIcon::Gamepad) => "🎮",
            Icon::Interest(InterestIcon::Music) => "🎵",
            Icon::Interest(InterestIcon::Coffee) => "☕",
        }
    }

    /// Stable class name, also used by tests to find which icon was chosen.
    pub fn name(self) -> &'static str {
        match self {
            Icon::Mail => "mail",
            Icon::Phone => "phone",
            Icon::MapPin => "map-pin",
            Icon::Camera => "camera",
            Icon::ExternalLink => "external-link",
            Icon::Github => "github",
            Icon::Download => "download",
            Icon::Award => "award",
            Icon::User => "user",
            Icon::Briefcase => "briefcase",
            Icon::GraduationCap => "graduation-cap",
            Icon::Alert => "alert",
            Icon::FileText => "file-text",
            Icon::Skill(SkillIcon::Code) => "code",
            Icon::Skill(SkillIcon::Server) => "server",
            Icon::Skill(SkillIcon::Cloud) => "cloud",
            Icon::Skill(SkillIcon::Database) => "database",
            Icon::Skill(SkillIcon::Design) => "design",
            Icon::Skill(SkillIcon::Tools) => "tools",
            Icon::Interest(InterestIcon::Gamepad) => "gamepad",
            Icon::Interest(InterestIcon::Music) => "music",
            Icon::Interest(InterestIcon::Coffee) => "coffee",
        }
    }

    pub fn html(self) -> String {
        format!(
            "<span class=\"icon icon-{}\" aria-hidden=\"true\">{}</span>",
            self.name(),
            self.glyph()
        )
    }
}
