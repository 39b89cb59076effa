//! Transient pages: intake, processing and error.

use std::fmt::Write as _;

use super::html::{document, escape};
use super::icons::Icon;
use crate::models::DEMO_PORTFOLIO_ID;

const FEATURES: [(&str, &str); 3] = [
    (
        "AI-Powered Extraction",
        "Advanced AI analyzes your resume and extracts key information automatically",
    ),
    (
        "Beautiful Design",
        "Transform your data into a stunning, modern portfolio with glassmorphism effects",
    ),
    (
        "Instant Generation",
        "Get your professional portfolio ready in seconds, not hours",
    ),
];

/// Landing page with the upload form. While a generation is in flight the
/// Processing state replaces the form.
pub fn render_intake_page(busy: bool, max_upload_bytes: usize) -> String {
    if busy {
        return render_processing_page();
    }

    let mut features = String::new();
    for (title, description) in FEATURES {
        let _ = write!(
            features,
            "<div class=\"glass center\"><h3>{title}</h3><p class=\"muted\">{description}</p></div>"
        );
    }

    let body = format!(
        r#"<div class="container center">
<h1>Turn Your Resume into a <span>Portfolio Instantly</span></h1>
<p class="muted">Upload your PDF resume and watch as our AI transforms it into a stunning, professional portfolio website in seconds.</p>
<div class="grid-3 section">{features}</div>
<form class="dropzone glass" method="post" action="/upload" enctype="multipart/form-data">
{icon}
<h3>Upload Your Resume</h3>
<p class="muted">Choose your PDF resume and generate your portfolio</p>
<input type="file" name="resume" accept=".pdf,application/pdf" required>
<div class="actions" style="justify-content:center"><button class="btn" type="submit">Generate My Portfolio</button></div>
<p class="muted">Supported format: PDF &bull; Max size: {max_mb}MB</p>
</form>
<div class="section">
<p class="muted">Want to see it in action? Try our demo portfolio</p>
<a class="btn btn-outline" href="/portfolio/{demo}">View Demo Portfolio</a>
</div>
</div>"#,
        icon = Icon::FileText.html(),
        max_mb = max_upload_bytes / (1024 * 1024),
        demo = DEMO_PORTFOLIO_ID,
    );
    document("Resumify | Resume to Portfolio", "intake", &body)
}

pub fn render_processing_page() -> String {
    let body = format!(
        r#"<div class="container center" role="status">
<div class="spinner"></div>
<h2>Creating Your Portfolio</h2>
<p class="muted">We're analyzing your resume and crafting a beautiful portfolio just for you. This usually takes a few moments.</p>
<p class="muted">{} Parsing resume content...</p>
<a class="btn btn-outline" href="/">Refresh</a>
</div>"#,
        Icon::FileText.html()
    );
    document("Creating Your Portfolio", "processing", &body)
}

/// Error state content. Each action is shown only when its target applies.
#[derive(Debug, Clone)]
pub struct ErrorPage {
    pub message: String,
    /// "Try Again" target.
    pub retry: Option<String>,
    pub upload_new: bool,
    pub go_home: bool,
}

impl Default for ErrorPage {
    fn default() -> Self {
        Self {
            message: "Something went wrong while processing your resume.".to_string(),
            retry: None,
            upload_new: true,
            go_home: true,
        }
    }
}

pub fn render_error_page(page: &ErrorPage) -> String {
    let mut actions = String::new();
    if let Some(retry) = &page.retry {
        let _ = write!(actions, "<a class=\"btn\" href=\"{}\">Try Again</a>", escape(retry));
    }
    if page.upload_new {
        actions.push_str("<a class=\"btn btn-outline\" href=\"/#upload\">Upload New Resume</a>");
    }
    if page.go_home {
        actions.push_str("<a class=\"btn btn-outline\" href=\"/\">Back to Home</a>");
    }

    let body = format!(
        r#"<div class="container center">
<div class="glass">
{icon}
<h2>Oops! Something Went Wrong</h2>
<p>{message}</p>
<div class="glass">
<p class="muted">This could be due to:</p>
<ul>
<li>Unsupported file format</li>
<li>Corrupted PDF file</li>
<li>Network connection issues</li>
<li>Server processing error</li>
</ul>
</div>
<div class="actions" style="flex-direction:column">{actions}</div>
</div>
</div>"#,
        icon = Icon::Alert.html(),
        message = escape(&page.message),
    );
    document("Something Went Wrong", "error", &body)
}
