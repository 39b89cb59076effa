//! Minimal HTML building blocks: escaping and the document shell.

use std::fmt::Write as _;

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Only `http(s)` and `mailto:`/`tel:` targets are linked; anything else is dropped.
pub fn safe_href(url: &str) -> Option<String> {
    let lower = url.trim().to_ascii_lowercase();
    let allowed = ["https://", "http://", "mailto:", "tel:"]
        .iter()
        .any(|scheme| lower.starts_with(scheme));
    allowed.then(|| escape(url.trim()))
}

/// Photos must be inline image data; other URIs are never emitted into `src`.
pub fn safe_photo_src(photo: &str) -> Option<String> {
    photo
        .starts_with("data:image/")
        .then(|| escape(photo))
}

/// Wraps a body fragment in a complete document.
pub fn document(title: &str, body_class: &str, body: &str) -> String {
    let mut html = String::with_capacity(body.len() + STYLESHEET.len() + 256);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape(title));
    let _ = writeln!(html, "<style>{STYLESHEET}</style>");
    html.push_str("</head>\n");
    let _ = writeln!(html, "<body class=\"{}\">", escape(body_class));
    html.push_str(body);
    html.push_str("\n</body>\n</html>\n");
    html
}

const STYLESHEET: &str = r#"
:root { --bg1: #0f172a; --bg2: #312e81; --glass: rgba(255,255,255,.08); --line: rgba(255,255,255,.12); --text: #fff; --muted: rgba(255,255,255,.7); --primary: #8b5cf6; }
* { box-sizing: border-box; }
body { margin: 0; min-height: 100vh; color: var(--text); font-family: Inter, system-ui, sans-serif; background: linear-gradient(135deg, var(--bg1), var(--bg2)); }
a { color: inherit; }
.container { max-width: 72rem; margin: 0 auto; padding: 3rem 1.5rem; }
.glass { background: var(--glass); border: 1px solid var(--line); border-radius: 1rem; padding: 1.5rem; backdrop-filter: blur(12px); }
.glass-strong { background: rgba(255,255,255,.14); border: 1px solid var(--line); backdrop-filter: blur(16px); }
.muted { color: var(--muted); }
.tag { display: inline-block; padding: .25rem .75rem; margin: .2rem; border-radius: 999px; background: rgba(255,255,255,.1); font-size: .875rem; }
.btn { display: inline-block; padding: .6rem 1.2rem; border-radius: .6rem; background: rgba(255,255,255,.2); border: 0; color: #fff; text-decoration: none; cursor: pointer; font: inherit; }
.btn-outline { background: rgba(255,255,255,.08); border: 1px solid var(--line); }
.btn[disabled] { opacity: .5; cursor: not-allowed; }
.avatar { position: relative; display: inline-block; }
.avatar img, .avatar .placeholder { width: 8rem; height: 8rem; border-radius: 50%; object-fit: cover; border: 4px solid var(--line); display: flex; align-items: center; justify-content: center; background: rgba(255,255,255,.1); font-size: 2.5rem; }
.avatar .edit { position: absolute; right: -.4rem; bottom: -.4rem; width: 2.5rem; height: 2.5rem; border-radius: 50%; background: var(--primary); display: flex; align-items: center; justify-content: center; text-decoration: none; }
.contact { list-style: none; padding: 0; display: flex; flex-wrap: wrap; gap: 1.25rem; justify-content: center; color: var(--muted); }
.section { margin-bottom: 4rem; }
.card { margin-bottom: 1.5rem; }
.card-head { display: flex; justify-content: space-between; align-items: flex-start; gap: 1rem; }
.grid-2 { display: grid; grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr)); gap: 1.5rem; }
.grid-3 { display: grid; grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); gap: 1.5rem; }
.banner { padding: .75rem 1rem; border-radius: .75rem; background: rgba(250,204,21,.15); border: 1px solid rgba(250,204,21,.4); margin-bottom: 2rem; text-align: center; }
.layout-sidebar .sidebar { position: fixed; left: 0; top: 0; bottom: 0; width: 20rem; padding: 2rem; overflow-y: auto; text-align: center; }
.layout-sidebar .sidebar nav a { display: block; text-align: left; padding: .75rem 1rem; border-radius: .5rem; text-decoration: none; color: var(--muted); }
.layout-sidebar .sidebar nav a.active { background: rgba(255,255,255,.2); color: #fff; }
.layout-sidebar main { margin-left: 20rem; padding: 2rem; }
.layout-showcase .hero { display: grid; grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr)); gap: 3rem; align-items: center; padding: 3rem; border-radius: 1.5rem; margin-bottom: 4rem; }
.layout-showcase .hero .avatar img, .layout-showcase .hero .avatar .placeholder { width: 10rem; height: 10rem; border-radius: 1rem; }
.timeline { position: relative; }
.timeline::before { content: ""; position: absolute; left: 50%; top: 0; bottom: 0; width: 4px; background: rgba(255,255,255,.2); }
.timeline .entry { width: 50%; padding: 0 2rem 3rem; }
.timeline .entry.left { margin-right: auto; }
.timeline .entry.right { margin-left: auto; }
.center { text-align: center; }
.modal { position: fixed; inset: 0; background: rgba(0,0,0,.5); display: flex; align-items: center; justify-content: center; padding: 1rem; z-index: 50; }
.modal .dialog { max-width: 28rem; width: 100%; border-radius: 1rem; padding: 2rem; }
.actions { display: flex; gap: 1rem; margin-top: 1rem; }
.dropzone { border: 2px dashed rgba(255,255,255,.3); border-radius: 1rem; padding: 3rem; text-align: center; }
.spinner { width: 4rem; height: 4rem; margin: 0 auto 1.5rem; border: 4px solid rgba(255,255,255,.2); border-top-color: #fff; border-radius: 50%; animation: spin 1s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
"#;
