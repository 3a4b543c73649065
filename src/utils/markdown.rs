//! Markdown rendering for pitch bodies.

use pulldown_cmark::{Event, Options, Parser, html};

/// Renders markdown to HTML.
///
/// Raw HTML blocks and inline HTML in the source are emitted as escaped text,
/// so the result is safe to embed in a page.
pub fn render(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
