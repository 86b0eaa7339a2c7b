//! GitHub-flavored anchor/slug generation for index entries.

/// Markdown index entry linking to a heading.
pub fn render_toc_item(title: &str) -> String {
    format!("* [{}](#{})", title, slug(title))
}

/// GitHub heading anchor slug.
///
/// - lowercase
/// - keep alphanumerics, spaces and hyphens; drop everything else
/// - replace spaces with hyphens
pub fn slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == ' ' || c == '-' {
            slug.push(c);
        }
    }
    slug.replace(' ', "-")
}
