use crate::models::{EnrichedEntry, RunConfig};

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/css/bootstrap.min.css";
const BOOTSTRAP_JS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/js/bootstrap.bundle.min.js";

/// Escape text for use in HTML element content and quoted attribute values.
pub fn html_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// A rendered page and what went into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedPage {
    pub html: String,
    pub separators: usize,
    pub linked: usize,
    pub unlinked: usize,
}

impl RenderedPage {
    pub fn total_entries(&self) -> usize {
        self.separators + self.linked + self.unlinked
    }
}

/// Renders enriched entries as a Bootstrap list-group page.
pub struct HtmlRenderer<'a> {
    config: &'a RunConfig,
}

impl<'a> HtmlRenderer<'a> {
    pub fn new(config: &'a RunConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, entries: &[EnrichedEntry]) -> RenderedPage {
        let mut page = RenderedPage::default();
        let title = html_escape(&self.config.title());

        page.html.push_str(&self.header(&title));

        for item in entries {
            let line = self.render_item(item, &mut page);
            page.html.push_str(&line);
        }

        page.html.push_str(&format!(
            "    </ul>\n    <script src=\"{}\"></script>\n</body>\n</html>\n",
            BOOTSTRAP_JS
        ));

        page
    }

    fn header(&self, title: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link href="{css}" rel="stylesheet">
    <style>
        body {{ font-family: Arial, sans-serif; margin: 20px; }}
        .list-group {{ max-height: 750px; overflow-y: auto; border: 1px solid #ccc; padding: 10px; margin-top: 10px; }}
        .list-group-item {{ word-break: break-all; }}
        a {{ text-decoration: none; }}
    </style>
</head>
<body>
    <h1>{title}</h1>
    <ul id="archiveList" class="list-group">
"#,
            title = title,
            css = BOOTSTRAP_CSS
        )
    }

    fn render_item(&self, item: &EnrichedEntry, page: &mut RenderedPage) -> String {
        let entry = &item.entry;
        let name = html_escape(&entry.name);
        let marker = html_escape(&entry.marker_str());

        if entry.is_separator() {
            page.separators += 1;
            tracing::info!("Processed separator: {}", entry.name);
            return format!(
                "        <li class=\"list-group-item list-group-item-secondary\">&mdash; {}</li>\n",
                name
            );
        }

        match item.linkable_metadata() {
            Some(metadata) => {
                page.linked += 1;
                tracing::info!(
                    "Linked mod: {}, ModID={}, FileID={}",
                    entry.name,
                    metadata.mod_id,
                    metadata.file_id
                );
                format!(
                    "        <li class=\"list-group-item\">{} <a href=\"{}\">{}</a> {}</li>\n",
                    marker,
                    html_escape(&self.config.mod_page_url(&metadata.mod_id)),
                    name,
                    html_escape(&metadata.file_id)
                )
            }
            None => {
                page.unlinked += 1;
                tracing::info!("Unmatched mod: {}", entry.name);
                format!(
                    "        <li class=\"list-group-item\"><i>{} {}</i></li>\n",
                    marker, name
                )
            }
        }
    }
}
