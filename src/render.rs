//! Presentation of catalog data.
//!
//! `render_page` produces the single read-only HTML page; the text renderers
//! write terminal listings for the CLI. Both write into any `fmt::Write` sink
//! and never touch the catalog beyond reading it.

use crate::catalog::{
    Characteristic, Parameter, RecordKind, RecordRef, Scenario, TipSection, WeldCatalog,
    WeldingProcess,
};
use serde::Deserialize;
use std::fmt::{self, Write};

const PAGE_TITLE: &str = "Fronius Cheat Sheet";

const STYLE: &str = "body{font-family:system-ui,sans-serif;margin:0 auto;max-width:72rem;padding:1rem;color:#222}\
header{display:flex;flex-wrap:wrap;align-items:center;gap:1rem}\
section{margin-top:2rem}\
.cards{display:grid;grid-template-columns:repeat(auto-fill,minmax(20rem,1fr));gap:1rem}\
.card{border:1px solid #ddd;border-radius:6px;padding:0.75rem}\
.card h3{margin-top:0}\
.tag{display:inline-block;background:#eef;border-radius:3px;padding:0 0.4rem;margin:0 0.2rem 0.2rem 0;font-size:0.85em;text-decoration:none;color:#224}\
.primary{border-color:#c60}\
.muted{color:#666}\
table{border-collapse:collapse;width:100%}\
td,th{border-bottom:1px solid #eee;padding:0.3rem;text-align:left;vertical-align:top}";

/// Optional filters carried by the page URL (`/?q=...&tag=...`).
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
}

impl PageQuery {
    pub fn search(query: &str) -> Self {
        Self {
            q: Some(query.to_string()),
            tag: None,
        }
    }

    pub fn tagged(tag: &str) -> Self {
        Self {
            q: None,
            tag: Some(tag.to_string()),
        }
    }

    fn text(&self) -> Option<&str> {
        self.q.as_deref().filter(|q| !q.trim().is_empty())
    }

    fn tag_filter(&self) -> Option<&str> {
        self.tag.as_deref().filter(|t| !t.trim().is_empty())
    }
}

/// Escape text for HTML element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Minimal percent-encoding for tag links.
fn encode_query_value(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            b' ' => encoded.push('+'),
            other => {
                let _ = write!(encoded, "%{other:02X}");
            }
        }
    }
    encoded
}

/// Render the full page, with a results block when `query` filters anything.
pub fn render_page(catalog: &WeldCatalog, query: &PageQuery) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_page(catalog, query, &mut out);
    out
}

fn write_page(catalog: &WeldCatalog, query: &PageQuery, out: &mut impl Write) -> fmt::Result {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"en\">")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"utf-8\">")?;
    writeln!(
        out,
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">"
    )?;
    writeln!(out, "<title>{PAGE_TITLE}</title>")?;
    writeln!(
        out,
        "<link rel=\"stylesheet\" href=\"https://fonts.googleapis.com/icon?family=Material+Icons\">"
    )?;
    writeln!(out, "<style>{STYLE}</style>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;

    write_header(query, out)?;
    write_tag_cloud(catalog, out)?;
    write_results(catalog, query, out)?;

    writeln!(out, "<section id=\"processes\">")?;
    writeln!(out, "<h2>{}</h2>", RecordKind::Process.plural_label())?;
    writeln!(out, "<div class=\"cards\">")?;
    for process in &catalog.processes {
        write_process(process, out)?;
    }
    writeln!(out, "</div>")?;
    writeln!(out, "</section>")?;

    writeln!(out, "<section id=\"characteristics\">")?;
    writeln!(out, "<h2>{}</h2>", RecordKind::Characteristic.plural_label())?;
    writeln!(out, "<table>")?;
    writeln!(
        out,
        "<tr><th>Name</th><th>Processes</th><th>Description</th><th>Tags</th></tr>"
    )?;
    for characteristic in &catalog.characteristics {
        write_characteristic(characteristic, out)?;
    }
    writeln!(out, "</table>")?;
    writeln!(out, "</section>")?;

    writeln!(out, "<section id=\"scenarios\">")?;
    writeln!(out, "<h2>{}</h2>", RecordKind::Scenario.plural_label())?;
    writeln!(out, "<div class=\"cards\">")?;
    for scenario in &catalog.scenarios {
        write_scenario(scenario, out)?;
    }
    writeln!(out, "</div>")?;
    writeln!(out, "</section>")?;

    writeln!(out, "<section id=\"parameters\">")?;
    writeln!(out, "<h2>{}</h2>", RecordKind::Parameter.plural_label())?;
    writeln!(out, "<h3>Primary</h3>")?;
    writeln!(out, "<div class=\"cards\">")?;
    for parameter in catalog.primary_parameters() {
        write_parameter(parameter, out)?;
    }
    writeln!(out, "</div>")?;
    writeln!(out, "<h3>Secondary</h3>")?;
    writeln!(out, "<table>")?;
    writeln!(out, "<tr><th>Symbol</th><th>Name</th><th>Description</th></tr>")?;
    for parameter in catalog.secondary_parameters() {
        write_parameter(parameter, out)?;
    }
    writeln!(out, "</table>")?;
    writeln!(out, "</section>")?;

    writeln!(out, "<section id=\"tips\">")?;
    writeln!(out, "<h2>{}</h2>", RecordKind::TipSection.plural_label())?;
    for section in &catalog.tip_sections {
        write_tip_section(section, out)?;
    }
    writeln!(out, "</section>")?;

    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

fn write_header(query: &PageQuery, out: &mut impl Write) -> fmt::Result {
    writeln!(out, "<header>")?;
    writeln!(out, "<h1>{PAGE_TITLE}</h1>")?;
    writeln!(out, "<form method=\"get\" action=\"/\">")?;
    writeln!(
        out,
        "<input type=\"search\" name=\"q\" placeholder=\"Search processes, characteristics, tips\" value=\"{}\">",
        escape_html(query.text().unwrap_or_default())
    )?;
    writeln!(out, "<button type=\"submit\">Search</button>")?;
    writeln!(out, "</form>")?;
    writeln!(out, "</header>")
}

fn write_tag_cloud(catalog: &WeldCatalog, out: &mut impl Write) -> fmt::Result {
    writeln!(out, "<nav class=\"tag-cloud\">")?;
    for tag in catalog.tags() {
        write_tag_link(tag, out)?;
    }
    writeln!(out, "</nav>")
}

fn write_tag_link(tag: &str, out: &mut impl Write) -> fmt::Result {
    write!(
        out,
        "<a class=\"tag\" href=\"/?tag={}\">{}</a>",
        escape_html(&encode_query_value(tag)),
        escape_html(tag)
    )
}

fn write_results(catalog: &WeldCatalog, query: &PageQuery, out: &mut impl Write) -> fmt::Result {
    let (label, records): (String, Vec<RecordRef<'_>>) = match (query.text(), query.tag_filter()) {
        (Some(text), _) => (
            format!("Results for \u{201c}{}\u{201d}", escape_html(text)),
            catalog.search_text(text).collect(),
        ),
        (None, Some(tag)) => (
            format!("Tagged \u{201c}{}\u{201d}", escape_html(tag)),
            catalog.find_by_tag(tag).collect(),
        ),
        (None, None) => return Ok(()),
    };

    writeln!(out, "<section id=\"results\">")?;
    writeln!(out, "<h2>{label}</h2>")?;
    if records.is_empty() {
        writeln!(out, "<p class=\"muted\">No matching records.</p>")?;
    } else {
        writeln!(out, "<ul>")?;
        for record in records {
            writeln!(
                out,
                "<li><span class=\"muted\">{}</span> <strong>{}</strong>: {}</li>",
                record.kind(),
                escape_html(record.key()),
                escape_html(&summary(record))
            )?;
        }
        writeln!(out, "</ul>")?;
    }
    writeln!(out, "</section>")
}

fn write_list(items: &[String], out: &mut impl Write) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(out, "<ul>")?;
    for item in items {
        writeln!(out, "<li>{}</li>", escape_html(item))?;
    }
    writeln!(out, "</ul>")
}

fn write_process(process: &WeldingProcess, out: &mut impl Write) -> fmt::Result {
    writeln!(out, "<article class=\"card\">")?;
    writeln!(
        out,
        "<h3>{} <span class=\"muted\">{}</span></h3>",
        escape_html(&process.short_name),
        escape_html(&process.name)
    )?;
    writeln!(out, "<p>{}</p>", escape_html(&process.description))?;
    writeln!(out, "<p class=\"muted\">{}</p>", escape_html(&process.how_it_works))?;
    writeln!(out, "<h4>Best for</h4>")?;
    write_list(&process.best_for, out)?;
    writeln!(out, "<h4>Pros</h4>")?;
    write_list(&process.pros, out)?;
    writeln!(out, "<h4>Cons</h4>")?;
    write_list(&process.cons, out)?;
    writeln!(out, "</article>")
}

fn write_characteristic(characteristic: &Characteristic, out: &mut impl Write) -> fmt::Result {
    write!(
        out,
        "<tr><td><strong>{}</strong></td><td>{}</td><td>{}</td><td>",
        escape_html(&characteristic.name),
        escape_html(&characteristic.processes.join(", ")),
        escape_html(&characteristic.description)
    )?;
    for tag in &characteristic.tags {
        write_tag_link(tag, out)?;
    }
    writeln!(out, "</td></tr>")
}

fn write_scenario(scenario: &Scenario, out: &mut impl Write) -> fmt::Result {
    writeln!(out, "<article class=\"card\">")?;
    writeln!(out, "<h3>{}</h3>", escape_html(&scenario.situation))?;
    writeln!(
        out,
        "<p><strong>Process:</strong> {}<br><strong>Characteristic:</strong> {}</p>",
        escape_html(&scenario.recommended_process),
        escape_html(&scenario.recommended_characteristic)
    )?;
    writeln!(out, "<p class=\"muted\">{}</p>", escape_html(&scenario.notes))?;
    write_list(&scenario.tips, out)?;
    write!(out, "<p>")?;
    for tag in &scenario.tags {
        write_tag_link(tag, out)?;
    }
    writeln!(out, "</p>")?;
    writeln!(out, "</article>")
}

fn write_parameter(parameter: &Parameter, out: &mut impl Write) -> fmt::Result {
    if parameter.is_primary {
        writeln!(out, "<article class=\"card primary\">")?;
        writeln!(
            out,
            "<h3>{} <span class=\"muted\">{}</span></h3>",
            escape_html(&parameter.symbol),
            escape_html(&parameter.name)
        )?;
        writeln!(out, "<p>{}</p>", escape_html(&parameter.description))?;
        writeln!(out, "</article>")
    } else {
        writeln!(
            out,
            "<tr><td><strong>{}</strong></td><td>{}</td><td>{}</td></tr>",
            escape_html(&parameter.symbol),
            escape_html(&parameter.name),
            escape_html(&parameter.description)
        )
    }
}

fn write_tip_section(section: &TipSection, out: &mut impl Write) -> fmt::Result {
    writeln!(out, "<article class=\"card\">")?;
    writeln!(
        out,
        "<h3><span class=\"material-icons\">{}</span> {}</h3>",
        escape_html(&section.icon),
        escape_html(&section.title)
    )?;
    write_list(&section.tips, out)?;
    writeln!(out, "</article>")
}

/// One-line description used by result lists and text listings.
pub fn summary(record: RecordRef<'_>) -> String {
    match record {
        RecordRef::Process(process) => process.description.clone(),
        RecordRef::Characteristic(characteristic) => characteristic.description.clone(),
        RecordRef::Scenario(scenario) => format!(
            "{} / {}",
            scenario.recommended_process, scenario.recommended_characteristic
        ),
        RecordRef::Parameter(parameter) => parameter.name.clone(),
        RecordRef::TipSection(section) => format!("{} tips", section.tips.len()),
    }
}

/// Write one line per record: `kind  key  summary`.
pub fn render_listing<'a>(
    records: impl IntoIterator<Item = RecordRef<'a>>,
    writer: &mut impl Write,
) -> fmt::Result {
    let mut count = 0usize;
    for record in records {
        count += 1;
        writeln!(
            writer,
            "{:<15} {:<30} {}",
            record.kind().as_str(),
            record.key(),
            summary(record)
        )?;
    }
    if count == 0 {
        writeln!(writer, "no matching records")?;
    }
    Ok(())
}

/// Write every field of a single record.
pub fn render_record_text(record: RecordRef<'_>, writer: &mut impl Write) -> fmt::Result {
    match record {
        RecordRef::Process(process) => {
            writeln!(writer, "{} ({})", process.name, process.short_name)?;
            writeln!(writer, "  {}", process.description)?;
            writeln!(writer, "  how it works: {}", process.how_it_works)?;
            write_text_list(writer, "best for", &process.best_for)?;
            write_text_list(writer, "pros", &process.pros)?;
            write_text_list(writer, "cons", &process.cons)
        }
        RecordRef::Characteristic(characteristic) => {
            writeln!(writer, "{}", characteristic.name)?;
            writeln!(writer, "  {}", characteristic.description)?;
            writeln!(
                writer,
                "  processes: {}",
                join_or(&characteristic.processes, "none")
            )?;
            writeln!(writer, "  tags: {}", join_or(&characteristic.tags, "none"))
        }
        RecordRef::Scenario(scenario) => {
            writeln!(writer, "{}", scenario.situation)?;
            writeln!(writer, "  process       : {}", scenario.recommended_process)?;
            writeln!(
                writer,
                "  characteristic: {}",
                scenario.recommended_characteristic
            )?;
            writeln!(writer, "  notes         : {}", scenario.notes)?;
            writeln!(writer, "  tags          : {}", join_or(&scenario.tags, "none"))?;
            write_text_list(writer, "tips", &scenario.tips)
        }
        RecordRef::Parameter(parameter) => {
            let rank = if parameter.is_primary {
                "primary"
            } else {
                "secondary"
            };
            writeln!(writer, "{} - {} [{}]", parameter.symbol, parameter.name, rank)?;
            writeln!(writer, "  {}", parameter.description)
        }
        RecordRef::TipSection(section) => {
            writeln!(writer, "{} [{}]", section.title, section.icon)?;
            write_text_list(writer, "tips", &section.tips)
        }
    }
}

fn write_text_list(writer: &mut impl Write, label: &str, items: &[String]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(writer, "  {label}:")?;
    for item in items {
        writeln!(writer, "    - {item}")?;
    }
    Ok(())
}

fn join_or(items: &[String], fallback: &str) -> String {
    if items.is_empty() {
        fallback.to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn escape_html_covers_markup_characters() {
        assert_eq!(
            escape_html("3/4\" <stickout> & 'more'"),
            "3/4&quot; &lt;stickout&gt; &amp; &#39;more&#39;"
        );
    }

    #[test]
    fn tag_links_are_query_encoded() {
        assert_eq!(encode_query_value("open root"), "open+root");
        assert_eq!(encode_query_value("weld+"), "weld%2B");
        assert_eq!(encode_query_value("CC/CV"), "CC%2FCV");
    }

    #[test]
    fn page_contains_every_section_and_escapes_data() {
        let page = render_page(catalog::catalog(), &PageQuery::default());
        for id in ["processes", "characteristics", "scenarios", "parameters", "tips"] {
            assert!(page.contains(&format!("<section id=\"{id}\">")), "missing {id}");
        }
        for kind in RecordKind::ALL {
            assert!(page.contains(&format!("<h2>{}</h2>", kind.plural_label())));
        }
        assert!(!page.contains("<section id=\"results\">"));
        assert!(page.contains("3/4&quot; stickout is typical"));
        assert!(page.contains("Stainless - Fill &amp; Cap"));
        assert!(page.contains("<span class=\"material-icons\">waves</span>"));
        assert!(page.contains("LSC Advanced"));
    }

    #[test]
    fn page_lists_primary_parameters_before_secondary() {
        let page = render_page(catalog::catalog(), &PageQuery::default());
        let thickness = page.find("Material Thickness").unwrap();
        let dynamics = page.find("Dynamics / Arc Force").unwrap();
        let preflow = page.find("Gas Pre-flow").unwrap();
        assert!(thickness < dynamics && dynamics < preflow);
    }

    #[test]
    fn page_filters_pass_input_through_untrimmed() {
        let blank = render_page(catalog::catalog(), &PageQuery::tagged("   "));
        assert!(!blank.contains("<section id=\"results\">"));

        let padded = render_page(catalog::catalog(), &PageQuery::tagged(" stainless"));
        assert!(padded.contains("<section id=\"results\">"));
        assert!(padded.contains("No matching records."));
    }

    #[test]
    fn page_renders_search_results_first() {
        let page = render_page(catalog::catalog(), &PageQuery::search("sugaring"));
        let results = page.find("<section id=\"results\">").unwrap();
        let processes = page.find("<section id=\"processes\">").unwrap();
        assert!(results < processes);
        assert!(page.contains("value=\"sugaring\""));
        assert!(page.contains("<strong>Stainless - Avoiding Sugaring</strong>"));
    }

    #[test]
    fn page_reports_empty_tag_filter() {
        let page = render_page(catalog::catalog(), &PageQuery::tagged("no-such-tag"));
        assert!(page.contains("No matching records."));
    }

    #[test]
    fn listing_reports_no_matches() {
        let mut out = String::new();
        render_listing(catalog::catalog().search_text("zzz-nothing"), &mut out).unwrap();
        assert_eq!(out, "no matching records\n");
    }

    #[test]
    fn record_text_shows_every_tip() {
        let record = catalog::catalog()
            .find_by_name(RecordKind::TipSection, "Open Root Tips")
            .unwrap();
        let mut out = String::new();
        render_record_text(record, &mut out).unwrap();
        assert!(out.starts_with("Open Root Tips [radio_button_unchecked]\n"));
        assert_eq!(out.matches("    - ").count(), 9);
    }
}
