//! HTML page rendering
//!
//! Produces the self-contained dashboard page from a rendered `View`. Styles
//! are inlined; charts are drawn client-side by plotly.js from the figure JSON
//! embedded in the page.

use serde_json::Value;

use crate::dashboard::{figures, Figure, MetricCard, Selection, View, ALL};
use crate::data::{DepartmentTable, ThemeTable};

pub const PAGE_TITLE: &str = "ONU Haïti Data";

/// Label shown for the "All" selector option
const ALL_LABEL: &str = "Tous";

/// Render the full dashboard page
pub fn render_page(view: &View, plotly_src: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="fr">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
    <script src="{plotly_src}"></script>
    <script>{head_js}</script>
</head>
<body>
    <aside class="sidebar">
        {filter}
    </aside>
    <main class="container">
        {header}
        {notice}
        {selection}
        {metrics}
        {charts}
        {tables}
        {footer}
    </main>
    <script>{js}</script>
</body>
</html>"#,
        title = PAGE_TITLE,
        css = inline_css(),
        plotly_src = escape_html(plotly_src),
        filter = render_filter(view),
        header = render_header(),
        notice = view.notice.as_deref().map(render_notice).unwrap_or_default(),
        selection = view.selection.as_ref().map(render_selection).unwrap_or_default(),
        metrics = render_metrics(&view.cards),
        charts = render_charts(&figures(&view.projections)),
        tables = render_tables(view),
        footer = render_footer(),
        head_js = head_javascript(),
        js = inline_javascript(),
    )
}

fn render_header() -> String {
    r#"<header>
            <h1>🇺🇳 ONU Data Visualization - Haïti 🇭🇹</h1>
            <p class="meta">Application de visualisation des données des Nations Unies en Haïti</p>
        </header>"#
        .to_string()
}

fn render_filter(view: &View) -> String {
    let options: String = view
        .filter_options
        .iter()
        .map(|option| {
            let label = if option == ALL { ALL_LABEL } else { option.as_str() };
            let selected = if option == view.filter.as_str() {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<option value="{value}"{selected}>{label}</option>"#,
                value = escape_html(option),
                selected = selected,
                label = escape_html(label),
            )
        })
        .collect();

    format!(
        r#"<h2>Filtres</h2>
        <form method="get" action="/">
            <label for="department">Sélectionnez un département:</label>
            <select id="department" name="department" onchange="this.form.submit()">{options}</select>
            <noscript><button type="submit">Appliquer</button></noscript>
        </form>"#,
        options = options
    )
}

fn render_notice(message: &str) -> String {
    format!(
        r#"<div class="notice" role="alert">{}</div>"#,
        escape_html(message)
    )
}

fn render_selection(selection: &Selection) -> String {
    let record = &selection.record;
    format!(
        r#"<section class="selection">
            <h2>📍 {name}</h2>
            <dl>
                <dt>Population</dt><dd>{population} ({share:.1}% du total)</dd>
                <dt>Projets ONU</dt><dd>{projects}</dd>
                <dt>Taux de pauvreté</dt><dd>{poverty}%</dd>
                <dt>Accès à l'eau</dt><dd>{water}%</dd>
            </dl>
        </section>"#,
        name = escape_html(&record.name),
        population = crate::dashboard::metrics::format_thousands(record.population),
        share = selection.population_share,
        projects = record.un_projects,
        poverty = record.poverty_rate,
        water = record.water_access,
    )
}

fn render_metrics(cards: &[MetricCard]) -> String {
    let cards: String = cards
        .iter()
        .map(|card| {
            format!(
                r#"<div class="metric"><div class="label">{}</div><div class="value">{}</div></div>"#,
                escape_html(card.label),
                escape_html(&card.value)
            )
        })
        .collect();

    format!(
        r#"<section>
            <h2>📊 Indicateurs Clés</h2>
            <div class="metrics">{}</div>
        </section>"#,
        cards
    )
}

fn render_charts(figures: &[Figure]) -> String {
    figures
        .iter()
        .map(|f| {
            format!(
                r#"<section>
            <h2>{heading}</h2>
            <div id="{id}" class="chart"></div>
            <script>drawFigure("{id}", {figure});</script>
        </section>"#,
                heading = escape_html(f.heading),
                id = f.id,
                figure = script_json(&f.figure),
            )
        })
        .collect()
}

fn render_tables(view: &View) -> String {
    format!(
        r#"<section>
            <h2>📋 Données Détaillées</h2>
            <div class="tabs">
                <button class="tab active" data-tab="{dep_name}">Départements Haïti</button>
                <button class="tab" data-tab="{theme_name}">Thèmes ONU</button>
            </div>
            <div class="tab-panel active" id="tab-{dep_name}">
                <h3>Données par Département</h3>
                {departments}
                <a class="download" href="{href}" download="{file_name}">Télécharger CSV</a>
            </div>
            <div class="tab-panel" id="tab-{theme_name}">
                <h3>Données par Thème ONU</h3>
                {themes}
            </div>
        </section>"#,
        dep_name = view.tables.departments.name,
        theme_name = view.tables.themes.name,
        departments = render_department_table(&view.tables.departments.rows, view.filter.department()),
        themes = render_theme_table(&view.tables.themes.rows),
        href = view.export.href,
        file_name = view.export.file_name,
    )
}

fn render_department_table(table: &DepartmentTable, selected: Option<&str>) -> String {
    let rows: String = table
        .iter()
        .map(|r| {
            let class = if selected == Some(r.name.as_str()) {
                r#" class="selected""#
            } else {
                ""
            };
            format!(
                r#"<tr{class}><td><a href="/?department={link}">{name}</a></td><td>{population}</td><td>{projects}</td><td>{poverty}</td><td>{water}</td></tr>"#,
                class = class,
                link = urlencoding::encode(&r.name),
                name = escape_html(&r.name),
                population = r.population,
                projects = r.un_projects,
                poverty = r.poverty_rate,
                water = r.water_access,
            )
        })
        .collect();

    format!(
        r#"<table>
                    <thead><tr><th>Département</th><th>Population</th><th>Projets_ONU</th><th>Taux_Pauvrete</th><th>Acces_Eau</th></tr></thead>
                    <tbody>{}</tbody>
                </table>"#,
        rows
    )
}

fn render_theme_table(table: &ThemeTable) -> String {
    let rows: String = table
        .iter()
        .map(|t| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(&t.theme),
                t.budget_million_usd,
                t.project_count
            )
        })
        .collect();

    format!(
        r#"<table>
                    <thead><tr><th>Thème</th><th>Budget_Million_USD</th><th>Projets</th></tr></thead>
                    <tbody>{}</tbody>
                </table>"#,
        rows
    )
}

fn render_footer() -> String {
    r#"<footer>
            <hr>
            <p><strong>Application développée en Rust</strong> | Données de démonstration</p>
        </footer>"#
        .to_string()
}

/// Escape text for HTML element content and double-quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Serialize JSON for embedding inside a `<script>` element
fn script_json(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}

fn inline_css() -> &'static str {
    r#"
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
    font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
    line-height: 1.6;
    color: #111827;
    background: #ffffff;
    display: flex;
}
.sidebar {
    width: 260px;
    min-height: 100vh;
    padding: 1.5rem;
    background: #f3f4f6;
    border-right: 1px solid #e5e7eb;
}
.sidebar select { width: 100%; padding: 0.4rem; margin-top: 0.5rem; }
.container { flex: 1; max-width: 1400px; padding: 2rem; }
header { margin-bottom: 2rem; padding-bottom: 1rem; border-bottom: 2px solid #e5e7eb; }
header h1 { font-size: 2rem; font-weight: 700; }
.meta { color: #6b7280; }
section { margin-bottom: 2rem; }
h2 { font-size: 1.4rem; margin-bottom: 1rem; }
.notice {
    margin-bottom: 1.5rem;
    padding: 0.75rem 1rem;
    border-left: 4px solid #dc2626;
    background: #fef2f2;
    color: #991b1b;
}
.selection { padding: 1rem; background: #eff6ff; border-radius: 8px; }
.selection dl { display: grid; grid-template-columns: max-content 1fr; gap: 0.25rem 1rem; }
.metrics { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; }
.metric { padding: 1rem; border: 1px solid #e5e7eb; border-radius: 8px; }
.metric .label { color: #6b7280; font-size: 0.875rem; }
.metric .value { font-size: 1.75rem; font-weight: 600; }
.chart { width: 100%; min-height: 450px; }
.tabs { display: flex; gap: 0.5rem; margin-bottom: 1rem; }
.tab { padding: 0.5rem 1rem; border: none; background: #f3f4f6; cursor: pointer; }
.tab.active { background: #2563eb; color: #ffffff; }
.tab-panel { display: none; }
.tab-panel.active { display: block; }
table { border-collapse: collapse; width: 100%; margin: 0.5rem 0 1rem; }
th, td { padding: 0.4rem 0.75rem; border-bottom: 1px solid #e5e7eb; text-align: left; }
tr.selected { background: #fef9c3; }
.download {
    display: inline-block;
    padding: 0.5rem 1rem;
    border-radius: 6px;
    background: #2563eb;
    color: #ffffff;
    text-decoration: none;
}
footer { color: #6b7280; }
"#
}

/// Runs before the chart sections, which call `drawFigure` inline
fn head_javascript() -> &'static str {
    r#"
function drawFigure(id, fig) {
    if (window.Plotly) { Plotly.newPlot(id, fig.data, fig.layout, { responsive: true }); }
}
"#
}

fn inline_javascript() -> &'static str {
    r#"
document.querySelectorAll('.tab').forEach(function (tab) {
    tab.addEventListener('click', function () {
        document.querySelectorAll('.tab').forEach(function (t) { t.classList.remove('active'); });
        document.querySelectorAll('.tab-panel').forEach(function (p) { p.classList.remove('active'); });
        tab.classList.add('active');
        document.getElementById('tab-' + tab.dataset.tab).classList.add('active');
    });
});
"#
}
