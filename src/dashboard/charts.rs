//! Plotly figure builders
//!
//! Turns projections into plotly.js figure objects (`{data, layout}`). The
//! browser-side library owns all drawing; this module only shapes JSON.

use serde::Serialize;
use serde_json::{json, Value};

use super::projections::{BarPoint, PieSlice, Projections, ScatterPoint};

pub const BAR_TITLE: &str = "Nombre de projets ONU par département";
pub const PIE_TITLE: &str = "Répartition du budget par thème";
pub const SCATTER_TITLE: &str = "Relation entre les projets ONU et le taux de pauvreté";

const BAR_COLORSCALE: &str = "Plasma";

/// A figure bound to a page element
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Figure {
    /// DOM id of the chart container
    pub id: &'static str,
    /// Section heading shown above the chart
    pub heading: &'static str,
    /// Plotly figure: `{ "data": [...], "layout": {...} }`
    pub figure: Value,
}

/// Build the three dashboard figures in page order
pub fn figures(projections: &Projections) -> Vec<Figure> {
    vec![
        Figure {
            id: "chart-projects",
            heading: "Projets ONU par Département",
            figure: bar_figure(&projections.bar),
        },
        Figure {
            id: "chart-budget",
            heading: "Budget ONU par Thème",
            figure: pie_figure(&projections.pie),
        },
        Figure {
            id: "chart-correlation",
            heading: "Projets ONU vs Taux de Pauvreté",
            figure: scatter_figure(&projections.scatter),
        },
    ]
}

/// Bar chart colored by the projects value
pub fn bar_figure(points: &[BarPoint]) -> Value {
    let x: Vec<&str> = points.iter().map(|p| p.department.as_str()).collect();
    let y: Vec<u32> = points.iter().map(|p| p.un_projects).collect();

    json!({
        "data": [{
            "type": "bar",
            "x": x,
            "y": y,
            "marker": {
                "color": y,
                "colorscale": BAR_COLORSCALE,
                "showscale": true,
                "colorbar": { "title": { "text": "Projets_ONU" } }
            },
            "hovertemplate": "%{x}<br>Projets_ONU=%{y}<extra></extra>"
        }],
        "layout": {
            "title": { "text": BAR_TITLE },
            "xaxis": { "title": { "text": "Département" } },
            "yaxis": { "title": { "text": "Projets_ONU" } }
        }
    })
}

pub fn pie_figure(slices: &[PieSlice]) -> Value {
    let labels: Vec<&str> = slices.iter().map(|s| s.theme.as_str()).collect();
    let values: Vec<u32> = slices.iter().map(|s| s.budget_million_usd).collect();

    json!({
        "data": [{
            "type": "pie",
            "labels": labels,
            "values": values,
            "hovertemplate": "%{label}<br>Budget_Million_USD=%{value}<extra></extra>"
        }],
        "layout": {
            "title": { "text": PIE_TITLE }
        }
    })
}

/// One trace per department so each bubble gets its own legend entry and color
pub fn scatter_figure(points: &[ScatterPoint]) -> Value {
    let traces: Vec<Value> = points
        .iter()
        .map(|p| {
            json!({
                "type": "scatter",
                "mode": "markers",
                "name": p.department,
                "x": [p.un_projects],
                "y": [p.poverty_rate],
                "customdata": [p.population],
                "marker": {
                    "size": [p.marker_size],
                    "sizemode": "diameter",
                    "opacity": 0.8
                },
                "hovertemplate": "%{fullData.name}<br>Projets_ONU=%{x}<br>Taux_Pauvrete=%{y}<br>Population=%{customdata}<extra></extra>"
            })
        })
        .collect();

    json!({
        "data": traces,
        "layout": {
            "title": { "text": SCATTER_TITLE },
            "xaxis": { "title": { "text": "Projets_ONU" } },
            "yaxis": { "title": { "text": "Taux_Pauvrete" } },
            "legend": { "title": { "text": "Département" } }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::projections::DEFAULT_SCATTER_SIZE_MAX;
    use crate::data::Dataset;

    fn projections() -> Projections {
        Projections::from_dataset(&Dataset::load(), DEFAULT_SCATTER_SIZE_MAX)
    }

    #[test]
    fn test_bar_figure_shape() {
        let figure = bar_figure(&projections().bar);
        let trace = &figure["data"][0];

        assert_eq!(trace["type"], "bar");
        assert_eq!(trace["x"][0], "Ouest");
        assert_eq!(trace["y"][0], 45);
        assert_eq!(trace["marker"]["color"], trace["y"]);
        assert_eq!(figure["layout"]["title"]["text"], BAR_TITLE);
    }

    #[test]
    fn test_pie_figure_values() {
        let figure = pie_figure(&projections().pie);
        let values = figure["data"][0]["values"].as_array().unwrap();
        let sum: u64 = values.iter().filter_map(Value::as_u64).sum();

        assert_eq!(values.len(), 6);
        assert_eq!(sum, 175);
        assert_eq!(figure["data"][0]["labels"][5], "Éducation");
    }

    #[test]
    fn test_scatter_one_trace_per_department() {
        let figure = scatter_figure(&projections().scatter);
        let traces = figure["data"].as_array().unwrap();

        assert_eq!(traces.len(), 10);
        assert_eq!(traces[0]["name"], "Ouest");
        assert_eq!(traces[0]["marker"]["size"][0], 40.0);
        assert_eq!(traces[0]["customdata"][0], 4_029_705);
    }

    #[test]
    fn test_figures_order() {
        let ids: Vec<&str> = figures(&projections()).iter().map(|f| f.id).collect();
        assert_eq!(ids, vec!["chart-projects", "chart-budget", "chart-correlation"]);
    }
}
