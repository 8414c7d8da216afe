//----------------------------------------
// Vega-Lite chart
//----------------------------------------
use crate::density::CurveSample;
use serde_json::{json, Value};

pub const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";
pub const DEFAULT_TITLE: &str = "Overlap between group distributions";

/// Layered area + outline chart of the group curves, coloured by group.
///
/// The area layer carries the tooltip and the zoom/pan selection; the line
/// layer only sharpens the edges.
pub fn vega_lite_spec(curves: &[CurveSample], title: &str) -> Value {
    json!({
        "$schema": VEGA_LITE_SCHEMA,
        "title": title,
        "height": 450,
        "width": "container",
        "data": { "values": curves },
        "encoding": {
            "x": {
                "field": "x",
                "type": "quantitative",
                "title": "Score",
                "axis": { "grid": false }
            },
            "y": {
                "field": "density",
                "type": "quantitative",
                "title": "Probability density",
                "axis": null
            },
            "color": {
                "field": "group",
                "type": "nominal",
                "legend": { "orient": "top", "title": null },
                "scale": { "scheme": "set2" }
            }
        },
        "layer": [
            {
                "mark": { "type": "area", "opacity": 0.6 },
                "encoding": {
                    "tooltip": [
                        { "field": "group", "type": "nominal" },
                        { "field": "x", "type": "quantitative", "format": ".2f" }
                    ]
                },
                "params": [
                    { "name": "zoom", "select": "interval", "bind": "scales" }
                ]
            },
            {
                "mark": { "type": "line", "strokeWidth": 2, "opacity": 0.8 }
            }
        ],
        "config": {
            "view": { "stroke": null },
            "axis": { "domain": false, "tickSize": 0 }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::density::compute_curves;
    use crate::params::DistributionParameters;

    #[test]
    fn spec_layers_and_data() {
        let curves = compute_curves(DistributionParameters::default());
        let spec = vega_lite_spec(&curves, DEFAULT_TITLE);
        assert_eq!(spec["$schema"], VEGA_LITE_SCHEMA);
        assert_eq!(spec["data"]["values"].as_array().unwrap().len(), 1500);
        assert_eq!(spec["layer"][0]["mark"]["type"], "area");
        assert_eq!(spec["layer"][1]["mark"]["type"], "line");
        assert_eq!(spec["encoding"]["color"]["scale"]["scheme"], "set2");
        assert!(spec["encoding"]["y"]["axis"].is_null());
    }

    #[test]
    fn data_rows_carry_legend_labels() {
        let curves = compute_curves(DistributionParameters::default());
        let spec = vega_lite_spec(&curves, "t");
        assert_eq!(spec["data"]["values"][0]["group"], "Control (A)");
        assert_eq!(spec["data"]["values"][1499]["group"], "Treatment 2 (C)");
        assert_eq!(spec["title"], "t");
    }
}
