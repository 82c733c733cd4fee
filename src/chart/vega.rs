//! Vega-Lite v5 rendering of a [`Dashboard`].

use serde_json::{Value, json};

use super::dashboard::{Dashboard, PanelPair, SelectionScope};
use super::palette::MUTED;
use crate::holdings::WEIGHT_LABEL;

const SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";
const WIDTH: u32 = 600;
const HEIGHT: u32 = 200;
const SHARED_PARAM: &str = "click";

fn param_name(scope: SelectionScope, i: usize) -> String {
    match scope {
        SelectionScope::PerIndex => format!("click_{i}"),
        SelectionScope::Shared => SHARED_PARAM.to_string(),
    }
}

fn point_selection() -> Value {
    json!({ "type": "point", "encodings": ["color"] })
}

fn title(text: &str, pair: &PanelPair) -> Value {
    match pair.metadata().as_of {
        Some(d) => json!({ "text": text, "subtitle": format!("As of {}", d.format("%d %b %Y")) }),
        None => json!(text),
    }
}

pub(crate) fn spec(dash: &Dashboard) -> Result<Value, serde_json::Error> {
    let scale = json!({
        "domain": dash.palette().domain().collect::<Vec<_>>(),
        "range": dash.palette().range().collect::<Vec<_>>(),
    });

    let mut columns = Vec::with_capacity(dash.pairs().len());
    for (i, pair) in dash.pairs().iter().enumerate() {
        let param = param_name(dash.scope(), i);
        let values = serde_json::to_value(pair.data())?;

        let mut sectors = json!({
            "name": format!("sectors_{i}"),
            "title": title(pair.sectors().title(), pair),
            "width": WIDTH,
            "height": HEIGHT,
            "data": { "values": values },
            "mark": "bar",
            "transform": [{
                "aggregate": [
                    { "op": "sum", "field": WEIGHT_LABEL, "as": "sum_of_weights" },
                    { "op": "count", "field": "Name", "as": "no_of_names" }
                ],
                "groupby": ["Sector"]
            }],
            "encoding": {
                "x": { "field": "Sector", "type": "ordinal", "title": " " },
                "y": { "field": "sum_of_weights", "type": "quantitative", "title": WEIGHT_LABEL },
                "color": {
                    "condition": { "param": param, "field": "Sector", "type": "nominal", "scale": scale },
                    "value": MUTED
                },
                "tooltip": [
                    { "field": "no_of_names", "type": "quantitative" },
                    { "field": "sum_of_weights", "type": "quantitative" }
                ]
            }
        });
        if dash.scope() == SelectionScope::PerIndex {
            sectors["params"] = json!([{ "name": param, "select": point_selection() }]);
        }

        let companies = json!({
            "title": title(pair.companies().title(), pair),
            "width": WIDTH,
            "height": HEIGHT,
            "data": { "values": sectors["data"]["values"].clone() },
            "mark": "bar",
            "transform": [{ "filter": { "param": param } }],
            "encoding": {
                "x": { "field": "Name", "type": "ordinal", "title": " " },
                "y": { "field": WEIGHT_LABEL, "type": "quantitative", "title": WEIGHT_LABEL },
                "color": { "field": "Sector", "type": "nominal", "scale": scale },
                "tooltip": [
                    { "field": "Name", "type": "nominal" },
                    { "field": WEIGHT_LABEL, "type": "quantitative" }
                ]
            }
        });

        columns.push(json!({ "vconcat": [sectors, companies] }));
    }

    let mut root = json!({ "$schema": SCHEMA, "hconcat": columns });
    if dash.scope() == SelectionScope::Shared {
        let views: Vec<String> = (0..dash.pairs().len())
            .map(|i| format!("sectors_{i}"))
            .collect();
        root["params"] = json!([{ "name": SHARED_PARAM, "select": point_selection(), "views": views }]);
    }
    Ok(root)
}

pub(crate) fn html(spec: &Value, title: &str) -> Result<String, serde_json::Error> {
    // A literal `</script>` inside the JSON would end the script element.
    let body = serde_json::to_string(spec)?.replace("</", "<\\/");
    let title = title
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    Ok(format!(
        r##"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <script src="https://cdn.jsdelivr.net/npm/vega@5"></script>
  <script src="https://cdn.jsdelivr.net/npm/vega-lite@5"></script>
  <script src="https://cdn.jsdelivr.net/npm/vega-embed@6"></script>
</head>
<body>
  <div id="vis"></div>
  <script type="text/javascript">
    vegaEmbed("#vis", {body}).catch(console.error);
  </script>
</body>
</html>
"##
    ))
}
