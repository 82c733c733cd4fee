use holdings_compare::{Dashboard, SelectionScope};
use serde_json::Value;

use crate::common;

fn spec(scope: SelectionScope) -> Value {
    Dashboard::new(
        &common::load_fixture_table("SPY"),
        &common::load_fixture_table("EFIV"),
        scope,
    )
    .to_vega_lite()
    .unwrap()
}

fn column(spec: &Value, i: usize) -> (&Value, &Value) {
    let v = spec["hconcat"][i]["vconcat"].as_array().unwrap();
    assert_eq!(v.len(), 2);
    (&v[0], &v[1])
}

#[test]
fn layout_is_two_columns_of_stacked_panels() {
    let spec = spec(SelectionScope::PerIndex);
    assert_eq!(spec["$schema"], "https://vega.github.io/schema/vega-lite/v5.json");
    assert_eq!(spec["hconcat"].as_array().unwrap().len(), 2);

    for (i, rows) in [(0, 7), (1, 6)] {
        let (sectors, companies) = column(&spec, i);
        assert_eq!(sectors["width"], 600);
        assert_eq!(sectors["height"], 200);
        assert_eq!(sectors["mark"], "bar");
        assert_eq!(sectors["data"]["values"].as_array().unwrap().len(), rows);
        assert_eq!(sectors["data"], companies["data"]);
        assert_eq!(sectors["encoding"]["x"]["field"], "Sector");
        assert_eq!(sectors["encoding"]["y"]["field"], "sum_of_weights");
        assert_eq!(companies["encoding"]["x"]["field"], "Name");
        assert_eq!(companies["encoding"]["y"]["field"], "Weight %");
    }

    let (sectors, companies) = column(&spec, 0);
    assert_eq!(sectors["title"]["text"], "Sector Breakdown for S&P 500");
    assert_eq!(sectors["title"]["subtitle"], "As of 16 Oct 2026");
    assert_eq!(companies["title"]["text"], "Companies in S&P 500");
}

#[test]
fn sector_panels_aggregate_weight_and_count_by_sector() {
    let spec = spec(SelectionScope::PerIndex);
    let (sectors, _) = column(&spec, 1);
    let agg = &sectors["transform"][0];

    assert_eq!(agg["groupby"], serde_json::json!(["Sector"]));
    assert_eq!(agg["aggregate"][0]["op"], "sum");
    assert_eq!(agg["aggregate"][0]["field"], "Weight %");
    assert_eq!(agg["aggregate"][1]["op"], "count");
    assert_eq!(agg["aggregate"][1]["as"], "no_of_names");
}

#[test]
fn per_index_scope_gives_each_column_its_own_selection() {
    let spec = spec(SelectionScope::PerIndex);
    assert!(spec.get("params").is_none());

    for i in 0..2 {
        let (sectors, companies) = column(&spec, i);
        let param = format!("click_{i}");
        assert_eq!(sectors["params"][0]["name"], param.as_str());
        assert_eq!(sectors["params"][0]["select"]["type"], "point");
        assert_eq!(sectors["encoding"]["color"]["condition"]["param"], param.as_str());
        assert_eq!(sectors["encoding"]["color"]["value"], "lightgray");
        assert_eq!(companies["transform"][0]["filter"]["param"], param.as_str());
    }
}

#[test]
fn shared_scope_binds_one_selection_to_both_aggregate_views() {
    let spec = spec(SelectionScope::Shared);
    let params = spec["params"].as_array().unwrap();
    assert_eq!(params.len(), 1);
    assert_eq!(params[0]["name"], "click");
    assert_eq!(params[0]["views"], serde_json::json!(["sectors_0", "sectors_1"]));

    for i in 0..2 {
        let (sectors, companies) = column(&spec, i);
        assert_eq!(sectors["name"], format!("sectors_{i}").as_str());
        assert!(sectors.get("params").is_none());
        assert_eq!(companies["transform"][0]["filter"]["param"], "click");
    }
}

#[test]
fn both_columns_share_one_color_scale() {
    let spec = spec(SelectionScope::PerIndex);
    let scale = |i: usize| {
        let (sectors, companies) = column(&spec, i);
        let s = sectors["encoding"]["color"]["condition"]["scale"].clone();
        assert_eq!(s, companies["encoding"]["color"]["scale"]);
        s
    };
    let left = scale(0);
    assert_eq!(left, scale(1));
    assert_eq!(left["domain"].as_array().unwrap().len(), 7);
    assert_eq!(left["domain"][0], "Communication Services");
    assert_eq!(left["range"][0], "#4c78a8");
}

#[test]
fn html_page_embeds_the_specification() {
    let dash = Dashboard::new(
        &common::load_fixture_table("SPY"),
        &common::load_fixture_table("EFIV"),
        SelectionScope::PerIndex,
    );
    let page = dash.render_html().unwrap();

    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("<title>S&amp;P 500 vs S&amp;P 500 ESG</title>"));
    assert!(page.contains("vegaEmbed(\"#vis\""));
    assert!(page.contains("\"hconcat\""));
    assert!(page.contains("PROCTER + GAMBLE CO"));
}
