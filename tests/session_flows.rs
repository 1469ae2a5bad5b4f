use serde_json::Value;

mod common;
use common::{fixture_listing, TestEnv};

fn ids(rows: &Value) -> Vec<String> {
    rows.as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn district_filter_keeps_original_relative_order() {
    // Five listings across Haeundae (3) and Suyeong (2), all capacity 4.
    let env = TestEnv::new();
    let out = env.run_json(&["browse", "--district", "Suyeong", "--headcount", "1"]);
    assert_eq!(out["ok"], true);
    assert_eq!(ids(&out["data"]), vec!["g2", "g4"]);
}

#[test]
fn headcount_above_all_capacities_empties_the_subset_and_blocks_story() {
    let env = TestEnv::with_items(vec![
        fixture_listing("g1", "Haeundae", 2),
        fixture_listing("g2", "Suyeong", 2),
    ]);
    let replies = env.run_session_json("filter headcount=3\nstory\nquit\n");
    assert_eq!(replies[0]["ok"], true);
    assert_eq!(replies[0]["data"]["visible"], 0);
    assert_eq!(replies[1]["ok"], false);
    assert_eq!(replies[1]["error"], "no listing selected");
    assert_eq!(replies[2]["data"]["event"], "bye");
}

#[test]
fn inverted_date_range_is_rejected_and_prior_criteria_survive() {
    let env = TestEnv::new();
    let replies = env.run_session_json(
        "filter district=Suyeong\nfilter from=2024-05-09 to=2024-05-02\nstate\nquit\n",
    );
    assert_eq!(replies[0]["ok"], true);
    assert_eq!(replies[1]["ok"], false);
    assert!(replies[1]["error"]
        .as_str()
        .unwrap()
        .starts_with("invalid filter"));
    let state = &replies[2]["data"]["state"];
    assert_eq!(state["district"], "Suyeong");
    assert_eq!(state["visible"], 2);
}

#[test]
fn tap_then_narrowing_filter_clamps_focus_to_zero() {
    let env = TestEnv::with_items(vec![
        fixture_listing("g1", "Haeundae", 4),
        fixture_listing("g2", "Haeundae", 4),
        fixture_listing("g3", "Haeundae", 4),
        fixture_listing("g4", "Suyeong", 4),
    ]);
    let replies =
        env.run_session_json("tap 2\nfilter district=Suyeong\nstate\nstory\nquit\n");
    assert_eq!(replies[0]["data"]["event"], "listing_selected");
    assert_eq!(replies[0]["data"]["intent"]["params"]["id"], "g3");
    assert_eq!(replies[1]["data"]["visible"], 1);
    let state = &replies[2]["data"]["state"];
    assert_eq!(state["focused"], 0);
    // story now follows the re-focused first (and only) visible card
    assert_eq!(replies[3]["data"]["intent"]["target_view"], "story");
    assert_eq!(replies[3]["data"]["intent"]["params"]["id"], "g4");
    assert_eq!(replies[3]["data"]["intent"]["params"]["episode"], "0");
}

#[test]
fn slide_past_the_end_is_clamped() {
    let env = TestEnv::new();
    let replies = env.run_session_json("slide 9\nstate\nquit\n");
    assert_eq!(replies[0]["data"]["focused"], 4);
    assert_eq!(replies[1]["data"]["state"]["focused"], 4);
}

#[test]
fn tap_on_empty_subset_is_rejected() {
    let env = TestEnv::new();
    let replies = env.run_session_json("filter district=Gijang\ntap 0\nquit\n");
    assert_eq!(replies[0]["data"]["visible"], 0);
    assert_eq!(replies[1]["ok"], false);
    assert_eq!(replies[1]["error"], "no listing selected");
}

#[test]
fn unknown_commands_do_not_end_the_session() {
    let env = TestEnv::new();
    let out = env.run_session_text("swipe 3\nslide 1\nquit\n");
    assert!(out.contains("rejected: unknown session command: swipe"));
    assert!(out.contains("focused\t1"));
    assert!(out.contains("bye"));
}

#[test]
fn committed_filters_are_forwarded_with_the_date_range() {
    let env = TestEnv::new();
    let replies = env.run_session_json(
        "filter district=Haeundae headcount=2 from=2024-05-01 to=2024-05-05\nquit\n",
    );
    let intent = &replies[0]["data"]["intent"];
    assert_eq!(intent["target_view"], "catalog");
    assert_eq!(intent["params"]["district"], "Haeundae");
    assert_eq!(intent["params"]["headcount"], "2");
    assert_eq!(intent["params"]["from"], "2024-05-01");
    assert_eq!(intent["params"]["to"], "2024-05-05");
    // the date range rides along but never narrows the subset
    assert_eq!(replies[0]["data"]["visible"], 3);
}

#[test]
fn subset_rows_follow_the_committed_filters() {
    let env = TestEnv::new();
    let replies = env.run_session_json("subset\nfilter district=Haeundae\nsubset\nquit\n");
    assert_eq!(ids(&replies[0]["data"]["rows"]), vec!["g1", "g2", "g3", "g4", "g5"]);
    assert_eq!(ids(&replies[2]["data"]["rows"]), vec!["g1", "g3", "g5"]);
}
