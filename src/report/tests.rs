#[cfg(test)]
use super::*;
#[cfg(test)]
use crate::localisation::{parse_localisation, LocalisationTable};
#[cfg(test)]
use crate::options::ReportOptions;
#[cfg(test)]
use crate::parser::parse_str;

const MISSIONS: &str = r#"
fra_missions_1 = {
    slot = 1
    generic = no
    ai = yes
    has_country_shield = yes
    potential = {
        OR = { tag = FRA tag = BUR }
        NOT = { tag = ENG }
    }
    fra_unify = {
        icon = mission_unite_home_region
        trigger = { num_of_owned_provinces_with = { value = 10 } }
        effect = { add_prestige = 10 }
    }
    fra_choice = {
        icon = mission_unknown_mission
        trigger = { }
        effect = { }
    }
    fra_unfinished = {
        icon = mission_cannons_firing
        trigger = { }
    }
}
eng_missions = {
    potential = { tag = ENG }
    eng_navy = {
        icon = mission_locked_mission_sea
        trigger = { }
        effect = { }
    }
}
orphan_missions = {
    potential = { NOT = { tag = SWE } }
    orphan = { icon = mission_x trigger = { } effect = { } }
}
"#;

#[test]
fn test_count_missions() {
    let doc = parse_str(MISSIONS).expect("Failed to parse missions");
    let counts = count_missions([&doc], &ReportOptions::default());

    let keys: Vec<&str> = counts.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["FRA", "BUR", "ENG"]);

    assert_eq!(counts["FRA"], MissionCount { total: 2, normal: 1, branching: 1 });
    assert_eq!(counts["BUR"], counts["FRA"]);
    assert_eq!(counts["ENG"], MissionCount { total: 1, normal: 0, branching: 1 });
    assert!(!counts.contains_key("SWE"));

    let json = serde_json::to_value(&counts).unwrap();
    assert_eq!(json["FRA"], serde_json::json!({ "total": 2, "normal": 1, "branching": 1 }));
    assert_eq!(json["ENG"]["branching"], 1);
}

#[test]
fn test_count_missions_across_documents_and_custom_icons() {
    let first = parse_str(MISSIONS).unwrap();
    let second = parse_str("more = { potential = { tag = ENG } m = { icon = special trigger = {} effect = {} } }").unwrap();

    let options = ReportOptions::default().with_branching_icons(["special"]);
    let counts = count_missions([&first, &second], &options);

    assert_eq!(counts["FRA"], MissionCount { total: 2, normal: 2, branching: 0 });
    assert_eq!(counts["ENG"], MissionCount { total: 2, normal: 1, branching: 1 });
}

#[test]
fn test_mission_rows_sorted_and_localised() {
    let doc = parse_str(MISSIONS).unwrap();
    let counts = count_missions([&doc], &ReportOptions::default());
    let localisation: LocalisationTable =
        parse_localisation("l_english:\n FRA:0 \"France\"\n ENG:0 \"England\"").into_iter().collect();

    let rows = mission_rows(&counts, Some(&localisation));
    assert_eq!(rows[0], vec!["Country", "Total", "Normal", "Branching"]);
    assert_eq!(rows[1], vec!["France (FRA)", "2", "1", "1"]);
    assert_eq!(rows[2], vec!["BUR", "2", "1", "1"]);
    assert_eq!(rows[3], vec!["England (ENG)", "1", "0", "1"]);

    let plain = mission_rows(&counts, None);
    assert_eq!(plain[1][0], "FRA");
}

const IDEAS: &str = r#"
trade_ideas = { category = DIP bonus = { global_trade_power = 0.1 } }
economic_ideas = { category = ADM }
quantity_ideas = { category = MIL }
FRA_ideas = { start = { } bonus = { } trigger = { tag = FRA } }
free_ideas = { category = NONE }
"#;

const POLICIES: &str = r#"
mercantilism_policy = {
    monarch_power = DIP
    potential = {
        has_idea_group = trade_ideas
        has_idea_group = economic_ideas
    }
    allow = { full_idea_group = trade_ideas }
}
merchant_policy = {
    potential = { has_idea_group = trade_ideas has_idea_group = economic_ideas }
}
draft_policy = {
    potential = { OR = { has_idea_group = quantity_ideas } has_idea_group = economic_ideas }
}
anti_policy = {
    potential = { NOT = { has_idea_group = trade_ideas } has_idea_group = quantity_ideas }
}
"#;

#[test]
fn test_group_ideas_checks_category() {
    let doc = parse_str(IDEAS).unwrap();
    assert_eq!(
        group_ideas(&doc, &ReportOptions::default()),
        vec!["trade_ideas", "economic_ideas", "quantity_ideas"]
    );
}

#[test]
fn test_policy_requirements_use_reachability() {
    let doc = parse_str(POLICIES).unwrap();
    let reqs = policy_requirements(&doc);

    assert_eq!(reqs.len(), 4);
    assert!(reqs["draft_policy"].contains("quantity_ideas"));
    assert!(!reqs["anti_policy"].contains("trade_ideas"));
}

#[test]
fn test_policy_table() {
    let ideas = group_ideas(&parse_str(IDEAS).unwrap(), &ReportOptions::default());
    let reqs = policy_requirements(&parse_str(POLICIES).unwrap());
    let options = ReportOptions::default().with_policy_exempt_groups(["quantity_ideas"]);

    let table = policy_table(&ideas, &reqs, &options);

    assert_eq!(table.len(), 4);
    assert_eq!(table[0], vec!["", "trade_ideas", "economic_ideas", "quantity_ideas"]);
    assert_eq!(table[1][0], "trade_ideas");
    assert_eq!(table[1][1], DIAGONAL);
    assert_eq!(table[1][2], "mercantilism_policy<br>merchant_policy");
    assert_eq!(table[2][1], table[1][2]);
    assert_eq!(table[1][3], EXEMPT);
    assert_eq!(table[3][2], EXEMPT);

    let strict = policy_table(&ideas, &reqs, &ReportOptions::default());
    assert_eq!(strict[2][3], "draft_policy");
    assert_eq!(strict[1][3], MISSING);
}

#[test]
fn test_localise_table() {
    let localisation: LocalisationTable =
        parse_localisation("l_english:\n trade_ideas:0 \"Trade Ideas\"").into_iter().collect();
    let mut rows = vec![
        vec!["".to_string(), "trade_ideas".to_string()],
        vec!["trade_ideas".to_string(), " - ".to_string()],
    ];

    localise_table(&mut rows, &localisation);
    assert_eq!(rows[0][1], "Trade Ideas");
    assert_eq!(rows[1][0], "Trade Ideas");
    assert_eq!(rows[1][1], " - ");
}

#[test]
fn test_markdown_table() {
    let rows = vec![
        vec!["Country".to_string(), "Total".to_string()],
        vec!["FRA".to_string(), "2".to_string()],
    ];

    assert_eq!(
        markdown_table(&rows),
        "\n| Country | Total |\n| :-: | :-: |\n| FRA | 2 |\n\n"
    );
    assert_eq!(markdown_table(&[]), "");
}
