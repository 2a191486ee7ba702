//! Tests that verify the bundled scenario files load and match the built-ins

mod common;

use stolen_lands::map::{Region, RosterError, Scenario, ScenarioError, TileId};
use stolen_lands::movement::{MoveOutcome, MoveRejection, evaluate_move, legal_moves};

#[test]
fn test_bundled_scenarios_match_builtins() {
    let stolen_lands =
        Scenario::load_from_path(common::fixture_path(common::STOLEN_LANDS_SCENARIO))
            .expect("stolen lands scenario parses");
    assert_eq!(stolen_lands, Scenario::stolen_lands());

    let fog = Scenario::load_from_path(common::fixture_path(common::FOG_OF_WAR_SCENARIO))
        .expect("fog of war scenario parses");
    assert_eq!(fog, Scenario::fog_of_war());
}

#[test]
fn test_every_region_touches_the_hub() {
    let initial = Scenario::stolen_lands().build().unwrap();
    let capital = TileId::from("capital");
    let reachable = legal_moves(&initial.roster, &capital);
    assert_eq!(reachable.len(), 6);
    for id in reachable {
        let tile = initial.roster.lookup(&id).unwrap();
        assert_ne!(tile.region, Region::Hub);
    }
}

#[test]
fn test_hub_rule_on_real_map() {
    let initial = Scenario::stolen_lands().build().unwrap();
    // greenbelt-nw (0,-1) and pitax (-1,0) are neighbours in different regions
    assert_eq!(
        evaluate_move(
            &initial.roster,
            &TileId::from("greenbelt-nw"),
            &TileId::from("pitax")
        ),
        MoveOutcome::Invalid {
            reason: MoveRejection::CrossRegion
        }
    );
    // fog of war map is a single region; every ring tile is a legal step
    let fog = Scenario::fog_of_war().build().unwrap();
    assert!(
        evaluate_move(
            &fog.roster,
            &TileId::from("nw-woods"),
            &TileId::from("west-ford")
        )
        .is_moved()
    );
}

#[test]
fn test_duplicate_capital_aborts_initialisation() {
    let mut scenario = Scenario::stolen_lands();
    let mut second = scenario.tiles[0].clone();
    second.id = TileId::from("second-capital");
    second.axial = (3, 3);
    scenario.tiles.push(second);

    assert!(matches!(
        scenario.build(),
        Err(ScenarioError::Roster(RosterError::DuplicateCapital { .. }))
    ));
}

#[test]
fn test_malformed_json_is_a_parse_error() {
    let err = Scenario::from_json(r#"{ "name": "broken", "tiles": [ { "id": 7 } ] }"#)
        .unwrap_err();
    assert!(matches!(err, ScenarioError::Parse(_)));
}
