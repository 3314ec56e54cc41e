use tsumo_core::{Dimension, FieldObject, Position};
use tsumo_game::{Rule, Score, TsuGame};
use tsumo_test_utils::{
    floating_objects, random_settled_field, staircase_chain, two_link_chain, vertical_run,
};

fn game(field: tsumo_field::Field) -> TsuGame {
    TsuGame::with_field(Rule::default(), field).unwrap()
}

#[test]
fn staircase_scores_every_link() {
    let mut g = game(staircase_chain());
    let report = g.resolve();
    assert_eq!(report.chain_count(), 5);
    assert!(report.settled.is_empty());

    let bonuses: Vec<u32> = report.steps.iter().map(|s| s.score.bonus).collect();
    assert_eq!(bonuses, vec![1, 8, 16, 32, 64]);
    assert!(report.steps.iter().all(|s| s.score.base == 40));
    assert_eq!(report.total_points(), 40 * 121);

    let colors: Vec<FieldObject> = report
        .steps
        .iter()
        .map(|s| {
            let (&color, _) = s
                .connections
                .iter()
                .find(|(_, groups)| !groups.is_empty())
                .unwrap();
            color
        })
        .collect();
    assert_eq!(
        colors,
        vec![
            FieldObject::Red,
            FieldObject::Green,
            FieldObject::Yellow,
            FieldObject::Blue,
            FieldObject::Purple,
        ]
    );
    assert!(g.field().is_empty());
}

#[test]
fn two_link_fixture() {
    let mut g = game(two_link_chain());
    let report = g.resolve();
    assert_eq!(report.chain_count(), 2);
    assert_eq!(report.total_points(), 40 + 40 * 8);
}

#[test]
fn level_scales_base_only() {
    let rule = Rule {
        level: 3,
        ..Rule::default()
    };
    let mut g = TsuGame::with_field(rule, vertical_run()).unwrap();
    let report = g.resolve();
    assert_eq!(report.steps[0].score, Score { base: 120, bonus: 1 });
}

#[test]
fn smaller_groups_clear_under_a_looser_rule() {
    let mut field = tsumo_field::Field::new(Dimension::default());
    for row in 0..3 {
        field.set(Position::new(row, 0), FieldObject::Blue);
    }
    assert_eq!(game(field.clone()).resolve().chain_count(), 0);

    let rule = Rule {
        min_clear_connection: 3,
        ..Rule::default()
    };
    let mut g = TsuGame::with_field(rule, field).unwrap();
    let report = g.resolve();
    assert_eq!(report.chain_count(), 1);
    // Threshold 3, group of 3: no excess, so no group bonus.
    assert_eq!(report.steps[0].score, Score { base: 30, bonus: 1 });
}

#[test]
fn floating_fixture_settles_without_clearing() {
    let mut g = game(floating_objects());
    let report = g.resolve();
    assert_eq!(report.settled.len(), 2);
    assert_eq!(report.chain_count(), 0);
    assert_eq!(g.field().get(Position::new(4, 1)), Some(FieldObject::Red));
}

#[test]
fn resolved_random_fields_are_stable() {
    for seed in 0..32 {
        let mut g = game(random_settled_field(Dimension::default(), seed, 80));
        let report = g.resolve();
        assert!(g.connections().values().all(Vec::is_empty), "seed {seed}");
        assert!(g.gravitate().is_empty(), "seed {seed}");
        assert_eq!(g.chain(), report.chain_count());

        let again = g.resolve();
        assert_eq!(again.chain_count(), 0);
        assert!(again.settled.is_empty());
    }
}
