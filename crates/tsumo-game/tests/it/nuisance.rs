use tsumo_core::{Dimension, FieldObject, Position};
use tsumo_game::{Rule, Score, TsuGame};
use tsumo_test_utils::nuisance_pocket;

#[test]
fn pocket_scores_transformed_nuisance() {
    let rule = Rule {
        nuisance_transform_point: 2,
        ..Rule::default()
    };
    let mut g = TsuGame::with_field(rule, nuisance_pocket()).unwrap();
    let report = g.resolve();
    assert_eq!(report.chain_count(), 1);
    // Four reds, two nuisance cleared, two hard nuisance softened.
    assert_eq!(report.steps[0].score, Score { base: 40 + 4 * 2, bonus: 1 });
    assert_eq!(g.field().get(Position::new(0, 1)), Some(FieldObject::Nuisance));
    assert_eq!(g.field().get(Position::new(1, 1)), Some(FieldObject::Nuisance));
}

#[test]
fn attack_converts_at_the_current_rate() {
    let rule = Rule::default();
    let points = 40 * 121;
    let (early, early_rest) = rule.nuisance_count(points, 0.0);
    assert_eq!((early, early_rest), (69, 10.0));

    let (late, _) = rule.nuisance_count(points, 96.0 + 16.0);
    assert_eq!(late, 138);
    assert!(late > early);
}

#[test]
fn rate_never_rises() {
    let rule = Rule {
        initial_nuisance_rate: 120,
        margin_time: Some(10),
        ..Rule::default()
    };
    let rates: Vec<f64> = (0..400).map(|t| rule.nuisance_rate(f64::from(t))).collect();
    assert!(rates.windows(2).all(|w| w[1] <= w[0]));
    assert_eq!(rates[0], 120.0);
    assert_eq!(*rates.last().unwrap(), rule.nuisance_rates().last().unwrap());
}

#[test]
fn hidden_rows_hold_but_never_clear() {
    let mut g = TsuGame::new(Rule::default(), Dimension::new(2, 2, 2)).unwrap();
    for row in 0..4 {
        g.field_mut().set(Position::new(row, 0), FieldObject::Green);
    }
    g.field_mut().set(Position::new(0, 1), FieldObject::Green);
    g.field_mut().set(Position::new(1, 1), FieldObject::Green);
    // Visible greens: (0,0) (1,0) (0,1) (1,1) form a square of four.
    let report = g.resolve();
    assert_eq!(report.chain_count(), 1);
    assert_eq!(g.field().get(Position::new(0, 0)), Some(FieldObject::Green));
    assert_eq!(g.field().get(Position::new(1, 0)), Some(FieldObject::Green));
}
