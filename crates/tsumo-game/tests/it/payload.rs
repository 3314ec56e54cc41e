use proptest::prelude::*;
use tsumo_core::Dimension;
use tsumo_game::{payload, PayloadError, Rule, TsuGame};
use tsumo_test_utils::{random_field, random_settled_field, staircase_chain};

#[test]
fn fixture_game_round_trips() {
    let game = TsuGame::with_field(Rule::default(), staircase_chain()).unwrap();
    let text = payload::encode(&game).unwrap();
    assert!(text
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    assert_eq!(payload::decode(&text).unwrap(), game);
}

#[test]
fn decoded_game_resolves_like_the_original() {
    let field = random_settled_field(Dimension::default(), 5, 90);
    let mut original = TsuGame::with_field(Rule::default(), field).unwrap();
    let mut decoded = payload::decode(&payload::encode(&original).unwrap()).unwrap();
    assert_eq!(original.resolve(), decoded.resolve());
    assert_eq!(original.field(), decoded.field());
}

#[test]
fn truncated_payload_is_rejected() {
    let game = TsuGame::with_field(Rule::default(), staircase_chain()).unwrap();
    let text = payload::encode(&game).unwrap();
    let cut = &text[..text.len() / 2];
    assert!(matches!(
        payload::decode(cut),
        Err(PayloadError::Codec(_))
    ));
}

fn rule_strategy() -> impl Strategy<Value = Rule> {
    (
        1u32..1000,
        proptest::option::of(0u32..600),
        1u32..8,
        0u32..300,
        1u32..40,
    )
        .prop_map(
            |(initial_nuisance_rate, margin_time, min_clear_connection, ntp, level)| Rule {
                initial_nuisance_rate,
                margin_time,
                min_clear_connection,
                nuisance_transform_point: ntp,
                level,
            },
        )
}

proptest! {
    #[test]
    fn random_games_round_trip(
        rule in rule_strategy(),
        columns in 0u32..9,
        visible in 0u32..15,
        hidden in 0u32..4,
        seed in any::<u64>(),
    ) {
        let field = random_field(Dimension::new(columns, visible, hidden), seed);
        let game = TsuGame::with_field(rule, field).unwrap();
        let decoded = payload::decode(&payload::encode(&game).unwrap()).unwrap();
        prop_assert_eq!(decoded, game);
    }
}
