//! Tests for the link codec.

use decider::{codec, Duel, Move, Outcome, Phase, Role, Submission};
use strum::IntoEnumIterator;
use url::Url;

/// Every duel snapshot the public operations can produce.
fn all_duels() -> Vec<Duel> {
    let mut duels = vec![Duel::new()];

    for attack in Move::iter() {
        let awaiting = Duel::new()
            .submit(Submission::new(Role::Attacker, attack))
            .expect("attacker opens");
        duels.push(awaiting);

        for defense in Move::iter() {
            let resolved = awaiting
                .submit(Submission::new(Role::Defender, defense))
                .expect("defender answers");
            duels.push(resolved);
            duels.push(resolved.finalize().expect("finalize resolved duel"));
        }
    }

    duels
}

#[test]
fn test_round_trip_over_every_snapshot() {
    let duels = all_duels();
    // 1 opening + 3 awaiting + 9 resolved x 2 finalized states
    assert_eq!(duels.len(), 22);

    for duel in duels {
        let link = codec::encode(&duel);
        assert_eq!(codec::decode(&link), Some(duel), "link {}", link);
    }
}

#[test]
fn test_scenario_full_round() {
    // Attacker opens with rock.
    let duel = Duel::new()
        .submit(Submission::new(Role::Attacker, Move::Rock))
        .expect("attacker opens");
    assert_eq!(duel.phase(), Phase::AwaitingResponse);
    assert_eq!(
        codec::encode(&duel).query(),
        Some("attackerMove=rock&finalized=false")
    );

    // Defender answers with scissor; rock wins.
    let duel = duel
        .submit(Submission::new(Role::Defender, Move::Scissor))
        .expect("defender answers");
    assert_eq!(duel.phase(), Phase::Resolved);
    assert_eq!(duel.result(), Outcome::Winner(Role::Attacker));

    // Making it official carries all three keys and keeps the result.
    let official = duel.finalize().expect("finalize resolved duel");
    assert_eq!(
        codec::encode(&official).query(),
        Some("attackerMove=rock&defenderMove=scissor&finalized=true")
    );
    assert_eq!(official.result(), Outcome::Winner(Role::Attacker));
}

#[test]
fn test_decode_unrecognized_move_token_drops_field() {
    let duel = codec::decode_str(
        "https://www.simpleandpretty.co/decider?attackerMove=lizard&finalized=false",
    )
    .expect("decode succeeds without the bad field");

    assert_eq!(duel.attacker_move(), None);
    assert!(!duel.finalized());
    assert_eq!(duel.phase(), Phase::Opening);
}

#[test]
fn test_decode_unknown_keys_ignored() {
    let duel = codec::decode_str(
        "https://www.simpleandpretty.co/decider?attackerMove=paper&color=red&finalized=false",
    )
    .expect("unknown keys are not fatal");

    assert_eq!(duel.attacker_move(), Some(Move::Paper));
    assert_eq!(duel.phase(), Phase::AwaitingResponse);
}

#[test]
fn test_decode_unparseable_boolean_defaults_to_false() {
    let duel = codec::decode_str(
        "https://www.simpleandpretty.co/decider?attackerMove=rock&defenderMove=rock&finalized=maybe",
    )
    .expect("bad boolean is not fatal");

    assert!(!duel.finalized());
    assert_eq!(duel.phase(), Phase::Resolved);
}

#[test]
fn test_decode_garbage_identifier_is_absent() {
    assert_eq!(codec::decode_str("not a url at all"), None);
    assert_eq!(codec::decode_str(""), None);
}

#[test]
fn test_decode_link_without_query_is_absent() {
    assert_eq!(codec::decode_str("https://www.simpleandpretty.co/decider"), None);

    let url = Url::parse("https://www.simpleandpretty.co/other/path").expect("valid url");
    assert_eq!(codec::decode(&url), None);
}

#[test]
fn test_decode_rejects_defender_without_attacker() {
    assert_eq!(
        codec::decode_str("https://www.simpleandpretty.co/decider?defenderMove=rock&finalized=false"),
        None
    );

    // Same when the attacker token fails to parse but the defender's holds.
    assert_eq!(
        codec::decode_str(
            "https://www.simpleandpretty.co/decider?attackerMove=lizard&defenderMove=rock&finalized=false"
        ),
        None
    );
}

#[test]
fn test_decode_clears_premature_finalized_flag() {
    let duel = codec::decode_str(
        "https://www.simpleandpretty.co/decider?attackerMove=rock&finalized=true",
    )
    .expect("decode succeeds with the flag cleared");

    assert!(!duel.finalized());
    assert_eq!(duel.phase(), Phase::AwaitingResponse);
}

#[test]
fn test_decode_empty_move_value_drops_field() {
    let duel = codec::decode_str(
        "https://www.simpleandpretty.co/decider?attackerMove=&finalized=false",
    )
    .expect("empty value is not fatal");

    assert_eq!(duel.attacker_move(), None);
}

#[test]
fn test_decode_accepts_foreign_base() {
    // The query carries the state; the base is not inspected.
    let duel = codec::decode_str("https://example.com/x?attackerMove=scissor&finalized=false")
        .expect("foreign base still decodes");

    assert_eq!(duel.attacker_move(), Some(Move::Scissor));
}
