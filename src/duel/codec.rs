//! Link codec for duels.
//!
//! The encoded URL is the sole persistence and transport format: every hop
//! between participants is an encode/decode pair, so `decode(encode(d))`
//! must reproduce `d` exactly.

use super::state::Duel;
use super::types::Move;
use tracing::{debug, instrument, warn};
use url::Url;

/// Base identifier whose query string carries the encoded state.
pub const BASE_URL: &str = "https://www.simpleandpretty.co/decider";

const KEY_ATTACKER_MOVE: &str = "attackerMove";
const KEY_DEFENDER_MOVE: &str = "defenderMove";
const KEY_FINALIZED: &str = "finalized";

/// Encodes a duel as a shareable link.
///
/// Move keys are present iff the move was submitted; `finalized` is always
/// present. Key order is stable: attacker, defender, finalized.
#[instrument]
pub fn encode(duel: &Duel) -> Url {
    let mut url = Url::parse(BASE_URL).expect("base identifier is a valid URL");

    {
        let mut pairs = url.query_pairs_mut();
        if let Some(attack) = duel.attacker_move() {
            pairs.append_pair(KEY_ATTACKER_MOVE, &attack.to_string());
        }
        if let Some(defense) = duel.defender_move() {
            pairs.append_pair(KEY_DEFENDER_MOVE, &defense.to_string());
        }
        pairs.append_pair(KEY_FINALIZED, &duel.finalized().to_string());
    }

    url
}

/// Decodes a duel from a link.
///
/// Returns `None` when the identifier carries no query at all, or when the
/// decoded fields describe a state no legal play can reach. Unrecognized
/// keys and unparseable values are dropped field by field instead of
/// failing the whole decode, so peers can add fields without breaking
/// older clients. Callers treat `None` as "no prior duel".
#[instrument]
pub fn decode(url: &Url) -> Option<Duel> {
    url.query()?;

    let mut attacker = None;
    let mut defender = None;
    let mut finalized = false;

    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            KEY_ATTACKER_MOVE => attacker = parse_move(KEY_ATTACKER_MOVE, &value),
            KEY_DEFENDER_MOVE => defender = parse_move(KEY_DEFENDER_MOVE, &value),
            KEY_FINALIZED => finalized = value.parse().unwrap_or(false),
            _ => debug!(key = %key, "unknown key on decoding"),
        }
    }

    if finalized && (attacker.is_none() || defender.is_none()) {
        // The flag can only follow both moves; clear it rather than carry
        // an unreachable state.
        warn!(url = %url, "finalized flag ahead of both moves; clearing");
        finalized = false;
    }

    let duel = Duel::from_parts(attacker, defender, finalized);
    if duel.is_none() {
        warn!(url = %url, "defender move without attacker move; rejecting");
    }
    duel
}

/// Parses a duel link from raw text.
#[instrument]
pub fn decode_str(raw: &str) -> Option<Duel> {
    let url = Url::parse(raw).ok()?;
    decode(&url)
}

fn parse_move(key: &'static str, value: &str) -> Option<Move> {
    let parsed = Move::parse(value);
    if parsed.is_none() {
        warn!(key, value, "unrecognized move token; dropping field");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duel::{Role, Submission};

    #[test]
    fn test_encode_opening_has_only_finalized() {
        let link = encode(&Duel::new());
        assert_eq!(link.query(), Some("finalized=false"));
    }

    #[test]
    fn test_encode_is_stable() {
        let duel = Duel::new()
            .submit(Submission::new(Role::Attacker, Move::Rock))
            .unwrap();
        assert_eq!(
            encode(&duel).as_str(),
            "https://www.simpleandpretty.co/decider?attackerMove=rock&finalized=false"
        );
    }

    #[test]
    fn test_decode_without_query_is_absent() {
        let url = Url::parse(BASE_URL).unwrap();
        assert_eq!(decode(&url), None);
    }

    #[test]
    fn test_decode_repeated_key_last_wins() {
        let duel = decode_str(
            "https://www.simpleandpretty.co/decider?attackerMove=rock&attackerMove=paper&finalized=false",
        )
        .unwrap();
        assert_eq!(duel.attacker_move(), Some(Move::Paper));
    }
}
