//! Pairing lookup: which game (if any) belongs to two players.

use crate::models::{GameRef, Player};

/// Find the game between `a` and `b`, regardless of seat order.
///
/// The caller guards the diagonal: `a` and `b` must be different players.
/// If the game list holds more than one game for the pair, the first one in
/// list order wins and the others are ignored. Duplicates are not checked.
pub fn find_game<'a>(games: &'a [GameRef], a: &Player, b: &Player) -> Option<&'a GameRef> {
    debug_assert_ne!(a.id, b.id, "find_game called on the diagonal");
    games.iter().find(|g| g.pairs(a.id, b.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GameSide, GameStatus};

    fn game(id: u64, p1: u64, p2: u64) -> GameRef {
        GameRef::new(
            id,
            GameSide::new(p1, 0.0),
            GameSide::new(p2, 0.0),
            GameStatus::Active,
        )
    }

    #[test]
    fn lookup_is_symmetric() {
        let (a, b, c) = (Player::new(1, "A"), Player::new(2, "B"), Player::new(3, "C"));
        let games = vec![game(10, 3, 1), game(11, 2, 1)];
        assert_eq!(find_game(&games, &a, &b).map(|g| g.id), Some(11));
        assert_eq!(find_game(&games, &b, &a).map(|g| g.id), Some(11));
        assert_eq!(find_game(&games, &a, &c).map(|g| g.id), Some(10));
        assert_eq!(find_game(&games, &c, &a).map(|g| g.id), Some(10));
        assert!(find_game(&games, &b, &c).is_none());
    }

    #[test]
    fn first_duplicate_wins() {
        let (a, b) = (Player::new(1, "A"), Player::new(2, "B"));
        let games = vec![game(20, 2, 1), game(21, 1, 2)];
        assert_eq!(find_game(&games, &a, &b).map(|g| g.id), Some(20));
        assert_eq!(find_game(&games, &b, &a).map(|g| g.id), Some(20));
    }

    #[test]
    fn a_game_with_only_one_member_does_not_match() {
        let (a, b) = (Player::new(1, "A"), Player::new(2, "B"));
        let games = vec![game(30, 1, 5), game(31, 5, 2)];
        assert!(find_game(&games, &a, &b).is_none());
    }
}
