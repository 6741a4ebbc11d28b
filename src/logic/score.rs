//! Final score column: a player's points summed over their games.

use crate::models::{GameRef, GameSide, Player};

/// Sum of `player`'s recorded score over every game they sit in.
///
/// A score that is not a number contributes 0 so one bad record does not
/// take the whole table down.
pub fn total_score(games: &[GameRef], player: &Player) -> f64 {
    games
        .iter()
        .flat_map(|g| [(g, &g.player1), (g, &g.player2)])
        .filter(|(_, side)| side.id == player.id)
        .map(|(g, side)| side_points(g, side))
        .sum()
}

/// Numeric value of one seat's score, 0 if it cannot be read.
fn side_points(game: &GameRef, side: &GameSide) -> f64 {
    match side.score.points() {
        Some(points) => points,
        None => {
            log::warn!(
                "game {}: non-numeric score {:?} for player {}, counting 0",
                game.id,
                side.score,
                side.id
            );
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GameStatus, RawScore};

    fn finished(id: u64, p1: (u64, RawScore), p2: (u64, RawScore)) -> GameRef {
        GameRef::new(
            id,
            GameSide::new(p1.0, p1.1),
            GameSide::new(p2.0, p2.1),
            GameStatus::Finished,
        )
    }

    fn pts(n: f64) -> RawScore {
        RawScore::Number(n)
    }

    #[test]
    fn no_games_scores_zero() {
        assert_eq!(total_score(&[], &Player::new(1, "A")), 0.0);
    }

    #[test]
    fn sums_both_seats() {
        let a = Player::new(1, "A");
        let games = vec![
            finished(1, (1, pts(1.0)), (2, pts(0.0))),
            finished(2, (3, pts(0.5)), (1, pts(0.5))),
            finished(3, (2, pts(1.0)), (3, pts(0.0))),
        ];
        assert_eq!(total_score(&games, &a), 1.5);
        assert_eq!(total_score(&games, &Player::new(3, "C")), 0.5);
    }

    #[test]
    fn bad_scores_count_as_zero() {
        let a = Player::new(1, "A");
        let games = vec![
            finished(1, (1, RawScore::Text("abc".into())), (2, pts(1.0))),
            finished(2, (3, pts(0.0)), (1, RawScore::Text("1".into()))),
            finished(3, (1, RawScore::default()), (4, pts(1.0))),
        ];
        assert_eq!(total_score(&games, &a), 1.0);
    }
}
