//! Line scores for five-in-a-row evaluation
//!
//! A line is the run of a player's stones through one cell along one axis.
//! Its score depends on the run length and how many of its ends reached the
//! board edge.

/// Score awarded to a single line
pub struct LineScore;

impl LineScore {
    /// Five or more in a row, regardless of ends
    pub const FIVE: i32 = 100_000;
    /// Four with at least one open end
    pub const FOUR: i32 = 10_000;
    /// Three with at least one open end
    pub const THREE: i32 = 1_000;
    /// Two with at least one open end
    pub const TWO: i32 = 100;
}

/// Map a run length and open-end count to its score.
///
/// `length` includes the origin stone. Runs shorter than five with no open
/// end score nothing.
#[inline]
pub fn line_score(length: usize, open_ends: u8) -> i32 {
    match (length, open_ends) {
        (5.., _) => LineScore::FIVE,
        (4, 1..) => LineScore::FOUR,
        (3, 1..) => LineScore::THREE,
        (2, 1..) => LineScore::TWO,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_score_hierarchy() {
        assert!(LineScore::FIVE > LineScore::FOUR);
        assert!(LineScore::FOUR > LineScore::THREE);
        assert!(LineScore::THREE > LineScore::TWO);
    }

    #[test]
    fn test_five_ignores_open_ends() {
        assert_eq!(line_score(5, 0), LineScore::FIVE);
        assert_eq!(line_score(7, 2), LineScore::FIVE);
        assert_eq!(line_score(11, 0), LineScore::FIVE);
    }

    #[test]
    fn test_shorter_runs_need_an_open_end() {
        assert_eq!(line_score(4, 0), 0);
        assert_eq!(line_score(4, 1), LineScore::FOUR);
        assert_eq!(line_score(3, 0), 0);
        assert_eq!(line_score(3, 2), LineScore::THREE);
        assert_eq!(line_score(2, 0), 0);
        assert_eq!(line_score(2, 1), LineScore::TWO);
    }

    #[test]
    fn test_single_stone_scores_nothing() {
        assert_eq!(line_score(1, 2), 0);
        assert_eq!(line_score(1, 0), 0);
    }
}
