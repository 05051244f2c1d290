//! Score-band grouping over sorted standings.

use std::ops::Range;

use crate::event::Standing;

/// Partition standings (already sorted best-first) into contiguous index
/// ranges of equal score.
///
/// An odd-sized band that is not the last absorbs the next standing so it
/// can be paired evenly, even though that breaks score equality for the
/// absorbed participant. The last band may stay odd; its leftover is
/// resolved by the matcher's bye logic.
pub fn score_bands(standings: &[Standing]) -> Vec<Range<usize>> {
    let mut bands = Vec::new();
    let mut index = 0;
    while index < standings.len() {
        let score = standings[index].score;
        let mut end = index + 1;
        while end < standings.len() && standings[end].score == score {
            end += 1;
        }
        if (end - index) % 2 == 1 && end < standings.len() {
            end += 1;
        }
        bands.push(index..end);
        index = end;
    }
    bands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Username;

    fn standings(scores: &[u32]) -> Vec<Standing> {
        scores
            .iter()
            .enumerate()
            .map(|(index, &score)| {
                let mut standing = Standing::zeroed(Username::from(format!("p{index}")));
                standing.score = score;
                standing
            })
            .collect()
    }

    #[test]
    fn test_empty_standings() {
        assert!(score_bands(&[]).is_empty());
    }

    #[test]
    fn test_uniform_scores_form_one_band() {
        assert_eq!(score_bands(&standings(&[0, 0, 0, 0])), vec![0..4]);
    }

    #[test]
    fn test_last_band_may_stay_odd() {
        assert_eq!(score_bands(&standings(&[0, 0, 0, 0, 0])), vec![0..5]);
    }

    #[test]
    fn test_odd_band_absorbs_next_standing() {
        // Three at 3 points, three at 0: the first band takes one extra and
        // leaves the last band odd.
        assert_eq!(
            score_bands(&standings(&[3, 3, 3, 0, 0, 0])),
            vec![0..4, 4..6]
        );
    }

    #[test]
    fn test_even_bands_stay_aligned_with_scores() {
        assert_eq!(
            score_bands(&standings(&[6, 6, 3, 3, 0, 0])),
            vec![0..2, 2..4, 4..6]
        );
    }

    #[test]
    fn test_cascading_absorption() {
        // Every score is distinct, so each band of one keeps absorbing its
        // follower.
        assert_eq!(score_bands(&standings(&[9, 6, 3, 0])), vec![0..2, 2..4]);
    }

    #[test]
    fn test_single_participant() {
        assert_eq!(score_bands(&standings(&[0])), vec![0..1]);
    }
}
