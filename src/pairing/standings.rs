//! Standings computation from match history.

use std::collections::HashMap;

use crate::event::{Match, MatchOutcome, Standing, Username};

/// Derive one standing per registered participant from the match history.
///
/// Decided matches credit the winner with a win and the loser with a loss,
/// or both sides with a draw. A bye counts as a win with no corresponding
/// loss. Matches naming participants that are no longer registered are
/// skipped.
///
/// The result is sorted by score, best first. The sort is stable, so equal
/// scores keep registration order; that is the documented tie-break.
pub fn compute_standings(participants: &[Username], matches: &[Match]) -> Vec<Standing> {
    let mut standings: Vec<Standing> = participants
        .iter()
        .cloned()
        .map(Standing::zeroed)
        .collect();
    let index_of: HashMap<&Username, usize> = participants
        .iter()
        .enumerate()
        .map(|(index, name)| (name, index))
        .collect();

    for m in matches {
        let first = index_of.get(&m.first).copied();
        let second = m
            .second
            .as_ref()
            .and_then(|name| index_of.get(name))
            .copied();

        match m.outcome {
            MatchOutcome::NoResult => {}
            MatchOutcome::FirstWon => {
                if let Some(i) = first {
                    standings[i].wins += 1;
                }
                if let Some(j) = second {
                    standings[j].losses += 1;
                }
            }
            MatchOutcome::SecondWon => {
                if let Some(i) = first {
                    standings[i].losses += 1;
                }
                if let Some(j) = second {
                    standings[j].wins += 1;
                }
            }
            MatchOutcome::Draw => {
                if let Some(i) = first {
                    standings[i].draws += 1;
                }
                if let Some(j) = second {
                    standings[j].draws += 1;
                }
            }
        }
    }

    for standing in &mut standings {
        standing.recompute_score();
    }
    standings.sort_by(|a, b| b.score.cmp(&a.score));

    standings
}
