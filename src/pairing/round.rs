//! Round planning across score bands.

use crate::event::{Match, Standing};

use super::{bands::score_bands, matcher::pair_band};

/// Plan one round's matches for a whole event: group the sorted standings
/// into score bands and pair each band, concatenating the results in
/// descending-score band order.
///
/// Pure planning. Appending the matches to the event history and
/// scheduling the round reminder are the event actor's job.
pub fn plan_round(standings: &[Standing], history: &[Match]) -> Vec<Match> {
    let mut matches = Vec::new();
    for band in score_bands(standings) {
        matches.extend(pair_band(&standings[band], history));
    }
    matches
}
