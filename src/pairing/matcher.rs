//! Rematch-avoiding pairing for one score band.
//!
//! Pairing is a matching problem on the "has not already played" graph. An
//! augmenting-path search grows the matching one pair at a time. The band
//! graph is general rather than bipartite, and without blossom contraction
//! the search can miss augmenting structures that run through odd cycles,
//! so the result is a best-effort matching, not a guaranteed maximum.
//! Anyone left unmatched falls through to the fallback path, which keeps
//! the band fully covered at the cost of allowing rematches there.

use std::collections::{HashMap, HashSet};

use crate::event::{Match, Standing, Username};

/// One frame per node expanded along the current alternating path.
struct Frame {
    node: usize,
    edge: usize,
}

/// Pair every participant of one band, avoiding opponents already faced
/// anywhere in `history` where possible.
///
/// Unmatched participants are collected in standings order and paired off
/// two at a time; such fallback pairs may be rematches. A final odd
/// leftover receives a bye, decided as a win on the spot.
pub fn pair_band(band: &[Standing], history: &[Match]) -> Vec<Match> {
    let n = band.len();
    let adj = constraint_graph(band, history);

    let mut mate: Vec<Option<usize>> = vec![None; n];
    for start in 0..n {
        if mate[start].is_none() {
            try_augment(start, &adj, &mut mate);
        }
    }

    let mut matches = Vec::with_capacity(n / 2 + 1);
    for i in 0..n {
        if let Some(j) = mate[i]
            && i < j
        {
            matches.push(Match::new(band[i].name.clone(), band[j].name.clone()));
        }
    }

    let leftovers: Vec<usize> = (0..n).filter(|&i| mate[i].is_none()).collect();
    if !leftovers.is_empty() {
        log::debug!(
            "Band of {n}: {} paired by matching, {} left over",
            n - leftovers.len(),
            leftovers.len()
        );
    }
    for chunk in leftovers.chunks(2) {
        match *chunk {
            [i, j] => matches.push(Match::new(band[i].name.clone(), band[j].name.clone())),
            [i] => matches.push(Match::bye(band[i].name.clone())),
            _ => unreachable!("chunks(2) yields one or two indices"),
        }
    }

    matches
}

/// Adjacency lists for the band: an edge joins two participants unless
/// they already share a recorded match with a real opponent. Byes never
/// forbid anything.
fn constraint_graph(band: &[Standing], history: &[Match]) -> Vec<Vec<usize>> {
    let n = band.len();
    let index_of: HashMap<&Username, usize> = band
        .iter()
        .enumerate()
        .map(|(index, standing)| (&standing.name, index))
        .collect();

    let mut played: Vec<HashSet<usize>> = vec![HashSet::new(); n];
    for m in history {
        let Some(second) = &m.second else {
            continue;
        };
        if let (Some(&i), Some(&j)) = (index_of.get(&m.first), index_of.get(second)) {
            played[i].insert(j);
            played[j].insert(i);
        }
    }

    let mut adj: Vec<Vec<usize>> = vec![Vec::new(); n];
    for i in 0..n {
        for j in (i + 1)..n {
            if !played[i].contains(&j) {
                adj[i].push(j);
                adj[j].push(i);
            }
        }
    }
    adj
}

/// Grow the matching by one pair if an augmenting path from `start`
/// exists.
///
/// A free neighbor is taken outright; that is the one-edge augmenting
/// path, and skipping the search keeps neighbouring standings together.
/// Otherwise the alternating search runs, iterative with an explicit
/// frame stack so deep paths cannot exhaust the call stack. Every node is
/// visited at most once per attempt; matched nodes are marked together
/// with their mates, which keeps the mate array consistent when the path
/// is flipped.
fn try_augment(start: usize, adj: &[Vec<usize>], mate: &mut [Option<usize>]) -> bool {
    if let Some(&free) = adj[start].iter().find(|&&to| mate[to].is_none()) {
        mate[start] = Some(free);
        mate[free] = Some(start);
        return true;
    }

    let mut visited = vec![false; adj.len()];
    visited[start] = true;
    let mut stack = vec![Frame {
        node: start,
        edge: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let v = frame.node;
        let Some(&to) = adj[v].get(frame.edge) else {
            stack.pop();
            continue;
        };
        frame.edge += 1;
        if visited[to] {
            continue;
        }
        visited[to] = true;

        match mate[to] {
            // Free endpoint: flip the alternating path into the matching.
            None => {
                augment_along(&stack, to, mate);
                return true;
            }
            // Matched endpoint: extend the path through its mate.
            Some(next) => {
                visited[next] = true;
                stack.push(Frame {
                    node: next,
                    edge: 0,
                });
            }
        }
    }

    false
}

/// Re-pair every stacked node with the endpoint it reached, starting from
/// the free endpoint at the top of the path. Each node's previous mate
/// becomes the pairing target of the frame below it.
fn augment_along(stack: &[Frame], free: usize, mate: &mut [Option<usize>]) {
    let mut partner = free;
    for frame in stack.iter().rev() {
        let previous = mate[frame.node];
        mate[frame.node] = Some(partner);
        mate[partner] = Some(frame.node);
        match previous {
            Some(next_partner) => partner = next_partner,
            None => break,
        }
    }
}
