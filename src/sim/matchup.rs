//! Team combinations and pairings.

/// Every `k`-member team drawn from `keys` without repetition.
///
/// Teams come out in lexicographic order of their positions in `keys`, and
/// members keep the roster's order. `k == 0` or `k > keys.len()` yields no
/// teams.
#[must_use]
pub fn unique_teams<T: Clone>(keys: &[T], k: usize) -> Vec<Vec<T>> {
    let n = keys.len();
    if k == 0 || k > n {
        return Vec::new();
    }

    let mut teams = Vec::new();
    let mut picks: Vec<usize> = (0..k).collect();
    loop {
        teams.push(picks.iter().map(|&i| keys[i].clone()).collect());

        // Rightmost position that can still move forward.
        let Some(pos) = (0..k).rev().find(|&p| picks[p] < n - k + p) else {
            return teams;
        };
        picks[pos] += 1;
        for p in pos + 1..k {
            picks[p] = picks[p - 1] + 1;
        }
    }
}

/// Every unordered pairing `(i, j)` with `i <= j` over `team_count` teams,
/// including each team against itself.
#[must_use]
pub fn matchups(team_count: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(matchup_count(team_count));
    for i in 0..team_count {
        pairs.extend((i..team_count).map(|j| (i, j)));
    }
    pairs
}

/// `n * (n + 1) / 2`, the length of [`matchups`].
fn matchup_count(team_count: usize) -> usize {
    team_count * (team_count + 1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_teams_order() {
        let teams = unique_teams(&["a", "b", "c", "d"], 2);
        assert_eq!(
            teams,
            vec![
                vec!["a", "b"],
                vec!["a", "c"],
                vec!["a", "d"],
                vec!["b", "c"],
                vec!["b", "d"],
                vec!["c", "d"],
            ]
        );
    }

    #[test]
    fn test_unique_teams_sizes() {
        let roster: Vec<u32> = (0..18).collect();
        assert_eq!(unique_teams(&roster, 3).len(), 816);
        assert_eq!(unique_teams(&roster, 1).len(), 18);
        assert_eq!(unique_teams(&roster, 18).len(), 1);
        assert!(unique_teams(&roster, 19).is_empty());
        assert!(unique_teams(&roster, 0).is_empty());
    }

    #[test]
    fn test_matchups() {
        assert_eq!(matchups(3), vec![(0, 0), (0, 1), (0, 2), (1, 1), (1, 2), (2, 2)]);
        assert_eq!(matchups(816).len(), matchup_count(816));
        assert!(matchups(0).is_empty());
    }
}
