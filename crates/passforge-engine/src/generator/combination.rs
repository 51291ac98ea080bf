// k-subset cursor over indices 0..n in lexicographic order

/// Reset `indices` to the first k-subset `[0, 1, .., k-1]`.
pub fn first_combination(indices: &mut Vec<usize>, k: usize) {
    indices.clear();
    indices.extend(0..k);
}

/// Advance `indices` (strictly increasing, each `< n`) to the next k-subset
/// in lexicographic order.
///
/// Returns `false`, leaving `indices` unchanged, when it already holds the
/// last subset `[n-k, .., n-1]`.
pub fn next_combination(indices: &mut [usize], n: usize) -> bool {
    let k = indices.len();
    if k == 0 || k > n {
        return false;
    }
    // Rightmost position that can still move right.
    let mut i = k;
    while i > 0 {
        i -= 1;
        if indices[i] < n - k + i {
            indices[i] += 1;
            for j in i + 1..k {
                indices[j] = indices[j - 1] + 1;
            }
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
        let mut cur = Vec::new();
        first_combination(&mut cur, k);
        let mut out = vec![cur.clone()];
        while next_combination(&mut cur, n) {
            out.push(cur.clone());
        }
        out
    }

    #[test]
    fn pairs_of_four() {
        assert_eq!(
            all_combinations(4, 2),
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3],
            ]
        );
    }

    #[test]
    fn counts_match_binomial() {
        assert_eq!(all_combinations(5, 1).len(), 5);
        assert_eq!(all_combinations(5, 3).len(), 10);
        assert_eq!(all_combinations(6, 4).len(), 15);
        assert_eq!(all_combinations(3, 3).len(), 1);
    }

    #[test]
    fn last_subset_stays_put() {
        let mut cur = vec![2, 3];
        assert!(!next_combination(&mut cur, 4));
        assert_eq!(cur, vec![2, 3]);
    }

    #[test]
    fn degenerate_sizes() {
        let mut empty: Vec<usize> = Vec::new();
        assert!(!next_combination(&mut empty, 3));
        let mut too_big = vec![0, 1, 2];
        assert!(!next_combination(&mut too_big, 2));
    }
}
