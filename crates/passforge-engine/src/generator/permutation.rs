// Lexicographic permutation stepping

/// Reset `order` to the identity permutation of length `k`.
pub fn first_permutation(order: &mut Vec<usize>, k: usize) {
    order.clear();
    order.extend(0..k);
}

/// Rearrange `order` into the next permutation in lexicographic order.
///
/// Returns `false` when `order` was the last (descending) permutation; the
/// slice is then left untouched.
pub fn next_permutation(order: &mut [usize]) -> bool {
    let len = order.len();
    if len < 2 {
        return false;
    }
    // Longest non-increasing suffix starts at `pivot + 1`.
    let mut pivot = len - 1;
    while pivot > 0 && order[pivot - 1] >= order[pivot] {
        pivot -= 1;
    }
    if pivot == 0 {
        return false;
    }
    let pivot = pivot - 1;
    let mut swap = len - 1;
    while order[swap] <= order[pivot] {
        swap -= 1;
    }
    order.swap(pivot, swap);
    order[pivot + 1..].reverse();
    true
}
