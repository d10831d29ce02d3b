//! Unit-cost edit distance.

/// Minimum number of single-character insertions, deletions, or
/// substitutions (each cost 1) to transform `a` into `b`.
///
/// Case-sensitive; callers normalize case before calling. The DP table is
/// kept as two rolling rows, indexed over `char`s so multi-byte input is
/// handled correctly.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0usize; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution_cost = usize::from(ca != cb);
            current[j + 1] = (previous[j + 1] + 1)
                .min(current[j] + 1)
                .min(previous[j] + substitution_cost);
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_have_zero_distance() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("Jyoti SHG", "Jyoti SHG"), 0);
    }

    #[test]
    fn empty_against_string_is_its_length() {
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abcd", ""), 4);
    }

    #[test]
    fn kitten_to_sitting_is_three() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("sitting", "kitten"), 3);
    }

    #[test]
    fn single_substitution() {
        assert_eq!(edit_distance("no", "n0"), 1);
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(edit_distance("ná", "na"), 1);
    }
}
