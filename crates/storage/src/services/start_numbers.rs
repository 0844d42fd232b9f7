//! Start-number assignment and collision checks.
//!
//! Numbers are unique per event across both registrations and their
//! entered vehicles. The storage layer backs these checks with unique
//! indexes; this module gives the friendly answer first.

/// Returns the lowest positive integer not present in `taken`.
#[must_use]
pub fn lowest_free(taken: &[i32]) -> i32 {
    let mut candidate = 1;
    let mut used: Vec<i32> = taken.iter().copied().filter(|n| *n > 0).collect();
    used.sort_unstable();
    used.dedup();

    for n in used {
        if n == candidate {
            candidate += 1;
        } else if n > candidate {
            break;
        }
    }

    candidate
}

/// Returns the first of `declared` that collides with `taken`, or with
/// another declared number.
#[must_use]
pub fn first_collision(declared: &[i32], taken: &[i32]) -> Option<i32> {
    let mut seen = Vec::with_capacity(declared.len());

    for n in declared {
        if taken.contains(n) || seen.contains(n) {
            return Some(*n);
        }
        seen.push(*n);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowest_free_empty() {
        assert_eq!(lowest_free(&[]), 1);
    }

    #[test]
    fn test_lowest_free_fills_gap() {
        assert_eq!(lowest_free(&[1, 2, 4, 5]), 3);
    }

    #[test]
    fn test_lowest_free_appends_after_contiguous_run() {
        assert_eq!(lowest_free(&[1, 2, 3]), 4);
    }

    #[test]
    fn test_lowest_free_ignores_high_declared_numbers() {
        // Athlete-declared vehicle numbers can be arbitrary; auto
        // assignment still starts from 1.
        assert_eq!(lowest_free(&[7, 42]), 1);
    }

    #[test]
    fn test_lowest_free_unsorted_with_duplicates() {
        assert_eq!(lowest_free(&[3, 1, 1, 2]), 4);
    }

    #[test]
    fn test_lowest_free_ignores_non_positive() {
        assert_eq!(lowest_free(&[0, -3, 2]), 1);
    }

    #[test]
    fn test_first_collision_against_taken() {
        assert_eq!(first_collision(&[7], &[7, 9]), Some(7));
        assert_eq!(first_collision(&[8], &[7, 9]), None);
    }

    #[test]
    fn test_first_collision_within_declared() {
        assert_eq!(first_collision(&[5, 6, 5], &[]), Some(5));
    }

    #[test]
    fn test_first_collision_empty_declared() {
        assert_eq!(first_collision(&[], &[1, 2]), None);
    }
}
