/// Message returned for an accepted identifier.
pub const VALID_ID: &str = "Valid ID";
/// Problem detail returned for a rejected identifier.
pub const INVALID_ID: &str = "Invalid Id";

/// Outcome of checking an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Ok(String),
    Problem(String),
}

/// Even identifiers are accepted, odd ones are not. Sign does not matter.
pub fn evaluate(id: i32) -> ValidationResult {
    if id % 2 == 0 {
        ValidationResult::Ok(VALID_ID.to_string())
    } else {
        ValidationResult::Problem(INVALID_ID.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(4)]
    #[case(0)]
    #[case(-2)]
    #[case(-4)]
    #[case(i32::MIN)]
    #[case(i32::MAX - 1)]
    fn even_ids_are_valid(#[case] id: i32) {
        assert_eq!(evaluate(id), ValidationResult::Ok("Valid ID".into()));
    }

    #[rstest]
    #[case(7)]
    #[case(1)]
    #[case(-1)]
    #[case(-3)]
    #[case(i32::MAX)]
    #[case(i32::MIN + 1)]
    fn odd_ids_are_problems(#[case] id: i32) {
        assert_eq!(evaluate(id), ValidationResult::Problem("Invalid Id".into()));
    }

    proptest! {
        #[test]
        fn any_even_id_is_valid(half in (i32::MIN / 2)..=(i32::MAX / 2)) {
            let id = half * 2;
            prop_assert_eq!(evaluate(id), ValidationResult::Ok(VALID_ID.to_string()));
        }

        #[test]
        fn any_odd_id_is_a_problem(half in (i32::MIN / 2)..(i32::MAX / 2)) {
            let id = half * 2 + 1;
            prop_assert_eq!(evaluate(id), ValidationResult::Problem(INVALID_ID.to_string()));
        }

        #[test]
        fn evaluation_is_repeatable(id in any::<i32>()) {
            prop_assert_eq!(evaluate(id), evaluate(id));
        }
    }
}
