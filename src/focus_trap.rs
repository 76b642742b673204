/// Where Tab should move focus inside a trapped container of `count`
/// focusable controls. `None` leaves the browser's default behaviour alone;
/// `Some(index)` means cancel the key press and focus that control instead.
pub fn wrap_target(focused: Option<usize>, count: usize, shift: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let last = count - 1;
    match (focused, shift) {
        (Some(0), true) => Some(last),
        (Some(index), false) if index == last => Some(0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tab_from_last_wraps_to_first() {
        assert_eq!(wrap_target(Some(4), 5, false), Some(0));
    }

    #[test]
    fn shift_tab_from_first_wraps_to_last() {
        assert_eq!(wrap_target(Some(0), 5, true), Some(4));
    }

    #[test]
    fn middle_controls_use_default_order() {
        assert_eq!(wrap_target(Some(2), 5, false), None);
        assert_eq!(wrap_target(Some(2), 5, true), None);
        assert_eq!(wrap_target(Some(0), 5, false), None);
    }

    #[test]
    fn focus_outside_or_empty_container() {
        assert_eq!(wrap_target(None, 5, false), None);
        assert_eq!(wrap_target(Some(0), 0, true), None);
    }

    #[test]
    fn single_control_wraps_onto_itself() {
        assert_eq!(wrap_target(Some(0), 1, false), Some(0));
        assert_eq!(wrap_target(Some(0), 1, true), Some(0));
    }
}
