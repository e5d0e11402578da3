//! Rupee amounts.

use std::fmt;

/// ISO code for every amount the estimator produces.
pub const CURRENCY: &str = "INR";

/// A whole-rupee amount.
///
/// Displays with the rupee sign and Indian digit grouping
/// (thousands, then groups of two).
///
/// # Examples
///
/// ```
/// use journey_server::domain::Inr;
///
/// assert_eq!(Inr(1350).to_string(), "₹1,350");
/// assert_eq!(Inr(100_000).to_string(), "₹1,00,000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Inr(pub u64);

impl Inr {
    /// The amount in whole rupees.
    pub fn amount(self) -> u64 {
        self.0
    }

    /// The amount with Indian digit grouping and no currency sign.
    pub fn grouped(self) -> String {
        let digits = self.0.to_string();
        if digits.len() <= 3 {
            return digits;
        }

        let (head, tail) = digits.split_at(digits.len() - 3);
        let lead = head.len() % 2;

        let mut groups: Vec<&str> = Vec::with_capacity(head.len() / 2 + 2);
        if lead == 1 {
            groups.push(&head[..1]);
        }
        for start in (lead..head.len()).step_by(2) {
            groups.push(&head[start..start + 2]);
        }
        groups.push(tail);

        groups.join(",")
    }
}

impl fmt::Display for Inr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", self.grouped())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Removing the separators gives back the plain number
        #[test]
        fn grouping_preserves_digits(n in any::<u64>()) {
            let grouped = Inr(n).grouped();
            prop_assert_eq!(grouped.replace(',', ""), n.to_string());
        }

        /// The last group always has three digits once there is a separator
        #[test]
        fn last_group_is_thousands(n in 1000u64..) {
            let grouped = Inr(n).grouped();
            let last = grouped.rsplit(',').next().unwrap();
            prop_assert_eq!(last.len(), 3);
        }
    }
}
