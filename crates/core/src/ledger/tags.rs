//! Known location, payment method and expense category tags.
//!
//! Tags are free-form: values outside these sets are accepted everywhere and
//! only reported by the `is_known_*` helpers.

/// Locations the business sells from.
pub const LOCATIONS: [&str; 3] = ["Abidjan", "Paris", "En ligne"];

/// Payment methods offered at checkout.
pub const PAYMENT_METHODS: [&str; 7] = [
    "Espèces",
    "Carte bancaire",
    "Mobile money",
    "Orange Money",
    "Moov Money",
    "MTN Money",
    "Wave",
];

/// Expense categories.
pub const EXPENSE_CATEGORIES: [&str; 7] = [
    "Conception",
    "Accessoires",
    "Charges fixes",
    "Salaires",
    "Marketing",
    "Logistique",
    "Autres",
];

/// Returns true if `location` is one of [`LOCATIONS`] (case-insensitive).
#[must_use]
pub fn is_known_location(location: &str) -> bool {
    contains_tag(&LOCATIONS, location)
}

/// Returns true if `method` is one of [`PAYMENT_METHODS`] (case-insensitive).
#[must_use]
pub fn is_known_payment_method(method: &str) -> bool {
    contains_tag(&PAYMENT_METHODS, method)
}

/// Returns true if `category` is one of [`EXPENSE_CATEGORIES`] (case-insensitive).
#[must_use]
pub fn is_known_category(category: &str) -> bool {
    contains_tag(&EXPENSE_CATEGORIES, category)
}

fn contains_tag(known: &[&str], value: &str) -> bool {
    let value = value.trim().to_lowercase();
    known.iter().any(|tag| tag.to_lowercase() == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags() {
        assert!(is_known_location("paris"));
        assert!(!is_known_location("Dakar"));
        assert!(is_known_payment_method("ESPÈCES"));
        assert!(is_known_payment_method("Wave"));
        assert!(!is_known_payment_method("Chèque"));
        assert!(is_known_category("Charges fixes"));
        assert!(!is_known_category("Divers"));
    }
}
