//! Defines the fixed category list used to group expense records.
//!
//! The list is fixed at build time and is not part of user data. Records
//! reference a category by its key; keys are not validated at storage time,
//! so lookups must tolerate unknown keys.

/// A category a record can belong to: a stable key plus display data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Stable key stored on records.
    pub key: &'static str,
    /// Display name, pt-BR.
    pub name: &'static str,
    /// Hex color used for the category's chart slice and history card.
    pub color: &'static str,
}

/// The key of the placeholder entry shown in the register form before the
/// user picks a category. Submitting with this key is a validation error.
pub const PLACEHOLDER_CATEGORY_KEY: &str = "category";

const CATEGORIES: [Category; 6] = [
    Category {
        key: "purchases",
        name: "Compras",
        color: "#5636D3",
    },
    Category {
        key: "food",
        name: "Alimentação",
        color: "#FF872C",
    },
    Category {
        key: "salary",
        name: "Salário",
        color: "#12A454",
    },
    Category {
        key: "car",
        name: "Carro",
        color: "#E83F5B",
    },
    Category {
        key: "leisure",
        name: "Lazer",
        color: "#26195C",
    },
    Category {
        key: "studies",
        name: "Estudos",
        color: "#9C001A",
    },
];

/// The full category list, in display order.
pub fn all() -> &'static [Category] {
    &CATEGORIES
}

/// Look up a category by its key.
pub fn find(key: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.key == key)
}

#[cfg(test)]
mod tests {
    use crate::category::{PLACEHOLDER_CATEGORY_KEY, all, find};

    #[test]
    fn find_returns_listed_category() {
        let category = find("food").unwrap();

        assert_eq!(category.name, "Alimentação");
    }

    #[test]
    fn find_returns_none_for_unknown_key() {
        assert!(find("not-a-category").is_none());
    }

    #[test]
    fn placeholder_is_not_a_listed_category() {
        assert!(find(PLACEHOLDER_CATEGORY_KEY).is_none());
        assert!(all().iter().all(|c| c.key != PLACEHOLDER_CATEGORY_KEY));
    }
}
