use crate::errors::ServiceError;

/// A closed symbolic value set. Variants carry a stable 1-based id so the
/// lookup endpoints can serve them as `{id, name}` rows without a backing
/// table, and coercion from free-form strings is case-insensitive everywhere.
pub trait LookupEnum: Sized + Copy + PartialEq + 'static {
    /// Field name used in coercion error messages, e.g. "order state".
    const FIELD: &'static str;

    fn variants() -> &'static [Self];
    fn as_str(&self) -> &'static str;

    fn id(&self) -> i64 {
        Self::variants()
            .iter()
            .position(|v| v == self)
            .map(|idx| idx as i64 + 1)
            .unwrap_or(0)
    }

    fn from_id(id: i64) -> Option<Self> {
        if id < 1 {
            return None;
        }
        Self::variants().get((id - 1) as usize).copied()
    }

    /// Uppercase the input and match it against the symbol set. Unknown values
    /// fail with InvalidArgument naming the field and the raw string.
    fn parse(raw: &str) -> Result<Self, ServiceError> {
        let upper = raw.trim().to_ascii_uppercase();
        Self::variants()
            .iter()
            .find(|v| v.as_str() == upper)
            .copied()
            .ok_or_else(|| {
                ServiceError::InvalidArgument(format!("Invalid {}: {raw}", Self::FIELD))
            })
    }
}

macro_rules! lookup_enum {
    ($name:ident, $field:literal, [$($variant:ident => $symbol:literal),+ $(,)?]) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl LookupEnum for $name {
            const FIELD: &'static str = $field;

            fn variants() -> &'static [Self] {
                &[$($name::$variant),+]
            }

            fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $symbol),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

lookup_enum!(OrderState, "order state", [
    Pending => "PENDING",
    Preparing => "PREPARING",
    Ready => "READY",
    Served => "SERVED",
    Paid => "PAID",
    Cancelled => "CANCELLED",
]);

lookup_enum!(TableState, "table state", [
    Available => "AVAILABLE",
    Occupied => "OCCUPIED",
    Reserved => "RESERVED",
    OutOfService => "OUT_OF_SERVICE",
]);

lookup_enum!(PaymentMethod, "payment method", [
    Cash => "CASH",
    CreditCard => "CREDIT_CARD",
    DebitCard => "DEBIT_CARD",
    MobilePayment => "MOBILE_PAYMENT",
]);

lookup_enum!(PaymentStatus, "payment status", [
    Pending => "PENDING",
    Completed => "COMPLETED",
    Failed => "FAILED",
    Refunded => "REFUNDED",
]);

lookup_enum!(Category, "category", [
    Appetizer => "APPETIZER",
    MainCourse => "MAIN_COURSE",
    Dessert => "DESSERT",
    Beverage => "BEVERAGE",
    SideDish => "SIDE_DISH",
]);

lookup_enum!(Allergen, "allergen", [
    Gluten => "GLUTEN",
    Lactose => "LACTOSE",
    Nuts => "NUTS",
    Eggs => "EGGS",
    Fish => "FISH",
    Shellfish => "SHELLFISH",
    Soy => "SOY",
    Celery => "CELERY",
]);

lookup_enum!(Role, "role", [
    Admin => "ADMIN",
    Cashier => "CASHIER",
    Waiter => "WAITER",
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coercion_is_case_insensitive() {
        for raw in ["pending", "PENDING", "Pending", "  pending "] {
            assert_eq!(OrderState::parse(raw).unwrap(), OrderState::Pending);
        }
    }

    #[test]
    fn unknown_value_names_the_raw_string_and_field() {
        let err = TableState::parse("flooded").unwrap_err();
        match err {
            ServiceError::InvalidArgument(msg) => {
                assert_eq!(msg, "Invalid table state: flooded");
            }
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn ids_are_stable_and_one_based() {
        assert_eq!(OrderState::Pending.id(), 1);
        assert_eq!(OrderState::Cancelled.id(), 6);
        assert_eq!(OrderState::from_id(6), Some(OrderState::Cancelled));
        assert_eq!(OrderState::from_id(0), None);
        assert_eq!(OrderState::from_id(7), None);
    }

    #[test]
    fn allergen_ids_roundtrip() {
        for allergen in Allergen::variants() {
            assert_eq!(Allergen::from_id(allergen.id()), Some(*allergen));
        }
    }

    #[test]
    fn every_enum_parses_its_own_symbols() {
        for role in Role::variants() {
            assert_eq!(Role::parse(role.as_str()).unwrap(), *role);
        }
        for method in PaymentMethod::variants() {
            assert_eq!(PaymentMethod::parse(method.as_str()).unwrap(), *method);
        }
        for category in Category::variants() {
            assert_eq!(Category::parse(category.as_str()).unwrap(), *category);
        }
    }
}
