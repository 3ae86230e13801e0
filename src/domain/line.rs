use super::amount::coerce_amount;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// One of the four user-editable fields of an invoice line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputField {
    Qty,
    Price,
    #[serde(alias = "discount_per")]
    DiscountPer,
    #[serde(alias = "tax_per")]
    TaxPer,
}

impl InputField {
    /// All fields, in form order.
    pub const ALL: [InputField; 4] = [
        InputField::Qty,
        InputField::Price,
        InputField::DiscountPer,
        InputField::TaxPer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            InputField::Qty => "qty",
            InputField::Price => "price",
            InputField::DiscountPer => "discountPer",
            InputField::TaxPer => "taxPer",
        }
    }

    /// Human-readable label shown next to the input box.
    pub fn label(self) -> &'static str {
        match self {
            InputField::Qty => "Qty",
            InputField::Price => "Price",
            InputField::DiscountPer => "Discount Per",
            InputField::TaxPer => "Tax Per",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The raw text of the four input fields.
///
/// Text is kept verbatim so a half-typed or empty box round-trips to the form
/// unchanged; numbers are only read out of it through [`coerce_amount`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLineInput {
    pub qty: String,
    pub price: String,
    pub discount_per: String,
    pub tax_per: String,
}

impl InvoiceLineInput {
    pub fn raw(&self, field: InputField) -> &str {
        match field {
            InputField::Qty => &self.qty,
            InputField::Price => &self.price,
            InputField::DiscountPer => &self.discount_per,
            InputField::TaxPer => &self.tax_per,
        }
    }

    pub fn set(&mut self, field: InputField, value: impl Into<String>) {
        let slot = match field {
            InputField::Qty => &mut self.qty,
            InputField::Price => &mut self.price,
            InputField::DiscountPer => &mut self.discount_per,
            InputField::TaxPer => &mut self.tax_per,
        };
        *slot = value.into();
    }

    /// Numeric value of a field, with unreadable text counting as zero.
    pub fn value(&self, field: InputField) -> Decimal {
        coerce_amount(self.raw(field))
    }
}

/// An invoice line: raw input plus the amounts derived from it.
///
/// The derived amounts are only ever produced by [`InvoiceLineRecord::from_input`],
/// so they always agree with the raw text.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLineRecord {
    #[serde(flatten)]
    input: InvoiceLineInput,
    discount: Decimal,
    tax: Decimal,
    total_price: Decimal,
}

impl InvoiceLineRecord {
    /// Computes discount, tax and total for `input`.
    ///
    /// Tax applies to the subtotal after discount. Percentages are not
    /// range-checked; anything the inputs produce is carried through.
    pub fn from_input(input: InvoiceLineInput) -> Self {
        let qty = input.value(InputField::Qty);
        let price = input.value(InputField::Price);
        let discount_per = input.value(InputField::DiscountPer);
        let tax_per = input.value(InputField::TaxPer);

        let gross = qty.saturating_mul(price);
        let discount = gross.saturating_mul(discount_per) / HUNDRED;
        let net = gross.saturating_sub(discount);
        let tax = net.saturating_mul(tax_per) / HUNDRED;
        let total_price = net.saturating_add(tax);

        Self {
            input,
            discount: discount.normalize(),
            tax: tax.normalize(),
            total_price: total_price.normalize(),
        }
    }

    pub fn input(&self) -> &InvoiceLineInput {
        &self.input
    }

    pub fn discount(&self) -> Decimal {
        self.discount
    }

    pub fn tax(&self) -> Decimal {
        self.tax
    }

    pub fn total_price(&self) -> Decimal {
        self.total_price
    }
}

/// Applies a single field edit to `current` and recomputes the derived amounts.
pub fn derive_record(
    current: &InvoiceLineInput,
    field: InputField,
    value: &str,
) -> InvoiceLineRecord {
    let mut input = current.clone();
    input.set(field, value);
    let record = InvoiceLineRecord::from_input(input);
    debug!(
        %field,
        label = field.label(),
        discount = %record.discount,
        tax = %record.tax,
        total_price = %record.total_price,
        "derived invoice line"
    );
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn input(qty: &str, price: &str, discount_per: &str, tax_per: &str) -> InvoiceLineInput {
        InvoiceLineInput {
            qty: qty.to_string(),
            price: price.to_string(),
            discount_per: discount_per.to_string(),
            tax_per: tax_per.to_string(),
        }
    }

    #[test]
    fn test_discount_then_tax() {
        let record = InvoiceLineRecord::from_input(input("2", "100", "10", "5"));
        assert_eq!(record.discount(), dec!(20));
        assert_eq!(record.tax(), dec!(9));
        assert_eq!(record.total_price(), dec!(189));
    }

    #[test]
    fn test_blank_qty_zeroes_everything() {
        let record = InvoiceLineRecord::from_input(input("", "50", "0", "0"));
        assert_eq!(record.discount(), Decimal::ZERO);
        assert_eq!(record.tax(), Decimal::ZERO);
        assert_eq!(record.total_price(), Decimal::ZERO);
    }

    #[test]
    fn test_tax_is_charged_on_discounted_subtotal() {
        let record = InvoiceLineRecord::from_input(input("1", "200", "50", "10"));
        // 10% of 100, not of 200.
        assert_eq!(record.tax(), dec!(10));
        assert_eq!(record.total_price(), dec!(110));
    }

    #[test]
    fn test_fractional_amounts_are_exact() {
        let record = InvoiceLineRecord::from_input(input("3", "19.99", "7.5", "8.25"));
        // gross 59.97, discount 4.49775, net 55.47225, tax 4.576460625
        assert_eq!(record.discount(), dec!(4.49775));
        assert_eq!(record.tax(), dec!(4.576460625));
        assert_eq!(record.total_price(), dec!(60.048710625));
    }

    #[test]
    fn test_out_of_range_inputs_are_carried_through() {
        let record = InvoiceLineRecord::from_input(input("-2", "10", "150", "-10"));
        // gross -20, discount -30, net 10, tax -1
        assert_eq!(record.discount(), dec!(-30));
        assert_eq!(record.tax(), dec!(-1));
        assert_eq!(record.total_price(), dec!(9));
    }

    #[test]
    fn test_huge_inputs_saturate_instead_of_panicking() {
        let big = "79228162514264337593543950335";
        let record = InvoiceLineRecord::from_input(input(big, big, "100", "0"));
        assert_eq!(record.discount(), Decimal::MAX / HUNDRED);
    }

    #[test]
    fn test_derive_record_replaces_only_the_changed_field() {
        let current = input("2", "100", "10", "5");
        let record = derive_record(&current, InputField::Price, "50");

        assert_eq!(record.input().qty, "2");
        assert_eq!(record.input().price, "50");
        assert_eq!(record.input().discount_per, "10");
        assert_eq!(record.input().tax_per, "5");
        assert_eq!(record.total_price(), dec!(94.5));
        // The caller's state is untouched.
        assert_eq!(current.price, "100");
    }

    #[test]
    fn test_derive_record_keeps_raw_text() {
        let record = derive_record(&InvoiceLineInput::default(), InputField::Qty, "3x");
        assert_eq!(record.input().raw(InputField::Qty), "3x");
        assert_eq!(record.input().value(InputField::Qty), dec!(3));

        let cleared = derive_record(record.input(), InputField::Qty, "");
        assert_eq!(cleared.input().qty, "");
        assert_eq!(cleared.total_price(), Decimal::ZERO);
    }

    #[test]
    fn test_field_names_and_labels() {
        let names: Vec<_> = InputField::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names, ["qty", "price", "discountPer", "taxPer"]);
        assert_eq!(InputField::DiscountPer.label(), "Discount Per");
        assert_eq!(InputField::TaxPer.to_string(), "taxPer");
    }

    #[test]
    fn test_record_serializes_flat() {
        let record = InvoiceLineRecord::from_input(input("2", "100", "10", "5"));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["qty"], "2");
        assert_eq!(json["discountPer"], "10");
        assert_eq!(json["discount"], "20");
        assert_eq!(json["totalPrice"], "189");
    }
}
