use crate::domain::category::Category;
use crate::domain::currency::CurrencyFormatter;
use crate::domain::customer::Customer;
use crate::domain::tax::TaxTable;
use crate::domain::transaction::validate_rental;
use crate::error::{RentalError, Result};
use rust_decimal::Decimal;

/// A computed price: the raw amount and its customer-facing rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub amount: Decimal,
    pub formatted: String,
}

/// Applies the age surcharge to a category's nightly price.
///
/// `amount = base_price_per_day * days * (1 + multiplier(age))`
///
/// Customers at or below the table's `minimum_age` are never priced.
#[derive(Debug, Clone)]
pub struct PricingEngine {
    tax_table: TaxTable,
    formatter: CurrencyFormatter,
}

impl PricingEngine {
    pub fn new(tax_table: TaxTable, formatter: CurrencyFormatter) -> Self {
        Self {
            tax_table,
            formatter,
        }
    }

    pub fn tax_table(&self) -> &TaxTable {
        &self.tax_table
    }

    pub fn formatter(&self) -> &CurrencyFormatter {
        &self.formatter
    }

    /// Surcharge fraction for `age`.
    ///
    /// Ages outside every bracket are a business rule failure, never a zero
    /// surcharge.
    pub fn multiplier_for(&self, age: u32) -> Result<Decimal> {
        self.tax_table
            .bracket_for(age)
            .map(|bracket| bracket.multiplier)
            .ok_or_else(|| {
                RentalError::BusinessRuleViolation(format!(
                    "no tax bracket for age {age} (customers must be older than {})",
                    self.tax_table.minimum_age()
                ))
            })
    }

    pub fn compute_amount(
        &self,
        customer: &Customer,
        category: &Category,
        number_of_days: u32,
    ) -> Result<Decimal> {
        validate_rental(customer, category, number_of_days)?;
        let base_price = category.price()?;

        let multiplier = self.multiplier_for(customer.age)?;
        let gross = base_price
            .checked_mul(Decimal::from(number_of_days))
            .and_then(|subtotal| subtotal.checked_mul(Decimal::ONE + multiplier))
            .ok_or_else(|| RentalError::InvalidInput("rental amount overflows".to_string()))?;

        tracing::debug!(
            category = %category.id,
            age = customer.age,
            days = number_of_days,
            %multiplier,
            amount = %gross,
            "computed rental amount"
        );
        Ok(gross)
    }

    pub fn quote(
        &self,
        customer: &Customer,
        category: &Category,
        number_of_days: u32,
    ) -> Result<Quote> {
        let amount = self.compute_amount(customer, category, number_of_days)?;
        Ok(Quote {
            amount,
            formatted: self.formatter.format(amount),
        })
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new(TaxTable::default(), CurrencyFormatter::new())
    }
}
