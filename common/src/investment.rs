//! # Investment Input Model
//!
//! The raw figures describing a single property purchase, exactly as the
//! user typed them. Monetary fields share one currency unit; rate fields
//! are decimal fractions (0.05 = 5%).

/// The ten figures collected for one evaluation.
///
/// Values are non-negative by convention and never validated against
/// each other (the loan may exceed the price, the EMI may dwarf the
/// rent). The calculators are expected to cope.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyInputs {
    /// Purchase price of the property.
    pub price: f64,
    /// Principal borrowed against the property.
    pub loan_amount: f64,
    /// Rent collected per month.
    pub monthly_rent: f64,
    /// Equated monthly installment on the loan.
    pub monthly_emi: f64,
    /// Total cash put in up front (down payment, fees, furnishing).
    pub cash_invested: f64,
    /// Expected annual price appreciation.
    pub appreciation_rate: f64,
    /// Expected annual rent growth.
    pub rent_growth_rate: f64,
    /// Fraction of the year the property is expected to sit empty.
    pub vacancy_rate: f64,
    /// Maintenance cost per year.
    pub annual_maintenance: f64,
    /// Tax rate applied to positive rental profit.
    pub tax_rate: f64,
}
