//! Derived financial metrics for a property purchase.
//!
//! Every calculator is a stateless formula over the raw inputs. Ratios
//! whose denominator is missing (zero price, zero EMI, nothing
//! invested) return 0.0 instead of failing; a missing denominator means
//! "no meaningful figure", not an error.

use propr_common::investment::PropertyInputs;

/// Rent minus EMI, per month. Negative when the loan outruns the rent.
pub fn monthly_cashflow(rent: f64, emi: f64) -> f64 {
    rent - emi
}

pub fn annual_cashflow(monthly_cashflow: f64) -> f64 {
    monthly_cashflow * 12.0
}

/// Annual cash flow as a percentage of the cash put in.
pub fn roi(annual_cashflow: f64, cash_invested: f64) -> f64 {
    if cash_invested > 0.0 {
        annual_cashflow / cash_invested * 100.0
    } else {
        0.0
    }
}

/// Annualized rent as a percentage of the purchase price.
pub fn rental_yield(rent: f64, price: f64) -> f64 {
    if price > 0.0 {
        rent * 12.0 / price * 100.0
    } else {
        0.0
    }
}

/// Loan principal as a percentage of the purchase price.
pub fn loan_to_value(loan_amount: f64, price: f64) -> f64 {
    if price > 0.0 {
        loan_amount / price * 100.0
    } else {
        0.0
    }
}

/// Compounded price after `years` of appreciation.
pub fn future_value(price: f64, appreciation_rate: f64, years: u32) -> f64 {
    price * (1.0 + appreciation_rate).powi(years as i32)
}

/// Compounded monthly rent after `years` of rent growth.
pub fn future_rent(rent: f64, rent_growth_rate: f64, years: u32) -> f64 {
    rent * (1.0 + rent_growth_rate).powi(years as i32)
}

/// Rent forfeited per year to expected vacancy.
pub fn vacancy_loss(rent: f64, vacancy_rate: f64) -> f64 {
    rent * 12.0 * vacancy_rate
}

/// Tax on the year's profit after maintenance and vacancy, floored at
/// zero: a loss-making year owes nothing.
pub fn tax_due(annual_cashflow: f64, maintenance: f64, vacancy_loss: f64, tax_rate: f64) -> f64 {
    ((annual_cashflow - maintenance - vacancy_loss) * tax_rate).max(0.0)
}

/// How much of the EMI the rent covers, as a percentage.
pub fn rent_coverage(rent: f64, emi: f64) -> f64 {
    if emi > 0.0 {
        rent / emi * 100.0
    } else {
        0.0
    }
}

/// The full set of figures derived from one [`PropertyInputs`] record.
#[derive(Clone, Debug)]
pub struct Metrics {
    pub monthly_cashflow: f64,
    pub annual_cashflow: f64,
    pub vacancy_loss: f64,
    pub tax: f64,
    pub net_annual_cashflow: f64,
    /// ROI on cash flow before costs.
    pub roi: f64,
    /// ROI on cash flow after maintenance, vacancy and tax.
    pub real_roi: f64,
    pub rental_yield: f64,
    pub rent_coverage: f64,
    pub ltv: f64,
    pub future_value: f64,
    pub future_rent: f64,
}

impl Metrics {
    /// Runs every calculator once, in dependency order.
    pub fn evaluate(inputs: &PropertyInputs, projection_years: u32) -> Self {
        let monthly = monthly_cashflow(inputs.monthly_rent, inputs.monthly_emi);
        let annual = annual_cashflow(monthly);
        let vacancy = vacancy_loss(inputs.monthly_rent, inputs.vacancy_rate);
        let tax = tax_due(annual, inputs.annual_maintenance, vacancy, inputs.tax_rate);
        let net_annual = annual - inputs.annual_maintenance - vacancy - tax;

        Self {
            monthly_cashflow: monthly,
            annual_cashflow: annual,
            vacancy_loss: vacancy,
            tax,
            net_annual_cashflow: net_annual,
            roi: roi(annual, inputs.cash_invested),
            real_roi: roi(net_annual, inputs.cash_invested),
            rental_yield: rental_yield(inputs.monthly_rent, inputs.price),
            rent_coverage: rent_coverage(inputs.monthly_rent, inputs.monthly_emi),
            ltv: loan_to_value(inputs.loan_amount, inputs.price),
            future_value: future_value(inputs.price, inputs.appreciation_rate, projection_years),
            future_rent: future_rent(
                inputs.monthly_rent,
                inputs.rent_growth_rate,
                projection_years,
            ),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    fn surat_inputs() -> PropertyInputs {
        PropertyInputs {
            price: 5_000_000.0,
            loan_amount: 4_000_000.0,
            monthly_rent: 25_000.0,
            monthly_emi: 30_000.0,
            cash_invested: 1_000_000.0,
            appreciation_rate: 0.05,
            rent_growth_rate: 0.03,
            vacancy_rate: 0.08,
            annual_maintenance: 20_000.0,
            tax_rate: 0.10,
        }
    }

    // Division results go through inexact intermediates, so formula
    // checks compare within a tolerance.
    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn ltv_is_loan_over_price() {
        assert_close(loan_to_value(4_000_000.0, 5_000_000.0), 80.0);
        assert_eq!(loan_to_value(0.0, 5_000_000.0), 0.0);

        // Zero and negative prices fall back to 0 instead of dividing.
        assert_eq!(loan_to_value(4_000_000.0, 0.0), 0.0);
        assert_eq!(loan_to_value(4_000_000.0, -1.0), 0.0);
    }

    #[test]
    fn roi_guards_against_nothing_invested() {
        assert_eq!(roi(120_000.0, 0.0), 0.0);
        assert_eq!(roi(-120_000.0, 0.0), 0.0);
        assert_eq!(roi(-120_000.0, -5.0), 0.0);
        assert_close(roi(120_000.0, 1_000_000.0), 12.0);
    }

    #[test]
    fn rental_yield_and_coverage_guards() {
        assert_eq!(rental_yield(25_000.0, 0.0), 0.0);
        assert_eq!(rent_coverage(25_000.0, 0.0), 0.0);
        assert_close(rent_coverage(25_000.0, 30_000.0), 25_000.0 / 30_000.0 * 100.0);
    }

    #[test]
    fn raising_rent_never_lowers_monthly_cashflow() {
        let emi = 30_000.0;
        let mut last = f64::NEG_INFINITY;
        for rent in [0.0, 10_000.0, 25_000.0, 30_000.0, 90_000.0] {
            let cashflow = monthly_cashflow(rent, emi);
            assert!(cashflow >= last);
            last = cashflow;
        }
    }

    #[test]
    fn tax_is_floored_at_zero() {
        // Loss-making year: (−60,000 − 20,000 − 24,000) × 0.10 < 0.
        assert_eq!(tax_due(-60_000.0, 20_000.0, 24_000.0, 0.10), 0.0);
        // Profitable year pays on the post-cost profit.
        assert_close(tax_due(300_000.0, 20_000.0, 24_000.0, 0.10), 25_600.0);
    }

    #[test]
    fn projection_compounds_over_the_horizon() {
        let value = future_value(5_000_000.0, 0.05, 5);
        assert!((value - 6_381_407.8125).abs() < 1e-6);

        let rent = future_rent(25_000.0, 0.03, 5);
        assert!((rent - 25_000.0 * 1.03_f64.powi(5)).abs() < 1e-9);
    }

    #[test]
    fn surat_scenario_loses_money() {
        let metrics = Metrics::evaluate(&surat_inputs(), 5);

        assert_eq!(metrics.monthly_cashflow, -5_000.0);
        assert_eq!(metrics.annual_cashflow, -60_000.0);
        assert_eq!(metrics.vacancy_loss, 24_000.0);
        assert_eq!(metrics.tax, 0.0);
        assert_eq!(metrics.net_annual_cashflow, -104_000.0);
        assert!(metrics.real_roi < 0.0);
        assert_close(metrics.real_roi, -10.4);
        assert_close(metrics.ltv, 80.0);
        assert_close(metrics.rental_yield, 6.0);
    }
}
