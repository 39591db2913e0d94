use std::io::Cursor;

use propr_cli::session::{self, SessionOutcome};
use propr_common::config::Config;
use propr_common::investment::PropertyInputs;
use propr_core::decision::{CashflowRating, RoiRating};
use propr_core::metrics::Metrics;

// The Surat scenario: rent short of the EMI, so the purchase bleeds
// money every month.
const SURAT_SESSION: &str = "agree\n\
    5000000\n4000000\n25000\n30000\n1000000\n\
    0.05\n0.03\n0.08\n20000\n0.10\n";

fn run_session(stdin: &str) -> anyhow::Result<(SessionOutcome, String)> {
    colored::control::set_override(false);

    let cfg = Config::default();
    let mut reader = Cursor::new(stdin.to_string());
    let mut out: Vec<u8> = Vec::new();

    let outcome = session::run(&cfg, &mut reader, &mut out)?;
    Ok((outcome, String::from_utf8(out)?))
}

#[test]
fn mixed_case_consent_with_whitespace_is_accepted() -> anyhow::Result<()> {
    let session_input = SURAT_SESSION.replacen("agree", "  AGREE ", 1);
    let (outcome, output) = run_session(&session_input)?;

    assert_eq!(outcome, SessionOutcome::Completed);
    assert!(output.contains("Agreement accepted"));
    assert!(output.contains("INVESTMENT SUMMARY"));
    Ok(())
}

#[test]
fn declined_consent_prints_no_metrics() -> anyhow::Result<()> {
    let (outcome, output) = run_session("yes\n")?;

    assert_eq!(outcome, SessionOutcome::Declined);
    assert!(output.contains("You did not agree to the terms"));
    assert!(!output.contains("INVESTMENT SUMMARY"));
    assert!(!output.contains("Monthly Cash Flow"));
    Ok(())
}

#[test]
fn surat_scenario_reports_losses_and_avoid_verdicts() -> anyhow::Result<()> {
    let (outcome, output) = run_session(SURAT_SESSION)?;

    assert_eq!(outcome, SessionOutcome::Completed);

    // Figures from the summary section.
    assert!(output.contains("-₹5,000.00"), "monthly cash flow:\n{output}");
    assert!(output.contains("-₹60,000.00"), "annual cash flow:\n{output}");
    assert!(output.contains("-₹24,000.00"), "vacancy loss:\n{output}");
    assert!(output.contains("₹0.00"), "tax floored at zero:\n{output}");
    assert!(output.contains("-₹104,000.00"), "net annual cash flow:\n{output}");
    assert!(output.contains("-10.40%"), "real ROI:\n{output}");
    assert!(output.contains("80.00%"), "LTV:\n{output}");
    assert!(output.contains("₹6,381,408"), "projected value:\n{output}");
    assert!(output.contains("₹28,982"), "projected rent:\n{output}");

    // Both verdict ladders land in their lowest band.
    assert!(output.contains("Avoid: This investment loses money after costs."));
    assert!(output.contains("Negative: You're losing money monthly."));
    Ok(())
}

#[test]
fn malformed_numbers_are_reprompted_not_fatal() -> anyhow::Result<()> {
    let session_input = SURAT_SESSION.replacen("5000000\n", "fifty lakh\n\n5000000\n", 1);
    let (outcome, output) = run_session(&session_input)?;

    assert_eq!(outcome, SessionOutcome::Completed);
    assert_eq!(output.matches("Please enter a valid number.").count(), 2);
    assert_eq!(output.matches("Enter property price").count(), 3);
    Ok(())
}

#[test]
fn closed_stdin_mid_session_is_an_error() {
    colored::control::set_override(false);

    let cfg = Config::default();
    let mut reader = Cursor::new("agree\n5000000\n".to_string());
    let mut out: Vec<u8> = Vec::new();

    assert!(session::run(&cfg, &mut reader, &mut out).is_err());
}

#[test]
fn printed_figures_match_the_evaluated_metrics() -> anyhow::Result<()> {
    let inputs = PropertyInputs {
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
    };
    let metrics = Metrics::evaluate(&inputs, Config::default().projection_years);

    assert_eq!(RoiRating::classify(metrics.real_roi), RoiRating::Avoid);
    assert_eq!(
        CashflowRating::classify(metrics.monthly_cashflow),
        CashflowRating::Negative
    );

    let (_, output) = run_session(SURAT_SESSION)?;
    assert!(output.contains(&format!("{:.2}%", metrics.real_roi)));
    Ok(())
}
