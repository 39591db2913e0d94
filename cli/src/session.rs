//! The interactive evaluation session: limitation agreement, the ten
//! property prompts, metric evaluation, and the rendered report.

use std::io::{BufRead, Write};

use propr_common::config::Config;
use propr_common::input::{self, ReadError};
use propr_common::investment::PropertyInputs;
use propr_common::{error, info, success};
use propr_core::metrics::Metrics;

use crate::terminal::{print, report};

/// How an interactive run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    Completed,
    /// The user did not accept the limitation agreement.
    Declined,
}

const LIMITATIONS: &str = "\
Before using this tool, you must understand and accept the following:
 1. This calculator provides insights, not confirmation for buying
    property.
 2. It gives a vision of possible outcomes, not a guarantee.
 3. Always consider:
      - Location and local real estate conditions
      - Politics and government policies affecting property
      - Economic trends (national and local)
      - Real estate market trends
      - Overall economy and macroeconomic conditions
 4. This tool should not be the sole basis for your investment decision.";

pub fn run<R, W>(cfg: &Config, reader: &mut R, out: &mut W) -> anyhow::Result<SessionOutcome>
where
    R: BufRead,
    W: Write,
{
    print::banner(out)?;

    if !accept_terms(reader, out)? {
        return Ok(SessionOutcome::Declined);
    }

    let inputs = collect_inputs(reader, out)?;
    let metrics = Metrics::evaluate(&inputs, cfg.projection_years);

    report::render(out, cfg, &metrics)?;
    Ok(SessionOutcome::Completed)
}

/// Single-shot consent gate: anything but `agree` (case-insensitive,
/// surrounding whitespace ignored) declines. No retry.
fn accept_terms<R, W>(reader: &mut R, out: &mut W) -> Result<bool, ReadError>
where
    R: BufRead,
    W: Write,
{
    print::header(out, "limitation agreement")?;
    writeln!(out, "{LIMITATIONS}")?;
    writeln!(out)?;

    write!(out, "Type 'agree' to accept and continue: ")?;
    out.flush()?;

    let answer = input::read_line(reader)?;
    if answer.to_lowercase() != "agree" {
        error!(out, "You did not agree to the terms. Exiting the calculator.");
        return Ok(false);
    }

    success!(out, "Agreement accepted. You may proceed.");
    Ok(true)
}

/// The ten parameters, prompted in fixed order. No cross-field checks:
/// the calculators carry whatever the user typed.
fn collect_inputs<R, W>(reader: &mut R, out: &mut W) -> Result<PropertyInputs, ReadError>
where
    R: BufRead,
    W: Write,
{
    writeln!(out)?;
    print::header(out, "property details")?;
    info!(out, "Amounts are in ₹; rates are decimal fractions (0.05 = 5%).");

    Ok(PropertyInputs {
        price: input::read_amount("Enter property price (₹): ", reader, out)?,
        loan_amount: input::read_amount("Enter loan amount (₹): ", reader, out)?,
        monthly_rent: input::read_amount("Enter monthly rent (₹): ", reader, out)?,
        monthly_emi: input::read_amount("Enter monthly EMI (₹): ", reader, out)?,
        cash_invested: input::read_amount("Enter your total cash invested (₹): ", reader, out)?,
        appreciation_rate: input::read_amount(
            "Expected annual appreciation (e.g., 0.05 for 5%): ",
            reader,
            out,
        )?,
        rent_growth_rate: input::read_amount(
            "Expected annual rent growth (e.g., 0.03 for 3%): ",
            reader,
            out,
        )?,
        vacancy_rate: input::read_amount(
            "Expected vacancy rate (e.g., 0.08 for 8%): ",
            reader,
            out,
        )?,
        annual_maintenance: input::read_amount("Annual maintenance cost (₹): ", reader, out)?,
        tax_rate: input::read_amount("Tax rate on profit (e.g., 0.10 for 10%): ", reader, out)?,
    })
}
