//! Renders the investment summary and the insight verdicts.

use std::io::{self, Write};

use colored::*;
use propr_common::config::Config;
use propr_core::decision::{CashflowRating, RoiRating};
use propr_core::metrics::Metrics;

use crate::terminal::{colors, format, print};

type Row = (String, ColoredString);

pub fn render(out: &mut impl Write, cfg: &Config, metrics: &Metrics) -> io::Result<()> {
    let rows = summary_rows(cfg, metrics);
    let key_width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    print::set_key_width(key_width);

    writeln!(out)?;
    print::header(out, "investment summary")?;
    for (key, value) in &rows {
        print::aligned_line(out, key, value.clone())?;
    }

    render_insights(out, metrics)?;

    print::fat_separator(out)?;
    print::centerln(out, "Evaluation complete")?;
    print::end_of_program(out)
}

fn summary_rows(cfg: &Config, m: &Metrics) -> Vec<Row> {
    let years = cfg.projection_years;

    vec![
        (
            "Monthly Cash Flow".to_string(),
            format::money_detail(m.monthly_cashflow, 2),
        ),
        (
            "Annual Cash Flow (before tax)".to_string(),
            format::money_detail(m.annual_cashflow, 2),
        ),
        (
            "Vacancy Loss (annual)".to_string(),
            format::money_detail(-m.vacancy_loss, 2),
        ),
        (
            "Tax on Profit".to_string(),
            format::money_detail(-m.tax, 2),
        ),
        (
            "Net Annual Cash Flow (after tax)".to_string(),
            format::money_detail(m.net_annual_cashflow, 2),
        ),
        (
            "Gross ROI".to_string(),
            format::percent(m.roi).color(colors::TEXT_DEFAULT),
        ),
        (
            "Real ROI after expenses".to_string(),
            format::percent(m.real_roi).color(colors::TEXT_DEFAULT),
        ),
        (
            "Rental Yield".to_string(),
            format::percent(m.rental_yield).color(colors::TEXT_DEFAULT),
        ),
        (
            "Rent-to-EMI Coverage".to_string(),
            format::percent(m.rent_coverage).color(colors::TEXT_DEFAULT),
        ),
        (
            "Loan-to-Value (LTV)".to_string(),
            format::percent(m.ltv).color(colors::TEXT_DEFAULT),
        ),
        (
            format!("Projected Value ({years} yrs)"),
            format::money_detail(m.future_value, 0),
        ),
        (
            format!("Projected Rent ({years} yrs)"),
            format::money_detail(m.future_rent, 0),
        ),
    ]
}

fn render_insights(out: &mut impl Write, m: &Metrics) -> io::Result<()> {
    let roi = RoiRating::classify(m.real_roi);
    let cashflow = CashflowRating::classify(m.monthly_cashflow);

    print::header(out, "investment insights")?;
    print::aligned_line(out, "ROI", verdict(roi.label(), roi.message(), roi_color(roi)))?;
    print::aligned_line(
        out,
        "Cash Flow",
        verdict(cashflow.label(), cashflow.message(), cashflow_color(cashflow)),
    )
}

fn verdict(label: &str, message: &str, color: Color) -> ColoredString {
    format!("{label}: {message}").color(color)
}

fn roi_color(rating: RoiRating) -> Color {
    match rating {
        RoiRating::Avoid => colors::NEGATIVE,
        RoiRating::Weak => colors::CAUTION,
        RoiRating::Moderate => colors::ACCENT,
        RoiRating::Strong => colors::POSITIVE,
    }
}

fn cashflow_color(rating: CashflowRating) -> Color {
    match rating {
        CashflowRating::Negative => colors::NEGATIVE,
        CashflowRating::VeryLow => colors::CAUTION,
        CashflowRating::Moderate => colors::ACCENT,
        CashflowRating::Strong => colors::POSITIVE,
    }
}
