//! Qualitative ratings over the computed metrics.
//!
//! Two independent threshold ladders, one on real ROI and one on
//! monthly cash flow. Each picks exactly one band, first match wins.
//! The ladders never interact and no combined score exists.

/// Verdict on the real (after-cost) return on investment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoiRating {
    Avoid,
    Weak,
    Moderate,
    Strong,
}

impl RoiRating {
    /// Bands are ascending with strict upper bounds: a real ROI of
    /// exactly 3.0 is already `Moderate`, not `Weak`.
    pub fn classify(real_roi: f64) -> Self {
        if real_roi < 0.0 {
            Self::Avoid
        } else if real_roi < 3.0 {
            Self::Weak
        } else if real_roi < 8.0 {
            Self::Moderate
        } else {
            Self::Strong
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Avoid => "Avoid",
            Self::Weak => "Weak",
            Self::Moderate => "Moderate",
            Self::Strong => "Strong",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Avoid => "This investment loses money after costs.",
            Self::Weak => "Returns too low, consider better deals.",
            Self::Moderate => "Decent but not great.",
            Self::Strong => "ROI above 8%.",
        }
    }
}

/// Verdict on the monthly cash flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CashflowRating {
    Negative,
    VeryLow,
    Moderate,
    Strong,
}

impl CashflowRating {
    /// Bands are ascending with inclusive upper bounds: exactly 1000
    /// per month is still `VeryLow`.
    pub fn classify(monthly_cashflow: f64) -> Self {
        if monthly_cashflow <= 0.0 {
            Self::Negative
        } else if monthly_cashflow <= 1_000.0 {
            Self::VeryLow
        } else if monthly_cashflow <= 5_000.0 {
            Self::Moderate
        } else {
            Self::Strong
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Negative => "Negative",
            Self::VeryLow => "Very low",
            Self::Moderate => "Moderate",
            Self::Strong => "Strong",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Negative => "You're losing money monthly.",
            Self::VeryLow => "Risky if vacancy occurs.",
            Self::Moderate => "Moderate cash flow.",
            Self::Strong => "Strong monthly cash flow.",
        }
    }
}
