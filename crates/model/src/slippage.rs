use number::Dec;

/// Maximum tolerated deviation between an estimated amount and the amount the
/// chain ends up executing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Slippage {
    /// No min/max fields are emitted at all.
    #[default]
    Unbounded,
    /// A fraction in `(0, 1)`.
    Bounded(Dec),
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("slippage of {0}% is outside of [0, 100)")]
pub struct InvalidSlippage(pub Dec);

impl Slippage {
    /// Interprets a user entered percentage, `"5"` meaning 5%. `0` disables
    /// the bound.
    pub fn from_percent(percent: &Dec) -> Result<Self, InvalidSlippage> {
        let fraction = percent.percent_to_fraction();
        if fraction.is_negative() || fraction >= Dec::one() {
            return Err(InvalidSlippage(percent.clone()));
        }
        if fraction.is_zero() {
            return Ok(Self::Unbounded);
        }
        Ok(Self::Bounded(fraction))
    }

    pub fn fraction(&self) -> Option<&Dec> {
        match self {
            Self::Unbounded => None,
            Self::Bounded(fraction) => Some(fraction),
        }
    }

    /// `1 + slippage`, the factor applied to estimated inputs to get a cap.
    pub fn max_in_factor(&self) -> Option<Dec> {
        self.fraction().map(|fraction| &Dec::one() + fraction)
    }

    /// `1 - slippage`, the factor applied to estimated outputs to get a floor.
    pub fn min_out_factor(&self) -> Option<Dec> {
        self.fraction().map(|fraction| &Dec::one() - fraction)
    }
}
