use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use ordered_float::OrderedFloat;

use crate::quantity::{Quantity, currency::Euros, power::Megawatts};

/// Euro per megawatt of offered capacity.
///
/// Capacity remuneration prices are quoted per megawatt-year, bid prices per megawatt.
pub type EuroPerMegawatt = Quantity<-1, 0, 1>;

/// Euro per megawatt-hour of activated energy.
pub type EuroPerMegawattHour = Quantity<-1, -1, 1>;

impl EuroPerMegawatt {
    pub const ONE_CENT: Self = Self(OrderedFloat(0.01));
}

impl Display for EuroPerMegawatt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} €/MW", self.0)
    }
}

impl Debug for EuroPerMegawatt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}€/MW", self.0)
    }
}

impl Mul<Megawatts> for EuroPerMegawatt {
    type Output = Euros;

    fn mul(self, rhs: Megawatts) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}

impl Display for EuroPerMegawattHour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} €/MWh", self.0)
    }
}

impl Debug for EuroPerMegawattHour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}€/MWh", self.0)
    }
}
