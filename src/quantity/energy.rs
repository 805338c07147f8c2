use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use crate::quantity::{Quantity, currency::Euros, price::EuroPerMegawattHour};

pub type MegawattHours = Quantity<1, 1, 0>;

impl Display for MegawattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} MWh", self.0)
    }
}

impl Debug for MegawattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}MWh", self.0)
    }
}

impl Mul<EuroPerMegawattHour> for MegawattHours {
    type Output = Euros;

    fn mul(self, rhs: EuroPerMegawattHour) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}
