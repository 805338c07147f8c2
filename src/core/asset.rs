//! Closed enumerations for the questionnaire answers.

use serde::{Deserialize, Serialize};

/// Flexible technology behind the asset.
#[derive(
    Debug,
    Deserialize,
    Serialize,
    clap::ValueEnum,
    derive_more::Display,
    enumset::EnumSetType,
)]
#[enumset(serialize_repr = "list")]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    Battery,

    /// Generator set.
    Genset,

    /// Combined heat and power unit.
    #[display("CHP")]
    Chp,

    /// Electric boiler.
    #[display("E-boiler")]
    EBoiler,

    #[display("Heat pump")]
    HeatPump,
}

/// How often the asset can be called upon by the system operator.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Deserialize,
    Serialize,
    clap::ValueEnum,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum ActivationFrequency {
    #[display("multiple times per day")]
    MultiplePerDay,

    #[display("once per day")]
    OncePerDay,

    #[display("once a week")]
    OnceAWeek,

    #[display("other")]
    Other,
}

impl ActivationFrequency {
    /// Nominal number of activations per day,
    /// used when the activation time is specified per single activation.
    ///
    /// «Multiple times per day» is taken conservatively as two activations.
    #[must_use]
    pub const fn nominal_activations_per_day(self) -> f64 {
        match self {
            Self::MultiplePerDay => 2.0,
            Self::OncePerDay | Self::Other => 1.0,
            Self::OnceAWeek => 1.0 / 7.0,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum IndustrySector {
    Manufacturing,
    Energy,
    Transportation,
    Other,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum AssetStatus {
    /// Currently operational.
    Existing,

    #[display("Planned addition")]
    PlannedAddition,
}

/// Grid operator the asset is connected to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionType {
    /// Transmission system operator, for example, Elia.
    #[display("TSO")]
    Tso,

    /// Distribution system operator.
    #[display("DSO")]
    Dso,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    Flanders,
    Wallonia,
    Brussels,
}

/// On whose behalf the simulation is run.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum Purpose {
    #[display("Own company")]
    OwnCompany,

    #[display("Consultant or advisor")]
    Consultant,
}
