use swerve::{Configurable, GlobalConfig};

#[derive(Clone, Debug)]
pub(crate) struct SimConfig {
    /// Target angle in degrees.
    pub target: i64,
    /// Lower bound of the current angle sweep.
    pub sweep_min: i64,
    /// Upper bound of the current angle sweep.
    pub sweep_max: i64,
    /// Global configuration.
    pub global: GlobalConfig,
}

impl Configurable for SimConfig {
    fn global(&self) -> &GlobalConfig {
        &self.global
    }
}
