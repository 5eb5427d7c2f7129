pub trait Configurable: Clone {
    fn global(&self) -> &GlobalConfig;
}

/// Swerve global configuration.
#[derive(Clone, Debug)]
pub struct GlobalConfig {
    /// Name of the binary.
    pub bin_name: String,

    /// Whether terminal output is colored.
    pub color: bool,
}

impl Configurable for GlobalConfig {
    fn global(&self) -> &GlobalConfig {
        self
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            bin_name: String::new(),
            color: true,
        }
    }
}
