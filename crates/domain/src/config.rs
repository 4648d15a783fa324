pub mod descriptor;
pub mod settings;

pub use descriptor::{FilterDescriptor, OptionDescription};
pub use settings::{DEFAULT_MODULE_LABEL, FilterSettings};
