pub mod reset;

pub use reset::ResetAllDataCommand;
