//! Configuration system for the OpenRISC simulator.
//!
//! This module defines the configuration structures used to parameterize the
//! simulator. It provides:
//! 1. **Defaults:** Baseline values for the boot address and the run-slice length.
//! 2. **Structures:** Hierarchical config for general (tracing) and system settings.
//! 3. **Parsing:** `Config::from_json` for configuration files and the Python API.
//!
//! Every field is optional in JSON; missing fields take their default. Use
//! `Config::default()` when no configuration is supplied.

use serde::Deserialize;

use crate::common::SimError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Address execution starts at after an image is loaded (the reset vector).
    pub const BOOT_PC: u32 = 0x100;

    /// Cycles executed per `run_slice` call.
    ///
    /// Front-ends service the console between slices, so this bounds input latency.
    pub const CYCLES_PER_SLICE: u64 = 20_000;
}

/// Root configuration structure for the simulator.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Boot and scheduling parameters
    #[serde(default)]
    pub system: SystemConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Arguments
    ///
    /// * `json` - A JSON object; absent sections and fields take their defaults.
    ///
    /// # Returns
    ///
    /// The parsed configuration, or `SimError::Config` when the text is not valid JSON
    /// or a field has the wrong type.
    ///
    /// # Examples
    ///
    /// ```
    /// use orsim_core::Config;
    ///
    /// let config = Config::from_json(r#"{ "system": { "boot_pc": 0 } }"#)?;
    /// assert_eq!(config.system.boot_pc, 0);
    /// assert_eq!(config.system.cycles_per_slice, 20_000);
    /// # Ok::<(), orsim_core::common::SimError>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Emit a `trace` event (PC, word, disassembly) for every executed instruction
    #[serde(default)]
    pub trace_instructions: bool,

    /// Log every exception dispatch at `info` level instead of `debug`
    #[serde(default)]
    pub trace_exceptions: bool,
}

/// Boot and scheduling configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SystemConfig {
    /// PC set after an image is loaded
    #[serde(default = "SystemConfig::default_boot_pc")]
    pub boot_pc: u32,

    /// Cycles per `Simulator::run_slice` call
    #[serde(default = "SystemConfig::default_cycles_per_slice")]
    pub cycles_per_slice: u64,
}

impl SystemConfig {
    const fn default_boot_pc() -> u32 {
        defaults::BOOT_PC
    }

    const fn default_cycles_per_slice() -> u64 {
        defaults::CYCLES_PER_SLICE
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            boot_pc: defaults::BOOT_PC,
            cycles_per_slice: defaults::CYCLES_PER_SLICE,
        }
    }
}
