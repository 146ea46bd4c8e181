//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize the
//! engine. It provides:
//! 1. **Defaults:** Baseline machine constants (memory capacities, compatibility mode off).
//! 2. **Structures:** Hierarchical config for general options and memory sizing.
//! 3. **Parsing:** JSON deserialization with per-field defaults.
//!
//! Use `Config::default()` for the standard machine, or deserialize a JSON
//! document with [`Config::from_json`].

use serde::Deserialize;

use crate::common::SimResult;

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::constants;

    /// Number of words in data memory.
    pub const DATA_WORDS: usize = constants::DATA_MEMORY_WORDS;

    /// Number of slots in instruction memory.
    pub const INSTRUCTION_SLOTS: usize = constants::INSTRUCTION_MEMORY_SLOTS;
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use mipsim_core::config::Config;
///
/// let config = Config::default();
/// assert!(!config.general.trace_instructions);
/// assert_eq!(config.memory.data_words, 500);
/// assert_eq!(config.memory.instruction_slots, 200);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use mipsim_core::config::Config;
///
/// let json = r#"{
///     "general": { "compat_jump_offset": true },
///     "memory": { "data_words": 64 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.compat_jump_offset);
/// assert_eq!(config.memory.data_words, 64);
/// assert_eq!(config.memory.instruction_slots, 200);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory capacities
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from a JSON document; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`crate::common::SimError::Config`] if the document is not valid JSON
    /// or a field has the wrong type.
    pub fn from_json(json: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Log every executed instruction (PC, raw digits, disassembly) at `trace` level.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Interpret J-type targets as MARS-encoded absolute addresses based at `0x0040_0000`.
    #[serde(default)]
    pub compat_jump_offset: bool,
}

/// Memory capacities.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Number of words in data memory.
    #[serde(default = "MemoryConfig::default_data_words")]
    pub data_words: usize,

    /// Number of instruction slots.
    #[serde(default = "MemoryConfig::default_instruction_slots")]
    pub instruction_slots: usize,
}

impl MemoryConfig {
    const fn default_data_words() -> usize {
        defaults::DATA_WORDS
    }

    const fn default_instruction_slots() -> usize {
        defaults::INSTRUCTION_SLOTS
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            data_words: defaults::DATA_WORDS,
            instruction_slots: defaults::INSTRUCTION_SLOTS,
        }
    }
}
