//! Persisted run configuration.
//!
//! Configurations are stored as JSON. Every field has a hardcoded backup
//! default, applied per-field when a stored configuration omits it and
//! wholesale when the file is missing or unreadable, so loading never
//! fails.
//!
//! The solver consumes only the grid-shaping subset (`start`, `stop`,
//! `num_states`, `num_dimensions`, `num_samples`, `num_iterations`,
//! `potential`); the display and plotting fields are carried through
//! untouched for downstream consumers.

use std::{ fs, io, path::Path };
use serde::{ Deserialize, Serialize };

fn def_label() -> String { "Linear Harmonic Oscillator".to_string() }
fn def_start() -> f64 { -10.0 }
fn def_stop() -> f64 { 10.0 }
fn def_num_states() -> usize { 1 }
fn def_num_dimensions() -> usize { 1 }
fn def_num_samples() -> usize { 100 }
fn def_num_iterations() -> u32 { 5 }
fn def_plot_with_potential() -> bool { false }
fn def_plot_scale() -> f64 { 10.0 }
fn def_colourmap() -> String { "autumn".to_string() }
fn def_potential() -> String { crate::potential::DEFAULT_POTENTIAL.to_string() }

/// All recognized run options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Display label for the run.
    #[serde(default = "def_label")]
    pub label: String,
    /// Lower grid bound on every axis.
    #[serde(default = "def_start")]
    pub start: f64,
    /// Upper grid bound on every axis.
    #[serde(default = "def_stop")]
    pub stop: f64,
    /// Number of eigenstates to solve for.
    #[serde(default = "def_num_states")]
    pub num_states: usize,
    /// Number of spatial dimensions.
    #[serde(default = "def_num_dimensions")]
    pub num_dimensions: usize,
    /// Grid points per axis.
    #[serde(default = "def_num_samples")]
    pub num_samples: usize,
    /// log₁₀ of the relaxation iteration count; see [`Self::iterations`].
    #[serde(default = "def_num_iterations")]
    pub num_iterations: u32,
    /// Overlay the potential on wavefunction plots.
    #[serde(default = "def_plot_with_potential")]
    pub plot_with_potential: bool,
    /// Vertical scaling applied to plotted wavefunctions.
    #[serde(default = "def_plot_scale")]
    pub plot_scale: f64,
    /// Named palette for plotting.
    #[serde(default = "def_colourmap")]
    pub colourmap: String,
    /// Name of the potential to resolve through the registry.
    #[serde(default = "def_potential")]
    pub potential: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            label: def_label(),
            start: def_start(),
            stop: def_stop(),
            num_states: def_num_states(),
            num_dimensions: def_num_dimensions(),
            num_samples: def_num_samples(),
            num_iterations: def_num_iterations(),
            plot_with_potential: def_plot_with_potential(),
            plot_scale: def_plot_scale(),
            colourmap: def_colourmap(),
            potential: def_potential(),
        }
    }
}

impl RunConfig {
    /// The actual relaxation iteration count, `10^num_iterations`.
    pub fn iterations(&self) -> usize {
        10_usize.pow(self.num_iterations)
    }

    /// Read a configuration from a JSON file, falling back to the defaults
    /// if the file is missing or cannot be parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                println!(
                    "config::load: WARNING: cannot read '{}' ({}), using \
                    defaults",
                    path.display(), err,
                );
                return Self::default();
            },
        };
        match serde_json::from_str(&text) {
            Ok(cfg) => cfg,
            Err(err) => {
                println!(
                    "config::load: WARNING: cannot parse '{}' ({}), using \
                    defaults",
                    path.display(), err,
                );
                Self::default()
            },
        }
    }

    /// Write the configuration to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let text = serde_json::to_string_pretty(self)
            .map_err(io::Error::from)?;
        fs::write(path, text)
    }
}

#[cfg(test)]
mod test {
    use super::RunConfig;

    #[test]
    fn backup_defaults() {
        let cfg = RunConfig::default();
        assert_eq!(cfg.label, "Linear Harmonic Oscillator");
        assert_eq!(cfg.start, -10.0);
        assert_eq!(cfg.stop, 10.0);
        assert_eq!(cfg.num_states, 1);
        assert_eq!(cfg.num_dimensions, 1);
        assert_eq!(cfg.num_samples, 100);
        assert_eq!(cfg.num_iterations, 5);
        assert!(!cfg.plot_with_potential);
        assert_eq!(cfg.plot_scale, 10.0);
        assert_eq!(cfg.colourmap, "autumn");
        assert_eq!(cfg.potential, "harmonic_oscillator");
    }

    #[test]
    fn iterations_are_log10() {
        let cfg = RunConfig { num_iterations: 5, ..Default::default() };
        assert_eq!(cfg.iterations(), 100_000);
        let cfg = RunConfig { num_iterations: 0, ..Default::default() };
        assert_eq!(cfg.iterations(), 1);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: RunConfig
            = serde_json::from_str(r#"{ "num_samples": 64, "stop": 20 }"#)
            .unwrap();
        assert_eq!(cfg.num_samples, 64);
        assert_eq!(cfg.stop, 20.0);
        assert_eq!(cfg.start, -10.0);
        assert_eq!(cfg.num_states, 1);
    }

    #[test]
    fn missing_file_falls_back() {
        let cfg = RunConfig::load("no/such/file.json");
        assert_eq!(cfg, RunConfig::default());
    }
}
