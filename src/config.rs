//! The typed configuration record an engine is built from.
//!
//! Besides direct field access, a thin string keyed adapter ([`ConfigKey`], [`NoiseConfig::get`], [`NoiseConfig::set`])
//! serves tooling that only speaks in names and text.

use core::{fmt, str::FromStr};

use thiserror::Error;

use crate::{curves::Interpolation, layering::Octaves, rng::PrngAlgorithm};

/// The family of noise a configuration describes.
///
/// This is recorded for collaborators that pick a sampler from the configuration; the engine's sampling methods are all available regardless.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum NoiseVariant {
    /// Plain simplex noise.
    #[default]
    Classic,
    /// `1 - |n|`.
    Ridged,
    /// `|n|`.
    Billowy,
    /// Normalized fractal brownian motion.
    Fbm,
    /// Unnormalized hybrid multifractal.
    HybridMultifractal,
    /// Self warped simplex noise.
    DomainWarp,
}

impl NoiseVariant {
    /// Every variant, ordered by [`index`](Self::index).
    pub const ALL: [Self; 6] = [
        Self::Classic,
        Self::Ridged,
        Self::Billowy,
        Self::Fbm,
        Self::HybridMultifractal,
        Self::DomainWarp,
    ];

    /// Looks up a variant by its numeric selector.
    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// The numeric selector of this variant.
    pub fn index(self) -> u32 {
        self as u32
    }
}

/// The numeric precision a configuration asks for. Sampling is always done in `f64`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Precision {
    /// 32-bit floats.
    Single,
    /// 64-bit floats.
    #[default]
    Double,
    /// Wider than 64-bit floats.
    Extended,
}

impl Precision {
    /// Every precision, ordered by [`index`](Self::index).
    pub const ALL: [Self; 3] = [Self::Single, Self::Double, Self::Extended];

    /// Looks up a precision by its numeric selector.
    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// The numeric selector of this precision.
    pub fn index(self) -> u32 {
        self as u32
    }
}

/// Everything needed to build a [`NoiseEngine`](crate::engine::NoiseEngine).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "bevy_reflect", derive(bevy_reflect::Reflect))]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct NoiseConfig {
    /// The generator that shuffles the permutation table.
    pub prng: PrngAlgorithm,
    /// See [`NoiseVariant`].
    pub variant: NoiseVariant,
    /// See [`Interpolation`].
    pub interpolation: Interpolation,
    /// See [`Precision`].
    pub precision: Precision,
    /// The seed. 0 asks for a seed derived from the wall clock, which is not reproducible.
    pub seed: u32,
    /// Amplitude multiplier between octaves.
    pub persistence: f64,
    /// Frequency multiplier between octaves.
    pub lacunarity: f64,
    /// Number of octaves. Valid configurations use 1 through 16.
    pub octaves: u32,
    /// Base sampling frequency for collaborators that scale inputs.
    pub frequency: f64,
    /// Output multiplier for collaborators that scale outputs.
    pub amplitude: f64,
    /// Output offset for collaborators that shift outputs.
    pub offset: f64,
    /// Input scale for collaborators that scale inputs.
    pub scale: f64,
    /// Recorded but unused.
    pub enable_simd: bool,
    /// Lets [`NoiseEngine::memoized_4d`](crate::engine::NoiseEngine::memoized_4d) use the cache.
    pub enable_caching: bool,
    /// Turns on call counting and fill timing.
    pub enable_profiling: bool,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            prng: PrngAlgorithm::Pcg,
            variant: NoiseVariant::Classic,
            interpolation: Interpolation::Smoothstep,
            precision: Precision::Double,
            seed: 0,
            persistence: 0.5,
            lacunarity: 2.0,
            octaves: 4,
            frequency: 1.0,
            amplitude: 1.0,
            offset: 0.0,
            scale: 1.0,
            enable_simd: false,
            enable_caching: true,
            enable_profiling: false,
        }
    }
}

/// The octave counts a valid configuration may use.
pub const OCTAVE_RANGE: core::ops::RangeInclusive<u32> = 1..=16;

/// Something [`NoiseConfig::validate`] found.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigIssue {
    /// The octave count is outside [`OCTAVE_RANGE`].
    #[error("octaves must be between 1 and 16, got {0}")]
    OctavesOutOfRange(u32),
    /// A numeric field is infinite or NaN.
    #[error("{0} must be finite")]
    NotFinite(ConfigKey),
    /// Persistence outside `[0, 1]` makes later octaves louder than earlier ones.
    #[error("persistence should be between 0.0 and 1.0, got {0}")]
    PersistenceOutOfRange(f64),
    /// Lacunarity outside `[1, 4]` makes octaves shrink or skip most detail.
    #[error("lacunarity should be between 1.0 and 4.0, got {0}")]
    LacunarityOutOfRange(f64),
}

/// The result of [`NoiseConfig::validate`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ConfigReport {
    /// Problems that make the configuration unusable.
    pub errors: Vec<ConfigIssue>,
    /// Suspicious but usable settings.
    pub warnings: Vec<ConfigIssue>,
}

impl ConfigReport {
    /// Returns true if there are no errors. Warnings are allowed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl NoiseConfig {
    /// The default configuration with `seed`.
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// The octave settings of this configuration.
    pub fn octave_settings(&self) -> Octaves {
        Octaves::new(self.octaves, self.persistence, self.lacunarity)
    }

    /// Checks the configuration for errors and warnings.
    pub fn validate(&self) -> ConfigReport {
        let mut report = ConfigReport::default();
        if !OCTAVE_RANGE.contains(&self.octaves) {
            report
                .errors
                .push(ConfigIssue::OctavesOutOfRange(self.octaves));
        }
        for key in ConfigKey::ALL {
            if matches!(self.value(key), ConfigValue::Float(value) if !value.is_finite()) {
                report.errors.push(ConfigIssue::NotFinite(key));
            }
        }
        if !(0.0..=1.0).contains(&self.persistence) {
            report
                .warnings
                .push(ConfigIssue::PersistenceOutOfRange(self.persistence));
        }
        if !(1.0..=4.0).contains(&self.lacunarity) {
            report
                .warnings
                .push(ConfigIssue::LacunarityOutOfRange(self.lacunarity));
        }
        report
    }

    /// Returns `self` with every field of `overrides` that differs from the default taken from `overrides`.
    ///
    /// A field can therefore not be overridden back to its default value.
    pub fn merge(&self, overrides: &Self) -> Self {
        let defaults = Self::default();
        let mut result = *self;
        for key in ConfigKey::ALL {
            let value = overrides.value(key);
            if value != defaults.value(key) {
                // A value read from a config always fits its own key.
                let _ = result.set_value(key, value);
            }
        }
        result
    }

    /// Reads the field named by `key`.
    pub fn value(&self, key: ConfigKey) -> ConfigValue {
        use ConfigValue::*;
        match key {
            ConfigKey::Prng => Index(self.prng.index()),
            ConfigKey::Variant => Index(self.variant.index()),
            ConfigKey::Interpolation => Index(self.interpolation.index()),
            ConfigKey::Precision => Index(self.precision.index()),
            ConfigKey::Seed => Integer(self.seed),
            ConfigKey::EnableSimd => Flag(self.enable_simd),
            ConfigKey::EnableCaching => Flag(self.enable_caching),
            ConfigKey::EnableProfiling => Flag(self.enable_profiling),
            ConfigKey::Persistence => Float(self.persistence),
            ConfigKey::Lacunarity => Float(self.lacunarity),
            ConfigKey::Octaves => Integer(self.octaves),
            ConfigKey::Frequency => Float(self.frequency),
            ConfigKey::Amplitude => Float(self.amplitude),
            ConfigKey::Offset => Float(self.offset),
            ConfigKey::Scale => Float(self.scale),
        }
    }

    /// Writes the field named by `key`.
    ///
    /// A PRNG index with no algorithm falls back to [`PrngAlgorithm::Lcg`].
    /// Other mismatches between the key and `value` are errors.
    pub fn set_value(&mut self, key: ConfigKey, value: ConfigValue) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        };
        match (key, value) {
            (ConfigKey::Prng, ConfigValue::Index(i)) => self.prng = PrngAlgorithm::from_index(i),
            (ConfigKey::Variant, ConfigValue::Index(i)) => {
                self.variant = NoiseVariant::from_index(i).ok_or_else(invalid)?;
            }
            (ConfigKey::Interpolation, ConfigValue::Index(i)) => {
                self.interpolation = Interpolation::from_index(i).ok_or_else(invalid)?;
            }
            (ConfigKey::Precision, ConfigValue::Index(i)) => {
                self.precision = Precision::from_index(i).ok_or_else(invalid)?;
            }
            (ConfigKey::Seed, ConfigValue::Integer(v)) => self.seed = v,
            (ConfigKey::Octaves, ConfigValue::Integer(v)) => self.octaves = v,
            (ConfigKey::EnableSimd, ConfigValue::Flag(v)) => self.enable_simd = v,
            (ConfigKey::EnableCaching, ConfigValue::Flag(v)) => self.enable_caching = v,
            (ConfigKey::EnableProfiling, ConfigValue::Flag(v)) => self.enable_profiling = v,
            (ConfigKey::Persistence, ConfigValue::Float(v)) => self.persistence = v,
            (ConfigKey::Lacunarity, ConfigValue::Float(v)) => self.lacunarity = v,
            (ConfigKey::Frequency, ConfigValue::Float(v)) => self.frequency = v,
            (ConfigKey::Amplitude, ConfigValue::Float(v)) => self.amplitude = v,
            (ConfigKey::Offset, ConfigValue::Float(v)) => self.offset = v,
            (ConfigKey::Scale, ConfigValue::Float(v)) => self.scale = v,
            _ => return Err(invalid()),
        }
        Ok(())
    }

    /// Formats the field named `key`. Floats use six decimal places and flags use `0`/`1`.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        let key = key.parse::<ConfigKey>()?;
        Ok(self.value(key).to_string())
    }

    /// Parses `value` into the field named `key`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let key = key.parse::<ConfigKey>()?;
        let parsed = key.parse_value(value)?;
        self.set_value(key, parsed)
    }
}

/// The value of one configuration field, tagged by kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigValue {
    /// The numeric selector of an enum field.
    Index(u32),
    /// An unsigned integer field.
    Integer(u32),
    /// A floating point field.
    Float(f64),
    /// A boolean toggle.
    Flag(bool),
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(v) | Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:.6}"),
            Self::Flag(v) => write!(f, "{}", u8::from(*v)),
        }
    }
}

/// Names a field of [`NoiseConfig`] for the string keyed adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    /// [`NoiseConfig::prng`], as an index.
    Prng,
    /// [`NoiseConfig::variant`], as an index.
    Variant,
    /// [`NoiseConfig::interpolation`], as an index.
    Interpolation,
    /// [`NoiseConfig::precision`], as an index.
    Precision,
    /// [`NoiseConfig::seed`].
    Seed,
    /// [`NoiseConfig::enable_simd`].
    EnableSimd,
    /// [`NoiseConfig::enable_caching`].
    EnableCaching,
    /// [`NoiseConfig::enable_profiling`].
    EnableProfiling,
    /// [`NoiseConfig::persistence`].
    Persistence,
    /// [`NoiseConfig::lacunarity`].
    Lacunarity,
    /// [`NoiseConfig::octaves`].
    Octaves,
    /// [`NoiseConfig::frequency`].
    Frequency,
    /// [`NoiseConfig::amplitude`].
    Amplitude,
    /// [`NoiseConfig::offset`].
    Offset,
    /// [`NoiseConfig::scale`].
    Scale,
}

impl ConfigKey {
    /// Every key with its external name.
    const TABLE: [(Self, &'static str); 15] = [
        (Self::Prng, "prng_type"),
        (Self::Variant, "noise_variant"),
        (Self::Interpolation, "interp_type"),
        (Self::Precision, "precision"),
        (Self::Seed, "seed"),
        (Self::EnableSimd, "enable_simd"),
        (Self::EnableCaching, "enable_caching"),
        (Self::EnableProfiling, "enable_profiling"),
        (Self::Persistence, "persistence"),
        (Self::Lacunarity, "lacunarity"),
        (Self::Octaves, "octaves"),
        (Self::Frequency, "frequency"),
        (Self::Amplitude, "amplitude"),
        (Self::Offset, "offset"),
        (Self::Scale, "scale"),
    ];

    /// Every key.
    pub const ALL: [Self; 15] = {
        let mut result = [Self::Prng; 15];
        let mut i = 0;
        while i < Self::TABLE.len() {
            result[i] = Self::TABLE[i].0;
            i += 1;
        }
        result
    };

    /// The external name of the key.
    pub fn name(self) -> &'static str {
        Self::TABLE[self as usize].1
    }

    /// Parses text into the kind of value this key holds.
    pub fn parse_value(self, text: &str) -> Result<ConfigValue, ConfigError> {
        let text = text.trim();
        let invalid = || ConfigError::InvalidValue {
            key: self,
            value: text.to_owned(),
        };
        let value = match NoiseConfig::default().value(self) {
            ConfigValue::Index(_) => ConfigValue::Index(text.parse().map_err(|_| invalid())?),
            ConfigValue::Integer(_) => ConfigValue::Integer(text.parse().map_err(|_| invalid())?),
            ConfigValue::Float(_) => ConfigValue::Float(text.parse().map_err(|_| invalid())?),
            ConfigValue::Flag(_) => ConfigValue::Flag(match text {
                "1" | "true" => true,
                "0" | "false" => false,
                _ => return Err(invalid()),
            }),
        };
        Ok(value)
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::TABLE
            .iter()
            .find(|(_, name)| *name == s)
            .map(|(key, _)| *key)
            .ok_or_else(|| ConfigError::UnknownKey(s.to_owned()))
    }
}

/// Errors from the string keyed configuration adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No field has this name.
    #[error("unknown configuration key `{0}`")]
    UnknownKey(String),
    /// The text does not parse as the field's kind, or names no enum variant.
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue {
        /// The field being written.
        key: ConfigKey,
        /// The rejected value.
        value: String,
    },
}
