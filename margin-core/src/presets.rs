use crate::margin::Parameters;
use crate::{ConfigError, UnknownPresetError};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Manual-method failure probability used when a preset omits `P_man`.
pub const DEFAULT_P_MAN: f64 = 0.05;

#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    pub name: String,
    pub parameters: Parameters,
}

#[derive(Debug, Deserialize)]
struct RawPreset {
    #[serde(rename = "P_ab_pred")]
    p_ab_pred: Option<f64>,
    #[serde(rename = "P_prev_ab")]
    p_prev_ab: Option<f64>,
    #[serde(rename = "P_fn")]
    p_fn: Option<f64>,
    #[serde(rename = "P_man")]
    p_man: Option<f64>,
}

/// Preset entries in the order the source declares them.
struct OrderedPresets(Vec<(String, RawPreset)>);

impl<'de> Deserialize<'de> for OrderedPresets {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = OrderedPresets;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of preset names to parameter tables")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, raw)) = map.next_entry::<String, RawPreset>()? {
                    entries.push((name, raw));
                }
                Ok(OrderedPresets(entries))
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

fn required(preset: &str, field: &'static str, value: Option<f64>) -> Result<f64, ConfigError> {
    let value = value.ok_or_else(|| ConfigError::MissingField {
        preset: preset.to_string(),
        field,
    })?;
    probability(preset, field, value)
}

fn probability(preset: &str, field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::OutOfRange {
            preset: preset.to_string(),
            field,
            value,
        })
    }
}

impl Preset {
    fn from_raw(name: String, raw: RawPreset) -> Result<Self, ConfigError> {
        let parameters = Parameters {
            p_ab_pred: required(&name, "P_ab_pred", raw.p_ab_pred)?,
            p_prev_ab: required(&name, "P_prev_ab", raw.p_prev_ab)?,
            p_fn: required(&name, "P_fn", raw.p_fn)?,
            p_man: probability(&name, "P_man", raw.p_man.unwrap_or(DEFAULT_P_MAN))?,
        };
        Ok(Self { name, parameters })
    }
}

/// Named parameter sets, read once at startup and immutable afterwards.
///
/// Iteration order is the declaration order of the source; the first preset
/// is the default.
#[derive(Debug, Clone)]
pub struct PresetStore {
    presets: Vec<Preset>,
}

impl PresetStore {
    /// Reads a preset file. `.toml` files are parsed as TOML, everything else
    /// as JSON.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        let store = if is_toml {
            Self::from_toml_str(&data)
        } else {
            Self::from_json_str(&data)
        }
        .map_err(|err| match err {
            ConfigError::Parse(msg) => ConfigError::Parse(format!("'{}': {msg}", path.display())),
            other => other,
        })?;
        log::info!(
            "Loaded {} preset(s) from '{}'",
            store.len(),
            path.display()
        );
        Ok(store)
    }

    pub fn from_json_str(data: &str) -> Result<Self, ConfigError> {
        let ordered: OrderedPresets =
            serde_json::from_str(data).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Self::from_ordered(ordered)
    }

    pub fn from_toml_str(data: &str) -> Result<Self, ConfigError> {
        let ordered: OrderedPresets =
            toml::from_str(data).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Self::from_ordered(ordered)
    }

    fn from_ordered(ordered: OrderedPresets) -> Result<Self, ConfigError> {
        let mut presets: Vec<Preset> = Vec::with_capacity(ordered.0.len());
        for (name, raw) in ordered.0 {
            if presets.iter().any(|p| p.name == name) {
                return Err(ConfigError::DuplicatePreset(name));
            }
            presets.push(Preset::from_raw(name, raw)?);
        }
        if presets.is_empty() {
            return Err(ConfigError::Empty);
        }
        Ok(Self { presets })
    }

    pub fn get(&self, name: &str) -> Result<&Preset, UnknownPresetError> {
        self.presets
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| UnknownPresetError(name.to_string()))
    }

    pub fn default_preset(&self) -> &Preset {
        // Construction rejects empty collections.
        &self.presets[0]
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.iter().map(|p| p.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
