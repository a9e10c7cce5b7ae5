use std::{fmt::Display, str::FromStr};

use derive_builder::Builder;
use saphyr::Yaml;

use crate::placement::{DistributionMode, PlacementError};

/// The output of the parser. Every value is optional, because the cli options
/// can override the values in the yaml file and the rest falls back to
/// defaults.
#[derive(Debug, PartialEq, Clone, Default, Builder)]
#[builder(default, setter(strip_option))]
pub struct YamlPlanConfig {
    pub lamps: Option<usize>,
    pub mode: Option<DistributionMode>,
    pub padding: Option<f64>,

    pub width: Option<usize>,
    pub height: Option<usize>,
    pub supersampling_level: Option<usize>,

    pub animation: Option<YamlAnimationConfig>,
}

#[derive(Debug, PartialEq, Clone, Default, Builder)]
#[builder(default, setter(strip_option))]
pub struct YamlAnimationConfig {
    pub padding_to: Option<f64>,
    pub framerate: Option<u32>,
    pub duration_sec: Option<f64>,
}

#[derive(Debug, PartialEq)]
pub enum YamlParseError {
    InvalidField(String),
    UnknownField(String),
    InvalidMode(PlacementError),
    YamlSyntaxError(String),
    MultipleDocuments,
}

impl Display for YamlParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            YamlParseError::InvalidField(field) => write!(f, "invalid value for `{field}`"),
            YamlParseError::UnknownField(field) => write!(f, "unknown field `{field}`"),
            YamlParseError::InvalidMode(err) => write!(f, "{err}"),
            YamlParseError::YamlSyntaxError(msg) => write!(f, "yaml syntax error: {msg}"),
            YamlParseError::MultipleDocuments => {
                write!(f, "a plan file must contain a single yaml document")
            }
        }
    }
}

impl std::error::Error for YamlParseError {}

impl From<PlacementError> for YamlParseError {
    fn from(err: PlacementError) -> Self {
        Self::InvalidMode(err)
    }
}

type YamlParseResult<T> = Result<T, YamlParseError>;

fn parse_float(field: &str, value: &Yaml) -> YamlParseResult<f64> {
    match value {
        Yaml::Integer(value) => Ok(*value as f64),
        Yaml::Real(value) => {
            f64::from_str(value).map_err(|_| YamlParseError::InvalidField(field.to_string()))
        }
        _ => Err(YamlParseError::InvalidField(field.to_string())),
    }
}

fn parse_unsigned<T: TryFrom<i64>>(field: &str, value: &Yaml) -> YamlParseResult<T> {
    value
        .as_i64()
        .and_then(|v| T::try_from(v).ok())
        .ok_or_else(|| YamlParseError::InvalidField(field.to_string()))
}

fn parse_mode(value: &Yaml) -> YamlParseResult<DistributionMode> {
    let name = value
        .as_str()
        .ok_or_else(|| YamlParseError::InvalidField("mode".to_string()))?;
    Ok(name.parse()?)
}

fn entries(field: &str, body: &Yaml) -> YamlParseResult<Vec<(String, Yaml)>> {
    let hash = body
        .as_hash()
        .ok_or_else(|| YamlParseError::InvalidField(field.to_string()))?;
    hash.iter()
        .map(|(key, value)| {
            key.as_str()
                .map(|key| (key.to_string(), value.clone()))
                .ok_or_else(|| YamlParseError::InvalidField(field.to_string()))
        })
        .collect()
}

fn parse_animation(body: &Yaml) -> YamlParseResult<YamlAnimationConfig> {
    let mut config = YamlAnimationConfig::default();
    for (key, value) in entries("animation", body)? {
        match key.as_str() {
            "padding-to" => config.padding_to = Some(parse_float(&key, &value)?),
            "framerate" => config.framerate = Some(parse_unsigned(&key, &value)?),
            "duration" => config.duration_sec = Some(parse_float(&key, &value)?),
            _ => return Err(YamlParseError::UnknownField(format!("animation.{key}"))),
        }
    }
    Ok(config)
}

fn parse_plan(body: &Yaml) -> YamlParseResult<YamlPlanConfig> {
    let mut config = YamlPlanConfig::default();
    if matches!(body, Yaml::Null) {
        return Ok(config);
    }
    for (key, value) in entries("plan", body)? {
        match key.as_str() {
            "lamps" => config.lamps = Some(parse_unsigned(&key, &value)?),
            "mode" => config.mode = Some(parse_mode(&value)?),
            "padding" => config.padding = Some(parse_float(&key, &value)?),
            "width" => config.width = Some(parse_unsigned(&key, &value)?),
            "height" => config.height = Some(parse_unsigned(&key, &value)?),
            "supersampling" => config.supersampling_level = Some(parse_unsigned(&key, &value)?),
            "animation" => config.animation = Some(parse_animation(&value)?),
            _ => return Err(YamlParseError::UnknownField(key)),
        }
    }
    Ok(config)
}

fn str_to_yaml(source: &str) -> YamlParseResult<Option<Yaml>> {
    let mut docs = Yaml::load_from_str(source)
        .map_err(|e| YamlParseError::YamlSyntaxError(e.to_string()))?;
    match docs.len() {
        0 => Ok(None),
        1 => Ok(docs.pop()),
        _ => Err(YamlParseError::MultipleDocuments),
    }
}

pub fn parse_str(source: &str) -> YamlParseResult<YamlPlanConfig> {
    match str_to_yaml(source)? {
        Some(yaml) => parse_plan(&yaml),
        None => Ok(YamlPlanConfig::default()),
    }
}
