use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/**
    Video metadata as returned by the video API.

    Every field is optional: a response missing fields, or carrying a field of
    the wrong type, still loads, and the gaps show up as `None` in
    [`VideoInfo`].
*/
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMetadata {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    /// Duration in milliseconds.
    #[serde(default, deserialize_with = "lenient")]
    pub length: Option<u64>,
    /// Epoch milliseconds, delivered as a string by the API. An explicit
    /// `null` reads as an empty string, i.e. epoch zero.
    #[serde(default, deserialize_with = "published_date")]
    pub published_date: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub long_description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub short_description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub renditions: Vec<Rendition>,
    #[serde(default, rename = "videoStillURL", deserialize_with = "lenient")]
    pub video_still_url: Option<String>,
}

/**
    One encoded variant of a video.
*/
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rendition {
    #[serde(default, deserialize_with = "lenient")]
    pub url: String,
    /// Bitrate in bits per second.
    #[serde(default, deserialize_with = "lenient")]
    pub encoding_rate: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub frame_width: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub frame_height: Option<u32>,
    /// File size in bytes.
    #[serde(default, deserialize_with = "lenient")]
    pub size: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub video_codec: Option<String>,
    /// Container format, e.g. `MP4` or `M2TS`.
    #[serde(default, deserialize_with = "lenient")]
    pub video_container: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub audio_only: Option<bool>,
    /// Any other attributes the API sends.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/**
    Display-ready projection of [`VideoMetadata`].
*/
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoInfo {
    pub poster_image: Option<String>,
    pub id: Option<String>,
    pub length: Option<u64>,
    pub long_description: Option<String>,
    pub name: Option<String>,
    /// ISO-8601 with milliseconds, e.g. `1970-01-01T00:00:00.000Z`.
    pub published_date: String,
    /// e.g. `Thu, 01 Jan 1970 00:00:00 GMT`.
    pub published_date_readable: String,
    pub short_description: Option<String>,
    pub tags: Vec<String>,
}

impl VideoMetadata {
    /**
        Parse the published date into a UTC datetime.

        Follows numeric coercion of the raw value: surrounding whitespace is
        ignored, an empty string is epoch zero and fractional milliseconds are
        truncated.
    */
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.published_date.as_deref()?.trim();
        let millis = if raw.is_empty() {
            0.0
        } else {
            raw.parse::<f64>().ok()?
        };
        if !millis.is_finite() {
            return None;
        }
        Utc.timestamp_millis_opt(millis.trunc() as i64).single()
    }

    /**
        Project into a [`VideoInfo`], attaching the computed poster URL.
    */
    pub fn info(&self, poster_image: Option<&str>) -> Result<VideoInfo> {
        let date = self
            .published_at()
            .ok_or_else(|| Error::InvalidDate(self.published_date.clone()))?;

        Ok(VideoInfo {
            poster_image: poster_image.map(str::to_string),
            id: self.id.clone(),
            length: self.length,
            long_description: self.long_description.clone(),
            name: self.name.clone(),
            published_date: iso_string(&date),
            published_date_readable: utc_string(&date),
            short_description: self.short_description.clone(),
            tags: self.tags.clone(),
        })
    }
}

/// `toISOString` layout: years outside 0000-9999 get a sign and six digits.
fn iso_string(date: &DateTime<Utc>) -> String {
    let year = date.year();
    let year = if (0..=9999).contains(&year) {
        format!("{:04}", year)
    } else {
        let sign = if year < 0 { '-' } else { '+' };
        format!("{}{:06}", sign, year.unsigned_abs())
    };
    format!("{}{}", year, date.format("-%m-%dT%H:%M:%S%.3fZ"))
}

/// `toUTCString` layout: at least four year digits, `-` for negative years.
fn utc_string(date: &DateTime<Utc>) -> String {
    let year = date.year();
    let year = if year < 0 {
        format!("-{:04}", year.unsigned_abs())
    } else {
        format!("{:04}", year)
    };
    format!(
        "{}{}{}",
        date.format("%a, %d %b "),
        year,
        date.format(" %H:%M:%S GMT")
    )
}

/// Strings and numbers as text; anything else is absent.
fn as_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(as_text(Value::deserialize(deserializer)?))
}

fn published_date<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    // Only called when the key is present; a missing key stays `None`
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => Some(String::new()),
        value => as_text(value),
    })
}

/// Falls back to the default (`None`, empty) when the value has the wrong
/// type or is out of range.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}
