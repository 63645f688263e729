use chrono::{DateTime, FixedOffset, Local, Utc};
use chrono_tz::Tz;

use crate::error::AppError;

/// Clock used to stamp reports
#[derive(Debug, Clone, Copy, Default)]
pub(crate) enum Timezone {
    #[default]
    Local,
    Named(Tz),
}

impl Timezone {
    /// Accepts nothing/"local", "UTC"/"Z" (any case), or an IANA zone name
    pub(crate) fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let name = value.map(str::trim).unwrap_or_default();
        match name.to_ascii_lowercase().as_str() {
            "" | "local" => Ok(Timezone::Local),
            "utc" | "z" => Ok(Timezone::Named(chrono_tz::UTC)),
            _ => name
                .parse::<Tz>()
                .map(Timezone::Named)
                .map_err(|_| AppError::InvalidTimezone {
                    input: name.to_string(),
                }),
        }
    }

    /// Wall-clock time of `utc` in this zone, keeping the offset in effect at that instant
    pub(crate) fn to_fixed_offset(self, utc: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Timezone::Local => utc.with_timezone(&Local).fixed_offset(),
            Timezone::Named(tz) => utc.with_timezone(&tz).fixed_offset(),
        }
    }

    /// Current wall-clock time in this timezone
    pub(crate) fn now(self) -> DateTime<FixedOffset> {
        self.to_fixed_offset(Utc::now())
    }
}
