use std::fmt;
use std::str::FromStr;

/// One of the two draggable endpoints of a range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handle {
    Min,
    Max,
}

impl Handle {
    pub const BOTH: [Handle; 2] = [Handle::Min, Handle::Max];

    pub fn as_str(self) -> &'static str {
        match self {
            Handle::Min => "min",
            Handle::Max => "max",
        }
    }

    /// Prefix used in the accessible label, e.g. "Minimum value".
    pub fn aria_prefix(self) -> &'static str {
        match self {
            Handle::Min => "Minimum value",
            Handle::Max => "Maximum value",
        }
    }

    /// Prefix used in the bound labels under the fixed slider.
    pub fn short_prefix(self) -> &'static str {
        match self {
            Handle::Min => "Min",
            Handle::Max => "Max",
        }
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Handle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "min" => Ok(Handle::Min),
            "max" => Ok(Handle::Max),
            other => Err(format!("unknown handle '{other}'")),
        }
    }
}
