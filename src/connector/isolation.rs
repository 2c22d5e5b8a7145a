use crate::error::{Error, ErrorKind};
use std::fmt;
use std::str::FromStr;

/// The transaction isolation level a datasource is configured with. Applied
/// with `SET TRANSACTION ISOLATION LEVEL` when a pooled connection opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IsolationLevel {
    ReadUncommitted,
    ReadCommitted,
    RepeatableRead,
    Snapshot,
    Serializable,
}

impl fmt::Display for IsolationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadUncommitted => write!(f, "READ UNCOMMITTED"),
            Self::ReadCommitted => write!(f, "READ COMMITTED"),
            Self::RepeatableRead => write!(f, "REPEATABLE READ"),
            Self::Snapshot => write!(f, "SNAPSHOT"),
            Self::Serializable => write!(f, "SERIALIZABLE"),
        }
    }
}

impl FromStr for IsolationLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "readuncommitted" => Ok(Self::ReadUncommitted),
            "readcommitted" => Ok(Self::ReadCommitted),
            "repeatableread" => Ok(Self::RepeatableRead),
            "snapshot" => Ok(Self::Snapshot),
            "serializable" => Ok(Self::Serializable),
            _ => {
                let kind = ErrorKind::conversion("invalid isolation level");
                Err(Error::builder(kind).build())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_accepts_spaces_underscores_and_case() {
        assert_eq!(
            IsolationLevel::ReadCommitted,
            "READ COMMITTED".parse().unwrap()
        );
        assert_eq!(
            IsolationLevel::RepeatableRead,
            "repeatable_read".parse().unwrap()
        );
        assert_eq!(IsolationLevel::Snapshot, "Snapshot".parse().unwrap());
        assert!("chaos".parse::<IsolationLevel>().is_err());
    }

    #[test]
    fn display_renders_the_sql_form() {
        assert_eq!(
            "READ UNCOMMITTED",
            IsolationLevel::ReadUncommitted.to_string()
        );
    }
}
