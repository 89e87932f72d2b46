//! Side-effect classification of operations

use crate::core::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What an operation may do besides producing its value
///
/// The string token of every member is its exact name, which is how compiler
/// dumps spell it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpPropertiesType {
    /// No side effects, freely movable
    Pure,
    /// Reads memory
    Reading,
    /// Writes memory
    Writing,
    /// May deoptimize
    CanDeopt,
    /// Arbitrary side effects
    AnySideEffects,
    /// Ends its block
    BlockTerminator,
}

impl OpPropertiesType {
    /// All members in declaration order
    pub const ALL: [OpPropertiesType; 6] = [
        OpPropertiesType::Pure,
        OpPropertiesType::Reading,
        OpPropertiesType::Writing,
        OpPropertiesType::CanDeopt,
        OpPropertiesType::AnySideEffects,
        OpPropertiesType::BlockTerminator,
    ];

    /// The stable string token
    pub const fn as_str(self) -> &'static str {
        match self {
            OpPropertiesType::Pure => "Pure",
            OpPropertiesType::Reading => "Reading",
            OpPropertiesType::Writing => "Writing",
            OpPropertiesType::CanDeopt => "CanDeopt",
            OpPropertiesType::AnySideEffects => "AnySideEffects",
            OpPropertiesType::BlockTerminator => "BlockTerminator",
        }
    }
}

impl fmt::Display for OpPropertiesType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OpPropertiesType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseError::UnknownOpProperties(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_round_trip() {
        for kind in OpPropertiesType::ALL {
            assert_eq!(kind.to_string().parse::<OpPropertiesType>(), Ok(kind));
        }
        assert_eq!(OpPropertiesType::CanDeopt.to_string(), "CanDeopt");
        assert_eq!(OpPropertiesType::AnySideEffects.to_string(), "AnySideEffects");
    }

    #[test]
    fn test_unknown_token() {
        assert_eq!(
            "pure".parse::<OpPropertiesType>(),
            Err(ParseError::UnknownOpProperties("pure".to_string()))
        );
        assert!("".parse::<OpPropertiesType>().is_err());
    }

    #[test]
    fn test_serde_uses_same_tokens() {
        let json = serde_json::to_string(&OpPropertiesType::BlockTerminator).unwrap();
        assert_eq!(json, "\"BlockTerminator\"");
        let kind: OpPropertiesType = serde_json::from_str("\"Writing\"").unwrap();
        assert_eq!(kind, OpPropertiesType::Writing);
        assert!(serde_json::from_str::<OpPropertiesType>("\"Impure\"").is_err());
    }
}
