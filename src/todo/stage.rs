//! Daily Completion Stages
//!
//! Chaos dungeon is checked in two runs per day, guardian raid in one.
//! The backend encodes progress as a small integer; these enums make the
//! "fully done" value explicit.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("completion stage out of range: {0}")]
pub struct StageOutOfRange(pub u8);

/// Chaos dungeon progress (0, 1 or 2 runs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ChaosStage {
    #[default]
    None,
    Once,
    Done,
}

impl ChaosStage {
    /// Stage after one more click; wraps back to None after Done
    pub fn next(self) -> Self {
        match self {
            ChaosStage::None => ChaosStage::Once,
            ChaosStage::Once => ChaosStage::Done,
            ChaosStage::Done => ChaosStage::None,
        }
    }

    pub fn is_done(self) -> bool {
        self == ChaosStage::Done
    }
}

impl TryFrom<u8> for ChaosStage {
    type Error = StageOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ChaosStage::None),
            1 => Ok(ChaosStage::Once),
            2 => Ok(ChaosStage::Done),
            other => Err(StageOutOfRange(other)),
        }
    }
}

impl From<ChaosStage> for u8 {
    fn from(stage: ChaosStage) -> Self {
        match stage {
            ChaosStage::None => 0,
            ChaosStage::Once => 1,
            ChaosStage::Done => 2,
        }
    }
}

/// Guardian raid progress (0 or 1 run)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GuardianStage {
    #[default]
    None,
    Done,
}

impl GuardianStage {
    pub fn next(self) -> Self {
        match self {
            GuardianStage::None => GuardianStage::Done,
            GuardianStage::Done => GuardianStage::None,
        }
    }

    pub fn is_done(self) -> bool {
        self == GuardianStage::Done
    }
}

impl TryFrom<u8> for GuardianStage {
    type Error = StageOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(GuardianStage::None),
            1 => Ok(GuardianStage::Done),
            other => Err(StageOutOfRange(other)),
        }
    }
}

impl From<GuardianStage> for u8 {
    fn from(stage: GuardianStage) -> Self {
        match stage {
            GuardianStage::None => 0,
            GuardianStage::Done => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chaos_cycles_through_three_stages() {
        let stage = ChaosStage::default();
        assert_eq!(stage.next(), ChaosStage::Once);
        assert_eq!(stage.next().next(), ChaosStage::Done);
        assert_eq!(stage.next().next().next(), ChaosStage::None);
        assert!(ChaosStage::Done.is_done());
        assert!(!ChaosStage::Once.is_done());
    }

    #[test]
    fn test_guardian_toggles() {
        assert_eq!(GuardianStage::None.next(), GuardianStage::Done);
        assert_eq!(GuardianStage::Done.next(), GuardianStage::None);
    }

    #[test]
    fn test_stages_use_integer_wire_format() {
        assert_eq!(serde_json::to_string(&ChaosStage::Done).unwrap(), "2");
        assert_eq!(serde_json::from_str::<ChaosStage>("1").unwrap(), ChaosStage::Once);
        assert_eq!(serde_json::from_str::<GuardianStage>("1").unwrap(), GuardianStage::Done);
    }

    #[test]
    fn test_out_of_range_stage_is_rejected() {
        assert!(serde_json::from_str::<ChaosStage>("3").is_err());
        assert!(serde_json::from_str::<GuardianStage>("2").is_err());
        assert_eq!(GuardianStage::try_from(5), Err(StageOutOfRange(5)));
    }

    #[test]
    fn test_out_of_range_error_message() {
        let err: Box<dyn std::error::Error> = Box::new(StageOutOfRange(7));
        assert_eq!(err.to_string(), "completion stage out of range: 7");
    }
}
