// crates/posture-gate-core/src/core/recommendation.rs
// ============================================================================
// Module: Posture Gate Recommendation Model
// Description: Access recommendation and evaluation result codes.
// Purpose: Keep the verifier's access decision and result code as one pair.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The verifier's current access decision is always a pair: the action the
//! enforcement point should take and the evaluation result backing it. The
//! two codes are never read or written independently; [`Recommendation`]
//! enforces that contract at the type level.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Recommendation Codes
// ============================================================================

/// Access action recommended to the policy enforcement point.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionRecommendation {
    /// Grant full network access.
    Allow,
    /// Quarantine the endpoint into an isolated network segment.
    Isolate,
    /// Deny network access.
    Block,
    /// No recommendation has been reached yet.
    NoRecommendation,
}

/// Evaluation result backing an action recommendation.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationResult {
    /// Endpoint satisfies all policy requirements.
    Compliant,
    /// Endpoint violates policy in a minor, tolerable way.
    MinorNonCompliant,
    /// Endpoint violates policy in a way that requires enforcement.
    MajorNonCompliant,
    /// The assessment itself failed.
    Error,
    /// No result has been derived yet.
    DontKnow,
}

// ============================================================================
// SECTION: Recommendation Pair
// ============================================================================

/// Access recommendation paired with its evaluation result.
///
/// # Invariants
/// - The two codes always move together; there is no partial update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Recommended enforcement action.
    pub action: ActionRecommendation,
    /// Evaluation result backing the action.
    pub evaluation: EvaluationResult,
}

impl Recommendation {
    /// Creates a recommendation pair.
    #[must_use]
    pub const fn new(action: ActionRecommendation, evaluation: EvaluationResult) -> Self {
        Self {
            action,
            evaluation,
        }
    }

    /// Returns the pair used before any assessment evidence arrives.
    #[must_use]
    pub const fn undecided() -> Self {
        Self::new(ActionRecommendation::NoRecommendation, EvaluationResult::DontKnow)
    }
}

impl Default for Recommendation {
    fn default() -> Self {
        Self::undecided()
    }
}
