use thiserror::Error;

use crate::model::SectionId;

/// Errors emitted when configuring or driving an animation component.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MotionError {
    #[error("content list must contain at least one item")]
    EmptyContent,
    #[error("{field} must be greater than zero")]
    ZeroDelay { field: &'static str },
    #[error("question_delay + answer_delay + hold does not fit in a duration")]
    CycleOverflow,
    #[error("{field} must be finite and non-negative, got {provided}")]
    InvalidOffset { field: &'static str, provided: f64 },
    #[error("visibility threshold must be in (0, 1], got {provided}")]
    InvalidThreshold { provided: f64 },
    #[error("section {0} is registered more than once")]
    DuplicateSection(SectionId),
    #[error("sections are already registered")]
    AlreadyRegistered,
    #[error("component has been torn down")]
    Sealed,
    #[error(transparent)]
    Observe(#[from] ObserveError),
}

/// Returned by a `ScrollTarget` that cannot perform the requested scroll.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScrollError {
    #[error("scroll container is not mounted")]
    Detached,
}

/// Returned by an `ObservationContext` that cannot watch a target.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ObserveError {
    #[error("observation context is unavailable: {0}")]
    Unavailable(String),
    #[error("no element found for section {0}")]
    MissingTarget(SectionId),
}
