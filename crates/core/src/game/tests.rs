//! Scenario tests for the turn controller.

mod input_flow;
mod items;

/// Shared imports for controller scenario tests.
mod support {
    pub(super) use super::super::test_support::*;
    pub(super) use super::super::*;
    pub(super) use crate::content;
}
