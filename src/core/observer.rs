use super::housing::HousingPosition;
use super::results::{AssetBreakdown, CalculatorResult};

/// Hooks the engine calls at each pipeline stage. All methods default to
/// no-ops so callers only override the stages they care about.
pub trait CalcObserver {
    fn housing_evaluated(&self, _position: &HousingPosition) {}

    fn breakdown_assembled(&self, _breakdown: &AssetBreakdown) {}

    fn result_ready(&self, _result: &CalculatorResult) {}
}

pub struct NoopObserver;

impl CalcObserver for NoopObserver {}
