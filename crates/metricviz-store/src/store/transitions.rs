use metricviz_core::model::MetricState;

/// Strict transition table.
///
/// Allowed: staying put, one step along
/// `Added -> Initializing -> Initialized -> Plotted`, and any state to
/// `Removed`. Leaving `Removed` requires re-selection.
pub fn is_allowed_transition(from: MetricState, to: MetricState) -> bool {
    from == to || to == MetricState::Removed || from.successor() == Some(to)
}
