use super::clock_state::ClockState;
use super::log_filter::LogFilter;
use crate::core::log_store::LogStore;
use serde::{Deserialize, Serialize};

/// Everything persisted under the `clockAppState` key, written wholesale on
/// every mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    #[serde(flatten)]
    pub clock: ClockState,
    #[serde(default)]
    pub logs: LogStore,
    #[serde(default)]
    pub log_filter: LogFilter,
}
