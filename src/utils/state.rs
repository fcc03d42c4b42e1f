use crate::{stats::StatsPipeline, utils::config::Config};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub pipeline: StatsPipeline,
}
