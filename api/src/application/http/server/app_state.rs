use std::sync::Arc;

use chewcheck_core::application::ChewCheckService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: ChewCheckService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: ChewCheckService) -> Self {
        Self { args, service }
    }
}
