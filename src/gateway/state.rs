//! Gateway 应用状态

use std::sync::Arc;

use crate::upstream::Upstream;

/// Gateway 应用状态
///
/// 只持有只读的 Forwarder，请求之间不共享可变状态。
#[derive(Clone)]
pub struct AppState {
    upstream: Arc<dyn Upstream>,
}

impl AppState {
    pub fn new(upstream: Arc<dyn Upstream>) -> Self {
        Self { upstream }
    }

    pub fn upstream(&self) -> &dyn Upstream {
        self.upstream.as_ref()
    }
}
