//! 测试用的上游替身：记录所有请求并返回预设结果

use async_trait::async_trait;
use http::StatusCode;
use serde_json::Value;
use std::sync::Mutex;

use super::{ForwardError, Upstream, UpstreamRequest};

/// 预设的上游结果
#[derive(Debug, Clone)]
pub enum MockReply {
    Ok(Value),
    Status(StatusCode, Value),
    MissingCredential,
}

pub struct MockUpstream {
    reply: MockReply,
    calls: Mutex<Vec<UpstreamRequest>>,
}

impl MockUpstream {
    pub fn new(reply: MockReply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<UpstreamRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Upstream for MockUpstream {
    async fn forward(&self, request: UpstreamRequest) -> Result<Value, ForwardError> {
        let reply = match &self.reply {
            // 与真实实现一致：缺少密钥时不产生出站调用
            MockReply::MissingCredential => return Err(ForwardError::MissingCredential),
            MockReply::Ok(body) => Ok(body.clone()),
            MockReply::Status(status, details) => Err(ForwardError::Upstream {
                status: *status,
                message: request.kind.error_message(),
                details: details.clone(),
            }),
        };

        self.calls.lock().unwrap().push(request);
        reply
    }

    fn credential_configured(&self) -> bool {
        !matches!(self.reply, MockReply::MissingCredential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::{RequestKind, TRENDING_PATH};
    use serde_json::json;

    fn trending() -> UpstreamRequest {
        UpstreamRequest::new(RequestKind::Trending, TRENDING_PATH).param("geo", "US")
    }

    #[tokio::test]
    async fn only_attempted_calls_are_recorded() {
        let missing = MockUpstream::new(MockReply::MissingCredential);
        assert!(matches!(
            missing.forward(trending()).await,
            Err(ForwardError::MissingCredential)
        ));
        assert_eq!(missing.call_count(), 0);

        let failing = MockUpstream::new(MockReply::Status(StatusCode::BAD_GATEWAY, json!("down")));
        assert!(matches!(
            failing.forward(trending()).await,
            Err(ForwardError::Upstream { status, .. }) if status == StatusCode::BAD_GATEWAY
        ));
        assert_eq!(failing.calls(), vec![trending()]);
    }
}
