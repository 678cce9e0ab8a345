// ABOUTME: Scripted LlmProvider double for route and service tests
// ABOUTME: Returns a fixed reply and counts calls so tests can assert no provider call happened

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use fitness_plan_relay::errors::{AppError, AppResult};
use fitness_plan_relay::llm::LlmProvider;

/// What the scripted provider answers with
#[derive(Debug, Clone)]
pub enum Reply {
    Text(String),
    NoText,
    UpstreamStatus(u16, String),
    Unreachable,
}

/// Provider double that never touches the network
pub struct ScriptedProvider {
    reply: Reply,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    #[allow(dead_code)]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompt lock poisoned").clone()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn generate(&self, prompt: &str) -> AppResult<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts
            .lock()
            .expect("prompt lock poisoned")
            .push(prompt.to_owned());

        match &self.reply {
            Reply::Text(text) => Ok(Some(text.clone())),
            Reply::NoText => Ok(None),
            Reply::UpstreamStatus(status, body) => Err(AppError::upstream(*status, body)),
            Reply::Unreachable => Err(AppError::upstream_unreachable(
                "Plan provider connection failed",
            )),
        }
    }
}
