//! Render harness.
//!
//! Glue for callers that drive a live renderer: hand it the test case's code,
//! give it a fixed grace period to finish painting, then run the synchronous
//! verification core against whatever tree exists at that point.
//!
//! The wait is a heuristic. It cannot be cancelled and does not prove that
//! rendering finished; it only bounds how long the caller is willing to give
//! the renderer.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::dom::RenderedDocument;
use crate::engine::ExpectationEngine;
use crate::types::{Summary, TestCase, VerificationResult};

/// Default grace period granted to the renderer.
pub const DEFAULT_RENDER_WAIT: Duration = Duration::from_millis(1000);

/// Sleep for `timeout`. Always elapses in full.
pub async fn wait_for_render(timeout: Duration) {
    tokio::time::sleep(timeout).await;
}

/// External component that renders source code into a highlighted tree.
#[async_trait]
pub trait Renderer: Send + Sync {
    /// Rendered output.
    type Document: RenderedDocument + Send;

    /// Error type for render failures.
    type Error: std::error::Error + Send + Sync;

    /// Render `code` and return the resulting tree.
    async fn render(&self, code: &str) -> Result<Self::Document, Self::Error>;
}

/// Error type for harness runs.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// The renderer failed.
    #[error("Render error: {0}")]
    Render(String),
}

impl HarnessError {
    /// Create a render error from any error type.
    pub fn from_render<E: std::error::Error>(e: E) -> Self {
        Self::Render(e.to_string())
    }
}

/// Drives a renderer through test cases.
pub struct RenderHarness<R: Renderer> {
    renderer: Arc<R>,
    engine: ExpectationEngine,
    render_wait: Duration,
}

impl<R: Renderer> RenderHarness<R> {
    /// Create a harness with the default engine and render wait.
    pub fn new(renderer: Arc<R>) -> Self {
        Self::with_engine(renderer, ExpectationEngine::default(), DEFAULT_RENDER_WAIT)
    }

    /// Create a harness with a custom engine and render wait.
    pub fn with_engine(renderer: Arc<R>, engine: ExpectationEngine, render_wait: Duration) -> Self {
        Self {
            renderer,
            engine,
            render_wait,
        }
    }

    /// Replace the render wait (builder style).
    pub fn render_wait(mut self, render_wait: Duration) -> Self {
        self.render_wait = render_wait;
        self
    }

    /// Get the engine.
    pub fn engine(&self) -> &ExpectationEngine {
        &self.engine
    }

    /// Render the case's code, wait, then verify its expectations.
    pub async fn run(&self, case: &TestCase) -> Result<VerificationResult, HarnessError> {
        let document = self.render_and_wait(&case.code).await?;
        let root = document.root();
        Ok(self.engine.verify_test_case(Some(&root), case))
    }

    /// Run several cases in order, stopping at the first render failure.
    pub async fn run_all(
        &self,
        cases: &[TestCase],
    ) -> Result<Vec<(String, VerificationResult)>, HarnessError> {
        let mut results = Vec::with_capacity(cases.len());
        for case in cases {
            let result = self.run(case).await?;
            results.push((case.name.clone(), result));
        }
        Ok(results)
    }

    /// Render `code`, wait, then summarize the resulting tree.
    pub async fn summarize(&self, code: &str) -> Result<Summary, HarnessError> {
        let document = self.render_and_wait(code).await?;
        let root = document.root();
        Ok(self.engine.aggregator().summarize(Some(&root)))
    }

    async fn render_and_wait(&self, code: &str) -> Result<R::Document, HarnessError> {
        let document = self
            .renderer
            .render(code)
            .await
            .map_err(HarnessError::from_render)?;
        tracing::debug!(wait_ms = self.render_wait.as_millis() as u64, "waiting for render");
        wait_for_render(self.render_wait).await;
        Ok(document)
    }
}
