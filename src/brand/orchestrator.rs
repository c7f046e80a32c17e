//! Brand plan orchestration
//!
//! One structured-generation call produces the plan; the plan's prompts fan
//! out to concurrent image-generation calls; the join is fail-fast. A single
//! failing image fails the whole operation - there is no partial bible.

use std::sync::Arc;
use std::time::Duration;

use futures::future::try_join_all;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info};

use crate::brand::progress::spawn_ticker;
use crate::brand::schema::{brand_identity_schema, parse_plan, plan_prompt};
use crate::brand::types::{BrandBible, Mission};
use crate::error::Result;
use crate::gemini::GenerativeService;

const DEFAULT_PROGRESS_INTERVAL: Duration = Duration::from_secs(2);

/// Turns a mission statement into a complete brand bible.
pub struct BrandPlanOrchestrator {
    service: Arc<dyn GenerativeService>,
    progress: Option<UnboundedSender<&'static str>>,
    progress_interval: Duration,
}

impl BrandPlanOrchestrator {
    pub fn new(service: Arc<dyn GenerativeService>) -> Self {
        Self {
            service,
            progress: None,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    /// Stream rotating status phrases to `tx` while a generation is in
    /// flight. Rotation stops the moment the operation settles.
    pub fn with_progress(mut self, tx: UnboundedSender<&'static str>) -> Self {
        self.progress = Some(tx);
        self
    }

    pub fn with_progress_interval(mut self, interval: Duration) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Generate a complete brand bible for `mission`.
    ///
    /// Blank missions are rejected before any request is issued. Plan
    /// generation strictly precedes image generation; the primary logo and
    /// both secondary marks are generated concurrently and joined
    /// all-or-nothing.
    pub async fn generate_brand_bible(&self, mission: &str) -> Result<BrandBible> {
        let mission = Mission::new(mission)?;

        // Guard drops on every exit path, taking the ticker with it.
        let _ticker = self
            .progress
            .as_ref()
            .map(|tx| spawn_ticker(self.progress_interval, tx.clone()));

        info!("generating brand identity plan");
        let raw = self
            .service
            .generate_structured(&plan_prompt(mission.as_str()), &brand_identity_schema())
            .await?;
        let plan = parse_plan(&raw)?;
        debug!(
            marks = plan.secondary_mark_prompts.len(),
            colors = plan.color_palette.len(),
            "plan parsed"
        );

        info!(
            images = 1 + plan.secondary_mark_prompts.len(),
            "generating brand assets"
        );
        let primary = self.service.generate_image(&plan.logo_prompt);
        let secondaries = try_join_all(
            plan.secondary_mark_prompts
                .iter()
                .map(|prompt| self.service.generate_image(prompt)),
        );
        let (primary, secondaries) = tokio::try_join!(primary, secondaries)?;

        Ok(BrandBible {
            mission: mission.as_str().to_string(),
            primary_logo_url: primary.to_data_uri(),
            secondary_mark_urls: secondaries.iter().map(|img| img.to_data_uri()).collect(),
            color_palette: plan.color_palette,
            font_pairing: plan.font_pairing,
        })
    }
}
