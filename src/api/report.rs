use std::sync::Arc;

use async_graphql::{Context, Enum, Object, Result, SimpleObject};
use tracing::{info, warn};

use crate::{
    advisor::{template_label, AudienceProfile, ReportRequester, ReportTemplate},
    catalog::{Catalog, Labelled, SocialClass},
    query::{filter, FilterSpec},
    report::{ReportKind, ReportState, ReportTracker},
};

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
enum ReportPhase {
    Idle,
    Pending,
    Succeeded,
    Failed,
}

#[derive(SimpleObject)]
struct ReportStatus {
    kind: ReportKind,
    phase: ReportPhase,
    /// The report text, or the fallback message when the request failed.
    message: Option<String>,
}

impl ReportStatus {
    fn new(kind: ReportKind, state: ReportState) -> Self {
        let (phase, message) = match state {
            ReportState::Idle => (ReportPhase::Idle, None),
            ReportState::Pending => (ReportPhase::Pending, None),
            ReportState::Succeeded(text) => (ReportPhase::Succeeded, Some(text)),
            ReportState::Failed(reason) => (ReportPhase::Failed, Some(reason)),
        };
        Self {
            kind,
            phase,
            message,
        }
    }
}

#[derive(SimpleObject)]
struct ProfileOutcome {
    status: ReportStatus,
    profile: Option<AudienceProfile>,
}

#[derive(SimpleObject)]
struct TemplateItem {
    template: ReportTemplate,
    label: &'static str,
    icon: &'static str,
}

fn non_blank<'a>(value: &'a str, name: &str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(format!("`{name}` must not be blank").into());
    }
    Ok(value)
}

#[derive(Default)]
pub(super) struct ReportQuery;

#[Object]
impl ReportQuery {
    #[allow(clippy::unused_async)]
    async fn report_status(&self, ctx: &Context<'_>, kind: ReportKind) -> Result<ReportStatus> {
        let tracker = ctx.data::<ReportTracker>()?;
        Ok(ReportStatus::new(kind, tracker.state(kind)))
    }

    #[allow(clippy::unused_async)]
    async fn report_templates(&self) -> Vec<TemplateItem> {
        ReportTemplate::ALL
            .iter()
            .map(|&template| TemplateItem {
                template,
                label: template.label(),
                icon: template.icon(),
            })
            .collect()
    }
}

#[derive(Default)]
pub(super) struct ReportMutation;

#[Object]
impl ReportMutation {
    /// Asks the advisor for an executive brief grounded on the segments
    /// matching `filter`.
    async fn request_report(
        &self,
        ctx: &Context<'_>,
        prompt: String,
        template: Option<ReportTemplate>,
        #[graphql(name = "filter", default)] spec: FilterSpec,
    ) -> Result<ReportStatus> {
        let prompt = non_blank(&prompt, "prompt")?;
        let catalog = ctx.data::<Catalog>()?;
        let requester = ctx.data::<Arc<dyn ReportRequester>>()?;
        let tracker = ctx.data::<ReportTracker>()?;

        let context = serde_json::to_value(filter(catalog.segments(), &spec))?;
        let kind = ReportKind::AdvisorBrief;
        let pending = tracker.begin(kind).inspect_err(|e| warn!("{e}"))?;
        let template = template_label(template);
        info!("Requesting {template} report");
        let outcome = requester.request_report(prompt, template, &context).await;
        Ok(ReportStatus::new(kind, pending.finish(outcome)))
    }

    /// Compares WhatsApp Business, TikTok and FB Ads for a niche.
    async fn request_comparison(
        &self,
        ctx: &Context<'_>,
        niche: String,
        target_class: SocialClass,
    ) -> Result<ReportStatus> {
        let niche = non_blank(&niche, "niche")?;
        let requester = ctx.data::<Arc<dyn ReportRequester>>()?;
        let tracker = ctx.data::<ReportTracker>()?;

        let kind = ReportKind::PlatformComparison;
        let pending = tracker.begin(kind).inspect_err(|e| warn!("{e}"))?;
        info!("Requesting platform comparison for {niche}");
        let outcome = requester.request_comparison(niche, target_class).await;
        Ok(ReportStatus::new(kind, pending.finish(outcome)))
    }

    async fn generate_audience_profile(
        &self,
        ctx: &Context<'_>,
        niche: String,
    ) -> Result<ProfileOutcome> {
        let niche = non_blank(&niche, "niche")?;
        let requester = ctx.data::<Arc<dyn ReportRequester>>()?;
        let tracker = ctx.data::<ReportTracker>()?;

        let kind = ReportKind::AudienceProfile;
        let pending = tracker.begin(kind).inspect_err(|e| warn!("{e}"))?;
        info!("Generating audience profile for {niche}");
        let (profile, state) = match requester.generate_audience_profile(niche).await {
            Ok(profile) => {
                let state = pending.finish(serde_json::to_string(&profile));
                (Some(profile), state)
            }
            Err(e) => (None, pending.finish(Err::<String, _>(e))),
        };
        Ok(ProfileOutcome {
            status: ReportStatus::new(kind, state),
            profile,
        })
    }
}
