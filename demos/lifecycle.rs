//! Experiment Lifecycle Example
//!
//! Walks the full lifecycle: authenticate, create experiments, submit
//! observed results, inspect aggregate metrics, delete.
//!
//! Run with: cargo run --example lifecycle

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use veredicto::identity::{IdentityProvider, RequestContext, TokenIdentityProvider, UserId};
use veredicto::service::{CreateExperiment, ExperimentService};
use veredicto::store::MemoryExperimentStore;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Veredicto Experiment Lifecycle ===\n");

    // -------------------------------------------------------------------------
    // 1. Authenticate the caller
    // -------------------------------------------------------------------------
    println!("1. Authenticating...");

    let identity = TokenIdentityProvider::new();
    identity.register("demo-token", UserId::new("demo-user"));

    let owner = identity.authenticate(&RequestContext::with_token("demo-token"))?;
    println!("   Caller: {owner}");

    // -------------------------------------------------------------------------
    // 2. Create experiments
    // -------------------------------------------------------------------------
    println!("\n2. Creating experiments...");

    let service = ExperimentService::new(MemoryExperimentStore::new());

    let landing = service
        .create(
            &owner,
            CreateExperiment {
                title: "Landing page rewrite".into(),
                hypothesis: "A shorter page converts better".into(),
                metric_name: "Signups".into(),
                target_value: 100.0,
            },
        )
        .await?;
    println!("   Created {} ({})", landing.id(), landing.title());

    let pricing = service
        .create(
            &owner,
            CreateExperiment {
                title: "Annual pricing tier".into(),
                hypothesis: "A discount lifts annual conversions".into(),
                metric_name: "Annual plans sold".into(),
                target_value: 50.0,
            },
        )
        .await?;
    println!("   Created {} ({})", pricing.id(), pricing.title());

    // -------------------------------------------------------------------------
    // 3. Submit observed results
    // -------------------------------------------------------------------------
    println!("\n3. Submitting results...");

    let landing = service.submit_result(&owner, landing.id(), 150.0).await?;
    println!(
        "   {}: observed {:.0} vs target {:.0} -> {}",
        landing.title(),
        landing.observed_value().unwrap_or_default(),
        landing.target_value(),
        landing.status()
    );

    let pricing = service.submit_result(&owner, pricing.id(), 31.0).await?;
    println!(
        "   {}: observed {:.0} vs target {:.0} -> {}",
        pricing.title(),
        pricing.observed_value().unwrap_or_default(),
        pricing.target_value(),
        pricing.status()
    );

    // -------------------------------------------------------------------------
    // 4. List with aggregate metrics
    // -------------------------------------------------------------------------
    println!("\n4. Listing with metrics...");

    let listing = service.list_with_metrics(&owner).await;
    for experiment in &listing.experiments {
        println!("   {} [{}]", experiment.title(), experiment.status());
    }
    if let Some(metrics) = listing.metrics {
        println!(
            "   Aggregate: total={} shipped={} ({}%) killed={} ({}%) active={}",
            metrics.total,
            metrics.shipped,
            metrics.shipped_percentage,
            metrics.killed,
            metrics.killed_percentage,
            metrics.active
        );
    }

    // -------------------------------------------------------------------------
    // 5. Delete
    // -------------------------------------------------------------------------
    println!("\n5. Deleting killed experiment...");

    service.delete(&owner, pricing.id()).await?;
    let listing = service.list_with_metrics(&owner).await;
    println!("   {} experiment(s) remain", listing.experiments.len());

    println!("\n=== Done ===");
    Ok(())
}
