//! JSON step catalog loader
//!
//! Loads a role→steps document into a [`StaticStepCatalog`], letting
//! deployments replace the built-in step content without code changes.
//!
//! Expected shape:
//!
//! ```json
//! {
//!   "customer": [ { "id": "...", "target_id": "...", "title": "...", "body": "...", "route": "..." } ],
//!   "mechanic": [ ... ]
//! }
//! ```

use std::path::Path;

use anyhow::Context;
use tokio::fs;
use wt_core::walkthrough::StaticStepCatalog;
use wt_core::WalkthroughStep;

#[derive(Debug, serde::Deserialize)]
struct CatalogFile {
    #[serde(default)]
    customer: Vec<WalkthroughStep>,
    #[serde(default)]
    mechanic: Vec<WalkthroughStep>,
}

pub struct JsonFileStepCatalog;

impl JsonFileStepCatalog {
    /// Read and parse a catalog file.
    pub async fn load(path: impl AsRef<Path>) -> anyhow::Result<StaticStepCatalog> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read step catalog {}", path.display()))?;

        let file: CatalogFile = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse step catalog {}", path.display()))?;

        Ok(StaticStepCatalog::new(file.customer, file.mechanic))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use wt_core::ports::StepCatalogPort;
    use wt_core::UserRole;

    #[tokio::test]
    async fn loads_steps_for_both_roles() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"{
                "customer": [
                    {
                        "id": "customer-step-1",
                        "target_id": "customer-post-job-cta",
                        "title": "Request a Mechanic",
                        "body": "Describe the issue.",
                        "route": "/(customer)/(tabs)"
                    }
                ],
                "mechanic": [
                    {
                        "id": "mechanic-step-1",
                        "target_id": "mechanic-leads-list",
                        "title": "Browse Leads",
                        "body": "Find nearby jobs."
                    }
                ]
            }"#,
        )
        .await
        .unwrap();

        let catalog = JsonFileStepCatalog::load(&path).await.unwrap();

        assert_eq!(catalog.step_count(UserRole::Customer), 1);
        let step = &catalog.steps(UserRole::Mechanic)[0];
        assert_eq!(step.id, "mechanic-step-1");
        assert_eq!(step.route, None);
    }

    #[tokio::test]
    async fn missing_role_defaults_to_empty_tour() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.json");
        fs::write(&path, r#"{ "customer": [] }"#).await.unwrap();

        let catalog = JsonFileStepCatalog::load(&path).await.unwrap();

        assert_eq!(catalog.step_count(UserRole::Customer), 0);
        assert_eq!(catalog.step_count(UserRole::Mechanic), 0);
    }

    #[tokio::test]
    async fn invalid_json_returns_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.json");
        fs::write(&path, "{not json").await.unwrap();

        let result = JsonFileStepCatalog::load(&path).await;

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("failed to parse step catalog"));
    }

    #[tokio::test]
    async fn missing_file_returns_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = JsonFileStepCatalog::load(temp_dir.path().join("nope.json")).await;
        assert!(result.is_err());
    }
}
