use crate::config::Config;
use crate::descriptor::{update_field, CHART_APP_VERSION, VALUES_IMAGE_TAG};
use crate::error::UpdateError;
use crate::registry::TagSource;
use crate::types::{FieldChange, Selection, UpdateSummary};
use crate::version::select_latest;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use chrono_humanize::HumanTime;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub struct VersionUpdater<S> {
    config: Config,
    source: S,
}

impl<S: TagSource> VersionUpdater<S> {
    pub fn new(config: Config, source: S) -> Self {
        Self { config, source }
    }

    /// Fetch, select, then rewrite both descriptors.
    ///
    /// Descriptor existence is only checked once a tag has been selected, and
    /// neither file is touched unless both exist.
    pub async fn run(&self) -> Result<UpdateSummary> {
        println!("Fetching tags from Docker Hub...");
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        spinner.set_message(format!(
            "{}/{}",
            self.config.namespace, self.config.repository
        ));
        spinner.enable_steady_tick(Duration::from_millis(100));
        let tags = self.source.fetch_tags().await;
        spinner.finish_and_clear();

        let tags = tags.context("Failed to list registry tags")?;
        let selection = select_latest(&tags)?;

        for line in selection_lines(&self.config.repository, &selection) {
            println!("{line}");
        }

        for path in [&self.config.chart_path, &self.config.values_path] {
            if !path.exists() {
                return Err(UpdateError::MissingDescriptor(path.clone()).into());
            }
        }

        let chart = update_field(
            &self.config.chart_path,
            CHART_APP_VERSION,
            &selection.base_version,
        )?;
        report(&chart);

        let values = update_field(
            &self.config.values_path,
            VALUES_IMAGE_TAG,
            &selection.full_tag,
        )?;
        report(&values);

        let summary = UpdateSummary {
            selection,
            chart,
            values,
        };
        if summary.has_changes() {
            println!("Version files updated.");
        } else {
            println!("No changes detected.");
        }

        Ok(summary)
    }
}

fn report(change: &FieldChange) {
    let file = change
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| change.file.display().to_string());
    println!(
        "{}: {} {} -> {}",
        file,
        change.field,
        change.old_display(),
        change.new_display()
    );
}

/// Progress lines announcing the selected tag; the push time gets its own line.
pub fn selection_lines(repository: &str, selection: &Selection) -> [String; 3] {
    [
        format!("Latest {} version (base): {}", repository, selection.base_version),
        format!("Latest Docker tag: {}", selection.full_tag),
        format!("Tag pushed {}", pushed_display(selection.last_updated)),
    ]
}

fn pushed_display(pushed: DateTime<Utc>) -> String {
    if pushed == DateTime::<Utc>::UNIX_EPOCH {
        return "at an unknown time".to_string();
    }
    let duration = pushed.signed_duration_since(Utc::now());
    HumanTime::from(duration).to_string()
}

