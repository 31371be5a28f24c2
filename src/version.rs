use crate::error::UpdateError;
use crate::types::{Candidate, ParsedVersion, Selection, TagRecord, VersionNumber};
use tracing::debug;

/// Parse a `MAJOR-MINOR-PATCH[-BUILD]` tag such as `2024-1-5` or `2024-1-5-3`.
///
/// Groups may have any number of digits. Returns `None` for anything else
/// (`latest`, `v1-2-3`, `1-2`, ...); those are not version tags and callers
/// skip them.
pub fn parse_tag(tag: &str) -> Option<ParsedVersion> {
    let parts: Vec<&str> = tag.split('-').collect();
    if !(3..=4).contains(&parts.len()) {
        return None;
    }

    let mut numbers = parts
        .iter()
        .map(|part| VersionNumber::parse(part))
        .collect::<Option<Vec<_>>>()?
        .into_iter();

    Some(ParsedVersion {
        major: numbers.next()?,
        minor: numbers.next()?,
        patch: numbers.next()?,
        build: numbers.next().unwrap_or_else(VersionNumber::zero),
        base: parts[..3].join("-"),
        full_tag: tag.to_string(),
    })
}

/// Pick the tag to deploy: newest push time first, highest version among ties.
pub fn select_latest(tags: &[TagRecord]) -> Result<Selection, UpdateError> {
    let candidates: Vec<Candidate> = tags
        .iter()
        .filter_map(|record| match parse_tag(&record.name) {
            Some(version) => Some(Candidate {
                version,
                last_updated: record.last_updated,
            }),
            None => {
                debug!(tag = %record.name, "skipping non-version tag");
                None
            }
        })
        .collect();

    let newest = candidates
        .iter()
        .map(|c| c.last_updated)
        .max()
        .ok_or(UpdateError::NoParsableTags { listed: tags.len() })?;

    let winner = candidates
        .into_iter()
        .filter(|c| c.last_updated == newest)
        .max_by(|a, b| a.version.cmp(&b.version))
        .ok_or(UpdateError::NoParsableTags { listed: tags.len() })?;

    debug!(tag = %winner.version.full_tag, pushed = %winner.last_updated, "selected tag");
    Ok(Selection {
        base_version: winner.version.base,
        full_tag: winner.version.full_tag,
        last_updated: winner.last_updated,
    })
}
