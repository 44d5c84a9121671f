use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use timeline_cli::request::{FilterRequest, resolve_request};
use timeline_core::{DEFAULT_LANG, TimelineView, build_view, collect_tags, normalize};
use timeline_ingest::{embedded_sample, load_group_table, load_investors};
use timeline_model::{GroupTable, InvestorRecord, YearRange};

use crate::cli::{GroupsArgs, RenderArgs, TagsArgs};
use crate::summary::apply_table_style;

pub fn run_render(args: &RenderArgs) -> Result<TimelineView> {
    let span = info_span!("render", data = ?args.data);
    let _guard = span.enter();

    let records = load_dataset(args.data.as_deref())?;
    let table = load_groups(args.groups_file.as_deref())?;
    let request = FilterRequest {
        lang: args.lang.clone(),
        tags: args.tags.clone(),
        groups: args.groups.clone(),
        search: args.search.clone(),
        min: args.min,
        max: args.max,
        sort: args.sort.map(Into::into),
        query: args.query.clone(),
    };
    let locale = system_locale();
    let resolved = resolve_request(
        &request,
        YearRange::default_global(),
        &table,
        locale.as_deref(),
    );
    info!(lang = %resolved.lang, "rendering");
    Ok(build_view(&records, &resolved.lang, &resolved.state, &table))
}

pub fn run_tags(args: &TagsArgs) -> Result<()> {
    let span = info_span!("tags", data = ?args.data);
    let _guard = span.enter();

    let records = normalize(&load_dataset(args.data.as_deref())?, DEFAULT_LANG);
    let mut table = Table::new();
    table.set_header(vec!["Tag", "Investors"]);
    apply_table_style(&mut table);
    for tag in collect_tags(&records) {
        let count = records.iter().filter(|record| record.has_tag(&tag)).count();
        table.add_row(vec![tag, count.to_string()]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_groups(args: &GroupsArgs) -> Result<()> {
    let span = info_span!("groups", groups_file = ?args.groups_file);
    let _guard = span.enter();

    let groups = load_groups(args.groups_file.as_deref())?;
    let mut table = Table::new();
    table.set_header(vec!["Group", "Tags"]);
    apply_table_style(&mut table);
    for (key, tags) in groups.iter() {
        let tags = if tags.is_empty() {
            "(clears all filters)".to_string()
        } else {
            tags.join(", ")
        };
        table.add_row(vec![key.to_string(), tags]);
    }
    println!("{table}");
    Ok(())
}

fn load_dataset(path: Option<&Path>) -> Result<Vec<InvestorRecord>> {
    match path {
        Some(path) => load_investors(path)
            .with_context(|| format!("load investors from {}", path.display())),
        None => {
            info!("no data file given; using the built-in sample");
            embedded_sample().context("load built-in sample")
        }
    }
}

fn load_groups(path: Option<&Path>) -> Result<GroupTable> {
    match path {
        Some(path) => {
            load_group_table(path).with_context(|| format!("load groups from {}", path.display()))
        }
        None => Ok(GroupTable::default()),
    }
}

/// The first non-empty of `LC_ALL`, `LC_MESSAGES` and `LANG`.
fn system_locale() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .into_iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.is_empty())
}
