// SPDX-License-Identifier: GPL-3.0-or-later
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use brainz_config::{load as load_config, AppConfig};
use brainz_lucene::{Expression, Field, OperatorStyle, Query, Render, Term};
use brainz_search::{Entity, SearchRequest};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build a MusicBrainz search query and print it.
#[derive(Debug, Parser)]
#[command(name = "brainz-query", version)]
struct Cli {
    /// Entity to search: artist, release, release-group or recording.
    entity: Entity,

    /// Field clause as NAME=VALUE. Use an empty NAME for the default field.
    #[arg(short, long = "field", value_name = "NAME=VALUE", required = true)]
    fields: Vec<String>,

    /// Match any of the fields instead of leaving the combination to the server.
    #[arg(long)]
    any: bool,

    /// Mark the clause for NAME as required.
    #[arg(long, value_name = "NAME")]
    require: Vec<String>,

    /// Mark the clause for NAME as prohibited.
    #[arg(long, value_name = "NAME")]
    exclude: Vec<String>,

    /// Pass values through without escaping, so wildcards keep working.
    #[arg(long)]
    verbatim: bool,

    /// Operator style, escaped or bare. Overrides the configured style.
    #[arg(long, value_name = "STYLE", conflicts_with = "bare")]
    style: Option<OperatorStyle>,

    /// Shorthand for `--style bare`.
    #[arg(long)]
    bare: bool,

    /// Print the full request URL instead of the query string.
    #[arg(long)]
    url: bool,

    #[arg(long)]
    limit: Option<u32>,

    #[arg(long)]
    offset: Option<u32>,

    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    init_tracing(&config);

    let query = build_query(&cli)?;
    let style = operator_style(&cli, &config);
    info!(target: "cli", entity = %cli.entity, clauses = query.len(), "query built");

    if cli.url {
        let request = build_request(&cli, &config, &query, style)?;
        let url = request.to_url(&config.musicbrainz.base_url)?;
        println!("{}", url);
    } else {
        println!("{}", query.render(style));
    }

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr);
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.telemetry.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn operator_style(cli: &Cli, config: &AppConfig) -> OperatorStyle {
    if cli.bare {
        return OperatorStyle::Bare;
    }
    cli.style.unwrap_or(config.query.operator_style)
}

fn parse_field(entity: Entity, raw: &str, verbatim: bool) -> Result<Field> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("expected NAME=VALUE, got {:?}", raw))?;
    let name = entity.resolve_field(name)?;
    let term = if verbatim {
        Term::verbatim(value)
    } else {
        Term::new(value)
    };
    debug!(target: "cli", field = name, term = %term, "parsed field");
    Ok(Field::new(name, term))
}

fn build_query(cli: &Cli) -> Result<Query> {
    let fields = cli
        .fields
        .iter()
        .map(|raw| parse_field(cli.entity, raw, cli.verbatim))
        .collect::<Result<Vec<_>>>()?;

    let mut clauses: Vec<Expression> = fields.into_iter().map(Expression::from).collect();
    mark(cli.entity, &mut clauses, &cli.require, Expression::require)?;
    mark(cli.entity, &mut clauses, &cli.exclude, Expression::prohibit)?;

    if cli.any && clauses.len() > 1 {
        return Ok(Query::with_clause(Expression::any_of(clauses)?));
    }
    Ok(clauses.into_iter().collect())
}

/// Wraps every clause whose field is named in `names`.
fn mark(
    entity: Entity,
    clauses: &mut [Expression],
    names: &[String],
    wrap: fn(Expression) -> Expression,
) -> Result<()> {
    for name in names {
        let name = entity.resolve_field(name)?;
        let mut found = false;
        for clause in clauses.iter_mut() {
            if clause.as_field().is_some_and(|field| field.name() == name) {
                *clause = wrap(clause.clone());
                found = true;
            }
        }
        if !found {
            return Err(anyhow!("no --field given for {:?}", name));
        }
    }
    Ok(())
}

fn build_request(
    cli: &Cli,
    config: &AppConfig,
    query: &Query,
    style: OperatorStyle,
) -> Result<SearchRequest> {
    let mut request = SearchRequest::new(cli.entity, query.render(style));
    if let Some(limit) = cli.limit.or(config.musicbrainz.default_limit) {
        request = request.limit(limit).context("invalid --limit")?;
    }
    if let Some(offset) = cli.offset {
        request = request.offset(offset);
    }
    Ok(request)
}
