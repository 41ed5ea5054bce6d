//! run command - Run the pipeline and print every stage

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::config::Config;
use crate::core::integral::Integral;
use crate::core::pipeline::{self, Labels, Report, DEFAULT_INPUT};
use crate::ui::output;

/// Run the pipeline and print the report.
pub fn run(ctx: &Context) -> Result<()> {
    let rendered = render(ctx)?;
    output::print(rendered, ctx.verbosity);
    Ok(())
}

/// Resolve config, run the pipeline, and return the rendered report.
pub fn render(ctx: &Context) -> Result<String> {
    let loaded = Config::load(ctx.config.as_deref()).context("failed to load configuration")?;
    for warning in &loaded.warnings {
        output::warn(
            format!("{} ({})", warning.message, warning.path.display()),
            ctx.verbosity,
        );
    }

    let config = loaded.config;
    if let Some(path) = config.loaded_from() {
        output::debug(format!("config: {}", path.display()), ctx.verbosity);
    }

    let labels = config.labels();
    let rendered = match config.numbers() {
        Some(numbers) => execute(numbers, &labels, ctx),
        None => execute(&DEFAULT_INPUT, &labels, ctx),
    };
    Ok(rendered)
}

fn execute<T: Integral>(numbers: &[T], labels: &Labels, ctx: &Context) -> String {
    let report = pipeline::run(numbers);
    trace(&report, ctx);
    report.render(labels)
}

fn trace<T: Integral>(report: &Report<T>, ctx: &Context) {
    output::debug(
        format!("input: {} element(s) {:?}", report.original.len(), report.original),
        ctx.verbosity,
    );
    output::debug(
        format!("filter_even: kept {} element(s) {:?}", report.evens.len(), report.evens),
        ctx.verbosity,
    );
    output::debug(format!("square: {:?}", report.squared), ctx.verbosity);
    output::debug(format!("sum: {}", report.total), ctx.verbosity);
}
