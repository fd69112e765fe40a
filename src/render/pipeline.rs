use rayon::prelude::*;

use crate::{
    foundation::error::{IconError, IconResult},
    output::plan::OutputPlan,
    output::sink::IconSink,
    render::cpu::IconRenderer,
    render::icon::RenderedIcon,
};

/// How the distinct sizes of a plan are rendered.
#[derive(Clone, Debug, Default)]
pub struct RenderThreading {
    /// Render sizes concurrently on a dedicated rayon pool.
    pub parallel: bool,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerateStats {
    pub sizes_rendered: usize,
    pub icons_written: usize,
}

/// Render every size in `plan` once and hand the result to `sink` for each target of that
/// size. Sink writes always happen in plan order.
#[tracing::instrument(skip_all, fields(res_dir = %plan.res_dir().display(), parallel = threading.parallel))]
pub fn generate_icon_set(
    plan: &OutputPlan,
    renderer: &IconRenderer,
    sink: &mut dyn IconSink,
    threading: &RenderThreading,
) -> IconResult<GenerateStats> {
    let sizes = plan.sizes();
    if sizes.is_empty() {
        return Err(IconError::validation("output plan has no targets"));
    }

    let rendered: Vec<(u32, RenderedIcon)> = if threading.parallel {
        let pool = build_thread_pool(threading.threads)?;
        pool.install(|| {
            sizes
                .par_iter()
                .map(|&size| renderer.render(size).map(|icon| (size, icon)))
                .collect::<IconResult<Vec<_>>>()
        })?
    } else {
        sizes
            .iter()
            .map(|&size| renderer.render(size).map(|icon| (size, icon)))
            .collect::<IconResult<Vec<_>>>()?
    };

    let mut stats = GenerateStats {
        sizes_rendered: rendered.len(),
        icons_written: 0,
    };
    for (size, icon) in &rendered {
        for target in plan.targets_for_size(*size) {
            sink.write_icon(target, icon)?;
            stats.icons_written += 1;
        }
    }
    Ok(stats)
}

fn build_thread_pool(threads: Option<usize>) -> IconResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(IconError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| IconError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
