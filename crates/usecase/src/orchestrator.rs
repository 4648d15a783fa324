use log::{info, warn};
use mc_multiplicity_domain::MultiplicityFilter;
use mc_multiplicity_ports::EventSource;
use mc_multiplicity_shared_kernel::{ErrorContext, EventId, InfrastructureError, Result};

use crate::dto::{EventDecision, EventFailure, SelectionOutput};

type Outcome = std::result::Result<EventDecision, (EventId, InfrastructureError)>;

/// Evaluate a multiplicity filter over every event of a source.
///
/// Events are independent, so with the `parallel` feature they are spread
/// over a rayon pool. Results always come back in source order.
pub struct SelectEvents<'a> {
    source: &'a dyn EventSource,
    filter: &'a MultiplicityFilter,
    label: &'a str,
    strict: bool,
    jobs: Option<usize>,
}

impl<'a> SelectEvents<'a> {
    pub fn new(source: &'a dyn EventSource, filter: &'a MultiplicityFilter, label: &'a str) -> Self {
        Self { source, filter, label, strict: false, jobs: None }
    }

    /// Abort on the first event whose input is unavailable instead of recording it.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Worker threads; `None` uses the global rayon pool.
    #[must_use]
    pub fn jobs(mut self, jobs: Option<usize>) -> Self {
        self.jobs = jobs;
        self
    }

    /// # Errors
    ///
    /// In strict mode, the first unavailable input (in source order) aborts
    /// the run. Thread pool creation failures are always fatal.
    pub fn run(&self) -> Result<SelectionOutput> {
        let ids = self.source.event_ids();
        let outcomes = self.evaluate_all(&ids)?;
        self.collect(outcomes)
    }

    fn select_one(&self, event: EventId) -> Outcome {
        let particles = self.source.particles(event, self.label).map_err(|e| (event, e))?;
        let match_count = self.filter.match_count(&particles);
        Ok(EventDecision {
            event,
            match_count,
            accepted: self.filter.decide(match_count),
        })
    }

    #[cfg(feature = "parallel")]
    fn evaluate_all(&self, ids: &[EventId]) -> Result<Vec<Outcome>> {
        use mc_multiplicity_shared_kernel::ApplicationError;
        use rayon::prelude::*;

        let work = || -> Vec<Outcome> { ids.par_iter().map(|&id| self.select_one(id)).collect() };

        match self.jobs {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| ApplicationError::ThreadPoolCreation { details: e.to_string() })?;
                Ok(pool.install(work))
            }
            None => Ok(work()),
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn evaluate_all(&self, ids: &[EventId]) -> Result<Vec<Outcome>> {
        Ok(ids.iter().map(|&id| self.select_one(id)).collect())
    }

    fn collect(&self, outcomes: Vec<Outcome>) -> Result<SelectionOutput> {
        let mut output = SelectionOutput::default();
        for outcome in outcomes {
            match outcome {
                Ok(decision) => output.decisions.push(decision),
                Err((event, err)) if self.strict => {
                    return Err::<SelectionOutput, _>(err)
                        .with_context(|| format!("selection aborted at event {event}"));
                }
                Err((event, err)) => {
                    warn!("skipping event {event}: {err}");
                    output.failures.push(EventFailure::new(event, &err));
                }
            }
        }

        let summary = output.summary();
        info!(
            "selected {} of {} events ({} rejected, {} failed)",
            summary.accepted, summary.total, summary.rejected, summary.failed
        );
        Ok(output)
    }
}
