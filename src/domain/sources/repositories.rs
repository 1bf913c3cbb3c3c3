use std::rc::Rc;
use std::sync::Arc;

use super::entities::{InvestmentRecord, RenewableRecord, TrafficRecord};

/// Interface every upstream source collaborator exposes to the KPI engine
pub trait SourceStore<R> {
    /// Current record collection. The `Arc` identity changes whenever the
    /// collection is replaced.
    fn records(&self) -> Arc<Vec<R>>;

    fn is_loading(&self) -> bool;

    /// Whether the latest refresh of this source failed
    fn has_error(&self) -> bool {
        false
    }

    fn snapshot(&self) -> SourceSnapshot<R> {
        SourceSnapshot::new(self.records(), self.is_loading()).with_error(self.has_error())
    }
}

impl<R, S: SourceStore<R> + ?Sized> SourceStore<R> for &S {
    fn records(&self) -> Arc<Vec<R>> {
        (**self).records()
    }

    fn is_loading(&self) -> bool {
        (**self).is_loading()
    }

    fn has_error(&self) -> bool {
        (**self).has_error()
    }
}

impl<R, S: SourceStore<R> + ?Sized> SourceStore<R> for Rc<S> {
    fn records(&self) -> Arc<Vec<R>> {
        (**self).records()
    }

    fn is_loading(&self) -> bool {
        (**self).is_loading()
    }

    fn has_error(&self) -> bool {
        (**self).has_error()
    }
}

/// Immutable point-in-time view of one source
#[derive(Debug)]
pub struct SourceSnapshot<R> {
    pub records: Arc<Vec<R>>,
    pub is_loading: bool,
    pub has_error: bool,
}

impl<R> Clone for SourceSnapshot<R> {
    fn clone(&self) -> Self {
        Self { records: Arc::clone(&self.records), is_loading: self.is_loading, has_error: self.has_error }
    }
}

impl<R> SourceSnapshot<R> {
    pub fn new(records: Arc<Vec<R>>, is_loading: bool) -> Self {
        Self { records, is_loading, has_error: false }
    }

    pub fn with_error(mut self, has_error: bool) -> Self {
        self.has_error = has_error;
        self
    }

    /// Identity comparison: same collection allocation and same flags.
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.records, &other.records)
            && self.is_loading == other.is_loading
            && self.has_error == other.has_error
    }
}

/// One consistent read of all dashboard sources
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    pub investment: SourceSnapshot<InvestmentRecord>,
    pub renewable: SourceSnapshot<RenewableRecord>,
    pub traffic: SourceSnapshot<TrafficRecord>,
}

impl DashboardSnapshot {
    /// Logical OR of every source's loading flag
    pub fn is_loading(&self) -> bool {
        self.investment.is_loading || self.renewable.is_loading || self.traffic.is_loading
    }

    /// Any source whose latest refresh failed
    pub fn has_error(&self) -> bool {
        self.investment.has_error || self.renewable.has_error || self.traffic.has_error
    }

    /// Records are only trusted when nothing is loading and nothing failed
    pub fn is_settled(&self) -> bool {
        !self.is_loading() && !self.has_error()
    }

    pub fn same_as(&self, other: &Self) -> bool {
        self.investment.same_as(&other.investment)
            && self.renewable.same_as(&other.renewable)
            && self.traffic.same_as(&other.traffic)
    }
}

/// Produces a [`DashboardSnapshot`] with all sources read together
pub trait SnapshotProvider {
    fn snapshot(&self) -> DashboardSnapshot;
}

/// The three dashboard source stores bundled into one provider
#[derive(Debug, Clone)]
pub struct DashboardSources<I, R, T> {
    pub investment: I,
    pub renewable: R,
    pub traffic: T,
}

impl<I, R, T> DashboardSources<I, R, T> {
    pub fn new(investment: I, renewable: R, traffic: T) -> Self {
        Self { investment, renewable, traffic }
    }
}

impl<I, R, T> SnapshotProvider for DashboardSources<I, R, T>
where
    I: SourceStore<InvestmentRecord>,
    R: SourceStore<RenewableRecord>,
    T: SourceStore<TrafficRecord>,
{
    fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            investment: self.investment.snapshot(),
            renewable: self.renewable.snapshot(),
            traffic: self.traffic.snapshot(),
        }
    }
}
