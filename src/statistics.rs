use crate::output::record::Record;

/// Operation counters of one spanning tree run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Statistics {
    inserted: u32,
    decreased: u32,
    removed: u32,
    accepted: u32,
    rejected: u32,
}

impl Statistics {
    pub(crate) fn record<R: Record>(&self, record: &mut R) {
        record.statistic("heap insertions", self.inserted);
        record.statistic("decreased keys", self.decreased);
        record.statistic("heap removals", self.removed);
        record.statistic("accepted edges", self.accepted);
        record.statistic("rejected edges", self.rejected);
    }

    pub(crate) fn removed(&self) -> u32 {
        self.removed
    }

    pub(crate) fn accepted(&self) -> u32 {
        self.accepted
    }

    pub(crate) fn rejected(&self) -> u32 {
        self.rejected
    }

    pub(crate) fn increment_inserted(&mut self) {
        self.inserted += 1;
    }

    pub(crate) fn add_inserted(&mut self, inserted: usize) {
        self.inserted += inserted as u32;
    }

    pub(crate) fn increment_decreased(&mut self) {
        self.decreased += 1;
    }

    pub(crate) fn increment_removed(&mut self) {
        self.removed += 1;
    }

    pub(crate) fn increment_accepted(&mut self) {
        self.accepted += 1;
    }

    pub(crate) fn increment_rejected(&mut self) {
        self.rejected += 1;
    }
}
