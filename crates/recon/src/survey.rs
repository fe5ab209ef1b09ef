use crate::model::SurveyRecord;

/// Survey records addressed by slot.
///
/// A slot is the record's position in the survey sequence and doubles as a
/// lookup key: OR numbers are usually allocated in survey row order, so the
/// numeric id is the first guess for where its record lives. Empty slots are
/// valid and read as "no record here".
#[derive(Debug, Clone, Default)]
pub struct SurveyStore {
    slots: Vec<Option<SurveyRecord>>,
}

impl SurveyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from explicit slots, holes included.
    pub fn from_slots(slots: Vec<Option<SurveyRecord>>) -> Self {
        Self { slots }
    }

    pub fn push(&mut self, record: SurveyRecord) {
        self.slots.push(Some(record));
    }

    /// Record at `slot`, or `None` for holes and out-of-range slots.
    pub fn get(&self, slot: u64) -> Option<&SurveyRecord> {
        let idx = usize::try_from(slot).ok()?;
        self.slots.get(idx).and_then(Option::as_ref)
    }

    /// Present records in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &SurveyRecord> {
        self.slots.iter().flatten()
    }

    /// Number of slots, holes included.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn record_count(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }
}

impl From<Vec<SurveyRecord>> for SurveyStore {
    fn from(records: Vec<SurveyRecord>) -> Self {
        Self {
            slots: records.into_iter().map(Some).collect(),
        }
    }
}

impl FromIterator<SurveyRecord> for SurveyStore {
    fn from_iter<I: IntoIterator<Item = SurveyRecord>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().map(Some).collect(),
        }
    }
}
