//! Answers counter state.
//!
//! The counter shows how many edits the user made. With autosync on, edits
//! that are not uploaded yet but will count towards the statistics are
//! included, so the number goes up the moment a quest is solved.

use super::Autosync;

/// Number of edits already counted by the statistics.
pub trait StatisticsSource {
    fn edit_count(&self) -> i32;
}

/// Local changes that are not uploaded yet.
pub trait UnsyncedChangesSource {
    /// Number of unsynced changes that will be part of the statistics once
    /// uploaded (notes and the like excluded).
    fn solved_count(&self) -> i32;
}

/// Something that can be running in the background, like an upload.
pub trait ProgressSource {
    fn is_in_progress(&self) -> bool;
}

/// A change of the displayed count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountUpdate {
    pub count: i32,
    /// Whether the change should be animated
    pub animated: bool,
}

/// Aggregates several sources into the count shown on the badge.
#[derive(Debug, Clone, Default)]
pub struct AnswersCounter {
    autosync: Autosync,
    uploaded_count: i32,
    show_progress: bool,
    last_update: Option<CountUpdate>,
}

impl AnswersCounter {
    pub fn new(autosync: Autosync) -> Self {
        Self {
            autosync,
            ..Default::default()
        }
    }

    pub fn autosync(&self) -> Autosync {
        self.autosync
    }

    /// Whether the unsynced changes count is part of the shown count, and thus
    /// whether unsynced change events need to be listened to at all.
    pub fn counts_unsynced(&self) -> bool {
        self.autosync == Autosync::On
    }

    pub fn uploaded_count(&self) -> i32 {
        self.uploaded_count
    }

    pub fn show_progress(&self) -> bool {
        self.show_progress
    }

    /// The most recent change of the count, if any.
    pub fn last_update(&self) -> Option<CountUpdate> {
        self.last_update
    }

    /// Shows progress while an upload or a download is running.
    pub fn update_progress(&mut self, upload: &dyn ProgressSource, download: &dyn ProgressSource) {
        self.show_progress = upload.is_in_progress() || download.is_in_progress();
    }

    /// Recounts from the sources.
    pub fn update_count(
        &mut self,
        statistics: &dyn StatisticsSource,
        unsynced: &dyn UnsyncedChangesSource,
        animated: bool,
    ) {
        let unsynced_count = if self.counts_unsynced() {
            unsynced.solved_count()
        } else {
            0
        };
        self.set_uploaded_count(statistics.edit_count() + unsynced_count, animated);
    }

    /// Changes the count relative to the current one.
    pub fn add_count(&mut self, diff: i32, animated: bool) {
        self.set_uploaded_count(self.uploaded_count + diff, animated);
    }

    /// An edit was added to the statistics.
    pub fn on_added_one(&mut self) {
        self.add_count(1, true);
    }

    /// An edit was removed from the statistics, e.g. by undo.
    pub fn on_subtracted_one(&mut self) {
        self.add_count(-1, true);
    }

    /// The statistics were replaced as a whole, e.g. after a sync.
    pub fn on_updated_all(
        &mut self,
        statistics: &dyn StatisticsSource,
        unsynced: &dyn UnsyncedChangesSource,
    ) {
        self.update_count(statistics, unsynced, false);
    }

    /// The statistics were cleared, e.g. on logout.
    pub fn on_cleared(
        &mut self,
        statistics: &dyn StatisticsSource,
        unsynced: &dyn UnsyncedChangesSource,
    ) {
        self.update_count(statistics, unsynced, false);
    }

    /// The number of unsynced changes went up or down.
    ///
    /// Ignored unless autosync is on.
    pub fn on_unsynced_changed(
        &mut self,
        statistics: &dyn StatisticsSource,
        unsynced: &dyn UnsyncedChangesSource,
    ) {
        if self.counts_unsynced() {
            self.update_count(statistics, unsynced, true);
        }
    }

    fn set_uploaded_count(&mut self, count: i32, animated: bool) {
        self.uploaded_count = count;
        self.last_update = Some(CountUpdate { count, animated });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stats(i32);
    impl StatisticsSource for Stats {
        fn edit_count(&self) -> i32 {
            self.0
        }
    }

    struct Unsynced(i32);
    impl UnsyncedChangesSource for Unsynced {
        fn solved_count(&self) -> i32 {
            self.0
        }
    }

    struct Progress(bool);
    impl ProgressSource for Progress {
        fn is_in_progress(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_count_includes_unsynced_with_autosync() {
        let mut counter = AnswersCounter::new(Autosync::On);
        counter.update_count(&Stats(100), &Unsynced(5), false);
        assert_eq!(counter.uploaded_count(), 105);
        assert_eq!(
            counter.last_update(),
            Some(CountUpdate {
                count: 105,
                animated: false
            })
        );
    }

    #[test]
    fn test_count_excludes_unsynced_without_autosync() {
        for autosync in [Autosync::Wifi, Autosync::Off] {
            let mut counter = AnswersCounter::new(autosync);
            counter.update_count(&Stats(100), &Unsynced(5), false);
            assert_eq!(counter.uploaded_count(), 100);
            assert!(!counter.counts_unsynced());
        }
    }

    #[test]
    fn test_added_and_subtracted_are_animated() {
        let mut counter = AnswersCounter::new(Autosync::Off);
        counter.update_count(&Stats(10), &Unsynced(0), false);
        counter.on_added_one();
        counter.on_added_one();
        counter.on_subtracted_one();
        assert_eq!(counter.uploaded_count(), 11);
        assert_eq!(counter.last_update().map(|u| u.animated), Some(true));
    }

    #[test]
    fn test_unsynced_changes_only_count_with_autosync() {
        let mut counter = AnswersCounter::new(Autosync::Off);
        counter.on_unsynced_changed(&Stats(10), &Unsynced(3));
        assert_eq!(counter.last_update(), None);

        let mut counter = AnswersCounter::new(Autosync::On);
        counter.on_unsynced_changed(&Stats(10), &Unsynced(3));
        assert_eq!(
            counter.last_update(),
            Some(CountUpdate {
                count: 13,
                animated: true
            })
        );

        counter.on_cleared(&Stats(0), &Unsynced(0));
        assert_eq!(
            counter.last_update(),
            Some(CountUpdate {
                count: 0,
                animated: false
            })
        );
    }

    #[test]
    fn test_progress() {
        let mut counter = AnswersCounter::default();
        counter.update_progress(&Progress(false), &Progress(false));
        assert!(!counter.show_progress());
        counter.update_progress(&Progress(false), &Progress(true));
        assert!(counter.show_progress());
        counter.update_progress(&Progress(true), &Progress(false));
        assert!(counter.show_progress());
    }
}
