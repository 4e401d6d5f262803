use crate::config::SpinConfig;
use crate::constants::{DEFAULT_OPTIONS, MIN_OPTIONS_TO_SPIN, NO_RESULT, SPINNING_RESULT};
use crate::error::SpinError;
use crate::ledger::StatsLedger;
use crate::options::OptionList;
use crate::presets::find_preset;
use crate::random::UniformSource;
use crate::resolver::resolve;
use crate::spin::{SpinAnimator, SpinFrame, SpinSession};
use crate::storage::{self, KeyValueStore, SavedLists, Theme};
use crate::views::{odds_view, results_view, OddsRow, ResultRow};

/// Result of a finished spin. `winner` is `None` only if the list was
/// emptied while the wheel was turning.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinOutcome {
    pub index: Option<usize>,
    pub winner: Option<String>,
    pub angle: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    Idle,
    Frame { angle: f64 },
    Completed(SpinOutcome),
}

/// Everything behind the wheel page: options, rotation, tally and the
/// commands the page exposes. Every mutation is persisted through `store`.
pub struct WheelSession<S: KeyValueStore> {
    store: S,
    options: OptionList,
    ledger: StatsLedger,
    animator: SpinAnimator,
    saved_lists: SavedLists,
    result_text: String,
    theme: Theme,
}

impl<S: KeyValueStore> WheelSession<S> {
    /// Restores persisted state, falling back to the default list and an empty tally.
    pub fn load(store: S, config: SpinConfig) -> Self {
        let options = storage::load_items(&store)
            .unwrap_or_else(|| OptionList::from_labels(DEFAULT_OPTIONS));
        let mut ledger = storage::load_stats(&store).unwrap_or_default();
        ledger.reconcile(options.labels());
        let saved_lists = storage::load_saved_lists(&store);
        let theme = storage::load_theme(&store);

        log::debug!(
            "Session loaded with {} options and {} recorded spins",
            options.len(),
            ledger.total
        );

        Self {
            store,
            options,
            ledger,
            animator: SpinAnimator::new(config),
            saved_lists,
            result_text: NO_RESULT.to_string(),
            theme,
        }
    }

    pub fn options(&self) -> &OptionList {
        &self.options
    }

    pub fn ledger(&self) -> &StatsLedger {
        &self.ledger
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn angle(&self) -> f64 {
        self.animator.angle()
    }

    pub fn is_spinning(&self) -> bool {
        self.animator.is_spinning()
    }

    pub fn result_text(&self) -> &str {
        &self.result_text
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn can_spin(&self) -> bool {
        !self.is_spinning() && self.options.len() >= MIN_OPTIONS_TO_SPIN
    }

    pub fn can_shuffle(&self) -> bool {
        self.can_spin()
    }

    pub fn can_clear(&self) -> bool {
        !self.is_spinning() && !self.options.is_empty()
    }

    pub fn can_copy(&self) -> bool {
        self.result_text != NO_RESULT && self.result_text != SPINNING_RESULT
    }

    pub fn spin<R: UniformSource + ?Sized>(&mut self, now: f64, rng: &mut R) -> Result<SpinSession, SpinError> {
        match self.animator.spin(now, self.options.len(), rng) {
            Ok(session) => {
                self.result_text = SPINNING_RESULT.to_string();
                Ok(session)
            }
            Err(e) => {
                log::debug!("Spin ignored: {}", e);
                Err(e)
            }
        }
    }

    /// Advances the wheel. On the final tick the winner is read from the
    /// options as they are now, then tallied and persisted.
    pub fn tick(&mut self, now: f64) -> TickOutcome {
        match self.animator.tick(now) {
            SpinFrame::Idle => TickOutcome::Idle,
            SpinFrame::Moving { angle } => TickOutcome::Frame { angle },
            SpinFrame::Finished { angle } => TickOutcome::Completed(self.finish_spin(angle)),
        }
    }

    fn finish_spin(&mut self, angle: f64) -> SpinOutcome {
        let index = resolve(angle, self.options.len());
        let winner = index.and_then(|i| self.options.get(i)).map(str::to_string);

        match &winner {
            Some(label) => {
                self.ledger.record_win(label, self.options.labels());
                storage::save_stats(&mut self.store, &self.ledger);
                self.result_text = label.clone();
                log::info!("Spin completed: winner = {} ({} total spins)", label, self.ledger.total);
            }
            None => {
                self.result_text = NO_RESULT.to_string();
                log::debug!("Spin completed with no options left");
            }
        }

        SpinOutcome { index, winner, angle }
    }

    fn options_changed(&mut self) {
        storage::save_items(&mut self.store, &self.options);
        self.ledger.reconcile(self.options.labels());
    }

    pub fn add_option(&mut self, raw: &str) -> bool {
        let added = self.options.add(raw);
        if added {
            self.options_changed();
        }
        added
    }

    /// Removes one option. Its tally stays in the ledger.
    pub fn remove_option(&mut self, index: usize) -> Option<String> {
        let removed = self.options.remove(index);
        if removed.is_some() {
            self.options_changed();
        }
        removed
    }

    pub fn shuffle<R: UniformSource + ?Sized>(&mut self, rng: &mut R) -> bool {
        if !self.can_shuffle() {
            return false;
        }
        self.options.shuffle(rng);
        self.options_changed();
        true
    }

    pub fn clear_options(&mut self) -> bool {
        if !self.can_clear() {
            return false;
        }
        self.options.clear();
        self.options_changed();
        self.result_text = NO_RESULT.to_string();
        true
    }

    pub fn load_preset(&mut self, key: &str) -> bool {
        let Some(preset) = find_preset(key) else {
            return false;
        };
        self.options.replace(preset.options.iter().copied());
        self.options_changed();
        self.result_text = NO_RESULT.to_string();
        true
    }

    pub fn saved_list_names(&self) -> Vec<String> {
        self.saved_lists.keys().cloned().collect()
    }

    /// Saves the current list under `name` as typed, replacing any list of
    /// that name. Blank names are refused.
    pub fn save_list(&mut self, name: &str) -> bool {
        if name.trim().is_empty() || self.options.is_empty() {
            return false;
        }
        self.saved_lists
            .insert(name.to_string(), self.options.labels().to_vec());
        storage::save_saved_lists(&mut self.store, &self.saved_lists);
        true
    }

    pub fn load_list(&mut self, name: &str) -> bool {
        let Some(list) = self.saved_lists.get(name) else {
            return false;
        };
        self.options.replace(list.iter().cloned());
        self.options_changed();
        self.result_text = NO_RESULT.to_string();
        true
    }

    pub fn delete_list(&mut self, name: &str) -> bool {
        if self.saved_lists.remove(name).is_none() {
            return false;
        }
        storage::save_saved_lists(&mut self.store, &self.saved_lists);
        true
    }

    /// Wipes the tally. Confirmation is the caller's job.
    pub fn reset_stats(&mut self) {
        self.ledger.reset();
        storage::save_stats(&mut self.store, &self.ledger);
        self.ledger.reconcile(self.options.labels());
        log::info!("Stats reset");
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        storage::save_theme(&mut self.store, self.theme);
        self.theme
    }

    pub fn odds(&self) -> Vec<OddsRow> {
        odds_view(self.options.labels())
    }

    pub fn results(&self) -> Vec<ResultRow> {
        results_view(&self.ledger, self.options.labels())
    }

    pub fn total_spins(&self) -> u64 {
        self.ledger.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ITEMS_KEY, SAVED_LISTS_KEY, STATS_KEY, TAU};
    use crate::random::FixedSource;
    use crate::storage::MemoryStore;

    fn session_with(labels: &[&str]) -> WheelSession<MemoryStore> {
        let mut store = MemoryStore::new();
        storage::save_items(&mut store, &OptionList::from_labels(labels.iter().copied()));
        WheelSession::load(store, SpinConfig::default())
    }

    // Draws that make the wheel stop with the pointer 0.3π into the wheel frame
    // from a zero start: 3π/2 - (6 turns + jitter) ≡ 0.3π (mod 2π).
    fn draws_for_pointer(pointer: f64) -> FixedSource {
        let jitter = (1.5 * std::f64::consts::PI - pointer).rem_euclid(TAU);
        FixedSource::new(vec![0.0, 0.0, jitter / TAU])
    }

    fn run_to_end(session: &mut WheelSession<MemoryStore>) -> SpinOutcome {
        match session.tick(1.0e9) {
            TickOutcome::Completed(outcome) => outcome,
            other => panic!("expected completion, got {other:?}"),
        }
    }

    #[test]
    fn test_fresh_session_uses_defaults() {
        let session = WheelSession::load(MemoryStore::new(), SpinConfig::default());
        assert_eq!(session.options().len(), 6);
        assert_eq!(session.options().get(0), Some("Pizza"));
        assert_eq!(session.total_spins(), 0);
        assert_eq!(session.result_text(), NO_RESULT);
        assert_eq!(session.theme(), Theme::Dark);
    }

    #[test]
    fn test_corrupt_storage_falls_back() {
        let mut store = MemoryStore::new();
        store.set(ITEMS_KEY, "oops").unwrap();
        store.set(STATS_KEY, "[").unwrap();
        let session = WheelSession::load(store, SpinConfig::default());
        assert_eq!(session.options().len(), 6);
        assert_eq!(session.total_spins(), 0);
    }

    #[test]
    fn test_spin_lands_on_first_of_four() {
        let mut session = session_with(&["A", "B", "C", "D"]);
        let mut rng = draws_for_pointer(0.3 * std::f64::consts::PI);
        session.spin(0.0, &mut rng).unwrap();
        assert_eq!(session.result_text(), SPINNING_RESULT);
        assert!(!session.can_spin());

        let outcome = run_to_end(&mut session);
        assert_eq!(outcome.index, Some(0));
        assert_eq!(outcome.winner.as_deref(), Some("A"));
        assert_eq!(session.result_text(), "A");
        assert_eq!(session.ledger().count("A"), 1);
        assert_eq!(session.total_spins(), 1);
        assert!(session.can_spin());
    }

    #[test]
    fn test_completed_spin_is_persisted() {
        let mut session = session_with(&["A", "B"]);
        let mut rng = FixedSource::new(vec![0.5]);
        session.spin(0.0, &mut rng).unwrap();
        run_to_end(&mut session);

        let stored = storage::load_stats(session.store()).unwrap();
        assert_eq!(stored.total, 1);
        assert_eq!(&stored, session.ledger());
    }

    #[test]
    fn test_frames_before_completion() {
        let mut session = session_with(&["A", "B"]);
        let mut rng = FixedSource::new(vec![0.5]);
        assert_eq!(session.tick(0.0), TickOutcome::Idle);
        session.spin(0.0, &mut rng).unwrap();
        assert!(matches!(session.tick(100.0), TickOutcome::Frame { .. }));
        assert_eq!(session.total_spins(), 0);
    }

    #[test]
    fn test_spin_needs_two_options() {
        let mut session = session_with(&["Only"]);
        let mut rng = FixedSource::new(vec![0.5]);
        assert_eq!(
            session.spin(0.0, &mut rng),
            Err(SpinError::NotEnoughOptions { count: 1 })
        );
        assert_eq!(session.result_text(), NO_RESULT);
        assert_eq!(session.tick(10.0), TickOutcome::Idle);
    }

    #[test]
    fn test_second_spin_rejected_mid_flight() {
        let mut session = session_with(&["A", "B"]);
        let mut rng = FixedSource::new(vec![0.5]);
        session.spin(0.0, &mut rng).unwrap();
        assert_eq!(session.spin(5.0, &mut rng), Err(SpinError::AlreadySpinning));
    }

    #[test]
    fn test_winner_read_from_list_at_completion() {
        let mut session = session_with(&["A", "B", "C", "D"]);
        let mut rng = draws_for_pointer(0.3 * std::f64::consts::PI);
        session.spin(0.0, &mut rng).unwrap();
        session.remove_option(0);

        // three options now; pointer 0.3π still falls in segment 0
        let outcome = run_to_end(&mut session);
        assert_eq!(outcome.winner.as_deref(), Some("B"));
        assert_eq!(session.ledger().count("B"), 1);
    }

    #[test]
    fn test_list_emptied_mid_spin_records_nothing() {
        let mut session = session_with(&["A", "B"]);
        let mut rng = FixedSource::new(vec![0.5]);
        session.spin(0.0, &mut rng).unwrap();
        session.remove_option(1);
        session.remove_option(0);

        let outcome = run_to_end(&mut session);
        assert_eq!(outcome.winner, None);
        assert_eq!(session.total_spins(), 0);
        assert_eq!(session.result_text(), NO_RESULT);
    }

    #[test]
    fn test_removed_option_keeps_history() {
        let mut session = session_with(&["A", "B", "C"]);
        // pointer 0.9π of 3 segments (width 2π/3) lands on B
        let mut rng = draws_for_pointer(0.9 * std::f64::consts::PI);
        session.spin(0.0, &mut rng).unwrap();
        assert_eq!(run_to_end(&mut session).winner.as_deref(), Some("B"));

        session.remove_option(1);
        assert_eq!(session.ledger().count("B"), 1);
        let odds = session.odds();
        assert_eq!(odds.len(), 2);
        assert!(odds.iter().all(|row| row.probability == 0.5));

        session.add_option("B");
        let results = session.results();
        assert_eq!(results[0].label, "B");
        assert_eq!(results[0].count, 1);
    }

    #[test]
    fn test_shuffle_and_clear_guards() {
        let mut session = session_with(&["A", "B"]);
        let mut rng = FixedSource::new(vec![0.0]);
        session.spin(0.0, &mut rng).unwrap();
        assert!(!session.shuffle(&mut rng));
        assert!(!session.clear_options());
        run_to_end(&mut session);

        assert!(session.shuffle(&mut rng));
        assert_eq!(session.options().labels(), &["B".to_string(), "A".to_string()]);
        assert!(session.clear_options());
        assert!(session.options().is_empty());
        assert!(!session.clear_options());
        assert_eq!(storage::load_items(session.store()), Some(OptionList::new()));
    }

    #[test]
    fn test_copy_only_with_a_result() {
        let mut session = session_with(&["A", "B"]);
        assert!(!session.can_copy());
        let mut rng = FixedSource::new(vec![0.5]);
        session.spin(0.0, &mut rng).unwrap();
        assert!(!session.can_copy());
        run_to_end(&mut session);
        assert!(session.can_copy());
    }

    #[test]
    fn test_preset_replaces_list() {
        let mut session = session_with(&["A", "B"]);
        assert!(session.load_preset("chores"));
        assert_eq!(session.options().get(0), Some("Dishes"));
        assert_eq!(session.result_text(), NO_RESULT);
        assert!(!session.load_preset("unknown"));
        assert_eq!(session.options().len(), 6);
    }

    #[test]
    fn test_saved_lists_flow() {
        let mut session = session_with(&["A", "B"]);
        assert!(!session.save_list("   "));
        assert!(session.save_list("Lunch"));
        session.load_preset("food");
        assert!(session.save_list("Dinner"));
        assert_eq!(session.saved_list_names(), vec!["Dinner", "Lunch"]);

        assert!(session.load_list("Lunch"));
        assert_eq!(session.options().labels(), &["A".to_string(), "B".to_string()]);
        assert!(!session.load_list("Brunch"));

        assert!(session.delete_list("Dinner"));
        assert!(!session.delete_list("Dinner"));
        assert_eq!(session.saved_list_names(), vec!["Lunch"]);
    }

    #[test]
    fn test_empty_list_cannot_be_saved() {
        let mut session = session_with(&[]);
        assert!(!session.save_list("Nothing"));
        assert!(session.saved_list_names().is_empty());
    }

    #[test]
    fn test_reset_stats() {
        let mut session = session_with(&["A", "B"]);
        let mut rng = FixedSource::new(vec![0.5]);
        session.spin(0.0, &mut rng).unwrap();
        run_to_end(&mut session);
        session.reset_stats();
        assert_eq!(session.total_spins(), 0);
        assert!(session.results().iter().all(|row| row.count == 0));
        assert_eq!(storage::load_stats(session.store()), Some(StatsLedger::new()));
    }

    #[test]
    fn test_theme_toggle_persists() {
        let mut session = session_with(&["A"]);
        assert_eq!(session.toggle_theme(), Theme::Light);
        assert_eq!(storage::load_theme(session.store()), Theme::Light);
        assert_eq!(session.toggle_theme(), Theme::Dark);
    }

    #[test]
    fn test_saved_lists_restored_on_load() {
        let mut store = MemoryStore::new();
        store
            .set(SAVED_LISTS_KEY, r#"{"Lunch":["A","B"],"Chores":["C","D"]}"#)
            .unwrap();
        let mut session = WheelSession::load(store, SpinConfig::default());
        assert_eq!(session.saved_list_names(), vec!["Chores", "Lunch"]);
        assert!(session.load_list("Chores"));
        assert_eq!(session.options().get(0), Some("C"));

        assert!(session.delete_list("Lunch"));
        let stored = storage::load_saved_lists(session.store());
        assert_eq!(stored.keys().collect::<Vec<_>>(), vec!["Chores"]);
    }

    #[test]
    fn test_list_name_kept_as_typed() {
        let mut session = session_with(&["A", "B"]);
        assert!(session.save_list("  Lunch Ideas "));
        assert_eq!(session.saved_list_names(), vec!["  Lunch Ideas "]);
        assert!(storage::load_saved_lists(session.store()).contains_key("  Lunch Ideas "));
        assert!(!session.load_list("Lunch Ideas"));
        assert!(session.load_list("  Lunch Ideas "));
    }
}
