// ============================================================================
// TRACKER VIEWMODEL - Lógica del tracker de actividades
// ============================================================================
// Máquina de estados del cronómetro + lista persistida.
// No toca el DOM ni timers: la vista llama operaciones y relee el estado.
// ============================================================================

use std::rc::Rc;
use crate::config::SelectionPolicy;
use crate::models::{Activity, contains_activity};
use crate::services::KeyValueStore;
use crate::state::{PersistedState, SessionState};
use crate::utils::parse_manual_time;

/// Estado visible del panel de seguimiento
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// Sin actividad seleccionada: no se muestra el panel
    Idle,
    Paused { activity: String, elapsed: u64 },
    Running { activity: String, elapsed: u64 },
}

pub struct TrackerViewModel {
    activities: PersistedState<Vec<Activity>>,
    session: SessionState,
    policy: SelectionPolicy,
}

impl TrackerViewModel {
    /// Cargar la lista desde `store` bajo `key` (vacía si no hay nada válido)
    pub fn new(store: Rc<dyn KeyValueStore>, key: &str, policy: SelectionPolicy) -> Self {
        let activities = PersistedState::new(key, Vec::new(), store);
        log::info!("📋 [TRACKER] {} actividades cargadas", activities.value().len());
        Self {
            activities,
            session: SessionState::new(),
            policy,
        }
    }

    pub fn activities(&self) -> &[Activity] {
        self.activities.value()
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn view_state(&self) -> ViewState {
        match &self.session.selected {
            None => ViewState::Idle,
            Some(name) if self.session.running => ViewState::Running {
                activity: name.clone(),
                elapsed: self.session.elapsed,
            },
            Some(name) => ViewState::Paused {
                activity: name.clone(),
                elapsed: self.session.elapsed,
            },
        }
    }

    pub fn set_new_activity_name(&mut self, name: &str) {
        self.session.new_activity_name = name.to_string();
    }

    /// Texto crudo del input numérico, validado aquí
    pub fn set_manual_time_input(&mut self, raw: &str) {
        self.session.manual_time = parse_manual_time(raw);
    }

    /// Agregar la actividad escrita en el input
    pub fn submit_new_activity(&mut self) -> bool {
        let name = self.session.new_activity_name.clone();
        self.add_activity(&name)
    }

    /// Agregar actividad; nombre vacío o duplicado => no-op
    pub fn add_activity(&mut self, name: &str) -> bool {
        if name.is_empty() || contains_activity(self.activities.value(), name) {
            log::debug!("🚫 [TRACKER] Actividad ignorada (vacía o duplicada): '{}'", name);
            return false;
        }

        let activity = Activity::new(name);
        if let Err(e) = self.activities.update(|list| list.push(activity)) {
            log::error!("❌ [TRACKER] Error guardando actividades: {}", e);
        }
        self.session.new_activity_name.clear();
        log::info!("➕ [TRACKER] Actividad agregada: '{}'", name);
        true
    }

    pub fn select_activity(&mut self, name: &str) {
        // Solo cuenta como cambio si ya había otra actividad seleccionada
        let switched = matches!(self.session.selected.as_deref(), Some(current) if current != name);
        if switched && self.policy == SelectionPolicy::ResetTimer {
            self.session.reset_timer();
        }
        self.session.selected = Some(name.to_string());
        log::info!("👉 [TRACKER] Actividad seleccionada: '{}'", name);
    }

    /// Start/Pause. Devuelve el nuevo valor de `running`
    pub fn toggle_running(&mut self) -> bool {
        self.session.running = !self.session.running;
        log::info!(
            "{} [TRACKER] Cronómetro {}",
            if self.session.running { "▶️" } else { "⏸️" },
            if self.session.running { "en marcha" } else { "en pausa" }
        );
        self.session.running
    }

    /// Un tick del intervalo: +1 solo si corre con selección
    pub fn tick(&mut self) -> bool {
        if !self.session.is_ticking() {
            return false;
        }
        self.session.elapsed = self.session.elapsed.saturating_add(1);
        true
    }

    /// Acreditar el cronómetro a la selección y resetearlo.
    /// Devuelve los segundos acreditados.
    pub fn stop_timer(&mut self) -> u64 {
        let elapsed = self.session.elapsed;
        let credited = match self.session.selected.clone() {
            Some(name) => {
                self.credit(&name, elapsed);
                elapsed
            }
            None => 0,
        };
        self.session.reset_timer();
        log::info!("⏹️ [TRACKER] Cronómetro parado, {} s acreditados", credited);
        credited
    }

    /// Agregar el valor del input de tiempo manual
    pub fn submit_manual_time(&mut self) -> bool {
        let amount = self.session.manual_time;
        self.add_manual_time(amount)
    }

    /// Sumar `amount` segundos a la selección si es positivo.
    /// El buffer del input vuelve a 0 siempre.
    pub fn add_manual_time(&mut self, amount: i64) -> bool {
        let selected = self.session.selected.clone();
        let added = match (selected, u64::try_from(amount)) {
            (Some(name), Ok(seconds)) if seconds > 0 => {
                self.credit(&name, seconds);
                log::info!("⏱️ [TRACKER] {} s agregados manualmente a '{}'", seconds, name);
                true
            }
            _ => false,
        };
        self.session.manual_time = 0;
        added
    }

    fn credit(&mut self, name: &str, seconds: u64) {
        let result = self.activities.update(|list| {
            if let Some(activity) = list.iter_mut().find(|a| a.name == name) {
                activity.add_time(seconds);
            }
        });
        if let Err(e) = result {
            log::error!("❌ [TRACKER] Error guardando actividades: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use crate::services::{MemoryStore, StorageError};

    const KEY: &str = "activities";

    /// MemoryStore que cuenta escrituras
    #[derive(Default)]
    struct CountingStore {
        inner: MemoryStore,
        writes: Cell<usize>,
    }

    impl KeyValueStore for CountingStore {
        fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.read(key)
        }

        fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.writes.set(self.writes.get() + 1);
            self.inner.write(key, value)
        }
    }

    fn counting_tracker() -> (TrackerViewModel, Rc<CountingStore>) {
        let store = Rc::new(CountingStore::default());
        (TrackerViewModel::new(store.clone(), KEY, SelectionPolicy::KeepTimer), store)
    }

    fn tracker() -> (TrackerViewModel, Rc<MemoryStore>) {
        let store = Rc::new(MemoryStore::new());
        (TrackerViewModel::new(store.clone(), KEY, SelectionPolicy::KeepTimer), store)
    }

    fn total(vm: &TrackerViewModel, name: &str) -> u64 {
        vm.activities().iter().find(|a| a.name == name).map(|a| a.total_time).unwrap()
    }

    #[test]
    fn add_activity_appends_and_persists() {
        let (mut vm, store) = tracker();
        assert!(vm.add_activity("Reading"));
        assert_eq!(vm.activities(), &[Activity::new("Reading")]);
        assert_eq!(
            store.raw(KEY).as_deref(),
            Some(r#"[{"name":"Reading","totalTime":0,"logs":[]}]"#)
        );
    }

    #[test]
    fn duplicate_name_is_ignored() {
        let (mut vm, _) = tracker();
        assert!(vm.add_activity("X"));
        assert!(!vm.add_activity("X"));
        assert_eq!(vm.activities().len(), 1);
    }

    #[test]
    fn empty_name_is_ignored() {
        let (mut vm, store) = tracker();
        assert!(!vm.add_activity(""));
        assert!(vm.activities().is_empty());
        assert!(store.raw(KEY).is_none());
    }

    #[test]
    fn submit_clears_buffer_only_on_success() {
        let (mut vm, _) = tracker();
        vm.set_new_activity_name("Cooking");
        assert!(vm.submit_new_activity());
        assert_eq!(vm.session().new_activity_name, "");

        vm.set_new_activity_name("Cooking");
        assert!(!vm.submit_new_activity());
        assert_eq!(vm.session().new_activity_name, "Cooking");
    }

    #[test]
    fn insertion_order_is_display_order() {
        let (mut vm, _) = tracker();
        for name in ["c", "a", "b"] {
            vm.add_activity(name);
        }
        let names: Vec<&str> = vm.activities().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn reading_scenario_credits_five_seconds() {
        let (mut vm, store) = tracker();
        vm.add_activity("Reading");
        vm.select_activity("Reading");
        assert!(vm.toggle_running());
        for _ in 0..5 {
            assert!(vm.tick());
        }
        assert_eq!(vm.stop_timer(), 5);

        assert_eq!(total(&vm, "Reading"), 5);
        assert_eq!(vm.session().elapsed, 0);
        assert!(!vm.session().running);

        let reloaded = TrackerViewModel::new(store, KEY, SelectionPolicy::KeepTimer);
        assert_eq!(total(&reloaded, "Reading"), 5);
    }

    #[test]
    fn stop_without_selection_only_resets() {
        let (mut vm, _) = tracker();
        vm.add_activity("A");
        vm.toggle_running();
        assert!(!vm.tick());
        assert_eq!(vm.stop_timer(), 0);
        assert_eq!(vm.activities(), &[Activity::new("A")]);
        assert_eq!(vm.session().elapsed, 0);
        assert!(!vm.session().running);
    }

    #[test]
    fn ticks_are_inert_while_paused() {
        let (mut vm, _) = tracker();
        vm.add_activity("A");
        vm.select_activity("A");
        vm.toggle_running();
        vm.tick();
        vm.toggle_running();
        assert!(!vm.tick());
        assert_eq!(vm.session().elapsed, 1);
        assert_eq!(vm.view_state(), ViewState::Paused { activity: "A".into(), elapsed: 1 });
    }

    #[test]
    fn switching_selection_keeps_timer_by_default() {
        let (mut vm, _) = tracker();
        vm.add_activity("A");
        vm.add_activity("B");
        vm.select_activity("A");
        vm.toggle_running();
        vm.tick();
        vm.tick();
        vm.select_activity("B");
        vm.tick();
        assert!(vm.session().running);
        vm.stop_timer();
        assert_eq!(total(&vm, "A"), 0);
        assert_eq!(total(&vm, "B"), 3);
    }

    #[test]
    fn reset_policy_clears_timer_on_switch() {
        let store = Rc::new(MemoryStore::new());
        let mut vm = TrackerViewModel::new(store, KEY, SelectionPolicy::ResetTimer);
        vm.add_activity("A");
        vm.add_activity("B");
        vm.select_activity("A");
        vm.toggle_running();
        vm.tick();
        vm.select_activity("A");
        assert_eq!(vm.session().elapsed, 1);
        vm.select_activity("B");
        assert_eq!(vm.session().elapsed, 0);
        assert!(!vm.session().running);
        vm.stop_timer();
        assert_eq!(total(&vm, "A"), 0);
        assert_eq!(total(&vm, "B"), 0);
    }

    #[test]
    fn manual_time_requires_positive_amount() {
        let (mut vm, _) = tracker();
        vm.add_activity("A");
        vm.add_activity("B");
        vm.select_activity("A");

        assert!(!vm.add_manual_time(0));
        assert!(!vm.add_manual_time(-10));
        assert_eq!(total(&vm, "A"), 0);

        assert!(vm.add_manual_time(30));
        assert_eq!(total(&vm, "A"), 30);
        assert_eq!(total(&vm, "B"), 0);
    }

    #[test]
    fn manual_time_without_selection_is_ignored() {
        let (mut vm, _) = tracker();
        vm.add_activity("A");
        vm.set_manual_time_input("25");
        assert!(!vm.submit_manual_time());
        assert_eq!(total(&vm, "A"), 0);
        assert_eq!(vm.session().manual_time, 0);
    }

    #[test]
    fn manual_time_input_is_clamped() {
        let (mut vm, _) = tracker();
        vm.add_activity("A");
        vm.select_activity("A");
        vm.set_manual_time_input("-5");
        assert_eq!(vm.session().manual_time, 0);
        vm.set_manual_time_input("12.7");
        assert!(vm.submit_manual_time());
        assert_eq!(total(&vm, "A"), 12);
        assert_eq!(vm.session().manual_time, 0);
    }

    #[test]
    fn totals_never_decrease() {
        let (mut vm, _) = tracker();
        vm.add_activity("A");
        vm.select_activity("A");
        let mut last = 0;
        for step in 0..20i64 {
            match step % 4 {
                0 => { vm.toggle_running(); }
                1 => { vm.tick(); }
                2 => { vm.add_manual_time(step - 10); }
                _ => { vm.stop_timer(); }
            }
            let now = total(&vm, "A");
            assert!(now >= last);
            last = now;
        }
    }

    #[test]
    fn view_state_follows_selection_and_running() {
        let (mut vm, _) = tracker();
        assert_eq!(vm.view_state(), ViewState::Idle);
        vm.add_activity("A");
        vm.select_activity("A");
        assert_eq!(vm.view_state(), ViewState::Paused { activity: "A".into(), elapsed: 0 });
        vm.toggle_running();
        vm.tick();
        assert_eq!(vm.view_state(), ViewState::Running { activity: "A".into(), elapsed: 1 });
    }

    #[test]
    fn accepted_mutations_write_exactly_once() {
        let (mut vm, store) = counting_tracker();
        assert_eq!(store.writes.get(), 0);

        vm.add_activity("A");
        assert_eq!(store.writes.get(), 1);

        vm.select_activity("A");
        vm.toggle_running();
        vm.tick();
        vm.tick();
        assert_eq!(store.writes.get(), 1);

        vm.stop_timer();
        assert_eq!(store.writes.get(), 2);

        vm.add_manual_time(15);
        assert_eq!(store.writes.get(), 3);
        assert_eq!(total(&vm, "A"), 17);
    }

    #[test]
    fn rejected_operations_never_write() {
        let (mut vm, store) = counting_tracker();
        vm.add_activity("A");
        let baseline = store.writes.get();

        vm.add_activity("A");
        vm.add_activity("");
        vm.stop_timer();
        vm.add_manual_time(10);
        vm.select_activity("A");
        vm.add_manual_time(0);
        vm.add_manual_time(-5);
        vm.set_new_activity_name("B");
        vm.set_manual_time_input("20");
        vm.toggle_running();

        assert_eq!(store.writes.get(), baseline);
    }

    #[test]
    fn legacy_fractional_totals_survive_reload_and_add() {
        let store = Rc::new(MemoryStore::with_entry(
            KEY,
            r#"[{"name":"Reading","totalTime":300,"logs":[]},{"name":"Gym","totalTime":1.5,"logs":[]}]"#,
        ));
        let mut vm = TrackerViewModel::new(store.clone(), KEY, SelectionPolicy::KeepTimer);
        assert_eq!(vm.activities().len(), 2);
        assert_eq!(total(&vm, "Reading"), 300);
        assert_eq!(total(&vm, "Gym"), 1);

        vm.add_activity("New");
        let reloaded = TrackerViewModel::new(store, KEY, SelectionPolicy::KeepTimer);
        let names: Vec<&str> = reloaded.activities().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Reading", "Gym", "New"]);
        assert_eq!(total(&reloaded, "Reading"), 300);
    }

    #[test]
    fn reset_policy_keeps_timer_on_first_selection() {
        let store = Rc::new(MemoryStore::new());
        let mut vm = TrackerViewModel::new(store, KEY, SelectionPolicy::ResetTimer);
        vm.add_activity("A");
        vm.toggle_running();
        vm.select_activity("A");
        assert!(vm.session().running);
        assert!(vm.tick());
        assert_eq!(vm.session().elapsed, 1);
    }

    #[test]
    fn corrupted_storage_starts_empty() {
        let store = Rc::new(MemoryStore::with_entry(KEY, "[{\"name\":"));
        let mut vm = TrackerViewModel::new(store.clone(), KEY, SelectionPolicy::KeepTimer);
        assert!(vm.activities().is_empty());
        vm.add_activity("Fresh");
        assert!(store.raw(KEY).unwrap().contains("Fresh"));
    }

    #[test]
    fn write_failures_leave_state_usable() {
        struct QuotaExceeded;
        impl KeyValueStore for QuotaExceeded {
            fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
                Ok(None)
            }
            fn write(&self, key: &str, _value: &str) -> Result<(), StorageError> {
                Err(StorageError::Write(key.to_string()))
            }
        }

        let mut vm = TrackerViewModel::new(Rc::new(QuotaExceeded), KEY, SelectionPolicy::KeepTimer);
        assert!(vm.add_activity("A"));
        vm.select_activity("A");
        assert!(vm.add_manual_time(4));
        assert_eq!(total(&vm, "A"), 4);
    }
}
