// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================
// Envuelve el TrackerViewModel en Rc<RefCell>, registra/cancela la fuente
// de ticks según el estado del cronómetro y avisa a los subscribers qué
// tipo de actualización del DOM hace falta.
// ============================================================================

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use crate::config::AppConfig;
use crate::models::Activity;
use crate::services::{KeyValueStore, TickHandle, Ticker};
use crate::viewmodels::{TrackerViewModel, ViewState};

/// Tipo de actualización del DOM
#[derive(Clone, Debug, PartialEq)]
pub enum UpdateType {
    /// Actualización incremental (solo elementos específicos)
    Incremental(IncrementalUpdate),
    /// Re-render completo
    FullRender,
}

/// Tipo de actualización incremental específica
#[derive(Clone, Debug, PartialEq)]
pub enum IncrementalUpdate {
    /// Texto "N seconds" del cronómetro
    Timer,
}

type Subscriber = Rc<dyn Fn(UpdateType)>;
type Subscribers = RefCell<Vec<Subscriber>>;

/// Copia del estado para renderizar sin mantener borrows abiertos
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerSnapshot {
    pub activities: Vec<Activity>,
    pub view: ViewState,
    pub new_activity_name: String,
    pub manual_time: i64,
}

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub tracker: Rc<RefCell<TrackerViewModel>>,

    // Fuente de ticks: como máximo una registrada a la vez
    ticker: Rc<dyn Ticker>,
    tick_handle: Rc<RefCell<Option<TickHandle>>>,
    tick_interval_ms: u32,

    // Reactivity: callbacks para notificar cambios
    change_subscribers: Rc<Subscribers>,
}

impl AppState {
    /// Crear nuevo estado de aplicación
    pub fn new(store: Rc<dyn KeyValueStore>, ticker: Rc<dyn Ticker>, config: &AppConfig) -> Self {
        let tracker = TrackerViewModel::new(store, &config.storage_key, config.selection_policy);

        Self {
            tracker: Rc::new(RefCell::new(tracker)),
            ticker,
            tick_handle: Rc::new(RefCell::new(None)),
            tick_interval_ms: config.tick_interval_ms,
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Copia de lo necesario para renderizar
    pub fn snapshot(&self) -> TrackerSnapshot {
        let tracker = self.tracker.borrow();
        TrackerSnapshot {
            activities: tracker.activities().to_vec(),
            view: tracker.view_state(),
            new_activity_name: tracker.session().new_activity_name.clone(),
            manual_time: tracker.session().manual_time,
        }
    }

    pub fn elapsed(&self) -> u64 {
        self.tracker.borrow().session().elapsed
    }

    /// Input de nueva actividad (sin re-render para no perder el foco)
    pub fn set_new_activity_name(&self, name: &str) {
        self.tracker.borrow_mut().set_new_activity_name(name);
    }

    /// Input de tiempo manual (sin re-render para no perder el foco)
    pub fn set_manual_time_input(&self, raw: &str) {
        self.tracker.borrow_mut().set_manual_time_input(raw);
    }

    /// Botón "Add Activity"
    pub fn add_activity(&self) {
        self.tracker.borrow_mut().submit_new_activity();
        self.after_change();
    }

    /// Click en una actividad de la lista
    pub fn select_activity(&self, name: &str) {
        self.tracker.borrow_mut().select_activity(name);
        self.after_change();
    }

    /// Botón "Start Timer" / "Pause Timer"
    pub fn toggle_running(&self) {
        self.tracker.borrow_mut().toggle_running();
        self.after_change();
    }

    /// Botón "Stop Timer"
    pub fn stop_timer(&self) {
        self.tracker.borrow_mut().stop_timer();
        self.after_change();
    }

    /// Botón "Add Time"
    pub fn add_manual_time(&self) {
        self.tracker.borrow_mut().submit_manual_time();
        self.after_change();
    }

    /// Cancelar la fuente de ticks (desmontaje de la vista)
    pub fn teardown(&self) {
        if self.tick_handle.borrow_mut().take().is_some() {
            log::info!("🧹 [APP-STATE] Intervalo cancelado en teardown");
        }
    }

    /// ¿Hay una fuente de ticks registrada?
    pub fn is_ticker_active(&self) -> bool {
        self.tick_handle.borrow().is_some()
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn(UpdateType) + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers con tipo específico
    pub fn notify_subscribers_with_type(&self, update_type: UpdateType) {
        notify(&self.change_subscribers, update_type);
    }

    fn after_change(&self) {
        self.sync_ticker();
        self.notify_subscribers_with_type(UpdateType::FullRender);
    }

    /// Registrar o cancelar el intervalo según el estado del cronómetro
    fn sync_ticker(&self) {
        let ticking = self.tracker.borrow().session().is_ticking();
        let mut handle = self.tick_handle.borrow_mut();

        match (ticking, handle.is_some()) {
            (true, false) => {
                let on_tick = tick_callback(
                    Rc::downgrade(&self.tracker),
                    Rc::downgrade(&self.change_subscribers),
                );
                *handle = Some(self.ticker.start(self.tick_interval_ms, on_tick));
                log::debug!("⏰ [APP-STATE] Fuente de ticks registrada");
            }
            (false, true) => {
                handle.take();
                log::debug!("⏰ [APP-STATE] Fuente de ticks cancelada");
            }
            _ => {}
        }
    }
}

/// Callback del intervalo: solo referencias débiles al estado
fn tick_callback(
    tracker: Weak<RefCell<TrackerViewModel>>,
    subscribers: Weak<Subscribers>,
) -> Box<dyn FnMut()> {
    Box::new(move || {
        let Some(tracker) = tracker.upgrade() else {
            return;
        };
        let advanced = tracker.borrow_mut().tick();
        if advanced {
            if let Some(subscribers) = subscribers.upgrade() {
                notify(&subscribers, UpdateType::Incremental(IncrementalUpdate::Timer));
            }
        }
    })
}

fn notify(subscribers: &Subscribers, update_type: UpdateType) {
    // Clonar antes de llamar: un callback puede suscribir a otro
    let callbacks: Vec<Subscriber> = subscribers.borrow().clone();
    for callback in callbacks {
        callback(update_type.clone());
    }
}
