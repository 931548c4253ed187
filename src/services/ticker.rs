// ============================================================================
// TICKER - Fuente de ticks periódicos del cronómetro
// ============================================================================
// En el navegador usa gloo_timers::Interval. Soltar el `TickHandle`
// cancela el intervalo (clearInterval), así que quien guarda el handle
// controla cuántas fuentes de ticks hay activas.
// ============================================================================

use std::any::Any;
use gloo_timers::callback::Interval;

/// Handle de una fuente de ticks registrada; al soltarlo se cancela
pub struct TickHandle {
    _source: Box<dyn Any>,
}

impl TickHandle {
    pub fn new<T: Any>(source: T) -> Self {
        Self {
            _source: Box::new(source),
        }
    }
}

/// Registra callbacks periódicos
pub trait Ticker {
    fn start(&self, interval_ms: u32, on_tick: Box<dyn FnMut()>) -> TickHandle;
}

/// Ticker del navegador (setInterval)
pub struct IntervalTicker;

impl Ticker for IntervalTicker {
    fn start(&self, interval_ms: u32, mut on_tick: Box<dyn FnMut()>) -> TickHandle {
        log::debug!("⏰ [TICKER] Intervalo registrado ({} ms)", interval_ms);
        TickHandle::new(Interval::new(interval_ms, move || on_tick()))
    }
}
