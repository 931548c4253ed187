// ============================================================================
// SESSION STATE - Estado transitorio del tracker (no se persiste)
// ============================================================================

/// Selección, cronómetro y buffers de entrada
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub selected: Option<String>,
    /// Segundos del cronómetro en curso
    pub elapsed: u64,
    pub running: bool,
    /// Texto pendiente del input "nueva actividad"
    pub new_activity_name: String,
    /// Valor pendiente del input de tiempo manual
    pub manual_time: i64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// El cronómetro solo avanza corriendo y con selección
    pub fn is_ticking(&self) -> bool {
        self.running && self.selected.is_some()
    }

    /// Parar y poner el contador a cero
    pub fn reset_timer(&mut self) {
        self.elapsed = 0;
        self.running = false;
    }
}
