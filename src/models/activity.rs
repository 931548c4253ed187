// ============================================================================
// ACTIVITY - Actividad con tiempo acumulado
// ============================================================================

use serde::{Deserialize, Deserializer, Serialize};
use serde::de::Error as _;

/// Actividad registrada por el usuario.
/// El nombre actúa como identificador (único, nunca se renombra).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub name: String,
    /// Segundos acumulados
    #[serde(deserialize_with = "lenient_seconds")]
    pub total_time: u64,
    /// Reservado: siempre vacío, pero se conserva tal cual al releer
    #[serde(default)]
    pub logs: Vec<serde_json::Value>,
}

impl Activity {
    /// Crear actividad nueva con tiempo 0
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total_time: 0,
            logs: Vec::new(),
        }
    }

    /// Sumar segundos al total (nunca decrece)
    pub fn add_time(&mut self, seconds: u64) {
        self.total_time = self.total_time.saturating_add(seconds);
    }
}

/// Versiones anteriores de la app guardaban fracciones (p.ej. 1.5) o null.
/// Se truncan a segundos enteros; negativos y null => 0.
fn lenient_seconds<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(0),
        serde_json::Value::Number(number) => {
            if let Some(seconds) = number.as_u64() {
                return Ok(seconds);
            }
            Ok(match number.as_f64() {
                Some(value) if value.is_finite() && value >= u64::MAX as f64 => u64::MAX,
                Some(value) if value.is_finite() && value > 0.0 => value.trunc() as u64,
                _ => 0,
            })
        }
        other => Err(D::Error::custom(format!("totalTime inválido: {}", other))),
    }
}

/// Buscar actividad por nombre exacto
fn find_activity<'a>(activities: &'a [Activity], name: &str) -> Option<&'a Activity> {
    activities.iter().find(|a| a.name == name)
}

/// ¿Existe ya una actividad con ese nombre?
pub fn contains_activity(activities: &[Activity], name: &str) -> bool {
    find_activity(activities, name).is_some()
}
